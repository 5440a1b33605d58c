use super::RecordId;
use serde::{Deserialize, Serialize};

/// A journal or a conference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    /// ISSN, or an MD5 of the name when the ISSN is missing
    pub identifier: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub aim_and_scope: String,
}

/// Journal suggested for a submitted article text, with its relevance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalResult {
    pub id: RecordId,
    pub identifier: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub is_journal: bool,
    #[serde(default)]
    pub aim_and_scope: String,
    pub score: f64,
}
