use super::{Article, RecordId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Author {
    pub id: RecordId,
    pub full_name: String,
}

/// One citation edge between two articles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferencePair {
    pub referring: Article,
    pub referred: Article,
}

/// An author who both cites and is cited by the author being inspected.
///
/// `references` point from the inspected author's articles to this
/// author's; `backreferences` point the other way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coreferrer {
    pub author: Author,
    #[serde(default)]
    pub references: Vec<ReferencePair>,
    #[serde(default)]
    pub backreferences: Vec<ReferencePair>,
}

impl Coreferrer {
    /// Strength of the mutual citation relationship.
    pub fn weight(&self) -> usize {
        let refs = self.references.len();
        let backrefs = self.backreferences.len();
        (refs + backrefs) * refs * backrefs
    }
}
