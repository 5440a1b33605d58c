//! Sample API records in wire format.
//!
//! Field sets follow the backend serializers, so anything built here also
//! exercises the record decoders.

use serde_json::{json, Value};

pub fn article(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "identifier": format!("doi:10.1000/{}", id),
        "title": title,
        "location": format!("https://example.org/articles/{}", id),
        "abstract": format!("Abstract of {}", title),
        "issue_date": "2016-03-01",
        "publication": 1,
    })
}

pub fn article_result(id: i64, title: &str, score: f64) -> Value {
    let mut value = article(id, title);
    value["score"] = json!(score);
    value
}

pub fn journal_result(id: i64, name: &str, score: f64) -> Value {
    json!({
        "id": id,
        "identifier": format!("{:04}-{:04}", id, id),
        "name": name,
        "location": "",
        "is_journal": true,
        "aim_and_scope": format!("{} publishes original research.", name),
        "score": score,
    })
}

pub fn publication(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "identifier": format!("{:04}-{:04}", id, id),
        "location": "",
        "aim_and_scope": "",
    })
}

/// `kind` is the wire code: "0" impact factor, "1" MNiSW points, "2" eigenfactor.
pub fn ranking(kind: &str, value: &str, date: &str) -> Value {
    json!({ "type": kind, "value": value, "date": date })
}

pub fn author(id: i64, full_name: &str) -> Value {
    json!({ "id": id, "full_name": full_name })
}

pub fn keyword(id: i64, text: &str) -> Value {
    json!({ "id": id, "keyword": text })
}

/// Co-referrer with `references` outgoing and `backreferences` incoming
/// citation pairs.
pub fn coreferrer(author_id: i64, full_name: &str, references: usize, backreferences: usize) -> Value {
    let pair = |n: usize| {
        json!({
            "referring": article(n as i64, "Referring"),
            "referred": article(n as i64 + 1000, "Referred"),
        })
    };
    json!({
        "author": author(author_id, full_name),
        "references": (0..references).map(pair).collect::<Vec<_>>(),
        "backreferences": (0..backreferences).map(pair).collect::<Vec<_>>(),
    })
}

/// Sparse graph series; `None` values serialize as `null`.
pub fn graph_data(points: &[(&str, Option<f64>)]) -> Value {
    let map: serde_json::Map<String, Value> = points
        .iter()
        .map(|(label, value)| (label.to_string(), json!(value)))
        .collect();
    Value::Object(map)
}

/// `count` article results with descending scores, ids starting at 1.
pub fn article_results(count: usize) -> Vec<Value> {
    (1..=count)
        .map(|n| article_result(n as i64, &format!("Article {}", n), 1.0 / n as f64))
        .collect()
}

pub fn journal_results(count: usize) -> Vec<Value> {
    (1..=count)
        .map(|n| journal_result(n as i64, &format!("Journal {}", n), 1.0 / n as f64))
        .collect()
}

pub fn authors(count: usize) -> Vec<Value> {
    (1..=count)
        .map(|n| author(n as i64, &format!("Author {}", n)))
        .collect()
}
