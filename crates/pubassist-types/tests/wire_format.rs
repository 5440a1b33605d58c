use pubassist_types::{
    ArticleResult, ContentRange, Coreferrer, ItemRange, JournalResult, RankingType, Ranking,
    SparseSeries,
};

#[test]
fn test_article_result_flattens_article_fields() {
    let json = r#"{
        "id": 7,
        "identifier": "10.1000/xyz",
        "title": "On Ranges",
        "location": "http://example.org/7",
        "abstract": "We study ranges.",
        "issue_date": "2015-03-01",
        "publication": 3,
        "score": 0.75
    }"#;

    let result: ArticleResult = serde_json::from_str(json).unwrap();
    assert_eq!(result.article.id, 7);
    assert_eq!(result.article.abstract_text, "We study ranges.");
    assert_eq!(result.article.publication, Some(3));
    assert_eq!(
        result.article.issue_date.map(|d| d.to_string()),
        Some("2015-03-01".to_string())
    );
    assert_eq!(result.score, 0.75);
}

#[test]
fn test_article_without_date_or_publication() {
    let json = r#"{"id": 1, "identifier": "a", "title": "t", "location": "",
                   "abstract": "", "issue_date": null, "publication": null, "score": 1.0}"#;
    let result: ArticleResult = serde_json::from_str(json).unwrap();
    assert!(result.article.issue_date.is_none());
    assert!(result.article.publication.is_none());
}

#[test]
fn test_journal_result() {
    let json = r#"{"id": 3, "identifier": "1234-5678", "name": "Journal of Tests",
                   "location": "", "is_journal": true, "aim_and_scope": "", "score": 2.5}"#;
    let journal: JournalResult = serde_json::from_str(json).unwrap();
    assert!(journal.is_journal);
    assert_eq!(journal.name, "Journal of Tests");
}

#[test]
fn test_coreferrer_weight() {
    let article = |id: i64| {
        serde_json::json!({"id": id, "identifier": format!("a{}", id), "title": "t",
                           "location": "", "abstract": "", "issue_date": null, "publication": null})
    };
    let pair = |a: i64, b: i64| serde_json::json!({"referring": article(a), "referred": article(b)});
    let json = serde_json::json!({
        "author": {"id": 9, "full_name": "Ada Lovelace"},
        "references": [pair(1, 2), pair(3, 4)],
        "backreferences": [pair(5, 1)]
    });

    let coreferrer: Coreferrer = serde_json::from_value(json).unwrap();
    assert_eq!(coreferrer.author.full_name, "Ada Lovelace");
    // (2 + 1) * 2 * 1
    assert_eq!(coreferrer.weight(), 6);
}

#[test]
fn test_rankings_list() {
    let json = r#"[
        {"type": "0", "value": "1.50000", "date": "2016-01-01"},
        {"type": "1", "value": "25.00000", "date": "2016-01-01"}
    ]"#;
    let rankings: Vec<Ranking> = serde_json::from_str(json).unwrap();
    assert_eq!(rankings[1].kind, RankingType::MniswPoints);
    assert_eq!(rankings[1].value, Some(25.0));
}

#[test]
fn test_sparse_series_keeps_null_entries() {
    let series: SparseSeries = serde_json::from_str(r#"{"2014": 3, "2015": 8, "null": 2}"#).unwrap();
    assert_eq!(series.len(), 3);
    assert_eq!(series.get("2015"), Some(&Some(8.0)));
    assert_eq!(series.get("null"), Some(&Some(2.0)));
}

#[test]
fn test_range_header_formats() {
    let range: ItemRange = "items=20-39".parse().unwrap();
    assert_eq!(range, ItemRange { start: 20, end: 39 });

    let content: ContentRange = "items 20-39/95".parse().unwrap();
    assert_eq!(content, ContentRange::items(20, 39, Some(95)));
    assert_eq!(content.to_string(), "items 20-39/95");
}

#[test]
fn test_content_range_accepts_inverted_span() {
    let content: ContentRange = "items 40-11/10".parse().unwrap();
    assert_eq!(content, ContentRange::items(40, 11, Some(10)));
}

#[test]
fn test_content_range_rejects_garbage() {
    assert!("items 20-39".parse::<ContentRange>().is_err());
    assert!("items a-b/10".parse::<ContentRange>().is_err());
    assert!("items 40-39/x".parse::<ContentRange>().is_err());
    assert!("".parse::<ContentRange>().is_err());
}
