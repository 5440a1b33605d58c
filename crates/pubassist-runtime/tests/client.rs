use pubassist_runtime::{ApiClient, ArticleSort, Endpoints, Error, Method};
use pubassist_testing::{fixtures, FakeTransport};
use pubassist_types::ItemRange;
use serde_json::json;

fn client(fake: &FakeTransport) -> ApiClient<FakeTransport> {
    ApiClient::new(fake.clone(), Endpoints::default())
}

#[tokio::test]
async fn test_search_articles_posts_text_with_range() {
    let endpoints = Endpoints::default();
    let fake = FakeTransport::new().with_list(&endpoints.search_articles, fixtures::article_results(30));

    let page = client(&fake)
        .search_articles("graph neural networks", ItemRange::new(0, 19).unwrap())
        .await
        .unwrap();

    assert_eq!(page.items.len(), 20);
    assert_eq!(page.items[0].article.title, "Article 1");
    assert_eq!(page.total(), Some(30));

    let requests = fake.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].body, Some(json!({"text": "graph neural networks"})));
    assert_eq!(requests[0].range.map(|r| r.to_string()).as_deref(), Some("items=0-19"));
}

#[tokio::test]
async fn test_author_articles_sorted_by_citations() {
    let endpoints = Endpoints::default();
    let fake = FakeTransport::new().with_list_for(
        &endpoints.author_articles,
        "id",
        4,
        vec![fixtures::article(1, "Cited"), fixtures::article(2, "Less cited")],
    );

    let page = client(&fake)
        .author_articles(4, ItemRange::new(0, 2).ok(), ArticleSort::Citations)
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    let request = &fake.requests()[0];
    assert_eq!(request.query_value("id"), Some("4"));
    assert_eq!(request.query_value("sort"), Some("citations"));
}

#[tokio::test]
async fn test_graph_data_joins_publication_filter() {
    let endpoints = Endpoints::default();
    let fake = FakeTransport::new().with_json(
        &endpoints.graph_data,
        fixtures::graph_data(&[("2019", Some(2.0)), ("null", Some(1.0)), ("2020", None)]),
    );

    let series = client(&fake).graph_data(11, &[3, 5]).await.unwrap();

    assert_eq!(series.get("2019"), Some(&Some(2.0)));
    assert_eq!(series.get("2020"), Some(&None));
    let request = &fake.requests()[0];
    assert_eq!(request.query_value("keyword"), Some("11"));
    assert_eq!(request.query_value("publications"), Some("3,5"));
}

#[tokio::test]
async fn test_graph_data_without_filter_omits_param() {
    let endpoints = Endpoints::default();
    let fake = FakeTransport::new().with_json(&endpoints.graph_data, json!({}));

    client(&fake).graph_data(11, &[]).await.unwrap();

    assert_eq!(fake.requests()[0].query_value("publications"), None);
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let endpoints = Endpoints::default();
    let fake = FakeTransport::new().failing(&endpoints.keyword_search, 500);

    let err = client(&fake).search_keywords("rust").await.unwrap_err();

    assert!(matches!(err, Error::Status { status: 500, .. }));
}

#[tokio::test]
async fn test_unexpected_body_is_decode_error() {
    let endpoints = Endpoints::default();
    let fake = FakeTransport::new().with_json(&endpoints.keyword_search, json!({"detail": "oops"}));

    let err = client(&fake).search_keywords("rust").await.unwrap_err();

    assert!(matches!(err, Error::Decode(_)));
}
