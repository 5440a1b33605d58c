use pubassist::presentation::renderer::render_text;
use pubassist::presentation::view_models::{HypeViewModel, StripViewModel};
use pubassist::presentation::{CommandResultViewModel, Style};
use pubassist_engine::{build_matrix, compute_page_strip};
use pubassist_runtime::{AuthorDetails, RequestStatus, Section};
use pubassist_types::{Author, Keyword, SparseSeries};

fn series(points: &[(&str, Option<f64>)]) -> SparseSeries {
    points
        .iter()
        .map(|(label, value)| (label.to_string(), *value))
        .collect()
}

#[test]
fn test_hype_table() {
    let rust = series(&[("2020", Some(5.0)), ("2021", Some(3.0))]);
    let go = series(&[("2021", Some(7.0)), ("null", Some(1.0))]);
    let view_model = HypeViewModel {
        keywords: vec![
            Keyword {
                id: 1,
                keyword: "rust".to_string(),
            },
            Keyword {
                id: 2,
                keyword: "go".to_string(),
            },
        ],
        publications: Vec::new(),
        matrix: build_matrix([("rust", &rust), ("go", &go)]),
    };

    let text = render_text(&CommandResultViewModel::new(view_model), Style::default());
    insta::assert_snapshot!(text, @r"
    PERIOD           rust           go
    2020                5            0
    2021                3            7
    ");
}

#[test]
fn test_author_details_with_failed_section() {
    let failed = RequestStatus {
        pending: false,
        error: true,
    };
    let details = AuthorDetails {
        id: 7,
        author: Section {
            data: Some(Author {
                id: 7,
                full_name: "Ada Lovelace".to_string(),
            }),
            status: RequestStatus::default(),
            error: None,
        },
        articles: Section {
            data: Some(Vec::new()),
            status: RequestStatus::default(),
            error: None,
        },
        coreferrers: Section {
            data: None,
            status: failed,
            error: Some("API returned status 500".to_string()),
        },
    };

    let text = render_text(
        &CommandResultViewModel::new(details).with_note("co-referrers could not be loaded"),
        Style::default(),
    );
    insta::assert_snapshot!(text, @r"
    Ada Lovelace

    Articles (0)

    Co-referrers
      unavailable: API returned status 500
    note: co-referrers could not be loaded
    ");
}

#[test]
fn test_strip_json_shape() {
    let view_model = StripViewModel {
        page: 2,
        item_count: 15,
        page_size: 10,
        last_page: 2,
        strip: compute_page_strip(2, 15, 10),
    };

    insta::assert_json_snapshot!(CommandResultViewModel::new(view_model), @r#"
    {
      "content": {
        "page": 2,
        "item_count": 15,
        "page_size": 10,
        "last_page": 2,
        "strip": {
          "first": true,
          "previous": {
            "page": 1,
            "enabled": true
          },
          "next": {
            "page": 3,
            "enabled": false
          },
          "pages": [
            {
              "page_num": 1,
              "enabled": true
            },
            {
              "page_num": 2,
              "enabled": false
            }
          ],
          "more_left": {
            "enabled": false,
            "page_num": 0
          },
          "more_right": {
            "enabled": false,
            "page_num": 3
          }
        }
      }
    }
    "#);
}
