use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use pubassist_testing::TestWorld;

#[test]
fn test_help_lists_commands() {
    let mut cmd = cargo_bin_cmd!("pubassist");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("articles"))
        .stdout(predicate::str::contains("journals"))
        .stdout(predicate::str::contains("hype"))
        .stdout(predicate::str::contains("strip"));
}

#[test]
fn test_strip_plain() {
    let world = TestWorld::new();
    let result = world.run(&["strip", "--page", "3", "--items", "35"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    insta::assert_snapshot!(result.stdout(), @r"
    page 3 of 4, 35 results (10 per page)
    ‹ 1 2 [3] 4 ›
    ");
}

#[test]
fn test_strip_with_both_ellipses() {
    let world = TestWorld::new();
    let result = world.run(&["strip", "--page", "9", "--items", "200"]).unwrap();

    assert!(result.success());
    assert!(result.stdout().contains("‹ … 4 5 6 7 8 [9] 10 11 12 13 14 15 … ›"));
}

#[test]
fn test_strip_json() {
    let world = TestWorld::new();
    let result = world
        .run(&["--format", "json", "strip", "--page", "1", "--items", "95"])
        .unwrap();

    assert!(result.success());
    let json = result.json().unwrap();
    let content = &json["content"];
    assert_eq!(content["last_page"], 10);
    assert_eq!(content["strip"]["previous"]["enabled"], false);
    assert_eq!(content["strip"]["next"]["enabled"], true);
    assert_eq!(content["strip"]["pages"].as_array().unwrap().len(), 10);
    assert_eq!(content["strip"]["pages"][0]["enabled"], false);
}

#[test]
fn test_strip_without_items() {
    let world = TestWorld::new();
    let result = world.run(&["strip", "--page", "1", "--items", "0"]).unwrap();

    assert!(result.success());
    assert_eq!(result.stdout(), "No results.\n");
}

#[test]
fn test_strip_uses_configured_page_size() {
    let world = TestWorld::new().with_config("[browse]\npage_size = 20\n");
    let result = world.run(&["strip", "--page", "1", "--items", "35"]).unwrap();

    assert!(result.success());
    assert!(result.stdout().starts_with("page 1 of 2, 35 results (20 per page)"));
}

#[test]
fn test_strip_rejects_page_zero() {
    let world = TestWorld::new();
    let result = world.run(&["strip", "--page", "0", "--items", "10"]).unwrap();

    assert_eq!(result.code(), Some(2));
    assert!(result.stderr().contains("--page"));
}

#[test]
fn test_browse_commands_reject_page_zero() {
    let world = TestWorld::new().with_api_url("http://127.0.0.1:9/");
    for args in [
        ["articles", "text", "--page", "0"],
        ["journals", "text", "--page", "0"],
        ["authors", "ada", "--page", "0"],
    ] {
        let result = world.run(&args).unwrap();
        assert_eq!(result.code(), Some(2), "args: {:?}", args);
        assert!(result.stderr().contains("--page"));
    }

    let result = world
        .run(&["strip", "--page", "1", "--items", "10", "--page-size", "0"])
        .unwrap();
    assert_eq!(result.code(), Some(2));
}

#[test]
fn test_huge_page_number_does_not_panic() {
    let world = TestWorld::new();
    let result = world
        .run(&["strip", "--page", "18446744073709551615", "--items", "95"])
        .unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().starts_with("page 18446744073709551615 of 10, 95 results"));
}

#[test]
fn test_invalid_config_is_reported() {
    let world = TestWorld::new().with_config("[browse]\npage_size = 0\n");
    let result = world.run(&["strip", "--page", "1", "--items", "10"]).unwrap();

    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().contains("failed to load config"));
}

#[test]
fn test_config_init_and_show() {
    let world = TestWorld::new();

    let result = world.run(&["config", "init"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(world.config_path().exists());

    let again = world.run(&["config", "init"]).unwrap();
    assert!(!again.success());
    assert!(again.stderr().contains("--force"));

    let forced = world.run(&["config", "init", "--force"]).unwrap();
    assert!(forced.success());

    let shown = world.run(&["--format", "json", "config", "show"]).unwrap();
    let json = shown.json().unwrap();
    assert_eq!(json["content"]["exists"], true);
    assert_eq!(json["content"]["config"]["browse"]["page_size"], 10);
    assert_eq!(
        json["content"]["config"]["endpoints"]["graph_data"],
        "hype_cycle_graph/graph_data"
    );
}

#[test]
fn test_config_show_applies_api_url_override() {
    let world = TestWorld::new().with_api_url("http://pubs.example.org/api/");
    let result = world.run(&["--format", "json", "config", "show"]).unwrap();

    let json = result.json().unwrap();
    assert_eq!(json["content"]["exists"], false);
    assert_eq!(
        json["content"]["config"]["api"]["base_url"],
        "http://pubs.example.org/api/"
    );

    let flag = world
        .run(&["--format", "json", "--api-url", "http://other:1/", "config", "show"])
        .unwrap();
    assert_eq!(
        flag.json().unwrap()["content"]["config"]["api"]["base_url"],
        "http://other:1/"
    );
}

#[test]
fn test_empty_text_fails_before_any_request() {
    let world = TestWorld::new();
    let result = world.run(&["articles", "   "]).unwrap();

    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().contains("text must not be empty"));
}

#[test]
fn test_unreachable_api_exits_with_error() {
    let world = TestWorld::new().with_api_url("http://127.0.0.1:9/");
    let result = world.run(&["articles", "graph neural networks"]).unwrap();

    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().starts_with("Error:"));
    assert!(result.stdout().is_empty());
}

#[test]
fn test_suggest_with_empty_stdin_prints_nothing() {
    let world = TestWorld::new().with_api_url("http://127.0.0.1:9/");
    let result = world.run_with_stdin(&["suggest", "keywords"], "").unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().is_empty());
}
