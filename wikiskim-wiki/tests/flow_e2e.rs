mod common;

use serde_json::json;
use wikiskim_common::io::ScriptedLines;
use wikiskim_wiki::{FlowOutcome, SelectionFlow, WikiApi, WikiError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GO_EXTRACT: &str =
    "Go is a statically typed, compiled programming language designed at Google.\n\
     It is syntactically similar to C, but with memory safety and garbage collection.";
const GO_URL: &str = "https://en.wikipedia.org/wiki/Go_(programming_language)";

async fn mount_search(server: &MockServer, hits: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("list", "search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "batchcomplete": "",
            "query": { "search": hits }
        })))
        .mount(server)
        .await;
}

async fn mount_page_props(server: &MockServer, pages: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("prop", "pageprops"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "batchcomplete": "",
            "query": { "pages": pages }
        })))
        .mount(server)
        .await;
}

async fn mount_extract(server: &MockServer, pages: serde_json::Value, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("prop", "info|extracts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "batchcomplete": "",
            "query": { "pages": pages }
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

fn flow_for(server: &MockServer) -> SelectionFlow {
    let api = WikiApi::new(&server.uri()).expect("mock endpoint URL");
    SelectionFlow::new(api)
}

#[tokio::test]
async fn selecting_first_candidate_prints_summary_with_link() {
    common::init_test_tracing();
    let server = MockServer::start().await;

    mount_search(
        &server,
        json!([
            { "ns": 0, "title": "Go (programming language)", "pageid": 1001, "wordcount": 5000 },
            { "ns": 0, "title": "Go (disambiguation)", "pageid": 1002, "wordcount": 120 }
        ]),
    )
    .await;
    mount_page_props(
        &server,
        json!({
            "1001": { "pageid": 1001, "ns": 0, "title": "Go (programming language)" },
            "1002": {
                "pageid": 1002, "ns": 0, "title": "Go (disambiguation)",
                "pageprops": { "disambiguation": "" }
            }
        }),
    )
    .await;
    mount_extract(
        &server,
        json!({
            "1001": {
                "pageid": 1001, "ns": 0, "title": "Go (programming language)",
                "extract": GO_EXTRACT, "fullurl": GO_URL
            }
        }),
        1,
    )
    .await;

    let flow = flow_for(&server);
    let mut lines = ScriptedLines::new(["1"]);
    let mut sink = Vec::new();

    let outcome = flow.run("golang", &mut lines, &mut sink).await.unwrap();

    let rendered = String::from_utf8(sink).unwrap();
    assert!(rendered.contains("Search results:\n1. Go (programming language)\n"));
    // The disambiguation page never reaches the list.
    assert!(!rendered.contains("Go (disambiguation)"));
    assert!(rendered.contains(&format!("Find out more: {GO_URL}")));

    match outcome {
        FlowOutcome::Summarized(summary) => {
            let (p1, p2) = GO_EXTRACT.split_once('\n').unwrap();
            assert!(summary.text.starts_with(&format!("{p1}\n\n{p2}")));
            assert!(summary.text.ends_with(&format!("Find out more: {GO_URL}")));
            assert_eq!(summary.source_url, GO_URL);
        }
        other => panic!("expected a summary, got {other:?}"),
    }
}

#[tokio::test]
async fn zero_hits_reports_notice_and_never_fetches_extract() {
    common::init_test_tracing();
    let server = MockServer::start().await;

    mount_search(&server, json!([])).await;
    // Neither follow-up endpoint may be touched.
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("prop", "pageprops"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;
    mount_extract(&server, json!({}), 0).await;

    let flow = flow_for(&server);
    let mut lines = ScriptedLines::new(Vec::<String>::new());
    let mut sink = Vec::new();

    let outcome = flow
        .run("xyzzy-nonsense-topic", &mut lines, &mut sink)
        .await
        .unwrap();

    assert!(matches!(outcome, FlowOutcome::NoCandidates));
    let rendered = String::from_utf8(sink).unwrap();
    assert!(rendered.contains("No search results found."));
}

#[tokio::test]
async fn pure_disambiguation_match_yields_no_candidates() {
    common::init_test_tracing();
    let server = MockServer::start().await;

    mount_search(
        &server,
        json!([{ "ns": 0, "title": "Mercury", "pageid": 7, "wordcount": 90 }]),
    )
    .await;
    mount_page_props(
        &server,
        json!({
            "7": { "pageid": 7, "ns": 0, "title": "Mercury",
                   "pageprops": { "disambiguation": "" } }
        }),
    )
    .await;
    mount_extract(&server, json!({}), 0).await;

    let flow = flow_for(&server);
    let mut lines = ScriptedLines::new(Vec::<String>::new());
    let mut sink = Vec::new();

    let outcome = flow.run("mercury", &mut lines, &mut sink).await.unwrap();

    assert!(matches!(outcome, FlowOutcome::NoCandidates));
    let rendered = String::from_utf8(sink).unwrap();
    assert!(rendered.contains("No valid search results found"));
}

#[tokio::test]
async fn bad_selection_aborts_without_extract_call() {
    common::init_test_tracing();
    let server = MockServer::start().await;

    mount_search(
        &server,
        json!([{ "ns": 0, "title": "Rust (programming language)", "pageid": 55, "wordcount": 4200 }]),
    )
    .await;
    mount_page_props(
        &server,
        json!({ "55": { "pageid": 55, "ns": 0, "title": "Rust (programming language)" } }),
    )
    .await;
    mount_extract(&server, json!({}), 0).await;

    let flow = flow_for(&server);
    for bad in ["seven", "0", "2", ""] {
        let mut lines = ScriptedLines::new([bad]);
        let mut sink = Vec::new();
        let err = flow.run("rust", &mut lines, &mut sink).await.unwrap_err();
        assert!(
            matches!(err, WikiError::InvalidSelection(_)),
            "input {bad:?} gave {err:?}"
        );
    }
}

#[tokio::test]
async fn empty_extract_is_a_no_content_error() {
    common::init_test_tracing();
    let server = MockServer::start().await;

    mount_search(
        &server,
        json!([{ "ns": 0, "title": "Stub article", "pageid": 901, "wordcount": 3 }]),
    )
    .await;
    mount_page_props(
        &server,
        json!({ "901": { "pageid": 901, "ns": 0, "title": "Stub article" } }),
    )
    .await;
    mount_extract(
        &server,
        json!({
            "901": { "pageid": 901, "ns": 0, "title": "Stub article",
                     "extract": "", "fullurl": "https://en.wikipedia.org/wiki/Stub_article" }
        }),
        1,
    )
    .await;

    let flow = flow_for(&server);
    let mut lines = ScriptedLines::new(["1"]);
    let mut sink = Vec::new();

    let err = flow.run("stub", &mut lines, &mut sink).await.unwrap_err();
    assert!(matches!(err, WikiError::NoContent { page_id: 901 }));
}

#[tokio::test]
async fn malformed_search_body_is_a_parse_error() {
    common::init_test_tracing();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("list", "search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("this is not json"))
        .mount(&server)
        .await;

    let flow = flow_for(&server);
    let mut lines = ScriptedLines::new(Vec::<String>::new());
    let mut sink = Vec::new();

    let err = flow.run("anything", &mut lines, &mut sink).await.unwrap_err();
    assert!(matches!(err, WikiError::Parse(_)));
}

#[tokio::test]
async fn split_call_surface_finds_and_summarizes() {
    common::init_test_tracing();
    let server = MockServer::start().await;

    mount_search(
        &server,
        json!([{ "ns": 0, "title": "Go (programming language)", "pageid": 1001, "wordcount": 5000 }]),
    )
    .await;
    mount_page_props(
        &server,
        json!({ "1001": { "pageid": 1001, "ns": 0, "title": "Go (programming language)" } }),
    )
    .await;
    mount_extract(
        &server,
        json!({
            "1001": { "pageid": 1001, "ns": 0, "title": "Go (programming language)",
                      "extract": GO_EXTRACT, "fullurl": GO_URL }
        }),
        1,
    )
    .await;

    let flow = flow_for(&server);
    let candidates = flow.find_candidates("golang").await.unwrap();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].index, 1);
    assert_eq!(candidates[0].result.page_id, 1001);
    assert_eq!(candidates[0].result.word_count, 5000);

    let summary = flow.summarize(candidates[0].result.page_id).await.unwrap();
    assert!(summary.text.ends_with(&format!("Find out more: {GO_URL}")));
}
