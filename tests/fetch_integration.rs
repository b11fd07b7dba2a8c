//! Loading the sheet over HTTP against an in-process server.

mod common;

use common::http_server;
use sheetnav::app::runtime::init::{apply_load_outcome, load_entries};
use sheetnav::config::Settings;
use sheetnav::index::DEFAULT_CATEGORY;
use sheetnav::sources::LoadError;
use sheetnav::state::{AppState, LoadPhase};
use sheetnav::ui::{NoticeKind, View, render_fragment};

const ROWS: &str = r#"[
  {"category": "Life", "name": "Weather", "url": "weather.example.com", "desc": "Forecasts", "tags": "sky,rain"},
  {"category": "", "name": "Map", "url": "https://map.example.com/", "desc": "", "tags": ""},
  {"category": "Life", "name": "", "url": "https://nameless.example/"},
  {"category": "Life", "name": "Bad", "url": "javascript:alert(1)"},
  "not a row",
  {"name": "Extra", "url": "http://extra.example/", "owner": "ignored"}
]"#;

#[tokio::test]
/// What: A 200 response yields normalized entries in source order.
///
/// Inputs:
/// - Server replying with six elements: four usable objects (two invalid), one string.
///
/// Output:
/// - Three entries; bare host resolved to https; missing category defaulted; tags split.
async fn load_ok_normalizes_rows() {
    let server = http_server::start("200 OK", ROWS);
    let entries = match load_entries(&server.url, "").await {
        Ok(e) => e,
        Err(err) => panic!("load failed: {err}"),
    };
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Weather", "Map", "Extra"]);
    assert_eq!(entries[0].url, "https://weather.example.com/");
    assert_eq!(entries[0].tags, ["sky", "rain"]);
    assert_eq!(entries[1].category, DEFAULT_CATEGORY);
    assert_eq!(entries[2].url, "http://extra.example/");
}

#[tokio::test]
/// What: The request asks caches to stay out of the way.
///
/// Inputs:
/// - One load against the test server.
///
/// Output:
/// - Request head carries `cache-control: no-store` and `pragma: no-cache`.
async fn request_disables_caching() {
    let server = http_server::start("200 OK", "[]");
    assert!(load_entries(&server.url, "").await.is_ok());
    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    let head = requests[0].to_ascii_lowercase();
    assert!(head.starts_with("get / "));
    assert!(head.contains("cache-control: no-store"));
    assert!(head.contains("pragma: no-cache"));
}

#[tokio::test]
/// What: A non-2xx status becomes `Fetch` and the page shows only the error card.
///
/// Inputs:
/// - Server replying `500 Internal Server Error`.
///
/// Output:
/// - `LoadError::Fetch { status: 500 }`; state `Failed`; one error `<article>` in the fragment.
async fn server_error_shows_single_error_card() {
    let server = http_server::start("500 Internal Server Error", "oops");
    let outcome = load_entries(&server.url, "").await;
    assert!(matches!(outcome, Err(LoadError::Fetch { status: 500 })));

    let mut app = AppState::new(&Settings {
        endpoint: server.url.clone(),
        ..Settings::default()
    });
    apply_load_outcome(&mut app, outcome);
    assert_eq!(app.phase, LoadPhase::Failed);
    let View::Notice(notice) = &app.view else {
        panic!("expected error card");
    };
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.body, "failed to fetch data: 500");

    let html = render_fragment(&app.view);
    assert_eq!(html.matches("<article").count(), 1);
    assert!(html.contains("failed to fetch data: 500"));
}

#[tokio::test]
/// What: Bodies that are not JSON arrays are rejected with distinct errors.
///
/// Inputs:
/// - `not json` and `{"rows": []}` with status 200.
///
/// Output:
/// - `Parse` for the first, `Shape` for the second.
async fn malformed_bodies_are_rejected() {
    let garbage = http_server::start("200 OK", "not json");
    assert!(matches!(
        load_entries(&garbage.url, "").await,
        Err(LoadError::Parse(_))
    ));
    let object = http_server::start("200 OK", r#"{"rows": []}"#);
    assert!(matches!(
        load_entries(&object.url, "").await,
        Err(LoadError::Shape)
    ));
}

#[tokio::test]
/// What: An unreachable endpoint surfaces as a network error.
///
/// Inputs:
/// - Port bound then released so nothing listens.
///
/// Output:
/// - `LoadError::Network`.
async fn unreachable_endpoint_is_network_error() {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|l| l.local_addr())
        .map(|a| a.port())
        .expect("port");
    let outcome = load_entries(&format!("http://127.0.0.1:{port}/"), "").await;
    assert!(matches!(outcome, Err(LoadError::Network(_))));
}
