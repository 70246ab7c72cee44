//! Integration tests for the GitHub fetch path and error classifier.
//!
//! The end-to-end tests run against a minimal stub HTTP server on a
//! loopback listener, injected through the client's base URL.

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

use chrono::Utc;
use gitfolio::config::{
    AutomaticSettings, GithubProjectsSettings, ManualSettings, ProjectMode, SortBy,
};
use gitfolio::errors::{ErrorKind, classify};
use gitfolio::github::{GithubClient, GithubError, build_search_query};
use pretty_assertions::assert_eq;

/// Minimal one-request-per-connection HTTP stub.
///
/// Routes are matched by path prefix; every request path is recorded so
/// tests can assert on the query the client actually sent.
struct StubServer {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    fn start(routes: HashMap<&'static str, (u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
        let base_url = format!("http://{}", listener.local_addr().expect("local addr"));
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { break };
                let mut reader = BufReader::new(stream);

                let mut request_line = String::new();
                if reader.read_line(&mut request_line).is_err() {
                    continue;
                }
                // Drain the headers; the stub never reads bodies
                loop {
                    let mut line = String::new();
                    match reader.read_line(&mut line) {
                        Ok(0) => break,
                        Ok(_) if line == "\r\n" || line == "\n" => break,
                        Ok(_) => {}
                        Err(_) => break,
                    }
                }

                let path = request_line
                    .split_whitespace()
                    .nth(1)
                    .unwrap_or_default()
                    .to_string();
                if let Ok(mut log) = seen.lock() {
                    log.push(path.clone());
                }

                let (status, body) = routes
                    .iter()
                    .find(|(prefix, _)| path.starts_with(**prefix))
                    .map(|(_, response)| response.clone())
                    .unwrap_or((404, "{\"message\":\"Not Found\"}".to_string()));

                let reason = match status {
                    200 => "OK",
                    403 => "Forbidden",
                    404 => "Not Found",
                    _ => "Error",
                };
                let response = format!(
                    "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = reader.get_mut().write_all(response.as_bytes());
            }
        });

        Self { base_url, requests }
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

fn automatic_settings() -> GithubProjectsSettings {
    GithubProjectsSettings {
        display: true,
        header: "Github Projects".to_string(),
        mode: ProjectMode::Automatic,
        automatic: AutomaticSettings {
            sort_by: SortBy::Stars,
            limit: 8,
            exclude_forks: true,
            exclude_projects: vec!["octocat/ignored".to_string()],
        },
        manual: ManualSettings {
            projects: Vec::new(),
        },
    }
}

fn repo_json(name: &str, stars: u64) -> String {
    format!(
        r#"{{"name":"{name}","html_url":"https://github.com/octocat/{name}","stargazers_count":{stars},"forks_count":1}}"#
    )
}

#[test]
fn test_end_to_end_automatic_load() {
    let mut routes = HashMap::new();
    routes.insert(
        "/users/octocat",
        (
            200,
            r#"{"avatar_url":"https://example.com/a.png","name":"Mona Lisa","bio":"Art","location":"Paris","company":"@github","public_repos":3}"#.to_string(),
        ),
    );
    routes.insert(
        "/search/repositories",
        (
            200,
            format!(
                r#"{{"items":[{},{}]}}"#,
                repo_json("first", 80),
                repo_json("second", 3)
            ),
        ),
    );
    let server = StubServer::start(routes);
    let client = GithubClient::with_base_url(&server.base_url);

    let user = client.fetch_profile("octocat").unwrap();
    assert_eq!(user.name.as_deref(), Some("Mona Lisa"));
    assert_eq!(user.public_repos, 3);

    let repos = client
        .fetch_projects("octocat", &automatic_settings(), user.public_repos)
        .unwrap();

    let names: Vec<&str> = repos.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second"]);

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0], "/users/octocat");
    assert!(requests[1].starts_with("/search/repositories?"));
    assert!(requests[1].contains("fork:false"));
    assert!(requests[1].contains("-repo:octocat/ignored"));
    assert!(requests[1].contains("per_page=8"));
    assert!(requests[1].contains("sort=stars"));
}

#[test]
fn test_automatic_zero_repos_skips_search() {
    // No routes at all: any request would come back 404 and fail the test
    let server = StubServer::start(HashMap::new());
    let client = GithubClient::with_base_url(&server.base_url);

    let repos = client
        .fetch_projects("octocat", &automatic_settings(), 0)
        .unwrap();
    assert!(repos.is_empty());
    assert!(server.requests().is_empty());
}

#[test]
fn test_manual_mode_skips_failures_preserves_order() {
    let mut routes = HashMap::new();
    routes.insert("/repos/octocat/zebra", (200, repo_json("zebra", 1)));
    routes.insert("/repos/octocat/alpha", (200, repo_json("alpha", 2)));
    // octocat/gone is not routed and comes back 404
    let server = StubServer::start(routes);
    let client = GithubClient::with_base_url(&server.base_url);

    let settings = GithubProjectsSettings {
        mode: ProjectMode::Manual,
        manual: ManualSettings {
            projects: vec![
                "octocat/zebra".to_string(),
                "octocat/gone".to_string(),
                "octocat/alpha".to_string(),
            ],
        },
        ..automatic_settings()
    };

    let repos = client.fetch_projects("octocat", &settings, 42).unwrap();
    let names: Vec<&str> = repos.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["zebra", "alpha"]);
    assert_eq!(server.requests().len(), 3);
}

#[test]
fn test_manual_mode_empty_list_makes_no_calls() {
    let server = StubServer::start(HashMap::new());
    let client = GithubClient::with_base_url(&server.base_url);

    let settings = GithubProjectsSettings {
        mode: ProjectMode::Manual,
        ..automatic_settings()
    };

    let repos = client.fetch_projects("octocat", &settings, 42).unwrap();
    assert!(repos.is_empty());
    assert!(server.requests().is_empty());
}

#[test]
fn test_profile_404_yields_status_error() {
    let server = StubServer::start(HashMap::new());
    let client = GithubClient::with_base_url(&server.base_url);

    match client.fetch_profile("nobody") {
        Err(GithubError::Status { status: 404, .. }) => {}
        other => panic!("expected 404 status error, got {other:?}"),
    }
}

#[test]
fn test_query_clauses() {
    let settings = automatic_settings();
    let query = build_search_query("octocat", &settings.automatic);
    assert_eq!(query, "user:octocat+fork:false+-repo:octocat/ignored");
    assert_eq!(query.matches("-repo:").count(), 1);
}

#[test]
fn test_classify_rate_limited_needs_reset_header() {
    let reset = (Utc::now() + chrono::Duration::minutes(30)).timestamp();
    let with_header = classify(&GithubError::Status {
        status: 403,
        ratelimit_reset: Some(reset.to_string()),
    });
    assert_eq!(with_header.kind, ErrorKind::RateLimited);
    assert!(with_header.subtitle.contains("in "));

    let without = classify(&GithubError::Status {
        status: 403,
        ratelimit_reset: None,
    });
    assert_eq!(without.kind, ErrorKind::Generic);

    let garbled = classify(&GithubError::Status {
        status: 403,
        ratelimit_reset: Some("soon".to_string()),
    });
    assert_eq!(garbled.kind, ErrorKind::Generic);
}

#[test]
fn test_classify_table() {
    let not_found = classify(&GithubError::Status {
        status: 404,
        ratelimit_reset: None,
    });
    assert_eq!(not_found.kind, ErrorKind::InvalidUsername);
    assert_eq!(not_found.status, Some(404));

    let server_error = classify(&GithubError::Status {
        status: 500,
        ratelimit_reset: None,
    });
    assert_eq!(server_error.kind, ErrorKind::Generic);
    assert_eq!(server_error.status, Some(500));

    let network = classify(&GithubError::Network("timed out".to_string()));
    assert_eq!(network.kind, ErrorKind::Generic);
    assert_eq!(network.status, None);

    let decode = classify(&GithubError::Decode("bad json".to_string()));
    assert_eq!(decode.kind, ErrorKind::Generic);
}
