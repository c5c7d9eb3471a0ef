// SPDX-License-Identifier: MIT

//! Release check outcomes: the server's explicit answer versus an
//! indeterminate failure.
//!
//! A transport timeout is not a rejection: callers see `Unknown` for
//! indeterminate failures, while the UI-facing gate (`grants_access`)
//! still only opens on an explicit confirmation.

use skilllinkr_client::services::ReleaseStatus;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::{authed_client, error_envelope};

#[tokio::test]
async fn test_200_is_released_and_marks_session_verified() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/released"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = authed_client(&server.uri(), "T1");
    let status = client.account.check_release().await.unwrap();
    assert_eq!(status, ReleaseStatus::Released);
    assert!(status.grants_access());
    assert!(client.store.session().verified);
}

#[tokio::test]
async fn test_400_is_explicitly_not_released_with_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/released"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(error_envelope("Account not released")),
        )
        .mount(&server)
        .await;

    let client = authed_client(&server.uri(), "T1");
    let status = client.account.check_release().await.unwrap();
    assert_eq!(
        status,
        ReleaseStatus::NotReleased {
            reason: "Account not released".to_string()
        }
    );
    assert!(!status.grants_access());
    assert!(!client.store.session().verified);
}

#[tokio::test]
async fn test_network_failure_is_unknown_not_a_rejection() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = authed_client(&uri, "T1");
    let status = client.account.check_release().await.unwrap();
    assert!(matches!(status, ReleaseStatus::Unknown { .. }));
    // The gate stays closed either way
    assert!(!status.grants_access());
}

#[tokio::test]
async fn test_unexpected_status_is_unknown() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/released"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let client = authed_client(&server.uri(), "T1");
    let status = client.account.check_release().await.unwrap();
    assert!(matches!(status, ReleaseStatus::Unknown { .. }));
}
