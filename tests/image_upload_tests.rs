// SPDX-License-Identifier: MIT

//! Image upload wire format and the deterministic download URL.

use skilllinkr_client::error::ApiError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::authed_client;

#[tokio::test]
async fn test_upload_sends_multipart_with_owner_key_filename() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string("stored"))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed_client(&server.uri(), "T1");
    client
        .images
        .upload("u1", "profile", vec![0xff, 0xd8, 0xff])
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"file\""));
    assert!(body.contains("filename=\"u1_profile.jpg\""));
    assert!(body.contains("image/jpeg"));
}

#[tokio::test]
async fn test_successful_upload_caches_the_blob() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload.php"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = authed_client(&server.uri(), "T1");
    client
        .images
        .upload("u1", "profile", vec![1, 2, 3])
        .await
        .unwrap();

    let cached = client.store.cache().get_image("u1", "profile").unwrap();
    assert_eq!(cached.bytes, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_failed_upload_surfaces_status_and_caches_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload.php"))
        .respond_with(ResponseTemplate::new(413).set_body_string("too large"))
        .mount(&server)
        .await;

    let client = authed_client(&server.uri(), "T1");
    let err = client
        .images
        .upload("u1", "profile", vec![0; 16])
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::UnexpectedStatus { status: 413, .. }));
    assert!(client.store.cache().get_image("u1", "profile").is_none());
}

#[tokio::test]
async fn test_image_url_layout() {
    let client = authed_client("http://images.example", "T1");
    assert_eq!(
        client.images.image_url("u1", "profile"),
        "http://images.example/uploads/u1_profile.jpg"
    );
}
