// SPDX-License-Identifier: MIT

use std::sync::Arc;

use serde_json::{json, Value};
use skilllinkr_client::config::Config;
use skilllinkr_client::store::StateStore;
use skilllinkr_client::Client;

/// Client over an in-memory store, pointed at a mock server.
#[allow(dead_code)]
pub fn test_client(base_url: &str) -> Client {
    let config = Config {
        api_url: base_url.trim_end_matches('/').to_string(),
        data_url: base_url.trim_end_matches('/').to_string(),
        state_path: "unused.json".into(),
    };
    Client::with_store(config, Arc::new(StateStore::in_memory()))
}

/// Same, with a token already installed.
#[allow(dead_code)]
pub fn authed_client(base_url: &str, token: &str) -> Client {
    let client = test_client(base_url);
    client.store.establish(token.to_string());
    client
}

/// Success envelope around a payload.
#[allow(dead_code)]
pub fn envelope(message: Value) -> Value {
    json!({ "status": "success", "message": message })
}

#[allow(dead_code)]
pub fn error_envelope(message: &str) -> Value {
    json!({ "status": "error", "message": message })
}

#[allow(dead_code)]
pub fn user_json(id: &str) -> Value {
    json!({
        "id": id,
        "firstname": "Ada",
        "lastname": "Lovelace",
        "mail": "ada@example.com",
        "released": true,
        "role": {
            "id": 1,
            "name": "user",
            "description": "Standard user",
            "createdAt": "2024-07-13T10:00:00Z",
            "updatedAt": "2024-07-13T10:00:00Z"
        },
        "createdAt": "2024-07-13T10:00:00Z",
        "updatedAt": "2024-07-13T10:00:00Z"
    })
}

#[allow(dead_code)]
pub fn social_json(user_id: &str) -> Value {
    json!({
        "id": 7,
        "userId": user_id,
        "discordName": "ada#0001",
        "facebookName": null,
        "instagramName": null,
        "xName": "ada",
        "createdAt": "2024-07-13T10:00:00Z",
        "updatedAt": "2024-07-13T10:00:00Z"
    })
}

#[allow(dead_code)]
pub fn teaching_json(user_id: &str) -> Value {
    json!({
        "id": 7,
        "userId": user_id,
        "teachesInPerson": false,
        "teachesOnline": true,
        "teachingCity": null,
        "teachingCountry": null,
        "createdAt": "2024-07-13T10:00:00Z",
        "updatedAt": "2024-07-13T10:00:00Z"
    })
}

#[allow(dead_code)]
pub fn skills_json() -> Value {
    json!([
        {
            "id": 3,
            "name": "Guitar",
            "categoryId": 1,
            "createdAt": "2024-07-13T10:00:00Z",
            "updatedAt": "2024-07-13T10:00:00Z"
        },
        {
            "id": 9,
            "name": "Rust",
            "categoryId": 2,
            "createdAt": "2024-07-13T10:00:00Z",
            "updatedAt": "2024-07-13T10:00:00Z"
        }
    ])
}

/// Mount the four happy-path profile endpoints for `user_id`.
#[allow(dead_code)]
pub async fn mount_full_profile(server: &wiremock::MockServer, user_id: &str) {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, ResponseTemplate};

    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(user_json(user_id))))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user/socialmedia"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(social_json(user_id))))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user/teachinginformation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(teaching_json(user_id))))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user/skills"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(skills_json())))
        .mount(server)
        .await;
}
