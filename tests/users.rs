//! Unwanted-user endpoint tests against a mock server.

use curatorapi::{CuratorClient, List, User, UserCreate};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_create_unwanted_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/user/unwanted"))
        .and(body_json(serde_json::json!({
            "origin": "flickr",
            "name": "spam-account"
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(
                serde_json::json!({"id": "u1", "origin": "flickr", "name": "spam-account"}),
            ),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CuratorClient::new(&mock_server.uri()).unwrap();
    let result = User::create(
        &client,
        &UserCreate {
            origin: "flickr".to_string(),
            name: "spam-account".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(result["id"], "u1");
}

#[tokio::test]
async fn test_list_unwanted_users() {
    let mock_server = MockServer::start().await;

    let users_json = serde_json::json!([
        {"id": "u1", "origin": "flickr", "name": "spam-account"},
        {"id": "u2", "origin": "unsplash", "name": "bot-account", "creationDate": "2023-03-21T09:15:00Z"}
    ]);

    Mock::given(method("GET"))
        .and(path("/users/unwanted"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&users_json))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CuratorClient::new(&mock_server.uri()).unwrap();
    let users = User::list(&client, &()).await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "spam-account");
    assert!(users[1].creation_date.is_some());
}

#[tokio::test]
async fn test_list_unwanted_users_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/unwanted"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let client = CuratorClient::new(&mock_server.uri()).unwrap();
    let users = User::list(&client, &()).await.unwrap();

    assert!(users.is_empty());
}

#[tokio::test]
async fn test_delete_unwanted_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/user/unwanted/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"deleted": 1})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CuratorClient::new(&mock_server.uri()).unwrap();
    let result = User::delete(&client, "u1").await.unwrap();

    assert_eq!(result["deleted"], 1);
}
