//! Recipe endpoint integration tests against a mock Workato API.

mod common;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use common::{assert_authorized, json_body, pairs, query_of, setup, single_request};
use workato_client::{ClientError, JsonObject, RecipeData, ResourceId};

#[tokio::test]
async fn test_list_recipes_returns_body_unchanged() {
    let (server, client) = setup().await;
    let recipes = json!([
        {"id": 1, "name": "Recipe 1"},
        {"id": 2, "name": "Recipe 2"}
    ]);
    Mock::given(method("GET"))
        .and(path("/recipes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&recipes))
        .mount(&server)
        .await;

    let result = client.list_recipes(false).await.unwrap();

    assert_eq!(result, recipes);
    let request = single_request(&server).await;
    assert_authorized(&request);
    assert!(query_of(&request).is_empty());
    assert!(request.body.is_empty());
}

#[tokio::test]
async fn test_list_recipes_with_tags() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/recipes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    client.list_recipes(true).await.unwrap();

    let request = single_request(&server).await;
    assert_eq!(query_of(&request), pairs(&[("includes[]", "tags")]));
}

#[tokio::test]
async fn test_get_recipe() {
    let (server, client) = setup().await;
    let recipe = json!({"id": 1, "name": "Recipe 1", "description": "Test recipe"});
    Mock::given(method("GET"))
        .and(path("/recipes/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&recipe))
        .mount(&server)
        .await;

    let result = client.get_recipe(&ResourceId::Int(1)).await.unwrap();

    assert_eq!(result, recipe);
}

#[tokio::test]
async fn test_string_identifier_in_path() {
    let (server, client) = setup().await;
    Mock::given(method("PUT"))
        .and(path("/recipes/rcp-abc/start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let result = client
        .start_recipe(&ResourceId::from("rcp-abc"))
        .await
        .unwrap();

    assert_eq!(result, json!({"success": true}));
}

#[tokio::test]
async fn test_stop_recipe_sends_no_body() {
    let (server, client) = setup().await;
    Mock::given(method("PUT"))
        .and(path("/recipes/7/stop"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    client.stop_recipe(&ResourceId::Int(7)).await.unwrap();

    let request = single_request(&server).await;
    assert!(request.body.is_empty());
}

#[tokio::test]
async fn test_create_recipe_wraps_payload() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/recipes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 3})))
        .mount(&server)
        .await;

    let recipe = RecipeData {
        name: "New Recipe".into(),
        code: r#"{"trigger":{},"actions":[]}"#.into(),
        folder_id: None,
        description: None,
    };
    let result = client.create_recipe(&recipe).await.unwrap();

    assert_eq!(result, json!({"id": 3}));
    let request = single_request(&server).await;
    assert_authorized(&request);
    assert_eq!(
        json_body(&request),
        json!({"recipe": {"name": "New Recipe", "code": r#"{"trigger":{},"actions":[]}"#}})
    );
}

#[tokio::test]
async fn test_update_recipe_keeps_zero_folder() {
    let (server, client) = setup().await;
    Mock::given(method("PUT"))
        .and(path("/recipes/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 5})))
        .mount(&server)
        .await;

    let recipe = RecipeData {
        name: "Renamed".into(),
        code: "{}".into(),
        folder_id: Some(0),
        description: None,
    };
    client
        .update_recipe(&ResourceId::Int(5), &recipe)
        .await
        .unwrap();

    let request = single_request(&server).await;
    assert_eq!(
        json_body(&request),
        json!({"recipe": {"name": "Renamed", "code": "{}", "folder_id": 0}})
    );
}

#[tokio::test]
async fn test_test_recipe_sends_empty_object_without_input() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/recipes/1/test_run"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"job_id": 9})))
        .mount(&server)
        .await;

    client.test_recipe(&ResourceId::Int(1), None).await.unwrap();

    let request = single_request(&server).await;
    assert_eq!(json_body(&request), json!({}));
}

#[tokio::test]
async fn test_test_recipe_forwards_input_data() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/recipes/1/test_run"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"job_id": 9})))
        .mount(&server)
        .await;

    let mut input = JsonObject::new();
    input.insert("email".into(), json!("a@example.com"));
    client
        .test_recipe(&ResourceId::Int(1), Some(input))
        .await
        .unwrap();

    let request = single_request(&server).await;
    assert_eq!(json_body(&request), json!({"email": "a@example.com"}));
}

#[tokio::test]
async fn test_copy_recipe_without_folder_sends_no_body() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/recipes/4/copy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 40})))
        .mount(&server)
        .await;

    client.copy_recipe(&ResourceId::Int(4), None).await.unwrap();

    let request = single_request(&server).await;
    assert!(request.body.is_empty());
}

#[tokio::test]
async fn test_copy_recipe_into_folder() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/recipes/4/copy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 40})))
        .mount(&server)
        .await;

    client
        .copy_recipe(&ResourceId::Int(4), Some(&ResourceId::Int(0)))
        .await
        .unwrap();

    let request = single_request(&server).await;
    assert_eq!(json_body(&request), json!({"folder_id": 0}));
}

#[tokio::test]
async fn test_update_recipe_connection_body() {
    let (server, client) = setup().await;
    Mock::given(method("PUT"))
        .and(path("/recipes/2/connect"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    client
        .update_recipe_connection(&ResourceId::Int(2), "salesforce", 77)
        .await
        .unwrap();

    let request = single_request(&server).await;
    assert_eq!(
        json_body(&request),
        json!({"adapter_name": "salesforce", "connection_id": 77})
    );
}

#[tokio::test]
async fn test_recipe_versions_pagination() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/recipes/2/versions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .mount(&server)
        .await;

    client
        .list_recipe_versions(&ResourceId::Int(2), 1, 100)
        .await
        .unwrap();

    let request = single_request(&server).await;
    assert_eq!(
        query_of(&request),
        pairs(&[("page", "1"), ("per_page", "100")])
    );
}

#[tokio::test]
async fn test_update_recipe_version_comment_uses_patch() {
    let (server, client) = setup().await;
    Mock::given(method("PATCH"))
        .and(path("/recipes/2/versions/11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 11})))
        .mount(&server)
        .await;

    client
        .update_recipe_version_comment(&ResourceId::Int(2), &ResourceId::Int(11), "fixed mapping")
        .await
        .unwrap();

    let request = single_request(&server).await;
    assert_eq!(json_body(&request), json!({"comment": "fixed mapping"}));
}

#[tokio::test]
async fn test_empty_success_body_is_null() {
    let (server, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path("/recipes/8"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let result = client.delete_recipe(&ResourceId::Int(8)).await.unwrap();

    assert!(result.is_null());
}

#[tokio::test]
async fn test_non_success_status_is_api_error() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/recipes/404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Recipe not found"))
        .mount(&server)
        .await;

    let err = client.get_recipe(&ResourceId::Int(404)).await.unwrap_err();

    assert!(matches!(err, ClientError::Api { status: 404, .. }));
    assert_eq!(err.body(), Some("Recipe not found"));
    assert_eq!(
        err.to_string(),
        "Workato API request failed: 404 - Recipe not found"
    );
    single_request(&server).await;
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/recipes/3/poll_now"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client.poll_recipe_now(&ResourceId::Int(3)).await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    single_request(&server).await;
}

#[tokio::test]
async fn test_invalid_json_body_is_serialization_error() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/recipes/3/reset_trigger"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client
        .reset_recipe_trigger(&ResourceId::Int(3))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Serialization(_)));
}

#[tokio::test]
async fn test_get_recipe_version() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/recipes/2/versions/11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 11, "comment": null})))
        .mount(&server)
        .await;

    let result = client
        .get_recipe_version(&ResourceId::Int(2), &ResourceId::Int(11))
        .await
        .unwrap();

    assert_eq!(result, json!({"id": 11, "comment": null}));
    let request = single_request(&server).await;
    assert_authorized(&request);
    assert!(request.body.is_empty());
}

#[tokio::test]
async fn test_redirect_is_api_error_and_not_followed() {
    let (server, client) = setup().await;
    let target = format!("{}/elsewhere", server.uri());
    Mock::given(method("POST"))
        .and(path("/recipes"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", target.as_str()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/elsewhere"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"redirected": true})))
        .expect(0)
        .mount(&server)
        .await;

    let recipe = RecipeData {
        name: "New Recipe".into(),
        code: "{}".into(),
        folder_id: None,
        description: None,
    };
    let err = client.create_recipe(&recipe).await.unwrap_err();

    assert!(matches!(err, ClientError::Api { status: 302, .. }));
    let request = single_request(&server).await;
    assert_eq!(request.url.path(), "/recipes");
}

#[tokio::test]
async fn test_get_redirect_is_api_error() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/recipes/5"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("Location", "https://elsewhere.invalid/"),
        )
        .mount(&server)
        .await;

    let err = client.get_recipe(&ResourceId::Int(5)).await.unwrap_err();

    assert_eq!(err.status(), Some(301));
    single_request(&server).await;
}
