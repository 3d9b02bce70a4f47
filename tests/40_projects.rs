mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn estimated_value_round_trips_as_number() -> Result<()> {
    let Some(app) = common::TestApp::try_new().await? else { return Ok(()) };

    let owner = app.seed_user("pm@example.com").await?;
    let company = app.seed_company("Ironworks").await?;

    let (status, body) = app
        .mutate_as(
            "createProject",
            json!({
                "name": "Harbor Bridge",
                "description": "Deck replacement",
                "estimated_value": 50000.75,
                "start_date": "2024-03-01",
                "end_date": "2024-09-30T17:00:00Z",
                "company_id": company
            }),
            Some(owner),
        )
        .await?;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    let project = &body["data"];
    assert_eq!(project["status"], "planning");
    assert_eq!(project["created_by"], owner);
    assert!(project["estimated_value"].is_number());

    let id = project["id"].as_i64().unwrap_or_default();
    let (status, body) = app.query("getProject", &[("id", id.to_string())]).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["estimated_value"].as_f64(), Some(50000.75));
    assert_eq!(body["data"]["start_date"], "2024-03-01T00:00:00Z");

    let (_, body) = app.query("getProjects", &[]).await?;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));

    app.cleanup().await
}

#[tokio::test]
async fn partial_update_touches_only_given_fields() -> Result<()> {
    let Some(app) = common::TestApp::try_new().await? else { return Ok(()) };

    let owner = app.seed_user("pm@example.com").await?;
    let company = app.seed_company("Ironworks").await?;
    let (_, created) = app
        .mutate_as(
            "createProject",
            json!({ "name": "Depot", "description": "Bus depot", "estimated_value": 1200.5, "company_id": company }),
            Some(owner),
        )
        .await?;
    let id = created["data"]["id"].clone();

    let (status, body) = app
        .mutate("updateProject", json!({ "id": id, "status": "active", "description": null }))
        .await?;
    assert_eq!(status, StatusCode::OK, "{}", body);
    let updated = &body["data"];
    assert_eq!(updated["status"], "active");
    assert!(updated["description"].is_null());
    assert_eq!(updated["name"], "Depot");
    assert_eq!(updated["estimated_value"].as_f64(), Some(1200.5));
    assert_ne!(updated["updated_at"], created["data"]["updated_at"]);

    app.cleanup().await
}

#[tokio::test]
async fn missing_project_is_not_found() -> Result<()> {
    let Some(app) = common::TestApp::try_new().await? else { return Ok(()) };

    let (status, body) = app.query("getProject", &[("id", "404".to_string())]).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Project with id 404 not found");

    let (status, body) = app.mutate("updateProject", json!({ "id": 404, "name": "Ghost" })).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Project with id 404 not found");
    assert_eq!(app.count("projects").await?, 0);

    app.cleanup().await
}

#[tokio::test]
async fn project_requires_existing_company_and_caller() -> Result<()> {
    let Some(app) = common::TestApp::try_new().await? else { return Ok(()) };

    let owner = app.seed_user("pm@example.com").await?;
    let (status, body) = app
        .mutate_as("createProject", json!({ "name": "Orphan", "company_id": 777 }), Some(owner))
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");

    let (status, _) = app.mutate("createProject", json!({ "name": "Anon", "company_id": 1 })).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    app.cleanup().await
}
