use std::net::SocketAddr;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::routes;
use server::ServerState;

fn app() -> Router {
    routes::build_router(ServerState::in_memory(), CorsLayer::very_permissive())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header("content-type", "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let res = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn create(app: &Router, uri: &str, body: Value) -> Value {
    let (status, json) = send(app, Method::POST, uri, Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "POST {} -> {}", uri, json);
    json
}

async fn new_bank(app: &Router, code: &str) -> String {
    let bank = create(app, "/api/v1/banks", json!({"code": code, "name": format!("{} Bank", code)})).await;
    bank["id"].as_str().unwrap().to_string()
}

async fn new_branch(app: &Router, bank_id: &str, code: &str) -> String {
    let uri = format!("/api/v1/banks/{}/branches", bank_id);
    let branch = create(app, &uri, json!({"code": code, "name": code, "addressLine1": "1 Quay St", "city": "Cork"})).await;
    branch["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_and_metrics() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    let res = app
        .clone()
        .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let text = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&text).contains("bankorg_http_requests_total"));
}

#[tokio::test]
async fn bank_crud_round_trip() {
    let app = app();
    let created = create(&app, "/api/v1/banks", json!({"code": "TEST", "name": "Test Bank"})).await;
    let id = created["id"].as_str().unwrap();
    assert_eq!(created["isActive"], true);
    assert!(created["createdAt"].is_string());

    let (status, fetched) = send(&app, Method::GET, &format!("/api/v1/banks/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["code"], "TEST");
    assert_eq!(fetched["name"], "Test Bank");

    let body = json!({"id": Uuid::new_v4(), "code": "TEST", "name": "Renamed"});
    let (status, updated) = send(&app, Method::PUT, &format!("/api/v1/banks/{}", id), Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id);
    assert_eq!(updated["name"], "Renamed");
    assert_eq!(updated["createdAt"], created["createdAt"]);

    let (status, _) = send(&app, Method::DELETE, &format!("/api/v1/banks/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, err) = send(&app, Method::GET, &format!("/api/v1/banks/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["error"], "Not Found");
    assert_eq!(err["message"], format!("Bank not found with ID: {}", id));
    assert_eq!(err["code"], 1004);
}

#[tokio::test]
async fn duplicate_code_and_bad_input() {
    let app = app();
    new_bank(&app, "DUP").await;
    let (status, err) = send(&app, Method::POST, "/api/v1/banks", Some(json!({"code": "DUP", "name": "Again"}))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(err["code"], 1009);

    let (status, err) = send(&app, Method::POST, "/api/v1/banks", Some(json!({"code": "", "name": "Blank"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["error"], "Validation Error");

    let res = app
        .clone()
        .oneshot(
            Request::post("/api/v1/banks")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(res.status().is_client_error());

    let (status, _) = send(&app, Method::GET, "/api/v1/banks/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn region_under_wrong_division_is_not_found() {
    let app = app();
    let bank_id = new_bank(&app, "ORG").await;
    let div_uri = format!("/api/v1/banks/{}/divisions", bank_id);
    let retail = create(&app, &div_uri, json!({"code": "RET", "name": "Retail"})).await;
    let corporate = create(&app, &div_uri, json!({"code": "CORP", "name": "Corporate"})).await;
    let retail_id = retail["id"].as_str().unwrap();
    let corporate_id = corporate["id"].as_str().unwrap();
    assert_eq!(retail["bankId"], bank_id.as_str());

    let region = create(
        &app,
        &format!("/api/v1/banks/{}/divisions/{}/regions", bank_id, retail_id),
        json!({"code": "N", "name": "North"}),
    )
    .await;
    let region_id = region["id"].as_str().unwrap();

    let (status, ok) = send(
        &app,
        Method::GET,
        &format!("/api/v1/banks/{}/divisions/{}/regions/{}", bank_id, retail_id, region_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ok["name"], "North");

    let (status, err) = send(
        &app,
        Method::GET,
        &format!("/api/v1/banks/{}/divisions/{}/regions/{}", bank_id, corporate_id, region_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["message"], format!("Region not found for division with ID: {}", corporate_id));
}

#[tokio::test]
async fn filter_branches_with_paging() {
    let app = app();
    let bank_id = new_bank(&app, "FLT").await;
    for code in ["B1", "B2", "B3"] {
        new_branch(&app, &bank_id, code).await;
    }
    let other = new_bank(&app, "OTH").await;
    new_branch(&app, &other, "X1").await;

    let criteria = json!({
        "filters": [{"field": "city", "operator": "LIKE", "value": "cor"}],
        "sort": [{"field": "code", "direction": "ASC"}],
        "page": 0,
        "size": 2
    });
    let (status, page) = send(
        &app,
        Method::POST,
        &format!("/api/v1/banks/{}/branches/filter", bank_id),
        Some(criteria),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["totalElements"], 3);
    assert_eq!(page["totalPages"], 2);
    assert_eq!(page["content"][0]["code"], "B1");
    assert_eq!(page["content"].as_array().unwrap().len(), 2);

    let (status, all) = send(&app, Method::POST, "/api/v1/branches/filter", Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all["totalElements"], 4);

    let bad = json!({"filters": [{"field": "shoeSize", "operator": "EQ", "value": 3}]});
    let (status, _) = send(&app, Method::POST, "/api/v1/branches/filter", Some(bad)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn calendar_default_and_resolution() {
    let app = app();
    let bank_id = new_bank(&app, "CAL").await;
    let branch_id = new_branch(&app, &bank_id, "HQ").await;
    let cal_uri = format!("/api/v1/banks/{}/calendars", bank_id);

    let (status, _) = send(&app, Method::GET, &format!("{}/default", cal_uri), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let standard = create(&app, &cal_uri, json!({"name": "Standard", "timezone": "Europe/Dublin", "isDefault": true})).await;
    let late = create(&app, &cal_uri, json!({"name": "Late", "timezone": "Europe/Dublin"})).await;
    let late_id = late["id"].as_str().unwrap();

    let (status, default) = send(&app, Method::GET, &format!("{}/default", cal_uri), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(default["id"], standard["id"]);

    create(
        &app,
        &format!("{}/{}/assignments", cal_uri, late_id),
        json!({"branchId": branch_id, "effectiveFrom": "2025-01-01", "effectiveTo": "2025-06-30"}),
    )
    .await;

    let resolve = |date: &str| format!("{}/resolve?branchId={}&date={}", cal_uri, branch_id, date);
    let (status, inside) = send(&app, Method::GET, &resolve("2025-03-01"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(inside["id"], late["id"]);

    let (_, outside) = send(&app, Method::GET, &resolve("2025-07-01"), None).await;
    assert_eq!(outside["id"], standard["id"]);
}

#[tokio::test]
async fn hours_and_audit_logs() {
    let app = app();
    let bank_id = new_bank(&app, "AUD").await;
    let branch_id = new_branch(&app, &bank_id, "HQ").await;

    let hours_uri = format!("/api/v1/banks/{}/branches/{}/hours", bank_id, branch_id);
    create(&app, &hours_uri, json!({"dayOfWeek": "MONDAY", "openTime": "09:00:00", "closeTime": "17:00:00"})).await;
    let (status, _) = send(
        &app,
        Method::POST,
        &hours_uri,
        Some(json!({"dayOfWeek": "MONDAY", "openTime": "10:00:00", "closeTime": "16:00:00"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let log_uri = format!("/api/v1/banks/{}/branches/{}/audit-logs", bank_id, branch_id);
    let entry = json!({"action": "UPDATED", "entityName": "Branch", "entityId": branch_id, "metadata": {"field": "status"}});
    let log = create(&app, &log_uri, entry.clone()).await;
    let log_id = log["id"].as_str().unwrap();
    assert_eq!(log["metadata"]["field"], "status");

    let (status, err) = send(&app, Method::PUT, &format!("{}/{}", log_uri, log_id), Some(entry)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["message"], "audit log entries are append-only");
}

#[tokio::test]
async fn openapi_document_lists_routes() {
    let app = app();
    let (status, doc) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    let paths = doc["paths"].as_object().unwrap();
    assert!(paths.contains_key("/api/v1/banks"));
    assert!(paths.contains_key("/api/v1/banks/{bank_id}/calendars/resolve"));
    assert!(paths.contains_key("/api/v1/banks/{bank_id}/branches/{branch_id}/departments/{department_id}/positions"));
}

#[tokio::test]
async fn live_server_serves_health() -> anyhow::Result<()> {
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let router = app();
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            eprintln!("server error: {}", e);
        }
    });

    let base = format!("http://{}", addr);
    let res = reqwest::get(format!("{}/health", base)).await?;
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["status"], "ok");

    let res = reqwest::Client::new()
        .post(format!("{}/api/v1/banks", base))
        .json(&json!({"code": "LIVE", "name": "Live Bank"}))
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::CREATED);
    Ok(())
}
