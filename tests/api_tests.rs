// HTTP tests for Career Compass

use actix_web::{http::StatusCode, test, web, App};
use career_compass::config::EnhancerSettings;
use career_compass::core::Recommender;
use career_compass::routes::{self, AppState};
use career_compass::services::{Catalog, PlanEnhancer};
use serde_json::{json, Value};
use std::sync::Arc;

const ROOT: &str = env!("CARGO_MANIFEST_DIR");

fn create_state(enhancer: EnhancerSettings) -> AppState {
    let catalog = Catalog::load(
        format!("{}/data/careers.json", ROOT),
        format!("{}/data/courses.json", ROOT),
    )
    .expect("bundled catalog should load");

    AppState {
        recommender: Recommender::new(Arc::new(catalog)),
        enhancer: Arc::new(PlanEnhancer::new(&enhancer).expect("client should build")),
    }
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .configure(routes::configure_routes)
                .service(routes::static_files(format!("{}/frontend", ROOT), "index.html")),
        )
        .await
    };
}

fn career_names(body: &Value) -> Vec<&str> {
    body["careers"]
        .as_array()
        .expect("careers array")
        .iter()
        .map(|c| c["name"].as_str().expect("career name"))
        .collect()
}

#[actix_web::test]
async fn test_recommend_returns_ranked_careers() {
    let app = init_app!(create_state(EnhancerSettings::default()));

    let req = test::TestRequest::post()
        .uri("/api/recommend")
        .set_json(json!({"interests": ["AI"], "goal": "engineer"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(career_names(&body)[0], "Software Engineer");
    assert_eq!(body["skills"][0], "python");
    assert_eq!(body["courses"][0]["skill"], "python");

    let plan = body["plan"].as_array().expect("draft plan is structured");
    assert_eq!(plan.len(), 4);
    assert_eq!(plan[0]["step"], 1);
    assert_eq!(plan[0]["title"], "Learn python");
}

#[actix_web::test]
async fn test_malformed_body_is_treated_as_empty() {
    let app = init_app!(create_state(EnhancerSettings::default()));

    let req = test::TestRequest::post()
        .uri("/api/recommend")
        .insert_header(("content-type", "application/json"))
        .set_payload("{this is not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let malformed: Value = test::read_body_json(resp).await;

    let req = test::TestRequest::post()
        .uri("/api/recommend")
        .set_json(json!({}))
        .to_request();
    let empty: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(malformed, empty);
    assert_eq!(
        career_names(&empty),
        vec!["Software Engineer", "Data Scientist", "Machine Learning Engineer", "Web Developer", "UX Designer"]
    );
}

#[actix_web::test]
async fn test_missing_fields_match_explicit_empty() {
    let app = init_app!(create_state(EnhancerSettings::default()));

    let req = test::TestRequest::post()
        .uri("/api/recommend")
        .set_json(json!({"interests": ["design"]}))
        .to_request();
    let partial: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/recommend")
        .set_json(json!({"interests": ["design"], "strengths": [], "goal": ""}))
        .to_request();
    let explicit: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(partial, explicit);
}

#[actix_web::test]
async fn test_enhanced_plan_replaces_draft() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices": [{"message": {"content": "1. Learn Python this month"}}]}"#)
        .create_async()
        .await;

    let settings = EnhancerSettings {
        api_key: Some("test_key".to_string()),
        base_url: server.url(),
        ..EnhancerSettings::default()
    };
    let app = init_app!(create_state(settings));

    let req = test::TestRequest::post()
        .uri("/api/recommend")
        .set_json(json!({"interests": ["ai"]}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["plan"], "1. Learn Python this month");
    assert!(body["careers"].as_array().is_some_and(|c| !c.is_empty()));
    mock.assert_async().await;
}

#[actix_web::test]
async fn test_enhancer_failure_keeps_draft_plan() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(503)
        .create_async()
        .await;

    let settings = EnhancerSettings {
        api_key: Some("test_key".to_string()),
        base_url: server.url(),
        ..EnhancerSettings::default()
    };
    let app = init_app!(create_state(settings));

    let req = test::TestRequest::post()
        .uri("/api/recommend")
        .set_json(json!({"interests": ["ai"]}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["plan"].is_array());
}

#[actix_web::test]
async fn test_health_check() {
    let app = init_app!(create_state(EnhancerSettings::default()));

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["careers"], 12);
    assert_eq!(body["enhancer_enabled"], false);
}

#[actix_web::test]
async fn test_static_files() {
    let app = init_app!(create_state(EnhancerSettings::default()));

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let index = String::from_utf8_lossy(&body);
    assert!(index.contains("Career Compass"));
    for section in ["id=\"careers\"", "id=\"skills\"", "id=\"courses\"", "id=\"plan\""] {
        assert!(index.contains(section), "index is missing {}", section);
    }

    let req = test::TestRequest::get().uri("/app.js").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let script = test::read_body(resp).await;
    // Both plan shapes are rendered: structured steps and enhanced text
    let script = String::from_utf8_lossy(&script);
    assert!(script.contains("Array.isArray(plan)"));
    assert!(script.contains("typeof plan === \"string\""));

    let req = test::TestRequest::get().uri("/missing.js").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
