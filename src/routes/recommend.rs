use actix_web::{web, HttpResponse, Responder};
use crate::core::Recommender;
use crate::models::{HealthResponse, Plan, Profile, RecommendRequest};
use crate::services::PlanEnhancer;
use std::sync::Arc;
use tracing::Instrument;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub recommender: Recommender,
    pub enhancer: Arc<PlanEnhancer>,
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api")
                .route("/recommend", web::post().to(recommend)),
        );
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let catalog = state.recommender.catalog();

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        careers: catalog.careers().len(),
        skills: catalog.skill_count(),
        enhancer_enabled: state.enhancer.is_enabled(),
        timestamp: chrono::Utc::now(),
    })
}

/// Recommend careers endpoint
///
/// POST /api/recommend
///
/// Request body (every field optional, malformed bodies count as empty):
/// ```json
/// {
///   "interests": ["string"],
///   "strengths": ["string"],
///   "goal": "string"
/// }
/// ```
async fn recommend(state: web::Data<AppState>, body: web::Bytes) -> impl Responder {
    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("recommend", %request_id);

    async move {
        let request = RecommendRequest::from_json_bytes(&body);
        let profile = Profile::from(&request);

        tracing::debug!(
            "Profile: interests={:?}, strengths={:?}, goal={:?}",
            profile.interests,
            profile.strengths,
            profile.goal
        );

        let mut recommendation = state.recommender.recommend(&profile);

        let enhanced = state.enhancer.enhance(&profile, &recommendation.summary()).await;
        if let Some(plan) = enhanced {
            recommendation.plan = Plan::Enhanced(plan);
        }

        tracing::info!(
            "Returning {} careers, {} skills, {} courses (enhanced plan: {})",
            recommendation.careers.len(),
            recommendation.skills.len(),
            recommendation.courses.len(),
            recommendation.plan.is_enhanced()
        );

        HttpResponse::Ok().json(recommendation)
    }
    .instrument(span)
    .await
}
