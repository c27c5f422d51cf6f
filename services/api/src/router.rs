use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method, header},
    routing::{get, patch, post},
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use kala_core::middleware::{REQUEST_ID_HEADER, propagate_request_id_layer, request_id_layer};

use crate::handlers::health::{healthz, readyz};
use crate::handlers::{auth, banner, otp, profile, social, talent, user, work};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Auth
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/password", patch(auth::update_password))
        .route("/auth/profile", get(auth::me))
        // Phone verification
        .route("/sms/send-otp", post(otp::send_otp))
        .route("/sms/verify-otp", post(otp::verify_otp))
        .route("/sms/resend-otp", post(otp::resend_otp))
        // Users
        .route("/users", post(user::create_user).get(user::list_users))
        .route("/users/stats/summary", get(user::user_stats))
        .route(
            "/users/{id}",
            get(user::get_user).patch(user::update_user),
        )
        .route("/users/{id}/talent-view", get(user::get_talent_view))
        .route("/users/soft/{id}", axum::routing::delete(user::deactivate_user))
        .route("/users/hard/{id}", axum::routing::delete(user::delete_user))
        // Profiles
        .route("/profiles", post(profile::create_profile))
        .route("/profiles/search", get(profile::search_profiles))
        .route(
            "/profiles/{user_id}",
            get(profile::get_profile)
                .patch(profile::update_profile)
                .delete(profile::delete_profile),
        )
        // Talents
        .route(
            "/talents",
            post(talent::create_talent).get(talent::list_talents),
        )
        .route(
            "/talents/{user_id}",
            get(talent::get_talent)
                .patch(talent::update_talent)
                .delete(talent::delete_talent),
        )
        .route(
            "/talents/{user_id}/availability",
            patch(talent::update_availability),
        )
        // Social accounts
        .route("/socials", post(social::create_social_account))
        .route(
            "/socials/talent/{talent_profile_id}",
            get(social::list_social_accounts),
        )
        .route(
            "/socials/talent/{talent_profile_id}/platform/{platform}",
            get(social::list_social_accounts_by_platform),
        )
        .route(
            "/socials/{id}",
            get(social::get_social_account)
                .patch(social::update_social_account)
                .delete(social::delete_social_account),
        )
        .route(
            "/socials/{id}/set-primary",
            patch(social::set_primary_social_account),
        )
        // Banners
        .route(
            "/banners",
            post(banner::create_banner).get(banner::list_banners),
        )
        .route(
            "/banners/{id}",
            get(banner::get_banner)
                .patch(banner::update_banner)
                .delete(banner::delete_banner),
        )
        // Work samples
        .route(
            "/work-samples",
            post(work::create_work_sample).get(work::list_work_samples),
        )
        .route("/work-samples/count", get(work::count_work_samples))
        .route(
            "/work-samples/talent/{talent_profile_id}",
            get(work::list_by_talent),
        )
        .route("/work-samples/type/{type}", get(work::list_by_type))
        .route("/work-samples/status/{status}", get(work::list_by_status))
        .route(
            "/work-samples/{id}",
            get(work::get_work_sample)
                .patch(work::update_work_sample)
                .delete(work::delete_work_sample),
        )
        .route(
            "/work-samples/{id}/status",
            patch(work::update_work_sample_status),
        )
        .route(
            "/work-samples/talent-profile/{talent_profile_id}",
            axum::routing::delete(work::delete_talent_work_samples),
        )
        .with_state(state)
}

/// Wrap the router with request-id, tracing and CORS layers.
///
/// Layers run outside-in: the request id is assigned before the trace span
/// opens, so every log line of a request carries it.
pub fn with_middleware(router: Router, cors_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = cors_origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .allow_credentials(true);

    router
        .layer(cors)
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
}
