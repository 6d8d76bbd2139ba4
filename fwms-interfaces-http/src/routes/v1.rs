use axum::routing::{get, post};
use axum::Router;

use fwms_application::AppState;

use crate::handlers::{
    dashboard_handlers, ops_handlers, request_handlers, transport_handlers, user_handlers,
    waste_handlers,
};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/me", get(user_handlers::me))
        .route("/v1/users", post(user_handlers::create_user))
        .route(
            "/v1/waste",
            get(waste_handlers::list_waste).post(waste_handlers::log_waste),
        )
        .route("/v1/waste/:id", get(waste_handlers::get_waste))
        .route("/v1/waste/:id/drop", post(waste_handlers::drop_waste))
        .route("/v1/marketplace", get(waste_handlers::marketplace))
        .route(
            "/v1/requests",
            get(request_handlers::list_requests).post(request_handlers::create_request),
        )
        .route(
            "/v1/requests/:id/approve",
            post(request_handlers::approve_request),
        )
        .route(
            "/v1/requests/:id/reject",
            post(request_handlers::reject_request),
        )
        .route(
            "/v1/transportation",
            get(transport_handlers::list_transport).post(transport_handlers::schedule_transport),
        )
        .route(
            "/v1/transportation/:id",
            get(transport_handlers::get_transport)
                .patch(transport_handlers::update_transport)
                .delete(transport_handlers::delete_transport),
        )
        .route(
            "/v1/transportation/:id/complete",
            post(transport_handlers::complete_transport),
        )
        .route("/v1/points", get(dashboard_handlers::points_summary))
        .route(
            "/v1/points/leaderboard",
            get(dashboard_handlers::leaderboard),
        )
        .route(
            "/v1/notifications",
            get(dashboard_handlers::list_notifications),
        )
        .route(
            "/v1/notifications/read-all",
            post(dashboard_handlers::mark_all_notifications_read),
        )
        .route(
            "/v1/notifications/:id/read",
            post(dashboard_handlers::mark_notification_read),
        )
        .route("/v1/activity", get(dashboard_handlers::list_activity))
        .route("/v1/stats/impact", get(dashboard_handlers::impact_stats))
        .route("/v1/ops/health/live", get(ops_handlers::health_live))
        .route("/v1/ops/health/ready", get(ops_handlers::health_ready))
        .route("/v1/ops/metrics", get(ops_handlers::metrics_prometheus))
        .with_state(state)
}
