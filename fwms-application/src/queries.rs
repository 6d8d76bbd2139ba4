pub mod activity_queries;
pub mod marketplace_queries;
pub mod notification_queries;
pub mod points_queries;
pub mod request_queries;
pub mod stats_queries;
pub mod transport_queries;
pub mod waste_queries;

use fwms_domain::MAX_LIST_LIMIT;

use crate::AppState;

fn list_limit(state: &AppState, requested: Option<usize>) -> usize {
    requested
        .unwrap_or(state.config.default_list_limit)
        .clamp(1, MAX_LIST_LIMIT)
}
