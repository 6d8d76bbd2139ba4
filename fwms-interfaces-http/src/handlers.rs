pub mod dashboard_handlers;
pub mod ops_handlers;
pub mod request_handlers;
pub mod transport_handlers;
pub mod user_handlers;
pub mod waste_handlers;
