// FWMS application layer

pub mod commands;
pub mod error;
pub mod identity;
pub mod metrics;
pub mod persistence;
pub mod queries;
pub mod state;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::AppError;
pub use metrics::Metrics;
pub use persistence::{Durability, Written};
pub use state::AppState;
