// Domain entities

pub mod activity;
pub mod config;
pub mod notification;
pub mod pickup_request;
pub mod points;
pub mod transportation;
pub mod user;
pub mod waste_entry;

pub use activity::*;
pub use config::*;
pub use notification::*;
pub use pickup_request::*;
pub use points::*;
pub use transportation::*;
pub use user::*;
pub use waste_entry::*;
