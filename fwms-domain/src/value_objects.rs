// Domain value objects
pub mod identifiers;
pub mod role;
pub mod status;
pub mod waste_category;

pub use identifiers::*;
pub use role::*;
pub use status::*;
pub use waste_category::*;
