// Domain services

pub mod impact;
pub mod ledger;
pub mod marketplace;
pub mod standings;

pub use impact::*;
pub use ledger::*;
pub use standings::*;
