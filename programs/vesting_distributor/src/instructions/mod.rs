pub mod create_distributor;
pub mod check_claim;
pub mod claim;

pub use create_distributor::*;
pub use check_claim::*;
pub use claim::*;
