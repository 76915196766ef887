pub mod merkle;
pub mod token;
pub mod vesting;

pub use merkle::*;
pub use token::*;
pub use vesting::*;
