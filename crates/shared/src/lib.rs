mod date;
mod error;
pub mod onboarding;

pub use date::*;
pub use error::*;
