//! Domain models with validation at construction
//!
//! Invalid input returns ValidationError, not panic.

pub mod user;
pub mod validation;

pub use user::{UserFields, UserRecord};
pub use validation::ValidationError;
