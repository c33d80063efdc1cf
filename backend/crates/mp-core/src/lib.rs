pub mod error;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{FieldViolation, Result, ValidationError};
pub use models::contact_message::ContactMessage;
pub use models::design::Design;
pub use validation::{validate_contact_message, validate_design};
