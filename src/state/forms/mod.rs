//! Form domain layer
//!
//! Type-safe form handling for the registration view.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{FieldId, FieldInput, Form, RegistrationForm};
