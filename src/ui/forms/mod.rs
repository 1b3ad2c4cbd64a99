//! Form rendering module
//!
//! - `field_renderer`: field rendering utilities
//! - `registration_form`: the registration form and its submit button

mod field_renderer;
mod registration_form;

pub use registration_form::draw as draw_registration;
