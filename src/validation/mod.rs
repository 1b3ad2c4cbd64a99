//! Declarative form validation
//!
//! A [`Schema`] maps each registration field to an ordered list of rules.
//! Single fields are checked on change with [`Schema::validate_at`]; the
//! whole form is checked with [`Schema::is_valid`] after every state change
//! to drive submit enablement.

mod rule;
mod schema;

pub use schema::Schema;
