//! Field schemas and whole-form validation

use super::rule::{Rule, ValidationError};
use crate::state::{ErrorState, FieldId, FieldInput, RegistrationForm};
use std::collections::BTreeMap;

/// Ordered rules per field.
///
/// Rules for a field run in declaration order; the first failure wins.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: BTreeMap<FieldId, Vec<Rule>>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append rules for `field`
    pub fn field(mut self, field: FieldId, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.fields.entry(field).or_default().extend(rules);
        self
    }

    /// The registration form schema
    pub fn registration() -> Self {
        Self::new()
            .field(FieldId::Name, [Rule::required("Name is a required field")])
            .field(
                FieldId::Email,
                [
                    Rule::required("email is a required field"),
                    Rule::email("email must be a valid email"),
                ],
            )
            .field(
                FieldId::Password,
                [Rule::required("Please provide a valid password")],
            )
            .field(FieldId::Role, [Rule::required("please select a role")])
            .field(
                FieldId::Checkbox,
                [Rule::must_be_true("Must agree to terms to continue")],
            )
    }

    pub fn rules(&self, field: FieldId) -> &[Rule] {
        self.fields.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Validate one field value. Fields without rules always pass.
    pub fn validate_at(&self, field: FieldId, input: FieldInput<'_>) -> Result<(), ValidationError> {
        for rule in self.rules(field) {
            if let Err(message) = rule.check(input) {
                return Err(ValidationError {
                    field,
                    message: message.to_string(),
                });
            }
        }
        Ok(())
    }

    /// True when every field of `form` satisfies its rules
    pub fn is_valid(&self, form: &RegistrationForm) -> bool {
        FieldId::ALL
            .iter()
            .all(|&field| self.validate_at(field, form.input(field)).is_ok())
    }

    /// Per-field messages for the whole form
    pub fn validate(&self, form: &RegistrationForm) -> ErrorState {
        let mut errors = ErrorState::default();
        for field in FieldId::ALL {
            if let Err(err) = self.validate_at(field, form.input(field)) {
                errors.set(field, err.message);
            }
        }
        errors
    }
}
