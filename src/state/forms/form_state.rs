//! Form state management and the registration form

use super::field::FormField;
use crate::state::UserPayload;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Identifies one of the registration fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    Name,
    Email,
    Password,
    Role,
    Checkbox,
}

impl FieldId {
    /// All fields in display order
    pub const ALL: [FieldId; 5] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Password,
        FieldId::Role,
        FieldId::Checkbox,
    ];

    /// Wire name, as used in the request body
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::Role => "role",
            Self::Checkbox => "checkbox",
        }
    }

    /// Row index of this field in the form
    pub fn index(&self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Password => 2,
            Self::Role => 3,
            Self::Checkbox => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Current value of a field, as seen by the validator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldInput<'a> {
    Text(&'a str),
    Bool(bool),
}

/// The registration form: name, email, password, role and terms acceptance
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub name: FormField,
    pub email: FormField,
    pub password: FormField,
    pub role: FormField,
    pub checkbox: FormField,
    pub active_field_index: usize,
}

impl RegistrationForm {
    /// Row index of the submit button
    pub const SUBMIT_ROW: usize = 5;

    pub fn new(roles: Vec<String>) -> Self {
        Self {
            name: FormField::text("Name"),
            email: FormField::text("Email"),
            password: FormField::secret("Password"),
            role: FormField::choice("Role", roles),
            checkbox: FormField::toggle("Terms of Service"),
            active_field_index: 0,
        }
    }

    /// Returns true if the submit button row is focused
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == Self::SUBMIT_ROW
    }

    /// The focused field, or `None` on the submit row
    pub fn active_field_id(&self) -> Option<FieldId> {
        FieldId::from_index(self.active_field_index)
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        match id {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
            FieldId::Role => &self.role,
            FieldId::Checkbox => &self.checkbox,
        }
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        match id {
            FieldId::Name => &mut self.name,
            FieldId::Email => &mut self.email,
            FieldId::Password => &mut self.password,
            FieldId::Role => &mut self.role,
            FieldId::Checkbox => &mut self.checkbox,
        }
    }

    /// Value of a field in the shape the validator expects
    pub fn input(&self, id: FieldId) -> FieldInput<'_> {
        match id {
            FieldId::Checkbox => FieldInput::Bool(self.checkbox.as_bool()),
            other => FieldInput::Text(self.field(other).as_text()),
        }
    }

    /// Clear all values; focus is kept where it is
    pub fn reset(&mut self) {
        for id in FieldId::ALL {
            self.field_mut(id).clear();
        }
    }

    /// Build the request body for submission
    pub fn payload(&self) -> UserPayload {
        UserPayload {
            name: self.name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            password: self.password.as_text().to_string(),
            role: self.role.as_text().to_string(),
            checkbox: self.checkbox.as_bool(),
        }
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        6 // five fields plus the submit row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_ROW);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles() -> Vec<String> {
        vec!["Engineer".to_string(), "Designer".to_string()]
    }

    fn type_into(field: &mut FormField, text: &str) {
        for c in text.chars() {
            field.push_char(c);
        }
    }

    mod field_id {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_index_round_trip() {
            for id in FieldId::ALL {
                assert_eq!(FieldId::from_index(id.index()), Some(id));
            }
            assert_eq!(FieldId::from_index(5), None);
        }

        #[test]
        fn test_wire_names() {
            let names: Vec<_> = FieldId::ALL.iter().map(|f| f.as_str()).collect();
            assert_eq!(names, ["name", "email", "password", "role", "checkbox"]);
        }
    }

    mod registration_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = RegistrationForm::new(roles());
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.name.as_text(), "");
            assert_eq!(form.email.as_text(), "");
            assert_eq!(form.password.as_text(), "");
            assert_eq!(form.role.as_text(), "");
            assert!(!form.checkbox.as_bool());
        }

        #[test]
        fn test_field_count() {
            let form = RegistrationForm::new(roles());
            assert_eq!(form.field_count(), 6);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = RegistrationForm::new(roles());
            for _ in 0..6 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_submit_row() {
            let mut form = RegistrationForm::new(roles());
            form.prev_field();
            assert!(form.is_submit_row_active());
            assert!(form.active_field_id().is_none());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = RegistrationForm::new(roles());
            form.set_active_field(100);
            assert_eq!(form.active_field_index, RegistrationForm::SUBMIT_ROW);
        }

        #[test]
        fn test_field_lookup_by_id() {
            let form = RegistrationForm::new(roles());
            assert_eq!(form.field(FieldId::Name).label, "Name");
            assert_eq!(form.field(FieldId::Role).label, "Role");
            assert_eq!(form.field(FieldId::Checkbox).label, "Terms of Service");
        }

        #[test]
        fn test_input_shapes() {
            let mut form = RegistrationForm::new(roles());
            type_into(&mut form.name, "Ada");
            form.checkbox.toggle_value();
            assert_eq!(form.input(FieldId::Name), FieldInput::Text("Ada"));
            assert_eq!(form.input(FieldId::Checkbox), FieldInput::Bool(true));
        }

        #[test]
        fn test_payload_mirrors_values() {
            let mut form = RegistrationForm::new(roles());
            type_into(&mut form.name, "Ada");
            type_into(&mut form.email, "ada@example.com");
            type_into(&mut form.password, "pw");
            form.role.select_next();
            form.checkbox.toggle_value();

            let payload = form.payload();
            assert_eq!(
                payload,
                UserPayload {
                    name: "Ada".to_string(),
                    email: "ada@example.com".to_string(),
                    password: "pw".to_string(),
                    role: "Engineer".to_string(),
                    checkbox: true,
                }
            );
        }

        #[test]
        fn test_reset_clears_all_values() {
            let mut form = RegistrationForm::new(roles());
            type_into(&mut form.name, "Ada");
            type_into(&mut form.email, "ada@example.com");
            form.role.select_next();
            form.checkbox.toggle_value();
            form.active_field_index = RegistrationForm::SUBMIT_ROW;

            form.reset();

            assert_eq!(form.payload(), UserPayload::default());
            assert!(form.is_submit_row_active());
        }
    }
}
