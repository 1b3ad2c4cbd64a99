//! Application state definitions

use super::forms::{FieldId, Form, RegistrationForm};
use serde::{Deserialize, Serialize};

/// Request body posted to the registration endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub checkbox: bool,
}

/// Record returned by the registration endpoint.
///
/// The shape is owned by the remote service, so it is kept as raw JSON and
/// rendered verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmittedUser(pub serde_json::Value);

impl SubmittedUser {
    /// Pretty-printed JSON for display
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

/// Current validation message per field (empty string = valid)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorState {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub checkbox: String,
}

impl ErrorState {
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
            FieldId::Role => &self.role,
            FieldId::Checkbox => &self.checkbox,
        }
    }

    pub fn set(&mut self, field: FieldId, message: impl Into<String>) {
        let slot = match field {
            FieldId::Name => &mut self.name,
            FieldId::Email => &mut self.email,
            FieldId::Password => &mut self.password,
            FieldId::Role => &mut self.role,
            FieldId::Checkbox => &mut self.checkbox,
        };
        *slot = message.into();
    }

    pub fn clear(&mut self, field: FieldId) {
        self.set(field, String::new());
    }

    /// True when no field carries a message
    pub fn is_empty(&self) -> bool {
        FieldId::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Registration form values and focus
    pub form: RegistrationForm,
    /// Inline validation messages
    pub errors: ErrorState,
    /// Submit is only reachable while this is false
    pub submit_disabled: bool,
    /// Records returned by the endpoint, newest first
    pub users: Vec<SubmittedUser>,
    /// Scroll offset of the results panel
    pub scroll_offset: usize,
}

impl AppState {
    pub fn new(roles: Vec<String>) -> Self {
        Self {
            form: RegistrationForm::new(roles),
            errors: ErrorState::default(),
            submit_disabled: true,
            users: Vec::new(),
            scroll_offset: 0,
        }
    }

    /// Move to next form row
    pub fn next_form_field(&mut self) {
        self.form.next_field();
    }

    /// Move to previous form row
    pub fn prev_form_field(&mut self) {
        self.form.prev_field();
    }

    /// Lines of the results panel: each record's pretty JSON, blank-line separated
    pub fn result_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (idx, user) in self.users.iter().enumerate() {
            if idx > 0 {
                lines.push(String::new());
            }
            lines.extend(user.pretty().lines().map(str::to_string));
        }
        lines
    }

    /// Scroll results down one line, stopping at the last line
    pub fn scroll_down(&mut self) {
        let max = self.result_lines().len().saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + 1).min(max);
    }

    /// Scroll results up one line
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Record a successful submission and start over with an empty form
    pub fn accept_submission(&mut self, user: SubmittedUser) {
        self.users.insert(0, user);
        self.form.reset();
        self.errors = ErrorState::default();
        self.scroll_offset = 0;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    mod payload {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_serializes_with_form_keys() {
            let payload = UserPayload {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                password: "pw".to_string(),
                role: "Engineer".to_string(),
                checkbox: true,
            };
            let value = serde_json::to_value(&payload).unwrap();
            assert_eq!(
                value,
                json!({
                    "name": "Ada",
                    "email": "ada@example.com",
                    "password": "pw",
                    "role": "Engineer",
                    "checkbox": true,
                })
            );
        }
    }

    mod submitted_user {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_deserializes_any_object() {
            let user: SubmittedUser =
                serde_json::from_str(r#"{"id":"42","createdAt":"2020-01-01"}"#).unwrap();
            assert_eq!(user.0["id"], "42");
        }

        #[test]
        fn test_pretty_is_multiline() {
            let user = SubmittedUser(json!({"id": "1", "name": "Ada"}));
            let pretty = user.pretty();
            assert!(pretty.contains('\n'));
            assert!(pretty.contains("\"name\": \"Ada\""));
        }
    }

    mod error_state {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_empty() {
            assert!(ErrorState::default().is_empty());
        }

        #[test]
        fn test_set_and_clear() {
            let mut errors = ErrorState::default();
            errors.set(FieldId::Email, "bad");
            assert_eq!(errors.get(FieldId::Email), "bad");
            assert!(!errors.is_empty());
            errors.clear(FieldId::Email);
            assert!(errors.is_empty());
        }
    }

    mod app_state {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_starts_disabled() {
            let state = AppState::new(vec!["Engineer".to_string()]);
            assert!(state.submit_disabled);
            assert!(state.users.is_empty());
        }

        #[test]
        fn test_accept_submission_prepends_and_resets() {
            let mut state = AppState::new(vec!["Engineer".to_string()]);
            state.accept_submission(SubmittedUser(json!({"id": "1"})));
            state.form.name.push_char('B');
            state.errors.set(FieldId::Email, "email is a required field");
            state.accept_submission(SubmittedUser(json!({"id": "2"})));

            assert_eq!(state.users.len(), 2);
            assert_eq!(state.users[0].0["id"], "2");
            assert_eq!(state.form.name.as_text(), "");
            assert!(state.errors.is_empty());
        }

        #[test]
        fn test_scroll_up_saturates() {
            let mut state = AppState::default();
            state.users.push(SubmittedUser(json!({"id": "1"})));
            state.scroll_up();
            assert_eq!(state.scroll_offset, 0);
            state.scroll_down();
            assert_eq!(state.scroll_offset, 1);
        }

        #[test]
        fn test_scroll_down_stops_at_last_line() {
            let mut state = AppState::default();
            state.scroll_down();
            assert_eq!(state.scroll_offset, 0);

            state.users.push(SubmittedUser(json!({"id": "1", "name": "Ada"})));
            state.users.push(SubmittedUser(json!({"id": "2"})));
            // 4 + blank separator + 3
            assert_eq!(state.result_lines().len(), 8);
            for _ in 0..20 {
                state.scroll_down();
            }
            assert_eq!(state.scroll_offset, 7);
        }
    }
}
