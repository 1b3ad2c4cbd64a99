//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod users;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw<C>(frame: &mut Frame, app: &App<C>) {
    let (form_area, results_area, status_area) = layout::create_layout(frame.area());

    forms::draw_registration(frame, form_area, &app.state);
    users::draw(frame, results_area, &app.state);

    layout::draw_status_bar(frame, status_area, app.status_message.as_deref());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockRegistrationApi;
    use crate::state::{FieldId, SubmittedUser};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use serde_json::json;

    fn test_app() -> App<MockRegistrationApi> {
        App::with_client(MockRegistrationApi::new(), vec!["Engineer".to_string()])
    }

    fn render(app: &App<MockRegistrationApi>) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_renders_all_fields_and_disabled_submit() {
        let screen = render(&test_app());
        for label in ["Name", "Email", "Password", "Role", "Terms of Service"] {
            assert!(screen.contains(label), "missing {label}");
        }
        assert!(screen.contains("Submit (complete the form)"));
        assert!(screen.contains("No users submitted yet."));
    }

    #[test]
    fn test_renders_inline_error() {
        let mut app = test_app();
        app.state
            .errors
            .set(FieldId::Email, "email must be a valid email");
        let screen = render(&app);
        assert!(screen.contains("email must be a valid email"));
    }

    #[test]
    fn test_password_is_masked() {
        let mut app = test_app();
        for c in "hunter2".chars() {
            app.state.form.password.push_char(c);
        }
        let screen = render(&app);
        assert!(!screen.contains("hunter2"));
        assert!(screen.contains("•••••••"));
    }

    #[test]
    fn test_renders_submitted_users() {
        let mut app = test_app();
        app.state
            .users
            .push(SubmittedUser(json!({"id": "314", "name": "Ada"})));
        let screen = render(&app);
        assert!(screen.contains("Submitted Users (1)"));
        assert!(screen.contains("\"id\": \"314\""));
    }

    #[test]
    fn test_status_message_replaces_hints() {
        let mut app = test_app();
        app.status_message = Some("Registered Ada".to_string());
        let screen = render(&app);
        assert!(screen.contains("Registered Ada"));
    }
}
