//! Application state and core logic

use crate::api::{ApiClient, RegistrationApi};
use crate::config::OnboardConfig;
use crate::state::{AppState, FieldId};
use crate::validation::Schema;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App<C = ApiClient> {
    /// Current application state
    pub state: AppState,
    /// Client used to submit registrations
    pub client: C,
    /// Validation rules for the form
    schema: Schema,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the status bar after a successful submit
    pub status_message: Option<String>,
}

impl App<ApiClient> {
    /// Create a new App instance backed by the HTTP client
    pub fn new(config: &OnboardConfig) -> Result<Self> {
        let client = ApiClient::new(config)?;
        tracing::info!(endpoint = client.endpoint(), "registration client ready");
        Ok(Self::with_client(client, config.roles()))
    }
}

impl<C: RegistrationApi> App<C> {
    /// Create an App around any registration client
    pub fn with_client(client: C, roles: Vec<String>) -> Self {
        let mut app = Self {
            state: AppState::new(roles),
            client,
            schema: Schema::registration(),
            quit: false,
            status_message: None,
        };
        app.sync_submit_state();
        app
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_submit_row = self.state.form.is_submit_row_active();
        let active = self.state.form.active_field_id();

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_form().await;
            }
            // Other control chords are not text input
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => {}
            KeyCode::Tab | KeyCode::Down => self.state.next_form_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_form_field(),
            KeyCode::PageDown => self.state.scroll_down(),
            KeyCode::PageUp => self.state.scroll_up(),
            KeyCode::Enter if on_submit_row => self.submit_form().await,
            _ => {
                if let Some(field) = active {
                    self.handle_field_key(field, key);
                }
            }
        }
        Ok(())
    }

    /// Edit the focused field
    fn handle_field_key(&mut self, field: FieldId, key: KeyEvent) {
        let form_field = self.state.form.field_mut(field);
        let changed = match key.code {
            KeyCode::Right | KeyCode::Char(' ') if form_field.is_choice() => {
                form_field.select_next();
                true
            }
            KeyCode::Left if form_field.is_choice() => {
                form_field.select_prev();
                true
            }
            KeyCode::Char(' ') | KeyCode::Enter if form_field.is_toggle() => {
                form_field.toggle_value();
                true
            }
            KeyCode::Char(c) if form_field.is_editable_text() => {
                form_field.push_char(c);
                true
            }
            KeyCode::Backspace if form_field.is_editable_text() => {
                form_field.pop_char();
                true
            }
            KeyCode::Enter => {
                self.state.next_form_field();
                false
            }
            _ => false,
        };

        if changed {
            self.input_changed(field);
        }
    }

    /// Re-validate `field` and resync submit enablement after an edit
    pub fn input_changed(&mut self, field: FieldId) {
        self.status_message = None;
        match self.schema.validate_at(field, self.state.form.input(field)) {
            Ok(()) => self.state.errors.clear(field),
            Err(err) => {
                tracing::debug!(field = field.as_str(), message = %err.message, "field invalid");
                self.state.errors.set(field, err.message);
            }
        }
        self.sync_submit_state();
    }

    /// Enable submit only while the whole form satisfies the schema
    fn sync_submit_state(&mut self) {
        self.state.submit_disabled = !self.schema.is_valid(&self.state.form);
    }

    /// Post the form; on success record the result and clear the form
    pub async fn submit_form(&mut self) {
        if self.state.submit_disabled {
            // Nothing is sent; surface every outstanding message instead
            self.state.errors = self.schema.validate(&self.state.form);
            tracing::debug!("submit ignored while form is invalid");
            return;
        }

        let payload = self.state.form.payload();
        match self.client.create_user(&payload).await {
            Ok(user) => {
                tracing::info!(role = %payload.role, "user registered");
                self.state.accept_submission(user);
                self.status_message = Some(format!("Registered {}", payload.name));
                self.sync_submit_state();
            }
            Err(err) => {
                tracing::error!("Failed to submit registration: {err}");
            }
        }
    }
}
