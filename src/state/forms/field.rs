//! Form field value objects

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Text that is masked when rendered
    Secret(String),
    /// Single selection from a fixed option list (`None` = nothing selected)
    Choice {
        options: Vec<String>,
        selected: Option<usize>,
    },
    Toggle(bool),
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: String,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new text field
    pub fn text(label: &str) -> Self {
        Self {
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a new masked text field
    pub fn secret(label: &str) -> Self {
        Self {
            label: label.to_string(),
            value: FieldValue::Secret(String::new()),
        }
    }

    /// Create a new choice field with nothing selected
    pub fn choice(label: &str, options: Vec<String>) -> Self {
        Self {
            label: label.to_string(),
            value: FieldValue::Choice {
                options,
                selected: None,
            },
        }
    }

    /// Create a new unchecked toggle
    pub fn toggle(label: &str) -> Self {
        Self {
            label: label.to_string(),
            value: FieldValue::Toggle(false),
        }
    }

    /// Get the text value.
    ///
    /// Choice fields yield the selected option (or `""`), toggles yield `""`.
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Secret(s) => s,
            FieldValue::Choice { options, selected } => selected
                .and_then(|i| options.get(i))
                .map(String::as_str)
                .unwrap_or(""),
            FieldValue::Toggle(_) => "",
        }
    }

    /// Get the toggle value (false for non-toggle fields)
    pub fn as_bool(&self) -> bool {
        matches!(self.value, FieldValue::Toggle(true))
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.value, FieldValue::Choice { .. })
    }

    pub fn is_toggle(&self) -> bool {
        matches!(self.value, FieldValue::Toggle(_))
    }

    /// Whether typing into this field edits its text
    pub fn is_editable_text(&self) -> bool {
        matches!(self.value, FieldValue::Text(_) | FieldValue::Secret(_))
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Secret(s) => s.push(c),
            // Space toggles a checkbox
            FieldValue::Toggle(b) if c == ' ' => *b = !*b,
            _ => {}
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) | FieldValue::Secret(s) = &mut self.value {
            s.pop();
        }
    }

    /// Flip a toggle field
    pub fn toggle_value(&mut self) {
        if let FieldValue::Toggle(b) = &mut self.value {
            *b = !*b;
        }
    }

    /// Move a choice to the next option; wraps through "nothing selected"
    pub fn select_next(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            *selected = match *selected {
                None if !options.is_empty() => Some(0),
                Some(i) if i + 1 < options.len() => Some(i + 1),
                _ => None,
            };
        }
    }

    /// Move a choice to the previous option; wraps through "nothing selected"
    pub fn select_prev(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            *selected = match *selected {
                None if !options.is_empty() => Some(options.len() - 1),
                Some(i) if i > 0 => Some(i - 1),
                _ => None,
            };
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Secret(s) => s.clear(),
            FieldValue::Choice { selected, .. } => *selected = None,
            FieldValue::Toggle(b) => *b = false,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Secret(s) => "•".repeat(s.chars().count()),
            FieldValue::Choice { .. } => {
                let selected = self.as_text();
                if selected.is_empty() {
                    "◂ none selected ▸".to_string()
                } else {
                    format!("◂ {selected} ▸")
                }
            }
            FieldValue::Toggle(true) => "[x]".to_string(),
            FieldValue::Toggle(false) => "[ ]".to_string(),
        }
    }
}
