//! Application state and core logic

use crate::api::{MultipartPayload, SubmissionApi};
use crate::state::{AppState, Form, FormButton, FormRow, Notice};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Confirmation shown after the server accepts a submission
pub const SUCCESS_MESSAGE: &str = "Form submitted successfully!";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client used to post the form
    api: Box<dyn SubmissionApi>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App around a submission client
    pub fn new(api: Box<dyn SubmissionApi>) -> Self {
        let state = AppState::new(api.endpoint());
        Self {
            state,
            api,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Handle a key press
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Notice dialogs are modal
        if self.state.has_notice() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notice();
            }
            return Ok(());
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Char('s') if ctrl => self.submit().await,
            KeyCode::Char('r') if ctrl => self.reset(),
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            _ => self.handle_row_key(key).await,
        }
        Ok(())
    }

    /// Keys whose meaning depends on the focused row
    async fn handle_row_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.form;
        match form.active_row() {
            FormRow::Field(field) => match key.code {
                KeyCode::Enter if field.is_multiline() => form.input_newline(),
                KeyCode::Enter | KeyCode::Down => form.next_field(),
                KeyCode::Up => form.prev_field(),
                KeyCode::Backspace => form.backspace(),
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    form.input_char(c)
                }
                _ => {}
            },
            FormRow::List(kind) => match key.code {
                KeyCode::Enter => {
                    if form.editor(kind).selected.is_some() {
                        form.remove_selected(kind);
                    } else {
                        form.add_entry(kind);
                    }
                }
                KeyCode::Delete => {
                    form.remove_selected(kind);
                }
                KeyCode::Down => {
                    let len = form.entries(kind).len();
                    if form.editor(kind).selected.is_none() && len == 0 {
                        form.next_field();
                    } else {
                        form.editor_mut(kind).select_next(len);
                    }
                }
                KeyCode::Up => {
                    if form.editor(kind).selected.is_none() {
                        form.prev_field();
                    } else {
                        form.editor_mut(kind).select_prev();
                    }
                }
                KeyCode::Backspace => form.backspace(),
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    form.input_char(c)
                }
                _ => {}
            },
            FormRow::Buttons => match key.code {
                KeyCode::Left => form.prev_button(),
                KeyCode::Right => form.next_button(),
                KeyCode::Up => form.prev_field(),
                KeyCode::Down => form.next_field(),
                KeyCode::Enter => {
                    let button = form.selected_button;
                    match button {
                        FormButton::Reset => self.reset(),
                        FormButton::Submit => self.submit().await,
                    }
                }
                _ => {}
            },
        }
    }

    /// Reset the form and clear any error
    pub fn reset(&mut self) {
        self.state.form.reset();
    }

    /// Post the current draft once and record the outcome.
    ///
    /// On success the form is reset; on failure the draft is kept and the
    /// error text is stored on the form and shown in a dialog.
    pub async fn submit(&mut self) {
        self.state.form.error_message = None;
        tracing::debug!(draft = ?self.state.form.draft, "Form data before submission");

        let result = match MultipartPayload::from_draft(&self.state.form.draft) {
            Ok(payload) => self.api.submit(payload).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(response) => {
                tracing::info!(
                    status = response.status,
                    body = %response.body,
                    "Form submitted"
                );
                self.state.form.reset();
                self.state.notice = Some(Notice::Success(SUCCESS_MESSAGE.to_string()));
            }
            Err(err) => {
                tracing::error!(error = %err, "Error occurred while submitting form");
                let message = err.user_message();
                self.state.form.error_message = Some(message.clone());
                self.state.notice = Some(Notice::Error(message));
            }
        }
    }
}
