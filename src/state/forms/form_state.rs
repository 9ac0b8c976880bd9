//! Submission form state: draft, list editors, focus and error message

use super::draft::SubmissionDraft;
use super::field::{FormField, FormRow, FORM_ROWS};
use super::list_editor::{ListEditor, ListKind};

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
    fn get_row(&self, index: usize) -> Option<FormRow>;
}

/// Buttons on the last row of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    Reset,
    #[default]
    Submit,
}

impl FormButton {
    pub const ALL: [FormButton; 2] = [FormButton::Reset, FormButton::Submit];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Reset => "Reset",
            Self::Submit => "Confirm and Save",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Reset => Self::Submit,
            Self::Submit => Self::Reset,
        }
    }
}

/// Everything the submission form holds between key events
#[derive(Debug, Clone, Default)]
pub struct SubmissionForm {
    pub draft: SubmissionDraft,
    pub socials: ListEditor,
    pub news: ListEditor,
    pub active_field_index: usize,
    pub selected_button: FormButton,
    /// Last submission error, shown until the next submit or reset
    pub error_message: Option<String>,
}

impl SubmissionForm {
    /// Row that currently has focus
    pub fn active_row(&self) -> FormRow {
        self.get_row(self.active_field_index).unwrap_or(FormRow::Buttons)
    }

    pub fn editor(&self, kind: ListKind) -> &ListEditor {
        match kind {
            ListKind::Socials => &self.socials,
            ListKind::News => &self.news,
        }
    }

    pub fn editor_mut(&mut self, kind: ListKind) -> &mut ListEditor {
        self.editor_and_list(kind).0
    }

    pub fn entries(&self, kind: ListKind) -> &[String] {
        match kind {
            ListKind::Socials => &self.draft.socials,
            ListKind::News => &self.draft.news,
        }
    }

    fn editor_and_list(&mut self, kind: ListKind) -> (&mut ListEditor, &mut Vec<String>) {
        match kind {
            ListKind::Socials => (&mut self.socials, &mut self.draft.socials),
            ListKind::News => (&mut self.news, &mut self.draft.news),
        }
    }

    /// Commit the pending entry of `kind`; blank entries are ignored
    pub fn add_entry(&mut self, kind: ListKind) -> bool {
        let (editor, list) = self.editor_and_list(kind);
        editor.add(list)
    }

    /// Remove entry `index` from the `kind` list
    pub fn remove_entry(&mut self, kind: ListKind, index: usize) -> Option<String> {
        let (editor, list) = self.editor_and_list(kind);
        editor.remove(list, index)
    }

    /// Remove the highlighted entry of the `kind` list
    pub fn remove_selected(&mut self, kind: ListKind) -> Option<String> {
        let index = self.editor(kind).selected?;
        self.remove_entry(kind, index)
    }

    /// Type a character into the focused row
    pub fn input_char(&mut self, c: char) {
        match self.active_row() {
            FormRow::Field(field) => {
                if field.kind.accepts(c) {
                    let mut value = self.draft.field_text(field.field);
                    value.push(c);
                    self.set_text(field, value);
                }
            }
            FormRow::List(kind) => {
                if !c.is_control() {
                    let (editor, _) = self.editor_and_list(kind);
                    editor.selected = None;
                    editor.pending.push(c);
                }
            }
            FormRow::Buttons => {}
        }
    }

    /// Insert a line break into the focused multi-line field
    pub fn input_newline(&mut self) {
        if let FormRow::Field(field) = self.active_row() {
            if field.is_multiline() {
                self.draft.description.push('\n');
            }
        }
    }

    /// Delete the last character of the focused row
    pub fn backspace(&mut self) {
        match self.active_row() {
            FormRow::Field(field) => {
                let mut value = self.draft.field_text(field.field);
                value.pop();
                self.set_text(field, value);
            }
            FormRow::List(kind) => {
                self.editor_and_list(kind).0.pending.pop();
            }
            FormRow::Buttons => {}
        }
    }

    fn set_text(&mut self, field: FormField, value: String) {
        self.draft.set_field(field.field, value);
    }

    pub fn next_button(&mut self) {
        self.selected_button = self.selected_button.toggle();
    }

    pub fn prev_button(&mut self) {
        self.selected_button = self.selected_button.toggle();
    }

    /// Restore the initial empty form, clearing any error
    pub fn reset(&mut self) {
        tracing::debug!("Resetting form data");
        self.draft.reset();
        self.socials = ListEditor::default();
        self.news = ListEditor::default();
        self.active_field_index = 0;
        self.selected_button = FormButton::default();
        self.error_message = None;
    }
}

impl Form for SubmissionForm {
    fn field_count(&self) -> usize {
        FORM_ROWS.len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(FORM_ROWS.len() - 1);
    }
    fn get_row(&self, index: usize) -> Option<FormRow> {
        FORM_ROWS.get(index).copied()
    }
}
