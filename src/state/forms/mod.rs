//! Form domain layer
//!
//! Render-agnostic state for the submission form: the draft record, the
//! two list editors and keyboard focus. All updates are plain methods so
//! they can be tested without a terminal.

mod draft;
mod field;
mod form_state;
mod list_editor;

pub use draft::{DraftField, SubmissionDraft};
pub use field::{FieldKind, FormField, FormRow, FORM_ROWS};
pub use form_state::{Form, FormButton, SubmissionForm};
pub use list_editor::{ListEditor, ListKind};
