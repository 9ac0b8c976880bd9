//! Form row descriptors

use super::draft::DraftField;
use super::list_editor::ListKind;

/// How a row accepts input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    /// Digits only
    Number,
    /// Path to a file on disk
    FilePath,
}

impl FieldKind {
    /// Whether a typed character is accepted by this kind of field
    pub fn accepts(&self, c: char) -> bool {
        match self {
            FieldKind::Number => c.is_ascii_digit(),
            _ => !c.is_control(),
        }
    }
}

/// One focusable row of the submission form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    Field(FormField),
    List(ListKind),
    Buttons,
}

/// Static configuration of a scalar input row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub field: DraftField,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FormField {
    pub const fn new(
        field: DraftField,
        label: &'static str,
        placeholder: &'static str,
        kind: FieldKind,
        required: bool,
    ) -> Self {
        Self {
            field,
            label,
            placeholder,
            kind,
            required,
        }
    }

    pub fn is_multiline(&self) -> bool {
        self.kind == FieldKind::Multiline
    }
}

/// Rows in display and focus order
pub const FORM_ROWS: [FormRow; 9] = [
    FormRow::Field(FormField::new(
        DraftField::Title,
        "Enter Metaverse Name",
        "",
        FieldKind::Text,
        true,
    )),
    FormRow::Field(FormField::new(
        DraftField::Image,
        "Upload Image",
        "Path to an image file",
        FieldKind::FilePath,
        false,
    )),
    FormRow::Field(FormField::new(
        DraftField::Link,
        "Metaverse Link",
        "Enter metaverse URL",
        FieldKind::Text,
        true,
    )),
    FormRow::Field(FormField::new(
        DraftField::Description,
        "Description",
        "Enter a short description",
        FieldKind::Multiline,
        true,
    )),
    FormRow::Field(FormField::new(
        DraftField::ActiveMembers,
        "Active Members",
        "Enter count of active members",
        FieldKind::Number,
        true,
    )),
    FormRow::List(ListKind::Socials),
    FormRow::Field(FormField::new(
        DraftField::Category,
        "Category",
        "Enter category",
        FieldKind::Text,
        true,
    )),
    FormRow::List(ListKind::News),
    FormRow::Buttons,
];
