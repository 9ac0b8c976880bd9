//! Submission draft record and field-level updates

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Scalar fields of a [`SubmissionDraft`] that can be set by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Image,
    Link,
    Description,
    ActiveMembers,
    Category,
}

impl DraftField {
    /// Name used for this field in the multipart payload
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Image => "image",
            Self::Link => "link",
            Self::Description => "description",
            Self::ActiveMembers => "activeMembers",
            Self::Category => "category",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Returned when a field name does not match any scalar draft field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for DraftField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "image" => Ok(Self::Image),
            "link" => Ok(Self::Link),
            "description" => Ok(Self::Description),
            "activeMembers" => Ok(Self::ActiveMembers),
            "category" => Ok(Self::Category),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// In-progress metaverse listing held in memory until submitted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionDraft {
    pub title: String,
    /// Image file on disk; read when the draft is submitted
    pub image: Option<PathBuf>,
    pub link: String,
    pub description: String,
    /// Digits only, kept as text the way it is sent
    pub active_members: String,
    pub socials: Vec<String>,
    pub category: String,
    pub news: Vec<String>,
}

impl SubmissionDraft {
    /// Replace a single scalar field.
    ///
    /// A blank value for [`DraftField::Image`] clears the file reference.
    /// Other image text is kept as typed; see [`Self::image_path`].
    pub fn set_field(&mut self, field: DraftField, value: String) {
        tracing::debug!(%field, "Handling change");
        match field {
            DraftField::Title => self.title = value,
            DraftField::Image => {
                let image = (!value.trim().is_empty()).then(|| PathBuf::from(value));
                self.set_image(image);
            }
            DraftField::Link => self.link = value,
            DraftField::Description => self.description = value,
            DraftField::ActiveMembers => self.active_members = value,
            DraftField::Category => self.category = value,
        }
    }

    /// Replace a field given its payload name (e.g. `activeMembers`)
    #[cfg(test)]
    pub fn set_field_by_name(&mut self, name: &str, value: String) -> Result<(), UnknownField> {
        let field = name.parse::<DraftField>()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Replace the image file reference
    pub fn set_image(&mut self, image: Option<PathBuf>) {
        self.image = image;
    }

    /// Image file to upload, with surrounding whitespace removed
    pub fn image_path(&self) -> Option<PathBuf> {
        let image = self.image.as_ref()?;
        let trimmed = image.to_string_lossy().trim().to_string();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }

    /// Read back a scalar field as text
    pub fn field_text(&self, field: DraftField) -> String {
        match field {
            DraftField::Title => self.title.clone(),
            DraftField::Image => self
                .image
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            DraftField::Link => self.link.clone(),
            DraftField::Description => self.description.clone(),
            DraftField::ActiveMembers => self.active_members.clone(),
            DraftField::Category => self.category.clone(),
        }
    }

    /// Restore the empty initial state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
