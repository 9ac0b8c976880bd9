//! Multipart payload built from a submission draft

use super::error::SubmitError;
use crate::state::SubmissionDraft;
use reqwest::multipart::{Form, Part};
use std::path::{Path, PathBuf};

/// Body of one multipart part
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartBody {
    Text(String),
    /// File read from disk when the form is assembled
    File(PathBuf),
}

/// One named part of the payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadPart {
    pub name: &'static str,
    pub body: PartBody,
}

impl PayloadPart {
    fn text(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            body: PartBody::Text(value.into()),
        }
    }
}

/// Ordered parts describing a `multipart/form-data` request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultipartPayload {
    pub parts: Vec<PayloadPart>,
}

impl MultipartPayload {
    /// Serialize a draft. Lists become JSON array text and a missing image
    /// is sent as the text `null`.
    pub fn from_draft(draft: &SubmissionDraft) -> Result<Self, SubmitError> {
        let socials = encode_list("socials", &draft.socials)?;
        let news = encode_list("news", &draft.news)?;

        let image = match draft.image_path() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Appending image file");
                PayloadPart {
                    name: "image",
                    body: PartBody::File(path),
                }
            }
            None => PayloadPart::text("image", "null"),
        };

        let parts = vec![
            PayloadPart::text("title", draft.title.as_str()),
            image,
            PayloadPart::text("link", draft.link.as_str()),
            PayloadPart::text("description", draft.description.as_str()),
            PayloadPart::text("activeMembers", draft.active_members.as_str()),
            socials,
            PayloadPart::text("category", draft.category.as_str()),
            news,
        ];

        Ok(Self { parts })
    }

    /// Look up a part by name
    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&PartBody> {
        self.parts.iter().find(|p| p.name == name).map(|p| &p.body)
    }

    /// Assemble the request body, reading any attached files
    pub async fn into_form(self) -> Result<Form, SubmitError> {
        let mut form = Form::new();
        for part in self.parts {
            form = match part.body {
                PartBody::Text(value) => form.text(part.name, value),
                PartBody::File(path) => form.part(part.name, file_part(&path).await?),
            };
        }
        Ok(form)
    }
}

fn encode_list(name: &'static str, items: &[String]) -> Result<PayloadPart, SubmitError> {
    tracing::debug!(name, count = items.len(), "Appending list as JSON string");
    let json = serde_json::to_string(items).map_err(|e| SubmitError::Request(e.to_string()))?;
    Ok(PayloadPart::text(name, json))
}

async fn file_part(path: &Path) -> Result<Part, SubmitError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| SubmitError::Request(format!("{}: {}", path.display(), e)))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(image_mime(path))
        .map_err(|e| SubmitError::Request(e.to_string()))
}

/// Content type for an image file, from its extension
pub fn image_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        Some("avif") => "image/avif",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn sample_draft() -> SubmissionDraft {
        SubmissionDraft {
            title: "Sandbox".to_string(),
            image: None,
            link: "https://sandbox.game".to_string(),
            description: "Voxel world".to_string(),
            active_members: "1200".to_string(),
            socials: vec!["https://x.com/sandbox".to_string()],
            category: "Gaming".to_string(),
            news: vec![],
        }
    }

    #[test]
    fn test_part_order_follows_draft() {
        let payload = MultipartPayload::from_draft(&sample_draft()).unwrap();
        let names: Vec<_> = payload.parts.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec![
                "title",
                "image",
                "link",
                "description",
                "activeMembers",
                "socials",
                "category",
                "news"
            ]
        );
    }

    #[test]
    fn test_lists_are_json_text() {
        let payload = MultipartPayload::from_draft(&sample_draft()).unwrap();
        assert_eq!(
            payload.get("socials"),
            Some(&PartBody::Text(r#"["https://x.com/sandbox"]"#.to_string()))
        );
        assert_eq!(payload.get("news"), Some(&PartBody::Text("[]".to_string())));
    }

    #[test]
    fn test_scalar_fields_are_plain_text() {
        let payload = MultipartPayload::from_draft(&sample_draft()).unwrap();
        assert_eq!(
            payload.get("activeMembers"),
            Some(&PartBody::Text("1200".to_string()))
        );
        assert_eq!(
            payload.get("title"),
            Some(&PartBody::Text("Sandbox".to_string()))
        );
    }

    #[test]
    fn test_missing_image_sent_as_null_text() {
        let payload = MultipartPayload::from_draft(&sample_draft()).unwrap();
        assert_eq!(payload.get("image"), Some(&PartBody::Text("null".to_string())));
    }

    #[test]
    fn test_image_attached_as_file() {
        let mut draft = sample_draft();
        draft.image = Some(PathBuf::from("/tmp/logo.png"));
        let payload = MultipartPayload::from_draft(&draft).unwrap();
        assert_eq!(
            payload.get("image"),
            Some(&PartBody::File(PathBuf::from("/tmp/logo.png")))
        );
    }

    #[test]
    fn test_image_path_trimmed_once() {
        let mut draft = sample_draft();
        draft.image = Some(PathBuf::from("  /tmp/logo.png "));
        let payload = MultipartPayload::from_draft(&draft).unwrap();
        assert_eq!(
            payload.get("image"),
            Some(&PartBody::File(PathBuf::from("/tmp/logo.png")))
        );
    }

    #[test]
    fn test_image_mime() {
        assert_eq!(image_mime(Path::new("a.PNG")), "image/png");
        assert_eq!(image_mime(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(image_mime(Path::new("a")), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_into_form_reads_image() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"\x89PNG").unwrap();

        let mut draft = sample_draft();
        draft.image = Some(file.path().to_path_buf());
        let payload = MultipartPayload::from_draft(&draft).unwrap();

        assert!(payload.into_form().await.is_ok());
    }

    #[tokio::test]
    async fn test_into_form_reads_image_typed_with_trailing_space() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"\x89PNG").unwrap();

        let mut draft = sample_draft();
        draft.image = Some(PathBuf::from(format!("{} ", file.path().display())));
        let payload = MultipartPayload::from_draft(&draft).unwrap();

        assert!(payload.into_form().await.is_ok());
    }

    #[tokio::test]
    async fn test_into_form_missing_image_is_request_error() {
        let mut draft = sample_draft();
        draft.image = Some(PathBuf::from("/definitely/not/here.png"));
        let payload = MultipartPayload::from_draft(&draft).unwrap();

        match payload.into_form().await {
            Err(SubmitError::Request(text)) => assert!(text.contains("/definitely/not/here.png")),
            Err(other) => panic!("unexpected error: {other:?}"),
            Ok(_) => panic!("expected a request error"),
        }
    }
}
