//! Form rendering module
//!
//! - `field_renderer`: scalar field rendering
//! - `list_editor`: social/news list editors
//! - `submission_form`: the full metaverse form

mod field_renderer;
mod list_editor;
mod submission_form;

pub use submission_form::draw_submission_form;
