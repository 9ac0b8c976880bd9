//! Reusable UI components

mod button;
mod dialog;

pub use button::{render_form_buttons, BUTTON_HEIGHT};
pub use dialog::render_notice_dialog;
