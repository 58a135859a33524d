//! Client-side presentation of the links API.
//!
//! Everything here is pure: state transitions, text rendering and export
//! serialization. Callers do the I/O (HTTP requests, writing files) and pass
//! results through these functions.
//!
//! - [`state`] - [`ClientState`] and its transitions
//! - [`render`] - Link cards and the saved-links label
//! - [`export`] - Backup file name and JSON body

pub mod export;
pub mod render;
pub mod state;

pub use export::{ExportError, export_file_name, export_json};
pub use render::{
    escape_html, link_count_label, render_edit_form, render_link_card, render_link_card_html,
    render_links,
};
pub use state::{ClientState, SaveTarget};
