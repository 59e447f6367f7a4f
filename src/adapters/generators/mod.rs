//! Document generators
//!
//! One [`FormatGenerator`] implementation per format family:
//!
//! - [`markup`] - text family (txt/md/json), assembled natively
//! - [`pdf`] / [`docx`] - binary formats, delegated to an external
//!   converter tool through [`pandoc`]
//!
//! The format registry holds one instance per format; the text family
//! shares a single [`MarkupGenerator`] across its three formats.

pub mod docx;
pub mod markup;
pub mod pandoc;
pub mod pdf;
pub mod traits;

pub use docx::DocxGenerator;
pub use markup::MarkupGenerator;
pub use pdf::PdfGenerator;
pub use traits::{FormatGenerator, GenerationOutput};

use crate::domain::meeting::Meeting;

/// Build the suggested filename for an exported meeting
///
/// The title is slugified (lowercase, alphanumerics and dashes), the
/// meeting date appended, and the format label used as the extension:
/// `quarterly-planning-2026-08-07.pdf`.
pub fn document_filename(meeting: &Meeting, extension: &str) -> String {
    let slug = slugify(&meeting.title);
    let date = meeting.occurred_at.format("%Y-%m-%d");
    if slug.is_empty() {
        format!("meeting-{date}.{extension}")
    } else {
        format!("{slug}-{date}.{extension}")
    }
}

fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_dash = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash && !slug.is_empty() {
            slug.push('-');
            last_was_dash = true;
        }
    }
    slug.trim_end_matches('-').to_string()
}
