//! Static tables: format registry and template catalog
//!
//! - [`formats`] - the five export formats, their MIME types, and their
//!   generator instances
//! - [`templates`] - named option presets

pub mod formats;
pub mod templates;

pub use formats::{mime_type_for, FormatDescriptor, FormatRegistry, OCTET_STREAM};
pub use templates::{ExportTemplate, TemplateCatalog};
