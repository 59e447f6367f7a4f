//! External converter invocation
//!
//! The PDF and DOCX generators do not render bytes themselves; they stage
//! markdown input and hand it to a converter tool (pandoc by default). The
//! capability probe is a `PATH` lookup and performs no side effects.

use crate::domain::GeneratorError;
use std::path::Path;
use tokio::process::Command;

/// Whether the converter tool can be found on `PATH`
///
/// Absolute paths are checked directly.
pub fn tool_available(tool: &str) -> bool {
    let path = Path::new(tool);
    if path.is_absolute() {
        return path.is_file();
    }
    which::which(tool).is_ok()
}

/// Convert a markdown document to the given output extension
///
/// Stages the markdown in a scratch directory, invokes the tool as
/// `<tool> <input.md> -o <output.<ext>>`, and returns the produced bytes.
/// The scratch directory is removed when the call returns.
///
/// # Errors
///
/// Returns [`GeneratorError::ToolUnavailable`] when the tool is missing,
/// [`GeneratorError::ConversionFailed`] when it exits non-zero, and
/// [`GeneratorError::OutputMissing`] when it exits cleanly without output.
pub async fn convert_markdown(
    tool: &str,
    markdown: &str,
    extension: &str,
) -> std::result::Result<Vec<u8>, GeneratorError> {
    if !tool_available(tool) {
        return Err(GeneratorError::ToolUnavailable(tool.to_string()));
    }

    let scratch = tempfile::tempdir().map_err(|e| GeneratorError::Io(e.to_string()))?;
    let input_path = scratch.path().join("document.md");
    let output_path = scratch.path().join(format!("document.{extension}"));

    tokio::fs::write(&input_path, markdown)
        .await
        .map_err(|e| GeneratorError::Io(e.to_string()))?;

    tracing::debug!(tool = %tool, extension = %extension, "Invoking converter");

    let output = Command::new(tool)
        .arg(&input_path)
        .arg("-o")
        .arg(&output_path)
        .output()
        .await
        .map_err(|e| GeneratorError::Io(e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GeneratorError::ConversionFailed(format!(
            "{tool} exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    match tokio::fs::read(&output_path).await {
        Ok(bytes) if !bytes.is_empty() => Ok(bytes),
        Ok(_) => Err(GeneratorError::OutputMissing(format!(
            "{tool} wrote an empty {extension} file"
        ))),
        Err(_) => Err(GeneratorError::OutputMissing(format!(
            "{tool} did not produce {}",
            output_path.display()
        ))),
    }
}
