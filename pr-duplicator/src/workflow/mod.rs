//! GitHub Actions workflow commands and step outputs.
//!
//! See <https://docs.github.com/en/actions/reference/workflow-commands-for-github-actions>.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

const OUTPUT_DELIMITER: &str = "ghadelimiter_pr_duplicator";

/// Errors that can occur while writing step outputs.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Failed to append to the outputs file.
    #[error("Failed to write step outputs to '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Escapes a message for use in a workflow command.
#[must_use]
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Formats an `::error::` command, which marks the step as failed in the UI.
#[must_use]
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// Emits the failure annotation for `message`.
///
/// The caller is responsible for exiting with a non-zero code.
pub fn set_failed(message: &str) {
    println!("{}", error_command(message));
}

/// Appends step outputs to the file at `path`.
///
/// Values are written verbatim: single-line values as `name=value`, values
/// spanning lines with the `name<<DELIMITER` heredoc form.
///
/// # Errors
///
/// Returns [`WorkflowError::Io`] if the file cannot be written.
pub fn write_outputs(path: &Path, outputs: &[(&str, String)]) -> Result<(), WorkflowError> {
    debug!(path = %path.display(), count = outputs.len(), "Writing step outputs");

    let io_error = |source| WorkflowError::Io {
        path: path.display().to_string(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_error)?;

    for (name, value) in outputs {
        if value.contains(['\r', '\n']) {
            let delimiter = heredoc_delimiter(value);
            writeln!(file, "{name}<<{delimiter}\n{value}\n{delimiter}").map_err(io_error)?;
        } else {
            writeln!(file, "{name}={value}").map_err(io_error)?;
        }
    }

    Ok(())
}

/// Picks a heredoc delimiter that does not occur in `value`.
fn heredoc_delimiter(value: &str) -> String {
    let mut delimiter = OUTPUT_DELIMITER.to_string();
    while value.contains(&delimiter) {
        delimiter.push('_');
    }
    delimiter
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn escapes_command_data() {
        assert_eq!(escape_data("100%\r\ndone"), "100%25%0D%0Adone");
        assert_eq!(
            error_command("Validation Failed\nNo commits"),
            "::error::Validation Failed%0ANo commits"
        );
    }

    #[test]
    fn appends_outputs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("output");
        fs::write(&path, "existing=1\n").unwrap();

        write_outputs(
            &path,
            &[
                ("pr-url", "https://github.com/o/r/pull/6".to_string()),
                ("pr-number", "6".to_string()),
            ],
        )
        .unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "existing=1\npr-url=https://github.com/o/r/pull/6\npr-number=6\n"
        );
    }

    #[test]
    fn writes_output_values_verbatim() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("output");

        write_outputs(&path, &[("branch", "pr_duplicator_l10n%master_5".to_string())]).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "branch=pr_duplicator_l10n%master_5\n"
        );
    }

    #[test]
    fn writes_multiline_outputs_as_heredoc() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("output");

        write_outputs(&path, &[("notes", "line one\nline two".to_string())]).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "notes<<ghadelimiter_pr_duplicator\nline one\nline two\nghadelimiter_pr_duplicator\n"
        );
    }
}
