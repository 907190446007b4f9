//! Error handling and display for the CLI.

use arm_id::IdError;
use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unknown resource kind: {0}")]
    UnknownKind(String),

    #[error("Invalid field assignment {assignment:?}: {reason}")]
    InvalidField { assignment: String, reason: String },

    #[error("{0}")]
    Id(#[from] IdError),

    #[error("{invalid} of {total} IDs failed validation")]
    ValidationFailed { invalid: usize, total: usize },

    #[error("No resource kind accepts {0:?}")]
    NotFound(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Create a field assignment error.
    pub fn invalid_field(assignment: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            assignment: assignment.into(),
            reason: reason.into(),
        }
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    // Check for specific error types and provide hints
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::UnknownKind(_) | CliError::NotFound(_) => {
                eprintln!(
                    "\n{}",
                    "Hint: Run `armid kinds` to list the known resource kinds.".yellow()
                );
            }
            CliError::InvalidField { .. } => {
                eprintln!(
                    "\n{}",
                    "Hint: Fields are passed as name=value, see `armid kinds` for names.".yellow()
                );
            }
            CliError::Id(id_err) if id_err.is_malformed() => {
                eprintln!(
                    "\n{}",
                    "Hint: IDs are /key/value pairs, check for doubled or missing slashes."
                        .yellow()
                );
            }
            CliError::Id(IdError::MissingSubscription { .. }) => {
                eprintln!(
                    "\n{}",
                    "Hint: Keys are case-sensitive; tenant-scoped IDs need --tenant.".yellow()
                );
            }
            _ => {}
        }
    }
}
