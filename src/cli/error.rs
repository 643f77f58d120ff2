//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("{0}")]
    Usage(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Infra(e) => match e {
                InfraError::Entropy(_) => crate::exitcode::OSERR,
                InfraError::Application(app) => match app {
                    ApplicationError::Domain(_) => crate::exitcode::USAGE,
                    ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                    ApplicationError::OperationFailed { source, .. } => {
                        if source.is::<std::io::Error>() {
                            crate::exitcode::IOERR
                        } else {
                            crate::exitcode::SOFTWARE
                        }
                    }
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_domain_error_is_usage() {
        let err = CliError::from(ApplicationError::Domain(DomainError::InvalidLayers(0)));
        assert_eq!(err.exit_code(), crate::exitcode::USAGE);
    }

    #[test]
    fn test_config_error_is_config() {
        let err = CliError::from(ApplicationError::Config {
            message: "bad".into(),
        });
        assert_eq!(err.exit_code(), crate::exitcode::CONFIG);
    }

    #[test]
    fn test_write_failure_is_ioerr() {
        let err = CliError::from(ApplicationError::OperationFailed {
            context: "write row 0".into(),
            source: Box::new(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed")),
        });
        assert_eq!(err.exit_code(), crate::exitcode::IOERR);
    }

    #[test]
    fn test_entropy_failure_is_oserr() {
        let source = std::io::Error::new(std::io::ErrorKind::Other, "no entropy");
        let err = CliError::from(InfraError::Entropy(rand::Error::new(source)));
        assert_eq!(err.exit_code(), crate::exitcode::OSERR);
    }

    #[test]
    fn test_too_wide_tree_is_usage() {
        let err = CliError::from(ApplicationError::Domain(DomainError::TooWide {
            base_radius: 1,
            ratio: 1e30,
            max: crate::domain::MAX_RADIUS,
        }));
        assert_eq!(err.exit_code(), crate::exitcode::USAGE);
    }
}
