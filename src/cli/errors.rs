//! CLI-specific error types

use std::fmt;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Metadata directory could not be loaded
    MetadataLoad,
    /// Metadata loaded but contains defects
    MetadataInvalid,
    /// Requested entity type has no definitions
    UnknownEntityType,
    /// Output failure
    IoError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::MetadataLoad => "FC_CLI_METADATA_LOAD",
            Self::MetadataInvalid => "FC_CLI_METADATA_INVALID",
            Self::UnknownEntityType => "FC_CLI_UNKNOWN_ENTITY_TYPE",
            Self::IoError => "FC_CLI_IO_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Metadata load failure
    pub fn metadata_load(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::MetadataLoad, msg)
    }

    /// Metadata defect failure
    pub fn metadata_invalid(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::MetadataInvalid, msg)
    }

    /// Unknown entity type
    pub fn unknown_entity_type(entity_type: &str) -> Self {
        Self::new(
            CliErrorCode::UnknownEntityType,
            format!("No definitions for entity type '{}'", entity_type),
        )
    }

    /// Output failure
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Get the error code
    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    /// Get the message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
