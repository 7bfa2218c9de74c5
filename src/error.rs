use thiserror::Error;

/// Unified error type for DistGit branch operations
#[derive(Error, Debug)]
pub enum DistGitError {
    #[error("{name} is not a staging or standard branch")]
    UnclassifiableBranchName { name: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Output error: {0}")]
    Serialize(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in distgit-branch
pub type Result<T> = std::result::Result<T, DistGitError>;

impl DistGitError {
    /// Create an error for a branch name with no derivable build target
    pub fn unclassifiable(name: impl Into<String>) -> Self {
        DistGitError::UnclassifiableBranchName { name: name.into() }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        DistGitError::Config(msg.into())
    }

    /// Create an output rendering error with context
    pub fn serialize(msg: impl Into<String>) -> Self {
        DistGitError::Serialize(msg.into())
    }

    /// Notification header category for this error
    pub fn header(&self) -> ErrorHeader {
        match self {
            DistGitError::UnclassifiableBranchName { .. } => ErrorHeader::DistGit,
            DistGitError::Config(_) => ErrorHeader::Config,
            DistGitError::Serialize(_) => ErrorHeader::Output,
            DistGitError::Io(_) => ErrorHeader::Io,
        }
    }
}

/// Category tag attached to an error for downstream notification formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorHeader {
    DistGit,
    Config,
    Io,
    Output,
}

impl ErrorHeader {
    pub fn label(&self) -> &'static str {
        match self {
            ErrorHeader::DistGit => "DistGit",
            ErrorHeader::Config => "Configuration",
            ErrorHeader::Io => "I/O",
            ErrorHeader::Output => "Output",
        }
    }

    /// Full header line, e.g. "Platform CI error: DistGit"
    pub fn header(&self) -> String {
        format!("Platform CI error: {}", self.label())
    }
}
