pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;

pub use domain::{BranchKind, DistGitBranch, DistGitCommit};
pub use error::{DistGitError, ErrorHeader, Result};
