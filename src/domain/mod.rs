//! Domain logic - pure naming rules independent of any DistGit access

pub mod branch;
pub mod commit;

pub use branch::{BranchKind, DistGitBranch};
pub use commit::DistGitCommit;
