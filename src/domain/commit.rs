use super::branch::DistGitBranch;

/// A commit in a DistGit repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistGitCommit {
    pub hash: String,
    pub branch: DistGitBranch,
    pub description: String,
}

impl DistGitCommit {
    pub fn new(
        hash: impl Into<String>,
        branch_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        DistGitCommit {
            hash: hash.into(),
            branch: DistGitBranch::new(branch_name),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BranchKind;

    #[test]
    fn test_commit_wraps_branch() {
        let commit = DistGitCommit::new("3f2a1b9", "staging-rhel-7", "Rebase to 1.2.3");
        assert_eq!(commit.hash, "3f2a1b9");
        assert_eq!(commit.branch.name, "staging-rhel-7");
        assert_eq!(commit.description, "Rebase to 1.2.3");
        assert_eq!(commit.branch.classification(), BranchKind::Staging);
    }

    #[test]
    fn test_commit_fields_are_not_validated() {
        let commit = DistGitCommit::new("", "john-feature-branch-bz123321", "");
        assert!(commit.hash.is_empty());
        assert!(commit.description.is_empty());
        assert_eq!(commit.branch.classification(), BranchKind::Private);
    }
}
