//! Classification workflow orchestration
//!
//! Keeps CLI argument parsing apart from the logic that turns branch names
//! into reports, so the workflow can be called programmatically without clap.

use serde::Serialize;
use tracing::warn;

use crate::domain::{BranchKind, DistGitBranch, DistGitCommit};
use crate::error::{DistGitError, Result};

/// Arguments for the classification workflow
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassifyArgs {
    /// Branch names to classify
    pub branches: Vec<String>,

    /// Commit hash the branches belong to
    pub hash: Option<String>,

    /// Commit description (only used together with `hash`)
    pub description: Option<String>,

    /// Fail on the first branch without a derivable build target
    pub require_target: bool,
}

/// Classification result for a single branch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BranchReport {
    pub name: String,

    pub kind: BranchKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl BranchReport {
    /// Build a report by querying the branch
    pub fn for_branch(branch: &DistGitBranch) -> Self {
        let (target, error) = match branch.staging_target() {
            Ok(target) => (Some(target), None),
            Err(e) => (None, Some(e.to_string())),
        };

        BranchReport {
            name: branch.name.clone(),
            kind: branch.classification(),
            target,
            error,
            commit: None,
            description: None,
        }
    }

    /// Build a report for the branch of a commit
    pub fn for_commit(commit: &DistGitCommit) -> Self {
        BranchReport {
            commit: Some(commit.hash.clone()),
            description: Some(commit.description.clone()),
            ..BranchReport::for_branch(&commit.branch)
        }
    }
}

/// Classify every requested branch.
///
/// With `require_target` set, the first branch that is neither staging nor
/// standard aborts the run with `UnclassifiableBranchName`.
pub fn run_classify(args: &ClassifyArgs) -> Result<Vec<BranchReport>> {
    let mut reports = Vec::with_capacity(args.branches.len());

    for name in &args.branches {
        let report = match &args.hash {
            Some(hash) => {
                let description = args.description.as_deref().unwrap_or_default();
                BranchReport::for_commit(&DistGitCommit::new(hash, name, description))
            }
            None => BranchReport::for_branch(&DistGitBranch::new(name)),
        };

        if report.target.is_none() {
            if args.require_target {
                return Err(DistGitError::unclassifiable(name));
            }
            warn!(branch = %name, "Branch has no derivable build target");
        }

        reports.push(report);
    }

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(branches: &[&str]) -> ClassifyArgs {
        ClassifyArgs {
            branches: branches.iter().map(|b| b.to_string()).collect(),
            ..ClassifyArgs::default()
        }
    }

    #[test]
    fn test_reports_in_input_order() {
        let reports = run_classify(&args(&["rhel-7.3", "staging-rhel-7"])).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].name, "rhel-7.3");
        assert_eq!(reports[0].target.as_deref(), Some("rhel-7.3-candidate"));
        assert_eq!(reports[1].kind, BranchKind::Staging);
    }

    #[test]
    fn test_private_branch_reports_error() {
        let reports = run_classify(&args(&["john-feature-branch-bz123321"])).unwrap();
        assert_eq!(reports[0].kind, BranchKind::Private);
        assert!(reports[0].target.is_none());
        assert!(reports[0]
            .error
            .as_deref()
            .unwrap()
            .contains("john-feature-branch-bz123321"));
    }

    #[test]
    fn test_require_target_fails() {
        let mut classify = args(&["rhel-7.3", "john-feature-branch-bz123321"]);
        classify.require_target = true;
        let err = run_classify(&classify).unwrap_err();
        assert!(matches!(err, DistGitError::UnclassifiableBranchName { .. }));
    }

    #[test]
    fn test_commit_reports() {
        let mut classify = args(&["private-pmuller-staging-extras-rhel-7"]);
        classify.hash = Some("abc1234".to_string());
        let reports = run_classify(&classify).unwrap();
        assert_eq!(reports[0].commit.as_deref(), Some("abc1234"));
        assert_eq!(reports[0].description.as_deref(), Some(""));
        assert_eq!(reports[0].kind, BranchKind::PrivateStaging);
        assert_eq!(
            reports[0].target.as_deref(),
            Some("extras-rhel-7-staging-candidate")
        );
    }
}
