//! DistGit branch name classification.
//!
//! Nothing here talks to DistGit: every query works only on the *name* of
//! the branch, so no clone or network access is required.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{DistGitError, Result};

// Standard branch examples: rhel-7.3, extras-rhel-7.2
#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static STANDARD_BRANCH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<st_branch>(?:extras-|rhscl-\d\.\d-rh-\w+?-)?rhel-\d(?:\.\d)?)$").unwrap()
});

// Staging branch examples: staging-rhel-7, staging-extras-rhel-7
#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static STAGING_BRANCH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^staging-(?P<st_branch>(?:extras-|rhscl-\d\.\d-rh-\w+?-)?rhel-\d)$").unwrap()
});

// Private staging branch examples: private-pmuller-staging-rhel-7-bz1234567,
// private-pmuller-staging-extras-rhel-7. Only these may carry a suffix.
#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static PRIVATE_STAGING_BRANCH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^private-[\w-]*?staging-(?P<st_branch>(?:extras-|rhscl-\d\.\d-rh-\w+?-)?rhel-\d)",
    )
    .unwrap()
});

const PRIVATE_PREFIX: &str = "private-";

/// Base branch matched by the staging grammar (major version only).
fn staging_base(name: &str) -> Option<&str> {
    let captures = if name.starts_with(PRIVATE_PREFIX) {
        PRIVATE_STAGING_BRANCH.captures(name)
    } else {
        STAGING_BRANCH.captures(name)
    }?;
    captures.name("st_branch").map(|m| m.as_str())
}

/// Base branch matched by the standard grammar (suffix of the name).
fn standard_base(name: &str) -> Option<&str> {
    STANDARD_BRANCH
        .captures(name)
        .and_then(|captures| captures.name("st_branch"))
        .map(|m| m.as_str())
}

/// The four branch categories derivable from a name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BranchKind {
    #[serde(rename = "standard")]
    Standard,
    #[serde(rename = "staging")]
    Staging,
    #[serde(rename = "private")]
    Private,
    #[serde(rename = "private staging")]
    PrivateStaging,
}

impl BranchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BranchKind::Standard => "standard",
            BranchKind::Staging => "staging",
            BranchKind::Private => "private",
            BranchKind::PrivateStaging => "private staging",
        }
    }
}

impl fmt::Display for BranchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A DistGit branch, identified purely by its name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistGitBranch {
    pub name: String,
}

impl DistGitBranch {
    pub fn new(name: impl Into<String>) -> Self {
        DistGitBranch { name: name.into() }
    }

    pub fn is_staging(&self) -> bool {
        staging_base(&self.name).is_some()
    }

    pub fn is_standard(&self) -> bool {
        standard_base(&self.name).is_some()
    }

    /// Returns the category of the branch.
    ///
    /// A standard branch is an RCM-owned branch matching a product version,
    /// usually with ACLs enabled. A staging branch is a standard branch name
    /// prefixed with `staging-`. A private staging branch is a `private-`
    /// branch with a staging branch name inside it. Anything else is private.
    ///
    /// Examples:
    /// - standard: `rhel-6.8`
    /// - staging: `staging-rhel-6`
    /// - private staging: `private-<anything->staging-rhel-6<-anything>`
    /// - private: `john-feature-branch-bz123321`
    pub fn classification(&self) -> BranchKind {
        let kind = if self.is_staging() {
            if self.name.starts_with(PRIVATE_PREFIX) {
                BranchKind::PrivateStaging
            } else {
                BranchKind::Staging
            }
        } else if self.is_standard() {
            BranchKind::Standard
        } else {
            BranchKind::Private
        };

        trace!(branch = %self.name, kind = %kind, "Classified branch");
        kind
    }

    /// Computes the build target name matching the branch.
    ///
    /// Example: `staging-rhel-7` -> `rhel-7-staging-candidate`
    pub fn staging_target(&self) -> Result<String> {
        // The target is a plain suffix append. A future "rhel-6-staging"
        // style name would need the latest RHEL-6 target looked up instead.
        let target = if let Some(base) = staging_base(&self.name) {
            format!("{}-staging-candidate", base)
        } else if let Some(base) = standard_base(&self.name) {
            format!("{}-candidate", base)
        } else {
            debug!(branch = %self.name, "No build target derivable from branch name");
            return Err(DistGitError::unclassifiable(&self.name));
        };

        debug!(branch = %self.name, target = %target, "Derived build target");
        Ok(target)
    }
}
