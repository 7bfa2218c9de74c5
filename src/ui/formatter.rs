//! Pure formatting functions for report output.
//!
//! Everything here builds strings; printing happens in the parent module.

use console::style;
use serde::Serialize;

use crate::cli::BranchReport;
use crate::domain::BranchKind;
use crate::error::{DistGitError, Result};

#[derive(Serialize)]
struct ReportDocument<'a> {
    branch: &'a [BranchReport],
}

fn styled_kind(kind: BranchKind) -> String {
    match kind {
        BranchKind::Standard => style(kind).green().to_string(),
        BranchKind::Staging | BranchKind::PrivateStaging => style(kind).cyan().to_string(),
        BranchKind::Private => style(kind).yellow().to_string(),
    }
}

/// Format a single branch report as an indented text block.
pub fn format_report(report: &BranchReport) -> String {
    let mut lines = vec![style(&report.name).bold().to_string()];
    lines.push(format!("  type:        {}", styled_kind(report.kind)));

    match (&report.target, &report.error) {
        (Some(target), _) => lines.push(format!("  target:      {}", style(target).green())),
        (None, Some(error)) => lines.push(format!("  target:      {}", style(error).red())),
        (None, None) => {}
    }

    if let Some(commit) = &report.commit {
        lines.push(format!("  commit:      {}", commit));
    }
    if let Some(description) = &report.description {
        lines.push(format!("  description: {}", description));
    }

    lines.join("\n")
}

/// Format all reports as text, separated by blank lines.
pub fn format_reports(reports: &[BranchReport]) -> String {
    reports
        .iter()
        .map(format_report)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render all reports as a TOML document with one `[[branch]]` table each.
pub fn render_toml(reports: &[BranchReport]) -> Result<String> {
    toml::to_string(&ReportDocument { branch: reports })
        .map_err(|e| DistGitError::serialize(e.to_string()))
}

/// Format an error under its notification header.
pub fn format_error(err: &DistGitError) -> String {
    format!("{}\n  {}", style(err.header().header()).red().bold(), err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DistGitBranch, DistGitCommit};

    fn plain(s: &str) -> String {
        console::strip_ansi_codes(s).to_string()
    }

    #[test]
    fn test_format_standard_report() {
        let report = BranchReport::for_branch(&DistGitBranch::new("rhel-7.3"));
        let text = plain(&format_report(&report));
        assert!(text.starts_with("rhel-7.3\n"));
        assert!(text.contains("type:        standard"));
        assert!(text.contains("target:      rhel-7.3-candidate"));
        assert!(!text.contains("commit:"));
    }

    #[test]
    fn test_format_private_report_shows_error() {
        let report = BranchReport::for_branch(&DistGitBranch::new("john-feature-branch-bz123321"));
        let text = plain(&format_report(&report));
        assert!(text.contains("type:        private"));
        assert!(text.contains("is not a staging or standard branch"));
    }

    #[test]
    fn test_format_commit_report() {
        let commit = DistGitCommit::new("abc1234", "staging-rhel-7", "Rebase");
        let text = plain(&format_report(&BranchReport::for_commit(&commit)));
        assert!(text.contains("commit:      abc1234"));
        assert!(text.contains("description: Rebase"));
    }

    #[test]
    fn test_render_toml() {
        let reports = vec![
            BranchReport::for_branch(&DistGitBranch::new("private-pmuller-staging-rhel-7-bz1234567")),
            BranchReport::for_branch(&DistGitBranch::new("john-feature-branch-bz123321")),
        ];
        let doc = render_toml(&reports).unwrap();
        assert_eq!(doc.matches("[[branch]]").count(), 2);
        assert!(doc.contains("kind = \"private staging\""));
        assert!(doc.contains("target = \"rhel-7-staging-candidate\""));
        assert!(doc.contains("kind = \"private\""));
    }

    #[test]
    fn test_format_error_has_header() {
        let text = plain(&format_error(&DistGitError::unclassifiable("foo")));
        assert!(text.starts_with("Platform CI error: DistGit"));
        assert!(text.contains("foo is not a staging or standard branch"));
    }
}
