//! JSON and Markdown health reports.
use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    health::HealthResult,
    lib::{errors::HealthError, fs},
};

pub const JSON_REPORT_FILE: &str = "report.json";
pub const MARKDOWN_REPORT_FILE: &str = "report.md";

/// Paths of the two written report files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub json: PathBuf,
    pub markdown: PathBuf,
}

/// Pretty-printed JSON with two-space indentation and no trailing newline.
pub fn render_json(result: &HealthResult) -> Result<String, HealthError> {
    serde_json::to_string_pretty(result).map_err(|source| HealthError::Serialize { source })
}

pub fn render_markdown(result: &HealthResult) -> String {
    let mut md = String::from("# Repo Health Report\n\n");
    md.push_str(&format!("**Status:** {}\n\n", result.status()));
    md.push_str("## Missing Files\n");
    md.push_str(&bullet_list(result.missing_files()));
    md.push_str("\n\n## Missing Directories\n");
    md.push_str(&bullet_list(result.missing_dirs()));
    md.push('\n');
    md
}

fn bullet_list(entries: &[String]) -> String {
    if entries.is_empty() {
        return "None".to_string();
    }
    entries
        .iter()
        .map(|entry| format!("- {entry}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write both reports into `output_dir`, creating it when absent.
///
/// Both files are staged before either is renamed into place, so a failure
/// while rendering or staging leaves the previous pair untouched. A failure
/// between the two renames can still leave the pair inconsistent.
pub fn write_reports(output_dir: &Path, result: &HealthResult) -> Result<ReportPaths, HealthError> {
    fs::ensure_dir(output_dir)?;

    let json = render_json(result)?;
    let markdown = render_markdown(result);

    let staged_json = fs::stage_file(&output_dir.join(JSON_REPORT_FILE), json.as_bytes())?;
    let staged_markdown =
        fs::stage_file(&output_dir.join(MARKDOWN_REPORT_FILE), markdown.as_bytes())?;

    let paths = ReportPaths {
        json: staged_json.commit()?,
        markdown: staged_markdown.commit()?,
    };

    info!(
        target: "repo_health::report",
        json = %paths.json.display(),
        markdown = %paths.markdown.display(),
        status = result.status().as_str(),
        "Wrote health reports"
    );
    Ok(paths)
}
