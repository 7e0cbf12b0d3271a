use crate::pipeline::{FilterConfig, ScanReport, ScanResult};

/// The `# Callout List` heading plus a one-line summary of the active
/// filters.
pub fn render_header(config: &FilterConfig) -> String {
    let type_summary = if config.callout_type_filter.trim().is_empty() {
        "**any** callouts".to_string()
    } else {
        format!("callouts of type **{}**", config.callout_type_filter)
    };
    let include_summary = if config.include_path_filter.trim().is_empty() {
        "in **whole vault**".to_string()
    } else {
        format!("under paths **{}**", config.include_path_filter)
    };
    let exclude_summary = if config.exclude_path_filter.trim().is_empty() {
        String::new()
    } else {
        format!(" excluding paths **{}**", config.exclude_path_filter)
    };

    format!("# Callout List\nShowing {type_summary} {include_summary}{exclude_summary}")
}

/// Collate scan results into one markdown document: a `###` heading per
/// note, each block's lines joined in original order, blocks separated by
/// a blank line.
pub fn render_results(results: &[ScanResult]) -> String {
    results
        .iter()
        .map(render_result)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_result(result: &ScanResult) -> String {
    let callout_markdown = result
        .blocks
        .iter()
        .map(|block| block.lines().join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("### {}\n{}", result.note.path_str(), callout_markdown)
}

/// Header plus collated results, ready for a markdown renderer.
pub fn render_report(config: &FilterConfig, report: &ScanReport) -> String {
    format!(
        "{}\n{}",
        render_header(config),
        render_results(&report.results)
    )
}
