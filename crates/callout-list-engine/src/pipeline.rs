use crate::filter::{filter_notes, split_kind_list};
use crate::models::{CalloutBlock, Note};
use crate::parsing::parse_callouts;

/// The three filter settings, passed by value into every run.
///
/// All fields are free-form strings; any value is legal. Splitting and
/// trimming happen inside the run, so hosts can hand the strings over
/// exactly as the user typed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Comma-separated allowed callout types; empty means all types.
    pub callout_type_filter: String,
    /// Semicolon-separated path prefixes to include; empty means the
    /// whole vault.
    pub include_path_filter: String,
    /// Semicolon-separated path prefixes to exclude; empty excludes
    /// nothing.
    pub exclude_path_filter: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            callout_type_filter: "todo".to_string(),
            include_path_filter: String::new(),
            exclude_path_filter: String::new(),
        }
    }
}

/// Capability the pipeline consumes: enumerate notes and fetch their
/// content. `VaultSource` is the on-disk implementation; tests use
/// in-memory sources.
pub trait NoteSource {
    type Error: std::error::Error;

    fn list_notes(&self) -> Result<Vec<Note>, Self::Error>;
    fn read_note(&self, note: &Note) -> Result<String, Self::Error>;
}

/// The matches of one note: its path and the blocks that survived the
/// type filter, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub note: Note,
    pub blocks: Vec<CalloutBlock>,
}

/// A note that could not be read, with the error text for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedNote {
    pub note: Note,
    pub reason: String,
}

/// Output of one pipeline run: matched notes in enumeration order, plus
/// the notes skipped because their content could not be read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub results: Vec<ScanResult>,
    pub skipped: Vec<SkippedNote>,
}

/// Run one full scan: filter the note set by path, parse each surviving
/// note, and collect the notes with at least one matching block.
///
/// A note whose content cannot be read is recorded in the report's
/// `skipped` list and never aborts the batch; only failing to enumerate
/// the note set is fatal to the run.
pub fn run<S: NoteSource>(source: &S, config: &FilterConfig) -> Result<ScanReport, S::Error> {
    let allowed_kinds = split_kind_list(&config.callout_type_filter);

    let all_notes = source.list_notes()?;
    let candidates = filter_notes(
        all_notes,
        &config.include_path_filter,
        &config.exclude_path_filter,
    );

    let mut report = ScanReport::default();
    for note in candidates {
        let content = match source.read_note(&note) {
            Ok(content) => content,
            Err(e) => {
                report.skipped.push(SkippedNote {
                    note,
                    reason: e.to_string(),
                });
                continue;
            }
        };
        let blocks = parse_callouts(&content, &allowed_kinds);
        if !blocks.is_empty() {
            report.results.push(ScanResult { note, blocks });
        }
    }

    Ok(report)
}
