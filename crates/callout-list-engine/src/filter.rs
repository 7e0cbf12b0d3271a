use crate::models::Note;

/// Split a semicolon-separated path-prefix setting into a prefix list.
///
/// Elements are trimmed; an empty or all-whitespace setting means no
/// prefixes at all.
pub fn split_path_list(path_filter: &str) -> Vec<String> {
    split_setting_list(path_filter, ';')
}

/// Split a comma-separated callout-type setting into an allow-list.
pub fn split_kind_list(kind_filter: &str) -> Vec<String> {
    split_setting_list(kind_filter, ',')
}

fn split_setting_list(setting: &str, separator: char) -> Vec<String> {
    if setting.trim().is_empty() {
        return Vec::new();
    }
    setting
        .split(separator)
        .map(|s| s.trim().to_string())
        .collect()
}

/// Narrow the note set by the include/exclude path-prefix settings.
///
/// Include runs before exclude. Both are literal prefix tests over the
/// whole path string, not segment-aware: an include prefix of `Notes`
/// matches `Notes2/file.md`. An empty include setting keeps everything; an
/// empty exclude setting drops nothing. Input order is preserved.
pub fn filter_notes(
    notes: Vec<Note>,
    include_path_filter: &str,
    exclude_path_filter: &str,
) -> Vec<Note> {
    let include_paths = split_path_list(include_path_filter);
    let exclude_paths = split_path_list(exclude_path_filter);

    let mut filtered = notes;
    if !include_paths.is_empty() {
        filtered.retain(|note| {
            include_paths
                .iter()
                .any(|prefix| note.path_str().starts_with(prefix))
        });
    }
    if !exclude_paths.is_empty() {
        filtered.retain(|note| {
            !exclude_paths
                .iter()
                .any(|prefix| note.path_str().starts_with(prefix))
        });
    }
    filtered
}
