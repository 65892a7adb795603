const MAX_VISIBLE_CHARS: usize = 2000;

/// Shortens captured subprocess output so a chatty downloader cannot flood the logs.
///
/// Keeps the tail, where `yt-dlp` prints the actual error.
pub fn truncate_for_log(output: &str) -> String {
    let trimmed = output.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = trimmed.chars().count();
    if total <= MAX_VISIBLE_CHARS {
        return trimmed.to_string();
    }

    let skip = total - MAX_VISIBLE_CHARS;
    let start = trimmed
        .char_indices()
        .nth(skip)
        .map(|(idx, _)| idx)
        .unwrap_or(0);

    format!("({} chars total) ...{}", total, &trimmed[start..])
}
