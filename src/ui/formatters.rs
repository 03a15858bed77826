use crate::core::cluster::PodStatusCounts;
use crate::core::config::{CONTEXT_KEEP_CHARS, CONTEXT_MAX_CHARS, LIST_LIMIT};

/// Shorten a context name for the bar text (`arn:aws:eks:...` style names get long)
pub fn shorten_context(context: &str) -> String {
    if context.chars().count() > CONTEXT_MAX_CHARS {
        let kept: String = context.chars().take(CONTEXT_KEEP_CHARS).collect();
        format!("{}...", kept)
    } else {
        context.to_string()
    }
}

/// Trailing line for a list cut at [`LIST_LIMIT`]
pub fn overflow_line(total: usize) -> Option<String> {
    (total > LIST_LIMIT).then(|| format!("  ... and {} more", total - LIST_LIMIT))
}

/// Non-zero parts only, e.g. `2 running, 1 failed`
pub fn format_pod_counts(pods: &PodStatusCounts) -> String {
    [
        (pods.running.len(), "running"),
        (pods.pending.len(), "pending"),
        (pods.failed.len(), "failed"),
    ]
    .iter()
    .filter(|(count, _)| *count > 0)
    .map(|(count, label)| format!("{} {}", count, label))
    .collect::<Vec<_>>()
    .join(", ")
}
