//! Utility functions for rendering UI components

pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}

/// Keep the end of the string, which is the informative part of a URL
pub fn truncate_start(s: &str, max_width: usize) -> String {
    let count = s.chars().count();
    if count > max_width {
        let keep = max_width.saturating_sub(3);
        let tail: String = s.chars().skip(count - keep).collect();
        format!("...{}", tail)
    } else {
        s.to_string()
    }
}
