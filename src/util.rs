//! Small utility helpers used across modules.

/// True if the text has no visible content (empty or whitespace only).
/// Blank editor sources and chat messages are ignored rather than reported.
pub fn is_blank(s: &str) -> bool {
  s.trim().is_empty()
}

/// Case-insensitive substring test. An empty needle matches everything.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
  haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Log-safe truncation for user text.
/// Cuts on a char boundary so multi-byte input never splits.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.len() <= max {
    return s.to_string();
  }
  let mut end = max;
  while !s.is_char_boundary(end) {
    end -= 1;
  }
  format!("{}… ({} bytes total)", &s[..end], s.len())
}
