//! Greedy word wrapping against a pixel width.

/// Packs whitespace-separated words into lines whose `measure` stays within `max_width`.
///
/// A word that alone exceeds `max_width` still gets its own line; words are never split.
/// Empty or whitespace-only input yields no lines.
pub fn wrap_lines<F>(text: &str, measure: F, max_width: f32) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if measure(&candidate) <= max_width {
            current = candidate;
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
