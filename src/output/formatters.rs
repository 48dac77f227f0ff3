//! Formatting utilities for terminal output

use std::collections::BTreeMap;

/// Render a word as spaced letter boxes, e.g. `[c] [a] [t]`
#[must_use]
pub fn letter_boxes(word: &str) -> String {
    let mut result = String::with_capacity(word.len() * 4);
    for (i, c) in word.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push('[');
        result.push(c);
        result.push(']');
    }
    result
}

/// Format the length histogram as one line per word length
///
/// Lengths come out ascending, e.g. `4 letters: 12 words`.
#[must_use]
pub fn hint_lines(hints: &BTreeMap<usize, usize>) -> Vec<String> {
    hints
        .iter()
        .map(|(len, count)| {
            let plural = if *count == 1 { "word" } else { "words" };
            format!("{len} letters: {count} {plural}")
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_boxes_spaces_letters() {
        assert_eq!(letter_boxes("cat"), "[c] [a] [t]");
        assert_eq!(letter_boxes(""), "");
        assert_eq!(letter_boxes("p____e"), "[p] [_] [_] [_] [_] [e]");
    }

    #[test]
    fn hint_lines_ascending_with_plurals() {
        let mut hints = BTreeMap::new();
        hints.insert(5, 3);
        hints.insert(4, 1);

        assert_eq!(
            hint_lines(&hints),
            vec!["4 letters: 1 word", "5 letters: 3 words"]
        );
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
