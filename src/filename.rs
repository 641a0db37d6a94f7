//! Turns a recipe name into a file name.

use log::debug;

/// Extension appended to every recipe file
pub const EXTENSION: &str = ".md";

/// Characters dropped from names
const REJECTED_CHARS: &[char] = &['/', '\\', '\'', ','];

/// Space reserved for the extension plus one terminator slot
const SUFFIX_RESERVE: usize = EXTENSION.len() + 1;

/// Builds the file name for a recipe called `name`.
///
/// Spaces become underscores and `/ \ ' ,` are removed. The result always
/// ends in `.md` and is shorter than `max_len` bytes: if it would not fit,
/// the transformed name is cut from its end before the extension is added.
pub fn synthesize_filename(name: &str, max_len: usize) -> String {
    let mut stem: String = name
        .chars()
        .filter(|c| !REJECTED_CHARS.contains(c))
        .map(|c| if c == ' ' { '_' } else { c })
        .collect();

    let budget = max_len.saturating_sub(SUFFIX_RESERVE);
    if stem.len() > budget {
        let mut cut = budget;
        while !stem.is_char_boundary(cut) {
            cut -= 1;
        }
        debug!("truncating file name stem {:?} to {} bytes", stem, cut);
        stem.truncate(cut);
    }

    stem.push_str(EXTENSION);
    stem
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaces_become_underscores() {
        assert_eq!(synthesize_filename("tomato soup", 64), "tomato_soup.md");
        assert_eq!(synthesize_filename(" soup ", 64), "_soup_.md");
    }

    #[test]
    fn test_rejected_chars_are_dropped() {
        assert_eq!(
            synthesize_filename("Mom's chicken, rice/beans\\", 64),
            "Moms_chicken_ricebeans.md"
        );
    }

    #[test]
    fn test_other_chars_pass_through() {
        assert_eq!(synthesize_filename("Crème-brûlée!", 64), "Crème-brûlée!.md");
    }

    #[test]
    fn test_only_rejected_chars() {
        assert_eq!(synthesize_filename("/\\',", 64), ".md");
        assert_eq!(synthesize_filename(",,,", 64), ".md");
    }

    #[test]
    fn test_long_name_is_truncated_from_the_end() {
        let name = "a".repeat(100);
        let filename = synthesize_filename(&name, 64);
        assert_eq!(filename, format!("{}.md", "a".repeat(60)));
        assert_eq!(filename.len(), 63);
    }

    #[test]
    fn test_name_at_the_limit() {
        let fits = "b".repeat(60);
        assert_eq!(synthesize_filename(&fits, 64), format!("{fits}.md"));

        let over = "b".repeat(61);
        assert_eq!(synthesize_filename(&over, 64), format!("{fits}.md"));
    }

    #[test]
    fn test_truncation_keeps_valid_utf8() {
        // Each 'é' takes two bytes; a budget of 5 bytes fits two of them
        let filename = synthesize_filename("ééééé", 9);
        assert_eq!(filename, "éé.md");
        assert!(filename.len() < 9);
    }

    #[test]
    fn test_truncation_counts_transformed_name() {
        // Dropped characters do not count against the limit
        let name = format!("{}{}", "'".repeat(20), "c".repeat(10));
        assert_eq!(synthesize_filename(&name, 16), format!("{}.md", "c".repeat(10)));
    }

    #[test]
    fn test_tiny_limit_still_has_extension() {
        assert_eq!(synthesize_filename("soup", 4), ".md");
        assert_eq!(synthesize_filename("soup", 0), ".md");
    }
}
