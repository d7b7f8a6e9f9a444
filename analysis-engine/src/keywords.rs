use crate::frequency::rank_by_frequency;
use crate::stop_words::is_stop_word;
use profiler_core::{is_analyzable, ContentItem, ContentKind, KeywordEntry};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

pub const DEFAULT_TOP_KEYWORDS: usize = 10;

/// Tokens this short or shorter never rank.
const MIN_TOKEN_LEN: usize = 2;

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://(?:[a-zA-Z]|[0-9]|[$-_@.\&+]|[!*\\(\\),]|%[0-9a-fA-F]{2})+")
        .expect("URL pattern is valid")
});
static USER_MENTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"u/\w+").expect("user mention pattern is valid"));
static COMMUNITY_MENTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"r/\w+").expect("community mention pattern is valid"));

/// Ranks topical words across the bodies of all comments.
///
/// Posts in `items` are ignored, as are blank and deleted comments.
pub fn extract_keywords<'a, I>(items: I, top_n: usize) -> Vec<KeywordEntry>
where
    I: IntoIterator<Item = &'a ContentItem>,
{
    let bodies: Vec<&str> = items
        .into_iter()
        .filter(|item| item.kind() == ContentKind::Comment)
        .map(|item| item.body.as_str())
        .filter(|body| is_analyzable(body))
        .collect();
    let text = bodies.join(" ");
    if text.trim().is_empty() {
        return Vec::new();
    }

    let tokens = tokenize(&text);
    debug!("Keyword extraction kept {} tokens", tokens.len());

    rank_by_frequency(tokens, top_n)
        .into_iter()
        .map(|(word, count)| KeywordEntry { word, count })
        .collect()
}

/// Cleans `text` and returns the lowercase tokens that survive filtering, in
/// order of appearance.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned = URL_REGEX.replace_all(text, "");
    let cleaned = USER_MENTION_REGEX.replace_all(&cleaned, "");
    let cleaned = COMMUNITY_MENTION_REGEX.replace_all(&cleaned, "");
    // Dropped characters are not replaced, so fragments around them merge
    let cleaned: String = cleaned
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect::<String>()
        .to_lowercase();

    cleaned
        .split_whitespace()
        .filter(|word| word.len() > MIN_TOKEN_LEN && !is_stop_word(word))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(body: &str) -> ContentItem {
        ContentItem::comment("c", "rust", body, 5, 1_650_000_000, "t3_p")
    }

    fn words(entries: &[KeywordEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.word.as_str()).collect()
    }

    #[test]
    fn test_verbs_are_filtered() {
        let items = vec![comment("I love hiking mountains")];
        let keywords = extract_keywords(&items, DEFAULT_TOP_KEYWORDS);
        assert_eq!(
            keywords,
            vec![
                KeywordEntry {
                    word: "hiking".to_string(),
                    count: 1
                },
                KeywordEntry {
                    word: "mountains".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_deleted_only_gives_empty_ranking() {
        let items = vec![comment("[deleted]"), comment("   ")];
        assert!(extract_keywords(&items, DEFAULT_TOP_KEYWORDS).is_empty());
    }

    #[test]
    fn test_posts_are_ignored() {
        let items = vec![ContentItem::post("p", "rust", "compiler", "compiler", 1, 0)];
        assert!(extract_keywords(&items, DEFAULT_TOP_KEYWORDS).is_empty());
    }

    #[test]
    fn test_urls_and_mentions_removed() {
        let tokens = tokenize(
            "Check https://example.com/path?q=1&x=%20y out, thanks u/someone_else in r/rustlang about compilers",
        );
        assert_eq!(tokens, vec!["check", "compilers"]);
    }

    #[test]
    fn test_non_letters_dropped_without_separator() {
        let tokens = tokenize("rust-lang 2024 edition's coffee!!! C++");
        assert_eq!(tokens, vec!["rustlang", "editions", "coffee"]);
    }

    #[test]
    fn test_short_tokens_dropped() {
        assert!(tokenize("ab cd ef go").is_empty());
    }

    #[test]
    fn test_ranking_by_count_then_first_seen() {
        let items = vec![
            comment("guitar piano drums"),
            comment("piano drums"),
            comment("drums violin"),
        ];
        let keywords = extract_keywords(&items, 3);
        assert_eq!(words(&keywords), vec!["drums", "piano", "guitar"]);
        assert_eq!(keywords[0].count, 3);
        assert_eq!(keywords[1].count, 2);
    }

    #[test]
    fn test_deterministic_and_filtered() {
        let items = vec![
            comment("The compiler is great and the borrow checker helps a lot"),
            comment("Compiler errors, compiler warnings, checker output"),
        ];
        let first = extract_keywords(&items, DEFAULT_TOP_KEYWORDS);
        let second = extract_keywords(&items, DEFAULT_TOP_KEYWORDS);
        assert_eq!(first, second);
        assert_eq!(first[0].word, "compiler");
        assert_eq!(first[0].count, 3);
        for entry in &first {
            assert!(entry.word.len() > 2);
            assert!(!is_stop_word(&entry.word));
        }
    }
}
