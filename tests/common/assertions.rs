//! Domain-specific assertion macros for lexi harnesses.
//!
//! These wrap `pretty_assertions` so a failing search shows the whole list of
//! lexemes that came back, not just the first difference.

/// Assert that search results are exactly the given lexemes, in order.
///
/// ```rust,ignore
/// assert_lexemes!(lexi_core::search("ca*", &entries), ["cat", "catalog"]);
/// ```
#[macro_export]
macro_rules! assert_lexemes {
    ($results:expr, [$($lexeme:expr),* $(,)?]) => {
        // `match` keeps temporaries in `$results` alive for the whole check
        match &$results {
            results => {
                let actual: Vec<&str> = results
                    .iter()
                    .map(|e| e.lexeme.as_deref().unwrap_or("<no lexeme>"))
                    .collect();
                let expected: Vec<&str> = vec![$($lexeme),*];
                pretty_assertions::assert_eq!(actual, expected, "search returned different entries");
            }
        }
    };
}

/// Assert that a search produced nothing.
#[macro_export]
macro_rules! assert_no_matches {
    ($results:expr) => {
        match &$results {
            results => {
                if !results.is_empty() {
                    let lexemes: Vec<&str> = results
                        .iter()
                        .map(|e| e.lexeme.as_deref().unwrap_or("<no lexeme>"))
                        .collect();
                    panic!("assert_no_matches! failed: got {} result(s): {:?}", lexemes.len(), lexemes);
                }
            }
        }
    };
}

/// Assert the glosses of an entry's senses, in order.
#[macro_export]
macro_rules! assert_glosses {
    ($entry:expr, [$($gloss:expr),* $(,)?]) => {{
        let entry: &lexi_core::Entry = &$entry;
        let actual: Vec<Option<&str>> = entry.senses.iter().map(|s| s.gloss.as_deref()).collect();
        let expected: Vec<Option<&str>> = vec![$(Some($gloss)),*];
        pretty_assertions::assert_eq!(
            actual,
            expected,
            "glosses of {:?} differ",
            entry.lexeme
        );
    }};
}
