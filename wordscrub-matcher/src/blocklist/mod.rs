// wordscrub-matcher/src/blocklist/mod.rs
//! Substring blocklist on a double-array Aho-Corasick automaton.
//!
//! Entries and tokens are raw bytes, so a blocklist in any encoding matches
//! exactly the bytes it holds.

use daachorse::DoubleArrayAhoCorasick;
extern crate alloc;
use alloc::collections::BTreeSet;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::tokenizer::Tokenizer;

/// Error raised when the blocklist automaton cannot be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlocklistError {
    message: String,
}

impl fmt::Display for BlocklistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to build blocklist automaton: {}", self.message)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BlocklistError {}

/// An immutable set of blocked substrings.
///
/// Entries are matched anywhere inside a token, byte for byte. Duplicate
/// entries are collapsed and empty entries are ignored, since an empty needle
/// would block every token. An empty blocklist blocks nothing.
pub struct Blocklist {
    entries: Vec<Vec<u8>>,
    automaton: Option<DoubleArrayAhoCorasick<usize>>,
}

impl fmt::Debug for Blocklist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blocklist")
         .field("entries", &self.entries.len())
         .field("automaton", &"<DoubleArrayAhoCorasick>")
         .finish()
    }
}

impl Blocklist {
    /// Builds a blocklist from the given entries.
    pub fn new<I, S>(entries: I) -> Result<Self, BlocklistError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        // daachorse rejects duplicate patterns, so collapse them first.
        let unique: BTreeSet<Vec<u8>> = entries
            .into_iter()
            .map(|s| s.as_ref().to_vec())
            .filter(|s| !s.is_empty())
            .collect();
        let entries: Vec<Vec<u8>> = unique.into_iter().collect();

        let automaton = if entries.is_empty() {
            None
        } else {
            let built: DoubleArrayAhoCorasick<usize> = DoubleArrayAhoCorasick::new(entries.iter())
                .map_err(|e| BlocklistError { message: e.to_string() })?;
            Some(built)
        };

        Ok(Self { entries, automaton })
    }

    /// Builds a blocklist from whitespace-separated text, the on-disk format.
    pub fn from_text<B: AsRef<[u8]> + ?Sized>(text: &B) -> Result<Self, BlocklistError> {
        Self::new(Tokenizer::new(text))
    }

    /// An empty blocklist that lets every token through.
    pub fn empty() -> Self {
        Self { entries: Vec::new(), automaton: None }
    }

    /// Returns true when `token` contains any entry as a substring.
    pub fn contains_blocked<B: AsRef<[u8]> + ?Sized>(&self, token: &B) -> bool {
        match &self.automaton {
            Some(automaton) => automaton.find_iter(token.as_ref()).next().is_some(),
            None => false,
        }
    }

    /// The distinct entries, sorted bytewise.
    pub fn entries(&self) -> &[Vec<u8>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn naive_contains_blocked(token: &str, entries: &[&str]) -> bool {
        let token = token.as_bytes();
        entries
            .iter()
            .map(|e| e.as_bytes())
            .any(|e| !e.is_empty() && token.windows(e.len()).any(|w| w == e))
    }

    #[test]
    fn test_substring_not_equality() {
        let list = Blocklist::new(["dark", "old"]).unwrap();
        assert!(list.contains_blocked("darkness"));
        assert!(list.contains_blocked("bold"));
        assert!(list.contains_blocked("old"));
        assert!(!list.contains_blocked("hello"));
        assert!(!list.contains_blocked("friend"));
    }

    #[test]
    fn test_case_sensitive() {
        let list = Blocklist::new(["Dark"]).unwrap();
        assert!(list.contains_blocked("Darkness"));
        assert!(!list.contains_blocked("darkness"));
    }

    #[test]
    fn test_empty_blocklist_passes_everything() {
        let list = Blocklist::empty();
        assert!(list.is_empty());
        assert!(!list.contains_blocked("anything"));
        assert!(!list.contains_blocked(""));

        let from_blank = Blocklist::from_text(" \n\t").unwrap();
        assert!(from_blank.is_empty());
        assert!(!from_blank.contains_blocked("anything"));
    }

    #[test]
    fn test_duplicates_and_empty_entries_are_collapsed() {
        let list = Blocklist::new(["old", "", "old", "dark"]).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.entries(), &[b"dark".to_vec(), b"old".to_vec()]);
        assert!(list.contains_blocked("golden"));
    }

    #[test]
    fn test_overlapping_entries() {
        // "he" is a prefix of "hello"; either entry must still reject the token.
        let list = Blocklist::new(["hello", "he", "lo"]).unwrap();
        for token in ["hello", "she", "slow", "help"] {
            assert!(list.contains_blocked(token), "{} should be blocked", token);
        }
        assert!(!list.contains_blocked("world"));
    }

    #[test]
    fn test_agrees_with_naive_scan() {
        let entries = ["ab", "bca", "zz", "c", "xyz"];
        let list = Blocklist::new(entries).unwrap();
        let tokens = vec![
            "", "a", "b", "ab", "ba", "bcb", "bca", "xyzzy", "yx", "qqq", "abc", "zaz", "zzz",
        ];
        for token in tokens {
            assert_eq!(
                list.contains_blocked(token),
                naive_contains_blocked(token, &entries),
                "mismatch on token {:?}",
                token
            );
        }
    }

    #[test]
    fn test_multibyte_entries() {
        let list = Blocklist::new(["ü", "日本"]).unwrap();
        assert!(list.contains_blocked("grün"));
        assert!(list.contains_blocked("日本語"));
        assert!(!list.contains_blocked("gruen"));
    }

    #[test]
    fn test_non_utf8_entries_match_bytes_exactly() {
        let list = Blocklist::from_text(b"\xff caf\xe9\n").unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.contains_blocked(b"\x00\xff\x00"));
        assert!(list.contains_blocked(b"caf\xe9s"));
        // Neither a different invalid byte nor its UTF-8 look-alike matches.
        assert!(!list.contains_blocked(b"caf\xe8"));
        assert!(!list.contains_blocked("café"));
        assert!(!list.contains_blocked("\u{fffd}"));
    }
}
