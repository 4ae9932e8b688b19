// wordscrub-core/src/engine.rs
//! Defines the `TokenFilter` trait used by the filtering workers.
//!
//! Workers only ever see a `dyn TokenFilter`, so the pipeline does not care
//! whether tokens are judged by a substring blocklist or something else.
//!
//! License: MIT OR APACHE 2.0

use wordscrub_matcher::Blocklist;

/// Decides whether a token is dropped.
///
/// Implementations are shared by every worker of every file pipeline and must
/// not mutate state while judging tokens.
pub trait TokenFilter: Send + Sync {
    /// Returns true when `token` must be removed from the output.
    fn is_blocked(&self, token: &[u8]) -> bool;

    /// A short name used in log messages.
    fn name(&self) -> &str;
}

impl TokenFilter for Blocklist {
    fn is_blocked(&self, token: &[u8]) -> bool {
        self.contains_blocked(token)
    }

    fn name(&self) -> &str {
        "blocklist"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_blocklist_as_trait_object() {
        let filter: Arc<dyn TokenFilter> = Arc::new(Blocklist::new(["dark", "old"]).unwrap());
        let kept: Vec<&str> = "hello darkness my old friend"
            .split_whitespace()
            .filter(|t| !filter.is_blocked(t.as_bytes()))
            .collect();
        assert_eq!(kept, vec!["hello", "my", "friend"]);
        assert_eq!(filter.name(), "blocklist");
    }
}
