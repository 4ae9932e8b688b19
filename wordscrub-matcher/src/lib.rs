// wordscrub-matcher/src/lib.rs
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod blocklist;
pub mod tokenizer;

pub use blocklist::Blocklist;
pub use tokenizer::{tokenize, Tokenizer};
