// wordscrub-matcher/src/tokenizer/mod.rs
//! Whitespace tokenizer over raw bytes.
//!
//! A token is a maximal run of bytes that are not whitespace. Input does not
//! have to be valid UTF-8: well-formed Unicode whitespace (`"a\u{3000}b"`)
//! separates tokens, while invalid bytes are ordinary token bytes and come out
//! exactly as they went in.

extern crate alloc;
use alloc::vec::Vec;

/// Length of the whitespace character starting `bytes`, or 0 if there is none.
fn whitespace_len(bytes: &[u8]) -> usize {
    let Some(&lead) = bytes.first() else { return 0 };
    if lead < 0x80 {
        return usize::from(char::from(lead).is_whitespace());
    }
    let width = match lead {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => return 0,
    };
    let Some(candidate) = bytes.get(..width) else { return 0 };
    match core::str::from_utf8(candidate) {
        Ok(s) if s.chars().next().is_some_and(char::is_whitespace) => width,
        _ => 0,
    }
}

/// A borrowing iterator over the tokens of an input buffer.
pub struct Tokenizer<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new<B: AsRef<[u8]> + ?Sized>(input: &'a B) -> Self {
        Self {
            input: input.as_ref(),
            pos: 0,
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let input = self.input;
        loop {
            match whitespace_len(&input[self.pos..]) {
                0 => break,
                n => self.pos += n,
            }
        }
        if self.pos >= input.len() {
            return None;
        }

        let start = self.pos;
        // Continuation bytes never look like a whitespace lead, so stepping
        // one byte at a time cannot split a well-formed character.
        while self.pos < input.len() && whitespace_len(&input[self.pos..]) == 0 {
            self.pos += 1;
        }
        Some(&input[start..self.pos])
    }
}

/// Splits `input` into owned tokens, preserving their order.
pub fn tokenize<B: AsRef<[u8]> + ?Sized>(input: &B) -> Vec<Vec<u8>> {
    Tokenizer::new(input).map(<[u8]>::to_vec).collect()
}
