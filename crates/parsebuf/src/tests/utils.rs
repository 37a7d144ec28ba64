//! Various test utils.

use crate::Channel;
use crate::Token;
use crate::TokenType;
use std::cell::Cell;
use std::rc::Rc;

/// Fixture type for ordinary on-channel tokens.
pub const WORD: TokenType = TokenType(1);

/// Fixture type for hidden-channel whitespace tokens.
pub const WS: TokenType = TokenType(2);

/// Creates a default-channel `WORD` token.
pub fn tok(index: usize, text: &'static str) -> Token<'static> {
    Token::borrowed(index, WORD, text)
}

/// Creates a hidden-channel `WS` token.
pub fn hidden_tok(index: usize, text: &'static str) -> Token<'static> {
    Token::borrowed(index, WS, text).with_channel(Channel::HIDDEN)
}

/// Creates an EOF token at `index`.
pub fn eof_tok(index: usize) -> Token<'static> {
    Token::eof(index)
}

/// Builds a conforming token sequence from `texts`, appending the EOF
/// token after them.
pub fn stream(texts: &[&'static str]) -> Vec<Token<'static>> {
    let mut tokens: Vec<Token<'static>> = texts
        .iter()
        .enumerate()
        .map(|(i, text)| tok(i, text))
        .collect();
    tokens.push(eof_tok(tokens.len()));
    tokens
}

/// A mock token source that produces tokens from a `Vec`.
///
/// Uses `'static` lifetime since mock tokens use borrowed literals.
pub struct MockTokenSource {
    tokens: std::vec::IntoIter<Token<'static>>,
}

impl MockTokenSource {
    pub fn new(tokens: Vec<Token<'static>>) -> Self {
        Self {
            tokens: tokens.into_iter(),
        }
    }
}

impl Iterator for MockTokenSource {
    type Item = Token<'static>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next()
    }
}

/// A mock token source that counts every pull, for asserting that the
/// buffer materializes each position exactly once.
pub struct CountingTokenSource {
    inner: MockTokenSource,
    pulls: Rc<Cell<usize>>,
}

impl CountingTokenSource {
    /// Returns the source and a shared handle to its pull counter.
    pub fn new(tokens: Vec<Token<'static>>) -> (Self, Rc<Cell<usize>>) {
        let pulls = Rc::new(Cell::new(0));
        let source = Self {
            inner: MockTokenSource::new(tokens),
            pulls: Rc::clone(&pulls),
        };
        (source, pulls)
    }
}

impl Iterator for CountingTokenSource {
    type Item = Token<'static>;

    fn next(&mut self) -> Option<Self::Item> {
        self.pulls.set(self.pulls.get() + 1);
        self.inner.next()
    }
}
