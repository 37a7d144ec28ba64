/// Errors surfaced by [`TokenBuffer`](crate::TokenBuffer) operations.
///
/// Defined empty outcomes are *not* errors and never appear here:
/// lookahead of zero, lookbehind before the start of the buffer, and a
/// backward channel scan finding nothing all return `None`, and text
/// reconstruction over negative bounds returns `""`.
///
/// All errors propagate synchronously to the immediate caller; the
/// buffer performs no internal retries or recovery.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TokenBufferError {
    /// `get` was asked for an index the token stream never reached.
    #[error("token index {index} out of range 0..{len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of tokens actually materialized.
        len: usize,
    },

    /// `consume` was called while already positioned at end of input.
    ///
    /// Fatal to the current parse step; the cursor is left unchanged.
    #[error("cannot consume EOF")]
    CannotConsumeEof,

    /// The source yielded a token whose index does not match the next
    /// append slot.
    ///
    /// A defect in the producer, not user-recoverable; never occurs for
    /// sources honoring the [`TokenSource`](crate::TokenSource) contract.
    #[error("token source yielded index {actual}, expected {expected}")]
    SourceIndexMismatch {
        /// The append slot the buffer was about to fill.
        expected: usize,
        /// The index the pulled token actually carried.
        actual: usize,
    },

    /// The source ended before yielding an end-of-input token.
    ///
    /// A defect in the producer: conforming sources terminate with a
    /// [`TokenType::EOF`](crate::TokenType::EOF) token.
    #[error("token source ended at index {expected} without an EOF token")]
    SourceExhausted {
        /// The append slot left unfilled when the source ended.
        expected: usize,
    },
}
