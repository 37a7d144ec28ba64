/// An inclusive pair of absolute token indices `[start, stop]`.
///
/// Bounds are `isize` on purpose: a parsed construct that consumed no
/// tokens carries an invalid (negative) interval, and text reconstruction
/// defines such intervals as empty rather than erroring.
#[derive(
    Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize,
)]
pub struct TokenInterval {
    /// First token index, inclusive.
    pub start: isize,
    /// Last token index, inclusive.
    pub stop: isize,
}

impl TokenInterval {
    /// The interval of a construct that covers no tokens.
    pub const INVALID: TokenInterval = TokenInterval {
        start: -1,
        stop: -1,
    };

    /// Creates an interval from inclusive bounds.
    pub fn new(start: isize, stop: isize) -> Self {
        Self { start, stop }
    }

    /// The interval covering the single token at `index`.
    pub fn at(index: usize) -> Self {
        Self {
            start: index as isize,
            stop: index as isize,
        }
    }

    /// Returns `true` if both bounds are non-negative.
    ///
    /// An invalid interval reconstructs to empty text.
    pub fn is_valid(&self) -> bool {
        self.start >= 0 && self.stop >= 0
    }
}
