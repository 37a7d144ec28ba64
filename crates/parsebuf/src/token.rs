use crate::Channel;
use crate::TokenType;
use std::borrow::Cow;

/// A single token pulled from a [`TokenSource`](crate::TokenSource).
///
/// The buffer treats tokens as opaque beyond these four fields.
///
/// # Lifetime Parameter
///
/// `text` uses `Cow<'src, str>` to enable zero-copy lexing: string-based
/// lexers can borrow slices directly from the source text, while producers
/// without contiguous source (or test fixtures) allocate owned strings and
/// use `'static` as the lifetime.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Token<'src> {
    /// Absolute position in the eventual full token sequence. Assigned
    /// once by the producer; the buffer validates it against the next
    /// append slot on every pull.
    pub index: usize,

    /// The grammar category. [`TokenType::EOF`] marks end of input.
    pub kind: TokenType,

    /// The logical lane this token is routed to.
    pub channel: Channel,

    /// The literal source slice this token covers (may be empty).
    #[serde(borrow)]
    pub text: Cow<'src, str>,
}

impl<'src> Token<'src> {
    /// Creates a default-channel token borrowing its text (zero-copy).
    pub fn borrowed(index: usize, kind: TokenType, text: &'src str) -> Self {
        Self {
            index,
            kind,
            channel: Channel::DEFAULT,
            text: Cow::Borrowed(text),
        }
    }

    /// Creates a default-channel token from an owned `String`.
    pub fn owned(index: usize, kind: TokenType, text: String) -> Self {
        Self {
            index,
            kind,
            channel: Channel::DEFAULT,
            text: Cow::Owned(text),
        }
    }

    /// Creates the end-of-input token at `index`.
    pub fn eof(index: usize) -> Self {
        Self {
            index,
            kind: TokenType::EOF,
            channel: Channel::DEFAULT,
            text: Cow::Borrowed(""),
        }
    }

    /// Returns `true` if this is the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind.is_eof()
    }

    /// Re-routes this token to `channel`.
    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channel = channel;
        self
    }
}
