use crate::Token;

/// Marker trait for token producers (iterators that yield [`Token`]s).
///
/// This trait enables extensibility over different origins of tokens: a
/// hand-written lexer over `&str`, a lexer over non-contiguous input that
/// allocates owned text, or a deterministic test double replaying a fixed
/// sequence.
///
/// Implementors define an [`Iterator`] that produces tokens one at a
/// time. All lookahead, buffering, and seeking is handled by
/// [`TokenBuffer`](crate::TokenBuffer), which pulls each position exactly
/// once over its lifetime.
///
/// # Contract
///
/// - Token `index` values are monotonically increasing from 0, matching
///   the order of production.
/// - The final yielded token carries [`TokenType::EOF`](crate::TokenType::EOF).
///   After that the iterator may end or idempotently repeat the EOF
///   token; the buffer never pulls again either way.
/// - A source that ends *before* yielding an EOF token, or that yields an
///   out-of-order index, violates the contract and surfaces as a
///   [`TokenBufferError`](crate::TokenBufferError) on the pulling call.
///
/// # Lifetime Parameter
///
/// The `'src` lifetime represents the source text that tokens cover. For
/// string-based lexers this enables zero-copy production where token text
/// borrows directly from the input. For producers that must allocate,
/// use `'static` as the lifetime.
pub trait TokenSource<'src>: Iterator<Item = Token<'src>> {}

impl<'src, T> TokenSource<'src> for T where T: Iterator<Item = Token<'src>> {}
