use crate::TokenInterval;

/// Implemented by parsed constructs that cover a range of tokens.
///
/// This is the seam between a parser's output (out of scope for this
/// crate) and [`TokenBuffer::text_of`](crate::TokenBuffer::text_of): a
/// rule context, AST node, or any construct that remembers the first and
/// last token index it consumed can hand that range to the buffer for
/// text reconstruction.
pub trait Spanned {
    /// The inclusive token index range this construct covers.
    fn token_interval(&self) -> TokenInterval;
}

impl Spanned for TokenInterval {
    fn token_interval(&self) -> TokenInterval {
        *self
    }
}
