/// Integer code identifying a token's grammar category.
///
/// The value space belongs to the lexer/grammar that produces the tokens;
/// the buffer only reserves [`TokenType::EOF`] to mark end of input.
#[derive(
    Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize,
)]
pub struct TokenType(pub i32);

impl TokenType {
    /// Reserved type marking end of input. Always the final token a
    /// conforming [`TokenSource`](crate::TokenSource) yields.
    pub const EOF: TokenType = TokenType(-1);

    /// Returns `true` if this is the end-of-input sentinel type.
    #[inline]
    pub fn is_eof(&self) -> bool {
        *self == TokenType::EOF
    }
}
