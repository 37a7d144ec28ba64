//! A lazily-materialized, random-access token buffer for hand-written
//! parsers.
//!
//! This crate decouples parsing logic from token production: a parser
//! requests tokens from a [`TokenBuffer`] by relative lookahead distance or
//! absolute index, seeks backward/forward to support backtracking, and
//! reconstructs source text spans from consumed tokens — without knowing
//! how much of the stream its [`TokenSource`] has produced yet.

mod channel;
mod seek_adjust;
mod spanned;
mod token;
mod token_buffer;
mod token_buffer_error;
mod token_interval;
mod token_source;
mod token_type;

pub use channel::Channel;
pub use seek_adjust::SeekAdjust;
pub use spanned::Spanned;
pub use token::Token;
pub use token_buffer::TokenBuffer;
pub use token_buffer_error::TokenBufferError;
pub use token_interval::TokenInterval;
pub use token_source::TokenSource;
pub use token_type::TokenType;

#[cfg(test)]
mod tests;
