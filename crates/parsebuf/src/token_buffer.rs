use crate::Channel;
use crate::SeekAdjust;
use crate::Spanned;
use crate::Token;
use crate::TokenBufferError;
use crate::TokenInterval;
use crate::TokenSource;
use crate::TokenType;

/// How many tokens [`TokenBuffer::fill`] pulls per fetch round.
const FILL_BLOCK_SIZE: usize = 1000;

/// A random-access, lazily-materialized buffer of [`Token`]s pulled from
/// a [`TokenSource`].
///
/// The buffer is a parser's primary view over its token stream. Each
/// position is pulled from the source exactly once, on first need, and
/// kept for the buffer's lifetime, so parsers can look arbitrarily far
/// ahead, seek backward to backtrack, and reconstruct source text spans
/// without caring how much of the stream has been produced yet.
///
/// # Indexing invariants
///
/// - A token's index never changes once pulled: `tokens()[i].index == i`.
/// - The end-of-input token, once pulled, is always the last element;
///   the source is never pulled again after it.
/// - The cursor is uninitialized until the first access, then always a
///   valid index into the materialized sequence.
///
/// # Channel filtering
///
/// A buffer built with [`on_channel`](Self::on_channel) snaps every
/// cursor move forward to the next token on its channel, so `consume()`
/// and `seek()` transparently step over hidden tokens (whitespace,
/// comments) while those tokens remain reachable via [`get`](Self::get)
/// and the text reconstruction methods.
///
/// # Concurrency
///
/// Single-threaded by construction: every operation takes `&mut self`
/// and either returns immediately or pulls synchronously from the
/// source. A buffer is owned by one parsing session; there is no
/// internal locking, cancellation, or retry.
pub struct TokenBuffer<'src, S: TokenSource<'src>> {
    source: S,

    /// All tokens pulled so far. Append-only: never reordered, never
    /// removed.
    tokens: Vec<Token<'src>>,

    /// Current position. `None` until the first access materializes
    /// index 0.
    cursor: Option<usize>,

    /// Set once the end-of-input token has been pulled and appended.
    fetched_eof: bool,

    seek_adjust: SeekAdjust,
}

impl<'src, S: TokenSource<'src>> TokenBuffer<'src, S> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a raw buffer: the cursor lands exactly where it is moved.
    pub fn new(source: S) -> Self {
        Self::with_seek_adjust(source, SeekAdjust::Identity)
    }

    /// Creates a channel-filtering buffer: every cursor move skips
    /// forward past tokens not on `channel`.
    pub fn on_channel(source: S, channel: Channel) -> Self {
        Self::with_seek_adjust(source, SeekAdjust::SkipOffChannel(channel))
    }

    /// Creates a buffer with an explicit seek-adjustment policy.
    pub fn with_seek_adjust(source: S, seek_adjust: SeekAdjust) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            cursor: None,
            fetched_eof: false,
            seek_adjust,
        }
    }

    // =========================================================================
    // Cursor movement
    // =========================================================================

    /// The current cursor position, or `None` before the first access.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Advances the cursor by one position (post-adjustment).
    ///
    /// The cursor may land on the end-of-input token exactly once;
    /// consuming again from there fails with
    /// [`TokenBufferError::CannotConsumeEof`] and leaves the cursor
    /// unchanged.
    pub fn consume(&mut self) -> Result<(), TokenBufferError> {
        let skip_eof_check = match self.cursor {
            // With EOF fetched, the cursor may still advance onto the
            // EOF token itself, but no further.
            Some(p) if self.fetched_eof => p < self.tokens.len() - 1,
            Some(p) => p < self.tokens.len(),
            None => false,
        };
        if !skip_eof_check && self.peek_type(1)? == Some(TokenType::EOF) {
            return Err(TokenBufferError::CannotConsumeEof);
        }
        let p = self.lazy_init()?;
        if self.sync(p + 1)? {
            self.cursor = Some(self.adjust_seek_index(p + 1)?);
        }
        Ok(())
    }

    /// No-op placeholder kept for API symmetry with stream interfaces
    /// whose marks guard release of buffered tokens. This buffer keeps
    /// every token, so [`seek`](Self::seek) alone supports backtracking.
    pub fn mark(&mut self) -> usize {
        0
    }

    /// Releases a marker obtained from [`mark`](Self::mark). No-op.
    pub fn release(&mut self, _marker: usize) {}

    /// Repositions the cursor to the start of the stream.
    pub fn reset(&mut self) -> Result<(), TokenBufferError> {
        self.seek(0)
    }

    /// Repositions the cursor to `index` (post-adjustment).
    ///
    /// Only initialization and adjustment materialize tokens here;
    /// reading at the new position triggers any further pulls.
    pub fn seek(&mut self, index: usize) -> Result<(), TokenBufferError> {
        self.lazy_init()?;
        let adjusted = self.adjust_seek_index(index)?;
        self.cursor = Some(adjusted);
        Ok(())
    }

    // =========================================================================
    // Indexed access and lookahead
    // =========================================================================

    /// Returns the token at absolute index `i`, materializing up to it.
    ///
    /// Fails with [`TokenBufferError::IndexOutOfRange`] if the stream
    /// ended before reaching `i`.
    pub fn get(&mut self, i: usize) -> Result<&Token<'src>, TokenBufferError> {
        self.sync(i)?;
        let len = self.tokens.len();
        self.tokens
            .get(i)
            .ok_or(TokenBufferError::IndexOutOfRange { index: i, len })
    }

    /// Returns `true` if no tokens have been pulled yet.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The number of tokens pulled so far. This is not the eventual
    /// stream length unless [`fill`](Self::fill) has run.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns the token `k` positions relative to the cursor without
    /// moving it.
    ///
    /// - `k > 0` looks ahead: `lookahead(1)` is the next token to be
    ///   consumed. Looking past the end of input returns the
    ///   end-of-input token.
    /// - `k == 0` names no token and returns `None`.
    /// - `k < 0` looks behind: `lookahead(-1)` is the most recently
    ///   consumed token. Looking behind the start of the buffer returns
    ///   `None` — a defined outcome, not an error.
    pub fn lookahead(&mut self, k: isize) -> Result<Option<&Token<'src>>, TokenBufferError> {
        let p = self.lazy_init()?;
        if k == 0 {
            return Ok(None);
        }
        if k < 0 {
            return Ok(self.lookbehind(p, k.unsigned_abs()));
        }
        let i = p + (k as usize) - 1;
        self.sync(i)?;
        if i >= self.tokens.len() {
            // EOF is guaranteed to be the last token once fetched.
            return Ok(self.tokens.last());
        }
        Ok(self.tokens.get(i))
    }

    /// Convenience returning just the [`TokenType`] of
    /// [`lookahead(k)`](Self::lookahead).
    pub fn peek_type(&mut self, k: isize) -> Result<Option<TokenType>, TokenBufferError> {
        Ok(self.lookahead(k)?.map(|token| token.kind))
    }

    /// All tokens pulled so far.
    pub fn tokens(&self) -> &[Token<'src>] {
        &self.tokens
    }

    /// The token `back` positions behind `p`, if the buffer reaches that
    /// far back.
    fn lookbehind(&self, p: usize, back: usize) -> Option<&Token<'src>> {
        let i = p.checked_sub(back)?;
        self.tokens.get(i)
    }

    // =========================================================================
    // Materialization
    // =========================================================================

    /// Pulls every remaining token, end-of-input included.
    pub fn fill(&mut self) -> Result<(), TokenBufferError> {
        self.lazy_init()?;
        while self.fetch(FILL_BLOCK_SIZE)? == FILL_BLOCK_SIZE {}
        log::trace!("buffer filled: {} tokens materialized", self.tokens.len());
        Ok(())
    }

    /// Applies the buffer's [`SeekAdjust`] policy to a requested cursor
    /// position.
    fn adjust_seek_index(&mut self, i: usize) -> Result<usize, TokenBufferError> {
        match self.seek_adjust {
            SeekAdjust::Identity => Ok(i),
            SeekAdjust::SkipOffChannel(channel) => self.next_on_channel(i, channel),
        }
    }

    /// Pulls up to `n` tokens from the source, appending each. Stops
    /// early at the end-of-input token. Returns how many were pulled.
    fn fetch(&mut self, n: usize) -> Result<usize, TokenBufferError> {
        if self.fetched_eof {
            return Ok(0);
        }
        for pulled in 0..n {
            let expected = self.tokens.len();
            let Some(token) = self.source.next() else {
                return Err(TokenBufferError::SourceExhausted { expected });
            };
            if token.index != expected {
                return Err(TokenBufferError::SourceIndexMismatch {
                    expected,
                    actual: token.index,
                });
            }
            let is_eof = token.is_eof();
            self.tokens.push(token);
            if is_eof {
                log::debug!("reached end of input after {} tokens", self.tokens.len());
                self.fetched_eof = true;
                return Ok(pulled + 1);
            }
        }
        Ok(n)
    }

    /// Initializes the buffer on first access: materializes index 0 and
    /// positions the cursor (post-adjustment). Returns the cursor.
    fn lazy_init(&mut self) -> Result<usize, TokenBufferError> {
        if let Some(p) = self.cursor {
            return Ok(p);
        }
        self.sync(0)?;
        let p = self.adjust_seek_index(0)?;
        self.cursor = Some(p);
        Ok(p)
    }

    /// Makes sure index `i` is materialized if the stream reaches that
    /// far; returns whether it does.
    fn sync(&mut self, i: usize) -> Result<bool, TokenBufferError> {
        let needed = (i + 1).saturating_sub(self.tokens.len());
        if needed > 0 {
            let fetched = self.fetch(needed)?;
            return Ok(fetched >= needed);
        }
        Ok(true)
    }

    // =========================================================================
    // Channel navigation
    // =========================================================================

    /// The index of the first token at or after `i` on `channel`.
    ///
    /// Returns the end-of-input token's index if no on-channel token
    /// exists before the stream ends, and the last materialized index if
    /// `i` is already past the end.
    pub fn next_on_channel(
        &mut self,
        i: usize,
        channel: Channel,
    ) -> Result<usize, TokenBufferError> {
        self.sync(i)?;
        if i >= self.tokens.len() {
            return Ok(self.last_index());
        }
        let mut i = i;
        loop {
            let token = &self.tokens[i];
            if token.channel == channel || token.is_eof() {
                return Ok(i);
            }
            i += 1;
            if !self.sync(i)? {
                return Ok(self.last_index());
            }
        }
    }

    /// The index of the first token at or before `i` on `channel`, or
    /// `None` if the scan runs past the start without a match — a
    /// defined outcome, not an error.
    ///
    /// The end-of-input token counts as being on every channel, and an
    /// `i` at or past the materialized end resolves to the last index.
    pub fn previous_on_channel(
        &mut self,
        i: usize,
        channel: Channel,
    ) -> Result<Option<usize>, TokenBufferError> {
        self.sync(i)?;
        if i >= self.tokens.len() {
            return Ok(Some(self.last_index()));
        }
        let mut i = i;
        loop {
            let token = &self.tokens[i];
            if token.is_eof() || token.channel == channel {
                return Ok(Some(i));
            }
            let Some(prev) = i.checked_sub(1) else {
                return Ok(None);
            };
            i = prev;
        }
    }

    /// The last materialized index.
    fn last_index(&self) -> usize {
        self.tokens.len().saturating_sub(1)
    }

    // =========================================================================
    // Text reconstruction
    // =========================================================================

    /// The concatenated source text of the whole token stream.
    ///
    /// Forces full materialization; the end-of-input token's text is not
    /// included.
    pub fn text(&mut self) -> Result<String, TokenBufferError> {
        self.fill()?;
        let last = self.tokens.len() as isize - 1;
        self.text_in_interval(TokenInterval::new(0, last))
    }

    /// The concatenated text of the tokens in the inclusive `interval`.
    ///
    /// A negative bound yields an empty string (the interval of a
    /// construct that consumed no tokens). Otherwise the remainder of
    /// the stream is materialized, `stop` is clamped to the last index,
    /// and concatenation stops (exclusively) at an end-of-input token.
    pub fn text_in_interval(
        &mut self,
        interval: TokenInterval,
    ) -> Result<String, TokenBufferError> {
        if !interval.is_valid() {
            return Ok(String::new());
        }
        self.fill()?;
        let start = interval.start as usize;
        let stop = (interval.stop as usize).min(self.last_index());
        let mut text = String::new();
        for i in start..=stop {
            let token = &self.tokens[i];
            if token.is_eof() {
                break;
            }
            text.push_str(&token.text);
        }
        Ok(text)
    }

    /// The text between two tokens, inclusive of both. Either token
    /// absent yields an empty string.
    pub fn text_between(
        &mut self,
        start: Option<&Token<'src>>,
        stop: Option<&Token<'src>>,
    ) -> Result<String, TokenBufferError> {
        match (start, stop) {
            (Some(start), Some(stop)) => self.text_in_interval(TokenInterval::new(
                start.index as isize,
                stop.index as isize,
            )),
            _ => Ok(String::new()),
        }
    }

    /// The text covered by a parsed construct's token span.
    pub fn text_of(&mut self, node: &impl Spanned) -> Result<String, TokenBufferError> {
        self.text_in_interval(node.token_interval())
    }
}
