use crate::Channel;

/// Policy applied to every cursor move of a
/// [`TokenBuffer`](crate::TokenBuffer).
///
/// A raw buffer positions the cursor exactly where it is told
/// (`Identity`). A channel-filtering buffer snaps every move forward to
/// the next token on its channel (`SkipOffChannel`), so `consume()` and
/// `seek()` transparently step over hidden tokens while those tokens
/// remain reachable by absolute index.
///
/// Modeled as an injected value rather than an overridable method so a
/// single buffer type covers both behaviors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SeekAdjust {
    /// Leave the requested index untouched.
    Identity,

    /// Snap forward to the first token at or after the requested index
    /// that is on the given channel (or to the end-of-input token).
    SkipOffChannel(Channel),
}
