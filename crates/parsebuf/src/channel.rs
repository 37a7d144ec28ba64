/// A logical lane that routes tokens either to the parser (the default
/// channel) or around it (hidden channels carrying whitespace, comments,
/// and other trivia that grammar rules ignore but diagnostics may still
/// need).
#[derive(
    Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize,
)]
pub struct Channel(pub u32);

impl Channel {
    /// The channel grammar rules consume from.
    pub const DEFAULT: Channel = Channel(0);

    /// The conventional channel for trivia.
    pub const HIDDEN: Channel = Channel(1);
}
