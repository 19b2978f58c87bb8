//! Player state and tick outcome types

/// Where the player is in a song
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerState {
    /// Nothing loaded, stopped, or the song has ended
    #[default]
    Idle,
    /// A tone is driving the output
    Sounding,
    /// A rest is running; the output is stopped
    Silent,
    /// The silence between two notes when a tone gap is configured
    Gap,
}

/// What a call to [`Player::advance()`](super::Player::advance) did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The current note (or gap) is still running, or the player is idle/paused
    Pending,
    /// Moved on to the next note or gap
    Advanced,
    /// The last note ended; the player is now idle
    Finished,
}
