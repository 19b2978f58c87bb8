//! # Playback Module
//!
//! Non-blocking, time-sliced playback of a parsed [`Song`](crate::Song) on a
//! single tone output.
//!
//! ## Sub-modules
//! - `types` - PlayerState and Advance
//! - `output` - the ToneOutput capability (start/stop a tone)
//! - `clock` - the Clock capability plus SystemClock and ManualClock
//! - `player` - the Player state machine
//!
//! ## Time-slicing
//! The caller owns the loop. Each [`Player::advance()`] call reads the clock
//! once and returns immediately:
//! - before the current note's end time nothing happens (`Advance::Pending`)
//! - at or after it, the tone is stopped and the next note is started
//!   (`Advance::Advanced`), or the song ends (`Advance::Finished`)
//!
//! ```rust
//! use rtttl::{parse, Advance, ManualClock, Player, ToneOutput};
//! use std::time::Duration;
//!
//! struct Silent;
//! impl ToneOutput for Silent {
//!     fn start_tone(&mut self, _frequency_hz: u32) {}
//!     fn stop_tone(&mut self) {}
//! }
//!
//! let song = parse("beep:d=4,o=5,b=120:c,e").unwrap(); // 500 ms each
//! let clock = ManualClock::new();
//! let mut player = Player::new(Silent, &clock);
//! player.load(&song);
//!
//! clock.advance(Duration::from_millis(499));
//! assert_eq!(player.advance(), Advance::Pending);
//! clock.advance(Duration::from_millis(1));
//! assert_eq!(player.advance(), Advance::Advanced);
//! clock.advance(Duration::from_millis(500));
//! assert_eq!(player.advance(), Advance::Finished);
//! assert!(!player.is_playing());
//! ```

mod clock;
mod output;
mod player;
mod types;


pub use clock::{Clock, ManualClock, SystemClock};
pub use output::ToneOutput;
pub use player::Player;
pub use types::{Advance, PlayerState};
