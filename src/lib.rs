//! RTTTL ringtone parsing and non-blocking playback.
//!
//! ```rust
//! use rtttl::{parse, Player, SystemClock, ToneOutput};
//!
//! struct Buzzer;
//! impl ToneOutput for Buzzer {
//!     fn start_tone(&mut self, _frequency_hz: u32) {}
//!     fn stop_tone(&mut self) {}
//! }
//!
//! let song = parse("Beep:d=16,o=6,b=180:c,p,c").unwrap();
//! let mut player = Player::new(Buzzer, SystemClock::new());
//! player.load(&song);
//! while player.is_playing() {
//!     player.advance();
//!     // ... other cooperative work ...
//! }
//! ```

pub mod ast;
pub mod config;
pub mod error;
pub mod library;
pub mod parser;
pub mod pitch;
pub mod playback;

pub use ast::*;
pub use config::{Loops, PlayerConfig};
pub use error::*;
pub use parser::{parse, parse_with_overrides, Overrides};
pub use playback::{Advance, Clock, ManualClock, Player, PlayerState, SystemClock, ToneOutput};

