//! The time-sliced player state machine
//!
//! The player holds a borrowed song, a cursor into its notes and the absolute
//! clock reading at which the current note (or gap) ends. Every transition
//! happens inside `advance()`, which never sleeps.
//!
//! ```text
//!            load (first note tone)        load (first note rest)
//!  Idle ──────────────────────────► Sounding        Silent ◄──────── Idle
//!   ▲                                  │  note_end     │
//!   │  last note ended                 ▼               ▼
//!   └────────────────────────── (Gap) ─► next note: Sounding | Silent
//! ```

use std::time::Duration;

use tracing::{debug, info, trace};

use super::clock::Clock;
use super::output::ToneOutput;
use super::types::{Advance, PlayerState};
use crate::ast::Song;
use crate::config::{Loops, PlayerConfig};

pub struct Player<'a, T: ToneOutput, C: Clock> {
    output: T,
    clock: C,
    config: PlayerConfig,
    song: Option<&'a Song>,
    cursor: usize,
    note_end: Duration,
    state: PlayerState,
    loops_played: u32,
    /// Remaining time of the current note while paused
    paused: Option<Duration>,
}

impl<'a, T: ToneOutput, C: Clock> Player<'a, T, C> {
    pub fn new(output: T, clock: C) -> Self {
        Self::with_config(output, clock, PlayerConfig::default())
    }

    pub fn with_config(output: T, clock: C, config: PlayerConfig) -> Self {
        Self {
            output,
            clock,
            config,
            song: None,
            cursor: 0,
            note_end: Duration::ZERO,
            state: PlayerState::Idle,
            loops_played: 0,
            paused: None,
        }
    }

    /// Start `song` from its first note.
    ///
    /// Any tone left over from a previous song is stopped first. An empty song
    /// leaves the player idle.
    pub fn load(&mut self, song: &'a Song) {
        self.output.stop_tone();
        self.song = Some(song);
        self.cursor = 0;
        self.loops_played = 0;
        self.paused = None;

        debug!("loading {:?} ({} notes)", song.name, song.len());

        if song.is_empty() {
            self.state = PlayerState::Idle;
            return;
        }

        let now = self.clock.now();
        self.begin_note(song, now);
    }

    /// Move playback forward if the current note is over. Never blocks.
    pub fn advance(&mut self) -> Advance {
        if self.paused.is_some() || self.state == PlayerState::Idle {
            return Advance::Pending;
        }
        let Some(song) = self.song else {
            return Advance::Pending;
        };

        let now = self.clock.now();
        if now < self.note_end {
            return Advance::Pending;
        }

        self.output.stop_tone();

        if self.config.tone_gap_ms > 0 && self.state != PlayerState::Gap {
            self.state = PlayerState::Gap;
            self.note_end = now + Duration::from_millis(self.config.tone_gap_ms as u64);
            trace!("gap after note {}", self.cursor);
            return Advance::Advanced;
        }

        self.cursor += 1;
        if self.cursor >= song.len() {
            if !self.repeat_again() {
                self.state = PlayerState::Idle;
                info!("finished {:?}", song.name);
                return Advance::Finished;
            }
            self.loops_played += 1;
            self.cursor = 0;
            debug!("looping {:?} (pass {})", song.name, self.loops_played + 1);
        }

        self.begin_note(song, now);
        Advance::Advanced
    }

    /// Silence the output and go idle. The next play starts from the first note.
    pub fn stop(&mut self) {
        self.output.stop_tone();
        self.state = PlayerState::Idle;
        self.cursor = 0;
        self.loops_played = 0;
        self.paused = None;
        debug!("stopped");
    }

    /// Silence the output and freeze the current note's remaining time.
    pub fn pause(&mut self) {
        if self.state == PlayerState::Idle || self.paused.is_some() {
            return;
        }
        let remaining = self.note_end.saturating_sub(self.clock.now());
        self.output.stop_tone();
        self.paused = Some(remaining);
        debug!("paused at note {} ({:?} left)", self.cursor, remaining);
    }

    /// Continue a paused note for the time it had left.
    pub fn resume(&mut self) {
        let Some(remaining) = self.paused.take() else {
            return;
        };
        self.note_end = self.clock.now() + remaining;
        if self.state == PlayerState::Sounding {
            if let Some(frequency) = self.current_note_frequency() {
                self.output.start_tone(frequency);
            }
        }
        debug!("resumed at note {}", self.cursor);
    }

    /// Play the loaded song again from its first note.
    pub fn restart(&mut self) {
        if let Some(song) = self.song {
            self.load(song);
        }
    }

    /// Play until the song finishes, sleeping on the clock between notes.
    ///
    /// Returns immediately when idle or paused. Never returns for
    /// [`Loops::Forever`] unless the song is empty.
    pub fn play_blocking(&mut self) {
        while self.is_playing() && !self.is_paused() {
            if self.advance() == Advance::Finished {
                return;
            }
            let now = self.clock.now();
            if now < self.note_end {
                self.clock.sleep(self.note_end - now);
            }
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state != PlayerState::Idle
    }

    pub fn is_paused(&self) -> bool {
        self.paused.is_some()
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Index of the current note; equals the note count once a song has finished.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn song(&self) -> Option<&'a Song> {
        self.song
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn output(&self) -> &T {
        &self.output
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Release the output and clock.
    pub fn into_parts(self) -> (T, C) {
        (self.output, self.clock)
    }

    fn repeat_again(&self) -> bool {
        match self.config.loops {
            Loops::Once => false,
            Loops::Times(n) => self.loops_played < n,
            Loops::Forever => true,
        }
    }

    fn current_note_frequency(&self) -> Option<u32> {
        self.song?.notes.get(self.cursor)?.frequency
    }

    /// Start the note under the cursor at `now`. The output must already be stopped.
    fn begin_note(&mut self, song: &Song, now: Duration) {
        let note = &song.notes[self.cursor];
        self.note_end = now + Duration::from_millis(note.duration_ms as u64);
        match note.frequency {
            Some(frequency) => {
                self.output.start_tone(frequency);
                self.state = PlayerState::Sounding;
                trace!("note {}: {} Hz for {} ms", self.cursor, frequency, note.duration_ms);
            }
            None => {
                self.state = PlayerState::Silent;
                trace!("note {}: rest for {} ms", self.cursor, note.duration_ms);
            }
        }
    }
}
