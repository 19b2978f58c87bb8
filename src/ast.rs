//! # Song Types
//!
//! This module defines the structures a parsed ringtone is made of.
//!
//! ## Type Hierarchy
//! ```text
//! Song
//!   ├── name: String (identification only)
//!   ├── Settings (d=, o=, b= defaults block)
//!   └── Vec<Note>
//!         ├── duration: denominator (1, 2, 4, 8, 16, 32)
//!         ├── dotted: bool
//!         ├── pitch: Pitch (Rest | Tone(PitchClass))
//!         ├── octave: 4-7
//!         ├── duration_ms: resolved sounding time
//!         └── frequency: resolved Hz (None for rests)
//! ```
//!
//! ## Resolution
//! A `Note` never refers back to `Settings`. Inherited fields are copied in and
//! the absolute timing and frequency are computed once by the parser, so the
//! player only reads `duration_ms` and `frequency`.
//!
//! ### Duration Calculation
//! - Whole note = `240_000 / bpm` milliseconds (quarter note gets the beat)
//! - Note = whole note / denominator, times 1.5 when dotted
//! - Example at 63 bpm: quarter note = `952 ms`, dotted quarter = `1428 ms`

use serde::Serialize;

use crate::pitch::frequency_hz;

/// Duration denominators a ringtone may use.
pub const DURATIONS: [u8; 6] = [1, 2, 4, 8, 16, 32];

/// Lowest and highest octave a ringtone may use.
pub const MIN_OCTAVE: u8 = 4;
pub const MAX_OCTAVE: u8 = 7;

/// Milliseconds in a whole note at 1 bpm (four quarter-note beats of 60 s).
const WHOLE_NOTE_MS_AT_1_BPM: u64 = 240_000;

/// The defaults block (`d=4,o=6,b=63`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub duration: u8,
    pub octave: u8,
    pub bpm: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            duration: 4,
            octave: 6,
            bpm: 63,
        }
    }
}

impl Settings {
    /// Milliseconds a note lasts at this tempo.
    ///
    /// Kept in integer form so no rounding accumulates across notes:
    /// `240_000 * (2 or 3) / (bpm * denominator * 2)`.
    pub fn note_duration_ms(&self, duration: u8, dotted: bool) -> u32 {
        let scale = if dotted { 3 } else { 2 };
        let numerator = WHOLE_NOTE_MS_AT_1_BPM * scale;
        let denominator = self.bpm as u64 * duration as u64 * 2;
        (numerator / denominator) as u32
    }
}

/// The twelve semitones of an octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl PitchClass {
    /// Semitones away from A in the same octave (C = -9, A = 0, B = +2)
    pub fn offset_from_a(&self) -> i32 {
        match self {
            PitchClass::C => -9,
            PitchClass::CSharp => -8,
            PitchClass::D => -7,
            PitchClass::DSharp => -6,
            PitchClass::E => -5,
            PitchClass::F => -4,
            PitchClass::FSharp => -3,
            PitchClass::G => -2,
            PitchClass::GSharp => -1,
            PitchClass::A => 0,
            PitchClass::ASharp => 1,
            PitchClass::B => 2,
        }
    }

    /// Resolve a note letter with an optional sharp.
    ///
    /// Returns `None` for letters outside `a`-`g` and for `e#`/`b#`, which
    /// have no sharp of their own in the RTTTL alphabet.
    pub fn from_letter(letter: char, sharp: bool) -> Option<Self> {
        let class = match (letter.to_ascii_lowercase(), sharp) {
            ('c', false) => PitchClass::C,
            ('c', true) => PitchClass::CSharp,
            ('d', false) => PitchClass::D,
            ('d', true) => PitchClass::DSharp,
            ('e', false) => PitchClass::E,
            ('f', false) => PitchClass::F,
            ('f', true) => PitchClass::FSharp,
            ('g', false) => PitchClass::G,
            ('g', true) => PitchClass::GSharp,
            ('a', false) => PitchClass::A,
            ('a', true) => PitchClass::ASharp,
            ('b', false) => PitchClass::B,
            _ => return None,
        };
        Some(class)
    }
}

/// What a note plays: a semitone, or silence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Pitch {
    Rest,
    Tone(PitchClass),
}

/// A fully resolved note
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub duration: u8,
    pub dotted: bool,
    pub pitch: Pitch,
    pub octave: u8,
    pub duration_ms: u32,
    pub frequency: Option<u32>,
}

impl Note {
    /// Build a note and resolve its timing and frequency against `settings`.
    pub fn resolve(settings: &Settings, duration: u8, dotted: bool, pitch: Pitch, octave: u8) -> Self {
        let frequency = match pitch {
            Pitch::Rest => None,
            Pitch::Tone(class) => Some(frequency_hz(class, octave)),
        };
        Self {
            duration,
            dotted,
            pitch,
            octave,
            duration_ms: settings.note_duration_ms(duration, dotted),
            frequency,
        }
    }

    pub fn is_rest(&self) -> bool {
        self.pitch == Pitch::Rest
    }
}

/// A parsed ringtone
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Song {
    pub name: String,
    pub settings: Settings,
    pub notes: Vec<Note>,
}

impl Song {
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Total playing time of one pass through the song.
    pub fn total_duration_ms(&self) -> u64 {
        self.notes.iter().map(|n| n.duration_ms as u64).sum()
    }
}
