//! Pitch-to-frequency conversion.
//!
//! Equal temperament referenced to A4 = 440 Hz:
//! `freq = 440 * 2^((offset + 12 * (octave - 4)) / 12)`, rounded to whole Hz.

use crate::ast::PitchClass;

/// Concert A in Hz.
pub const A4_HZ: f64 = 440.0;

/// Octave number of the reference A.
const REFERENCE_OCTAVE: i32 = 4;

/// Semitones between `class`/`octave` and A4. Positive = above.
pub fn semitones_from_a4(class: PitchClass, octave: u8) -> i32 {
    class.offset_from_a() + 12 * (octave as i32 - REFERENCE_OCTAVE)
}

/// Frequency of a pitch in whole Hz.
pub fn frequency_hz(class: PitchClass, octave: u8) -> u32 {
    let semitones = semitones_from_a4(class, octave) as f64;
    (A4_HZ * (semitones / 12.0).exp2()).round() as u32
}
