use crate::ast::*;
use crate::error::RtttlError;
use std::iter::Peekable;
use std::str::Chars;
use tracing::debug;

/// Defaults that take priority over the ringtone's own `d=`, `o=`, `b=` block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub duration: Option<u8>,
    pub octave: Option<u8>,
    pub bpm: Option<u16>,
}

/// Reads one note token left to right: `[duration][pitch][#][.][octave][.]`
struct NoteScanner<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> NoteScanner<'a> {
    fn new(token: &'a str) -> Self {
        Self {
            chars: token.chars().peekable(),
        }
    }

    fn take_digits(&mut self) -> String {
        let mut digits = String::new();
        while let Some(&c) = self.chars.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            digits.push(c);
            self.chars.next();
        }
        digits
    }

    fn take_if(&mut self, expected: char) -> bool {
        if self.chars.peek() == Some(&expected) {
            self.chars.next();
            true
        } else {
            false
        }
    }

    fn take_digit(&mut self) -> Option<u8> {
        let digit = self.chars.peek()?.to_digit(10)?;
        self.chars.next();
        Some(digit as u8)
    }

    fn next(&mut self) -> Option<char> {
        self.chars.next()
    }

    fn is_done(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    /// Scan a token into a resolved note, or `None` if it is malformed.
    fn scan(mut self, settings: &Settings) -> Option<Note> {
        let digits = self.take_digits();
        let duration = if digits.is_empty() {
            settings.duration
        } else {
            let value: u8 = digits.parse().ok()?;
            if !DURATIONS.contains(&value) {
                return None;
            }
            value
        };

        let pitch = match self.next()? {
            'p' | 'P' => Pitch::Rest,
            letter => {
                let sharp = self.take_if('#');
                Pitch::Tone(PitchClass::from_letter(letter, sharp)?)
            }
        };

        let mut dotted = self.take_if('.');

        let octave = match (self.take_digit(), pitch) {
            (None, _) | (Some(_), Pitch::Rest) => settings.octave,
            (Some(octave), Pitch::Tone(_)) => {
                if !(MIN_OCTAVE..=MAX_OCTAVE).contains(&octave) {
                    return None;
                }
                octave
            }
        };

        // Trailing dot after the octave (`4c6.`), common in real ringtones
        if !dotted {
            dotted = self.take_if('.');
        }

        if !self.is_done() {
            return None;
        }

        Some(Note::resolve(settings, duration, dotted, pitch, octave))
    }
}

fn check_duration(value: u8) -> bool {
    DURATIONS.contains(&value)
}

fn check_octave(value: u8) -> bool {
    (MIN_OCTAVE..=MAX_OCTAVE).contains(&value)
}

fn check_bpm(value: u16) -> bool {
    value >= 1
}

fn invalid_default(key: char, value: &str) -> RtttlError {
    RtttlError::InvalidDefaultValue {
        key,
        value: value.to_string(),
    }
}

/// Parse the `d=4,o=6,b=63` block, falling back to the global defaults
fn parse_settings(section: &str, overrides: &Overrides) -> Result<Settings, RtttlError> {
    let mut settings = Settings::default();

    for entry in section.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        let (key, value) = match entry.split_once('=') {
            Some((key, value)) => (key.trim(), value.trim()),
            None => (entry, ""),
        };

        let key_char = match key.to_ascii_lowercase().as_str() {
            "d" => 'd',
            "o" => 'o',
            "b" => 'b',
            _ => {
                return Err(RtttlError::UnknownDefaultKey {
                    key: key.to_string(),
                })
            }
        };

        match key_char {
            'd' => {
                settings.duration = value
                    .parse()
                    .ok()
                    .filter(|d| check_duration(*d))
                    .ok_or_else(|| invalid_default('d', value))?;
            }
            'o' => {
                settings.octave = value
                    .parse()
                    .ok()
                    .filter(|o| check_octave(*o))
                    .ok_or_else(|| invalid_default('o', value))?;
            }
            _ => {
                settings.bpm = value
                    .parse()
                    .ok()
                    .filter(|b| check_bpm(*b))
                    .ok_or_else(|| invalid_default('b', value))?;
            }
        }
    }

    if let Some(duration) = overrides.duration {
        if !check_duration(duration) {
            return Err(invalid_default('d', &duration.to_string()));
        }
        settings.duration = duration;
    }
    if let Some(octave) = overrides.octave {
        if !check_octave(octave) {
            return Err(invalid_default('o', &octave.to_string()));
        }
        settings.octave = octave;
    }
    if let Some(bpm) = overrides.bpm {
        if !check_bpm(bpm) {
            return Err(invalid_default('b', &bpm.to_string()));
        }
        settings.bpm = bpm;
    }

    Ok(settings)
}

/// Parse the comma-separated note list against the resolved settings
fn parse_notes(section: &str, settings: &Settings) -> Result<Vec<Note>, RtttlError> {
    if section.trim().is_empty() {
        return Ok(Vec::new());
    }

    section
        .split(',')
        .enumerate()
        .map(|(i, raw)| {
            let token = raw.trim();
            NoteScanner::new(token)
                .scan(settings)
                .ok_or_else(|| RtttlError::InvalidNoteToken {
                    position: i + 1,
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Main parsing function
pub fn parse(text: &str) -> Result<Song, RtttlError> {
    parse_with_overrides(text, &Overrides::default())
}

/// Parse with caller-supplied defaults taking priority over the text's own.
pub fn parse_with_overrides(text: &str, overrides: &Overrides) -> Result<Song, RtttlError> {
    let sections: Vec<&str> = text.split(':').collect();
    if sections.len() != 3 {
        return Err(RtttlError::MalformedSections {
            found: sections.len(),
        });
    }

    let name = sections[0].trim().to_string();
    let settings = parse_settings(sections[1], overrides)?;
    let notes = parse_notes(sections[2], &settings)?;

    debug!(
        "parsed {:?}: {} notes (d={}, o={}, b={})",
        name,
        notes.len(),
        settings.duration,
        settings.octave,
        settings.bpm
    );

    Ok(Song {
        name,
        settings,
        notes,
    })
}
