//! # Player Configuration
//!
//! Optional knobs for [`Player`](crate::Player), readable from a YAML document:
//!
//! ```yaml
//! loops: forever     # or an extra-pass count such as 2; 0 or "once" plays once
//! tone-gap-ms: 20    # silence after each note, 0 disables
//! ```
//!
//! Both keys are optional. The default (play once, no gap) gives plain
//! note-to-note playback.

use serde::{Deserialize, Serialize};

use crate::error::RtttlError;

/// How many times a song repeats after its first pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawLoops", into = "RawLoops")]
pub enum Loops {
    #[default]
    Once,
    /// Extra passes after the first one
    Times(u32),
    Forever,
}

/// Loop count as written in YAML: a number or a word
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawLoops {
    Count(u32),
    Word(String),
}

impl TryFrom<RawLoops> for Loops {
    type Error = String;

    fn try_from(raw: RawLoops) -> Result<Self, Self::Error> {
        match raw {
            RawLoops::Count(0) => Ok(Loops::Once),
            RawLoops::Count(n) => Ok(Loops::Times(n)),
            RawLoops::Word(word) => match word.trim().to_ascii_lowercase().as_str() {
                "once" => Ok(Loops::Once),
                "forever" => Ok(Loops::Forever),
                _ => Err(format!("invalid loop count: {:?}", word)),
            },
        }
    }
}

impl From<Loops> for RawLoops {
    fn from(loops: Loops) -> Self {
        match loops {
            Loops::Once => RawLoops::Count(0),
            Loops::Times(n) => RawLoops::Count(n),
            Loops::Forever => RawLoops::Word("forever".to_string()),
        }
    }
}

/// Playback options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PlayerConfig {
    pub loops: Loops,
    /// Silence inserted after every note, in milliseconds
    pub tone_gap_ms: u32,
}

impl PlayerConfig {
    pub fn from_yaml(content: &str) -> Result<Self, RtttlError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| RtttlError::ConfigError(e.to_string()))
    }

    pub fn with_loops(mut self, loops: Loops) -> Self {
        self.loops = loops;
        self
    }

    pub fn with_tone_gap_ms(mut self, tone_gap_ms: u32) -> Self {
        self.tone_gap_ms = tone_gap_ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(PlayerConfig::from_yaml("").unwrap(), PlayerConfig::default());
        assert_eq!(PlayerConfig::default().loops, Loops::Once);
        assert_eq!(PlayerConfig::default().tone_gap_ms, 0);
    }

    #[test]
    fn test_full_config() {
        let config = PlayerConfig::from_yaml("loops: 2\ntone-gap-ms: 20\n").unwrap();
        assert_eq!(config.loops, Loops::Times(2));
        assert_eq!(config.tone_gap_ms, 20);
    }

    #[test]
    fn test_loop_words() {
        let config = PlayerConfig::from_yaml("loops: forever").unwrap();
        assert_eq!(config.loops, Loops::Forever);
        let config = PlayerConfig::from_yaml("loops: once").unwrap();
        assert_eq!(config.loops, Loops::Once);
        let config = PlayerConfig::from_yaml("loops: 0").unwrap();
        assert_eq!(config.loops, Loops::Once);
    }

    #[test]
    fn test_invalid_loops() {
        assert!(matches!(
            PlayerConfig::from_yaml("loops: -1"),
            Err(RtttlError::ConfigError(_))
        ));
        assert!(matches!(
            PlayerConfig::from_yaml("loops: sometimes"),
            Err(RtttlError::ConfigError(_))
        ));
    }

    #[test]
    fn test_invalid_gap() {
        assert!(matches!(
            PlayerConfig::from_yaml("tone-gap-ms: soon"),
            Err(RtttlError::ConfigError(_))
        ));
    }

    #[test]
    fn test_builders() {
        let config = PlayerConfig::default()
            .with_loops(Loops::Forever)
            .with_tone_gap_ms(15);
        assert_eq!(config.loops, Loops::Forever);
        assert_eq!(config.tone_gap_ms, 15);
    }

    #[test]
    fn test_serialize_roundtrip_keys() {
        let config = PlayerConfig::default().with_loops(Loops::Forever).with_tone_gap_ms(20);
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("tone-gap-ms: 20"));
        assert!(yaml.contains("loops: forever"));
        assert_eq!(PlayerConfig::from_yaml(&yaml).unwrap(), config);
    }
}
