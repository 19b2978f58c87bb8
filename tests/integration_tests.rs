//! Integration tests for the RTTTL crate
//!
//! Tests the full pipeline from ringtone text through the player to the pin.

use rtttl::{
    library, parse, parse_with_overrides, Advance, Loops, ManualClock, Overrides, Pitch,
    PitchClass, Player, PlayerConfig, PlayerState, RtttlError, ToneOutput,
};

#[derive(Default)]
struct Pin {
    starts: Vec<u32>,
    stops: usize,
    on: bool,
}

impl ToneOutput for Pin {
    fn start_tone(&mut self, frequency_hz: u32) {
        self.starts.push(frequency_hz);
        self.on = true;
    }

    fn stop_tone(&mut self) {
        self.stops += 1;
        self.on = false;
    }
}

#[test]
fn test_note_count_matches_tokens() {
    let text = "Count:d=8,o=5,b=112:c,d,e,f,g,a,b,c6,p,c6";
    let song = parse(text).unwrap();
    let tokens = text.split(':').nth(2).unwrap().split(',').count();
    assert_eq!(song.notes.len(), tokens);
}

#[test]
fn test_resolved_notes() {
    let song = parse("a:d=4,o=5,b=100:4c6,e,8g.").unwrap();
    let pitches: Vec<Pitch> = song.notes.iter().map(|n| n.pitch).collect();
    assert_eq!(
        pitches,
        vec![
            Pitch::Tone(PitchClass::C),
            Pitch::Tone(PitchClass::E),
            Pitch::Tone(PitchClass::G)
        ]
    );
    let octaves: Vec<u8> = song.notes.iter().map(|n| n.octave).collect();
    assert_eq!(octaves, vec![6, 5, 5]);
    let durations: Vec<(u8, bool)> = song.notes.iter().map(|n| (n.duration, n.dotted)).collect();
    assert_eq!(durations, vec![(4, false), (4, false), (8, true)]);
}

#[test]
fn test_errors_from_spec_examples() {
    assert!(matches!(
        parse("x:d=3,o=5,b=63:4c6"),
        Err(RtttlError::InvalidDefaultValue { key: 'd', .. })
    ));
    assert!(matches!(
        parse("x:d=4,o=5,b=63:4h6"),
        Err(RtttlError::InvalidNoteToken { position: 1, .. })
    ));
}

#[test]
fn test_play_library_song_to_completion() {
    let song = library::get("Simpsons").unwrap().unwrap();
    let clock = ManualClock::new();
    let mut player = Player::new(Pin::default(), &clock);
    player.load(&song);

    let mut advanced = 0;
    let mut ticks = 0;
    while player.is_playing() {
        clock.advance_ms(5);
        ticks += 1;
        match player.advance() {
            Advance::Advanced => advanced += 1,
            Advance::Finished => break,
            Advance::Pending => {}
        }
        assert!(ticks < 100_000, "playback never finished");
    }

    assert_eq!(player.state(), PlayerState::Idle);
    assert_eq!(advanced, song.len() - 1);
    let tones = song.notes.iter().filter(|n| !n.is_rest()).count();
    let pin = player.output();
    assert_eq!(pin.starts.len(), tones);
    assert_eq!(pin.stops, tones + song.notes.iter().filter(|n| n.is_rest()).count() + 1);
    assert!(!pin.on);
}

#[test]
fn test_blocking_playback_takes_song_length() {
    let song = parse("Short:d=4,o=5,b=120:c,8p,e.,g").unwrap();
    let clock = ManualClock::new();
    let mut player = Player::new(Pin::default(), &clock);
    player.load(&song);
    player.play_blocking();

    use rtttl::Clock;
    assert_eq!(clock.now().as_millis() as u64, song.total_duration_ms());
    assert_eq!(song.total_duration_ms(), 500 + 250 + 750 + 500);
}

#[test]
fn test_config_drives_player() {
    let config = PlayerConfig::from_yaml("loops: 1\ntone-gap-ms: 10").unwrap();
    assert_eq!(config.loops, Loops::Times(1));

    let song = parse("g:d=4,o=5,b=120:c,p").unwrap();
    let clock = ManualClock::new();
    let mut player = Player::with_config(Pin::default(), &clock, config);
    player.load(&song);
    player.play_blocking();

    use rtttl::Clock;
    // Two passes of (500 ms + 10 ms gap) * 2 notes
    assert_eq!(clock.now().as_millis(), 2040);
    assert_eq!(player.output().starts, vec![523, 523]);
}

#[test]
fn test_overrides_change_playback_speed() {
    let text = "o:d=4,o=5,b=60:c,d";
    let slow = parse(text).unwrap();
    let fast = parse_with_overrides(
        text,
        &Overrides {
            bpm: Some(240),
            ..Overrides::default()
        },
    )
    .unwrap();
    assert_eq!(slow.total_duration_ms(), 2000);
    assert_eq!(fast.total_duration_ms(), 500);
}

#[test]
fn test_song_serializes() {
    let song = parse("s:d=4,o=4,b=63:a,p").unwrap();
    let yaml = serde_yaml::to_string(&song).unwrap();
    assert!(yaml.contains("name: s"));
    assert!(yaml.contains("frequency: 440"));
    assert!(yaml.contains("durationMs: 952"));
}
