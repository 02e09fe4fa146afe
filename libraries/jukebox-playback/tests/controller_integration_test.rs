//! Integration tests for the jukebox controller
//!
//! Drive the controller the way a page would: load a playlist, click rows,
//! send bridge messages, and forward "ended" notifications from a mock
//! device.

use jukebox_core::{JukeboxError, PlayerConfig, Playlist, Track, VolumeCurve};
use jukebox_playback::{
    ControlCommand, JukeboxController, PlaybackDevice, PlaybackError, PlaybackState, PlayerEvent,
};
use std::time::Duration;

// ===== Test Helpers =====

/// Mock playback device recording every call
#[derive(Debug, Default)]
struct MockDevice {
    src: Option<String>,
    paused: bool,
    volume: f64,
    position: Duration,
    duration: Option<Duration>,
    calls: Vec<String>,
    fail_play: bool,
}

impl MockDevice {
    fn new() -> Self {
        Self {
            paused: true,
            ..Default::default()
        }
    }
}

impl PlaybackDevice for MockDevice {
    fn load(&mut self, link: &str) -> jukebox_playback::Result<()> {
        self.src = Some(link.to_string());
        self.paused = true;
        self.position = Duration::ZERO;
        self.calls.push(format!("load {}", link));
        Ok(())
    }

    fn play(&mut self) -> jukebox_playback::Result<()> {
        if self.fail_play {
            return Err(PlaybackError::Device("autoplay blocked".to_string()));
        }
        self.paused = false;
        self.calls.push("play".to_string());
        Ok(())
    }

    fn pause(&mut self) -> jukebox_playback::Result<()> {
        self.paused = true;
        self.calls.push("pause".to_string());
        Ok(())
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn set_volume(&mut self, fraction: f64) -> jukebox_playback::Result<()> {
        self.volume = fraction;
        Ok(())
    }

    fn seek(&mut self, position: Duration) -> jukebox_playback::Result<()> {
        self.position = position;
        self.calls.push(format!("seek {}", position.as_secs_f64()));
        Ok(())
    }

    fn current_time(&self) -> Duration {
        self.position
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }
}

const PAYLOAD: &str = r#"{
    "name": "EVE Soundtrack",
    "songs": [
        { "name": "A", "link": "/music/a.mp3", "duration": "1:00" },
        { "name": "B", "link": "/music/b.mp3", "duration": "2:00" },
        { "name": "C", "link": "/music/c.mp3", "duration": "3:00" }
    ]
}"#;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("jukebox_playback=debug")
        .with_test_writer()
        .try_init();
}

fn jukebox() -> JukeboxController<MockDevice> {
    init_tracing();
    let mut jukebox = JukeboxController::with_seed(MockDevice::new(), &PlayerConfig::default(), 3)
        .unwrap();
    jukebox.load_playlist(PAYLOAD).unwrap();
    jukebox.drain_events();
    jukebox
}

fn src(jukebox: &JukeboxController<MockDevice>) -> Option<&str> {
    jukebox.device().src.as_deref()
}

// ===== Playlist Loading =====

#[test]
fn load_playlist_emits_event_and_positions_on_first_track() {
    init_tracing();
    let mut jukebox = JukeboxController::new(MockDevice::new(), &PlayerConfig::default()).unwrap();
    jukebox.load_playlist(PAYLOAD).unwrap();

    assert_eq!(jukebox.current_track().unwrap().name, "A");
    assert_eq!(jukebox.state(), PlaybackState::Stopped);
    assert_eq!(
        jukebox.drain_events(),
        vec![PlayerEvent::PlaylistLoaded {
            name: "EVE Soundtrack".to_string(),
            length: 3
        }]
    );
    // Loading a playlist does not touch the device
    assert!(jukebox.device().calls.is_empty());
}

#[test]
fn malformed_payload_is_decode_error() {
    init_tracing();
    let mut jukebox = JukeboxController::new(MockDevice::new(), &PlayerConfig::default()).unwrap();

    let err = jukebox.load_playlist("{}").unwrap_err();
    assert!(matches!(err, PlaybackError::Core(JukeboxError::Decode(_))));
    assert!(jukebox.playlist().is_none());
}

#[test]
fn failed_reload_keeps_previous_playlist() {
    let mut jukebox = jukebox();
    jukebox.next().unwrap();

    assert!(jukebox.load_playlist(r#"{ "songs": [] }"#).is_err());
    assert_eq!(jukebox.playlist().unwrap().len(), 3);
    assert_eq!(jukebox.current_track().unwrap().name, "B");
}

#[test]
fn reload_resets_cursor() {
    let mut jukebox = jukebox();
    jukebox.next().unwrap();
    jukebox.next().unwrap();

    let raw = r#"{ "songs": [ { "name": "X", "link": "/music/x.mp3", "duration": "0:30" } ] }"#;
    jukebox.load_playlist(raw).unwrap();
    assert_eq!(jukebox.current_track().unwrap().name, "X");
}

#[test]
fn set_empty_playlist_is_rejected() {
    let mut jukebox = jukebox();
    jukebox.next().unwrap();

    let err = jukebox.set_playlist(Playlist::default()).unwrap_err();
    assert_eq!(err, PlaybackError::EmptyPlaylist);
    assert_eq!(jukebox.current_track().unwrap().name, "B");
}

#[test]
fn operations_before_playlist_fail() {
    init_tracing();
    let mut jukebox = JukeboxController::new(MockDevice::new(), &PlayerConfig::default()).unwrap();

    assert_eq!(jukebox.next(), Err(PlaybackError::NoPlaylist));
    assert_eq!(jukebox.previous(), Err(PlaybackError::NoPlaylist));
    assert_eq!(jukebox.toggle_pause(), Err(PlaybackError::NoPlaylist));
    assert_eq!(
        jukebox.select_track("/music/a.mp3"),
        Err(PlaybackError::NoPlaylist)
    );
    assert_eq!(
        jukebox.on_track_ended().unwrap_err(),
        PlaybackError::NoPlaylist
    );
    assert!(jukebox.current_track().is_none());

    // Volume and shuffle do not need a playlist
    jukebox.set_volume(30).unwrap();
    jukebox.toggle_shuffle();
    assert!(jukebox.is_shuffle());
}

// ===== Navigation =====

#[test]
fn next_and_previous_drive_the_device() {
    let mut jukebox = jukebox();

    jukebox.next().unwrap();
    assert_eq!(src(&jukebox), Some("/music/b.mp3"));
    assert!(!jukebox.device().paused);
    assert_eq!(jukebox.state(), PlaybackState::Playing);

    jukebox.next().unwrap();
    jukebox.next().unwrap();
    assert_eq!(src(&jukebox), Some("/music/a.mp3"));

    jukebox.previous().unwrap();
    assert_eq!(src(&jukebox), Some("/music/c.mp3"));
}

#[test]
fn next_emits_track_and_state_events() {
    let mut jukebox = jukebox();
    jukebox.next().unwrap();

    assert_eq!(
        jukebox.drain_events(),
        vec![
            PlayerEvent::TrackChanged {
                index: 1,
                name: "B".to_string(),
                link: "/music/b.mp3".to_string(),
            },
            PlayerEvent::StateChanged {
                state: PlaybackState::Playing
            },
        ]
    );

    // Already playing: no second state event
    jukebox.next().unwrap();
    let events = jukebox.drain_events();
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], PlayerEvent::TrackChanged { index: 2, .. }));
}

#[test]
fn track_ended_advances_and_plays() {
    let mut jukebox = jukebox();
    jukebox.toggle_pause().unwrap();
    assert_eq!(src(&jukebox), Some("/music/a.mp3"));

    let track = jukebox.on_track_ended().unwrap();
    assert_eq!(track, Track::new("B", "/music/b.mp3", "2:00"));
    assert_eq!(src(&jukebox), Some("/music/b.mp3"));
    assert!(!jukebox.device().paused);

    jukebox.on_track_ended().unwrap();
    let track = jukebox.on_track_ended().unwrap();
    assert_eq!(track.name, "A");
}

#[test]
fn shuffle_next_stays_in_playlist() {
    let mut jukebox = jukebox();
    jukebox.toggle_shuffle();
    assert!(jukebox.is_shuffle());

    let links = ["/music/a.mp3", "/music/b.mp3", "/music/c.mp3"];
    for _ in 0..50 {
        jukebox.next().unwrap();
        assert!(links.contains(&src(&jukebox).unwrap()));
    }
}

#[test]
fn shuffle_previous_still_steps_back() {
    let mut jukebox = jukebox();
    jukebox.select_track("/music/c.mp3").unwrap();
    jukebox.set_shuffle(true);

    jukebox.previous().unwrap();
    assert_eq!(src(&jukebox), Some("/music/b.mp3"));
    jukebox.previous().unwrap();
    assert_eq!(src(&jukebox), Some("/music/a.mp3"));
}

#[test]
fn shuffle_from_config_applies_to_first_playlist() {
    init_tracing();
    let config = PlayerConfig {
        shuffle: true,
        ..Default::default()
    };
    let mut jukebox = JukeboxController::with_seed(MockDevice::new(), &config, 9).unwrap();
    jukebox.load_playlist(PAYLOAD).unwrap();
    assert!(jukebox.is_shuffle());
}

#[test]
fn select_track_plays_it() {
    let mut jukebox = jukebox();
    jukebox.select_track("/music/c.mp3").unwrap();

    assert_eq!(src(&jukebox), Some("/music/c.mp3"));
    assert_eq!(jukebox.current_track().unwrap().name, "C");
    assert_eq!(jukebox.state(), PlaybackState::Playing);

    // Sequencing continues from the selected track
    jukebox.next().unwrap();
    assert_eq!(src(&jukebox), Some("/music/a.mp3"));
}

#[test]
fn select_unknown_track_fails() {
    let mut jukebox = jukebox();
    let err = jukebox.select_track("/music/zzz.mp3").unwrap_err();
    assert_eq!(
        err,
        PlaybackError::TrackNotFound("/music/zzz.mp3".to_string())
    );
    assert_eq!(src(&jukebox), None);
}

// ===== Pause / Play =====

#[test]
fn toggle_pause_starts_then_pauses_then_resumes() {
    let mut jukebox = jukebox();

    jukebox.toggle_pause().unwrap();
    assert_eq!(src(&jukebox), Some("/music/a.mp3"));
    assert_eq!(jukebox.state(), PlaybackState::Playing);

    jukebox.toggle_pause().unwrap();
    assert!(jukebox.device().paused);
    assert_eq!(jukebox.state(), PlaybackState::Paused);

    jukebox.toggle_pause().unwrap();
    assert!(!jukebox.device().paused);
    assert_eq!(jukebox.state(), PlaybackState::Playing);

    assert_eq!(
        jukebox.device().calls,
        vec!["load /music/a.mp3", "play", "pause", "play"]
    );
}

#[test]
fn load_track_does_not_play() {
    let mut jukebox = jukebox();
    jukebox.load_track("/music/b.mp3").unwrap();

    assert_eq!(src(&jukebox), Some("/music/b.mp3"));
    assert!(jukebox.device().paused);
    assert_eq!(jukebox.state(), PlaybackState::Paused);

    // togglePause resumes the loaded track rather than reloading
    jukebox.toggle_pause().unwrap();
    assert_eq!(jukebox.device().calls, vec!["load /music/b.mp3", "play"]);
}

#[test]
fn device_failure_propagates() {
    let mut jukebox = jukebox();
    jukebox.device_mut().fail_play = true;

    let err = jukebox.next().unwrap_err();
    assert!(matches!(err, PlaybackError::Device(_)));

    // The track is loaded but never started
    assert_eq!(src(&jukebox), Some("/music/b.mp3"));
    assert_eq!(jukebox.state(), PlaybackState::Paused);
}

#[test]
fn blocked_play_while_playing_reports_paused() {
    let mut jukebox = jukebox();
    jukebox.toggle_pause().unwrap();
    assert_eq!(jukebox.state(), PlaybackState::Playing);
    jukebox.drain_events();

    jukebox.device_mut().fail_play = true;
    assert!(jukebox.next().is_err());

    assert_eq!(jukebox.current_track().unwrap().name, "B");
    assert_eq!(src(&jukebox), Some("/music/b.mp3"));
    assert!(jukebox.device().paused);
    assert_eq!(jukebox.state(), PlaybackState::Paused);
    assert!(jukebox.drain_events().contains(&PlayerEvent::StateChanged {
        state: PlaybackState::Paused
    }));

    // Retrying once autoplay is allowed resumes the loaded track
    jukebox.device_mut().fail_play = false;
    jukebox.toggle_pause().unwrap();
    assert_eq!(src(&jukebox), Some("/music/b.mp3"));
    assert_eq!(jukebox.state(), PlaybackState::Playing);
}

// ===== Volume =====

#[test]
fn untyped_volume_is_clamped_not_wrapped() {
    let mut jukebox = jukebox();

    jukebox.set_volume_percent(300.0).unwrap();
    assert_eq!(jukebox.volume().level(), 100);
    assert!((jukebox.device().volume - 1.0).abs() < 1e-9);

    jukebox.set_volume_percent(-1.0).unwrap();
    assert_eq!(jukebox.volume().level(), 0);
    assert_eq!(jukebox.device().volume, 0.0);

    jukebox.set_volume_percent(42.4).unwrap();
    assert_eq!(jukebox.volume().level(), 42);

    let err = jukebox.set_volume_percent(f64::NAN).unwrap_err();
    assert!(matches!(err, PlaybackError::InvalidVolume(_)));
    assert_eq!(jukebox.volume().level(), 42);
}

#[test]
fn volume_reaches_device_as_fraction() {
    init_tracing();
    let config = PlayerConfig {
        initial_volume: 60,
        ..Default::default()
    };
    let mut jukebox = JukeboxController::new(MockDevice::new(), &config).unwrap();
    assert!((jukebox.device().volume - 0.6).abs() < 1e-9);

    jukebox.set_volume(25).unwrap();
    assert!((jukebox.device().volume - 0.25).abs() < 1e-9);

    jukebox.set_volume_fraction(0.9).unwrap();
    assert_eq!(jukebox.volume().level(), 90);

    jukebox.toggle_mute().unwrap();
    assert_eq!(jukebox.device().volume, 0.0);
    assert_eq!(
        jukebox.drain_events().last(),
        Some(&PlayerEvent::VolumeChanged {
            level: 90,
            is_muted: true
        })
    );
}

#[test]
fn perceptual_curve_is_quieter() {
    init_tracing();
    let config = PlayerConfig {
        initial_volume: 50,
        volume_curve: VolumeCurve::Perceptual,
        ..Default::default()
    };
    let jukebox = JukeboxController::new(MockDevice::new(), &config).unwrap();
    assert!((jukebox.device().volume - 0.0316).abs() < 0.001);
}

#[test]
fn invalid_config_rejected() {
    let config = PlayerConfig {
        progress_interval_ms: 0,
        ..Default::default()
    };
    let result = JukeboxController::new(MockDevice::new(), &config);
    assert!(matches!(result, Err(PlaybackError::Core(JukeboxError::Config(_)))));
}

// ===== Progress & Seeking =====

#[test]
fn progress_reports_percent() {
    let mut jukebox = jukebox();
    jukebox.toggle_pause().unwrap();
    jukebox.device_mut().duration = Some(Duration::from_secs(200));
    jukebox.device_mut().position = Duration::from_secs(50);

    let progress = jukebox.progress();
    assert_eq!(progress.percent(), Some(25));
    assert_eq!(jukebox.progress_interval(), Duration::from_millis(1000));

    jukebox.drain_events();
    jukebox.emit_progress();
    assert_eq!(
        jukebox.drain_events(),
        vec![PlayerEvent::Progress {
            position_ms: 50_000,
            duration_ms: Some(200_000),
            percent: Some(25),
        }]
    );
}

#[test]
fn progress_before_metadata_has_no_percent() {
    let jukebox = jukebox();
    assert_eq!(jukebox.progress().percent(), None);
}

#[test]
fn seek_within_track() {
    let mut jukebox = jukebox();
    jukebox.toggle_pause().unwrap();
    jukebox.device_mut().duration = Some(Duration::from_secs(100));

    jukebox.seek_to(Duration::from_secs(30)).unwrap();
    assert_eq!(jukebox.device().position, Duration::from_secs(30));

    jukebox.seek_to_percent(0.5).unwrap();
    assert_eq!(jukebox.device().position, Duration::from_secs(50));

    let err = jukebox.seek_to(Duration::from_secs(101)).unwrap_err();
    assert_eq!(
        err,
        PlaybackError::InvalidSeekPosition(Duration::from_secs(101))
    );
}

#[test]
fn seek_without_loaded_track_fails() {
    let mut jukebox = jukebox();
    assert!(matches!(
        jukebox.seek_to(Duration::from_secs(1)),
        Err(PlaybackError::Device(_))
    ));
}

// ===== Control Messages =====

#[test]
fn bridge_messages_drive_playback() {
    let mut jukebox = jukebox();

    jukebox.handle_message("load /music/c.mp3").unwrap();
    assert_eq!(src(&jukebox), Some("/music/c.mp3"));
    assert!(jukebox.device().paused);

    jukebox.handle_message("togglePause").unwrap();
    assert!(!jukebox.device().paused);

    jukebox.handle_message("play /music/a.mp3").unwrap();
    assert_eq!(src(&jukebox), Some("/music/a.mp3"));

    jukebox.handle_message("volume 40").unwrap();
    assert!((jukebox.device().volume - 0.4).abs() < 1e-9);

    jukebox.handle_message("next").unwrap();
    assert_eq!(src(&jukebox), Some("/music/b.mp3"));

    jukebox.handle_message("previous").unwrap();
    assert_eq!(src(&jukebox), Some("/music/a.mp3"));

    jukebox.handle_message("toggleShuffle").unwrap();
    assert!(jukebox.is_shuffle());
}

#[test]
fn background_is_forwarded_as_event() {
    let mut jukebox = jukebox();
    jukebox
        .handle(ControlCommand::Background("/img/nebula.webm".to_string()))
        .unwrap();

    assert_eq!(
        jukebox.drain_events(),
        vec![PlayerEvent::BackgroundChanged {
            path: "/img/nebula.webm".to_string()
        }]
    );
}

#[test]
fn bad_messages_queue_error_events() {
    let mut jukebox = jukebox();

    assert!(matches!(
        jukebox.handle_message("dance"),
        Err(PlaybackError::InvalidCommand(_))
    ));
    assert!(matches!(
        jukebox.handle_message("play /music/missing.mp3"),
        Err(PlaybackError::TrackNotFound(_))
    ));

    let events = jukebox.drain_events();
    assert_eq!(events.len(), 2);
    assert!(events
        .iter()
        .all(|e| matches!(e, PlayerEvent::Error { .. })));
}
