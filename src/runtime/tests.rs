use super::command::{Command, ParseError};
use super::shell;
use super::startup::{level_filter, shuffle_rng};
use crate::audio::Player;
use crate::config::{LogLevelSetting, PlaybackSettings};
use crate::library::Track;
use crate::organizer::Organizer;
use log::LevelFilter;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

#[test]
fn parse_blank_line_is_nothing() {
    assert_eq!(Command::parse(""), Ok(None));
    assert_eq!(Command::parse("   \t"), Ok(None));
}

#[test]
fn parse_list_with_and_without_index() {
    assert_eq!(Command::parse("list"), Ok(Some(Command::ListAll)));
    assert_eq!(Command::parse("  list  4 "), Ok(Some(Command::List(4))));
    assert_eq!(Command::parse("ls -1"), Ok(Some(Command::List(-1))));
}

#[test]
fn parse_keeps_spaces_in_text_arguments() {
    assert_eq!(
        Command::parse("artist Big Bill"),
        Ok(Some(Command::Artist("Big Bill".to_string())))
    );
    assert_eq!(
        Command::parse("add ../audio/Miles Davis-So What.mp3"),
        Ok(Some(Command::Add(PathBuf::from("../audio/Miles Davis-So What.mp3"))))
    );
}

#[test]
fn parse_bare_commands() {
    assert_eq!(Command::parse("first"), Ok(Some(Command::First)));
    assert_eq!(Command::parse("stop"), Ok(Some(Command::Stop)));
    assert_eq!(Command::parse("shuffle"), Ok(Some(Command::Shuffle)));
    assert_eq!(Command::parse("shuffle-all"), Ok(Some(Command::ShuffleAll)));
    assert_eq!(Command::parse("count"), Ok(Some(Command::Count)));
    assert_eq!(Command::parse("exit"), Ok(Some(Command::Quit)));
}

#[test]
fn parse_errors() {
    assert_eq!(
        Command::parse("dance"),
        Err(ParseError::Unknown("dance".to_string()))
    );
    assert_eq!(
        Command::parse("remove"),
        Err(ParseError::MissingArgument("remove"))
    );
    assert_eq!(
        Command::parse("play two"),
        Err(ParseError::BadIndex("two".to_string()))
    );
    assert_eq!(
        Command::parse("stop now"),
        Err(ParseError::UnexpectedArgument("stop"))
    );
    assert_eq!(
        ParseError::BadIndex("two".to_string()).to_string(),
        "Not a track index: two"
    );
}

#[derive(Default)]
struct CountingPlayer {
    samples: Vec<PathBuf>,
    stops: usize,
}

impl Player for CountingPlayer {
    fn start_playing(&mut self, _filename: &Path) {}

    fn play_sample(&mut self, filename: &Path) {
        self.samples.push(filename.to_path_buf());
    }

    fn play_whole(&mut self, _filename: &Path) {}

    fn stop(&mut self) {
        self.stops += 1;
    }
}

fn run_shell(script: &str) -> (Organizer<CountingPlayer, Vec<u8>>, String) {
    let mut organizer = Organizer::empty(
        CountingPlayer::default(),
        Vec::new(),
        StdRng::seed_from_u64(3),
    );
    organizer.add_track(Track::new("Adele", "Hello", "a.mp3"));
    organizer.add_track(Track::new("Bach", "Air", "b.mp3"));

    let mut out = Vec::new();
    shell::run(&mut organizer, script.as_bytes(), &mut out).unwrap();
    (organizer, String::from_utf8(out).unwrap())
}

#[test]
fn shell_dispatches_commands_to_organizer() {
    let (organizer, shell_out) = run_shell("play 1\nremove 0\ncount\nstop\n");

    assert_eq!(organizer.player().samples, vec![PathBuf::from("b.mp3")]);
    assert_eq!(organizer.player().stops, 1);
    assert_eq!(organizer.count(), 1);
    assert_eq!(
        String::from_utf8(organizer.output().clone()).unwrap(),
        "Now playing: Bach - Air\n"
    );
    assert!(shell_out.contains("Removed: Adele: Hello  (file: a.mp3)\n"));
    assert!(shell_out.contains("1 tracks\n"));
}

#[test]
fn shell_reports_parse_errors_and_keeps_going() {
    let (organizer, shell_out) = run_shell("bogus\n\nremove x\nadd c.mp3\n");

    assert!(shell_out.contains("Unknown command: bogus"));
    assert!(shell_out.contains("Not a track index: x"));
    assert_eq!(organizer.count(), 3);
}

#[test]
fn shell_stops_at_quit() {
    let (organizer, _) = run_shell("quit\nremove 0\n");
    assert_eq!(organizer.count(), 2);
}

#[test]
fn shell_reports_bad_index_through_organizer() {
    let (organizer, _) = run_shell("list 5\n");
    assert_eq!(
        String::from_utf8(organizer.output().clone()).unwrap(),
        "Valid range must be between 0 and 1\n"
    );
}

#[test]
fn log_levels_map_onto_filters() {
    assert_eq!(level_filter(LogLevelSetting::Off), LevelFilter::Off);
    assert_eq!(level_filter(LogLevelSetting::Warn), LevelFilter::Warn);
    assert_eq!(level_filter(LogLevelSetting::Trace), LevelFilter::Trace);
}

#[test]
fn shuffle_rng_honors_fixed_seed() {
    let settings = PlaybackSettings {
        seed: Some(11),
        ..PlaybackSettings::default()
    };
    let a = shuffle_rng(&settings).gen_range(0..u64::MAX);
    let b = shuffle_rng(&settings).gen_range(0..u64::MAX);
    assert_eq!(a, b);
}
