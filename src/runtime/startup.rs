use log::LevelFilter;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{LogLevelSetting, LogSettings, PlaybackSettings};

pub fn level_filter(level: LogLevelSetting) -> LevelFilter {
    match level {
        LogLevelSetting::Off => LevelFilter::Off,
        LogLevelSetting::Error => LevelFilter::Error,
        LogLevelSetting::Warn => LevelFilter::Warn,
        LogLevelSetting::Info => LevelFilter::Info,
        LogLevelSetting::Debug => LevelFilter::Debug,
        LogLevelSetting::Trace => LevelFilter::Trace,
    }
}

/// Route `log` records to stderr through colog.
pub fn init_logging(settings: &LogSettings) {
    let mut clog = colog::default_builder();
    clog.filter(None, level_filter(settings.level));
    if let Err(e) = clog.try_init() {
        eprintln!("music-organizer: logger already initialized: {e}");
    }
}

/// Seeded when `playback.seed` is set, from OS entropy otherwise.
pub fn shuffle_rng(settings: &PlaybackSettings) -> StdRng {
    match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
