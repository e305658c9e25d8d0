use std::env;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use log::info;

use crate::audio::RodioPlayer;
use crate::library::FolderReader;
use crate::organizer::Organizer;

mod command;
mod settings;
mod shell;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = settings::load_settings();
    startup::init_logging(&settings.log);

    if let Some(dir) = env::args_os().nth(1) {
        settings.library.dir = PathBuf::from(dir);
    }
    info!(
        "library: {} (*.{})",
        settings.library.dir.display(),
        settings.library.normalized_extension()
    );

    let reader = FolderReader::new(settings.library.clone());
    let player = RodioPlayer::new(Duration::from_millis(settings.playback.sample_ms));
    let rng = startup::shuffle_rng(&settings.playback);

    let mut organizer = Organizer::new(&reader, &settings.library, player, io::stdout(), rng);

    shell::run(&mut organizer, io::stdin().lock(), io::stdout())?;
    Ok(())
}

#[cfg(test)]
mod tests;
