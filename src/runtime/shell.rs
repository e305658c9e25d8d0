use std::io::{self, BufRead, Write};

use log::debug;

use crate::audio::Player;
use crate::organizer::Organizer;

use super::command::{Command, HELP};

/// Read commands from `input` until `quit` or end of input.
///
/// Organizer messages go to the organizer's own sink; the prompt, help and
/// parse errors go to `out`.
pub fn run<P, W, R, O>(organizer: &mut Organizer<P, W>, input: R, mut out: O) -> io::Result<()>
where
    P: Player,
    W: Write,
    R: BufRead,
    O: Write,
{
    write!(out, "> ")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        match Command::parse(&line) {
            Ok(Some(Command::Quit)) => break,
            Ok(Some(cmd)) => {
                debug!("command: {cmd:?}");
                dispatch(organizer, cmd, &mut out)?;
            }
            Ok(None) => {}
            Err(e) => writeln!(out, "{e}")?,
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

fn dispatch<P: Player, W: Write, O: Write>(
    organizer: &mut Organizer<P, W>,
    cmd: Command,
    out: &mut O,
) -> io::Result<()> {
    match cmd {
        Command::ListAll => organizer.list_all_tracks(),
        Command::List(i) => organizer.list_track(i),
        Command::Artist(artist) => organizer.list_by_artist(&artist),
        Command::Add(file) => organizer.add_file(file),
        Command::Remove(i) => {
            if let Some(track) = organizer.remove_track(i) {
                writeln!(out, "Removed: {}", track.details())?;
            }
        }
        Command::Play(i) => organizer.play_track(i),
        Command::First => organizer.play_first(),
        Command::Stop => organizer.stop_playing(),
        Command::Shuffle => organizer.shuffle(),
        Command::ShuffleAll => organizer.shuffle_all(),
        Command::Count => writeln!(out, "{} tracks", organizer.count())?,
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => {}
    }
    Ok(())
}
