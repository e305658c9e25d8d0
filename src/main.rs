mod audio;
mod config;
mod library;
mod organizer;
mod runtime;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
