use crate::config;

/// Load settings, falling back to defaults when the config is unreadable or invalid.
pub fn load_settings() -> config::Settings {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                eprintln!("music-organizer: invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent the app from starting.
            eprintln!("music-organizer: failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}
