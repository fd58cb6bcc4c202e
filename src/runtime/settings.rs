use crate::config::Settings;

/// Settings for this run plus, when they had to be replaced by defaults, why.
pub struct LoadedSettings {
    pub settings: Settings,
    pub fallback_reason: Option<String>,
}

/// Load and validate settings. A missing, unreadable or invalid config never
/// stops the player; it runs on defaults and the reason is kept for logging.
pub fn load_settings() -> LoadedSettings {
    let outcome = Settings::load()
        .map_err(|e| format!("failed to load config: {e}"))
        .and_then(|s| match s.validate() {
            Ok(()) => Ok(s),
            Err(msg) => Err(format!("invalid config: {msg}")),
        });

    match outcome {
        Ok(settings) => LoadedSettings {
            settings,
            fallback_reason: None,
        },
        Err(reason) => {
            eprintln!("tunebox: {reason}; using defaults");
            LoadedSettings {
                settings: Settings::default(),
                fallback_reason: Some(reason),
            }
        }
    }
}
