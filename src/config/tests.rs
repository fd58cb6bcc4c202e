use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use super::default_log_path;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_tunebox_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("TUNEBOX_CONFIG_PATH", "/tmp/tunebox-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/tunebox-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("tunebox")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("tunebox")
            .join("config.toml")
    );
}

#[test]
fn default_log_path_falls_back_to_local_state() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_STATE_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_log_path().unwrap(),
        std::path::PathBuf::from("/tmp/home-dir/.local/state/tunebox/tunebox.log")
    );
}

#[test]
fn defaults_match_the_stock_player() {
    let s = Settings::default();
    assert_eq!(s.player.default_volume, 0.7);
    assert_eq!(s.shell.heading.variable, "--font-poppins");
    assert_eq!(s.shell.body.variable, "--font-montserrat");
    assert_eq!(s.shell.heading.weights.len(), 9);
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[player]
default_volume = 0.5

[controls]
scrub_seconds = 9
volume_step = 0.1

[shell]
title = "hello"
lang = "ru"

[shell.heading]
variable = "--font-heading"
family = "Inter"
weights = [400, 700]
display = "fallback"

[library]
extensions = ["mp3"]
recursive = false
include_hidden = false
follow_links = false
cover_names = ["art.png"]

[logging]
level = "debug"
file = "/tmp/tunebox.log"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("TUNEBOX_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("TUNEBOX__PLAYER__DEFAULT_VOLUME");

    let s = Settings::load().unwrap();
    assert_eq!(s.player.default_volume, 0.5);
    assert_eq!(s.controls.scrub_seconds, 9);
    assert_eq!(s.controls.volume_step, 0.1);
    assert_eq!(s.shell.title, "hello");
    assert_eq!(s.shell.lang, "ru");
    assert_eq!(s.shell.heading.family, "Inter");
    assert_eq!(s.shell.heading.weights, vec![400, 700]);
    assert_eq!(s.shell.heading.display, FontDisplay::Fallback);
    assert!(s.shell.heading.subsets.is_empty());
    assert_eq!(s.shell.body.variable, "--font-montserrat");
    assert_eq!(s.library.extensions, vec!["mp3".to_string()]);
    assert!(!s.library.recursive);
    assert!(!s.library.include_hidden);
    assert!(!s.library.follow_links);
    assert_eq!(s.library.cover_names, vec!["art.png".to_string()]);
    assert_eq!(s.logging.level, "debug");
    assert_eq!(
        s.logging.file,
        Some(std::path::PathBuf::from("/tmp/tunebox.log"))
    );
    assert!(s.validate().is_ok());
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[controls]
scrub_seconds = 30
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("TUNEBOX_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("TUNEBOX__CONTROLS__SCRUB_SECONDS", "2");

    let s = Settings::load().unwrap();
    assert_eq!(s.controls.scrub_seconds, 2);
}

#[test]
fn validate_rejects_out_of_range_values() {
    let mut s = Settings::default();
    s.player.default_volume = 1.2;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.player.default_volume = 1.0;
    assert!(s.validate().is_ok());

    let mut s = Settings::default();
    s.controls.volume_step = 0.0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.shell.body.variable = "  ".to_string();
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.logging.level = "loud".to_string();
    assert!(s.validate().is_err());
}

#[test]
fn validate_rejects_silent_default_volume() {
    // Unmute restores this value.
    let mut s = Settings::default();
    s.player.default_volume = 0.0;
    let err = s.validate().unwrap_err();
    assert!(err.contains("player.default_volume"));
}
