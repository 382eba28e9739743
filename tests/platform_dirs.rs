//! Runs in its own test binary because it edits the process environment.

use huelio_console::infrastructure::{get_config_dir, get_data_dir};
use huelio_console::Config;

#[cfg(unix)]
#[test]
fn directories_resolve_without_home_or_xdg_variables() {
    for name in ["HOME", "XDG_DATA_HOME", "XDG_CONFIG_HOME", "HUELIO_CONFIG"] {
        std::env::remove_var(name);
    }

    let data_dir = get_data_dir().expect("data dir from the user database");
    assert!(data_dir.ends_with("huelio"));
    assert!(get_config_dir().is_some_and(|dir| dir.ends_with("huelio")));

    let config = Config::load().unwrap_or_default();
    assert_eq!(config.state_path(), Some(data_dir.join("state.json")));
}
