//! Data directory resolution and `~` expansion.
//!
//! The data directory holds the item file and the trace output. It is resolved
//! from the environment in this order:
//!
//! 1. `$KEYLIST_DATA_DIR`
//! 2. `$XDG_DATA_HOME/keylist`
//! 3. `$HOME/.local/share/keylist`
//! 4. `./.keylist` when none of the above is set

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "keylist";

/// File name of the persisted checklist inside the data directory.
pub const ITEMS_FILE: &str = "items.json";

/// Returns the data directory for keylist storage.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    resolve_data_dir(|name| env::var(name).ok())
}

/// Default location of the item file: `<data dir>/items.json`.
#[must_use]
pub fn default_data_file() -> PathBuf {
    get_data_dir().join(ITEMS_FILE)
}

/// Expands a leading `~` to `$HOME`.
///
/// Paths without a leading `~`, or any path when `$HOME` is unset, are
/// returned unchanged.
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    expand_with_home(path, env::var("HOME").ok().as_deref())
}

fn resolve_data_dir(var: impl Fn(&str) -> Option<String>) -> PathBuf {
    let set = |name: &str| var(name).filter(|v| !v.is_empty());

    if let Some(dir) = set("KEYLIST_DATA_DIR") {
        return PathBuf::from(expand_with_home(&dir, set("HOME").as_deref()));
    }
    if let Some(xdg) = set("XDG_DATA_HOME") {
        return PathBuf::from(xdg).join(APP_DIR);
    }
    match set("HOME") {
        Some(home) => PathBuf::from(home).join(".local/share").join(APP_DIR),
        None => PathBuf::from(".keylist"),
    }
}

fn expand_with_home(path: &str, home: Option<&str>) -> String {
    let Some(home) = home else {
        return path.to_string();
    };

    if path == "~" {
        home.to_string()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("{}/{rest}", home.trim_end_matches('/'))
    } else {
        path.to_string()
    }
}
