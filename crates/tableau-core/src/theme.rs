//! Theme Flag
//!
//! Persisted as a JSON boolean under `darkMode`. Older pages wrote `1`/`0`;
//! those still read correctly and are replaced on the next save.

use serde_json::Value;
use tracing::warn;

use crate::error::Result;
use crate::medium::StorageMedium;
use crate::store::{keys, Store};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class set on the app's root element
    pub fn body_class(&self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }
}

impl From<bool> for Theme {
    fn from(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

pub fn load_theme<M: StorageMedium>(store: &Store<M>) -> Result<Theme> {
    let dark = match store.get(keys::DARK_MODE, Value::Bool(false))? {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_i64() == Some(1),
        Value::String(s) => matches!(s.as_str(), "1" | "true"),
        other => {
            warn!(value = %other, "unrecognized theme flag, using light");
            false
        }
    };
    Ok(Theme::from(dark))
}

pub fn save_theme<M: StorageMedium>(store: &Store<M>, theme: Theme) -> Result<()> {
    store.set(keys::DARK_MODE, &theme.is_dark())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::medium::MemoryMedium;

    #[test]
    fn test_default_is_light() {
        let store = Store::new(MemoryMedium::new());
        assert_eq!(load_theme(&store).unwrap(), Theme::Light);
    }

    #[test]
    fn test_legacy_flags_read() {
        let store = Store::new(MemoryMedium::new());
        store.set_raw(keys::DARK_MODE, "1").unwrap();
        assert_eq!(load_theme(&store).unwrap(), Theme::Dark);
        store.set_raw(keys::DARK_MODE, "0").unwrap();
        assert_eq!(load_theme(&store).unwrap(), Theme::Light);
        store.set_raw(keys::DARK_MODE, "\"true\"").unwrap();
        assert_eq!(load_theme(&store).unwrap(), Theme::Dark);
    }

    #[test]
    fn test_save_after_legacy_writes_canonical_bool() {
        let store = Store::new(MemoryMedium::new());
        store.set_raw(keys::DARK_MODE, "1").unwrap();

        let next = load_theme(&store).unwrap().toggled();
        save_theme(&store, next).unwrap();
        assert_eq!(next, Theme::Light);
        assert_eq!(store.get_raw(keys::DARK_MODE).unwrap().as_deref(), Some("false"));

        save_theme(&store, next.toggled()).unwrap();
        assert_eq!(store.get_raw(keys::DARK_MODE).unwrap().as_deref(), Some("true"));
        assert_eq!(load_theme(&store).unwrap(), Theme::Dark);
    }
}
