//! `conf set` / `conf get` value coercion.
//!
//! Most keys go straight to the [`PropertyStore`]. Two cases are special:
//! the `icon` key manipulates the icon file instead of a property, and the
//! value `default` restores a key's template value.

use crate::defaults::default_value;
use crate::error::Result;
use crate::fetch::Fetch;
use crate::icon::{icon_dimensions, resize_icon, IconOutcome};
use crate::layout::ServerDir;
use crate::properties::{normalize_key, PropertyStore, SetOutcome};

/// Pseudo-key addressing the server icon.
pub const ICON_KEY: &str = "icon";

/// Value that restores the template default.
pub const DEFAULT_TOKEN: &str = "default";

/// What a `conf set` changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfChange {
    /// A property was written.
    Property(SetOutcome),
    /// The icon was written or removed.
    Icon(IconOutcome),
}

/// Apply value coercion for an already-normalized key.
///
/// `default` (any case) becomes the template value when `key` has one.
/// Everything else passes through unchanged.
pub fn coerce_value(key: &str, value: &str) -> String {
    if value.eq_ignore_ascii_case(DEFAULT_TOKEN) {
        if let Some(template) = default_value(key) {
            return template.to_string();
        }
    }
    value.to_string()
}

/// `conf set <key> <value>`.
pub fn set<F: Fetch + ?Sized>(
    fetcher: &F,
    dir: &ServerDir,
    icon_size: u32,
    key: &str,
    value: &str,
) -> Result<ConfChange> {
    let key = normalize_key(key);
    if key == ICON_KEY {
        let outcome = resize_icon(fetcher, value, &dir.icon(), icon_size, icon_size)?;
        return Ok(ConfChange::Icon(outcome));
    }

    let value = coerce_value(&key, value);
    let outcome = PropertyStore::open(dir).set(&key, &value)?;
    Ok(ConfChange::Property(outcome))
}

/// `conf get <key>`.
///
/// For `icon` this describes the icon file rather than reading a property.
pub fn get(dir: &ServerDir, key: &str) -> Result<String> {
    if normalize_key(key) == ICON_KEY {
        let path = dir.icon();
        let (width, height) = icon_dimensions(&path)?;
        return Ok(format!("{} ({width}x{height})", path.display()));
    }
    PropertyStore::open(dir).get(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CraftError;

    struct NoNetwork;

    impl Fetch for NoNetwork {
        fn fetch(&self, url: &str) -> Result<Vec<u8>> {
            Err(CraftError::download(url, "network disabled"))
        }
    }

    fn reset_dir() -> (tempfile::TempDir, ServerDir) {
        let tmp = tempfile::tempdir().unwrap();
        let dir = ServerDir::new(tmp.path());
        PropertyStore::open(&dir).reset().unwrap();
        (tmp, dir)
    }

    #[test]
    fn test_coerce_default_known_key() {
        assert_eq!(coerce_value("server-port", "DEFAULT"), "25565");
        assert_eq!(coerce_value("motd", "default"), "A Minecraft Server");
    }

    #[test]
    fn test_coerce_default_unknown_key_is_literal() {
        assert_eq!(coerce_value("my-plugin-mode", "default"), "default");
        assert_eq!(coerce_value("server-port", "25566"), "25566");
    }

    #[test]
    fn test_set_default_restores_template() {
        let (_tmp, dir) = reset_dir();
        set(&NoNetwork, &dir, 64, "max players", "50").unwrap();
        assert_eq!(get(&dir, "max-players").unwrap(), "50");

        set(&NoNetwork, &dir, 64, "max_players", "default").unwrap();
        assert_eq!(get(&dir, "max-players").unwrap(), "20");
    }

    #[test]
    fn test_icon_key_does_not_touch_properties() {
        let (_tmp, dir) = reset_dir();
        let before = std::fs::read_to_string(dir.properties()).unwrap();

        let change = set(&NoNetwork, &dir, 64, "Icon", "none").unwrap();
        assert_eq!(change, ConfChange::Icon(IconOutcome::NothingToRemove));
        assert_eq!(std::fs::read_to_string(dir.properties()).unwrap(), before);
    }

    #[test]
    fn test_get_icon_missing() {
        let (_tmp, dir) = reset_dir();
        assert!(matches!(
            get(&dir, "icon"),
            Err(CraftError::PropertyNotFound(_))
        ));
    }
}
