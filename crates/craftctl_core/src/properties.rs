//! The `server.properties` store.
//!
//! A flat `key=value` file. Reads keep keys exactly as stored; writes emit
//! every entry in ascending key order and drop comments and blank lines.
//! Keys passed to [`PropertyStore::set`] and [`PropertyStore::get`] are
//! normalized first (see [`normalize_key`]).
//!
//! There is no locking. A `set` is a full read-modify-write of the file and
//! assumes no other process edits it at the same time.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::defaults::{DEFAULT_PROPERTIES, EULA_ACCEPTED};
use crate::error::{CraftError, Result};
use crate::layout::ServerDir;

/// Parsed properties, ordered by key.
pub type Properties = BTreeMap<String, String>;

/// Normalize a property key: lowercase, spaces and underscores become hyphens.
///
/// Idempotent: `normalize_key(&normalize_key(k)) == normalize_key(k)`.
pub fn normalize_key(key: &str) -> String {
    key.to_lowercase().replace([' ', '_'], "-")
}

/// Check that a normalized key survives a write and re-read unchanged.
///
/// # Errors
///
/// [`CraftError::Argument`] if the key is empty, contains `=` or a line
/// break, or would be read back as a comment.
pub fn validate_key(key: &str) -> Result<()> {
    let problem = if key.is_empty() {
        "is empty"
    } else if key.contains('=') {
        "contains '='"
    } else if key.contains(['\n', '\r']) {
        "contains a line break"
    } else if key.trim_start().starts_with('#') {
        "starts with '#'"
    } else {
        return Ok(());
    };
    Err(CraftError::Argument(format!("property key {key:?} {problem}")))
}

/// Escape raw newlines so a value always fits on one line.
pub fn escape_value(value: &str) -> String {
    value.replace('\n', "\\n")
}

/// Parse properties text.
///
/// Lines whose trimmed form starts with `#` are comments. Every other line is
/// split at its first `=`; lines without one are skipped. Keys and values are
/// kept verbatim.
pub fn parse(text: &str) -> Properties {
    text.lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Render properties as file text, one `key=value\n` line per entry.
pub fn render(properties: &Properties) -> String {
    let mut out = String::new();
    for (key, value) in properties {
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }
    out
}

/// Whether a `set` created a key or replaced one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// The key was not in the file before.
    Added,
    /// An existing value was overwritten.
    Updated,
}

/// Read/write access to one properties file and its EULA flag file.
#[derive(Debug, Clone)]
pub struct PropertyStore {
    path: PathBuf,
    eula_path: PathBuf,
}

impl PropertyStore {
    /// Store backed by explicit file paths.
    pub fn new(path: impl Into<PathBuf>, eula_path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            eula_path: eula_path.into(),
        }
    }

    /// Store for the standard files of a server directory.
    pub fn open(dir: &ServerDir) -> Self {
        Self::new(dir.properties(), dir.eula())
    }

    /// Path of the properties file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the EULA flag file.
    pub fn eula_path(&self) -> &Path {
        &self.eula_path
    }

    /// Load the whole file.
    ///
    /// # Errors
    ///
    /// [`CraftError::ConfigNotFound`] if the file does not exist.
    pub fn load(&self) -> Result<Properties> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(parse(&text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(CraftError::ConfigNotFound {
                path: self.path.clone(),
            }),
            Err(e) => Err(CraftError::io(&self.path, e)),
        }
    }

    /// Overwrite the file with `properties` in key order.
    pub fn save(&self, properties: &Properties) -> Result<()> {
        fs::write(&self.path, render(properties)).map_err(|e| CraftError::io(&self.path, e))
    }

    /// Set one property and rewrite the file.
    ///
    /// Unknown keys are added with a warning. Comments in the existing file
    /// are lost.
    pub fn set(&self, key: &str, value: &str) -> Result<SetOutcome> {
        let key = normalize_key(key);
        validate_key(&key)?;
        let value = escape_value(value);

        let mut properties = self.load()?;
        let outcome = if properties.contains_key(&key) {
            SetOutcome::Updated
        } else {
            tracing::warn!("{key} is not in {}, adding new property", self.path.display());
            SetOutcome::Added
        };

        tracing::debug!("{key}={value}");
        properties.insert(key, value);
        self.save(&properties)?;
        Ok(outcome)
    }

    /// Get one property.
    ///
    /// # Errors
    ///
    /// [`CraftError::PropertyNotFound`] if the key is absent or its value is
    /// empty. An empty value is indistinguishable from a missing key here.
    pub fn get(&self, key: &str) -> Result<String> {
        let key = normalize_key(key);
        let mut properties = self.load()?;
        match properties.remove(&key) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(CraftError::PropertyNotFound(key)),
        }
    }

    /// Every entry, sorted by key.
    pub fn list(&self) -> Result<Vec<(String, String)>> {
        Ok(self.load()?.into_iter().collect())
    }

    /// Entries whose lowercased key or raw value contains `needle`, sorted by key.
    pub fn search(&self, needle: &str) -> Result<Vec<(String, String)>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|(key, value)| key.to_lowercase().contains(needle) || value.contains(needle))
            .collect())
    }

    /// Overwrite the properties file with the default template and accept the EULA.
    pub fn reset(&self) -> Result<()> {
        let defaults: Properties = DEFAULT_PROPERTIES
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        self.save(&defaults)?;
        fs::write(&self.eula_path, EULA_ACCEPTED).map_err(|e| CraftError::io(&self.eula_path, e))?;
        tracing::info!("Reset {} to defaults", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &Path) -> PropertyStore {
        PropertyStore::new(dir.join("server.properties"), dir.join("eula.txt"))
    }

    #[test]
    fn test_normalize_key_variants() {
        assert_eq!(normalize_key("Level Name"), "level-name");
        assert_eq!(normalize_key("level_name"), "level-name");
        assert_eq!(normalize_key("level-name"), "level-name");
        assert_eq!(normalize_key("MAX_PLAYERS"), "max-players");
    }

    #[test]
    fn test_escape_value() {
        assert_eq!(escape_value("line one\nline two"), "line one\\nline two");
        assert_eq!(escape_value("already\\nescaped"), "already\\nescaped");
    }

    #[test]
    fn test_parse_skips_comments_and_bare_lines() {
        let text = "#Minecraft server properties\n  # indented comment\nmotd=Hi\nnot a pair\n\npvp=true\n";
        let props = parse(text);
        assert_eq!(props.len(), 2);
        assert_eq!(props["motd"], "Hi");
        assert_eq!(props["pvp"], "true");
    }

    #[test]
    fn test_parse_splits_at_first_equals() {
        let props = parse("generator-settings=a=b=c\n");
        assert_eq!(props["generator-settings"], "a=b=c");
    }

    #[test]
    fn test_parse_keeps_keys_verbatim() {
        let props = parse("Level_Name=world\n");
        assert!(props.contains_key("Level_Name"));
        assert!(!props.contains_key("level-name"));
    }

    #[test]
    fn test_render_sorted_lines() {
        let mut props = Properties::new();
        props.insert("pvp".into(), "true".into());
        props.insert("difficulty".into(), "1".into());
        assert_eq!(render(&props), "difficulty=1\npvp=true\n");
    }

    #[test]
    fn test_load_missing_file_is_config_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        assert!(matches!(
            store.load(),
            Err(CraftError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn test_set_reports_added_and_updated() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        store.save(&Properties::new()).unwrap();

        assert_eq!(store.set("motd", "one").unwrap(), SetOutcome::Added);
        assert_eq!(store.set("MOTD", "two").unwrap(), SetOutcome::Updated);
        assert_eq!(store.get("motd").unwrap(), "two");
    }

    #[test]
    fn test_set_on_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        assert!(matches!(
            store.set("pvp", "false"),
            Err(CraftError::ConfigNotFound { .. })
        ));
        assert!(!store.path().exists());
    }

    fn assert_rejected(store: &PropertyStore, key: &str) {
        match store.set(key, "v") {
            Err(CraftError::Argument(_)) => {}
            other => panic!("expected Argument error for {key:?}, got {other:?}"),
        }
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "pvp=true\n");
    }

    #[test]
    fn test_set_rejects_key_with_equals() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        fs::write(store.path(), "pvp=true\n").unwrap();
        assert_rejected(&store, "a=b");
    }

    #[test]
    fn test_set_rejects_key_with_line_break() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        fs::write(store.path(), "pvp=true\n").unwrap();
        assert_rejected(&store, "motd\npvp");
        assert_rejected(&store, "motd\r");
        assert_eq!(store.get("pvp").unwrap(), "true");
    }

    #[test]
    fn test_set_rejects_comment_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        fs::write(store.path(), "pvp=true\n").unwrap();
        assert_rejected(&store, "#motd");
        assert_rejected(&store, "\t#motd");
    }

    #[test]
    fn test_set_rejects_empty_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        fs::write(store.path(), "pvp=true\n").unwrap();
        assert_rejected(&store, "");
    }

    #[test]
    fn test_get_empty_value_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        fs::write(store.path(), "level-seed=\n").unwrap();

        match store.get("level-seed") {
            Err(CraftError::PropertyNotFound(key)) => assert_eq!(key, "level-seed"),
            other => panic!("expected PropertyNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_search_matches_keys_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        fs::write(store.path(), "Server-Port=25565\nmotd=Port Town\n").unwrap();

        let hits = store.search("port").unwrap();
        assert_eq!(hits, vec![("Server-Port".to_string(), "25565".to_string())]);

        // Values are matched case-sensitively
        let hits = store.search("Port").unwrap();
        assert_eq!(hits, vec![("motd".to_string(), "Port Town".to_string())]);
    }
}
