//! Directive keywords
// (c) 2025 Ross Younger

use std::fmt::Display;

use super::ConfigError;

/// The prefix marking an rtty extension directive.
///
/// Extension directives hide behind a comment marker so that ssh itself skips
/// them, e.g. `#rtty-Geometry 80x24+100+50`.
pub const EXTENSION_MARKER: &str = "#rtty-";

/// A configuration directive keyword.
///
/// Keywords compare literally (case matters). An extension keyword's identity
/// is its name with the marker stripped; [`Display`] re-attaches the marker,
/// yielding the canonical source form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigKey {
    /// An ordinary directive, as ssh itself would read it (`Host`, `User`, ...)
    Standard(String),
    /// An rtty extension directive, stored without its marker
    Extension(String),
}

impl ConfigKey {
    /// An ordinary directive keyword.
    #[must_use]
    pub fn standard(name: &str) -> Self {
        Self::Standard(name.to_string())
    }

    /// An extension directive keyword, from its marked source form.
    ///
    /// Fails with [`ConfigError::NotAnExtensionKey`] unless `name` is the
    /// marker followed by at least one character.
    pub fn extension(name: &str) -> Result<Self, ConfigError> {
        match name.strip_prefix(EXTENSION_MARKER) {
            Some(stripped) if !stripped.is_empty() => Ok(Self::Extension(stripped.to_string())),
            _ => Err(ConfigError::NotAnExtensionKey(name.to_string())),
        }
    }
}

impl Display for ConfigKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard(name) => f.write_str(name),
            Self::Extension(name) => write!(f, "{EXTENSION_MARKER}{name}"),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test {
    use super::{ConfigKey, EXTENSION_MARKER};

    #[test]
    fn extension_keys_strip_the_marker() {
        let key = ConfigKey::extension("#rtty-Geometry").unwrap();
        assert_eq!(key, ConfigKey::Extension("Geometry".into()));
        assert_eq!(key.to_string(), "#rtty-Geometry");
    }

    #[test]
    fn marker_alone_is_not_a_key() {
        let _ = ConfigKey::extension(EXTENSION_MARKER).unwrap_err();
        let _ = ConfigKey::extension("#").unwrap_err();
        let _ = ConfigKey::extension("#somethingelse").unwrap_err();
        let _ = ConfigKey::extension("Geometry").unwrap_err();
    }

    #[test]
    fn flavours_do_not_collide() {
        // `User` in the file is not the same key as `#rtty-User` would be
        assert_ne!(
            ConfigKey::standard("User"),
            ConfigKey::Extension("User".into())
        );
        // literal comparison: case matters
        assert_ne!(ConfigKey::standard("host"), ConfigKey::standard("Host"));
    }
}
