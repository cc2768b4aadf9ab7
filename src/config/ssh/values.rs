//! Resolved per-host values and typed preference lookup
// (c) 2025 Ross Younger

use std::{collections::BTreeMap, fmt::Display, str::FromStr};

use super::{ConfigError, ConfigKey};
use crate::terminal::TerminalKind;

/// The flattened view of a configuration file as it applies to one host.
///
/// Derived fresh on each [`resolve`](super::SshConfig::resolve) call; holds no
/// resources and is never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
    host: Option<String>,
    source: String,
    data: BTreeMap<ConfigKey, Vec<Vec<String>>>,
}

impl EffectiveConfig {
    pub(super) fn new(
        host: Option<&str>,
        source: &str,
        data: BTreeMap<ConfigKey, Vec<Vec<String>>>,
    ) -> Self {
        Self {
            host: host.map(std::borrow::ToOwned::to_owned),
            source: source.to_string(),
            data,
        }
    }

    /// The host this view was resolved for, if any
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// The file this view was resolved from
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// All occurrences of a directive, earliest first; each occurrence is the
    /// word list from one line.
    #[must_use]
    pub fn get(&self, key: &ConfigKey) -> Option<&[Vec<String>]> {
        self.data.get(key).map(Vec::as_slice)
    }

    /// The first value of the first occurrence of a directive
    #[must_use]
    pub fn first_value(&self, key: &ConfigKey) -> Option<&str> {
        self.data
            .get(key)?
            .first()?
            .first()
            .map(String::as_str)
    }
}

///////////////////////////////////////////////////////////////////////////////////////

/// A window size and optional placement, X11 style.
///
/// `80x24` is 80 columns by 24 rows; `80x24+10-5` additionally positions the
/// window. Offsets are signed and only valid as a pair. For example:
/// ```text
/// #rtty-Geometry 132x50
/// #rtty-Geometry 80x24+100+50
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Geometry {
    /// columns
    pub width: u32,
    /// rows
    pub height: u32,
    /// (x, y) placement, if given
    pub offset: Option<(i32, i32)>,
}

impl Display for Geometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)?;
        if let Some((x, y)) = self.offset {
            write!(f, "{x:+}{y:+}")?;
        }
        Ok(())
    }
}

impl FromStr for Geometry {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        fn number(s: &str) -> Option<u32> {
            if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            s.parse().ok()
        }
        let bad = || anyhow::anyhow!("invalid geometry `{s}`: expected WIDTHxHEIGHT or WIDTHxHEIGHT+X+Y");

        let (w, rest) = s.split_once('x').ok_or_else(bad)?;
        let width = number(w).ok_or_else(bad)?;
        let (h, offsets) = match rest.find(['+', '-']) {
            None => (rest, None),
            Some(i) => (&rest[..i], Some(&rest[i..])),
        };
        let height = number(h).ok_or_else(bad)?;
        let offset = match offsets {
            None => None,
            Some(text) => {
                // text begins with a sign; the Y offset starts at the next one
                let j = text[1..].find(['+', '-']).map(|j| j + 1).ok_or_else(bad)?;
                let x = text[..j].parse::<i32>().map_err(|_| bad())?;
                let y = text[j..].parse::<i32>().map_err(|_| bad())?;
                Some((x, y))
            }
        };
        Ok(Self {
            width,
            height,
            offset,
        })
    }
}

///////////////////////////////////////////////////////////////////////////////////////

/// Typed accessor for the rtty preferences of a resolved host.
///
/// This is the only place extension key names are interpreted; everything
/// else treats them opaquely.
#[derive(Debug, Clone, Copy)]
pub struct Preferences<'a> {
    config: &'a EffectiveConfig,
    terminal: TerminalKind,
}

impl<'a> Preferences<'a> {
    /// Binds a resolved configuration to the terminal kind in use.
    #[must_use]
    pub fn new(config: &'a EffectiveConfig, terminal: TerminalKind) -> Self {
        Self { config, terminal }
    }

    /// The configured window geometry, if any.
    ///
    /// Absence is normal (the caller may have a command-line fallback); a
    /// value that does not parse is a user-visible configuration error.
    pub fn geometry(&self) -> Result<Option<Geometry>, ConfigError> {
        let key = ConfigKey::Extension("Geometry".into());
        let Some(value) = self.config.first_value(&key) else {
            return Ok(None);
        };
        value
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::MalformedGeometry {
                key,
                value: value.to_string(),
                source: self.config.source().to_string(),
            })
    }

    /// The configured colour scheme for this terminal kind, if any.
    ///
    /// Both spellings are accepted; `ColourScheme` shadows `ColorScheme`.
    /// The generic terminal has no colour scheme directive.
    #[must_use]
    pub fn colour_scheme(&self) -> Option<&'a str> {
        let prefix = self.terminal.scheme_key_prefix()?;
        for spelling in ["ColourScheme", "ColorScheme"] {
            let key = ConfigKey::Extension(format!("{prefix}-{spelling}"));
            if let Some(value) = self.config.first_value(&key) {
                return Some(value);
            }
        }
        None
    }
}

///////////////////////////////////////////////////////////////////////////////////////
