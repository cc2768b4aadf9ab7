//! Error types for configuration parsing and lookup
// (c) 2025 Ross Younger

use super::ConfigKey;

/// Everything that can go wrong while reading or consulting a configuration file.
///
/// Parse failures are fatal at load time; a bad geometry value is only fatal
/// when that preference is actually consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A non-comment line with a keyword but nothing following it
    MalformedLine {
        /// the file (or pseudo-file) the line came from
        source: String,
        /// 1-based
        line_number: usize,
        /// the offending line, verbatim
        line: String,
    },
    /// A geometry value that is not `WIDTHxHEIGHT` or `WIDTHxHEIGHT+X+Y`
    MalformedGeometry {
        /// the key that was being read
        key: ConfigKey,
        /// the value that failed to parse
        value: String,
        /// the file the value came from
        source: String,
    },
    /// A keyword without the extension marker was offered to [`ConfigKey::extension`]
    NotAnExtensionKey(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedLine {
                source,
                line_number,
                line,
            } => {
                write!(f, "{source} line {line_number}: missing argument: {line}")
            }
            Self::MalformedGeometry { key, value, source } => write!(
                f,
                "bad geometry `{value}` for `{key}` in {source} (expected WIDTHxHEIGHT or WIDTHxHEIGHT+X+Y)"
            ),
            Self::NotAnExtensionKey(name) => {
                write!(f, "`{name}` is not an rtty extension keyword")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

///////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test {
    use super::super::ConfigKey;
    use super::ConfigError;
    use assertables::assert_contains;

    #[test]
    fn malformed_line_names_the_place() {
        let e = ConfigError::MalformedLine {
            source: "/home/u/.ssh/config".into(),
            line_number: 42,
            line: "Foo".into(),
        };
        let msg = e.to_string();
        assert_contains!(msg, "line 42");
        assert_contains!(msg, "Foo");
        assert_contains!(msg, "/home/u/.ssh/config");
    }

    #[test]
    fn malformed_geometry_names_key_and_file() {
        let e = ConfigError::MalformedGeometry {
            key: ConfigKey::Extension("Geometry".into()),
            value: "bogus".into(),
            source: "test.conf".into(),
        };
        let msg = e.to_string();
        assert_contains!(msg, "#rtty-Geometry");
        assert_contains!(msg, "bogus");
        assert_contains!(msg, "test.conf");
    }
}
