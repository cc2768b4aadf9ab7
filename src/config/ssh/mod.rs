//! Config file parsing, openssh-style
// (c) 2025 Ross Younger

mod errors;
pub use errors::ConfigError;

mod keys;
pub use keys::{ConfigKey, EXTENSION_MARKER};

mod lines;
use lines::{split_words, Line};

mod files;
pub use files::SshConfig;

mod matching;
use matching::HostPattern;

mod values;
pub use values::{EffectiveConfig, Geometry, Preferences};
