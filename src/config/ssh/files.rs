//! File parsing and host-scoped resolution
// (c) 2025 Ross Younger

use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Read},
    path::Path,
};

use anyhow::{Context, Result};
use tracing::debug;

use super::matching::evaluate_host_match;
use super::{split_words, ConfigError, ConfigKey, EffectiveConfig, HostPattern, Line};

/// A run of directives scoped by one `Host` line, or the implicit default
/// block at the top of the file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(super) struct RuleBlock {
    /// 0 is the implicit default block; 1..N follow the `Host` lines in file order
    index: usize,
    /// Empty for the default block
    patterns: Vec<HostPattern>,
    /// Directive occurrences, earliest first
    settings: BTreeMap<ConfigKey, Vec<Vec<String>>>,
}

impl RuleBlock {
    fn new(index: usize, patterns: Vec<HostPattern>) -> Self {
        Self {
            index,
            patterns,
            settings: BTreeMap::default(),
        }
    }

    fn append(&mut self, key: ConfigKey, args: Vec<String>) {
        self.settings.entry(key).or_default().push(args);
    }
}

///////////////////////////////////////////////////////////////////////////////////////

/// The parsed contents of one ssh-style configuration file.
///
/// Built once at startup and immutable afterwards; per-host views are derived
/// on demand with [`SshConfig::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshConfig {
    source: String,
    /// Never empty; element 0 is the default block
    blocks: Vec<RuleBlock>,
}

impl SshConfig {
    /// Reads and parses a configuration file.
    ///
    /// A file that does not exist is not an error; it yields a store holding
    /// only an empty default block. Any other read failure is fatal.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::empty(path)),
            Err(e) => {
                return Err(e).with_context(|| format!("reading configuration file {path:?}"))
            }
        };
        Parser::for_reader(BufReader::new(file), path.to_string_lossy().to_string()).parse()
    }

    /// A store with no directives at all, as if the file were absent.
    #[must_use]
    pub fn empty(path: &Path) -> Self {
        Self {
            source: path.to_string_lossy().to_string(),
            blocks: vec![RuleBlock::default()],
        }
    }

    /// Flattens the configuration as it applies to `host`.
    ///
    /// With no host in mind, only the default block applies. Otherwise every
    /// `Host` block whose patterns admit the host contributes, in file order,
    /// each overriding the accumulated view key by key; a key the block does
    /// not set is left alone. The default block is always the base layer.
    /// Resolution never fails.
    #[must_use]
    pub fn resolve(&self, host: Option<&str>) -> EffectiveConfig {
        let mut data = self
            .blocks
            .first()
            .map(|b| b.settings.clone())
            .unwrap_or_default();
        if let Some(host) = host {
            for block in self.blocks.iter().skip(1) {
                if evaluate_host_match(host, &block.patterns) {
                    debug!("host {host} matches block {}", block.index);
                    for (key, occurrences) in &block.settings {
                        let _ = data.insert(key.clone(), occurrences.clone());
                    }
                }
            }
        }
        EffectiveConfig::new(host, &self.source, data)
    }
}

///////////////////////////////////////////////////////////////////////////////////////

/// The business end of reading a config file.
///
/// # Note
/// You can only use this struct once. If for some reason you want to re-parse
/// a file, you must create a fresh `Parser` to do so.
pub(super) struct Parser<R>
where
    R: Read,
{
    line_number: usize,
    reader: BufReader<R>,
    source: String,
}

#[cfg(test)]
impl<'a> Parser<&'a [u8]> {
    pub(super) fn for_str(s: &'a str) -> Self {
        Self::for_reader(BufReader::new(s.as_bytes()), "<string>".into())
    }
}

impl<R: Read> Parser<R> {
    fn for_reader(reader: BufReader<R>, source: String) -> Self {
        Self {
            line_number: 0,
            reader,
            source,
        }
    }

    fn parse_line(&self, line: &str) -> Result<Line> {
        let mut words = split_words(line);
        if words.is_empty() {
            return Ok(Line::Empty);
        }
        let keyword = words.remove(0);
        let key = if keyword.starts_with('#') {
            // Extension directives hide behind the comment marker; any other
            // '#' word opens a plain comment.
            match ConfigKey::extension(&keyword) {
                Ok(key) => key,
                Err(_) => return Ok(Line::Empty),
            }
        } else {
            ConfigKey::standard(&keyword)
        };
        if words.is_empty() {
            return Err(ConfigError::MalformedLine {
                source: self.source.clone(),
                line_number: self.line_number,
                line: line.to_string(),
            }
            .into());
        }
        if matches!(&key, ConfigKey::Standard(name) if name == "Host") {
            let patterns = words.iter().map(|w| HostPattern::parse(w)).collect();
            return Ok(Line::Host { patterns });
        }
        Ok(Line::Directive { key, args: words })
    }

    /// Reads the source to completion. Consumes the `Parser`.
    pub(super) fn parse(mut self) -> Result<SshConfig> {
        let mut blocks = vec![RuleBlock::default()];
        loop {
            self.line_number += 1;
            let mut line = String::new();
            if 0 == self
                .reader
                .read_line(&mut line)
                .with_context(|| format!("reading {}", self.source))?
            {
                break; // EOF
            }
            if line.ends_with('\n') {
                let _ = line.pop();
            }
            match self.parse_line(&line)? {
                Line::Empty => (),
                Line::Host { patterns } => {
                    let index = blocks.len();
                    blocks.push(RuleBlock::new(index, patterns));
                }
                Line::Directive { key, args } => {
                    if let Some(block) = blocks.last_mut() {
                        block.append(key, args);
                    }
                }
            }
        }
        Ok(SshConfig {
            source: self.source,
            blocks,
        })
    }
}

///////////////////////////////////////////////////////////////////////////////////////
