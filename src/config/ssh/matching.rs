//! Host pattern matching
// (c) 2025 Ross Younger

use glob::{MatchOptions, Pattern};
use tracing::debug;

/// Hostnames have no path structure, so every wildcard crosses every boundary.
const HOST_MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// One pattern from a `Host` line: a shell-style glob (`*`, `?`, `[...]`),
/// optionally negated with a leading `!`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HostPattern {
    negated: bool,
    pattern: String,
}

impl HostPattern {
    pub(super) fn parse(word: &str) -> Self {
        word.strip_prefix('!').map_or_else(
            || Self {
                negated: false,
                pattern: word.to_string(),
            },
            |rest| Self {
                negated: true,
                pattern: rest.to_string(),
            },
        )
    }

    fn matches(&self, host: &str) -> bool {
        match Pattern::new(&self.pattern) {
            Ok(glob) => glob.matches_with(host, HOST_MATCH_OPTIONS),
            Err(e) => {
                // A pattern that does not compile matches nothing;
                // resolution itself never fails.
                debug!("ignoring unparseable host pattern `{}`: {e}", self.pattern);
                false
            }
        }
    }
}

/// Applies a `Host` block's pattern list to a candidate host name.
///
/// Any matching negated pattern excludes the block outright, before its
/// positive patterns are consulted; otherwise the first matching positive
/// pattern (in written order) admits it.
pub(super) fn evaluate_host_match(host: &str, patterns: &[HostPattern]) -> bool {
    if patterns
        .iter()
        .filter(|p| p.negated)
        .any(|p| p.matches(host))
    {
        return false;
    }
    patterns
        .iter()
        .filter(|p| !p.negated)
        .any(|p| p.matches(host))
}

///////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test {
    use super::{evaluate_host_match, HostPattern};

    fn patterns(list: &[&str]) -> Vec<HostPattern> {
        list.iter().map(|p| HostPattern::parse(p)).collect()
    }

    #[test]
    fn host_matching() {
        for (host, args, result) in [
            ("foo", vec!["foo"], true),
            ("foo", vec![""], false),
            ("foo", vec!["bar"], false),
            ("foo", vec!["bar", "foo"], true),
            ("foo", vec!["f?o"], true),
            ("fooo", vec!["f?o"], false),
            ("foo", vec!["f*"], true),
            ("oof", vec!["*of"], true),
            ("192.168.1.42", vec!["192.168.?.42"], true),
            ("192.168.10.42", vec!["192.168.?.42"], false),
            // wildcards cross dots; hostnames are not paths
            ("qux.qix.bar", vec!["*.bar"], true),
        ] {
            assert_eq!(
                evaluate_host_match(host, &patterns(&args)),
                result,
                "host {host}, args {args:?}"
            );
        }
    }

    #[test]
    fn bracket_classes() {
        // character classes are part of the compatibility contract
        for (host, pattern, result) in [
            ("web1", "web[0-9]", true),
            ("webx", "web[0-9]", false),
            ("web1", "web[!0-9]", false),
            ("webx", "web[!0-9]", true),
            ("node-a", "node-[abc]", true),
            ("node-d", "node-[abc]", false),
        ] {
            assert_eq!(
                evaluate_host_match(host, &patterns(&[pattern])),
                result,
                "host {host}, pattern {pattern}"
            );
        }
    }

    #[test]
    fn negation_excludes_before_inclusion() {
        let list = patterns(&["!web1", "web*"]);
        assert!(!evaluate_host_match("web1", &list));
        assert!(evaluate_host_match("web2", &list));
        // order in the list does not matter: negations are always tested first
        let list = patterns(&["web*", "!web1"]);
        assert!(!evaluate_host_match("web1", &list));
        assert!(evaluate_host_match("web2", &list));
    }

    #[test]
    fn purely_negative_blocks_admit_nothing() {
        let list = patterns(&["!web1"]);
        assert!(!evaluate_host_match("web1", &list));
        assert!(!evaluate_host_match("web2", &list));
    }

    #[test]
    fn broken_pattern_matches_nothing() {
        let list = patterns(&["[", "web*"]);
        assert!(evaluate_host_match("web1", &list)); // the good pattern still applies
        assert!(!evaluate_host_match("[", &patterns(&["["])));
    }
}
