//! Line tokenization
// (c) 2025 Ross Younger

use super::keys::ConfigKey;
use super::matching::HostPattern;

/// A parsed line we read from an ssh config file
#[derive(Debug, PartialEq)]
pub(super) enum Line {
    Empty,
    Host { patterns: Vec<HostPattern> },
    Directive { key: ConfigKey, args: Vec<String> },
}

///////////////////////////////////////////////////////////////////////////////////////

/// The whitespace set recognised by the dialect
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Splits one configuration line into words.
///
/// Words are delimited by runs of whitespace; a run may also absorb a single
/// `=` (so `Key = Value` and `Key Value` read the same). A word opening with
/// a double quote runs to the closing quote and may contain anything,
/// including whitespace and `=`. There is no escape mechanism: an
/// unterminated quote silently discards the fragment it opens, along with the
/// rest of the line.
pub(super) fn split_words(input: &str) -> Vec<String> {
    let input: Vec<char> = input.chars().collect();
    let mut output = Vec::<String>::new();
    let mut i = 0;
    while i < input.len() {
        if input[i] == '"' {
            // Quoted word: everything up to the closing quote, verbatim.
            let Some(len) = input[i + 1..].iter().position(|&c| c == '"') else {
                break; // unterminated; the fragment yields no word
            };
            output.push(input[i + 1..i + 1 + len].iter().collect());
            i += len + 2;
            // Only whitespace is skipped after a closing quote; '=' is not a
            // separator here.
            while i < input.len() && is_space(input[i]) {
                i += 1;
            }
        } else {
            // Unquoted word: runs to the next whitespace.
            let start = i;
            while i < input.len() && !is_space(input[i]) {
                i += 1;
            }
            output.push(input[start..i].iter().collect());
            // The separator run may contain at most one '='.
            while i < input.len() && is_space(input[i]) {
                i += 1;
            }
            if i < input.len() && input[i] == '=' {
                i += 1;
                while i < input.len() && is_space(input[i]) {
                    i += 1;
                }
            }
        }
    }
    // A line opening with whitespace or '=' yields a phantom empty first word.
    if output.first().is_some_and(String::is_empty) {
        let _ = output.remove(0);
    }
    output
}

///////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test {
    use super::split_words;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn word_splitting() {
        for (input, expected) in [
            ("", vec![]),
            ("Host foo bar", vec!["Host", "foo", "bar"]),
            ("   a    b   ", vec!["a", "b"]),
            ("Key = \"a b\" rest", vec!["Key", "a b", "rest"]),
            ("Key \"unterminated", vec!["Key"]),
            ("  = leading", vec!["leading"]),
            ("Foo=bar", vec!["Foo=bar"]),
            ("Key\t=\tvalue", vec!["Key", "value"]),
            ("a\tb\r", vec!["a", "b"]),
            // only one '=' is absorbed per separator run
            ("a == b", vec!["a", "=", "b"]),
            // quoted words may be empty, and a leading empty word is dropped
            ("\"\" foo", vec!["foo"]),
            ("k \"\" foo", vec!["k", "", "foo"]),
            // no whitespace needed after a closing quote
            ("k \"a = b\"x", vec!["k", "a = b", "x"]),
            // comments are not this layer's business
            (" a b # c d", vec!["a", "b", "#", "c", "d"]),
        ] {
            assert_eq!(split_words(input), words(&expected), "input {input:?}");
        }
    }

    #[test]
    fn unterminated_quote_loses_the_tail() {
        // everything after the orphan quote is discarded, not an error
        assert_eq!(split_words("Key \"a b c"), words(&["Key"]));
        assert_eq!(split_words("\"wholly unterminated"), Vec::<String>::new());
    }

    #[test]
    fn stable_over_plain_words() {
        let first = split_words("Host alpha beta *.example.com");
        assert_eq!(split_words(&first.join(" ")), first);
    }
}
