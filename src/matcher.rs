//! Matcher execution: runs a compiled node chain against input strings.
//!
//! Evaluation is a pure function of the chain, the input, and a position, so
//! a compiled [`Matcher`] can be reused across any number of inputs and
//! shared between threads.

use crate::compile::{Atom, Node};

/// A compiled pattern, ready to be run against any number of strings.
///
/// # Example
///
/// ```
/// use minre::Matcher;
///
/// let matcher = Matcher::compile("^ab*c$").unwrap();
/// assert!(matcher.is_match("ac"));
/// assert!(matcher.is_match("abbbc"));
/// assert!(!matcher.is_match("abx"));
/// ```
#[derive(Debug)]
pub struct Matcher {
    pub(crate) head: Node,
    pub(crate) anchored: bool,
}

/// Inclusive character offsets delimiting a matched substring.
///
/// Offsets are signed: a pattern that matches the empty string before the
/// first character (for example `^` on its own) reports `(-1, -1)`, and an
/// end anchor reports the end-of-input position itself. [`Span::slice`]
/// clamps both cases to the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: isize,
    pub end: isize,
}

impl Span {
    /// Extracts the matched text from the string that produced this span.
    pub fn slice<'a>(&self, input: &'a str) -> &'a str {
        let len = input.chars().count() as isize;
        let start = self.start.clamp(0, len);
        let end_excl = (self.end + 1).clamp(start, len);
        &input[byte_offset(input, start)..byte_offset(input, end_excl)]
    }
}

fn byte_offset(input: &str, char_off: isize) -> usize {
    input
        .char_indices()
        .nth(char_off as usize)
        .map_or(input.len(), |(b, _)| b)
}

impl Matcher {
    pub(crate) fn new(head: Node, anchored: bool) -> Self {
        Self { head, anchored }
    }

    pub fn is_match(&self, input: &str) -> bool {
        self.find(input).is_some()
    }

    /// Runs the compiled chain against `input`, returning the span of the
    /// matched substring, or `None` if the pattern matches nowhere.
    pub fn find(&self, input: &str) -> Option<Span> {
        let chars: Vec<char> = input.chars().collect();

        if self.anchored {
            let (hit, start, end) = self.head.eval(&chars, 0);
            return hit.then_some(Span { start, end });
        }

        // Unanchored search probes each start offset in ascending order.
        // This selects the same match as an implicit leading `.*` (which
        // tries consumption counts in the same ascending order) while
        // reporting where the match actually begins.
        for off in 0..=chars.len() {
            let (hit, _, end) = self.head.eval(&chars, off);
            if hit {
                return Some(Span {
                    start: off as isize,
                    end,
                });
            }
        }
        None
    }
}

impl Node {
    /// Evaluates this node at `pos`, returning `(matched, start, end)` with
    /// inclusive offsets. `Accept` reports one position behind the probe so
    /// that consuming nodes recover the true end boundary from their
    /// continuation; every node reports its own entry position as `start`.
    fn eval(&self, input: &[char], pos: usize) -> (bool, isize, isize) {
        match self {
            Node::Accept => (true, pos as isize - 1, pos as isize - 1),

            Node::Literal { atom, next } => {
                if pos < input.len() && atom.matches(input[pos]) {
                    let (hit, _, end) = next.eval(input, pos + 1);
                    if hit {
                        return (true, pos as isize, end);
                    }
                }
                (false, pos as isize, pos as isize)
            }

            Node::End { next } => {
                if pos == input.len() {
                    let (hit, _, end) = next.eval(input, pos + 1);
                    if hit {
                        return (true, pos as isize, end);
                    }
                }
                (false, pos as isize, pos as isize)
            }

            Node::Repeat { atom, next } => {
                // Farthest position the repetition could consume to: the
                // wildcard can always run to end of input, a plain char only
                // through its contiguous run.
                let max = match atom {
                    Atom::Any => input.len(),
                    Atom::Char(c) => {
                        let mut j = pos;
                        while j < input.len() && input[j] == *c {
                            j += 1;
                        }
                        j
                    }
                };
                // Fewest repetitions first; the first count that lets the
                // rest of the chain succeed wins, so `*` is non-greedy.
                for k in pos..=max {
                    let (hit, _, end) = next.eval(input, k);
                    if hit {
                        return (true, pos as isize, end);
                    }
                }
                (false, pos as isize, pos as isize)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(pattern: &str, input: &str) -> Option<Span> {
        Matcher::compile(pattern).unwrap().find(input)
    }

    fn matched(pattern: &str, input: &str) -> Option<String> {
        find(pattern, input).map(|span| span.slice(input).to_string())
    }

    #[test]
    fn test_unanchored_matches_anywhere() {
        assert_eq!(matched("abc", "xabcxx").as_deref(), Some("abc"));
        assert_eq!(matched("abc", "abc").as_deref(), Some("abc"));
        assert_eq!(matched("abc", "xxab"), None);
    }

    #[test]
    fn test_anchored_must_start_at_zero() {
        assert!(Matcher::compile("^abc").unwrap().is_match("abcxx"));
        assert!(!Matcher::compile("^abc").unwrap().is_match("xabcxx"));
    }

    #[test]
    fn test_wildcard_consumes_one_char() {
        assert_eq!(matched(".", ""), None);
        assert_eq!(matched(".", "x").as_deref(), Some("x"));
        assert_eq!(matched("a.c", "abc").as_deref(), Some("abc"));
        assert_eq!(matched("b.d", "abcde").as_deref(), Some("bcd"));
    }

    #[test]
    fn test_repetition_zero_or_more() {
        let m = Matcher::compile("^ab*c").unwrap();
        assert!(m.is_match("ac"));
        assert!(m.is_match("abc"));
        assert!(m.is_match("abbbbc"));
        assert!(!m.is_match("axc"));
    }

    #[test]
    fn test_repetition_is_minimal() {
        // both k=0 and k>0 would let the trailing `a` succeed; the engine
        // must pick the smallest split
        assert_eq!(find("^a*a", "aaa"), Some(Span { start: 0, end: 0 }));

        // here only the full run works
        assert_eq!(matched("^a*b", "aaab").as_deref(), Some("aaab"));
    }

    #[test]
    fn test_explicit_star_reports_entry_position() {
        // a user-written `.*` is part of the match, so its span starts at
        // the repetition's entry position even when it consumes nothing
        assert_eq!(matched("^.*c", "abc").as_deref(), Some("abc"));
        assert_eq!(find("^a*", ""), Some(Span { start: 0, end: -1 }));
    }

    #[test]
    fn test_end_anchor() {
        assert!(Matcher::compile("^abc$").unwrap().is_match("abc"));
        assert!(!Matcher::compile("^abc$").unwrap().is_match("abcd"));
        assert_eq!(matched("c$", "abc").as_deref(), Some("c"));
        assert_eq!(matched("c$", "abcd"), None);
    }

    #[test]
    fn test_empty_input_boundaries() {
        assert!(Matcher::compile("^$").unwrap().is_match(""));
        assert!(!Matcher::compile("^.").unwrap().is_match(""));
        assert_eq!(matched("^$", "").as_deref(), Some(""));
    }

    #[test]
    fn test_degenerate_anchor_patterns_match_empty() {
        // `^` alone accepts immediately and reports the (-1, -1) span
        assert_eq!(find("^", "abc"), Some(Span { start: -1, end: -1 }));
        assert_eq!(matched("^", "abc").as_deref(), Some(""));

        // `$` alone matches the empty substring at end of input
        assert_eq!(matched("$", "abc").as_deref(), Some(""));
    }

    #[test]
    fn test_trailing_dot_star() {
        assert_eq!(matched("^a.*$", "abc").as_deref(), Some("abc"));
        assert_eq!(matched("^a.*", "a").as_deref(), Some("a"));
    }

    #[test]
    fn test_multibyte_chars() {
        assert_eq!(matched("é.", "xéy").as_deref(), Some("éy"));
        assert!(Matcher::compile("^à*è$").unwrap().is_match("àààè"));
    }

    #[test]
    fn test_compile_once_match_many() {
        let inputs = ["abc", "xxabcd", "nope", "", "ab"];
        let compiled = Matcher::compile("ab*c").unwrap();
        for input in inputs {
            let fresh = Matcher::compile("ab*c").unwrap();
            assert_eq!(compiled.find(input), fresh.find(input), "input {:?}", input);
        }
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let m = Matcher::compile("^a*b.d$").unwrap();
        let first = m.find("aaabxd");
        let second = m.find("aaabxd");
        assert_eq!(first, second);
        assert!(first.is_some());
    }

    #[test]
    fn test_shared_across_threads() {
        let m = Matcher::compile("^ab*c$").unwrap();
        let expected = m.find("abbc");
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    assert_eq!(m.find("abbc"), expected);
                    assert!(!m.is_match("abx"));
                });
            }
        });
    }

    #[test]
    fn test_chained_repetitions() {
        let m = Matcher::compile("^a*b*c*$").unwrap();
        assert!(m.is_match(""));
        assert!(m.is_match("aabbcc"));
        assert!(m.is_match("c"));
        assert!(!m.is_match("cb"));
    }
}
