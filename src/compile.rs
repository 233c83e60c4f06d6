//! Pattern compilation: one pass over the pattern text builds an immutable
//! chain of matcher nodes that can be evaluated any number of times.

use crate::error::{Error, Result};
use crate::matcher::Matcher;

/// What a consuming node matches: a specific character, or the `.` wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Atom {
    Any,
    Char(char),
}

impl Atom {
    fn from_pattern_char(c: char) -> Self {
        if c == '.' {
            Atom::Any
        } else {
            Atom::Char(c)
        }
    }

    pub(crate) fn matches(self, c: char) -> bool {
        match self {
            Atom::Any => true,
            Atom::Char(want) => want == c,
        }
    }
}

/// One compiled construct of a pattern.
///
/// Nodes link forward through `next` and every chain terminates in a single
/// `Accept`. A chain is never mutated after construction, so a compiled
/// matcher can be shared freely across threads.
#[derive(Debug)]
pub enum Node {
    /// Consumes exactly one input character matching `atom`, then delegates.
    Literal { atom: Atom, next: Box<Node> },
    /// Consumes zero or more characters matching `atom`, fewest first.
    Repeat { atom: Atom, next: Box<Node> },
    /// Asserts the current position is the end of input.
    End { next: Box<Node> },
    /// Terminal success.
    Accept,
}

impl Matcher {
    /// Compiles `pattern` into a reusable matcher.
    ///
    /// A leading `^` anchors the match to the start of the input; without it
    /// the match may begin at any offset. `*` repeats the character before it
    /// (or `.`), and a final `$` anchors to the end of the input. Any other
    /// character is a literal, including a `*` with nothing before it, so
    /// compilation only fails on an empty pattern.
    pub fn compile(pattern: &str) -> Result<Matcher> {
        if pattern.is_empty() {
            return Err(Error::EmptyPattern);
        }

        let (anchored, rest) = match pattern.strip_prefix('^') {
            Some(rest) => (true, rest),
            None => (false, pattern),
        };

        let chars: Vec<char> = rest.chars().collect();
        Ok(Matcher::new(build(&chars, 0), anchored))
    }
}

fn build(pat: &[char], i: usize) -> Node {
    if i == pat.len() {
        Node::Accept
    } else if i + 1 < pat.len() && pat[i + 1] == '*' {
        // the `*` is consumed together with its target
        Node::Repeat {
            atom: Atom::from_pattern_char(pat[i]),
            next: Box::new(build(pat, i + 2)),
        }
    } else if i == pat.len() - 1 && pat[i] == '$' {
        // `$` is an anchor only as the final character
        Node::End {
            next: Box::new(build(pat, i + 1)),
        }
    } else {
        Node::Literal {
            atom: Atom::from_pattern_char(pat[i]),
            next: Box::new(build(pat, i + 1)),
        }
    }
}
