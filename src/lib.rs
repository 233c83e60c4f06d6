//! Minimal regex matching with a compile-once/match-many split.
//!
//! Patterns are a restricted mini-syntax: literal characters, the `.`
//! wildcard, `*` repetition of the preceding character, a leading `^` start
//! anchor and a trailing `$` end anchor. Compiling a pattern builds an
//! immutable chain of matcher nodes which is then reused, unmodified, for
//! every string tested, so the parsing cost is paid once per pattern.
//!
//! # Example
//!
//! ```
//! use minre::Matcher;
//!
//! let matcher = Matcher::compile("b.d").unwrap();
//! assert!(matcher.is_match("abcde"));
//!
//! let span = matcher.find("abcde").unwrap();
//! assert_eq!(span.slice("abcde"), "bcd");
//! ```

pub mod cli;
pub mod compile;
pub mod error;
pub mod matcher;
pub mod output;

pub use compile::{Atom, Node};
pub use error::{Error, Result};
pub use matcher::{Matcher, Span};
