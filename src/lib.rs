//! # Lockstep
//!
//! Pure-Rust regex engine built on a Pike-style virtual machine: compiled
//! patterns run as Thompson-construction NFA bytecode, simulated in lock
//! step across all active threads. Matching is linear in the input for
//! every pattern -- there is no backtracking and no pathological blowup.
//! Patterns that reduce to plain text skip the VM entirely and search with
//! [`memchr`](https://crates.io/crates/memchr)'s SIMD-accelerated substring
//! finder.
//!
//! ## Quick Start
//!
//! ```rust
//! use lockstep::prelude::*;
//!
//! let re = Pattern::new(r"[0-9]+-[0-9]+").unwrap();
//! let m = re.find("pages 12-34, 56-78").unwrap();
//! assert_eq!(m.as_str(), "12-34");
//! assert_eq!(m.start(), 6);
//! ```
//!
//! Capture groups and lookaround:
//!
//! ```rust
//! use lockstep::prelude::*;
//!
//! let re = Pattern::new(r"(\w+)@(\w+)").unwrap();
//! let caps = re.captures("mail: user@host").unwrap();
//! assert_eq!(caps.get(1).unwrap().as_str(), "user");
//! assert_eq!(caps.get(2).unwrap().as_str(), "host");
//!
//! let re = Pattern::new(r"(?<=\$)[0-9]+").unwrap();
//! assert_eq!(re.find("price: $25").unwrap().as_str(), "25");
//! ```
//!
//! ## Supported syntax
//!
//! Literals, `.`, escapes, `\d \D \s \S \w \W`, `[...]` classes with ranges
//! and negation, `? * +` with optional `?` for lazy repetition, `(...)`,
//! `(?:...)`, lookaround `(?=...) (?!...) (?<=...) (?<!...)`, alternation
//! `|`, anchors `^ $ \b \B`. Named groups, backreferences, and counted
//! repetition `{m,n}` are rejected at compile time.
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`api`] | `Pattern`, `Match`, `Captures`, iterators |
//! | [`error`] | Compilation error type |
//! | [`classes`] | Character-class predicates |
//! | `compile` | Scanner, expression tree, two-pass assembler |
//! | `program` | Instruction set, compiled programs, reversal |
//! | `vm` | The Pike VM executor |
//! | `literal` | Plain-string fast path |

pub mod api;
pub mod classes;
pub mod error;
pub mod prelude;

mod compile;
mod literal;
mod program;
mod vm;
