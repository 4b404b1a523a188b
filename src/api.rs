// api.rs - Public API: Pattern, Match, Captures, FindIter.
//
// A compiled Pattern is backed either by the plain-string searcher or by
// the VM program; the two are interchangeable in behavior for any pattern
// that could compile to either.

use std::ops::Range;

use crate::compile::{compile, Compiled};
use crate::error::PatternError;
use crate::literal::LiteralPattern;
use crate::program::Program;
use crate::vm::{MatchFlags, Slots, Vm};

/// A compiled regular expression.
///
/// Compilation is a pure function of the pattern text; the result is
/// immutable and safe to share across threads for concurrent matching.
///
/// # Examples
///
/// ```
/// use lockstep::api::Pattern;
///
/// let re = Pattern::new(r"[0-9]+").unwrap();
/// assert!(re.is_match("hello 42"));
///
/// let m = re.find("hello 42").unwrap();
/// assert_eq!(m.as_str(), "42");
/// assert_eq!(m.start(), 6);
/// assert_eq!(m.end(), 8);
/// ```
pub struct Pattern {
    source: String,
    imp: Imp,
}

enum Imp {
    Literal(LiteralPattern),
    Vm(Program),
}

impl Pattern {
    /// Compile a pattern.
    pub fn new(pattern: &str) -> Result<Pattern, PatternError> {
        let imp = match compile(pattern)? {
            Compiled::Literal(text) => Imp::Literal(LiteralPattern::new(text)),
            Compiled::Vm(program) => Imp::Vm(program),
        };
        Ok(Pattern {
            source: pattern.to_string(),
            imp,
        })
    }

    /// The pattern text this was compiled from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Check whether `text` contains a match anywhere.
    pub fn is_match(&self, text: &str) -> bool {
        match &self.imp {
            Imp::Literal(lit) => lit.find_at(text, 0).is_some(),
            Imp::Vm(prog) => Vm::new(prog, text).has_match(0),
        }
    }

    /// Check whether a match starts exactly at byte offset `at`, leaving
    /// the rest of `text` unconstrained.
    pub fn matches_at(&self, text: &str, at: usize) -> bool {
        match &self.imp {
            Imp::Literal(lit) => lit.matches_at(text, at),
            Imp::Vm(prog) => {
                at <= text.len()
                    && Vm::new(prog, text)
                        .run(at, MatchFlags::ANCHOR_START)
                        .is_some()
            }
        }
    }

    /// Check whether the pattern matches the whole of `text`.
    pub fn matches(&self, text: &str) -> bool {
        match &self.imp {
            Imp::Literal(lit) => lit.matches(text),
            Imp::Vm(prog) => Vm::new(prog, text)
                .run(0, MatchFlags::ANCHOR_START | MatchFlags::ANCHOR_END)
                .is_some(),
        }
    }

    /// Return the first match in `text`, or `None`.
    pub fn find<'t>(&self, text: &'t str) -> Option<Match<'t>> {
        self.find_at(text, 0)
    }

    /// Return the first match scanning forward from byte offset `at`.
    ///
    /// # Panics
    ///
    /// Panics if `at` is not on a character boundary of `text`.
    pub fn find_at<'t>(&self, text: &'t str, at: usize) -> Option<Match<'t>> {
        match &self.imp {
            Imp::Literal(lit) => {
                let (start, end) = lit.find_at(text, at)?;
                Some(Match { text, start, end })
            }
            Imp::Vm(prog) => {
                if at > text.len() {
                    return None;
                }
                let slots = Vm::new(prog, text).run(at, MatchFlags::empty())?;
                Some(Match {
                    text,
                    start: slots[0].expect("match without a start slot"),
                    end: slots[1].expect("match without an end slot"),
                })
            }
        }
    }

    /// Return the first match with all capture groups, or `None`.
    pub fn captures<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        let slots = match &self.imp {
            Imp::Literal(lit) => {
                let (start, end) = lit.find_at(text, 0)?;
                vec![Some(start), Some(end)].into_boxed_slice()
            }
            Imp::Vm(prog) => Vm::new(prog, text).run(0, MatchFlags::empty())?,
        };
        Some(Captures { text, slots })
    }

    /// Iterate over all non-overlapping matches in `text`.
    pub fn find_iter<'r, 't>(&'r self, text: &'t str) -> FindIter<'r, 't> {
        FindIter {
            pattern: self,
            text,
            last_end: 0,
        }
    }

    /// Number of capture groups in the pattern, excluding group 0.
    pub fn captures_len(&self) -> usize {
        match &self.imp {
            Imp::Literal(_) => 0,
            Imp::Vm(prog) => prog.group_count - 1,
        }
    }

    /// Whether the pattern took the plain-string fast path.
    pub fn is_literal(&self) -> bool {
        matches!(self.imp, Imp::Literal(_))
    }
}

impl std::fmt::Debug for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pattern")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

// === Match ===

/// A single match result referencing the original text.
#[derive(Debug, Clone, Copy)]
pub struct Match<'t> {
    text: &'t str,
    start: usize,
    end: usize,
}

impl<'t> Match<'t> {
    /// Byte offset of the start of the match.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset of the end of the match (exclusive).
    pub fn end(&self) -> usize {
        self.end
    }

    /// Byte range of the match.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The matched text.
    pub fn as_str(&self) -> &'t str {
        &self.text[self.start..self.end]
    }

    /// Length of the match in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the match is empty (zero-length).
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

// === Captures ===

/// All capture groups from a single match.
///
/// Group 0 is the entire match. Groups 1..N correspond to `(...)` in the
/// pattern, numbered by the position of their opening parenthesis.
pub struct Captures<'t> {
    text: &'t str,
    slots: Slots,
}

impl<'t> Captures<'t> {
    /// Get capture group `i`, or `None` if the group did not participate.
    pub fn get(&self, i: usize) -> Option<Match<'t>> {
        let start = *self.slots.get(2 * i)?;
        let end = *self.slots.get(2 * i + 1)?;
        Some(Match {
            text: self.text,
            start: start?,
            end: end?,
        })
    }

    /// Number of capture groups, including group 0.
    pub fn len(&self) -> usize {
        self.slots.len() / 2
    }

    /// Returns `true` if there are no capture groups; never the case for a
    /// well-formed match.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate over all capture groups.
    pub fn iter(&self) -> CapturesIter<'_, 't> {
        CapturesIter {
            captures: self,
            index: 0,
        }
    }
}

impl std::fmt::Debug for Captures<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_list();
        for i in 0..self.len() {
            list.entry(&self.get(i));
        }
        list.finish()
    }
}

// === CapturesIter ===

/// Iterator over capture groups in a [`Captures`].
pub struct CapturesIter<'c, 't> {
    captures: &'c Captures<'t>,
    index: usize,
}

impl<'c, 't> Iterator for CapturesIter<'c, 't> {
    type Item = Option<Match<'t>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.captures.len() {
            return None;
        }
        let m = self.captures.get(self.index);
        self.index += 1;
        Some(m)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.captures.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CapturesIter<'_, '_> {}

// === FindIter ===

/// Iterator over all non-overlapping matches in a text. An empty match
/// advances the scan by one character to guarantee progress.
pub struct FindIter<'r, 't> {
    pattern: &'r Pattern,
    text: &'t str,
    last_end: usize,
}

impl<'r, 't> Iterator for FindIter<'r, 't> {
    type Item = Match<'t>;

    fn next(&mut self) -> Option<Match<'t>> {
        if self.last_end > self.text.len() {
            return None;
        }
        let m = self.pattern.find_at(self.text, self.last_end)?;
        self.last_end = if m.is_empty() {
            match self.text[m.end()..].chars().next() {
                Some(c) => m.end() + c.len_utf8(),
                None => self.text.len() + 1,
            }
        } else {
            m.end()
        };
        Some(m)
    }
}
