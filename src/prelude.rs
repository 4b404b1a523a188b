// prelude.rs - Convenient re-exports.
//
//! # Prelude
//!
//! ```
//! use lockstep::prelude::*;
//!
//! let re = Pattern::new(r"[0-9]+").unwrap();
//! let m = re.find("answer: 42").unwrap();
//! assert_eq!(m.as_str(), "42");
//! ```

pub use crate::api::{Captures, CapturesIter, FindIter, Match, Pattern};
pub use crate::error::{ErrorKind, PatternError};
