//! # edffix-core
//!
//! Library behind the `edffix` tool: scans a directory tree of EDF
//! recordings and rewrites the header start date of any file carrying the
//! unset-clock sentinel.
//!
//! The crate is split along the same lines as the tool itself:
//!
//! * [`header`]: access to the fixed EDF header block (read the start date,
//!   apply a typed in-place update).
//! * [`scan`]: enumeration of `.edf` files under an explicit root.
//! * [`corrector`]: the sequential correction pass tying the two together.
//! * [`error`]: the error taxonomy shared by all of the above.

pub mod corrector;
pub mod error;
pub mod header;
pub mod scan;

pub use error::Error;
