#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Hebrew gematria calculation.
//!
//! ```
//! use gematria_core::{Method, calculate};
//!
//! let result = calculate("אבג", Method::Standard);
//! assert_eq!(result.total, 6);
//! ```

pub mod engine;
pub mod error;
pub mod letter;
pub mod method;
pub mod names;

pub use engine::{GematriaResult, LetterResult, calculate, calculate_by_id, is_hebrew_text};
pub use error::GematriaError;
pub use letter::Letter;
pub use method::{Method, reduce_to_single_digit};
pub use names::{MAX_NAMES, NameResult, NamesResult, calculate_names};
