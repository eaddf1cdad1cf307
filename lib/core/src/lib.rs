//! # MSC Core
//!
//! Numeric building blocks for the MSC (maximum similarity counter)
//! text similarity engine.
//!
//! - [`CharCodeVector`] - character codes of a word, padded pairwise
//! - [`GaussianKernel`] - `exp(-0.5 * x² / s²)` weighting and aggregation
//! - [`Error`] - the invalid-input taxonomy shared by every crate
//!
//! ## Example
//!
//! ```rust
//! use msc_core::{CharCodeVector, GaussianKernel};
//!
//! let mut a = CharCodeVector::from_word("in");
//! let mut b = CharCodeVector::from_word("at");
//! CharCodeVector::equalize(&mut a, &mut b);
//!
//! let kernel = GaussianKernel::new();
//! let score = kernel.aggregate(&a.difference(&b)).unwrap();
//! assert!(score > 0.0 && score < 1.0);
//! ```

pub mod error;
pub mod kernel;
pub mod vector;

pub use error::{Error, Result};
pub use kernel::{mean, GaussianKernel, DEFAULT_BANDWIDTH};
pub use vector::{CharCodeVector, PAD_CODE};
