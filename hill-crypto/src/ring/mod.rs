//! # Ring Module
//!
//! Provides the [`Ring`] struct for representing finite rings Z_m, and the modular matrix
//! operations the Hill cipher is built from.

pub mod math;
pub mod matrix_ops;

pub use math::{HILL_MODULUS, Ring, mod_inverse};
pub use matrix_ops::{mod_determinant, mod_inverse_matrix};
