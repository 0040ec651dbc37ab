//! Compile-time dimensional analysis.
//!
//! A [`Quantity`] pairs a magnitude with a [`Unit`], a type-level vector of
//! integer exponents over the base dimensions of a [`System`]. Units exist
//! only in the type system: adding metres to seconds does not compile,
//! and multiplying them produces the right unit with no runtime cost.
//!
//! ```
//! use dimensa::si::*;
//!
//! let distance = 100.0 * meter;
//! let time = 9.58 * second;
//! let speed: Velocity = distance / time;
//! assert!(speed > 10.0 * meters_per_second);
//! ```

pub mod algebra;
pub mod conversion;
pub mod dims;
pub mod math;
pub mod quantity;
pub mod si;
pub mod text;

pub use algebra::*;
pub use conversion::{rescale, Rescale, Scale};
pub use dims::*;
pub use math::{Abs, Powf, Sqrt};
pub use quantity::Quantity;
pub use text::{unit_symbol, write_unit, ParseQuantityError, QuantityReader};

pub use typenum;

#[cfg(feature = "complex")]
pub use num_complex;
