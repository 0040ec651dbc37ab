//! The International System of Units.
//!
//! Seven base dimensions, in this order: length, mass, time, electric
//! current, temperature, amount of substance and luminous intensity.
//!
//! ```
//! use dimensa::si::*;
//!
//! let power: Power = (3.0 * newton) * (2.0 * meters_per_second);
//! assert_eq!(power.to_string(), "6W");
//! ```

pub mod base;
pub mod chemistry;
pub mod electrical;
pub mod literals;
pub mod mechanics;
pub mod motion;
pub mod photometry;
pub mod radiation;

pub use base::*;
pub use chemistry::*;
pub use electrical::*;
pub use mechanics::*;
pub use motion::*;
pub use photometry::*;
pub use radiation::*;

pub use crate::conversion::{centi, deca, deci, femto, giga, hecto, kilo, mega, micro, milli, nano, peta, pico, tera};

use typenum::U7;

use crate::dims::{NamedUnit, System};

/// The SI unit system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Si;

impl System for Si {
  type Dimensions = U7;

  const BASE_SYMBOLS: &'static [&'static str] = &["m", "kg", "s", "A", "K", "mol", "cd"];

  /// Lux is `lx` and katal is `kat`, the SI spellings. Lumen (cd sr) has
  /// the exponents of candela because the steradian is dimensionless, so it
  /// gets no entry here and luminous flux prints as `cd`. Becquerel prints
  /// as `Hz` and sievert as `Gy` for the same reason.
  const NAMED_UNITS: &'static [NamedUnit] = &[
    NamedUnit::of::<Hertz>("Hz"),
    NamedUnit::of::<Newton>("N"),
    NamedUnit::of::<Pascal>("Pa"),
    NamedUnit::of::<Joule>("J"),
    NamedUnit::of::<Watt>("W"),
    NamedUnit::of::<Coulomb>("C"),
    NamedUnit::of::<Volt>("V"),
    NamedUnit::of::<Farad>("F"),
    NamedUnit::of::<Ohm>("Ohm"),
    NamedUnit::of::<Siemens>("S"),
    NamedUnit::of::<Weber>("Wb"),
    NamedUnit::of::<Tesla>("T"),
    NamedUnit::of::<Henry>("H"),
    NamedUnit::of::<Lux>("lx"),
    NamedUnit::of::<Gray>("Gy"),
    NamedUnit::of::<Katal>("kat"),
  ];
}
