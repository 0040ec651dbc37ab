//! Scaled and offset units on top of the coherent base-unit magnitudes.
//!
//! A quantity always stores its magnitude in the coherent unit of its
//! dimension (metres, kelvin, ...). Other units are zero-sized markers
//! carrying the factor, and optionally the offset, that takes them there:
//!
//! ```
//! use dimensa::si::{celsius, foot, inch, kelvin, Length};
//!
//! let l = 12.0 * inch;
//! assert!((l.to::<foot>() - 1.0).abs() < 1e-12);
//! assert_eq!(Length::of::<inch>(1.0), Length::new(0.0254));
//! assert_eq!(0.0 * celsius, 273.15 * kelvin);
//! ```

use crate::{dims::Unit, quantity::Quantity};

/// Conversion of a non-coherent unit into the base magnitude of `Q`:
/// `base = value * FACTOR_TO_BASE + OFFSET_FROM_BASE`.
pub trait Scale<Q> {
  const FACTOR_TO_BASE: f64;
  const OFFSET_FROM_BASE: f64 = 0.0;
}

impl<U: Unit> Quantity<U, f64> {
  /// A quantity from a value expressed in the unit `S`.
  pub fn of<S: Scale<Self>>(value: f64) -> Self {
    Quantity::new(value * S::FACTOR_TO_BASE + S::OFFSET_FROM_BASE)
  }

  /// This quantity's value expressed in the unit `S`.
  pub fn to<S: Scale<Self>>(&self) -> f64 {
    (*self.magnitude() - S::OFFSET_FROM_BASE) / S::FACTOR_TO_BASE
  }
}

/// Declares a unit marker for the quantity type `$qty`.
///
/// ```
/// use dimensa::{si::Length, unit};
///
/// unit!(Length, furlong, 201.168);
///
/// assert_eq!(2.0 * furlong, Length::new(402.336));
/// ```
#[macro_export]
macro_rules! unit {
  ($qty:ty, $name:ident, $factor:expr) => {
    $crate::unit!($qty, $name, $factor, 0.0);
  };
  ($qty:ty, $name:ident, $factor:expr, $offset:expr) => {
    #[allow(non_camel_case_types)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct $name;

    impl $crate::Scale<$qty> for $name {
      const FACTOR_TO_BASE: f64 = $factor;
      const OFFSET_FROM_BASE: f64 = $offset;
    }

    impl ::std::ops::Mul<$name> for f64 {
      type Output = $qty;

      fn mul(self, _rhs: $name) -> Self::Output {
        <$qty>::of::<$name>(self)
      }
    }
  };
}

/// Exact rational rescaling of a magnitude.
///
/// Integers are scaled through `i128` and truncate toward zero, so
/// `milli(2500_i32)` is `2`. A result outside the target type wraps.
pub trait Rescale {
  fn rescale(self, num: u64, den: u64) -> Self;
}

macro_rules! rescale_float {
  ($($t:ty),*) => {
    $(
      impl Rescale for $t {
        fn rescale(self, num: u64, den: u64) -> Self {
          self * num as $t / den as $t
        }
      }
    )*
  };
}

macro_rules! rescale_int {
  ($($t:ty),*) => {
    $(
      impl Rescale for $t {
        fn rescale(self, num: u64, den: u64) -> Self {
          (self as i128 * num as i128 / den as i128) as $t
        }
      }
    )*
  };
}

rescale_float!(f32, f64);
rescale_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Rescale for i128 {
  fn rescale(self, num: u64, den: u64) -> Self {
    self * num as i128 / den as i128
  }
}

impl Rescale for u128 {
  fn rescale(self, num: u64, den: u64) -> Self {
    self * num as u128 / den as u128
  }
}

impl<U: Unit, V: Rescale> Rescale for Quantity<U, V> {
  fn rescale(self, num: u64, den: u64) -> Self {
    Quantity::new(self.into_magnitude().rescale(num, den))
  }
}

#[cfg(feature = "complex")]
impl<T: Rescale> Rescale for num_complex::Complex<T> {
  fn rescale(self, num: u64, den: u64) -> Self {
    num_complex::Complex::new(self.re.rescale(num, den), self.im.rescale(num, den))
  }
}

/// `value * num / den`, for plain numbers and quantities alike.
pub fn rescale<T: Rescale>(value: T, num: u64, den: u64) -> T {
  value.rescale(num, den)
}

macro_rules! prefixes {
  ($($name:ident => $num:expr, $den:expr;)*) => {
    $(
      #[doc = concat!("Scales `value` by ", stringify!($num), "/", stringify!($den), ".")]
      pub fn $name<T: Rescale>(value: T) -> T {
        rescale(value, $num, $den)
      }
    )*
  };
}

prefixes! {
  femto => 1, 1_000_000_000_000_000;
  pico => 1, 1_000_000_000_000;
  nano => 1, 1_000_000_000;
  micro => 1, 1_000_000;
  milli => 1, 1_000;
  centi => 1, 100;
  deci => 1, 10;
  deca => 10, 1;
  hecto => 100, 1;
  kilo => 1_000, 1;
  mega => 1_000_000, 1;
  giga => 1_000_000_000, 1;
  tera => 1_000_000_000_000, 1;
  peta => 1_000_000_000_000_000, 1;
}

#[cfg(test)]
mod tests {
  use approx::assert_relative_eq;
  use typenum::U1;

  use super::*;
  use crate::{dims::System, Basis};

  pub struct Plain;

  impl System for Plain {
    type Dimensions = U1;
    const BASE_SYMBOLS: &'static [&'static str] = &["K"];
  }

  type Kelvin = Quantity<Basis<Plain, typenum::U0>>;

  unit!(Kelvin, kelvin, 1.0);
  unit!(Kelvin, celsius, 1.0, 273.15);
  unit!(Kelvin, fahrenheit, 5.0 / 9.0, 459.67 * 5.0 / 9.0);

  #[test]
  fn test_of_and_to() {
    assert_eq!(Kelvin::of::<kelvin>(300.0), Kelvin::new(300.0));
    assert_eq!(Kelvin::of::<celsius>(0.0), Kelvin::new(273.15));
    assert_eq!(Kelvin::new(273.15).to::<celsius>(), 0.0);
    assert_relative_eq!(Kelvin::of::<fahrenheit>(32.0), Kelvin::new(273.15), epsilon = Kelvin::new(1e-9));
    assert_relative_eq!(Kelvin::new(373.15).to::<fahrenheit>(), 212.0, epsilon = 1e-9);
  }

  #[test]
  fn test_marker_mul() {
    assert_relative_eq!(25.0 * celsius, Kelvin::new(298.15));
    assert_eq!(2.0 * kelvin, Kelvin::new(2.0));
  }

  #[test]
  fn test_prefixes() {
    assert_eq!(milli(1.0), 0.001);
    assert_relative_eq!(centi(2.54), 0.0254);
    assert_eq!(kilo(100.0), 100_000.0);
    assert_eq!(micro(1.0), 1e-6);
    assert_eq!(peta(2.0), 2e15);
    assert_eq!(femto(3.0), 3e-15);
    assert_eq!(kilo(Kelvin::new(1.5)), Kelvin::new(1500.0));
    assert_eq!(rescale(1.0, 1, 1_000), milli(1.0));
  }

  #[test]
  fn test_integer_prefixes() {
    assert_eq!(kilo(5_i32), 5_000);
    assert_eq!(milli(2_500_i32), 2);
    assert_eq!(milli(-2_999_i64), -2);
    assert_eq!(mega(3_u64), 3_000_000);
    assert_eq!(peta(2_i64), 2_000_000_000_000_000);
    assert_eq!(kilo(7_u128), 7_000);
    assert_eq!(centi(250_f32), 2.5);

    type IntKelvin = Quantity<Basis<Plain, typenum::U0>, i32>;
    assert_eq!(kilo(IntKelvin::new(5)), IntKelvin::new(5_000));
    assert_eq!(milli(IntKelvin::new(2_500)), IntKelvin::new(2));
  }

  #[cfg(feature = "complex")]
  #[test]
  fn test_complex_prefixes() {
    use num_complex::Complex;

    assert_eq!(kilo(Complex::new(1.5, -2.0)), Complex::new(1_500.0, -2_000.0));
    assert_eq!(milli(Complex::new(3_000_i32, 500)), Complex::new(3, 0));
  }
}
