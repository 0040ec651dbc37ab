//! Math functions that transform the unit and the magnitude together.
//!
//! ```
//! use dimensa::{math, si::{Area, Length}};
//!
//! let side: Length = math::sqrt(Area::new(16.0));
//! assert_eq!(side, Length::new(4.0));
//! ```
//!
//! Roots that would leave a fractional exponent do not compile:
//!
//! ```compile_fail
//! use dimensa::{math, si::Length};
//!
//! let _ = math::sqrt(Length::new(16.0));
//! ```

use std::ops::Mul;

use typenum::{P1, P2};

use crate::{
  algebra::{Product, ProductUnit, Raised, RaisedUnit, Rational, Ratio, SquareRoot},
  dims::Unit,
  quantity::Quantity,
};

/// Magnitude absolute value. Complex magnitudes give their modulus.
pub trait Abs {
  type Output;
  fn abs(self) -> Self::Output;
}

/// Magnitude square root. Integers promote to `f64`.
pub trait Sqrt {
  type Output;
  fn sqrt(self) -> Self::Output;
}

/// Magnitude raised to a real power. Integers promote to `f64`.
pub trait Powf {
  type Output;
  fn powf(self, exponent: f64) -> Self::Output;
}

macro_rules! impl_float {
  ($($t:ty),*) => {
    $(
      impl Abs for $t {
        type Output = $t;
        fn abs(self) -> $t { <$t>::abs(self) }
      }

      impl Sqrt for $t {
        type Output = $t;
        fn sqrt(self) -> $t { <$t>::sqrt(self) }
      }

      impl Powf for $t {
        type Output = $t;
        fn powf(self, exponent: f64) -> $t { <$t>::powf(self, exponent as $t) }
      }
    )*
  };
}

macro_rules! impl_signed {
  ($($t:ty),*) => {
    $(
      impl Abs for $t {
        type Output = $t;
        fn abs(self) -> $t { <$t>::abs(self) }
      }
    )*
  };
}

macro_rules! impl_unsigned {
  ($($t:ty),*) => {
    $(
      impl Abs for $t {
        type Output = $t;
        fn abs(self) -> $t { self }
      }
    )*
  };
}

macro_rules! impl_integer_promotion {
  ($($t:ty),*) => {
    $(
      impl Sqrt for $t {
        type Output = f64;
        fn sqrt(self) -> f64 { (self as f64).sqrt() }
      }

      impl Powf for $t {
        type Output = f64;
        fn powf(self, exponent: f64) -> f64 { (self as f64).powf(exponent) }
      }
    )*
  };
}

impl_float!(f32, f64);
impl_signed!(i8, i16, i32, i64, i128, isize);
impl_unsigned!(u8, u16, u32, u64, u128, usize);
impl_integer_promotion!(i8, i16, i32, i64, u8, u16, u32, u64);

#[cfg(feature = "complex")]
mod complex {
  use num_complex::Complex;
  use num_traits::Float;

  use super::{Abs, Powf, Sqrt};

  impl<T: Float> Abs for Complex<T> {
    type Output = T;
    fn abs(self) -> T {
      self.norm()
    }
  }

  impl<T: Float> Sqrt for Complex<T> {
    type Output = Complex<T>;
    fn sqrt(self) -> Complex<T> {
      Complex::sqrt(self)
    }
  }

  impl Powf for Complex<f64> {
    type Output = Complex<f64>;
    fn powf(self, exponent: f64) -> Complex<f64> {
      Complex::powf(self, exponent)
    }
  }

  impl Powf for Complex<f32> {
    type Output = Complex<f32>;
    fn powf(self, exponent: f64) -> Complex<f32> {
      Complex::powf(self, exponent as f32)
    }
  }
}

pub fn abs<U: Unit, V: Abs>(q: Quantity<U, V>) -> Quantity<U, V::Output> {
  Quantity::new(q.into_magnitude().abs())
}

pub fn sqrt<U, V>(q: Quantity<U, V>) -> Quantity<SquareRoot<U>, V::Output>
where
  U: RaisedUnit<P1, P2>,
  V: Sqrt,
{
  Quantity::new(q.into_magnitude().sqrt())
}

pub fn square<U, V>(q: Quantity<U, V>) -> Quantity<Product<U, U>, <V as Mul>::Output>
where
  U: ProductUnit<U>,
  V: Mul + Clone,
{
  let m = q.into_magnitude();
  Quantity::new(m.clone() * m)
}

pub fn cube<U, V>(q: Quantity<U, V>) -> Quantity<Product<Product<U, U>, U>, <<V as Mul>::Output as Mul<V>>::Output>
where
  U: ProductUnit<U>,
  Product<U, U>: ProductUnit<U>,
  V: Mul + Clone,
  <V as Mul>::Output: Mul<V>,
{
  let m = q.into_magnitude();
  Quantity::new((m.clone() * m.clone()) * m)
}

/// Raises unit and magnitude to the rational power `R`.
///
/// The magnitude goes through a floating point power at `R::VALUE`, so the
/// result carries rounding even for exact magnitude types.
pub fn pow<R, U, V>(q: Quantity<U, V>) -> Quantity<Raised<U, R>, V::Output>
where
  R: Rational,
  U: RaisedUnit<R::Num, R::Den>,
  V: Powf,
{
  Quantity::new(q.into_magnitude().powf(R::VALUE))
}

impl<U: Unit, V> Quantity<U, V> {
  pub fn abs(self) -> Quantity<U, V::Output>
  where
    V: Abs,
  {
    abs(self)
  }

  pub fn sqrt(self) -> Quantity<SquareRoot<U>, V::Output>
  where
    U: RaisedUnit<P1, P2>,
    V: Sqrt,
  {
    sqrt(self)
  }

  pub fn squared(self) -> Quantity<Product<U, U>, <V as Mul>::Output>
  where
    U: ProductUnit<U>,
    V: Mul + Clone,
  {
    square(self)
  }

  pub fn cubed(self) -> Quantity<Product<Product<U, U>, U>, <<V as Mul>::Output as Mul<V>>::Output>
  where
    U: ProductUnit<U>,
    Product<U, U>: ProductUnit<U>,
    V: Mul + Clone,
    <V as Mul>::Output: Mul<V>,
  {
    cube(self)
  }

  /// See [`pow`]. `q.pow::<Ratio<P3, P2>>()` raises to 3/2.
  pub fn pow<R>(self) -> Quantity<Raised<U, R>, V::Output>
  where
    R: Rational,
    U: RaisedUnit<R::Num, R::Den>,
    V: Powf,
  {
    pow::<R, U, V>(self)
  }

  /// Integer power, `q.powi::<P3>()`.
  pub fn powi<N>(self) -> Quantity<Raised<U, Ratio<N>>, V::Output>
  where
    N: typenum::Integer,
    U: RaisedUnit<N, P1>,
    V: Powf,
  {
    pow::<Ratio<N>, U, V>(self)
  }
}
