//! Elementwise operators over exponent lists.
//!
//! Every operator recurses down both lists in step, so the operands must
//! have the same length and the same system. Raising to a rational power
//! only exists when every resulting exponent is an integer:
//!
//! ```compile_fail
//! use dimensa::{Raised, Ratio, Unit, si::Meter, typenum::{P1, P2}};
//!
//! // m^(1/2) is not a unit
//! let _ = <Raised<Meter, Ratio<P1, P2>> as Unit>::exponents();
//! ```

use std::{
  marker::PhantomData,
  ops::{Add, Div, Mul, Neg, Rem, Sub},
};

use typenum::{Diff, Integer, Negate, NonZero, Prod, Quot, Sum, P1, P2, P3, Z0};

use crate::dims::{Dims, End, System, Unit};

/// A type-level rational number, the exponent of [`RaisedUnit`].
pub trait Rational {
  type Num: Integer;
  type Den: Integer + NonZero;

  /// `Num / Den` as a float.
  const VALUE: f64 = <Self::Num as Integer>::I64 as f64 / <Self::Den as Integer>::I64 as f64;
}

/// `Num / Den`. `Ratio<P3, P2>` is the power 3/2, `Ratio<P2>` is 2.
pub struct Ratio<Num, Den = P1>(PhantomData<(Num, Den)>);

impl<Num: Integer, Den: Integer + NonZero> Rational for Ratio<Num, Den> {
  type Num = Num;
  type Den = Den;
}

/// Elementwise exponent sum: the unit of `Self * Rhs`.
#[diagnostic::on_unimplemented(
  message = "cannot multiply units `{Self}` and `{Rhs}`",
  note = "both units need the same number of dimensions and the same system"
)]
pub trait ProductUnit<Rhs: Unit>: Unit {
  type Output: Unit;
}

impl<S: System> ProductUnit<End<S>> for End<S> {
  type Output = End<S>;
}

impl<El, Rl, Er, Rr> ProductUnit<Dims<Er, Rr>> for Dims<El, Rl>
where
  El: Integer + Add<Er> + 'static,
  Er: Integer + 'static,
  Sum<El, Er>: Integer + 'static,
  Rl: ProductUnit<Rr>,
  Rr: Unit,
{
  type Output = Dims<Sum<El, Er>, <Rl as ProductUnit<Rr>>::Output>;
}

/// Elementwise exponent difference: the unit of `Self / Rhs`.
#[diagnostic::on_unimplemented(
  message = "cannot divide unit `{Self}` by `{Rhs}`",
  note = "both units need the same number of dimensions and the same system"
)]
pub trait QuotientUnit<Rhs: Unit>: Unit {
  type Output: Unit;
}

impl<S: System> QuotientUnit<End<S>> for End<S> {
  type Output = End<S>;
}

impl<El, Rl, Er, Rr> QuotientUnit<Dims<Er, Rr>> for Dims<El, Rl>
where
  El: Integer + Sub<Er> + 'static,
  Er: Integer + 'static,
  Diff<El, Er>: Integer + 'static,
  Rl: QuotientUnit<Rr>,
  Rr: Unit,
{
  type Output = Dims<Diff<El, Er>, <Rl as QuotientUnit<Rr>>::Output>;
}

/// Elementwise `e * Num / Den`, defined only where `Den` divides `e * Num`
/// for every exponent.
#[diagnostic::on_unimplemented(
  message = "raising `{Self}` to the power {Num}/{Den} gives a fractional exponent",
  label = "fractional exponent disallowed"
)]
pub trait RaisedUnit<Num, Den>: Unit {
  type Output: Unit;
}

impl<S: System, Num, Den> RaisedUnit<Num, Den> for End<S> {
  type Output = End<S>;
}

impl<E, R, Num, Den> RaisedUnit<Num, Den> for Dims<E, R>
where
  E: Integer + Mul<Num> + 'static,
  Num: Integer,
  Den: Integer + NonZero,
  Prod<E, Num>: Rem<Den, Output = Z0> + Div<Den>,
  Quot<Prod<E, Num>, Den>: Integer + 'static,
  R: RaisedUnit<Num, Den>,
{
  type Output = Dims<Quot<Prod<E, Num>, Den>, <R as RaisedUnit<Num, Den>>::Output>;
}

/// Elementwise negation: the unit of `1 / Self`.
pub trait InverseUnit: Unit {
  type Output: Unit;
}

impl<S: System> InverseUnit for End<S> {
  type Output = End<S>;
}

impl<E, R> InverseUnit for Dims<E, R>
where
  E: Integer + Neg + 'static,
  Negate<E>: Integer + 'static,
  R: InverseUnit,
{
  type Output = Dims<Negate<E>, <R as InverseUnit>::Output>;
}

pub type Product<L, R> = <L as ProductUnit<R>>::Output;
pub type Quotient<L, R> = <L as QuotientUnit<R>>::Output;
pub type Inverse<U> = <U as InverseUnit>::Output;

/// `U` raised to the [`Rational`] power `R`.
pub type Raised<U, R> = <U as RaisedUnit<<R as Rational>::Num, <R as Rational>::Den>>::Output;

pub type Squared<U> = Product<U, U>;
pub type Cubed<U> = Product<Product<U, U>, U>;
pub type SquareRoot<U> = Raised<U, Ratio<P1, P2>>;
pub type CubeRoot<U> = Raised<U, Ratio<P1, P3>>;

#[cfg(test)]
mod tests {
  use typenum::{assert_type_eq, N1, N2, N3, N4, N6, P2, P3, P4, P6, U4, Z0};

  use super::*;
  use crate::{dims, dims::Dimensionless};

  struct Mech;

  impl System for Mech {
    type Dimensions = U4;
    const BASE_SYMBOLS: &'static [&'static str] = &["m", "kg", "s", "A"];
  }

  type Newton = dims![Mech; P1, P1, N2, Z0];
  type Meter = dims![Mech; P1, Z0, Z0, Z0];
  type Second = dims![Mech; Z0, Z0, P1, Z0];
  type Unitless = Dimensionless<Mech>;

  #[test]
  fn test_product_is_elementwise_sum() {
    assert_type_eq!(Product<Newton, Meter>, dims![Mech; P2, P1, N2, Z0]);
    assert_eq!(
      <Product<Newton, Second> as Unit>::exponents(),
      Newton::exponents().iter().zip(Second::exponents()).map(|(a, b)| a + b).collect::<Vec<_>>()
    );
  }

  #[test]
  fn test_quotient_is_elementwise_difference() {
    assert_type_eq!(Quotient<Newton, Meter>, dims![Mech; Z0, P1, N2, Z0]);
    assert_type_eq!(Quotient<Unitless, Second>, dims![Mech; Z0, Z0, N1, Z0]);
    assert_type_eq!(Quotient<Newton, Newton>, Unitless);
  }

  #[test]
  fn test_unitless_is_identity() {
    assert_type_eq!(Product<Newton, Unitless>, Newton);
    assert_type_eq!(Product<Unitless, Newton>, Newton);
    assert_type_eq!(Quotient<Newton, Unitless>, Newton);
  }

  #[test]
  fn test_raised() {
    assert_type_eq!(Raised<Newton, Ratio<Z0>>, Unitless);
    assert_type_eq!(Raised<Newton, Ratio<P1>>, Newton);
    assert_type_eq!(Raised<Newton, Ratio<P2>>, Squared<Newton>);
    assert_type_eq!(Raised<Newton, Ratio<P3>>, Cubed<Newton>);
    assert_type_eq!(Raised<Newton, Ratio<N2>>, dims![Mech; N2, N2, P4, Z0]);
    assert_type_eq!(SquareRoot<Squared<Newton>>, Newton);
    assert_type_eq!(CubeRoot<Cubed<Newton>>, Newton);
    assert_type_eq!(Raised<Squared<Newton>, Ratio<P3, P2>>, Cubed<Newton>);
    assert_type_eq!(Raised<dims![Mech; P2, N4, P6, Z0], Ratio<N1, P2>>, dims![Mech; N1, P2, N3, Z0]);
    // Unreduced ratios behave like their reduced form
    assert_type_eq!(Raised<Squared<Newton>, Ratio<P2, P4>>, Newton);
    assert_type_eq!(Raised<dims![Mech; P6, Z0, Z0, Z0], Ratio<P1, N3>>, dims![Mech; N2, Z0, Z0, Z0]);
  }

  #[test]
  fn test_inverse() {
    assert_type_eq!(Inverse<Newton>, dims![Mech; N1, N1, P2, Z0]);
    assert_type_eq!(Inverse<Unitless>, Unitless);
    assert_type_eq!(Product<Newton, Inverse<Newton>>, Unitless);
  }

  #[test]
  fn test_rational_value() {
    assert_eq!(<Ratio<P3, P2> as Rational>::VALUE, 1.5);
    assert_eq!(<Ratio<N6, P4> as Rational>::VALUE, -1.5);
    assert_eq!(<Ratio<P2> as Rational>::VALUE, 2.0);
    assert_eq!(<Ratio<Z0> as Rational>::VALUE, 0.0);
  }
}
