//! The exponent-vector engine.
//!
//! A unit is a type-level list of typenum integers, one per base dimension,
//! terminated by the unit system it belongs to:
//!
//! ```
//! use dimensa::{dims, Unit, si::Si, typenum::{P1, Z0, N2}};
//!
//! // m kg s^-2
//! type Newton = dims![Si; P1, P1, N2, Z0, Z0, Z0, Z0];
//! assert_eq!(Newton::exponents(), vec![1, 1, -2, 0, 0, 0, 0]);
//! ```
//!
//! Nothing here exists at runtime. Two units are the same unit exactly when
//! they are the same type, and lists of different length (or different
//! systems) never unify, so combining them does not compile:
//!
//! ```compile_fail
//! use dimensa::{dims, Quantity, si::Si, typenum::{P1, Z0}};
//!
//! let a = Quantity::<dims![Si; P1, Z0]>::new(1.0);
//! let b = Quantity::<dims![Si; P1, Z0, Z0]>::new(1.0);
//! let _ = a + b;
//! ```

use std::{marker::PhantomData, ops::Sub};

use typenum::{Integer, Sub1, UInt, UTerm, Unsigned, B1, P1, Z0};

/// Upper bound on the number of base dimensions a [`System`] may declare.
pub const MAX_DIMENSIONS: usize = 16;

/// Const-evaluated exponent vector, zero padded past [`Unit::DIMENSIONS`].
pub type Exponents = [i32; MAX_DIMENSIONS];

/// A family of units sharing the same base dimensions and symbols.
///
/// The system is carried by the terminator of every exponent list, so each
/// unit knows how to name itself without any runtime registry.
///
/// Every dimension needs a base symbol. A unit of a system whose
/// `BASE_SYMBOLS` is too short or too long fails const evaluation:
///
/// ```compile_fail
/// use dimensa::{dims, Exponents, System, Unit, typenum::{P1, U2}};
///
/// struct Broken;
///
/// impl System for Broken {
///   type Dimensions = U2;
///   const BASE_SYMBOLS: &'static [&'static str] = &["m"];
/// }
///
/// const E: Exponents = <dims![Broken; P1, P1] as Unit>::EXPONENTS;
/// ```
pub trait System: 'static {
  /// Number of base dimensions, as a typenum unsigned.
  type Dimensions: Unsigned;

  /// Symbol of each base dimension, in dimension order.
  const BASE_SYMBOLS: &'static [&'static str];

  /// Whole-unit symbols. These take precedence over the per-dimension
  /// rendering; the first entry matching a unit wins.
  const NAMED_UNITS: &'static [NamedUnit] = &[];
}

/// A whole-unit display symbol, keyed by the unit's exponent vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedUnit {
  pub dimensions: usize,
  pub exponents: Exponents,
  pub symbol: &'static str,
}

impl NamedUnit {
  pub const fn of<U: Unit>(symbol: &'static str) -> Self {
    NamedUnit { dimensions: U::DIMENSIONS, exponents: U::EXPONENTS, symbol }
  }

  pub const fn matches(&self, dimensions: usize, exponents: &Exponents) -> bool {
    if self.dimensions != dimensions {
      return false;
    }
    let mut i = 0;
    while i < dimensions {
      if self.exponents[i] != exponents[i] {
        return false;
      }
      i += 1;
    }
    true
  }
}

/// One element of an exponent list: exponent `E` followed by `Rest`.
pub struct Dims<E, Rest>(PhantomData<(E, Rest)>);

/// The end of an exponent list, naming the unit system `S`.
pub struct End<S>(PhantomData<S>);

/// A physical unit: a fixed-length exponent vector over the base dimensions
/// of [`Unit::System`].
pub trait Unit: 'static {
  type System: System;

  /// Length of the exponent vector.
  const DIMENSIONS: usize;

  /// The exponent vector, zero padded to [`MAX_DIMENSIONS`].
  const EXPONENTS: Exponents;

  /// The whole-unit symbol registered by the system, if any.
  const SYMBOL: Option<&'static str> =
    named_symbol(<Self::System as System>::NAMED_UNITS, Self::DIMENSIONS, &Self::EXPONENTS);

  /// Exponent at `index`. Indices past [`Unit::DIMENSIONS`] read as zero and
  /// indices past [`MAX_DIMENSIONS`] panic; use [`Exponent`] for a checked,
  /// compile-time lookup.
  fn exponent(index: usize) -> i32 {
    Self::EXPONENTS[index]
  }

  fn exponents() -> Vec<i32> {
    Self::EXPONENTS[..Self::DIMENSIONS].to_vec()
  }

  fn is_dimensionless() -> bool {
    Self::exponents().iter().all(|&e| e == 0)
  }
}

impl<S: System> Unit for End<S> {
  type System = S;
  const DIMENSIONS: usize = 0;
  const EXPONENTS: Exponents = {
    assert!(
      S::BASE_SYMBOLS.len() == <S::Dimensions as Unsigned>::USIZE,
      "System::BASE_SYMBOLS must name every dimension"
    );
    [0; MAX_DIMENSIONS]
  };
}

impl<E: Integer + 'static, R: Unit> Unit for Dims<E, R> {
  type System = R::System;
  const DIMENSIONS: usize = R::DIMENSIONS + 1;
  const EXPONENTS: Exponents = prepend(E::I32, R::EXPONENTS, R::DIMENSIONS);
}

const fn prepend(first: i32, rest: Exponents, rest_len: usize) -> Exponents {
  assert!(rest_len < MAX_DIMENSIONS, "unit has more base dimensions than MAX_DIMENSIONS");
  let mut out = [0; MAX_DIMENSIONS];
  out[0] = first;
  let mut i = 0;
  while i < rest_len {
    out[i + 1] = rest[i];
    i += 1;
  }
  out
}

const fn named_symbol(table: &'static [NamedUnit], dimensions: usize, exponents: &Exponents) -> Option<&'static str> {
  let mut i = 0;
  while i < table.len() {
    if table[i].matches(dimensions, exponents) {
      return Some(table[i].symbol);
    }
    i += 1;
  }
  None
}

/// Compile-time indexed access into an exponent list.
#[diagnostic::on_unimplemented(
  message = "`{Self}` has no exponent at index `{Index}`",
  label = "dimension index out of range"
)]
pub trait ExponentAt<Index>: Unit {
  type Output: Integer;
}

impl<E: Integer + 'static, R: Unit> ExponentAt<UTerm> for Dims<E, R> {
  type Output = E;
}

impl<E, R, I, B> ExponentAt<UInt<I, B>> for Dims<E, R>
where
  E: Integer + 'static,
  R: ExponentAt<Sub1<UInt<I, B>>>,
  UInt<I, B>: Sub<B1>,
{
  type Output = <R as ExponentAt<Sub1<UInt<I, B>>>>::Output;
}

/// The typenum exponent of `U` at dimension `Index`.
pub type Exponent<U, Index> = <U as ExponentAt<Index>>::Output;

/// All-zero exponent lists of a given length.
pub trait Zeros<S: System> {
  type Output: Unit<System = S>;
}

impl<S: System> Zeros<S> for UTerm {
  type Output = End<S>;
}

impl<S, N, B> Zeros<S> for UInt<N, B>
where
  S: System,
  UInt<N, B>: Sub<B1>,
  Sub1<UInt<N, B>>: Zeros<S>,
{
  type Output = Dims<Z0, <Sub1<UInt<N, B>> as Zeros<S>>::Output>;
}

/// Basis-unit construction, implemented on the index: the list of length
/// `Count` holding `P1` at `Self` and `Z0` everywhere else.
#[diagnostic::on_unimplemented(
  message = "dimension index `{Self}` does not fit in a unit of `{Count}` dimensions",
  label = "basis index out of range"
)]
pub trait BasisAt<S: System, Count> {
  type Output: Unit<System = S>;
}

impl<S, N, B> BasisAt<S, UInt<N, B>> for UTerm
where
  S: System,
  UInt<N, B>: Sub<B1>,
  Sub1<UInt<N, B>>: Zeros<S>,
{
  type Output = Dims<P1, <Sub1<UInt<N, B>> as Zeros<S>>::Output>;
}

impl<S, I, Bi, N, B> BasisAt<S, UInt<N, B>> for UInt<I, Bi>
where
  S: System,
  UInt<I, Bi>: Sub<B1>,
  UInt<N, B>: Sub<B1>,
  Sub1<UInt<I, Bi>>: BasisAt<S, Sub1<UInt<N, B>>>,
{
  type Output = Dims<Z0, <Sub1<UInt<I, Bi>> as BasisAt<S, Sub1<UInt<N, B>>>>::Output>;
}

/// The base unit of system `S` along dimension `Index`.
///
/// ```compile_fail
/// use dimensa::{Basis, Unit, si::Si, typenum::U7};
///
/// // Si has seven dimensions, indexed 0..7
/// let _ = <Basis<Si, U7> as Unit>::exponents();
/// ```
pub type Basis<S, Index> = <Index as BasisAt<S, <S as System>::Dimensions>>::Output;

/// The unit of system `S` with every exponent zero.
pub type Dimensionless<S> = <<S as System>::Dimensions as Zeros<S>>::Output;

/// Spells out an exponent list: `dims![S; P1, Z0, N2]`.
#[macro_export]
macro_rules! dims {
  ($sys:ty;) => { $crate::End<$sys> };
  ($sys:ty; $e:ty $(, $rest:ty)* $(,)?) => { $crate::Dims<$e, $crate::dims![$sys; $($rest),*]> };
}
