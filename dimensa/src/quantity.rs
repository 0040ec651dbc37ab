use std::{
  cmp::Ordering,
  hash::{Hash, Hasher},
  iter::Sum,
  marker::PhantomData,
  ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::{AsPrimitive, Zero};

use crate::{
  algebra::{Inverse, InverseUnit, Product, ProductUnit, Quotient, QuotientUnit},
  dims::Unit,
};

/// A magnitude of type `V` tagged with the unit `U`.
///
/// The unit lives only in the type. Addition, subtraction and comparison
/// need both sides in the same unit; multiplication and division derive the
/// unit of the result.
///
/// ```
/// use dimensa::si::{Force, Length, Energy};
///
/// let work: Energy = Force::new(2.0) * Length::new(3.0);
/// assert_eq!(work, Energy::new(6.0));
/// ```
///
/// ```compile_fail
/// use dimensa::si::{Force, Length};
///
/// let _ = Force::new(2.0) + Length::new(3.0);
/// ```
///
/// ```compile_fail
/// use dimensa::si::{Force, Length};
///
/// let _ = Force::new(2.0) < Length::new(3.0);
/// ```
///
/// Compound multiplication keeps the unit of the left operand, so only a
/// dimensionless right operand (or a bare scalar) is accepted:
///
/// ```
/// use dimensa::si::{Force, Number};
///
/// let mut f = Force::new(2.0);
/// f *= Number::new(3.0);
/// f /= 2.0;
/// assert_eq!(f, Force::new(3.0));
/// ```
///
/// ```compile_fail
/// use dimensa::si::Force;
///
/// let mut f = Force::new(2.0);
/// f *= Force::new(3.0);
/// ```
pub struct Quantity<U: Unit, V = f64> {
  unit: PhantomData<U>,
  magnitude: V,
}

impl<U: Unit, V> Quantity<U, V> {
  pub const fn new(magnitude: V) -> Self {
    Self { unit: PhantomData, magnitude }
  }

  pub const fn magnitude(&self) -> &V {
    &self.magnitude
  }

  pub fn into_magnitude(self) -> V {
    self.magnitude
  }

  /// Same unit, magnitude converted losslessly through `From`.
  pub fn promote<T: From<V>>(self) -> Quantity<U, T> {
    Quantity::new(T::from(self.magnitude))
  }

  /// Same unit, magnitude converted with `as` semantics.
  pub fn cast<T>(self) -> Quantity<U, T>
  where
    V: AsPrimitive<T>,
    T: Copy + 'static,
  {
    Quantity::new(self.magnitude.as_())
  }

  /// The multiplicative inverse, in the inverse unit.
  pub fn recip(self) -> Quantity<Inverse<U>, <V as Div<V>>::Output>
  where
    U: InverseUnit,
    V: Div<V> + num_traits::One,
  {
    Quantity::new(V::one() / self.magnitude)
  }
}

impl<U: Unit, V: Clone> Clone for Quantity<U, V> {
  fn clone(&self) -> Self {
    Self { unit: PhantomData, magnitude: self.magnitude.clone() }
  }
}

impl<U: Unit, V: Copy> Copy for Quantity<U, V> {}

impl<U: Unit, V: Default> Default for Quantity<U, V> {
  fn default() -> Self {
    Quantity::new(V::default())
  }
}

impl<U: Unit, V: Hash> Hash for Quantity<U, V> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.magnitude.hash(state)
  }
}

impl<U: Unit, V: Neg> Neg for Quantity<U, V> {
  type Output = Quantity<U, V::Output>;

  fn neg(self) -> Self::Output {
    Quantity::new(-self.magnitude)
  }
}

impl<U: Unit, L: Add<R>, R> Add<Quantity<U, R>> for Quantity<U, L> {
  type Output = Quantity<U, L::Output>;

  fn add(self, rhs: Quantity<U, R>) -> Self::Output {
    Quantity::new(self.magnitude + rhs.magnitude)
  }
}

impl<U: Unit, L: Sub<R>, R> Sub<Quantity<U, R>> for Quantity<U, L> {
  type Output = Quantity<U, L::Output>;

  fn sub(self, rhs: Quantity<U, R>) -> Self::Output {
    Quantity::new(self.magnitude - rhs.magnitude)
  }
}

impl<Ul, L, Ur, R> Mul<Quantity<Ur, R>> for Quantity<Ul, L>
where
  Ul: ProductUnit<Ur>,
  Ur: Unit,
  L: Mul<R>,
{
  type Output = Quantity<Product<Ul, Ur>, L::Output>;

  fn mul(self, rhs: Quantity<Ur, R>) -> Self::Output {
    Quantity::new(self.magnitude * rhs.magnitude)
  }
}

impl<Ul, L, Ur, R> Div<Quantity<Ur, R>> for Quantity<Ul, L>
where
  Ul: QuotientUnit<Ur>,
  Ur: Unit,
  L: Div<R>,
{
  type Output = Quantity<Quotient<Ul, Ur>, L::Output>;

  fn div(self, rhs: Quantity<Ur, R>) -> Self::Output {
    Quantity::new(self.magnitude / rhs.magnitude)
  }
}

impl<U: Unit, L: AddAssign<R>, R> AddAssign<Quantity<U, R>> for Quantity<U, L> {
  fn add_assign(&mut self, rhs: Quantity<U, R>) {
    self.magnitude += rhs.magnitude
  }
}

impl<U: Unit, L: SubAssign<R>, R> SubAssign<Quantity<U, R>> for Quantity<U, L> {
  fn sub_assign(&mut self, rhs: Quantity<U, R>) {
    self.magnitude -= rhs.magnitude
  }
}

// `*=` and `/=` cannot change the type of the left operand, so they only
// accept right operands that leave its unit unchanged (dimensionless ones).
impl<U, L, Z, R> MulAssign<Quantity<Z, R>> for Quantity<U, L>
where
  U: ProductUnit<Z, Output = U>,
  Z: Unit,
  L: MulAssign<R>,
{
  fn mul_assign(&mut self, rhs: Quantity<Z, R>) {
    self.magnitude *= rhs.magnitude
  }
}

impl<U, L, Z, R> DivAssign<Quantity<Z, R>> for Quantity<U, L>
where
  U: QuotientUnit<Z, Output = U>,
  Z: Unit,
  L: DivAssign<R>,
{
  fn div_assign(&mut self, rhs: Quantity<Z, R>) {
    self.magnitude /= rhs.magnitude
  }
}

impl<U: Unit, L: PartialEq<R>, R> PartialEq<Quantity<U, R>> for Quantity<U, L> {
  fn eq(&self, other: &Quantity<U, R>) -> bool {
    self.magnitude.eq(&other.magnitude)
  }
}

impl<U: Unit, V: Eq> Eq for Quantity<U, V> {}

impl<U: Unit, L: PartialOrd<R>, R> PartialOrd<Quantity<U, R>> for Quantity<U, L> {
  fn partial_cmp(&self, other: &Quantity<U, R>) -> Option<Ordering> {
    self.magnitude.partial_cmp(&other.magnitude)
  }
}

impl<U: Unit, V: Ord> Ord for Quantity<U, V> {
  fn cmp(&self, other: &Self) -> Ordering {
    self.magnitude.cmp(&other.magnitude)
  }
}

impl<U: Unit, V: Zero> Zero for Quantity<U, V> {
  fn zero() -> Self {
    Quantity::new(V::zero())
  }

  fn is_zero(&self) -> bool {
    self.magnitude.is_zero()
  }
}

impl<U: Unit, V: Zero> Sum for Quantity<U, V> {
  fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
    iter.fold(Self::zero(), |acc, q| acc + q)
  }
}

impl<U: Unit, V: AbsDiffEq> AbsDiffEq for Quantity<U, V> {
  type Epsilon = Quantity<U, V::Epsilon>;

  fn default_epsilon() -> Self::Epsilon {
    Quantity::new(V::default_epsilon())
  }

  fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
    self.magnitude.abs_diff_eq(&other.magnitude, epsilon.magnitude)
  }
}

impl<U: Unit, V: RelativeEq> RelativeEq for Quantity<U, V> {
  fn default_max_relative() -> Self::Epsilon {
    Quantity::new(V::default_max_relative())
  }

  fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
    self.magnitude.relative_eq(&other.magnitude, epsilon.magnitude, max_relative.magnitude)
  }
}

impl<U: Unit, V: UlpsEq> UlpsEq for Quantity<U, V> {
  fn default_max_ulps() -> u32 {
    V::default_max_ulps()
  }

  fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
    self.magnitude.ulps_eq(&other.magnitude, epsilon.magnitude, max_ulps)
  }
}

macro_rules! impl_scalar_ops {
  ($($t:ty),*) => {
    $(
      impl<U: Unit, V: Mul<$t>> Mul<$t> for Quantity<U, V> {
        type Output = Quantity<U, V::Output>;

        fn mul(self, rhs: $t) -> Self::Output {
          Quantity::new(self.magnitude * rhs)
        }
      }

      impl<U: Unit, V> Mul<Quantity<U, V>> for $t where $t: Mul<V> {
        type Output = Quantity<U, <$t as Mul<V>>::Output>;

        fn mul(self, rhs: Quantity<U, V>) -> Self::Output {
          Quantity::new(self * rhs.magnitude)
        }
      }

      impl<U: Unit, V: Div<$t>> Div<$t> for Quantity<U, V> {
        type Output = Quantity<U, V::Output>;

        fn div(self, rhs: $t) -> Self::Output {
          Quantity::new(self.magnitude / rhs)
        }
      }

      impl<U: InverseUnit, V> Div<Quantity<U, V>> for $t where $t: Div<V> {
        type Output = Quantity<Inverse<U>, <$t as Div<V>>::Output>;

        fn div(self, rhs: Quantity<U, V>) -> Self::Output {
          Quantity::new(self / rhs.magnitude)
        }
      }

      impl<U: Unit, V: MulAssign<$t>> MulAssign<$t> for Quantity<U, V> {
        fn mul_assign(&mut self, rhs: $t) {
          self.magnitude *= rhs
        }
      }

      impl<U: Unit, V: DivAssign<$t>> DivAssign<$t> for Quantity<U, V> {
        fn div_assign(&mut self, rhs: $t) {
          self.magnitude /= rhs
        }
      }
    )*
  };
}

impl_scalar_ops!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(feature = "serde")]
impl<U: Unit, V: serde::Serialize> serde::Serialize for Quantity<U, V> {
  fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    self.magnitude.serialize(serializer)
  }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit, V: serde::Deserialize<'de>> serde::Deserialize<'de> for Quantity<U, V> {
  fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    V::deserialize(deserializer).map(Quantity::new)
  }
}
