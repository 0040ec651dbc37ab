//! Short constructors standing in for literal suffixes.
//!
//! ```
//! use dimensa::si::{literals::*, Force, Number};
//!
//! assert_eq!(newtons(-4.5), Force::new(-4.5));
//! assert_eq!(n(3.0), Number::new(3.0));
//! ```

use super::{Force, Number};

pub const fn newtons<V>(value: V) -> Force<V> {
  Force::new(value)
}

pub const fn unitless<V>(value: V) -> Number<V> {
  Number::new(value)
}

pub const fn number<V>(value: V) -> Number<V> {
  Number::new(value)
}

pub const fn n<V>(value: V) -> Number<V> {
  Number::new(value)
}
