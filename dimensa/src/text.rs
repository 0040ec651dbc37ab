//! Printing and parsing quantities as `<magnitude><unit symbol>`.
//!
//! A unit prints as the whole-unit symbol its [`System`] registers for it,
//! or else as `<base symbol>[^exponent]` for every non-zero exponent in
//! dimension order:
//!
//! ```
//! use dimensa::si::{Acceleration, Force};
//!
//! assert_eq!(Force::new(-4.5).to_string(), "-4.5N");
//! assert_eq!(Acceleration::new(9.81).to_string(), "9.81ms^-2");
//!
//! let f: Force = "-4.5N".parse().unwrap();
//! assert_eq!(f, Force::new(-4.5));
//! assert!("-4.5Hz".parse::<Force>().is_err());
//! ```

use std::{
  fmt::{self, Debug, Display, Write},
  str::FromStr,
};

use log::debug;
use thiserror::Error;

use crate::{
  dims::{System, Unit},
  quantity::Quantity,
};

/// Writes the symbol of `U`.
pub fn write_unit<U: Unit, W: Write>(w: &mut W) -> fmt::Result {
  if let Some(symbol) = U::SYMBOL {
    return w.write_str(symbol);
  }

  let base = <U::System as System>::BASE_SYMBOLS;
  for (index, exponent) in U::exponents().into_iter().enumerate() {
    if exponent == 0 {
      continue;
    }
    w.write_str(base.get(index).copied().unwrap_or("?"))?;
    if exponent != 1 {
      write!(w, "^{}", exponent)?;
    }
  }
  Ok(())
}

/// The symbol of `U` as a string. Dimensionless units have an empty symbol.
pub fn unit_symbol<U: Unit>() -> String {
  let mut s = String::new();
  // Writing into a String never fails
  let _ = write_unit::<U, _>(&mut s);
  s
}

impl<U: Unit, V: Display> Display for Quantity<U, V> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    Display::fmt(self.magnitude(), f)?;
    write_unit::<U, _>(f)
  }
}

impl<U: Unit, V: Debug> Debug for Quantity<U, V> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    Debug::fmt(self.magnitude(), f)?;
    write_unit::<U, _>(f)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseQuantityError {
  #[error("reader is in a failed state")]
  Failed,
  #[error("expected a magnitude, found end of input")]
  MissingMagnitude,
  #[error("invalid magnitude {text:?}: {reason}")]
  InvalidMagnitude { text: String, reason: String },
  #[error("expected unit symbol {expected:?}, found {found:?}")]
  UnitMismatch { expected: String, found: String },
  #[error("unexpected input after quantity: {0:?}")]
  TrailingInput(String),
}

/// Reads quantities one after another from a string, like an input stream.
///
/// The magnitude is whatever `V::from_str` accepts, so complex magnitudes
/// read back the way they print. It is the longest prefix of the next
/// whitespace-free word that parses as `V` and is followed by the unit
/// symbol.
///
/// The first failed read puts the reader in a failed state and every read
/// after that fails with [`ParseQuantityError::Failed`]. A failed read never
/// modifies the caller's quantity.
///
/// ```
/// use dimensa::{QuantityReader, si::{Force, Length}};
///
/// let mut reader = QuantityReader::new("2m -4.5N");
/// let l: Length = reader.read().unwrap();
/// let mut f = Force::new(1.0);
/// reader.read_into(&mut f).unwrap();
/// assert_eq!((l, f), (Length::new(2.0), Force::new(-4.5)));
/// ```
#[derive(Debug, Clone)]
pub struct QuantityReader<'a> {
  input: &'a str,
  position: usize,
  failed: bool,
}

impl<'a> QuantityReader<'a> {
  pub fn new(input: &'a str) -> Self {
    Self { input, position: 0, failed: false }
  }

  pub fn is_failed(&self) -> bool {
    self.failed
  }

  /// Input not consumed yet.
  pub fn remaining(&self) -> &'a str {
    &self.input[self.position..]
  }

  pub fn read<U: Unit, V>(&mut self) -> Result<Quantity<U, V>, ParseQuantityError>
  where
    V: FromStr,
    V::Err: Display,
  {
    if self.failed {
      return Err(ParseQuantityError::Failed);
    }

    match self.read_quantity() {
      Ok(q) => Ok(q),
      Err(e) => {
        debug!("Failed to read {}: {}", std::any::type_name::<Quantity<U, V>>(), e);
        self.failed = true;
        Err(e)
      },
    }
  }

  /// Reads into `target`, which keeps its previous value if the read fails.
  pub fn read_into<U: Unit, V>(&mut self, target: &mut Quantity<U, V>) -> Result<(), ParseQuantityError>
  where
    V: FromStr,
    V::Err: Display,
  {
    *target = self.read()?;
    Ok(())
  }

  fn read_quantity<U: Unit, V>(&mut self) -> Result<Quantity<U, V>, ParseQuantityError>
  where
    V: FromStr,
    V::Err: Display,
  {
    let start = self.input.len() - self.remaining().trim_start().len();
    let rest = &self.input[start..];
    let word = rest.split(char::is_whitespace).next().unwrap_or("");
    if word.is_empty() {
      return Err(ParseQuantityError::MissingMagnitude);
    }

    let expected = unit_symbol::<U>();
    // Longest parsing prefix, kept for the error when no symbol follows
    let mut longest: Option<usize> = None;

    for end in (1..=word.len()).rev().filter(|&end| word.is_char_boundary(end)) {
      let Ok(magnitude) = word[..end].parse::<V>() else {
        continue;
      };
      if let Some(after) = strip_symbol(&rest[end..], &expected) {
        self.position = self.input.len() - after.len();
        return Ok(Quantity::new(magnitude));
      }
      longest.get_or_insert(end);
    }

    match longest {
      Some(end) => Err(ParseQuantityError::UnitMismatch {
        expected,
        found: rest[end..].split_whitespace().next().unwrap_or("").to_owned(),
      }),
      None => Err(ParseQuantityError::InvalidMagnitude {
        text: word.to_owned(),
        reason: word.parse::<V>().err().map(|e| e.to_string()).unwrap_or_default(),
      }),
    }
  }
}

/// `input` after `symbol`, matched character by character with whitespace
/// allowed before each character.
fn strip_symbol<'s>(input: &'s str, symbol: &str) -> Option<&'s str> {
  let mut rest = input;
  for c in symbol.chars() {
    rest = rest.trim_start().strip_prefix(c)?;
  }
  Some(rest)
}

impl<U: Unit, V> FromStr for Quantity<U, V>
where
  V: FromStr,
  V::Err: Display,
{
  type Err = ParseQuantityError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let mut reader = QuantityReader::new(s);
    let q = reader.read()?;
    let rest = reader.remaining().trim();
    if !rest.is_empty() {
      return Err(ParseQuantityError::TrailingInput(rest.to_owned()));
    }
    Ok(q)
  }
}

#[cfg(test)]
mod tests {
  use typenum::{N1, N2, P1, P2, U4, Z0};

  use super::*;
  use crate::{dims, Dimensionless, NamedUnit};

  struct Mech;

  impl System for Mech {
    type Dimensions = U4;
    const BASE_SYMBOLS: &'static [&'static str] = &["m", "kg", "s", "A"];
    const NAMED_UNITS: &'static [NamedUnit] = &[NamedUnit::of::<UNewton>("N"), NamedUnit::of::<UHertz>("Hz")];
  }

  type UNewton = dims![Mech; P1, P1, N2, Z0];
  type UHertz = dims![Mech; Z0, Z0, N1, Z0];
  type Newton = Quantity<UNewton>;
  type Accel = Quantity<dims![Mech; P1, Z0, N2, Z0]>;

  #[test]
  fn test_symbols() {
    assert_eq!(unit_symbol::<UNewton>(), "N");
    assert_eq!(unit_symbol::<UHertz>(), "Hz");
    assert_eq!(unit_symbol::<dims![Mech; P1, Z0, N2, Z0]>(), "ms^-2");
    assert_eq!(unit_symbol::<dims![Mech; P2, P1, Z0, N1]>(), "m^2kgA^-1");
    assert_eq!(unit_symbol::<Dimensionless<Mech>>(), "");
  }

  #[test]
  fn test_print() {
    assert_eq!(Newton::new(-4.5).to_string(), "-4.5N");
    assert_eq!(Accel::new(9.5).to_string(), "9.5ms^-2");
    assert_eq!(format!("{:?}", Newton::new(2.0)), "2.0N");
    assert_eq!(format!("{:.2}", Newton::new(1.0 / 3.0)), "0.33N");
    assert_eq!(Quantity::<Dimensionless<Mech>, i32>::new(7).to_string(), "7");
  }

  #[test]
  fn test_parse() {
    assert_eq!("-4.5N".parse::<Newton>(), Ok(Newton::new(-4.5)));
    assert_eq!("  1e3 N ".parse::<Newton>(), Ok(Newton::new(1000.0)));
    assert_eq!("9.5ms^-2".parse::<Accel>(), Ok(Accel::new(9.5)));
    assert_eq!("12N".parse::<Quantity<UNewton, i32>>(), Ok(Quantity::new(12)));
    assert_eq!(
      "-4.5Hz".parse::<Newton>(),
      Err(ParseQuantityError::UnitMismatch { expected: "N".to_owned(), found: "Hz".to_owned() })
    );
    assert_eq!("4.5N extra".parse::<Newton>(), Err(ParseQuantityError::TrailingInput("extra".to_owned())));
    assert_eq!(" ".parse::<Newton>(), Err(ParseQuantityError::MissingMagnitude));
    assert!(matches!(
      "N".parse::<Newton>(),
      Err(ParseQuantityError::InvalidMagnitude { text, .. }) if text == "N"
    ));
    // `1` is the longest integer prefix, and `.5N` is not the symbol
    assert_eq!(
      "1.5N".parse::<Quantity<UNewton, i32>>(),
      Err(ParseQuantityError::UnitMismatch { expected: "N".to_owned(), found: ".5N".to_owned() })
    );
  }

  #[test]
  fn test_print_parse_roundtrip() {
    for m in [-4.5, 0.0, 1.0 / 3.0, 6.02214076e23, -1e-300, f64::INFINITY] {
      let q = Accel::new(m);
      assert_eq!(q.to_string().parse::<Accel>(), Ok(q));
    }
  }

  #[test]
  fn test_failed_read_leaves_target() {
    let mut reader = QuantityReader::new("-4.5Hz");
    let mut n = Newton::new(1.0);
    assert!(reader.read_into(&mut n).is_err());
    assert!(reader.is_failed());
    assert_eq!(n, Newton::new(1.0));

    let mut reader = QuantityReader::new("-4.5N");
    reader.read_into(&mut n).unwrap();
    assert_eq!(n, Newton::new(-4.5));
  }

  #[test]
  fn test_reader_sequence() {
    let mut reader = QuantityReader::new("1N 2Hz 3N");
    assert_eq!(reader.read::<UNewton, f64>(), Ok(Newton::new(1.0)));
    assert!(reader.read::<UNewton, f64>().is_err());
    // Stays failed, even for input that would otherwise read fine
    assert_eq!(reader.read::<UHertz, f64>(), Err(ParseQuantityError::Failed));
  }

  #[test]
  fn test_symbol_after_magnitude() {
    assert_eq!(strip_symbol("N rest", "N"), Some(" rest"));
    assert_eq!(strip_symbol(" m s^-2", "ms^-2"), Some(""));
    assert_eq!(strip_symbol("Hz", "N"), None);
    assert_eq!(strip_symbol("7", ""), Some("7"));
  }

  #[cfg(feature = "complex")]
  #[test]
  fn test_complex_magnitude() {
    use num_complex::Complex;

    type CNewton = Quantity<UNewton, Complex<f64>>;

    for (re, im) in [(3.0, 4.0), (-7.0, 24.0), (0.5, -1.25), (2.0, 0.0)] {
      let q = CNewton::new(Complex::new(re, im));
      assert_eq!(q.to_string().parse::<CNewton>(), Ok(q));
    }
    assert_eq!("3+4iN".parse::<CNewton>(), Ok(CNewton::new(Complex::new(3.0, 4.0))));

    let mut reader = QuantityReader::new("1-2iN 3+4iHz");
    assert_eq!(reader.read::<UNewton, Complex<f64>>(), Ok(CNewton::new(Complex::new(1.0, -2.0))));
    assert!(matches!(
      reader.read::<UNewton, Complex<f64>>(),
      Err(ParseQuantityError::UnitMismatch { found, .. }) if found == "Hz"
    ));
  }
}
