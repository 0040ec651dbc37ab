use super::{Hertz, Joule, Kilogram};
use crate::{algebra::Quotient, quantity::Quantity, unit};

pub type Becquerel = Hertz;
pub type Gray = Quotient<Joule, Kilogram>;
pub type Sievert = Gray;

pub type Activity<V = f64> = Quantity<Becquerel, V>;
pub type AbsorbedDose<V = f64> = Quantity<Gray, V>;
pub type EquivalentDose<V = f64> = Quantity<Sievert, V>;

unit!(Activity, becquerel, 1.0);
unit!(Activity, curie, 3.7e10);
unit!(AbsorbedDose, gray, 1.0);
unit!(AbsorbedDose, milligray, 1e-3);
unit!(EquivalentDose, sievert, 1.0);
unit!(EquivalentDose, millisievert, 1e-3);

#[cfg(test)]
mod tests {
  use super::*;
  use crate::si::{joule, kilogram};

  #[test]
  fn test_dose() {
    let dose: AbsorbedDose = (3.0 * joule) / (1.5 * kilogram);
    assert_eq!(dose, 2.0 * gray);
    assert_eq!(dose.to_string(), "2Gy");
    // Same unit, so the same symbol
    assert_eq!((1.0 * sievert).to_string(), "1Gy");
    assert_eq!((1.0 * curie).to_string(), "37000000000Hz");
  }
}
