use super::{Ampere, Meter, Second, Watt};
use crate::{
  algebra::{Product, Quotient, Squared},
  quantity::Quantity,
  unit,
};

pub type Coulomb = Product<Second, Ampere>;
pub type Volt = Quotient<Watt, Ampere>;
pub type Farad = Quotient<Coulomb, Volt>;
pub type Ohm = Quotient<Volt, Ampere>;
pub type Siemens = Quotient<Ampere, Volt>;
pub type Weber = Product<Volt, Second>;
pub type Tesla = Quotient<Weber, Squared<Meter>>;
pub type Henry = Quotient<Weber, Ampere>;

pub type Charge<V = f64> = Quantity<Coulomb, V>;
pub type Voltage<V = f64> = Quantity<Volt, V>;
pub type Capacitance<V = f64> = Quantity<Farad, V>;
pub type Resistance<V = f64> = Quantity<Ohm, V>;
pub type Conductance<V = f64> = Quantity<Siemens, V>;
pub type MagneticFlux<V = f64> = Quantity<Weber, V>;
pub type MagneticFluxDensity<V = f64> = Quantity<Tesla, V>;
pub type Inductance<V = f64> = Quantity<Henry, V>;

unit!(Charge, coulomb, 1.0);
unit!(Charge, milliamp_hour, 3.6);

unit!(Voltage, volt, 1.0);
unit!(Voltage, millivolt, 1e-3);
unit!(Voltage, microvolt, 1e-6);

unit!(Resistance, ohm, 1.0);
unit!(Resistance, milliohm, 1e-3);
unit!(Resistance, kiloohm, 1e3);

unit!(Conductance, siemens, 1.0);

unit!(Capacitance, farad, 1.0);
unit!(Capacitance, millifarad, 1e-3);
unit!(Capacitance, microfarad, 1e-6);
unit!(Capacitance, nanofarad, 1e-9);

unit!(MagneticFlux, weber, 1.0);
unit!(MagneticFluxDensity, tesla, 1.0);
unit!(MagneticFluxDensity, gauss, 1e-4);

unit!(Inductance, henry, 1.0);
unit!(Inductance, millihenry, 1e-3);
unit!(Inductance, microhenry, 1e-6);
unit!(Inductance, nanohenry, 1e-9);

#[cfg(test)]
mod tests {
  use approx::assert_relative_eq;
  use typenum::assert_type_eq;

  use super::*;
  use crate::si::{ampere, second, Current, Energy, Power, Time};

  #[test]
  fn test_ohms_law() {
    let r: Resistance = (12.0 * volt) / (2.0 * ampere);
    assert_eq!(r, 6.0 * ohm);

    let p: Power = (12.0 * volt) * Current::new(2.0);
    assert_eq!(p.to_string(), "24W");

    let heat: Energy = p * Time::new(10.0);
    assert_eq!(heat.to_string(), "240J");

    assert_type_eq!(Siemens, <Ohm as crate::algebra::InverseUnit>::Output);
    assert_eq!((1.0 / (4.0 * ohm)).to_string(), "0.25S");
  }

  #[test]
  fn test_charge_and_capacitance() {
    let q: Charge = (2.0 * ampere) * (3.0 * second);
    assert_eq!(q, 6.0 * coulomb);
    assert_relative_eq!(1000.0 * milliamp_hour, Charge::new(3600.0), max_relative = Charge::new(1e-12));

    let c: Capacitance = q / (3.0 * volt);
    assert_eq!(c, 2.0 * farad);
  }

  #[test]
  fn test_prefixed_markers() {
    assert_relative_eq!(1.0 * millihenry, 1000.0 * microhenry, max_relative = Inductance::new(1e-12));
    assert_relative_eq!(1.0 * microhenry, 1000.0 * nanohenry, max_relative = Inductance::new(1e-12));
    assert_eq!(1.0 * kiloohm, 1000.0 * ohm);
    assert_relative_eq!(1e4 * gauss, 1.0 * tesla);
  }

  #[test]
  fn test_display() {
    assert_eq!(Voltage::new(3.3).to_string(), "3.3V");
    assert_eq!(Inductance::new(0.5).to_string(), "0.5H");
    assert_eq!(MagneticFlux::new(2.0).to_string(), "2Wb");
    assert_eq!(MagneticFluxDensity::new(2.0).to_string(), "2T");
    assert_eq!(Capacitance::new(1.0).to_string(), "1F");
    assert_eq!(Charge::new(1.0).to_string(), "1C");
  }
}
