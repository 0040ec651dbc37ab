use super::{Kilogram, Meter, Second, Unitless};
use crate::{
  algebra::{Cubed, Product, Quotient, Squared},
  quantity::Quantity,
  unit,
};

pub type Hertz = Quotient<Unitless, Second>;
pub type Newton = Quotient<Product<Kilogram, Meter>, Squared<Second>>;
pub type Pascal = Quotient<Newton, Squared<Meter>>;
pub type Joule = Product<Newton, Meter>;
pub type Watt = Quotient<Joule, Second>;
pub type MeterSquared = Squared<Meter>;
pub type MeterCubed = Cubed<Meter>;
pub type KilogramMeterSquared = Product<Kilogram, MeterSquared>;
pub type KilogramPerMeterCubed = Quotient<Kilogram, MeterCubed>;

pub type Frequency<V = f64> = Quantity<Hertz, V>;
pub type Force<V = f64> = Quantity<Newton, V>;
pub type Pressure<V = f64> = Quantity<Pascal, V>;
pub type Energy<V = f64> = Quantity<Joule, V>;
pub type Power<V = f64> = Quantity<Watt, V>;
pub type Area<V = f64> = Quantity<MeterSquared, V>;
pub type Volume<V = f64> = Quantity<MeterCubed, V>;
pub type Density<V = f64> = Quantity<KilogramPerMeterCubed, V>;
pub type MomentOfInertia<V = f64> = Quantity<KilogramMeterSquared, V>;
/// Newton metres. Shares its unit, and so its "J" symbol, with [`Energy`].
pub type Torque<V = f64> = Quantity<Joule, V>;

unit!(Frequency, hertz, 1.0);
unit!(Frequency, kilohertz, 1e3);
unit!(Frequency, megahertz, 1e6);

unit!(Force, newton, 1.0);
unit!(Force, kilonewton, 1e3);
unit!(Force, pound_force, 4.4482216152605);

unit!(Pressure, pascal, 1.0);
unit!(Pressure, kilopascal, 1e3);
unit!(Pressure, bar, 1e5);
unit!(Pressure, psi, 6894.757293168);

unit!(Energy, joule, 1.0);
unit!(Energy, kilojoule, 1e3);
unit!(Energy, calorie, 4.184);
unit!(Energy, watt_hour, 3600.0);
unit!(Energy, kilowatt_hour, 3.6e6);

unit!(Power, watt, 1.0);
unit!(Power, kilowatt, 1e3);

unit!(Area, square_meter, 1.0);
unit!(Area, square_centimeter, 1e-4);

unit!(Volume, cubic_meter, 1.0);
unit!(Volume, liter, 1e-3);
unit!(Volume, milliliter, 1e-6);
unit!(Volume, gallon, 3.785411784e-3);

unit!(Density, kilograms_per_cubic_meter, 1.0);

unit!(Torque, newton_meter, 1.0);

unit!(MomentOfInertia, kgm2, 1.0);

#[cfg(test)]
mod tests {
  use approx::assert_relative_eq;
  use typenum::assert_type_eq;

  use super::*;
  use crate::si::{kilogram, meter, second, Length, Mass, Time};

  #[test]
  fn test_derivations() {
    let f: Force = (2.0 * kilogram) * (3.0 * meter) / ((1.0 * second) * (1.0 * second));
    assert_eq!(f, 6.0 * newton);

    let e: Energy = f * Length::new(2.0);
    assert_eq!(e, Energy::new(12.0));

    let p: Power = e / Time::new(4.0);
    assert_eq!(p, 3.0 * watt);

    let pressure: Pressure = Force::new(10.0) / Area::new(2.0);
    assert_eq!(pressure, 5.0 * pascal);

    let rho: Density = Mass::new(1000.0) / (1.0 * cubic_meter);
    assert_eq!(rho, 1000.0 * kilograms_per_cubic_meter);

    assert_type_eq!(Torque, Energy);
    assert_type_eq!(<Hertz as crate::algebra::InverseUnit>::Output, Second);
  }

  #[test]
  fn test_constants() {
    assert_eq!(1.0 * bar, 100.0 * kilopascal);
    assert_eq!(1.0 * watt_hour, 3600.0 * joule);
    assert_eq!(1.0 * kilowatt_hour, 1000.0 * watt_hour);
    assert_eq!(1.0 * calorie, Energy::new(4.184));
    assert_relative_eq!(1000.0 * liter, 1.0 * cubic_meter);
    assert_relative_eq!(1.0 * gallon, 3.785411784 * liter, max_relative = Volume::new(1e-12));
    assert_relative_eq!(1.0 * newton_meter, 1.0 * joule);
  }

  #[test]
  fn test_display() {
    assert_eq!((2.0 * newton).to_string(), "2N");
    assert_eq!(Energy::new(1.5).to_string(), "1.5J");
    assert_eq!(Area::new(4.0).to_string(), "4m^2");
    assert_eq!(Density::new(997.0).to_string(), "997m^-3kg");
    assert_eq!(MomentOfInertia::new(0.25).to_string(), "0.25m^2kg");
  }
}
