use std::f64::consts::PI;

use typenum::{U0, U1, U2, U3, U4, U5, U6};

use super::Si;
use crate::{
  dims::{Basis, Dimensionless},
  quantity::Quantity,
  unit,
};

pub type Unitless = Dimensionless<Si>;
pub type Meter = Basis<Si, U0>;
pub type Kilogram = Basis<Si, U1>;
pub type Second = Basis<Si, U2>;
pub type Ampere = Basis<Si, U3>;
pub type Kelvin = Basis<Si, U4>;
pub type Mole = Basis<Si, U5>;
pub type Candela = Basis<Si, U6>;

pub type Radian = Unitless;
pub type Steradian = Unitless;

pub type Number<V = f64> = Quantity<Unitless, V>;
pub type Length<V = f64> = Quantity<Meter, V>;
pub type Mass<V = f64> = Quantity<Kilogram, V>;
pub type Time<V = f64> = Quantity<Second, V>;
pub type Current<V = f64> = Quantity<Ampere, V>;
pub type Temperature<V = f64> = Quantity<Kelvin, V>;
pub type Amount<V = f64> = Quantity<Mole, V>;
pub type LuminousIntensity<V = f64> = Quantity<Candela, V>;
pub type Angle<V = f64> = Quantity<Radian, V>;
pub type SolidAngle<V = f64> = Quantity<Steradian, V>;

impl From<f64> for Number {
  fn from(value: f64) -> Self {
    Number::new(value)
  }
}

impl From<Number> for f64 {
  fn from(value: Number) -> Self {
    value.into_magnitude()
  }
}

unit!(Number, percent, 1e-2);
unit!(Number, parts_per_million, 1e-6);

unit!(Time, second, 1.0);
unit!(Time, millisecond, 1e-3);
unit!(Time, microsecond, 1e-6);
unit!(Time, nanosecond, 1e-9);
unit!(Time, minute, 60.0);
unit!(Time, hour, 60.0 * 60.0);
unit!(Time, day, 60.0 * 60.0 * 24.0);

unit!(Length, meter, 1.0);
unit!(Length, centimeter, 1e-2);
unit!(Length, millimeter, 1e-3);
unit!(Length, micrometer, 1e-6);
unit!(Length, nanometer, 1e-9);
unit!(Length, kilometer, 1e3);
unit!(Length, inch, 0.0254);
unit!(Length, foot, 0.3048);
unit!(Length, yard, 0.9144);
unit!(Length, mile, 1609.344);

unit!(Mass, kilogram, 1.0);
unit!(Mass, gram, 1e-3);
unit!(Mass, pound, 0.45359237);
unit!(Mass, ounce, 0.028349523125);

unit!(Current, ampere, 1.0);
unit!(Current, milliampere, 1e-3);

unit!(Temperature, kelvin, 1.0);
unit!(Temperature, celsius, 1.0, 273.15);
unit!(Temperature, fahrenheit, 5.0 / 9.0, 459.67 * 5.0 / 9.0);

unit!(Amount, mole, 1.0);
unit!(LuminousIntensity, candela, 1.0);

unit!(Angle, radian, 1.0);
unit!(Angle, degree, PI / 180.0);
unit!(SolidAngle, steradian, 1.0);
