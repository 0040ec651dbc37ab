use std::f64::consts::PI;

use super::{Hertz, Meter, Second};
use crate::{
  algebra::{Cubed, Quotient, Squared},
  quantity::Quantity,
  unit,
};

pub type MeterPerSecond = Quotient<Meter, Second>;
pub type MeterPerSecondSquared = Quotient<Meter, Squared<Second>>;
pub type MeterPerSecondCubed = Quotient<Meter, Cubed<Second>>;
pub type RadianPerSecond = Hertz;
pub type RadianPerSecondSquared = Quotient<Hertz, Second>;

pub type Velocity<V = f64> = Quantity<MeterPerSecond, V>;
pub type Acceleration<V = f64> = Quantity<MeterPerSecondSquared, V>;
pub type Jerk<V = f64> = Quantity<MeterPerSecondCubed, V>;

pub type AngularVelocity<V = f64> = Quantity<RadianPerSecond, V>;
pub type AngularAcceleration<V = f64> = Quantity<RadianPerSecondSquared, V>;

unit!(Velocity, meters_per_second, 1.0);
unit!(Velocity, inches_per_second, 0.0254);
unit!(Velocity, feet_per_second, 0.3048);
unit!(Velocity, kilometers_per_hour, 1000.0 / 3600.0);
unit!(Velocity, miles_per_hour, 0.44704);

unit!(Acceleration, meters_per_second2, 1.0);
unit!(Acceleration, feet_per_second2, 0.3048);
unit!(Acceleration, standard_gravity, 9.80665);

unit!(Jerk, meters_per_second3, 1.0);

unit!(AngularVelocity, rads_per_second, 1.0);
unit!(AngularVelocity, degrees_per_second, PI / 180.0);
unit!(AngularVelocity, revolutions_per_minute, 2.0 * PI / 60.0);

unit!(AngularAcceleration, rads_per_second2, 1.0);
unit!(AngularAcceleration, degrees_per_second2, PI / 180.0);

pub use self::revolutions_per_minute as rpm;
