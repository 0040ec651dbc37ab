use super::{Candela, Meter, Steradian};
use crate::{
  algebra::{Product, Quotient, Squared},
  quantity::Quantity,
  unit,
};

/// Candela steradians. Steradians are dimensionless, so this is the same
/// unit as [`Candela`] and prints as "cd".
pub type Lumen = Product<Candela, Steradian>;
pub type Lux = Quotient<Lumen, Squared<Meter>>;

pub type LuminousFlux<V = f64> = Quantity<Lumen, V>;
pub type Illuminance<V = f64> = Quantity<Lux, V>;

unit!(LuminousFlux, lumen, 1.0);
unit!(Illuminance, lux, 1.0);
unit!(Illuminance, foot_candle, 10.763910416709722);
