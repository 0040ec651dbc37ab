use super::{MeterCubed, Mole, Second, Unitless};
use crate::{algebra::Quotient, quantity::Quantity, unit};

pub type Katal = Quotient<Mole, Second>;
pub type MolInv = Quotient<Unitless, Mole>;
pub type MolePerMeterCubed = Quotient<Mole, MeterCubed>;

pub type CatalyticActivity<V = f64> = Quantity<Katal, V>;
pub type PerAmount<V = f64> = Quantity<MolInv, V>;
pub type Concentration<V = f64> = Quantity<MolePerMeterCubed, V>;

unit!(CatalyticActivity, katal, 1.0);
unit!(Concentration, molar, 1e3);
unit!(Concentration, millimolar, 1.0);

/// Avogadro constant, exact since the 2019 SI redefinition.
pub const AVOGADRO: PerAmount = PerAmount::new(6.02214076e23);
