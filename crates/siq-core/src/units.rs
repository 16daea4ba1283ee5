//! Named SI units and quantities
//!
//! To add a quantity, declare its unit as an [`SiUnit`] alias and its
//! quantity alias over [`Quantity`]. Register it in
//! [`TypeRegistry::with_builtin_quantities`](crate::reflect::TypeRegistry::with_builtin_quantities)
//! if it should be known by name.

use crate::dimension::SiUnit;
use crate::quantity::Quantity;
use typenum::{N1, N2, P1, Z0};

/// Dimension of a pure number
pub type Dimensionless = SiUnit<Z0, Z0, Z0, Z0, Z0, Z0, Z0>;

// Base units
pub type Meter = SiUnit<P1, Z0, Z0, Z0, Z0, Z0, Z0>;
pub type Kilogram = SiUnit<Z0, P1, Z0, Z0, Z0, Z0, Z0>;
pub type Second = SiUnit<Z0, Z0, P1, Z0, Z0, Z0, Z0>;
pub type Ampere = SiUnit<Z0, Z0, Z0, P1, Z0, Z0, Z0>;
pub type Kelvin = SiUnit<Z0, Z0, Z0, Z0, P1, Z0, Z0>;
pub type Mole = SiUnit<Z0, Z0, Z0, Z0, Z0, P1, Z0>;
pub type Candela = SiUnit<Z0, Z0, Z0, Z0, Z0, Z0, P1>;

// Derived units
pub type Hertz = SiUnit<Z0, Z0, N1, Z0, Z0, Z0, Z0>;
pub type Newton = SiUnit<P1, P1, N2, Z0, Z0, Z0, Z0>;
pub type Pascal = SiUnit<N1, P1, N2, Z0, Z0, Z0, Z0>;
pub type MeterPerSecond = SiUnit<P1, Z0, N1, Z0, Z0, Z0, Z0>;
pub type MeterPerSecondSquared = SiUnit<P1, Z0, N2, Z0, Z0, Z0, Z0>;

pub type Length<V = f64> = Quantity<Meter, V>;
pub type Mass<V = f64> = Quantity<Kilogram, V>;
pub type Time<V = f64> = Quantity<Second, V>;
pub type ElectricCurrent<V = f64> = Quantity<Ampere, V>;
pub type Temperature<V = f64> = Quantity<Kelvin, V>;
pub type AmountOfSubstance<V = f64> = Quantity<Mole, V>;
pub type LuminousIntensity<V = f64> = Quantity<Candela, V>;

pub type Frequency<V = f64> = Quantity<Hertz, V>;
pub type Force<V = f64> = Quantity<Newton, V>;
pub type Pressure<V = f64> = Quantity<Pascal, V>;
pub type Velocity<V = f64> = Quantity<MeterPerSecond, V>;
pub type Acceleration<V = f64> = Quantity<MeterPerSecondSquared, V>;

/// SI magnitude prefixes as factors
pub mod prefix {
    pub const YOCTO: f64 = 1e-24;
    pub const ZEPTO: f64 = 1e-21;
    pub const ATTO: f64 = 1e-18;
    pub const FEMTO: f64 = 1e-15;
    pub const PICO: f64 = 1e-12;
    pub const NANO: f64 = 1e-9;
    pub const MICRO: f64 = 1e-6;
    pub const MILLI: f64 = 1e-3;
    pub const CENTI: f64 = 1e-2;
    pub const DECI: f64 = 1e-1;
    pub const NO_PREFIX: f64 = 1.0;
    pub const DECA: f64 = 1e1;
    pub const HECTO: f64 = 1e2;
    pub const KILO: f64 = 1e3;
    pub const MEGA: f64 = 1e6;
    pub const GIGA: f64 = 1e9;
    pub const TERA: f64 = 1e12;
    pub const PETA: f64 = 1e15;
    pub const EXA: f64 = 1e18;
    pub const ZETTA: f64 = 1e21;
    pub const YOTTA: f64 = 1e24;

    /// Factor of a single-character prefix, `None` if the character is not one
    pub fn factor(prefix: char) -> Option<f64> {
        Some(match prefix {
            'y' => YOCTO,
            'z' => ZEPTO,
            'a' => ATTO,
            'f' => FEMTO,
            'p' => PICO,
            'n' => NANO,
            // micro sign and greek small mu
            'µ' | 'μ' => MICRO,
            'm' => MILLI,
            'c' => CENTI,
            'd' => DECI,
            'D' => DECA,
            'h' => HECTO,
            'k' => KILO,
            'M' => MEGA,
            'G' => GIGA,
            'T' => TERA,
            'P' => PETA,
            'E' => EXA,
            'Z' => ZETTA,
            'Y' => YOTTA,
            _ => return None,
        })
    }
}
