//! Thermophysical properties of dry air.
//!
//! Each caloric and transport property is a degree-six curve fit of the data
//! tabulated in Kays and Crawford, *Convective Heat and Mass Transfer*. The
//! fits are polynomials in Rankine temperature, valid from 180 to 4500 °R,
//! and are continued linearly above that range (see [`crate::curve_fit`]).
//! Values are computed in the correlations' original English units and
//! converted to SI on the way out.
//!
//! Inputs are not range-checked. Non-physical temperatures follow ordinary
//! IEEE 754 arithmetic, so a zero temperature passed to [`density`] yields an
//! infinite density rather than an error.

use uom::si::{
    available_energy::joule_per_kilogram,
    dynamic_viscosity::pascal_second,
    f64::{
        DynamicViscosity, MassDensity, Pressure, Ratio, SpecificHeatCapacity,
        ThermalConductivity, ThermodynamicTemperature,
    },
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_rankine,
};

use crate::curve_fit::CurveFit;
use crate::units::{SpecificEnthalpy, SpecificGasConstant};

/// Specific gas constant for dry air, J/(kg·K).
const GAS_CONSTANT: f64 = 286.9;

// Conversion factors from the correlations' English units to SI.
const SPECIFIC_HEAT_TO_SI: f64 = 4184.0; // Btu/(lbm·°R) → J/(kg·K)
const ENTHALPY_TO_SI: f64 = 2326.0; // Btu/lbm → J/kg
const CONDUCTIVITY_TO_SI: f64 = 44.371; // Btu/(s·ft·°R) → J/(s·m·K)
const VISCOSITY_TO_SI: f64 = 1.488163944; // lbm/(ft·s) → Pa·s

/// Specific heat fit, Btu/(lbm·°R).
const SPECIFIC_HEAT: CurveFit = CurveFit::new([
    0.2567471,
    -8.577731e-5,
    1.373991e-7,
    -8.044221e-11,
    2.469929e-14,
    -3.925129e-18,
    2.605416e-22,
]);

/// Enthalpy fit, Btu/lbm, integrated from the specific heat fit (`cp = dh/dT`).
const ENTHALPY: CurveFit = SPECIFIC_HEAT.integral();

/// Ratio of specific heats fit, dimensionless.
const GAMMA: CurveFit = CurveFit::new([
    1.362246,
    1.949838e-4,
    -3.178944e-7,
    1.905998e-10,
    -5.777532e-14,
    8.785717e-18,
    -5.377543e-22,
]);

/// Thermal conductivity fit, Btu/(s·ft·°R).
const THERMAL_CONDUCTIVITY: CurveFit = CurveFit::new([
    -2.575394e-7,
    1.038856e-8,
    -5.120556e-12,
    2.387962e-15,
    -5.654767e-19,
    5.395641e-23,
    0.0,
]);

/// Prandtl number fit, dimensionless.
const PRANDTL: CurveFit = CurveFit::new([
    0.869641,
    -5.661112e-4,
    7.014822e-7,
    -4.185312e-10,
    1.298091e-13,
    -2.014177e-17,
    1.231103e-21,
]);

/// Dynamic viscosity fit, lbm/(ft·s).
const VISCOSITY: CurveFit = CurveFit::new([
    3.028189e-8,
    2.911495e-8,
    -1.383959e-11,
    4.897591e-15,
    -8.809283e-19,
    6.235209e-23,
    0.0,
]);

/// Specific heat of air at constant pressure.
#[must_use]
pub fn specific_heat(temperature: ThermodynamicTemperature) -> SpecificHeatCapacity {
    let cp = SPECIFIC_HEAT.evaluate(temperature.get::<degree_rankine>());
    SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(cp * SPECIFIC_HEAT_TO_SI)
}

/// Specific enthalpy of air, relative to the fit's zero-temperature datum.
///
/// The enthalpy fit is the antiderivative of the specific heat fit with a
/// zero integration constant, so differences between two temperatures are
/// meaningful while individual values carry an arbitrary offset.
#[must_use]
pub fn enthalpy(temperature: ThermodynamicTemperature) -> SpecificEnthalpy {
    let h = ENTHALPY.evaluate(temperature.get::<degree_rankine>());
    SpecificEnthalpy::new::<joule_per_kilogram>(h * ENTHALPY_TO_SI)
}

/// Ratio of specific heats of air, `cp/cv`.
#[must_use]
pub fn ratio_of_specific_heats(temperature: ThermodynamicTemperature) -> Ratio {
    Ratio::new::<ratio>(GAMMA.evaluate(temperature.get::<degree_rankine>()))
}

/// Thermal conductivity of air.
#[must_use]
pub fn thermal_conductivity(temperature: ThermodynamicTemperature) -> ThermalConductivity {
    let k = THERMAL_CONDUCTIVITY.evaluate(temperature.get::<degree_rankine>());
    ThermalConductivity::new::<watt_per_meter_kelvin>(k * CONDUCTIVITY_TO_SI)
}

/// Prandtl number of air.
#[must_use]
pub fn prandtl_number(temperature: ThermodynamicTemperature) -> Ratio {
    Ratio::new::<ratio>(PRANDTL.evaluate(temperature.get::<degree_rankine>()))
}

/// Dynamic viscosity of air.
#[must_use]
pub fn dynamic_viscosity(temperature: ThermodynamicTemperature) -> DynamicViscosity {
    let mu = VISCOSITY.evaluate(temperature.get::<degree_rankine>());
    DynamicViscosity::new::<pascal_second>(mu * VISCOSITY_TO_SI)
}

/// Density of air from the ideal gas equation of state, `ρ = p/(R·T)`.
#[must_use]
pub fn density(temperature: ThermodynamicTemperature, pressure: Pressure) -> MassDensity {
    let r = SpecificGasConstant::new::<joule_per_kilogram_kelvin>(GAS_CONSTANT);
    pressure / (r * temperature)
}
