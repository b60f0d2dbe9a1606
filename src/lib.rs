//! # Kays & Crawford air properties
//!
//! Thermophysical properties of dry air as curve fits of the data tabulated
//! in Kays and Crawford, *Convective Heat and Mass Transfer*.
//!
//! The [`air`] module exposes one function per property: specific heat,
//! relative enthalpy, ratio of specific heats, thermal conductivity, Prandtl
//! number, dynamic viscosity, and ideal-gas density. Each correlation is a
//! degree-six polynomial in Rankine temperature, valid from 180 to 4500 °R
//! (100 to 2500 K) and continued linearly above that range. All functions
//! take and return [`uom`] quantities in SI.
//!
//! Every function is pure and stateless, so calls are safe from any number
//! of threads. Inputs are not validated; non-physical values follow ordinary
//! IEEE 754 arithmetic.
//!
//! # Example
//!
//! ```
//! use kays_crawford_air::air;
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::specific_heat_capacity::joule_per_kilogram_kelvin;
//! use uom::si::thermodynamic_temperature::kelvin;
//!
//! let t = ThermodynamicTemperature::new::<kelvin>(300.0);
//! let cp = air::specific_heat(t);
//!
//! assert!((cp.get::<joule_per_kilogram_kelvin>() - 1003.0).abs() < 5.0);
//! ```

pub mod air;
pub mod curve_fit;
pub mod units;
