//! The fixed unit table and base-value conversions.
//!
//! Every unit is an affine map onto its kind's base unit:
//! `base = value * scale + offset`. Offsets only appear for temperature
//! scales and gauge pressures.

use crate::error::{UnitError, UnitResult};
use crate::quantity::QuantityKind;

/// One entry of the unit table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDef {
    /// Canonical symbol as simulators report it.
    pub symbol: &'static str,
    /// Alternative spellings accepted on lookup.
    pub aliases: &'static [&'static str],
    pub kind: QuantityKind,
    pub scale: f64,
    pub offset: f64,
}

impl UnitDef {
    #[inline]
    pub fn to_base(&self, value: f64) -> f64 {
        value * self.scale + self.offset
    }

    #[inline]
    pub fn from_base(&self, value: f64) -> f64 {
        (value - self.offset) / self.scale
    }

    fn matches(&self, unit: &str) -> bool {
        self.symbol == unit || self.aliases.contains(&unit)
    }
}

const fn unit(
    symbol: &'static str,
    aliases: &'static [&'static str],
    kind: QuantityKind,
    scale: f64,
    offset: f64,
) -> UnitDef {
    UnitDef {
        symbol,
        aliases,
        kind,
        scale,
        offset,
    }
}

use QuantityKind as Q;

const ATM_PA: f64 = 101_325.0;
const LBM_KG: f64 = 0.453_592_37;
const FT_M: f64 = 0.3048;
const BBL_M3: f64 = 0.158_987_294_928;

static UNITS: &[UnitDef] = &[
    // Temperature
    unit("K", &["kelvin"], Q::Temperature, 1.0, 0.0),
    unit("C", &["°C", "degC", "celsius"], Q::Temperature, 1.0, 273.15),
    unit(
        "F",
        &["°F", "degF", "fahrenheit"],
        Q::Temperature,
        5.0 / 9.0,
        459.67 * 5.0 / 9.0,
    ),
    unit("R", &["°R", "degR", "rankine"], Q::Temperature, 5.0 / 9.0, 0.0),
    // Pressure
    unit("Pa", &["pascal"], Q::Pressure, 1.0, 0.0),
    unit("kPa", &[], Q::Pressure, 1e3, 0.0),
    unit("MPa", &[], Q::Pressure, 1e6, 0.0),
    unit("bar", &["bara"], Q::Pressure, 1e5, 0.0),
    unit("barg", &[], Q::Pressure, 1e5, ATM_PA),
    unit("kPag", &[], Q::Pressure, 1e3, ATM_PA),
    unit("atm", &[], Q::Pressure, ATM_PA, 0.0),
    unit("psi", &["psia", "lbf/in2"], Q::Pressure, 6_894.757_293_168_361, 0.0),
    unit("psig", &[], Q::Pressure, 6_894.757_293_168_361, ATM_PA),
    unit("kgf/cm2", &["kgf/cm²"], Q::Pressure, 98_066.5, 0.0),
    unit("mmHg", &[], Q::Pressure, 133.322_387_415, 0.0),
    // Mass flow
    unit("kg/s", &[], Q::MassFlow, 1.0, 0.0),
    unit("kg/min", &[], Q::MassFlow, 1.0 / 60.0, 0.0),
    unit("kg/h", &["kg/hr"], Q::MassFlow, 1.0 / 3600.0, 0.0),
    unit("g/s", &[], Q::MassFlow, 1e-3, 0.0),
    unit("t/h", &["ton/h"], Q::MassFlow, 1e3 / 3600.0, 0.0),
    unit("lb/h", &["lbm/h"], Q::MassFlow, LBM_KG / 3600.0, 0.0),
    // Molar flow
    unit("mol/s", &[], Q::MolarFlow, 1.0, 0.0),
    unit("mol/h", &[], Q::MolarFlow, 1.0 / 3600.0, 0.0),
    unit("kmol/s", &[], Q::MolarFlow, 1e3, 0.0),
    unit("kmol/h", &["kmol/hr"], Q::MolarFlow, 1e3 / 3600.0, 0.0),
    unit("lbmol/h", &[], Q::MolarFlow, 1e3 * LBM_KG / 3600.0, 0.0),
    // Volumetric flow
    unit("m3/s", &["m³/s"], Q::VolumetricFlow, 1.0, 0.0),
    unit("m3/h", &["m³/h"], Q::VolumetricFlow, 1.0 / 3600.0, 0.0),
    unit("m3/d", &["m³/d"], Q::VolumetricFlow, 1.0 / 86_400.0, 0.0),
    unit("L/s", &[], Q::VolumetricFlow, 1e-3, 0.0),
    unit("L/min", &[], Q::VolumetricFlow, 1e-3 / 60.0, 0.0),
    unit("bbl/d", &[], Q::VolumetricFlow, BBL_M3 / 86_400.0, 0.0),
    // Heat flow
    unit("W", &[], Q::HeatFlow, 1.0, 0.0),
    unit("kW", &[], Q::HeatFlow, 1e3, 0.0),
    unit("MW", &[], Q::HeatFlow, 1e6, 0.0),
    unit("kJ/h", &[], Q::HeatFlow, 1e3 / 3600.0, 0.0),
    unit("BTU/h", &["Btu/h"], Q::HeatFlow, 0.293_071_070_172_222, 0.0),
    // Specific enthalpy
    unit("J/kg", &[], Q::SpecificEnthalpy, 1.0, 0.0),
    unit("kJ/kg", &[], Q::SpecificEnthalpy, 1e3, 0.0),
    unit("BTU/lb", &["Btu/lbm"], Q::SpecificEnthalpy, 2_326.0, 0.0),
    // Specific entropy
    unit(
        "J/[kg.K]",
        &["J/kg.K", "J/(kg.K)", "J/kgK"],
        Q::SpecificEntropy,
        1.0,
        0.0,
    ),
    unit(
        "kJ/[kg.K]",
        &["kJ/kg.K", "kJ/(kg.K)", "kJ/kgK"],
        Q::SpecificEntropy,
        1e3,
        0.0,
    ),
    // Density
    unit("kg/m3", &["kg/m³"], Q::Density, 1.0, 0.0),
    unit("g/cm3", &["g/cm³"], Q::Density, 1e3, 0.0),
    unit("lb/ft3", &["lbm/ft3"], Q::Density, LBM_KG / (FT_M * FT_M * FT_M), 0.0),
    // Length
    unit("m", &[], Q::Length, 1.0, 0.0),
    unit("mm", &[], Q::Length, 1e-3, 0.0),
    unit("cm", &[], Q::Length, 1e-2, 0.0),
    unit("km", &[], Q::Length, 1e3, 0.0),
    unit("in", &[], Q::Length, 0.0254, 0.0),
    unit("ft", &[], Q::Length, FT_M, 0.0),
    // Area
    unit("m2", &["m²"], Q::Area, 1.0, 0.0),
    unit("cm2", &["cm²"], Q::Area, 1e-4, 0.0),
    unit("ft2", &["ft²"], Q::Area, FT_M * FT_M, 0.0),
    // Volume
    unit("m3", &["m³"], Q::Volume, 1.0, 0.0),
    unit("L", &["l"], Q::Volume, 1e-3, 0.0),
    unit("ft3", &["ft³"], Q::Volume, FT_M * FT_M * FT_M, 0.0),
    unit("bbl", &[], Q::Volume, BBL_M3, 0.0),
    // Time
    unit("s", &["sec"], Q::Time, 1.0, 0.0),
    unit("min", &[], Q::Time, 60.0, 0.0),
    unit("h", &["hr"], Q::Time, 3600.0, 0.0),
    unit("d", &["day"], Q::Time, 86_400.0, 0.0),
    // Mass
    unit("kg", &[], Q::Mass, 1.0, 0.0),
    unit("g", &[], Q::Mass, 1e-3, 0.0),
    unit("t", &["ton"], Q::Mass, 1e3, 0.0),
    unit("lb", &["lbm"], Q::Mass, LBM_KG, 0.0),
    // Velocity
    unit("m/s", &[], Q::Velocity, 1.0, 0.0),
    unit("km/h", &[], Q::Velocity, 1.0 / 3.6, 0.0),
    unit("ft/s", &[], Q::Velocity, FT_M, 0.0),
    // Fraction
    unit("fraction", &["frac", "-"], Q::Fraction, 1.0, 0.0),
    unit("%", &["percent"], Q::Fraction, 1e-2, 0.0),
    unit("ppm", &[], Q::Fraction, 1e-6, 0.0),
];

/// Look up a unit by symbol or alias.
///
/// Matching is case-sensitive: SI prefixes differ only by case (`mPa` is not
/// `MPa`), so other spellings must be listed as aliases.
pub fn lookup(unit: &str) -> UnitResult<&'static UnitDef> {
    let trimmed = unit.trim();
    UNITS
        .iter()
        .find(|def| def.matches(trimmed))
        .ok_or_else(|| UnitError::UnknownUnit {
            unit: unit.to_string(),
        })
}

/// Convert a value expressed in `unit` into its SI base value.
pub fn to_base(unit: &str, value: f64) -> UnitResult<f64> {
    Ok(lookup(unit)?.to_base(value))
}

/// Convert an SI base value into `unit`.
pub fn from_base(unit: &str, value: f64) -> UnitResult<f64> {
    Ok(lookup(unit)?.from_base(value))
}

/// Convert between two units of the same quantity kind.
pub fn convert(value: f64, from: &str, to: &str) -> UnitResult<f64> {
    let from_def = lookup(from)?;
    let to_def = lookup(to)?;
    if from_def.kind != to_def.kind {
        return Err(UnitError::KindMismatch {
            from: from.to_string(),
            from_kind: from_def.kind,
            to: to.to_string(),
            to_kind: to_def.kind,
        });
    }
    Ok(to_def.from_base(from_def.to_base(value)))
}

/// Quantity kind of a unit string, `None` when the unit is not recognized.
pub fn classify(unit: &str) -> Option<QuantityKind> {
    lookup(unit).ok().map(|def| def.kind)
}

/// All units in table order.
pub fn supported_units() -> impl Iterator<Item = &'static UnitDef> {
    UNITS.iter()
}

/// Source of unit-to-quantity classification.
///
/// The simulator host usually owns the authoritative table; `UnitTable`
/// answers from the built-in one.
pub trait UnitClassifier {
    fn unit_type(&self, unit: &str) -> Option<QuantityKind>;
}

/// Classifier backed by the built-in unit table.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitTable;

impl UnitClassifier for UnitTable {
    fn unit_type(&self, unit: &str) -> Option<QuantityKind> {
        classify(unit)
    }
}
