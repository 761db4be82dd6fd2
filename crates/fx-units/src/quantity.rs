//! Quantity kinds a unit string can belong to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dimension/quantity family of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuantityKind {
    /// Temperature (base: K)
    Temperature,
    /// Pressure (base: Pa, absolute)
    Pressure,
    /// Mass flow (base: kg/s)
    MassFlow,
    /// Molar flow (base: mol/s)
    MolarFlow,
    /// Volumetric flow (base: m3/s)
    VolumetricFlow,
    /// Heat flow / power (base: W)
    HeatFlow,
    /// Specific enthalpy (base: J/kg)
    SpecificEnthalpy,
    /// Specific entropy / heat capacity (base: J/(kg.K))
    SpecificEntropy,
    /// Density (base: kg/m3)
    Density,
    /// Length (base: m)
    Length,
    /// Area (base: m2)
    Area,
    /// Volume (base: m3)
    Volume,
    /// Time (base: s)
    Time,
    /// Mass (base: kg)
    Mass,
    /// Velocity (base: m/s)
    Velocity,
    /// Dimensionless fraction (base: 1)
    Fraction,
}

impl QuantityKind {
    /// Symbol of the base unit values of this kind are normalized to.
    pub fn base_symbol(self) -> &'static str {
        match self {
            Self::Temperature => "K",
            Self::Pressure => "Pa",
            Self::MassFlow => "kg/s",
            Self::MolarFlow => "mol/s",
            Self::VolumetricFlow => "m3/s",
            Self::HeatFlow => "W",
            Self::SpecificEnthalpy => "J/kg",
            Self::SpecificEntropy => "J/[kg.K]",
            Self::Density => "kg/m3",
            Self::Length => "m",
            Self::Area => "m2",
            Self::Volume => "m3",
            Self::Time => "s",
            Self::Mass => "kg",
            Self::Velocity => "m/s",
            Self::Fraction => "",
        }
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "Temperature"),
            Self::Pressure => write!(f, "Pressure"),
            Self::MassFlow => write!(f, "Mass Flow"),
            Self::MolarFlow => write!(f, "Molar Flow"),
            Self::VolumetricFlow => write!(f, "Volumetric Flow"),
            Self::HeatFlow => write!(f, "Heat Flow"),
            Self::SpecificEnthalpy => write!(f, "Specific Enthalpy"),
            Self::SpecificEntropy => write!(f, "Specific Entropy"),
            Self::Density => write!(f, "Density"),
            Self::Length => write!(f, "Length"),
            Self::Area => write!(f, "Area"),
            Self::Volume => write!(f, "Volume"),
            Self::Time => write!(f, "Time"),
            Self::Mass => write!(f, "Mass"),
            Self::Velocity => write!(f, "Velocity"),
            Self::Fraction => write!(f, "Fraction"),
        }
    }
}
