//! Typed view of base-unit values.
//!
//! A base value is just an `f64` plus the kind it was normalized as. Lifting it
//! into a `uom` quantity lets downstream code do dimension-checked math
//! without re-deriving the unit.

use crate::error::UnitResult;
use crate::quantity::QuantityKind;
use crate::table::lookup;
use fx_core::units::{
    Area, Density, Length, Mass, MassRate, Power, Pressure, Ratio, SpecEnthalpy, SpecEntropy,
    Temperature, Time, Velocity, Volume, VolumeRate, jpkg, jpkgk, k, kg, kgpm3, kgps, m, m2, m3,
    m3ps, mps, pa, s, unitless, w,
};

/// A value already normalized to the base unit of `kind`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseValue {
    pub kind: QuantityKind,
    pub value: f64,
}

/// A base value lifted into its dimensioned `uom` type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypedQuantity {
    Temperature(Temperature),
    Pressure(Pressure),
    MassFlow(MassRate),
    VolumetricFlow(VolumeRate),
    HeatFlow(Power),
    SpecificEnthalpy(SpecEnthalpy),
    SpecificEntropy(SpecEntropy),
    Density(Density),
    Length(Length),
    Area(Area),
    Volume(Volume),
    Time(Time),
    Mass(Mass),
    Velocity(Velocity),
    Fraction(Ratio),
}

impl BaseValue {
    /// Normalize `value` given in `unit`.
    pub fn from_unit(unit: &str, value: f64) -> UnitResult<Self> {
        let def = lookup(unit)?;
        Ok(Self {
            kind: def.kind,
            value: def.to_base(value),
        })
    }

    /// Express the base value in `unit`. The unit's kind is not checked against
    /// `self.kind`; use [`crate::convert`] when that matters.
    pub fn in_unit(&self, unit: &str) -> UnitResult<f64> {
        Ok(lookup(unit)?.from_base(self.value))
    }

    /// Lift into a `uom` quantity. Molar flow has no SI-typed counterpart here.
    pub fn typed(&self) -> Option<TypedQuantity> {
        let v = self.value;
        let typed = match self.kind {
            QuantityKind::Temperature => TypedQuantity::Temperature(k(v)),
            QuantityKind::Pressure => TypedQuantity::Pressure(pa(v)),
            QuantityKind::MassFlow => TypedQuantity::MassFlow(kgps(v)),
            QuantityKind::MolarFlow => return None,
            QuantityKind::VolumetricFlow => TypedQuantity::VolumetricFlow(m3ps(v)),
            QuantityKind::HeatFlow => TypedQuantity::HeatFlow(w(v)),
            QuantityKind::SpecificEnthalpy => TypedQuantity::SpecificEnthalpy(jpkg(v)),
            QuantityKind::SpecificEntropy => TypedQuantity::SpecificEntropy(jpkgk(v)),
            QuantityKind::Density => TypedQuantity::Density(kgpm3(v)),
            QuantityKind::Length => TypedQuantity::Length(m(v)),
            QuantityKind::Area => TypedQuantity::Area(m2(v)),
            QuantityKind::Volume => TypedQuantity::Volume(m3(v)),
            QuantityKind::Time => TypedQuantity::Time(s(v)),
            QuantityKind::Mass => TypedQuantity::Mass(kg(v)),
            QuantityKind::Velocity => TypedQuantity::Velocity(mps(v)),
            QuantityKind::Fraction => TypedQuantity::Fraction(unitless(v)),
        };
        Some(typed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifts_celsius_into_kelvin() {
        let bv = BaseValue::from_unit("C", 25.0).unwrap();
        assert_eq!(bv.kind, QuantityKind::Temperature);
        match bv.typed() {
            Some(TypedQuantity::Temperature(t)) => assert!((t.value - 298.15).abs() < 1e-12),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn molar_flow_has_no_typed_form() {
        let bv = BaseValue::from_unit("kmol/h", 3.6).unwrap();
        assert!(bv.typed().is_none());
        assert!((bv.value - 1.0).abs() < 1e-12);
    }

    #[test]
    fn in_unit_reverses_from_unit() {
        let bv = BaseValue::from_unit("psi", 14.7).unwrap();
        assert!((bv.in_unit("psi").unwrap() - 14.7).abs() < 1e-9);
    }
}
