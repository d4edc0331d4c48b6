//! Unit definitions and conversion
//!
//! Each physical quantity has a closed set of supported units and a
//! canonical unit used as the conversion pivot (meter, newton, radian).
//! Routing every conversion through the pivot keeps the factor table at
//! one entry per unit and makes round-trips exact to floating-point
//! precision.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Supported length units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    #[serde(rename = "m")]
    Meter,
    #[serde(rename = "mm")]
    Millimeter,
    #[serde(rename = "cm")]
    Centimeter,
    #[serde(rename = "ft")]
    Foot,
    #[serde(rename = "in")]
    Inch,
}

impl LengthUnit {
    /// Meters per one of this unit
    fn meters_per_unit(self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Millimeter => 1e-3,
            LengthUnit::Centimeter => 1e-2,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Inch => 0.0254,
        }
    }

    /// Short unit code used in serialized data
    pub fn code(self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Foot => "ft",
            LengthUnit::Inch => "in",
        }
    }

    /// Parse a short unit code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "m" => Some(LengthUnit::Meter),
            "mm" => Some(LengthUnit::Millimeter),
            "cm" => Some(LengthUnit::Centimeter),
            "ft" => Some(LengthUnit::Foot),
            "in" => Some(LengthUnit::Inch),
            _ => None,
        }
    }
}

/// Supported force units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForceUnit {
    #[serde(rename = "N")]
    Newton,
    #[serde(rename = "kN")]
    Kilonewton,
    #[serde(rename = "kip")]
    Kip,
    #[serde(rename = "tonf")]
    TonForce,
}

impl ForceUnit {
    /// Newtons per one of this unit
    fn newtons_per_unit(self) -> f64 {
        match self {
            ForceUnit::Newton => 1.0,
            ForceUnit::Kilonewton => 1e3,
            ForceUnit::Kip => 4448.221_615_260_5,
            ForceUnit::TonForce => 9806.65,
        }
    }

    /// Short unit code used in serialized data
    pub fn code(self) -> &'static str {
        match self {
            ForceUnit::Newton => "N",
            ForceUnit::Kilonewton => "kN",
            ForceUnit::Kip => "kip",
            ForceUnit::TonForce => "tonf",
        }
    }

    /// Parse a short unit code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "N" => Some(ForceUnit::Newton),
            "kN" => Some(ForceUnit::Kilonewton),
            "kip" => Some(ForceUnit::Kip),
            "tonf" => Some(ForceUnit::TonForce),
            _ => None,
        }
    }
}

/// Supported angle units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AngleUnit {
    #[serde(rename = "deg")]
    Degree,
    #[serde(rename = "rad")]
    Radian,
}

impl AngleUnit {
    /// Radians per one of this unit
    fn radians_per_unit(self) -> f64 {
        match self {
            AngleUnit::Degree => PI / 180.0,
            AngleUnit::Radian => 1.0,
        }
    }

    /// Short unit code used in serialized data
    pub fn code(self) -> &'static str {
        match self {
            AngleUnit::Degree => "deg",
            AngleUnit::Radian => "rad",
        }
    }

    /// Parse a short unit code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "deg" => Some(AngleUnit::Degree),
            "rad" => Some(AngleUnit::Radian),
            _ => None,
        }
    }
}

/// Convert a length between units
///
/// Same-unit conversion returns the input unchanged.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    if from == to {
        return value;
    }
    value * from.meters_per_unit() / to.meters_per_unit()
}

/// Convert a force between units
///
/// Same-unit conversion returns the input unchanged.
pub fn convert_force(value: f64, from: ForceUnit, to: ForceUnit) -> f64 {
    if from == to {
        return value;
    }
    value * from.newtons_per_unit() / to.newtons_per_unit()
}

/// Convert an angle between units
///
/// Same-unit conversion returns the input unchanged.
pub fn convert_angle(value: f64, from: AngleUnit, to: AngleUnit) -> f64 {
    if from == to {
        return value;
    }
    value * from.radians_per_unit() / to.radians_per_unit()
}

/// A named bundle selecting one unit per physical quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSystem {
    /// Length unit
    pub length: LengthUnit,
    /// Force unit
    pub force: ForceUnit,
    /// Angle unit
    pub angle: AngleUnit,
}

/// SI-flavored defaults: meter / kilonewton / degree
pub const SI_UNITS: UnitSystem = UnitSystem {
    length: LengthUnit::Meter,
    force: ForceUnit::Kilonewton,
    angle: AngleUnit::Degree,
};

/// US customary units: foot / kip / degree
pub const IMPERIAL_UNITS: UnitSystem = UnitSystem {
    length: LengthUnit::Foot,
    force: ForceUnit::Kip,
    angle: AngleUnit::Degree,
};

impl Default for UnitSystem {
    fn default() -> Self {
        SI_UNITS
    }
}

impl UnitSystem {
    /// Build a system from short unit codes
    pub fn from_codes(length: &str, force: &str, angle: &str) -> ModelResult<Self> {
        Ok(Self {
            length: LengthUnit::from_code(length).ok_or_else(|| ModelError::UnknownUnit {
                quantity: "length",
                code: length.to_string(),
            })?,
            force: ForceUnit::from_code(force).ok_or_else(|| ModelError::UnknownUnit {
                quantity: "force",
                code: force.to_string(),
            })?,
            angle: AngleUnit::from_code(angle).ok_or_else(|| ModelError::UnknownUnit {
                quantity: "angle",
                code: angle.to_string(),
            })?,
        })
    }

    /// Get the short codes as (length, force, angle)
    pub fn codes(&self) -> (&'static str, &'static str, &'static str) {
        (self.length.code(), self.force.code(), self.angle.code())
    }
}

/// Converter bound to a fixed (source, target) pair of unit systems
///
/// Immutable once constructed; every call is a pure conversion.
#[derive(Debug, Clone, Copy)]
pub struct UnitConverter {
    source: UnitSystem,
    target: UnitSystem,
}

impl UnitConverter {
    /// Create a converter from `source` to `target`
    pub fn new(source: UnitSystem, target: UnitSystem) -> Self {
        Self { source, target }
    }

    /// Convert a length from the source to the target system
    pub fn length(&self, value: f64) -> f64 {
        convert_length(value, self.source.length, self.target.length)
    }

    /// Convert a force from the source to the target system
    pub fn force(&self, value: f64) -> f64 {
        convert_force(value, self.source.force, self.target.force)
    }

    /// Convert an angle from the source to the target system
    pub fn angle(&self, value: f64) -> f64 {
        convert_angle(value, self.source.angle, self.target.angle)
    }

    /// Get the converter for the opposite direction
    pub fn inverse(&self) -> Self {
        Self {
            source: self.target,
            target: self.source,
        }
    }
}
