//! Physical units and unit-tagged quantities.
//!
//! Every unit belongs to one [`Dimension`] and carries a linear factor to
//! that dimension's SI base unit. Conversion is only defined between units
//! of the same dimension.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::UnitError;

/// Physical dimension of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Speed,
    Acceleration,
    Length,
    Area,
    Angle,
    Time,
}

impl Dimension {
    pub fn name(self) -> &'static str {
        match self {
            Self::Speed => "speed",
            Self::Acceleration => "acceleration",
            Self::Length => "length",
            Self::Area => "area",
            Self::Angle => "angle",
            Self::Time => "time",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Supported units. Serialized as their canonical symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Unit {
    MeterPerSecond,
    CentimeterPerSecond,
    KilometerPerHour,
    MilePerHour,
    FootPerSecond,
    MeterPerSecondSquared,
    CentimeterPerSecondSquared,
    StandardGravity,
    Meter,
    Centimeter,
    Kilometer,
    Foot,
    Mile,
    SquareMeter,
    SquareFoot,
    Degree,
    Radian,
    Year,
    Day,
}

impl Unit {
    pub const ALL: &'static [Unit] = &[
        Self::MeterPerSecond,
        Self::CentimeterPerSecond,
        Self::KilometerPerHour,
        Self::MilePerHour,
        Self::FootPerSecond,
        Self::MeterPerSecondSquared,
        Self::CentimeterPerSecondSquared,
        Self::StandardGravity,
        Self::Meter,
        Self::Centimeter,
        Self::Kilometer,
        Self::Foot,
        Self::Mile,
        Self::SquareMeter,
        Self::SquareFoot,
        Self::Degree,
        Self::Radian,
        Self::Year,
        Self::Day,
    ];

    pub fn dimension(self) -> Dimension {
        match self {
            Self::MeterPerSecond
            | Self::CentimeterPerSecond
            | Self::KilometerPerHour
            | Self::MilePerHour
            | Self::FootPerSecond => Dimension::Speed,
            Self::MeterPerSecondSquared
            | Self::CentimeterPerSecondSquared
            | Self::StandardGravity => Dimension::Acceleration,
            Self::Meter | Self::Centimeter | Self::Kilometer | Self::Foot | Self::Mile => {
                Dimension::Length
            }
            Self::SquareMeter | Self::SquareFoot => Dimension::Area,
            Self::Degree | Self::Radian => Dimension::Angle,
            Self::Year | Self::Day => Dimension::Time,
        }
    }

    /// Factor converting one of this unit into the dimension's base unit
    /// (m/s, m/s², m, m², degree, day).
    pub fn base_factor(self) -> f64 {
        match self {
            Self::MeterPerSecond => 1.0,
            Self::CentimeterPerSecond => 0.01,
            Self::KilometerPerHour => 1000.0 / 3600.0,
            Self::MilePerHour => 0.44704,
            Self::FootPerSecond => 0.3048,
            Self::MeterPerSecondSquared => 1.0,
            Self::CentimeterPerSecondSquared => 0.01,
            Self::StandardGravity => 9.80665,
            Self::Meter => 1.0,
            Self::Centimeter => 0.01,
            Self::Kilometer => 1000.0,
            Self::Foot => 0.3048,
            Self::Mile => 1609.344,
            Self::SquareMeter => 1.0,
            Self::SquareFoot => 0.09290304,
            Self::Degree => 1.0,
            Self::Radian => 180.0 / std::f64::consts::PI,
            Self::Year => 365.25,
            Self::Day => 1.0,
        }
    }

    /// Canonical symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::MeterPerSecond => "m/s",
            Self::CentimeterPerSecond => "cm/s",
            Self::KilometerPerHour => "km/h",
            Self::MilePerHour => "mph",
            Self::FootPerSecond => "ft/s",
            Self::MeterPerSecondSquared => "m/s**2",
            Self::CentimeterPerSecondSquared => "cm/s**2",
            Self::StandardGravity => "g",
            Self::Meter => "m",
            Self::Centimeter => "cm",
            Self::Kilometer => "km",
            Self::Foot => "ft",
            Self::Mile => "mi",
            Self::SquareMeter => "m**2",
            Self::SquareFoot => "ft**2",
            Self::Degree => "degree",
            Self::Radian => "radian",
            Self::Year => "year",
            Self::Day => "day",
        }
    }

    /// Parse a unit symbol. Accepts the canonical symbols plus the long
    /// spellings used in hazard data files (`meter/second`, `miles/hour`,
    /// `m/s^2`, `feet`, `deg`, ...). Case-insensitive, spaces ignored.
    pub fn from_symbol(symbol: &str) -> Result<Self, UnitError> {
        let normalized: String = symbol
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase()
            .replace('^', "**");

        let unit = match normalized.as_str() {
            "m/s" | "meter/second" | "meters/second" | "m/second" | "mps" => Self::MeterPerSecond,
            "cm/s" | "centimeter/second" | "centimeters/second" => Self::CentimeterPerSecond,
            "km/h" | "kph" | "kilometer/hour" | "kilometers/hour" => Self::KilometerPerHour,
            "mph" | "mi/h" | "mile/hour" | "miles/hour" => Self::MilePerHour,
            "ft/s" | "foot/second" | "feet/second" => Self::FootPerSecond,
            "m/s**2" | "meter/second**2" | "m/second**2" => Self::MeterPerSecondSquared,
            "cm/s**2" | "centimeter/second**2" | "gal" => Self::CentimeterPerSecondSquared,
            "g" | "g0" | "standard_gravity" => Self::StandardGravity,
            "m" | "meter" | "meters" | "metre" | "metres" => Self::Meter,
            "cm" | "centimeter" | "centimeters" => Self::Centimeter,
            "km" | "kilometer" | "kilometers" => Self::Kilometer,
            "ft" | "foot" | "feet" => Self::Foot,
            "mi" | "mile" | "miles" => Self::Mile,
            "m**2" | "meter**2" | "square_meter" | "sq_m" => Self::SquareMeter,
            "ft**2" | "foot**2" | "feet**2" | "square_foot" => Self::SquareFoot,
            "degree" | "degrees" | "deg" => Self::Degree,
            "radian" | "radians" | "rad" => Self::Radian,
            "year" | "years" | "yr" => Self::Year,
            "day" | "days" => Self::Day,
            _ => {
                return Err(UnitError::UnknownUnit {
                    symbol: symbol.to_string(),
                })
            }
        };
        Ok(unit)
    }

    /// Factor to multiply a magnitude in `self` by to express it in `target`.
    pub fn conversion_factor(self, target: Unit) -> Result<f64, UnitError> {
        if self.dimension() != target.dimension() {
            return Err(UnitError::IncompatibleDimensions {
                from: self.symbol().to_string(),
                to: target.symbol().to_string(),
            });
        }
        if self == target {
            return Ok(1.0);
        }
        Ok(self.base_factor() / target.base_factor())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s)
    }
}

impl TryFrom<String> for Unit {
    type Error = UnitError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_symbol(&value)
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.symbol().to_string()
    }
}

/// A magnitude tagged with a physical unit.
///
/// Equality and ordering compare after converting `other` into `self`'s
/// unit; quantities of different dimensions are never equal and have no
/// ordering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Build a quantity from a unit symbol, e.g. `Quantity::parse(35.0, "cm/s")`.
    pub fn parse(value: f64, symbol: &str) -> Result<Self, UnitError> {
        Ok(Self::new(value, Unit::from_symbol(symbol)?))
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    /// Convert into `target`.
    pub fn to(&self, target: Unit) -> Result<Quantity, UnitError> {
        Ok(Self::new(self.magnitude_in(target)?, target))
    }

    /// Magnitude expressed in `target`.
    pub fn magnitude_in(&self, target: Unit) -> Result<f64, UnitError> {
        Ok(self.value * self.unit.conversion_factor(target)?)
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        match other.magnitude_in(self.unit) {
            Ok(v) => self.value == v,
            Err(_) => false,
        }
    }
}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let v = other.magnitude_in(self.unit).ok()?;
        self.value.partial_cmp(&v)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
