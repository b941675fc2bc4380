//! Pole construction attributes used by the regression fragility model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// ANSI pole class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PoleClass {
    #[serde(rename = "Class 1")]
    Class1,
    #[serde(rename = "Class 2")]
    Class2,
    #[serde(rename = "Class 3")]
    Class3,
    #[serde(rename = "Class 4")]
    Class4,
    #[serde(rename = "Class 5")]
    Class5,
    #[serde(rename = "Class 6")]
    Class6,
    #[serde(rename = "Class 7")]
    Class7,
}

impl PoleClass {
    pub const ALL: [PoleClass; 7] = [
        Self::Class1,
        Self::Class2,
        Self::Class3,
        Self::Class4,
        Self::Class5,
        Self::Class6,
        Self::Class7,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Class1 => "Class 1",
            Self::Class2 => "Class 2",
            Self::Class3 => "Class 3",
            Self::Class4 => "Class 4",
            Self::Class5 => "Class 5",
            Self::Class6 => "Class 6",
            Self::Class7 => "Class 7",
        }
    }
}

impl fmt::Display for PoleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PoleClass {
    type Err = String;

    /// Accepts `"Class 3"`, `"class3"`, or `"3"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
        let rest = s
            .to_ascii_lowercase()
            .replace("class", "")
            .chars()
            .filter(|c| !c.is_whitespace() && !c.is_ascii_digit())
            .count();
        if rest > 0 {
            return Err(format!("unknown pole class: {s}"));
        }
        match digits.as_str() {
            "1" => Ok(Self::Class1),
            "2" => Ok(Self::Class2),
            "3" => Ok(Self::Class3),
            "4" => Ok(Self::Class4),
            "5" => Ok(Self::Class5),
            "6" => Ok(Self::Class6),
            "7" => Ok(Self::Class7),
            _ => Err(format!("unknown pole class: {s}")),
        }
    }
}

/// Pole construction material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoleMaterial {
    #[serde(alias = "Wood", alias = "WOOD")]
    Wood,
    #[serde(alias = "Steel", alias = "STEEL")]
    Steel,
}

impl PoleMaterial {
    pub fn name(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Steel => "steel",
        }
    }
}

impl fmt::Display for PoleMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PoleMaterial {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wood" => Ok(Self::Wood),
            "steel" => Ok(Self::Steel),
            _ => Err(format!("unknown pole material: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pole_class_parsing() {
        assert_eq!("Class 3".parse::<PoleClass>().unwrap(), PoleClass::Class3);
        assert_eq!("class7".parse::<PoleClass>().unwrap(), PoleClass::Class7);
        assert_eq!("1".parse::<PoleClass>().unwrap(), PoleClass::Class1);
        assert!("Class 9".parse::<PoleClass>().is_err());
        assert!("Grade 2".parse::<PoleClass>().is_err());
    }

    #[test]
    fn test_material_is_case_insensitive() {
        assert_eq!("WOOD".parse::<PoleMaterial>().unwrap(), PoleMaterial::Wood);
        assert_eq!("Steel".parse::<PoleMaterial>().unwrap(), PoleMaterial::Steel);
        assert!("concrete".parse::<PoleMaterial>().is_err());
    }
}
