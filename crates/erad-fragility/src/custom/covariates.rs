//! Per-asset covariates consumed by regression fragility models.

use erad_core::errors::CovariateError;
use erad_core::types::{PoleClass, PoleMaterial};
use erad_core::units::{Quantity, Unit};
use serde::{Deserialize, Serialize};

/// Pole attributes a regression model may need. Every field is optional so
/// that assets can carry partial data; models decide what is required.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoleCovariates {
    /// Angle between wind direction and conductor span.
    pub wind_angle: Option<Quantity>,
    /// Total conductor cross-sectional area exposed to the wind.
    pub conductor_area: Option<Quantity>,
    pub pole_age: Option<Quantity>,
    pub pole_class: Option<PoleClass>,
    pub pole_material: Option<PoleMaterial>,
}

impl PoleCovariates {
    /// Fully specified covariates with angle in degrees, area in m² and age
    /// in years.
    pub fn new(
        wind_angle_deg: f64,
        conductor_area_m2: f64,
        pole_age_years: f64,
        pole_class: PoleClass,
        pole_material: PoleMaterial,
    ) -> Self {
        Self {
            wind_angle: Some(Quantity::new(wind_angle_deg, Unit::Degree)),
            conductor_area: Some(Quantity::new(conductor_area_m2, Unit::SquareMeter)),
            pole_age: Some(Quantity::new(pole_age_years, Unit::Year)),
            pole_class: Some(pole_class),
            pole_material: Some(pole_material),
        }
    }

    /// A class 3 wood pole, 30 years old, 45° to the wind, 2 m² of conductor.
    pub fn example() -> Self {
        Self::new(45.0, 2.0, 30.0, PoleClass::Class3, PoleMaterial::Wood)
    }

    pub fn with_wind_angle(mut self, wind_angle: Option<Quantity>) -> Self {
        self.wind_angle = wind_angle;
        self
    }

    pub fn with_conductor_area(mut self, conductor_area: Option<Quantity>) -> Self {
        self.conductor_area = conductor_area;
        self
    }

    pub fn with_pole_age(mut self, pole_age: Option<Quantity>) -> Self {
        self.pole_age = pole_age;
        self
    }

    pub fn with_pole_class(mut self, pole_class: Option<PoleClass>) -> Self {
        self.pole_class = pole_class;
        self
    }

    pub fn with_pole_material(mut self, pole_material: Option<PoleMaterial>) -> Self {
        self.pole_material = pole_material;
        self
    }
}

/// Express a covariate in `unit`, reporting dimension mismatches against the
/// covariate rather than as a bare unit error.
pub(crate) fn magnitude(
    field: &str,
    quantity: &Quantity,
    unit: Unit,
) -> Result<f64, CovariateError> {
    quantity
        .magnitude_in(unit)
        .map_err(|e| CovariateError::InvalidUnits {
            field: field.to_string(),
            reason: e.to_string(),
        })
}

/// Fails unless `min <= value <= max`. NaN is always out of range.
pub(crate) fn validate_range(
    field: &str,
    value: f64,
    (min, max): (f64, f64),
) -> Result<(), CovariateError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(CovariateError::OutOfRange {
            field: field.to_string(),
            value,
            min,
            max,
        })
    }
}
