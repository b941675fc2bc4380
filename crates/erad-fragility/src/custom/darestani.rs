//! Darestani et al. (2019) wind fragility model for distribution poles.
//!
//! The log of the failure wind speed (in mph) is normally distributed with
//! `mu` and `sigma` given by quadratic regressions over wind angle,
//! conductor area and pole age. The model is evaluated over wind speeds in
//! m/s and is only defined on `[2, 112]` m/s.

use erad_core::constants::{
    CONDUCTOR_AREA_BOUNDS, MPS_TO_MPH, POLE_AGE_BOUNDS, POLE_WIND_SPEED_SUPPORT,
    WIND_ANGLE_BOUNDS,
};
use erad_core::errors::{CovariateError, DistributionError};
use erad_core::types::{PoleClass, PoleMaterial};
use erad_core::units::Unit;
use rand::RngCore;
use statrs::distribution::{ContinuousCDF, Normal};

use super::coefficients::{basis, darestani2019_coefficients, dot, PoleCoefficients};
use super::covariates::{magnitude, validate_range, PoleCovariates};
use crate::model::{open_unit, ContinuousModel};

pub const DARESTANI_2019: &str = "Darestani2019";

/// A Darestani (2019) model frozen for one pole.
#[derive(Debug, Clone)]
pub struct Darestani2019 {
    wind_angle: f64,
    conductor_area: f64,
    pole_age: f64,
    pole_class: PoleClass,
    pole_material: PoleMaterial,
    mu: f64,
    sigma: f64,
    log_speed: Normal,
}

impl Darestani2019 {
    /// Build the model for one pole.
    ///
    /// Checks, in order: presence of every covariate, the wind angle, conductor
    /// area and pole age ranges, the coefficient lookup, and finally that the
    /// fitted `sigma` is positive.
    pub fn new(covariates: &PoleCovariates) -> Result<Self, CovariateError> {
        let missing = |field: &str| CovariateError::Missing {
            field: field.to_string(),
            model: DARESTANI_2019.to_string(),
        };
        let wind_angle = covariates.wind_angle.ok_or_else(|| missing("wind_angle"))?;
        let conductor_area = covariates
            .conductor_area
            .ok_or_else(|| missing("conductor_area"))?;
        let pole_age = covariates.pole_age.ok_or_else(|| missing("pole_age"))?;
        let pole_class = covariates.pole_class.ok_or_else(|| missing("pole_class"))?;
        let pole_material = covariates
            .pole_material
            .ok_or_else(|| missing("pole_material"))?;

        let angle = magnitude("wind_angle", &wind_angle, Unit::Degree)?;
        validate_range("Wind angle", angle, WIND_ANGLE_BOUNDS)?;
        let area = magnitude("conductor_area", &conductor_area, Unit::SquareMeter)?;
        validate_range("Conductor area", area, CONDUCTOR_AREA_BOUNDS)?;
        let age = magnitude("pole_age", &pole_age, Unit::Year)?;
        validate_range("Pole age", age, POLE_AGE_BOUNDS)?;

        let coefficients = darestani2019_coefficients(pole_material, pole_class).ok_or_else(
            || CovariateError::UnknownConfiguration {
                material: pole_material.name().to_string(),
                class: pole_class.name().to_string(),
            },
        )?;

        Self::with_coefficients(angle, area, age, pole_class, pole_material, coefficients)
    }

    /// Fit `mu` and `sigma` from an explicit coefficient row. Covariates are
    /// plain magnitudes in degree, m² and year and are not range checked.
    pub fn with_coefficients(
        wind_angle: f64,
        conductor_area: f64,
        pole_age: f64,
        pole_class: PoleClass,
        pole_material: PoleMaterial,
        coefficients: &PoleCoefficients,
    ) -> Result<Self, CovariateError> {
        let terms = basis(wind_angle, conductor_area, pole_age);
        let mu = dot(&coefficients.mu, &terms);
        let sigma = dot(&coefficients.sigma, &terms);

        if sigma.is_nan() || sigma <= 0.0 {
            return Err(CovariateError::DegenerateParameter {
                parameter: "sigma".to_string(),
                value: sigma,
            });
        }
        let log_speed = Normal::new(mu, sigma).map_err(|_| CovariateError::DegenerateParameter {
            parameter: "mu".to_string(),
            value: mu,
        })?;

        tracing::trace!(mu, sigma, class = %pole_class, "fitted Darestani2019 parameters");

        Ok(Self {
            wind_angle,
            conductor_area,
            pole_age,
            pole_class,
            pole_material,
            mu,
            sigma,
            log_speed,
        })
    }

    /// Location of the log wind speed (mph).
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Scale of the log wind speed (mph).
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn pole_class(&self) -> PoleClass {
        self.pole_class
    }

    pub fn pole_material(&self) -> PoleMaterial {
        self.pole_material
    }

    /// `(wind angle, conductor area, pole age)` in degree, m² and year.
    pub fn covariates(&self) -> (f64, f64, f64) {
        (self.wind_angle, self.conductor_area, self.pole_age)
    }
}

impl ContinuousModel for Darestani2019 {
    fn name(&self) -> &str {
        DARESTANI_2019
    }

    fn cdf(&self, x: f64) -> f64 {
        let (low, high) = POLE_WIND_SPEED_SUPPORT;
        if x < low {
            return 0.0;
        }
        if x > high {
            return 1.0;
        }
        self.log_speed.cdf((MPS_TO_MPH * x).ln()).clamp(0.0, 1.0)
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Result<f64, DistributionError> {
        let (low, high) = POLE_WIND_SPEED_SUPPORT;
        let log_speed = self.log_speed.inverse_cdf(open_unit(rng));
        Ok((log_speed.exp() / MPS_TO_MPH).clamp(low, high))
    }
}
