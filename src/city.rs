use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::{
    error::{MetricError, MetricResult},
    formulas::{self, DEFAULT_CHILD_INDEX, DEFAULT_SCHOOL_INDEX},
};

pub const DEFAULT_GREEN_THRESHOLD: f64 = 0.5;

/// Anything that can produce a [`CityReport`].
pub trait Reportable {
    fn report(&self) -> MetricResult<CityReport>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub area: f64,
    pub population: i64,
    pub schools: i32,
    pub green_zone_area: f64,
    pub green_threshold: f64,
    pub child_index: f64,
}

impl City {
    pub fn new(
        name: impl Into<String>,
        area: f64,
        population: i64,
        schools: i32,
        green_zone_area: f64,
    ) -> Self {
        Self {
            name: name.into(),
            area,
            population,
            schools,
            green_zone_area,
            green_threshold: DEFAULT_GREEN_THRESHOLD,
            child_index: DEFAULT_CHILD_INDEX,
        }
    }

    pub fn with_green_threshold(mut self, threshold: f64) -> Self {
        self.green_threshold = threshold;
        self
    }

    pub fn with_child_index(mut self, child_index: f64) -> Self {
        self.child_index = child_index;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `(area, population)`
    pub fn features(&self) -> (f64, i64) {
        (self.area, self.population)
    }

    pub fn density(&self) -> MetricResult<f64> {
        formulas::density(self.population, self.area)
    }

    /// School provision with the default indices. The stored `child_index`
    /// is not consulted here.
    pub fn provision(&self) -> MetricResult<f64> {
        self.provision_with(DEFAULT_CHILD_INDEX, DEFAULT_SCHOOL_INDEX)
    }

    pub fn provision_with(&self, child_index: f64, school_index: f64) -> MetricResult<f64> {
        formulas::provision(self.schools, self.population, child_index, school_index)
    }

    pub fn is_green(&self) -> MetricResult<bool> {
        let ratio = formulas::green_ratio(self.green_zone_area, self.area)?;
        Ok(ratio > self.green_threshold)
    }
}

impl Reportable for City {
    fn report(&self) -> MetricResult<CityReport> {
        Ok(CityReport {
            name: self.name.clone(),
            area: self.area,
            population: self.population,
            density: self.density()?,
            schools: self.schools,
            provision: self.provision()?,
            is_green: self.is_green()?,
        })
    }
}

/// A city that also receives a yearly flow of visitors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResortCity {
    city: City,
    pub annual_tourists: i64,
}

impl ResortCity {
    pub fn new(city: City, annual_tourists: i64) -> Self {
        Self {
            city,
            annual_tourists,
        }
    }

    pub fn city(&self) -> &City {
        &self.city
    }

    /// Density with residents and the year's tourists counted together.
    pub fn annual_density(&self) -> MetricResult<f64> {
        let total = self.city.population as f64 + self.annual_tourists as f64;
        formulas::per_area(total, self.city.area)
    }

    pub fn tourist_ratio(&self) -> MetricResult<f64> {
        if self.city.population == 0 {
            return Err(MetricError::DivisionByZero {
                divisor: "population",
            });
        }
        Ok(self.annual_tourists as f64 / self.city.population as f64)
    }
}

impl Deref for ResortCity {
    type Target = City;

    fn deref(&self) -> &City {
        &self.city
    }
}

impl Reportable for ResortCity {
    // Tourism figures stay out of the report.
    fn report(&self) -> MetricResult<CityReport> {
        self.city.report()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityReport {
    pub name: String,
    pub area: f64,
    pub population: i64,
    pub density: f64,
    pub schools: i32,
    pub provision: f64,
    pub is_green: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReportValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
}

impl CityReport {
    pub const KEYS: [&'static str; 7] = [
        "name",
        "area",
        "population",
        "density",
        "schools",
        "provision",
        "is_green",
    ];

    /// Report fields in their fixed order.
    pub fn entries(&self) -> Vec<(&'static str, ReportValue)> {
        let values = [
            ReportValue::Text(self.name.clone()),
            ReportValue::Float(self.area),
            ReportValue::Integer(self.population),
            ReportValue::Float(self.density),
            ReportValue::Integer(self.schools as i64),
            ReportValue::Float(self.provision),
            ReportValue::Flag(self.is_green),
        ];
        Self::KEYS.into_iter().zip(values).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sochi() -> City {
        City::new("Sochi", 350.0, 300_000, 10, 150.0).with_green_threshold(0.5)
    }

    #[test]
    fn sochi_is_dense_but_not_green() {
        let city = sochi();
        assert!((city.density().unwrap() - 857.142_857).abs() < 1e-6);
        assert!(!city.is_green().unwrap());
        assert_eq!(city.features(), (350.0, 300_000));
        assert_eq!(city.name(), "Sochi");
    }

    #[test]
    fn green_threshold_is_strict() {
        let city = City::new("Edge", 100.0, 1_000, 1, 50.0);
        assert!(!city.is_green().unwrap());
        let city = city.with_green_threshold(0.49);
        assert!(city.is_green().unwrap());
    }

    #[test]
    fn provision_ignores_stored_child_index() {
        let city = sochi().with_child_index(0.9);
        assert_eq!(
            city.provision().unwrap(),
            (1000.0 * 10.0) / (0.3 * 300_000.0)
        );
        assert_eq!(
            city.provision_with(0.5, 100.0).unwrap(),
            (100.0 * 10.0) / (0.5 * 300_000.0)
        );
    }

    #[test]
    fn report_keeps_field_order() {
        let report = sochi().report().unwrap();
        let keys: Vec<_> = report.entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, CityReport::KEYS);
        assert_eq!(report.entries()[6].1, ReportValue::Flag(false));
    }

    #[test]
    fn report_fails_for_empty_city() {
        let city = City::new("Ghost", 10.0, 0, 0, 1.0);
        assert_eq!(
            city.report(),
            Err(MetricError::DivisionByZero {
                divisor: "population"
            })
        );
    }

    #[test]
    fn resort_metrics_include_tourists() {
        let resort = ResortCity::new(sochi(), 10_000_000);
        let expected = (300_000.0 + 10_000_000.0) / 350.0;
        assert!((resort.annual_density().unwrap() - expected).abs() < 1e-9);
        assert!((resort.tourist_ratio().unwrap() - 33.333_333).abs() < 1e-6);
        assert_eq!(resort.report().unwrap(), sochi().report().unwrap());
        assert_eq!(resort.density().unwrap(), sochi().density().unwrap());
    }

    #[test]
    fn annual_density_survives_huge_counts() {
        let resort = ResortCity::new(City::new("X", 1.0, i64::MAX, 1, 0.0), 1);
        let expected = i64::MAX as f64 + 1.0;
        assert_eq!(resort.annual_density().unwrap(), expected);

        let crowded = ResortCity::new(City::new("Y", 2.0, i64::MAX, 1, 0.0), i64::MAX);
        assert_eq!(crowded.annual_density().unwrap(), i64::MAX as f64);

        let flat = ResortCity::new(City::new("Z", 0.0, 10, 1, 0.0), 5);
        assert_eq!(
            flat.annual_density(),
            Err(MetricError::DivisionByZero { divisor: "area" })
        );
    }
}
