//! Pure demographic formulas shared by the city entities.

use crate::error::{MetricError, MetricResult};

/// Assumed share of the population that is of school age.
pub const DEFAULT_CHILD_INDEX: f64 = 0.3;
/// Provision is counted per this many children.
pub const DEFAULT_SCHOOL_INDEX: f64 = 1000.0;

fn divide(numerator: f64, divisor: f64, name: &'static str) -> MetricResult<f64> {
    if divisor == 0.0 {
        return Err(MetricError::DivisionByZero { divisor: name });
    }
    Ok(numerator / divisor)
}

/// Residents per unit of area.
pub fn density(population: i64, area: f64) -> MetricResult<f64> {
    per_area(population as f64, area)
}

/// Any head count per unit of area. Counts are taken as `f64` so that
/// summed populations never overflow.
pub fn per_area(people: f64, area: f64) -> MetricResult<f64> {
    divide(people, area, "area")
}

/// Schools per `school_index` children, assuming `child_index` of the
/// population are children.
pub fn provision(
    schools: i32,
    population: i64,
    child_index: f64,
    school_index: f64,
) -> MetricResult<f64> {
    if population == 0 {
        return Err(MetricError::DivisionByZero {
            divisor: "population",
        });
    }
    if child_index == 0.0 {
        return Err(MetricError::DivisionByZero {
            divisor: "child_index",
        });
    }
    Ok((school_index * schools as f64) / (child_index * population as f64))
}

pub fn green_ratio(green_zone_area: f64, area: f64) -> MetricResult<f64> {
    divide(green_zone_area, area, "area")
}
