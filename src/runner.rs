use std::fmt;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    city::{CityReport, Reportable},
    scenario::{CityEntity, Scenario, ServiceEntity},
    sequence::SequenceKind,
    service::Describable,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CitySummary {
    pub report: CityReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tourism: Option<TourismSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TourismSummary {
    pub annual_density: f64,
    pub tourist_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceSummary {
    pub name: String,
    pub age: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceSummary {
    pub kind: SequenceKind,
    pub values: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub scenario: String,
    pub cities: Vec<CitySummary>,
    pub services: Vec<ServiceSummary>,
    pub sequences: Vec<SequenceSummary>,
}

/// Evaluates every entity of a scenario.
pub fn run(scenario: &Scenario) -> Result<RunSummary> {
    let mut cities = Vec::new();
    for entity in scenario.build_cities() {
        cities.push(summarize_city(&entity)?);
    }

    let services = scenario
        .build_services()
        .iter()
        .map(summarize_service)
        .collect::<Vec<_>>();

    let sequences = scenario
        .build_sequences()
        .into_iter()
        .map(|sequence| {
            let kind = sequence.kind();
            let values: Vec<i64> = sequence.collect();
            debug!(?kind, count = values.len(), "sequence drained");
            SequenceSummary { kind, values }
        })
        .collect::<Vec<_>>();

    info!(
        scenario = %scenario.name,
        cities = cities.len(),
        services = services.len(),
        sequences = sequences.len(),
        "scenario evaluated"
    );

    Ok(RunSummary {
        scenario: scenario.name.clone(),
        cities,
        services,
        sequences,
    })
}

fn summarize_city(entity: &CityEntity) -> Result<CitySummary> {
    let name = &entity.city().name;
    let (report, tourism) = match entity {
        CityEntity::Plain(city) => (city.report(), None),
        CityEntity::Resort(resort) => {
            let tourism = TourismSummary {
                annual_density: resort
                    .annual_density()
                    .with_context(|| format!("annual density of {name}"))?,
                tourist_ratio: resort
                    .tourist_ratio()
                    .with_context(|| format!("tourist ratio of {name}"))?,
            };
            (resort.report(), Some(tourism))
        }
    };
    let report = report.with_context(|| format!("report for city {name}"))?;
    Ok(CitySummary { report, tourism })
}

fn summarize_service(entity: &ServiceEntity) -> ServiceSummary {
    let describable: &dyn Describable = match entity {
        ServiceEntity::Basic(service) => service,
        ServiceEntity::Capacity(service) => service,
    };
    let capacity = match entity {
        ServiceEntity::Capacity(service) => Some(service.describe_capacity()),
        ServiceEntity::Basic(_) => None,
    };
    ServiceSummary {
        name: describable.name().to_string(),
        age: describable.describe_age(),
        location: describable.describe_location(),
        capacity,
    }
}

impl RunSummary {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize run summary")
    }

    /// Console rendering, one line per figure.
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for city in &self.cities {
            let report = &city.report;
            writeln!(f, "Population density: {}", report.density)?;
            writeln!(f, "{} - green city: {}", report.name, report.is_green)?;
            if let Some(tourism) = &city.tourism {
                writeln!(f, "Peak density: {}", tourism.annual_density)?;
                writeln!(f, "Tourist ratio: {}", tourism.tourist_ratio)?;
            }
        }
        for service in &self.services {
            writeln!(f, "{}", service.age)?;
            writeln!(f, "{}", service.location)?;
            if let Some(capacity) = &service.capacity {
                writeln!(f, "{capacity}")?;
            }
        }
        for sequence in &self.sequences {
            for value in &sequence.values {
                writeln!(f, "{value}")?;
            }
        }
        Ok(())
    }
}
