use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::{
    city::{City, ResortCity, DEFAULT_GREEN_THRESHOLD},
    formulas::DEFAULT_CHILD_INDEX,
    sequence::{BoundedSequence, SequenceKind},
    service::{CapacityService, Service, DEFAULT_REFERENCE_YEAR},
};

fn default_green_threshold() -> f64 {
    DEFAULT_GREEN_THRESHOLD
}

fn default_child_index() -> f64 {
    DEFAULT_CHILD_INDEX
}

fn default_reference_year() -> i32 {
    DEFAULT_REFERENCE_YEAR
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub cities: Vec<ScenarioCity>,
    #[serde(default)]
    pub services: Vec<ScenarioService>,
    #[serde(default)]
    pub sequences: Vec<ScenarioSequence>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioCity {
    pub name: String,
    pub area: f64,
    pub population: i64,
    pub schools: i32,
    pub green_zone_area: f64,
    #[serde(default = "default_green_threshold")]
    pub green_threshold: f64,
    #[serde(default = "default_child_index")]
    pub child_index: f64,
    #[serde(default)]
    pub annual_tourists: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioService {
    pub name: String,
    pub address: String,
    pub founding_year: i32,
    #[serde(default = "default_reference_year")]
    pub reference_year: i32,
    #[serde(default)]
    pub max_visitors: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioSequence {
    pub kind: SequenceKind,
    pub start: i64,
    pub end: i64,
}

/// A city entry resolved to its concrete entity.
#[derive(Debug, Clone, PartialEq)]
pub enum CityEntity {
    Plain(City),
    Resort(ResortCity),
}

impl CityEntity {
    pub fn city(&self) -> &City {
        match self {
            CityEntity::Plain(city) => city,
            CityEntity::Resort(resort) => resort.city(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ServiceEntity {
    Basic(Service),
    Capacity(CapacityService),
}

impl ServiceEntity {
    pub fn service(&self) -> &Service {
        match self {
            ServiceEntity::Basic(service) => service,
            ServiceEntity::Capacity(capacity) => capacity.service(),
        }
    }
}

pub struct ScenarioLoader {
    base_dir: PathBuf,
}

impl ScenarioLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<Scenario> {
        let path = self.base_dir.join(file);
        debug!(path = %path.display(), "loading scenario");
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        Scenario::from_yaml(&data).with_context(|| format!("Failed to parse {}", path.display()))
    }
}

impl Scenario {
    pub fn from_yaml(text: &str) -> Result<Self> {
        let scenario: Scenario = serde_yaml::from_str(text)?;
        Ok(scenario)
    }

    pub fn build_cities(&self) -> Vec<CityEntity> {
        self.cities
            .iter()
            .map(|entry| {
                let city = City::new(
                    entry.name.clone(),
                    entry.area,
                    entry.population,
                    entry.schools,
                    entry.green_zone_area,
                )
                .with_green_threshold(entry.green_threshold)
                .with_child_index(entry.child_index);
                match entry.annual_tourists {
                    Some(tourists) => CityEntity::Resort(ResortCity::new(city, tourists)),
                    None => CityEntity::Plain(city),
                }
            })
            .collect()
    }

    pub fn build_services(&self) -> Vec<ServiceEntity> {
        self.services
            .iter()
            .map(|entry| {
                let service = Service::new(
                    entry.name.clone(),
                    entry.address.clone(),
                    entry.founding_year,
                )
                .with_reference_year(entry.reference_year);
                match entry.max_visitors {
                    Some(max) => ServiceEntity::Capacity(CapacityService::new(service, max)),
                    None => ServiceEntity::Basic(service),
                }
            })
            .collect()
    }

    pub fn build_sequences(&self) -> Vec<BoundedSequence> {
        self.sequences
            .iter()
            .map(|entry| BoundedSequence::new(entry.kind, entry.start, entry.end))
            .collect()
    }
}
