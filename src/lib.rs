pub mod city;
pub mod error;
pub mod formulas;
pub mod logging;
pub mod runner;
pub mod scenario;
pub mod sequence;
pub mod service;

pub use city::{City, CityReport, Reportable, ResortCity};
pub use error::{MetricError, SequenceError};
pub use scenario::{Scenario, ScenarioLoader};
pub use sequence::{BoundedSequence, SequenceKind};
pub use service::{CapacityService, Describable, Service};
