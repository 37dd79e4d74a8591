use std::ops::Deref;

use serde::{Deserialize, Serialize};

pub const DEFAULT_REFERENCE_YEAR: i32 = 2026;

/// Sentence-producing view over a civic service.
pub trait Describable {
    fn name(&self) -> &str;
    fn describe_age(&self) -> String;
    fn describe_location(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub address: String,
    pub founding_year: i32,
    pub reference_year: i32,
}

impl Service {
    pub fn new(name: impl Into<String>, address: impl Into<String>, founding_year: i32) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            founding_year,
            reference_year: DEFAULT_REFERENCE_YEAR,
        }
    }

    pub fn with_reference_year(mut self, reference_year: i32) -> Self {
        self.reference_year = reference_year;
        self
    }

    /// Years since founding. Negative when founded after the reference year.
    pub fn age(&self) -> i64 {
        i64::from(self.reference_year) - i64::from(self.founding_year)
    }
}

impl Describable for Service {
    fn name(&self) -> &str {
        &self.name
    }

    fn describe_age(&self) -> String {
        format!("{} was built {} years ago", self.name, self.age())
    }

    fn describe_location(&self) -> String {
        format!("{} is located at {}", self.name, self.address)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityService {
    service: Service,
    pub max_visitors: i32,
}

impl CapacityService {
    pub fn new(service: Service, max_visitors: i32) -> Self {
        Self {
            service,
            max_visitors,
        }
    }

    pub fn service(&self) -> &Service {
        &self.service
    }

    pub fn describe_capacity(&self) -> String {
        format!("{} holds {} people", self.service.name, self.max_visitors)
    }
}

impl Deref for CapacityService {
    type Target = Service;

    fn deref(&self) -> &Service {
        &self.service
    }
}

impl Describable for CapacityService {
    fn name(&self) -> &str {
        self.service.name()
    }

    fn describe_age(&self) -> String {
        self.service.describe_age()
    }

    fn describe_location(&self) -> String {
        self.service.describe_location()
    }
}
