//! Emission catalog
//!
//! Read-only mapping from transport method identifier to emission rate.
//! Built once at startup and shared by reference; lookups are exact and
//! case-sensitive.

use std::collections::BTreeMap;

use crate::errors::DomainError;
use crate::value_objects::EmissionRate;

pub const DIESEL_CAR_SMALL: &str = "diesel-car-small";
pub const PETROL_CAR_SMALL: &str = "petrol-car-small";
pub const PLUGIN_HYBRID_CAR_SMALL: &str = "plugin-hybrid-car-small";
pub const ELECTRIC_CAR_SMALL: &str = "electric-car-small";
pub const DIESEL_CAR_MEDIUM: &str = "diesel-car-medium";
pub const PETROL_CAR_MEDIUM: &str = "petrol-car-medium";
pub const PLUGIN_HYBRID_CAR_MEDIUM: &str = "plugin-hybrid-car-medium";
pub const ELECTRIC_CAR_MEDIUM: &str = "electric-car-medium";
pub const DIESEL_CAR_LARGE: &str = "diesel-car-large";
pub const PETROL_CAR_LARGE: &str = "petrol-car-large";
pub const PLUGIN_HYBRID_CAR_LARGE: &str = "plugin-hybrid-car-large";
pub const ELECTRIC_CAR_LARGE: &str = "electric-car-large";
pub const BUS_DEFAULT: &str = "bus-default";
pub const TRAIN_DEFAULT: &str = "train-default";

/// Standard rates in grams CO2-equivalent per kilometer
pub const STANDARD_RATES: [(&str, u32); 14] = [
    (DIESEL_CAR_SMALL, 142),
    (PETROL_CAR_SMALL, 154),
    (PLUGIN_HYBRID_CAR_SMALL, 73),
    (ELECTRIC_CAR_SMALL, 50),
    (DIESEL_CAR_MEDIUM, 171),
    (PETROL_CAR_MEDIUM, 192),
    (PLUGIN_HYBRID_CAR_MEDIUM, 110),
    (ELECTRIC_CAR_MEDIUM, 58),
    (DIESEL_CAR_LARGE, 209),
    (PETROL_CAR_LARGE, 282),
    (PLUGIN_HYBRID_CAR_LARGE, 126),
    (ELECTRIC_CAR_LARGE, 73),
    (BUS_DEFAULT, 27),
    (TRAIN_DEFAULT, 6),
];

/// Transport method to emission rate table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmissionCatalog {
    rates: BTreeMap<String, EmissionRate>,
}

impl EmissionCatalog {
    /// Build a catalog from `(method id, grams per km)` entries
    ///
    /// # Errors
    ///
    /// Returns an error for blank ids, duplicate ids, or zero rates.
    pub fn new<I, S>(entries: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut rates = BTreeMap::new();
        for (id, grams_per_km) in entries {
            let id = id.into();
            if id.trim().is_empty() {
                return Err(DomainError::ValidationError(
                    "transport method id must not be blank".to_string(),
                ));
            }
            let rate = EmissionRate::new(grams_per_km)?;
            if rates.insert(id.clone(), rate).is_some() {
                return Err(DomainError::ValidationError(format!(
                    "duplicate transport method: {id}"
                )));
            }
        }
        Ok(Self { rates })
    }

    /// The standard 14-entry catalog
    #[must_use]
    pub fn standard() -> Self {
        // every standard rate is non-zero, so nothing is filtered out here
        let rates = STANDARD_RATES
            .iter()
            .filter_map(|&(id, grams)| EmissionRate::new(grams).ok().map(|r| (id.to_string(), r)))
            .collect();
        Self { rates }
    }

    /// Emission rate for a method, `None` if the method is unknown
    #[must_use]
    pub fn rate(&self, method: &str) -> Option<EmissionRate> {
        self.rates.get(method).copied()
    }

    /// Emission rate for a method
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownTransportMethod` if the method is not in
    /// the catalog.
    pub fn require_rate(&self, method: &str) -> Result<EmissionRate, DomainError> {
        self.rate(method)
            .ok_or_else(|| DomainError::UnknownTransportMethod(method.to_string()))
    }

    /// Whether the method is present in the catalog
    #[must_use]
    pub fn is_valid(&self, method: &str) -> bool {
        self.rates.contains_key(method)
    }

    /// All method ids in sorted order
    pub fn methods(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }

    /// All `(method id, rate)` pairs in sorted order
    pub fn entries(&self) -> impl Iterator<Item = (&str, EmissionRate)> {
        self.rates.iter().map(|(id, rate)| (id.as_str(), *rate))
    }

    /// Comma-separated method list for error hints
    #[must_use]
    pub fn methods_hint(&self) -> String {
        self.methods().collect::<Vec<_>>().join(", ")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Default for EmissionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
