//! Application services - Use case implementations

mod trip_emission_service;

pub use trip_emission_service::TripEmissionService;
