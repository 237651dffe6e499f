//! Trip argument validation
//!
//! Rejects blank places and unknown transport methods before any provider
//! is contacted.

use domain::{EmissionCatalog, TripRequest};
use validator::{Validate, ValidationError, ValidationErrors};

/// Fields in the order their messages are reported
const FIELDS: [&str; 2] = ["start", "end"];

/// Raw trip arguments as given on the command line
#[derive(Debug, Clone, Validate)]
pub struct TripArgs {
    #[validate(custom(function = "not_blank", message = "Start city cannot be blank"))]
    pub start: String,

    #[validate(custom(function = "not_blank", message = "End city cannot be blank"))]
    pub end: String,

    /// Checked against the catalog in [`TripArgs::into_request`]
    pub transportation_method: String,
}

impl TripArgs {
    pub fn new(
        start: impl Into<String>,
        end: impl Into<String>,
        transportation_method: impl Into<String>,
    ) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            transportation_method: transportation_method.into(),
        }
    }

    /// Validate and convert into a trimmed trip request
    ///
    /// # Errors
    ///
    /// Returns one message per invalid field, in field order.
    pub fn into_request(self, catalog: &EmissionCatalog) -> Result<TripRequest, Vec<String>> {
        let mut errors = self
            .validate()
            .err()
            .map(|e| messages(&e))
            .unwrap_or_default();

        let method = self.transportation_method.trim();
        if !catalog.is_valid(method) {
            errors.push(unknown_method_message(catalog));
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(TripRequest::new(self.start.trim(), self.end.trim(), method))
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn unknown_method_message(catalog: &EmissionCatalog) -> String {
    format!(
        "Invalid transportation method. Available methods: [{}]",
        catalog.methods_hint()
    )
}

/// Flatten validation errors into messages, in field order
fn messages(errors: &ValidationErrors) -> Vec<String> {
    let by_field = errors.field_errors();
    FIELDS
        .iter()
        .filter_map(|field| by_field.get(*field))
        .flat_map(|errors| errors.iter())
        .map(|error| {
            error
                .message
                .as_ref()
                .map_or_else(|| error.code.to_string(), ToString::to_string)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_arguments_are_trimmed() {
        let request = TripArgs::new(" Hamburg ", "Berlin\t", " diesel-car-medium ")
            .into_request(&EmissionCatalog::standard())
            .unwrap();
        assert_eq!(request.start(), "Hamburg");
        assert_eq!(request.end(), "Berlin");
        assert_eq!(request.transport_method(), "diesel-car-medium");
    }

    #[test]
    fn blank_start() {
        let errors = TripArgs::new("  ", "Berlin", "bus-default")
            .into_request(&EmissionCatalog::standard())
            .unwrap_err();
        assert_eq!(errors, vec!["Start city cannot be blank".to_string()]);
    }

    #[test]
    fn blank_end() {
        let errors = TripArgs::new("Hamburg", "", "bus-default")
            .into_request(&EmissionCatalog::standard())
            .unwrap_err();
        assert_eq!(errors, vec!["End city cannot be blank".to_string()]);
    }

    #[test]
    fn unknown_method_lists_available_methods() {
        let errors = TripArgs::new("Hamburg", "Berlin", "rocket")
            .into_request(&EmissionCatalog::standard())
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Invalid transportation method. Available methods: [bus-default, "));
        assert!(errors[0].ends_with("train-default]"));
    }

    #[test]
    fn blank_method_is_invalid() {
        let errors = TripArgs::new("Hamburg", "Berlin", " ")
            .into_request(&EmissionCatalog::standard())
            .unwrap_err();
        assert!(errors[0].starts_with("Invalid transportation method"));
    }

    #[test]
    fn method_is_case_sensitive() {
        assert!(TripArgs::new("Hamburg", "Berlin", "Diesel-Car-Small")
            .into_request(&EmissionCatalog::standard())
            .is_err());
    }

    #[test]
    fn methods_come_from_the_given_catalog() {
        let catalog = EmissionCatalog::new([("rocket", 900)]).unwrap();

        let request = TripArgs::new("Hamburg", "Berlin", "rocket")
            .into_request(&catalog)
            .unwrap();
        assert_eq!(request.transport_method(), "rocket");

        let errors = TripArgs::new("Hamburg", "Berlin", "bus-default")
            .into_request(&catalog)
            .unwrap_err();
        assert_eq!(
            errors,
            vec!["Invalid transportation method. Available methods: [rocket]".to_string()]
        );
    }

    #[test]
    fn all_errors_reported_in_field_order() {
        let errors = TripArgs::new("", " ", "rocket")
            .into_request(&EmissionCatalog::standard())
            .unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0], "Start city cannot be blank");
        assert_eq!(errors[1], "End city cannot be blank");
        assert!(errors[2].starts_with("Invalid transportation method"));
    }
}
