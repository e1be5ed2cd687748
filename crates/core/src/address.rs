//! Shipping address record as submitted by a form.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Countries the shipping rules know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    Us,
    Ca,
}

impl Country {
    /// Two-letter code used on the wire.
    pub fn code(self) -> &'static str {
        match self {
            Country::Us => "US",
            Country::Ca => "CA",
        }
    }

    /// Parse a two-letter code. Matching is exact, so `"us"` is not recognised.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "US" => Some(Country::Us),
            "CA" => Some(Country::Ca),
            _ => None,
        }
    }
}

/// An address with the three fields the shipping rules look at.
///
/// `country` is `None` when the form has no selection yet or holds a code the
/// rules do not recognise. Both cases skip every shipping check. Free-text
/// fields carry length bounds for callers that accept untrusted input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, with = "country_code")]
    pub country: Option<Country>,
    #[serde(default)]
    #[validate(length(max = 64))]
    pub state: String,
    #[serde(default)]
    #[validate(length(max = 32))]
    pub zip_code: String,
}

impl Address {
    pub fn new(
        country: Option<Country>,
        state: impl Into<String>,
        zip_code: impl Into<String>,
    ) -> Self {
        Self {
            country,
            state: state.into(),
            zip_code: zip_code.into(),
        }
    }

    /// Build an address from raw form strings.
    pub fn from_codes(country: &str, state: &str, zip_code: &str) -> Self {
        Self::new(Country::from_code(country), state, zip_code)
    }
}

/// Serde adapter mapping `Option<Country>` to a plain code string.
///
/// Unset serialises as `""`. On input, `null`, `""` and unknown codes all
/// become `None`.
mod country_code {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Country;

    pub fn serialize<S: Serializer>(
        country: &Option<Country>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(country.map_or("", Country::code))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Country>, D::Error> {
        let code = Option::<String>::deserialize(deserializer)?;
        Ok(code.as_deref().and_then(Country::from_code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn country_codes_are_case_sensitive() {
        assert_eq!(Country::from_code("US"), Some(Country::Us));
        assert_eq!(Country::from_code("CA"), Some(Country::Ca));
        assert_eq!(Country::from_code("us"), None);
        assert_eq!(Country::from_code(""), None);
        assert_eq!(Country::from_code("MX"), None);
    }

    #[test]
    fn deserializes_camel_case_fields() {
        let address: Address =
            serde_json::from_value(json!({"country": "CA", "state": "ON", "zipCode": "K1A 0B1"}))
                .unwrap();
        assert_eq!(address, Address::new(Some(Country::Ca), "ON", "K1A 0B1"));
    }

    #[test]
    fn unknown_or_missing_country_is_unset() {
        let unknown: Address =
            serde_json::from_value(json!({"country": "DE", "zipCode": "10115"})).unwrap();
        assert_eq!(unknown.country, None);
        assert_eq!(unknown.state, "");

        let missing: Address = serde_json::from_value(json!({})).unwrap();
        assert_eq!(missing, Address::default());

        let null: Address = serde_json::from_value(json!({"country": null})).unwrap();
        assert_eq!(null.country, None);
    }

    #[test]
    fn oversized_fields_fail_length_bounds() {
        assert!(Address::from_codes("US", "NY", "10001").validate().is_ok());

        let long_zip = Address::from_codes("US", "NY", &"1".repeat(33));
        let errors = long_zip.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("zip_code"));

        let long_state = Address::from_codes("CA", &"O".repeat(65), "");
        assert!(long_state.validate().is_err());
    }

    #[test]
    fn unset_country_serializes_as_empty_string() {
        let value = serde_json::to_value(Address::from_codes("", "", "")).unwrap();
        assert_eq!(value, json!({"country": "", "state": "", "zipCode": ""}));

        let value = serde_json::to_value(Address::from_codes("US", "NY", "10001")).unwrap();
        assert_eq!(value["country"], "US");
    }
}
