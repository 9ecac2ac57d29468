//! Clauses of the agreement.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Optional clauses the landlord may include. Each one is substituted into
/// the document under its own camelCase name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptionalTerms {
    #[serde(deserialize_with = "null_as_default")]
    pub contents_and_conditions: String,
    #[serde(deserialize_with = "null_as_default")]
    pub local_authority_taxes_and_charges: String,
    #[serde(deserialize_with = "null_as_default")]
    pub utilities: String,
    #[serde(deserialize_with = "null_as_default")]
    pub common_parts: String,
    #[serde(deserialize_with = "null_as_default")]
    pub alterations: String,
    #[serde(deserialize_with = "null_as_default")]
    pub private_garden: String,
    #[serde(deserialize_with = "null_as_default")]
    pub roof: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bins_and_recycling: String,
    #[serde(deserialize_with = "null_as_default")]
    pub storage: String,
    #[serde(deserialize_with = "null_as_default")]
    pub dangerous_substances: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pets: String,
    #[serde(deserialize_with = "null_as_default")]
    pub smoking: String,
}

impl OptionalTerms {
    /// Every clause paired with its template field name.
    pub fn named_clauses(&self) -> [(&'static str, &str); 12] {
        [
            ("contentsAndConditions", &self.contents_and_conditions),
            (
                "localAuthorityTaxesAndCharges",
                &self.local_authority_taxes_and_charges,
            ),
            ("utilities", &self.utilities),
            ("commonParts", &self.common_parts),
            ("alterations", &self.alterations),
            ("privateGarden", &self.private_garden),
            ("roof", &self.roof),
            ("binsAndRecycling", &self.bins_and_recycling),
            ("storage", &self.storage),
            ("dangerousSubstances", &self.dangerous_substances),
            ("pets", &self.pets),
            ("smoking", &self.smoking),
        ]
    }
}

/// Clauses every model tenancy agreement must contain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MustIncludeTerms {
    #[serde(deserialize_with = "null_as_default")]
    pub rent_increases: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subletting: String,
    #[serde(deserialize_with = "null_as_default")]
    pub notifications: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ending_the_tenancy: String,
}

/// A free-form clause added by the landlord.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Term {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clause_names_match_serialized_keys() {
        let terms = OptionalTerms::default();
        let json = serde_json::to_value(&terms).unwrap();
        let object = json.as_object().unwrap();

        let names: Vec<_> = terms.named_clauses().iter().map(|(n, _)| *n).collect();
        assert_eq!(names.len(), object.len());
        for name in names {
            assert!(object.contains_key(name), "missing serialized key {name}");
        }
    }
}
