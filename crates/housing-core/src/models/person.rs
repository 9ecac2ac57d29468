//! People named on the agreement: tenants, landlords, letting agents and
//! guarantors.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A postal address as captured by the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    #[serde(deserialize_with = "null_as_default")]
    pub building: String,
    #[serde(deserialize_with = "null_as_default")]
    pub street: String,
    #[serde(deserialize_with = "null_as_default")]
    pub town: String,
    #[serde(deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(deserialize_with = "null_as_default")]
    pub postcode: String,
}

impl Address {
    /// Address lines in display order.
    pub fn lines(&self) -> [&str; 5] {
        [
            &self.building,
            &self.street,
            &self.town,
            &self.region,
            &self.postcode,
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.lines().iter().all(|line| is_blank(line))
    }
}

/// A tenant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Person {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: Address,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub telephone: String,
}

impl Person {
    /// True when nothing has been filled in for this slot.
    pub fn is_empty(&self) -> bool {
        is_blank(&self.name)
            && is_blank(&self.email)
            && is_blank(&self.telephone)
            && self.address.is_empty()
    }
}

/// A landlord or letting agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AgentOrLandlord {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: Address,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub telephone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub registration_number: String,
}

impl AgentOrLandlord {
    pub fn is_empty(&self) -> bool {
        is_blank(&self.name)
            && is_blank(&self.email)
            && is_blank(&self.telephone)
            && is_blank(&self.registration_number)
            && self.address.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Guarantor {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: Address,
}

/// True for empty or whitespace-only strings.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_person_is_empty() {
        assert!(Person::default().is_empty());
        assert!(AgentOrLandlord::default().is_empty());
    }

    #[test]
    fn whitespace_only_fields_count_as_empty() {
        let person = Person {
            name: "   ".into(),
            telephone: "\t".into(),
            ..Default::default()
        };
        assert!(person.is_empty());
    }

    #[test]
    fn any_address_line_makes_person_non_empty() {
        let person = Person {
            address: Address {
                postcode: "EH1 1AA".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(!person.is_empty());
    }

    #[test]
    fn registration_number_alone_makes_landlord_non_empty() {
        let landlord = AgentOrLandlord {
            registration_number: "12345".into(),
            ..Default::default()
        };
        assert!(!landlord.is_empty());
    }
}
