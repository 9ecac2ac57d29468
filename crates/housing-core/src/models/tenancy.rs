//! The model tenancy aggregate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::null_as_default;
use super::person::{AgentOrLandlord, Guarantor, Person};
use super::service::Service;
use super::terms::{MustIncludeTerms, OptionalTerms, Term};
use super::tri_state::TriState;

/// Value of `has_letting_agent` when the landlord explicitly said there is
/// no letting agent.
pub const NO_LETTING_AGENT: &str = "letting-agent-no";

/// Everything a user can submit on the model tenancy form.
///
/// Constructed fresh from each request, validated, extracted and then
/// dropped. List fields default to empty and text fields to the empty
/// string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tenancy {
    #[serde(deserialize_with = "null_as_default")]
    pub tenants: Vec<Person>,
    #[serde(deserialize_with = "null_as_default")]
    pub guarantors: Vec<Guarantor>,
    pub letting_agent: Option<AgentOrLandlord>,
    #[serde(deserialize_with = "null_as_default")]
    pub has_letting_agent: String,
    #[serde(deserialize_with = "null_as_default")]
    pub landlords: Vec<AgentOrLandlord>,
    #[serde(deserialize_with = "null_as_default")]
    pub communications_agreement: String,

    #[serde(deserialize_with = "null_as_default")]
    pub property_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub property_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub furnishing_type: String,
    pub in_rent_pressure_zone: TriState,
    pub hmo_property: TriState,
    #[serde(deserialize_with = "null_as_default")]
    pub hmo24_contact_number: String,
    pub hmo_renewal_application_submitted: Option<bool>,
    pub hmo_registration_expiry_date: Option<NaiveDate>,

    pub tenancy_start_date: Option<NaiveDate>,

    #[serde(deserialize_with = "null_as_default")]
    pub rent_amount: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rent_payment_frequency: String,
    pub rent_payable_in_advance: TriState,
    pub first_payment_date: Option<NaiveDate>,
    #[serde(deserialize_with = "null_as_default")]
    pub first_payment_amount: String,
    pub first_payment_period_end: Option<NaiveDate>,
    #[serde(deserialize_with = "null_as_default")]
    pub rent_payment_day_or_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rent_payment_schedule: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rent_payment_method: String,

    #[serde(deserialize_with = "null_as_default")]
    pub services_included_in_rent: Vec<Service>,
    #[serde(deserialize_with = "null_as_default")]
    pub services_provided_by_letting_agent: Vec<Service>,
    #[serde(deserialize_with = "null_as_default")]
    pub services_letting_agent_is_first_contact_for: Vec<Service>,
    #[serde(deserialize_with = "null_as_default")]
    pub included_areas_or_facilities: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub excluded_areas_facilities: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub shared_facilities: Vec<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub deposit_amount: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tenancy_deposit_scheme_administrator: String,

    #[serde(deserialize_with = "null_as_default")]
    pub optional_terms: OptionalTerms,
    #[serde(deserialize_with = "null_as_default")]
    pub must_include_terms: MustIncludeTerms,
    #[serde(deserialize_with = "null_as_default")]
    pub additional_terms: Vec<Term>,
    #[serde(deserialize_with = "null_as_default")]
    pub excluded_terms: Vec<String>,
}

impl Tenancy {
    /// Tenants with at least one field filled in, in submitted order.
    pub fn filled_tenants(&self) -> impl Iterator<Item = &Person> {
        self.tenants.iter().filter(|t| !t.is_empty())
    }

    /// Landlords with at least one field filled in, in submitted order.
    pub fn filled_landlords(&self) -> impl Iterator<Item = &AgentOrLandlord> {
        self.landlords.iter().filter(|l| !l.is_empty())
    }

    pub fn declined_letting_agent(&self) -> bool {
        self.has_letting_agent == NO_LETTING_AGENT
    }
}
