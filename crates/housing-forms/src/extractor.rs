//! Field extraction for the model tenancy document.
//!
//! Flattens a [`Tenancy`] into the placeholder values the agreement
//! template expects. Extraction is total: blank or unrecognised answers
//! render as empty strings or fixed placeholder text.
//!
//! Several fields are show/hide toggles for template sections. A single
//! space shows the section and the empty string hides it.

use housing_core::collaborators::FieldExtractor;
use housing_core::fields::Fields;
use housing_core::models::person::{AgentOrLandlord, is_blank};
use housing_core::models::service::Service;
use housing_core::models::tenancy::Tenancy;
use housing_core::models::terms::OptionalTerms;
use housing_core::models::tri_state::TriState;
use tracing::debug;

use crate::choices::{CommunicationsAgreement, FurnishingType, RentPaymentFrequency};
use crate::deposit_schemes;
use crate::format::{
    NEWLINE, NOT_APPLICABLE, address_multiple_lines, format_date, na_for_empty, name_and_address,
    numbered_value,
};

const SHOW: &str = " ";
const HIDE: &str = "";
const SELECTED: &str = "X";
const UNSELECTED: &str = " ";

/// Printed in place of a landlord registration number not yet issued.
pub const PENDING_REGISTRATION: &str =
    "Pending – the Landlord will inform the Tenant of the Registration number once they have it";

/// Extracts template fields from a [`Tenancy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelTenancyFieldExtractor;

impl ModelTenancyFieldExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor<Tenancy> for ModelTenancyFieldExtractor {
    fn extract_fields(&self, tenancy: &Tenancy) -> Fields {
        let mut fields = Fields::new();

        // Same order as the sections of the agreement.
        extract_tenants(tenancy, &mut fields);
        extract_letting_agent(tenancy, &mut fields);
        extract_landlords(tenancy, &mut fields);
        extract_communications_agreement(tenancy, &mut fields);
        extract_property_details(tenancy, &mut fields);
        fields.put("tenancyStartDate", format_date(tenancy.tenancy_start_date));
        extract_rent(tenancy, &mut fields);
        extract_deposit(tenancy, &mut fields);
        extract_optional_terms(&tenancy.optional_terms, &mut fields);
        fields.put(
            "endingTheTenancy",
            tenancy.must_include_terms.ending_the_tenancy.as_str(),
        );

        fields
    }
}

fn extract_tenants(tenancy: &Tenancy, fields: &mut Fields) {
    let mut names_and_addresses = Vec::new();
    let mut emails = Vec::new();
    let mut phones = Vec::new();

    for (i, tenant) in tenancy.filled_tenants().enumerate() {
        let index = i + 1;
        names_and_addresses.push(name_and_address(&tenant.name, &tenant.address, index));
        emails.push(numbered_value(&tenant.email, index));
        phones.push(numbered_value(&tenant.telephone, index));
    }

    fields.put("tenantNamesAndAddresses", names_and_addresses.join(NEWLINE));
    fields.put("tenantEmails", emails.join(NEWLINE));
    fields.put("tenantPhoneNumbers", phones.join(NEWLINE));
}

fn extract_letting_agent(tenancy: &Tenancy, fields: &mut Fields) {
    let show = if tenancy.declined_letting_agent() { HIDE } else { SHOW };
    fields.put("showLettingAgentService", show);

    let Some(agent) = &tenancy.letting_agent else {
        return;
    };

    fields.put("lettingAgentName", agent.name.as_str());
    fields.put("lettingAgentAddress", address_multiple_lines(&agent.address));
    fields.put("lettingAgentEmail", na_for_empty(&agent.email));
    fields.put("lettingAgentPhone", na_for_empty(&agent.telephone));
    fields.put(
        "lettingAgentRegistrationNumber",
        agent.registration_number.as_str(),
    );
}

fn extract_landlords(tenancy: &Tenancy, fields: &mut Fields) {
    let mut names = Vec::new();
    let mut addresses = Vec::new();
    let mut emails = Vec::new();
    let mut phones = Vec::new();
    let mut reg_numbers = Vec::new();

    for (i, landlord) in tenancy.filled_landlords().enumerate() {
        let index = i + 1;
        names.push(format!("Name ({index}): {}", landlord.name));
        addresses.push(format!(
            "Address ({index}): {NEWLINE}{}{NEWLINE}",
            address_multiple_lines(&landlord.address)
        ));
        emails.push(numbered_value(&landlord.email, index));
        phones.push(numbered_value(&landlord.telephone, index));
        reg_numbers.push(format!(
            "Registration number (Landlord {index}):  {}",
            registration_number(landlord)
        ));
    }

    fields.put("landlordNames", names.join(NEWLINE));
    fields.put("landlordAddresses", addresses.join(NEWLINE));
    fields.put("landlordEmails", emails.join(NEWLINE));
    fields.put("landlordPhones", phones.join(NEWLINE));
    fields.put("landlordRegNumbers", reg_numbers.join("\n\n"));
}

/// `[<number>]`, or the pending sentence when no number was given.
pub fn registration_number(landlord: &AgentOrLandlord) -> String {
    if is_blank(&landlord.registration_number) {
        PENDING_REGISTRATION.to_owned()
    } else {
        format!("[{}]", landlord.registration_number)
    }
}

fn extract_communications_agreement(tenancy: &Tenancy, fields: &mut Fields) {
    // An unrecognised answer marks neither box and leaves the email
    // paragraphs in.
    let (hardcopy, email, show_email_paragraphs) = match tenancy
        .communications_agreement
        .parse::<CommunicationsAgreement>()
    {
        Ok(CommunicationsAgreement::Hardcopy) => (SELECTED, UNSELECTED, HIDE),
        Ok(CommunicationsAgreement::Email) => (UNSELECTED, SELECTED, SHOW),
        Err(_) => (UNSELECTED, UNSELECTED, SHOW),
    };

    fields.put("communicationsAgreementHardcopy", hardcopy);
    fields.put("communicationsAgreementEmail", email);
    fields.put("showEmailParagraphs", show_email_paragraphs);
}

fn extract_property_details(tenancy: &Tenancy, fields: &mut Fields) {
    fields.put("propertyAddress", tenancy.property_address.as_str());
    fields.put("propertyType", tenancy.property_type.as_str());
    fields.put(
        "furnishingType",
        FurnishingType::describe(&tenancy.furnishing_type),
    );
    fields.put(
        "rentPressureZoneString",
        is_or_is_not(tenancy.in_rent_pressure_zone),
    );

    extract_hmo(tenancy, fields);
    extract_services(tenancy, fields);
    extract_facilities(tenancy, fields);
}

fn is_or_is_not(answer: TriState) -> &'static str {
    answer.select("is", "is not", "")
}

fn extract_hmo(tenancy: &Tenancy, fields: &mut Fields) {
    let mut contact_number = String::new();
    let mut expiry_date = String::new();
    let mut renewal_submitted = false;
    let mut show_notification = SHOW;
    let mut show_fields = SHOW;

    match tenancy.hmo_property {
        TriState::Yes => {
            contact_number = tenancy.hmo24_contact_number.clone();
            renewal_submitted = tenancy.hmo_renewal_application_submitted.unwrap_or(false);
            expiry_date = format_date(tenancy.hmo_registration_expiry_date);
            show_notification = HIDE;
        }
        TriState::No => {
            contact_number = NOT_APPLICABLE.to_owned();
            expiry_date = NOT_APPLICABLE.to_owned();
            show_fields = HIDE;
        }
        TriState::Unanswered => {}
    }

    fields.put("hmoString", is_or_is_not(tenancy.hmo_property));
    fields.put("hmoContactNumber", contact_number);
    fields.put("hmoRenewalApplicationSubmitted", renewal_submitted);
    fields.put("hmoExpiryDate", expiry_date);
    fields.put("showHmoNotification", show_notification);
    fields.put("showHmoFields", show_fields);
}

fn extract_services(tenancy: &Tenancy, fields: &mut Fields) {
    fields.put(
        "servicesIncludedInRent",
        join_services(&tenancy.services_included_in_rent),
    );
    fields.put(
        "lettingAgentServices",
        join_services(&tenancy.services_provided_by_letting_agent),
    );
    fields.put(
        "lettingAgentPointOfContactServices",
        join_services(&tenancy.services_letting_agent_is_first_contact_for),
    );
}

fn join_services(services: &[Service]) -> String {
    services
        .iter()
        .map(Service::format)
        .collect::<Vec<_>>()
        .join(", ")
}

fn extract_facilities(tenancy: &Tenancy, fields: &mut Fields) {
    fields.put(
        "includedAreasOrFacilities",
        tenancy.included_areas_or_facilities.join(", "),
    );
    fields.put(
        "excludedAreasFacilities",
        tenancy.excluded_areas_facilities.join(", "),
    );
    fields.put("sharedFacilities", tenancy.shared_facilities.join(", "));
}

fn extract_rent(tenancy: &Tenancy, fields: &mut Fields) {
    let frequency = RentPaymentFrequency::parse_code(&tenancy.rent_payment_frequency);

    fields.put("rentAmount", tenancy.rent_amount.as_str());
    fields.put("originalRentAmount", tenancy.rent_amount.as_str());
    fields.put(
        "rentPaymentFrequency",
        frequency.map(RentPaymentFrequency::description).unwrap_or(""),
    );
    fields.put(
        "rentPaymentFrequencyDayOrDate",
        frequency.map(RentPaymentFrequency::day_or_date).unwrap_or(""),
    );
    fields.put(
        "advanceOrArrears",
        tenancy.rent_payable_in_advance.select("advance", "arrears", ""),
    );
    fields.put("firstPaymentDate", format_date(tenancy.first_payment_date));
    fields.put("firstPaymentAmount", tenancy.first_payment_amount.as_str());
    fields.put(
        "firstPaymentPeriodStart",
        format_date(tenancy.tenancy_start_date),
    );
    fields.put(
        "firstPaymentPeriodEnd",
        format_date(tenancy.first_payment_period_end),
    );
    fields.put("rentPaymentSchedule", tenancy.rent_payment_schedule.as_str());
    fields.put("rentPaymentMethod", tenancy.rent_payment_method.as_str());
}

fn extract_deposit(tenancy: &Tenancy, fields: &mut Fields) {
    let administrator = &tenancy.tenancy_deposit_scheme_administrator;

    fields.put("depositAmount", tenancy.deposit_amount.as_str());
    fields.put("depositSchemeAdministrator", administrator.as_str());
    fields.put(
        "depositSchemeContactDetails",
        deposit_schemes::contact_details_for(administrator),
    );
}

fn extract_optional_terms(terms: &OptionalTerms, fields: &mut Fields) {
    let clauses = terms.named_clauses();
    for (name, clause) in clauses {
        fields.put(name, clause);
    }
    debug!(count = clauses.len(), "Copied optional terms");
}
