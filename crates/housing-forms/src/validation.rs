//! Minimal submission rules for the model tenancy form.

use housing_core::collaborators::Validator;
use housing_core::error::{HousingError, HousingResult, Violation};
use housing_core::models::person::is_blank;
use housing_core::models::tenancy::Tenancy;
use tracing::warn;

/// Rejects submissions that cannot produce a meaningful agreement.
///
/// Every rule is checked and all violations are reported together.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelTenancyValidator;

impl ModelTenancyValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn violations(&self, tenancy: &Tenancy) -> Vec<Violation> {
        let mut violations = Vec::new();

        if tenancy.filled_tenants().next().is_none() {
            violations.push(Violation::new("tenants", "at least one tenant is required"));
        }
        if tenancy.filled_landlords().next().is_none() {
            violations.push(Violation::new(
                "landlords",
                "at least one landlord is required",
            ));
        }
        if is_blank(&tenancy.property_address) {
            violations.push(Violation::new(
                "propertyAddress",
                "property address is required",
            ));
        }
        if tenancy.tenancy_start_date.is_none() {
            violations.push(Violation::new(
                "tenancyStartDate",
                "tenancy start date is required",
            ));
        }

        violations
    }
}

impl Validator<Tenancy> for ModelTenancyValidator {
    fn validate(&self, tenancy: &Tenancy) -> HousingResult<()> {
        let violations = self.violations(tenancy);
        if violations.is_empty() {
            return Ok(());
        }

        warn!(count = violations.len(), "Model tenancy failed validation");
        Err(HousingError::Validation { violations })
    }
}
