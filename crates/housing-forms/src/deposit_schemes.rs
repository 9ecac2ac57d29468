//! Registry of approved tenancy deposit scheme administrators.

use housing_core::models::person::is_blank;

use crate::format::NEWLINE;

/// Contact details for an approved deposit scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositSchemeAdministrator {
    pub name: &'static str,
    pub website: &'static str,
    pub email: &'static str,
    pub telephone: &'static str,
}

impl DepositSchemeAdministrator {
    /// Non-blank website, email and telephone, one per line.
    pub fn contact_details(&self) -> String {
        [self.website, self.email, self.telephone]
            .into_iter()
            .filter(|part| !is_blank(part))
            .collect::<Vec<_>>()
            .join(NEWLINE)
    }
}

static ADMINISTRATORS: [DepositSchemeAdministrator; 3] = [
    DepositSchemeAdministrator {
        name: "SafeDeposits Scotland",
        website: "www.safedepositsscotland.com",
        email: "info@safedepositsscotland.com",
        telephone: "03333 213 136",
    },
    DepositSchemeAdministrator {
        name: "Letting Protection Service Scotland",
        website: "www.lettingprotectionscotland.com",
        email: "info@lettingprotectionscotland.com",
        telephone: "0330 303 0031",
    },
    DepositSchemeAdministrator {
        name: "mydeposits Scotland",
        website: "www.mydepositsscotland.co.uk",
        email: "info@mydepositsscotland.co.uk",
        telephone: "0333 321 9402",
    },
];

/// Look up an administrator by its exact name.
pub fn for_name(name: &str) -> Option<&'static DepositSchemeAdministrator> {
    ADMINISTRATORS.iter().find(|admin| admin.name == name)
}

/// Contact details for the named administrator; empty when unknown.
pub fn contact_details_for(name: &str) -> String {
    for_name(name)
        .map(DepositSchemeAdministrator::contact_details)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_known_administrator() {
        let admin = for_name("SafeDeposits Scotland").unwrap();
        assert_eq!(admin.website, "www.safedepositsscotland.com");
    }

    #[test]
    fn unknown_or_blank_names_yield_nothing() {
        assert!(for_name("Acme Deposits").is_none());
        assert!(for_name("").is_none());
        assert!(for_name("safedeposits scotland").is_none());
        assert_eq!(contact_details_for("Acme Deposits"), "");
    }

    #[test]
    fn contact_details_are_newline_separated() {
        assert_eq!(
            contact_details_for("mydeposits Scotland"),
            "www.mydepositsscotland.co.uk\ninfo@mydepositsscotland.co.uk\n0333 321 9402"
        );
    }

    #[test]
    fn blank_parts_are_skipped() {
        let admin = DepositSchemeAdministrator {
            name: "Partial",
            website: "",
            email: "a@b.scot",
            telephone: " ",
        };
        assert_eq!(admin.contact_details(), "a@b.scot");
    }

    #[test]
    fn registry_names_are_unique() {
        let mut names: Vec<_> = ADMINISTRATORS.iter().map(|a| a.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ADMINISTRATORS.len());
    }
}
