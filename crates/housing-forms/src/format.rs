//! Small presentation helpers shared by the field extractor.

use chrono::NaiveDate;
use housing_core::models::person::{Address, is_blank};

/// Shown in place of a value that does not apply to this agreement.
pub const NOT_APPLICABLE: &str = "N/A";

pub const NEWLINE: &str = "\n";

/// Day/month/year, as printed on the agreement.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Format an optional date; absent dates render as the empty string.
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

pub fn na_for_empty(value: &str) -> String {
    if is_blank(value) {
        NOT_APPLICABLE.to_owned()
    } else {
        value.to_owned()
    }
}

/// `"(<index>) <value>"`, with `N/A` for a blank value.
pub fn numbered_value(value: &str, index: usize) -> String {
    format!("({index}) {}", na_for_empty(value))
}

/// Non-blank address lines, one per line.
pub fn address_multiple_lines(address: &Address) -> String {
    address
        .lines()
        .into_iter()
        .filter(|line| !is_blank(line))
        .collect::<Vec<_>>()
        .join(NEWLINE)
}

/// `"Name (i): <name>\nAddress (i): \n<address>\n"`.
pub fn name_and_address(name: &str, address: &Address, index: usize) -> String {
    format!(
        "Name ({index}): {name}{NEWLINE}Address ({index}): {NEWLINE}{}{NEWLINE}",
        address_multiple_lines(address)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_dates_day_first() {
        let date = NaiveDate::from_ymd_opt(2018, 3, 1);
        assert_eq!(format_date(date), "01/03/2018");
        assert_eq!(format_date(None), "");
    }

    #[test]
    fn numbered_value_substitutes_na() {
        assert_eq!(numbered_value("a@b.com", 2), "(2) a@b.com");
        assert_eq!(numbered_value("", 1), "(1) N/A");
    }

    #[test]
    fn address_skips_blank_lines() {
        let address = Address {
            building: "1 High Street".into(),
            street: "".into(),
            town: "Edinburgh".into(),
            region: "  ".into(),
            postcode: "EH1 1AA".into(),
        };
        assert_eq!(
            address_multiple_lines(&address),
            "1 High Street\nEdinburgh\nEH1 1AA"
        );
        assert_eq!(address_multiple_lines(&Address::default()), "");
    }

    #[test]
    fn name_and_address_block() {
        let address = Address {
            building: "2 Low Road".into(),
            town: "Perth".into(),
            ..Default::default()
        };
        assert_eq!(
            name_and_address("Ann", &address, 1),
            "Name (1): Ann\nAddress (1): \n2 Low Road\nPerth\n"
        );
    }
}
