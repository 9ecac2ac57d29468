//! Closed sets of answers the form submits as upper-case codes.
//!
//! The model stores the raw submitted strings; these enums parse them at
//! extraction time so an unrecognised code degrades to a blank rendering
//! instead of failing the request.

use strum::EnumString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CommunicationsAgreement {
    Hardcopy,
    Email,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FurnishingType {
    Furnished,
    PartlyFurnished,
    Unfurnished,
}

impl FurnishingType {
    pub fn description(self) -> &'static str {
        match self {
            FurnishingType::Furnished => "Furnished",
            FurnishingType::PartlyFurnished => "Partly Furnished",
            FurnishingType::Unfurnished => "Unfurnished",
        }
    }

    /// Description of a submitted code; blank when unrecognised.
    pub fn describe(code: &str) -> &'static str {
        code.parse::<Self>().map(Self::description).unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RentPaymentFrequency {
    Weekly,
    Fortnightly,
    FourWeekly,
    CalendarMonthly,
    Quarterly,
    SixMonthly,
    Annually,
}

impl RentPaymentFrequency {
    /// Completes "payable per ...".
    pub fn description(self) -> &'static str {
        match self {
            RentPaymentFrequency::Weekly => "week",
            RentPaymentFrequency::Fortnightly => "fortnight",
            RentPaymentFrequency::FourWeekly => "four weeks",
            RentPaymentFrequency::CalendarMonthly => "calendar month",
            RentPaymentFrequency::Quarterly => "quarter",
            RentPaymentFrequency::SixMonthly => "six months",
            RentPaymentFrequency::Annually => "year",
        }
    }

    /// Whether rent falls due on a day of the week or a date of the month.
    pub fn day_or_date(self) -> &'static str {
        match self {
            RentPaymentFrequency::Weekly
            | RentPaymentFrequency::Fortnightly
            | RentPaymentFrequency::FourWeekly => "day",
            _ => "date",
        }
    }

    pub fn parse_code(code: &str) -> Option<Self> {
        code.parse().ok()
    }
}
