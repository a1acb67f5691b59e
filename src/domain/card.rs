use chrono::Datelike;
use serde::Serialize;
use std::fmt;

/// Card networks recognised by prefix and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CardBrand {
    #[serde(rename = "visa")]
    Visa,
    #[serde(rename = "mastercard")]
    MasterCard,
    #[serde(rename = "amex")]
    AmericanExpress,
    #[serde(rename = "dinersclub")]
    DinersClub,
    #[serde(rename = "discover")]
    Discover,
    #[serde(rename = "jcb")]
    Jcb,
}

const ACCEPTED_BRANDS: [&str; 2] = ["visa", "mastercard"];

struct BrandRule {
    brand: CardBrand,
    /// Inclusive prefix ranges; the width of `low` is the number of leading digits compared.
    prefixes: &'static [(u32, u32)],
    lengths: &'static [usize],
}

const BRAND_RULES: &[BrandRule] = &[
    BrandRule {
        brand: CardBrand::Visa,
        prefixes: &[(4, 4)],
        lengths: &[13, 16, 19],
    },
    BrandRule {
        brand: CardBrand::MasterCard,
        prefixes: &[(51, 55), (2221, 2720)],
        lengths: &[16],
    },
    BrandRule {
        brand: CardBrand::AmericanExpress,
        prefixes: &[(34, 34), (37, 37)],
        lengths: &[15],
    },
    BrandRule {
        brand: CardBrand::DinersClub,
        prefixes: &[(300, 305), (3095, 3095), (36, 36), (38, 39)],
        lengths: &[14, 15, 16, 17, 18, 19],
    },
    BrandRule {
        brand: CardBrand::Discover,
        prefixes: &[(6011, 6011), (622126, 622925), (644, 649), (65, 65)],
        lengths: &[16, 17, 18, 19],
    },
    BrandRule {
        brand: CardBrand::Jcb,
        prefixes: &[(3528, 3589)],
        lengths: &[16, 17, 18, 19],
    },
];

impl CardBrand {
    pub fn label(self) -> &'static str {
        match self {
            CardBrand::Visa => "visa",
            CardBrand::MasterCard => "mastercard",
            CardBrand::AmericanExpress => "amex",
            CardBrand::DinersClub => "dinersclub",
            CardBrand::Discover => "discover",
            CardBrand::Jcb => "jcb",
        }
    }

    /// Only VISA and MasterCard are accepted.
    pub fn is_accepted(self) -> bool {
        ACCEPTED_BRANDS
            .iter()
            .any(|accepted| accepted.eq_ignore_ascii_case(self.label()))
    }

    /// Detects the brand of a normalized digit string from its prefix and length.
    pub fn detect(digits: &str) -> Option<Self> {
        BRAND_RULES
            .iter()
            .find(|rule| {
                rule.lengths.contains(&digits.len())
                    && rule
                        .prefixes
                        .iter()
                        .any(|&range| matches_prefix(digits, range))
            })
            .map(|rule| rule.brand)
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn matches_prefix(digits: &str, (low, high): (u32, u32)) -> bool {
    let width = low.ilog10() as usize + 1;
    digits
        .get(..width)
        .and_then(|prefix| prefix.parse::<u32>().ok())
        .is_some_and(|prefix| (low..=high).contains(&prefix))
}

/// Luhn mod-10 checksum. Any non-digit character fails the check.
pub fn luhn_checksum_valid(digits: &str) -> bool {
    let mut sum = 0;
    for (i, c) in digits.chars().rev().enumerate() {
        let Some(mut digit) = c.to_digit(10) else {
            return false;
        };
        if i % 2 == 1 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
    }
    !digits.is_empty() && sum % 10 == 0
}

/// A card number with separators removed.
///
/// This is the only place raw card numbers are normalized: brand detection,
/// the checksum and the last-four suffix all read the same digits.
#[derive(Clone, PartialEq, Eq)]
pub struct CardNumber(String);

impl CardNumber {
    /// Strips spaces and hyphens. Returns `None` if anything other than
    /// ASCII digits remains, or if nothing remains.
    pub fn parse(raw: &str) -> Option<Self> {
        let digits: String = raw.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self(digits))
    }

    pub fn digits(&self) -> &str {
        &self.0
    }

    pub fn last_four(&self) -> &str {
        let start = self.0.len().saturating_sub(4);
        &self.0[start..]
    }

    /// All but the last four digits replaced with `*`.
    pub fn masked(&self) -> String {
        let hidden = self.0.len() - self.last_four().len();
        format!("{}{}", "*".repeat(hidden), self.last_four())
    }

    pub fn brand(&self) -> Option<CardBrand> {
        CardBrand::detect(&self.0)
    }

    pub fn passes_luhn(&self) -> bool {
        luhn_checksum_valid(&self.0)
    }
}

impl fmt::Debug for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CardNumber").field(&self.masked()).finish()
    }
}

/// Outcome of structural card-number validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDetails {
    pub number: Option<CardNumber>,
    pub brand: Option<CardBrand>,
    pub valid: bool,
}

/// A calendar month, ordered through `year * 12 + month`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn from_date(date: &impl Datelike) -> Self {
        Self::new(date.year(), date.month())
    }

    pub fn period(self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month)
    }
}

/// Credit-card payload of a charge request, as received from the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditCard {
    pub credit_card_number: String,
    pub credit_card_expiration_month: u32,
    pub credit_card_expiration_year: i32,
}

impl CreditCard {
    pub fn new(number: impl Into<String>, month: u32, year: i32) -> Self {
        Self {
            credit_card_number: number.into(),
            credit_card_expiration_month: month,
            credit_card_expiration_year: year,
        }
    }

    pub fn expiration(&self) -> YearMonth {
        YearMonth::new(
            self.credit_card_expiration_year,
            self.credit_card_expiration_month,
        )
    }

    /// Normalizes the number and reports its brand and validity.
    /// A number is valid when it passes Luhn and matches a known brand.
    pub fn details(&self) -> CardDetails {
        let number = CardNumber::parse(&self.credit_card_number);
        let brand = number.as_ref().and_then(CardNumber::brand);
        let valid = brand.is_some() && number.as_ref().is_some_and(CardNumber::passes_luhn);
        CardDetails {
            number,
            brand,
            valid,
        }
    }
}
