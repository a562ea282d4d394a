//! Money type for representing catalog prices.
//!
//! The catalog prices everything in whole currency units, so amounts are
//! plain integers with no minor-unit scaling.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::i18n::Lang;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    QAR,
    SAR,
    AED,
    KWD,
    USD,
}

impl Currency {
    /// Get the currency code (e.g., "QAR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::QAR => "QAR",
            Currency::SAR => "SAR",
            Currency::AED => "AED",
            Currency::KWD => "KWD",
            Currency::USD => "USD",
        }
    }

    /// Get the label shown next to amounts in the given language.
    pub fn label(&self, lang: Lang) -> &'static str {
        match (self, lang) {
            (_, Lang::En) => self.code(),
            (Currency::QAR, Lang::Ar) => "ر.ق",
            (Currency::SAR, Lang::Ar) => "ر.س",
            (Currency::AED, Lang::Ar) => "د.إ",
            (Currency::KWD, Lang::Ar) => "د.ك",
            (Currency::USD, Lang::Ar) => "دولار",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "QAR" => Some(Currency::QAR),
            "SAR" => Some(Currency::SAR),
            "AED" => Some(Currency::AED),
            "KWD" => Some(Currency::KWD),
            "USD" => Some(Currency::USD),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in whole currency units.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Format the amount with thousands grouping and a localized label
    /// (e.g., "7,998 QAR").
    pub fn display(&self, lang: Lang) -> String {
        format!("{} {}", group_thousands(self.amount), self.currency.label(lang))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display(Lang::En))
    }
}

/// Insert `,` between groups of three digits.
pub fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
