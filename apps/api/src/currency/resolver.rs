//! Location → currency resolver.
//!
//! Given the free-text location of a job posting, decides which currency symbol
//! to show next to its salary figures. Total over its input: absent, empty or
//! unrecognised locations fall back to the dollar sign.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::currency::regions::{matches_any, UK_REGIONS, US_REGIONS};

/// Display symbol for monetary figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurrencySymbol {
    #[default]
    #[serde(rename = "$")]
    Dollar,
    #[serde(rename = "£")]
    Pound,
}

impl CurrencySymbol {
    pub fn as_str(self) -> &'static str {
        match self {
            CurrencySymbol::Dollar => "$",
            CurrencySymbol::Pound => "£",
        }
    }

    /// Icon tag rendered alongside this symbol.
    pub fn icon(self) -> CurrencyIcon {
        match self {
            CurrencySymbol::Pound => CurrencyIcon::PoundSterling,
            CurrencySymbol::Dollar => CurrencyIcon::DollarSign,
        }
    }
}

impl fmt::Display for CurrencySymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon identifier consumed by the icon-rendering layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CurrencyIcon {
    #[default]
    DollarSign,
    PoundSterling,
}

impl CurrencyIcon {
    pub fn as_str(self) -> &'static str {
        match self {
            CurrencyIcon::DollarSign => "dollar-sign",
            CurrencyIcon::PoundSterling => "pound-sterling",
        }
    }
}

impl fmt::Display for CurrencyIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves the currency symbol for a job location.
///
/// Rules, first match wins:
/// 1. `None` → `$`
/// 2. contains `"new york"` or `"ny,"` → `$`
/// 3. matches the UK list and not the US list → `£`
/// 4. matches the US list → `$`
/// 5. otherwise → `$`
///
/// Matching is case-insensitive and unanchored.
pub fn resolve_currency_symbol(location: Option<&str>) -> CurrencySymbol {
    let Some(location) = location else {
        return CurrencySymbol::Dollar;
    };

    let normalized = location.to_lowercase();

    // "new york" / "ny," short-circuit to $ ahead of both region lists.
    if normalized.contains("new york") || normalized.contains("ny,") {
        return CurrencySymbol::Dollar;
    }

    let is_us = matches_any(&normalized, US_REGIONS);
    let is_uk = matches_any(&normalized, UK_REGIONS) && !is_us;

    match (is_uk, is_us) {
        (true, false) => CurrencySymbol::Pound,
        (_, true) => CurrencySymbol::Dollar,
        _ => CurrencySymbol::Dollar,
    }
}

/// Resolves the icon tag for a job location. Pound sterling iff the symbol is `£`.
pub fn resolve_currency_icon(location: Option<&str>) -> CurrencyIcon {
    resolve_currency_symbol(location).icon()
}

/// Extracts a usable location from an arbitrary JSON value.
/// Only JSON strings qualify; numbers, objects, arrays and null yield `None`.
pub fn location_from_value(value: &Value) -> Option<&str> {
    value.as_str()
}
