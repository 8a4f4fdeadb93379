// File: crates/texfig-core/src/locale.rs
// Summary: Number locale passed explicitly to axis label formatting.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberLocale {
    #[default]
    English,
    /// Decimal comma.
    German,
}

impl NumberLocale {
    /// `de = true` selects the German number format.
    pub fn from_de_flag(de: bool) -> Self {
        if de { NumberLocale::German } else { NumberLocale::English }
    }

    pub const fn decimal_separator(self) -> char {
        match self {
            NumberLocale::English => '.',
            NumberLocale::German => ',',
        }
    }

    /// Replace the `.` decimal point of an already formatted number.
    pub fn localize(self, formatted: &str) -> String {
        match self {
            NumberLocale::English => formatted.to_string(),
            NumberLocale::German => formatted.replace('.', ","),
        }
    }
}
