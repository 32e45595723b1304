//! Locale codes with the number-formatting separators [`crate::Numeric`] needs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A locale identifier carrying decimal and thousands separators.
///
/// Only the locales the library renders numbers for are listed; the separator
/// table is what `Numeric::format` consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    DeCh,
    DeDe,
    EnGb,
    EnUs,
    EsEs,
    FrFr,
    ItIt,
    JaJp,
    NlNl,
    PlPl,
    PtBr,
    SvSe,
}

impl Locale {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::DeCh => "de_CH",
            Self::DeDe => "de_DE",
            Self::EnGb => "en_GB",
            Self::EnUs => "en_US",
            Self::EsEs => "es_ES",
            Self::FrFr => "fr_FR",
            Self::ItIt => "it_IT",
            Self::JaJp => "ja_JP",
            Self::NlNl => "nl_NL",
            Self::PlPl => "pl_PL",
            Self::PtBr => "pt_BR",
            Self::SvSe => "sv_SE",
        }
    }

    /// Separator between the integer and fractional part.
    #[must_use]
    pub const fn decimal_separator(self) -> char {
        match self {
            Self::EnGb | Self::EnUs | Self::JaJp => '.',
            Self::DeCh
            | Self::DeDe
            | Self::EsEs
            | Self::FrFr
            | Self::ItIt
            | Self::NlNl
            | Self::PlPl
            | Self::PtBr
            | Self::SvSe => ',',
        }
    }

    /// Separator between thousands groups of the integer part.
    #[must_use]
    pub const fn thousands_separator(self) -> char {
        match self {
            Self::EnGb | Self::EnUs | Self::JaJp => ',',
            Self::DeCh => '\u{2019}',
            Self::DeDe | Self::EsEs | Self::ItIt | Self::NlNl | Self::PtBr => '.',
            Self::FrFr | Self::PlPl | Self::SvSe => '\u{a0}',
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
