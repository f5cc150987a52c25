//! Language codes understood by the DeepL v2 API.
//!
//! Source and target languages are deliberately separate types: a source
//! language may be left unspecified (the service then auto-detects it),
//! while a target language is always required and distinguishes Brazilian
//! Portuguese from the other Portuguese varieties.

use std::fmt;

use crate::deepl::error::Error;

/// Language of the text to be translated.
///
/// Parsing never fails: anything that is not a recognized code collapses
/// into [`SourceLang::Unspecified`], which tells the service to auto-detect
/// the language. This is the documented behavior, not an accident — an
/// unknown *target* language is a hard error instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceLang {
    De,
    En,
    Fr,
    It,
    Ja,
    Es,
    Nl,
    Pl,
    /// Portuguese, all varieties mixed.
    Pt,
    Ru,
    Zh,
    /// No source language; the field is omitted from the request.
    #[default]
    Unspecified,
}

impl SourceLang {
    /// Parses a case-insensitive language code, falling back to
    /// [`SourceLang::Unspecified`] on anything unrecognized.
    pub fn parse(code: &str) -> Self {
        match code.to_ascii_uppercase().as_str() {
            "DE" => Self::De,
            "EN" => Self::En,
            "FR" => Self::Fr,
            "IT" => Self::It,
            "JA" => Self::Ja,
            "ES" => Self::Es,
            "NL" => Self::Nl,
            "PL" => Self::Pl,
            "PT" => Self::Pt,
            "RU" => Self::Ru,
            "ZH" => Self::Zh,
            _ => Self::Unspecified,
        }
    }

    /// Returns `true` unless the value is the auto-detect sentinel.
    pub const fn is_set(self) -> bool {
        !matches!(self, Self::Unspecified)
    }
}

impl fmt::Display for SourceLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Self::De => "DE",
            Self::En => "EN",
            Self::Fr => "FR",
            Self::It => "IT",
            Self::Ja => "JA",
            Self::Es => "ES",
            Self::Nl => "NL",
            Self::Pl => "PL",
            Self::Pt => "PT",
            Self::Ru => "RU",
            Self::Zh => "ZH",
            Self::Unspecified => "",
        };
        f.write_str(code)
    }
}

/// Language into which the text should be translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetLang {
    De,
    En,
    Fr,
    It,
    Ja,
    Es,
    Nl,
    Pl,
    /// Portuguese, all varieties excluding Brazilian Portuguese.
    Pt,
    /// Portuguese (Brazilian).
    PtBr,
    Ru,
    Zh,
}

impl TargetLang {
    /// Parses a case-insensitive language code.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLanguage`] if the code is not one of the
    /// recognized target codes.
    pub fn parse(code: &str) -> Result<Self, Error> {
        match code.to_ascii_uppercase().as_str() {
            "DE" => Ok(Self::De),
            "EN" => Ok(Self::En),
            "FR" => Ok(Self::Fr),
            "IT" => Ok(Self::It),
            "JA" => Ok(Self::Ja),
            "ES" => Ok(Self::Es),
            "NL" => Ok(Self::Nl),
            "PL" => Ok(Self::Pl),
            "PT" => Ok(Self::Pt),
            "PT-BR" => Ok(Self::PtBr),
            "RU" => Ok(Self::Ru),
            "ZH" => Ok(Self::Zh),
            _ => Err(Error::InvalidLanguage(code.to_string())),
        }
    }
}

impl fmt::Display for TargetLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Self::De => "DE",
            Self::En => "EN",
            Self::Fr => "FR",
            Self::It => "IT",
            Self::Ja => "JA",
            Self::Es => "ES",
            Self::Nl => "NL",
            Self::Pl => "PL",
            Self::Pt => "PT",
            Self::PtBr => "PT-BR",
            Self::Ru => "RU",
            Self::Zh => "ZH",
        };
        f.write_str(code)
    }
}

/// Supported target language codes and their names.
pub const SUPPORTED_TARGETS: &[(&str, &str)] = &[
    ("DE", "German"),
    ("EN", "English"),
    ("FR", "French"),
    ("IT", "Italian"),
    ("JA", "Japanese"),
    ("ES", "Spanish"),
    ("NL", "Dutch"),
    ("PL", "Polish"),
    ("PT", "Portuguese"),
    ("PT-BR", "Portuguese (Brazilian)"),
    ("RU", "Russian"),
    ("ZH", "Chinese"),
];
