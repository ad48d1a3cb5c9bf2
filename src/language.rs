//! Supported-language catalog.
//!
//! A fixed ordered list of `(code, name, flag)` tuples used to populate both
//! the source-language and target-language selectors identically.  Any code
//! may be chosen for both fields — same-language "dubbing" is allowed.

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

/// Static metadata for one supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO-639-1 code used throughout the pipeline (e.g. `"hi"`).
    pub code: &'static str,
    /// English display name shown in the selectors.
    pub name: &'static str,
    /// Flag glyph shown next to the name.
    pub flag: &'static str,
}

impl Language {
    /// `"🇮🇳 Hindi"` — the selector label.
    pub fn label(&self) -> String {
        format!("{} {}", self.flag, self.name)
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// All languages offered by the studio, in display order.
pub const SUPPORTED_LANGUAGES: &[Language] = &[
    Language { code: "en", name: "English", flag: "🇬🇧" },
    Language { code: "hi", name: "Hindi", flag: "🇮🇳" },
    Language { code: "bn", name: "Bengali", flag: "🇧🇩" },
    Language { code: "es", name: "Spanish", flag: "🇪🇸" },
    Language { code: "fr", name: "French", flag: "🇫🇷" },
    Language { code: "de", name: "German", flag: "🇩🇪" },
    Language { code: "ja", name: "Japanese", flag: "🇯🇵" },
    Language { code: "ko", name: "Korean", flag: "🇰🇷" },
    Language { code: "zh", name: "Chinese", flag: "🇨🇳" },
    Language { code: "ar", name: "Arabic", flag: "🇸🇦" },
    Language { code: "pt", name: "Portuguese", flag: "🇵🇹" },
    Language { code: "ru", name: "Russian", flag: "🇷🇺" },
    Language { code: "it", name: "Italian", flag: "🇮🇹" },
    Language { code: "tr", name: "Turkish", flag: "🇹🇷" },
    Language { code: "pl", name: "Polish", flag: "🇵🇱" },
    Language { code: "nl", name: "Dutch", flag: "🇳🇱" },
    Language { code: "sv", name: "Swedish", flag: "🇸🇪" },
    Language { code: "ta", name: "Tamil", flag: "🇮🇳" },
    Language { code: "te", name: "Telugu", flag: "🇮🇳" },
    Language { code: "mr", name: "Marathi", flag: "🇮🇳" },
];

/// Look up a language by its code.
pub fn find_language(code: &str) -> Option<&'static Language> {
    SUPPORTED_LANGUAGES.iter().find(|l| l.code == code)
}

/// Display name for a code, falling back to the code itself when the code is
/// not in the catalog.
pub fn language_name(code: &str) -> &str {
    find_language(code).map(|l| l.name).unwrap_or(code)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
