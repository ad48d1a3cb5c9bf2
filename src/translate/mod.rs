//! Pluggable translation capability.
//!
//! [`TranslationProvider`] decouples the pipeline's control flow from any
//! specific provider; the driver holds an `Arc<dyn TranslationProvider>` and
//! never knows whether the backend is a lookup table, a local model or a
//! remote API.
//!
//! The shipped backend is [`StaticTranslator`]: a two-level lookup keyed by
//! target-language code then by exact source sentence, covering the demo's
//! sentence pool in Hindi and Bengali.  A miss never errors — it returns the
//! explicit untranslated sentinel `"[<TARGET_UPPERCASE>] <text>"` so callers
//! can always render something.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

// ---------------------------------------------------------------------------
// TranslateError
// ---------------------------------------------------------------------------

/// Errors a translation backend may surface.
///
/// [`StaticTranslator`] never fails, but networked or model-backed providers
/// plugged into the same seam will.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The backend could not be reached or crashed mid-request.
    #[error("translation backend unavailable: {0}")]
    Backend(String),
}

// ---------------------------------------------------------------------------
// TranslationProvider trait
// ---------------------------------------------------------------------------

/// Async trait for text translation.
///
/// Implementors must be `Send + Sync` so they can be shared across threads
/// (e.g. wrapped in `Arc<dyn TranslationProvider>`).
///
/// # Contract
///
/// A provider that cannot translate a given sentence should return the
/// untranslated sentinel (see [`untranslated`]) rather than an error; errors
/// are reserved for backend failures and abort the whole pipeline run.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    async fn translate(&self, text: &str, from: &str, to: &str) -> Result<String, TranslateError>;
}

/// The explicit "untranslated" sentinel: `"[HI] some text"`.
pub fn untranslated(text: &str, to: &str) -> String {
    format!("[{}] {}", to.to_uppercase(), text)
}

// ---------------------------------------------------------------------------
// StaticTranslator
// ---------------------------------------------------------------------------

/// Lookup-table provider over the embedded demo dictionary.
pub struct StaticTranslator {
    /// target code → (exact source sentence → translation)
    table: HashMap<String, HashMap<String, String>>,
}

impl StaticTranslator {
    /// Parse the embedded table.  The table is a compile-time asset, so a
    /// parse failure is a build defect rather than a runtime condition.
    pub fn new() -> Self {
        let table = serde_json::from_str(include_str!("translations.json"))
            .unwrap_or_else(|e| {
                log::error!("embedded translation table is invalid: {e}");
                HashMap::new()
            });
        Self { table }
    }

    fn lookup(&self, text: &str, to: &str) -> Option<&str> {
        self.table.get(to)?.get(text).map(String::as_str)
    }
}

impl Default for StaticTranslator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranslationProvider for StaticTranslator {
    /// Exact-sentence lookup; the source language is irrelevant to a static
    /// table and is ignored.
    async fn translate(&self, text: &str, _from: &str, to: &str) -> Result<String, TranslateError> {
        Ok(self
            .lookup(text, to)
            .map(str::to_string)
            .unwrap_or_else(|| untranslated(text, to)))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
