//! Startup failure taxonomy.
//!
//! Only wiring can fail. Once a handler is attached it logs and swallows
//! browser errors instead of surfacing them.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors raised while attaching behaviors to the page.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// An element the markup contract guarantees is missing.
    #[error("required element missing: #{0}")]
    MissingElement(String),
    /// A browser API call failed.
    #[error("dom call failed ({context}): {detail}")]
    Dom { context: &'static str, detail: String },
    /// The inline page configuration could not be parsed.
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
}

impl WireError {
    /// Build a [`WireError::Dom`] from a plain message.
    pub fn browser(context: &'static str, detail: impl Into<String>) -> Self {
        Self::Dom { context, detail: detail.into() }
    }

    /// Build a [`WireError::Dom`] from a thrown browser value (`JsValue`),
    /// which only offers `Debug`.
    pub fn dom(context: &'static str, detail: impl std::fmt::Debug) -> Self {
        Self::Dom { context, detail: format!("{detail:?}") }
    }
}
