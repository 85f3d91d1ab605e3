//! Diagnostics returned by resource operations

use std::fmt;

use serde::Serialize;

use crate::error::Error;

/// A single user-facing problem report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Diagnostic {
    pub fn error(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Ordered collection of diagnostics.
///
/// Displays as its summaries joined by `"; "`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diag: Diagnostic) {
        self.0.push(diag);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }
}

impl From<Diagnostic> for Diagnostics {
    fn from(diag: Diagnostic) -> Self {
        Self(vec![diag])
    }
}

impl From<Error> for Diagnostics {
    fn from(err: Error) -> Self {
        Diagnostic::error(err.to_string()).into()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summaries: Vec<String> = self
            .iter()
            .map(|d| match &d.detail {
                Some(detail) => format!("{} ({})", d.summary, detail),
                None => d.summary.clone(),
            })
            .collect();
        f.write_str(&summaries.join("; "))
    }
}

impl std::error::Error for Diagnostics {}

/// Turn a client error into a diagnostic carrying the call's context.
///
/// The HTTP status, when the error has one, goes into the detail.
pub fn translate_client_error(err: &Error, msg: &str) -> Diagnostics {
    let diag = Diagnostic::error(format!("{}: {}", msg, err));
    match err.status() {
        Some(status) => diag.with_detail(format!("HTTP {}", status)).into(),
        None => diag.into(),
    }
}
