//! Diagnostics Sink
//!
//! Ordered per-round diagnostic records. Errors abort emission for the
//! affected scope only; warnings are advisory. Structural failures never land
//! here, they abort the round through `Result` instead.

use core::fmt;
use std::fmt::{Display, Formatter};

use weld_model::TypeRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// One diagnostic record, optionally tagged to a scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub scope: Option<TypeRef>,
}

impl Diagnostic {
    #[must_use]
    pub fn error(message: impl Into<String>, scope: Option<TypeRef>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            scope,
        }
    }

    #[must_use]
    pub fn warning(message: impl Into<String>, scope: Option<TypeRef>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            scope,
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Ordered collection of diagnostics for one round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    records: Vec<Diagnostic>,
}

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.records.push(diagnostic);
    }

    pub fn error(&mut self, message: impl Into<String>, scope: Option<TypeRef>) {
        self.push(Diagnostic::error(message, scope));
    }

    pub fn warning(&mut self, message: impl Into<String>, scope: Option<TypeRef>) {
        self.push(Diagnostic::warning(message, scope));
    }

    /// Appends all records of `other`, preserving order.
    pub fn merge(&mut self, other: Diagnostics) {
        self.records.extend(other.records);
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.records
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.records.iter()
    }

    /// Error records tagged to the given scope.
    pub fn errors_for<'a>(&'a self, scope: &'a TypeRef) -> impl Iterator<Item = &'a Diagnostic> {
        self.records
            .iter()
            .filter(move |d| d.severity == Severity::Error && d.scope.as_ref() == Some(scope))
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
