//! Opaque Type References
//!
//! The resolver never inspects host-language types itself; it only compares
//! [`TypeRef`] values through the type-relation oracle. A reference is a
//! namespace plus a simple name, displayed in dotted form (`app.ui.MainScope`).

use core::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error produced when parsing a dotted type reference from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeRefParseError {
    #[error("type reference is empty")]
    Empty,

    #[error("type reference `{0}` ends with a separator")]
    MissingName(String),
}

/// An opaque reference to a host-language type.
///
/// The namespace may be empty for types declared in the default namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    pub namespace: String,
    pub name: String,
}

impl TypeRef {
    #[must_use]
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// The fully qualified dotted form, `namespace.name`, or just the name
    /// when the namespace is empty.
    #[must_use]
    pub fn qualified(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    /// Parses a dotted reference; everything before the last separator is the
    /// namespace.
    ///
    /// # Errors
    ///
    /// Returns [`TypeRefParseError`] for an empty string or a trailing `.`.
    pub fn parse(raw: &str) -> Result<Self, TypeRefParseError> {
        if raw.is_empty() {
            return Err(TypeRefParseError::Empty);
        }
        match raw.rsplit_once('.') {
            Some((_, "")) => Err(TypeRefParseError::MissingName(raw.to_string())),
            Some((namespace, name)) => Ok(Self::new(namespace, name)),
            None => Ok(Self::new("", raw)),
        }
    }
}

impl Display for TypeRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified())
    }
}

impl FromStr for TypeRef {
    type Err = TypeRefParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
