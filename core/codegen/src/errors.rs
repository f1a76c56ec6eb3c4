//! Generation Errors
//!
//! All variants are local to one scope: they abort that scope's emission and
//! are reported through the diagnostics sink while the rest of the round
//! keeps generating.

use thiserror::Error;
use weld_model::{Category, TypeRef};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error(
        "unknown parent type: scope `{scope}` cannot dispatch on parent `{parent}` \
         of category {parent_category}"
    )]
    UnknownParentType {
        scope: TypeRef,
        parent: TypeRef,
        parent_category: Category,
    },

    #[error("unknown parent type: parent `{parent}` of scope `{scope}` has no category")]
    UnclassifiedParent { scope: TypeRef, parent: TypeRef },

    #[error("no valid constructor for module `{module}` on scope `{scope}`")]
    NoValidConstructor { scope: TypeRef, module: TypeRef },

    #[error("scope `{scope}` has no resolved governing parent")]
    MissingGoverningParent { scope: TypeRef },
}

impl GenerateError {
    /// The scope whose emission this error aborts.
    #[must_use]
    pub fn scope(&self) -> &TypeRef {
        match self {
            GenerateError::UnknownParentType { scope, .. }
            | GenerateError::UnclassifiedParent { scope, .. }
            | GenerateError::NoValidConstructor { scope, .. }
            | GenerateError::MissingGoverningParent { scope } => scope,
        }
    }
}
