#![warn(clippy::pedantic)]
//! Type-Relation Oracle
//!
//! The resolver never talks to a real host type system. Every identity,
//! subtype, and category question goes through the [`TypeRelations`] trait,
//! so the resolver is testable against a plain relation table with no
//! reflective dependency.
//!
//! [`RelationTable`] is the table-backed implementation used by the CLI
//! (deserialized from the manifest) and by the test suites.

pub mod table;

use serde::{Deserialize, Serialize};
use weld_model::{Category, TypeRef};

/// One category predicate: a scope satisfies `category` when its identity is
/// identical to or a subtype of `base`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBase {
    pub category: Category,
    pub base: TypeRef,
}

/// Identity and subtype queries over opaque type references.
///
/// `category_bases` must be ordered by inference priority; the provided
/// [`classify`](TypeRelations::classify) picks the first satisfied predicate.
pub trait TypeRelations {
    fn is_identical(&self, a: &TypeRef, b: &TypeRef) -> bool;

    /// Strict subtype relation; identity is handled separately.
    fn is_subtype(&self, sub: &TypeRef, sup: &TypeRef) -> bool;

    /// Priority-ordered category predicates.
    fn category_bases(&self) -> &[CategoryBase];

    /// Whether `ty` satisfies a declared reference: identical or a subtype.
    fn satisfies(&self, ty: &TypeRef, reference: &TypeRef) -> bool {
        self.is_identical(ty, reference) || self.is_subtype(ty, reference)
    }

    /// Inferred category of `ty`: the first satisfied predicate, or `None`
    /// when the type matches no framework base.
    fn classify(&self, ty: &TypeRef) -> Option<Category> {
        self.category_bases()
            .iter()
            .find(|cb| self.satisfies(ty, &cb.base))
            .map(|cb| cb.category)
    }
}

pub use table::RelationTable;
