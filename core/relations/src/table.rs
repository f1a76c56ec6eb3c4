//! Table-Backed Relations
//!
//! An in-memory [`TypeRelations`] implementation over declared direct
//! supertype edges. Subtype queries walk the edges transitively; node sets at
//! annotation-processing scale are small, so the walk scans the edge list
//! directly instead of maintaining an index.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use weld_model::{Category, TypeRef};

use crate::{CategoryBase, TypeRelations};

/// One declared direct supertype edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtypeEdge {
    pub sub: TypeRef,
    pub sup: TypeRef,
}

/// Relation table built from declared supertype edges and an ordered list of
/// category bases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationTable {
    #[serde(default)]
    extends: Vec<SubtypeEdge>,
    /// Must be listed in inference priority order.
    #[serde(default)]
    bases: Vec<CategoryBase>,
}

impl RelationTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `sub` as a direct subtype of `sup`.
    pub fn add_subtype(&mut self, sub: TypeRef, sup: TypeRef) -> &mut Self {
        self.extends.push(SubtypeEdge { sub, sup });
        self
    }

    /// Appends a category predicate; callers register bases in priority order.
    pub fn add_base(&mut self, category: Category, base: TypeRef) -> &mut Self {
        self.bases.push(CategoryBase { category, base });
        self
    }

    fn direct_supertypes<'a>(&'a self, ty: &'a TypeRef) -> impl Iterator<Item = &'a TypeRef> {
        self.extends
            .iter()
            .filter(move |edge| edge.sub == *ty)
            .map(|edge| &edge.sup)
    }
}

impl TypeRelations for RelationTable {
    fn is_identical(&self, a: &TypeRef, b: &TypeRef) -> bool {
        a == b
    }

    fn is_subtype(&self, sub: &TypeRef, sup: &TypeRef) -> bool {
        let mut seen = FxHashSet::default();
        let mut stack: Vec<&TypeRef> = self.direct_supertypes(sub).collect();
        while let Some(current) = stack.pop() {
            if current == sup {
                return true;
            }
            if seen.insert(current.clone()) {
                stack.extend(self.direct_supertypes(current));
            }
        }
        false
    }

    fn category_bases(&self) -> &[CategoryBase] {
        &self.bases
    }
}
