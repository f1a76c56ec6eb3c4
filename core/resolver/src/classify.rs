//! Category Classifier
//!
//! Assigns every non-root scope exactly one [`Category`]. An explicit
//! override bypasses the predicate scan, but the inferred category is still
//! computed: accessor dispatch uses the effective (explicit-first) category,
//! and a disagreement between the two is surfaced as a warning rather than a
//! silent pick. A scope matching no predicate is excluded from generation;
//! its children still resolve independently.

use rustc_hash::{FxHashMap, FxHashSet};
use weld_model::{Category, ScopeNode, TypeRef};
use weld_relations::TypeRelations;

use crate::diagnostics::Diagnostics;
use crate::errors::ResolutionError;

pub(crate) fn classify_nodes(
    nodes: &[ScopeNode],
    relations: &dyn TypeRelations,
    diagnostics: &mut Diagnostics,
    excluded: &mut FxHashSet<TypeRef>,
) -> FxHashMap<TypeRef, Category> {
    let mut categories = FxHashMap::default();
    for node in nodes {
        let inferred = relations.classify(&node.identity);
        let effective = match (node.explicit_category, inferred) {
            (Some(explicit), Some(inferred)) if explicit != inferred => {
                diagnostics.warning(
                    format!(
                        "scope `{}` declares category {explicit} but its type infers {inferred}; \
                         using {explicit} for accessor dispatch",
                        node.identity
                    ),
                    Some(node.identity.clone()),
                );
                explicit
            }
            (Some(explicit), _) => explicit,
            (None, Some(inferred)) => inferred,
            (None, None) => {
                let err = ResolutionError::NotInjectable {
                    scope: node.identity.clone(),
                };
                diagnostics.error(err.to_string(), Some(node.identity.clone()));
                excluded.insert(node.identity.clone());
                continue;
            }
        };
        categories.insert(node.identity.clone(), effective);
    }
    categories
}
