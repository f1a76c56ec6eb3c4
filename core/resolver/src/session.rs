//! Resolution Session
//!
//! A [`Session`] is the explicit per-compilation context holding the root
//! scope across discovery rounds. Declarations may arrive in several rounds
//! of one larger build; the root, once adopted, is retained, while the graph
//! is rebuilt per round. A round whose session has no root yet defers and
//! produces no output.
//!
//! Round phases, in order:
//!
//! 1. **Structural validation** - duplicate scopes, root count; aborts the
//!    round.
//! 2. **Root adoption or deferral**.
//! 3. **Declaration validation** - malformed module declarations; aborts the
//!    round before graph building.
//! 4. **Classification** - effective category per scope.
//! 5. **Graph building** - children/parents multimaps, cycle check.
//!
//! Per-scope failures in phases 4 and 5 collect into diagnostics and exclude
//! only the offending scope; everything else completes.

use rustc_hash::{FxHashMap, FxHashSet};
use weld_model::{Category, ScopeNode, TypeRef};
use weld_relations::TypeRelations;

use crate::classify::classify_nodes;
use crate::diagnostics::Diagnostics;
use crate::errors::{DeclarationError, RoundError, StructuralError};
use crate::graph::{ScopeGraph, build_graph};

/// Parent topology mode. The default DAG mode permits several parents per
/// child; the legacy tree mode enforces the old single-parent rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GraphMode {
    #[default]
    Dag,
    Tree,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolverOptions {
    pub mode: GraphMode,
}

/// Result of one resolution round.
#[derive(Debug)]
pub enum RoundOutcome {
    /// No root discovered yet; the round produced no output.
    Deferred,
    Resolved(Resolution),
}

/// A fully resolved round: the scope graph, the effective category per
/// included scope, the scopes excluded by local failures, and the ordered
/// diagnostics collected along the way.
#[derive(Debug)]
pub struct Resolution {
    graph: ScopeGraph,
    categories: FxHashMap<TypeRef, Category>,
    excluded: FxHashSet<TypeRef>,
    diagnostics: Diagnostics,
}

impl Resolution {
    #[must_use]
    pub fn graph(&self) -> &ScopeGraph {
        &self.graph
    }

    /// Effective category of a scope; the root is always long-lived.
    #[must_use]
    pub fn category_of(&self, identity: &TypeRef) -> Option<Category> {
        if self.graph.is_root(identity) {
            return Some(Category::LongLived);
        }
        self.categories.get(identity).copied()
    }

    #[must_use]
    pub fn is_excluded(&self, identity: &TypeRef) -> bool {
        self.excluded.contains(identity)
    }

    /// Non-root scopes that survived resolution, in encounter order.
    pub fn included_nodes(&self) -> impl Iterator<Item = &ScopeNode> {
        self.graph
            .nodes()
            .iter()
            .filter(|n| !self.excluded.contains(&n.identity))
    }

    #[must_use]
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    #[must_use]
    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }
}

/// Session state for one compilation run. Holds the root scope across
/// rounds; everything else is per-round.
#[derive(Debug, Default)]
pub struct Session {
    root: Option<ScopeNode>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The root scope adopted so far, if any.
    #[must_use]
    pub fn root(&self) -> Option<&ScopeNode> {
        self.root.as_ref()
    }

    /// Resolves one discovery round.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError`] on structural or declaration failures; these
    /// abort the whole round. Per-scope failures are reported through the
    /// resolution's diagnostics instead.
    pub fn resolve_round(
        &mut self,
        nodes: &[ScopeNode],
        relations: &dyn TypeRelations,
        options: &ResolverOptions,
    ) -> Result<RoundOutcome, RoundError> {
        validate_unique_identities(nodes)?;
        let round_root = find_round_root(nodes)?;

        if let Some(incoming) = round_root {
            match &self.root {
                Some(retained) if retained.identity != incoming.identity => {
                    return Err(StructuralError::ConflictingSessionRoot {
                        retained: retained.identity.clone(),
                        incoming: incoming.identity.clone(),
                    }
                    .into());
                }
                _ => self.root = Some(incoming.clone()),
            }
        }
        let Some(root) = self.root.clone() else {
            return Ok(RoundOutcome::Deferred);
        };

        let scoped: Vec<ScopeNode> = nodes.iter().filter(|n| !n.is_root).cloned().collect();
        validate_declarations(&scoped)?;
        validate_declarations(std::slice::from_ref(&root))?;

        let mut diagnostics = Diagnostics::new();
        let mut excluded = FxHashSet::default();
        let categories = classify_nodes(&scoped, relations, &mut diagnostics, &mut excluded);
        let graph = build_graph(
            &root,
            &scoped,
            relations,
            options.mode,
            &categories,
            &mut diagnostics,
            &mut excluded,
        );

        Ok(RoundOutcome::Resolved(Resolution {
            graph,
            categories,
            excluded,
            diagnostics,
        }))
    }
}

fn validate_unique_identities(nodes: &[ScopeNode]) -> Result<(), StructuralError> {
    let mut seen = FxHashSet::default();
    for node in nodes {
        if !seen.insert(node.identity.clone()) {
            return Err(StructuralError::DuplicateScope {
                identity: node.identity.clone(),
            });
        }
    }
    Ok(())
}

fn find_round_root(nodes: &[ScopeNode]) -> Result<Option<&ScopeNode>, StructuralError> {
    let mut roots = nodes.iter().filter(|n| n.is_root);
    let first = roots.next();
    if let (Some(first), Some(second)) = (first, roots.next()) {
        return Err(StructuralError::DuplicateRoot {
            first: first.identity.clone(),
            second: second.identity.clone(),
        });
    }
    Ok(first)
}

fn validate_declarations(nodes: &[ScopeNode]) -> Result<(), DeclarationError> {
    for node in nodes {
        for module in &node.modules {
            if module.constructors.is_empty() {
                return Err(DeclarationError::ModuleWithoutConstructors {
                    scope: node.identity.clone(),
                    module: module.identity.clone(),
                });
            }
        }
    }
    Ok(())
}
