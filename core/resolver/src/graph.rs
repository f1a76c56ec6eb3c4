//! Scope Graph Builder
//!
//! Resolves declared parent references into children/parents multimaps rooted
//! at the session root. Binding rules:
//!
//! 1. An empty parent list binds the scope directly under the root.
//! 2. Each declared reference is tested against the root first, then against
//!    the candidate set in encounter order; the first match wins.
//! 3. An unmatched reference records a resolution error for that scope and
//!    skips the edge; unrelated scopes keep resolving.
//!
//! The default mode permits multiple parents per child (DAG). The legacy tree
//! mode restricts parent declarations to view scopes and to exactly one
//! parent, with its own error wording. Insertion order is preserved in every
//! list so downstream generation is deterministic.

use rustc_hash::{FxHashMap, FxHashSet};
use weld_model::{Category, ScopeNode, TypeRef};
use weld_relations::TypeRelations;

use crate::diagnostics::Diagnostics;
use crate::errors::ResolutionError;
use crate::session::GraphMode;

/// Children/parents multimaps over the discovered scopes, rooted at the
/// session root. Immutable once built.
#[derive(Debug, Clone)]
pub struct ScopeGraph {
    root: ScopeNode,
    nodes: Vec<ScopeNode>,
    index: FxHashMap<TypeRef, usize>,
    children: FxHashMap<TypeRef, Vec<TypeRef>>,
    parents: FxHashMap<TypeRef, Vec<TypeRef>>,
}

impl ScopeGraph {
    #[must_use]
    pub fn root(&self) -> &ScopeNode {
        &self.root
    }

    /// Non-root scopes in encounter order.
    #[must_use]
    pub fn nodes(&self) -> &[ScopeNode] {
        &self.nodes
    }

    /// Looks up a scope by identity; the root is included.
    #[must_use]
    pub fn node(&self, identity: &TypeRef) -> Option<&ScopeNode> {
        if self.root.identity == *identity {
            return Some(&self.root);
        }
        self.index.get(identity).map(|&i| &self.nodes[i])
    }

    #[must_use]
    pub fn is_root(&self, identity: &TypeRef) -> bool {
        self.root.identity == *identity
    }

    /// Resolved children of a scope, in binding order.
    #[must_use]
    pub fn children_of(&self, identity: &TypeRef) -> &[TypeRef] {
        self.children.get(identity).map_or(&[], Vec::as_slice)
    }

    /// Resolved parents of a scope, in declaration order.
    #[must_use]
    pub fn parents_of(&self, identity: &TypeRef) -> &[TypeRef] {
        self.parents.get(identity).map_or(&[], Vec::as_slice)
    }

    /// The governing parent: the first resolved parent.
    #[must_use]
    pub fn governing_parent(&self, identity: &TypeRef) -> Option<&TypeRef> {
        self.parents_of(identity).first()
    }
}

pub(crate) fn build_graph(
    root: &ScopeNode,
    nodes: &[ScopeNode],
    relations: &dyn TypeRelations,
    mode: GraphMode,
    categories: &FxHashMap<TypeRef, Category>,
    diagnostics: &mut Diagnostics,
    excluded: &mut FxHashSet<TypeRef>,
) -> ScopeGraph {
    let mut children: FxHashMap<TypeRef, Vec<TypeRef>> = FxHashMap::default();
    let mut parents: FxHashMap<TypeRef, Vec<TypeRef>> = FxHashMap::default();

    let mut bind = |parent: &TypeRef, child: &TypeRef| {
        let parent_list = parents.entry(child.clone()).or_default();
        if parent_list.contains(parent) {
            // Two references resolved to the same scope; one edge is enough.
            return;
        }
        parent_list.push(parent.clone());
        children.entry(parent.clone()).or_default().push(child.clone());
    };

    for node in nodes {
        if node.declared_parents.is_empty() {
            bind(&root.identity, &node.identity);
            continue;
        }

        if mode == GraphMode::Tree {
            if categories.get(&node.identity) != Some(&Category::ViewLike) {
                let err = ResolutionError::NonViewParent {
                    scope: node.identity.clone(),
                };
                diagnostics.error(err.to_string(), Some(node.identity.clone()));
                excluded.insert(node.identity.clone());
                continue;
            }
            if node.declared_parents.len() > 1 {
                let err = ResolutionError::MultipleParents {
                    scope: node.identity.clone(),
                };
                diagnostics.error(err.to_string(), Some(node.identity.clone()));
                excluded.insert(node.identity.clone());
                continue;
            }
        }

        for reference in &node.declared_parents {
            if relations.satisfies(&root.identity, reference) {
                bind(&root.identity, &node.identity);
                continue;
            }
            let candidate = nodes.iter().find(|c| {
                c.identity != node.identity && relations.satisfies(&c.identity, reference)
            });
            match candidate {
                Some(parent) => bind(&parent.identity, &node.identity),
                None => {
                    let err = ResolutionError::UnresolvedParent {
                        scope: node.identity.clone(),
                        reference: reference.clone(),
                    };
                    diagnostics.error(err.to_string(), Some(node.identity.clone()));
                    excluded.insert(node.identity.clone());
                }
            }
        }
    }

    let graph = ScopeGraph {
        root: root.clone(),
        nodes: nodes.to_vec(),
        index: nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.identity.clone(), i))
            .collect(),
        children,
        parents,
    };
    exclude_cycles(&graph, diagnostics, excluded);
    graph
}

/// The graph invariant forbids cycles; subtype matching between candidates
/// can still close one, so every scope checks its ancestor chain.
fn exclude_cycles(
    graph: &ScopeGraph,
    diagnostics: &mut Diagnostics,
    excluded: &mut FxHashSet<TypeRef>,
) {
    for node in graph.nodes() {
        if reaches_itself(graph, &node.identity) {
            let err = ResolutionError::ParentCycle {
                scope: node.identity.clone(),
            };
            diagnostics.error(err.to_string(), Some(node.identity.clone()));
            excluded.insert(node.identity.clone());
        }
    }
}

fn reaches_itself(graph: &ScopeGraph, start: &TypeRef) -> bool {
    let mut seen = FxHashSet::default();
    let mut stack: Vec<&TypeRef> = graph.parents_of(start).iter().collect();
    while let Some(current) = stack.pop() {
        if current == start {
            return true;
        }
        if seen.insert(current.clone()) {
            stack.extend(graph.parents_of(current));
        }
    }
    false
}
