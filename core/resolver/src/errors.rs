//! Resolver Error Taxonomy
//!
//! Four failure classes with distinct propagation policies:
//!
//! - [`StructuralError`] - wrong root count or duplicate identities; aborts
//!   the whole round.
//! - [`DeclarationError`] - malformed declarations; aborts the round before
//!   graph building.
//! - [`ResolutionError`] - local to one scope; siblings still resolve and
//!   emit. These are collected as diagnostics, never returned as `Err`.
//! - [`RoundError`] - the fail-fast union returned by
//!   [`Session::resolve_round`](crate::session::Session::resolve_round).
//!
//! The runtime ascent failure is not represented here: it is a contract the
//! generated artifact raises, see the codegen crate.

use thiserror::Error;
use weld_model::TypeRef;

/// Structural failures abort the entire round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("root scope declared more than once: `{first}` and `{second}`")]
    DuplicateRoot { first: TypeRef, second: TypeRef },

    #[error("root scope `{incoming}` conflicts with the session root `{retained}`")]
    ConflictingSessionRoot {
        retained: TypeRef,
        incoming: TypeRef,
    },

    #[error("scope `{identity}` declared more than once")]
    DuplicateScope { identity: TypeRef },
}

/// Malformed declarations abort the round before graph building starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationError {
    #[error("module `{module}` on scope `{scope}` declares no constructors")]
    ModuleWithoutConstructors { scope: TypeRef, module: TypeRef },
}

/// Per-scope resolution failures; the offending scope is excluded from
/// generation while the rest of the round completes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error(
        "unresolved parent: scope `{scope}` declares parent `{reference}` \
         matching neither the root nor any discovered scope"
    )]
    UnresolvedParent { scope: TypeRef, reference: TypeRef },

    #[error("scope `{scope}` is not an injectable type")]
    NotInjectable { scope: TypeRef },

    #[error("scope `{scope}` participates in a parent cycle")]
    ParentCycle { scope: TypeRef },

    /// Legacy tree-mode wording: parent declarations are restricted to view
    /// scopes there.
    #[error("only view scopes may declare a parent, `{scope}` is not a view scope")]
    NonViewParent { scope: TypeRef },

    /// Legacy tree-mode wording: a child binds to exactly one parent there.
    #[error("view scope `{scope}` declares more than one parent")]
    MultipleParents { scope: TypeRef },
}

impl ResolutionError {
    /// The scope this error is tagged to.
    #[must_use]
    pub fn scope(&self) -> &TypeRef {
        match self {
            ResolutionError::UnresolvedParent { scope, .. }
            | ResolutionError::NotInjectable { scope }
            | ResolutionError::ParentCycle { scope }
            | ResolutionError::NonViewParent { scope }
            | ResolutionError::MultipleParents { scope } => scope,
        }
    }
}

/// Fail-fast union returned when a round aborts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error(transparent)]
    Declaration(#[from] DeclarationError),
}
