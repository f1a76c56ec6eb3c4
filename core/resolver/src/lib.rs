#![warn(clippy::pedantic)]
//! Scope-Graph Resolver
//!
//! Resolves a round of declared injection scopes into a parent/child scope
//! graph rooted at the unique root scope, and assigns every scope its
//! lifecycle category. The resolver is synchronous and batch-oriented: one
//! pass per discovery round over an immutable node set.
//!
//! Failure policy is best-effort with precise per-scope diagnostics:
//! structural and declaration failures abort the round through
//! [`RoundError`]; resolution failures are collected in [`Diagnostics`] and
//! exclude only the offending scope.
//!
//! ## Public Modules
//!
//! - [`session`] - the cross-round [`Session`], round outcomes, options
//! - [`graph`] - the resolved [`ScopeGraph`] multimaps
//! - [`diagnostics`] - ordered severity-tagged records
//! - [`errors`] - the error taxonomy

pub mod diagnostics;
pub mod errors;
pub mod graph;
pub mod session;

mod classify;

pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use errors::{DeclarationError, ResolutionError, RoundError, StructuralError};
pub use graph::ScopeGraph;
pub use session::{GraphMode, Resolution, ResolverOptions, RoundOutcome, Session};
