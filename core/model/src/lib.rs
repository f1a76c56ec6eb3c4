#![warn(clippy::pedantic)]
//! Data Model for the Weld Scope Generator
//!
//! This crate defines the declaration records consumed by the resolver and
//! code generator:
//!
//! - [`TypeRef`] - an opaque reference to a type in the host language
//! - [`Category`] - the fixed classification of a scope's runtime lifecycle
//! - [`ModuleDecl`] / [`Constructor`] - dependency-supplying module declarations
//! - [`ScopeNode`] - one declared injection scope with its parents,
//!   capabilities, and modules
//!
//! Scope nodes are produced by an extraction front end (or loaded from a JSON
//! manifest by the CLI) and are immutable once a resolution round starts.
//! Naming of generated artifacts is deterministic and lives in [`naming`].

pub mod naming;
pub mod node;
pub mod types;

pub use node::{Category, Constructor, ModuleDecl, ScopeNode};
pub use types::{TypeRef, TypeRefParseError};
