//! Code-Model Generation and Rendering
//!
//! Turns a resolved scope graph into container, injector, and support
//! descriptors, then renders them to Java source text. Descriptors are plain
//! data; rendering happens only in [`emit`].

#![warn(clippy::pedantic)]

mod access;
mod emit;
mod errors;
mod expr;
mod generate;
mod model;
mod modules;

pub use emit::{JavaEmitter, render_expr};
pub use errors::GenerateError;
pub use expr::Expr;
pub use generate::{EmissionStrategy, GenerationOutput, Generator};
pub use model::{
    ASCENT_FAILURE_MESSAGE, AccessorMethod, AccessorParam, Artifact, BuilderUnit, CONTAINER_MARKER,
    ContainerUnit, InjectorUnit, RUNTIME_NAMESPACE, SetterMethod, SupportUnit, container_marker,
};
