#![warn(clippy::pedantic)]
//! Weld resolves UI-lifecycle-bound injection scopes into a rooted scope
//! graph and generates the container, builder, and injector source for each
//! scope. This crate wires the pipeline: resolve a round, then generate and
//! render artifacts.

pub use weld_codegen::{
    Artifact, ContainerUnit, EmissionStrategy, GenerationOutput, Generator, InjectorUnit,
    JavaEmitter, SupportUnit,
};
pub use weld_model::{Category, Constructor, ModuleDecl, ScopeNode, TypeRef};
pub use weld_relations::{CategoryBase, RelationTable, TypeRelations};
pub use weld_resolver::{
    Diagnostic, Diagnostics, GraphMode, Resolution, ResolverOptions, RoundError, RoundOutcome,
    Session, Severity,
};

/// Outcome of one full pipeline round.
#[derive(Debug)]
pub enum RoundOutput {
    /// No root scope discovered yet; nothing was generated.
    Deferred,
    Generated(GenerationOutput),
}

/// Resolves one round of declared scopes against the session.
///
/// # Errors
///
/// Returns [`RoundError`] when a structural or declaration failure aborts
/// the round.
pub fn resolve_round(
    session: &mut Session,
    nodes: &[ScopeNode],
    relations: &dyn TypeRelations,
    options: &ResolverOptions,
) -> Result<RoundOutcome, RoundError> {
    session.resolve_round(nodes, relations, options)
}

/// Generates artifacts for a resolved round. The graph mode picks the
/// emission strategy: tree graphs emit recursively from the root, DAG
/// graphs emit flat.
#[must_use]
pub fn generate(
    resolution: &Resolution,
    relations: &dyn TypeRelations,
    mode: GraphMode,
) -> GenerationOutput {
    let strategy = match mode {
        GraphMode::Dag => EmissionStrategy::Flat,
        GraphMode::Tree => EmissionStrategy::Recursive,
    };
    Generator::new(relations)
        .with_strategy(strategy)
        .generate(resolution)
}

/// Runs one round end to end: resolve, then generate. Resolution
/// diagnostics come first in the merged output.
///
/// # Errors
///
/// Returns [`RoundError`] when a structural or declaration failure aborts
/// the round.
pub fn run_round(
    session: &mut Session,
    nodes: &[ScopeNode],
    relations: &dyn TypeRelations,
    options: &ResolverOptions,
) -> Result<RoundOutput, RoundError> {
    let outcome = session.resolve_round(nodes, relations, options)?;
    let RoundOutcome::Resolved(resolution) = outcome else {
        return Ok(RoundOutput::Deferred);
    };
    let mut output = generate(&resolution, relations, options.mode);
    let mut diagnostics = resolution.into_diagnostics();
    diagnostics.merge(std::mem::take(&mut output.diagnostics));
    output.diagnostics = diagnostics;
    Ok(RoundOutput::Generated(output))
}

/// Renders every artifact of a generation pass to Java source text, paired
/// with its file-relative path (`namespace/Name.java` with dots as
/// separators).
#[must_use]
pub fn render_artifacts(output: &GenerationOutput) -> Vec<(String, String)> {
    let emitter = JavaEmitter::new();
    output
        .artifacts
        .iter()
        .map(|artifact| {
            let dir = artifact.namespace().replace('.', "/");
            let path = format!("{dir}/{}.java", artifact.name());
            (path, emitter.emit(artifact))
        })
        .collect()
}
