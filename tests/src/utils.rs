use weld::{
    GenerationOutput, Resolution, ResolverOptions, RoundOutput, RoundOutcome, Session, run_round,
};
use weld_codegen::{Artifact, ContainerUnit, InjectorUnit};
use weld_model::{Category, ScopeNode, TypeRef};
use weld_relations::RelationTable;

pub(crate) fn ty(raw: &str) -> TypeRef {
    TypeRef::parse(raw).unwrap()
}

/// Relation fixture shaped like a small Android app: one concrete scope type
/// per lifecycle kind, with the category bases registered in inference
/// priority order.
pub(crate) fn framework_relations() -> RelationTable {
    let mut table = RelationTable::new();
    table
        .add_subtype(ty("app.MainActivity"), ty("fw.Activity"))
        .add_subtype(ty("app.SettingsActivity"), ty("fw.Activity"))
        .add_subtype(ty("app.SyncService"), ty("fw.Service"))
        .add_subtype(ty("app.DetailFragment"), ty("fw.Fragment"))
        .add_subtype(ty("app.ChildFragment"), ty("fw.Fragment"))
        .add_subtype(ty("app.GaugeView"), ty("fw.View"))
        .add_subtype(ty("app.DialView"), ty("fw.View"))
        .add_subtype(ty("app.HudView"), ty("fw.View"))
        .add_base(Category::ActivityLike, ty("fw.Activity"))
        .add_base(Category::ServiceLike, ty("fw.Service"))
        .add_base(Category::FragmentLike, ty("fw.Fragment"))
        .add_base(Category::ViewLike, ty("fw.View"));
    table
}

pub(crate) fn app_root() -> ScopeNode {
    ScopeNode::root(ty("app.App"))
}

/// Resolves one round against a fresh session, panicking unless the round
/// produced a resolution.
pub(crate) fn resolve(nodes: &[ScopeNode]) -> Resolution {
    let mut session = Session::new();
    let outcome = session
        .resolve_round(nodes, &framework_relations(), &ResolverOptions::default())
        .unwrap();
    let RoundOutcome::Resolved(resolution) = outcome else {
        panic!("expected a resolved round");
    };
    resolution
}

/// Runs one round end to end against a fresh session, panicking unless
/// artifacts were generated.
pub(crate) fn generate(nodes: &[ScopeNode]) -> GenerationOutput {
    let mut session = Session::new();
    let output = run_round(
        &mut session,
        nodes,
        &framework_relations(),
        &ResolverOptions::default(),
    )
    .unwrap();
    let RoundOutput::Generated(output) = output else {
        panic!("expected a generated round");
    };
    output
}

pub(crate) fn find_container<'a>(
    output: &'a GenerationOutput,
    name: &str,
) -> Option<&'a ContainerUnit> {
    output.artifacts.iter().find_map(|artifact| match artifact {
        Artifact::Container(container) if container.name == name => Some(container),
        _ => None,
    })
}

pub(crate) fn find_injector<'a>(
    output: &'a GenerationOutput,
    name: &str,
) -> Option<&'a InjectorUnit> {
    output.artifacts.iter().find_map(|artifact| match artifact {
        Artifact::Injector(injector) if injector.name == name => Some(injector),
        _ => None,
    })
}

pub(crate) fn support_count(output: &GenerationOutput) -> usize {
    output
        .artifacts
        .iter()
        .filter(|artifact| matches!(artifact, Artifact::Support(_)))
        .count()
}
