//! End to end resolution behavior over realistic node sets.

use weld::{GraphMode, ResolverOptions, RoundOutcome, Session};
use weld_model::{Category, ScopeNode};

use crate::utils::{app_root, framework_relations, resolve, ty};

#[test]
fn scopes_without_parents_bind_under_the_root() {
    let resolution = resolve(&[
        app_root(),
        ScopeNode::new(ty("app.MainActivity")),
        ScopeNode::new(ty("app.SyncService")),
    ]);
    let graph = resolution.graph();
    assert_eq!(graph.parents_of(&ty("app.MainActivity")), &[ty("app.App")]);
    assert_eq!(graph.parents_of(&ty("app.SyncService")), &[ty("app.App")]);
    assert_eq!(
        graph.children_of(&ty("app.App")),
        &[ty("app.MainActivity"), ty("app.SyncService")]
    );
}

#[test]
fn session_defers_until_a_root_arrives() {
    let relations = framework_relations();
    let options = ResolverOptions::default();
    let mut session = Session::new();

    let first = session
        .resolve_round(&[ScopeNode::new(ty("app.MainActivity"))], &relations, &options)
        .unwrap();
    assert!(matches!(first, RoundOutcome::Deferred));

    let second = session
        .resolve_round(&[app_root()], &relations, &options)
        .unwrap();
    assert!(matches!(second, RoundOutcome::Resolved(_)));

    // Later rounds resolve scoped nodes against the retained root.
    let third = session
        .resolve_round(&[ScopeNode::new(ty("app.MainActivity"))], &relations, &options)
        .unwrap();
    let RoundOutcome::Resolved(resolution) = third else {
        panic!("expected a resolved round");
    };
    assert_eq!(
        resolution.graph().parents_of(&ty("app.MainActivity")),
        &[ty("app.App")]
    );
}

#[test]
fn unresolved_parent_excludes_only_the_offending_scope() {
    let resolution = resolve(&[
        app_root(),
        ScopeNode::new(ty("app.MainActivity")),
        ScopeNode::new(ty("app.DetailFragment")).with_parent(ty("app.Missing")),
    ]);
    assert_eq!(
        resolution
            .diagnostics()
            .errors_for(&ty("app.DetailFragment"))
            .count(),
        1
    );
    assert!(resolution.is_excluded(&ty("app.DetailFragment")));
    let included: Vec<_> = resolution
        .included_nodes()
        .map(|n| n.identity.clone())
        .collect();
    assert_eq!(included, vec![ty("app.MainActivity")]);
}

#[test]
fn categories_are_inferred_in_priority_order() {
    let resolution = resolve(&[
        app_root(),
        ScopeNode::new(ty("app.MainActivity")),
        ScopeNode::new(ty("app.SyncService")),
        ScopeNode::new(ty("app.DetailFragment")),
        ScopeNode::new(ty("app.GaugeView")),
    ]);
    assert_eq!(
        resolution.category_of(&ty("app.MainActivity")),
        Some(Category::ActivityLike)
    );
    assert_eq!(
        resolution.category_of(&ty("app.SyncService")),
        Some(Category::ServiceLike)
    );
    assert_eq!(
        resolution.category_of(&ty("app.DetailFragment")),
        Some(Category::FragmentLike)
    );
    assert_eq!(
        resolution.category_of(&ty("app.GaugeView")),
        Some(Category::ViewLike)
    );
    assert_eq!(
        resolution.category_of(&ty("app.App")),
        Some(Category::LongLived)
    );
}

#[test]
fn explicit_category_conflicting_with_inference_warns_and_wins() {
    let resolution = resolve(&[
        app_root(),
        ScopeNode::new(ty("app.GaugeView")).with_category(Category::FragmentLike),
    ]);
    assert!(!resolution.diagnostics().has_errors());
    assert_eq!(resolution.diagnostics().len(), 1);
    assert!(
        resolution
            .diagnostics()
            .iter()
            .next()
            .unwrap()
            .message
            .contains("declares category fragment but its type infers view")
    );
    assert_eq!(
        resolution.category_of(&ty("app.GaugeView")),
        Some(Category::FragmentLike)
    );
}

#[test]
fn unclassifiable_scope_is_reported_and_excluded() {
    let resolution = resolve(&[app_root(), ScopeNode::new(ty("app.Plain"))]);
    assert!(resolution.is_excluded(&ty("app.Plain")));
    assert_eq!(
        resolution
            .diagnostics()
            .iter()
            .next()
            .unwrap()
            .message,
        "scope `app.Plain` is not an injectable type"
    );
}

#[test]
fn tree_mode_keeps_the_legacy_parent_rules() {
    let relations = framework_relations();
    let options = ResolverOptions {
        mode: GraphMode::Tree,
    };
    let mut session = Session::new();
    let nodes = [
        app_root(),
        ScopeNode::new(ty("app.MainActivity")),
        ScopeNode::new(ty("app.DetailFragment")).with_parent(ty("app.MainActivity")),
        ScopeNode::new(ty("app.GaugeView")).with_parent(ty("app.MainActivity")),
    ];
    let RoundOutcome::Resolved(resolution) = session
        .resolve_round(&nodes, &relations, &options)
        .unwrap()
    else {
        panic!("expected a resolved round");
    };
    // The fragment is rejected with the legacy wording; the view is fine.
    assert!(resolution.is_excluded(&ty("app.DetailFragment")));
    assert!(!resolution.is_excluded(&ty("app.GaugeView")));
    assert_eq!(
        resolution
            .diagnostics()
            .errors_for(&ty("app.DetailFragment"))
            .next()
            .unwrap()
            .message,
        "only view scopes may declare a parent, `app.DetailFragment` is not a view scope"
    );
}

#[test]
fn dag_mode_accepts_multiple_parents() {
    let resolution = resolve(&[
        app_root(),
        ScopeNode::new(ty("app.MainActivity")),
        ScopeNode::new(ty("app.SettingsActivity")),
        ScopeNode::new(ty("app.GaugeView"))
            .with_parent(ty("app.MainActivity"))
            .with_parent(ty("app.SettingsActivity")),
    ]);
    assert!(resolution.diagnostics().is_empty());
    assert_eq!(
        resolution.graph().parents_of(&ty("app.GaugeView")),
        &[ty("app.MainActivity"), ty("app.SettingsActivity")]
    );
    assert_eq!(
        resolution.graph().governing_parent(&ty("app.GaugeView")),
        Some(&ty("app.MainActivity"))
    );
}
