//! Rendered Java output for complete rounds.

use weld::{JavaEmitter, render_artifacts};
use weld_codegen::Artifact;
use weld_model::{Constructor, ModuleDecl, ScopeNode};

use crate::utils::{app_root, generate, ty};

#[test]
fn rendered_container_declares_the_full_surface() {
    let module = ModuleDecl::new(
        ty("app.di.UiModule"),
        vec![Constructor::unary(ty("fw.Activity"))],
    );
    let output = generate(&[
        app_root(),
        ScopeNode::new(ty("app.MainActivity"))
            .with_capability(ty("app.HasAnalytics"))
            .with_module(module),
        ScopeNode::new(ty("app.DetailFragment")).with_parent(ty("app.MainActivity")),
    ]);
    let emitter = JavaEmitter::new();
    let container = output
        .artifacts
        .iter()
        .find(|a| a.name() == "MainActivityContainer")
        .unwrap();
    let text = emitter.emit(container);
    assert!(text.contains(
        "public interface MainActivityContainer extends weld.runtime.Container, app.HasAnalytics {"
    ));
    assert!(text.contains("app.DetailFragmentContainer detailFragmentContainer();"));
    assert!(text.contains("void inject(app.MainActivity target);"));
    assert!(text.contains("Builder uiModule(app.di.UiModule uiModule);"));
    assert!(text.contains("MainActivityContainer build();"));
}

#[test]
fn rendered_injector_reaches_the_parent_container() {
    let output = generate(&[
        app_root(),
        ScopeNode::new(ty("app.MainActivity")),
        ScopeNode::new(ty("app.DetailFragment")).with_parent(ty("app.MainActivity")),
    ]);
    let emitter = JavaEmitter::new();
    let injector = output
        .artifacts
        .iter()
        .find(|a| a.name() == "DetailFragmentInjector")
        .unwrap();
    let text = emitter.emit(injector);
    assert!(text.contains("public static void inject(app.DetailFragment host) {"));
    assert!(text.contains(
        "app.MainActivityContainer parent = (app.MainActivityContainer) host.activity().container();"
    ));
    assert!(text.contains("parent.detailFragmentContainer().inject(host);"));
}

#[test]
fn ascent_is_rendered_at_the_call_site_and_as_a_helper() {
    let output = generate(&[
        app_root(),
        ScopeNode::new(ty("app.MainActivity")),
        ScopeNode::new(ty("app.GaugeView")).with_parent(ty("app.MainActivity")),
        ScopeNode::new(ty("app.DialView")).with_parent(ty("app.GaugeView")),
    ]);
    let emitter = JavaEmitter::new();
    let injector = output
        .artifacts
        .iter()
        .find(|a| a.name() == "DialViewInjector")
        .unwrap();
    let injector_text = emitter.emit(injector);
    assert!(injector_text.contains(
        "weld.runtime.Ascent.ascend(host.structuralParent(), app.GaugeView.class)"
    ));

    let support = output
        .artifacts
        .iter()
        .find(|a| matches!(a, Artifact::Support(_)))
        .unwrap();
    let support_text = emitter.emit(support);
    assert!(support_text.starts_with("package weld.runtime;\n"));
    assert!(
        support_text.contains("throw new IllegalStateException(\"parent not found\");")
    );
}

#[test]
fn rendered_paths_follow_namespaces() {
    let output = generate(&[
        app_root(),
        ScopeNode::new(ty("app.MainActivity")),
        ScopeNode::new(ty("app.GaugeView")).with_parent(ty("app.MainActivity")),
        ScopeNode::new(ty("app.DialView")).with_parent(ty("app.GaugeView")),
    ]);
    let paths: Vec<_> = render_artifacts(&output)
        .into_iter()
        .map(|(path, _)| path)
        .collect();
    assert_eq!(
        paths,
        vec![
            "app/MainActivityContainer.java",
            "app/MainActivityInjector.java",
            "app/GaugeViewContainer.java",
            "app/GaugeViewInjector.java",
            "app/DialViewContainer.java",
            "app/DialViewInjector.java",
            "weld/runtime/Ascent.java",
        ]
    );
}
