//! Pipeline runs driven by on-disk JSON manifests, mirroring the CLI input
//! format.

use serde::Deserialize;
use weld::{ResolverOptions, RoundOutput, Session, run_round};
use weld_model::ScopeNode;
use weld_relations::RelationTable;

#[derive(Deserialize)]
struct Manifest {
    relations: RelationTable,
    rounds: Vec<Vec<ScopeNode>>,
}

fn load_manifest(name: &str) -> anyhow::Result<Manifest> {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_data")
        .join("manifests")
        .join(name);
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

#[test]
fn example_manifest_generates_cleanly() -> anyhow::Result<()> {
    let manifest = load_manifest("example.json")?;
    let mut session = Session::new();
    for round in &manifest.rounds {
        let nodes: Vec<ScopeNode> = round.iter().cloned().map(ScopeNode::normalized).collect();
        let output = run_round(
            &mut session,
            &nodes,
            &manifest.relations,
            &ResolverOptions::default(),
        )?;
        let RoundOutput::Generated(output) = output else {
            panic!("expected a generated round");
        };
        assert!(!output.diagnostics.has_errors());
        // Two scoped nodes, a container and an injector each.
        assert_eq!(output.artifacts.len(), 4);
    }
    Ok(())
}

#[test]
fn unresolved_manifest_reports_the_missing_reference() -> anyhow::Result<()> {
    let manifest = load_manifest("unresolved.json")?;
    let mut session = Session::new();
    let nodes: Vec<ScopeNode> = manifest.rounds[0]
        .iter()
        .cloned()
        .map(ScopeNode::normalized)
        .collect();
    let output = run_round(
        &mut session,
        &nodes,
        &manifest.relations,
        &ResolverOptions::default(),
    )?;
    let RoundOutput::Generated(output) = output else {
        panic!("expected a generated round");
    };
    assert!(output.diagnostics.has_errors());
    assert!(
        output
            .diagnostics
            .iter()
            .any(|d| d.message.contains("app.Missing"))
    );
    assert!(output.artifacts.is_empty());
    Ok(())
}
