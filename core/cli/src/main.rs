#![warn(clippy::pedantic)]

//! # Weld Generator CLI
//!
//! Command line interface for the Weld scope-graph toolchain.
//!
//! 1. Resolve (`--resolve`) – build the rooted scope graph and report diagnostics.
//! 2. Codegen (`--codegen`) – emit container and injector Java sources, and
//!    optionally write them to disk (`-o`).
//!
//! At least one of the phase flags must be supplied; the phases that are
//! requested will be executed in the canonical order even if specified out of
//! order on the command line.
//!
//! Output artifacts are written to an `out/` directory relative to the current
//! working directory, one file per generated type under its namespace path.
//!
//! ## Exit codes
//! * 0 – success.
//! * 1 – usage / IO / round failure / error diagnostics.
//!
//! ## Example
//! ```bash
//! weldc scopes.json --codegen -o
//! ```
//!
//! ## Tests
//! Integration tests exercise flag validation and the happy path generation
//! pipeline.

mod parser;
use clap::Parser;
use parser::Cli;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    process::{self},
};
use weld::{
    Artifact, GenerationOutput, GraphMode, JavaEmitter, RelationTable, ResolverOptions,
    RoundOutput, ScopeNode, Session, render_artifacts, run_round,
};

/// On-disk input: the relation table, the optional graph mode, and the
/// declared scopes grouped into discovery rounds.
#[derive(Deserialize)]
struct Manifest {
    #[serde(default)]
    relations: RelationTable,
    #[serde(default)]
    mode: Option<String>,
    rounds: Vec<Vec<ScopeNode>>,
}

fn load_manifest(path: &Path) -> anyhow::Result<Manifest> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn graph_mode(manifest: &Manifest) -> anyhow::Result<GraphMode> {
    match manifest.mode.as_deref() {
        None | Some("dag") => Ok(GraphMode::Dag),
        Some("tree") => Ok(GraphMode::Tree),
        Some(other) => anyhow::bail!("unknown graph mode `{other}`, expected `dag` or `tree`"),
    }
}

fn write_sources(output: &GenerationOutput, out_dir: &Path) -> anyhow::Result<()> {
    let emitter = JavaEmitter::new();
    let root = Artifact::Container(output.root_container.clone());
    let root_dir = root.namespace().replace('.', "/");
    let mut files = vec![(
        format!("{root_dir}/{}.java", root.name()),
        emitter.emit(&root),
    )];
    files.extend(render_artifacts(output));
    for (relative, text) in files {
        let path = out_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, text)?;
        println!("Generated: {}", path.to_string_lossy());
    }
    Ok(())
}

/// Entry point for the CLI executable.
///
/// Responsibilities:
/// * Parse flags.
/// * Validate that the input path exists and at least one phase is selected.
/// * Run requested phases (resolve -> codegen) over every round.
/// * Optionally write emitted Java sources when `-o` is set.
///
/// On any failure a diagnostic is printed to stderr and the process exits
/// with code `1`.
fn main() {
    let args = Cli::parse();
    if !args.path.exists() {
        eprintln!("Error: path not found");
        process::exit(1);
    }

    let need_resolve = args.resolve;
    let need_codegen = args.codegen;
    if !(need_resolve || need_codegen) {
        eprintln!("Error: at least one of --resolve or --codegen must be specified");
        process::exit(1);
    }

    let manifest = match load_manifest(&args.path) {
        Ok(manifest) => manifest,
        Err(e) => {
            eprintln!("Manifest error: {e}");
            process::exit(1);
        }
    };
    let mode = match graph_mode(&manifest) {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("Manifest error: {e}");
            process::exit(1);
        }
    };

    let options = ResolverOptions { mode };
    let mut session = Session::new();
    let mut had_errors = false;
    let output_path = PathBuf::from("out");

    for (index, round) in manifest.rounds.iter().enumerate() {
        let nodes: Vec<ScopeNode> = round.iter().cloned().map(ScopeNode::normalized).collect();
        let output = match run_round(&mut session, &nodes, &manifest.relations, &options) {
            Ok(output) => output,
            Err(e) => {
                eprintln!("Resolve error in round {}: {e}", index + 1);
                process::exit(1);
            }
        };
        let RoundOutput::Generated(output) = output else {
            println!("Deferred round {}: no root scope discovered yet", index + 1);
            continue;
        };
        for diagnostic in output.diagnostics.iter() {
            eprintln!("{diagnostic}");
        }
        had_errors |= output.diagnostics.has_errors();
        println!("Resolved round {}: {}", index + 1, args.path.display());

        if need_codegen {
            println!(
                "Generated {} artifacts for round {}",
                output.artifacts.len(),
                index + 1
            );
            if args.generate_output {
                if let Err(e) = write_sources(&output, &output_path) {
                    eprintln!("Failed to write generated sources: {e}");
                    process::exit(1);
                }
            }
        }
    }

    if had_errors {
        process::exit(1);
    }
}
