//! Command line argument parsing for the Weld generator.
//!
//! This module defines the CLI interface using `clap`. The `Cli` struct
//! captures all command line flags and arguments passed to the `weldc`
//! binary.

use clap::Parser;

/// Command line interface definition for the Weld generator.
///
/// The `weldc` tool operates in phases, and users must explicitly request
/// which phases to run via command line flags. Phases execute in canonical
/// order (resolve → codegen) regardless of flag order.
///
/// ## Phase Dependencies
///
/// - `--resolve`: Standalone, resolves the scope graph and reports diagnostics
/// - `--codegen`: Requires resolution (automatically runs the resolve phase)
///
/// ## Output Flags
///
/// - `-o`: Write the generated Java sources to the `out/` directory
///
/// The output flag only takes effect when `--codegen` is specified.
///
/// ## Examples
///
/// Resolve only:
/// ```bash
/// weldc scopes.json --resolve
/// ```
///
/// Full generation with file output:
/// ```bash
/// weldc scopes.json --codegen -o
/// ```
#[derive(Parser)]
#[command(
    name = "weldc",
    author,
    version,
    about = "Weld scope-graph resolver and generator CLI (weldc)",
    long_about = "The 'weldc' command runs one or more phases over a single JSON scope manifest. \
Resolve builds the rooted scope graph and reports diagnostics; codegen emits the container and injector Java sources and can write them to out/ when -o is supplied."
)]
pub(crate) struct Cli {
    /// Path to the JSON scope manifest to process.
    ///
    /// The manifest carries the type-relation table, the optional graph mode
    /// (`dag` or `tree`), and the declared scopes grouped into discovery
    /// rounds.
    pub(crate) path: std::path::PathBuf,

    /// Run the resolve phase to build the rooted scope graph.
    ///
    /// This phase reads the manifest, resolves every round against the
    /// session, and prints "Resolved: <filepath>" on success. Per-scope
    /// diagnostics are reported to stderr.
    ///
    /// Structural errors will be reported to stderr and the process exits
    /// with code 1.
    #[clap(long = "resolve", action = clap::ArgAction::SetTrue)]
    pub(crate) resolve: bool,

    /// Run the codegen phase to emit container and injector sources.
    ///
    /// This phase generates the code-model descriptors and renders them to
    /// Java. The resolve phase is automatically run first if not already
    /// requested.
    ///
    /// Use `-o` to write the generated sources to disk.
    ///
    /// Generation errors will be reported to stderr and the process exits
    /// with code 1.
    #[clap(long = "codegen", action = clap::ArgAction::SetTrue)]
    pub(crate) codegen: bool,

    /// Write generated Java source files.
    ///
    /// When specified with `--codegen`, writes each artifact to
    /// `out/<namespace>/<Name>.java` relative to the current working
    /// directory, with namespace dots as path separators.
    ///
    /// This flag has no effect without `--codegen`.
    #[clap(short = 'o', action = clap::ArgAction::SetTrue)]
    pub(crate) generate_output: bool,
}
