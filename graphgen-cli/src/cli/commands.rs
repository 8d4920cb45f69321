//! Command implementations and argument parsing for the graphgen CLI.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand, ValueEnum};
use graphgen_core::{
    DEFAULT_SAMPLES_PER_COMPLEXITY, Element, GraphElements, GraphGenError, GraphGeneratorBuilder,
};
use rand::{SeedableRng, rngs::SmallRng};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "graphgen", about = "Generate random graphs for rendering.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate one random graph.
    Generate(GenerateCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Number of nodes to create.
    #[arg(long = "nodes", value_parser = clap::value_parser!(usize))]
    pub nodes: usize,

    /// Complexity factor; each node draws `complexity * samples` targets.
    #[arg(long = "complexity", value_parser = clap::value_parser!(usize))]
    pub complexity: usize,

    /// Seed for reproducible output. Drawn from entropy when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Targets drawn per node for each unit of complexity.
    #[arg(
        long = "samples-per-complexity",
        default_value_t = DEFAULT_SAMPLES_PER_COMPLEXITY,
        value_parser = clap::value_parser!(usize),
    )]
    pub samples_per_complexity: usize,

    /// Output format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Supported output renderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON element array.
    Json,
    /// Indented JSON element array.
    JsonPretty,
    /// Human-readable counts.
    Summary,
}

impl OutputFormat {
    const fn label(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::JsonPretty => "json-pretty",
            Self::Summary => "summary",
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core generation failed.
    #[error(transparent)]
    Core(#[from] GraphGenError),
}

/// Outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Seed the generator was initialised with.
    pub seed: u64,
    /// Rendering requested by the caller.
    pub format: OutputFormat,
    /// Generated nodes and edges.
    pub graph: GraphElements,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when generation fails.
///
/// # Examples
/// ```
/// # use graphgen_cli::cli::{Cli, Command, GenerateCommand, OutputFormat, run_cli};
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand {
///         nodes: 4,
///         complexity: 1,
///         seed: Some(7),
///         samples_per_complexity: 10,
///         format: OutputFormat::Summary,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.seed, 7);
/// assert_eq!(summary.graph.nodes().len(), 4);
/// # Ok::<(), graphgen_cli::cli::CliError>(())
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Generate(generate) => {
            Span::current().record("command", field::display("generate"));
            run_generate(&generate)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(
        nodes = command.nodes,
        complexity = command.complexity,
        seed = field::Empty,
        seed_source = field::Empty,
        format = command.format.label(),
    ),
)]
pub(super) fn run_generate(command: &GenerateCommand) -> Result<ExecutionSummary, CliError> {
    let generator = GraphGeneratorBuilder::new()
        .with_samples_per_complexity(command.samples_per_complexity)
        .build()?;

    let (seed, seed_source) = resolve_seed(command.seed);
    let span = Span::current();
    span.record("seed", seed);
    span.record("seed_source", seed_source);

    let mut rng = SmallRng::seed_from_u64(seed);
    let graph = generator.generate(command.nodes, command.complexity, &mut rng)?;
    info!(
        seed,
        nodes = graph.nodes().len(),
        edges = graph.edges().len(),
        "command completed"
    );
    Ok(ExecutionSummary {
        seed,
        format: command.format,
        graph,
    })
}

pub(super) fn resolve_seed(requested: Option<u64>) -> (u64, &'static str) {
    requested.map_or_else(|| (rand::random(), "entropy"), |seed| (seed, "flag"))
}

/// Renders `summary` to `writer` in the requested [`OutputFormat`].
///
/// # Errors
/// Returns [`io::Error`] if serialisation or writing fails.
///
/// # Examples
/// ```
/// # use graphgen_cli::cli::{ExecutionSummary, OutputFormat, render_summary};
/// # use graphgen_core::{GraphElements, NodeDescriptor};
/// let summary = ExecutionSummary {
///     seed: 1,
///     format: OutputFormat::Json,
///     graph: GraphElements::new(vec![NodeDescriptor::new(0)], Vec::new(), 0),
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(buffer, br#"[{"group":"nodes","data":{"id":"0"}}]"#.to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary.format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut writer, &collect_elements(&summary.graph))?;
        }
        OutputFormat::JsonPretty => {
            serde_json::to_writer_pretty(&mut writer, &collect_elements(&summary.graph))?;
            writeln!(writer)?;
        }
        OutputFormat::Summary => {
            let graph = &summary.graph;
            writeln!(writer, "seed: {}", summary.seed)?;
            writeln!(writer, "nodes: {}", graph.nodes().len())?;
            writeln!(writer, "edges: {}", graph.edges().len())?;
            writeln!(writer, "self loops: {}", graph.self_loops())?;
            writeln!(writer, "suppressed pairs: {}", graph.suppressed())?;
        }
    }
    Ok(())
}

fn collect_elements(graph: &GraphElements) -> Vec<Element> {
    graph.elements().collect()
}
