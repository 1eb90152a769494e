//! route-graph: load a directed graph from an edge list and query it.
//!
//! Input is whitespace-separated vertex pairs `v u`, one directed edge
//! `v -> u` each. Without `--vertices`, the first number of the input is the
//! vertex count.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use route_graph_core::{
    bfs, read_graph, shortest_path, shortest_routes, transposed, AdjacencyList, GraphLike,
    VertexId, WeightPolicy,
};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod render;

use config::{check_range, OutputFormat, Settings};
use error::CliError;

#[derive(Parser, Debug)]
#[command(
    name = "route-graph",
    version,
    about = "Breadth-first queries, transposes and shortest-routes subgraphs over directed edge lists",
    disable_help_subcommand = true
)]
struct Cli {
    #[arg(
        long,
        global = true,
        env = "ROUTE_GRAPH_CONFIG",
        value_name = "FILE",
        help = "TOML settings file"
    )]
    config: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        value_name = "FILE",
        help = "Edge list to read instead of stdin"
    )]
    input: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        value_name = "N",
        help = "Vertex count; when omitted the input must start with it"
    )]
    vertices: Option<usize>,

    #[arg(long, global = true, value_enum, help = "Output format")]
    format: Option<OutputFormat>,

    #[arg(
        long,
        global = true,
        value_enum,
        help = "Weights given to reversed edges by transpose and routes"
    )]
    weights: Option<WeightsArg>,

    #[arg(short, long, global = true, action = ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every vertex that has outgoing edges.
    Show,
    /// Hop distance and BFS parent of every vertex.
    Bfs { source: VertexId },
    /// One shortest path between two vertices.
    Path { source: VertexId, target: VertexId },
    /// Print the graph with every edge reversed.
    Transpose,
    /// Print the subgraph of all shortest routes from source to target.
    Routes { source: VertexId, target: VertexId },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum WeightsArg {
    Zeroed,
    Preserve,
}

impl From<WeightsArg> for WeightPolicy {
    fn from(arg: WeightsArg) -> Self {
        match arg {
            WeightsArg::Zeroed => WeightPolicy::Zeroed,
            WeightsArg::Preserve => WeightPolicy::Preserve,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("route-graph: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(format) = cli.format {
        settings.format = format;
    }
    if let Some(weights) = cli.weights {
        settings.weights = weights.into();
    }

    init_tracing(&settings, cli.verbose);

    match run(&cli, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("route-graph: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(settings: &Settings, verbose: u8) {
    let default = match verbose {
        0 => settings.log.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: &Cli, settings: &Settings) -> Result<(), CliError> {
    let graph = load_graph(cli, settings)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let format = settings.format;

    match cli.command {
        Command::Show => render::graph(&mut out, &graph, format)?,
        Command::Bfs { source } => {
            let result = bfs(&graph, source)?;
            info!(source, reached = result.reached_count(), "bfs");
            render::bfs(&mut out, &result, format)?;
        }
        Command::Path { source, target } => {
            let path = shortest_path(&graph, source, target)?;
            render::path(&mut out, source, target, path.as_deref(), format)?;
        }
        Command::Transpose => {
            let reversed = transposed(&graph, settings.weights)?;
            render::graph(&mut out, &reversed, format)?;
            render::summary(&mut out, &reversed, format)?;
        }
        Command::Routes { source, target } => {
            let routes = shortest_routes(&graph, source, target, settings.weights)?;
            render::graph(&mut out, &routes, format)?;
            render::summary(&mut out, &routes, format)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn open_input(cli: &Cli) -> Result<Box<dyn BufRead>, CliError> {
    match &cli.input {
        Some(path) => {
            let file = File::open(path).map_err(|source| CliError::Open {
                path: path.clone(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

fn load_graph(cli: &Cli, settings: &Settings) -> Result<AdjacencyList, CliError> {
    let start = Instant::now();
    let reader = open_input(cli)?;

    let graph = match cli.vertices {
        Some(n) => {
            check_range("vertices", n, 0, settings.max_vertices)?;
            let mut graph = AdjacencyList::new(n);
            graph.read_edges(reader)?;
            graph
        }
        None => read_graph(reader, settings.max_vertices)?,
    };

    debug!(
        vertices = graph.len(),
        edges = graph.edge_count(),
        load_time_ms = start.elapsed().as_secs_f64() * 1000.0,
        "graph loaded"
    );
    Ok(graph)
}
