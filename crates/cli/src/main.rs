use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use graph_walker_core::Graph;
use serde::Serialize;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Graph Walker - traverse a small undirected graph and report the results
#[derive(Parser)]
#[command(name = "walker")]
#[command(version)] // Auto-pull version from Cargo.toml
#[command(
    about = "Run depth-first, breadth-first, path and component queries on an undirected graph",
    long_about = "Builds an undirected graph from --vertex and --edge arguments and prints \
                  DFS and BFS traversals, a path check and the connected components. \
                  Without any vertices or edges the sample path graph 1-2-3-4-5 is used."
)]
struct Cli {
    /// Add a vertex (repeatable); useful for isolated vertices
    #[arg(long = "vertex", value_name = "V", allow_negative_numbers = true)]
    vertices: Vec<i64>,

    /// Add an undirected edge written as A-B (repeatable)
    #[arg(
        long = "edge",
        value_name = "A-B",
        value_parser = parse_edge,
        allow_hyphen_values = true
    )]
    edges: Vec<(i64, i64)>,

    /// Start vertex for the traversals (defaults to the first vertex)
    #[arg(long, allow_negative_numbers = true)]
    start: Option<i64>,

    /// Source vertex for the path check (defaults to the first vertex)
    #[arg(long, allow_negative_numbers = true)]
    from: Option<i64>,

    /// Target vertex for the path check (defaults to the last vertex)
    #[arg(long, allow_negative_numbers = true)]
    to: Option<i64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Results of every query, in the order they are printed
#[derive(Debug, Serialize)]
struct Report {
    start: i64,
    dfs: Vec<i64>,
    bfs: Vec<i64>,
    path: PathCheck,
    components: Vec<Vec<i64>>,
}

#[derive(Debug, Serialize)]
struct PathCheck {
    from: i64,
    to: i64,
    exists: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries the report.
    // Example: RUST_LOG=graph_walker_core=trace walker --edge 1-2
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("walker=info,graph_walker_core=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let graph = build_graph(&cli).context("failed to build graph")?;
    tracing::info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph built"
    );

    let report = run_queries(&graph, &cli)?;
    match cli.format {
        Format::Text => write_text(&mut std::io::stdout().lock(), &report)?,
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

/// Build the graph described on the command line, or the sample path graph
fn build_graph(cli: &Cli) -> Result<Graph<i64>> {
    let mut graph = Graph::new();

    if cli.vertices.is_empty() && cli.edges.is_empty() {
        for v in 1..=5 {
            graph.add_vertex(v);
        }
        for (a, b) in [(1, 2), (2, 3), (3, 4), (4, 5)] {
            graph.add_edge(&a, &b)?;
        }
        return Ok(graph);
    }

    for &v in &cli.vertices {
        graph.add_vertex(v);
    }
    for &(a, b) in &cli.edges {
        graph.add_vertex(a);
        graph.add_vertex(b);
        graph
            .add_edge(&a, &b)
            .with_context(|| format!("failed to add edge {a}-{b}"))?;
    }
    Ok(graph)
}

fn run_queries(graph: &Graph<i64>, cli: &Cli) -> Result<Report> {
    let (Some(&first), Some(&last)) = (graph.vertices().next(), graph.vertices().last()) else {
        bail!("graph has no vertices");
    };

    let start = cli.start.unwrap_or(first);
    let from = cli.from.unwrap_or(first);
    let to = cli.to.unwrap_or(last);

    Ok(Report {
        start,
        dfs: graph.dfs(&start).context("depth-first traversal failed")?,
        bfs: graph.bfs(&start).context("breadth-first traversal failed")?,
        path: PathCheck {
            from,
            to,
            exists: graph.has_path(&from, &to).context("path check failed")?,
        },
        components: graph.connected_components(),
    })
}

fn write_text(out: &mut impl Write, report: &Report) -> io::Result<()> {
    writeln!(out, "DFS Traversal:")?;
    for v in &report.dfs {
        writeln!(out, "{v}")?;
    }
    writeln!(out, "BFS Traversal:")?;
    for v in &report.bfs {
        writeln!(out, "{v}")?;
    }
    writeln!(
        out,
        "Has Path from {} to {}: {}",
        report.path.from, report.path.to, report.path.exists
    )?;
    writeln!(out, "Connected Components: {:?}", report.components)
}

/// Parse an edge written as `A-B`; either endpoint may be negative
fn parse_edge(s: &str) -> Result<(i64, i64), String> {
    let split = s
        .char_indices()
        .skip(1)
        .find(|&(_, c)| c == '-')
        .map(|(i, _)| i)
        .ok_or_else(|| format!("expected an edge like 1-2, got '{s}'"))?;

    let (a, b) = (&s[..split], &s[split + 1..]);
    let a = a
        .trim()
        .parse()
        .map_err(|e| format!("invalid vertex '{a}': {e}"))?;
    let b = b
        .trim()
        .parse()
        .map_err(|e| format!("invalid vertex '{b}': {e}"))?;
    Ok((a, b))
}
