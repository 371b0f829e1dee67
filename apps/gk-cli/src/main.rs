use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use gk_algos::{
    AlgoError, MaxFlowConfig, PageRankConfig, SpanningEdge, dijkstra, flow_network, in_degree,
    is_unreachable, k_core, max_flow, minimum_spanning_tree, out_degree, pagerank, spanning_tree_by,
    total_weight, triangle_count_edgewise, triangle_count_naive, triangle_count_parallel,
    triangle_count_pruned,
};
use gk_core::timing::{Timer, enable_timing};
use gk_core::{Real, Vertex, cmp_scalar};
use gk_graph::{Directedness, GraphError};
use gk_io::{EdgeList, ReadError};
use serde_json::json;
use tracing::info;

#[derive(Parser)]
#[command(name = "gk")]
#[command(about = "Graph kernel CLI - run one analytic over a graph file", long_about = None)]
struct Cli {
    /// Input file (Matrix-Market `.mtx`/`.mm` or DIMACS)
    #[arg(global = true, long, short)]
    input: Option<PathBuf>,

    /// Override format detection
    #[arg(global = true, long, value_enum)]
    format: Option<FormatArg>,

    /// Print results as JSON
    #[arg(global = true, long)]
    json: bool,

    /// Log phase timings (same as setting GK_TIMING)
    #[arg(global = true, long)]
    timing: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Mm,
    Dimacs,
}

#[derive(Clone, Copy, ValueEnum)]
enum TriangleMethod {
    Edgewise,
    Pruned,
    Naive,
    Parallel,
}

#[derive(Clone, Copy, ValueEnum)]
enum DegreeDirection {
    In,
    Out,
}

#[derive(Subcommand)]
enum Commands {
    /// Print vertex and edge counts
    Info,
    /// Weighted shortest distances from one vertex
    Sssp {
        /// Source vertex (0-based)
        #[arg(long, default_value_t = 0)]
        source: Vertex,
    },
    /// Count triangles of an undirected graph
    Triangles {
        #[arg(long, value_enum, default_value = "pruned")]
        method: TriangleMethod,
        /// Worker blocks for the parallel method
        #[arg(long, default_value_t = 4)]
        workers: usize,
    },
    /// Per-vertex in- or out-degree
    Degree {
        #[arg(long, value_enum, default_value = "out")]
        direction: DegreeDirection,
    },
    /// PageRank by power iteration
    Pagerank {
        #[arg(long, default_value_t = 0.85)]
        damping: Real,
        #[arg(long, default_value_t = 1e-4)]
        threshold: Real,
        #[arg(long, default_value_t = 20)]
        max_iters: usize,
    },
    /// Kruskal spanning forest
    Mst {
        /// Prefer heavy edges instead of light ones
        #[arg(long)]
        maximum: bool,
    },
    /// Maximum flow; source and sink default to the file's `n` lines
    Maxflow {
        #[arg(long)]
        source: Option<Vertex>,
        #[arg(long)]
        sink: Option<Vertex>,
        #[arg(long)]
        max_iters: Option<usize>,
    },
    /// Single-pass k-core edge removal
    Kcore {
        k: usize,
    },
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("{0}")]
    Read(#[from] ReadError),

    #[error("{0}")]
    Graph(#[from] GraphError),

    #[error("{0}")]
    Algo(#[from] AlgoError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Usage(String),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if cli.timing {
        enable_timing();
    }

    let path = cli
        .input
        .as_deref()
        .ok_or_else(|| CliError::Usage("missing --input <FILE>".into()))?;
    let list = load(path, cli.format)?;

    let timer = Timer::start("algorithm");
    let out = match cli.command {
        Commands::Info => cmd_info(&list),
        Commands::Sssp { source } => cmd_sssp(&list, source),
        Commands::Triangles { method, workers } => cmd_triangles(&list, method, workers),
        Commands::Degree { direction } => cmd_degree(&list, direction),
        Commands::Pagerank {
            damping,
            threshold,
            max_iters,
        } => cmd_pagerank(
            &list,
            PageRankConfig {
                damping,
                threshold,
                max_iters,
            },
        ),
        Commands::Maxflow {
            source,
            sink,
            max_iters,
        } => cmd_maxflow(&list, source, sink, max_iters),
        Commands::Mst { maximum } => cmd_mst(&list, maximum),
        Commands::Kcore { k } => cmd_kcore(&list, k),
    }?;
    timer.stop_and_log();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&out.json)?);
    } else {
        println!("{}", out.text);
    }
    Ok(())
}

/// Both renderings of one command's result.
struct Output {
    text: String,
    json: serde_json::Value,
}

fn load(path: &Path, format: Option<FormatArg>) -> CliResult<EdgeList> {
    let format = match format {
        Some(FormatArg::Mm) => gk_io::Format::MatrixMarket,
        Some(FormatArg::Dimacs) => gk_io::Format::Dimacs,
        None => gk_io::Format::from_path(path),
    };
    let timer = Timer::start("load");
    let list = gk_io::read_file(path, format)?;
    timer.stop_and_log();
    info!(
        path = %path.display(),
        vertices = list.num_vertices,
        edges = list.len(),
        "loaded graph"
    );
    Ok(list)
}

fn cmd_info(list: &EdgeList) -> CliResult<Output> {
    let graph = list.to_unweighted()?;
    let directed = graph.directedness() == Directedness::Directed;
    Ok(Output {
        text: format!(
            "{} vertices, {} stored edges ({})",
            graph.size(),
            graph.num_edges(),
            if directed { "directed" } else { "undirected" }
        ),
        json: json!({
            "vertices": graph.size(),
            "stored_edges": graph.num_edges(),
            "directedness": graph.directedness(),
        }),
    })
}

fn cmd_sssp(list: &EdgeList, source: Vertex) -> CliResult<Output> {
    let graph = list.to_graph()?;
    let distances: Vec<Option<Real>> = dijkstra(&graph, source)?
        .into_iter()
        .map(|d| (!is_unreachable(d)).then_some(d))
        .collect();

    let text = distances
        .iter()
        .enumerate()
        .map(|(v, d)| match d {
            Some(d) => format!("{v}\t{d}"),
            None => format!("{v}\tunreachable"),
        })
        .collect::<Vec<_>>()
        .join("\n");
    Ok(Output {
        text,
        json: json!({ "source": source, "distances": distances }),
    })
}

fn cmd_triangles(list: &EdgeList, method: TriangleMethod, workers: usize) -> CliResult<Output> {
    let graph = list.to_unweighted()?;
    let count = match method {
        TriangleMethod::Edgewise => triangle_count_edgewise(&graph)?,
        TriangleMethod::Pruned => triangle_count_pruned(&graph)?,
        TriangleMethod::Naive => triangle_count_naive(&graph)?,
        TriangleMethod::Parallel => triangle_count_parallel(&graph, workers)?,
    };
    Ok(Output {
        text: format!("{count} triangles"),
        json: json!({ "triangles": count }),
    })
}

fn cmd_degree(list: &EdgeList, direction: DegreeDirection) -> CliResult<Output> {
    let graph = list.to_unweighted()?;
    let degrees = match direction {
        DegreeDirection::In => in_degree(&graph),
        DegreeDirection::Out => out_degree(&graph),
    };
    let text = degrees
        .iter()
        .enumerate()
        .map(|(v, d)| format!("{v}\t{d}"))
        .collect::<Vec<_>>()
        .join("\n");
    Ok(Output {
        text,
        json: json!({ "degrees": degrees }),
    })
}

fn cmd_pagerank(list: &EdgeList, config: PageRankConfig) -> CliResult<Output> {
    let graph = list.to_unweighted()?;
    let result = pagerank(&graph, &config)?;

    let mut text = format!(
        "{} after {} iterations",
        if result.converged { "converged" } else { "not converged" },
        result.iterations
    );
    for (v, r) in result.ranks.iter().enumerate() {
        text.push_str(&format!("\n{v}\t{r:.6}"));
    }
    Ok(Output {
        text,
        json: json!({ "config": config, "result": result }),
    })
}

fn cmd_mst(list: &EdgeList, maximum: bool) -> CliResult<Output> {
    let graph = list.to_graph()?;
    let tree = if maximum {
        spanning_tree_by(&graph, |a: &SpanningEdge<Real>, b: &SpanningEdge<Real>| {
            cmp_scalar(&b.weight, &a.weight)
        })
    } else {
        minimum_spanning_tree(&graph)
    };
    let total = total_weight(&tree);

    let mut text = format!("{} edges, total weight {total}", tree.len());
    for e in &tree {
        text.push_str(&format!("\n{}\t{}\t{}", e.source, e.target, e.weight));
    }
    Ok(Output {
        text,
        json: json!({ "total_weight": total, "edges": tree }),
    })
}

fn cmd_maxflow(
    list: &EdgeList,
    source: Option<Vertex>,
    sink: Option<Vertex>,
    max_iters: Option<usize>,
) -> CliResult<Output> {
    let source = source
        .or(list.source)
        .ok_or_else(|| CliError::Usage("no flow source given and none in the file".into()))?;
    let sink = sink
        .or(list.sink)
        .ok_or_else(|| CliError::Usage("no flow sink given and none in the file".into()))?;

    let undirected = list.directedness == Directedness::Undirected;
    let arcs = list.edges.iter().flat_map(|&(u, v, c)| {
        let mirror = (undirected && u != v).then_some((v, u, c));
        std::iter::once((u, v, c)).chain(mirror)
    });
    let mut network = flow_network(list.num_vertices, arcs)?;

    let mut config = MaxFlowConfig::default();
    if let Some(max_iters) = max_iters {
        config.max_iters = max_iters;
    }
    let value = max_flow(&mut network, source, sink, &config)?;
    Ok(Output {
        text: format!("max flow {source} -> {sink}: {value}"),
        json: json!({ "source": source, "sink": sink, "value": value }),
    })
}

fn cmd_kcore(list: &EdgeList, k: usize) -> CliResult<Output> {
    let graph = list.to_unweighted()?;
    let result = k_core(&graph, k);

    let mut text = format!(
        "{} edges removed, {} vertices remain",
        result.removed.len(),
        result.remaining_vertices
    );
    for (u, v) in &result.removed {
        text.push_str(&format!("\n{u}\t{v}"));
    }
    Ok(Output {
        text,
        json: json!({ "k": k, "result": result }),
    })
}
