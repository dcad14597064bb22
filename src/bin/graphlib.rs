//! CLI entry point for the `graphlib` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use graphlib::alg::DfsOrder;
use graphlib::cli::commands::{self, WeightOptions};

#[derive(Parser)]
#[command(
    name = "graphlib",
    about = "graphlib CLI: run graph algorithms over JSON graph files"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, global = true, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct WeightArgs {
    /// Read edge weights from this field of object-valued edges
    #[arg(long)]
    weight_key: Option<String>,
    /// Follow every incident edge, ignoring direction
    #[arg(long)]
    undirected_edges: bool,
}

impl From<WeightArgs> for WeightOptions {
    fn from(args: WeightArgs) -> Self {
        Self {
            key: args.weight_key,
            all_edges: args.undirected_edges,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Display flags, counts, sources and sinks
    Info {
        /// Path to the JSON graph file
        file: PathBuf,
    },
    /// Depth-first preorder from the given roots
    Preorder {
        /// Path to the JSON graph file
        file: PathBuf,
        /// Root node(s), visited in order
        #[arg(long = "root", required = true)]
        roots: Vec<String>,
    },
    /// Depth-first postorder from the given roots
    Postorder {
        /// Path to the JSON graph file
        file: PathBuf,
        /// Root node(s), visited in order
        #[arg(long = "root", required = true)]
        roots: Vec<String>,
    },
    /// Topological order; fails on cyclic graphs
    Topsort {
        /// Path to the JSON graph file
        file: PathBuf,
    },
    /// Print whether the graph is acyclic
    Acyclic {
        /// Path to the JSON graph file
        file: PathBuf,
    },
    /// Connected components, ignoring direction
    Components {
        /// Path to the JSON graph file
        file: PathBuf,
    },
    /// Strongly connected components
    Scc {
        /// Path to the JSON graph file
        file: PathBuf,
    },
    /// Components that contain a cycle
    Cycles {
        /// Path to the JSON graph file
        file: PathBuf,
    },
    /// Single-source shortest paths (non-negative weights)
    Dijkstra {
        /// Path to the JSON graph file
        file: PathBuf,
        /// Source node
        #[arg(long)]
        source: String,
        #[command(flatten)]
        weights: WeightArgs,
    },
    /// All-pairs shortest paths
    Floyd {
        /// Path to the JSON graph file
        file: PathBuf,
        #[command(flatten)]
        weights: WeightArgs,
    },
    /// Minimum spanning tree, printed as a JSON graph
    Prim {
        /// Path to the JSON graph file
        file: PathBuf,
        /// Read edge weights from this field of object-valued edges
        #[arg(long)]
        weight_key: Option<String>,
    },
    /// Subgraph induced by the given nodes, printed as a JSON graph
    Filter {
        /// Path to the JSON graph file
        file: PathBuf,
        /// Node(s) to keep
        #[arg(long = "keep", required = true)]
        keep: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Preorder { file, roots } => {
            commands::cmd_order(&file, &roots, DfsOrder::Pre, json)
        }
        Commands::Postorder { file, roots } => {
            commands::cmd_order(&file, &roots, DfsOrder::Post, json)
        }
        Commands::Topsort { file } => commands::cmd_topsort(&file, json),
        Commands::Acyclic { file } => commands::cmd_acyclic(&file, json),
        Commands::Components { file } => commands::cmd_components(&file, json),
        Commands::Scc { file } => commands::cmd_scc(&file, json),
        Commands::Cycles { file } => commands::cmd_cycles(&file, json),
        Commands::Dijkstra {
            file,
            source,
            weights,
        } => commands::cmd_dijkstra(&file, &source, &weights.into(), json),
        Commands::Floyd { file, weights } => commands::cmd_floyd(&file, &weights.into(), json),
        Commands::Prim { file, weight_key } => commands::cmd_prim(
            &file,
            &WeightOptions {
                key: weight_key,
                all_edges: true,
            },
        ),
        Commands::Filter { file, keep } => commands::cmd_filter(&file, &keep),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
