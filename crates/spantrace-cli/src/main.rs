// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use spantrace_algo::algo::sample::demo_graph;
use spantrace_algo::{AlgorithmKind, Graph, MstConfig, TraceVerbosity, VertexId, compare};
use std::path::{Path, PathBuf};
use tracing::info;

pub mod render;

#[derive(Parser)]
#[command(name = "spantrace")]
#[command(about = "Step-tracing minimum spanning tree engines", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one or both engines on a JSON graph file
    Run {
        /// Path to the graph JSON ({"vertices": [...], "edges": [...]})
        file: PathBuf,
        #[command(flatten)]
        opts: RunOpts,
    },
    /// Run on the built-in 10-vertex sample graph
    Demo {
        #[command(flatten)]
        opts: RunOpts,
    },
    /// Compare Prim and Kruskal on a JSON graph file
    Compare {
        file: PathBuf,
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
        /// Start vertex (default: first vertex)
        #[arg(long)]
        start: Option<VertexId>,
    },
    /// Print the algorithm comparison table
    Profiles,
}

#[derive(clap::Args)]
struct RunOpts {
    #[arg(long, value_enum, default_value = "both")]
    algorithm: AlgorithmChoice,
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,
    /// Trace verbosity: full | decisions (default: $SPANTRACE_VERBOSITY or full)
    #[arg(long)]
    verbosity: Option<TraceVerbosity>,
    /// Start vertex (default: $SPANTRACE_START or first vertex)
    #[arg(long)]
    start: Option<VertexId>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlgorithmChoice {
    Prim,
    Kruskal,
    Both,
}

impl AlgorithmChoice {
    fn kinds(&self) -> &'static [AlgorithmKind] {
        match self {
            AlgorithmChoice::Prim => &[AlgorithmKind::Prim],
            AlgorithmChoice::Kruskal => &[AlgorithmKind::Kruskal],
            AlgorithmChoice::Both => &AlgorithmKind::ALL,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn build_config(verbosity: Option<TraceVerbosity>, start: Option<VertexId>) -> MstConfig {
    let mut config = MstConfig::from_env();
    if let Some(verbosity) = verbosity {
        config.verbosity = verbosity;
    }
    if let Some(start) = start {
        config.start = Some(start);
    }
    config
}

fn load_graph(path: &Path) -> Result<Graph> {
    Graph::from_json_file(path).with_context(|| format!("Failed to load graph from {:?}", path))
}

fn run_engines(graph: &Graph, opts: RunOpts) -> Result<()> {
    let config = build_config(opts.verbosity, opts.start);
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        verbosity = %config.verbosity,
        "running engines"
    );

    let mut results = Vec::new();
    for &kind in opts.algorithm.kinds() {
        let result = spantrace_algo::run_algorithm(kind, graph, config.clone())
            .with_context(|| format!("{} failed", kind.title()))?;
        results.push(result);
    }

    match opts.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Table => {
            for result in &results {
                render::print_trace(result);
            }
            if let [prim, kruskal] = results.as_slice() {
                render::print_agreement(prim, kruskal);
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Demo {
        opts: RunOpts {
            algorithm: AlgorithmChoice::Both,
            format: OutputFormat::Table,
            verbosity: None,
            start: None,
        },
    });

    match command {
        Commands::Run { file, opts } => {
            let graph = load_graph(&file)?;
            run_engines(&graph, opts)?;
        }
        Commands::Demo { opts } => {
            let graph = demo_graph().context("Failed to build sample graph")?;
            if opts.format == OutputFormat::Table {
                println!(
                    "{} {} vertices, {} edges",
                    "Sample graph:".bold(),
                    graph.vertex_count(),
                    graph.edge_count()
                );
            }
            run_engines(&graph, opts)?;
        }
        Commands::Compare {
            file,
            format,
            start,
        } => {
            let graph = load_graph(&file)?;
            let comparison = compare(&graph, build_config(None, start))
                .context("Failed to compare engines")?;
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&comparison)?)
                }
                OutputFormat::Table => render::print_comparison(&comparison),
            }
        }
        Commands::Profiles => render::print_profiles(),
    }

    Ok(())
}
