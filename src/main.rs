use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use vertexgraph::{
    Edge, FsDescriptorSource, Graph, GraphDocument, GraphOptions, Settings, VertexId, VertexRef,
    log_event, logging,
};

#[derive(Parser)]
#[command(name = "vertexgraph")]
#[command(about = "Build a dependency DAG from on-disk vertex descriptors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize configuration file
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration
    Config,

    /// Parse the graph reachable from a root vertex
    Parse {
        /// Directory of the root vertex, relative to the base directory
        path: String,

        /// Name of the root vertex
        name: String,

        /// Base directory for relative descriptor paths (defaults to workspace root)
        #[arg(short, long)]
        base: Option<PathBuf>,

        /// Maximum graph order (overrides config)
        #[arg(long)]
        max_vertices: Option<usize>,

        /// Print the document as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct VertexSummary<'a> {
    id: VertexId,
    path: &'a str,
    metadata: Option<&'a str>,
}

#[derive(Serialize)]
struct DocumentSummary<'a> {
    order: usize,
    vertices: Vec<VertexSummary<'a>>,
    edges: Vec<Edge>,
}

impl<'a> DocumentSummary<'a> {
    fn new(document: &'a GraphDocument) -> Self {
        let vertices = document
            .paths()
            .iter()
            .map(|(id, path)| VertexSummary {
                id,
                path,
                metadata: document.metadata_path(id),
            })
            .collect();
        let edges = document
            .matrix()
            .map(|matrix| matrix.edges().collect())
            .unwrap_or_default();

        Self {
            order: document.order(),
            vertices,
            edges,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        Settings::default()
    });
    logging::init_with_config(&settings.logging);

    match cli.command {
        Commands::Init { force } => {
            let cwd = std::env::current_dir().context("Cannot determine current directory")?;
            let path = Settings::init_config_file(&cwd, force)
                .map_err(|e| anyhow::anyhow!("{e}"))?;
            println!("Created configuration file at: {}", path.display());
        }

        Commands::Config => {
            println!("{}", toml::to_string_pretty(&settings)?);
        }

        Commands::Parse {
            path,
            name,
            base,
            max_vertices,
            json,
        } => {
            if let Some(limit) = max_vertices {
                settings.graph.max_vertices = limit;
            }
            let base = base
                .or_else(|| settings.workspace_root.clone())
                .unwrap_or_else(|| PathBuf::from("."));

            let mut graph = Graph::new(
                FsDescriptorSource::new(&base),
                GraphOptions::from_settings(&settings),
            );
            let root = VertexRef::new(path, name);
            let document = graph
                .parse(&root)
                .with_context(|| format!("Failed to parse graph from {}/{}", root.path, root.name))?;
            log_event!("cli", "parsed", "{} vertices", document.order());

            let summary = DocumentSummary::new(document);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print_summary(&summary);
            }
        }
    }

    Ok(())
}

fn print_summary(summary: &DocumentSummary<'_>) {
    println!("Vertices ({}):", summary.order);
    for vertex in &summary.vertices {
        println!("  {:>4}  {}", vertex.id.value(), vertex.path);
    }
    println!("Edges ({}):", summary.edges.len());
    for edge in &summary.edges {
        println!("  {} -> {}", edge.from, edge.to);
    }
}
