//! Command-line entry point: reads a vertex file and an optional edge
//! file, runs the k-d partitioner and the region consolidator, and writes
//! the resulting regions.

mod parser;
mod region_file;

use std::env;
use std::fs;
use std::io;
use std::io::BufWriter;

use anyhow::Context as _;
use anyhow::Result;
use tracing::info;

use division::graph::Graph;
use division::{analysis, consolidate, partition};

const USAGE: &str = "Usage: division-tools -v VERTICES [-e EDGES] -m MAX_ACCUMULATION [out-file] >out";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut options = getopts::Options::new();
    options.optflag("h", "help", "print this help menu");
    options.optflag("", "version", "print version information");
    options.optopt("v", "vertices", "vertex file", "FILE");
    options.optopt("e", "edges", "edge file", "FILE");
    options.optopt("m", "max-accumulation", "leaf capacity for the k-d partitioner", "N");

    let matches = options.parse(env::args().skip(1))?;

    if matches.opt_present("h") {
        println!("{}", options.usage(USAGE));
        return Ok(());
    }
    if matches.opt_present("version") {
        println!("division-tools version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    if matches.free.len() > 1 {
        anyhow::bail!("too many arguments\n\n{}", options.usage(USAGE));
    }

    let vertex_file = matches
        .opt_str("v")
        .with_context(|| format!("missing required option 'vertices'\n\n{}", options.usage(USAGE)))?;
    let max_accumulation: usize = matches
        .opt_get("m")
        .context("invalid value for option 'max-accumulation'")?
        .with_context(|| format!("missing required option 'max-accumulation'\n\n{}", options.usage(USAGE)))?;

    let mut graph = Graph::new();

    let vertex_reader = io::BufReader::new(
        fs::File::open(&vertex_file).with_context(|| format!("failed to open vertex file {vertex_file:?}"))?,
    );
    parser::read_vertices(vertex_reader, &mut graph).context("failed to parse vertex file")?;

    if let Some(edge_file) = matches.opt_str("e") {
        let edge_reader = io::BufReader::new(
            fs::File::open(&edge_file).with_context(|| format!("failed to open edge file {edge_file:?}"))?,
        );
        parser::read_edges(edge_reader, &mut graph).context("failed to parse edge file")?;
    }

    let leaves = partition::partition(&graph, max_accumulation);
    let regions = consolidate::consolidate(&graph, &leaves).context("failed to consolidate partition")?;

    match matches.free.first() {
        Some(path) => {
            let out = fs::File::create(path).with_context(|| format!("failed to create output file {path:?}"))?;
            region_file::write_regions(BufWriter::new(out), &regions)?;
        }
        None => {
            let stdout = io::stdout();
            region_file::write_regions(stdout.lock(), &regions)?;
        }
    }

    info!(
        vertices = graph.len(),
        leaves = leaves.len(),
        regions = regions.len(),
        imbalance = analysis::imbalance(&regions),
        "partition complete"
    );

    Ok(())
}
