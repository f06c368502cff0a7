//! `ugraph` - load an edge-list file and print statistics about the graph.
//!
//! ```bash
//! # statistics of the adjacency-list representation
//! ugraph graph.txt
//!
//! # use the adjacency-matrix representation and print every neighborhood
//! ugraph graph.txt --matrix --render
//!
//! # convert to GraphViz
//! ugraph graph.txt --dot | dot -Tsvg > graph.svg
//! ```

use std::{
    io::{BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use ugraph_basics::{io::DotWrite, prelude::*};

/// Load an undirected graph from an edge-list file
#[derive(Parser)]
#[command(name = "ugraph")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Edge-list file: number of vertices, number of edges, then one `v w` line per edge
    file: PathBuf,

    /// Use the adjacency-matrix representation (repeated edges collapse)
    #[arg(short, long)]
    matrix: bool,

    /// Print every vertex with its neighbors
    #[arg(short, long)]
    render: bool,

    /// Print the graph in the edge-list format
    #[arg(short, long)]
    edge_list: bool,

    /// Print the graph in the GraphViz Dot-Format
    #[arg(short, long)]
    dot: bool,

    /// Increase logging verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn report<G: UndirectedGraphOps, W: Write>(graph: &G, cli: &Cli, mut out: W) -> Result<()> {
    writeln!(out, "vertices:   {}", graph.number_of_nodes())?;
    writeln!(out, "edges:      {}", graph.number_of_edges())?;
    writeln!(out, "max degree: {}", graph.max_degree())?;
    writeln!(out, "self loops: {}", graph.number_of_self_loops())?;

    if cli.render {
        write!(out, "{graph}")?;
    }
    if cli.edge_list {
        graph.try_write_edge_list(&mut out)?;
    }
    if cli.dot {
        graph.try_write_dot(&mut out)?;
    }

    Ok(())
}

fn run<W: Write>(cli: &Cli, out: W) -> Result<()> {
    debug!(file = %cli.file.display(), matrix = cli.matrix, "loading graph");

    if cli.matrix {
        let graph = AdjMatrixGraph::load(&cli.file)
            .with_context(|| format!("Cannot load {}", cli.file.display()))?;
        report(&graph, cli, out)
    } else {
        let graph = Graph::load(&cli.file)
            .with_context(|| format!("Cannot load {}", cli.file.display()))?;
        report(&graph, cli, out)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match run(&cli, &mut out).and_then(|()| Ok(out.flush()?)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod test {
    use std::ffi::OsStr;

    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(["ugraph", "graph.txt"].into_iter().chain(args.iter().copied()))
    }

    fn report_to_string<G: UndirectedGraphOps>(graph: &G, cli: &Cli) -> String {
        let mut buffer = Vec::new();
        report(graph, cli, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn statistics() {
        let graph = Graph::from_edges(3, [(0, 1), (1, 2), (2, 2), (1, 2)]).unwrap();
        assert_eq!(
            report_to_string(&graph, &cli(&[])),
            "vertices:   3\nedges:      4\nmax degree: 3\nself loops: 1\n"
        );

        let graph = AdjMatrixGraph::from_edges(3, [(0, 1), (1, 2), (2, 2), (1, 2)]).unwrap();
        assert_eq!(
            report_to_string(&graph, &cli(&["-m"])),
            "vertices:   3\nedges:      4\nmax degree: 2\nself loops: 1\n"
        );
    }

    #[test]
    fn render_edge_list_and_dot() {
        let graph = Graph::from_edges(2, [(0, 1)]).unwrap();

        let out = report_to_string(&graph, &cli(&["--render", "--edge-list", "--dot"]));
        assert_eq!(
            out,
            "vertices:   2\nedges:      1\nmax degree: 1\nself loops: 0\n\
             2 vertices, 1 edges\n0: 1 \n1: 0 \n\
             2\n1\n0 1\n\
             graph {\nu0;u1;\nu0--u1;\n}\n"
        );
    }

    #[test]
    fn run_reports_missing_file() {
        let cli = Cli::parse_from(["ugraph", "this/file/does/not/exist.txt", "-r"]);

        let mut buffer = Vec::new();
        let err = run(&cli, &mut buffer).unwrap_err();
        assert!(format!("{err:#}").starts_with("Cannot load this/file/does/not/exist.txt"));
        assert!(buffer.is_empty());
    }

    #[test]
    fn run_loads_file() {
        let path = std::env::temp_dir().join(format!("ugraph-cli-{}.txt", std::process::id()));
        std::fs::write(&path, "3\n3\n0 1\n0 1\n2 2\n").unwrap();

        let mut buffer = Vec::new();
        let cli = Cli::parse_from([OsStr::new("ugraph"), path.as_os_str(), OsStr::new("--matrix")]);
        let result = run(&cli, &mut buffer);
        std::fs::remove_file(&path).unwrap();

        result.unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "vertices:   3\nedges:      3\nmax degree: 1\nself loops: 1\n"
        );
    }
}
