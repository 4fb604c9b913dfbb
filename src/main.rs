use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use treequery::config::Config;
use treequery::document::node::TreeNode;
use treequery::file::loader::{load_tree_file, load_tree_from_stdin};
use treequery::query::{Dialect, Query};

/// TreeQuery - path queries over YAML and JSON trees
#[derive(Parser)]
#[command(name = "treequery")]
#[command(version)]
#[command(about = "Glob, regex and grep style path queries over YAML and JSON trees", long_about = None)]
struct Cli {
    /// Query to run, e.g. 'windows/**/calc.exe'
    query: String,

    /// YAML or JSON file to search (omit or '-' to read from stdin)
    file: Option<String>,

    /// Query dialect: regex, glob, grep or literal (default from config: regex)
    #[arg(short, long)]
    dialect: Option<String>,

    /// Compare names case-insensitively
    #[arg(short, long)]
    ignore_case: bool,

    /// Stop after this many results
    #[arg(short = 'n', long)]
    max_results: Option<usize>,

    /// Print node names instead of full paths
    #[arg(long)]
    names: bool,

    /// Test PATH against the query instead of searching a tree (repeatable)
    #[arg(short = 'm', long = "match", value_name = "PATH")]
    paths: Vec<String>,

    /// Config file to use instead of ~/.config/treequery/config.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Runs the query, returning whether anything matched.
fn run(cli: Cli) -> Result<bool> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };

    // CLI flags override config values
    let dialect: Dialect = cli
        .dialect
        .as_deref()
        .unwrap_or(&config.dialect)
        .parse()?;
    let ignore_case = cli.ignore_case || config.ignore_case;
    let limit = match cli.max_results.unwrap_or(config.max_results) {
        0 => usize::MAX,
        n => n,
    };
    let show_names = cli.names || config.show_names;

    let query = Query::with_ignore_case(&cli.query, dialect, ignore_case)
        .with_context(|| format!("Invalid {} query '{}'", dialect, cli.query))?;

    let mut out = io::stdout().lock();

    if !cli.paths.is_empty() {
        let results: Vec<(&String, bool)> = cli
            .paths
            .iter()
            .map(|path| (path, query.matches(path)))
            .collect();
        let any = results.iter().any(|(_, matched)| *matched);
        write_lines(
            &mut out,
            results.into_iter().map(|(path, matched)| {
                format!("{}: {}", path, if matched { "match" } else { "no match" })
            }),
        )?;
        return Ok(any);
    }

    let tree = match cli.file.as_deref() {
        None | Some("-") => load_tree_from_stdin()?,
        Some(file) => load_tree_file(file)?,
    };

    let results = query.find(tree.root()).take(limit).map(|node| {
        if show_names {
            node.name()
        } else {
            node.path()
        }
    });
    let count = write_lines(&mut out, results)?;
    log::debug!("{} results for '{}'", count, query);

    Ok(count > 0)
}

/// Writes one line per item and returns how many items were produced.
///
/// A reader that goes away early (`treequery ... | head`) ends output
/// quietly instead of failing with a broken pipe.
fn write_lines<W, I>(out: &mut W, lines: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = String>,
{
    let mut count = 0;
    for line in lines {
        count += 1;
        match writeln!(out, "{}", line) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => return Ok(count),
            Err(e) => return Err(e),
        }
    }
    match out.flush() {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(count),
        other => other.map(|()| count),
    }
}
