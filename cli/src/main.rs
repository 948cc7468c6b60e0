use anyhow::Result;
use boolsearch_core::{load_index, process, IndexPaths, QueryResult, SearchIndex};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// Directory holding wordIndex.bin, docIndex.bin and wordDocIndex.bin
    #[arg(long, default_value = ".")]
    index: PathBuf,
    /// Run a single query and exit instead of starting the prompt
    #[arg(long)]
    query: Option<String>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let paths = IndexPaths::new(&args.index);
    let start = std::time::Instant::now();
    let index = load_index(&paths)?;
    tracing::info!(
        terms = index.terms.len(),
        docs = index.docs.len(),
        took_s = start.elapsed().as_secs_f64(),
        "index loaded"
    );

    match args.query {
        Some(q) => run_query(&q, &index),
        None => prompt_loop(&index)?,
    }
    Ok(())
}

fn prompt_loop(index: &SearchIndex) -> Result<()> {
    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        print!("Enter query here: ");
        std::io::stdout().flush()?;
        line.clear();
        // EOF or a blank line ends the session.
        if stdin.lock().read_line(&mut line)? == 0 || line.trim().is_empty() {
            return Ok(());
        }
        run_query(line.trim(), index);
    }
}

fn run_query(query: &str, index: &SearchIndex) {
    let QueryResult { docs, unmatched, .. } = process(query, index);
    for term in &unmatched {
        println!("{term} not in any docs");
    }
    if docs.is_empty() {
        println!("No results\n");
        return;
    }
    for name in &docs {
        println!("{name}");
    }
    println!();
}
