use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::{debug, warn};

use ductwork::{check_contiguity, read_grid, Grid, SearchOptions, Solution};

/// Count the cooling duct routes through a building that visit every room we own exactly once.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Options {
    /// Floor plan to read; standard input when omitted.
    input: Option<PathBuf>,

    /// Treat every room we do not own as joined to the outside. Faster, but wrong when the assumption does not hold.
    #[arg(long)]
    assume_contiguity: bool,

    /// Disable the straight-wall pruning test.
    #[arg(long)]
    no_corridor: bool,

    /// Disable the corner pruning test.
    #[arg(long)]
    no_diagonal: bool,

    /// Report wall-clock time spent searching.
    #[arg(long)]
    timing: bool,

    /// Print the padded grid to stderr before searching.
    #[arg(long)]
    show_grid: bool,

    /// Stack size of the search thread; the search recurses once per room on the route.
    #[arg(long, value_name = "MIB", default_value_t = 256)]
    stack_mib: usize,
}

impl Options {
    fn search_options(&self) -> SearchOptions {
        SearchOptions {
            corridor_pruning: !self.no_corridor,
            diagonal_pruning: !self.no_diagonal,
        }
    }

    fn read_grid(&self) -> Result<Grid> {
        let grid = match &self.input {
            Some(path) => {
                let file = File::open(path).with_context(|| format!("failed to open {:?}", path))?;
                read_grid(BufReader::new(file), self.assume_contiguity)
                    .with_context(|| format!("failed to parse {:?}", path))?
            }
            None => read_grid(io::stdin().lock(), self.assume_contiguity).context("failed to parse standard input")?,
        };

        Ok(grid)
    }
}

fn main() -> Result<()> {
    let env = env_logger::Env::new()
        .filter("DUCTWORK_LOG")
        .write_style("DUCTWORK_LOG_STYLE");
    env_logger::init_from_env(env);

    let options = Options::parse();
    debug!("{:?}", options);

    let mut grid = options.read_grid()?;

    if options.assume_contiguity {
        let report = check_contiguity(&grid);
        if !report.stranded.is_empty() {
            warn!("{} rooms we do not own are cut off from the outside; the count may be wrong", report.stranded.len());
        }
        if !report.start_anchored {
            warn!("the start room touches neither the outside nor a room we do not own; the count may be wrong");
        }
    }

    if options.show_grid {
        eprint!("{}", grid);
    }

    let search_options = options.search_options();
    let started = Instant::now();
    let solution: Solution = thread::Builder::new()
        .name("search".into())
        .stack_size(options.stack_mib << 20)
        .spawn(move || grid.count_paths(search_options))
        .context("failed to start the search thread")?
        .join()
        .map_err(|_| anyhow!("the search thread panicked"))?;
    let elapsed = started.elapsed();

    println!("calls: {}", solution.calls);
    println!("{}", solution.paths);
    if options.timing {
        println!("elapsed: {}.{:06} seconds", elapsed.as_secs(), elapsed.subsec_micros());
    }

    Ok(())
}
