use anyhow::Result;
use clap::Parser;
use puzzle_runner::Solver;
use shuttle_search::{Answer, MergeStrategy};
use std::path::PathBuf;

fn main() -> Result<()> {
    let app: App = App::parse();
    app.run()?;
    Ok(())
}

/// Shuttle search: earliest bus and aligned departures
#[derive(Debug, Parser)]
#[clap(version)]
struct App {
    /// Optional path to input file. If not supplied, will read from STDIN.
    #[clap(short = 'i', long, parse(from_os_str))]
    input: Option<PathBuf>,

    /// How congruences are merged: `search` or `bezout`
    #[clap(short = 's', long, default_value = "search")]
    strategy: MergeStrategy,

    /// Print a decorated report with timings for each part
    #[clap(short = 't', long)]
    timed: bool,
}

impl App {
    fn run(&self) -> Result<()> {
        let answer = Answer::new(self.strategy);
        let notes = match &self.input {
            Some(path) => answer.load_input(path)?,
            None => answer.load_stdin()?,
        };

        if self.timed {
            return answer.solve_timed("Shuttle Search", &notes);
        }

        let report = answer.report(&notes)?;
        println!("{}", report.first);
        println!("{}", report.second);
        Ok(())
    }
}
