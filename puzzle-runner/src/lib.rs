#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod output;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::{
    fmt::Display,
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
    time::{Duration, Instant},
};

pub trait Reader: BufRead {}

impl<T> Reader for T where T: BufRead {}

pub type FRead = BufReader<File>;

pub fn file_reader<P: AsRef<Path>>(path: P) -> Result<FRead> {
    let file = File::open(path)?;
    let meta = file.metadata()?;

    if meta.is_dir() {
        bail!("Is a directory");
    }

    Ok(BufReader::new(file))
}

pub fn parse_string<R: Reader>(mut r: R) -> Result<String> {
    let mut buf = String::new();
    r.read_to_string(&mut buf)
        .with_context(|| "unable to read input")?;
    Ok(buf)
}

pub trait Solver {
    type Input;
    type Output1: Display;
    type Output2: Display;

    fn parse_input<R: Reader>(&self, r: R) -> Result<Self::Input>;
    fn solve_first(&self, input: &Self::Input) -> Result<Self::Output1>;
    fn solve_second(&self, input: &Self::Input) -> Result<Self::Output2>;

    fn load_input<P: AsRef<Path>>(&self, p: P) -> Result<Self::Input> {
        let path = p.as_ref();
        let f = file_reader(path).with_context(|| {
            format!("unable to open input file {}", path.display())
        })?;
        self.parse_input(f)
    }

    fn load_stdin(&self) -> Result<Self::Input> {
        let stdin = io::stdin();
        let input = self.parse_input(stdin.lock())?;
        Ok(input)
    }

    fn solve_timed(&self, title: &str, input: &Self::Input) -> Result<()> {
        let run_timed = |part: u8| -> Result<(String, Duration)> {
            let now = Instant::now();
            let s = match part {
                1 => format!(
                    "\n{}: {}",
                    "Part 1".red().bold(),
                    format!("{}", self.solve_first(input)?).red().bold()
                ),
                _ => format!(
                    "{}: {}",
                    "Part 2".green().bold(),
                    format!("{}", self.solve_second(input)?).green().bold()
                ),
            };
            Ok((s, now.elapsed()))
        };

        output::print_header(title);

        for part in [1, 2] {
            let (s, t) = run_timed(part)?;
            println!("{}", s);
            self.print_time(t);
            println!();
        }

        Ok(())
    }

    fn print_time(&self, d: Duration) {
        println!(
            "- {}.{}{}{:03} {}",
            format!("{:03}", d.as_secs()).bright_red(),
            format!("{:03}", d.subsec_millis()).red(),
            format!("{:03}", d.subsec_micros() % 1_000).yellow(),
            format!("{}", d.subsec_nanos() % 1_000).green(),
            "seconds".bold(),
        );
    }
}
