//! Example building a crossword from a word list with automatic placement.
//!
//! The word file holds one `ANSWER: clue` pair per line; blank lines and lines starting with
//! `#` are ignored. Automatic placement is greedy, so the example tries several shuffled
//! orderings in parallel and keeps the puzzle that places the most words, breaking ties by
//! grid quality score.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example auto_place -- crates/crosslace-placement/data/astronomy.txt
//! ```
//!
//! Choose the grid size and the sampling budget (default: 15x15, 64 tries):
//!
//! ```sh
//! cargo run --example auto_place -- words.txt --width 13 --height 13 --tries 500
//! ```
//!
//! Reproduce a run and validate strictly:
//!
//! ```sh
//! cargo run --example auto_place -- words.txt --seed 42 --strictness strict
//! ```
//!
//! Set `RUST_LOG=debug` to see why entries were skipped.

use std::{fs, path::PathBuf, process};

use clap::{Parser, ValueEnum};
use crosslace_placement::{AutoPlaceOutcome, Puzzle, WordEntry};
use crosslace_validator::{
    Finding, GridQualityValidator, GridReport, Strictness, WordContext, WordQualityValidator,
};
use rand::{SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrictnessKind {
    Lenient,
    Normal,
    Strict,
}

impl From<StrictnessKind> for Strictness {
    fn from(kind: StrictnessKind) -> Self {
        match kind {
            StrictnessKind::Lenient => Strictness::Lenient,
            StrictnessKind::Normal => Strictness::Normal,
            StrictnessKind::Strict => Strictness::Strict,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// File with one `ANSWER: clue` pair per line.
    #[arg(value_name = "FILE")]
    words: PathBuf,

    /// Grid width.
    #[arg(long, value_name = "COLS", default_value_t = 15)]
    width: usize,

    /// Grid height.
    #[arg(long, value_name = "ROWS", default_value_t = 15)]
    height: usize,

    /// Orderings to try. The first keeps the file order.
    #[arg(long, value_name = "COUNT", default_value_t = 64)]
    tries: u64,

    /// Base seed; try `i` shuffles with `seed + i`.
    #[arg(long, value_name = "SEED", default_value_t = 0)]
    seed: u64,

    /// How strictly the grid is validated.
    #[arg(long, value_name = "LEVEL", default_value = "normal")]
    strictness: StrictnessKind,
}

struct Attempt {
    puzzle: Puzzle,
    outcome: AutoPlaceOutcome,
    report: GridReport,
    seed: u64,
}

impl Attempt {
    fn rank(&self) -> (usize, u8) {
        (self.outcome.placed.len(), self.report.score)
    }
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let text = match fs::read_to_string(&args.words) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("Cannot read {}: {err}", args.words.display());
            process::exit(1);
        }
    };
    let entries = parse_entries(&text);
    if entries.is_empty() {
        eprintln!("{} holds no entries.", args.words.display());
        process::exit(1);
    }
    let template = match Puzzle::new(args.width, args.height) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };
    if args.tries == 0 {
        eprintln!("--tries must be at least 1.");
        process::exit(1);
    }

    let strictness = Strictness::from(args.strictness);
    let best = (0..args.tries)
        .into_par_iter()
        .map(|i| {
            let seed = args.seed.wrapping_add(i);
            let mut ordered = entries.clone();
            if i > 0 {
                ordered.shuffle(&mut Pcg64::seed_from_u64(seed));
            }
            let mut puzzle = template.clone();
            let outcome = puzzle.auto_place(&ordered);
            puzzle.renumber();
            let report =
                GridQualityValidator::default().validate(puzzle.grid(), puzzle.words(), strictness);
            Attempt {
                puzzle,
                outcome,
                report,
                seed,
            }
        })
        .max_by(|a, b| a.rank().cmp(&b.rank()));

    if let Some(attempt) = best {
        print_attempt(&attempt, args.tries, entries.len());
        return;
    }

    eprintln!("No attempt was made.");
    process::exit(1);
}

fn parse_entries(text: &str) -> Vec<WordEntry> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| match line.split_once(':') {
            Some((answer, clue)) => WordEntry::new(answer.trim(), clue.trim()),
            None => WordEntry::new(line, ""),
        })
        .collect()
}

fn print_finding(finding: &Finding) {
    print!("  [{}] {}: {}", finding.severity, finding.kind, finding.message);
    if let Some(pos) = finding.position {
        print!(" at {pos}");
    }
    println!();
}

fn print_attempt(attempt: &Attempt, tries: u64, total: usize) {
    let Attempt {
        puzzle,
        outcome,
        report,
        seed,
    } = attempt;

    println!("Selection:");
    println!("  Tries: {tries}");
    println!("  Seed: {seed}");
    println!("  Placed: {} of {total}", outcome.placed.len());
    println!();

    println!("Grid:");
    for line in puzzle.grid().to_string().lines() {
        println!("  {line}");
    }
    println!();

    for (heading, clues) in [("Across:", puzzle.across()), ("Down:", puzzle.down())] {
        println!("{heading}");
        for word in clues {
            let number = word.number().map_or_else(|| "-".to_owned(), |n| n.to_string());
            println!("  {number:>3}. {} ({})", word.clue(), word.text());
        }
        println!();
    }

    if !outcome.skipped.is_empty() {
        println!("Skipped:");
        for skipped in &outcome.skipped {
            println!("  {}: {}", skipped.entry.text, skipped.reason);
        }
        println!();
    }

    println!("Grid report:");
    println!("  Valid: {}", report.valid);
    println!("  Score: {}", report.score);
    println!("  Density: {:.2}", report.details.density);
    println!("  Intersections: {}", report.details.intersections);
    for finding in report.findings.iter() {
        print_finding(finding);
    }
    println!();

    let validator = WordQualityValidator::default();
    println!("Word reports:");
    for word in puzzle.words() {
        let others = puzzle
            .words()
            .iter()
            .filter(|other| other.id() != word.id())
            .map(|other| other.text().to_owned());
        let context = WordContext::new()
            .existing_words(others)
            .grid_size(puzzle.grid().width(), puzzle.grid().height());
        let report = validator.validate(word.text(), Some(word.clue()), &context);
        println!("  {} ({}): {}", word.text(), word.start(), report.score);
        for finding in report.findings.iter() {
            print!("  ");
            print_finding(finding);
        }
    }
}
