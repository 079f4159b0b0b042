//! Command line Ricochet Robots solver.
//!
//! Exit codes: 0 solution found, 1 no solution within the depth bound,
//! 2 invalid input.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use ricochet_config::SolverConfig;
use ricochet_core::{Cell, Color, Puzzle, RobotPositions, Symbol, Target, TileSet};
use ricochet_solver::{LoggingSink, NullSink, ProgressSink, SolveResult};

#[derive(Debug, Parser)]
#[command(name = "ricochet", version, about = "Solve a Ricochet Robots puzzle")]
struct Args {
    /// Top-left quadrant tile, e.g. A3F
    #[arg(long)]
    top_left: String,

    /// Top-right quadrant tile
    #[arg(long)]
    top_right: String,

    /// Bottom-left quadrant tile
    #[arg(long)]
    bottom_left: String,

    /// Bottom-right quadrant tile
    #[arg(long)]
    bottom_right: String,

    /// Yellow robot start cell as x,y
    #[arg(long, value_parser = parse_cell)]
    yellow: Cell,

    /// Red robot start cell as x,y
    #[arg(long, value_parser = parse_cell)]
    red: Cell,

    /// Green robot start cell as x,y
    #[arg(long, value_parser = parse_cell)]
    green: Cell,

    /// Blue robot start cell as x,y
    #[arg(long, value_parser = parse_cell)]
    blue: Cell,

    /// Silver robot start cell as x,y (omit to play without silver)
    #[arg(long, value_parser = parse_cell)]
    silver: Option<Cell>,

    /// Target, e.g. blue-pyramid, red-star or cosmic
    #[arg(long, value_parser = parse_target)]
    target: Target,

    /// Configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Suppress banner and progress output
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    if !args.quiet {
        ricochet_console::init();
    }

    match run(&args) {
        Ok(result) => {
            for m in &result.moves {
                println!("{m}");
            }
            if result.is_solved() {
                ExitCode::SUCCESS
            } else {
                eprintln!("no solution within depth bound ({} states)", result.num_calc_move);
                ExitCode::from(1)
            }
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> anyhow::Result<SolveResult> {
    let config = match &args.config {
        Some(path) => SolverConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SolverConfig::default(),
    };

    let puzzle = Puzzle::new(
        TileSet::new(
            &args.top_left,
            &args.top_right,
            &args.bottom_left,
            &args.bottom_right,
        ),
        RobotPositions {
            yellow: args.yellow,
            red: args.red,
            green: args.green,
            blue: args.blue,
            silver: args.silver,
        },
        args.target,
    )?;

    let progress: &dyn ProgressSink = if args.quiet { &NullSink } else { &LoggingSink };
    let result = ricochet_solver::solve(&puzzle, &config, progress)?;
    Ok(result)
}

fn parse_cell(s: &str) -> Result<Cell, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("'{s}' is not of the form x,y"))?;
    let x: u8 = x.trim().parse().map_err(|_| format!("invalid x in '{s}'"))?;
    let y: u8 = y.trim().parse().map_err(|_| format!("invalid y in '{s}'"))?;
    if x > 15 || y > 15 {
        return Err(format!("'{s}' is outside the 16x16 board"));
    }
    Ok(Cell::new(x, y))
}

fn parse_target(s: &str) -> Result<Target, String> {
    if s.eq_ignore_ascii_case("cosmic") {
        return Ok(Target::cosmic());
    }
    let (color, symbol) = s
        .split_once('-')
        .ok_or_else(|| format!("'{s}' is not of the form color-symbol or 'cosmic'"))?;
    let color = parse_color(color)?;
    let symbol = parse_symbol(symbol)?;
    Target::colored(symbol, color).map_err(|e| e.to_string())
}

fn parse_color(s: &str) -> Result<Color, String> {
    match s.to_ascii_lowercase().as_str() {
        "yellow" => Ok(Color::Yellow),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "blue" => Ok(Color::Blue),
        "silver" => Ok(Color::Silver),
        _ => Err(format!("unknown color '{s}'")),
    }
}

fn parse_symbol(s: &str) -> Result<Symbol, String> {
    match s.to_ascii_lowercase().as_str() {
        "pyramid" => Ok(Symbol::Pyramid),
        "star" => Ok(Symbol::Star),
        "moon" => Ok(Symbol::Moon),
        "saturn" => Ok(Symbol::Saturn),
        _ => Err(format!("unknown symbol '{s}'")),
    }
}
