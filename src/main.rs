// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use clap::Parser;
use jigsaw_solver::config::Config;
use jigsaw_solver::input::PuzzleInput;
use jigsaw_solver::instruction::{AssemblySequence, Instruction};
use jigsaw_solver::model::PlaceTransform;
use jigsaw_solver::solver::{SolveOutcome, Solver};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "jigsaw", version, about = "Compute pick-and-place moves that assemble a jigsaw in its frame")]
struct Cli {
    /// Problem file: the frame corners and raw piece outlines, as JSON.
    problem: PathBuf,

    /// Tolerances, as JSON; omitted fields take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Give up after this many search steps.
    #[arg(long)]
    max_steps: Option<u64>,

    /// Also print the frame and a summary line per piece.
    #[arg(long)]
    info: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(error) => {
            eprintln!("jigsaw: {error}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether a solution was found.
fn run(cli: &Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };
    let input = PuzzleInput::from_json_file(&cli.problem)?;
    let mut solver = input.to_solver(config)?;
    if let Some(max_steps) = cli.max_steps {
        solver = solver.with_max_steps(max_steps);
    }

    let outcome = solver.solve();
    if cli.info {
        print_info(&solver, outcome.solution().map(|s| &s.transforms[..]));
    }

    match outcome {
        SolveOutcome::Solved(solution) => {
            let mut sequence = AssemblySequence::from_solution(&solution, solver.pieces());
            println!("{}", sequence.start_instruction().to_line()?);
            loop {
                let instruction = sequence.next();
                println!("{}", instruction.to_line()?);
                if matches!(instruction, Instruction::Reset(_)) {
                    break;
                }
            }
            for id in &solution.unplaced {
                eprintln!("piece {id} left unplaced");
            }
            Ok(true)
        }
        SolveOutcome::NoSolution => {
            eprintln!("no assembly closes around the frame");
            Ok(false)
        }
        SolveOutcome::BudgetExhausted => {
            eprintln!("search stopped after the step budget");
            Ok(false)
        }
    }
}

fn print_info(solver: &Solver, transforms: Option<&[PlaceTransform]>) {
    let frame = solver.frame();
    println!(
        "frame {:.2} × {:.2} at {:.2}°",
        frame.width(),
        frame.height(),
        frame.angle().to_degrees()
    );
    for piece in solver.pieces() {
        match transforms {
            Some(transforms) => println!("{} {}", piece, transforms[piece.id()]),
            None => println!("{}", piece),
        }
    }
}
