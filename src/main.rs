use std::error::Error;
use std::fs;
use std::process::ExitCode;
use std::time::Instant;

use argh::FromArgs;

use chronospatial::bytecode::disassemble;
use chronospatial::config::Limits;
use chronospatial::parser::parse_lines;
use chronospatial::solution::{solve_part1_with, solve_part2_with};
use chronospatial::Machine;

const DEFAULT_INPUT: &str = "inputs/day17.txt";

/// Runs the three-bit computer of Advent of Code 2024, day 17, on a puzzle input.
#[derive(FromArgs)]
struct Arguments {
  /// the puzzle input,
  /// `inputs/day17.txt` if not specified
  #[argh(option, short = 'i', default = "String::from(DEFAULT_INPUT)")]
  input: String,

  /// which part to run, 1 or 2;
  /// both if not specified
  #[argh(option, short = 'p')]
  part: Option<u8>,

  /// the most instructions part 1 may execute
  #[argh(option)]
  step_limit: Option<u64>,

  /// whether part 1 may run for as long as the program does
  #[argh(switch)]
  unbounded: bool,

  /// the most instructions each part 2 candidate may execute
  #[argh(option)]
  candidate_step_limit: Option<u64>,

  /// print the program as assembly and exit
  #[argh(switch, short = 'd')]
  disassemble: bool,

  /// print the machine state once part 1 halts
  #[argh(switch, short = 't')]
  trace: bool,
}

impl Arguments {
  fn limits(&self) -> Limits {
    let mut limits = match self.unbounded {
      true  => Limits::unbounded(),
      false => Limits::default()
    };
    if let Some(steps) = self.step_limit {
      limits.run_steps = Some(steps);
    }
    if let Some(steps) = self.candidate_step_limit {
      limits.candidate_steps = steps;
    }
    limits
  }
}

fn time_part<F>(part: u8, solve: F) -> Result<(), Box<dyn Error>>
  where F: FnOnce() -> chronospatial::Result<String>
{
  let start  = Instant::now();
  let answer = solve()?;
  println!("Part {}: {} ({}μs)", part, answer, start.elapsed().as_micros());
  Ok(())
}

fn run(arguments: &Arguments) -> Result<(), Box<dyn Error>> {
  let text = fs::read_to_string(&arguments.input)
    .map_err(|e| format!("could not open {}: {}", arguments.input, e))?;
  let lines: Vec<&str> = text.lines().collect();
  let limits = arguments.limits();

  if arguments.disassemble {
    let description = parse_lines(&lines)?;
    print!("{}", disassemble(&description.program));
    return Ok(());
  }

  let (part1, part2) = match arguments.part {
    None    => (true, true),
    Some(1) => (true, false),
    Some(2) => (false, true),
    Some(n) => return Err(format!("there is no part {}", n).into())
  };

  if part1 {
    time_part(1, || solve_part1_with(&lines, limits))?;
    if arguments.trace {
      let description = parse_lines(&lines)?;
      let mut machine =
        Machine::new(&description.program, description.registers).with_step_limit(limits.run_steps);
      machine.run()?;
      println!("{}", machine);
    }
  }
  if part2 {
    time_part(2, || solve_part2_with(&lines, limits))?;
  }

  Ok(())
}

fn main() -> ExitCode {
  let arguments: Arguments = argh::from_env();

  match run(&arguments) {
    Ok(())  => ExitCode::SUCCESS,
    Err(e)  => {
      eprintln!("Error: {}", e);
      ExitCode::FAILURE
    }
  }
}
