//! Day 17: Chronospatial Computer. Both parts take the puzzle input as lines and answer with
//! text.

use crate::config::Limits;
use crate::error::Result;
use crate::machine::Machine;
use crate::parser::{parse_lines, MachineDescription};
use crate::search::find_self_reproducing_a;

/// Runs the program from the given registers and joins its output with commas.
pub fn solve_part1<S: AsRef<str>>(lines: &[S]) -> Result<String> {
  solve_part1_with(lines, Limits::default())
}

/// The smallest positive initial A for which the program outputs a copy of itself.
pub fn solve_part2<S: AsRef<str>>(lines: &[S]) -> Result<String> {
  solve_part2_with(lines, Limits::default())
}

pub fn solve_part1_with<S: AsRef<str>>(lines: &[S], limits: Limits) -> Result<String> {
  let MachineDescription { registers, program } = parse_lines(lines)?;
  let mut machine = Machine::new(&program, registers).with_step_limit(limits.run_steps);

  Ok(machine.run()?.to_string())
}

pub fn solve_part2_with<S: AsRef<str>>(lines: &[S], limits: Limits) -> Result<String> {
  let MachineDescription { registers, program } = parse_lines(lines)?;

  find_self_reproducing_a(&program, registers, limits.candidate_steps).map(|a| a.to_string())
}


#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::{Error, Field, InputError};

  fn lines(text: &str) -> Vec<&str> {
    text.lines().collect()
  }

  #[test]
  fn part1_example(){
    let input = lines("Register A: 729\nRegister B: 0\nRegister C: 0\n\nProgram: 0,1,5,4,3,0");
    assert_eq!(solve_part1(&input), Ok("4,6,3,5,6,3,5,2,1,0".to_string()));
  }

  #[test]
  fn part1_no_output(){
    let input = lines("Register A: 0\nRegister B: 0\nRegister C: 9\n\nProgram: 2,6");
    assert_eq!(solve_part1(&input), Ok("".to_string()));
  }

  #[test]
  fn part1_step_limit(){
    let input = lines("Register A: 1\nRegister B: 0\nRegister C: 0\n\nProgram: 3,0");
    let limits = Limits { run_steps: Some(1_000), ..Limits::default() };
    assert_eq!(solve_part1_with(&input, limits), Err(Error::NonTermination { limit: 1_000 }));
  }

  #[test]
  fn part2_example(){
    let input = lines("Register A: 2024\nRegister B: 0\nRegister C: 0\n\nProgram: 0,3,5,4,3,0");
    assert_eq!(solve_part2(&input), Ok("117440".to_string()));
  }

  #[test]
  fn malformed_input(){
    let input = lines("Register A: 10\nRegister C: 0\n\nProgram: 5,0,5,1,5,4");
    assert_eq!(
      solve_part1(&input),
      Err(Error::MalformedInput(InputError::MissingField(Field::RegisterB)))
    );
  }

}
