/*!
  Finds an initial value of register A for which a program outputs a copy of itself.

  This relies on the shape of the puzzle's programs rather than on anything the machine
  guarantees: each pass through the loop outputs a value computed from the low bits of A and
  then shifts A right by three bits. Output `k` from the end therefore depends only on the `k`
  most significant base-8 digits of A, so A can be rebuilt a digit at a time from the top:

  ```text
  frontier = {0}
  for k in 1..=len:
    keep every 8a + d, for a in frontier and d in 0..8, whose output is the last k words
  answer = the smallest positive value left
  ```

  The frontier is searched breadth first and kept sorted, so the first positive value of the
  final frontier is the smallest answer.
*/

use std::collections::BTreeSet;

use crate::bytecode::Program;
use crate::config::SEARCH_BASE;
use crate::error::{Error, Result};
use crate::machine::Machine;
use crate::registers::Registers;

/// The outcome of a search.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct SearchReport {
  pub answer         : Option<i64>,
  /// Size of the frontier after each digit.
  pub frontier_sizes : Vec<usize>,
  /// Candidate runs abandoned for exceeding the step limit.
  pub abandoned      : usize,
}

/**
  Searches for the smallest positive A reproducing `program`, with B and C taken from
  `registers` (A there is ignored). Each candidate is run on a fresh machine limited to
  `candidate_steps` instructions; a candidate that exceeds it is dropped. Candidates that would
  overflow an `i64` are skipped.

  Errors other than `NonTermination` mean the program itself is malformed, and are returned.
*/
pub fn search(program: &Program, registers: Registers, candidate_steps: u64) -> Result<SearchReport> {
  let mut report   = SearchReport::default();
  let mut frontier = BTreeSet::from([0i64]);

  for k in 1..=program.len() {
    let target = program.suffix(k);
    let mut next: BTreeSet<i64> = BTreeSet::new();

    for prefix in frontier.iter() {
      for digit in 0..SEARCH_BASE {
        let candidate = match prefix.checked_mul(SEARCH_BASE).and_then(|a| a.checked_add(digit)) {
          Some(candidate) => candidate,
          None            => continue
        };

        let mut machine =
          Machine::new(program, registers.with_a(candidate)).with_step_limit(Some(candidate_steps));
        match machine.run() {
          Ok(output) if output[..] == *target => {
            next.insert(candidate);
          }
          Ok(_)                               => {}
          Err(Error::NonTermination { .. })   => report.abandoned += 1,
          Err(e)                              => return Err(e)
        }
      }
    } // end for prefix

    report.frontier_sizes.push(next.len());
    if next.is_empty() {
      return Ok(report);
    }
    frontier = next;
  } // end for k

  report.answer = frontier.into_iter().find(|a| *a > 0);
  Ok(report)
}

/// The smallest positive A for which `program` outputs itself, or `Error::NoSolution`.
pub fn find_self_reproducing_a(
  program         : &Program,
  registers       : Registers,
  candidate_steps : u64
) -> Result<i64>
{
  search(program, registers, candidate_steps)?
    .answer
    .ok_or(Error::NoSolution)
}
