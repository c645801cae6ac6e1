//! Runtime limits and the machine's fixed radix.
//!
//! Compile time configuration lives in Cargo features; see `trace_computation`.

/// Bits per program word.
pub const WORD_BITS: u32 = 3;
/// `bst` and `out` reduce their operand modulo this.
pub const WORD_MODULUS: i64 = 1 << WORD_BITS;
/// The search reconstructs register A one base-8 digit at a time.
pub const SEARCH_BASE: i64 = WORD_MODULUS;

pub const DEFAULT_RUN_STEP_LIMIT: u64 = 10_000_000;
pub const DEFAULT_CANDIDATE_STEP_LIMIT: u64 = 100_000;

/// Step ceilings. A step is one executed instruction.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Limits {
  /// Ceiling for a direct run. `None` runs until the program halts, however long that takes.
  pub run_steps       : Option<u64>,
  /// Ceiling for each candidate run during the search.
  pub candidate_steps : u64,
}

impl Default for Limits {
  fn default() -> Limits {
    Limits {
      run_steps       : Some(DEFAULT_RUN_STEP_LIMIT),
      candidate_steps : DEFAULT_CANDIDATE_STEP_LIMIT,
    }
  }
}

impl Limits {
  pub fn unbounded() -> Limits {
    Limits {
      run_steps: None,
      ..Limits::default()
    }
  }
}
