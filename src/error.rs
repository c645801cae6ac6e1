//! Errors raised while reading a machine description or running a program.

use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::bytecode::{Operation, Word};

pub type Result<T> = std::result::Result<T, Error>;

/// The named lines of the textual machine description.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Field {
  RegisterA,
  RegisterB,
  RegisterC,
  Program
}

impl Display for Field {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Field::RegisterA => write!(f, "Register A"),
      Field::RegisterB => write!(f, "Register B"),
      Field::RegisterC => write!(f, "Register C"),
      Field::Program   => write!(f, "Program"),
    }
  }
}

/// What exactly was wrong with a textual description, either puzzle input or assembly. Line
/// numbers count from 1.
#[derive(Error, Clone, Eq, PartialEq, Debug)]
pub enum InputError {
  #[error("missing `{0}:` line")]
  MissingField(Field),

  #[error("line {line}: `{field}` given more than once")]
  DuplicateField { field: Field, line: usize },

  #[error("line {line}: `{text}` is not a valid value for `{field}`")]
  InvalidValue { field: Field, line: usize, text: String },

  #[error("line {line}: the program is empty")]
  EmptyProgram { line: usize },

  #[error("program word {index} is {value}, but words must be in 0..=7")]
  WordOutOfRange { index: usize, value: u64 },

  #[error("line {line}: unrecognized line `{text}`")]
  UnrecognizedLine { line: usize, text: String },

  #[error("line {line}: `{name}` is not an operation")]
  UnknownMnemonic { line: usize, name: String },

  #[error("line {line}: `{text}` is not a valid operand for {operation}")]
  BadOperand { line: usize, operation: Operation, text: String },
}

#[derive(Error, Clone, Eq, PartialEq, Debug)]
pub enum Error {
  #[error("malformed input: {0}")]
  MalformedInput(#[from] InputError),

  #[error("truncated program: the opcode at index {index} has no operand")]
  TruncatedProgram { index: usize },

  #[error("malformed operand: the instruction at index {index} uses reserved combo operand {operand}")]
  MalformedOperand { index: usize, operand: Word },

  #[error("the instruction at index {index} shifts by a negative amount ({amount})")]
  NegativeShift { index: usize, amount: i64 },

  #[error("the program did not halt within {limit} steps")]
  NonTermination { limit: u64 },

  #[error("no initial value of register A makes the program output itself")]
  NoSolution,
}
