/*!

This module parses the textual machine description the puzzle gives as input:

```text
Register A: 729
Register B: 0
Register C: 0

Program: 0,1,5,4,3,0
```

Each of the four lines must appear exactly once. They may appear in any order, blank lines are
ignored, and whitespace around a line or around its separators is insignificant. Register values
are signed decimal integers; program words are comma separated decimal digits 0-7.

Nothing is constructed unless every line is present and well formed.

*/

use std::str::FromStr;

use nom::{
  branch::alt,
  bytes::complete::tag,
  character::complete::{
    char as one_char,
    i64 as signed,
    one_of,
    space0,
    space1,
    u64 as unsigned
  },
  combinator::{all_consuming, map},
  multi::separated_list1,
  sequence::{delimited, pair, preceded, terminated},
  IResult
};

use crate::bytecode::{Program, Word, MAX_WORD};
use crate::error::{Field, InputError};
use crate::registers::Registers;

/// The initial registers and the program, as read from the puzzle input.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct MachineDescription {
  pub registers : Registers,
  pub program   : Program,
}

// region Line parsers

/// `Register A:`, `Register B:`, `Register C:`, or `Program:`.
fn header_p(input: &str) -> IResult<&str, Field> {
  terminated(
    alt((
      map(
        preceded(pair(tag("Register"), space1), one_of("ABC")),
        |name: char| match name {
          'A' => Field::RegisterA,
          'B' => Field::RegisterB,
          _   => Field::RegisterC,
        }
      ),
      map(tag("Program"), |_| Field::Program)
    )),
    pair(space0, one_char(':'))
  )(input)
}

fn register_value_p(input: &str) -> IResult<&str, i64> {
  all_consuming(delimited(space0, signed, space0))(input)
}

fn program_words_p(input: &str) -> IResult<&str, Vec<u64>> {
  all_consuming(
    delimited(
      space0,
      separated_list1(delimited(space0, one_char(','), space0), unsigned),
      space0
    )
  )(input)
}

// endregion

fn parse_program(text: &str, line: usize) -> Result<Program, InputError> {
  if text.is_empty() {
    return Err(InputError::EmptyProgram { line });
  }

  let values = match program_words_p(text) {
    Ok((_rest, values)) => values,
    Err(_e)             => {
      return Err(InputError::InvalidValue { field: Field::Program, line, text: text.to_string() });
    }
  };

  if let Some((index, value)) = values.iter().enumerate().find(|(_, v)| **v > MAX_WORD as u64) {
    return Err(InputError::WordOutOfRange { index, value: *value });
  }
  Program::new(values.into_iter().map(|v| v as Word).collect())
}

/// Parses the description from its lines. Line numbers in errors count from 1.
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Result<MachineDescription, InputError> {
  let mut a       : Option<i64>     = None;
  let mut b       : Option<i64>     = None;
  let mut c       : Option<i64>     = None;
  let mut program : Option<Program> = None;

  for (i, raw_line) in lines.iter().enumerate() {
    let line = i + 1;
    let text = raw_line.as_ref().trim();
    if text.is_empty() {
      continue;
    }

    let (rest, field) = match header_p(text) {
      Ok(parsed) => parsed,
      Err(_e)    => return Err(InputError::UnrecognizedLine { line, text: text.to_string() })
    };
    let rest = rest.trim();

    let register_value = || match register_value_p(rest) {
      Ok((_, value)) => Ok(value),
      Err(_e)        => Err(InputError::InvalidValue { field, line, text: rest.to_string() })
    };
    let duplicate = InputError::DuplicateField { field, line };

    match field {

      Field::RegisterA => match a {
        Some(_) => return Err(duplicate),
        None    => a = Some(register_value()?)
      },

      Field::RegisterB => match b {
        Some(_) => return Err(duplicate),
        None    => b = Some(register_value()?)
      },

      Field::RegisterC => match c {
        Some(_) => return Err(duplicate),
        None    => c = Some(register_value()?)
      },

      Field::Program   => match program {
        Some(_) => return Err(duplicate),
        None    => program = Some(parse_program(rest, line)?)
      },

    } // end match on field
  } // end for

  Ok(MachineDescription {
    registers: Registers::new(
      a.ok_or(InputError::MissingField(Field::RegisterA))?,
      b.ok_or(InputError::MissingField(Field::RegisterB))?,
      c.ok_or(InputError::MissingField(Field::RegisterC))?,
    ),
    program: program.ok_or(InputError::MissingField(Field::Program))?,
  })
}

pub fn parse(text: &str) -> Result<MachineDescription, InputError> {
  parse_lines(&text.lines().collect::<Vec<&str>>())
}

impl FromStr for MachineDescription {
  type Err = InputError;

  fn from_str(text: &str) -> Result<MachineDescription, InputError> {
    parse(text)
  }
}
