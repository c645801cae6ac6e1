/*!
  The human readable textual form of a program is called assembly. This module leverages the
  `strum` derives of `Operation` to write and read mnemonics.

  One instruction per line. A line may start with an index and a colon, as `disassemble`
  writes it; the index is ignored when assembling. `#` starts a comment. Operands are written
  according to the operation's mode:

  ```text
  literal:  a digit 0-7
  combo:    a digit 0-3, a register name A, B, or C, or the reserved 7
  ignored:  optional, defaults to 0
  ```

  For example, the countdown loop `0,1,5,4,3,0` is

  ```text
  adv 1
  out A
  jnz 0
  ```
*/

use std::str::FromStr;

use nom::{
  character::complete::{
    alpha1,
    alphanumeric1,
    char as one_char,
    digit1,
    space0,
    space1
  },
  combinator::{all_consuming, opt},
  sequence::{delimited, pair, preceded},
  IResult
};

use crate::bytecode::{Instruction, Operation, Program, Word, MAX_WORD};
use crate::error::InputError;
use crate::operand::{OperandMode, Register};

/// Splits a line into its mnemonic and optional operand text.
fn instruction_p(input: &str) -> IResult<&str, (&str, Option<&str>)> {
  all_consuming(
    delimited(
      pair(space0, opt(pair(digit1, pair(one_char(':'), space0)))),
      pair(alpha1, opt(preceded(space1, alphanumeric1))),
      space0
    )
  )(input)
}

fn parse_word(text: &str) -> Option<Word> {
  text.parse::<Word>().ok().filter(|w| *w <= MAX_WORD)
}

fn parse_operand(operation: Operation, text: Option<&str>, line: usize) -> Result<Word, InputError> {
  let bad_operand = |text: &str| InputError::BadOperand {
    line,
    operation,
    text: text.to_string()
  };

  match (operation.operand_mode(), text) {

    (OperandMode::Ignored, None)       => Ok(0),

    (_, None)                          => Err(bad_operand("")),

    (OperandMode::Combo, Some(text))   => {
      match Register::from_str(&text.to_ascii_uppercase()) {
        Ok(Register::A) => Ok(4),
        Ok(Register::B) => Ok(5),
        Ok(Register::C) => Ok(6),
        // A digit 4-6 would silently mean a register, so only 0-3 and the reserved 7 are
        // accepted as numbers.
        Err(_)          => match parse_word(text) {
          Some(word) if word < 4 || word == MAX_WORD => Ok(word),
          _                                         => Err(bad_operand(text))
        }
      }
    }

    (_, Some(text))                    => parse_word(text).ok_or_else(|| bad_operand(text)),

  }
}

/// Assembles mnemonic text into a program.
pub fn assemble(text: &str) -> Result<Program, InputError> {
  let mut words: Vec<Word> = Vec::new();

  for (i, raw_line) in text.lines().enumerate() {
    let line = i + 1;
    let code = match raw_line.find('#') {
      Some(start) => &raw_line[..start],
      None        => raw_line
    };
    if code.trim().is_empty() {
      continue;
    }

    let (mnemonic, operand_text) = match instruction_p(code) {
      Ok((_rest, parts)) => parts,
      Err(_e)            => {
        return Err(InputError::UnrecognizedLine { line, text: raw_line.trim().to_string() });
      }
    };

    let operation = Operation::from_str(mnemonic).map_err(|_| InputError::UnknownMnemonic {
      line,
      name: mnemonic.to_string()
    })?;
    let operand = parse_operand(operation, operand_text, line)?;

    words.extend_from_slice(&Instruction::new(operation, operand).encode());
  }

  Program::new(words)
}

/// Writes one instruction per line, each prefixed with the index of its opcode.
pub fn disassemble(program: &Program) -> String {
  let mut listing = String::new();

  for (index, instruction) in program.instructions() {
    listing.push_str(format!("{:>3}: {}\n", index, instruction).as_str());
  }
  if let Some((index, operation)) = program.trailing_opcode() {
    listing.push_str(format!("{:>3}: {} ?\n", index, operation).as_str());
  }

  listing
}
