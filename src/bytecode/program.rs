use std::fmt::{Display, Formatter};

use crate::bytecode::{Instruction, Operation};
use crate::error::{Error, InputError};

/// A program word. Only the low three bits are ever set.
pub type Word = u8;
pub const MAX_WORD: Word = 7;

/**
  An immutable sequence of three bit words read as opcode/operand pairs.

  Construction checks that every word is in range, so every opcode fetched from a `Program`
  decodes. Length is not checked: an odd length program is representable, and fetching its
  trailing opcode is a `TruncatedProgram` error.
*/
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct Program {
  words: Vec<Word>
}

impl Program {

  pub fn new(words: Vec<Word>) -> Result<Program, InputError> {
    if let Some((index, value)) = words.iter().enumerate().find(|(_, w)| **w > MAX_WORD) {
      return Err(InputError::WordOutOfRange { index, value: *value as u64 });
    }
    Ok(Program { words })
  }

  pub fn len(&self) -> usize {
    self.words.len()
  }

  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }

  pub fn words(&self) -> &[Word] {
    &self.words
  }

  /// The last `count` words, or the whole program if it is shorter than that.
  pub fn suffix(&self, count: usize) -> &[Word] {
    &self.words[self.words.len().saturating_sub(count)..]
  }

  /**
    Fetches the instruction whose opcode is at `ip`.

    Returns `Ok(None)` if `ip` is past the end of the program, which is how the machine halts.
  */
  pub fn fetch(&self, ip: usize) -> Result<Option<Instruction>, Error> {
    let opcode = match self.words.get(ip) {
      Some(opcode) => *opcode,
      None         => return Ok(None)
    };
    let operand = *self.words.get(ip + 1).ok_or(Error::TruncatedProgram { index: ip })?;

    Instruction::decode(opcode, operand)
      .map(Some)
      .ok_or(Error::MalformedInput(InputError::WordOutOfRange { index: ip, value: opcode as u64 }))
  }

  /// Every complete instruction paired with the index of its opcode.
  pub fn instructions(&self) -> impl Iterator<Item = (usize, Instruction)> + '_ {
    self.words
        .chunks_exact(2)
        .enumerate()
        .filter_map(|(i, pair)| Instruction::decode(pair[0], pair[1]).map(|inst| (2 * i, inst)))
  }

  /// The opcode of an odd length program's last word, which has no operand.
  pub fn trailing_opcode(&self) -> Option<(usize, Operation)> {
    match self.words.len() % 2 {
      1 => {
        let index = self.words.len() - 1;
        Operation::try_from(self.words[index]).ok().map(|op| (index, op))
      }
      _ => None
    }
  }
}

impl TryFrom<Vec<Word>> for Program {
  type Error = InputError;

  fn try_from(words: Vec<Word>) -> Result<Program, InputError> {
    Program::new(words)
  }
}

impl AsRef<[Word]> for Program {
  fn as_ref(&self) -> &[Word] {
    &self.words
  }
}

/// The puzzle's comma separated form, e.g. `0,3,5,4,3,0`.
impl Display for Program {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "{}",
      self.words
          .iter()
          .map(|w| w.to_string())
          .collect::<Vec<String>>()
          .join(",")
    )
  }
}
