//! The two ways an instruction reads the word after its opcode, and the registers a combo
//! operand can name.

use std::fmt::{Display, Formatter};

use strum_macros::{Display as StrumDisplay, EnumIter, EnumString};

use crate::bytecode::Word;

#[derive(StrumDisplay, EnumString, EnumIter, Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Register {
  A,
  B,
  C
}

/// Fixed per opcode; see `Operation::operand_mode`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum OperandMode {
  /// The word is the value.
  Literal,
  /// The word is resolved through `Combo`.
  Combo,
  /// The word is read but never used.
  Ignored
}

/**
  A combo operand. Words 0 through 3 stand for themselves, 4 through 6 name registers A, B, and
  C, and 7 is reserved. Reading a reserved operand is an error at the point of use, not at
  decode, since an instruction whose mode is not `Combo` may legally carry a 7.
*/
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Combo {
  Literal(Word),
  Register(Register),
  Reserved(Word)
}

impl From<Word> for Combo {
  fn from(word: Word) -> Combo {
    match word {
      0..=3 => Combo::Literal(word),
      4     => Combo::Register(Register::A),
      5     => Combo::Register(Register::B),
      6     => Combo::Register(Register::C),
      _     => Combo::Reserved(word)
    }
  }
}

impl Combo {
  /// The raw word this operand encodes to.
  pub fn word(&self) -> Word {
    match self {
      Combo::Literal(word)         => *word,
      Combo::Register(Register::A) => 4,
      Combo::Register(Register::B) => 5,
      Combo::Register(Register::C) => 6,
      Combo::Reserved(word)        => *word
    }
  }

  pub fn is_reserved(&self) -> bool {
    match self {
      Combo::Reserved(_) => true,
      _                  => false
    }
  }
}

impl Display for Combo {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Combo::Literal(word)      => write!(f, "{}", word),
      Combo::Register(register) => write!(f, "{}", register),
      Combo::Reserved(word)     => write!(f, "{}", word)
    }
  }
}
