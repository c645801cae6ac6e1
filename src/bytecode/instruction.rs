use std::fmt::{Display, Formatter};

use strum_macros::{Display as StrumDisplay, EnumIter, EnumString, IntoStaticStr};
use num_enum::{TryFromPrimitive, IntoPrimitive};

use crate::bytecode::Word;
use crate::operand::{Combo, OperandMode};

/**
  Opcodes of the machine.

  Every opcode is a single three bit word, so the discriminants are exactly the values that
  appear in a program. The mnemonics are the lowercase variant names, which `strum` derives
  in both directions.

  The three shift instructions all read register A; they differ only in where the result goes.
*/
#[derive(
StrumDisplay, IntoStaticStr, EnumString, EnumIter, TryFromPrimitive, IntoPrimitive,
Clone,        Copy,          Eq,         PartialEq, Debug,           Hash
)]
#[strum(serialize_all = "lowercase")]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Operation {
  Adv = 0, // A <- A >> combo
  Bxl = 1, // B <- B ^ literal
  Bst = 2, // B <- combo mod 8
  Jnz = 3, // if A != 0, ip <- literal
  Bxc = 4, // B <- B ^ C, operand ignored
  Out = 5, // emit combo mod 8
  Bdv = 6, // B <- A >> combo
  Cdv = 7, // C <- A >> combo
}

impl Operation {
  pub fn code(&self) -> Word {
    Into::<u8>::into(*self)
  }

  /// How the word following this opcode is interpreted. Fixed per opcode.
  pub fn operand_mode(&self) -> OperandMode {
    match self {
      | Operation::Bxl
      | Operation::Jnz => OperandMode::Literal,

      Operation::Bxc   => OperandMode::Ignored,

      | Operation::Adv
      | Operation::Bst
      | Operation::Out
      | Operation::Bdv
      | Operation::Cdv => OperandMode::Combo,
    }
  }
}

/// A decoded opcode/operand pair. The operand is kept raw; how it is read depends on
/// `operation.operand_mode()`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Instruction {
  pub operation : Operation,
  pub operand   : Word,
}

impl Instruction {
  pub fn new(operation: Operation, operand: Word) -> Instruction {
    Instruction { operation, operand }
  }

  /// Decodes a pair of words. Returns `None` if `opcode` is not a three bit value.
  pub fn decode(opcode: Word, operand: Word) -> Option<Instruction> {
    Operation::try_from(opcode)
      .ok()
      .map(|operation| Instruction { operation, operand })
  }

  pub fn encode(&self) -> [Word; 2] {
    [self.operation.code(), self.operand]
  }

  /// The operand read as a combo operand, regardless of the operation's mode.
  pub fn combo(&self) -> Combo {
    Combo::from(self.operand)
  }
}

impl Display for Instruction {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self.operation.operand_mode() {

      OperandMode::Literal => {
        write!(f, "{} {}", self.operation, self.operand)
      }

      OperandMode::Combo   => {
        write!(f, "{} {}", self.operation, self.combo())
      }

      OperandMode::Ignored => {
        match self.operand {
          0       => write!(f, "{}", self.operation),
          operand => write!(f, "{} {}", self.operation, operand)
        }
      }

    }
  }
}


#[cfg(test)]
mod tests {
  use std::str::FromStr;

  use strum::IntoEnumIterator;

  use super::*;

  #[test]
  fn opcodes_are_their_discriminants(){
    for (code, operation) in Operation::iter().enumerate() {
      assert_eq!(operation.code() as usize, code);
      assert_eq!(Operation::try_from(code as u8).ok(), Some(operation));
    }
    assert!(Operation::try_from(8u8).is_err());
  }

  #[test]
  fn mnemonics(){
    assert_eq!(Operation::Adv.to_string(), "adv");
    assert_eq!(Operation::from_str("cdv"), Ok(Operation::Cdv));
    assert_eq!(Operation::from_str("JNZ"), Ok(Operation::Jnz));
    assert!(Operation::from_str("nop").is_err());
  }

  #[test]
  fn operand_modes(){
    assert_eq!(Operation::Bxl.operand_mode(), OperandMode::Literal);
    assert_eq!(Operation::Jnz.operand_mode(), OperandMode::Literal);
    assert_eq!(Operation::Bxc.operand_mode(), OperandMode::Ignored);
    assert_eq!(Operation::Out.operand_mode(), OperandMode::Combo);
    assert_eq!(Operation::Cdv.operand_mode(), OperandMode::Combo);
  }

  #[test]
  fn display_by_mode(){
    assert_eq!(Instruction::new(Operation::Out, 4).to_string(), "out A");
    assert_eq!(Instruction::new(Operation::Adv, 3).to_string(), "adv 3");
    assert_eq!(Instruction::new(Operation::Bxl, 6).to_string(), "bxl 6");
    assert_eq!(Instruction::new(Operation::Bxc, 0).to_string(), "bxc");
    assert_eq!(Instruction::new(Operation::Bxc, 5).to_string(), "bxc 5");
  }

  #[test]
  fn decode_rejects_wide_opcode(){
    assert_eq!(Instruction::decode(9, 0), None);
    assert_eq!(
      Instruction::decode(3, 0),
      Some(Instruction::new(Operation::Jnz, 0))
    );
    assert_eq!(Instruction::new(Operation::Bst, 6).encode(), [2, 6]);
  }

}
