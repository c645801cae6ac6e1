use std::fmt::{Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::operand::Register;

/// Registers A, B, and C. They are not limited to three bits; a shift by a register valued
/// operand can leave them far wider than 32.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct Registers {
  pub a: i64,
  pub b: i64,
  pub c: i64
}

impl Registers {
  pub fn new(a: i64, b: i64, c: i64) -> Registers {
    Registers { a, b, c }
  }

  /// Returns a copy with register A replaced.
  pub fn with_a(self, a: i64) -> Registers {
    Registers { a, ..self }
  }
}

impl Index<Register> for Registers {
  type Output = i64;

  fn index(&self, register: Register) -> &i64 {
    match register {
      Register::A => &self.a,
      Register::B => &self.b,
      Register::C => &self.c
    }
  }
}

impl IndexMut<Register> for Registers {
  fn index_mut(&mut self, register: Register) -> &mut i64 {
    match register {
      Register::A => &mut self.a,
      Register::B => &mut self.b,
      Register::C => &mut self.c
    }
  }
}

impl Display for Registers {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "A={} B={} C={}", self.a, self.b, self.c)
  }
}
