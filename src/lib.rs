/*!
  An interpreter for the three-bit computer of Advent of Code 2024, day 17.

  The machine has three integer registers, an instruction pointer, and eight instructions,
  each an opcode word followed by an operand word:

  ```text
  Program + Registers -> Machine -> run() -> OutputSequence
  ```

  On top of it, `search` finds the initial register A for which a program outputs itself.

  ```
  use chronospatial::{Machine, Program, Registers};

  let program = Program::new(vec![0, 1, 5, 4, 3, 0]).unwrap();
  let mut machine = Machine::new(&program, Registers::new(729, 0, 0));
  assert_eq!(machine.run().unwrap().to_string(), "4,6,3,5,6,3,5,2,1,0");
  ```
*/

#[macro_use] extern crate prettytable;
#[macro_use] extern crate lazy_static;

pub mod bytecode;
pub mod config;
pub mod error;
pub mod machine;
pub mod operand;
pub mod output;
pub mod parser;
pub mod registers;
pub mod search;
pub mod solution;

pub use bytecode::{Instruction, Operation, Program, Word};
pub use config::Limits;
pub use error::{Error, InputError, Result};
pub use machine::{run_program, Machine, State};
pub use output::OutputSequence;
pub use parser::MachineDescription;
pub use registers::Registers;
pub use solution::{solve_part1, solve_part2};
