/*!

  A program is a flat list of three bit words read two at a time: an opcode followed by its
  operand. There are eight opcodes, so every word is also a valid opcode. What the operand
  means is fixed by the opcode, not by the program, so there are no mode bits to decode.

  Instructions are not stored decoded. A jump may land on an odd index, at which point the
  words pair up differently, so the program is kept as words and decoded at fetch time.

  The human readable form is assembly; see `assembly`.

*/

mod assembly;
mod instruction;
mod program;

pub use assembly::{assemble, disassemble};
pub use instruction::{Instruction, Operation};
pub use program::{Program, Word, MAX_WORD};
