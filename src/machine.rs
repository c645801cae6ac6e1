//! The interpreter: a fetch-decode-execute loop over a `Program` that owns the registers, the
//! instruction pointer, and the output.

use std::fmt::{Display, Formatter};

use prettytable::{format as TableFormat, Table};

use crate::bytecode::{Instruction, Operation, Program, Word};
use crate::config::WORD_MODULUS;
use crate::error::{Error, Result};
use crate::operand::Combo;
use crate::output::OutputSequence;
use crate::registers::Registers;

/// `Running` while the instruction pointer is inside the program, `Halted` once it is not.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum State {
  Running,
  Halted
}

impl Display for State {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      State::Running => write!(f, "Running"),
      State::Halted  => write!(f, "Halted")
    }
  }
}

/**
  A machine borrows its program and owns everything that changes. Construction is cheap, so
  callers that run many candidate register values build a fresh machine per run or `reset` an
  existing one.

  A machine with no step limit runs until the program halts. Since `jnz` can loop forever,
  anything running programs it did not write should set one; exceeding it is
  `Error::NonTermination`.
*/
#[derive(Clone, Debug)]
pub struct Machine<'p> {
  program    : &'p Program,
  registers  : Registers,
  ip         : usize,          // Instruction pointer, an index into `program`
  output     : OutputSequence,
  steps      : u64,            // Instructions executed since construction or `reset`
  step_limit : Option<u64>,
}

impl<'p> Machine<'p> {

  // region Display methods

  fn make_table<T> (
      title     : &str,
      rows      : Vec<(String, T)>,
      highlight : Option<usize>
    ) -> Table
    where T: Display
  {
    let mut table = Table::new();

    table.set_format(*TABLE_DISPLAY_FORMAT);
    table.set_titles(row![ubr->title, ubl->"Contents"]);

    for (i, (label, value)) in rows.iter().enumerate() {
      match Some(i) == highlight {

        true  => {
          table.add_row(row![r->format!("* --> {} =", label), format!("{}", value)]);
        }

        false => {
          table.add_row(row![r->format!("{} =", label), format!("{}", value)]);
        }

      } // end match on highlight
    } // end for
    table
  }

  fn make_program_table(&self) -> Table {
    let mut rows: Vec<(String, String)> =
      self.program
          .instructions()
          .map(|(index, instruction)| (index.to_string(), instruction.to_string()))
          .collect();
    if let Some((index, operation)) = self.program.trailing_opcode() {
      rows.push((index.to_string(), format!("{} ?", operation)));
    }
    // Listing rows are two words apart, so an odd pointer highlights nothing.
    let highlight = match self.ip % 2 {
      0 => Some(self.ip / 2),
      _ => None
    };
    Machine::make_table("Index", rows, highlight)
  }

  // endregion

  // region Construction and accessors

  pub fn new(program: &'p Program, registers: Registers) -> Machine<'p> {
    Machine {
      program,
      registers,
      ip         : 0,
      output     : OutputSequence::new(),
      steps      : 0,
      step_limit : None,
    }
  }

  /// Sets the maximum number of instructions `run` will execute. `None` removes the limit.
  pub fn with_step_limit(mut self, step_limit: Option<u64>) -> Machine<'p> {
    self.step_limit = step_limit;
    self
  }

  /// Restarts from the first instruction with new register values and an empty output.
  pub fn reset(&mut self, registers: Registers) {
    self.registers = registers;
    self.ip        = 0;
    self.steps     = 0;
    self.output.clear();
  }

  pub fn program(&self) -> &'p Program {
    self.program
  }

  pub fn registers(&self) -> Registers {
    self.registers
  }

  pub fn ip(&self) -> usize {
    self.ip
  }

  pub fn output(&self) -> &OutputSequence {
    &self.output
  }

  pub fn steps(&self) -> u64 {
    self.steps
  }

  pub fn state(&self) -> State {
    match self.ip >= self.program.len() {
      true  => State::Halted,
      false => State::Running
    }
  }

  // endregion

  // region Execution

  fn combo(&self, instruction: &Instruction) -> Result<i64> {
    match instruction.combo() {
      Combo::Literal(word)      => Ok(word as i64),
      Combo::Register(register) => Ok(self.registers[register]),
      Combo::Reserved(operand)  => Err(Error::MalformedOperand { index: self.ip, operand })
    }
  }

  /// `A >> amount`, arithmetic. Shifting out every bit leaves 0, or -1 for a negative A.
  fn shift_a(&self, amount: i64) -> Result<i64> {
    match amount {
      amount if amount < 0  => Err(Error::NegativeShift { index: self.ip, amount }),
      amount if amount < 64 => Ok(self.registers.a >> amount),
      _                     => Ok(if self.registers.a < 0 { -1 } else { 0 })
    }
  }

  /**
    Executes the instruction at the instruction pointer. Once halted, this does nothing and
    returns `State::Halted` again.

    Fails with `TruncatedProgram` if the opcode has no operand, `MalformedOperand` if a combo
    operand is the reserved 7, `NegativeShift` if a shift amount read from a register is
    negative, and `NonTermination` if the step limit has already been reached.
  */
  pub fn step(&mut self) -> Result<State> {
    let instruction = match self.program.fetch(self.ip)? {
      Some(instruction) => instruction,
      None              => return Ok(State::Halted)
    };

    if let Some(limit) = self.step_limit {
      if self.steps >= limit {
        return Err(Error::NonTermination { limit });
      }
    }

    #[cfg(feature = "trace_computation")]
    println!("{}", self);

    let mut next_ip = self.ip + 2;

    match instruction.operation {

      Operation::Adv => {
        self.registers.a = self.shift_a(self.combo(&instruction)?)?;
      }

      Operation::Bxl => {
        self.registers.b ^= instruction.operand as i64;
      }

      Operation::Bst => {
        self.registers.b = self.combo(&instruction)?.rem_euclid(WORD_MODULUS);
      }

      Operation::Jnz => {
        if self.registers.a != 0 {
          next_ip = instruction.operand as usize;
        }
      }

      Operation::Bxc => {
        self.registers.b ^= self.registers.c;
      }

      Operation::Out => {
        let value = self.combo(&instruction)?.rem_euclid(WORD_MODULUS) as Word;
        self.output.push(value);
      }

      Operation::Bdv => {
        self.registers.b = self.shift_a(self.combo(&instruction)?)?;
      }

      Operation::Cdv => {
        self.registers.c = self.shift_a(self.combo(&instruction)?)?;
      }

    } // end match on operation

    self.ip     = next_ip;
    self.steps += 1;
    Ok(self.state())
  }

  /// Steps until the program halts, then returns everything it output.
  pub fn run(&mut self) -> Result<&OutputSequence> {
    while self.step()? == State::Running {}

    #[cfg(feature = "trace_computation")]
    println!("{}", self);

    Ok(&self.output)
  }

  // endregion

}

/// Runs `program` from `registers` to completion on a fresh machine, returning the final
/// registers and the output.
pub fn run_program(
  program    : &Program,
  registers  : Registers,
  step_limit : Option<u64>
) -> Result<(Registers, OutputSequence)>
{
  let mut machine = Machine::new(program, registers).with_step_limit(step_limit);
  machine.run()?;
  Ok((machine.registers, machine.output))
}


lazy_static! {
  static ref TABLE_DISPLAY_FORMAT: TableFormat::TableFormat =
    TableFormat::FormatBuilder::new()
      .column_separator('│')
      .borders(' ')
      .separator(
        TableFormat::LinePosition::Title,
        TableFormat::LineSeparator::new('─', '┼', ' ', ' ')
      )
      .separator(
        TableFormat::LinePosition::Bottom,
        TableFormat::LineSeparator::new('─', '┴', ' ', ' ')
      )
      .padding(1, 1)
      .build();
}

impl Display for Machine<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let r_table = Machine::make_table(
      "Register",
      vec![
        ("A".to_string(), self.registers.a),
        ("B".to_string(), self.registers.b),
        ("C".to_string(), self.registers.c),
      ],
      None
    );
    let p_table = self.make_program_table();
    let o_table = Machine::make_table(
      "#",
      self.output.iter().enumerate().map(|(i, v)| (i.to_string(), *v)).collect(),
      self.output.len().checked_sub(1)
    );

    let mut combined_table = table!([r_table, p_table, o_table]);

    combined_table.set_titles(row![ub->"Registers", ub->"Program", ub->"Output"]);
    combined_table.set_format(*TABLE_DISPLAY_FORMAT);

    write!(
      f,
      "ip: {}\tsteps: {}\t{}\n{}",
      self.ip, self.steps, self.state(), combined_table
    )
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  fn program(words: &[Word]) -> Program {
    Program::new(words.to_vec()).unwrap()
  }

  fn run(words: &[Word], a: i64, b: i64, c: i64) -> (Registers, Vec<Word>) {
    let (registers, output) =
      run_program(&program(words), Registers::new(a, b, c), Some(10_000)).unwrap();
    (registers, output.into_vec())
  }

  #[test]
  fn bst_reads_register_c(){
    let p = program(&[2, 6]);
    let mut machine = Machine::new(&p, Registers::new(0, 0, 9));
    assert!(machine.run().unwrap().is_empty());
    assert_eq!(machine.registers().b, 1);
    assert_eq!(machine.ip(), 2);
    assert_eq!(machine.state(), State::Halted);
  }

  #[test]
  fn out_literal_and_register(){
    let (_, output) = run(&[5, 0, 5, 1, 5, 4], 10, 0, 0);
    assert_eq!(output, vec![0, 1, 2]);
  }

  #[test]
  fn countdown_loop(){
    let (registers, output) = run(&[0, 1, 5, 4, 3, 0], 2024, 0, 0);
    assert_eq!(output, vec![4, 2, 5, 6, 7, 7, 7, 7, 3, 1, 0]);
    assert_eq!(registers.a, 0);
  }

  #[test]
  fn bxl(){
    let (registers, _) = run(&[1, 7], 0, 29, 0);
    assert_eq!(registers.b, 26);
  }

  #[test]
  fn bxc(){
    let (registers, _) = run(&[4, 0], 0, 2024, 43690);
    assert_eq!(registers.b, 44354);
  }

  #[test]
  fn puzzle_example(){
    let (_, output) = run(&[0, 1, 5, 4, 3, 0], 729, 0, 0);
    assert_eq!(output, vec![4, 6, 3, 5, 6, 3, 5, 2, 1, 0]);
  }

  #[test]
  fn bdv_and_cdv_read_a(){
    let (registers, _) = run(&[6, 2, 7, 3], 64, 5, 5);
    assert_eq!(registers, Registers::new(64, 16, 8));
  }

  #[test]
  fn empty_program_halts_immediately(){
    let p = Program::default();
    let mut machine = Machine::new(&p, Registers::new(1, 2, 3));
    assert_eq!(machine.state(), State::Halted);
    assert!(machine.run().unwrap().is_empty());
    assert_eq!(machine.steps(), 0);
  }

  #[test]
  fn shift_by_zero_is_identity(){
    let (registers, _) = run(&[0, 0, 6, 0, 7, 0], 12345, 0, 0);
    assert_eq!(registers, Registers::new(12345, 12345, 12345));
  }

  #[test]
  fn bxl_twice_restores_b(){
    for literal in 0..=7 {
      let (registers, _) = run(&[1, literal, 1, literal], 0, 1234, 0);
      assert_eq!(registers.b, 1234);
    }
  }

  #[test]
  fn jnz_falls_through_when_a_is_zero(){
    for target in 0..=7 {
      let p = program(&[3, target, 5, 1]);
      let mut machine = Machine::new(&p, Registers::default());
      assert_eq!(machine.step(), Ok(State::Running));
      assert_eq!(machine.ip(), 2);
    }
  }

  #[test]
  fn jnz_jumps_to_literal(){
    let p = program(&[3, 4, 5, 1, 5, 2]);
    let mut machine = Machine::new(&p, Registers::new(1, 0, 0));
    assert_eq!(machine.step(), Ok(State::Running));
    assert_eq!(machine.ip(), 4);
    assert_eq!(machine.run().unwrap().to_string(), "2");
  }

  #[test]
  fn registers_are_wider_than_32_bits(){
    // B = A >> 3, then out A mod 8
    let (registers, output) = run(&[6, 3, 5, 4], 1 << 40, 0, 0);
    assert_eq!(registers.b, 1 << 37);
    assert_eq!(output, vec![0]);
  }

  #[test]
  fn wide_shift_saturates(){
    let (registers, _) = run(&[7, 5], -8, 100, 0);
    assert_eq!(registers.c, -1);
    let (registers, _) = run(&[0, 6], 1 << 62, 0, 64);
    assert_eq!(registers.a, 0);
  }

  #[test]
  fn negative_shift(){
    let p = program(&[1, 0, 0, 5]);
    let result = run_program(&p, Registers::new(8, -1, 0), None);
    assert_eq!(result, Err(Error::NegativeShift { index: 2, amount: -1 }));
  }

  #[test]
  fn negative_modulo_is_in_range(){
    let (registers, output) = run(&[2, 4, 5, 4], -3, 0, 0);
    assert_eq!(registers.b, 5);
    assert_eq!(output, vec![5]);
  }

  #[test]
  fn reserved_combo_operand(){
    let p = program(&[1, 7, 5, 7]);
    let mut machine = Machine::new(&p, Registers::default());
    assert_eq!(machine.run(), Err(Error::MalformedOperand { index: 2, operand: 7 }));
    assert_eq!(machine.registers().b, 7);
  }

  #[test]
  fn truncated_program(){
    let p = program(&[1, 7, 5]);
    let mut machine = Machine::new(&p, Registers::default());
    assert_eq!(machine.step(), Ok(State::Running));
    assert_eq!(machine.step(), Err(Error::TruncatedProgram { index: 2 }));
  }

  #[test]
  fn infinite_loop_hits_step_limit(){
    let p = program(&[3, 0]);
    let mut machine = Machine::new(&p, Registers::new(1, 0, 0)).with_step_limit(Some(100));
    assert_eq!(machine.run(), Err(Error::NonTermination { limit: 100 }));
    assert_eq!(machine.steps(), 100);
  }

  #[test]
  fn step_limit_is_inclusive(){
    let p = program(&[5, 1, 5, 2]);
    let mut machine = Machine::new(&p, Registers::default()).with_step_limit(Some(2));
    assert_eq!(machine.run().unwrap().to_string(), "1,2");
  }

  #[test]
  fn repeated_runs_agree(){
    let p = program(&[0, 1, 5, 4, 3, 0]);
    let mut machine = Machine::new(&p, Registers::new(729, 0, 0));
    let first = machine.run().unwrap().clone();
    machine.reset(Registers::new(729, 0, 0));
    assert_eq!(machine.steps(), 0);
    assert_eq!(machine.run().unwrap(), &first);
    assert_eq!(
      run_program(&p, Registers::new(729, 0, 0), None).unwrap().1,
      first
    );
  }

  #[test]
  fn display_shows_state(){
    let p = program(&[0, 1, 5, 4, 3, 0]);
    let machine = Machine::new(&p, Registers::new(729, 0, 0));
    let text = machine.to_string();
    assert!(text.starts_with("ip: 0\tsteps: 0\tRunning"));
    assert!(text.contains("* --> 0 ="));
    assert!(text.contains("out A"));
  }

}
