use std::fmt::{Display, Formatter};
use std::ops::Deref;

use crate::bytecode::Word;

/// The values emitted by `out`, in order. Only the machine appends to it.
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct OutputSequence(Vec<Word>);

impl OutputSequence {
  pub fn new() -> OutputSequence {
    OutputSequence(Vec::new())
  }

  pub(crate) fn push(&mut self, value: Word) {
    self.0.push(value);
  }

  pub(crate) fn clear(&mut self) {
    self.0.clear();
  }

  pub fn into_vec(self) -> Vec<Word> {
    self.0
  }
}

impl Deref for OutputSequence {
  type Target = [Word];

  fn deref(&self) -> &[Word] {
    &self.0
  }
}

impl PartialEq<[Word]> for OutputSequence {
  fn eq(&self, other: &[Word]) -> bool {
    self.0.as_slice() == other
  }
}

/// Comma joined, e.g. `4,6,3,5,6,3,5,2,1,0`. This is the form the puzzle asks for.
impl Display for OutputSequence {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "{}",
      self.0
          .iter()
          .map(|v| v.to_string())
          .collect::<Vec<String>>()
          .join(",")
    )
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn comma_joined(){
    let mut output = OutputSequence::new();
    assert_eq!(output.to_string(), "");
    for v in [4, 6, 3, 5, 6, 3, 5, 2, 1, 0] {
      output.push(v);
    }
    assert_eq!(output.to_string(), "4,6,3,5,6,3,5,2,1,0");
    assert_eq!(output.len(), 10);
    output.clear();
    assert!(output.is_empty());
  }

}
