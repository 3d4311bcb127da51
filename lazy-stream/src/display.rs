use std::fmt;
use crate::core::Stream;

/// Renders the elements of a stream, optionally only a prefix.
pub struct Shown<'a, T> {
  stream: &'a Stream<T>,
  limit:  Option<usize>
}

impl<T> Stream<T> {

  /// Render at most `n` elements.  Safe on infinite streams.
  /// If more elements follow, they are shown as `...`.
  pub fn show(&self, n: usize) -> Shown<'_, T> {
    Shown { stream: self, limit: Some(n) }
  }

  /// Render every element.  Finite streams only.
  pub fn show_all(&self) -> Shown<'_, T> {
    Shown { stream: self, limit: None }
  }
}

impl<'a, T: fmt::Display> fmt::Display for Shown<'a, T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str("[")?;
    let mut s = self.stream.clone();
    let mut shown = 0;
    loop {
      let (head, tail) =
        match s {
          Stream::Cons { head, tail } => (head, tail),
          Stream::Empty => break
        };
      if self.limit == Some(shown) {
        f.write_str(if shown == 0 { "..." } else { ", ..." })?;
        break
      }
      if shown > 0 { f.write_str(", ")? }
      write!(f, "{}", head())?;
      shown += 1;
      s = tail();
    }
    f.write_str("]")
  }
}

/// Same as `show_all`.
impl<T: fmt::Display> fmt::Display for Stream<T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    fmt::Display::fmt(&self.show_all(), f)
  }
}
