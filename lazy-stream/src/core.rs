// Lazy streams built from suspended heads and tails

use std::fmt;
use std::rc::Rc;
use tracing::debug;
use crate::error::StreamError;

/// A suspended computation.  Forcing it may recompute the value.
pub type Thunk<T> = Rc<dyn Fn() -> T>;

/// A lazy, possibly infinite, sequence of elements.
///   * Nothing is computed until a head or a tail is forced.
///   * Streams are never mutated; combinators build new nodes.
pub enum Stream<T> {
  Cons { head: Thunk<T>, tail: Thunk<Stream<T>> },
  Empty
}

impl<T> Clone for Stream<T> {
  fn clone(&self) -> Self {
    match self {
      Stream::Cons { head, tail } =>
        Stream::Cons { head: head.clone(), tail: tail.clone() },
      Stream::Empty => Stream::Empty
    }
  }
}

/// Does not force anything.
impl<T> fmt::Debug for Stream<T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Stream::Cons { .. } => f.write_str("Cons(..)"),
      Stream::Empty       => f.write_str("Empty")
    }
  }
}

impl<T> Default for Stream<T> {
  fn default() -> Self { Stream::Empty }
}

/// Wrap an already built stream in a thunk.
pub fn suspend<T: 'static>(s: Stream<T>) -> Thunk<Stream<T>> {
  Rc::new(move || s.clone())
}

impl<T> Stream<T> {

  /// The exhausted stream.
  pub fn empty() -> Self { Stream::Empty }

  /// A non-empty stream from a suspended head and a suspended tail.
  pub fn cons<H, R>(head: H, tail: R) -> Self
    where
    H: Fn() -> T + 'static,
    R: Fn() -> Stream<T> + 'static {
    Stream::Cons { head: Rc::new(head), tail: Rc::new(tail) }
  }

  /// Is this a non-empty stream.  Does not force anything.
  pub fn is_cons(&self) -> bool { matches!(self, Stream::Cons { .. }) }

  /// Is this the exhausted stream.  Does not force anything.
  pub fn is_empty(&self) -> bool { matches!(self, Stream::Empty) }

  /// The first element, if any.  Forces one head, never the tail.
  pub fn head_option(&self) -> Option<T> {
    match self {
      Stream::Cons { head, .. } => Some(head()),
      Stream::Empty => None
    }
  }

  /// Everything after the first element.  Forces one tail, never the head.
  /// The tail of `Empty` is `Empty`.
  pub fn force_tail(&self) -> Stream<T> {
    match self {
      Stream::Cons { tail, .. } => tail(),
      Stream::Empty => Stream::Empty
    }
  }

  /// Split off the first element.
  pub fn uncons(&self) -> Option<(T, Stream<T>)> {
    match self {
      Stream::Cons { head, tail } => Some((head(), tail())),
      Stream::Empty => None
    }
  }

  /// Skip the first `n` elements.
  /// Forces `n` tails and no heads.
  pub fn drop(&self, n: usize) -> Stream<T> {
    let mut s = self.clone();
    for _ in 0 .. n {
      match s {
        Stream::Cons { tail, .. } => s = tail(),
        Stream::Empty => break
      }
    }
    s
  }

  /// The element at index `i`.
  pub fn nth(&self, i: usize) -> Result<T, StreamError> {
    let mut s = self.clone();
    for len in 0 .. i {
      match s {
        Stream::Cons { tail, .. } => s = tail(),
        Stream::Empty => {
          debug!(index = i, len, "stream index out of range");
          return Err(StreamError::IndexOutOfRange { index: i, len })
        }
      }
    }
    s.head_option().ok_or_else(|| {
      debug!(index = i, len = i, "stream index out of range");
      StreamError::IndexOutOfRange { index: i, len: i }
    })
  }
}


/// Build a finite stream as a literal chain of `Cons` nodes.
/// Each element expression is evaluated again every time its head is forced.
#[macro_export]
macro_rules! stream {
  () => { $crate::Stream::Empty };
  ( $x:expr $(, $rest:expr)* $(,)? ) => {
    $crate::Stream::cons(move || $x, move || $crate::stream![ $($rest),* ])
  };
}
