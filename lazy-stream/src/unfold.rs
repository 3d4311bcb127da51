// Corecursive stream construction

use std::rc::Rc;
use tracing::trace;
use crate::core::{Stream, Thunk, suspend};

fn unfold_shared<S, T, F>(seed: S, step: Rc<F>) -> Stream<T>
  where
  S: Clone + 'static,
  T: Clone + 'static,
  F: Fn(S) -> Option<(T, S)> + 'static {
  match step(seed) {
    Some((x, next)) =>
      Stream::Cons
        { head: Rc::new(move || x.clone())
        , tail: Rc::new(move || unfold_shared(next.clone(), step.clone()))
        },
    None => {
      trace!("unfold finished");
      Stream::Empty
    }
  }
}

/// Build a stream from a seed and a step function.
///   * `step` returns `None` to end the stream, or the next element
///     together with the state for the rest of the stream.
///   * Building the stream calls `step` exactly once, to decide between
///     `Cons` and `Empty`.  The element is kept in the head; the tail
///     calls `step` again only when it is forced.
pub fn unfold<S, T, F>(seed: S, step: F) -> Stream<T>
  where
  S: Clone + 'static,
  T: Clone + 'static,
  F: Fn(S) -> Option<(T, S)> + 'static {
  unfold_shared(seed, Rc::new(step))
}

/// Lazily wrap an iterator.  The iterator is cloned at each step, so
/// forcing the same tail twice replays the same elements.
pub fn from_iter_lazy<I>(it: I) -> Stream<I::Item>
  where
  I: Iterator + Clone + 'static,
  I::Item: Clone + 'static {
  unfold(it, |mut it| {
    let x = it.next()?;
    Some((x, it))
  })
}

// The "remaining input" state of the combinators below is kept suspended,
// so an input element is only realised when the corresponding output
// element is.

impl<T: Clone + 'static> Stream<T> {

  /// Apply `f` to every element.
  pub fn map<U, F>(&self, f: F) -> Stream<U>
    where
    U: Clone + 'static,
    F: Fn(T) -> U + 'static {
    unfold(suspend(self.clone()), move |rest: Thunk<Stream<T>>| {
      match rest() {
        Stream::Cons { head, tail } => Some((f(head()), tail)),
        Stream::Empty => None
      }
    })
  }

  /// The elements that satisfy `p`.
  /// Realising an element searches forward until the next match, so on
  /// an infinite stream with no further matches this does not terminate.
  pub fn filter<P>(&self, p: P) -> Stream<T>
    where P: Fn(&T) -> bool + 'static {
    unfold(suspend(self.clone()), move |rest: Thunk<Stream<T>>| {
      let mut s = rest();
      loop {
        match s {
          Stream::Cons { head, tail } => {
            let x = head();
            if p(&x) { return Some((x, tail)) }
            s = tail()
          }
          Stream::Empty => return None
        }
      }
    })
  }

  /// At most the first `n` elements.
  /// Never forces anything of the input beyond its `n`th element.
  pub fn take(&self, n: usize) -> Stream<T> {
    unfold((suspend(self.clone()), n), |(rest, n): (Thunk<Stream<T>>, usize)| {
      if n == 0 { return None }
      match rest() {
        Stream::Cons { head, tail } => Some((head(), (tail, n - 1))),
        Stream::Empty => None
      }
    })
  }

  /// The longest prefix whose elements satisfy `p`.
  /// Looks at most one element past the prefix.
  pub fn take_while<P>(&self, p: P) -> Stream<T>
    where P: Fn(&T) -> bool + 'static {
    unfold(suspend(self.clone()), move |rest: Thunk<Stream<T>>| {
      match rest() {
        Stream::Cons { head, tail } => {
          let x = head();
          if p(&x) { Some((x, tail)) } else { None }
        }
        Stream::Empty => None
      }
    })
  }

  /// Combine corresponding elements.
  /// Ends as soon as either input ends.
  pub fn zip_with<U, V, F>(&self, that: &Stream<U>, f: F) -> Stream<V>
    where
    U: Clone + 'static,
    V: Clone + 'static,
    F: Fn(T, U) -> V + 'static {
    let seed = (suspend(self.clone()), suspend(that.clone()));
    unfold(seed, move |(xs, ys): (Thunk<Stream<T>>, Thunk<Stream<U>>)| {
      match (xs(), ys()) {
        ( Stream::Cons { head: x, tail: xs }
        , Stream::Cons { head: y, tail: ys }
        ) => Some((f(x(), y()), (xs, ys))),
        _ => None
      }
    })
  }

  /// Pair up corresponding elements.
  /// The result is as long as the shorter input.
  pub fn zip_all<U>(&self, that: &Stream<U>) -> Stream<(T, U)>
    where U: Clone + 'static {
    self.zip_with(that, |x, y| (x, y))
  }

  /// Pair up corresponding elements until both inputs end.
  /// The input that ends first contributes `None` from then on.
  pub fn zip_longest<U>(&self, that: &Stream<U>) -> Stream<(Option<T>, Option<U>)>
    where U: Clone + 'static {
    let seed = (suspend(self.clone()), suspend(that.clone()));
    unfold(seed, |(xs, ys): (Thunk<Stream<T>>, Thunk<Stream<U>>)| {
      let (x, xs) = split_suspended(xs());
      let (y, ys) = split_suspended(ys());
      if x.is_none() && y.is_none() { return None }
      Some(((x, y), (xs, ys)))
    })
  }

  /// Every suffix of this stream, starting with the stream itself and
  /// ending with `Empty`.  Infinite if this stream is.
  /// The tails of `Empty` are `Empty`.
  pub fn tails(&self) -> Stream<Stream<T>> {
    if self.is_empty() { return Stream::Empty }
    unfold(Some(suspend(self.clone())), |rest: Option<Thunk<Stream<T>>>| {
      let s = rest?();
      let next =
        match &s {
          Stream::Cons { tail, .. } => Some(tail.clone()),
          Stream::Empty => None
        };
      Some((s, next))
    })
  }
}

/// The head of a realised stream and its suspended tail.
/// An exhausted stream stays exhausted.
fn split_suspended<T: 'static>(s: Stream<T>) -> (Option<T>, Thunk<Stream<T>>) {
  match s {
    Stream::Cons { head, tail } => (Some(head()), tail),
    Stream::Empty => (None, suspend(Stream::Empty))
  }
}

impl<T: Clone + PartialEq + 'static> Stream<T> {

  /// Is `prefix` a prefix of this stream.
  /// Terminates whenever `prefix` is finite, even if this stream is not.
  /// The prefix is checked for its end before the next element of this
  /// stream is looked at, so nothing past the prefix is forced.
  pub fn starts_with(&self, prefix: &Stream<T>) -> bool {
    let mut s = self.clone();
    let mut p = prefix.clone();
    loop {
      let (y, ys) =
        match p {
          Stream::Cons { head, tail } => (head, tail),
          Stream::Empty => return true
        };
      let (x, xs) =
        match s {
          Stream::Cons { head, tail } => (head, tail),
          Stream::Empty => return false
        };
      if x() != y() { return false }
      p = ys();
      if p.is_empty() { return true }
      s = xs();
    }
  }
}
