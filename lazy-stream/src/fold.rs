// Structural recursion over streams

use std::rc::Rc;
use tracing::debug;
use crate::core::{Stream, Thunk};
use crate::error::StreamError;

fn fold_right_go<T, B, F>(s: &Stream<T>, base: B, f: &F) -> B
  where F: Fn(T, B) -> B {
  match s {
    Stream::Cons { head, tail } => {
      let x = head();
      f(x, fold_right_go(&tail(), base, f))
    }
    Stream::Empty => base
  }
}

fn fold_right_lazy_go<T, B, F>(s: &Stream<T>, base: B, f: Rc<F>) -> B
  where
  T: 'static,
  B: Clone + 'static,
  F: Fn(T, Thunk<B>) -> B + 'static {
  match s {
    Stream::Cons { head, tail } => {
      let tail = tail.clone();
      let g    = f.clone();
      let rest: Thunk<B> =
        Rc::new(move || fold_right_lazy_go(&tail(), base.clone(), g.clone()));
      f(head(), rest)
    }
    Stream::Empty => base
  }
}

impl<T> Stream<T> {

  /// Right-associative fold.
  /// Only terminates on finite streams: the whole stream is traversed
  /// before `f` is applied to anything.
  pub fn fold_right<B, F>(&self, base: B, f: F) -> B
    where F: Fn(T, B) -> B {
    fold_right_go(self, base, &f)
  }

  /// Does every element satisfy the predicate.
  /// Stops at the first failing element, so on an infinite stream this
  /// terminates exactly when some element fails.
  pub fn check_all<P>(&self, p: P) -> bool
    where P: Fn(&T) -> bool {
    let mut s = self.clone();
    loop {
      match s {
        Stream::Cons { head, tail } => {
          if !p(&head()) { return false }
          s = tail()
        }
        Stream::Empty => return true
      }
    }
  }

  /// All elements, in order.  Finite streams only.
  pub fn to_vec(&self) -> Vec<T> {
    self.iter().collect()
  }

  /// All elements, in order, provided there are at most `limit` of them.
  /// Forces at most `limit` heads and `limit + 1` tails.
  pub fn collect_bounded(&self, limit: usize) -> Result<Vec<T>, StreamError> {
    let mut result = Vec::new();
    let mut s = self.clone();
    loop {
      match s {
        Stream::Cons { head, tail } => {
          if result.len() == limit {
            debug!(limit, "stream exceeds collection limit");
            return Err(StreamError::LimitExceeded { limit })
          }
          result.push(head());
          s = tail()
        }
        Stream::Empty => return Ok(result)
      }
    }
  }
}


// -----------------------------------------------------------------------------
// Folds with a suspended accumulator

impl<T: Clone + 'static> Stream<T> {

  /// Right-associative fold where the folded rest of the stream is passed
  /// to `f` as a thunk.  The recursion only continues if `f` forces it,
  /// so this works on infinite streams whenever `f` stops early or
  /// only stores the thunk in a lazy structure.
  pub fn fold_right_lazy<B, F>(&self, base: B, f: F) -> B
    where
    B: Clone + 'static,
    F: Fn(T, Thunk<B>) -> B + 'static {
    fold_right_lazy_go(self, base, Rc::new(f))
  }

  /// The longest prefix whose elements satisfy `p`.
  pub fn take_while_fold<P>(&self, p: P) -> Stream<T>
    where P: Fn(&T) -> bool + 'static {
    self.fold_right_lazy(Stream::Empty, move |x, rest| {
      if p(&x) {
        Stream::Cons { head: Rc::new(move || x.clone()), tail: rest }
      } else {
        Stream::Empty
      }
    })
  }

  /// The first element, if any.  Never forces the rest of the fold.
  pub fn head_option_fold(&self) -> Option<T> {
    self.fold_right_lazy(None, |x, _| Some(x))
  }

  /// Apply `f` to every element.  The result heads call `f` when forced.
  pub fn map_fold<U, F>(&self, f: F) -> Stream<U>
    where
    U: 'static,
    F: Fn(T) -> U + 'static {
    let f = Rc::new(f);
    self.fold_right_lazy(Stream::Empty, move |x, rest| {
      let f = f.clone();
      Stream::Cons { head: Rc::new(move || f(x.clone())), tail: rest }
    })
  }

  /// The elements that satisfy `p`.
  pub fn filter_fold<P>(&self, p: P) -> Stream<T>
    where P: Fn(&T) -> bool + 'static {
    self.fold_right_lazy(Stream::Empty, move |x, rest| {
      if p(&x) {
        Stream::Cons { head: Rc::new(move || x.clone()), tail: rest }
      } else {
        rest()
      }
    })
  }

  /// This stream followed by `other`.
  pub fn append(&self, other: Stream<T>) -> Stream<T> {
    self.fold_right_lazy(other, |x, rest| {
      Stream::Cons { head: Rc::new(move || x.clone()), tail: rest }
    })
  }
}
