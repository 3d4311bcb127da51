use std::rc::Rc;
use crate::core::Stream;
use crate::unfold::unfold;

/// Traverse a stream, forcing one head and one tail per element.
#[derive(Clone)]
pub struct StreamIter<T> {
  rest: Stream<T>
}

impl<T> Iterator for StreamIter<T> {
  type Item = T;
  fn next(&mut self) -> Option<Self::Item> {
    match std::mem::take(&mut self.rest) {
      Stream::Cons { head, tail } => {
        let x = head();
        self.rest = tail();
        Some(x)
      }
      Stream::Empty => None
    }
  }
}

impl<T> Stream<T> {

  /// Iterate over the elements.
  /// The iterator is as long as the stream, so bound it before
  /// collecting an infinite one.
  pub fn iter(&self) -> StreamIter<T> { StreamIter { rest: self.clone() } }
}

impl<T> IntoIterator for Stream<T> {
  type Item     = T;
  type IntoIter = StreamIter<T>;
  fn into_iter(self) -> Self::IntoIter { StreamIter { rest: self } }
}

impl<'a, T> IntoIterator for &'a Stream<T> {
  type Item     = T;
  type IntoIter = StreamIter<T>;
  fn into_iter(self) -> Self::IntoIter { self.iter() }
}


// -----------------------------------------------------------------------------


impl<T: Clone + 'static> From<Vec<T>> for Stream<T> {
  fn from(xs: Vec<T>) -> Self {
    let xs: Rc<[T]> = xs.into();
    unfold(0, move |i: usize| Some((xs.get(i)?.clone(), i + 1)))
  }
}

/// Collects eagerly; use `from_iter_lazy` to wrap an iterator without
/// consuming it.
impl<T: Clone + 'static> FromIterator<T> for Stream<T> {
  fn from_iter<I: IntoIterator<Item = T>>(it: I) -> Self {
    Stream::from(it.into_iter().collect::<Vec<T>>())
  }
}
