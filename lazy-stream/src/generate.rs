// Infinite generators

use num::{CheckedAdd, One, Zero};
use crate::core::Stream;
use crate::unfold::unfold;

/// `first`, `next(first)`, `next(next(first))`, ...
pub fn iterate<T, F>(first: T, next: F) -> Stream<T>
  where
  T: Clone + 'static,
  F: Fn(&T) -> T + 'static {
  unfold(first, move |x| {
    let y = next(&x);
    Some((x, y))
  })
}

/// The same element forever.
pub fn constant<T: Clone + 'static>(a: T) -> Stream<T> {
  unfold(a, |x| Some((x.clone(), x)))
}

/// `1` forever.
pub fn ones<N: One + Clone + 'static>() -> Stream<N> {
  constant(N::one())
}

/// `n`, `n + 1`, `n + 2`, ...
/// Ends after the largest value of `N`.  Each addition happens when the
/// element it produces is realised.
pub fn naturals_from<N>(n: N) -> Stream<N>
  where N: One + Clone + CheckedAdd + 'static {
  unfold((n, false), |(x, started): (N, bool)| {
    let x = if started { x.checked_add(&N::one())? } else { x };
    Some((x.clone(), (x, true)))
  })
}

/// `0, 1, 1, 2, 3, 5, ...`
/// Ends after the largest Fibonacci number that fits in `N`; use a big
/// number type such as `num::BigUint` for an infinite stream.
pub fn fibonacci<N>() -> Stream<N>
  where N: Zero + One + Clone + CheckedAdd + 'static {
  // (previous, current); 1 precedes 0 so that 1 + 0 gives the next element.
  unfold((N::one(), N::zero(), false), |(p, c, started): (N, N, bool)| {
    let (p, c) =
      if started {
        let next = p.checked_add(&c)?;
        (c, next)
      } else { (p, c) };
    Some((c.clone(), (p, c, true)))
  })
}


#[cfg(test)]
mod tests {
  use super::*;
  use num::BigUint;

  #[test]
  fn test_constant() {
    assert_eq!(constant('x').take(3).to_vec(), vec!['x','x','x']);
    assert_eq!(ones::<u8>().take(4).to_vec(), vec![1,1,1,1]);
    assert!(!ones::<u8>().check_all(|x| *x != 1));
  }

  #[test]
  fn test_naturals_from() {
    assert_eq!(naturals_from(1_u64).take(2).to_vec(), vec![1,2]);
    assert_eq!(naturals_from(-2_i32).take(4).to_vec(), vec![-2,-1,0,1]);
  }

  #[test]
  fn test_iterate() {
    assert_eq!(iterate(1_u32, |x| x * 2).take(5).to_vec(), vec![1,2,4,8,16]);
    assert_eq!(iterate(String::from("a"), |s| format!("{}a", s)).nth(2),
               Ok(String::from("aaa")));
  }

  #[test]
  fn test_fibonacci_big() {
    let expected = BigUint::parse_bytes(b"354224848179261915075", 10).unwrap();
    assert_eq!(fibonacci::<BigUint>().nth(100), Ok(expected));
  }

  #[test]
  fn test_naturals_end_at_max() {
    assert_eq!(naturals_from(250_u8).take(6).to_vec(), vec![250,251,252,253,254,255]);
    assert_eq!(naturals_from(250_u8).to_vec(), vec![250,251,252,253,254,255]);
    assert_eq!(naturals_from(0_u8).take_while(|x| *x < 255).to_vec(),
               (0 .. 255).collect::<Vec<u8>>());
    assert_eq!(naturals_from(i8::MAX).to_vec(), vec![i8::MAX]);
  }

  #[test]
  fn test_fibonacci_ends_at_max() {
    let fibs = fibonacci::<u32>().to_vec();
    assert_eq!(fibs.len(), 48);
    assert_eq!(fibs[46], 1836311903);
    assert_eq!(fibs[47], 2971215073);
    assert_eq!(fibonacci::<u32>().take(47).to_vec().len(), 47);
    assert_eq!(fibonacci::<u8>().to_vec(), vec![0,1,1,2,3,5,8,13,21,34,55,89,144,233]);
  }

  #[test]
  fn test_fibonacci_prefix() {
    let fibs = fibonacci::<u32>();
    assert!(fibs.starts_with(&crate::stream![0,1,1,2,3,5,8,13,21,34]));
    assert!(fibs.take_while(|x| *x < 100).check_all(|x| *x < 100));
  }
}
