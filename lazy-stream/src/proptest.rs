use rand::random;
use proptest::prelude::*;
use proptest::collection::vec;
use proptest::test_runner::*;
use crate::{Stream, naturals_from, constant};

pub fn elements() -> impl Strategy<Value = Vec<u32>> {
  vec(any::<u32>(), 0 .. 40)
}

pub fn elements_and_count() -> impl Strategy<Value = (Vec<u32>, usize)> {
  (elements(), 0_usize .. 60)
}

pub fn small_elements() -> impl Strategy<Value = Vec<u32>> {
  vec(0_u32 .. 8, 0 .. 40)
}

pub fn do_test<S: Strategy>(strategy: S, p: fn(S::Value) -> bool) {
  let mut cfg: Config = <_>::default();
  cfg.failure_persistence = None;
  let mut runner = TestRunner::new(cfg);
  runner.run(&strategy, |arg| {
    if p(arg) { Ok(()) }
    else { Err(TestCaseError::Fail("unexpected result".into())) }
  }).unwrap()
}


#[test]
fn take_length_finite() {
  do_test(elements_and_count(), |(xs, n)| {
    let len = xs.len();
    Stream::from(xs).take(n).to_vec().len() == n.min(len)
  })
}

#[test]
fn take_length_infinite() {
  do_test(0_usize .. 300, |n| naturals_from(0_u64).take(n).to_vec().len() == n)
}

#[test]
fn take_length_random() {
  for _ in 0 .. 200 {
    let n = random::<usize>() % 500;
    let x = random::<u8>();
    let got = constant(x).take(n).to_vec();
    assert_eq!(got.len(), n);
    assert!(got.iter().all(|y| *y == x));
  }
}

#[test]
fn take_then_drop_is_whole() {
  do_test(elements_and_count(), |(xs, n)| {
    let s = Stream::from(xs.clone());
    s.take(n).append(s.drop(n)).to_vec() == xs
  })
}

#[test]
fn map_agrees_with_iterator() {
  do_test(elements(), |xs| {
    let f = |x: u32| x.wrapping_mul(3) ^ 1;
    let expected: Vec<u32> = xs.iter().cloned().map(f).collect();
    let s = Stream::from(xs);
    s.map(f).to_vec() == expected && s.map_fold(f).to_vec() == expected
  })
}

#[test]
fn filter_agrees_with_iterator() {
  do_test(small_elements(), |xs| {
    let expected: Vec<u32> = xs.iter().cloned().filter(|x| x % 3 == 0).collect();
    let s = Stream::from(xs);
    s.filter(|x| x % 3 == 0).to_vec() == expected
      && s.filter_fold(|x| x % 3 == 0).to_vec() == expected
  })
}

#[test]
fn take_while_agrees_with_iterator() {
  do_test(small_elements(), |xs| {
    let expected: Vec<u32> = xs.iter().cloned().take_while(|x| *x < 6).collect();
    let s = Stream::from(xs);
    s.take_while(|x| *x < 6).to_vec() == expected
      && s.take_while_fold(|x| *x < 6).to_vec() == expected
  })
}

#[test]
fn zip_length_is_minimum() {
  do_test((elements(), elements()), |(xs, ys)| {
    let len = xs.len().min(ys.len());
    Stream::from(xs).zip_all(&Stream::from(ys)).to_vec().len() == len
  })
}

#[test]
fn starts_with_own_prefix() {
  do_test(elements_and_count(), |(xs, n)| {
    let s = Stream::from(xs);
    s.starts_with(&s.take(n))
  })
}

#[test]
fn starts_with_agrees_with_slices() {
  do_test((small_elements(), small_elements()), |(xs, ys)| {
    let expected = xs.starts_with(&ys);
    Stream::from(xs).starts_with(&Stream::from(ys)) == expected
  })
}

#[test]
fn tails_are_suffixes() {
  do_test(elements(), |xs| {
    let ts: Vec<Vec<u32>> =
      Stream::from(xs.clone()).tails().iter().map(|t| t.to_vec()).collect();
    let expected_len = if xs.is_empty() { 0 } else { xs.len() + 1 };
    ts.len() == expected_len
      && ts.iter().enumerate().all(|(i, t)| t[..] == xs[i ..])
  })
}

#[test]
fn check_all_agrees_with_iterator() {
  do_test(small_elements(), |xs| {
    let expected = xs.iter().all(|x| *x != 7);
    Stream::from(xs).check_all(|x| *x != 7) == expected
  })
}
