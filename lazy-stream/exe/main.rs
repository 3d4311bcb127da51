use anyhow::{Context, Result};
use tracing::info;
use lazy_stream::{Stream, stream, naturals_from, fibonacci, ones};

/// Settings for the demo, read from the environment.
#[derive(Debug, Clone)]
struct DemoConfig {
  /// How many elements of each infinite stream to print.
  take:  usize,
  /// Upper bound used for the `take_while` examples.
  bound: u64
}

fn env_or<T>(name: &str, default: T) -> Result<T>
  where
  T: std::str::FromStr,
  T::Err: std::error::Error + Send + Sync + 'static {
  match std::env::var(name) {
    Ok(v)  => v.parse().with_context(|| format!("invalid value for {}: {:?}", name, v)),
    Err(_) => Ok(default)
  }
}

impl DemoConfig {
  fn from_env() -> Result<Self> {
    Ok(DemoConfig
      { take:  env_or("STREAM_DEMO_TAKE", 10)?
      , bound: env_or("STREAM_DEMO_BOUND", 50)?
      })
  }
}


fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into()))
    .init();

  let config = DemoConfig::from_env()?;
  info!(?config, "starting stream demo");

  let literal: Stream<u32> = stream![2,3,4,2];
  println!("literal            = {}", literal);
  println!("take 2             = {}", literal.take(2));
  println!("drop 2             = {}", literal.drop(2));
  println!("take_while (< 4)   = {}", literal.take_while(|x| *x < 4));
  println!("check_all (< 4)    = {}", literal.check_all(|x| *x < 4));
  println!("check_all (< 5)    = {}", literal.check_all(|x| *x < 5));
  println!("head_option_fold   = {:?}", literal.head_option_fold());

  println!("ones               = {}", ones::<u32>().show(config.take));
  println!("from 1             = {}", naturals_from(1_u64).show(config.take));

  for (i, x) in fibonacci::<num::BigUint>().iter().take(config.take).enumerate() {
    println!("fib({}) = {}", i, x)
  }

  let bound = config.bound;
  let odds = naturals_from(1_u64).map(|x| x * 2 + 1).take_while(move |x| *x < bound);
  println!("odds below {:<6}  = {}", bound, odds);
  println!("starts with [3]    = {}", odds.starts_with(&stream![3]));

  let prefix = naturals_from(1_u64).map(|x| x * 2 + 1).take(3);
  println!("starts with [2]    = {}", prefix.starts_with(&stream![2]));

  let tails: Vec<String> =
    naturals_from(1_u32).take(2).tails().iter().map(|t| t.to_string()).collect();
  println!("tails              = [{}]", tails.join(", "));

  Ok(())
}
