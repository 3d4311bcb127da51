pub mod core;
pub mod error;
pub mod fold;
pub mod unfold;
pub mod generate;
pub mod iter;
pub mod display;

#[cfg(test)]
pub mod proptest;

pub use crate::core::{Stream, Thunk, suspend};
pub use crate::error::StreamError;
pub use crate::unfold::{unfold, from_iter_lazy};
pub use crate::generate::{iterate, constant, ones, naturals_from, fibonacci};
pub use crate::iter::StreamIter;
pub use crate::display::Shown;
