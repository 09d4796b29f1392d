#![no_std]

extern crate alloc;

pub use cell::*;
pub use check::*;
pub use error::*;
pub use grid::*;
pub use highlight::*;
pub use navigation::*;
pub use payload::*;
pub use progress::*;
pub use types::*;

mod cell;
mod check;
mod error;
mod grid;
mod highlight;
mod navigation;
mod payload;
mod progress;
mod types;
