//! Conway's Game of Life on a toroidal grid, rendered as ANSI-colored text.
//!
//! The two hot routines are [`step`], which advances one generation with
//! wrap-around neighbor lookup, and [`encode`], which rewrites the color codes
//! of a pre-built escape-sequence template. Both work on caller-owned buffers
//! and never allocate.

mod error;
mod frame;
mod grid;
mod life;
mod palette;
mod step;

pub mod history;
pub mod patterns;
pub mod seed;

pub use error::GridError;
pub use frame::{encode, FrameBuffer, CODE_OFFSET, UNIT_LEN};
pub use grid::{population, GridSize, MAX_DIMENSION};
pub use life::{GameOfLife, Tick};
pub use palette::{Palette, Token};
pub use step::{step, step_row};
