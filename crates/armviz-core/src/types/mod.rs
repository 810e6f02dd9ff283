//! Core type definitions

mod frame;
mod joint;
mod pose;

pub use frame::*;
pub use joint::*;
pub use pose::*;
