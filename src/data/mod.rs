pub mod cmd;
pub mod constant;

pub use cmd::*;
