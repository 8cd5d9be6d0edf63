pub mod error;
pub mod texto;
