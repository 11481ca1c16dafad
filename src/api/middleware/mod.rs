//! API middleware components

pub mod caller;

pub use caller::CurrentCaller;
