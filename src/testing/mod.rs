pub mod stubs;

pub use stubs::{CountingFilter, CountingHandle, VecSource};
