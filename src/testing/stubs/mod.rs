pub mod counting_filter;
pub mod vec_source;

pub use counting_filter::{CountingFilter, CountingHandle};
pub use vec_source::VecSource;
