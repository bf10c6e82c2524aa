mod signal_trace;

pub use signal_trace::{Series, SignalTrace, TraceFormat};
