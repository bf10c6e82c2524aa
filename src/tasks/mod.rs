mod filter_run;

pub use filter_run::FilterRunTask;
