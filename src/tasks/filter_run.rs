use crate::evaluation::{Measurement, SignalEvaluator, SignalTrace};
use crate::filters::ScalarFilter;
use crate::streams::SignalSource;
use log::debug;
use std::io::{Error, ErrorKind};

/// Runs a filtering pass: drains a signal source in input order, feeds every
/// sample through each registered filter, collects all sequences into a
/// [`SignalTrace`], and keeps the evaluator updated with (raw, filtered)
/// pairs.
///
/// The evaluator always compares the raw measurements against the *first*
/// registered filter's output. When `seed_with_first` is set, every filter's
/// estimate is seeded with the first sample before its first update, so the
/// filters start exactly at the first observed measurement.
pub struct FilterRunTask {
    source: Box<dyn SignalSource>,
    filters: Vec<(String, Box<dyn ScalarFilter>)>,
    evaluator: Box<dyn SignalEvaluator>,

    trace: SignalTrace,
    seed_with_first: bool,
    log_frequency: u64,
    processed: u64,
}

impl FilterRunTask {
    pub fn new(
        source: Box<dyn SignalSource>,
        filters: Vec<(String, Box<dyn ScalarFilter>)>,
        evaluator: Box<dyn SignalEvaluator>,
        seed_with_first: bool,
        log_frequency: u64,
    ) -> Result<Self, Error> {
        if filters.is_empty() {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "at least one filter is required",
            ));
        }
        if log_frequency == 0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "log_frequency must be > 0",
            ));
        }

        let mut labels = vec!["Raw".to_string()];
        labels.extend(filters.iter().map(|(label, _)| label.clone()));

        Ok(Self {
            source,
            filters,
            evaluator,
            trace: SignalTrace::with_labels(labels),
            seed_with_first,
            log_frequency,
            processed: 0,
        })
    }

    pub fn run(&mut self) -> Result<(), Error> {
        while self.source.has_more_samples() {
            let Some(sample) = self.source.next_sample() else {
                break;
            };

            if self.processed == 0 && self.seed_with_first {
                for (_, filter) in &mut self.filters {
                    filter.seed(sample);
                }
            }
            self.processed += 1;

            let mut row = Vec::with_capacity(self.filters.len() + 1);
            row.push(sample);
            for (_, filter) in &mut self.filters {
                row.push(filter.update(sample));
            }

            self.evaluator.add_result(sample, row[1]);
            self.trace.push_row(&row)?;

            if self.processed % self.log_frequency == 0 {
                debug!(
                    "processed {} samples, estimate {:.3}",
                    self.processed, row[1]
                );
            }
        }
        Ok(())
    }

    pub fn trace(&self) -> &SignalTrace {
        &self.trace
    }

    pub fn trace_mut(&mut self) -> &mut SignalTrace {
        &mut self.trace
    }

    pub fn samples_processed(&self) -> u64 {
        self.processed
    }

    pub fn performance(&self) -> Vec<Measurement> {
        self.evaluator.performance()
    }

    pub fn summary(&self) -> String {
        self.evaluator.summary()
    }
}
