use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Error, ErrorKind, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

/// One labeled sequence collected during a filtering run.
#[derive(Debug, Clone)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
}

/// Column store of the sequences a run produced: the raw measurements, one
/// column per filter, and an optional constant reference line for display.
///
/// Rows are pushed in input order, one per processed sample.
#[derive(Debug, Clone, Default)]
pub struct SignalTrace {
    series: Vec<Series>,
    reference: Option<(String, f64)>,
}

impl SignalTrace {
    pub fn with_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            series: labels
                .into_iter()
                .map(|label| Series {
                    label: label.into(),
                    values: Vec::new(),
                })
                .collect(),
            reference: None,
        }
    }

    /// Appends one value to every column; `row` must match the column count.
    pub fn push_row(&mut self, row: &[f64]) -> Result<(), Error> {
        if row.len() != self.series.len() {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!(
                    "row has {} values but the trace has {} series",
                    row.len(),
                    self.series.len()
                ),
            ));
        }
        for (series, &value) in self.series.iter_mut().zip(row) {
            series.values.push(value);
        }
        Ok(())
    }

    /// Number of rows collected so far.
    pub fn len(&self) -> usize {
        self.series.first().map_or(0, |s| s.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn column(&self, label: &str) -> Option<&[f64]> {
        self.series
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.values.as_slice())
    }

    pub fn set_reference<S: Into<String>>(&mut self, label: S, value: f64) {
        self.reference = Some((label.into(), value));
    }

    pub fn reference(&self) -> Option<(&str, f64)> {
        self.reference
            .as_ref()
            .map(|(label, value)| (label.as_str(), *value))
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: TraceFormat) -> Result<(), Error> {
        match fmt {
            TraceFormat::Csv => self.export_with_delimiter(path, ','),
            TraceFormat::Tsv => self.export_with_delimiter(path, '\t'),
            TraceFormat::Json => self.export_json(path),
        }
    }

    fn export_with_delimiter<P: AsRef<Path>>(&self, path: P, delimiter: char) -> Result<(), Error> {
        let mut w = File::create(path)?;
        write!(w, "step")?;
        for series in &self.series {
            write!(w, "{delimiter}{}", series.label)?;
        }
        writeln!(w)?;
        for step in 0..self.len() {
            write!(w, "{step}")?;
            for series in &self.series {
                write!(w, "{delimiter}{:.6}", series.values[step])?;
            }
            writeln!(w)?;
        }
        Ok(())
    }

    fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut w = File::create(path)?;
        writeln!(w, "[")?;
        for step in 0..self.len() {
            write!(w, "  {{\"step\":{step}")?;
            for series in &self.series {
                write!(w, ",\"{}\":{}", series.label, series.values[step])?;
            }
            writeln!(
                w,
                "}}{}",
                if step + 1 == self.len() { "" } else { "," }
            )?;
        }
        writeln!(w, "]")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::NamedTempFile;

    fn two_column_trace() -> SignalTrace {
        let mut trace = SignalTrace::with_labels(["Raw", "Filtered"]);
        trace.push_row(&[1.0, 2.0]).unwrap();
        trace.push_row(&[3.5, 4.25]).unwrap();
        trace
    }

    #[test]
    fn default_is_empty() {
        let trace = SignalTrace::default();
        assert_eq!(trace.len(), 0);
        assert!(trace.is_empty());
        assert!(trace.reference().is_none());
    }

    #[test]
    fn push_row_grows_every_column() {
        let trace = two_column_trace();
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.column("Raw"), Some([1.0, 3.5].as_slice()));
        assert_eq!(trace.column("Filtered"), Some([2.0, 4.25].as_slice()));
        assert!(trace.column("Other").is_none());
    }

    #[test]
    fn mismatched_row_arity_is_rejected() {
        let mut trace = SignalTrace::with_labels(["Raw", "Filtered"]);
        let err = trace.push_row(&[1.0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(trace.len(), 0);
    }

    #[test]
    fn reference_line_is_stored() {
        let mut trace = SignalTrace::default();
        trace.set_reference("True Altitude", 100.0);
        assert_eq!(trace.reference(), Some(("True Altitude", 100.0)));
    }

    #[test]
    fn export_csv_with_two_rows() {
        let trace = two_column_trace();
        let tf = NamedTempFile::new().unwrap();
        trace.export(tf.path(), TraceFormat::Csv).unwrap();

        let got = fs::read_to_string(tf.path()).unwrap();
        let exp = "\
step,Raw,Filtered
0,1.000000,2.000000
1,3.500000,4.250000
";
        assert_eq!(got, exp);
    }

    #[test]
    fn export_tsv_with_two_rows() {
        let trace = two_column_trace();
        let tf = NamedTempFile::new().unwrap();
        trace.export(tf.path(), TraceFormat::Tsv).unwrap();

        let got = fs::read_to_string(tf.path()).unwrap();
        let exp = "\
step\tRaw\tFiltered
0\t1.000000\t2.000000
1\t3.500000\t4.250000
";
        assert_eq!(got, exp);
    }

    #[test]
    fn export_json_with_two_rows() {
        let trace = two_column_trace();
        let tf = NamedTempFile::new().unwrap();
        trace.export(tf.path(), TraceFormat::Json).unwrap();

        let got = fs::read_to_string(tf.path()).unwrap();
        let exp = "\
[
  {\"step\":0,\"Raw\":1,\"Filtered\":2},
  {\"step\":1,\"Raw\":3.5,\"Filtered\":4.25}
]
";
        assert_eq!(got, exp);
    }

    #[test]
    fn export_empty_trace_writes_header_only() {
        let trace = SignalTrace::with_labels(["Raw"]);

        let tf_csv = NamedTempFile::new().unwrap();
        trace.export(tf_csv.path(), TraceFormat::Csv).unwrap();
        assert_eq!(fs::read_to_string(tf_csv.path()).unwrap(), "step,Raw\n");

        let tf_json = NamedTempFile::new().unwrap();
        trace.export(tf_json.path(), TraceFormat::Json).unwrap();
        assert_eq!(fs::read_to_string(tf_json.path()).unwrap(), "[\n]\n");
    }
}
