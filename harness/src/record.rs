use std::fmt;

use csv::StringRecord;

use crate::error::{HarnessError, Result};

/// One measured sweep step: both algorithms timed against the same batch of
/// generated instances in a single probe invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialRecord {
    /// Number of graph nodes the probe was asked to generate.
    pub problem_size: u32,
    /// Edmonds matching time over the batch, in seconds.
    pub edmonds_time: f64,
    /// Gabow matching time over the batch, in seconds.
    pub gabow_time: f64,
}

impl TrialRecord {
    pub fn csv_header() -> &'static str {
        "Number of Nodes,Edmonds,Gabow"
    }

    pub fn edmonds_millis(&self) -> f64 {
        self.edmonds_time * 1000.0
    }

    pub fn gabow_millis(&self) -> f64 {
        self.gabow_time * 1000.0
    }

    /// Parse a CSV record into a TrialRecord.
    pub fn from_csv_record(record: &StringRecord) -> Result<Self> {
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();
        let field = |index: usize| {
            record.get(index).ok_or_else(|| HarnessError::MalformedRow {
                line,
                reason: format!("expected 3 fields, found {}", record.len()),
            })
        };

        let problem_size = field(0)?
            .parse()
            .map_err(|err| HarnessError::MalformedRow {
                line,
                reason: format!("bad problem size: {err}"),
            })?;
        let edmonds_time = parse_timing(field(1)?, line, "Edmonds")?;
        let gabow_time = parse_timing(field(2)?, line, "Gabow")?;

        Ok(TrialRecord {
            problem_size,
            edmonds_time,
            gabow_time,
        })
    }

    /// Parse every TrialRecord from a CSV reader, header excluded.
    pub fn from_csv_reader<R: std::io::Read>(reader: csv::Reader<R>) -> Result<Vec<Self>> {
        let mut records = Vec::new();
        for record in reader.into_records() {
            let record = record?;
            records.push(Self::from_csv_record(&record)?);
        }
        Ok(records)
    }
}

fn parse_timing(token: &str, line: u64, name: &str) -> Result<f64> {
    let value: f64 = token.parse().map_err(|err| HarnessError::MalformedRow {
        line,
        reason: format!("bad {name} timing: {err}"),
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(HarnessError::MalformedRow {
            line,
            reason: format!("{name} timing must be a non-negative number, got {token}"),
        });
    }
    Ok(value)
}

impl fmt::Display for TrialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{}",
            self.problem_size, self.edmonds_time, self.gabow_time
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(data: &str) -> csv::Reader<&[u8]> {
        csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(data.as_bytes())
    }

    #[test]
    fn roundtrip_row() {
        let record = TrialRecord {
            problem_size: 120,
            edmonds_time: 0.25,
            gabow_time: 0.125,
        };
        let data = format!("{}\n{}\n", TrialRecord::csv_header(), record);
        let parsed = TrialRecord::from_csv_reader(reader(&data)).unwrap();
        assert_eq!(parsed, vec![record]);
    }

    #[test]
    fn tolerates_padded_cells() {
        let data = "Number of Nodes, Edmonds, Gabow\n10, 0.5, 0.25\n";
        let parsed = TrialRecord::from_csv_reader(reader(data)).unwrap();
        assert_eq!(parsed[0].problem_size, 10);
        assert_eq!(parsed[0].edmonds_time, 0.5);
    }

    #[test]
    fn millis_conversion() {
        let record = TrialRecord {
            problem_size: 10,
            edmonds_time: 0.002,
            gabow_time: 1.5,
        };
        assert_eq!(record.edmonds_millis(), 2.0);
        assert_eq!(record.gabow_millis(), 1500.0);
    }

    #[test]
    fn rejects_short_row() {
        let data = "Number of Nodes,Edmonds,Gabow\n10,0.5\n";
        let err = TrialRecord::from_csv_reader(reader(data)).unwrap_err();
        assert!(matches!(err, HarnessError::Csv(_) | HarnessError::MalformedRow { .. }));
    }

    #[test]
    fn rejects_garbage_timing() {
        let data = "Number of Nodes,Edmonds,Gabow\n10,fast,0.25\n";
        let err = TrialRecord::from_csv_reader(reader(data)).unwrap_err();
        let HarnessError::MalformedRow { line, reason } = err else {
            panic!("unexpected error: {err}");
        };
        assert_eq!(line, 2);
        assert!(reason.contains("Edmonds"));
    }

    #[test]
    fn rejects_negative_timing() {
        let data = "Number of Nodes,Edmonds,Gabow\n10,0.5,-0.25\n";
        assert!(TrialRecord::from_csv_reader(reader(data)).is_err());
    }
}
