use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use enum_map::EnumMap;
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::simulation::RoundRecord;
use crate::types::{Money, Seat};

pub const DEFAULT_EXPORT_PATH: &str = "roulette_simulation.csv";
const ROUND_COLUMN: &str = "Round";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("unexpected header {found:?}, expected {expected:?}")]
    UnexpectedHeader { found: Vec<String>, expected: Vec<String> },
    #[error("line {line}: cannot read {column} value {value:?}")]
    BadField { line: u64, column: String, value: String },
}

/// Column names in file order: the round index followed by one column per seat.
pub fn header() -> Vec<String> {
    let mut columns = vec![ROUND_COLUMN.to_string()];
    columns.extend(Seat::iter().map(|seat| seat.to_string()));
    columns
}

/// Write the bankroll history as CSV, one row per round under a header row.
pub fn write_records<W: Write>(writer: W, records: &[RoundRecord]) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(header())?;
    for record in records {
        let mut row = vec![record.round.to_string()];
        row.extend(record.bankrolls.values().map(|bankroll| bankroll.to_string()));
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Parse a bankroll history written by [write_records].
pub fn read_records<R: Read>(reader: R) -> Result<Vec<RoundRecord>, ExportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let expected = header();
    let found: Vec<String> = reader.headers()?.iter().map(String::from).collect();
    if found != expected {
        return Err(ExportError::UnexpectedHeader { found, expected });
    }

    let mut records = vec![];
    for line in reader.records() {
        let row = line?;
        let line_number = row.position().map(|p| p.line()).unwrap_or_default();
        let field = |idx: usize| -> Result<u64, ExportError> {
            let value = row.get(idx).unwrap_or_default();
            value.parse().map_err(|_| ExportError::BadField {
                line: line_number,
                column: expected[idx].clone(),
                value: value.to_string(),
            })
        };

        let round = u32::try_from(field(0)?).map_err(|_| ExportError::BadField {
            line: line_number,
            column: ROUND_COLUMN.to_string(),
            value: row.get(0).unwrap_or_default().to_string(),
        })?;
        let mut bankrolls: EnumMap<Seat, Money> = EnumMap::default();
        for (idx, seat) in Seat::iter().enumerate() {
            bankrolls[seat] = field(idx + 1)?;
        }
        records.push(RoundRecord { round, bankrolls });
    }
    Ok(records)
}

pub fn export_to_path<P: AsRef<Path>>(path: P, records: &[RoundRecord]) -> Result<(), ExportError> {
    write_records(File::create(path)?, records)
}

pub fn import_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RoundRecord>, ExportError> {
    read_records(File::open(path)?)
}

#[cfg(test)]
mod tests {
    use enum_map::enum_map;

    use crate::config::SimulationConfig;
    use crate::export::*;
    use crate::simulation::Simulation;

    fn sample() -> Vec<RoundRecord> {
        vec![
            RoundRecord { round: 1, bankrolls: enum_map! {
                Seat::RandomBot => 1010, Seat::GreenHunter => 990, Seat::MartyRed => 1010, Seat::MartyBlack => 990,
            } },
            RoundRecord { round: 2, bankrolls: enum_map! {
                Seat::RandomBot => 1000, Seat::GreenHunter => 1340, Seat::MartyRed => 1000, Seat::MartyBlack => 970,
            } },
        ]
    }

    #[test]
    fn test_written_format() {
        let mut buf = vec![];
        write_records(&mut buf, &sample()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "Round,RandomBot,GreenHunter,MartyRed,MartyBlack\n\
                          1,1010,990,1010,990\n\
                          2,1000,1340,1000,970\n");
    }

    #[test]
    fn test_simulated_history_survives_export() {
        let mut sim = Simulation::new(SimulationConfig { rounds: 300, seed: Some(8), ..SimulationConfig::default() }).unwrap();
        let records = sim.run();

        let mut buf = vec![];
        write_records(&mut buf, records).unwrap();
        let parsed = read_records(buf.as_slice()).unwrap();
        assert_eq!(parsed.len(), 300);
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_file_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_EXPORT_PATH);
        export_to_path(&path, &sample()).unwrap();
        assert_eq!(import_from_path(&path).unwrap(), sample());
    }

    #[test]
    fn test_rejects_wrong_header() {
        let text = "Round,RandomBot,GreenHunter,MartyBlack,MartyRed\n1,1,2,3,4\n";
        match read_records(text.as_bytes()) {
            Err(ExportError::UnexpectedHeader { found, .. }) => assert_eq!(found[3], "MartyBlack"),
            other => panic!("Expected a header error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_bad_value() {
        let text = "Round,RandomBot,GreenHunter,MartyRed,MartyBlack\n1,1000,990,1010,990\n2,1000,-5,1000,970\n";
        match read_records(text.as_bytes()) {
            Err(ExportError::BadField { line, column, value }) => {
                assert_eq!(line, 3);
                assert_eq!(column, "GreenHunter");
                assert_eq!(value, "-5");
            }
            other => panic!("Expected a field error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_short_row() {
        let text = "Round,RandomBot,GreenHunter,MartyRed,MartyBlack\n1,1000,990\n";
        assert!(read_records(text.as_bytes()).is_err());
    }

    #[test]
    fn test_empty_history() {
        let mut buf = vec![];
        write_records(&mut buf, &[]).unwrap();
        assert_eq!(read_records(buf.as_slice()).unwrap(), vec![]);
    }
}
