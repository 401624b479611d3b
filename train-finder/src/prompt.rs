//! Interactive line-based front end.
//!
//! Reads the three query strings from a reader, one per prompt, and writes
//! results back out. Generic over `BufRead`/`Write` so it can be driven by
//! stdin/stdout or by in-memory buffers in tests.

use std::io::{self, BufRead, Write};

use crate::domain::TrainRecord;
use crate::finder::SortCriteria;

/// Raw strings entered by the user. Not validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawQuery {
    pub departure_station: String,
    pub arrival_station: String,
    pub criteria: String,
}

/// Prompt for and read the three query strings.
///
/// Each answer is trimmed. A closed input yields an empty answer, which the
/// query engine rejects.
pub fn read_query<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<RawQuery> {
    let departure_station = ask(input, output, "Enter departure station: ")?;
    let arrival_station = ask(input, output, "Enter arrival station: ")?;

    let names: Vec<&str> = SortCriteria::ALL.iter().map(|c| c.as_str()).collect();
    let criteria_prompt = format!(
        "Enter the criteria to sort trains by.\nValid values: {}: ",
        names.join(", ")
    );
    let criteria = ask(input, output, &criteria_prompt)?;

    Ok(RawQuery {
        departure_station,
        arrival_station,
        criteria,
    })
}

/// Write each train on its own line.
pub fn write_results<W: Write>(output: &mut W, trains: &[&TrainRecord]) -> io::Result<()> {
    if trains.is_empty() {
        writeln!(output, "no trains found")?;
    }
    for train in trains {
        writeln!(output, "{train}")?;
    }
    output.flush()
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
