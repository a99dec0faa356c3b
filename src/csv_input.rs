//! Reads the participants of a group expense from CSV data.

use std::io::Read;

use serde::Deserialize;

use crate::{
    Error,
    group_expense::{Participant, parse_amount, validate_participants},
};

/// One row of participant CSV data, before the amount is checked.
#[derive(Debug, Deserialize)]
struct ParticipantRecord {
    name: String,
    spent: String,
}

/// Parses participants from CSV data with the header `name,spent`.
///
/// Whitespace around fields is ignored, e.g.:
///
/// ```text
/// name,spent
/// Juan, 2400
/// Ana, 400.50
/// ```
///
/// # Errors
/// Returns [Error::InvalidCSV] if the data is not CSV with `name` and `spent`
/// columns, or the same validation errors as a submitted group expense form
/// if a row is invalid.
pub fn parse_participants_csv<R: Read>(reader: R) -> Result<Vec<Participant>, Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut participants = Vec::new();

    for (index, record) in csv_reader.deserialize::<ParticipantRecord>().enumerate() {
        let record = record.map_err(|error| Error::InvalidCSV(error.to_string()))?;

        if record.name.is_empty() {
            return Err(Error::MissingParticipantName(index + 1));
        }

        participants.push(Participant::new(&record.name, parse_amount(&record.spent)?));
    }

    tracing::debug!("read {} participants from CSV", participants.len());

    validate_participants(&participants)?;

    Ok(participants)
}
