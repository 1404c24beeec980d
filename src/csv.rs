// src/csv.rs
// Google Contacts import CSV.

use csv::{Terminator, WriterBuilder};

use crate::error::{Error, Result};
use crate::roster::{LabelScheme, OfficerRecord};

pub const CONTACT_HEADERS: [&str; 21] = [
    "First Name", "Middle Name", "Last Name", "Phonetic First Name", "Phonetic Middle Name",
    "Phonetic Last Name", "Name Prefix", "Name Suffix", "Nickname", "File As",
    "Organization Name", "Organization Title", "Organization Department", "Birthday",
    "Notes", "Photo", "Labels", "E-mail 1 - Label", "E-mail 1 - Value",
    "E-mail 2 - Label", "E-mail 2 - Value",
];

/// One contact row; every column the import doesn't need is empty.
pub fn contact_row(rec: &OfficerRecord, labels: &LabelScheme) -> Vec<String> {
    let (first, last) = rec.first_last();
    let mut row = vec![s!(); CONTACT_HEADERS.len()];
    row[0] = s!(first);
    row[2] = s!(last);
    row[10] = rec.organization.clone();
    row[11] = rec.role.clone();
    row[14] = format!("Photo: {}", rec.photo);
    row[16] = labels.labels(rec);
    row[17] = s!("*");
    row[18] = rec.email.clone();
    row
}

/// Header plus one row per officer, in the order given. CRLF line endings,
/// quotes only where needed.
pub fn contacts_csv(records: &[OfficerRecord], labels: &LabelScheme) -> Result<String> {
    let mut w = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    w.write_record(CONTACT_HEADERS)?;
    for rec in records {
        w.write_record(contact_row(rec, labels))?;
    }

    let buf = w.into_inner().map_err(|e| Error::Io(e.into_error()))?;
    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}

/// Escape CSV text for a JS template literal inside an inline `<script>`.
/// Line breaks become `\n` escapes, so the literal stays on one line.
pub fn embed_for_script(csv: &str) -> String {
    csv.trim()
        .replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
        .replace("</", "<\\/")
        .replace("\r\n", "\\n")
        .replace('\n', "\\n")
        .replace('\r', "\\n")
        .replace('"', "\\\"")
}
