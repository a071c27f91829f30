//! Human-readable console output emitted by the functions as proof of access.
//!
//! None of these lines are a machine-readable protocol; structured logs go
//! through `tracing` in the lambda crate.

use std::io::{self, Write};

use crate::contract::{seeded_message, OWNER};
use crate::record::{display_or_none, ScannedRecord};
use crate::secret::SecretMetadata;

pub const SEPARATOR: &str = "---------------------------------------";
pub const STUDENT_DETAILS_HEADER: &str = "------------ STUDENT DETAILS -----------";
pub const COMPLETION_LINE: &str = "Invocation completed successfully.";
pub const SEEDING_LINE: &str = "Seeding DynamoDB table...";

pub fn write_reader_banner(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, " Secure Secret Retrieval Demo")?;
    writeln!(out, " Owner: {OWNER}")?;
    writeln!(out, "{SEPARATOR}")
}

pub fn write_reader_secret_proof(out: &mut dyn Write, metadata: &SecretMetadata) -> io::Result<()> {
    if metadata.retrieved {
        writeln!(
            out,
            "Secret successfully retrieved at runtime (value not logged)."
        )?;
        writeln!(
            out,
            "Secret ARN       : {}",
            metadata.arn.as_deref().unwrap_or("(unknown)")
        )?;
        writeln!(
            out,
            "Secret JSON keys (sample): {}",
            key_sample(&metadata.keys_present)
        )
    } else if let Some(error) = &metadata.error {
        writeln!(out, "Secret retrieval failed: {error}")
    } else {
        writeln!(
            out,
            "Secret retrieval skipped: {}",
            metadata.reason.as_deref().unwrap_or("no secret reference")
        )
    }
}

pub fn write_student_header(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{STUDENT_DETAILS_HEADER}")
}

pub fn write_student_block(out: &mut dyn Write, record: &ScannedRecord) -> io::Result<()> {
    writeln!(out, "Student Id       : {}", display_or_none(&record.stud_id))?;
    writeln!(out, "Student Name     : {}", record.full_name())?;
    writeln!(out, "Department       : {}", display_or_none(&record.dept))?;
    writeln!(out, "Age              : {}", display_or_none(&record.age))?;
    writeln!(out, "{SEPARATOR}")
}

pub fn write_completion(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{COMPLETION_LINE}")
}

pub fn write_seeding_started(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{SEEDING_LINE}")
}

pub fn write_seeder_secret_proof(out: &mut dyn Write, metadata: &SecretMetadata) -> io::Result<()> {
    if metadata.retrieved {
        writeln!(
            out,
            "Secrets Manager: GetSecretValue succeeded (secret value not logged)."
        )?;
        writeln!(
            out,
            "Secret JSON keys (sample): {}",
            key_sample(&metadata.keys_present)
        )
    } else {
        writeln!(out, "Secrets Manager: demo secret retrieval skipped/failed.")?;
        writeln!(out, "Details: {}", metadata.details().unwrap_or("unknown"))
    }
}

pub fn write_seeding_completed(
    out: &mut dyn Write,
    records_written: usize,
    table: &str,
) -> io::Result<()> {
    writeln!(out, "{}", seeded_message(records_written, table))
}

fn key_sample(keys: &[String]) -> String {
    format!("[{}]", keys.join(", "))
}
