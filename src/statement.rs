use std::io::Write;

use anyhow::Context;
use csv::WriterBuilder;
use rust_decimal::Decimal;
use serde::Serialize;

/// One statement line.
#[derive(Debug, Serialize)]
pub struct AccountSummary {
    pub owner: String,
    pub balance: Decimal,
    pub bank: String,
}

const HEADER: [&str; 3] = ["owner", "balance", "bank"];

/// Writes `accounts` as CSV under an `owner,balance,bank` header. The header
/// is written even when there are no accounts.
pub fn print_statement<W>(
    output: &mut W,
    accounts: impl Iterator<Item = AccountSummary>,
) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(output);
    writer
        .write_record(HEADER)
        .context("Failed to write statement header")?;
    for (line, acc) in accounts.enumerate() {
        writer.serialize(&acc).with_context(|| {
            format!("Failed to write statement line {} ({})", line + 1, acc.owner)
        })?;
    }
    writer.flush().context("Failed to flush statement")?;
    Ok(())
}
