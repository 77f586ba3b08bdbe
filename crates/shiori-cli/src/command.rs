use std::{
    io::{Read, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Subcommand;
use serde::{Serialize, de::DeserializeOwned};
use shiori_lib::prelude::{MangaInfo, MangaRecord, MangaStatus};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Merge OTHER into BASE and print the updated record
    Merge { base: PathBuf, other: PathBuf },
    /// Print the normalized snapshot of a record
    ToInfo { record: PathBuf },
    /// Build a record from a normalized snapshot
    FromInfo { info: PathBuf },
    /// Resolve a status name or code
    Status { value: String },
}

impl Command {
    pub fn execute<W: Write>(self, pretty: bool, out: &mut W) -> Result<()> {
        match self {
            Command::Merge { base, other } => {
                let mut manga: MangaRecord = read_json(&base)?;
                let other: MangaRecord = read_json(&other)?;
                manga.merge_from(&other);
                write_json(out, &manga, pretty)
            }
            Command::ToInfo { record } => {
                let manga: MangaRecord = read_json(&record)?;
                write_json(out, &manga.to_info(), pretty)
            }
            Command::FromInfo { info } => {
                let info: MangaInfo = read_json(&info)?;
                write_json(out, &MangaRecord::from_info(info), pretty)
            }
            Command::Status { value } => {
                let status: MangaStatus = value.parse()?;
                writeln!(out, "{} {}", status.code(), status)?;
                Ok(())
            }
        }
    }
}

/// Reads a JSON document from `path`, `-` being stdin.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let mut buf = String::new();
    if path == Path::new("-") {
        std::io::stdin().read_to_string(&mut buf)?;
    } else {
        buf = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
    }

    debug!("read {} bytes from {}", buf.len(), path.display());

    serde_json::from_str(&buf).with_context(|| format!("invalid json in {}", path.display()))
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;

    Ok(())
}
