use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Publication status of a series.
///
/// The discriminants are the integer codes exchanged with sources and
/// persisted alongside the record, `61..=63` being the extended statuses
/// reported by MangaDex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
#[repr(i32)]
pub enum MangaStatus {
    #[default]
    Unknown = 0,
    Ongoing = 1,
    Completed = 2,
    Licensed = 3,
    PublicationComplete = 61,
    Cancelled = 62,
    Hiatus = 63,
}

impl MangaStatus {
    pub const ALL: [MangaStatus; 7] = [
        MangaStatus::Unknown,
        MangaStatus::Ongoing,
        MangaStatus::Completed,
        MangaStatus::Licensed,
        MangaStatus::PublicationComplete,
        MangaStatus::Cancelled,
        MangaStatus::Hiatus,
    ];

    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        match self {
            MangaStatus::Unknown => "unknown",
            MangaStatus::Ongoing => "ongoing",
            MangaStatus::Completed => "completed",
            MangaStatus::Licensed => "licensed",
            MangaStatus::PublicationComplete => "publication_complete",
            MangaStatus::Cancelled => "cancelled",
            MangaStatus::Hiatus => "hiatus",
        }
    }
}

impl TryFrom<i32> for MangaStatus {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        MangaStatus::ALL
            .into_iter()
            .find(|status| status.code() == code)
            .ok_or(Error::UnknownStatus(code))
    }
}

impl From<MangaStatus> for i32 {
    fn from(status: MangaStatus) -> Self {
        status.code()
    }
}

impl FromStr for MangaStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<i32>() {
            return MangaStatus::try_from(code)
                .map_err(|_| Error::InvalidStatus(s.to_string()));
        }

        MangaStatus::ALL
            .into_iter()
            .find(|status| status.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidStatus(s.to_string()))
    }
}

impl fmt::Display for MangaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
