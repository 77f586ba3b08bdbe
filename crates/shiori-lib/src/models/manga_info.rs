use serde::{Deserialize, Serialize};

use crate::{
    GENRE_DELIMITER,
    models::{MangaRecord, MangaStatus},
};

/// A type represent manga details, normalized across source
///
/// Exchanged with sources and the persistence layer, so it never holds
/// missing values: absent text is an empty string, absent genres an
/// empty list. `status` is the integer code and only the codes of
/// [`MangaStatus`] are accepted, so deserializing any other value fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MangaInfo {
    pub key: String,
    pub title: String,
    pub artist: String,
    pub author: String,
    pub description: String,
    pub genres: Vec<String>,
    pub status: MangaStatus,
    pub cover: String,
}

impl MangaRecord {
    pub fn to_info(&self) -> MangaInfo {
        log::debug!("normalizing {}", self.url);

        MangaInfo {
            key: self.url.clone(),
            title: self.title.clone(),
            artist: self.artist.clone().unwrap_or_default(),
            author: self.author.clone().unwrap_or_default(),
            description: self.description.clone().unwrap_or_default(),
            genres: self.genres().into_iter().map(str::to_string).collect(),
            status: self.status,
            cover: self.thumbnail_url.clone().unwrap_or_default(),
        }
    }

    /// Builds a fresh, uninitialized record from a transport snapshot.
    ///
    /// Empty strings are kept as `Some("")`, so a record that went through
    /// [`MangaRecord::to_info`] with missing fields does not come back
    /// identical.
    pub fn from_info(info: MangaInfo) -> Self {
        log::debug!("building record for {}", info.key);

        Self {
            url: info.key,
            title: info.title,
            artist: Some(info.artist),
            author: Some(info.author),
            description: Some(info.description),
            genre: Some(info.genres.join(GENRE_DELIMITER)),
            status: info.status,
            thumbnail_url: Some(info.cover),
            ..Default::default()
        }
    }
}

impl From<&MangaRecord> for MangaInfo {
    fn from(manga: &MangaRecord) -> Self {
        manga.to_info()
    }
}

impl From<MangaInfo> for MangaRecord {
    fn from(info: MangaInfo) -> Self {
        MangaRecord::from_info(info)
    }
}
