use serde::{Deserialize, Serialize};

use crate::{GENRE_DELIMITER, models::MangaStatus};

/// Source values of a record, kept apart from the live fields the user
/// may edit. `None` here means the source had no value for that field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Originals {
    pub title: String,
    pub author: Option<String>,
    pub artist: Option<String>,
    pub description: Option<String>,
    pub genre: Option<String>,
}

/// Bibliographic metadata of one series as known to the library.
///
/// When `originals` is tracked it holds the values as fetched from the
/// source, while the live fields hold what the user sees (and may have
/// edited). Untracked originals are the live values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MangaRecord {
    pub url: String,
    pub title: String,
    pub author: Option<String>,
    pub artist: Option<String>,
    pub description: Option<String>,
    /// Genres joined with `", "`.
    pub genre: Option<String>,
    pub status: MangaStatus,
    pub thumbnail_url: Option<String>,
    /// Whether the record was ever populated from a source.
    pub initialized: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub originals: Option<Originals>,
}

fn or_current<'a>(
    original: Option<&'a Option<String>>,
    current: &'a Option<String>,
) -> Option<&'a str> {
    original
        .and_then(|original| original.as_deref())
        .or(current.as_deref())
}

impl MangaRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn original_title(&self) -> &str {
        self.originals
            .as_ref()
            .map(|originals| originals.title.as_str())
            .unwrap_or(&self.title)
    }

    // A source without a value for the field falls back to the live one,
    // so a merge never clears a field because of a missing original.
    pub fn original_author(&self) -> Option<&str> {
        or_current(self.originals.as_ref().map(|o| &o.author), &self.author)
    }

    pub fn original_artist(&self) -> Option<&str> {
        or_current(self.originals.as_ref().map(|o| &o.artist), &self.artist)
    }

    pub fn original_description(&self) -> Option<&str> {
        or_current(
            self.originals.as_ref().map(|o| &o.description),
            &self.description,
        )
    }

    pub fn original_genre(&self) -> Option<&str> {
        or_current(self.originals.as_ref().map(|o| &o.genre), &self.genre)
    }

    /// Splits the genre string, keeping order and duplicates.
    pub fn genres(&self) -> Vec<&str> {
        self.genre
            .as_deref()
            .map(|genre| genre.split(GENRE_DELIMITER).collect())
            .unwrap_or_default()
    }

    pub fn set_genres<I, S>(&mut self, genres: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let genres: Vec<String> = genres
            .into_iter()
            .map(|genre| genre.as_ref().to_owned())
            .collect();
        self.genre = Some(genres.join(GENRE_DELIMITER));
    }

    /// Updates `self` with whatever `other` knows, preferring the source
    /// values of `other` over its edited ones.
    ///
    /// Blank titles and missing optional fields of `other` never clear a
    /// value of `self`. Status always follows `other`, and `initialized`
    /// only ever goes from `false` to `true`. Tracked originals of `self`
    /// receive every value written, since they come from the source too.
    pub fn merge_from(&mut self, other: &MangaRecord) {
        if !other.title.trim().is_empty() {
            self.title = other.original_title().to_string();
            if let Some(originals) = self.originals.as_mut() {
                originals.title.clone_from(&self.title);
            }
        }

        if other.author.is_some() {
            self.author = other.original_author().map(str::to_string);
            if let Some(originals) = self.originals.as_mut() {
                originals.author.clone_from(&self.author);
            }
        }

        if other.artist.is_some() {
            self.artist = other.original_artist().map(str::to_string);
            if let Some(originals) = self.originals.as_mut() {
                originals.artist.clone_from(&self.artist);
            }
        }

        if other.description.is_some() {
            self.description = other.original_description().map(str::to_string);
            if let Some(originals) = self.originals.as_mut() {
                originals.description.clone_from(&self.description);
            }
        }

        if other.genre.is_some() {
            self.genre = other.original_genre().map(str::to_string);
            if let Some(originals) = self.originals.as_mut() {
                originals.genre.clone_from(&self.genre);
            }
        }

        if other.thumbnail_url.is_some() {
            self.thumbnail_url.clone_from(&other.thumbnail_url);
        }

        self.status = other.status;

        if !self.initialized {
            self.initialized = other.initialized;
        }

        log::trace!(
            "merged {} into {}, status {}, initialized {}",
            other.url,
            self.url,
            self.status,
            self.initialized
        );
    }

    /// Records the current values as source originals, absent ones
    /// included. Does nothing when originals are already tracked.
    pub fn track_originals(&mut self) {
        if self.originals.is_none() {
            self.originals = Some(Originals {
                title: self.title.clone(),
                author: self.author.clone(),
                artist: self.artist.clone(),
                description: self.description.clone(),
                genre: self.genre.clone(),
            });
        }
    }

    /// Drops user edits: the live fields go back to the tracked originals,
    /// which stop being tracked.
    pub fn reset_to_originals(&mut self) {
        if let Some(originals) = self.originals.take() {
            self.title = originals.title;
            self.author = originals.author;
            self.artist = originals.artist;
            self.description = originals.description;
            self.genre = originals.genre;
        }
    }

    pub fn is_edited(&self) -> bool {
        match &self.originals {
            Some(originals) => {
                originals.title != self.title
                    || originals.author != self.author
                    || originals.artist != self.artist
                    || originals.description != self.description
                    || originals.genre != self.genre
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn record(title: &str) -> MangaRecord {
        MangaRecord {
            url: "/manga/1".to_string(),
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_record_is_empty() {
        let manga = MangaRecord::new();

        assert_eq!("", manga.url);
        assert_eq!("", manga.title);
        assert_eq!(None, manga.author);
        assert_eq!(None, manga.genre);
        assert_eq!(MangaStatus::Unknown, manga.status);
        assert!(!manga.initialized);
    }

    #[test]
    fn test_originals_default_to_current() {
        let mut manga = record("Berserk");
        manga.author = Some("Kentaro Miura".to_string());

        assert_eq!("Berserk", manga.original_title());
        assert_eq!(Some("Kentaro Miura"), manga.original_author());
        assert_eq!(None, manga.original_artist());
        assert!(!manga.is_edited());

        manga.originals = Some(Originals {
            title: "Beruseruku".to_string(),
            ..Default::default()
        });
        assert_eq!("Beruseruku", manga.original_title());
        assert_eq!(Some("Kentaro Miura"), manga.original_author());
    }

    #[test]
    fn test_merge_blank_title_keeps_title() {
        let mut manga = record("Old");
        manga.status = MangaStatus::Ongoing;

        let other = MangaRecord {
            title: "".to_string(),
            author: Some("New".to_string()),
            status: MangaStatus::Completed,
            ..Default::default()
        };

        manga.merge_from(&other);

        assert_eq!("Old", manga.title);
        assert_eq!(Some("New".to_string()), manga.author);
        assert_eq!(MangaStatus::Completed, manga.status);
    }

    #[test]
    fn test_merge_whitespace_title_keeps_title() {
        let mut manga = record("Old");
        manga.merge_from(&record(" \t\n"));

        assert_eq!("Old", manga.title);
    }

    #[test]
    fn test_merge_prefers_original_values() {
        let mut manga = record("Old");

        let other = MangaRecord {
            title: "Edited title".to_string(),
            author: Some("Edited author".to_string()),
            artist: Some("Edited artist".to_string()),
            description: Some("Edited description".to_string()),
            genre: Some("Action".to_string()),
            thumbnail_url: Some("https://example.com/cover.jpg".to_string()),
            originals: Some(Originals {
                title: "Source title".to_string(),
                author: Some("Source author".to_string()),
                artist: Some("Source artist".to_string()),
                description: Some("Source description".to_string()),
                genre: Some("Action, Drama".to_string()),
            }),
            ..Default::default()
        };

        manga.merge_from(&other);

        assert_eq!("Source title", manga.title);
        assert_eq!(Some("Source author".to_string()), manga.author);
        assert_eq!(Some("Source artist".to_string()), manga.artist);
        assert_eq!(Some("Source description".to_string()), manga.description);
        assert_eq!(Some("Action, Drama".to_string()), manga.genre);
        assert_eq!(
            Some("https://example.com/cover.jpg".to_string()),
            manga.thumbnail_url
        );
    }

    #[test]
    fn test_merge_absent_original_falls_back_to_live_value() {
        let mut manga = record("Old");
        manga.artist = Some("Old artist".to_string());

        let other = MangaRecord {
            title: "New".to_string(),
            artist: Some("New artist".to_string()),
            description: Some("New description".to_string()),
            originals: Some(Originals {
                title: "New".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };

        manga.merge_from(&other);

        assert_eq!(Some("New artist".to_string()), manga.artist);
        assert_eq!(Some("New description".to_string()), manga.description);
    }

    #[test]
    fn test_merge_none_never_clears() {
        let mut manga = record("Old");
        manga.author = Some("Author".to_string());
        manga.artist = Some("Artist".to_string());
        manga.description = Some("Description".to_string());
        manga.genre = Some("Action".to_string());
        manga.thumbnail_url = Some("https://example.com/cover.jpg".to_string());
        let before = manga.clone();

        manga.merge_from(&MangaRecord::new());

        assert_eq!(before.title, manga.title);
        assert_eq!(before.author, manga.author);
        assert_eq!(before.artist, manga.artist);
        assert_eq!(before.description, manga.description);
        assert_eq!(before.genre, manga.genre);
        assert_eq!(before.thumbnail_url, manga.thumbnail_url);
    }

    #[test]
    fn test_merge_empty_string_overwrites() {
        let mut manga = record("Old");
        manga.description = Some("Long description".to_string());

        let other = MangaRecord {
            description: Some("".to_string()),
            thumbnail_url: Some("".to_string()),
            ..Default::default()
        };
        manga.merge_from(&other);

        assert_eq!(Some("".to_string()), manga.description);
        assert_eq!(Some("".to_string()), manga.thumbnail_url);
    }

    #[test]
    fn test_merge_status_always_follows_other() {
        let mut manga = record("Old");
        manga.status = MangaStatus::Hiatus;

        manga.merge_from(&MangaRecord::new());

        assert_eq!(MangaStatus::Unknown, manga.status);
    }

    #[test]
    fn test_merge_initialized_is_sticky() {
        let mut manga = record("Old");

        manga.merge_from(&MangaRecord {
            initialized: true,
            ..Default::default()
        });
        assert!(manga.initialized);

        manga.merge_from(&MangaRecord::new());
        assert!(manga.initialized);
    }

    #[test]
    fn test_genres() {
        let mut manga = record("Old");
        assert!(manga.genres().is_empty());

        manga.set_genres(["Action", "Comedy", "Action"]);
        assert_eq!(Some("Action, Comedy, Action".to_string()), manga.genre);
        assert_eq!(vec!["Action", "Comedy", "Action"], manga.genres());

        manga.set_genres(Vec::<String>::new());
        assert_eq!(Some("".to_string()), manga.genre);
    }

    #[test]
    fn test_track_and_reset_originals() {
        let mut manga = record("Source title");
        manga.author = Some("Source author".to_string());
        manga.track_originals();
        assert!(!manga.is_edited());

        manga.title = "My title".to_string();
        manga.author = None;
        assert!(manga.is_edited());
        assert_eq!("Source title", manga.original_title());

        manga.track_originals();
        assert_eq!("Source title", manga.original_title());

        manga.reset_to_originals();
        assert_eq!("Source title", manga.title);
        assert_eq!(Some("Source author".to_string()), manga.author);
        assert_eq!(None, manga.originals);
        assert!(!manga.is_edited());
    }

    #[test]
    fn test_user_filled_field_is_an_edit() {
        let mut manga = record("Source title");
        manga.track_originals();

        manga.author = Some("User added".to_string());
        assert!(manga.is_edited());

        manga.reset_to_originals();
        assert_eq!(None, manga.author);
        assert!(!manga.is_edited());
    }

    #[test]
    fn test_merge_refreshes_tracked_originals() {
        let mut manga = record("Source A");
        manga.genre = Some("Action".to_string());
        manga.track_originals();

        let other = MangaRecord {
            title: "Source B".to_string(),
            genre: Some("Action, Drama".to_string()),
            ..Default::default()
        };
        manga.merge_from(&other);

        assert_eq!("Source B", manga.title);
        assert_eq!("Source B", manga.original_title());
        assert_eq!(Some("Action, Drama"), manga.original_genre());
        assert!(!manga.is_edited());

        manga.reset_to_originals();
        assert_eq!("Source B", manga.title);
        assert_eq!(Some("Action, Drama".to_string()), manga.genre);
    }

    #[test]
    fn test_merge_keeps_untouched_edits() {
        let mut manga = record("Source title");
        manga.description = Some("Source description".to_string());
        manga.track_originals();
        manga.description = Some("My notes".to_string());

        manga.merge_from(&record("Source title"));

        assert_eq!(Some("My notes".to_string()), manga.description);
        assert!(manga.is_edited());

        manga.reset_to_originals();
        assert_eq!(Some("Source description".to_string()), manga.description);
    }
}
