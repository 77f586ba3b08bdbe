pub use crate::error::Error;
pub use crate::models::{MangaInfo, MangaRecord, MangaStatus, Originals};
