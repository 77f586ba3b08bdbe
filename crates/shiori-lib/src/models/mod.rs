pub mod status;
pub use status::*;

pub mod manga_record;
pub use manga_record::*;

pub mod manga_info;
pub use manga_info::*;
