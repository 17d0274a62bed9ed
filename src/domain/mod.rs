pub mod chapter;
pub mod listing;
pub mod manga;
pub mod page;

pub use chapter::ChapterEntry;
pub use listing::ListingPage;
pub use manga::{MangaDetails, MangaSummary};
pub use page::PageImage;
