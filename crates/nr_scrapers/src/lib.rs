pub mod fetcher;
pub mod page;
pub mod search;

pub use fetcher::HttpFetcher;
pub use page::extract_page;
pub use search::SearxSearch;

pub mod prelude {
    pub use super::{HttpFetcher, SearxSearch};
    pub use nr_core::{PageText, Result, Error, SearchProvider, TextFetcher};
}
