pub mod credential_store;
pub mod item_fetcher;

pub use credential_store::CredentialStore;
pub use item_fetcher::{FetchedItems, ItemFetcher, SectionReport, SectionStatus};
