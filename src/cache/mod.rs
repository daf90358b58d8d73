//! On-disk response cache for recording and replaying HTTP interactions.
//!
//! Every interaction is stored as one JSON file per URL. The file name is
//! the URL with `%`, `:` and `/` escaped, see [`key::safe_filename`].

pub mod format;
pub mod key;
pub mod response;
pub mod store;

pub use format::CachedInteraction;
pub use key::safe_filename;
pub use response::CachedResponse;
pub use store::CacheStore;
