mod sync;

#[cfg(feature = "tokio")]
mod tokio;

pub use sync::{ClefFileReader, ClefReader};

#[cfg(feature = "tokio")]
pub use self::tokio::AsyncClefReader;
