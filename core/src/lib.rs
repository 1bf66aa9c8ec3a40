pub mod error;
pub mod handler;
pub mod model;
pub mod request;
pub use anyhow::Result;
pub use anyhow::Error;
pub use anyhow::anyhow as anyhow;
