//! Domain logic - pure version and tag rules independent of the remote host

pub mod tag;
pub mod version;

pub use tag::{Tag, VersionClass};
pub use version::Version;
