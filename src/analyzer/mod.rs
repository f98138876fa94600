//! Version selection and release-line analysis

pub mod release_analyzer;

pub use release_analyzer::{MajorMinorGroup, ReleaseAnalyzer};
