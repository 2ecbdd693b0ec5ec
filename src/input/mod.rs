//! Input handling: résumé file detection and loading

pub mod file_detector;
pub mod loader;

pub use file_detector::ResumeFormat;
pub use loader::{load_resume, ResumeUpload};
