pub mod config;
pub mod content;
pub mod domain;
pub mod exercise;
pub mod practice;
pub mod selector;
pub mod session;
pub mod srs;
pub mod store;

pub use domain::{Category, ReviewRecord};
pub use practice::PracticeService;
