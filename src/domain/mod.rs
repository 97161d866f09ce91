pub mod item;
pub mod progress;

pub use item::Category;
pub use progress::{ReviewRecord, progress_key};
