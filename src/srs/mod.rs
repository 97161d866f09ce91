pub mod scheduler;
pub mod sm2;

pub use scheduler::ReviewScheduler;
pub use sm2::{Sm2Result, calculate_review};
