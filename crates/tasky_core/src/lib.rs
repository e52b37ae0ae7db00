pub mod config;
pub mod error;
pub mod model;
pub mod storage;
pub mod store;
pub mod task_api;

pub use error::AppError;
pub use model::{Priority, Task};
pub use store::TaskStore;
