mod priority;
mod task;

pub use priority::Priority;
pub use task::Task;
