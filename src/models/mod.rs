pub mod task;

pub use task::{
    CreateTaskRequest, DeleteTaskResponse, Task, TaskIdRequest, TaskStatus, UpdateTaskRequest,
};
