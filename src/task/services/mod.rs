//! Orchestration services for the task board.

pub mod board;

pub use board::{
    CreateTaskRequest, TaskBoardError, TaskBoardResult, TaskBoardService, UpdateTaskRequest,
};
