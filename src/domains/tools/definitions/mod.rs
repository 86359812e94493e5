//! Tool definitions module.
//!
//! This module exports all available tool definitions, grouped by service.
//! Each tool is defined in its own file for better maintainability.

pub mod dictionary;
pub mod news;
pub mod todo;

pub use dictionary::{
    FullInfoTool, MeaningTool, MeaningsOfStemsTool, PartOfSpeechTool, PronunciationsTool,
    StemInfoTool, StemsTool,
};
pub use news::{EverythingTool, ListSourcesTool, TopHeadlinesTool};
pub use todo::{AddTaskTool, DeleteTaskTool, ListTasksTool, ModifyTaskTool};
