pub mod content;
pub mod poll;
pub mod redis;
pub mod settings;
