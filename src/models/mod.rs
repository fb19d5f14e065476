pub mod article;
pub mod mapping;
pub mod matches;
pub mod season;
pub mod team;
