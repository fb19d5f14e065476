pub mod assets;
pub mod dates;
pub mod views;
