pub mod countdown;
pub mod seasons;
pub mod table_window;
