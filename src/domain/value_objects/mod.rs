pub mod market;
pub mod price;
pub mod time_window;
