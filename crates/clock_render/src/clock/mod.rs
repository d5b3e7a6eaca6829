pub mod controller;
pub mod source;
pub mod time;
