pub mod hello;
pub mod invoke;
