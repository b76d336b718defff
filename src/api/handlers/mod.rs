pub mod health;
pub mod hello_world;
pub mod invoke;
