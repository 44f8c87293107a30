// Health and service information module

pub mod controllers;

pub use controllers::configure;
