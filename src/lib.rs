pub mod config;
pub mod database;
pub mod loading_state;
pub mod models;
pub mod screens;
pub mod seeds;
pub mod services;
pub mod utils;
