#[macro_use(get, post)]
extern crate actix_web;

pub mod config;
pub mod controllers;
pub mod database;
pub mod entities;
pub mod errors;
pub mod logging;
pub mod middlewares;
pub mod models;
pub mod requests;
pub mod responses;
pub mod router;
pub mod security;
pub mod server;
pub mod services;

// Testing utilities (always available for integration tests)
pub mod testing;

pub use config::Config;
pub use database::{ConnectionPair, Connections};
pub use errors::Error;
pub use server::{Application, Listener};
