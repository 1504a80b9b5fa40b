pub mod config;
pub mod error;
pub mod lexicon;
pub mod middleware;
pub mod ml;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
