mod frame;
mod prediction;
mod routes;
mod server;
mod toy_model;
mod vocabulary;

pub mod app;
pub mod config;

pub use app::start_app;
