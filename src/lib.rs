pub mod app;
pub mod config;
pub mod db;
pub mod observability;

pub use app::App;
pub use db::{create_pool, run_migrations};
