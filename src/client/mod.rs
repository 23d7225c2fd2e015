pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod form;
pub mod guard;
pub mod router;
pub mod routes;
pub mod storage;
pub mod store;

pub use app::App;
