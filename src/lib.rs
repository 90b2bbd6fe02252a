pub mod app;
pub mod config;
pub mod domain;
pub mod engine;
pub mod prelude;
pub mod storage;
