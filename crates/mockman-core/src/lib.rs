pub mod app;
pub mod buttons;
pub mod builder;
pub mod clock;
pub mod codegen;
pub mod config;
pub mod design_system;
pub mod generation;
pub mod ids;
pub mod import;
pub mod overview;
pub mod preview;
pub mod routes;
pub mod storage;
pub mod tokens;
pub mod typography;
pub mod user;
