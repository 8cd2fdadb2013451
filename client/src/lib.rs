pub mod api_service;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod state;
pub mod view;

pub use api_service::RagApiService;
pub use config::ClientConfig;
pub use controller::{Controller, Submission};
pub use error::{ClientError, Result};
pub use models::*;
pub use state::{reduce, Event, Notice, RequestKind, ViewState};
pub use view::render;
