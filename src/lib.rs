pub mod app;
pub mod config;
pub mod errors;
pub mod forms;
pub mod handlers;
pub mod ids;
pub mod metrics;
pub mod models;
pub mod stats;
pub mod storage;
pub mod trend;
pub mod ui;
pub mod state;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::{StateStore, load_state};
