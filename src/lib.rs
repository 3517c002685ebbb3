pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod profile;
pub mod scenes;
pub mod session;
pub mod state;
pub mod store;
pub mod ui;

pub use app::router;
pub use config::AppConfig;
pub use metrics::compute_life_metrics;
pub use models::{LifeMetrics, ProfileForm, SceneBucket, UserProfile};
pub use profile::{validate_profile, ValidationError, ValidationErrors};
pub use state::AppState;
pub use store::UserStore;
