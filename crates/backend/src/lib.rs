pub mod analytics;
pub mod api;
pub mod config;
pub mod dashboards;
pub mod error_convert;
pub mod session;

pub use analytics::{load_analytics, AnalyticsLoad, AnalyticsSource};
pub use api::ApiClient;
pub use dashboards::{load_admin_data, load_department_queue, AdminData, MISSING_DEPARTMENT};
pub use session::{MemoryStorage, SessionStore, StorageBackend};
