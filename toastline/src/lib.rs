pub mod config;
pub mod error;
pub mod events;
pub mod host;
pub mod manager;
pub mod record;

pub use config::ToastTimings;
pub use error::ToastError;
pub use events::ToastEvent;
pub use host::{ToastHandle, ToastHost};
pub use manager::ToastManager;
pub use record::{Phase, ToastId, ToastKind, ToastRecord, ToastSpec};
