//! Campus Notify core: alert kinds, simulated delivery channels, the type
//! registry and the in-memory history the web front-end works against.

pub mod alert;
pub mod channel;
pub mod demo;
pub mod emergency;
pub mod error;
pub mod fields;
pub mod history;
pub mod priority;
pub mod registry;
pub mod users;
pub mod wrappers;

pub use alert::{Alert, AlertKind};
pub use channel::{Channel, ChannelKind, MemorySink, OutputSink, StdoutSink};
pub use demo::{run_demonstrations, DemoResult};
pub use emergency::EmergencyNotifier;
pub use error::{AlertError, AuthError, RetryError, ValidationError};
pub use fields::{Email, UserNotification};
pub use history::{History, HistoryStats, NotificationRecord};
pub use priority::Priority;
pub use registry::{Registry, RegistryEntry};
pub use users::{User, UserTable};
