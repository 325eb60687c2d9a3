pub mod api;
pub mod dashboard;
pub mod demo;
pub mod health;
pub mod home;
pub mod login;
pub mod send;

pub use api::api_send;
pub use dashboard::dashboard;
pub use demo::demo_poo;
pub use health::health_check;
pub use home::index;
pub use login::{login_form, login_submit};
pub use send::{send_form, send_submit};
