pub mod serve_controller;
pub mod verify_controller;

pub use serve_controller::ServeController;
pub use verify_controller::VerifyController;
