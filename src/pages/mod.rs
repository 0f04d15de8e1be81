//! Page components, one module per routed screen.

pub mod calendar;
pub mod cards;
pub mod forgot_password;
pub mod login;
pub mod notes;
pub mod preferences;
pub mod profile;
pub mod route_error;
pub mod sandbox;
pub mod settings;
pub mod signup;
pub mod splash;
pub mod subscription;
pub mod todo;
pub mod whiteboard;
