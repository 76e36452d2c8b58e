pub mod app;
pub mod config;
pub mod core;
pub mod input;
pub mod logging;
pub mod storage;
pub mod terminal;
pub mod ui;

pub use crate::core::controller;
pub use crate::core::event;
pub use crate::core::field;
pub use crate::core::form_data;
pub use crate::core::ticket;
pub use crate::core::validation;

pub use input::text_input;
pub use input::validators;

pub use storage::persistence;
