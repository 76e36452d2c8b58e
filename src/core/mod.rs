pub mod controller;
pub mod event;
pub mod field;
pub mod form_data;
pub mod ticket;
pub mod validation;

pub use controller::{FormController, Phase};
pub use event::{Action, FormEvent};
pub use field::Field;
pub use form_data::FormData;
pub use ticket::Ticket;
pub use validation::{ErrorMap, FormValidator, validate};
