use crate::core::field::Field;
use crate::core::ticket::Ticket;
use crate::core::validation::ErrorMap;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetField { field: Field, value: String },
    Submit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    FieldChanged { field: Field, value: String },
    SubmitRejected { errors: ErrorMap },
    TicketIssued { ticket: Ticket },
}
