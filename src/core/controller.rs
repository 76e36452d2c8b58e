use crate::core::event::{Action, FormEvent};
use crate::core::field::Field;
use crate::core::form_data::FormData;
use crate::core::ticket::Ticket;
use crate::core::validation::{ErrorMap, FormValidator};
use crate::storage::Persistence;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    TicketDisplayed,
}

/// Owns the form values and the results of the most recent submit.
///
/// Errors and the ticket only change on [`FormController::submit`]; editing a
/// field after a successful submit leaves the previous ticket in place.
pub struct FormController {
    form: FormData,
    errors: ErrorMap,
    ticket: Option<Ticket>,
    validator: FormValidator,
    persistence: Persistence,
}

impl FormController {
    pub fn new(persistence: Persistence) -> Self {
        Self::with_validator(persistence, FormValidator::standard())
    }

    pub fn with_validator(persistence: Persistence, validator: FormValidator) -> Self {
        Self {
            form: FormData::default(),
            errors: ErrorMap::new(),
            ticket: None,
            validator,
            persistence,
        }
    }

    /// Rehydrates from the persisted slot; absent or unreadable data keeps the
    /// empty default.
    pub fn load_initial(&mut self) {
        if let Some(form) = self.persistence.load() {
            tracing::debug!(key = %self.persistence.key(), "restored persisted form data");
            self.form = form;
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
        self.persistence.save(&self.form);
    }

    pub fn submit(&mut self) -> Result<&Ticket, &ErrorMap> {
        let errors = self.validator.validate(&self.form);
        if errors.is_empty() {
            self.errors.clear();
            let ticket = self.ticket.insert(Ticket::from(&self.form));
            tracing::info!("ticket generated");
            Ok(ticket)
        } else {
            tracing::debug!(failed = errors.len(), "submission rejected");
            self.errors = errors;
            self.ticket = None;
            Err(&self.errors)
        }
    }

    pub fn dispatch(&mut self, action: Action) -> Vec<FormEvent> {
        match action {
            Action::SetField { field, value } => {
                self.set_field(field, value.clone());
                vec![FormEvent::FieldChanged { field, value }]
            }
            Action::Submit => match self.submit() {
                Ok(ticket) => vec![FormEvent::TicketIssued {
                    ticket: ticket.clone(),
                }],
                Err(errors) => vec![FormEvent::SubmitRejected {
                    errors: errors.clone(),
                }],
            },
        }
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn ticket(&self) -> Option<&Ticket> {
        self.ticket.as_ref()
    }

    pub fn phase(&self) -> Phase {
        if self.ticket.is_some() {
            Phase::TicketDisplayed
        } else {
            Phase::Editing
        }
    }

    pub fn persistence(&self) -> &Persistence {
        &self.persistence
    }
}
