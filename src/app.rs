use crate::core::controller::FormController;
use crate::core::event::{Action, FormEvent};
use crate::core::field::Field;
use crate::input::{KeyResult, TextInput};
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers, Terminal};
use crate::ui::frame::Frame;
use crate::ui::view;
use std::io;

/// Terminal front end for the ticket form: routes keys into the focused
/// field and forwards value changes and submits to the controller.
pub struct App {
    controller: FormController,
    inputs: Vec<TextInput>,
    focus: Field,
    should_exit: bool,
}

impl App {
    pub fn new(controller: FormController) -> Self {
        let inputs = Field::ALL
            .into_iter()
            .map(|field| TextInput::new().with_value(controller.form().get(field)))
            .collect();

        Self {
            controller,
            inputs,
            focus: Field::FullName,
            should_exit: false,
        }
    }

    pub fn controller(&self) -> &FormController {
        &self.controller
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<FormEvent> {
        match key.code {
            KeyCode::Esc => {
                self.should_exit = true;
                return vec![];
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_exit = true;
                return vec![];
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                return vec![];
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev();
                return vec![];
            }
            _ => {}
        }

        let input = &mut self.inputs[self.focus.index()];
        let before = input.value().to_string();
        let result = input.handle_key(key.code, key.modifiers);
        let after = input.value();

        let mut events = Vec::new();
        if before != after {
            events.extend(self.controller.dispatch(Action::SetField {
                field: self.focus,
                value: after.to_string(),
            }));
        }
        if result == KeyResult::Submit {
            events.extend(self.controller.dispatch(Action::Submit));
        }
        events
    }

    pub fn frame(&self) -> Frame {
        let cursor = self.inputs[self.focus.index()].cursor_offset();
        view::render(&self.controller, self.focus, cursor)
    }

    pub fn render(&self, terminal: &mut Terminal) -> io::Result<()> {
        terminal.draw(&self.frame())
    }
}
