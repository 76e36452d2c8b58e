use crate::core::controller::FormController;
use crate::core::field::Field;
use crate::core::ticket::Ticket;
use crate::ui::frame::{Frame, Line};
use crate::ui::span::Span;
use crate::ui::style::{Color, Style};

pub const TITLE: &str = "Conference Ticket Generator";
pub const TICKET_HEADING: &str = "Your Conference Ticket";
pub const SUBMIT_LABEL: &str = "[ Generate Ticket ]";
const HINTS: &str = "Enter: generate  Tab/Shift-Tab: switch field  Esc: quit";
const FOCUS_MARKER: &str = "> ";
const BLUR_MARKER: &str = "  ";

/// Lays out the form, its inline errors and the ticket card (if any).
/// The cursor is placed inside the focused field at `cursor_offset` columns.
pub fn render(controller: &FormController, focus: Field, cursor_offset: usize) -> Frame {
    let mut frame = Frame::new();
    frame.push_line(Line::from_spans([Span::styled(TITLE, Style::new().bold())]));
    frame.blank_line();

    for field in Field::ALL {
        render_field(&mut frame, controller, field, field == focus, cursor_offset);
    }

    frame.push_line(Line::from_spans([
        Span::styled(SUBMIT_LABEL, Style::new().color(Color::Cyan).bold()),
        Span::new("  "),
        Span::styled(HINTS, Style::new().dim()),
    ]));

    if let Some(ticket) = controller.ticket() {
        frame.blank_line();
        render_ticket(&mut frame, ticket);
    }

    frame
}

fn render_field(
    frame: &mut Frame,
    controller: &FormController,
    field: Field,
    focused: bool,
    cursor_offset: usize,
) {
    frame.push_line(Line::from_spans([
        Span::styled(field.label(), Style::new().bold()),
        Span::styled(" *", Style::new().color(Color::Red)),
    ]));

    let marker = if focused { FOCUS_MARKER } else { BLUR_MARKER };
    let value = controller.form().get(field);
    if focused {
        frame.set_cursor(marker.len() + cursor_offset, frame.next_row());
    }
    frame.push_line(Line::from_spans([
        Span::styled(marker, Style::new().color(Color::Cyan)),
        Span::new(value),
    ]));

    if let Some(error) = controller.error_for(field) {
        frame.push_line(Line::from_spans([
            Span::new(BLUR_MARKER),
            Span::styled(error, Style::new().color(Color::Red)),
        ]));
    }
    frame.blank_line();
}

fn render_ticket(frame: &mut Frame, ticket: &Ticket) {
    let label = Style::new().bold();
    frame.push_line(Line::from_spans([Span::styled(
        TICKET_HEADING,
        Style::new().color(Color::Green).bold(),
    )]));
    frame.push_line(Line::from_spans([
        Span::styled("  Name:   ", label),
        Span::new(ticket.full_name()),
    ]));
    frame.push_line(Line::from_spans([
        Span::styled("  Email:  ", label),
        Span::new(ticket.email()),
    ]));
    frame.push_line(Line::from_spans([
        Span::styled("  Avatar: ", label),
        Span::styled(ticket.avatar_url(), Style::new().color(Color::Yellow)),
    ]));
    frame.push_line(Line::from_spans([
        Span::new("          "),
        Span::styled(format!("({})", ticket.avatar_alt()), Style::new().dim()),
    ]));
}

#[cfg(test)]
mod tests {
    use super::{SUBMIT_LABEL, TICKET_HEADING, TITLE, render};
    use crate::core::controller::FormController;
    use crate::core::field::Field;
    use crate::core::validation::{AVATAR_URL_REQUIRED, EMAIL_REQUIRED, FULL_NAME_REQUIRED};
    use crate::storage::{MemoryStore, Persistence};

    fn controller() -> FormController {
        FormController::new(Persistence::new(MemoryStore::new()))
    }

    #[test]
    fn fresh_form_has_no_errors_or_ticket() {
        let text = render(&controller(), Field::FullName, 0).to_plain_text();
        assert!(text.starts_with(TITLE));
        assert!(text.contains("Full Name *"));
        assert!(text.contains("Email Address *"));
        assert!(text.contains("Avatar URL *"));
        assert!(text.contains(SUBMIT_LABEL));
        assert!(!text.contains(FULL_NAME_REQUIRED));
        assert!(!text.contains(TICKET_HEADING));
    }

    #[test]
    fn rejected_submit_shows_inline_errors() {
        let mut c = controller();
        let _ = c.submit();
        let text = render(&c, Field::FullName, 0).to_plain_text();
        for message in [FULL_NAME_REQUIRED, EMAIL_REQUIRED, AVATAR_URL_REQUIRED] {
            assert!(text.contains(message), "missing {message}");
        }
    }

    #[test]
    fn ticket_card_appears_after_success() {
        let mut c = controller();
        c.set_field(Field::FullName, "Ada Lovelace");
        c.set_field(Field::Email, "ada@example.com");
        c.set_field(Field::AvatarUrl, "https://x.com/a.png");
        c.submit().expect("valid");

        let text = render(&c, Field::FullName, 0).to_plain_text();
        assert!(text.contains(TICKET_HEADING));
        assert!(text.contains("Name:   Ada Lovelace"));
        assert!(text.contains("Email:  ada@example.com"));
        assert!(text.contains("Avatar: https://x.com/a.png"));
        assert!(text.contains("(Avatar for Ada Lovelace)"));
    }

    #[test]
    fn cursor_sits_in_focused_field() {
        let mut c = controller();
        c.set_field(Field::Email, "ada");
        let frame = render(&c, Field::Email, 3);
        let cursor = frame.cursor().expect("cursor");

        let row = frame.lines()[cursor.row as usize].plain_text();
        assert_eq!(row, "> ada");
        assert_eq!(cursor.col, 5);
    }
}
