use crate::ui::span::Span;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Line {
    spans: Vec<Span>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_spans(spans: impl IntoIterator<Item = Span>) -> Self {
        let mut line = Self::new();
        for span in spans {
            line.push(span);
        }
        line
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn push(&mut self, span: Span) {
        if !span.text().is_empty() {
            self.spans.push(span);
        }
    }

    pub fn plain_text(&self) -> String {
        self.spans.iter().map(Span::text).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPos {
    pub col: u16,
    pub row: u16,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Frame {
    lines: Vec<Line>,
    cursor: Option<CursorPos>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn push_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn blank_line(&mut self) {
        self.lines.push(Line::new());
    }

    /// Row index the next pushed line will occupy.
    pub fn next_row(&self) -> usize {
        self.lines.len()
    }

    pub fn cursor(&self) -> Option<CursorPos> {
        self.cursor
    }

    pub fn set_cursor(&mut self, col: usize, row: usize) {
        self.cursor = Some(CursorPos {
            col: u16::try_from(col).unwrap_or(u16::MAX),
            row: u16::try_from(row).unwrap_or(u16::MAX),
        });
    }

    pub fn to_plain_text(&self) -> String {
        self.lines
            .iter()
            .map(Line::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
