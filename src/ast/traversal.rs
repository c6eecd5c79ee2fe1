use crate::{
    advisor::{Advice, Code, Status},
    parser::Statement
};

/// Accumulator owned by a single `check` call.
///
/// Holds the status and title every finding carries, the statement currently
/// being walked, and the advice collected so far. It is handed to each
/// `enter`/`leave` call and consumed by [`Traversal::finish`].
#[derive(Debug)]
pub struct Traversal {
    status: Status,
    title:  String,
    text:   String,
    line:   usize,
    advice: Vec<Advice>
}

impl Traversal {
    pub fn new(status: Status, title: impl Into<String>) -> Self {
        Self {
            status,
            title: title.into(),
            text: String::new(),
            line: 0,
            advice: Vec::new()
        }
    }

    pub(crate) fn begin_statement(&mut self, statement: &Statement) {
        self.text.clone_from(&statement.text);
        self.line = statement.line;
    }

    /// Source text of the statement being walked
    pub fn statement_text(&self) -> &str {
        &self.text
    }

    /// Start line of the statement being walked
    pub fn statement_line(&self) -> usize {
        self.line
    }

    /// Record a finding on the statement's start line
    pub fn report(&mut self, code: Code, content: impl Into<String>) {
        let line = self.line;
        self.report_at(code, content, line);
    }

    /// Record a finding on a specific line
    pub fn report_at(&mut self, code: Code, content: impl Into<String>, line: usize) {
        self.advice.push(Advice {
            status: self.status,
            code,
            title: self.title.clone(),
            content: content.into(),
            line
        });
    }

    /// Collected advice, or the single OK advice when nothing was found
    pub fn finish(self) -> Vec<Advice> {
        if self.advice.is_empty() {
            vec![Advice::ok()]
        } else {
            self.advice
        }
    }
}
