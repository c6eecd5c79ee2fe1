use sqlparser::tokenizer::Location;

/// Maps sqlparser locations (1-based line, 1-based character column) back to
/// byte offsets in the source text.
pub struct LineIndex<'a> {
    source:      &'a str,
    line_starts: Vec<usize>
}

impl<'a> LineIndex<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];
        for (i, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(i + 1);
            }
        }
        Self {
            source,
            line_starts
        }
    }

    /// Byte offset of `location`, `None` for the empty location or one past
    /// the end of the source.
    pub fn offset(&self, location: Location) -> Option<usize> {
        let line = usize::try_from(location.line).ok()?.checked_sub(1)?;
        let column = usize::try_from(location.column).ok()?.checked_sub(1)?;
        let start = *self.line_starts.get(line)?;
        self.source[start..]
            .char_indices()
            .nth(column)
            .map(|(delta, _)| start + delta)
    }
}
