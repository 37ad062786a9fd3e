//! The text-line context consumed by the extraction engine.

/// Ordered, trimmed, non-empty text lines for one document instance.
///
/// This is the sole input to the parsing core: the OCR stage hands over
/// recognized fragments in top-to-bottom reading order and nothing else —
/// no bounding boxes, no confidence scores. The context also keeps the
/// lines joined into a single buffer, since several patterns (the MRZ
/// marker, the labeled document number) match across the whole text.
#[derive(Debug, Clone)]
pub struct ExtractionContext {
    lines: Vec<String>,
    text: String,
}

impl ExtractionContext {
    /// Build a context from recognized fragments in reading order.
    ///
    /// Fragments are trimmed; empty ones are dropped.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<String> = lines
            .into_iter()
            .map(|l| l.as_ref().trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();
        let text = lines.join("\n");
        Self { lines, text }
    }

    /// Build a context from a single buffer of newline-joined fragments.
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// The lines in reading order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines joined with newlines.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// A bounded slice of up to `len` lines starting at `start`.
    ///
    /// Every field rule scans a short window below its keyword line; this
    /// clamps at the end of the document so callers never index out of
    /// bounds.
    pub fn window(&self, start: usize, len: usize) -> &[String] {
        let start = start.min(self.lines.len());
        let end = start.saturating_add(len).min(self.lines.len());
        &self.lines[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lines_trims_and_drops_empties() {
        let ctx = ExtractionContext::from_lines(["  DNI 12345678  ", "", "   ", "GARCIA"]);
        assert_eq!(ctx.lines(), ["DNI 12345678", "GARCIA"]);
        assert_eq!(ctx.text(), "DNI 12345678\nGARCIA");
    }

    #[test]
    fn test_from_text_matches_from_lines() {
        let ctx = ExtractionContext::from_text("A\n\n B \nC");
        assert_eq!(ctx.lines(), ["A", "B", "C"]);
    }

    #[test]
    fn test_window_clamps_at_end() {
        let ctx = ExtractionContext::from_lines(["A", "B", "C"]);
        assert_eq!(ctx.window(1, 5), ["B", "C"]);
        assert_eq!(ctx.window(3, 2), Vec::<String>::new().as_slice());
        assert_eq!(ctx.window(10, 2), Vec::<String>::new().as_slice());
    }
}
