#[derive(Debug, Clone)]
pub struct SourceMap<'a> {
    source: &'a str,
    line_offsets: Vec<usize>,
}

impl<'a> SourceMap<'a> {
    pub fn from_source(source: &'a str) -> Self {
        let mut line_offsets = vec![0];
        for (idx, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_offsets.push(idx + 1);
            }
        }
        Self {
            source,
            line_offsets,
        }
    }

    /// Newlines plus one; an empty source still has one line.
    pub fn line_count(&self) -> usize {
        self.line_offsets.len()
    }

    /// Text of a 1-based line, without its line terminator.
    pub fn line_text(&self, line: usize) -> Option<&'a str> {
        let idx = line.checked_sub(1)?;
        let start = *self.line_offsets.get(idx)?;
        let end = self
            .line_offsets
            .get(idx + 1)
            .map(|next| next - 1)
            .unwrap_or(self.source.len());
        let text = &self.source[start..end];
        Some(text.strip_suffix('\r').unwrap_or(text))
    }
}

/// Line to attribute a synthesized trailing return to: the last line once
/// trailing whitespace is ignored. Counts newlines textually, so newlines
/// inside string literals count too.
pub fn return_line(code: &str) -> usize {
    SourceMap::from_source(code.trim_end()).line_count()
}
