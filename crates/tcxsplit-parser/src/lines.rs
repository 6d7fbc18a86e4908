/// The input as an immutable, ordered sequence of raw lines.
///
/// Line terminators (`\n` or `\r\n`) stay attached to their line; the last
/// line may have none. Concatenating all lines yields the input unchanged.
#[derive(Debug, Clone)]
pub struct LineStore<'a> {
    lines: Vec<&'a str>,
}

impl<'a> LineStore<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.split_inclusive('\n').collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.lines.get(index).copied()
    }

    pub fn as_slice(&self) -> &[&'a str] {
        &self.lines
    }
}
