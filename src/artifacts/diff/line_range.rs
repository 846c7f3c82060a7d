/// One contiguous block of added or modified lines in the new version of a file
///
/// Line numbers are 1-based and inclusive on both ends, so a single-line
/// change has `start_line == end_line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineRange {
    start_line: u32,
    end_line: u32,
}

impl LineRange {
    /// Build a range, clamping it so that `1 <= start_line <= end_line`
    pub fn new(start_line: u32, end_line: u32) -> Self {
        let start_line = start_line.max(1);

        LineRange {
            start_line,
            end_line: end_line.max(start_line),
        }
    }

    pub fn single(line: u32) -> Self {
        Self::new(line, line)
    }

    pub fn start_line(&self) -> u32 {
        self.start_line
    }

    pub fn end_line(&self) -> u32 {
        self.end_line
    }

    pub fn len(&self) -> u32 {
        self.end_line - self.start_line + 1
    }

    pub fn is_single_line(&self) -> bool {
        self.start_line == self.end_line
    }

    pub fn contains(&self, line: u32) -> bool {
        (self.start_line..=self.end_line).contains(&line)
    }
}

impl std::fmt::Display for LineRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_single_line() {
            write!(f, "line {}", self.start_line)
        } else {
            write!(f, "lines {}-{}", self.start_line, self.end_line)
        }
    }
}
