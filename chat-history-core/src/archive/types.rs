/// Where a line came from: which file in read order, and which line in that file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourcePosition {
    pub file_index: usize,
    pub line_index: usize,
}

/// One normalized line read from a log source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    pub text: String,
    pub position: SourcePosition,
}
