/// Computed flex direction of an element, as the host's layout reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Row,
    RowReverse,
    #[default]
    Column,
    ColumnReverse,
}

impl Direction {
    /// CSS keyword for this direction.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::RowReverse => "row-reverse",
            Self::Column => "column",
            Self::ColumnReverse => "column-reverse",
        }
    }
}
