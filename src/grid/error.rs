use std::fmt;

#[derive(Debug)]
pub enum GridError {
    /// The maze file contained no non-empty lines.
    Empty,
    /// Row `row` had a different column count than the first row.
    InconsistentRowLength { row: usize, expected: usize, found: usize },
    /// No `2` (start marker) cell was found anywhere in the grid.
    MissingStart,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Empty => write!(f, "maze file is empty"),
            GridError::InconsistentRowLength { row, expected, found } => write!(
                f,
                "row {row} has {found} columns, expected {expected}"
            ),
            GridError::MissingStart => write!(f, "maze has no start marker (cell code 2)"),
        }
    }
}

impl std::error::Error for GridError {}

crate::util::err::err_macro::impl_err!(GridError, Grid);
