//! Art blocks: rectangular grids of braille glyphs.

use core::fmt;

use crate::constants::{CELL_HEIGHT, CELL_WIDTH};
use crate::error::{Error, Result};
use crate::glyph::{decode, DOT_POSITIONS};

/// The boot splash: a cross, ten rows of fourteen glyphs.
pub const CROSS: [&str; 10] = [
    "⠀⠀⠀⠀⢀⡠⣾⣳⡀⠀⠀⠀⠀⠀",
    "⠀⠀⡀⠀⠚⢿⣿⣿⡿⠙⠀⠀⠀⠀",
    "⠀⣘⣿⣇⡀⢘⣿⣿⠀⢀⣠⣶⡀⠀",
    "⠺⣿⣷⣝⣾⣿⣿⣿⣿⣿⣹⣷⣿⠆",
    "⠀⠘⠟⠁⠀⠀⣿⣟⠀⠀⠙⠿⠁⠀",
    "⠀⠀⠀⠀⠀⠀⣿⣿⠀⠀⠀⠀⠀⠀",
    "⠀⠀⠀⠀⠀⢠⣿⣿⠀⠀⠀⠀⠀⠀",
    "⠀⠀⠀⠀⠀⢸⣿⡿⡄⠀⠀⠀⠀⠀",
    "⠀⠀⠀⠠⣖⣿⣿⣻⡷⡄⠀⠀⠀⠀",
    "⠀⠀⠀⠀⠀⠈⢻⡟⠁⠀⠀⠀⠀⠀",
];

/// An ordered sequence of equal-length glyph rows.
///
/// Rows are stored as characters, not [`Glyph`](crate::Glyph)s, so that
/// characters outside the braille block survive into the preview and are
/// rasterized blank.
///
/// # Example
///
/// ```
/// use bootscreen::ArtBlock;
///
/// let art = ArtBlock::from_rows(["⣿⠀", "⠀⣿"]).unwrap();
/// assert_eq!(art.rows(), 2);
/// assert_eq!(art.columns(), 2);
/// assert_eq!(art.glyph(1, 1), Some('⣿'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtBlock {
    cells: Vec<char>,
    rows: usize,
    columns: usize,
}

impl ArtBlock {
    /// Builds an art block from its rows.
    ///
    /// The column count is the character count of the first row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyArt`] if there are no rows or the first row is
    /// empty, and [`Error::RaggedArt`] if any row's length differs from the
    /// first.
    pub fn from_rows<I, S>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells = Vec::new();
        let mut columns = None;
        let mut count = 0;

        for (row, line) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(line.as_ref().chars());
            let found = cells.len() - before;

            match columns {
                None if found == 0 => return Err(Error::EmptyArt),
                None => columns = Some(found),
                Some(expected) if expected != found => {
                    return Err(Error::RaggedArt {
                        row,
                        expected,
                        found,
                    })
                }
                Some(_) => {}
            }
            count += 1;
        }

        let columns = columns.ok_or(Error::EmptyArt)?;
        Ok(Self {
            cells,
            rows: count,
            columns,
        })
    }

    /// The fixed boot splash art.
    ///
    /// # Errors
    ///
    /// Returns an error only if [`CROSS`] is edited into a ragged or empty
    /// block.
    pub fn cross() -> Result<Self> {
        Self::from_rows(CROSS)
    }

    /// Number of glyph rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of glyphs per row.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the character at `(row, column)`.
    #[must_use]
    pub fn glyph(&self, row: usize, column: usize) -> Option<char> {
        if row < self.rows && column < self.columns {
            self.cells.get(row * self.columns + column).copied()
        } else {
            None
        }
    }

    /// Iterates rows as character slices, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.columns)
    }

    /// Renders the decoded dots as text, `#` for a raised dot and `.` for a
    /// flat one. Each glyph becomes a 2×4 block of characters.
    #[must_use]
    pub fn dot_matrix(&self) -> String {
        let width = self.columns * CELL_WIDTH;
        let height = self.rows * CELL_HEIGHT;
        let mut grid = vec![false; width * height];

        for (r, row) in self.iter_rows().enumerate() {
            for (c, &ch) in row.iter().enumerate() {
                for (d, on) in decode(ch).into_iter().enumerate() {
                    if on {
                        let (dx, dy) = DOT_POSITIONS[d];
                        let x = c * CELL_WIDTH + dx;
                        let y = r * CELL_HEIGHT + dy;
                        grid[y * width + x] = true;
                    }
                }
            }
        }

        let mut out = String::with_capacity((width + 1) * height);
        for line in grid.chunks(width) {
            out.extend(line.iter().map(|on| if *on { '#' } else { '.' }));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for ArtBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for ch in row {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_dimensions() {
        let art = ArtBlock::cross().unwrap();
        assert_eq!(art.rows(), 10);
        assert_eq!(art.columns(), 14);
    }

    #[test]
    fn display_round_trips_rows() {
        let art = ArtBlock::cross().unwrap();
        assert_eq!(art.to_string(), CROSS.join("\n"));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = ArtBlock::from_rows(["⣿⣿⣿", "⣿⣿", "⣿⣿⣿"]).unwrap_err();
        assert!(matches!(
            err,
            Error::RaggedArt {
                row: 1,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn empty_art_is_rejected() {
        let none: [&str; 0] = [];
        assert!(matches!(ArtBlock::from_rows(none), Err(Error::EmptyArt)));
        assert!(matches!(ArtBlock::from_rows([""]), Err(Error::EmptyArt)));
    }

    #[test]
    fn non_braille_characters_are_kept() {
        let art = ArtBlock::from_rows(["A⣿"]).unwrap();
        assert_eq!(art.glyph(0, 0), Some('A'));
        assert_eq!(art.glyph(0, 2), None);
        assert_eq!(art.glyph(1, 0), None);
    }

    #[test]
    fn dot_matrix_layout() {
        // ⠑: dots 0 and 4 -> (0,0) and (1,1)
        let art = ArtBlock::from_rows(["⠑"]).unwrap();
        assert_eq!(art.dot_matrix(), "#.\n.#\n..\n..\n");
    }
}
