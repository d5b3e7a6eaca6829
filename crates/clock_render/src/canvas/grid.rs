/// Fixed-size character buffer addressed by signed cell coordinates.
///
/// Writes outside the buffer are dropped, so callers can project points
/// without clipping them first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharGrid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl CharGrid {
    pub const BLANK: char = ' ';

    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, cells: vec![Self::BLANK; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn get(&self, x: i64, y: i64) -> Option<char> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Writes `ch` at `(x, y)`. Returns `false` when the cell is out of range.
    pub fn set(&mut self, x: i64, y: i64, ch: char) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = ch;
                true
            },
            None => false,
        }
    }

    /// Writes `ch` only when the cell is in range and still blank.
    pub fn set_if_blank(&mut self, x: i64, y: i64, ch: char) -> bool {
        match self.index(x, y) {
            Some(idx) if self.cells[idx] == Self::BLANK => {
                self.cells[idx] = ch;
                true
            },
            _ => false,
        }
    }

    pub fn count(&self, ch: char) -> usize {
        self.cells.iter().filter(|&&cell| cell == ch).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        let width = self.width.max(1);
        self.cells.chunks(width).map(|row| row.iter().collect::<String>())
    }

    /// Flattens the grid row-major into newline separated text.
    pub fn to_text(&self) -> String {
        self.rows().collect::<Vec<_>>().join("\n")
    }
}
