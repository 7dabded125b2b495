/// An owned, growable, row-major 2D buffer.
///
/// Every resize keeps the existing cells at their coordinates.
/// New cells are filled with `T::default()`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Grid<T>
where
    T: Copy + Default,
{
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![T::default(); rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Panics if the cell is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col] = value;
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn column(&self, col: usize) -> impl Iterator<Item = T> + '_ {
        (0..self.rows).map(move |r| self.cells[r * self.cols + col])
    }

    pub fn push_row(&mut self) {
        self.cells
            .extend(std::iter::repeat(T::default()).take(self.cols));
        self.rows += 1;
    }

    pub fn push_column(&mut self) {
        let cols = self.cols + 1;
        let mut cells = Vec::with_capacity(self.rows * cols);
        for r in 0..self.rows {
            cells.extend_from_slice(self.row(r));
            cells.push(T::default());
        }
        self.cells = cells;
        self.cols = cols;
    }

    pub fn remove_row(&mut self, row: usize) {
        assert!(row < self.rows);
        self.cells.drain(row * self.cols..(row + 1) * self.cols);
        self.rows -= 1;
    }

    pub fn remove_column(&mut self, col: usize) {
        assert!(col < self.cols);
        let cols = self.cols;
        let mut idx = 0;
        self.cells.retain(|_| {
            let keep = idx % cols != col;
            idx += 1;
            keep
        });
        self.cols -= 1;
    }
}

impl<T> std::fmt::Debug for Grid<T>
where
    T: Copy + Default + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries((0..self.rows).map(|r| self.row(r)))
            .finish()
    }
}
