//! Conversion between board cells and the pixel space of the drawing surface
use crate::game::Cell;

/// A point in pixel space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Point {
    pub(crate) x: f64,
    pub(crate) y: f64,
}

impl Point {
    pub(crate) const fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }
}

/// An axis-aligned rectangle in pixel space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct PixelRect {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) width: f64,
    pub(crate) height: f64,
}

impl PixelRect {
    pub(crate) const fn new(x: f64, y: f64, width: f64, height: f64) -> PixelRect {
        PixelRect {
            x,
            y,
            width,
            height,
        }
    }

    pub(crate) fn right(&self) -> f64 {
        self.x + self.width
    }

    pub(crate) fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// A straight line segment in pixel space
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Segment {
    pub(crate) start: Point,
    pub(crate) end: Point,
}

impl Segment {
    pub(crate) const fn new(start: Point, end: Point) -> Segment {
        Segment { start, end }
    }

    /// Return the distance from `p` to the nearest point on the segment
    pub(crate) fn distance_to(&self, p: Point) -> f64 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        let len_sq = dx.mul_add(dx, dy * dy);
        let t = if len_sq > 0.0 {
            ((p.x - self.start.x).mul_add(dx, (p.y - self.start.y) * dy) / len_sq).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let nearest = Point::new(t.mul_add(dx, self.start.x), t.mul_add(dy, self.start.y));
        (p.x - nearest.x).hypot(p.y - nearest.y)
    }
}

/// A snapshot of the drawing surface's dimensions and the size of a board
/// cell on it.
///
/// The surface can change size at any time; when it does, the host builds a
/// new `Geometry` and uses that from then on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Geometry {
    width: f64,
    height: f64,
    cell_size: f64,
}

impl Geometry {
    /// Describe a `width`×`height` surface showing a board with
    /// `board_length` cells on a side.  Cells are square and sized to fit the
    /// board's width.
    ///
    /// Returns `None` for surfaces with no area or boards with no cells.
    pub(crate) fn new(width: f64, height: f64, board_length: u16) -> Option<Geometry> {
        (width > 0.0 && height > 0.0 && board_length > 0).then(|| Geometry {
            width,
            height,
            cell_size: width / f64::from(board_length),
        })
    }

    pub(crate) fn width(&self) -> f64 {
        self.width
    }

    pub(crate) fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Return the pixel coordinates of the top-left corner of `cell`
    pub(crate) fn cell_origin(&self, cell: Cell) -> Point {
        Point {
            x: self.cell_size * f64::from(cell.x),
            y: self.cell_size * f64::from(cell.y),
        }
    }

    /// Return the rectangle covering all of `cell`
    pub(crate) fn cell_rect(&self, cell: Cell) -> PixelRect {
        self.inset_square(cell, 1.0)
    }

    /// Return a square `scale` times the size of a cell, centered in `cell`
    pub(crate) fn inset_square(&self, cell: Cell, scale: f64) -> PixelRect {
        let Point { x, y } = self.cell_origin(cell);
        let side = self.cell_size * scale;
        let margin = (self.cell_size - side) / 2.0;
        PixelRect::new(x + margin, y + margin, side, side)
    }

    /// Return the lines separating the board's cells: one vertical and one
    /// horizontal line at every multiple of the cell size that lies inside
    /// the surface's width.
    pub(crate) fn grid_lines(&self) -> Vec<Segment> {
        (1..)
            .map(|i: u32| self.cell_size * f64::from(i))
            .take_while(|&pos| pos < self.width)
            .flat_map(|pos| {
                [
                    Segment::new(Point::new(pos, 0.0), Point::new(pos, self.height)),
                    Segment::new(Point::new(0.0, pos), Point::new(self.width, pos)),
                ]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 10.0, 17)]
    #[case(10.0, 0.0, 17)]
    #[case(-4.0, 10.0, 17)]
    #[case(10.0, 10.0, 0)]
    fn test_degenerate(#[case] width: f64, #[case] height: f64, #[case] board_length: u16) {
        assert_eq!(Geometry::new(width, height, board_length), None);
    }

    #[rstest]
    #[case(Cell::new(0, 0), PixelRect::new(0.0, 0.0, 4.0, 4.0))]
    #[case(Cell::new(2, 13), PixelRect::new(8.0, 52.0, 4.0, 4.0))]
    #[case(Cell::new(16, 16), PixelRect::new(64.0, 64.0, 4.0, 4.0))]
    #[case(Cell::new(-1, 17), PixelRect::new(-4.0, 68.0, 4.0, 4.0))]
    fn test_cell_rect(#[case] cell: Cell, #[case] rect: PixelRect) {
        let geo = Geometry::new(68.0, 68.0, 17).unwrap();
        assert_eq!(geo.cell_rect(cell), rect);
    }

    #[test]
    fn cell_size_follows_width() {
        let geo = Geometry::new(34.0, 100.0, 17).unwrap();
        assert_eq!(geo.cell_rect(Cell::new(1, 1)), PixelRect::new(2.0, 2.0, 2.0, 2.0));
    }

    #[test]
    fn inset_square() {
        let geo = Geometry::new(68.0, 68.0, 17).unwrap();
        assert_eq!(
            geo.inset_square(Cell::new(1, 2), 0.5),
            PixelRect::new(5.0, 9.0, 2.0, 2.0)
        );
    }

    #[test]
    fn grid_lines() {
        let geo = Geometry::new(12.0, 16.0, 3).unwrap();
        assert_eq!(
            geo.grid_lines(),
            vec![
                Segment::new(Point::new(4.0, 0.0), Point::new(4.0, 16.0)),
                Segment::new(Point::new(0.0, 4.0), Point::new(12.0, 4.0)),
                Segment::new(Point::new(8.0, 0.0), Point::new(8.0, 16.0)),
                Segment::new(Point::new(0.0, 8.0), Point::new(12.0, 8.0)),
            ]
        );
    }

    #[test]
    fn full_board_grid_line_count() {
        let geo = Geometry::new(68.0, 68.0, 17).unwrap();
        assert_eq!(geo.grid_lines().len(), 32);
    }

    #[rstest]
    #[case(Point::new(2.0, 5.0), 2.0)]
    #[case(Point::new(4.0, 0.0), 0.0)]
    #[case(Point::new(4.0, -3.0), 3.0)]
    #[case(Point::new(7.0, 14.0), 5.0)]
    fn test_distance_to(#[case] p: Point, #[case] dist: f64) {
        let seg = Segment::new(Point::new(4.0, 0.0), Point::new(4.0, 10.0));
        assert!((seg.distance_to(p) - dist).abs() < 1e-9, "distance to {p:?}");
    }
}
