//! Static maze with walls and an exit zone.

use once_cell::sync::Lazy;

use super::{HasCollision, Point, Rect};

const REFERENCE_WALLS: [[f64; 4]; 8] = [
    [75.0, 0.0, 75.0, 450.0],
    [150.0, 75.0, 150.0, 600.0],
    [225.0, 0.0, 225.0, 450.0],
    [300.0, 150.0, 300.0, 600.0],
    [375.0, 0.0, 375.0, 375.0],
    [450.0, 75.0, 450.0, 600.0],
    [525.0, 0.0, 525.0, 525.0],
    [0.0, 525.0, 450.0, 525.0],
];

const REFERENCE_EXIT: [f64; 4] = [540.0, 540.0, 580.0, 580.0];

static REFERENCE_WORLD: Lazy<World> = Lazy::new(|| {
    let [x1, y1, x2, y2] = REFERENCE_EXIT;
    World::new(
        REFERENCE_WALLS
            .iter()
            .map(|&[x1, y1, x2, y2]| Wall::from_coords(x1, y1, x2, y2))
            .collect(),
        Rect::from_corners(Point::new(x1, y1), Point::new(x2, y2)),
    )
});

/// Walls and exit of one session. Never modified after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct World {
    walls: Vec<Wall>,
    exit: Rect,
}

impl World {
    pub fn new(walls: Vec<Wall>, exit: Rect) -> Self {
        Self { walls, exit }
    }

    /// The eight-wall maze on a 600 x 600 canvas with the exit in the bottom-right corner.
    pub fn reference() -> Self {
        REFERENCE_WORLD.clone()
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn exit(&self) -> Rect {
        self.exit
    }

    pub fn has_collision(&self, object: &dyn HasCollision) -> bool {
        self.colliding_wall(object).is_some()
    }

    /// Index of the first wall hit by `object`.
    pub fn colliding_wall(&self, object: &dyn HasCollision) -> Option<usize> {
        self.walls.iter().position(|w| w.has_collision(object))
    }

    /// Only the top-left corner of `object` is compared against the exit, so an object reaching
    /// past the exit to the lower right still counts.
    pub fn is_exit_reached(&self, object: &dyn HasCollision) -> bool {
        let bounds = object.bounds();
        bounds.x1() >= self.exit.x1() && bounds.y1() >= self.exit.y1()
    }
}

/// Line segment in any orientation. Collides through its bounding rectangle.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Wall {
    start: Point,
    end: Point,
}

impl Wall {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.start, &self.end)
    }

    pub fn is_finite(&self) -> bool {
        [self.start.x, self.start.y, self.end.x, self.end.y]
            .iter()
            .all(|c| c.is_finite())
    }
}

impl HasCollision for Wall {
    fn bounds(&self) -> Rect {
        Rect::from_corners(self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_reference_world() {
        let world = World::reference();
        assert_eq!(world.walls().len(), 8);
        assert_eq!(world.walls()[0], Wall::from_coords(75.0, 0.0, 75.0, 450.0));
        assert_eq!(world.walls()[7], Wall::from_coords(0.0, 525.0, 450.0, 525.0));
        assert_eq!(world.exit(), rect!(540, 540, 580, 580));
        assert_eq!(world, World::reference());
    }

    #[rstest]
    #[case::vertical(Wall::from_coords(75.0, 0.0, 75.0, 450.0), rect!(75, 0, 75, 450))]
    #[case::horizontal(Wall::from_coords(0.0, 525.0, 450.0, 525.0), rect!(0, 525, 450, 525))]
    #[case::reversed(Wall::from_coords(450.0, 600.0, 450.0, 75.0), rect!(450, 75, 450, 600))]
    #[case::diagonal(Wall::from_coords(10.0, 50.0, 30.0, 20.0), rect!(10, 20, 30, 50))]
    fn test_wall_bounds(#[case] wall: Wall, #[case] expected: Rect) {
        assert_eq!(wall.bounds(), expected);
    }

    #[test]
    fn test_wall_length() {
        assert_abs_diff_eq!(Wall::from_coords(75.0, 0.0, 75.0, 450.0).length(), 450.0);
        assert_abs_diff_eq!(Wall::from_coords(0.0, 0.0, 30.0, 40.0).length(), 50.0);
    }

    #[test]
    fn test_wall_is_finite() {
        assert!(Wall::from_coords(0.0, 0.0, 1.0, 1.0).is_finite());
        assert!(!Wall::from_coords(0.0, f64::NAN, 1.0, 1.0).is_finite());
    }

    #[rstest]
    #[case::first_wall(rect!(70, 20, 90, 40), Some(0))]
    #[case::bottom_wall(rect!(20, 515, 40, 535), Some(7))]
    #[case::start(rect!(20, 20, 40, 40), None)]
    #[case::touching(rect!(55, 20, 75, 40), None)]
    #[case::corridor_end(rect!(530, 530, 550, 550), None)]
    fn test_world_colliding_wall(#[case] object: Rect, #[case] expected: Option<usize>) {
        let world = World::reference();
        assert_eq!(world.colliding_wall(&object), expected);
        assert_eq!(world.has_collision(&object), expected.is_some());
    }

    #[rstest]
    #[case::exact(rect!(540, 540, 560, 560), true)]
    #[case::past_canvas(rect!(590, 700, 610, 720), true)]
    #[case::left_of_exit(rect!(539, 545, 559, 565), false)]
    #[case::above_exit(rect!(545, 539, 565, 559), false)]
    #[case::overlapping_but_above_left(rect!(530, 530, 550, 550), false)]
    fn test_world_is_exit_reached(#[case] object: Rect, #[case] expected: bool) {
        assert_eq!(World::reference().is_exit_reached(&object), expected);
    }

    #[test]
    fn test_world_without_walls() {
        let world = World::new(vec![], rect!(0, 0, 10, 10));
        assert!(!world.has_collision(&rect!(-100, -100, 100, 100)));
    }
}
