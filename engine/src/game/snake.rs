use std::collections::{HashSet, VecDeque};

use super::types::{Direction, Point};

/// The snake body: ordered segments with the head at the front, plus a
/// mirrored set of the same cells for O(1) occupancy checks. The deque
/// stays authoritative for order and tail identity.
#[derive(Clone, Debug)]
pub struct Snake {
    pub body: VecDeque<Point>,
    pub body_set: HashSet<Point>,
    pub direction: Direction,
}

impl Snake {
    /// Lays `length` segments out behind `head`, opposite to the travel
    /// direction.
    pub fn new(head: Point, direction: Direction, length: usize) -> Self {
        let (dx, dy) = direction.delta();

        let mut body = VecDeque::with_capacity(length);
        let mut body_set = HashSet::with_capacity(length);

        for i in 0..length as i32 {
            let segment = Point::new(head.x - dx * i, head.y - dy * i);
            body.push_back(segment);
            body_set.insert(segment);
        }

        Self {
            body,
            body_set,
            direction,
        }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("snake body should never be empty")
    }

    pub fn next_head(&self, direction: Direction) -> Point {
        self.head().stepped(direction)
    }

    pub fn occupies(&self, point: Point) -> bool {
        self.body_set.contains(&point)
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Commits a move to `new_head`; the tail is vacated unless the
    /// move grows the snake.
    pub fn advance(&mut self, new_head: Point, grow: bool) {
        self.body.push_front(new_head);
        self.body_set.insert(new_head);

        if !grow {
            let tail = self.body.pop_back().expect("snake body should never be empty");
            self.body_set.remove(&tail);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_lays_segments_behind_head() {
        let snake = Snake::new(Point::new(4, 0), Direction::Right, 5);
        assert_eq!(snake.len(), 5);
        assert_eq!(snake.head(), Point::new(4, 0));
        assert_eq!(snake.tail(), Point::new(0, 0));
        assert_eq!(snake.body[1], Point::new(3, 0));
        assert_eq!(snake.body_set.len(), 5);
    }

    #[test]
    fn test_advance_without_growth_preserves_length() {
        let mut snake = Snake::new(Point::new(4, 0), Direction::Right, 5);
        snake.advance(Point::new(5, 0), false);

        assert_eq!(snake.len(), 5);
        assert_eq!(snake.head(), Point::new(5, 0));
        assert_eq!(snake.tail(), Point::new(1, 0));
        assert!(snake.occupies(Point::new(5, 0)));
        assert!(!snake.occupies(Point::new(0, 0)));
    }

    #[test]
    fn test_advance_with_growth_extends_by_one() {
        let mut snake = Snake::new(Point::new(4, 0), Direction::Right, 5);
        snake.advance(Point::new(5, 0), true);

        assert_eq!(snake.len(), 6);
        assert_eq!(snake.head(), Point::new(5, 0));
        assert_eq!(snake.tail(), Point::new(0, 0));
        assert_eq!(snake.body_set.len(), 6);
    }

    #[test]
    fn test_occupancy_mirrors_body_after_advances() {
        let mut snake = Snake::new(Point::new(5, 5), Direction::Up, 3);
        snake.advance(snake.next_head(Direction::Up), false);
        snake.advance(snake.next_head(Direction::Left), true);
        snake.advance(snake.next_head(Direction::Left), false);

        assert_eq!(snake.body.len(), snake.body_set.len());
        for segment in &snake.body {
            assert!(snake.body_set.contains(segment));
        }
    }

    #[test]
    fn test_next_head_applies_direction_to_front() {
        let snake = Snake::new(Point::new(4, 7), Direction::Right, 3);
        assert_eq!(snake.next_head(Direction::Right), Point::new(5, 7));
        assert_eq!(snake.next_head(Direction::Down), Point::new(4, 8));
    }
}
