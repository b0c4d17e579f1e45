//! Per-walker record of visited points and stroke breaks

use crate::math::Vec2;

/// One entry of a walker's trail
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathEntry {
    /// A visited position in simulation space
    Point(Vec2),
    /// End of the current stroke; any later points start a new one
    Break,
}

/// Ordered trail of one walker
///
/// Appended to by the owning population only. Strokes are the maximal runs of
/// points between breaks; a walker that reverses produces two strokes that
/// both start at its spawn position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathRecorder {
    entries: Vec<PathEntry>,
}

impl PathRecorder {
    /// Create an empty recorder
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a visited point
    pub fn push_point(&mut self, point: Vec2) {
        self.entries.push(PathEntry::Point(point));
    }

    /// Append a stroke break
    pub fn push_break(&mut self) {
        self.entries.push(PathEntry::Break);
    }

    /// All entries in recording order
    pub const fn entries(&self) -> &[PathEntry] {
        self.entries.as_slice()
    }

    /// Number of entries, breaks included
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded points, breaks excluded
    pub fn point_count(&self) -> usize {
        self.points().count()
    }

    /// Recorded points in order, ignoring breaks
    pub fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.entries.iter().filter_map(|entry| match entry {
            PathEntry::Point(point) => Some(*point),
            PathEntry::Break => None,
        })
    }

    /// Continuous strokes, each a non-empty polyline
    pub fn strokes(&self) -> Vec<Vec<Vec2>> {
        let mut strokes = Vec::new();
        let mut current = Vec::new();
        for entry in &self.entries {
            match entry {
                PathEntry::Point(point) => current.push(*point),
                PathEntry::Break => {
                    if !current.is_empty() {
                        strokes.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            strokes.push(current);
        }
        strokes
    }

    /// Sum of segment lengths over all strokes
    pub fn stroke_length(&self) -> f64 {
        self.strokes()
            .iter()
            .flat_map(|stroke| stroke.windows(2))
            .map(|pair| match pair {
                [a, b] => a.distance(*b),
                _ => 0.0,
            })
            .sum()
    }
}
