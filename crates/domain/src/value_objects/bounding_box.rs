//! Axis-aligned geographic bounding box

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Minimal longitude/latitude rectangle enclosing a set of coordinates
///
/// Routes in this widget never cross the antimeridian, so the box is a plain
/// min/max over longitudes and latitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// South-west corner
    pub south_west: Coordinate,
    /// North-east corner
    pub north_east: Coordinate,
}

impl BoundingBox {
    /// Box around a single point
    #[must_use]
    pub const fn around(point: Coordinate) -> Self {
        Self {
            south_west: point,
            north_east: point,
        }
    }

    /// Smallest box enclosing every coordinate
    ///
    /// Returns `None` for an empty sequence.
    pub fn from_coordinates<'a, I>(coordinates: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Coordinate>,
    {
        let mut iter = coordinates.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::around(*first), |bounds, c| bounds.extend(c)))
    }

    /// Grow the box so it contains `point`
    #[must_use]
    pub fn extend(self, point: &Coordinate) -> Self {
        Self {
            south_west: Coordinate::new_unchecked(
                self.south_west.longitude().min(point.longitude()),
                self.south_west.latitude().min(point.latitude()),
            ),
            north_east: Coordinate::new_unchecked(
                self.north_east.longitude().max(point.longitude()),
                self.north_east.latitude().max(point.latitude()),
            ),
        }
    }

    /// Western edge
    #[must_use]
    pub const fn west(&self) -> f64 {
        self.south_west.longitude()
    }

    /// Southern edge
    #[must_use]
    pub const fn south(&self) -> f64 {
        self.south_west.latitude()
    }

    /// Eastern edge
    #[must_use]
    pub const fn east(&self) -> f64 {
        self.north_east.longitude()
    }

    /// Northern edge
    #[must_use]
    pub const fn north(&self) -> f64 {
        self.north_east.latitude()
    }

    /// Whether `point` lies inside or on the edge of the box
    #[must_use]
    pub fn contains(&self, point: &Coordinate) -> bool {
        (self.west()..=self.east()).contains(&point.longitude())
            && (self.south()..=self.north()).contains(&point.latitude())
    }

    /// `true` when the box has no extent in either direction
    #[must_use]
    pub fn is_point(&self) -> bool {
        self.south_west == self.north_east
    }
}
