//! Bin grid of accepted points with redundant neighbourhood registration
//!
//! Every registered point is copied into the bin that contains it and into
//! all eight surrounding bins. A proximity query then only has to scan the
//! single bin containing the probe: any point closer than one bin width was
//! already replicated into that bin when it was registered. The price is
//! roughly nine stored copies per point, which is fine because points are
//! never removed and the domain is bounded.
//!
//! Soundness requires the bin size to be at least the repulsion threshold,
//! which is checked once at construction.

use ndarray::Array2;

use crate::io::error::{Result, invalid_parameter};
use crate::math::Vec2;
use crate::spatial::Domain;

/// Identity of one registered point, shared by all of its bin copies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(usize);

impl PointId {
    /// Registration order of the point, starting at zero
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A copy of a registered point stored in one bin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegisteredPoint {
    /// Identity shared by every copy of this point
    pub id: PointId,
    /// Position in simulation space
    pub position: Vec2,
}

/// Dense grid of bins covering the domain plus one guard ring
#[derive(Debug, Clone)]
pub struct SpatialRegistry {
    domain: Domain,
    bin_size: f64,
    /// Bin coordinate stored at array index `[0, 0]`
    origin: [i64; 2],
    bins: Array2<Vec<RegisteredPoint>>,
    registered: usize,
}

impl SpatialRegistry {
    /// Create an empty registry over `domain`
    ///
    /// `threshold` is the largest repulsion distance the registry will be
    /// queried with; it must not exceed `bin_size`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the bin size or threshold is not positive
    /// and finite, if the bin size is smaller than the threshold, or if the
    /// domain half-size is not positive and finite.
    pub fn new(domain: Domain, bin_size: f64, threshold: f64) -> Result<Self> {
        let half_size = domain.half_size();
        if !(half_size > 0.0 && half_size.is_finite()) {
            return Err(invalid_parameter(
                "size",
                &half_size,
                &"domain half-size must be positive and finite",
            ));
        }
        if !(bin_size > 0.0 && bin_size.is_finite()) {
            return Err(invalid_parameter(
                "bin_size",
                &bin_size,
                &"must be positive and finite",
            ));
        }
        if !(threshold > 0.0 && threshold.is_finite()) {
            return Err(invalid_parameter(
                "repulsion",
                &threshold,
                &"must be positive and finite",
            ));
        }
        if bin_size < threshold {
            return Err(invalid_parameter(
                "bin_size",
                &bin_size,
                &format!("must be at least the repulsion threshold {threshold}"),
            ));
        }

        // One guard ring on each side so neighbour registration never falls off
        let min_bin = (-half_size / bin_size).floor() as i64 - 1;
        let max_bin = (half_size / bin_size).floor() as i64 + 1;
        let span = (max_bin - min_bin + 1) as usize;

        Ok(Self {
            domain,
            bin_size,
            origin: [min_bin, min_bin],
            bins: Array2::from_elem((span, span), Vec::new()),
            registered: 0,
        })
    }

    /// Domain the registry covers
    pub const fn domain(&self) -> Domain {
        self.domain
    }

    /// Side length of one bin
    pub const fn bin_size(&self) -> f64 {
        self.bin_size
    }

    /// Number of bins along each axis
    pub fn bin_dimensions(&self) -> (usize, usize) {
        self.bins.dim()
    }

    /// Number of distinct points registered so far
    pub const fn point_count(&self) -> usize {
        self.registered
    }

    /// Number of stored point copies across all bins
    pub fn entry_count(&self) -> usize {
        self.bins.iter().map(Vec::len).sum()
    }

    /// Integer bin coordinates of `point` (floor division by the bin size)
    pub fn bin_coordinates(&self, point: Vec2) -> [i64; 2] {
        [
            (point.x / self.bin_size).floor() as i64,
            (point.y / self.bin_size).floor() as i64,
        ]
    }

    /// Array index of the bin containing `point`, if it is on the grid
    pub fn bin_index(&self, point: Vec2) -> Option<[usize; 2]> {
        if !point.is_finite() {
            return None;
        }
        self.offset_index(self.bin_coordinates(point), 0, 0)
    }

    /// Stored copies in the bin containing `point`
    pub fn bin_entries(&self, point: Vec2) -> &[RegisteredPoint] {
        self.bin_index(point)
            .and_then(|index| self.bins.get(index))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Register an accepted point into its bin and the eight neighbours
    ///
    /// Neighbour bins that fall outside the grid are skipped.
    pub fn register_point(&mut self, point: Vec2) -> PointId {
        let id = PointId(self.registered);
        self.registered += 1;

        if !point.is_finite() {
            return id;
        }

        let coordinates = self.bin_coordinates(point);
        let entry = RegisteredPoint {
            id,
            position: point,
        };
        for dx in -1..=1 {
            for dy in -1..=1 {
                if let Some(bin) = self
                    .offset_index(coordinates, dx, dy)
                    .and_then(|index| self.bins.get_mut(index))
                {
                    bin.push(entry);
                }
            }
        }
        id
    }

    /// Whether a candidate at `point` is blocked
    ///
    /// Points outside the domain (or not finite) are always blocked, so the
    /// domain edge acts as a repulsive wall. Otherwise only the bin containing
    /// `point` is scanned, skipping the entry identified by `excluding`.
    ///
    /// Exclusion matches the entry's identity, not its position: another entry
    /// registered at a bit-identical position still blocks.
    pub fn query_blocked(&self, point: Vec2, excluding: Option<PointId>, threshold: f64) -> bool {
        if !self.domain.contains(point) {
            return true;
        }
        let Some(bin) = self.bin_index(point).and_then(|index| self.bins.get(index)) else {
            return true;
        };

        let threshold_sq = threshold * threshold;
        bin.iter().any(|entry| {
            Some(entry.id) != excluding && (entry.position - point).length_squared() < threshold_sq
        })
    }

    fn offset_index(&self, coordinates: [i64; 2], dx: i64, dy: i64) -> Option<[usize; 2]> {
        let (rows, cols) = self.bins.dim();
        let row = usize::try_from(coordinates[0] + dx - self.origin[0]).ok()?;
        let col = usize::try_from(coordinates[1] + dy - self.origin[1]).ok()?;
        (row < rows && col < cols).then_some([row, col])
    }
}
