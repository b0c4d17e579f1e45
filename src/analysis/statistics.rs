//! Summary statistics of finished walker paths

use std::fmt;

use crate::algorithm::WalkerPopulation;
use crate::io::configuration::COLOR_GROUPS;

/// Aggregate measurements of a population's path data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathStatistics {
    /// Number of walkers
    pub walkers: usize,
    /// Walkers still able to move
    pub active_walkers: usize,
    /// Recorded points across all paths
    pub points: usize,
    /// Continuous strokes across all paths
    pub strokes: usize,
    /// Summed polyline length in simulation units
    pub total_length: f64,
    /// Walker count per color group, index 0 is group 1
    pub color_groups: [usize; COLOR_GROUPS],
    /// Stored registry copies (about nine per accepted point)
    pub registry_entries: usize,
    /// Population steps run
    pub steps: usize,
}

impl PathStatistics {
    /// Measure a population
    pub fn from_population(population: &WalkerPopulation) -> Self {
        let mut stats = Self {
            walkers: population.len(),
            active_walkers: population.active_count(),
            registry_entries: population.registry().entry_count(),
            steps: population.steps_taken(),
            ..Self::default()
        };

        for (walker, path) in population.trails() {
            stats.points += path.point_count();
            stats.strokes += path.strokes().len();
            stats.total_length += path.stroke_length();

            let group = usize::from(walker.color_group().max(1)) - 1;
            if let Some(count) = stats.color_groups.get_mut(group) {
                *count += 1;
            }
        }

        stats
    }

    /// Mean stroke length, zero when there are no strokes
    pub const fn mean_stroke_length(&self) -> f64 {
        if self.strokes == 0 {
            0.0
        } else {
            self.total_length / self.strokes as f64
        }
    }
}

impl fmt::Display for PathStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} walkers, {} strokes, {} points, length {:.1} (mean stroke {:.1}), groups {:?}, {} steps",
            self.walkers,
            self.strokes,
            self.points,
            self.total_length,
            self.mean_stroke_length(),
            self.color_groups,
            self.steps
        )
    }
}
