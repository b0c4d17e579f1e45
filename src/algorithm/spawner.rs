//! Initial walker placement, dropoff culling and color assignment

use tracing::debug;

use crate::algorithm::population::WalkerPopulation;
use crate::algorithm::random::RandomSource;
use crate::algorithm::walker::{TurnPreference, Walker};
use crate::io::configuration::{
    COLOR_GROUPS, MAX_DIRECTION_RESAMPLES, SimulationConfig, WALKER_AREA_DIVISOR,
};
use crate::io::error::Result;
use crate::math::Vec2;
use crate::math::interpolation::{angle_sector, map_range};

/// Direction of the spawn density gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum DropoffAxis {
    /// Uniform density
    #[default]
    None,
    /// Fewer walkers towards +x
    XPositive,
    /// Fewer walkers towards -x
    XNegative,
    /// Fewer walkers towards +y
    YPositive,
    /// Fewer walkers towards -y
    YNegative,
    /// Fewer walkers away from the centre
    Radial,
}

/// How walkers are assigned to the three color groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorMode {
    /// Every walker in group 1
    Single,
    /// Sector of the initial heading
    #[default]
    Direction,
    /// Sector of the spawn position seen from the centre
    Position,
}

/// Builds the initial walker set from a configuration
pub struct PopulationSpawner<'a> {
    config: &'a SimulationConfig,
}

impl<'a> PopulationSpawner<'a> {
    /// Create a spawner for `config`
    pub const fn new(config: &'a SimulationConfig) -> Self {
        Self { config }
    }

    /// Number of spawn candidates, `round(m² S² / 10)`
    pub fn candidate_count(&self) -> usize {
        let size = self.config.size;
        let count = (self.config.population_multiplier() * size * size / WALKER_AREA_DIVISOR).round();
        if count.is_finite() && count > 0.0 {
            count as usize
        } else {
            0
        }
    }

    /// Probability in `[0, rate]` of discarding a candidate spawned at `position`
    pub fn dropoff_probability(&self, position: Vec2) -> f64 {
        let rate = self.config.dropoff_rate;
        if rate <= 0.0 {
            return 0.0;
        }
        let s = self.config.size;
        match self.config.dropoff_axis {
            DropoffAxis::None => 0.0,
            DropoffAxis::XPositive => map_range(position.x, -s, s, 0.0, rate),
            DropoffAxis::XNegative => map_range(position.x, s, -s, 0.0, rate),
            DropoffAxis::YPositive => map_range(position.y, -s, s, 0.0, rate),
            DropoffAxis::YNegative => map_range(position.y, s, -s, 0.0, rate),
            DropoffAxis::Radial => map_range(
                position.length(),
                0.0,
                self.config.domain().corner_distance(),
                0.0,
                rate,
            ),
        }
    }

    /// One-based color group for a walker spawned at `position` heading `direction`
    pub fn color_group(&self, position: Vec2, direction: Vec2) -> u8 {
        let sector = match self.config.color_mode {
            ColorMode::Single => return 1,
            ColorMode::Direction => angle_sector(direction.angle(), COLOR_GROUPS),
            ColorMode::Position => angle_sector(position.angle(), COLOR_GROUPS),
        };
        sector as u8 + 1
    }

    /// Spawn a fresh population
    ///
    /// Candidates are drawn in a fixed order (position, heading, turn side,
    /// channel, then the dropoff draw when dropoff is active), so the same
    /// random source state always yields the same population.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration fails validation
    pub fn spawn(&self, rng: &mut RandomSource) -> Result<WalkerPopulation> {
        let mut population = WalkerPopulation::new(self.config)?;

        let s = self.config.size;
        let max_turn = self.config.max_turn();
        let turn_resolution = self.config.turn_resolution();
        let channels = self.config.channels as usize;
        let dropoff_active =
            self.config.dropoff_rate > 0.0 && self.config.dropoff_axis != DropoffAxis::None;

        let candidates = self.candidate_count();
        let mut culled = 0_usize;

        for _ in 0..candidates {
            let position = Vec2::new(rng.range(-s, s), rng.range(-s, s));
            let direction = Self::sample_direction(rng);
            let turn_preference = if rng.coin() {
                TurnPreference::Positive
            } else {
                TurnPreference::Negative
            };
            let channel = rng.index(channels) as u32 + 1;

            if dropoff_active && rng.unit() < self.dropoff_probability(position) {
                culled += 1;
                continue;
            }

            let walker = Walker::new(
                position,
                direction,
                max_turn,
                turn_resolution,
                turn_preference,
            )
            .with_channel(channel)
            .with_color_group(self.color_group(position, direction));
            population.add_walker(walker);
        }

        debug!(
            candidates,
            spawned = population.len(),
            culled,
            "population spawned"
        );
        Ok(population)
    }

    /// Uniform heading from a square sample, resampling degenerate draws
    fn sample_direction(rng: &mut RandomSource) -> Vec2 {
        for _ in 0..MAX_DIRECTION_RESAMPLES {
            let raw = Vec2::new(rng.range(-0.5, 0.5), rng.range(-0.5, 0.5));
            if let Some(direction) = raw.normalize() {
                return direction;
            }
        }
        Vec2::new(1.0, 0.0)
    }
}
