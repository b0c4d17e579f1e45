//! Simulation constants, runtime configuration and validation

use crate::algorithm::spawner::{ColorMode, DropoffAxis};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::Domain;

// Seed handling
/// Seed used when none is given; empty means "derive from the clock"
pub const DEFAULT_SEED: &str = "";
/// Placeholder seed text that is treated like an empty seed
pub const RANDOM_SEED_SENTINEL: &str = "Empty seed is random.";

// Domain and population
/// Default domain half-size
pub const DEFAULT_SIZE: f64 = 90.0;
/// Largest accepted domain half-size
pub const MAX_SIZE: f64 = 100.0;
/// Default population multiplier (squared when computing walker count)
pub const DEFAULT_POPULATION: f64 = 1.0;
/// Largest accepted population multiplier
pub const MAX_POPULATION: f64 = 4.0;
/// Domain area per walker at a population multiplier of one
pub const WALKER_AREA_DIVISOR: f64 = 10.0;

// Walker motion
/// Default minimum spacing between accepted points
pub const DEFAULT_REPULSION: f64 = 1.0;
/// Default maximum turn per step in degrees
pub const DEFAULT_MAX_TURN_DEGREES: f64 = 180.0;
/// Largest accepted maximum turn in degrees
pub const MAX_TURN_DEGREES_LIMIT: f64 = 270.0;
/// Default angular scan step in degrees
pub const DEFAULT_TURN_RESOLUTION_DEGREES: f64 = 0.5;
/// Largest accepted number of turn magnitudes scanned per side
pub const MAX_TURN_STEPS: usize = 10_000;
/// Side length of a registry bin; must not be smaller than the repulsion
pub const DEFAULT_BIN_SIZE: f64 = 2.0;
/// Attempts at drawing a non-zero spawn direction before falling back to +x
pub const MAX_DIRECTION_RESAMPLES: usize = 16;

// Colors and channels
/// Number of color groups walkers are bucketed into
pub const COLOR_GROUPS: usize = 3;
/// Default palette (light pastel blue, dark pastel blue, pastel orange)
pub const DEFAULT_COLORS: [&str; COLOR_GROUPS] = ["#B8E0FF", "#6EAED5", "#FFCBA4"];
/// Default background color
pub const DEFAULT_BACKGROUND: &str = "#FFFFFF";
/// Default number of pencil channels
pub const DEFAULT_CHANNELS: u32 = 1;

// Output
/// Screen resolution used to turn paper inches into pixels
pub const DPI: f64 = 96.0;
/// Largest canvas dimension in pixels
pub const CANVAS_MAX_DIMENSION: f64 = 800.0;
/// Default raster output path
pub const DEFAULT_OUTPUT: &str = "walker-plot.png";
/// Stroke width of exported SVG paths
pub const SVG_STROKE_WIDTH: f64 = 1.5;
/// Default number of population steps between progress refreshes
pub const DEFAULT_STEPS_PER_BATCH: usize = 10;

/// Paper aspect used for the canvas and SVG document size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PaperFormat {
    /// 8.5 x 8.5 inches
    #[default]
    Square,
    /// US letter, landscape
    LetterH,
    /// US letter, portrait
    LetterV,
}

impl PaperFormat {
    /// Paper size in inches (width, height)
    pub const fn inches(self) -> (f64, f64) {
        match self {
            Self::Square => (8.5, 8.5),
            Self::LetterH => (11.0, 8.5),
            Self::LetterV => (8.5, 11.0),
        }
    }

    /// Paper size in pixels at [`DPI`]
    pub const fn document_pixels(self) -> (f64, f64) {
        let (width, height) = self.inches();
        (width * DPI, height * DPI)
    }

    /// Canvas size with the larger side fitted to [`CANVAS_MAX_DIMENSION`]
    pub fn canvas_pixels(self) -> (u32, u32) {
        let (width, height) = self.document_pixels();
        let scale = CANVAS_MAX_DIMENSION / width.max(height);
        ((width * scale).round() as u32, (height * scale).round() as u32)
    }

    /// Identifier used in file names
    pub const fn name(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::LetterH => "letter-h",
            Self::LetterV => "letter-v",
        }
    }
}

/// Stroke pattern of exported paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LineStyle {
    /// Continuous line
    #[default]
    Solid,
    /// Long dashes
    Dashed,
    /// Short dots
    Dotted,
}

impl LineStyle {
    /// SVG `stroke-dasharray` value, `None` for solid lines
    pub const fn dash_array(self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("10,5"),
            Self::Dotted => Some("2,8"),
        }
    }
}

/// Immutable parameters of one simulation run
///
/// Built once, validated once, then shared by reference with the spawner and
/// the population. Changing a parameter means building a new run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Seed text; empty derives a seed from the clock
    pub seed: String,
    /// Domain half-size `S`; the domain is `[-S, S]` on both axes
    pub size: f64,
    /// Population multiplier `m`; walker candidates = `round(m² S² / 10)`
    pub population: f64,
    /// Minimum distance between a candidate and any accepted point
    pub repulsion: f64,
    /// Maximum turn per step in degrees
    pub max_turn_degrees: f64,
    /// Angular scan step in degrees
    pub turn_resolution_degrees: f64,
    /// Peak spawn rejection probability in `[0, 1]`
    pub dropoff_rate: f64,
    /// Direction of the spawn density gradient
    pub dropoff_axis: DropoffAxis,
    /// How walkers are assigned to color groups
    pub color_mode: ColorMode,
    /// Number of pencil channels walkers are spread over
    pub channels: u32,
    /// Channel drawn in single color mode
    pub draw_channel: u32,
    /// Registry bin side length
    pub bin_size: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED.to_string(),
            size: DEFAULT_SIZE,
            population: DEFAULT_POPULATION,
            repulsion: DEFAULT_REPULSION,
            max_turn_degrees: DEFAULT_MAX_TURN_DEGREES,
            turn_resolution_degrees: DEFAULT_TURN_RESOLUTION_DEGREES,
            dropoff_rate: 0.0,
            dropoff_axis: DropoffAxis::None,
            color_mode: ColorMode::Direction,
            channels: DEFAULT_CHANNELS,
            draw_channel: 1,
            bin_size: DEFAULT_BIN_SIZE,
        }
    }
}

impl SimulationConfig {
    /// Check every parameter against its accepted range
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first parameter that is out of
    /// range or not finite
    pub fn validate(&self) -> Result<()> {
        if !(self.size > 0.0 && self.size <= MAX_SIZE) {
            return Err(invalid_parameter(
                "size",
                &self.size,
                &format!("must be in (0, {MAX_SIZE}]"),
            ));
        }
        if !(0.0..=MAX_POPULATION).contains(&self.population) {
            return Err(invalid_parameter(
                "population",
                &self.population,
                &format!("must be in [0, {MAX_POPULATION}]"),
            ));
        }
        if !(self.bin_size > 0.0 && self.bin_size.is_finite()) {
            return Err(invalid_parameter(
                "bin_size",
                &self.bin_size,
                &"must be positive and finite",
            ));
        }
        if !(self.repulsion > 0.0 && self.repulsion <= self.bin_size) {
            return Err(invalid_parameter(
                "repulsion",
                &self.repulsion,
                &format!("must be positive and not exceed the bin size {}", self.bin_size),
            ));
        }
        if !(0.0..=MAX_TURN_DEGREES_LIMIT).contains(&self.max_turn_degrees) {
            return Err(invalid_parameter(
                "max_turn",
                &self.max_turn_degrees,
                &format!("must be in [0, {MAX_TURN_DEGREES_LIMIT}] degrees"),
            ));
        }
        if !(self.turn_resolution_degrees > 0.0 && self.turn_resolution_degrees.is_finite()) {
            return Err(invalid_parameter(
                "turn_resolution",
                &self.turn_resolution_degrees,
                &"must be positive and finite",
            ));
        }
        if self.max_turn_degrees / self.turn_resolution_degrees > MAX_TURN_STEPS as f64 {
            return Err(invalid_parameter(
                "turn_resolution",
                &self.turn_resolution_degrees,
                &format!("max_turn / turn_resolution must not exceed {MAX_TURN_STEPS}"),
            ));
        }
        if !(0.0..=1.0).contains(&self.dropoff_rate) {
            return Err(invalid_parameter(
                "dropoff_rate",
                &self.dropoff_rate,
                &"must be in [0, 1]",
            ));
        }
        if self.channels == 0 {
            return Err(invalid_parameter(
                "channels",
                &self.channels,
                &"at least one channel is required",
            ));
        }
        if !(1..=self.channels).contains(&self.draw_channel) {
            return Err(invalid_parameter(
                "draw_channel",
                &self.draw_channel,
                &format!("must be in [1, {}]", self.channels),
            ));
        }
        Ok(())
    }

    /// Maximum turn per step in radians
    pub const fn max_turn(&self) -> f64 {
        self.max_turn_degrees.to_radians()
    }

    /// Angular scan step in radians
    pub const fn turn_resolution(&self) -> f64 {
        self.turn_resolution_degrees.to_radians()
    }

    /// Squared population multiplier
    pub const fn population_multiplier(&self) -> f64 {
        self.population * self.population
    }

    /// The bounded simulation domain
    pub const fn domain(&self) -> Domain {
        Domain::new(self.size)
    }
}

/// Parameters that only affect how finished paths are drawn
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Stroke colors for groups 1 to 3 as RGBA
    pub colors: [[u8; 4]; COLOR_GROUPS],
    /// Canvas background as RGBA
    pub background: [u8; 4],
    /// Paper aspect
    pub paper: PaperFormat,
    /// Stroke pattern for SVG export
    pub line_style: LineStyle,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            colors: [
                [0xB8, 0xE0, 0xFF, 0xFF],
                [0x6E, 0xAE, 0xD5, 0xFF],
                [0xFF, 0xCB, 0xA4, 0xFF],
            ],
            background: [0xFF, 0xFF, 0xFF, 0xFF],
            paper: PaperFormat::Square,
            line_style: LineStyle::Solid,
        }
    }
}

impl RenderConfig {
    /// Stroke color for a one-based color group, clamped to the palette
    pub fn group_color(&self, color_group: u8) -> [u8; 4] {
        let index = usize::from(color_group.max(1)) - 1;
        self.colors
            .get(index.min(COLOR_GROUPS - 1))
            .copied()
            .unwrap_or([0, 0, 0, 0xFF])
    }
}
