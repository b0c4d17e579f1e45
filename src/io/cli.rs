//! Command-line interface for running a walker simulation and exporting it

use crate::algorithm::PopulationSpawner;
use crate::algorithm::WalkerPopulation;
use crate::algorithm::random::{RandomSource, resolve_seed};
use crate::algorithm::spawner::{ColorMode, DropoffAxis};
use crate::analysis::statistics::PathStatistics;
use crate::io::configuration::{
    DEFAULT_BACKGROUND, DEFAULT_CHANNELS, DEFAULT_COLORS, DEFAULT_MAX_TURN_DEGREES,
    DEFAULT_OUTPUT, DEFAULT_POPULATION, DEFAULT_REPULSION, DEFAULT_SEED, DEFAULT_SIZE,
    DEFAULT_STEPS_PER_BATCH, DEFAULT_TURN_RESOLUTION_DEGREES, LineStyle, PaperFormat,
    RenderConfig, SimulationConfig,
};
use crate::io::error::Result;
use crate::io::image::export_paths_as_png;
use crate::io::palette::parse_hex_color;
use crate::io::progress::ProgressManager;
use crate::io::svg::export_svg;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser, Debug, Clone)]
#[command(name = "walkerpaths")]
#[command(
    author,
    version,
    about = "Grow self-avoiding walker trails for pen plotters"
)]
/// Command-line arguments for the walker path generator
pub struct Cli {
    /// Seed text; empty derives a seed from the clock
    #[arg(long, default_value = DEFAULT_SEED)]
    pub seed: String,

    /// Domain half-size
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    pub size: f64,

    /// Walker population multiplier per area
    #[arg(short, long, default_value_t = DEFAULT_POPULATION)]
    pub population: f64,

    /// Minimum distance between trail points
    #[arg(short, long, default_value_t = DEFAULT_REPULSION)]
    pub repulsion: f64,

    /// Maximum turn per step in degrees
    #[arg(short = 't', long, default_value_t = DEFAULT_MAX_TURN_DEGREES)]
    pub max_turn: f64,

    /// Angular scan step in degrees
    #[arg(long, default_value_t = DEFAULT_TURN_RESOLUTION_DEGREES)]
    pub turn_resolution: f64,

    /// Peak probability of discarding a walker at spawn
    #[arg(long, default_value_t = 0.0)]
    pub dropoff_rate: f64,

    /// Direction of the spawn density gradient
    #[arg(long, value_enum, default_value_t = DropoffAxis::None)]
    pub dropoff: DropoffAxis,

    /// How walkers are assigned to the three colors
    #[arg(short, long, value_enum, default_value_t = ColorMode::Direction)]
    pub color_mode: ColorMode,

    /// First color
    #[arg(long, default_value = DEFAULT_COLORS[0])]
    pub color1: String,

    /// Second color
    #[arg(long, default_value = DEFAULT_COLORS[1])]
    pub color2: String,

    /// Third color
    #[arg(long, default_value = DEFAULT_COLORS[2])]
    pub color3: String,

    /// Preview background color
    #[arg(long, default_value = DEFAULT_BACKGROUND)]
    pub background: String,

    /// Number of pencil channels
    #[arg(long, default_value_t = DEFAULT_CHANNELS)]
    pub pencils: u32,

    /// Channel shown in the preview in single color mode
    #[arg(long, default_value_t = 1)]
    pub draw_pencil: u32,

    /// Paper format of the outputs
    #[arg(long, value_enum, default_value_t = PaperFormat::Square)]
    pub paper: PaperFormat,

    /// Stroke pattern in the SVG export
    #[arg(long, value_enum, default_value_t = LineStyle::Solid)]
    pub line_style: LineStyle,

    /// PNG preview path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Also write a layered SVG to this path
    #[arg(long, value_name = "PATH")]
    pub svg: Option<PathBuf>,

    /// Stop after this many population steps even if walkers remain active
    #[arg(short, long)]
    pub max_steps: Option<usize>,

    /// Population steps between progress refreshes
    #[arg(short, long, default_value_t = DEFAULT_STEPS_PER_BATCH)]
    pub batch: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default tracing filter directive when `RUST_LOG` is unset
    pub const fn log_filter(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// Simulation parameters described by the arguments
    pub fn simulation_config(&self) -> SimulationConfig {
        SimulationConfig {
            seed: self.seed.clone(),
            size: self.size,
            population: self.population,
            repulsion: self.repulsion,
            max_turn_degrees: self.max_turn,
            turn_resolution_degrees: self.turn_resolution,
            dropoff_rate: self.dropoff_rate,
            dropoff_axis: self.dropoff,
            color_mode: self.color_mode,
            channels: self.pencils,
            draw_channel: self.draw_pencil,
            ..SimulationConfig::default()
        }
    }

    /// Rendering parameters described by the arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidColor` if any color argument is not a hex color
    pub fn render_config(&self) -> Result<RenderConfig> {
        Ok(RenderConfig {
            colors: [
                parse_hex_color(&self.color1)?,
                parse_hex_color(&self.color2)?,
                parse_hex_color(&self.color3)?,
            ],
            background: parse_hex_color(&self.background)?,
            paper: self.paper,
            line_style: self.line_style,
        })
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Seed text actually used, after clock substitution
    pub seed: String,
    /// Measurements of the final path data
    pub statistics: PathStatistics,
    /// False if the step limit stopped the run with walkers still active
    pub completed: bool,
}

/// Orchestrates one simulation run from arguments to exported files
pub struct SimulationRunner {
    cli: Cli,
}

impl SimulationRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Spawn, step to completion (or the step limit) and export
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or an export fails
    pub fn run(&self) -> Result<RunReport> {
        let start_time = Instant::now();
        let simulation = self.cli.simulation_config();
        simulation.validate()?;
        let render = self.cli.render_config()?;

        let seed = resolve_seed(&simulation.seed);
        let mut rng = RandomSource::from_seed_str(&seed);
        let mut population = PopulationSpawner::new(&simulation).spawn(&mut rng)?;
        info!(seed = %seed, walkers = population.len(), "population ready");

        let completed = self.simulate(&mut population);
        if !completed {
            warn!(
                active = population.active_count(),
                steps = population.steps_taken(),
                "step limit reached with walkers still active"
            );
        }

        export_paths_as_png(&population, &simulation, &render, &self.cli.output)?;
        info!(path = %self.cli.output.display(), "preview written");

        if let Some(svg_path) = &self.cli.svg {
            export_svg(&population, &render, svg_path)?;
            info!(path = %svg_path.display(), "svg written");
        }

        let statistics = PathStatistics::from_population(&population);
        info!(
            elapsed_ms = start_time.elapsed().as_millis(),
            "simulation complete: {statistics}"
        );

        Ok(RunReport {
            seed,
            statistics,
            completed,
        })
    }

    /// Step in batches until nothing is active or the step limit is hit
    ///
    /// Returns whether every walker finished.
    fn simulate(&self, population: &mut WalkerPopulation) -> bool {
        let progress = if self.cli.should_show_progress() {
            ProgressManager::new(population.len())
        } else {
            ProgressManager::hidden(population.len())
        };

        let batch = self.cli.batch.max(1);
        let mut steps = 0;
        while population.has_active() {
            let budget = self
                .cli
                .max_steps
                .map_or(batch, |limit| batch.min(limit.saturating_sub(steps)));
            if budget == 0 {
                break;
            }
            steps += population.step_batch(budget);
            progress.update(population.active_count(), steps);
        }

        progress.finish();
        !population.has_active()
    }
}
