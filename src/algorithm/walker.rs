//! Single trail-growing agent and its candidate search
//!
//! A walker moves one unit per step. Each step it scans turn angles from
//! straight ahead outwards, first exhausting its preferred side up to the
//! maximum turn, then the other side, and takes the first candidate the
//! registry does not block. When nothing is free it goes back to where it
//! spawned and grows a second stroke in the opposite heading; when that one
//! also runs out of room the walker retires.

use tracing::trace;

use crate::algorithm::path::PathRecorder;
use crate::math::{Vec2, rot2d, trans};
use crate::spatial::{PointId, SpatialRegistry};

// Absorbs rounding in max_turn / turn_resolution so the last angle is kept
const TURN_STEP_TOLERANCE: f64 = 1e-9;

/// Motion state; only ever advances Forward -> Reverse -> Inactive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkMode {
    /// Growing the first stroke from the spawn position
    Forward,
    /// Growing the second stroke from the spawn position, heading reversed
    Reverse,
    /// Finished; further steps do nothing
    Inactive,
}

/// Which turn side is scanned first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPreference {
    /// Positive rotation angles first
    Positive,
    /// Negative rotation angles first
    Negative,
}

impl TurnPreference {
    /// `+1.0` or `-1.0`
    pub const fn sign(self) -> f64 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }
}

/// Result of one walker step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The walker was already inactive
    Idle,
    /// A candidate was accepted and registered
    Moved,
    /// Forward search failed; the walker restarted from its spawn position
    Reversed,
    /// Reverse search failed; the walker is now inactive
    Finished,
}

/// Accepted next position and the heading that reaches it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Next head of the trail
    pub position: Vec2,
    /// Rotated unit heading
    pub direction: Vec2,
}

/// Trail-growing agent
#[derive(Debug, Clone)]
pub struct Walker {
    position: Vec2,
    direction: Vec2,
    start_position: Vec2,
    reverse_direction: Vec2,
    max_turn: f64,
    turn_resolution: f64,
    turn_preference: TurnPreference,
    mode: WalkMode,
    channel: u32,
    color_group: u8,
    /// Registry entry of the current position, excluded from proximity tests
    head: Option<PointId>,
    /// Registry entry of the spawn position
    origin: Option<PointId>,
}

impl Walker {
    /// Create a forward-moving walker at `position`
    ///
    /// `direction` is normalized; a zero or non-finite heading falls back to
    /// +x. Angles are in radians. Channel and color group default to 1.
    pub fn new(
        position: Vec2,
        direction: Vec2,
        max_turn: f64,
        turn_resolution: f64,
        turn_preference: TurnPreference,
    ) -> Self {
        let direction = direction.normalize().unwrap_or(Vec2::new(1.0, 0.0));
        Self {
            position,
            direction,
            start_position: position,
            reverse_direction: -direction,
            max_turn,
            turn_resolution,
            turn_preference,
            mode: WalkMode::Forward,
            channel: 1,
            color_group: 1,
            head: None,
            origin: None,
        }
    }

    /// Set the pencil channel
    #[must_use]
    pub const fn with_channel(mut self, channel: u32) -> Self {
        self.channel = channel;
        self
    }

    /// Set the color group
    #[must_use]
    pub const fn with_color_group(mut self, color_group: u8) -> Self {
        self.color_group = color_group;
        self
    }

    /// Current head of the trail
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Current unit heading
    pub const fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Spawn position
    pub const fn start_position(&self) -> Vec2 {
        self.start_position
    }

    /// Heading used for the reverse stroke
    pub const fn reverse_direction(&self) -> Vec2 {
        self.reverse_direction
    }

    /// Maximum turn per step in radians
    pub const fn max_turn(&self) -> f64 {
        self.max_turn
    }

    /// Angular scan step in radians
    pub const fn turn_resolution(&self) -> f64 {
        self.turn_resolution
    }

    /// Side scanned first
    pub const fn turn_preference(&self) -> TurnPreference {
        self.turn_preference
    }

    /// Current motion state
    pub const fn mode(&self) -> WalkMode {
        self.mode
    }

    /// Whether the walker can still move
    pub const fn is_active(&self) -> bool {
        !matches!(self.mode, WalkMode::Inactive)
    }

    /// Pencil channel, one-based
    pub const fn channel(&self) -> u32 {
        self.channel
    }

    /// Color group, one-based
    pub const fn color_group(&self) -> u8 {
        self.color_group
    }

    /// Registry entry of the current position
    pub const fn head(&self) -> Option<PointId> {
        self.head
    }

    /// Bind the walker to the registry entry of its spawn position
    pub const fn anchor(&mut self, id: PointId) {
        self.head = Some(id);
        self.origin = Some(id);
    }

    /// Number of turn magnitudes scanned per side, straight ahead included
    ///
    /// Saturates at `usize::MAX` for resolutions too fine to count; validated
    /// configurations stay far below that.
    pub fn turn_steps(&self) -> usize {
        if self.turn_resolution > 0.0 && self.turn_resolution.is_finite() && self.max_turn > 0.0 {
            let magnitudes = (self.max_turn / self.turn_resolution + TURN_STEP_TOLERANCE).floor();
            (magnitudes as usize).saturating_add(1)
        } else {
            1
        }
    }

    /// First unblocked candidate in scan order, if any
    ///
    /// Scan order: preferred side from zero turn up to `max_turn` in steps of
    /// `turn_resolution`, then the other side the same way. Straight ahead is
    /// therefore always tried first.
    pub fn find_candidate(&self, registry: &SpatialRegistry, repulsion: f64) -> Option<Candidate> {
        let steps = self.turn_steps();
        let preference = self.turn_preference.sign();

        for side in [1.0, -1.0] {
            for k in 0..steps {
                let turn = k as f64 * self.turn_resolution;
                let direction = trans(&rot2d(preference * side * turn), self.direction);
                let position = self.position + direction;
                if !registry.query_blocked(position, self.head, repulsion) {
                    return Some(Candidate {
                        position,
                        direction,
                    });
                }
            }
        }
        None
    }

    /// Advance the walker by one step
    ///
    /// Records the current position, then either moves to the next candidate
    /// (registering it) or falls back: Forward restarts in reverse from the
    /// spawn position, Reverse retires. Both fallbacks record a stroke break.
    pub fn step(
        &mut self,
        registry: &mut SpatialRegistry,
        recorder: &mut PathRecorder,
        repulsion: f64,
    ) -> StepOutcome {
        if self.mode == WalkMode::Inactive {
            return StepOutcome::Idle;
        }

        recorder.push_point(self.position);

        if let Some(candidate) = self.find_candidate(registry, repulsion) {
            self.position = candidate.position;
            self.direction = candidate.direction;
            self.head = Some(registry.register_point(candidate.position));
            return StepOutcome::Moved;
        }

        recorder.push_break();

        if self.mode == WalkMode::Reverse {
            self.mode = WalkMode::Inactive;
            trace!(
                origin = self.origin.map(PointId::index),
                x = self.start_position.x,
                y = self.start_position.y,
                "walker finished"
            );
            return StepOutcome::Finished;
        }

        self.position = self.start_position;
        self.direction = self.reverse_direction;
        self.head = self.origin;
        self.mode = WalkMode::Reverse;
        trace!(
            origin = self.origin.map(PointId::index),
            x = self.start_position.x,
            y = self.start_position.y,
            "walker reversing"
        );
        StepOutcome::Reversed
    }
}
