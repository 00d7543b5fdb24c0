//! Game state and core simulation types
//!
//! Everything a session mutates lives in [`GameState`]; subsystems take it by
//! `&mut` and report what happened through [`GameEvent`]s.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::difficulty::{Difficulty, DifficultyProfile, SpawnWindow};
use super::shield::Shield;
use super::timer::Timers;
use crate::consts::*;

/// Hazard glyphs, indexed by `FallingEntity::variant`
pub const HAZARD_GLYPHS: [&str; 5] = ["💣", "🪨", "🍄", "👾", "☄️"];
/// Benefit glyphs, indexed by `FallingEntity::variant`
pub const BENEFIT_GLYPHS: [&str; 5] = ["🍕", "🍎", "🥩", "🍗", "🍍"];
pub const SHIELD_GLYPH: &str = "🛡️";

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No session started yet
    Idle,
    /// Active gameplay
    Running,
    /// Frozen; timers cancelled, shield remainder captured
    Paused,
    /// Health reached zero. Terminal until the next start.
    GameOver,
}

/// Playfield size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 800.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn avatar_size(&self) -> f32 {
        self.height * AVATAR_SIZE_FRACTION
    }

    pub fn entity_size(&self) -> f32 {
        self.height * ENTITY_SIZE_FRACTION
    }

    /// Entities below this line are discarded
    pub fn despawn_y(&self) -> f32 {
        self.height + ENTITY_DESPAWN_MARGIN
    }
}

/// Steering intent from the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Left,
    #[default]
    Still,
    Right,
}

impl Direction {
    pub fn sign(&self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Still => 0.0,
            Direction::Right => 1.0,
        }
    }
}

/// The player's avatar, moving along the bottom of the viewport
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Avatar {
    /// Left edge
    pub x: f32,
    /// Top edge (fixed for the session)
    pub y: f32,
    /// Signed horizontal speed (px/ms)
    pub velocity: f32,
    /// Square box edge length
    pub size: f32,
    /// Largest legal `x`
    pub max_x: f32,
}

impl Avatar {
    /// A stationary avatar centred at the bottom of `viewport`
    pub fn centered(viewport: &Viewport) -> Self {
        let size = viewport.avatar_size();
        let max_x = (viewport.width - size).max(0.0);
        Self {
            x: max_x / 2.0,
            y: viewport.height - size - viewport.height * AVATAR_BOTTOM_MARGIN_FRACTION,
            velocity: 0.0,
            size,
            max_x,
        }
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.velocity = direction.sign() * AVATAR_SPEED;
    }

    pub fn integrate(&mut self, dt_ms: f64) {
        self.x = (self.x + self.velocity * dt_ms as f32).clamp(0.0, self.max_x);
    }

    /// Jump straight to `x` (pointer/drag input), clamped to the viewport
    pub fn set_absolute_position(&mut self, x: f32) {
        self.x = x.clamp(0.0, self.max_x);
    }

    /// Adopt a new viewport size, keeping the avatar inside it
    pub fn fit(&mut self, viewport: &Viewport) {
        let laid_out = Self::centered(viewport);
        self.size = laid_out.size;
        self.max_x = laid_out.max_x;
        self.y = laid_out.y;
        self.x = self.x.clamp(0.0, self.max_x);
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(Vec2::new(self.x, self.y), Vec2::splat(self.size))
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.size / 2.0
    }
}

/// Falling object categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Costs health unless shielded
    Hazard,
    /// Restores health
    Benefit,
    /// Grants the shield
    ShieldPickup,
}

/// A falling object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallingEntity {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    /// Base fall speed (px/ms), before the session speed multiplier
    pub fall_speed: f32,
    pub kind: EntityKind,
    /// Index into the glyph set for `kind`
    pub variant: u8,
    pub size: f32,
    pub removed: bool,
}

impl FallingEntity {
    /// Advance downward; marks itself removed once past `despawn_y`
    pub fn step(&mut self, dt_ms: f64, speed_multiplier: f32, despawn_y: f32) {
        if self.removed {
            return;
        }
        self.pos.y += self.fall_speed * speed_multiplier * dt_ms as f32;
        if self.pos.y > despawn_y {
            self.removed = true;
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(self.size))
    }

    pub fn glyph(&self) -> &'static str {
        let i = self.variant as usize;
        match self.kind {
            EntityKind::Hazard => HAZARD_GLYPHS[i % HAZARD_GLYPHS.len()],
            EntityKind::Benefit => BENEFIT_GLYPHS[i % BENEFIT_GLYPHS.len()],
            EntityKind::ShieldPickup => SHIELD_GLYPH,
        }
    }
}

/// Things the presentation and persistence layers react to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started { difficulty: Difficulty },
    Paused,
    Resumed,
    Spawned { id: u32, kind: EntityKind },
    /// A hit or heal landed; drives the flash. `delta` is the change actually
    /// applied after clamping, so it can be zero.
    HealthChanged { delta: i16, health: u8 },
    /// A hazard hit was absorbed by the shield
    HazardBlocked,
    ShieldGained { refreshed: bool },
    /// Shield wore off; show the lost cue and a short countdown
    ShieldLost { countdown_secs: u32 },
    LevelUp { level: u32, visual_level: u32 },
    GameOver { score: u64, best: u64, new_best: bool },
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    /// Session clock; advances on every tick, paused or not
    pub now_ms: f64,
    pub phase: SessionPhase,
    pub difficulty: Difficulty,
    pub profile: DifficultyProfile,
    /// Current spawn delay bounds (tightened by level ups)
    pub spawn_window: SpawnWindow,
    pub viewport: Viewport,
    pub avatar: Avatar,
    /// Active falling objects in spawn order
    pub entities: Vec<FallingEntity>,
    pub health: u8,
    pub shield: Shield,
    pub score: u64,
    /// Best score known to this session (loaded from storage by the caller)
    pub best_score: u64,
    pub level: u32,
    pub speed_multiplier: f32,
    pub timers: Timers,
    /// Events raised by the most recent tick or transition
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create an idle session with the given seed
    pub fn new(seed: u64, viewport: Viewport, best_score: u64) -> Self {
        let difficulty = Difficulty::default();
        let profile = difficulty.profile();
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            now_ms: 0.0,
            phase: SessionPhase::Idle,
            difficulty,
            profile,
            spawn_window: profile.spawn_window(),
            viewport,
            avatar: Avatar::centered(&viewport),
            entities: Vec::new(),
            health: MAX_HEALTH,
            shield: Shield::Down,
            score: 0,
            best_score,
            level: 1,
            speed_multiplier: 1.0,
            timers: Timers::default(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    pub fn is_paused(&self) -> bool {
        self.phase == SessionPhase::Paused
    }

    pub fn is_shielded(&self) -> bool {
        self.shield.is_up(self.now_ms)
    }

    pub fn health_percent(&self) -> u8 {
        ((self.health as f32 / MAX_HEALTH as f32) * 100.0).round() as u8
    }

    /// Cosmetic level index, cycling while the numeric level keeps growing
    pub fn visual_level(&self) -> u32 {
        (self.level.saturating_sub(1) % VISUAL_LEVEL_COUNT) + 1
    }

    /// Adopt a new viewport size; the avatar is re-clamped
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.avatar.fit(&viewport);
    }

    /// Wipe everything a session mutates; the seed stream and best score survive
    pub(crate) fn reset_session(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.profile = difficulty.profile();
        self.spawn_window = self.profile.spawn_window();
        self.avatar = Avatar::centered(&self.viewport);
        self.entities.clear();
        self.health = MAX_HEALTH;
        self.shield.clear();
        self.score = 0;
        self.level = 1;
        self.speed_multiplier = 1.0;
        self.timers.cancel_all();
    }

    /// Drop removed entities
    pub fn compact(&mut self) {
        self.entities.retain(|e| !e.removed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_starts_centered_and_clamps() {
        let viewport = Viewport::new(400.0, 1000.0);
        let mut avatar = Avatar::centered(&viewport);
        assert!((avatar.size - 60.0).abs() < 1e-3);
        assert!((avatar.max_x - 340.0).abs() < 1e-3);
        assert!((avatar.x - 170.0).abs() < 1e-3);

        avatar.set_direction(Direction::Left);
        avatar.integrate(10_000.0);
        assert_eq!(avatar.x, 0.0);

        avatar.set_direction(Direction::Right);
        avatar.integrate(10_000.0);
        assert_eq!(avatar.x, avatar.max_x);

        avatar.set_direction(Direction::Still);
        avatar.integrate(10_000.0);
        assert_eq!(avatar.x, avatar.max_x);
    }

    #[test]
    fn test_avatar_absolute_position_clamps() {
        let mut avatar = Avatar::centered(&Viewport::new(400.0, 1000.0));
        avatar.set_absolute_position(-25.0);
        assert_eq!(avatar.x, 0.0);
        avatar.set_absolute_position(100.0);
        assert_eq!(avatar.x, 100.0);
        avatar.set_absolute_position(1e6);
        assert_eq!(avatar.x, avatar.max_x);
    }

    #[test]
    fn test_avatar_velocity_matches_speed() {
        let mut avatar = Avatar::centered(&Viewport::default());
        let start = avatar.x;
        avatar.set_direction(Direction::Right);
        avatar.integrate(100.0);
        assert!((avatar.x - start - AVATAR_SPEED * 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_entity_falls_and_despawns() {
        let mut entity = FallingEntity {
            id: 1,
            pos: Vec2::new(10.0, -ENTITY_SPAWN_OFFSET),
            fall_speed: 0.1,
            kind: EntityKind::Hazard,
            variant: 0,
            size: 40.0,
            removed: false,
        };
        entity.step(100.0, 2.0, 100.0);
        assert!((entity.pos.y - (-20.0)).abs() < 1e-4);
        assert!(!entity.removed);

        entity.step(1000.0, 2.0, 100.0);
        assert!(entity.removed);

        let y = entity.pos.y;
        entity.step(1000.0, 2.0, 100.0);
        assert_eq!(entity.pos.y, y);
    }

    #[test]
    fn test_glyphs() {
        let mut entity = FallingEntity {
            id: 1,
            pos: Vec2::ZERO,
            fall_speed: 0.1,
            kind: EntityKind::Benefit,
            variant: 1,
            size: 40.0,
            removed: false,
        };
        assert_eq!(entity.glyph(), "🍎");
        entity.kind = EntityKind::ShieldPickup;
        assert_eq!(entity.glyph(), SHIELD_GLYPH);
    }

    #[test]
    fn test_visual_level_cycles() {
        let mut state = GameState::new(1, Viewport::default(), 0);
        assert_eq!(state.visual_level(), 1);
        state.level = 10;
        assert_eq!(state.visual_level(), 10);
        state.level = 11;
        assert_eq!(state.visual_level(), 1);
    }

    #[test]
    fn test_resize_reclamps_avatar() {
        let mut state = GameState::new(1, Viewport::new(800.0, 800.0), 0);
        state.avatar.set_absolute_position(700.0);
        state.resize(Viewport::new(300.0, 800.0));
        assert!(state.avatar.x <= 300.0 - state.avatar.size);
    }
}
