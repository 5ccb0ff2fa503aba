use cove_core::{Color, Rect, Vec2};
use cove_theater::{Action, GroupId, Input, Key, Sequencer, Surface};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::camera::Camera;
use crate::config::PlayConfig;
use crate::error::PlayResult;
use crate::map::TileMap;
use crate::npc::Npc;
use crate::player::Player;
use crate::stage::Stage;

const PLAYER_COLOR: Color = Color::rgb(0x4f, 0x8f, 0xe8);
const NPC_COLOR: Color = Color::rgb(0xf0, 0xc0, 0x40);
const OUTLINE_COLOR: Color = Color::rgb(0x20, 0x20, 0x20);
const DEFAULT_VIEWPORT: Vec2 = Vec2::new(480.0, 270.0);

/// The running game: map, entities, camera, and the cutscene sequencer.
///
/// Frame order in [`PlayState::tick`]: sequencer, one-shot keys, player
/// and NPC control, integration, camera. [`PlayState::render`] draws the
/// world first and the sequencer's overlays last.
pub struct PlayState {
    config: PlayConfig,
    map: TileMap,
    stage: Stage,
    sequencer: Sequencer,
    player: Player,
    npcs: Vec<Npc>,
    camera: Camera,
    rng: StdRng,
    tile_size: f64,
    viewport: Vec2,
}

impl std::fmt::Debug for PlayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayState")
            .field("map", &self.map.name())
            .field("entities", &self.stage.len())
            .field("sequencer", &self.sequencer)
            .field("tile_size", &self.tile_size)
            .finish()
    }
}

impl PlayState {
    /// Start a session on the demo island.
    pub fn new(config: PlayConfig) -> PlayResult<Self> {
        let map = TileMap::cool_island()?;
        let mut stage = Stage::new();
        let player = Player::spawn(&mut stage, Vec2::new(12.0, 12.0))?;
        let npcs = vec![
            Npc::spawn(
                &mut stage,
                "Sparky",
                Vec2::new(6.0, 9.0),
                ["Hey, would you run to the top-left corner for me?"],
            )?,
            Npc::spawn(
                &mut stage,
                "Squirty",
                Vec2::new(20.0, 9.0),
                ["I've got a quest for you!", "Go talk to the man past the lava."],
            )?,
            Npc::spawn(
                &mut stage,
                "Bulby",
                Vec2::new(14.0, 3.0),
                ["Hi!", "You're awesome!"],
            )?,
        ];
        Self::with_world(config, map, stage, player, npcs)
    }

    /// Start a session on an arbitrary map and cast.
    pub fn with_world(
        config: PlayConfig,
        map: TileMap,
        stage: Stage,
        player: Player,
        npcs: Vec<Npc>,
    ) -> PlayResult<Self> {
        config.validate()?;
        let focus = stage.get(player.id())?.bounds().center();
        let mut camera = Camera::new();
        camera.snap_to(focus, config.tile_size, DEFAULT_VIEWPORT);
        info!(map = map.name(), entities = stage.len(), seed = config.seed, "play state ready");
        Ok(Self {
            rng: StdRng::seed_from_u64(config.seed),
            sequencer: Sequencer::new(config.theater.clone()),
            tile_size: config.tile_size,
            viewport: DEFAULT_VIEWPORT,
            config,
            map,
            stage,
            player,
            npcs,
            camera,
        })
    }

    /// Advance one frame of `delta_ms` milliseconds.
    pub fn tick(&mut self, input: &dyn Input, delta_ms: f64) -> PlayResult<()> {
        self.sequencer.tick(&mut self.stage, input, delta_ms);
        self.handle_keys(input);

        self.player.control(
            &mut self.stage,
            input,
            &self.sequencer,
            self.config.player_speed,
            delta_ms,
        )?;
        if input.was_released(self.config.theater.confirm_key) && !self.sequencer.has_active() {
            self.interact()?;
        }
        for npc in &mut self.npcs {
            npc.wander(
                &mut self.stage,
                &self.sequencer,
                &mut self.rng,
                &self.config,
                delta_ms,
            )?;
        }

        self.stage.integrate(&self.map);

        let focus = self.stage.get(self.player.id())?.bounds().center();
        self.camera.follow(
            focus,
            self.tile_size,
            self.viewport,
            self.config.camera_smoothing,
        );
        Ok(())
    }

    fn handle_keys(&mut self, input: &dyn Input) {
        if input.was_released(Key::Trigger) && !self.sequencer.has_active() {
            self.play_demo();
        }
        if input.was_released(Key::CameraMode) {
            let smooth = self.camera.toggle_smooth();
            debug!(smooth, "camera mode");
        }
        if input.was_released(Key::ZoomIn) {
            self.zoom(self.config.zoom_step);
        }
        if input.was_released(Key::ZoomOut) {
            self.zoom(-self.config.zoom_step);
        }
    }

    /// Queue the showcase sequence: fade, greeting, pause, and a walk to the
    /// corner of the island.
    pub fn play_demo(&mut self) -> Vec<GroupId> {
        info!("demo sequence queued");
        self.sequencer.enqueue_sequential([
            Action::fade(1000.0, 1000.0, 2000.0, Color::BLACK),
            Action::dialog("Hi!"),
            Action::wait(2000.0),
            Action::move_to(self.player.id(), Vec2::new(1.0, 1.0), 1000.0, true),
        ])
    }

    /// Talk to whatever stands in front of the player.
    ///
    /// The first NPC with something to say queues its lines one after
    /// another. Returns whether anything was queued.
    pub fn interact(&mut self) -> PlayResult<bool> {
        for target in self.player.interaction_targets(&self.stage)? {
            let Some(npc) = self.npcs.iter().find(|n| n.id() == target) else {
                continue;
            };
            if npc.lines().is_empty() {
                continue;
            }
            info!(npc = %target, lines = npc.lines().len(), "conversation started");
            self.sequencer.enqueue_sequential(npc.dialog());
            return Ok(true);
        }
        Ok(false)
    }

    /// Change the tile size by `step` pixels, within the configured bounds.
    pub fn zoom(&mut self, step: f64) {
        self.tile_size =
            (self.tile_size + step).clamp(self.config.min_tile_size, self.config.max_tile_size);
        debug!(tile_size = self.tile_size, "zoom");
    }

    /// Draw the map, then entities back to front, then sequencer overlays.
    pub fn render(&mut self, surface: &mut dyn Surface) {
        let screen = surface.viewport();
        let ts = self.tile_size;

        for (pos, tile) in self.map.tiles() {
            let rect = self
                .camera
                .world_to_screen(&Rect::new(pos.x, pos.y, 1.0, 1.0), ts);
            if rect.intersects(&screen) {
                surface.fill_rect(rect, tile.color());
            }
        }

        for entity in self.stage.draw_order() {
            let rect = self.camera.world_to_screen(&entity.bounds(), ts);
            if !rect.intersects(&screen) {
                continue;
            }
            let color = if entity.id == self.player.id() {
                PLAYER_COLOR
            } else {
                NPC_COLOR
            };
            surface.fill_rect(rect, color);
            surface.stroke_rect(rect, OUTLINE_COLOR);
        }

        self.sequencer.render(surface, self.camera.offset());
    }

    /// Tell the camera how large the screen is, in pixels.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = Vec2::new(width, height);
    }

    /// Current screen size used for centering.
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Rendered tile size in pixels.
    pub fn tile_size(&self) -> f64 {
        self.tile_size
    }

    /// The map being played.
    pub fn map(&self) -> &TileMap {
        &self.map
    }

    /// All entities.
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// All entities, mutably.
    pub fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    /// The cutscene sequencer.
    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    /// The cutscene sequencer, for queueing actions.
    pub fn sequencer_mut(&mut self) -> &mut Sequencer {
        &mut self.sequencer
    }

    /// The player.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Every NPC.
    pub fn npcs(&self) -> &[Npc] {
        &self.npcs
    }

    /// The camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Session configuration.
    pub fn config(&self) -> &PlayConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use cove_core::Facing;
    use cove_theater::{KeyState, RecordingSurface};

    use super::*;

    fn state() -> PlayState {
        PlayState::new(PlayConfig::default()).unwrap()
    }

    #[test]
    fn new_session_has_player_and_npcs() {
        let s = state();
        assert_eq!(s.stage().len(), 4);
        assert_eq!(s.npcs().len(), 3);
        assert!(!s.sequencer().has_active());
        assert_eq!(s.map().name(), "Cool Island");
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = PlayConfig::default().with_player_speed(0.0);
        assert!(PlayState::new(cfg).is_err());
    }

    #[test]
    fn walking_moves_player() {
        let mut s = state();
        let start = s.stage().get(s.player().id()).unwrap().pos;
        let input = KeyState::new().with_held(Key::Right);
        s.tick(&input, 10.0).unwrap();
        let pos = s.stage().get(s.player().id()).unwrap().pos;
        assert!(pos.approx_eq(start + Vec2::new(0.1, 0.0), 1e-9));
    }

    #[test]
    fn trigger_queues_demo_and_locks_input() {
        let mut s = state();
        s.tick(&KeyState::new().with_released(Key::Trigger), 10.0).unwrap();
        assert_eq!(s.sequencer().len(), 4);

        let start = s.stage().get(s.player().id()).unwrap().pos;
        s.tick(&KeyState::new().with_held(Key::Right), 10.0).unwrap();
        assert_eq!(s.stage().get(s.player().id()).unwrap().pos, start);

        // A second trigger while busy is ignored.
        s.tick(&KeyState::new().with_released(Key::Trigger), 10.0).unwrap();
        assert_eq!(s.sequencer().len(), 4);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut s = state();
        for _ in 0..100 {
            s.tick(&KeyState::new().with_released(Key::ZoomIn), 1.0).unwrap();
        }
        assert!((s.tile_size() - 64.0).abs() < f64::EPSILON);
        for _ in 0..100 {
            s.tick(&KeyState::new().with_released(Key::ZoomOut), 1.0).unwrap();
        }
        assert!((s.tile_size() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn camera_mode_toggles() {
        let mut s = state();
        assert!(s.camera().is_smooth());
        s.tick(&KeyState::new().with_released(Key::CameraMode), 1.0).unwrap();
        assert!(!s.camera().is_smooth());
    }

    #[test]
    fn talking_to_npc_queues_its_lines() {
        let mut s = state();
        let bulby = s.npcs()[2].id();
        let bulby_pos = s.stage().get(bulby).unwrap().pos;
        let pid = s.player().id();
        {
            let player = s.stage_mut().get_mut(pid).unwrap();
            player.pos = bulby_pos + Vec2::new(0.0, 1.0);
            player.facing = Facing::Up;
        }
        s.tick(&KeyState::new().with_released(Key::Confirm), 1.0).unwrap();
        assert_eq!(s.sequencer().len(), 2);

        // The same release does not also close the first line.
        s.tick(&KeyState::new(), 1.0).unwrap();
        assert_eq!(s.sequencer().len(), 2);
    }

    #[test]
    fn render_draws_world_then_overlay() {
        let mut s = state();
        s.play_demo();
        s.tick(&KeyState::new(), 500.0).unwrap();
        let mut surface = RecordingSurface::new(480.0, 270.0);
        s.render(&mut surface);

        let last = surface.fills().last().unwrap();
        assert_eq!(*last.0, Rect::new(0.0, 0.0, 480.0, 270.0));
        assert_eq!(last.1.a, 127);
        assert!(surface.fills().count() > 10);
    }
}
