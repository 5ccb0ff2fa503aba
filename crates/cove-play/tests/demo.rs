use cove_core::{CollisionFlags, Vec2};
use cove_play::{Npc, PlayConfig, PlayState, Player, Stage, TileMap};
use cove_theater::{Action, ActionKind, Input, Key, KeyState, TheaterEventKind};

/// Press confirm whenever the front group is showing dialog.
fn auto_confirm(state: &PlayState) -> KeyState {
    let showing_dialog = state.sequencer().front().is_some_and(|g| {
        g.actions()
            .iter()
            .any(|a| {
                a.is_started() && !a.is_completed() && matches!(a.kind(), ActionKind::Dialog(_))
            })
    });
    if showing_dialog {
        KeyState::new().with_released(Key::Confirm)
    } else {
        KeyState::new()
    }
}

#[test]
fn demo_sequence_walks_player_to_corner() {
    let mut state = PlayState::new(PlayConfig::default()).unwrap();
    let player = state.player().id();

    state
        .tick(&KeyState::new().with_released(Key::Trigger), 16.0)
        .unwrap();
    assert!(state.sequencer().has_active());

    let mut frames = 0;
    while state.sequencer().has_active() {
        // Hold a direction for as long as anything is queued, including the
        // frame the last action is removed on.
        let mut input = auto_confirm(&state);
        if !state.sequencer().is_empty() {
            input.hold(Key::Down);
        }
        state.tick(&input, 16.0).unwrap();
        frames += 1;
        assert!(frames < 1000, "demo never finished");
    }

    let body = state.stage().get(player).unwrap();
    assert_eq!(body.pos, Vec2::new(1.0, 1.0));
    assert_eq!(body.collision, CollisionFlags::SOLID);

    // Control is back: holding a key moves the player again.
    state
        .tick(&KeyState::new().with_held(Key::Right), 16.0)
        .unwrap();
    assert!(state.stage().get(player).unwrap().pos.x > 1.0);
}

#[test]
fn npcs_hold_still_during_cutscene() {
    let config = PlayConfig::default().with_npc_wander_interval_ms(16.0);
    let mut state = PlayState::new(config).unwrap();
    state.play_demo();

    let before: Vec<Vec2> = state
        .npcs()
        .iter()
        .map(|n| state.stage().get(n.id()).unwrap().pos)
        .collect();
    for _ in 0..50 {
        state.tick(&KeyState::new(), 16.0).unwrap();
    }
    let after: Vec<Vec2> = state
        .npcs()
        .iter()
        .map(|n| state.stage().get(n.id()).unwrap().pos)
        .collect();
    assert_eq!(before, after);
}

#[test]
fn blocked_move_redirects_and_still_arrives() {
    let map = TileMap::from_rows("pillar", &["........", "....#...", "........", "........"])
        .unwrap();
    let mut stage = Stage::new();
    let player = Player::spawn(&mut stage, Vec2::new(0.0, 0.0)).unwrap();
    let npc = Npc::spawn(&mut stage, "Walker", Vec2::new(2.0, 0.0), ["..."]).unwrap();
    let mut state =
        PlayState::with_world(PlayConfig::default(), map, stage, player, vec![npc.clone()])
            .unwrap();

    // Diagonally past the pillar with collisions on: the pillar stops the
    // horizontal step and the walker slides along it.
    state.sequencer_mut().enqueue(Action::move_to(
        npc.id(),
        Vec2::new(6.0, 2.0),
        400.0,
        false,
    ));
    let mut frames = 0;
    while state.sequencer().has_active() {
        state.tick(&KeyState::new(), 10.0).unwrap();
        frames += 1;
        assert!(frames < 100);
    }

    assert_eq!(state.stage().get(npc.id()).unwrap().pos, Vec2::new(6.0, 2.0));
    assert!(
        state
            .sequencer()
            .events()
            .events()
            .iter()
            .any(|e| matches!(e.kind, TheaterEventKind::MoveRedirected { .. }))
    );
}

#[test]
fn conversation_plays_every_line_then_releases() {
    let mut stage = Stage::new();
    let map = TileMap::from_rows("room", &["......", "......", "......"]).unwrap();
    let player = Player::spawn(&mut stage, Vec2::new(1.0, 0.0)).unwrap();
    let npc = Npc::spawn(&mut stage, "Bulby", Vec2::new(1.0, 1.0), ["Hi!", "Bye!"]).unwrap();
    let mut state =
        PlayState::with_world(PlayConfig::default(), map, stage, player, vec![npc]).unwrap();

    // Player faces down by default, straight at the NPC.
    state
        .tick(&KeyState::new().with_released(Key::Confirm), 16.0)
        .unwrap();
    assert_eq!(state.sequencer().len(), 2);

    let mut closed = 0;
    let mut frames = 0;
    while state.sequencer().has_active() {
        let input = auto_confirm(&state);
        if input.was_released(Key::Confirm) {
            closed += 1;
        }
        state.tick(&input, 16.0).unwrap();
        frames += 1;
        assert!(frames < 20);
    }
    assert_eq!(closed, 2);
}
