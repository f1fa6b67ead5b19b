mod common;

use common::Harness;
use piccolo::config::PhysicsConfig;
use piccolo::engine::input::Key;
use piccolo::game::physics::{Jump, JumpPhase};
use piccolo::game::player::JUMP_SOUND;

#[test]
fn test_jump_follows_integer_arc() {
    let mut h = Harness::new();
    assert_eq!(h.game.player.bottom, 325);

    h.hold(Key::Space, 1);
    let mut bottoms = vec![h.game.player.bottom];
    for _ in 0..14 {
        h.idle(1);
        bottoms.push(h.game.player.bottom);
    }

    assert_eq!(
        bottoms,
        vec![315, 295, 265, 225, 185, 155, 135, 125, 125, 135, 155, 185, 225, 275, 325]
    );
    assert!(h.game.player.is_grounded());
    assert_eq!(h.game.player.jump.phase, JumpPhase::Grounded);
    assert_eq!(h.game.player.jump.gravity, 0);
}

#[test]
fn test_holding_space_does_not_restart_midair() {
    let mut h = Harness::new();

    h.hold(Key::Space, 10);

    assert_eq!(h.game.player.drain_sound_cues(), vec![JUMP_SOUND]);
    assert_eq!(h.game.mediator.message(), "Player jumped.");
    assert!(!h.game.player.is_grounded());
}

#[test]
fn test_holding_space_jumps_again_after_landing() {
    let mut h = Harness::new();

    h.hold(Key::Space, 16);

    assert_eq!(h.game.player.drain_sound_cues().len(), 2);
    assert_eq!(h.game.player.bottom, 315);
}

#[test]
fn test_airborne_player_falls_to_rest() {
    let mut h = Harness::new();
    h.game.player.bottom = 200;
    h.game.player.jump = Jump {
        phase: JumpPhase::Falling,
        gravity: 0,
    };

    let mut bottoms = Vec::new();
    for _ in 0..5 {
        h.idle(1);
        bottoms.push(h.game.player.bottom);
    }

    assert_eq!(bottoms, vec![210, 230, 260, 300, 325]);
    assert_eq!(h.game.player.jump.phase, JumpPhase::Grounded);
}

#[test]
fn test_integrator_respects_physics_settings() {
    let physics = PhysicsConfig {
        jump_step: 20,
        gravity_max: -60,
        ..PhysicsConfig::default()
    };
    let mut bottom = physics.rest();
    let mut jump = Jump::default();
    jump.start();

    let mut peak = bottom;
    for _ in 0..20 {
        jump.step(&mut bottom, &physics);
        peak = peak.min(bottom);
        assert!(bottom <= physics.rest());
    }

    assert!(peak < physics.rest());
    assert_eq!(bottom, physics.rest());
    assert_eq!(jump.phase, JumpPhase::Grounded);
}

#[test]
fn test_grounded_integrator_is_idle() {
    let physics = PhysicsConfig::default();
    let mut bottom = physics.rest();
    let mut jump = Jump::default();

    jump.step(&mut bottom, &physics);

    assert_eq!(bottom, 325);
    assert!(!jump.is_rising());
    assert!(!jump.is_falling());
}

#[test]
fn test_walking_cycles_poses() {
    let mut h = Harness::new();
    let right = h.game.player.right;

    h.hold(Key::Right, 1);
    assert_eq!(h.game.player.image, right.walking[0]);

    h.hold(Key::Right, 14);
    assert_eq!(h.game.player.image, right.walking[1]);

    h.hold(Key::Right, 10);
    assert_eq!(h.game.player.image, right.walking[0]);

    h.idle(1);
    assert_eq!(h.game.player.image, right.stand);
}

#[test]
fn test_facing_follows_last_direction() {
    let mut h = Harness::new();
    let left = h.game.player.left;

    h.hold(Key::Left, 1);
    assert!(h.game.player.facing_left);
    assert_eq!(h.game.player.image, left.walking[0]);

    h.idle(1);
    assert_eq!(h.game.player.image, left.stand);
    assert_ne!(left.stand, h.game.player.right.stand);
}

#[test]
fn test_airborne_player_shows_jump_pose() {
    let mut h = Harness::new();
    let right = h.game.player.right;

    h.hold(Key::Space, 1);
    assert_eq!(h.game.player.image, right.jump);

    h.hold(Key::Right, 3);
    assert_eq!(h.game.player.image, right.jump);
    assert_eq!(h.game.player.x, 115);
}

#[test]
fn test_sprite_rect_is_anchored_at_bottom_centre() {
    let h = Harness::new();
    let rect = h.game.player.rect();

    // Right-facing stand pose is 20x40.
    assert_eq!((rect.x, rect.y), (90.0, 285.0));
    assert_eq!((rect.width, rect.height), (20.0, 40.0));
}
