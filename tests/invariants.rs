//! Property tests over random seeds, difficulties and input sequences

use emoji_escape::consts::MAX_HEALTH;
use emoji_escape::sim::{
    Difficulty, Direction, GameState, SessionPhase, Shield, TickInput, Viewport, start, tick,
};
use proptest::prelude::*;

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop::sample::select(Difficulty::ALL.to_vec())
}

fn input() -> impl Strategy<Value = TickInput> {
    (
        prop::option::of(prop::sample::select(vec![
            Direction::Left,
            Direction::Still,
            Direction::Right,
        ])),
        prop::option::of(-200.0f32..800.0),
        prop::bool::weighted(0.02),
        any::<bool>(),
    )
        .prop_map(|(direction, pointer_x, pause, autopilot)| TickInput {
            direction,
            pointer_x,
            pause,
            autopilot,
        })
}

fn frames() -> impl Strategy<Value = Vec<(TickInput, f64)>> {
    prop::collection::vec((input(), 1.0f64..100.0), 1..400)
}

fn viewport() -> impl Strategy<Value = Viewport> {
    (240.0f32..1200.0, 320.0f32..1200.0).prop_map(|(w, h)| Viewport::new(w, h))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn avatar_and_health_stay_in_range(
        seed in any::<u64>(),
        difficulty in difficulty(),
        viewport in viewport(),
        frames in frames(),
    ) {
        let mut state = GameState::new(seed, viewport, 0);
        start(&mut state, difficulty);

        for (input, dt) in &frames {
            tick(&mut state, input, *dt);

            prop_assert!(state.avatar.x >= 0.0);
            prop_assert!(state.avatar.x <= state.avatar.max_x);
            prop_assert!(state.health <= MAX_HEALTH);
            if state.health == 0 {
                prop_assert_eq!(state.phase, SessionPhase::GameOver);
            }
            if state.phase == SessionPhase::GameOver {
                prop_assert!(state.timers.is_quiescent());
                prop_assert_eq!(state.shield, Shield::Down);
            }
        }
    }

    #[test]
    fn entities_fall_and_leave_the_viewport(
        seed in any::<u64>(),
        difficulty in difficulty(),
        frames in frames(),
    ) {
        let mut state = GameState::new(seed, Viewport::default(), 0);
        start(&mut state, difficulty);
        let despawn_y = state.viewport.despawn_y();

        for (input, dt) in &frames {
            let before: Vec<(u32, f32)> =
                state.entities.iter().map(|e| (e.id, e.pos.y)).collect();
            tick(&mut state, input, *dt);

            for entity in &state.entities {
                prop_assert!(!entity.removed);
                prop_assert!(entity.pos.y <= despawn_y);
                if let Some((_, y)) = before.iter().find(|(id, _)| *id == entity.id) {
                    prop_assert!(entity.pos.y >= *y);
                }
            }
        }
    }

    #[test]
    fn shield_is_up_only_before_its_deadline(
        seed in any::<u64>(),
        difficulty in difficulty(),
        frames in frames(),
    ) {
        let mut state = GameState::new(seed, Viewport::default(), 0);
        start(&mut state, difficulty);
        state.shield.grant(state.now_ms);

        for (input, dt) in &frames {
            tick(&mut state, input, *dt);
            match state.shield {
                Shield::Active { expires_at_ms } => {
                    prop_assert!(state.now_ms < expires_at_ms);
                    prop_assert!(state.is_shielded());
                }
                Shield::Suspended { remaining_ms } => {
                    prop_assert_eq!(state.phase, SessionPhase::Paused);
                    prop_assert!(remaining_ms > 0.0);
                }
                Shield::Down => prop_assert!(!state.is_shielded()),
            }
        }
    }

    #[test]
    fn same_seed_same_session(
        seed in any::<u64>(),
        difficulty in difficulty(),
        frames in frames(),
    ) {
        let mut a = GameState::new(seed, Viewport::default(), 0);
        let mut b = GameState::new(seed, Viewport::default(), 0);
        start(&mut a, difficulty);
        start(&mut b, difficulty);

        for (input, dt) in &frames {
            tick(&mut a, input, *dt);
            tick(&mut b, input, *dt);
            prop_assert_eq!(&a.events, &b.events);
        }
        prop_assert_eq!(a.score, b.score);
        prop_assert_eq!(a.health, b.health);
        prop_assert_eq!(a.entities.len(), b.entities.len());
    }
}
