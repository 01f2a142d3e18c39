//! One simulation step
//!
//! Input, spawning, movement and collisions, in that order. Rendering is
//! the director's job and never happens here.

use rand::Rng;

use super::actor::StoneKind;
use super::cast::{PLAYER, STONES};
use super::collision::resolve_collisions;
use super::point::Point;
use super::state::{GameEvent, GameState};
use crate::error::Result;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Player displacement for this tick (horizontal only)
    pub direction: Point,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> Result<Vec<GameEvent>> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    state
        .cast
        .get_first_actor_mut(PLAYER)?
        .set_velocity(input.direction);

    spawn_stones(state, &mut events);
    move_actors(state, &mut events)?;
    resolve_collisions(state, &mut events)?;

    Ok(events)
}

/// Drop new stones on the top row, respecting the spawn policy
fn spawn_stones(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let columns = state.bounds.max_x() / state.cell_size;
    if columns <= 0 {
        return;
    }
    for kind in [StoneKind::Gem, StoneKind::Rock] {
        if state.cast.len(STONES) >= state.spawn.max_stones {
            break;
        }
        if !state.rng.random_bool(state.spawn.chance) {
            continue;
        }
        let column = state.rng.random_range(0..columns);
        let stone = state.make_stone(kind, Point::new(column * state.cell_size, 0));
        state.cast.add_actor(STONES, stone);
        events.push(GameEvent::Spawned { kind });
    }
}

/// Player wraps around the edges; stones leaving the playfield are culled
fn move_actors(state: &mut GameState, events: &mut Vec<GameEvent>) -> Result<()> {
    let bounds = state.bounds;
    state.cast.get_first_actor_mut(PLAYER)?.move_next(bounds);

    for id in state.cast.actor_ids(STONES) {
        let Some(stone) = state.cast.get_actor_mut(STONES, id) else {
            continue;
        };
        if bounds.contains(stone.next_position()) {
            stone.move_next(bounds);
            continue;
        }
        if let Some(culled) = state.cast.remove_actor(STONES, id) {
            if let Some(s) = culled.as_stone() {
                events.push(GameEvent::Culled { kind: s.kind });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GreedError;
    use crate::settings::Settings;
    use crate::sim::cast::BANNER;
    use crate::sim::actor::Actor;

    /// 100x100 playfield with 10px cells and spawning switched off
    fn quiet_state() -> GameState {
        let settings = Settings {
            width: 100,
            height: 100,
            cell_size: 10,
            spawn_chance: 0.0,
            ..Settings::default()
        };
        let mut state = GameState::new(&settings, 42).unwrap();
        state
            .cast
            .get_first_actor_mut(PLAYER)
            .unwrap()
            .set_position(Point::new(50, 50));
        state
    }

    fn resting_stone(kind: StoneKind, points: i32, pos: Point) -> Actor {
        Actor::stone(kind, points).with_position(pos)
    }

    #[test]
    fn test_gem_collision_adds_score() {
        let mut state = quiet_state();
        let id = state
            .cast
            .add_actor(STONES, resting_stone(StoneKind::Gem, 1, Point::new(50, 50)));

        let events = tick(&mut state, &TickInput::default()).unwrap();

        assert_eq!(state.score().unwrap(), 1);
        assert!(state.cast.get_actor(STONES, id).is_none());
        assert_eq!(
            events,
            vec![GameEvent::Collected {
                kind: StoneKind::Gem,
                points: 1,
                score: 1
            }]
        );
        assert_eq!(state.cast.get_first_actor(BANNER).unwrap().text(), "Score: 1");
    }

    #[test]
    fn test_rock_collision_subtracts_score() {
        let mut state = quiet_state();
        let id = state
            .cast
            .add_actor(STONES, resting_stone(StoneKind::Rock, -1, Point::new(50, 50)));

        tick(&mut state, &TickInput::default()).unwrap();

        assert_eq!(state.score().unwrap(), -1);
        assert!(state.cast.get_actor(STONES, id).is_none());
    }

    #[test]
    fn test_overlapping_stones_all_resolved() {
        let mut state = quiet_state();
        state
            .cast
            .add_actor(STONES, resting_stone(StoneKind::Gem, 1, Point::new(50, 50)));
        state
            .cast
            .add_actor(STONES, resting_stone(StoneKind::Gem, 1, Point::new(50, 50)));
        state
            .cast
            .add_actor(STONES, resting_stone(StoneKind::Rock, -1, Point::new(50, 50)));

        tick(&mut state, &TickInput::default()).unwrap();

        assert_eq!(state.score().unwrap(), 1);
        assert_eq!(state.cast.len(STONES), 0);
    }

    #[test]
    fn test_no_collision_keeps_stone() {
        let mut state = quiet_state();
        let id = state
            .cast
            .add_actor(STONES, resting_stone(StoneKind::Gem, 1, Point::new(20, 50)));

        let events = tick(&mut state, &TickInput::default()).unwrap();

        assert!(events.is_empty());
        assert_eq!(state.score().unwrap(), 0);
        assert!(state.cast.get_actor(STONES, id).is_some());
    }

    #[test]
    fn test_sweep_without_hits_preserves_order() {
        let mut state = quiet_state();
        let ids: Vec<_> = (0..6)
            .map(|i| {
                let (kind, points) = if i % 2 == 0 {
                    (StoneKind::Gem, 1)
                } else {
                    (StoneKind::Rock, -1)
                };
                state
                    .cast
                    .add_actor(STONES, resting_stone(kind, points, Point::new(i * 10, 10)))
            })
            .collect();

        tick(&mut state, &TickInput::default()).unwrap();

        assert_eq!(state.cast.actor_ids(STONES), ids);
    }

    #[test]
    fn test_stones_fall_each_tick() {
        let mut state = quiet_state();
        let stone = state.make_stone(StoneKind::Gem, Point::new(0, 0));
        let id = state.cast.add_actor(STONES, stone);

        tick(&mut state, &TickInput::default()).unwrap();
        tick(&mut state, &TickInput::default()).unwrap();

        let pos = state.cast.get_actor(STONES, id).unwrap().position();
        assert_eq!(pos, Point::new(0, 20));
    }

    #[test]
    fn test_stone_culled_at_bottom() {
        let mut state = quiet_state();
        let stone = state.make_stone(StoneKind::Rock, Point::new(0, 90));
        state.cast.add_actor(STONES, stone);

        let events = tick(&mut state, &TickInput::default()).unwrap();

        assert_eq!(state.cast.len(STONES), 0);
        assert_eq!(events, vec![GameEvent::Culled { kind: StoneKind::Rock }]);
        assert_eq!(state.score().unwrap(), 0);
    }

    #[test]
    fn test_falling_stone_caught_by_player() {
        let mut state = quiet_state();
        let stone = state.make_stone(StoneKind::Gem, Point::new(50, 40));
        state.cast.add_actor(STONES, stone);

        tick(&mut state, &TickInput::default()).unwrap();

        assert_eq!(state.score().unwrap(), 1);
        assert_eq!(state.cast.len(STONES), 0);
    }

    #[test]
    fn test_player_moves_and_wraps() {
        let mut state = quiet_state();
        let right = TickInput {
            direction: Point::new(10, 0),
        };
        tick(&mut state, &right).unwrap();
        let player = state.cast.get_first_actor(PLAYER).unwrap();
        assert_eq!(player.position(), Point::new(60, 50));
        assert_eq!(player.velocity(), Point::new(10, 0));

        state
            .cast
            .get_first_actor_mut(PLAYER)
            .unwrap()
            .set_position(Point::new(90, 50));
        tick(&mut state, &right).unwrap();
        let player = state.cast.get_first_actor(PLAYER).unwrap();
        assert_eq!(player.position(), Point::new(0, 50));
    }

    #[test]
    fn test_missing_player_is_an_error() {
        let mut state = quiet_state();
        let id = state.cast.get_first_actor(PLAYER).unwrap().id();
        state.cast.remove_actor(PLAYER, id);

        for _ in 0..2 {
            let result = tick(&mut state, &TickInput::default());
            assert!(matches!(result, Err(GreedError::NotFound(ref c)) if c == PLAYER));
        }
    }

    #[test]
    fn test_missing_banner_on_hit_is_an_error() {
        let mut state = quiet_state();
        let banner = state.cast.get_first_actor(BANNER).unwrap().id();
        state.cast.remove_actor(BANNER, banner);
        state
            .cast
            .add_actor(STONES, resting_stone(StoneKind::Gem, 1, Point::new(50, 50)));

        let result = tick(&mut state, &TickInput::default());
        assert!(matches!(result, Err(GreedError::NotFound(ref c)) if c == BANNER));
    }

    #[test]
    fn test_spawn_every_tick_at_full_chance() {
        let mut state = quiet_state();
        state.spawn.chance = 1.0;

        let events = tick(&mut state, &TickInput::default()).unwrap();

        let spawned = events
            .iter()
            .filter(|e| matches!(e, GameEvent::Spawned { .. }))
            .count();
        assert_eq!(spawned, 2);
        for stone in state.cast.get_actors(STONES) {
            // Spawned on the top row, then fell one cell
            assert_eq!(stone.position().y, 10);
            assert_eq!(stone.position().x % 10, 0);
        }
    }

    #[test]
    fn test_spawn_respects_cap() {
        let mut state = quiet_state();
        state.spawn.chance = 1.0;
        state.spawn.max_stones = 3;
        // Keep the player out of the stones' way
        state
            .cast
            .get_first_actor_mut(PLAYER)
            .unwrap()
            .set_position(Point::new(0, 0));

        for _ in 0..20 {
            tick(&mut state, &TickInput::default()).unwrap();
            assert!(state.cast.len(STONES) <= 3);
        }
    }

    #[test]
    fn test_determinism() {
        let settings = Settings {
            spawn_chance: 0.5,
            ..Settings::default()
        };
        let mut state1 = GameState::new(&settings, 99999).unwrap();
        let mut state2 = GameState::new(&settings, 99999).unwrap();

        let inputs = [
            TickInput {
                direction: Point::new(15, 0),
            },
            TickInput::default(),
            TickInput {
                direction: Point::new(-15, 0),
            },
            TickInput::default(),
        ];

        for input in inputs.iter().cycle().take(40) {
            let e1 = tick(&mut state1, input).unwrap();
            let e2 = tick(&mut state2, input).unwrap();
            assert_eq!(e1, e2);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        let positions = |s: &GameState| -> Vec<Point> {
            s.cast.get_all_actors().map(|a| a.position()).collect()
        };
        assert_eq!(positions(&state1), positions(&state2));
        assert_eq!(state1.score().unwrap(), state2.score().unwrap());
    }

    #[test]
    fn test_no_spawn_when_playfield_narrower_than_a_cell() {
        let mut state = quiet_state();
        state.spawn.chance = 1.0;
        state.bounds = crate::sim::Bounds::new(5, 100).unwrap();

        let events = tick(&mut state, &TickInput::default()).unwrap();

        assert!(events.is_empty());
        assert_eq!(state.cast.len(STONES), 0);
    }
}
