use bevy_ecs::prelude::{Schedule, World};
use rand::rngs::StdRng;
use rand::SeedableRng;

use walker_core::canvas::{CanvasSize, TrailBuffer};
use walker_core::clock::{CurrentEvent, EventKind, SimulationClock, TickSourceId};
use walker_core::config::SimulationConfig;
use walker_core::ecs::{Position, Velocity, Walker};
use walker_core::scenario::WalkerRng;
use walker_core::systems::walker_step::walker_step_system;
use walker_core::test_helpers::{spawn_walker_at, TEST_CANVAS};

/// World with all resources the step system needs and an armed tick source.
fn setup_step_world(canvas: CanvasSize) -> (World, Schedule, TickSourceId) {
    let mut world = World::new();
    world.insert_resource(SimulationClock::default());
    world.insert_resource(SimulationConfig::default());
    world.insert_resource(canvas);
    world.insert_resource(TrailBuffer::default());
    world.insert_resource(WalkerRng(StdRng::seed_from_u64(7)));
    let source = world.resource_mut::<SimulationClock>().arm_tick_source();

    let mut schedule = Schedule::default();
    schedule.add_systems(walker_step_system);
    (world, schedule, source)
}

/// Pops the next queued tick and runs the schedule against it.
fn run_tick(world: &mut World, schedule: &mut Schedule) {
    let event = world
        .resource_mut::<SimulationClock>()
        .pop_next()
        .expect("tick event");
    assert_eq!(event.kind, EventKind::Tick);
    world.insert_resource(CurrentEvent(event));
    schedule.run(world);
}

fn assert_snapped_to(angle_rad: f64, limit: u32) {
    let deg = angle_rad.to_degrees();
    let step = 360.0 / f64::from(limit);
    let nearest_multiple = (deg / step).round() * step;
    assert!(
        (deg - nearest_multiple).abs() < 1e-6,
        "{deg} is not a multiple of {step}"
    );
}

#[test]
fn walker_at_wall_halts_without_drawing() {
    let (mut world, mut schedule, _source) = setup_step_world(TEST_CANVAS);
    let entity = spawn_walker_at(&mut world, 199.0, 100.0, 5.0, 0.0, 1.0);

    run_tick(&mut world, &mut schedule);

    let walker = world.get::<Walker>(entity).expect("walker");
    let position = *world.get::<Position>(entity).expect("position");
    let velocity = *world.get::<Velocity>(entity).expect("velocity");
    assert!(walker.halted);
    assert_eq!(position, Position { x: 199.0, y: 100.0 });
    assert_eq!(velocity, Velocity { x: 0.0, y: 0.0 });
    assert!(world.resource::<TrailBuffer>().is_empty());
}

#[test]
fn halted_walkers_are_left_untouched() {
    let (mut world, mut schedule, _source) = setup_step_world(TEST_CANVAS);
    let entity = spawn_walker_at(&mut world, 199.0, 100.0, 5.0, 0.0, 1.0);

    run_tick(&mut world, &mut schedule);
    let halted_walker = *world.get::<Walker>(entity).expect("walker");
    let halted_position = *world.get::<Position>(entity).expect("position");

    for _ in 0..5 {
        run_tick(&mut world, &mut schedule);
    }

    assert_eq!(*world.get::<Walker>(entity).expect("walker"), halted_walker);
    assert_eq!(
        *world.get::<Position>(entity).expect("position"),
        halted_position
    );
    assert!(world.resource::<TrailBuffer>().is_empty());
}

#[test]
fn active_walker_draws_the_pre_update_segment_then_advances() {
    let (mut world, mut schedule, _source) = setup_step_world(TEST_CANVAS);
    let entity = spawn_walker_at(&mut world, 100.0, 100.0, 5.0, 0.0, 2.0);

    run_tick(&mut world, &mut schedule);

    let trail = world.resource::<TrailBuffer>();
    assert_eq!(trail.len(), 1);
    let segment = trail.segments()[0];
    assert_eq!(segment.from, (100.0, 100.0));
    assert_eq!(segment.to, (105.0, 100.0));
    assert_eq!(segment.width, 2.0);

    let position = *world.get::<Position>(entity).expect("position");
    assert_eq!(position, Position { x: 105.0, y: 100.0 });

    // The new heading is snapped to the default four-way direction set and
    // the velocity keeps the walker's cached speed.
    let walker = *world.get::<Walker>(entity).expect("walker");
    let velocity = *world.get::<Velocity>(entity).expect("velocity");
    assert_snapped_to(walker.angle_rad, 4);
    let magnitude = (velocity.x * velocity.x + velocity.y * velocity.y).sqrt();
    assert!((magnitude - walker.speed).abs() < 1e-9);
}

#[test]
fn direction_limit_edits_apply_on_the_next_tick() {
    let (mut world, mut schedule, _source) = setup_step_world(TEST_CANVAS);
    let entity = spawn_walker_at(&mut world, 100.0, 100.0, 5.0, 0.0, 1.0);

    world
        .resource_mut::<SimulationConfig>()
        .set_direction_limit(3);
    run_tick(&mut world, &mut schedule);
    assert_snapped_to(world.get::<Walker>(entity).expect("walker").angle_rad, 3);

    world
        .resource_mut::<SimulationConfig>()
        .set_direction_limit(360);
    run_tick(&mut world, &mut schedule);
    assert_snapped_to(world.get::<Walker>(entity).expect("walker").angle_rad, 360);
}

#[test]
fn tick_from_a_retired_source_is_dropped_without_rescheduling() {
    let (mut world, mut schedule, _old_source) = setup_step_world(TEST_CANVAS);
    let entity = spawn_walker_at(&mut world, 100.0, 100.0, 5.0, 0.0, 1.0);

    // Pop the old source's tick, then retire it the way restart does.
    let stale = world
        .resource_mut::<SimulationClock>()
        .pop_next()
        .expect("stale tick");
    world.resource_mut::<SimulationClock>().arm_tick_source();
    let pending_before = world.resource::<SimulationClock>().pending_event_count();

    world.insert_resource(CurrentEvent(stale));
    schedule.run(&mut world);

    let position = *world.get::<Position>(entity).expect("position");
    assert_eq!(position, Position { x: 100.0, y: 100.0 });
    assert!(world.resource::<TrailBuffer>().is_empty());
    // No reschedule: only the new source's first tick remains queued.
    assert_eq!(
        world.resource::<SimulationClock>().pending_event_count(),
        pending_before
    );
}
