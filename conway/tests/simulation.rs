// Whole-run behavior of the engine: known oscillators, spaceships and the
// boundary modes on an empty grid.

use conway::{Boundary, Kernel, Pattern, World};

fn live_cells(world: &World) -> Vec<(u16, u16)> {
    let mut live = Vec::new();
    for y in 0..world.height() {
        for x in 0..world.width() {
            if world.get(x, y) {
                live.push((x, y));
            }
        }
    }
    live
}

#[test_log::test]
fn empty_world_stays_empty_under_every_boundary_but_alive_rim() {
    for boundary in Boundary::ALL {
        if boundary == Boundary::AliveRim {
            continue;
        }
        let mut world = World::with_boundary(9, 7, boundary).unwrap();
        world.step_n(5);
        assert_eq!(world.population(), 0, "{boundary}");
    }
}

#[test_log::test]
fn alive_rim_grows_from_the_edges() {
    let mut world = World::with_boundary(9, 7, Boundary::AliveRim).unwrap();
    world.step();
    // only cells with exactly three rim neighbors are born: the non-corner
    // edge cells whose outward row or column is all rim
    assert!(world.population() > 0);
    assert!(!world.get(0, 0));
    assert!(world.get(4, 0));
    assert!(!world.get(4, 3));
}

#[test_log::test]
fn blinker_has_period_two() {
    for boundary in [Boundary::Edge, Boundary::Torus] {
        let mut world = World::with_boundary(5, 5, boundary).unwrap();
        world.stamp(&Pattern::builtin("blinker").unwrap()).unwrap();
        let start = live_cells(&world);
        assert_eq!(start, vec![(1, 2), (2, 2), (3, 2)]);

        world.step();
        assert_eq!(live_cells(&world), vec![(2, 1), (2, 2), (2, 3)], "{boundary}");
        world.step();
        assert_eq!(live_cells(&world), start, "{boundary}");
    }
}

#[test_log::test]
fn glider_moves_one_cell_diagonally_every_four_steps() {
    let mut world = World::with_boundary(12, 12, Boundary::Torus).unwrap();
    world.stamp(&Pattern::builtin("glider").unwrap()).unwrap();
    let start = live_cells(&world);
    assert_eq!(start.len(), 5);

    world.step_n(4);
    let mut shifted: Vec<(u16, u16)> = start.iter().map(|&(x, y)| (x + 1, y + 1)).collect();
    shifted.sort_by_key(|&(x, y)| (y, x));
    assert_eq!(live_cells(&world), shifted);
}

#[test_log::test]
fn glider_wraps_around_the_torus() {
    let mut world = World::with_boundary(8, 8, Boundary::Torus).unwrap();
    world.stamp(&Pattern::builtin("glider").unwrap()).unwrap();
    let start = world.cells().to_vec();
    // 8 diagonal moves bring it all the way round
    world.step_n(32);
    assert_eq!(world.cells(), &start[..]);
}

#[test_log::test]
fn toad_and_beacon_oscillate() {
    for name in ["toad", "beacon"] {
        let mut world = World::with_boundary(10, 10, Boundary::Edge).unwrap();
        world.stamp(&Pattern::builtin(name).unwrap()).unwrap();
        let start = world.cells().to_vec();
        world.step();
        assert_ne!(world.cells(), &start[..], "{name}");
        world.step();
        assert_eq!(world.cells(), &start[..], "{name}");
    }
}

#[test_log::test]
fn pulsar_has_period_three() {
    let mut world = World::with_boundary(17, 17, Boundary::Edge).unwrap();
    world.stamp(&Pattern::builtin("pulsar").unwrap()).unwrap();
    let start = world.cells().to_vec();
    assert_eq!(world.population(), 48);
    world.step_n(3);
    assert_eq!(world.cells(), &start[..]);
}

#[test_log::test]
fn torus_fast_path_matches_generic_over_a_long_run() {
    let mut fast = World::with_boundary(40, 24, Boundary::Torus).unwrap();
    fast.stamp(&Pattern::builtin("gosper glider gun").unwrap()).unwrap();
    let mut generic = fast.clone();
    for _ in 0..60 {
        fast.step_with(Kernel::TorusFast);
        generic.step_with(Kernel::Generic);
        assert_eq!(fast.cells(), generic.cells(), "generation {}", fast.generation());
    }
}

#[test_log::test]
fn boundary_change_applies_to_the_next_step() {
    // a blinker flush against the left edge behaves differently per mode
    let mut edge = World::with_boundary(5, 5, Boundary::Edge).unwrap();
    for y in 1..=3 {
        edge.set(0, y, true);
    }
    let mut rim = edge.clone();
    rim.set_boundary(Boundary::AliveRim);

    edge.step();
    rim.step();
    assert_eq!(live_cells(&edge), vec![(0, 2), (1, 2)]);
    assert_ne!(edge.cells(), rim.cells());
}
