//! End-to-end checks against a small walled level
//!
//! Uses the crate-level functions, which run with the default rules.

use crate::foundation::math::{direction, point, Vec3, Vec4};
use crate::physics::collision::{
    cube_cube, cube_plane, cube_sphere, GameObject, ObjectType, PlaneAxis, PlaneDescriptor,
    XZDirection,
};
use crate::scene::SceneSnapshot;
use crate::{closest_direction, closest_point_to_center, collided, update_movement_direction};
use approx::assert_relative_eq;

fn player(x: f32, z: f32) -> GameObject {
    GameObject::cube("player", point(x, 0.0, z), Vec3::repeat(1.0))
}

fn plane_east() -> GameObject {
    GameObject::from_parts(
        "planeEast",
        ObjectType::Plane,
        point(5.0, 0.0, 0.0),
        Vec3::new(5.0, 1.0, f32::INFINITY),
        0.0,
    )
    .unwrap()
}

fn level() -> SceneSnapshot {
    crate::foundation::logging::init();
    let west = PlaneDescriptor::new(PlaneAxis::X, -5.0);
    let north = PlaneDescriptor::new(PlaneAxis::Z, -5.0);
    let south = PlaneDescriptor::new(PlaneAxis::Z, 5.0);
    SceneSnapshot::from_objects([
        player(0.0, 0.0),
        GameObject::sphere("hand", point(0.6, 0.2, -0.6), 0.25),
        plane_east(),
        GameObject::plane("planeWest", point(-5.0, 0.0, 0.0), west),
        GameObject::plane("planeNorth", point(0.0, 0.0, -5.0), north),
        GameObject::plane("planeSouth", point(0.0, 0.0, 5.0), south),
        GameObject::cube("cube", point(-3.0, 0.0, 2.0), Vec3::new(0.5, 0.5, 0.5)),
        GameObject::sphere("bunny", point(2.0, 0.0, 3.0), 0.75),
    ])
    .unwrap()
}

#[test]
fn test_scene_of_only_self_has_no_hits() {
    let player = player(0.0, 0.0);
    let scene = SceneSnapshot::from_objects([player.clone()]).unwrap();
    assert!(collided(&player, &scene).is_empty());
}

#[test]
fn test_reference_directions() {
    assert_eq!(closest_direction(Vec4::new(1.0, 0.0, 0.0, 0.0)), XZDirection::East);
    assert_eq!(closest_direction(Vec4::new(0.0, 0.0, -1.0, 0.0)), XZDirection::North);
    assert_eq!(closest_direction(Vec4::new(0.0, 0.0, 0.0, 0.0)), XZDirection::None);
    assert_eq!(closest_direction(Vec4::new(0.0, 1.0, 0.0, 1.0)), XZDirection::None);
}

#[test]
fn test_reference_closest_point() {
    let bounds = GameObject::cube("box", point(0.0, 0.0, 0.0), Vec3::repeat(1.0));
    let other = GameObject::cube("other", point(5.0, 0.0, 0.0), Vec3::repeat(1.0));
    let closest = closest_point_to_center(&bounds, &other);
    assert_relative_eq!(closest, Vec4::new(1.0, 0.0, 0.0, 1.0));
}

#[test]
fn test_player_reaches_east_plane() {
    let east = plane_east();
    assert!(!cube_plane(&player(0.0, 0.0), &east));
    assert!(cube_plane(&player(4.5, 0.0), &east));

    let mut scene = level();
    let start = scene.get("player").unwrap().clone();
    assert!(!collided(&start, &scene).contains(&"planeEast".to_string()));

    let moved = start.with_position(point(4.5, 0.0, 0.0));
    scene.replace(moved.clone());
    assert_eq!(collided(&moved, &scene), vec!["planeEast".to_string()]);
}

#[test]
fn test_east_plane_cancels_x_movement() {
    let scene = level();
    let delta = direction(1.0, 0.0, 0.0);
    let corrected = update_movement_direction(&player(0.0, 0.0), "planeEast", delta, &scene);
    assert_eq!(corrected, Vec4::zeros());
}

#[test]
fn test_hand_never_reports_player() {
    let scene = level();
    let hand = scene.get("hand").unwrap();
    let body = scene.get("player").unwrap();

    assert!(cube_sphere(body, hand));
    assert!(!collided(hand, &scene).contains(&"player".to_string()));
    assert!(!collided(body, &scene).contains(&"hand".to_string()));
}

#[test]
fn test_sphere_inside_cube_always_collides() {
    let cube = GameObject::cube("cube", point(1.0, 2.0, 3.0), Vec3::new(2.0, 0.5, 1.0));
    for (x, y, z) in [(1.0, 2.0, 3.0), (2.9, 1.6, 2.1), (-0.9, 2.4, 3.9)] {
        let sphere = GameObject::sphere("ball", point(x, y, z), 0.001);
        assert!(cube_sphere(&cube, &sphere), "center ({x}, {y}, {z}) inside");
    }
}

#[test]
fn test_sphere_outside_expanded_bounds_never_collides() {
    let cube = GameObject::cube("cube", point(0.0, 0.0, 0.0), Vec3::repeat(1.0));
    let radius = 0.5;
    for (x, y, z) in [(1.6, 0.0, 0.0), (0.0, -1.6, 0.0), (0.0, 0.0, 2.0), (3.0, 3.0, 3.0)] {
        let sphere = GameObject::sphere("ball", point(x, y, z), radius);
        assert!(!cube_sphere(&cube, &sphere), "center ({x}, {y}, {z}) outside");
    }
}

#[test]
fn test_cube_cube_is_symmetric_across_level() {
    let scene = level();
    let cubes: Vec<&GameObject> = scene
        .iter()
        .filter(|o| o.object_type() == ObjectType::Cube)
        .collect();
    for a in &cubes {
        for b in &cubes {
            assert_eq!(cube_cube(a, b), cube_cube(b, a));
        }
    }
}

#[test]
fn test_walk_into_corner_box() {
    let scene = level();
    // Box spans x in [-3.5, -2.5], z in [1.5, 2.5]; approach from the east
    let walker = player(-1.6, 2.0);
    assert_eq!(collided(&walker, &scene), vec!["cube".to_string()]);

    let corrected = update_movement_direction(&walker, "cube", direction(-0.02, 0.0, 0.01), &scene);
    assert_relative_eq!(corrected, direction(0.0, 0.0, 0.01));
}

#[test]
fn test_sphere_obstacle_has_no_correction() {
    let scene = level();
    let walker = player(1.5, 2.5);
    assert_eq!(collided(&walker, &scene), vec!["bunny".to_string()]);

    let delta = direction(0.5, 0.0, 0.5);
    assert_eq!(update_movement_direction(&walker, "bunny", delta, &scene), delta);
}
