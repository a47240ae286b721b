use portalworld_common::{Color, Point3};
use portalworld_kernel::{Ambient, Fog, Obstacle, Portal, WorldDefinition};

pub fn definition() -> WorldDefinition {
    let stone = Color::hex(0x888888);
    WorldDefinition {
        name: "Default World".into(),
        background: Color::hex(0xa0a0a0),
        grid_color: Color::hex(0x000000),
        fog: Fog {
            color: Color::hex(0xa0a0a0),
            near: 100.0,
            far: 1000.0,
        },
        ambient: Ambient {
            sky_color: Color::hex(0xffffff),
            ground_color: Color::hex(0x444444),
        },
        portal_positions: vec![
            Portal::new(100.0, 0.0, super::FOREST),
            Portal::new(-100.0, 0.0, super::DESERT),
            Portal::new(0.0, 100.0, super::SNOW),
        ],
        obstacles: vec![
            Obstacle::cuboid(Point3::new(50.0, 15.0, 50.0), Point3::new(20.0, 30.0, 20.0), stone),
            Obstacle::cuboid(Point3::new(-50.0, 15.0, -50.0), Point3::new(20.0, 30.0, 20.0), stone),
        ],
        trees: None,
        cacti: None,
        dunes: None,
        snowfall: None,
        lake: None,
    }
}
