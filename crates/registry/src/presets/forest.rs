use portalworld_common::{Color, Point3, Span};
use portalworld_kernel::{Ambient, Fog, Obstacle, Portal, Trees, WorldDefinition};

const TRUNK: Color = Color::hex(0x663311);
const LEAVES: Color = Color::hex(0x336633);

pub fn definition() -> WorldDefinition {
    WorldDefinition {
        name: "Forest World".into(),
        background: Color::hex(0x2d572c),
        grid_color: Color::hex(0x1a3a1a),
        fog: Fog {
            color: Color::hex(0x2d572c),
            near: 50.0,
            far: 300.0,
        },
        ambient: Ambient {
            sky_color: Color::hex(0x88aa88),
            ground_color: Color::hex(0x224422),
        },
        portal_positions: vec![
            Portal::new(0.0, 0.0, super::DEFAULT),
            Portal::new(50.0, 50.0, super::DESERT),
            Portal::new(-50.0, 50.0, super::SNOW),
        ],
        trees: Some(Trees {
            count: 50,
            min_distance: 30.0,
            max_distance: 300.0,
            height: Span::new(30.0, 60.0),
            trunk_color: TRUNK,
            leaves_color: LEAVES,
        }),
        obstacles: vec![
            Obstacle::cuboid(Point3::new(50.0, 15.0, 50.0), Point3::new(10.0, 60.0, 10.0), TRUNK),
            Obstacle::sphere(Point3::new(50.0, 45.0, 50.0), 20.0, LEAVES),
            Obstacle::cuboid(Point3::new(-50.0, 15.0, -50.0), Point3::new(10.0, 60.0, 10.0), TRUNK),
            Obstacle::sphere(Point3::new(-50.0, 45.0, -50.0), 20.0, LEAVES),
        ],
        cacti: None,
        dunes: None,
        snowfall: None,
        lake: None,
    }
}
