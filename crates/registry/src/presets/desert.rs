use std::f32::consts::FRAC_PI_2;

use portalworld_common::{Color, Point3, Span};
use portalworld_kernel::{Ambient, Cacti, Dunes, Fog, Obstacle, Portal, WorldDefinition};

const CACTUS: Color = Color::hex(0x66aa66);
const SAND: Color = Color::hex(0xddbb77);

pub fn definition() -> WorldDefinition {
    WorldDefinition {
        name: "Desert World".into(),
        background: Color::hex(0xd6b06c),
        grid_color: Color::hex(0xaa7733),
        fog: Fog {
            color: Color::hex(0xffcc88),
            near: 10.0,
            far: 200.0,
        },
        ambient: Ambient {
            sky_color: Color::hex(0xffdd99),
            ground_color: Color::hex(0xaa7733),
        },
        portal_positions: vec![
            Portal::new(0.0, 0.0, super::DEFAULT),
            Portal::new(50.0, -50.0, super::FOREST),
            Portal::new(-50.0, -50.0, super::SNOW),
        ],
        cacti: Some(Cacti {
            count: 30,
            min_distance: 50.0,
            max_distance: 400.0,
            height: Span::new(20.0, 40.0),
            color: CACTUS,
        }),
        obstacles: vec![
            Obstacle::cylinder(Point3::new(60.0, 15.0, 60.0), 5.0, 30.0, CACTUS),
            // Arm sticks out sideways from the trunk above.
            Obstacle::cylinder(Point3::new(60.0, 15.0, 60.0), 2.0, 10.0, CACTUS)
                .with_rotation(Point3::new(0.0, 0.0, FRAC_PI_2))
                .with_offset(Point3::new(0.0, 20.0, 8.0)),
            Obstacle::cylinder(Point3::new(-60.0, 15.0, -60.0), 8.0, 40.0, CACTUS),
            Obstacle::cuboid(Point3::new(-100.0, 5.0, 100.0), Point3::new(40.0, 10.0, 40.0), SAND),
        ],
        dunes: Some(Dunes {
            count: 20,
            min_distance: 80.0,
            max_distance: 500.0,
            size: Span::new(30.0, 100.0),
            height: Span::new(5.0, 15.0),
            color: SAND,
        }),
        trees: None,
        snowfall: None,
        lake: None,
    }
}
