use portalworld_common::{Color, Point3};
use portalworld_kernel::{Ambient, Fog, Lake, Obstacle, Portal, Snowfall, WorldDefinition};

const SNOWBALL: Color = Color::hex(0xffffff);
const COAL: Color = Color::hex(0x111111);
const CARROT: Color = Color::hex(0xff6600);
const ICE: Color = Color::hex(0xaaddff);

pub fn definition() -> WorldDefinition {
    WorldDefinition {
        name: "Snow World".into(),
        background: Color::hex(0xf0f0ff),
        grid_color: Color::hex(0xccccff),
        fog: Fog {
            color: Color::hex(0xf0f0ff),
            near: 5.0,
            far: 100.0,
        },
        ambient: Ambient {
            sky_color: Color::hex(0xccccff),
            ground_color: Color::hex(0xaaaacc),
        },
        portal_positions: vec![
            Portal::new(0.0, 0.0, super::DEFAULT),
            Portal::new(50.0, 0.0, super::FOREST),
            Portal::new(-50.0, 0.0, super::DESERT),
        ],
        snowfall: Some(Snowfall {
            enabled: true,
            particle_count: 1000,
            size: 0.3,
            color: Color::hex(0xffffff),
            speed_factor: 0.2,
        }),
        obstacles: vec![
            // Snowman: body, eyes, nose
            Obstacle::sphere(Point3::new(70.0, 15.0, 70.0), 15.0, SNOWBALL),
            Obstacle::sphere(Point3::new(70.0, 40.0, 70.0), 10.0, SNOWBALL),
            Obstacle::sphere(Point3::new(70.0, 57.0, 70.0), 7.0, SNOWBALL),
            Obstacle::sphere(Point3::new(68.0, 59.0, 64.0), 1.0, COAL),
            Obstacle::sphere(Point3::new(72.0, 59.0, 64.0), 1.0, COAL),
            Obstacle::cone(Point3::new(70.0, 57.0, 64.0), 1.0, 5.0, CARROT),
            // Ice crystals
            Obstacle::cuboid(Point3::new(-70.0, 20.0, -70.0), Point3::new(5.0, 40.0, 5.0), ICE),
            Obstacle::cuboid(Point3::new(-60.0, 15.0, -70.0), Point3::new(5.0, 30.0, 5.0), ICE),
            Obstacle::cuboid(Point3::new(-80.0, 17.0, -70.0), Point3::new(5.0, 35.0, 5.0), ICE),
            Obstacle::cuboid(Point3::new(-70.0, 25.0, -60.0), Point3::new(5.0, 50.0, 5.0), ICE),
        ],
        lake: Some(Lake {
            position: Point3::new(0.0, 9.5, -150.0),
            size: Point3::new(100.0, 0.5, 100.0),
            color: Color::hex(0x88ccff),
            opacity: 0.7,
        }),
        trees: None,
        cacti: None,
        dunes: None,
    }
}
