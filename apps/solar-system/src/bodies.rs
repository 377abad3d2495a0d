//! Planet table and fixed scene constants.
//!
//! Orbits are circular and coplanar; `speed` is radians per elapsed second
//! and is the only value the user can change at runtime.

/// Static descriptor for one planet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialBody {
    /// Display name, also the texture manifest key.
    pub name: &'static str,
    pub radius: f32,
    /// Orbit radius around the origin.
    pub distance: f32,
    /// Initial angular speed.
    pub speed: f32,
}

pub const PLANET_COUNT: usize = 9;

#[rustfmt::skip]
pub const PLANETS: [CelestialBody; PLANET_COUNT] = [
    CelestialBody { name: "Mercury", radius: 0.8, distance: 10.0, speed: 0.04 },
    CelestialBody { name: "Venus",   radius: 1.2, distance: 15.0, speed: 0.03 },
    CelestialBody { name: "Earth",   radius: 1.5, distance: 20.0, speed: 0.02 },
    CelestialBody { name: "Mars",    radius: 1.2, distance: 25.0, speed: 0.018 },
    CelestialBody { name: "Jupiter", radius: 3.0, distance: 32.0, speed: 0.012 },
    CelestialBody { name: "Saturn",  radius: 2.5, distance: 38.0, speed: 0.01 },
    CelestialBody { name: "Uranus",  radius: 2.0, distance: 43.0, speed: 0.008 },
    CelestialBody { name: "Neptune", radius: 2.0, distance: 48.0, speed: 0.006 },
    CelestialBody { name: "Pluto",   radius: 0.7, distance: 54.0, speed: 0.004 },
];

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_NAME: &str = "Sun";
pub const SUN_RADIUS: f32 = 5.0;
pub const SUN_SEGMENTS: u32 = 64;
pub const SUN_EMISSIVE: u32 = 0xFFFF00;
pub const SUN_EMISSIVE_INTENSITY: f32 = 1.5;
/// Spin per tick, in radians.
pub const SUN_SPIN: f32 = 0.002;

pub const GLOW_RADIUS: f32 = 5.5;
pub const GLOW_COLOR: u32 = 0xFFFF99;
pub const GLOW_OPACITY: f32 = 0.4;

// ── Planets and orbit rings ──────────────────────────────────────────

pub const PLANET_SEGMENTS: u32 = 32;
/// Height of the orbital plane the planets ride on.
pub const PLANET_Y: f32 = 0.5;
/// Spin per tick, in radians.
pub const PLANET_SPIN: f32 = 0.01;

pub const RING_HALF_WIDTH: f32 = 0.1;
pub const RING_SEGMENTS: u32 = 128;
pub const RING_OPACITY: f32 = 0.2;

// ── Star field ───────────────────────────────────────────────────────

pub const STAR_COUNT: usize = 10_000;
/// Side of the cube the stars are scattered in, centred on the origin.
pub const STAR_FIELD_SIZE: f32 = 2000.0;
pub const STAR_SIZE: f32 = 0.1;
