//! One-shot scene construction: stars, lights, sun, planets and rings.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec3;
use orrery_engine::{
    Color, EngineContext, EngineResult, Entity, EntityId, Light, Material, MeshComponent, Rng,
    TextureRegistry,
};

use crate::bodies::{self, PLANETS};
use crate::orbit::circular_position;

/// Texture manifest bundled with the app: one entry per planet plus the sun.
pub const TEXTURE_MANIFEST: &str = include_str!("../assets/textures.json");

pub const CAMERA_POSITION: Vec3 = Vec3::new(40.0, 30.0, 40.0);
const STAR_SEED: u64 = 0x5EED_0F_57A25;

/// Entity handles created by [`build_scene`].
/// `planets` and `rings` are index-aligned with `PLANETS`.
#[derive(Debug, Clone)]
pub struct SceneHandles {
    pub stars: EntityId,
    pub sun: EntityId,
    pub glow: EntityId,
    pub planets: Vec<EntityId>,
    pub rings: Vec<EntityId>,
}

fn spawn(ctx: &mut EngineContext, tag: &str, pos: Vec3, mesh: MeshComponent) -> EntityId {
    let id = ctx.next_id();
    ctx.scene
        .spawn(Entity::new(id).with_tag(tag).with_pos(pos).with_mesh(mesh));
    id
}

/// Random star positions inside a cube of side `size` centred on the origin.
pub fn star_positions(count: usize, size: f32, rng: &mut Rng) -> Vec<Vec3> {
    (0..count)
        .map(|_| Vec3::new(rng.spread(size), rng.spread(size), rng.spread(size)))
        .collect()
}

/// Build the whole scene into `ctx`. Every body texture must resolve in
/// `manifest`; a missing entry aborts startup.
pub fn build_scene(ctx: &mut EngineContext, manifest: &str) -> EngineResult<SceneHandles> {
    ctx.textures = TextureRegistry::from_json(manifest)?;

    ctx.camera.position = CAMERA_POSITION;
    ctx.camera.look_at(Vec3::ZERO);

    let controls = &mut ctx.controls;
    controls.target = Vec3::ZERO;
    controls.enable_damping = true;
    controls.damping_factor = 0.05;
    controls.min_distance = 20.0;
    controls.max_distance = 100.0;
    controls.max_polar_angle = PI / 2.0;

    // ── Star field ───────────────────────────────────────────────────
    let mut rng = Rng::new(STAR_SEED);
    let stars = spawn(
        ctx,
        "stars",
        Vec3::ZERO,
        MeshComponent::points(
            star_positions(bodies::STAR_COUNT, bodies::STAR_FIELD_SIZE, &mut rng),
            bodies::STAR_SIZE,
            Material::basic(Color::WHITE).with_opacity(1.0),
        ),
    );

    // ── Lights ───────────────────────────────────────────────────────
    ctx.lights.add(Light::ambient(Color::WHITE, 2.0));
    ctx.lights.add(Light::point(Vec3::ZERO, Color::WHITE, 3.0, 500.0));
    ctx.lights.add(Light::directional(Vec3::new(30.0, 30.0, 30.0), Color::WHITE, 2.0));

    // ── Sun ──────────────────────────────────────────────────────────
    let sun_texture = ctx.textures.resolve(bodies::SUN_NAME)?;
    let sun = spawn(
        ctx,
        bodies::SUN_NAME,
        Vec3::ZERO,
        MeshComponent::sphere(
            bodies::SUN_RADIUS,
            bodies::SUN_SEGMENTS,
            Material::standard(sun_texture).with_emissive(
                Color::from_hex(bodies::SUN_EMISSIVE),
                bodies::SUN_EMISSIVE_INTENSITY,
            ),
        ),
    );
    let glow = spawn(
        ctx,
        "glow",
        Vec3::ZERO,
        MeshComponent::sphere(
            bodies::GLOW_RADIUS,
            bodies::SUN_SEGMENTS,
            Material::basic(Color::from_hex(bodies::GLOW_COLOR)).with_opacity(bodies::GLOW_OPACITY),
        ),
    );

    // ── Planets and orbit rings ──────────────────────────────────────
    let mut planets = Vec::with_capacity(PLANETS.len());
    let mut rings = Vec::with_capacity(PLANETS.len());
    for body in &PLANETS {
        let texture = ctx.textures.resolve(body.name)?;
        log::debug!("bootstrap: {} -> texture {}", body.name, texture.0);

        planets.push(spawn(
            ctx,
            body.name,
            circular_position(body.distance, body.speed, 0.0, bodies::PLANET_Y),
            MeshComponent::sphere(body.radius, bodies::PLANET_SEGMENTS, Material::standard(texture)),
        ));

        let ring_id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(ring_id)
                .with_tag(format!("{} orbit", body.name))
                .with_rotation(Vec3::new(FRAC_PI_2, 0.0, 0.0))
                .with_mesh(MeshComponent::ring(
                    body.distance - bodies::RING_HALF_WIDTH,
                    body.distance + bodies::RING_HALF_WIDTH,
                    bodies::RING_SEGMENTS,
                    Material::basic(Color::WHITE)
                        .with_opacity(bodies::RING_OPACITY)
                        .double_sided(),
                )),
        );
        rings.push(ring_id);
    }

    log::info!(
        "bootstrap: {} planets, {} stars, {} lights",
        planets.len(),
        bodies::STAR_COUNT,
        ctx.lights.count()
    );
    Ok(SceneHandles { stars, sun, glow, planets, rings })
}
