// Background decoration particle field.
//
// A fixed-cardinality set of slowly drifting, spinning boxes behind the
// scene. Particles are recycled in place when they drift past the camera;
// the collection is never reallocated after construction.

use super::constants::*;
use glam::Vec3;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec3,
    pub rotation: Vec3,
    pub speed: f32,
    pub size: f32,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    scale: f32,
    offset: Vec3,
}

impl ParticleField {
    pub fn new(count: usize, scale: f32, offset: Vec3, rng: &mut impl Rng) -> Self {
        let particles = (0..count)
            .map(|_| {
                let (x, y) = sample_xy(scale, offset, rng);
                Particle {
                    position: Vec3::new(
                        x,
                        y,
                        rng.gen_range(PARTICLE_Z_MIN..PARTICLE_Z_MAX) * scale + offset.z,
                    ),
                    rotation: Vec3::new(
                        rng.gen_range(0.0..std::f32::consts::PI),
                        rng.gen_range(0.0..std::f32::consts::PI),
                        rng.gen_range(0.0..std::f32::consts::PI),
                    ),
                    speed: rng.gen_range(PARTICLE_SPEED_MIN..PARTICLE_SPEED_MAX),
                    size: rng.gen_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX),
                }
            })
            .collect();
        Self {
            particles,
            scale,
            offset,
        }
    }

    /// One step per rendered frame (frame-coupled, not elapsed-time).
    /// Past the recycle plane a particle gets fresh x/y and is sent back to
    /// the far spawn plane; rotation and speed survive the recycle.
    pub fn advance(&mut self, rng: &mut impl Rng) {
        for p in &mut self.particles {
            p.position.z += p.speed * PARTICLE_DRIFT_PER_FRAME;
            p.rotation.x += PARTICLE_SPIN_PER_FRAME;
            p.rotation.y += PARTICLE_SPIN_PER_FRAME;

            if p.position.z > PARTICLE_RECYCLE_Z {
                let (x, y) = sample_xy(self.scale, self.offset, rng);
                p.position.x = x;
                p.position.y = y;
                p.position.z = PARTICLE_Z_MIN * self.scale + self.offset.z;
            }
        }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Far spawn plane in world space; the z invariant's lower bound.
    #[inline]
    pub fn spawn_z(&self) -> f32 {
        PARTICLE_Z_MIN * self.scale + self.offset.z
    }
}

fn sample_xy(scale: f32, offset: Vec3, rng: &mut impl Rng) -> (f32, f32) {
    (
        rng.gen_range(-PARTICLE_X_HALF_RANGE..PARTICLE_X_HALF_RANGE) * scale + offset.x,
        rng.gen_range(-PARTICLE_Y_HALF_RANGE..PARTICLE_Y_HALF_RANGE) * scale + offset.y,
    )
}
