use crate::core::random;
use crate::domain::model::{ParticleSpec, Viewport};
use crate::domain::ports::RandomSource;
use crate::utils::error::Result;

/// Square particle edge length; coordinates keep the whole particle inside
/// the viewport.
pub const PARTICLE_SIZE: u32 = 20;

/// How long the renderer keeps a particle alive before cleanup.
pub const PARTICLE_LIFETIME_MS: u64 = 3000;

const BURST_MIN: u32 = 5;
const BURST_MAX: u32 = 15;
const DELAY_MAX_MS: u32 = 1000;

/// Roll a burst of particle spawn parameters scattered over `viewport`.
///
/// Burst size lands in `[5, 15]`, each animation delay in `[0, 1000]` ms.
/// Viewports smaller than the particle size saturate the coordinate range
/// at 0 rather than failing.
pub fn spawn_particles<R: RandomSource + ?Sized>(
    rng: &mut R,
    viewport: Viewport,
) -> Result<Vec<ParticleSpec>> {
    let count = random::in_range(rng, BURST_MIN, BURST_MAX)?;
    let max_x = viewport.width.saturating_sub(PARTICLE_SIZE);
    let max_y = viewport.height.saturating_sub(PARTICLE_SIZE);

    let mut particles = Vec::with_capacity(count as usize);
    for _ in 0..count {
        particles.push(ParticleSpec {
            x: random::in_range(rng, 0, max_x)?,
            y: random::in_range(rng, 0, max_y)?,
            delay_ms: random::in_range(rng, 0, DELAY_MAX_MS)?,
        });
    }

    tracing::debug!("Rolled {} particles", particles.len());
    Ok(particles)
}
