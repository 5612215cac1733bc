use crate::core::Vec2;
use crate::domain::particle::Particle;

use super::types::PhysicsParams;

/// Overlap threshold for a pair. Width only: icons are treated as discs
/// whose diameter is their width, whatever their height.
#[inline]
pub fn min_distance(a: &Particle, b: &Particle) -> f32 {
    (a.size.x + b.size.x) * 0.5
}

/// One pass over every unordered pair.
///
/// Overlap detection uses the centers as they were when the pass started;
/// corrections land on the live particles immediately and accumulate when
/// an icon overlaps several neighbours. There is no relaxation loop, so a
/// tight cluster of three or more may keep a little residual overlap.
/// Returns the number of pairs that were pushed apart.
pub fn resolve_collisions(particles: &mut [Particle], params: &PhysicsParams) -> u32 {
    let centers: Vec<Vec2> = particles.iter().map(Particle::center).collect();
    let mut resolved = 0;

    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            let delta = centers[j] - centers[i];
            let dist = delta.length();
            let min_dist = min_distance(&particles[i], &particles[j]);

            // dist == 0 has no usable normal; leave it for integration to separate
            if dist > 0.0 && dist < min_dist {
                let (head, tail) = particles.split_at_mut(j);
                resolve_pair(&mut head[i], &mut tail[0], delta / dist, min_dist - dist, params);
                resolved += 1;
            }
        }
    }

    resolved
}

/// Push `a` and `b` apart along `normal` (pointing from a to b) and, if they
/// are still closing, exchange a restitution-scaled impulse.
pub fn resolve_pair(a: &mut Particle, b: &mut Particle, normal: Vec2, overlap: f32, params: &PhysicsParams) {
    let total_mass = a.mass + b.mass;

    // Heavier particle gets the smaller share of the correction
    a.pos -= normal * (overlap * b.mass / total_mass);
    b.pos += normal * (overlap * a.mass / total_mass);

    let closing = (a.velocity - b.velocity).dot(normal);
    if closing > 0.0 {
        let impulse = 2.0 * closing / total_mass * params.collision_restitution;
        a.velocity -= normal * (impulse * b.mass);
        b.velocity += normal * (impulse * a.mass);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::IntroConfig;
    use crate::domain::particle::IconSlot;

    fn params() -> PhysicsParams {
        PhysicsParams::from_config(&IntroConfig::default(), Vec2::new(1000.0, 1000.0))
    }

    fn icon(x: f32, y: f32, w: f32, h: f32, v: Vec2) -> Particle {
        Particle::new(Vec2::new(x, y), v, &IconSlot::new(0.0, 0.0, w, h), 60.0)
    }

    #[test]
    fn head_on_equal_mass_pair() {
        // 40x40 each, centers 30px apart => 10px overlap
        let mut ps = vec![
            icon(100.0, 100.0, 40.0, 40.0, Vec2::new(5.0, 0.0)),
            icon(130.0, 100.0, 40.0, 40.0, Vec2::new(-5.0, 0.0)),
        ];
        assert_eq!(resolve_collisions(&mut ps, &params()), 1);

        assert!((ps[0].pos.x - 95.0).abs() < 1e-4);
        assert!((ps[1].pos.x - 135.0).abs() < 1e-4);
        // impulse = 2 * 10 / 3.2 * 0.7 = 4.375, times the other mass 1.6 = 7
        assert!((ps[0].velocity.x + 2.0).abs() < 1e-4);
        assert!((ps[1].velocity.x - 2.0).abs() < 1e-4);
        assert_eq!(ps[0].velocity.y, 0.0);
    }

    #[test]
    fn approaching_pair_ends_at_least_min_distance_apart() {
        let mut ps = vec![
            icon(200.0, 200.0, 50.0, 30.0, Vec2::new(2.0, 1.0)),
            icon(230.0, 215.0, 70.0, 70.0, Vec2::new(-3.0, -1.0)),
        ];
        let min_dist = min_distance(&ps[0], &ps[1]);
        resolve_collisions(&mut ps, &params());
        let dist = (ps[1].center() - ps[0].center()).length();
        assert!(dist >= min_dist - 1e-3, "dist {} < {}", dist, min_dist);
    }

    #[test]
    fn heavier_particle_moves_less() {
        let mut ps = vec![
            icon(100.0, 100.0, 40.0, 40.0, Vec2::zero()),
            icon(110.0, 100.0, 80.0, 80.0, Vec2::zero()),
        ];
        let before: Vec<Vec2> = ps.iter().map(|p| p.pos).collect();
        resolve_collisions(&mut ps, &params());
        let light_shift = (ps[0].pos - before[0]).length();
        let heavy_shift = (ps[1].pos - before[1]).length();
        assert!(heavy_shift < light_shift);
        // 40x40 vs 80x80 => masses 1.6 and 6.4, so a 4:1 split
        assert!((light_shift / heavy_shift - 4.0).abs() < 1e-3);
    }

    #[test]
    fn separating_pair_only_gets_positional_fix() {
        let mut ps = vec![
            icon(100.0, 100.0, 40.0, 40.0, Vec2::new(-1.0, 0.0)),
            icon(120.0, 100.0, 40.0, 40.0, Vec2::new(1.0, 0.0)),
        ];
        resolve_collisions(&mut ps, &params());
        assert_eq!(ps[0].velocity, Vec2::new(-1.0, 0.0));
        assert_eq!(ps[1].velocity, Vec2::new(1.0, 0.0));
        assert!((ps[1].pos.x - ps[0].pos.x - 40.0).abs() < 1e-4);
    }

    #[test]
    fn coincident_centers_are_skipped() {
        let mut ps = vec![
            icon(100.0, 100.0, 40.0, 40.0, Vec2::new(1.0, 0.0)),
            icon(100.0, 100.0, 40.0, 40.0, Vec2::new(-1.0, 0.0)),
        ];
        assert_eq!(resolve_collisions(&mut ps, &params()), 0);
        assert_eq!(ps[0].pos, ps[1].pos);
    }

    #[test]
    fn impulse_conserves_momentum() {
        let mut ps = vec![
            icon(100.0, 100.0, 40.0, 40.0, Vec2::new(4.0, 1.0)),
            icon(125.0, 110.0, 60.0, 50.0, Vec2::new(-2.0, 0.5)),
        ];
        let momentum = |ps: &[Particle]| ps.iter().fold(Vec2::zero(), |acc, p| acc + p.velocity * p.mass);
        let before = momentum(&ps);
        resolve_collisions(&mut ps, &params());
        let after = momentum(&ps);
        assert!((before - after).length() < 1e-4);
    }

    #[test]
    fn width_only_threshold_ignores_height() {
        // Boxes overlap by 55px vertically, but centers are 45px apart and the threshold is 10
        let mut ps = vec![
            icon(100.0, 100.0, 10.0, 100.0, Vec2::zero()),
            icon(100.0, 145.0, 10.0, 100.0, Vec2::zero()),
        ];
        assert_eq!(resolve_collisions(&mut ps, &params()), 0);
    }
}
