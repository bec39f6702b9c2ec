//! Falling gold glitter behind the page.

use dioxus::prelude::*;
use rand::Rng;

const PARTICLE_COUNT: usize = 30;

#[derive(Clone, PartialEq)]
struct Particle {
    /// Horizontal position, percent of width
    x: f32,
    delay_s: f32,
    duration_s: f32,
    size_px: f32,
}

fn scatter(count: usize) -> Vec<Particle> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| Particle {
            x: rng.random_range(0.0..100.0),
            delay_s: rng.random_range(0.0..5.0),
            duration_s: rng.random_range(5.0..10.0),
            size_px: rng.random_range(2.0..8.0),
        })
        .collect()
}

#[component]
pub fn FallingEffects() -> Element {
    let particles = use_hook(|| scatter(PARTICLE_COUNT));

    rsx! {
        div { class: "glitter", "aria-hidden": "true",
            for (i, p) in particles.iter().enumerate() {
                div {
                    key: "{i}",
                    class: "glitter__dot",
                    style: "left: {p.x}%; width: {p.size_px}px; height: {p.size_px}px; animation-delay: {p.delay_s}s; animation-duration: {p.duration_s}s;",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scatter_stays_in_bounds() {
        let particles = scatter(200);
        assert_eq!(particles.len(), 200);
        for p in particles {
            assert!((0.0..100.0).contains(&p.x));
            assert!((2.0..8.0).contains(&p.size_px));
            assert!((5.0..10.0).contains(&p.duration_s));
        }
    }
}
