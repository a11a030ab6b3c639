//! Runnable samples, listed flat.

use crate::menu::{MenuRegistry, NodeDef, RegistryBuilder, RegistryError};

use super::SAMPLES;

const CATEGORY: &str = "Samples";

/// Build the samples registry.
pub fn samples() -> Result<MenuRegistry, RegistryError> {
    let mut b = RegistryBuilder::new(SAMPLES);

    let bouncing_ball = b.add(NodeDef {
        label: "Bouncing Ball",
        href: "/samples/bouncing-ball",
        description: "A single ball bouncing off the canvas edges.",
        category: CATEGORY,
        tags: &["physics", "draw-loop"],
    });
    let particles = b.add(NodeDef {
        label: "Particles",
        href: "/samples/particles",
        description: "Thousands of particles drawn in one pass.",
        category: CATEGORY,
        tags: &["particles", "performance"],
    });
    let layered_scene = b.add(NodeDef {
        label: "Layered Scene",
        href: "/samples/layered-scene",
        description: "Parallax background, actors and overlay on separate layers.",
        category: CATEGORY,
        tags: &["layers", "parallax"],
    });
    let clock = b.add(NodeDef {
        label: "Clock",
        href: "/samples/clock",
        description: "An analog clock built from rotated hands.",
        category: CATEGORY,
        tags: &["transform", "rotate", "time"],
    });
    let manage_data = b.add(NodeDef {
        label: "Manage Data",
        href: "/samples/manage-data",
        description: "Drive ball count and speed from React state.",
        category: CATEGORY,
        tags: &["data", "state"],
    });

    b.see_also(layered_scene, &[particles]);
    b.see_also(clock, &[bouncing_ball]);
    b.see_also(manage_data, &[bouncing_ball, particles]);

    b.build()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn samples_are_a_single_category() {
        let registry = samples().unwrap();
        let index = registry.categories();
        assert_eq!(index.len(), 1);
        assert_eq!(index.get(CATEGORY).unwrap().len(), registry.len());
    }
}
