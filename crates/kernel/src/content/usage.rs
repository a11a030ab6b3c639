//! Usage guides, grouped by concept.

use crate::menu::{MenuRegistry, NodeDef, RegistryBuilder, RegistryError};

use super::USAGE;

const GETTING_STARTED: &str = "Getting Started";
const CORE_CONCEPTS: &str = "Core Concepts";
const ADVANCED_CONCEPTS: &str = "Advanced Concepts";
const ADDITIONAL_CONCEPTS: &str = "Additional Concepts";

/// Build the usage registry.
pub fn usage() -> Result<MenuRegistry, RegistryError> {
    let mut b = RegistryBuilder::new(USAGE);

    let installation = b.add(NodeDef {
        label: "Installation",
        href: "/usage/installation",
        description: "Add the hook to a project and render a first canvas.",
        category: GETTING_STARTED,
        tags: &["install", "npm", "setup"],
    });
    let basic_usage = b.add(NodeDef {
        label: "Basic Usage",
        href: "/usage/basic-usage",
        description: "Attach the hook to a canvas element and draw on every frame.",
        category: GETTING_STARTED,
        tags: &["hook", "canvas", "draw"],
    });

    let draw_loop = b.add(NodeDef {
        label: "Draw Loop",
        href: "/usage/draw-loop",
        description: "How the frame callback is scheduled and paused.",
        category: CORE_CONCEPTS,
        tags: &["animation", "frame", "requestAnimationFrame"],
    });
    let layers = b.add(NodeDef {
        label: "Layers",
        href: "/usage/layers",
        description: "Stack independent drawing layers and control their order.",
        category: CORE_CONCEPTS,
        tags: &["layers", "z-index", "compositing"],
    });
    let transform = b.add(NodeDef {
        label: "Transform",
        href: "/usage/transform",
        description: "Translate and rotate drawings without touching their geometry.",
        category: CORE_CONCEPTS,
        tags: &["transform", "translate", "rotate", "scale"],
    });

    let persist_context = b.add(NodeDef {
        label: "Persist Context",
        href: "/usage/persist-context",
        description: "Keep values alive between frames without React re-renders.",
        category: ADVANCED_CONCEPTS,
        tags: &["context", "state", "persist"],
    });
    let data_isolation = b.add(NodeDef {
        label: "Data Isolation",
        href: "/usage/data-isolation",
        description: "Give each layer private data so layers cannot corrupt one another.",
        category: ADVANCED_CONCEPTS,
        tags: &["data", "isolation", "layers"],
    });
    let frame_timing = b.add(NodeDef {
        label: "Frame Timing",
        href: "/usage/frame-timing",
        description: "Use elapsed and delta time for frame-rate independent motion.",
        category: ADVANCED_CONCEPTS,
        tags: &["timing", "delta", "fps"],
    });

    let manage_data = b.add(NodeDef {
        label: "Manage Data",
        href: "/usage/manage-data",
        description: "Feed props and external state into a running animation.",
        category: ADDITIONAL_CONCEPTS,
        tags: &["data", "state", "props"],
    });
    let resize_handling = b.add(NodeDef {
        label: "Resize Handling",
        href: "/usage/resize-handling",
        description: "Keep the canvas sharp when its box or the pixel ratio changes.",
        category: ADDITIONAL_CONCEPTS,
        tags: &["resize", "devicePixelRatio", "responsive"],
    });

    b.see_also(basic_usage, &[installation, draw_loop, layers]);
    b.see_also(draw_loop, &[frame_timing, basic_usage]);
    b.see_also(layers, &[transform, data_isolation, manage_data]);
    b.see_also(transform, &[layers]);
    b.see_also(persist_context, &[data_isolation, manage_data]);
    b.see_also(data_isolation, &[persist_context, layers]);
    b.see_also(frame_timing, &[draw_loop]);
    b.see_also(manage_data, &[layers, transform, data_isolation]);
    b.see_also(resize_handling, &[transform]);

    b.build()
}
