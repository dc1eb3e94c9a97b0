use crate::stylesheet::{SKILL_DIM_CLASS, SKILL_FOCUS_CLASS};
use std::f64::consts::TAU;

const MAX_RADIUS_PX: f64 = 150.0;
const EDGE_INSET_PX: f64 = 50.0;
const DEPTH_AMPLITUDE_PX: f64 = 50.0;
const FLOAT_STAGGER_SECS: f64 = 0.2;

pub const FLOAT_ANIMATION: &str = "skillFloat 6s ease-in-out infinite";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillPlacement {
    pub index: usize,
    pub angle: f64,
    pub left: f64,
    pub top: f64,
    pub depth: f64,
    pub delay_secs: f64,
}

impl SkillPlacement {
    pub fn depth_transform(&self) -> String {
        format!("translateZ({}px)", self.depth)
    }

    pub fn depth_property(&self) -> String {
        format!("{}px", self.depth)
    }

    pub fn animation_delay(&self) -> String {
        format!("{}s", self.delay_secs)
    }
}

/// Hover treatment for skill `index` while `hovered` is under the pointer:
/// the hovered item pauses, every other item dims.
pub fn hover_class(index: usize, hovered: Option<usize>) -> Option<&'static str> {
    match hovered {
        Some(current) if current == index => Some(SKILL_FOCUS_CLASS),
        Some(_) => Some(SKILL_DIM_CLASS),
        None => None,
    }
}

pub fn cloud_radius(container_width: f64, container_height: f64) -> f64 {
    let center_x = container_width / 2.0;
    let center_y = container_height / 2.0;
    MAX_RADIUS_PX.min(center_x.min(center_y) - EDGE_INSET_PX)
}

/// Spreads items evenly on a circle around the container center, each
/// centered on its own point. `item_sizes` holds rendered `(width, height)`.
pub fn layout_skill_cloud(
    container_width: f64,
    container_height: f64,
    item_sizes: &[(f64, f64)],
) -> Vec<SkillPlacement> {
    let count = item_sizes.len();
    if count == 0 {
        return Vec::new();
    }

    let center_x = container_width / 2.0;
    let center_y = container_height / 2.0;
    let radius = cloud_radius(container_width, container_height);

    item_sizes
        .iter()
        .enumerate()
        .map(|(index, (width, height))| {
            let angle = index as f64 / count as f64 * TAU;
            SkillPlacement {
                index,
                angle,
                left: center_x + angle.cos() * radius - width / 2.0,
                top: center_y + angle.sin() * radius - height / 2.0,
                depth: (angle * 2.0).sin() * DEPTH_AMPLITUDE_PX,
                delay_secs: index as f64 * FLOAT_STAGGER_SECS,
            }
        })
        .collect()
}
