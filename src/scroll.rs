//! Per-tick scroll effects.
//!
//! `compute_frame` turns one reading of page geometry into every style change
//! the tick needs. Reading geometry and writing styles live behind
//! [`PageGeometry`] and the DOM adapter so the arithmetic can be checked with
//! fixtures.

use crate::sections::{current_section, SectionBounds};

const CUBE_MAX_ROTATION_DEG: f64 = 180.0;
const CUBE_Y_AXIS_RATIO: f64 = 1.5;
const HERO_FADE_RATE: f64 = 2.0;
const HERO_MAX_OFFSET_PX: f64 = 100.0;
const REVEAL_MARGIN_PX: f64 = 100.0;
const NAV_OPACITY_RANGE: (f64, f64) = (0.8, 0.95);
const NAV_OPACITY_RAMP_PX: f64 = 100.0;
const FIXED_HEADER_HEIGHT_PX: f64 = 80.0;

pub const DEFAULT_PARALLAX_SPEED: f64 = 0.5;
/// Used when the window cannot report `innerHeight`.
pub const FALLBACK_VIEWPORT_HEIGHT_PX: f64 = 720.0;
pub const REVEAL_SELECTOR: &str = ".about-bio, .project-card, .skills-title";
pub const PARALLAX_SELECTOR: &str = ".hero-background, .about";
pub const REVEAL_CLASS: &str = "animate-in";
pub const REVEAL_ANIMATION: &str = "slideInUp 0.8s cubic-bezier(0.16, 1, 0.3, 1) forwards";

/// Live geometry for one tick.
pub trait PageGeometry {
    fn scroll_y(&self) -> f64;

    fn viewport_height(&self) -> f64;

    /// Hero top relative to the viewport, or `None` when the hero or its cube
    /// is missing.
    fn hero_top(&self) -> Option<f64>;

    /// Viewport-relative top of each reveal block in document order; `None`
    /// for blocks already revealed.
    fn reveal_tops(&self) -> Vec<Option<f64>>;

    fn parallax_speeds(&self) -> Vec<f64>;

    fn sections(&self) -> Vec<SectionBounds>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroMotion {
    pub scroll_percent: f64,
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
    pub content_opacity: f64,
    pub content_offset_px: f64,
}

impl HeroMotion {
    fn from_scroll_percent(scroll_percent: f64) -> Self {
        let rotation = scroll_percent * CUBE_MAX_ROTATION_DEG;
        Self {
            scroll_percent,
            rotate_x_deg: rotation,
            rotate_y_deg: rotation * CUBE_Y_AXIS_RATIO,
            content_opacity: (1.0 - scroll_percent * HERO_FADE_RATE).clamp(0.0, 1.0),
            content_offset_px: scroll_percent * HERO_MAX_OFFSET_PX,
        }
    }

    pub fn cube_transform(&self) -> String {
        format!(
            "rotateX({}deg) rotateY({}deg)",
            self.rotate_x_deg, self.rotate_y_deg
        )
    }

    pub fn content_transform(&self) -> String {
        format!("translateY({}px)", self.content_offset_px)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollFrame {
    pub scroll_y: f64,
    pub hero: Option<HeroMotion>,
    /// Indices into `reveal_tops` that cross the threshold this tick.
    pub reveal: Vec<usize>,
    pub parallax_offsets: Vec<f64>,
    pub nav_opacity: f64,
    pub active_section: Option<String>,
}

impl ScrollFrame {
    pub fn scroll_property(&self) -> String {
        format!("{}px", self.scroll_y)
    }

    pub fn nav_background(&self) -> String {
        format!("rgba(26, 26, 46, {})", self.nav_opacity)
    }
}

pub fn parallax_transform(offset: f64) -> String {
    format!("translateY({offset}px)")
}

pub fn hero_scroll_percent(hero_top: f64, viewport_height: f64) -> f64 {
    if viewport_height <= 0.0 {
        return 0.0;
    }
    (-hero_top / viewport_height).clamp(0.0, 1.0)
}

pub fn nav_opacity(scroll_y: f64) -> f64 {
    (scroll_y / NAV_OPACITY_RAMP_PX).clamp(NAV_OPACITY_RANGE.0, NAV_OPACITY_RANGE.1)
}

pub fn parse_parallax_speed(raw: Option<&str>) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(DEFAULT_PARALLAX_SPEED)
}

/// Where the window should scroll to bring a section under the fixed header.
pub fn nav_scroll_target(section_offset_top: f64) -> f64 {
    section_offset_top - FIXED_HEADER_HEIGHT_PX
}

pub fn compute_frame(geometry: &impl PageGeometry) -> ScrollFrame {
    let scroll_y = geometry.scroll_y();
    let viewport_height = geometry.viewport_height();

    let hero = geometry
        .hero_top()
        .map(|top| HeroMotion::from_scroll_percent(hero_scroll_percent(top, viewport_height)));

    let reveal_threshold = viewport_height - REVEAL_MARGIN_PX;
    let reveal = geometry
        .reveal_tops()
        .into_iter()
        .enumerate()
        .filter_map(|(index, top)| top.filter(|top| *top < reveal_threshold).map(|_| index))
        .collect();

    let parallax_offsets = geometry
        .parallax_speeds()
        .into_iter()
        .map(|speed| -(scroll_y * speed))
        .collect();

    let sections = geometry.sections();
    let active_section = current_section(&sections, scroll_y).map(str::to_string);

    ScrollFrame {
        scroll_y,
        hero,
        reveal,
        parallax_offsets,
        nav_opacity: nav_opacity(scroll_y),
        active_section,
    }
}
