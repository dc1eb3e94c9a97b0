//! Browser side of the page effects: reads live geometry and writes the
//! styles the pure modules compute. Every lookup is optional; a missing
//! element only skips its own effect.

use crate::{
    scroll::{
        parallax_transform, parse_parallax_speed, PageGeometry, ScrollFrame,
        FALLBACK_VIEWPORT_HEIGHT_PX, PARALLAX_SELECTOR, REVEAL_ANIMATION, REVEAL_CLASS,
        REVEAL_SELECTOR,
    },
    sections::SectionBounds,
    skills::{layout_skill_cloud, SkillPlacement, FLOAT_ANIMATION},
    stylesheet::{pending_install, LOADED_CLASS, STYLESHEET_ID},
};
use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

pub fn document() -> Option<Document> {
    window()?.document()
}

fn query(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

/// One tick's view of the page, captured before any style is written.
pub struct ScrollScene {
    window: Window,
    root: Option<HtmlElement>,
    hero: Option<HtmlElement>,
    cube: Option<HtmlElement>,
    hero_content: Option<HtmlElement>,
    nav: Option<HtmlElement>,
    reveal: Vec<HtmlElement>,
    parallax: Vec<HtmlElement>,
    sections: Vec<HtmlElement>,
}

impl ScrollScene {
    pub fn capture() -> Option<Self> {
        let window = window()?;
        let document = window.document()?;

        Some(Self {
            root: document
                .document_element()
                .and_then(|element| element.dyn_into::<HtmlElement>().ok()),
            hero: query(&document, ".hero"),
            cube: query(&document, ".cube"),
            hero_content: query(&document, ".hero-content"),
            nav: query(&document, ".nav"),
            reveal: query_all(&document, REVEAL_SELECTOR),
            parallax: query_all(&document, PARALLAX_SELECTOR),
            sections: query_all(&document, "section[id]"),
            window,
        })
    }

    pub fn apply(&self, frame: &ScrollFrame) {
        if let Some(root) = &self.root {
            set_style(root, "--scroll-y", &frame.scroll_property());
        }

        if let (Some(hero), Some(cube)) = (frame.hero, &self.cube) {
            set_style(cube, "transform", &hero.cube_transform());
            if let Some(content) = &self.hero_content {
                set_style(content, "opacity", &hero.content_opacity.to_string());
                set_style(content, "transform", &hero.content_transform());
            }
        }

        for element in frame.reveal.iter().filter_map(|index| self.reveal.get(*index)) {
            let _ = element.class_list().add_1(REVEAL_CLASS);
            set_style(element, "animation", REVEAL_ANIMATION);
        }

        for (element, offset) in self.parallax.iter().zip(&frame.parallax_offsets) {
            set_style(element, "transform", &parallax_transform(*offset));
        }

        if let Some(nav) = &self.nav {
            set_style(nav, "background", &frame.nav_background());
        }
    }
}

impl PageGeometry for ScrollScene {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(FALLBACK_VIEWPORT_HEIGHT_PX)
    }

    fn hero_top(&self) -> Option<f64> {
        let (Some(hero), Some(_)) = (&self.hero, &self.cube) else {
            return None;
        };
        Some(hero.get_bounding_client_rect().top())
    }

    fn reveal_tops(&self) -> Vec<Option<f64>> {
        self.reveal
            .iter()
            .map(|element| {
                if element.class_list().contains(REVEAL_CLASS) {
                    None
                } else {
                    Some(element.get_bounding_client_rect().top())
                }
            })
            .collect()
    }

    fn parallax_speeds(&self) -> Vec<f64> {
        self.parallax
            .iter()
            .map(|element| parse_parallax_speed(element.get_attribute("data-speed").as_deref()))
            .collect()
    }

    fn sections(&self) -> Vec<SectionBounds> {
        self.sections
            .iter()
            .map(|section| {
                SectionBounds::new(
                    section.id(),
                    f64::from(section.offset_top()),
                    f64::from(section.offset_height()),
                )
            })
            .collect()
    }
}

/// Lays out `.skill-item`s inside `.skills-cloud`. Returns the placements
/// written, empty when the cloud is missing or has no items.
pub fn layout_skills(document: &Document) -> Vec<SkillPlacement> {
    let Some(cloud) = query(document, ".skills-cloud") else {
        return Vec::new();
    };
    let items = query_all(document, ".skill-item");

    let rect = cloud.get_bounding_client_rect();
    let sizes: Vec<(f64, f64)> = items
        .iter()
        .map(|item| (f64::from(item.offset_width()), f64::from(item.offset_height())))
        .collect();
    let placements = layout_skill_cloud(rect.width(), rect.height(), &sizes);

    for (item, placement) in items.iter().zip(&placements) {
        set_style(item, "left", &format!("{}px", placement.left));
        set_style(item, "top", &format!("{}px", placement.top));
        set_style(item, "transform", &placement.depth_transform());
        set_style(item, "--z-pos", &placement.depth_property());
        set_style(item, "animation", FLOAT_ANIMATION);
        set_style(item, "animation-delay", &placement.animation_delay());
    }

    placements
}

/// Appends the effects stylesheet unless it is already present.
pub fn install_stylesheet(document: &Document) -> bool {
    let Some(text) = pending_install(|id| document.get_element_by_id(id).is_some()) else {
        return false;
    };
    let Some(head) = document.head() else {
        return false;
    };
    let Ok(style) = document.create_element("style") else {
        return false;
    };

    style.set_id(STYLESHEET_ID);
    style.set_text_content(Some(&text));
    head.append_child(&style).is_ok()
}

pub fn mark_loaded(document: &Document) {
    if let Some(body) = document.body() {
        let _ = body.class_list().add_1(LOADED_CLASS);
    }
}

/// Offset of the section an in-page anchor points at, if any.
pub fn anchor_offset_top(document: &Document, href: &str) -> Option<f64> {
    if !href.starts_with('#') || href.len() < 2 {
        return None;
    }
    let target = query(document, href)?;
    Some(f64::from(target.offset_top()))
}

pub fn smooth_scroll_to(top: f64) {
    let Some(window) = window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
