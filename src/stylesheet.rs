//! Rules the page effects depend on, installed once as a single `<style>`.

pub const STYLESHEET_ID: &str = "portfolio-effects";

pub const LOADED_CLASS: &str = "loaded";
pub const CARD_GLOW_CLASS: &str = "is-glowing";
pub const SKILL_FOCUS_CLASS: &str = "is-focused";
pub const SKILL_DIM_CLASS: &str = "is-dimmed";

const SKILL_FLOAT: &str = r#"
@keyframes skillFloat {
    0%, 100% {
        transform: translateZ(var(--z-pos, 0px)) translateY(0px) rotateX(0deg);
    }
    50% {
        transform: translateZ(var(--z-pos, 0px)) translateY(-10px) rotateX(5deg);
    }
}
"#;

const REVEAL: &str = r#"
@keyframes slideInUp {
    from {
        opacity: 0;
        transform: translateY(50px);
    }
    to {
        opacity: 1;
        transform: translateY(0);
    }
}

.about-bio,
.project-card,
.skills-title {
    opacity: 0;
}

.animate-in {
    opacity: 1 !important;
}
"#;

const LOADING_GATE: &str = r#"
body:not(.loaded) * {
    animation-play-state: paused !important;
}

body.loaded {
    animation: fadeIn 0.5s ease-out;
}

@keyframes fadeIn {
    from { opacity: 0; }
    to { opacity: 1; }
}
"#;

const ENHANCEMENTS: &str = r#"
::-webkit-scrollbar {
    width: 8px;
}

::-webkit-scrollbar-track {
    background: var(--portfolio-bg);
}

::-webkit-scrollbar-thumb {
    background: linear-gradient(45deg, var(--portfolio-gradient-start), var(--portfolio-gradient-end));
    border-radius: 4px;
}

::-webkit-scrollbar-thumb:hover {
    opacity: 0.8;
}

::selection {
    background: var(--portfolio-accent);
    color: white;
}

*:focus-visible {
    outline: 2px solid var(--portfolio-accent);
    outline-offset: 2px;
}

button, a, .skill-item, .project-card, .social-link {
    transition: all 0.3s cubic-bezier(0.16, 1, 0.3, 1);
}

.project-card {
    filter: drop-shadow(0 10px 30px rgba(0, 0, 0, 0.2));
    transition: all 0.4s cubic-bezier(0.16, 1, 0.3, 1);
}
"#;

const HOVER_STATES: &str = r#"
.project-card.is-glowing {
    filter: drop-shadow(0 20px 60px rgba(107, 70, 193, 0.4));
}

.skill-item.is-focused {
    animation-play-state: paused !important;
}

.skill-item.is-dimmed {
    opacity: 0.3;
    filter: blur(1px);
}
"#;

pub fn stylesheet_text() -> String {
    [SKILL_FLOAT, REVEAL, LOADING_GATE, ENHANCEMENTS, HOVER_STATES].concat()
}

/// Sheet text to append, or `None` when an element with [`STYLESHEET_ID`]
/// is already on the page.
pub fn pending_install(is_present: impl Fn(&str) -> bool) -> Option<String> {
    if is_present(STYLESHEET_ID) {
        return None;
    }
    Some(stylesheet_text())
}
