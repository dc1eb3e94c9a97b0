use crate::{
    config::PageConfig,
    dom::{self, ScrollScene},
    form::{ContactFields, ContactForm, FormHooks, SubmitControl, SubmitOutcome},
    notification::{NotificationCenter, NotificationKind, NotificationTimings, NotificationView},
    scheduler::BrowserScheduler,
    scroll::{compute_frame, nav_scroll_target},
    sections::is_active_link,
    skills::hover_class,
    stylesheet::CARD_GLOW_CLASS,
    telemetry::Logger,
    throttle::Throttle,
};
use gloo_events::EventListener;
use serde_json::json;
use std::rc::Rc;
use web_sys::{window, HtmlElement, HtmlInputElement, HtmlTextAreaElement, MouseEvent};
use yew::prelude::*;

const NAV_LINKS: [(&str, &str); 5] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#projects", "Projects"),
    ("#skills", "Skills"),
    ("#contact", "Contact"),
];

const PROJECTS: [(&str, &str); 3] = [
    (
        "Tidewatch",
        "Streaming anomaly detection for coastal sensor networks.",
    ),
    (
        "Ledgerline",
        "Double-entry bookkeeping engine with an audit-friendly event log.",
    ),
    (
        "Trailhead",
        "Offline-first route planner for backcountry hiking.",
    ),
];

const SKILLS: [&str; 10] = [
    "Rust",
    "TypeScript",
    "WebAssembly",
    "PostgreSQL",
    "Python",
    "Docker",
    "GraphQL",
    "Linux",
    "React",
    "CI/CD",
];

type NotifyCallback = Callback<(String, NotificationKind)>;

fn log_skills_layout(logger: Logger, document: &web_sys::Document) {
    let placements = dom::layout_skills(document);
    logger.debug("skills_layout", json!({ "items": placements.len() }));
}

fn run_scroll_tick(active_section: &UseStateHandle<Option<String>>) {
    let Some(scene) = ScrollScene::capture() else {
        return;
    };

    let frame = compute_frame(&scene);
    scene.apply(&frame);
    active_section.set(frame.active_section);
}

/// Listeners live as long as this value; dropping it detaches them and
/// cancels any throttled tick still pending.
struct PageEffects {
    _listeners: Vec<EventListener>,
}

fn install_page_effects(
    config: &PageConfig,
    logger: Logger,
    active_section: UseStateHandle<Option<String>>,
) -> Option<PageEffects> {
    let window = window()?;
    let document = window.document()?;

    dom::install_stylesheet(&document);
    log_skills_layout(logger, &document);

    let scroll_throttle = Rc::new(Throttle::new(BrowserScheduler, config.scroll_throttle_ms, {
        let active_section = active_section.clone();
        move |()| run_scroll_tick(&active_section)
    }));
    let resize_throttle = Rc::new(Throttle::new(
        BrowserScheduler,
        config.resize_throttle_ms,
        move |()| {
            if let Some(document) = dom::document() {
                log_skills_layout(logger, &document);
            }
        },
    ));

    let scroll_listener = {
        let scroll_throttle = Rc::clone(&scroll_throttle);
        EventListener::new(&window, "scroll", move |_| scroll_throttle.call(()))
    };
    let resize_listener = {
        let scroll_throttle = Rc::clone(&scroll_throttle);
        EventListener::new(&window, "resize", move |_| {
            resize_throttle.call(());
            scroll_throttle.call(());
        })
    };

    run_scroll_tick(&active_section);
    dom::mark_loaded(&document);
    logger.info(
        "page_ready",
        json!({
            "scroll_throttle_ms": config.scroll_throttle_ms,
            "resize_throttle_ms": config.resize_throttle_ms,
        }),
    );

    Some(PageEffects {
        _listeners: vec![scroll_listener, resize_listener],
    })
}

#[derive(Properties, PartialEq)]
struct NavLinkProps {
    href: AttrValue,
    label: AttrValue,
    active: bool,
}

#[function_component(NavLink)]
fn nav_link(props: &NavLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        Callback::from(move |event: MouseEvent| {
            if !href.starts_with('#') {
                return;
            }
            event.prevent_default();
            event.stop_propagation();

            let Some(document) = dom::document() else {
                return;
            };
            if let Some(top) = dom::anchor_offset_top(&document, &href) {
                dom::smooth_scroll_to(nav_scroll_target(top));
            }
        })
    };

    html! {
        <a
            class={classes!("nav-link", props.active.then_some("active"))}
            href={props.href.clone()}
            aria-current={props.active.then_some("true")}
            {onclick}
        >
            {props.label.clone()}
        </a>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    title: AttrValue,
    summary: AttrValue,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let node = use_node_ref();

    // The reveal pass adds classes to the card directly, so the glow is
    // toggled on the live element instead of through the `class` attribute.
    let set_glow = |glowing: bool| {
        let node = node.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(card) = node.cast::<HtmlElement>() {
                let classes = card.class_list();
                let _ = if glowing {
                    classes.add_1(CARD_GLOW_CLASS)
                } else {
                    classes.remove_1(CARD_GLOW_CLASS)
                };
            }
        })
    };

    html! {
        <article
            class="project-card"
            ref={node.clone()}
            onmouseenter={set_glow(true)}
            onmouseleave={set_glow(false)}
        >
            <h3>{props.title.clone()}</h3>
            <p>{props.summary.clone()}</p>
        </article>
    }
}

#[function_component(SkillsCloud)]
fn skills_cloud() -> Html {
    let hovered = use_state_eq(|| None::<usize>);

    let items = SKILLS.iter().enumerate().map(|(index, skill)| {
        let onmouseenter = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(Some(index)))
        };
        let onmouseleave = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(None))
        };

        html! {
            <span
                key={*skill}
                class={classes!("skill-item", hover_class(index, *hovered))}
                {onmouseenter}
                {onmouseleave}
            >
                {*skill}
            </span>
        }
    });

    html! {
        <div class="skills-cloud" aria-label="Skills">
            { for items }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ContactSectionProps {
    on_notify: NotifyCallback,
    latency_ms: u32,
    logger: Logger,
}

#[function_component(ContactSection)]
fn contact_section(props: &ContactSectionProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let control = use_state(SubmitControl::idle);

    let form = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let control = control.clone();
        let on_notify = props.on_notify.clone();
        let logger = props.logger;
        use_memo(props.latency_ms, move |latency_ms| {
            ContactForm::new(
                BrowserScheduler,
                *latency_ms,
                FormHooks {
                    notify: Box::new(move |text: &str, kind: NotificationKind| {
                        on_notify.emit((text.to_string(), kind));
                    }),
                    control: Box::new(move |next: SubmitControl| control.set(next)),
                    reset: Box::new(move || {
                        name.set(String::new());
                        email.set(String::new());
                        message.set(String::new());
                        logger.info("contact_sent", json!({}));
                    }),
                },
            )
        })
    };

    let onsubmit = {
        let fields = ContactFields {
            name: (*name).clone(),
            email: (*email).clone(),
            message: (*message).clone(),
        };
        let logger = props.logger;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            match form.submit(&fields) {
                Ok(SubmitOutcome::Pending) => logger.info("contact_pending", json!({})),
                Ok(SubmitOutcome::AlreadyPending) => {
                    logger.debug("contact_already_pending", json!({}))
                }
                Err(error) => logger.warn("contact_rejected", json!({ "reason": error.reason() })),
            }
        })
    };

    let on_name = {
        let name = name.clone();
        Callback::from(move |event: InputEvent| {
            name.set(event.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            email.set(event.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |event: InputEvent| {
            message.set(event.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };

    html! {
        <section id="contact" class="contact" aria-labelledby="contact-heading">
            <h2 id="contact-heading">{"Contact"}</h2>
            <form class="contact-form" novalidate={true} {onsubmit}>
                <label for="name">{"Name"}</label>
                <input id="name" name="name" type="text" value={(*name).clone()} oninput={on_name} />
                <label for="email">{"Email"}</label>
                <input id="email" name="email" type="email" value={(*email).clone()} oninput={on_email} />
                <label for="message">{"Message"}</label>
                <textarea id="message" name="message" rows="5" value={(*message).clone()} oninput={on_message} />
                <button class="btn" type="submit" disabled={control.disabled}>
                    {control.label}
                </button>
            </form>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: PageConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let logger = Logger::new(props.config.log_level);
    let active_section = use_state_eq(|| None::<String>);
    let notification = use_state(|| None::<NotificationView>);

    let center = {
        let notification = notification.clone();
        use_memo(props.config.notification_ms, move |visible_ms| {
            NotificationCenter::new(
                BrowserScheduler,
                NotificationTimings::with_visible_ms(*visible_ms),
                move |view| notification.set(view),
            )
        })
    };

    let on_notify = Callback::from(move |(message, kind): (String, NotificationKind)| {
        logger.debug("notification_shown", json!({ "kind": kind.as_str() }));
        center.show(message, kind);
    });

    {
        let active_section = active_section.clone();
        let config = props.config.clone();
        use_effect_with((), move |_| {
            let effects = install_page_effects(&config, logger, active_section);
            move || drop(effects)
        });
    }

    let current = (*active_section).clone();

    html! {
        <>
            <nav class="nav" aria-label="Primary">
                <a class="nav-brand" href="#home">{"AQ"}</a>
                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <NavLink
                            key={*href}
                            href={*href}
                            label={*label}
                            active={is_active_link(href, current.as_deref())}
                        />
                    }) }
                </div>
            </nav>

            <main>
                <section id="home" class="hero">
                    <div class="hero-background" data-speed="0.5" aria-hidden="true"></div>
                    <div class="hero-content">
                        <h1>{"Avery Quinn"}</h1>
                        <p class="hero-tagline">{"Software engineer building fast, dependable systems for the web."}</p>
                    </div>
                    <div class="cube-scene" aria-hidden="true">
                        <div class="cube">
                            { for ["front", "back", "right", "left", "top", "bottom"].iter().map(|face| html! {
                                <div class={classes!("cube-face", format!("cube-face--{face}"))}></div>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="about" class="about" data-speed="0.2" aria-labelledby="about-heading">
                    <h2 id="about-heading">{"About"}</h2>
                    <p class="about-bio">
                        {"I design and ship full-stack products, with a soft spot for type systems, \
                          tight feedback loops and interfaces that feel instant."}
                    </p>
                </section>

                <section id="projects" class="projects" aria-labelledby="projects-heading">
                    <h2 id="projects-heading">{"Projects"}</h2>
                    <div class="project-grid">
                        { for PROJECTS.iter().map(|(title, summary)| html! {
                            <ProjectCard key={*title} title={*title} summary={*summary} />
                        }) }
                    </div>
                </section>

                <section id="skills" class="skills" aria-labelledby="skills-heading">
                    <h2 id="skills-heading" class="skills-title">{"Skills"}</h2>
                    <SkillsCloud />
                </section>

                <ContactSection
                    on_notify={on_notify}
                    latency_ms={props.config.submit_latency_ms}
                    {logger}
                />
            </main>

            { for notification.as_ref().map(|view| html! {
                <div
                    key={view.id.to_string()}
                    class={view.class_name()}
                    style={view.inline_style()}
                    role="status"
                    aria-live="polite"
                >
                    {view.message.clone()}
                </div>
            }) }
        </>
    }
}

pub fn run() {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
        .expect("missing #app mount point");

    let (config, ignored) = PageConfig::from_attributes(|name| root.get_attribute(name));
    let logger = Logger::new(config.log_level);
    for entry in ignored {
        logger.warn(
            "config_attribute_ignored",
            json!({ "attribute": entry.name, "value": entry.value }),
        );
    }

    yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();
}
