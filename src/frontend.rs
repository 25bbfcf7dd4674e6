use js_sys::Date;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Element, Window};
use yew::prelude::*;

use crate::content::{
    footer_line, mailto, project_cards, stack_tiles, LinkButton, ProjectCard, StackTile,
    ABOUT_TEXT, CONTACT_EMAIL, GITHUB_URL, HERO_LINKS, LINKEDIN_URL, OWNER_NAME, PORTRAIT_ALT,
    PORTRAIT_PATH, PROJECTS, STACK,
};
use crate::motion::{
    Enter, Hover, ENTER_CLASS, HERO_TAGLINE_ENTER, HERO_TITLE_ENTER, HOVER_CLASS, LIFT_HOVER,
    NAV_ENTER, PORTRAIT_ENTER, PORTRAIT_FRAME_ENTER, PORTRAIT_HOVER, TILE_HOVER,
};
use crate::scroll_nav::{ScrollNavController, ScrollSample, ScrollSource};
use crate::theme::{ThemeController, ThemeTarget, THEME_ATTRIBUTE};
use crate::typing::{TypedTextController, TypingHost, HERO_TYPING, TYPED_ANCHOR_ID, TYPED_CURSOR};

struct DocumentRoot;

impl ThemeTarget for DocumentRoot {
    fn set_theme_attribute(&self, value: &str) {
        let Some(root) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            log::warn!("no document element to carry {THEME_ATTRIBUTE}");
            return;
        };

        if root.set_attribute(THEME_ATTRIBUTE, value).is_err() {
            log::warn!("failed to set {THEME_ATTRIBUTE}={value}");
        }
    }
}

fn read_scroll_sample(win: &Window) -> ScrollSample {
    ScrollSample {
        offset: win.scroll_y().unwrap_or(0.0),
        viewport_height: win
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0),
    }
}

struct WindowScroll;

struct ScrollListener {
    win: Option<Window>,
    callback: Closure<dyn FnMut()>,
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Some(win) = self.win.take() {
            let _ = win
                .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
        }
    }
}

impl ScrollSource for WindowScroll {
    type Subscription = ScrollListener;

    fn subscribe(&self, mut on_scroll: Box<dyn FnMut(ScrollSample)>) -> ScrollListener {
        let Some(win) = window() else {
            log::warn!("no window to listen for scroll on");
            return ScrollListener {
                win: None,
                callback: Closure::new(|| {}),
            };
        };

        let sampled = win.clone();
        let callback = Closure::<dyn FnMut()>::new(move || on_scroll(read_scroll_sample(&sampled)));
        let registered = win
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .is_ok();
        if !registered {
            log::warn!("failed to attach scroll listener");
        }

        ScrollListener {
            win: registered.then_some(win),
            callback,
        }
    }
}

struct TypedAnchor {
    element: Element,
}

impl TypedAnchor {
    fn find() -> Option<Self> {
        window()?
            .document()?
            .get_element_by_id(TYPED_ANCHOR_ID)
            .map(|element| Self { element })
    }
}

struct PendingTick {
    handle: Option<i32>,
    _callback: Closure<dyn FnMut()>,
}

impl TypingHost for TypedAnchor {
    type Timer = PendingTick;

    fn render(&self, text: &str) {
        self.element.set_text_content(Some(text));
    }

    fn schedule(&self, delay_ms: u32, tick: Box<dyn FnOnce()>) -> PendingTick {
        let mut tick = Some(tick);
        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Some(tick) = tick.take() {
                tick();
            }
        });

        let handle = window().and_then(|win| {
            win.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                i32::try_from(delay_ms).unwrap_or(i32::MAX),
            )
            .ok()
        });
        if handle.is_none() {
            log::warn!("failed to schedule typing tick");
        }

        PendingTick {
            handle,
            _callback: callback,
        }
    }

    fn cancel(&self, timer: PendingTick) {
        if let (Some(win), Some(handle)) = (window(), timer.handle) {
            win.clear_timeout_with_handle(handle);
        }
    }

    fn clear(&self) {
        self.element.set_text_content(None);
    }
}

fn enter_hover_style(enter: Enter, hover: Hover) -> String {
    format!("{} {}", enter.style(), hover.style())
}

#[derive(Properties, PartialEq)]
struct HrefButtonProps {
    link: LinkButton,
}

#[function_component(HrefButton)]
fn href_button(props: &HrefButtonProps) -> Html {
    let link = props.link;

    html! {
        <a
            class={classes!("cta", HOVER_CLASS, link.appearance.class())}
            style={LIFT_HOVER.style()}
            href={link.href}
            download={link.download.then_some("")}
            target={link.new_tab.then_some("_blank")}
            rel={link.new_tab.then_some("noopener noreferrer")}
        >
            <img class="cta-icon" src={link.icon.url()} alt="" aria-hidden="true" />
            {link.label}
        </a>
    }
}

#[derive(Properties, PartialEq)]
struct StackGridProps {
    tiles: Vec<StackTile>,
}

#[function_component(StackGrid)]
fn stack_grid(props: &StackGridProps) -> Html {
    html! {
        <div class="stack-grid">
            { for props.tiles.iter().map(|tile| html! {
                <div key={tile.name} class={classes!("stack-tile", HOVER_CLASS)} style={TILE_HOVER.style()}>
                    <img class="stack-icon" src={tile.icon_url.clone()} alt="" aria-hidden="true" />
                    <div>{tile.name}</div>
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectGridProps {
    cards: Vec<ProjectCard>,
}

#[function_component(ProjectGrid)]
fn project_grid(props: &ProjectGridProps) -> Html {
    html! {
        <div class="project-grid">
            { for props.cards.iter().map(|card| html! {
                <div key={card.title} class={classes!("project-card", HOVER_CLASS)} style={LIFT_HOVER.style()}>
                    <h4>{card.title}</h4>
                    <p class="muted small">{card.description}</p>
                    <div class="tag-row">
                        { for card.tags.iter().map(|tag| html! {
                            <div class={classes!("tag", tag.appearance.class())}>{tag.text}</div>
                        }) }
                    </div>
                </div>
            }) }
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let theme_controller = use_mut_ref(|| ThemeController::new(DocumentRoot));
    let rerender = use_force_update();
    let nav_visible = use_state_eq(|| false);

    {
        let nav_visible = nav_visible.clone();
        use_effect_with((), move |_| {
            let controller =
                ScrollNavController::mount(&WindowScroll, move |visible| nav_visible.set(visible));
            move || drop(controller)
        });
    }

    use_effect_with((), |_| {
        let controller = TypedTextController::mount(TypedAnchor::find(), HERO_TYPING);
        move || drop(controller)
    });

    let mode = theme_controller.borrow().mode();

    let on_toggle = Callback::from(move |_| {
        theme_controller.borrow_mut().toggle();
        rerender.force_update();
    });

    let tiles = stack_tiles(STACK);
    let cards = project_cards(PROJECTS, mode);
    let year = Date::new_0().get_full_year();

    html! {
        <div class={classes!("page", mode.as_str())}>
            if *nav_visible {
                <nav class={classes!("top-nav", ENTER_CLASS)} style={NAV_ENTER.style()}>
                    <h1 class="accent">{OWNER_NAME}</h1>
                </nav>
            }

            <button class="theme-toggle" type="button" onclick={on_toggle}>
                {mode.toggle_caption()}
            </button>

            <section class="hero">
                <div class="hero-glow" aria-hidden="true"></div>

                <div class="hero-copy">
                    <h1 class={classes!("hero-title", "accent", ENTER_CLASS)} style={HERO_TITLE_ENTER.style()}>
                        {OWNER_NAME}
                    </h1>
                    <div class={classes!("hero-tagline", ENTER_CLASS)} style={HERO_TAGLINE_ENTER.style()}>
                        <span id={TYPED_ANCHOR_ID} class="accent"></span>
                        <span class="typed-cursor accent" aria-hidden="true">{TYPED_CURSOR}</span>
                    </div>

                    <div class="cta-row">
                        { for HERO_LINKS.iter().map(|link| html! {
                            <HrefButton key={link.label} link={*link} />
                        }) }
                    </div>
                </div>

                <div class={classes!("hero-portrait", ENTER_CLASS)} style={PORTRAIT_FRAME_ENTER.style()}>
                    <img
                        class={classes!("portrait", ENTER_CLASS, HOVER_CLASS)}
                        style={enter_hover_style(PORTRAIT_ENTER, PORTRAIT_HOVER)}
                        src={PORTRAIT_PATH}
                        alt={PORTRAIT_ALT}
                    />
                </div>
            </section>

            <section class="section narrow">
                <h3 class="accent">{"About Me"}</h3>
                <p class="muted lead">{ABOUT_TEXT}</p>
            </section>

            <section class="section">
                <h3 class="accent">{"Tech Stack"}</h3>
                <StackGrid tiles={tiles} />
            </section>

            <section id="projects" class="section">
                <h3 class="accent">{"Featured Projects"}</h3>
                <ProjectGrid cards={cards} />
            </section>

            <section id="contact" class="section narrow">
                <h3 class="accent">{"Contact"}</h3>
                <p class="muted lead">
                    {"Reach me at"}
                    <a class="accent underline" href={mailto(CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
                </p>
            </section>

            <footer class="footer">
                {footer_line(year)}
                <a class="underline" href={GITHUB_URL}>{"GitHub"}</a>
                {"•"}
                <a class="underline" href={LINKEDIN_URL}>{"LinkedIn"}</a>
            </footer>
        </div>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("console logger not installed: {err}").into());
    }

    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
    else {
        log::error!("missing #app mount point");
        return;
    };

    yew::Renderer::<App>::with_root(root).render();
}
