//! Be Mine entry point
//!
//! On the web this binds the controller to the page's DOM. Natively it replays
//! a scripted session against a fixed card layout and logs every view.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_page {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlElement, MouseEvent, TouchEvent};

    use be_mine::controller::Layout;
    use be_mine::sim::{EffectKind, Rect};
    use be_mine::tuning::ConfettiBurst;
    use be_mine::{Controller, DismissControl, DismissOutcome, GeometryProvider, Tuning, ViewModel};

    // The page loads canvas-confetti as a global; stay quiet if it didn't
    #[wasm_bindgen(inline_js = "
        export function fire_confetti(options) {
            const confetti = globalThis.confetti;
            if (typeof confetti !== 'function') {
                return false;
            }
            try {
                confetti(JSON.parse(options));
                return true;
            } catch (e) {
                console.warn('confetti failed:', e);
                return false;
            }
        }
    ")]
    extern "C" {
        fn fire_confetti(options: &str) -> bool;
    }

    /// Reads the card's layout straight from the DOM on every call
    struct DomGeometry {
        document: Document,
    }

    impl DomGeometry {
        /// Element by id, unless it is missing or hidden
        fn shown(&self, id: &str) -> Option<Element> {
            self.document
                .get_element_by_id(id)
                .filter(|el| !el.class_list().contains("hidden"))
        }
    }

    fn client_rect(el: &Element) -> Rect {
        let r = el.get_bounding_client_rect();
        Rect::new(r.left(), r.top(), r.width(), r.height())
    }

    impl GeometryProvider for DomGeometry {
        fn measure(&self) -> Option<Layout> {
            let no_btn = self.shown("no-btn")?;
            let parent = no_btn.parent_element()?;
            let card = self.shown("card")?;
            let yes_btn = self.shown("yes-btn")?;
            let gif = self.shown("gif")?;
            let prompt = self.shown("prompt")?;

            // Absolute positioning is relative to the button's parent
            let origin = client_rect(&parent).origin();
            let element = client_rect(&no_btn).size();
            Some(Layout {
                container: client_rect(&card).relative_to(origin),
                element,
                obstacles: [yes_btn, gif, prompt]
                    .iter()
                    .map(|el| client_rect(el).relative_to(origin))
                    .collect(),
            })
        }
    }

    /// Page instance holding all state
    struct Page {
        controller: Controller,
        geometry: DomGeometry,
        last_view: Option<ViewModel>,
    }

    fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    fn set_hidden(el: &Element, hidden: bool) {
        let _ = el.class_list().toggle_with_force("hidden", hidden);
    }

    /// Keep `class` on while `running` is set, dropping and re-adding it
    /// across a reflow when the generation changes so the animation replays.
    fn restart_class(el: &Element, class: &str, running: Option<u32>, previous: Option<u32>) {
        let list = el.class_list();
        match running {
            None => {
                let _ = list.remove_1(class);
            }
            Some(generation) if previous != Some(generation) => {
                let _ = list.remove_1(class);
                if let Some(html) = el.dyn_ref::<HtmlElement>() {
                    let _ = html.offset_width();
                }
                let _ = list.add_1(class);
            }
            Some(_) => {}
        }
    }

    fn set_style(el: &Element, name: &str, value: &str) {
        if let Some(html) = el.dyn_ref::<HtmlElement>() {
            let _ = html.style().set_property(name, value);
        }
    }

    fn set_text(el: &Element, text: &str) {
        if el.text_content().as_deref() != Some(text) {
            el.set_text_content(Some(text));
        }
    }

    fn set_src(el: &Element, src: &str) {
        if el.get_attribute("src").as_deref() != Some(src) {
            let _ = el.set_attribute("src", src);
        }
    }

    impl Page {
        fn dismiss(&mut self) {
            let outcome = self.controller.on_dismiss(&self.geometry, now_ms());
            if let DismissOutcome::Moved(result) = outcome {
                if !result.clear {
                    log::debug!("Placed unchecked after {} samples", result.attempts);
                }
            }
            self.render();
        }

        fn accept(&mut self) {
            let mut confetti = |burst: &ConfettiBurst| match serde_json::to_string(burst) {
                Ok(options) => {
                    if !fire_confetti(&options) {
                        log::warn!("confetti() not available on this page");
                    }
                }
                Err(e) => log::warn!("Cannot encode confetti burst: {}", e),
            };
            if self.controller.on_accept(&mut confetti) {
                self.render();
            }
        }

        fn reset(&mut self) {
            if self.controller.on_reset() {
                self.render();
            }
        }

        /// Apply the current view to the DOM, skipping unchanged frames
        fn render(&mut self) {
            let view = self.controller.view();
            if self.last_view.as_ref() == Some(&view) {
                return;
            }
            let doc = &self.geometry.document;
            let by_id = |id: &str| doc.get_element_by_id(id);
            let previous_shake = match &self.last_view {
                Some(ViewModel::Proposal { shake, .. }) => *shake,
                _ => None,
            };

            match &view {
                ViewModel::Celebration {
                    gif,
                    headline,
                    message,
                } => {
                    if let Some(el) = by_id("proposal") {
                        set_hidden(&el, true);
                    }
                    if let Some(el) = by_id("success") {
                        set_hidden(&el, false);
                    }
                    if let Some(el) = by_id("success-gif") {
                        set_src(&el, gif);
                    }
                    if let Some(el) = by_id("headline") {
                        set_text(&el, headline);
                    }
                    if let Some(el) = by_id("success-message") {
                        set_text(&el, message);
                    }
                }
                ViewModel::Proposal {
                    gif,
                    prompt,
                    angry,
                    yes_visible,
                    yes_scale,
                    shake,
                    dismiss,
                } => {
                    if let Some(el) = by_id("proposal") {
                        let _ = el.class_list().toggle_with_force("angry", *angry);
                    }
                    if let Some(el) = by_id("gif") {
                        set_src(&el, gif);
                    }
                    if let Some(el) = by_id("prompt") {
                        set_hidden(&el, prompt.is_none());
                        if let Some(text) = prompt {
                            set_text(&el, text);
                        }
                    }
                    if let Some(el) = by_id("yes-btn") {
                        set_hidden(&el, !yes_visible);
                        set_style(&el, "transform", &format!("scale({})", yes_scale));
                        if let Some(class) = EffectKind::Shake.as_class() {
                            restart_class(&el, class, *shake, previous_shake);
                        }
                    }

                    let no_btn = by_id("no-btn");
                    let reset_btn = by_id("reset-btn");
                    let refusal = by_id("refusal");
                    for el in [&no_btn, &reset_btn, &refusal].into_iter().flatten() {
                        set_hidden(el, true);
                    }

                    match dismiss {
                        DismissControl::Button { label, position } => {
                            if let Some(el) = &no_btn {
                                set_hidden(el, false);
                                set_text(el, label);
                                match position {
                                    Some(p) => {
                                        set_style(el, "position", "absolute");
                                        set_style(el, "left", &format!("{}px", p.x));
                                        set_style(el, "top", &format!("{}px", p.y));
                                    }
                                    None => {
                                        set_style(el, "position", "static");
                                        set_style(el, "left", "auto");
                                        set_style(el, "top", "auto");
                                    }
                                }
                            }
                        }
                        DismissControl::SecondChance { label, visible } => {
                            if let Some(el) = &reset_btn {
                                set_hidden(el, !visible);
                                set_text(el, label);
                            }
                        }
                        DismissControl::Refusal { message, visible } => {
                            if let Some(el) = &refusal {
                                set_hidden(el, !visible);
                                set_text(el, message);
                            }
                        }
                    }
                }
            }

            self.last_view = Some(view);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            // Logger already installed
        }

        log::info!("Be Mine starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document, nothing to bind to");
            return;
        };

        let tuning = Tuning::load();
        let seed = js_sys::Date::now() as u64;
        let page = Rc::new(RefCell::new(Page {
            controller: Controller::new(seed, tuning),
            geometry: DomGeometry {
                document: document.clone(),
            },
            last_view: None,
        }));
        log::info!("Page initialized with seed: {}", seed);

        setup_dismiss_handlers(&document, page.clone());
        setup_click(&document, "yes-btn", page.clone(), Page::accept);
        setup_click(&document, "reset-btn", page.clone(), Page::reset);

        page.borrow_mut().render();
        request_animation_frame(page);
    }

    fn setup_dismiss_handlers(document: &Document, page: Rc<RefCell<Page>>) {
        let Some(no_btn) = document.get_element_by_id("no-btn") else {
            log::error!("#no-btn missing");
            return;
        };

        // Mouse enter
        {
            let page = page.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                page.borrow_mut().dismiss();
            });
            let _ = no_btn
                .add_event_listener_with_callback("mouseenter", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start (no hover on touch screens)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                page.borrow_mut().dismiss();
            });
            let _ = no_btn
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_click(document: &Document, id: &str, page: Rc<RefCell<Page>>, action: fn(&mut Page)) {
        let Some(btn) = document.get_element_by_id(id) else {
            log::error!("#{} missing", id);
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            action(&mut page.borrow_mut());
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(page: Rc<RefCell<Page>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            frame(page, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(page: Rc<RefCell<Page>>, time: f64) {
        {
            let mut p = page.borrow_mut();
            let ended = p.controller.advance(time);
            if !ended.is_empty() {
                log::debug!("Effects ended: {:?}", ended);
                p.render();
            }
            // Nothing left to animate once accepted
            if p.controller.state().accepted {
                return;
            }
        }

        request_animation_frame(page);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_page::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Be Mine (native) starting...");
    log::info!("Native mode replays a scripted session - run with `trunk serve` for the web page");

    let path = std::env::args().nth(1).map(std::path::PathBuf::from);
    let tuning = be_mine::Tuning::load_from(path.as_deref());
    replay(tuning);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Walk through both strikes, then say yes on a fresh card
#[cfg(not(target_arch = "wasm32"))]
fn replay(tuning: be_mine::Tuning) {
    use be_mine::controller::Layout;
    use be_mine::sim::{Rect, Size};
    use be_mine::{Controller, DismissOutcome, FixedLayout, ViewModel};

    let card = FixedLayout(Some(Layout {
        container: Rect::new(0.0, 0.0, 360.0, 420.0),
        element: Size::new(72.0, 40.0),
        obstacles: vec![
            Rect::new(80.0, 20.0, 200.0, 200.0),
            Rect::new(40.0, 240.0, 280.0, 36.0),
            Rect::new(100.0, 300.0, 72.0, 40.0),
        ],
    }));

    let show = |step: &str, view: &ViewModel| match serde_json::to_string(view) {
        Ok(json) => println!("{:>12}: {}", step, json),
        Err(e) => log::warn!("Cannot encode view: {}", e),
    };

    let mut controller = Controller::new(0x5EED, tuning);
    let mut now = 0.0;
    show("start", &controller.view());

    for round in 1..=2 {
        while controller.state().accepts_dismiss() {
            now += 250.0;
            match controller.on_dismiss(&card, now) {
                DismissOutcome::Moved(result) => log::info!(
                    "Dismiss #{} -> ({:.0}, {:.0}) after {} samples{}",
                    controller.state().dismiss_attempts,
                    result.position.x,
                    result.position.y,
                    result.attempts,
                    if result.clear { "" } else { " (unchecked)" }
                ),
                outcome => log::info!(
                    "Dismiss #{} -> {:?}",
                    controller.state().dismiss_attempts,
                    outcome
                ),
            }
            show(controller.state().label(), &controller.view());
        }
        now += 1000.0;
        controller.advance(now);
        show(&format!("strike {}", round), &controller.view());

        if controller.on_reset() {
            show("reset", &controller.view());
        }
    }

    let mut fresh = Controller::new(0x5EED, tuning);
    fresh.on_dismiss(&card, 0.0);
    fresh.on_accept(&mut |burst: &be_mine::tuning::ConfettiBurst| {
        log::info!("Confetti: {} particles", burst.particle_count)
    });
    show("accepted", &fresh.view());
    println!("✓ Replay finished");
}
