//! DOM lookup and the single side-effecting style-apply step.

use hero_core::{FrameStyles, TargetStyle, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
fn html_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document.get_element_by_id(id)?.dyn_into().ok()
}

#[inline]
fn html_by_selector(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into()
        .ok()
}

/// Every element the animation touches, looked up once at startup. The hero
/// anchors are required; chrome injected later (nav) stays optional.
pub struct Anchors {
    pub drive: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    pub logo: web::HtmlElement,
    pub emblem: Option<web::HtmlElement>,
    pub small_logo: Option<web::HtmlElement>,
    pub title: web::HtmlElement,
    pub subtitle: web::HtmlElement,
    pub cta: web::HtmlElement,
    pub scroll_hint: web::HtmlElement,
    pub nav: Option<web::HtmlElement>,
    pub nav_links: Option<web::HtmlElement>,
}

impl Anchors {
    /// `None` when any required anchor is missing; the caller skips
    /// initialization entirely rather than breaking the page.
    pub fn lookup(document: &web::Document) -> Option<Self> {
        Some(Self {
            drive: html_by_id(document, "scrollDrive")?,
            canvas: document
                .get_element_by_id("heroCanvas")?
                .dyn_into::<web::HtmlCanvasElement>()
                .ok()?,
            logo: html_by_id(document, "phaselogo")?,
            emblem: html_by_id(document, "heroEmblem"),
            small_logo: html_by_id(document, "heroSmallLogo"),
            title: html_by_id(document, "heroTitle")?,
            subtitle: html_by_id(document, "heroSubtitle")?,
            cta: html_by_id(document, "heroCta")?,
            scroll_hint: html_by_id(document, "heroScroll")?,
            nav: html_by_selector(document, ".nav"),
            nav_links: html_by_id(document, "navLinks"),
        })
    }
}

fn set_style(element: &web::HtmlElement, style: &TargetStyle) {
    let css = element.style();
    let _ = css.set_property("opacity", &format!("{:.3}", style.opacity));
    if style.translate_y != 0.0 || style.scale != 1.0 {
        let mut transform = String::new();
        if style.translate_y != 0.0 {
            transform.push_str(&format!("translateY({:.1}px)", style.translate_y));
        }
        if style.scale != 1.0 {
            if !transform.is_empty() {
                transform.push(' ');
            }
            transform.push_str(&format!("scale({:.3})", style.scale));
        }
        let _ = css.set_property("transform", &transform);
    } else {
        let _ = css.remove_property("transform");
    }
    let _ = css.set_property(
        "pointer-events",
        if style.interactive { "auto" } else { "none" },
    );
}

/// Push a frame's computed styles onto the page.
pub fn apply_styles(anchors: &Anchors, styles: &FrameStyles) {
    set_style(&anchors.logo, &styles.logo);
    if let Some(emblem) = &anchors.emblem {
        // The zoom lands on the inner emblem so the wrapper's opacity fade
        // stays independent of the transform.
        let _ = emblem
            .style()
            .set_property("transform", &format!("scale({:.3})", styles.logo.scale));
    }
    if let Some(small_logo) = &anchors.small_logo {
        set_style(small_logo, &styles.small_logo);
    }
    set_style(&anchors.title, &styles.title);
    set_style(&anchors.subtitle, &styles.subtitle);
    set_style(&anchors.cta, &styles.cta);
    set_style(&anchors.scroll_hint, &styles.scroll_hint);

    if let Some(nav) = &anchors.nav {
        let css = nav.style();
        let _ = css.set_property("opacity", &format!("{:.3}", styles.nav.opacity));
        // A nav pinned by its own scrolled state keeps its pointer events.
        if styles.nav.interactive || nav.class_list().contains("scrolled") {
            let _ = css.set_property("pointer-events", "auto");
        } else {
            let _ = css.set_property("pointer-events", "none");
        }
    }
    if let Some(links) = &anchors.nav_links {
        // Leave the overlay alone while the mobile menu is open.
        if !links.class_list().contains("open") {
            set_style(links, &styles.nav);
        }
    }
}

/// Viewport of the canvas' parent box, the driving layout size.
pub fn viewport_of(canvas: &web::HtmlCanvasElement) -> Viewport {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let parent = canvas.parent_element();
    let (w, h) = match parent {
        Some(p) => (p.client_width(), p.client_height()),
        None => (0, 0),
    };
    Viewport::new(w as f32, h as f32, dpr)
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    selector: &str,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    if let Ok(Some(el)) = document.query_selector(selector) {
        let closure = wasm_bindgen::closure::Closure::wrap(
            Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>,
        );
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
