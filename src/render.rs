use crate::constants::*;
use crate::core::constants::{EXHAUST_LIFETIME_SECS, TRAIL_PARTICLE_LIFETIME_SECS};
use crate::core::pose::{car_transform_css, trail_transform_css, wheel_spin_css};
use crate::core::{CarPose, LiveParticles, RenderSink, TrailParticle};
use crate::dom;
use web_sys as web;

/// Render sink backed by absolutely positioned DOM elements.
pub struct DomSink {
    car: web::HtmlElement,
    trail_container: web::HtmlElement,
    trails: LiveParticles<web::HtmlElement>,
    exhaust: LiveParticles<web::HtmlElement>,
    // Trail marks get their fade-out target one frame after insertion so the
    // CSS transition has a start value to animate from.
    pending_fade: Vec<(web::HtmlElement, String)>,
}

impl DomSink {
    /// Build the car and trail container and attach both to `<body>`.
    pub fn attach(document: &web::Document) -> anyhow::Result<Self> {
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no document body"))?;

        let car = dom::create_div(document, CAR_CLASS)?;
        car.set_inner_html(CAR_MARKUP);
        body.append_child(&car)
            .map_err(|e| anyhow::anyhow!("append car: {:?}", e))?;

        let trail_container = dom::create_div(document, TRAIL_CONTAINER_CLASS)?;
        body.append_child(&trail_container)
            .map_err(|e| anyhow::anyhow!("append trail container: {:?}", e))?;

        Ok(Self {
            car,
            trail_container,
            trails: LiveParticles::default(),
            exhaust: LiveParticles::default(),
            pending_fade: Vec::new(),
        })
    }

    fn document(&self) -> Option<web::Document> {
        self.car.owner_document()
    }

    fn apply_pending_fades(&mut self) {
        for (el, transform) in self.pending_fade.drain(..) {
            dom::set_style(&el, "opacity", "0");
            dom::set_style(&el, "transform", &transform);
        }
    }
}

impl RenderSink for DomSink {
    fn apply_pose(&mut self, pose: &CarPose) {
        self.apply_pending_fades();
        dom::set_style(&self.car, "left", &format!("{:.2}px", pose.x));
        dom::set_style(&self.car, "top", &format!("{:.2}px", pose.y));
        dom::set_style(&self.car, "transform", &car_transform_css(pose));
        dom::set_style(&self.car, WHEEL_SPIN_PROPERTY, &wheel_spin_css(pose));
    }

    fn spawn_trail(&mut self, particle: &TrailParticle) {
        let Some(document) = self.document() else {
            return;
        };
        let Ok(el) = dom::create_div(&document, TRAIL_PARTICLE_CLASS) else {
            return;
        };
        let rotate = trail_transform_css(particle.rotation);
        dom::set_style(&el, "left", &format!("{:.2}px", particle.position.x));
        dom::set_style(&el, "top", &format!("{:.2}px", particle.position.y));
        dom::set_style(&el, "opacity", &format!("{:.3}", particle.opacity));
        dom::set_style(&el, "transform", &rotate);
        if self.trail_container.append_child(&el).is_err() {
            return;
        }
        let scale = TRAIL_FADE_SCALE_BASE + js_sys::Math::random() as f32 * TRAIL_FADE_SCALE_JITTER;
        self.pending_fade
            .push((el.clone(), format!("{} scale({:.3})", rotate, scale)));
        self.trails.push(el, TRAIL_PARTICLE_LIFETIME_SECS);
    }

    fn spawn_exhaust(&mut self) {
        let Ok(Some(container)) = self.car.query_selector(EXHAUST_CONTAINER_SELECTOR) else {
            return;
        };
        let Some(document) = self.document() else {
            return;
        };
        let Ok(smoke) = dom::create_div(&document, EXHAUST_CLASS) else {
            return;
        };
        dom::set_style(&smoke, "animation", EXHAUST_ANIMATION);
        if container.append_child(&smoke).is_ok() {
            self.exhaust.push(smoke, EXHAUST_LIFETIME_SECS);
        }
    }

    fn advance(&mut self, dt: f32) {
        self.trails.advance(dt, |el| el.remove());
        self.exhaust.advance(dt, |el| el.remove());
    }

    fn dispose(&mut self) {
        self.pending_fade.clear();
        self.trails.clear(|el| el.remove());
        self.exhaust.clear(|el| el.remove());
        self.car.remove();
        self.trail_container.remove();
        log::info!("[car] disposed");
    }
}
