/// DOM names and markup used by the web front-end.
///
/// The stylesheet on the page owns the look; these strings only have to
/// match its selectors.
// Root elements appended to <body>
pub const CAR_CLASS: &str = "cursor-car";
pub const TRAIL_CONTAINER_CLASS: &str = "car-trail-container";

// Spawned visuals
pub const TRAIL_PARTICLE_CLASS: &str = "drift-particle";
pub const EXHAUST_CLASS: &str = "exhaust-smoke";
pub const EXHAUST_CONTAINER_SELECTOR: &str = ".exhaust-container";
pub const EXHAUST_ANIMATION: &str = "exhaustPuff 0.7s ease-out forwards";

// Trail fade-out: opacity drops to 0 and the mark grows by this much (+ up to the jitter)
pub const TRAIL_FADE_SCALE_BASE: f32 = 1.4;
pub const TRAIL_FADE_SCALE_JITTER: f32 = 0.3;

// CSS custom property read by the wheel spin animation
pub const WHEEL_SPIN_PROPERTY: &str = "--wheel-spin-speed";

// Optional <body data-car-mode="..."> switch
pub const MODE_ATTRIBUTE: &str = "data-car-mode";

pub const CAR_MARKUP: &str = r#"
<div class="car-3d-container">
  <div class="car-shadow"></div>
  <div class="car-body">
    <div class="car-roof"><div class="roof-detail"></div></div>
    <div class="car-front">
      <div class="headlight left"></div>
      <div class="headlight right"></div>
      <div class="front-grille"></div>
    </div>
    <div class="car-middle">
      <div class="window-left"></div>
      <div class="racing-stripe"></div>
      <div class="window-right"></div>
      <div class="car-door-left"></div>
      <div class="car-door-right"></div>
    </div>
    <div class="car-back">
      <div class="taillight left"></div>
      <div class="taillight right"></div>
      <div class="spoiler"></div>
    </div>
    <div class="wheel front-left"><div class="wheel-inner"><div class="wheel-rim"></div></div></div>
    <div class="wheel front-right"><div class="wheel-inner"><div class="wheel-rim"></div></div></div>
    <div class="wheel back-left"><div class="wheel-inner"><div class="wheel-rim"></div></div></div>
    <div class="wheel back-right"><div class="wheel-inner"><div class="wheel-rim"></div></div></div>
    <div class="mirror left"></div>
    <div class="mirror right"></div>
    <div class="exhaust-container"><div class="exhaust-smoke"></div></div>
  </div>
</div>
"#;
