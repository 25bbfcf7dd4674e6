// Transition requests. The view turns these into a class plus CSS custom
// properties; styles/main.css does the animating.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Enter {
    pub offset_x: i32,
    pub offset_y: i32,
    pub scale_from: f64,
    pub delay_ms: u32,
    pub duration_ms: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hover {
    pub lift_px: i32,
    pub scale: f64,
}

pub const ENTER_CLASS: &str = "motion-enter";
pub const HOVER_CLASS: &str = "motion-hover";

const FADE: Enter = Enter {
    offset_x: 0,
    offset_y: 0,
    scale_from: 1.0,
    delay_ms: 0,
    duration_ms: 600,
};

pub const HERO_TITLE_ENTER: Enter = Enter {
    offset_x: -40,
    ..FADE
};

pub const HERO_TAGLINE_ENTER: Enter = Enter {
    delay_ms: 400,
    ..FADE
};

pub const PORTRAIT_FRAME_ENTER: Enter = Enter {
    offset_x: 40,
    ..FADE
};

pub const PORTRAIT_ENTER: Enter = Enter {
    scale_from: 0.9,
    ..FADE
};

pub const NAV_ENTER: Enter = Enter {
    offset_y: -60,
    duration_ms: 300,
    ..FADE
};

pub const LIFT_HOVER: Hover = Hover {
    lift_px: -6,
    scale: 1.02,
};

pub const TILE_HOVER: Hover = Hover {
    lift_px: 0,
    scale: 1.15,
};

pub const PORTRAIT_HOVER: Hover = Hover {
    lift_px: 0,
    scale: 1.03,
};

impl Enter {
    pub fn style(&self) -> String {
        format!(
            "--enter-x: {}px; --enter-y: {}px; --enter-scale: {:.2}; --enter-delay: {}ms; --enter-duration: {}ms;",
            self.offset_x, self.offset_y, self.scale_from, self.delay_ms, self.duration_ms
        )
    }
}

impl Hover {
    pub fn style(&self) -> String {
        format!("--hover-y: {}px; --hover-scale: {:.2};", self.lift_px, self.scale)
    }
}
