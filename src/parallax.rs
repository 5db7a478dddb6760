use crate::constants::*;
use crate::section::SectionId;
use glam::Vec2;
use smallvec::SmallVec;

const CENTER: Vec2 = Vec2::splat(0.5);

/// Translation plus optional rotation for one decorative element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub translate: Vec2,
    pub rotate_deg: f32,
}

impl Transform {
    #[inline]
    pub fn translate_y(y: f32) -> Self {
        Self {
            translate: Vec2::new(0.0, y),
            rotate_deg: 0.0,
        }
    }

    /// Stack a vertical scroll offset on top of a pointer transform.
    #[inline]
    pub fn with_offset_y(self, dy: f32) -> Self {
        Self {
            translate: self.translate + Vec2::new(0.0, dy),
            ..self
        }
    }

    /// Inline `transform` value.
    pub fn to_css(&self) -> String {
        if self.translate.x == 0.0 && self.rotate_deg == 0.0 {
            return format!("translateY({:.2}px)", self.translate.y);
        }
        if self.rotate_deg == 0.0 {
            return format!(
                "translate({:.2}px, {:.2}px)",
                self.translate.x, self.translate.y
            );
        }
        format!(
            "translate({:.2}px, {:.2}px) rotate({:.2}deg)",
            self.translate.x, self.translate.y, self.rotate_deg
        )
    }
}

/// How strongly an element follows the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerLayer {
    pub amplitude: f32,
    pub multiplier: f32,
    pub rotation_deg: f32,
}

impl PointerLayer {
    /// Blurred gradient blobs behind the hero; later ones move more.
    pub fn hero_gradient(index: usize) -> Self {
        Self {
            amplitude: HERO_GRADIENT_AMPLITUDE,
            multiplier: HERO_GRADIENT_BASE_SPEED + index as f32 * HERO_GRADIENT_SPEED_STEP,
            rotation_deg: HERO_GRADIENT_ROTATION_DEG,
        }
    }

    pub fn hero_floating(index: usize) -> Self {
        Self {
            amplitude: HERO_FLOAT_AMPLITUDE,
            multiplier: (index + 1) as f32 * HERO_FLOAT_MULTIPLIER_STEP,
            rotation_deg: 0.0,
        }
    }
}

/// Pointer position relative to a container box, in [0, 1] when inside.
/// `None` for a collapsed container.
pub fn normalize_pointer(client: Vec2, origin: Vec2, size: Vec2) -> Option<Vec2> {
    if size.x <= 0.0 || size.y <= 0.0 {
        return None;
    }
    let uv = (client - origin) / size;
    uv.is_finite().then_some(uv)
}

#[inline]
pub fn pointer_offset(pos: Vec2, amplitude: f32, multiplier: f32) -> Vec2 {
    (pos - CENTER) * amplitude * multiplier
}

pub fn pointer_transform(pos: Vec2, layer: PointerLayer) -> Transform {
    Transform {
        translate: pointer_offset(pos, layer.amplitude, layer.multiplier),
        rotate_deg: (pos.x - 0.5) * layer.rotation_deg,
    }
}

/// Vertical scroll parallax. Receding layers move against the scroll.
#[inline]
pub fn scroll_offset(scroll_y: f32, speed: f32, recede: bool) -> f32 {
    let y = scroll_y * speed;
    if recede {
        -y
    } else {
        y
    }
}

/// Parse a `data-parallax*` attribute value.
pub fn parse_speed(attr: Option<&str>) -> f32 {
    attr.and_then(|s| s.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(DEFAULT_PARALLAX_SPEED)
}

/// Drift of a whole section wrapper while the page scrolls.
#[inline]
pub fn section_drift(section: SectionId, scroll_y: f32) -> f32 {
    scroll_y * SECTION_DRIFT[section.index()]
}

pub type LayerTransforms = SmallVec<[Transform; 8]>;

/// Transforms for the hero's gradient blobs and floating shapes at a
/// pointer position.
pub fn hero_pointer_frame(pos: Vec2, gradients: usize, floating: usize) -> (LayerTransforms, LayerTransforms) {
    let g = (0..gradients)
        .map(|i| pointer_transform(pos, PointerLayer::hero_gradient(i)))
        .collect();
    let f = (0..floating)
        .map(|i| pointer_transform(pos, PointerLayer::hero_floating(i)))
        .collect();
    (g, f)
}

/// Latest input samples waiting for the next animation frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PendingSamples {
    pub pointer: Option<Vec2>,
    pub scroll_y: Option<f32>,
}

impl PendingSamples {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pointer.is_none() && self.scroll_y.is_none()
    }

    /// Record a pointer sample. Returns true when a frame must be requested.
    pub fn record_pointer(&mut self, pos: Vec2) -> bool {
        let first = self.is_empty();
        self.pointer = Some(pos);
        first
    }

    pub fn record_scroll(&mut self, scroll_y: f32) -> bool {
        let first = self.is_empty();
        self.scroll_y = Some(scroll_y);
        first
    }

    pub fn take(&mut self) -> PendingSamples {
        std::mem::take(self)
    }
}
