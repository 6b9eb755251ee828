//! Animated entities
//!
//! Every decorative animation is a fixed population of entities of one
//! tagged [`EntityKind`]. The kind selects both the per-frame update rule
//! and the draw rule, so there is exactly one dispatch point for each.
//!
//! Update rules:
//! - **Bouncing** (circles, rects): translate by velocity, then invert the
//!   velocity component of any axis whose leading edge is out of bounds.
//!   Positions are never clamped; an entity may overshoot by one frame.
//! - **Orbiting**: position is recomputed from the surface center, a fixed
//!   phase and the shared rotation angle. No velocity is kept.

use folio_paint::{Canvas, Color, Point, Rect, Size, StrokeStyle, TextStyle, Vector};

/// Inner circle drawn on top of a bouncing circle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    /// Inner radius as a fraction of the outer radius
    pub scale: f32,
    /// Added to the outer alpha, capped at 1.0
    pub alpha_boost: f32,
}

impl Default for Highlight {
    fn default() -> Self {
        Self {
            scale: 0.6,
            alpha_boost: 0.1,
        }
    }
}

/// Per-kind state and parameters
#[derive(Clone, Debug, PartialEq)]
pub enum EntityKind {
    BouncingCircle {
        velocity: Vector,
        radius: f32,
        highlight: Option<Highlight>,
    },
    BouncingRect {
        velocity: Vector,
        size: Size,
    },
    OrbitingIcon {
        /// Fixed angular offset on the ring (radians)
        phase: f32,
        radius: f32,
        label: String,
        label_color: Color,
    },
}

/// One animated shape
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    /// Center for circles and icons, top-left corner for rects
    pub position: Point,
    pub color: Color,
    pub kind: EntityKind,
}

/// Frame-wide values the update rules read
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameGeometry {
    /// Current logical surface size
    pub size: Size,
    /// Shared rotation angle for orbiting entities
    pub rotation: f32,
    /// Orbit radius as a fraction of half the smaller surface side
    pub orbit_scale: f32,
}

impl FrameGeometry {
    pub fn orbit_radius(&self) -> f32 {
        self.size.min_side() / 2.0 * self.orbit_scale
    }
}

impl Entity {
    pub fn bouncing_circle(position: Point, velocity: Vector, radius: f32, color: Color) -> Self {
        Self {
            position,
            color,
            kind: EntityKind::BouncingCircle {
                velocity,
                radius,
                highlight: None,
            },
        }
    }

    pub fn bouncing_rect(position: Point, velocity: Vector, size: Size, color: Color) -> Self {
        Self {
            position,
            color,
            kind: EntityKind::BouncingRect { velocity, size },
        }
    }

    pub fn orbiting_icon(
        label: impl Into<String>,
        phase: f32,
        radius: f32,
        color: Color,
        label_color: Color,
    ) -> Self {
        Self {
            position: Point::ZERO,
            color,
            kind: EntityKind::OrbitingIcon {
                phase,
                radius,
                label: label.into(),
                label_color,
            },
        }
    }

    /// Add an inner highlight (bouncing circles only)
    pub fn with_highlight(mut self, highlight: Highlight) -> Self {
        if let EntityKind::BouncingCircle {
            highlight: ref mut slot,
            ..
        } = self.kind
        {
            *slot = Some(highlight);
        }
        self
    }

    /// Current velocity, `None` for orbiting entities
    pub fn velocity(&self) -> Option<Vector> {
        match &self.kind {
            EntityKind::BouncingCircle { velocity, .. } | EntityKind::BouncingRect { velocity, .. } => {
                Some(*velocity)
            }
            EntityKind::OrbitingIcon { .. } => None,
        }
    }

    /// Point a link line attaches to; proximity is measured on `position`
    pub fn anchor(&self) -> Point {
        match &self.kind {
            EntityKind::BouncingRect { size, .. } => {
                Rect::from_origin_size(self.position, *size).center()
            }
            _ => self.position,
        }
    }

    /// Apply this entity's update rule
    pub fn update(&mut self, frame: &FrameGeometry) {
        let bounds = frame.size;
        match &mut self.kind {
            EntityKind::BouncingCircle {
                velocity, radius, ..
            } => {
                self.position += *velocity;
                let r = *radius;
                if self.position.x + r > bounds.width || self.position.x - r < 0.0 {
                    velocity.x = -velocity.x;
                }
                if self.position.y + r > bounds.height || self.position.y - r < 0.0 {
                    velocity.y = -velocity.y;
                }
            }
            EntityKind::BouncingRect { velocity, size } => {
                self.position += *velocity;
                if self.position.x < 0.0 || self.position.x > bounds.width - size.width {
                    velocity.x = -velocity.x;
                }
                if self.position.y < 0.0 || self.position.y > bounds.height - size.height {
                    velocity.y = -velocity.y;
                }
            }
            EntityKind::OrbitingIcon { phase, .. } => {
                self.position = bounds
                    .center()
                    .polar_offset(frame.orbit_radius(), *phase + frame.rotation);
            }
        }
    }

    /// Apply this entity's draw rule
    pub fn draw(&self, canvas: &mut dyn Canvas, label_style: &TextStyle) {
        match &self.kind {
            EntityKind::BouncingCircle {
                radius, highlight, ..
            } => {
                canvas.fill_circle(self.position, *radius, self.color);
                if let Some(highlight) = highlight {
                    let inner_alpha = (self.color.a + highlight.alpha_boost).min(1.0);
                    canvas.fill_circle(
                        self.position,
                        radius * highlight.scale,
                        self.color.with_alpha(inner_alpha),
                    );
                }
            }
            EntityKind::BouncingRect { size, .. } => {
                canvas.fill_rect(Rect::from_origin_size(self.position, *size), self.color);
            }
            EntityKind::OrbitingIcon {
                radius,
                label,
                label_color,
                ..
            } => {
                canvas.fill_circle(self.position, *radius, self.color);
                canvas.fill_text(label, self.position, label_style, *label_color);
            }
        }
    }
}

/// Lines joining entities that are close to each other
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkStyle {
    /// Pairs closer than this (logical px) are joined
    pub max_distance: f32,
    pub stroke: StrokeStyle,
}

impl LinkStyle {
    pub fn new(max_distance: f32, color: Color, width: f32) -> Self {
        Self {
            max_distance,
            stroke: StrokeStyle::new(color, width),
        }
    }
}

/// The entity population owned by one running animation
pub struct EntityCollection {
    entities: Vec<Entity>,
    rotation: f32,
    rotation_step: f32,
    orbit_scale: f32,
    links: Option<LinkStyle>,
    label_style: TextStyle,
}

impl EntityCollection {
    pub fn new(entities: Vec<Entity>) -> Self {
        Self {
            entities,
            rotation: 0.0,
            rotation_step: 0.0,
            orbit_scale: 0.8,
            links: None,
            label_style: TextStyle::default(),
        }
    }

    pub fn with_rotation_step(mut self, step: f32) -> Self {
        self.rotation_step = step;
        self
    }

    pub fn with_orbit_scale(mut self, scale: f32) -> Self {
        self.orbit_scale = scale;
        self
    }

    pub fn with_links(mut self, links: Option<LinkStyle>) -> Self {
        self.links = links;
        self
    }

    pub fn with_label_style(mut self, style: TextStyle) -> Self {
        self.label_style = style;
        self
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Shared rotation angle after the last frame
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Render one frame: clear, link, then update and draw each entity in order
    pub fn step(&mut self, canvas: &mut dyn Canvas) {
        canvas.clear();

        if let Some(links) = self.links {
            self.draw_links(canvas, &links);
        }

        self.rotation += self.rotation_step;
        let frame = FrameGeometry {
            size: canvas.size(),
            rotation: self.rotation,
            orbit_scale: self.orbit_scale,
        };

        for entity in &mut self.entities {
            entity.update(&frame);
            entity.draw(canvas, &self.label_style);
        }
    }

    fn draw_links(&self, canvas: &mut dyn Canvas, links: &LinkStyle) {
        for (i, a) in self.entities.iter().enumerate() {
            for b in &self.entities[i + 1..] {
                if a.position.distance(b.position) < links.max_distance {
                    canvas.stroke_line(a.anchor(), b.anchor(), links.stroke);
                }
            }
        }
    }
}
