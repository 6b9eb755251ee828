//! Built-in decorative animations
//!
//! Each preset is a configuration of the one engine: an entity factory plus
//! rotation and link settings. Theme-aware presets take the resolved
//! [`ColorScheme`] at construction and are restarted when it changes.

use crate::engine::AnimationConfig;
use crate::entity::{Entity, Highlight, LinkStyle};
use folio_core::ColorScheme;
use folio_paint::{Color, Point, Size, TextStyle, Vector};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Pastel palette of the profile header bubbles
const BUBBLE_PALETTE: [u32; 5] = [0xF9A8D4, 0xC4B5FD, 0xA78BFA, 0xDDD6FE, 0xE9D5FF];

/// Tools orbiting the design page header, with their brand colors
const DESIGN_TOOLS: [(&str, u32); 10] = [
    ("Photoshop", 0x31A8FF),
    ("Illustrator", 0xFF9A00),
    ("InDesign", 0xFF3366),
    ("Figma", 0xA259FF),
    ("XD", 0xFF61F6),
    ("Sketch", 0xF7B500),
    ("After Effects", 0x9999FF),
    ("Premiere Pro", 0x9999FF),
    ("Blender", 0xE87D0D),
    ("Canva", 0x00C4CC),
];

const TOOL_RADIUS: f32 = 30.0;
const TOOL_ROTATION_STEP: f32 = 0.0005;

const PARTICLE_COUNT: usize = 100;
const PARTICLE_LINK_DISTANCE: f32 = 100.0;

const CODE_BLOCK_COUNT: usize = 50;
const CODE_BLOCK_LINK_DISTANCE: f32 = 120.0;

/// Built-in animation catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Soft bubbles drifting around the profile picture
    ProfileBubbles,
    /// Design tool badges orbiting the page center
    DesignTools,
    /// Connected particle network (data science page)
    DataParticles,
    /// Linked drifting code blocks (web development page)
    CodeBlocks,
}

impl Preset {
    /// Stable id used on the command line and in config
    pub fn id(self) -> &'static str {
        match self {
            Self::ProfileBubbles => "profile-bubbles",
            Self::DesignTools => "design-tools",
            Self::DataParticles => "data-particles",
            Self::CodeBlocks => "code-blocks",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::ProfileBubbles => "Profile Bubbles",
            Self::DesignTools => "Design Tools",
            Self::DataParticles => "Data Particles",
            Self::CodeBlocks => "Code Blocks",
        }
    }

    pub fn all() -> &'static [Preset] {
        const PRESETS: [Preset; 4] = [
            Preset::ProfileBubbles,
            Preset::DesignTools,
            Preset::DataParticles,
            Preset::CodeBlocks,
        ];
        &PRESETS
    }

    /// Whether the drawing depends on the resolved color scheme
    pub fn is_theme_aware(self) -> bool {
        matches!(self, Self::DesignTools)
    }

    /// Build the engine configuration for this preset
    pub fn config(self, scheme: ColorScheme) -> AnimationConfig {
        match self {
            Self::ProfileBubbles => profile_bubbles(),
            Self::DesignTools => design_tools(scheme),
            Self::DataParticles => data_particles(),
            Self::CodeBlocks => code_blocks(),
        }
    }
}

impl Display for Preset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error returned when parsing an unknown preset id
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown animation preset `{0}`")]
pub struct UnknownPreset(pub String);

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Preset::all()
            .iter()
            .copied()
            .find(|preset| preset.id() == s)
            .ok_or_else(|| UnknownPreset(s.to_string()))
    }
}

fn profile_bubbles() -> AnimationConfig {
    AnimationConfig::new(Preset::ProfileBubbles.id(), 12, |ctx| {
        let center = ctx.size.center();
        let angle = ctx.random(0.0..std::f32::consts::TAU);
        let distance = ctx.random(0.0..ctx.size.width * 0.4);
        let position = center.polar_offset(distance, angle);

        let radius = ctx.random(10.0..40.0);
        let velocity = Vector::new(ctx.random(-0.2..0.2), ctx.random(-0.2..0.2));
        let hex = ctx.pick(&BUBBLE_PALETTE).copied().unwrap_or(BUBBLE_PALETTE[0]);
        let color = Color::from_hex(hex).with_alpha(ctx.random(0.05..0.30));

        Entity::bouncing_circle(position, velocity, radius, color)
            .with_highlight(Highlight::default())
    })
}

fn design_tools(scheme: ColorScheme) -> AnimationConfig {
    let (label_color, fill_alpha) = match scheme {
        ColorScheme::Dark => (Color::from_hex(0xE5E7EB), 0x40),
        ColorScheme::Light => (Color::from_hex(0x374151), 0x60),
    };

    AnimationConfig::new(Preset::DesignTools.id(), DESIGN_TOOLS.len(), move |ctx| {
        let (label, hex) = DESIGN_TOOLS[ctx.index % DESIGN_TOOLS.len()];
        Entity::orbiting_icon(
            label,
            ctx.ring_angle(),
            TOOL_RADIUS,
            Color::from_hex(hex).with_alpha_byte(fill_alpha),
            label_color,
        )
    })
    .with_rotation_step(TOOL_ROTATION_STEP)
    .with_orbit_scale(0.8)
    .with_label_style(TextStyle::default())
}

fn data_particles() -> AnimationConfig {
    AnimationConfig::new(Preset::DataParticles.id(), PARTICLE_COUNT, |ctx| {
        let position = random_point(ctx.random(0.0..1.0), ctx.random(0.0..1.0), ctx.size);
        let velocity = Vector::new(ctx.random(-1.0..1.0), ctx.random(-1.0..1.0));
        let radius = ctx.random(1.0..3.0);
        let color = Color::rgba8(100, 149, 237, ctx.random(0.1..0.6));
        Entity::bouncing_circle(position, velocity, radius, color)
    })
    .with_links(LinkStyle::new(
        PARTICLE_LINK_DISTANCE,
        Color::rgba8(100, 149, 237, 0.1),
        0.5,
    ))
}

fn code_blocks() -> AnimationConfig {
    AnimationConfig::new(Preset::CodeBlocks.id(), CODE_BLOCK_COUNT, |ctx| {
        let position = random_point(ctx.random(0.0..1.0), ctx.random(0.0..1.0), ctx.size);
        let size = Size::new(ctx.random(20.0..60.0), ctx.random(10.0..30.0));
        let velocity = Vector::new(ctx.random(-0.5..0.5), ctx.random(-0.5..0.5));
        let color = Color::rgba8(34, 197, 94, ctx.random(0.1..0.4));
        Entity::bouncing_rect(position, velocity, size, color)
    })
    .with_links(LinkStyle::new(
        CODE_BLOCK_LINK_DISTANCE,
        Color::rgba8(34, 197, 94, 0.1),
        1.0,
    ))
}

fn random_point(u: f32, v: f32, size: Size) -> Point {
    Point::new(u * size.width, v * size.height)
}
