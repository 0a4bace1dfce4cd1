//! Data models for the storyboard editor.
//!
//! A storyboard is an ordered run of [`Frame`]s; the order of the
//! collection is the order of the timeline. All data is local mock
//! state — image references are opaque handles resolved by the view
//! layer, and nothing here is persisted.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Title suffix applied to duplicated frames and projects.
pub const COPY_SUFFIX: &str = " (Copy)";

// =============================================================================
// ENUMS
// =============================================================================

/// Camera-framing category for a frame.
///
/// Wire names match the labels the editor UI renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotType {
    #[serde(rename = "Extreme Close-up")]
    ExtremeCloseUp,
    #[serde(rename = "Close-up")]
    CloseUp,
    #[default]
    #[serde(rename = "Medium Shot")]
    MediumShot,
    #[serde(rename = "Wide Shot")]
    WideShot,
    #[serde(rename = "Extreme Wide Shot")]
    ExtremeWideShot,
    #[serde(rename = "Split Screen")]
    SplitScreen,
    #[serde(rename = "Graphic")]
    Graphic,
}

impl ShotType {
    /// UI label for this shot type.
    pub fn label(&self) -> &'static str {
        match self {
            ShotType::ExtremeCloseUp => "Extreme Close-up",
            ShotType::CloseUp => "Close-up",
            ShotType::MediumShot => "Medium Shot",
            ShotType::WideShot => "Wide Shot",
            ShotType::ExtremeWideShot => "Extreme Wide Shot",
            ShotType::SplitScreen => "Split Screen",
            ShotType::Graphic => "Graphic",
        }
    }
}

/// Stylistic category for a frame's rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualStyle {
    #[default]
    Cinematic,
    Minimalist,
    Bold,
    Natural,
    Dramatic,
    Playful,
}

impl VisualStyle {
    /// UI label for this style.
    pub fn label(&self) -> &'static str {
        match self {
            VisualStyle::Cinematic => "Cinematic",
            VisualStyle::Minimalist => "Minimalist",
            VisualStyle::Bold => "Bold",
            VisualStyle::Natural => "Natural",
            VisualStyle::Dramatic => "Dramatic",
            VisualStyle::Playful => "Playful",
        }
    }
}

/// Names one of the three consistency locks on a frame.
///
/// The locks are advisory flags: they mark attributes that should not
/// drift when a frame is regenerated, without any enforcement here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockKind {
    Character,
    Brand,
    Visual,
}

impl LockKind {
    /// Parses a lock name as sent by the view layer ("character", "brand", "visual").
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "character" => Some(LockKind::Character),
            "brand" => Some(LockKind::Brand),
            "visual" => Some(LockKind::Visual),
            _ => None,
        }
    }
}

// =============================================================================
// FRAME
// =============================================================================

/// One storyboard shot: visual and narrative metadata for a single scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Frame {
    /// Unique identifier, immutable once created.
    pub id: String,
    /// Scene title shown on the card.
    pub scene: String,
    /// Duration label, e.g. "0:03-0:08".
    pub duration: String,
    /// Visual description of the shot.
    pub description: String,
    /// Camera framing.
    pub shot_type: ShotType,
    /// Stylistic treatment.
    pub visual_style: VisualStyle,
    /// Character consistency lock.
    pub character_lock: bool,
    /// Brand consistency lock.
    pub brand_lock: bool,
    /// Visual style lock.
    pub visual_lock: bool,
    /// Display timestamp, e.g. "0:03".
    pub timestamp: String,
    /// Opaque image reference, resolved by the view layer.
    pub image_url: String,
    /// Narration/script text for the shot.
    pub script_text: String,
}

impl Frame {
    /// Creates a frame with the given ID and default field values.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            scene: "New Scene".to_string(),
            ..Default::default()
        }
    }

    /// Creates a frame with a freshly minted identifier.
    pub fn create() -> Self {
        Self::new(Uuid::new_v4().to_string())
    }

    /// Builder: Set scene title.
    pub fn with_scene(mut self, scene: impl Into<String>) -> Self {
        self.scene = scene.into();
        self
    }

    /// Builder: Set duration label.
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    /// Builder: Set description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder: Set shot type.
    pub fn with_shot_type(mut self, shot_type: ShotType) -> Self {
        self.shot_type = shot_type;
        self
    }

    /// Builder: Set visual style.
    pub fn with_visual_style(mut self, style: VisualStyle) -> Self {
        self.visual_style = style;
        self
    }

    /// Builder: Set display timestamp.
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    /// Builder: Set image reference.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    /// Builder: Set narration text.
    pub fn with_script_text(mut self, text: impl Into<String>) -> Self {
        self.script_text = text.into();
        self
    }

    /// Builder: Set the brand lock.
    pub fn with_brand_lock(mut self, locked: bool) -> Self {
        self.brand_lock = locked;
        self
    }

    /// Reads the lock named by `kind`.
    pub fn lock(&self, kind: LockKind) -> bool {
        match kind {
            LockKind::Character => self.character_lock,
            LockKind::Brand => self.brand_lock,
            LockKind::Visual => self.visual_lock,
        }
    }

    /// Writes the lock named by `kind`.
    pub fn set_lock(&mut self, kind: LockKind, value: bool) {
        match kind {
            LockKind::Character => self.character_lock = value,
            LockKind::Brand => self.brand_lock = value,
            LockKind::Visual => self.visual_lock = value,
        }
    }

    /// Clones this frame under a new identifier with a decorated title.
    ///
    /// Every other field is copied verbatim.
    pub fn duplicate_as(&self, new_id: impl Into<String>) -> Self {
        Self {
            id: new_id.into(),
            scene: format!("{}{}", self.scene, COPY_SUFFIX),
            ..self.clone()
        }
    }
}

// =============================================================================
// FRAME PATCH
// =============================================================================

/// Partial update over a [`Frame`]: only populated fields are applied.
///
/// The identifier is not patchable — it is immutable for the life of
/// the frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FramePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shot_type: Option<ShotType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_style: Option<VisualStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_lock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_lock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_lock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_text: Option<String>,
}

impl FramePatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// A patch that sets the lock named by `kind` to `value`.
    pub fn lock(kind: LockKind, value: bool) -> Self {
        let mut patch = Self::new();
        match kind {
            LockKind::Character => patch.character_lock = Some(value),
            LockKind::Brand => patch.brand_lock = Some(value),
            LockKind::Visual => patch.visual_lock = Some(value),
        }
        patch
    }

    /// Builder: Patch the scene title.
    pub fn with_scene(mut self, scene: impl Into<String>) -> Self {
        self.scene = Some(scene.into());
        self
    }

    /// Builder: Patch the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder: Patch the shot type.
    pub fn with_shot_type(mut self, shot_type: ShotType) -> Self {
        self.shot_type = Some(shot_type);
        self
    }

    /// Builder: Patch the visual style.
    pub fn with_visual_style(mut self, style: VisualStyle) -> Self {
        self.visual_style = Some(style);
        self
    }

    /// Builder: Patch the narration text.
    pub fn with_script_text(mut self, text: impl Into<String>) -> Self {
        self.script_text = Some(text.into());
        self
    }

    /// True if the patch carries no fields.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Applies the populated fields to `frame`, leaving the rest alone.
    pub fn apply(&self, frame: &mut Frame) {
        if let Some(ref v) = self.scene {
            frame.scene = v.clone();
        }
        if let Some(ref v) = self.duration {
            frame.duration = v.clone();
        }
        if let Some(ref v) = self.description {
            frame.description = v.clone();
        }
        if let Some(v) = self.shot_type {
            frame.shot_type = v;
        }
        if let Some(v) = self.visual_style {
            frame.visual_style = v;
        }
        if let Some(v) = self.character_lock {
            frame.character_lock = v;
        }
        if let Some(v) = self.brand_lock {
            frame.brand_lock = v;
        }
        if let Some(v) = self.visual_lock {
            frame.visual_lock = v;
        }
        if let Some(ref v) = self.timestamp {
            frame.timestamp = v.clone();
        }
        if let Some(ref v) = self.image_url {
            frame.image_url = v.clone();
        }
        if let Some(ref v) = self.script_text {
            frame.script_text = v.clone();
        }
    }
}

// =============================================================================
// STARTER DATA
// =============================================================================

/// The seed storyboard shown when a project is opened for the first time.
pub fn starter_frames() -> Vec<Frame> {
    vec![
        Frame::new("1")
            .with_scene("Opening Hook")
            .with_duration("0:00-0:03")
            .with_description("Close-up of hands holding product with dramatic lighting")
            .with_shot_type(ShotType::CloseUp)
            .with_visual_style(VisualStyle::Dramatic)
            .with_timestamp("0:00")
            .with_image_url("assets/storyboard-frame-1.jpg"),
        Frame::new("2")
            .with_scene("Problem Setup")
            .with_duration("0:03-0:08")
            .with_description("Wide shot of cluttered workspace, person looking frustrated")
            .with_shot_type(ShotType::WideShot)
            .with_visual_style(VisualStyle::Natural)
            .with_timestamp("0:03")
            .with_image_url("assets/storyboard-frame-2.jpg")
            .with_brand_lock(true),
        Frame::new("3")
            .with_scene("Solution Reveal")
            .with_duration("0:08-0:15")
            .with_description("Product in action, smooth camera movement, brand colors prominent")
            .with_shot_type(ShotType::MediumShot)
            .with_visual_style(VisualStyle::Cinematic)
            .with_timestamp("0:08")
            .with_image_url("assets/storyboard-frame-3.jpg"),
        Frame::new("4")
            .with_scene("Benefits Demo")
            .with_duration("0:15-0:22")
            .with_description("Split screen showing before/after, upbeat music")
            .with_shot_type(ShotType::SplitScreen)
            .with_visual_style(VisualStyle::Bold)
            .with_timestamp("0:15")
            .with_image_url("assets/storyboard-frame-4.jpg"),
        Frame::new("5")
            .with_scene("Call to Action")
            .with_duration("0:22-0:30")
            .with_description("Bold text overlay, website/app screenshot, brand logo")
            .with_shot_type(ShotType::Graphic)
            .with_visual_style(VisualStyle::Bold)
            .with_timestamp("0:22")
            .with_image_url("assets/storyboard-frame-5.jpg")
            .with_brand_lock(true),
    ]
}

// =============================================================================
// TESTS
// =============================================================================
