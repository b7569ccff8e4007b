//! Animation resources and the per-kind model table.
//!
//! A model is a set of named animations (`"default"` required, extra states
//! such as `"cooldown"` optional) shared by every entity of one kind. The
//! [`ModelStore`] is built by the embedding application — image decoding is
//! its business — and injected into the level at construction, so there is
//! no global mutable model table and no load-order hazard.
//!
//! The original on-disk description format is a small JSON document:
//!
//! ```json
//! { "animations": { "default": { "frames": ["a.png", "b.png"],
//!                                "fps": 3, "loop": true } } }
//! ```
//!
//! [`ModelDescr::from_json`] parses it and [`Model::build`] assembles the
//! animation resources from already-loaded images.

use std::collections::HashMap;
use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use crate::components::kind::EntityKind;
use crate::surface::Image;

/// Name of the animation every model must provide.
pub const DEFAULT_STATE: &str = "default";
/// Optional state played while a station refuses docking.
pub const COOLDOWN_STATE: &str = "cooldown";

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("animation has no frames")]
    EmptyAnimation,
    #[error("model has no `{DEFAULT_STATE}` animation")]
    MissingDefault,
    #[error("animation `{animation}` references unknown image `{frame}`")]
    UnknownFrame { animation: String, frame: String },
    #[error("invalid model description: {0}")]
    BadDescription(#[from] serde_json::Error),
}

/// Shared, immutable frame sequence.
#[derive(Clone, Debug)]
pub struct AnimationResource {
    frames: Vec<Image>,
    /// Ticks each frame stays on screen; 0 advances every tick.
    pub ticks_per_frame: u32,
    /// Whether the sequence restarts after the last frame.
    pub looped: bool,
}

impl AnimationResource {
    /// Fails fast on an empty frame list rather than producing an
    /// unplayable animation.
    pub fn new(
        ticks_per_frame: u32,
        frames: Vec<Image>,
        looped: bool,
    ) -> Result<Self, ModelError> {
        if frames.is_empty() {
            return Err(ModelError::EmptyAnimation);
        }
        Ok(Self {
            frames,
            ticks_per_frame,
            looped,
        })
    }

    pub fn frame(&self, index: usize) -> &Image {
        &self.frames[index]
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// Description of one animation inside a model document.
#[derive(Debug, Clone, Deserialize)]
pub struct AnimationDescr {
    pub frames: Vec<String>,
    #[serde(default = "default_fps")]
    pub fps: u32,
    #[serde(default = "default_loop", rename = "loop")]
    pub looped: bool,
}

fn default_fps() -> u32 {
    1
}

fn default_loop() -> bool {
    true
}

/// Description of a full model document.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelDescr {
    pub animations: HashMap<String, AnimationDescr>,
}

impl ModelDescr {
    pub fn from_json(text: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// A set of named animations shared by every entity of one kind.
#[derive(Clone, Debug)]
pub struct Model {
    animations: FxHashMap<String, Arc<AnimationResource>>,
}

impl Model {
    /// Build from `(state name, animation)` pairs; the `"default"` state is
    /// required.
    pub fn from_animations(
        pairs: impl IntoIterator<Item = (String, AnimationResource)>,
    ) -> Result<Self, ModelError> {
        let animations: FxHashMap<String, Arc<AnimationResource>> = pairs
            .into_iter()
            .map(|(name, animation)| (name, Arc::new(animation)))
            .collect();
        if !animations.contains_key(DEFAULT_STATE) {
            return Err(ModelError::MissingDefault);
        }
        Ok(Self { animations })
    }

    /// Assemble a model from a parsed description and already-loaded images
    /// keyed by frame name. `ticks_per_frame = host_fps / animation fps`.
    pub fn build(
        descr: &ModelDescr,
        host_fps: u32,
        images: &FxHashMap<String, Image>,
    ) -> Result<Self, ModelError> {
        let mut pairs = Vec::with_capacity(descr.animations.len());
        for (name, anim) in &descr.animations {
            let mut frames = Vec::with_capacity(anim.frames.len());
            for frame in &anim.frames {
                let image = images.get(frame).ok_or_else(|| ModelError::UnknownFrame {
                    animation: name.clone(),
                    frame: frame.clone(),
                })?;
                frames.push(image.clone());
            }
            let ticks_per_frame = host_fps / anim.fps.max(1);
            pairs.push((
                name.clone(),
                AnimationResource::new(ticks_per_frame, frames, anim.looped)?,
            ));
        }
        Self::from_animations(pairs)
    }

    pub fn animation(&self, state: &str) -> Option<&Arc<AnimationResource>> {
        self.animations.get(state)
    }

    /// The `"default"` animation, guaranteed present by construction.
    pub fn default_animation(&self) -> &Arc<AnimationResource> {
        &self.animations[DEFAULT_STATE]
    }
}

/// Mapping from entity kind to its model, injected at level construction.
#[derive(Resource, Default)]
pub struct ModelStore {
    models: FxHashMap<EntityKind, Model>,
}

impl ModelStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: EntityKind, model: Model) {
        self.models.insert(kind, model);
    }

    pub fn get(&self, kind: EntityKind) -> Option<&Model> {
        self.models.get(&kind)
    }
}
