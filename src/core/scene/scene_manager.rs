//=========================================================================
// Scene Manager
//=========================================================================
//
// Manages scene registration, activation, and lifecycle.
//
// Scenes are stored in a HashMap by key. Switching keys runs on_exit on
// the outgoing scene and on_enter on the incoming one; switching to the
// already-active key does nothing.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Instant;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::Scene;
use crate::core::quiz::Phase;
use crate::core::render::DisplayList;
use crate::core::QuizContext;

//=== Scene Key Trait =====================================================

/// Marker trait for scene identifiers.
pub trait SceneKey: Clone + Copy + Eq + Hash + Debug + 'static {}

impl SceneKey for Phase {}

//=== Scene Manager =======================================================

/// Holds the registered scenes and the key of the active one.
pub struct SceneManager<S: SceneKey> {
    scenes: HashMap<S, Box<dyn Scene>>,
    active: Option<S>,
}

impl<S: SceneKey> SceneManager<S> {
    //--- Construction -----------------------------------------------------

    /// Creates a manager with no scenes and nothing active.
    pub fn new() -> Self {
        Self {
            scenes: HashMap::new(),
            active: None,
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a scene under `key`, replacing any previous one.
    pub fn register_scene<T>(&mut self, key: S, scene: T)
    where
        T: Scene + 'static,
    {
        if self.scenes.insert(key, Box::new(scene)).is_some() {
            warn!(target: "scene", "Scene {:?} was already registered and has been replaced", key);
        }
    }

    //--- Activation -------------------------------------------------------

    /// Makes `key` the active scene.
    ///
    /// Runs `on_exit` for the outgoing scene and `on_enter` for the new
    /// one. Unregistered keys are ignored with a warning.
    pub fn switch_to(&mut self, key: S, ctx: &QuizContext) {
        if self.active == Some(key) {
            return;
        }

        if !self.scenes.contains_key(&key) {
            warn!(target: "scene", "Attempted to activate unregistered scene {:?}", key);
            return;
        }

        if let Some(previous) = self.active {
            debug!(target: "scene", "Leaving scene {:?}", previous);
            if let Some(scene) = self.scenes.get_mut(&previous) {
                scene.on_exit(ctx);
            }
        }

        debug!(target: "scene", "Entering scene {:?}", key);
        self.active = Some(key);
        if let Some(scene) = self.scenes.get_mut(&key) {
            scene.on_enter(ctx);
        }
    }

    /// Key of the active scene, if any.
    pub fn active(&self) -> Option<S> {
        self.active
    }

    //--- Frame ------------------------------------------------------------

    /// Runs the active scene's per-tick logic.
    pub fn update(&mut self, ctx: &mut QuizContext, now: Instant) {
        if let Some(scene) = self.active.and_then(|key| self.scenes.get_mut(&key)) {
            scene.update(ctx, now);
        }
    }

    /// Appends the active scene's drawing commands.
    pub fn draw(&self, ctx: &QuizContext, list: &mut DisplayList) {
        if let Some(scene) = self.active.and_then(|key| self.scenes.get(&key)) {
            scene.draw(ctx, list);
        }
    }
}

impl<S: SceneKey> Default for SceneManager<S> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================
