//! Name-keyed, read-only view of all colliders at one instant

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{CollisionError, CollisionResult};
use crate::physics::collision::GameObject;

/// Every collidable object at one simulation instant
///
/// Iteration is in ascending name order, so scans report hits in a stable
/// order from frame to frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneSnapshot {
    objects: BTreeMap<String, GameObject>,
}

impl SceneSnapshot {
    /// Creates an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot, failing on the first repeated name
    pub fn from_objects(objects: impl IntoIterator<Item = GameObject>) -> CollisionResult<Self> {
        let mut scene = Self::new();
        for object in objects {
            scene.insert(object)?;
        }
        Ok(scene)
    }

    /// Adds an object; names must be unique
    pub fn insert(&mut self, object: GameObject) -> CollisionResult<()> {
        if self.objects.contains_key(&object.name) {
            return Err(CollisionError::DuplicateName(object.name));
        }
        self.objects.insert(object.name.clone(), object);
        Ok(())
    }

    /// Inserts or overwrites the object with the same name, returning the old one
    pub fn replace(&mut self, object: GameObject) -> Option<GameObject> {
        self.objects.insert(object.name.clone(), object)
    }

    /// Looks up an object by name
    pub fn get(&self, name: &str) -> Option<&GameObject> {
        self.objects.get(name)
    }

    /// Looks up an object, falling back to [`GameObject::sentinel`]
    pub fn get_or_sentinel(&self, name: &str) -> Cow<'_, GameObject> {
        match self.objects.get(name) {
            Some(object) => Cow::Borrowed(object),
            None => {
                log::warn!(
                    "'{}' is not in the scene snapshot, using an empty box at the origin",
                    name
                );
                Cow::Owned(GameObject::sentinel(name))
            }
        }
    }

    /// Whether an object with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }

    /// Number of objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the snapshot is empty
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Objects in name order
    pub fn iter(&self) -> impl Iterator<Item = &GameObject> {
        self.objects.values()
    }

    /// Names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.objects.keys().map(String::as_str)
    }

    /// Load a scene description (`.toml` or `.ron`) and validate its names
    pub fn load_from_file(path: impl AsRef<Path>) -> CollisionResult<Self> {
        let description = SceneDescription::load_from_file(path)?;
        Self::try_from(description)
    }

    /// Flatten into a serializable description
    pub fn to_description(&self) -> SceneDescription {
        SceneDescription {
            objects: self.objects.values().cloned().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SceneSnapshot {
    type Item = &'a GameObject;
    type IntoIter = std::collections::btree_map::Values<'a, String, GameObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.values()
    }
}

/// On-disk form of a scene: a flat list of objects
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Objects in file order
    #[serde(default)]
    pub objects: Vec<GameObject>,
}

impl Config for SceneDescription {}

impl TryFrom<SceneDescription> for SceneSnapshot {
    type Error = CollisionError;

    fn try_from(description: SceneDescription) -> CollisionResult<Self> {
        Self::from_objects(description.objects)
    }
}
