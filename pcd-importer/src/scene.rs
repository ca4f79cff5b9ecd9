use pcd_geometry::GeometryBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub usize);

/// The part of a host application's scene an import touches.
pub trait SceneContext {
    /// Removes every object from the scene.
    fn clear(&mut self);
    /// Links a new object owning `geometry` into the scene.
    fn create_geometry(&mut self, name: &str, geometry: GeometryBuffer) -> ObjectId;
    fn set_active(&mut self, object: ObjectId);
}

#[derive(Debug, Clone)]
pub struct SceneObject {
    pub id: ObjectId,
    pub name: String,
    pub geometry: GeometryBuffer,
}

/// Scene kept entirely in memory. Object names are made unique with a
/// `.001`, `.002`, ... suffix.
#[derive(Debug, Default)]
pub struct MemoryScene {
    objects: Vec<SceneObject>,
    active: Option<ObjectId>,
    next_id: usize,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|object| object.id == id)
    }

    pub fn active(&self) -> Option<&SceneObject> {
        self.active.and_then(|id| self.get(id))
    }

    fn unique_name(&self, name: &str) -> String {
        let taken = |candidate: &str| self.objects.iter().any(|o| o.name == candidate);
        if !taken(name) {
            return name.to_string();
        }
        (1..)
            .map(|i| format!("{name}.{i:03}"))
            .find(|candidate| !taken(candidate))
            .unwrap_or_else(|| name.to_string())
    }
}

impl SceneContext for MemoryScene {
    fn clear(&mut self) {
        log::debug!("clearing {} scene objects", self.objects.len());
        self.objects.clear();
        self.active = None;
    }

    fn create_geometry(&mut self, name: &str, geometry: GeometryBuffer) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        let name = self.unique_name(name);
        self.objects.push(SceneObject { id, name, geometry });
        id
    }

    fn set_active(&mut self, object: ObjectId) {
        if self.get(object).is_some() {
            self.active = Some(object);
        }
    }
}
