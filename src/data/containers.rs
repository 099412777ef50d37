use indexmap::IndexMap;

/// Per-property lists of gradients or patterns waiting to be turned into
/// canvas paints.
///
/// Every change raises the dirty flag; the owning dataset clears it once the
/// paints are stored in its native object.
#[derive(Debug, Clone)]
pub struct CanvasObjectContainer<T> {
    objects: IndexMap<String, Vec<T>>,
    changed: bool,
}

impl<T> Default for CanvasObjectContainer<T> {
    fn default() -> Self {
        Self {
            objects: IndexMap::new(),
            changed: false,
        }
    }
}

impl<T> CanvasObjectContainer<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the objects of `key`. An empty list removes the key.
    pub fn set_objects(&mut self, key: &str, objects: Vec<T>) {
        if objects.is_empty() {
            self.remove_objects(key);
            return;
        }
        self.objects.insert(key.to_owned(), objects);
        self.changed = true;
    }

    #[must_use]
    pub fn objects(&self, key: &str) -> &[T] {
        self.objects.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub fn has_objects(&self, key: &str) -> bool {
        self.objects.contains_key(key)
    }

    /// Returns `true` when the key had objects.
    pub fn remove_objects(&mut self, key: &str) -> bool {
        let removed = self.objects.shift_remove(key).is_some();
        self.changed |= removed;
        removed
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.objects.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[T])> {
        self.objects
            .iter()
            .map(|(key, objects)| (key.as_str(), objects.as_slice()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    #[must_use]
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn set_changed(&mut self, changed: bool) {
        self.changed = changed;
    }
}
