use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Generational handle to a scene node or rigid body.
///
/// The generation is bumped every time a slot is freed, so a handle kept
/// across a shape swap stops resolving instead of aliasing the new object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct Handle {
    pub index: usize,
    pub generation: u32,
}

impl Handle {
    pub fn new(index: usize, generation: u32) -> Self {
        Self { index, generation }
    }

    pub fn is_null(&self) -> bool {
        self.index == usize::MAX
    }
}

impl Default for Handle {
    fn default() -> Self {
        Self::new(usize::MAX, 0)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

/// Slot storage handing out [`Handle`]s that go stale on removal.
#[derive(Debug)]
pub struct Arena<T> {
    items: Vec<Option<T>>,
    generations: Vec<u32>,
    free_list: VecDeque<usize>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            generations: Vec::new(),
            free_list: VecDeque::new(),
        }
    }

    pub fn insert(&mut self, item: T) -> Handle {
        if let Some(index) = self.free_list.pop_front() {
            self.items[index] = Some(item);
            return Handle::new(index, self.generations[index]);
        }

        let index = self.items.len();
        self.items.push(Some(item));
        self.generations.push(0);
        Handle::new(index, 0)
    }

    pub fn get(&self, id: Handle) -> Option<&T> {
        if !self.is_valid(id) {
            return None;
        }
        self.items.get(id.index).and_then(|slot| slot.as_ref())
    }

    pub fn get_mut(&mut self, id: Handle) -> Option<&mut T> {
        if !self.is_valid(id) {
            return None;
        }
        self.items.get_mut(id.index).and_then(|slot| slot.as_mut())
    }

    pub fn remove(&mut self, id: Handle) -> Option<T> {
        if !self.is_valid(id) {
            return None;
        }
        let item = self.items[id.index].take()?;
        self.generations[id.index] = self.generations[id.index].wrapping_add(1);
        self.free_list.push_back(id.index);
        Some(item)
    }

    pub fn is_valid(&self, id: Handle) -> bool {
        self.generations
            .get(id.index)
            .is_some_and(|&generation| generation == id.generation)
    }

    pub fn len(&self) -> usize {
        self.items.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
