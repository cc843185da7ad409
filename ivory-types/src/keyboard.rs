use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{KeyColor, NoteName};

/// Visual state of one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    pub note: NoteName,
    pub pressed: bool,
    pub highlighted: bool,
}

impl KeyState {
    fn new(note: NoteName) -> Self {
        Self {
            note,
            pressed: false,
            highlighted: false,
        }
    }

    pub fn color(&self) -> KeyColor {
        self.note.color()
    }

    /// CSS class list for the rendered key element.
    pub fn classes(&self) -> String {
        let mut class = format!("key {}", self.color().class());
        if self.highlighted {
            class.push_str(" highlight");
        }
        if self.pressed {
            class.push_str(" pressed");
        }
        class
    }
}

/// The rendered keyboard: keys in catalog order plus a note → key map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Keyboard {
    keys: Vec<KeyState>,
    lookup: HashMap<NoteName, usize>,
}

impl Keyboard {
    /// Build one key per note, in order. Duplicate notes keep their first key.
    pub fn build(notes: &[NoteName]) -> Self {
        let mut keys = Vec::with_capacity(notes.len());
        let mut lookup = HashMap::with_capacity(notes.len());
        for &note in notes {
            if lookup.contains_key(&note) {
                continue;
            }
            lookup.insert(note, keys.len());
            keys.push(KeyState::new(note));
        }
        Self { keys, lookup }
    }

    /// Replace all keys with a fresh build.
    pub fn rebuild(&mut self, notes: &[NoteName]) {
        *self = Self::build(notes);
    }

    pub fn keys(&self) -> &[KeyState] {
        &self.keys
    }

    pub fn key(&self, note: NoteName) -> Option<&KeyState> {
        self.lookup.get(&note).map(|&i| &self.keys[i])
    }

    fn key_mut(&mut self, note: NoteName) -> Option<&mut KeyState> {
        let idx = *self.lookup.get(&note)?;
        self.keys.get_mut(idx)
    }

    /// Set the pressed flag. Returns false if the note has no key.
    pub fn press(&mut self, note: NoteName) -> bool {
        match self.key_mut(note) {
            Some(key) => {
                key.pressed = true;
                true
            }
            None => false,
        }
    }

    pub fn release(&mut self, note: NoteName) -> bool {
        match self.key_mut(note) {
            Some(key) => {
                key.pressed = false;
                true
            }
            None => false,
        }
    }

    /// Replace the highlight set: clear every key, then mark `notes`.
    pub fn highlight(&mut self, notes: &[NoteName]) {
        for key in &mut self.keys {
            key.highlighted = false;
        }
        for &note in notes {
            if let Some(key) = self.key_mut(note) {
                key.highlighted = true;
            }
        }
    }

    pub fn highlighted(&self) -> impl Iterator<Item = NoteName> + '_ {
        self.keys.iter().filter(|k| k.highlighted).map(|k| k.note)
    }
}
