// SPDX-License-Identifier: PMPL-1.0-or-later

//! The active display language.
//!
//! One value per application, owned by [`crate::app::App`]. Views never keep
//! their own copy: they read it on every render and compare [`revision`]
//! numbers to know when localized derivations are stale.
//!
//! [`revision`]: ActiveLanguage::revision

use super::Lang;
use std::fmt;

type Listener = Box<dyn FnMut(Lang)>;

pub struct ActiveLanguage {
    current: Lang,
    revision: u64,
    listeners: Vec<Listener>,
}

impl ActiveLanguage {
    pub fn new(initial: Lang) -> Self {
        Self {
            current: initial,
            revision: 0,
            listeners: Vec::new(),
        }
    }

    pub fn get(&self) -> Lang {
        self.current
    }

    /// Bumped every time the language actually changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Switch language and notify listeners. Returns false (and notifies no
    /// one) when `lang` is already active.
    pub fn set(&mut self, lang: Lang) -> bool {
        if lang == self.current {
            return false;
        }
        self.current = lang;
        self.revision += 1;
        for listener in &mut self.listeners {
            listener(lang);
        }
        true
    }

    /// Register a callback run after each change.
    pub fn subscribe(&mut self, listener: impl FnMut(Lang) + 'static) {
        self.listeners.push(Box::new(listener));
    }
}

impl Default for ActiveLanguage {
    fn default() -> Self {
        Self::new(Lang::default())
    }
}

impl fmt::Debug for ActiveLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActiveLanguage")
            .field("current", &self.current)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
