// SPDX-License-Identifier: PMPL-1.0-or-later

//! Image lightbox state machine.
//!
//! The lightbox is either closed or open on one image of a project's
//! gallery. Navigation wraps in both directions. Side effects the host has
//! to carry out (capturing keys and locking page scroll while open,
//! entering or leaving fullscreen) are returned as [`GalleryEffect`] values
//! instead of being performed here.
//!
//! Fullscreen belongs to the host (terminal alternate screen, window
//! manager). [`Lightbox::toggle_fullscreen`] only asks for a change; the
//! flag follows whatever the host later reports through
//! [`Lightbox::sync_fullscreen`].

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryKey {
    Escape,
    ArrowLeft,
    ArrowRight,
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryEffect {
    /// Route keys to the lightbox and stop the page from scrolling.
    CaptureInput,
    /// Undo `CaptureInput`.
    ReleaseInput,
    RequestFullscreen,
    ExitFullscreen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxState {
    Closed,
    Open { current: usize, image_loaded: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lightbox {
    len: usize,
    state: LightboxState,
    fullscreen: bool,
}

impl Lightbox {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            state: LightboxState::Closed,
            fullscreen: false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    /// Whether anything should be drawn: open and non-empty.
    pub fn is_visible(&self) -> bool {
        self.is_open() && self.len > 0
    }

    pub fn current(&self) -> Option<usize> {
        match self.state {
            LightboxState::Open { current, .. } if self.len > 0 => Some(current),
            _ => None,
        }
    }

    pub fn image_loaded(&self) -> bool {
        matches!(
            self.state,
            LightboxState::Open {
                image_loaded: true,
                ..
            }
        )
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn counter(&self) -> Option<Counter> {
        self.current().map(|current| Counter {
            position: current + 1,
            total: self.len,
        })
    }

    /// Replace the gallery length, e.g. after the language changed and the
    /// gallery was re-extracted. An empty gallery closes the lightbox; an
    /// open index past the end moves to the last image.
    pub fn set_len(&mut self, len: usize) -> Option<GalleryEffect> {
        self.len = len;
        if len == 0 {
            return self.close();
        }
        if let LightboxState::Open { current, .. } = self.state {
            if current >= len {
                self.show(len - 1);
            }
        }
        None
    }

    /// Open on `start` (clamped to the last image). Does nothing for an
    /// empty gallery.
    pub fn open(&mut self, start: usize) -> Option<GalleryEffect> {
        if self.len == 0 {
            return None;
        }
        let was_open = self.is_open();
        self.show(start.min(self.len - 1));
        if was_open {
            None
        } else {
            Some(GalleryEffect::CaptureInput)
        }
    }

    pub fn close(&mut self) -> Option<GalleryEffect> {
        if self.is_open() {
            self.state = LightboxState::Closed;
            Some(GalleryEffect::ReleaseInput)
        } else {
            None
        }
    }

    pub fn next(&mut self) -> bool {
        match self.current() {
            Some(current) => {
                self.show((current + 1) % self.len);
                true
            }
            None => false,
        }
    }

    pub fn prev(&mut self) -> bool {
        match self.current() {
            Some(current) => {
                self.show((current + self.len - 1) % self.len);
                true
            }
            None => false,
        }
    }

    /// Thumbnail selection. Out-of-range indexes are ignored.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if self.current().is_none() || index >= self.len {
            return false;
        }
        self.show(index);
        true
    }

    /// Ask the host to flip fullscreen, based on the last reported state.
    pub fn toggle_fullscreen(&self) -> Option<GalleryEffect> {
        if !self.is_visible() {
            return None;
        }
        Some(if self.fullscreen {
            GalleryEffect::ExitFullscreen
        } else {
            GalleryEffect::RequestFullscreen
        })
    }

    /// Host notification of its real fullscreen state.
    pub fn sync_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
    }

    /// The current image finished loading.
    pub fn image_ready(&mut self) {
        if let LightboxState::Open { image_loaded, .. } = &mut self.state {
            *image_loaded = true;
        }
    }

    /// The current image failed to load; the spinner stops all the same.
    pub fn image_failed(&mut self) {
        self.image_ready();
    }

    /// Keyboard binding while open. Keys outside the binding are ignored.
    pub fn handle_key(&mut self, key: GalleryKey) -> Option<GalleryEffect> {
        if !self.is_visible() {
            return None;
        }
        match key {
            GalleryKey::Escape => self.close(),
            GalleryKey::ArrowLeft => {
                self.prev();
                None
            }
            GalleryKey::ArrowRight => {
                self.next();
                None
            }
            GalleryKey::Char('f') | GalleryKey::Char('F') => self.toggle_fullscreen(),
            GalleryKey::Char(_) => None,
        }
    }

    fn show(&mut self, index: usize) {
        self.state = LightboxState::Open {
            current: index,
            image_loaded: false,
        };
    }
}

impl Default for Lightbox {
    fn default() -> Self {
        Self::new(0)
    }
}

/// "3 / 7" style position label.
pub struct Counter {
    pub position: usize,
    pub total: usize,
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.position, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opened(len: usize, start: usize) -> Lightbox {
        let mut lightbox = Lightbox::new(len);
        lightbox.open(start);
        lightbox
    }

    #[test]
    fn open_captures_input_once() {
        let mut lightbox = Lightbox::new(3);
        assert_eq!(lightbox.open(1), Some(GalleryEffect::CaptureInput));
        assert_eq!(lightbox.open(2), None);
        assert_eq!(lightbox.current(), Some(2));
        assert!(!lightbox.image_loaded());
    }

    #[test]
    fn empty_gallery_never_opens() {
        let mut lightbox = Lightbox::new(0);
        assert_eq!(lightbox.open(0), None);
        assert!(!lightbox.is_visible());
        assert!(!lightbox.next());
        assert_eq!(lightbox.handle_key(GalleryKey::Escape), None);
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let mut lightbox = opened(3, 0);
        lightbox.prev();
        assert_eq!(lightbox.current(), Some(2));
        lightbox.next();
        assert_eq!(lightbox.current(), Some(0));
    }

    #[test]
    fn full_cycles_return_to_start() {
        for len in 1..=6 {
            for start in 0..len {
                let mut forward = opened(len, start);
                let mut backward = opened(len, start);
                for _ in 0..len {
                    forward.next();
                    backward.prev();
                }
                assert_eq!(forward.current(), Some(start));
                assert_eq!(backward.current(), Some(start));

                let mut there_and_back = opened(len, start);
                there_and_back.next();
                there_and_back.prev();
                assert_eq!(there_and_back.current(), Some(start));
            }
        }
    }

    #[test]
    fn navigation_resets_loaded_flag() {
        let mut lightbox = opened(2, 0);
        lightbox.image_ready();
        assert!(lightbox.image_loaded());
        lightbox.next();
        assert!(!lightbox.image_loaded());
        lightbox.image_failed();
        assert!(lightbox.image_loaded());
        lightbox.jump_to(0);
        assert!(!lightbox.image_loaded());
    }

    #[test]
    fn jump_ignores_out_of_range() {
        let mut lightbox = opened(3, 0);
        assert!(lightbox.jump_to(2));
        assert!(!lightbox.jump_to(3));
        assert_eq!(lightbox.current(), Some(2));
    }

    #[test]
    fn key_bindings() {
        let mut lightbox = opened(3, 0);
        assert_eq!(lightbox.handle_key(GalleryKey::ArrowLeft), None);
        assert_eq!(lightbox.current(), Some(2));
        assert_eq!(lightbox.handle_key(GalleryKey::ArrowRight), None);
        assert_eq!(lightbox.current(), Some(0));
        assert_eq!(lightbox.handle_key(GalleryKey::Char('x')), None);
        assert_eq!(lightbox.current(), Some(0));
        assert_eq!(
            lightbox.handle_key(GalleryKey::Char('F')),
            Some(GalleryEffect::RequestFullscreen)
        );
        assert_eq!(
            lightbox.handle_key(GalleryKey::Escape),
            Some(GalleryEffect::ReleaseInput)
        );
        assert!(!lightbox.is_open());
    }

    #[test]
    fn fullscreen_follows_host_report() {
        let mut lightbox = opened(2, 0);
        assert_eq!(
            lightbox.toggle_fullscreen(),
            Some(GalleryEffect::RequestFullscreen)
        );
        assert!(!lightbox.is_fullscreen());
        lightbox.sync_fullscreen(true);
        assert_eq!(lightbox.toggle_fullscreen(), Some(GalleryEffect::ExitFullscreen));
        lightbox.sync_fullscreen(false);
        assert!(!lightbox.is_fullscreen());
    }

    #[test]
    fn shrinking_gallery_clamps_or_closes() {
        let mut lightbox = opened(5, 4);
        assert_eq!(lightbox.set_len(2), None);
        assert_eq!(lightbox.current(), Some(1));
        assert_eq!(lightbox.set_len(0), Some(GalleryEffect::ReleaseInput));
        assert!(!lightbox.is_open());
    }

    #[test]
    fn counter_label() {
        let lightbox = opened(7, 2);
        assert_eq!(lightbox.counter().unwrap().to_string(), "3 / 7");
        assert!(Lightbox::new(7).counter().is_none());
    }
}
