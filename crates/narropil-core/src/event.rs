#![forbid(unsafe_code)]

//! Input events delivered by the page host.
//!
//! The host (browser glue, test harness, fuzzer) translates its native input
//! into these types before handing them to the overlay layer. Pointer events
//! carry the result of the host's own hit test so the overlay layer never has
//! to know about element geometry.
//!
//! # Invariants
//!
//! - A [`HitId`] identifies one overlay surface; [`HitRegion`] says which part
//!   of it was hit.
//! - A pointer event with `hit == None` landed outside every overlay.

use bitflags::bitflags;

bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const CTRL = 0b0010;
        const ALT = 0b0100;
        const META = 0b1000;
    }
}

/// Logical key, independent of keyboard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Escape,
    Enter,
    Tab,
    Char(char),
    /// A key the host reported but that has no meaning here.
    Unidentified,
}

impl KeyCode {
    /// Map a DOM `KeyboardEvent.key` string to a key code.
    #[must_use]
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Self::Escape,
            "Enter" => Self::Enter,
            "Tab" => Self::Tab,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Self::Char(ch),
                    _ => Self::Unidentified,
                }
            }
        }
    }
}

/// Key press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    #[default]
    Press,
    Release,
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// A press of `code` with no modifiers.
    #[must_use]
    pub const fn press(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::empty(),
            kind: KeyEventKind::Press,
        }
    }

    /// Set the modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set the event kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` index.
    #[must_use]
    pub const fn from_dom_button(button: u8) -> Option<Self> {
        match button {
            0 => Some(Self::Left),
            1 => Some(Self::Middle),
            2 => Some(Self::Right),
            _ => None,
        }
    }
}

/// What the pointer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Down(PointerButton),
    Up(PointerButton),
    Moved,
}

/// Identifier the host attaches to an overlay's hit regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HitId(u32);

impl HitId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[inline]
    pub const fn id(self) -> u32 {
        self.0
    }
}

/// Which part of an overlay a pointer event landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitRegion {
    /// The dimmed layer surrounding the overlay content.
    Backdrop,
    /// The overlay's own content box (image, text, buttons).
    Content,
}

/// A pointer event with the host's hit-test result attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub hit: Option<(HitId, HitRegion)>,
}

impl PointerEvent {
    /// A pointer event that hit nothing.
    #[must_use]
    pub const fn new(kind: PointerEventKind) -> Self {
        Self { kind, hit: None }
    }

    /// Attach a hit-test result.
    #[must_use]
    pub const fn with_hit(mut self, id: HitId, region: HitRegion) -> Self {
        self.hit = Some((id, region));
        self
    }

    /// The hit id when this event landed on a backdrop.
    #[must_use]
    pub fn backdrop_hit(&self) -> Option<HitId> {
        match self.hit {
            Some((id, HitRegion::Backdrop)) => Some(id),
            _ => None,
        }
    }
}

/// Input event routed to the overlay layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    Key(KeyEvent),
    Pointer(PointerEvent),
}

impl Event {
    /// Escape key press with no modifiers.
    #[must_use]
    pub const fn escape() -> Self {
        Self::Key(KeyEvent::press(KeyCode::Escape))
    }

    /// Primary-button press on the backdrop of the overlay tagged `id`.
    #[must_use]
    pub const fn backdrop_press(id: HitId) -> Self {
        Self::Pointer(
            PointerEvent::new(PointerEventKind::Down(PointerButton::Left))
                .with_hit(id, HitRegion::Backdrop),
        )
    }

    /// Whether this is an Escape press.
    #[must_use]
    pub fn is_escape_press(&self) -> bool {
        matches!(
            self,
            Self::Key(KeyEvent {
                code: KeyCode::Escape,
                kind: KeyEventKind::Press,
                ..
            })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_keys_map_to_codes() {
        assert_eq!(KeyCode::from_dom_key("Escape"), KeyCode::Escape);
        assert_eq!(KeyCode::from_dom_key("Esc"), KeyCode::Escape);
        assert_eq!(KeyCode::from_dom_key("Enter"), KeyCode::Enter);
        assert_eq!(KeyCode::from_dom_key("q"), KeyCode::Char('q'));
        assert_eq!(KeyCode::from_dom_key("é"), KeyCode::Char('é'));
        assert_eq!(KeyCode::from_dom_key("ArrowLeft"), KeyCode::Unidentified);
        assert_eq!(KeyCode::from_dom_key(""), KeyCode::Unidentified);
    }

    #[test]
    fn escape_press_ignores_modifiers() {
        let shifted = Event::Key(KeyEvent::press(KeyCode::Escape).with_modifiers(Modifiers::SHIFT));
        assert!(shifted.is_escape_press());
        assert!(Event::escape().is_escape_press());
    }

    #[test]
    fn escape_release_is_not_a_press() {
        let release = Event::Key(KeyEvent::press(KeyCode::Escape).with_kind(KeyEventKind::Release));
        assert!(!release.is_escape_press());
        assert!(!Event::Key(KeyEvent::press(KeyCode::Enter)).is_escape_press());
    }

    #[test]
    fn backdrop_hit_only_for_backdrop_region() {
        let id = HitId::new(7);
        let down = PointerEvent::new(PointerEventKind::Down(PointerButton::Left));
        assert_eq!(down.backdrop_hit(), None);
        assert_eq!(down.with_hit(id, HitRegion::Backdrop).backdrop_hit(), Some(id));
        assert_eq!(down.with_hit(id, HitRegion::Content).backdrop_hit(), None);
    }

    #[test]
    fn dom_buttons() {
        assert_eq!(PointerButton::from_dom_button(0), Some(PointerButton::Left));
        assert_eq!(PointerButton::from_dom_button(2), Some(PointerButton::Right));
        assert_eq!(PointerButton::from_dom_button(9), None);
    }
}
