#![no_main]

//! Drives arbitrary command sequences through the coordinator and checks the
//! overlay invariants after each one.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use narropil_core::{
    Event, HitRegion, KeyCode, KeyEvent, KeyEventKind, Modifiers, PointerButton, PointerEvent,
    PointerEventKind,
};
use narropil_overlay::{
    ImagePreview, OverlayCommand, OverlayCoordinator, OverlayKind, Payload, ProductPreview,
};

#[derive(Debug, Arbitrary)]
enum Surface {
    QuickView,
    Lightbox,
    MobileDrawer,
}

impl Surface {
    fn kind(&self) -> OverlayKind {
        match self {
            Self::QuickView => OverlayKind::QuickView,
            Self::Lightbox => OverlayKind::Lightbox,
            Self::MobileDrawer => OverlayKind::MobileDrawer,
        }
    }
}

#[derive(Debug, Arbitrary)]
enum FuzzPayload {
    None,
    Product(String),
    Image(String),
}

#[derive(Debug, Arbitrary)]
enum FuzzCommand {
    Open(Surface, FuzzPayload),
    Close(Surface),
    Toggle(Surface),
    Key { escape: bool, release: bool, modifiers: u8 },
    Pointer { button: u8, down: bool, hit: Option<(Surface, bool)> },
}

impl FuzzCommand {
    fn into_command(self) -> Option<OverlayCommand> {
        Some(match self {
            Self::Open(surface, payload) => OverlayCommand::Open {
                kind: surface.kind(),
                payload: match payload {
                    FuzzPayload::None => None,
                    FuzzPayload::Product(title) => {
                        Some(Payload::from(ProductPreview::new().title(title)))
                    }
                    FuzzPayload::Image(caption) => {
                        Some(Payload::from(ImagePreview::new("a.jpg", caption)))
                    }
                },
            },
            Self::Close(surface) => OverlayCommand::Close(surface.kind()),
            Self::Toggle(surface) => OverlayCommand::Toggle(surface.kind()),
            Self::Key {
                escape,
                release,
                modifiers,
            } => {
                let code = if escape { KeyCode::Escape } else { KeyCode::Enter };
                let kind = if release {
                    KeyEventKind::Release
                } else {
                    KeyEventKind::Press
                };
                OverlayCommand::Dismiss(Event::Key(
                    KeyEvent::press(code)
                        .with_modifiers(Modifiers::from_bits_truncate(modifiers))
                        .with_kind(kind),
                ))
            }
            Self::Pointer { button, down, hit } => {
                let button = PointerButton::from_dom_button(button % 4)?;
                let kind = if down {
                    PointerEventKind::Down(button)
                } else {
                    PointerEventKind::Up(button)
                };
                let mut event = PointerEvent::new(kind);
                if let Some((surface, backdrop)) = hit {
                    let region = if backdrop {
                        HitRegion::Backdrop
                    } else {
                        HitRegion::Content
                    };
                    event = event.with_hit(surface.kind().hit_id(), region);
                }
                OverlayCommand::Dismiss(Event::Pointer(event))
            }
        })
    }
}

fn check(overlays: &OverlayCoordinator) {
    let open = OverlayKind::ALL
        .into_iter()
        .filter(|kind| overlays.is_open(*kind))
        .count();
    let exclusive_open = OverlayKind::ALL
        .into_iter()
        .filter(|kind| kind.is_exclusive() && overlays.is_open(*kind))
        .count();

    assert!(exclusive_open <= 1);
    assert_eq!(overlays.scroll_lock().count() as usize, open);
    assert_eq!(overlays.router().len(), open);
    for kind in OverlayKind::ALL {
        let surface = overlays.surface(kind);
        assert_eq!(overlays.router().is_active(kind), surface.is_open());
        assert_eq!(
            surface.payload().is_some(),
            surface.is_open() && kind.carries_payload()
        );
    }
}

fuzz_target!(|commands: Vec<FuzzCommand>| {
    let mut overlays = OverlayCoordinator::new();
    for command in commands {
        if let Some(command) = command.into_command() {
            overlays.dispatch(command);
            check(&overlays);
        }
    }
    overlays.close_all();
    assert!(!overlays.scroll_lock().is_locked());
});
