#![no_main]

//! Feeds raw bytes to the JSON host boundary, one input per line. Rejected
//! inputs must leave the view untouched.

use libfuzzer_sys::fuzz_target;
use narropil_web::PageHost;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let mut host = PageHost::default();
    for line in text.lines() {
        let before = host.view();
        if host.handle_json(line).is_err() {
            assert_eq!(host.view(), before);
        }
        let view = host.view();
        assert_eq!(view.scroll_locked, view.open_kinds().next().is_some());
    }
});
