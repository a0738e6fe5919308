//! Playback-code rendering.
//!
//! Produces the snippet shown in the read-only code area. The text is for
//! display and copying only; nothing parses it back.

use std::fmt::Write;

use crate::animation::descriptor::AnimationDescriptor;

/// Name of the tweening call in the rendered snippet.
pub const ENGINE_CALL: &str = "anime";

/// Render `descriptor` as a playback-code snippet.
///
/// Fixed layout: target, the animated property with its three quoted
/// keyframe values, duration, quoted easing, loop flag. Delay and
/// alternate are not shown.
#[must_use]
pub fn render(descriptor: &AnimationDescriptor) -> String {
    let values = descriptor
        .keyframes
        .values()
        .iter()
        .map(|v| format!("'{v}'"))
        .collect::<Vec<_>>()
        .join(", ");

    let mut code = String::new();
    let _ = writeln!(code, "{ENGINE_CALL}({{");
    let _ = writeln!(code, "  targets: '{}',", descriptor.target);
    let _ = writeln!(code, "  {}: [{values}],", descriptor.property);
    let _ = writeln!(code, "  duration: {},", descriptor.duration_ms);
    let _ = writeln!(code, "  easing: '{}',", descriptor.easing);
    let _ = writeln!(code, "  loop: {}", descriptor.looping);
    code.push_str("});");
    code
}
