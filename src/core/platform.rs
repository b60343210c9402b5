use super::constants::MOBILE_MAX_WIDTH;

const MOBILE_UA_TOKENS: &[&str] = &[
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// The cursor is a desktop-only effect: touch devices and narrow viewports skip it.
pub fn is_mobile(user_agent: &str, viewport_width: f32) -> bool {
    if viewport_width < MOBILE_MAX_WIDTH {
        return true;
    }
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_UA_TOKENS.iter().any(|t| ua.contains(t))
}
