// DOM element ids shared by the page markup and the wasm front-end.

pub const CARD_ID: &str = "section-card";
pub const CARD_TITLE_ID: &str = "section-title";
pub const CARD_DESCRIPTION_ID: &str = "section-description";
pub const CARD_ICON_ID: &str = "section-icon";
pub const HINT_ID: &str = "scroll-hint";
pub const NAV_PREV_ID: &str = "nav-prev";
pub const NAV_NEXT_ID: &str = "nav-next";
pub const NAV_DOTS_ID: &str = "nav-dots"; // container the dot buttons are built into
pub const NAV_DOT_PREFIX: &str = "nav-dot-";

// CSS hooks
pub const VISIBLE_CLASS: &str = "visible";
pub const ACTIVE_CLASS: &str = "active";
pub const ACCENT_VAR: &str = "--accent";
pub const CARD_FADE_VAR: &str = "--card-fade";

// Query parameter selecting the model-moves tour (`?mode=model`)
pub const MODE_QUERY_MODEL: &str = "mode=model";
