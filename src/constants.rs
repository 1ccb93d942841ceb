/// Page wiring constants: element ids, class names and UI timing.
///
/// These mirror the markup contract of the site; changing one here means
/// changing the HTML/CSS to match.
// Background canvas
pub const CANVAS_ID: &str = "bgCanvas";

// Navigation
pub const NAV_BUTTON_SELECTOR: &str = ".nav-btn";
pub const PANEL_SELECTOR: &str = ".panel";
pub const MENU_TOGGLE_ID: &str = "menuToggle";
pub const ACTIVE_CLASS: &str = "active";
pub const MENU_OPEN_CLASS: &str = "menu-open";

// Footer
pub const YEAR_ID: &str = "year";

// Thought note
pub const NOTE_SLOT_ID: &str = "thoughtSlot";
pub const NOTE_SAVE_ID: &str = "saveThought";
pub const NOTE_CLEAR_ID: &str = "clearThought";
pub const NOTE_SAVE_LABEL: &str = "Save locally";
pub const NOTE_SAVED_LABEL: &str = "Saved ✓";
pub const NOTE_SAVED_LABEL_MS: i32 = 1400; // how long the confirmation label stays
pub const NOTE_EMPTY_MESSAGE: &str = "Thought empty — write something first.";
pub const NOTE_CLEAR_PROMPT: &str = "Clear the thought box?";

// Theme buttons
pub const THEME_LIGHT_BUTTON_ID: &str = "btnLight";
pub const THEME_DARK_BUTTON_ID: &str = "btnDark";
