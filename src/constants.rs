// DOM ids and class names the page is expected to provide or that we create.

pub const ID_NAME_FORM: &str = "nameForm";
pub const ID_NAME_INPUT: &str = "nameInput";
pub const ID_NAME_ERROR: &str = "nameError";
pub const ID_INTRO_CARD: &str = "introCard";
pub const ID_PLAY_CARD: &str = "playCard";
pub const ID_HEARTS_CONTAINER: &str = "heartsContainer";
pub const ID_THEME_TOGGLE: &str = "themeToggle";

// Created by the prompt card
pub const ID_NAME_SPAN: &str = "herName";
pub const ID_BUTTON_AREA: &str = "buttonArea";
pub const ID_CONFIRM_BUTTON: &str = "yesBtn";
pub const ID_EVASIVE_BUTTON: &str = "noBtn";
pub const ID_AGAIN_BUTTON: &str = "againBtn";

pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_QUESTION_TITLE: &str = "question-title";
pub const CLASS_BUTTON_AREA: &str = "button-area";
pub const CLASS_CONFIRM_BUTTON: &str = "btn-yes";
pub const CLASS_EVASIVE_BUTTON: &str = "btn-no";
pub const CLASS_MUTED: &str = "small-muted";
pub const CLASS_CARD: &str = "card";
pub const CLASS_PRIMARY: &str = "primary";
pub const CLASS_HEART: &str = "heart";

// Proximity signals that make the evasive control dodge
pub const PROXIMITY_EVENTS: [&str; 4] = ["mouseenter", "focus", "pointerover", "click"];
pub const TOUCH_START_EVENT: &str = "touchstart";
