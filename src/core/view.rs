// Text for the prompt and celebration cards. The DOM layer turns these into
// elements with `textContent`, so nothing here is ever parsed as markup.

pub const PROMPT_GREETING: &str = "Hey ";
pub const PROMPT_QUESTION: &str = "... do you like me?😉";
pub const CONFIRM_LABEL: &str = "Yes 💖";
pub const CONFIRM_ARIA: &str = "Yes";
pub const EVASIVE_LABEL: &str = "Kinda 😅";
pub const EVASIVE_ARIA: &str = "No";

pub const PANEL_HEADING: &str = "Yes, I knew it! 🎉😂😂";
pub const PANEL_MESSAGE: &str = "Hope your day was amazing 💝. Corporate work is not easy but the income is rewarding even when little. More will come.";
pub const AGAIN_LABEL: &str = "Aww ❤️";

/// Title of the prompt card, split around the user's name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptTitle<'a> {
    pub greeting: &'static str,
    pub name: &'a str,
    pub question: &'static str,
}

impl<'a> PromptTitle<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            greeting: PROMPT_GREETING,
            name,
            question: PROMPT_QUESTION,
        }
    }

    /// What a reader sees once the three text nodes are laid out.
    pub fn plain_text(&self) -> String {
        format!("{}{}{}", self.greeting, self.name, self.question)
    }
}
