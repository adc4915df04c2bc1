pub mod constants;
pub mod error;
pub mod evade;
pub mod particles;
pub mod state;
pub mod tasks;
pub mod theme;
pub mod tone;
pub mod validate;
pub mod view;

pub use error::AudioUnavailable;
pub use state::FormModel;
pub use theme::Theme;
