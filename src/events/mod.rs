pub mod celebrate;
pub mod pointer;
pub mod submit;
pub mod theme;
