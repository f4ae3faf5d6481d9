//! UI Components

pub mod choice_modal;
pub mod loading_screen;
pub mod menu_card;

pub use choice_modal::ChoiceModal;
pub use loading_screen::LoadingScreen;
pub use menu_card::MenuCard;
