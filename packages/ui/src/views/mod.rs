mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod sign_in_prompt;
pub use sign_in_prompt::SignInPrompt;

mod home;
pub use home::Home;

mod friends;
pub use friends::FriendsSection;

mod groups;
pub use groups::GroupsSection;

mod history;
pub use history::HistorySection;

mod footer;
pub use footer::Footer;
