//! Modal dialogs. Each one is rendered by [`crate::ModalHost`] when its
//! [`crate::ActiveModal`] variant is open.

mod auth_dialog;
mod balances;
mod expense;
pub mod field;
mod forgot_password;
mod friends;
mod group;
mod support;

pub use auth_dialog::AuthDialog;
pub use balances::{BalancesDialog, SettleUpDialog};
pub use expense::QuickExpenseDialog;
pub use forgot_password::ForgotPasswordDialog;
pub use friends::{AddFriendDialog, RemoveFriendDialog};
pub use group::{CreateGroupDialog, FriendPicker};
pub use support::SupportDialog;
