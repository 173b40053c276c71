//! This crate contains all shared UI for the workspace: the contexts every
//! component reads, the section views, the modal dialogs and the client-side
//! validation behind them.

use dioxus::prelude::*;

pub const APP_CSS: Asset = asset!("/assets/styling/app.css");

mod context;
pub use context::{use_api, use_config, AppProvider};

mod auth;
pub use auth::{require_login, use_auth, AuthProvider, AuthState, LogoutLink};

pub mod notifications;
pub use notifications::{
    describe_failure, notify_error, notify_info, notify_success, use_notifications,
    NoticeLevel, NotificationStack, Notifications,
};

mod loading;
pub use loading::{use_busy, Busy, BusyGuard, LoadingOverlay};

mod modal;
pub use modal::{close_modal, open_modal, use_modal, ActiveModal, AuthMode, ModalHost};

mod refresh;
pub use refresh::{reload_friends, reload_groups, reload_history, use_revisions, Revisions};

pub mod dialogs;
pub mod export;
pub mod format;
pub mod validation;

mod navbar;
pub use navbar::Navbar;

pub mod views;
