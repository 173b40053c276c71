mod shell;
pub use shell::AppShell;

mod sections;
pub use sections::{Friends, Groups, History, Home, NotFound};
