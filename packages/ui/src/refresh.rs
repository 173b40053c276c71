use dioxus::prelude::*;

/// Bumped after a mutation so the matching section reloads its list.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Revisions {
    pub friends: u32,
    pub groups: u32,
    pub history: u32,
}

pub fn use_revisions() -> Signal<Revisions> {
    use_context::<Signal<Revisions>>()
}

pub fn reload_friends(revisions: &mut Signal<Revisions>) {
    revisions.write().friends += 1;
}

pub fn reload_groups(revisions: &mut Signal<Revisions>) {
    revisions.write().groups += 1;
}

pub fn reload_history(revisions: &mut Signal<Revisions>) {
    revisions.write().history += 1;
}
