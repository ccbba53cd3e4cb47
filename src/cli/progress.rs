//! Terminal progress display for the export traversal

use std::sync::Mutex;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::client::{Application, Group, User};
use crate::export::ExportObserver;

const BAR_TEMPLATE: &str = "{msg} [{bar:30.cyan/blue}] {pos}/{len}";

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template(BAR_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-")
}

/// Nested progress bars: applications, then the current application's groups,
/// then the current group's members. Inner bars are cleared when they finish.
pub struct ProgressDisplay {
    multi: MultiProgress,
    apps: ProgressBar,
    groups: Mutex<Option<ProgressBar>>,
    members: Mutex<Option<ProgressBar>>,
}

impl ProgressDisplay {
    pub fn new() -> Self {
        let multi = MultiProgress::new();
        let apps = multi.add(ProgressBar::new(0));
        apps.set_style(bar_style());
        apps.set_message("Processing Applications");

        Self {
            multi,
            apps,
            groups: Mutex::new(None),
            members: Mutex::new(None),
        }
    }

    fn child(&self, len: usize, message: String) -> ProgressBar {
        let bar = self.multi.add(ProgressBar::new(len as u64));
        bar.set_style(bar_style());
        bar.set_message(message);
        bar
    }

    fn replace(slot: &Mutex<Option<ProgressBar>>, bar: Option<ProgressBar>) {
        if let Ok(mut current) = slot.lock() {
            if let Some(old) = std::mem::replace(&mut *current, bar) {
                old.finish_and_clear();
            }
        }
    }

    /// Stop drawing; leaves the application bar on screen.
    pub fn finish(&self) {
        Self::replace(&self.members, None);
        Self::replace(&self.groups, None);
        self.apps.finish();
    }
}

impl Default for ProgressDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportObserver for ProgressDisplay {
    fn apps_loaded(&self, count: usize) {
        self.apps.set_length(count as u64);
    }

    fn app_started(&self, app: &Application, groups: usize) {
        let label = app.label.as_deref().unwrap_or(&app.id);
        let bar = self.child(groups, format!("Processing Groups for {}", label));
        Self::replace(&self.groups, Some(bar));
    }

    fn group_started(&self, group_id: &str, group: &Group, members: usize) {
        let name = group.name().unwrap_or(group_id);
        let bar = self.child(members, format!("Processing Users in {}", name));
        Self::replace(&self.members, Some(bar));
    }

    fn member_exported(&self, _user: &User) {
        if let Ok(members) = self.members.lock() {
            if let Some(bar) = members.as_ref() {
                bar.inc(1);
            }
        }
    }

    fn group_finished(&self) {
        Self::replace(&self.members, None);
        if let Ok(groups) = self.groups.lock() {
            if let Some(bar) = groups.as_ref() {
                bar.inc(1);
            }
        }
    }

    fn app_finished(&self) {
        Self::replace(&self.groups, None);
        self.apps.inc(1);
    }
}
