//! Editable device selection backing the "Select devices" sheet
//!
//! The sheet edits a working copy of the enabled-device set and only hands it
//! back on confirm. An empty selection can be built but not confirmed; this
//! is the only place emptiness is guarded, the preference store accepts any
//! set.

use std::collections::BTreeSet;

use crate::device::{self, DeviceProfile};

/// Section of the device picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceGroup {
    Phones,
    Tablets,
}

impl DeviceGroup {
    pub fn title(&self) -> &'static str {
        match self {
            DeviceGroup::Phones => "iPhone",
            DeviceGroup::Tablets => "iPad",
        }
    }

    pub fn devices(&self) -> Vec<&'static DeviceProfile> {
        match self {
            DeviceGroup::Phones => device::phones(),
            DeviceGroup::Tablets => device::tablets(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceSelection {
    selected: BTreeSet<String>,
}

impl DeviceSelection {
    /// Start from the currently enabled set. Unknown ids are dropped.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            selected: ids
                .into_iter()
                .filter(|id| device::is_known(id.as_ref()))
                .map(|id| id.as_ref().to_string())
                .collect(),
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Flip one device. Unknown ids are ignored.
    pub fn toggle(&mut self, id: &str) {
        if !device::is_known(id) {
            return;
        }
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    /// Add every device of a group, keeping existing picks
    pub fn select_all(&mut self, group: DeviceGroup) {
        self.selected
            .extend(group.devices().into_iter().map(|d| d.id.to_string()));
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// The "Done" action is disabled while nothing is selected
    pub fn can_confirm(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Hand the selection back, or `None` if it cannot be confirmed
    pub fn confirm(self) -> Option<BTreeSet<String>> {
        self.can_confirm().then_some(self.selected)
    }

    pub fn selected(&self) -> &BTreeSet<String> {
        &self.selected
    }
}
