//! Application state definitions

use super::forms::{Acknowledgement, Field, FormPanel, FormSettings, VariantKind};
use std::collections::VecDeque;

/// Focusable element inside a form panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Input(Field),
    Submit,
}

impl Slot {
    /// Tab order within a panel
    pub const ORDER: [Slot; 3] = [
        Slot::Input(Field::Username),
        Slot::Input(Field::Password),
        Slot::Submit,
    ];

    pub fn field(&self) -> Option<Field> {
        match self {
            Self::Input(field) => Some(*field),
            Self::Submit => None,
        }
    }
}

/// Which panel and element has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Focus {
    pub panel: usize,
    pub slot: Slot,
}

impl Default for Focus {
    fn default() -> Self {
        Self {
            panel: 0,
            slot: Slot::Input(Field::Username),
        }
    }
}

impl Focus {
    fn flat_index(&self) -> usize {
        let slot = Slot::ORDER
            .iter()
            .position(|s| *s == self.slot)
            .unwrap_or(0);
        self.panel * Slot::ORDER.len() + slot
    }

    fn from_flat_index(index: usize) -> Self {
        Self {
            panel: index / Slot::ORDER.len(),
            slot: Slot::ORDER[index % Slot::ORDER.len()],
        }
    }

    /// Next element across all panels, wrapping around
    pub fn next(&self, panel_count: usize) -> Self {
        let total = panel_count * Slot::ORDER.len();
        if total == 0 {
            return *self;
        }
        Self::from_flat_index((self.flat_index() + 1) % total)
    }

    /// Previous element across all panels, wrapping around
    pub fn prev(&self, panel_count: usize) -> Self {
        let total = panel_count * Slot::ORDER.len();
        if total == 0 {
            return *self;
        }
        let current = self.flat_index();
        let index = if current == 0 { total - 1 } else { current - 1 };
        Self::from_flat_index(index)
    }
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    pub panels: Vec<FormPanel>,
    pub focus: Focus,
    /// Acknowledgements waiting to be dismissed, oldest first
    pub alerts: VecDeque<Acknowledgement>,
    /// Bumped on every remount so late completions can be recognized
    pub generation: u64,
    pub settings: FormSettings,
}

impl AppState {
    pub fn new(settings: FormSettings) -> Self {
        Self {
            panels: Self::mount_panels(&settings),
            focus: Focus::default(),
            alerts: VecDeque::new(),
            generation: 0,
            settings,
        }
    }

    fn mount_panels(settings: &FormSettings) -> Vec<FormPanel> {
        VariantKind::ALL
            .into_iter()
            .map(|kind| FormPanel::mount(kind, settings))
            .collect()
    }

    /// Throw away every panel and mount fresh ones
    pub fn remount(&mut self) {
        self.panels = Self::mount_panels(&self.settings);
        self.focus = Focus::default();
        self.alerts.clear();
        self.generation += 1;
    }

    pub fn focused_panel(&self) -> Option<&FormPanel> {
        self.panels.get(self.focus.panel)
    }

    pub fn focused_panel_mut(&mut self) -> Option<&mut FormPanel> {
        self.panels.get_mut(self.focus.panel)
    }

    /// Focus slot within `panel`, if that panel holds focus
    pub fn focus_in(&self, panel: usize) -> Option<Slot> {
        (self.focus.panel == panel).then_some(self.focus.slot)
    }

    pub fn push_alert(&mut self, ack: Acknowledgement) {
        self.alerts.push_back(ack);
    }

    pub fn has_alerts(&self) -> bool {
        !self.alerts.is_empty()
    }

    pub fn current_alert(&self) -> Option<&Acknowledgement> {
        self.alerts.front()
    }

    pub fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(FormSettings::default())
    }
}
