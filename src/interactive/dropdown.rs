use std::time::{Duration, Instant};

use crate::cascade::SelectOption;
use crate::constants::{SELECT_FALLBACK, SETTLE_MS};

/// A settled-but-unreported selection, waiting out the quiet period.
#[derive(Debug, Clone)]
struct PendingChange {
    value: String,
    since: Instant,
}

/// Dropdown selector driven by an externally supplied selected key.
///
/// The component owns its open/closed state and the adopted option
/// object; the selected key itself is controlled from outside. The
/// internal selection chases the external key one-directionally and
/// is re-reconciled whenever the key or the option list changes,
/// since option lists can arrive after the key was set.
///
/// Picking an option updates the internal selection immediately but
/// reports it outward only after a quiet period with no further
/// picks, so a rapid burst yields exactly one notification carrying
/// the final value (see [`DropdownList::poll_settled`]).
#[derive(Debug)]
pub struct DropdownList {
    options: Vec<SelectOption>,
    external: Option<String>,
    selected: Option<SelectOption>,
    is_open: bool,
    highlight: usize,
    placeholder: Option<String>,
    pub disabled: bool,
    pub error: bool,
    pub error_message: Option<String>,
    pending: Option<PendingChange>,
}

impl DropdownList {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            options: Vec::new(),
            external: None,
            selected: None,
            is_open: false,
            highlight: 0,
            placeholder: Some(placeholder.into()),
            disabled: false,
            error: false,
            error_message: None,
            pending: None,
        }
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn highlight(&self) -> usize {
        self.highlight
    }

    pub fn selected_value(&self) -> Option<&str> {
        self.selected.as_ref().map(|option| option.value.as_str())
    }

    /// Label shown on the closed trigger: the selected option's label,
    /// else the placeholder, else a literal fallback.
    pub fn trigger_label(&self) -> &str {
        self.selected
            .as_ref()
            .map(|option| option.label.as_str())
            .or(self.placeholder.as_deref())
            .unwrap_or(SELECT_FALLBACK)
    }

    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    /// Replace the option list, re-reconciling the adopted option if
    /// the list actually changed (a previously matching entry may have
    /// disappeared, or the external key may only now have a match).
    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        if options == self.options {
            return;
        }
        self.options = options;
        if self.highlight >= self.options.len() {
            self.highlight = self.options.len().saturating_sub(1);
        }
        self.reconcile();
    }

    /// Adopt a new externally supplied selected key. No-op when the
    /// key is unchanged, so an in-flight (not yet settled) pick is not
    /// clobbered by unrelated re-syncs.
    pub fn sync_selected(&mut self, external: Option<&str>) {
        if self.external.as_deref() == external {
            return;
        }
        self.external = external.map(str::to_string);
        self.reconcile();
    }

    fn reconcile(&mut self) {
        self.selected = match self.external.as_deref() {
            Some(key) => self.options.iter().find(|option| option.value == key).cloned(),
            None => None,
        };
    }

    /// Toggle the menu from the trigger. Disabled triggers never open.
    pub fn toggle(&mut self) {
        if self.disabled {
            return;
        }
        self.is_open = !self.is_open;
        if self.is_open {
            self.highlight = self
                .selected
                .as_ref()
                .and_then(|selected| {
                    self.options.iter().position(|option| option.value == selected.value)
                })
                .unwrap_or(0);
        }
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn highlight_up(&mut self) {
        if self.highlight > 0 {
            self.highlight -= 1;
        }
    }

    pub fn highlight_down(&mut self) {
        if self.highlight + 1 < self.options.len() {
            self.highlight += 1;
        }
    }

    /// Pick the highlighted option: adopts it, closes the menu, and
    /// arms the deferred outward notification.
    pub fn select_highlighted(&mut self, now: Instant) {
        if let Some(option) = self.options.get(self.highlight).cloned() {
            self.select(option, now);
        }
    }

    pub fn select(&mut self, option: SelectOption, now: Instant) {
        self.pending = Some(PendingChange {
            value: option.value.clone(),
            since: now,
        });
        self.selected = Some(option);
        self.is_open = false;
    }

    /// Drop an armed-but-undelivered pick. Used when an upstream
    /// change invalidates the selection this dropdown was about to
    /// report, so the stale value never reaches the consumer.
    pub fn clear_pending(&mut self) {
        self.pending = None;
    }

    /// Deliver the pending selection once the quiet period has passed.
    /// Each pick restarts the clock, so a burst collapses to a single
    /// notification carrying the last value; it is returned exactly
    /// once. Never yields anything if nothing was picked.
    pub fn poll_settled(&mut self, now: Instant) -> Option<String> {
        let settle = Duration::from_millis(SETTLE_MS);
        if self
            .pending
            .as_ref()
            .is_some_and(|pending| now.duration_since(pending.since) >= settle)
        {
            return self.pending.take().map(|pending| pending.value);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<SelectOption> {
        vec![
            SelectOption::new("AS", "Asia"),
            SelectOption::new("EU", "Europe"),
        ]
    }

    fn settled() -> Duration {
        Duration::from_millis(SETTLE_MS)
    }

    #[test]
    fn test_trigger_label_fallbacks() {
        let mut dropdown = DropdownList::new("Select a continent");
        assert_eq!(dropdown.trigger_label(), "Select a continent");

        dropdown.placeholder = None;
        assert_eq!(dropdown.trigger_label(), SELECT_FALLBACK);

        dropdown.placeholder = Some("Select a continent".to_string());
        dropdown.set_options(options());
        dropdown.sync_selected(Some("EU"));
        assert_eq!(dropdown.trigger_label(), "Europe");
    }

    #[test]
    fn test_reconcile_on_external_key_change() {
        let mut dropdown = DropdownList::new("Pick");
        dropdown.set_options(options());

        dropdown.sync_selected(Some("AS"));
        assert_eq!(dropdown.selected_value(), Some("AS"));

        dropdown.sync_selected(Some("XX"));
        assert_eq!(dropdown.selected_value(), None);
        assert_eq!(dropdown.trigger_label(), "Pick");

        dropdown.sync_selected(None);
        assert_eq!(dropdown.selected_value(), None);
    }

    #[test]
    fn test_reconcile_on_option_list_change() {
        let mut dropdown = DropdownList::new("Pick");
        // Key arrives before the option list does.
        dropdown.sync_selected(Some("EU"));
        assert_eq!(dropdown.selected_value(), None);

        dropdown.set_options(options());
        assert_eq!(dropdown.selected_value(), Some("EU"));

        // The matching option disappears again.
        dropdown.set_options(vec![SelectOption::new("AS", "Asia")]);
        assert_eq!(dropdown.selected_value(), None);
    }

    #[test]
    fn test_disabled_trigger_cannot_open() {
        let mut dropdown = DropdownList::new("Pick");
        dropdown.set_options(options());
        dropdown.disabled = true;

        dropdown.toggle();
        assert!(!dropdown.is_open());

        dropdown.disabled = false;
        dropdown.toggle();
        assert!(dropdown.is_open());
    }

    #[test]
    fn test_select_closes_menu() {
        let mut dropdown = DropdownList::new("Pick");
        dropdown.set_options(options());
        dropdown.toggle();
        dropdown.highlight_down();
        dropdown.select_highlighted(Instant::now());

        assert!(!dropdown.is_open());
        assert_eq!(dropdown.selected_value(), Some("EU"));
    }

    #[test]
    fn test_no_notification_without_selection() {
        let mut dropdown = DropdownList::new("Pick");
        dropdown.set_options(options());
        // External syncs never arm the outward notification.
        dropdown.sync_selected(Some("AS"));
        assert_eq!(dropdown.poll_settled(Instant::now() + settled()), None);
    }

    #[test]
    fn test_notification_waits_for_quiet_period() {
        let mut dropdown = DropdownList::new("Pick");
        dropdown.set_options(options());

        let start = Instant::now();
        dropdown.select(SelectOption::new("AS", "Asia"), start);

        assert_eq!(dropdown.poll_settled(start), None);
        assert_eq!(dropdown.poll_settled(start + settled()), Some("AS".to_string()));
        // Exactly once.
        assert_eq!(dropdown.poll_settled(start + settled() * 2), None);
    }

    #[test]
    fn test_burst_collapses_to_final_value() {
        let mut dropdown = DropdownList::new("Pick");
        dropdown.set_options(options());

        let start = Instant::now();
        let step = Duration::from_millis(10);
        dropdown.select(SelectOption::new("AS", "Asia"), start);
        dropdown.select(SelectOption::new("EU", "Europe"), start + step);
        dropdown.select(SelectOption::new("AS", "Asia"), start + step * 2);

        // Not yet quiet relative to the last pick.
        assert_eq!(dropdown.poll_settled(start + settled()), None);
        assert_eq!(
            dropdown.poll_settled(start + step * 2 + settled()),
            Some("AS".to_string())
        );
        assert_eq!(dropdown.poll_settled(start + step * 2 + settled() * 2), None);
    }

    #[test]
    fn test_clear_pending_drops_undelivered_pick() {
        let mut dropdown = DropdownList::new("Pick");
        dropdown.set_options(options());

        let start = Instant::now();
        dropdown.select(SelectOption::new("AS", "Asia"), start);
        dropdown.clear_pending();

        // The internal selection survives, but nothing is reported.
        assert_eq!(dropdown.selected_value(), Some("AS"));
        assert_eq!(dropdown.poll_settled(start + settled()), None);
    }

    #[test]
    fn test_open_menu_highlights_current_selection() {
        let mut dropdown = DropdownList::new("Pick");
        dropdown.set_options(options());
        dropdown.sync_selected(Some("EU"));

        dropdown.toggle();
        assert_eq!(dropdown.highlight(), 1);
    }
}
