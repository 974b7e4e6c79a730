use std::time::Instant;

use crate::cascade::CascadeController;
use crate::constants::WARNING_MESSAGE;
use crate::interactive::dropdown::DropdownList;
use crate::interactive::event::DataEvent;
use crate::interactive::keys::Action;
use crate::resource::ResourceAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    ContinentSelect,
    CountrySelect,
}

/// Top-level interactive state: the cascade controller plus one
/// dropdown per selection level. The dropdowns never talk to each
/// other; settled picks are routed through the cascade, and the
/// derived option lists and flags are pushed back down.
pub struct InteractiveApp {
    pub cascade: CascadeController,
    pub continent_select: DropdownList,
    pub country_select: DropdownList,
    pub focus: Focus,
    pub should_quit: bool,
}

impl InteractiveApp {
    pub fn new() -> Self {
        let mut app = Self {
            cascade: CascadeController::new(),
            continent_select: DropdownList::new("Select a continent"),
            country_select: DropdownList::new("Select a country"),
            focus: Focus::ContinentSelect,
            should_quit: false,
        };
        app.sync_lists();
        app
    }

    fn focused_dropdown_mut(&mut self) -> &mut DropdownList {
        match self.focus {
            Focus::ContinentSelect => &mut self.continent_select,
            Focus::CountrySelect => &mut self.country_select,
        }
    }

    pub fn focused_dropdown(&self) -> &DropdownList {
        match self.focus {
            Focus::ContinentSelect => &self.continent_select,
            Focus::CountrySelect => &self.country_select,
        }
    }

    pub fn menu_open(&self) -> bool {
        self.continent_select.is_open() || self.country_select.is_open()
    }

    pub fn handle_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::SwitchPanel => {
                self.focus = match self.focus {
                    Focus::ContinentSelect => Focus::CountrySelect,
                    Focus::CountrySelect => Focus::ContinentSelect,
                };
            }
            Action::Toggle => self.focused_dropdown_mut().toggle(),
            Action::MoveUp => self.focused_dropdown_mut().highlight_up(),
            Action::MoveDown => self.focused_dropdown_mut().highlight_down(),
            Action::Confirm => {
                let dropdown = self.focused_dropdown_mut();
                if dropdown.is_open() {
                    dropdown.select_highlighted(now);
                } else {
                    dropdown.toggle();
                }
            }
            Action::Cancel => self.focused_dropdown_mut().close(),
            Action::None => {}
        }
    }

    /// Apply a fetch completion and refresh the derived lists.
    pub fn on_data_event(&mut self, event: DataEvent) {
        match event {
            DataEvent::ContinentsLoaded(payload) => {
                self.cascade.dispatch_continents(ResourceAction::Loaded(payload));
            }
            DataEvent::CountriesLoaded(payload) => {
                self.cascade.dispatch_countries(ResourceAction::Loaded(payload));
            }
        }
        self.sync_lists();
    }

    /// Deliver any settled dropdown picks into the cascade. A settled
    /// continent pick resets the country selection before the country
    /// list is recomputed, so a stale country is never displayed
    /// against the new continent. Any country pick still waiting out
    /// its quiet period at that moment belongs to the old continent's
    /// list and is discarded with the reset; otherwise it would be
    /// delivered afterwards and pair the old country with the new
    /// continent.
    pub fn poll_settled(&mut self, now: Instant) {
        if let Some(code) = self.continent_select.poll_settled(now) {
            self.cascade.select_continent(Some(code));
            self.country_select.clear_pending();
            self.sync_lists();
        }
        if let Some(code) = self.country_select.poll_settled(now) {
            self.cascade.select_country(Some(code));
            self.sync_lists();
        }
    }

    /// Push derived state down into the dropdowns: option lists,
    /// externally controlled selected keys, and the disabled/error
    /// flags of the country selector.
    pub fn sync_lists(&mut self) {
        self.continent_select.set_options(self.cascade.continent_options());
        self.continent_select
            .sync_selected(self.cascade.selected_continent());

        self.country_select.set_options(self.cascade.country_options());
        self.country_select
            .sync_selected(self.cascade.selected_country());
        self.country_select.disabled = self.cascade.selected_continent().is_none();

        let warning = self.cascade.warning();
        self.country_select.error = warning;
        self.country_select.error_message =
            warning.then(|| WARNING_MESSAGE.to_string());
    }
}

impl Default for InteractiveApp {
    fn default() -> Self {
        Self::new()
    }
}
