use crate::constants::WARNING_COUNTRY;
use crate::models::{Continents, Countries};
use crate::resource::{AsyncResource, ResourceAction};

/// A presentation-ready (value, label) pair derived from a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Orchestrates the two catalog resources and the dependent
/// continent -> country selection pair. Everything derived (option
/// lists, warning, sentence) is recomputed from current state on
/// demand, never cached.
#[derive(Debug, Default)]
pub struct CascadeController {
    continents: AsyncResource<Continents>,
    countries: AsyncResource<Countries>,
    selected_continent: Option<String>,
    selected_country: Option<String>,
}

impl CascadeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn continents(&self) -> &AsyncResource<Continents> {
        &self.continents
    }

    pub fn countries(&self) -> &AsyncResource<Countries> {
        &self.countries
    }

    pub fn dispatch_continents(&mut self, action: ResourceAction<Continents>) {
        self.continents.apply(action);
    }

    pub fn dispatch_countries(&mut self, action: ResourceAction<Countries>) {
        self.countries.apply(action);
    }

    pub fn selected_continent(&self) -> Option<&str> {
        self.selected_continent.as_deref()
    }

    pub fn selected_country(&self) -> Option<&str> {
        self.selected_country.as_deref()
    }

    /// Select a continent. The country selection is cleared in the
    /// same step so no observer can see the old country paired with
    /// the new continent.
    pub fn select_continent(&mut self, code: Option<String>) {
        self.selected_continent = code;
        self.selected_country = None;
    }

    pub fn select_country(&mut self, code: Option<String>) {
        self.selected_country = code;
    }

    /// One option per continent catalog entry, empty until loaded.
    pub fn continent_options(&self) -> Vec<SelectOption> {
        match self.continents.data() {
            Some(catalog) => catalog
                .iter()
                .map(|(code, name)| SelectOption::new(code.as_str(), name.as_str()))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Country options filtered to the selected continent. Empty when
    /// no continent is selected, whatever the catalog's load status.
    pub fn country_options(&self) -> Vec<SelectOption> {
        let Some(continent) = self.selected_continent.as_deref() else {
            return Vec::new();
        };

        match self.countries.data() {
            Some(catalog) => catalog
                .iter()
                .filter(|(_, entry)| entry.continent == continent)
                .map(|(code, entry)| SelectOption::new(code.as_str(), entry.name.as_str()))
                .collect(),
            None => Vec::new(),
        }
    }

    /// True iff the selected country is the warning sentinel.
    pub fn warning(&self) -> bool {
        self.selected_country.as_deref() == Some(WARNING_COUNTRY)
    }

    /// The derived display sentence. Empty unless both selections are
    /// set; names are looked up from the loaded catalogs at read time,
    /// and a missing entry renders as a blank name rather than failing.
    pub fn sentence(&self) -> String {
        let (Some(continent), Some(country)) = (
            self.selected_continent.as_deref(),
            self.selected_country.as_deref(),
        ) else {
            return String::new();
        };

        let continent_name = self
            .continents
            .data()
            .and_then(|catalog| catalog.get(continent))
            .map(String::as_str)
            .unwrap_or("");
        let country_name = self
            .countries
            .data()
            .and_then(|catalog| catalog.get(country))
            .map(|entry| entry.name.as_str())
            .unwrap_or("");

        format!("I am going to {} in {}!", country_name, continent_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CountryEntry;

    fn sample_continents() -> Continents {
        let mut catalog = Continents::new();
        catalog.insert("AS".to_string(), "Asia".to_string());
        catalog.insert("EU".to_string(), "Europe".to_string());
        catalog
    }

    fn sample_countries() -> Countries {
        let mut catalog = Countries::new();
        catalog.insert("KP".to_string(), CountryEntry::new("North Korea", "AS"));
        catalog.insert("FR".to_string(), CountryEntry::new("France", "EU"));
        catalog
    }

    fn loaded_controller() -> CascadeController {
        let mut cascade = CascadeController::new();
        cascade.dispatch_continents(ResourceAction::Loading);
        cascade.dispatch_countries(ResourceAction::Loading);
        cascade.dispatch_continents(ResourceAction::Loaded(Some(sample_continents())));
        cascade.dispatch_countries(ResourceAction::Loaded(Some(sample_countries())));
        cascade
    }

    #[test]
    fn test_continent_options_empty_until_loaded() {
        let mut cascade = CascadeController::new();
        assert!(cascade.continent_options().is_empty());

        cascade.dispatch_continents(ResourceAction::Loading);
        assert!(cascade.continent_options().is_empty());

        cascade.dispatch_continents(ResourceAction::Loaded(Some(sample_continents())));
        let options = cascade.continent_options();
        assert_eq!(
            options,
            vec![
                SelectOption::new("AS", "Asia"),
                SelectOption::new("EU", "Europe"),
            ]
        );
    }

    #[test]
    fn test_country_options_empty_without_continent() {
        let cascade = loaded_controller();
        assert!(cascade.country_options().is_empty());
    }

    #[test]
    fn test_country_options_filtered_by_continent() {
        let mut cascade = loaded_controller();
        cascade.select_continent(Some("AS".to_string()));

        assert_eq!(
            cascade.country_options(),
            vec![SelectOption::new("KP", "North Korea")]
        );

        cascade.select_continent(Some("EU".to_string()));
        assert_eq!(
            cascade.country_options(),
            vec![SelectOption::new("FR", "France")]
        );
    }

    #[test]
    fn test_country_options_visible_after_late_catalog_load() {
        let mut cascade = CascadeController::new();
        cascade.dispatch_continents(ResourceAction::Loaded(Some(sample_continents())));
        cascade.select_continent(Some("AS".to_string()));

        // Country catalog finishes loading after the continent was picked.
        assert!(cascade.country_options().is_empty());
        cascade.dispatch_countries(ResourceAction::Loaded(Some(sample_countries())));
        assert_eq!(
            cascade.country_options(),
            vec![SelectOption::new("KP", "North Korea")]
        );
    }

    #[test]
    fn test_continent_change_resets_country() {
        let mut cascade = loaded_controller();
        cascade.select_continent(Some("AS".to_string()));
        cascade.select_country(Some("KP".to_string()));
        assert_eq!(cascade.selected_country(), Some("KP"));

        cascade.select_continent(Some("EU".to_string()));
        assert_eq!(cascade.selected_country(), None);

        // Also when the continent is cleared entirely.
        cascade.select_country(Some("FR".to_string()));
        cascade.select_continent(None);
        assert_eq!(cascade.selected_country(), None);
    }

    #[test]
    fn test_warning_only_for_sentinel_country() {
        let mut cascade = loaded_controller();
        assert!(!cascade.warning());

        cascade.select_continent(Some("EU".to_string()));
        cascade.select_country(Some("FR".to_string()));
        assert!(!cascade.warning());

        cascade.select_continent(Some("AS".to_string()));
        cascade.select_country(Some("KP".to_string()));
        assert!(cascade.warning());

        cascade.select_continent(Some("EU".to_string()));
        assert!(!cascade.warning());
    }

    #[test]
    fn test_sentence_requires_both_selections() {
        let mut cascade = loaded_controller();
        assert_eq!(cascade.sentence(), "");

        cascade.select_continent(Some("AS".to_string()));
        assert_eq!(cascade.sentence(), "");

        cascade.select_country(Some("KP".to_string()));
        assert_eq!(cascade.sentence(), "I am going to North Korea in Asia!");

        cascade.select_continent(Some("EU".to_string()));
        assert_eq!(cascade.sentence(), "");
    }

    #[test]
    fn test_sentence_blank_names_for_missing_entries() {
        let mut cascade = CascadeController::new();
        cascade.select_continent(Some("AS".to_string()));
        cascade.select_country(Some("KP".to_string()));

        // Neither catalog has loaded: the template renders, names blank.
        assert_eq!(cascade.sentence(), "I am going to  in !");
    }
}
