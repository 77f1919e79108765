//! Ledger model
//!
//! The ledger maps unique person names to their data and tracks which person
//! is currently active. It lives purely in session memory; the only
//! persistence is the explicit backup export/import in `services::backup`.

use std::collections::BTreeMap;

use super::person::Person;

/// In-memory mapping of person name to person, plus the active selector
///
/// The active selector is session state and is never serialized.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    persone: BTreeMap<String, Person>,
    attiva: Option<String>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of people in the ledger
    pub fn len(&self) -> usize {
        self.persone.len()
    }

    /// Whether the ledger has no people
    pub fn is_empty(&self) -> bool {
        self.persone.is_empty()
    }

    /// Whether a person with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.persone.contains_key(name)
    }

    /// Get a person by name
    pub fn person(&self, name: &str) -> Option<&Person> {
        self.persone.get(name)
    }

    /// Get a person by name, mutably
    pub fn person_mut(&mut self, name: &str) -> Option<&mut Person> {
        self.persone.get_mut(name)
    }

    /// Insert a person under a name
    ///
    /// The caller is responsible for uniqueness checks; see
    /// `services::PersonService::add`.
    pub fn insert(&mut self, name: String, person: Person) {
        self.persone.insert(name, person);
    }

    /// All person names, in map order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.persone.keys().map(String::as_str)
    }

    /// The full person map (backup export serializes this verbatim)
    pub fn persons(&self) -> &BTreeMap<String, Person> {
        &self.persone
    }

    /// The active person's name, if any
    pub fn active_name(&self) -> Option<&str> {
        self.attiva.as_deref()
    }

    /// The active person, if the selector points at an existing entry
    pub fn active_person(&self) -> Option<(&str, &Person)> {
        let name = self.attiva.as_deref()?;
        self.persone.get_key_value(name).map(|(n, p)| (n.as_str(), p))
    }

    /// Set the active selector
    pub fn set_active(&mut self, name: Option<String>) {
        self.attiva = name;
    }

    /// Replace the whole ledger with an imported person map
    ///
    /// Clears the active selector; the previous selection may not exist in
    /// the new mapping.
    pub fn replace(&mut self, persone: BTreeMap<String, Person>) {
        self.persone = persone;
        self.attiva = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ledger() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
        assert!(ledger.active_name().is_none());
        assert!(ledger.active_person().is_none());
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut ledger = Ledger::new();
        ledger.insert("Anna".into(), Person::new());

        assert!(ledger.contains("Anna"));
        assert!(!ledger.contains("Marco"));
        assert!(ledger.person("Anna").is_some());
    }

    #[test]
    fn test_active_selector() {
        let mut ledger = Ledger::new();
        ledger.insert("Anna".into(), Person::new());
        ledger.set_active(Some("Anna".into()));

        assert_eq!(ledger.active_name(), Some("Anna"));
        let (name, _) = ledger.active_person().unwrap();
        assert_eq!(name, "Anna");
    }

    #[test]
    fn test_active_selector_dangling() {
        let mut ledger = Ledger::new();
        ledger.set_active(Some("Nessuno".into()));

        assert_eq!(ledger.active_name(), Some("Nessuno"));
        assert!(ledger.active_person().is_none());
    }

    #[test]
    fn test_replace_clears_active() {
        let mut ledger = Ledger::new();
        ledger.insert("Anna".into(), Person::new());
        ledger.set_active(Some("Anna".into()));

        let mut replacement = BTreeMap::new();
        replacement.insert("Marco".into(), Person::new());
        ledger.replace(replacement);

        assert!(!ledger.contains("Anna"));
        assert!(ledger.contains("Marco"));
        assert!(ledger.active_name().is_none());
    }
}
