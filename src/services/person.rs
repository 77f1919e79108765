//! Person service
//!
//! Provides business logic for managing people in the ledger: creation with
//! uniqueness checks, active-person selection, and budget settings.

use crate::error::{SpeseError, SpeseResult};
use crate::models::{Ledger, Money, Person};

/// Service for person management
pub struct PersonService<'a> {
    ledger: &'a mut Ledger,
}

impl<'a> PersonService<'a> {
    /// Create a new person service
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    /// Add a person with a unique, non-empty name and make them active
    ///
    /// Fails with a `Duplicate` error if the name is taken and a `Validation`
    /// error if it is empty; the ledger is unchanged in both cases.
    pub fn add(&mut self, name: &str) -> SpeseResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SpeseError::Validation("Person name cannot be empty".into()));
        }
        if self.ledger.contains(name) {
            return Err(SpeseError::person_exists(name));
        }

        self.ledger.insert(name.to_string(), Person::new());
        self.ledger.set_active(Some(name.to_string()));
        Ok(())
    }

    /// Set the active person
    pub fn select(&mut self, name: &str) -> SpeseResult<()> {
        if !self.ledger.contains(name) {
            return Err(SpeseError::person_not_found(name));
        }
        self.ledger.set_active(Some(name.to_string()));
        Ok(())
    }

    /// Set a person's budget limit
    pub fn set_limit(&mut self, name: &str, limit: Money) -> SpeseResult<()> {
        if limit.is_negative() {
            return Err(SpeseError::Validation(
                "Budget limit cannot be negative".into(),
            ));
        }
        let person = self
            .ledger
            .person_mut(name)
            .ok_or_else(|| SpeseError::person_not_found(name))?;
        person.limite = limit;
        Ok(())
    }

    /// Set a person's unbounded-budget flag
    pub fn set_no_limit(&mut self, name: &str, no_limit: bool) -> SpeseResult<()> {
        let person = self
            .ledger
            .person_mut(name)
            .ok_or_else(|| SpeseError::person_not_found(name))?;
        person.nessun_limite = no_limit;
        Ok(())
    }
}
