use std::fmt;

use did_resolver::traits::driver::DidDriver;

pub type GenericDriver = dyn DidDriver;

/// Drivers keyed by a unique name. Iteration follows insertion order, which is the order in
/// which drivers are tried.
#[derive(Default)]
pub struct Drivers {
    entries: Vec<(String, Box<GenericDriver>)>,
}

impl Drivers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a driver under `key`. A driver already registered under the same key is replaced
    /// in place, keeping its position, and returned.
    pub fn insert(&mut self, key: String, driver: Box<GenericDriver>) -> Option<Box<GenericDriver>> {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, driver)),
            None => {
                self.entries.push((key, driver));
                None
            }
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<Box<GenericDriver>> {
        let position = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(position).1)
    }

    pub fn get(&self, key: &str) -> Option<&GenericDriver> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, driver)| driver.as_ref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GenericDriver)> {
        self.entries
            .iter()
            .map(|(key, driver)| (key.as_str(), driver.as_ref()))
    }
}

impl FromIterator<(String, Box<GenericDriver>)> for Drivers {
    fn from_iter<I: IntoIterator<Item = (String, Box<GenericDriver>)>>(iter: I) -> Self {
        let mut drivers = Drivers::new();
        for (key, driver) in iter {
            drivers.insert(key, driver);
        }
        drivers
    }
}

impl fmt::Debug for Drivers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(key, driver)| (key, driver.name())))
            .finish()
    }
}
