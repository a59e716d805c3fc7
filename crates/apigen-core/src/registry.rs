use indexmap::IndexMap;

use crate::error::ProfileError;
use crate::profile::GeneratorProfile;

/// Name-keyed collection of generator profiles the host can dispatch to.
///
/// Registration order is preserved so `--help` style listings stay stable.
#[derive(Default)]
pub struct ProfileRegistry {
    profiles: IndexMap<String, Box<dyn GeneratorProfile>>,
}

impl ProfileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a profile under its own short name. A later registration
    /// with the same name replaces the earlier one.
    pub fn register(&mut self, profile: Box<dyn GeneratorProfile>) {
        let name = profile.name().to_string();
        log::debug!("registered generator profile `{name}`");
        self.profiles.insert(name, profile);
    }

    /// Resolve a profile by short name.
    pub fn get(&self, name: &str) -> Result<&dyn GeneratorProfile, ProfileError> {
        self.profiles
            .get(name)
            .map(|profile| profile.as_ref())
            .ok_or_else(|| ProfileError::UnknownProfile(name.to_string()))
    }

    /// Registered profile names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(|name| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
