use crate::entry::SearchEntry;
use crate::media::MediaItem;
use crate::providers::online_search::OnlineSearchProvider;
use crate::settings::Settings;
use std::collections::HashSet;

pub trait Provider: Send + Sync {
    /// Return trailer entries for the given media item
    fn search<'a>(&self, item: &'a MediaItem) -> Vec<SearchEntry<'a>>;
    /// Name of the provider, also its key in the settings file
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// Whether the provider finds trailers on disk rather than online.
    fn is_local(&self) -> bool {
        false
    }

    fn default_settings(&self) -> Option<serde_json::Value> {
        None
    }

    fn apply_settings(&mut self, _value: &serde_json::Value) {}
}

/// A manager that holds providers
#[derive(Default)]
pub struct ProviderManager {
    providers: Vec<Box<dyn Provider>>,
    enabled: Option<HashSet<String>>,
}

impl ProviderManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Manager with every built-in provider registered using its default
    /// configuration.
    pub fn with_builtin() -> Self {
        let mut manager = Self::new();
        manager.register(Box::new(OnlineSearchProvider::default()));
        manager
    }

    pub fn register(&mut self, provider: Box<dyn Provider>) {
        self.providers.push(provider);
    }

    pub fn names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.enabled.as_ref().map_or(true, |set| set.contains(name))
    }

    pub fn apply_settings(&mut self, settings: &Settings) {
        self.enabled = settings.enabled_providers.clone();
        for p in &mut self.providers {
            if let Some(value) = settings.provider_settings.get(p.name()) {
                p.apply_settings(value);
            }
        }
    }

    pub fn search<'a>(&self, item: &'a MediaItem) -> Vec<SearchEntry<'a>> {
        let mut entries = Vec::new();
        for p in &self.providers {
            if !self.is_enabled(p.name()) {
                tracing::debug!(provider = p.name(), "provider disabled; skipping");
                continue;
            }
            entries.extend(p.search(item));
        }
        entries
    }
}
