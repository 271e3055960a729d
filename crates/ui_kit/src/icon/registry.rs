//! Name-to-definition icon registry and its shared, async-loading handle.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use futures::future::join_all;
use leptos::logging;
use platform_host::{AssetFetchError, AssetFetcher};

use super::{parse_svg_markup, IconDefinition, IconError, IconName};

#[derive(Debug, Clone, Default, PartialEq)]
/// Mapping from icon name to definition.
///
/// Registering an existing name replaces its definition. Entries are never removed.
pub struct IconRegistry {
    icons: HashMap<String, IconDefinition>,
}

impl IconRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry seeded with every [`IconName`] under its kebab-case key.
    pub fn with_builtin_icons() -> Self {
        let mut registry = Self::new();
        registry.register_many(
            IconName::ALL
                .into_iter()
                .map(|name| (name.as_str(), name.builtin_definition())),
        );
        registry
    }

    /// Inserts or replaces the definition registered under `name`.
    pub fn register(&mut self, name: impl Into<String>, definition: IconDefinition) {
        self.icons.insert(name.into(), definition);
    }

    /// Registers every entry in order; later duplicates win.
    pub fn register_many<N, I>(&mut self, entries: I)
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, IconDefinition)>,
    {
        for (name, definition) in entries {
            self.register(name, definition);
        }
    }

    /// Returns the definition registered under `name`.
    pub fn get(&self, name: &str) -> Option<&IconDefinition> {
        self.icons.get(name)
    }

    /// Returns whether `name` is registered.
    pub fn has(&self, name: &str) -> bool {
        self.icons.contains_key(name)
    }

    /// Returns a sorted snapshot of all registered names.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.icons.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered icons.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Returns whether the registry has no icons.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Parses `markup` and registers the result under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`IconError::Markup`] and leaves the registry unchanged when the markup is
    /// malformed. The failure is also logged.
    pub fn register_from_markup(
        &mut self,
        name: impl Into<String>,
        markup: &str,
    ) -> Result<(), IconError> {
        let name = name.into();
        match parse_svg_markup(markup) {
            Ok(definition) => {
                self.register(name, definition);
                Ok(())
            }
            Err(err) => {
                logging::warn!("icon `{name}` was not registered: {err}");
                Err(err)
            }
        }
    }

    /// Registers each markup entry, logging and skipping malformed ones.
    ///
    /// Returns how many entries were registered.
    pub fn register_many_from_markup<N, M, I>(&mut self, entries: I) -> usize
    where
        N: Into<String>,
        M: AsRef<str>,
        I: IntoIterator<Item = (N, M)>,
    {
        entries
            .into_iter()
            .map(|(name, markup)| self.register_from_markup(name, markup.as_ref()))
            .filter(Result::is_ok)
            .count()
    }
}

#[derive(Debug, Clone, Default)]
/// Cloneable handle to one [`IconRegistry`] shared by startup code and rendering components.
pub struct SharedIconRegistry {
    inner: Rc<RefCell<IconRegistry>>,
}

impl From<IconRegistry> for SharedIconRegistry {
    fn from(registry: IconRegistry) -> Self {
        Self {
            inner: Rc::new(RefCell::new(registry)),
        }
    }
}

impl SharedIconRegistry {
    /// Wraps `registry` in a shared handle.
    pub fn new(registry: IconRegistry) -> Self {
        registry.into()
    }

    /// Creates a shared registry seeded with the built-in icons.
    pub fn with_builtin_icons() -> Self {
        IconRegistry::with_builtin_icons().into()
    }

    /// See [`IconRegistry::register`].
    pub fn register(&self, name: impl Into<String>, definition: IconDefinition) {
        self.inner.borrow_mut().register(name, definition);
    }

    /// See [`IconRegistry::register_many`].
    pub fn register_many<N, I>(&self, entries: I)
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, IconDefinition)>,
    {
        self.inner.borrow_mut().register_many(entries);
    }

    /// Returns a copy of the definition registered under `name`.
    pub fn get(&self, name: &str) -> Option<IconDefinition> {
        self.inner.borrow().get(name).cloned()
    }

    /// See [`IconRegistry::has`].
    pub fn has(&self, name: &str) -> bool {
        self.inner.borrow().has(name)
    }

    /// See [`IconRegistry::names`].
    pub fn names(&self) -> Vec<String> {
        self.inner.borrow().names()
    }

    /// See [`IconRegistry::len`].
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// See [`IconRegistry::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// See [`IconRegistry::register_from_markup`].
    ///
    /// # Errors
    ///
    /// Returns [`IconError::Markup`] when the markup is malformed.
    pub fn register_from_markup(
        &self,
        name: impl Into<String>,
        markup: &str,
    ) -> Result<(), IconError> {
        self.inner.borrow_mut().register_from_markup(name, markup)
    }

    /// See [`IconRegistry::register_many_from_markup`].
    pub fn register_many_from_markup<N, M, I>(&self, entries: I) -> usize
    where
        N: Into<String>,
        M: AsRef<str>,
        I: IntoIterator<Item = (N, M)>,
    {
        self.inner.borrow_mut().register_many_from_markup(entries)
    }

    /// Fetches SVG markup from `url` and registers it under `name`.
    ///
    /// # Errors
    ///
    /// Returns the fetch or parse failure after logging it. The registry is unchanged on error.
    pub async fn register_from_url(
        &self,
        fetcher: &dyn AssetFetcher,
        name: impl Into<String>,
        url: &str,
    ) -> Result<(), IconError> {
        let name = name.into();
        match load_icon_definition(fetcher, url).await {
            Ok(definition) => {
                self.register(name, definition);
                Ok(())
            }
            Err(err) => {
                logging::warn!("icon `{name}` was not registered: {err}");
                Err(err)
            }
        }
    }

    /// Fetches every `(name, url)` entry concurrently and registers each success as it lands.
    ///
    /// Failures are logged and skipped. Returns the failed names with their errors, in input
    /// order.
    pub async fn register_many_from_urls<N, U, I>(
        &self,
        fetcher: &dyn AssetFetcher,
        entries: I,
    ) -> Vec<(String, IconError)>
    where
        N: Into<String>,
        U: AsRef<str>,
        I: IntoIterator<Item = (N, U)>,
    {
        let entries: Vec<(String, U)> = entries
            .into_iter()
            .map(|(name, url)| (name.into(), url))
            .collect();
        let results = join_all(entries.iter().map(|(name, url)| async move {
            self.register_from_url(fetcher, name.as_str(), url.as_ref())
                .await
                .map_err(|err| (name.clone(), err))
        }))
        .await;
        results.into_iter().filter_map(Result::err).collect()
    }
}

/// Fetches `url` and parses the body as an icon definition.
///
/// # Errors
///
/// Returns [`IconError::Status`] for a non-success response, [`IconError::Fetch`] when the
/// request fails, and [`IconError::Markup`] when the body is not valid SVG.
pub async fn load_icon_definition(
    fetcher: &dyn AssetFetcher,
    url: &str,
) -> Result<IconDefinition, IconError> {
    let markup = fetcher.fetch_text(url).await.map_err(|err| match err {
        AssetFetchError::Status(status) => IconError::Status {
            url: url.to_string(),
            status,
        },
        AssetFetchError::Transport(reason) => IconError::Fetch {
            url: url.to_string(),
            reason,
        },
    })?;
    parse_svg_markup(&markup)
}
