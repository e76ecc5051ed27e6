//! Strategy registry for runtime variant selection.
//!
//! A [`Registry`] maps names to factories. Resolving a name builds a fresh
//! variant every time; nothing is pooled or cached. Use it when the variant is
//! chosen by configuration rather than in code.

use std::{collections::BTreeMap, sync::Arc};
use tenet_core::RegistryError;

/// A factory producing a boxed variant from construction arguments.
pub type Factory<C, A> = Arc<dyn Fn(A) -> Box<C> + Send + Sync>;

/// A registry of named variant factories.
///
/// `C` is the contract trait object (e.g. `dyn SoundMaker`), `A` the
/// arguments each factory takes (e.g. a connection string).
pub struct Registry<C: ?Sized, A = ()> {
    factories: BTreeMap<String, Factory<C, A>>,
}

impl<C: ?Sized, A> Registry<C, A> {
    /// Start building a registry.
    pub fn builder() -> RegistryBuilder<C, A> {
        RegistryBuilder::new()
    }

    /// Construct a fresh variant registered under `name`.
    pub fn resolve(&self, name: &str, args: A) -> Result<Box<C>, RegistryError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;
        tracing::debug!(name, "resolved variant");
        Ok(factory(args))
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Returns `true` if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Number of registered variants.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl<C: ?Sized> Registry<C, ()> {
    /// Construct a fresh variant for factories that take no arguments.
    pub fn get(&self, name: &str) -> Result<Box<C>, RegistryError> {
        self.resolve(name, ())
    }
}

impl<C: ?Sized, A> std::fmt::Debug for Registry<C, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

/// Builder for constructing a [`Registry`].
pub struct RegistryBuilder<C: ?Sized, A = ()> {
    factories: BTreeMap<String, Factory<C, A>>,
    allow_duplicates: bool,
}

impl<C: ?Sized, A> Default for RegistryBuilder<C, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized, A> RegistryBuilder<C, A> {
    /// Create a new empty registry builder.
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
            allow_duplicates: false,
        }
    }

    /// Allow [`insert`](Self::insert) to replace an earlier registration.
    pub fn allow_duplicates(mut self) -> Self {
        self.allow_duplicates = true;
        self
    }

    /// Register a factory, rejecting a name that is already taken.
    pub fn insert<F>(&mut self, name: impl Into<String>, factory: F) -> Result<(), RegistryError>
    where
        F: Fn(A) -> Box<C> + Send + Sync + 'static,
    {
        let name = name.into();
        if !self.allow_duplicates && self.factories.contains_key(&name) {
            return Err(RegistryError::DuplicateKey(name));
        }
        self.factories.insert(name, Arc::new(factory));
        Ok(())
    }

    /// Register a factory; a later registration under the same name wins.
    pub fn register<F>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn(A) -> Box<C> + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Arc::new(factory));
        self
    }

    /// Build the registry.
    pub fn build(self) -> Registry<C, A> {
        Registry {
            factories: self.factories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::{Cat, Dog};
    use tenet_core::SoundMaker;

    fn animals() -> RegistryBuilder<dyn SoundMaker> {
        let mut builder = RegistryBuilder::new();
        builder.insert("dog", |()| Box::new(Dog) as Box<dyn SoundMaker>).unwrap();
        builder.insert("cat", |()| Box::new(Cat) as Box<dyn SoundMaker>).unwrap();
        builder
    }

    #[test]
    fn resolves_by_name() {
        let registry = animals().build();
        assert_eq!(registry.get("dog").unwrap().make_sound().unwrap(), "Bark");
        assert_eq!(registry.get("cat").unwrap().make_sound().unwrap(), "Meow");
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["cat", "dog"]);
    }

    #[test]
    fn reports_size_and_membership() {
        let empty = RegistryBuilder::<dyn SoundMaker>::new().build();
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
        assert!(!empty.contains("dog"));

        let registry = animals().build();
        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("dog"));
        assert!(!registry.contains("Dog"));
    }

    #[test]
    fn unknown_name_is_not_found() {
        let registry = animals().build();
        assert_eq!(
            registry.get("cow").err(),
            Some(RegistryError::NotFound("cow".into()))
        );
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut builder = animals();
        let result = builder.insert("dog", |()| Box::new(Cat) as Box<dyn SoundMaker>);
        assert_eq!(result, Err(RegistryError::DuplicateKey("dog".into())));
    }

    #[test]
    fn allow_duplicates_lets_later_win() {
        let mut builder = animals().allow_duplicates();
        builder
            .insert("dog", |()| Box::new(Cat) as Box<dyn SoundMaker>)
            .unwrap();
        let registry = builder.build();
        assert_eq!(registry.get("dog").unwrap().make_sound().unwrap(), "Meow");
    }

    #[test]
    fn every_resolve_builds_a_fresh_instance() {
        let registry: Registry<Vec<u8>, u8> = Registry::builder()
            .register("bytes", |n: u8| Box::new(vec![n]))
            .build();

        let mut first = registry.resolve("bytes", 1).unwrap();
        first.push(9);
        let second = registry.resolve("bytes", 1).unwrap();

        assert_eq!(*first, vec![1, 9]);
        assert_eq!(*second, vec![1]);
    }
}
