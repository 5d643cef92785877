// SPDX-FileCopyrightText: 2026 Discat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Constructible plugin type handles.
//!
//! A [`PluginType`] pairs a type name with the constructor that builds a
//! fresh plugin of that type. Plugin sources hand these to the registry, and
//! type-entry catalogs hand them back to consumers.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use discat_core::{DiscatError, IntoCapability};

/// Constructor closure producing a boxed capability object.
pub type Constructor<P> = dyn Fn() -> Result<Box<P>, DiscatError> + Send + Sync;

/// Handle identifying a constructible plugin type of capability `P`.
///
/// Cloning is cheap; clones share the same constructor.
pub struct PluginType<P: ?Sized> {
    type_name: Cow<'static, str>,
    constructor: Arc<Constructor<P>>,
}

impl<P: ?Sized + 'static> PluginType<P> {
    /// Create a handle from an explicit constructor.
    pub fn new<F>(type_name: impl Into<Cow<'static, str>>, constructor: F) -> Self
    where
        F: Fn() -> Result<Box<P>, DiscatError> + Send + Sync + 'static,
    {
        Self {
            type_name: type_name.into(),
            constructor: Arc::new(constructor),
        }
    }

    /// Create a handle that builds `T` through its `Default` implementation.
    pub fn of<T>() -> Self
    where
        T: Default + IntoCapability<P> + 'static,
    {
        Self::new(std::any::type_name::<T>(), || {
            Ok(Box::new(T::default()).into_capability())
        })
    }

    /// Create a handle around a fallible constructor of a concrete plugin type.
    pub fn from_fn<T, F>(constructor: F) -> Self
    where
        T: IntoCapability<P> + 'static,
        F: Fn() -> Result<T, DiscatError> + Send + Sync + 'static,
    {
        Self::new(std::any::type_name::<T>(), move || {
            constructor().map(|plugin| Box::new(plugin).into_capability())
        })
    }
}

impl<P: ?Sized> PluginType<P> {
    /// Name of the type this handle constructs.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Build a new plugin instance.
    pub fn instantiate(&self) -> Result<Box<P>, DiscatError> {
        (self.constructor)()
    }
}

impl<P: ?Sized> Clone for PluginType<P> {
    fn clone(&self) -> Self {
        Self {
            type_name: self.type_name.clone(),
            constructor: Arc::clone(&self.constructor),
        }
    }
}

impl<P: ?Sized> fmt::Debug for PluginType<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginType")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use discat_core::{Archive, ArchiveEntry, Plugin, ReadSeek};
    use uuid::Uuid;

    #[derive(Default)]
    struct Tar;

    impl Plugin for Tar {
        fn name(&self) -> &str {
            "TAR"
        }

        fn id(&self) -> Uuid {
            Uuid::from_u128(0x7a7)
        }

        fn author(&self) -> &str {
            "Discat Contributors"
        }
    }

    impl Archive for Tar {
        fn identify(&self, _stream: &mut dyn ReadSeek) -> bool {
            false
        }

        fn entries(&self, _stream: &mut dyn ReadSeek) -> Result<Vec<ArchiveEntry>, DiscatError> {
            Ok(vec![])
        }
    }

    #[test]
    fn of_uses_default_constructor() {
        let handle = PluginType::<dyn Archive>::of::<Tar>();
        assert!(handle.type_name().ends_with("Tar"));

        let archive = handle.instantiate().unwrap();
        assert_eq!(archive.name(), "TAR");
    }

    #[test]
    fn from_fn_propagates_constructor_error() {
        let handle = PluginType::<dyn Archive>::from_fn(|| -> Result<Tar, DiscatError> {
            Err(DiscatError::Internal("no tables".into()))
        });

        let err = handle.instantiate().err().unwrap();
        assert!(err.to_string().contains("no tables"));
    }

    #[test]
    fn new_keeps_explicit_type_name() {
        let handle = PluginType::<dyn Archive>::new("archives::Tar", || {
            Ok(Box::new(Tar).into_capability())
        });
        assert_eq!(handle.type_name(), "archives::Tar");
    }

    #[test]
    fn each_instantiate_builds_a_fresh_plugin() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let built = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&built);
        let handle = PluginType::<dyn Archive>::new("Tar", move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(Tar).into_capability())
        });

        let clone = handle.clone();
        handle.instantiate().unwrap();
        clone.instantiate().unwrap();
        assert_eq!(built.load(Ordering::SeqCst), 2);
    }
}
