// SPDX-FileCopyrightText: 2026 Discat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ready-made plugin type handles for registry tests.
//!
//! Each helper is generic over the capability, so the same call builds a
//! handle for any catalog: `mock_type::<dyn Filter>("filters::Gzip", "GZip")`.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use uuid::Uuid;

use discat_core::{DiscatError, IntoCapability};
use discat_plugin::PluginType;

use crate::mock_plugin::MockPlugin;

/// Handle building a [`MockPlugin`] that reports `plugin_name`.
///
/// Every instance built by one handle shares the same id.
pub fn mock_type<P>(type_name: &str, plugin_name: &str) -> PluginType<P>
where
    P: ?Sized + 'static,
    MockPlugin: IntoCapability<P>,
{
    let plugin_name = plugin_name.to_string();
    let id = Uuid::new_v4();
    PluginType::new(type_name.to_string(), move || {
        Ok(Box::new(MockPlugin::with_id(plugin_name.clone(), id)).into_capability())
    })
}

/// Handle whose instances report an empty display name.
pub fn empty_name_type<P>(type_name: &str) -> PluginType<P>
where
    P: ?Sized + 'static,
    MockPlugin: IntoCapability<P>,
{
    mock_type(type_name, "")
}

/// Handle whose constructor always returns an error.
pub fn failing_type<P>(type_name: &str) -> PluginType<P>
where
    P: ?Sized + 'static,
{
    let owned = type_name.to_string();
    PluginType::new(type_name.to_string(), move || {
        Err(DiscatError::Construction {
            type_name: owned.clone(),
            message: "mock constructor failure".to_string(),
        })
    })
}

/// Handle whose constructor panics.
pub fn panicking_type<P>(type_name: &str) -> PluginType<P>
where
    P: ?Sized + 'static,
{
    PluginType::new(type_name.to_string(), || -> Result<Box<P>, DiscatError> {
        panic!("mock constructor panic")
    })
}

/// Like [`mock_type`], also returning a counter of constructor calls.
pub fn counting_type<P>(type_name: &str, plugin_name: &str) -> (PluginType<P>, Arc<AtomicUsize>)
where
    P: ?Sized + 'static,
    MockPlugin: IntoCapability<P>,
{
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let inner = mock_type::<P>(type_name, plugin_name);
    let handle = PluginType::new(type_name.to_string(), move || {
        counter.fetch_add(1, Ordering::SeqCst);
        inner.instantiate()
    });
    (handle, calls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use discat_core::{Archive, Filter};

    #[test]
    fn mock_type_builds_named_plugins_with_stable_id() {
        let handle = mock_type::<dyn Archive>("archives::Zip", "ZIP");
        let first = handle.instantiate().unwrap();
        let second = handle.instantiate().unwrap();

        assert_eq!(handle.type_name(), "archives::Zip");
        assert_eq!(first.name(), "ZIP");
        assert_eq!(first.id(), second.id());
    }

    #[test]
    fn failing_type_reports_construction_error() {
        let handle = failing_type::<dyn Filter>("filters::Broken");
        let err = handle.instantiate().err().unwrap();
        assert!(matches!(err, DiscatError::Construction { type_name, .. } if type_name == "filters::Broken"));
    }

    #[test]
    fn counting_type_counts_calls() {
        let (handle, calls) = counting_type::<dyn Filter>("filters::Gzip", "GZip");
        handle.instantiate().unwrap();
        handle.instantiate().unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
