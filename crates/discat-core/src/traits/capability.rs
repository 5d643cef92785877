// SPDX-FileCopyrightText: 2026 Discat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversion from a concrete plugin into a boxed capability trait object.

use crate::traits::{
    Archive, ByteAddressableImage, Filesystem, Filter, FloppyImage, MediaImage, PartitionScheme,
    ReadOnlyFilesystem, WritableFloppyImage, WritableImage,
};

/// Unsizes a boxed concrete plugin into `Box<P>`, where `P` is one of the
/// capability trait objects (`dyn Filesystem`, `dyn Filter`, ...).
///
/// Implemented for every plugin type through the capability traits it
/// implements, so generic code can build `Box<dyn Capability>` from any `T`.
pub trait IntoCapability<P: ?Sized> {
    fn into_capability(self: Box<Self>) -> Box<P>;
}

macro_rules! impl_into_capability {
    ($($capability:ident),+ $(,)?) => {
        $(
            impl<T: $capability> IntoCapability<dyn $capability> for T {
                fn into_capability(self: Box<Self>) -> Box<dyn $capability> {
                    self
                }
            }
        )+
    };
}

impl_into_capability!(
    Filesystem,
    ReadOnlyFilesystem,
    PartitionScheme,
    MediaImage,
    WritableImage,
    Filter,
    FloppyImage,
    WritableFloppyImage,
    Archive,
    ByteAddressableImage,
);
