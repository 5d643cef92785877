// SPDX-FileCopyrightText: 2026 Discat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Archive reader trait.

use crate::error::DiscatError;
use crate::traits::filter::ReadSeek;
use crate::traits::plugin::Plugin;
use crate::types::ArchiveEntry;

/// Reader for an archive format.
pub trait Archive: Plugin {
    /// Returns true if the stream holds an archive of this format.
    fn identify(&self, stream: &mut dyn ReadSeek) -> bool;

    /// Lists the members of the archive.
    fn entries(&self, stream: &mut dyn ReadSeek) -> Result<Vec<ArchiveEntry>, DiscatError>;
}
