// SPDX-FileCopyrightText: 2026 Discat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock plugin for deterministic testing.
//!
//! `MockPlugin` implements every capability trait, so one type can stand in
//! for a plugin of any category. Format operations behave like an empty,
//! well-formed medium: identification always succeeds, listings are empty and
//! reads return zeroed data.

use std::io::{Cursor, Read, Seek, SeekFrom};
use std::path::Path;

use uuid::Uuid;

use discat_core::{
    Archive, ArchiveEntry, ByteAddressableImage, DataStream, DiscatError, Filesystem, Filter,
    FloppyGeometry, FloppyImage, ImageInfo, MediaImage, Partition, PartitionScheme, Plugin,
    ReadOnlyFilesystem, ReadSeek, WritableFloppyImage, WritableImage,
};

/// Sector size reported by mock media.
const SECTOR_SIZE: u32 = 512;

/// A plugin usable in any catalog.
#[derive(Debug, Clone)]
pub struct MockPlugin {
    name: String,
    id: Uuid,
    author: String,
    image: ImageInfo,
    mounted: bool,
}

impl MockPlugin {
    /// Create a mock with the given display name and a random id.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(name, Uuid::new_v4())
    }

    /// Create a mock with a fixed id.
    pub fn with_id(name: impl Into<String>, id: Uuid) -> Self {
        Self {
            name: name.into(),
            id,
            author: "Discat Test Suite".to_string(),
            image: ImageInfo::default(),
            mounted: false,
        }
    }

    /// Replace the reported author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

impl Default for MockPlugin {
    fn default() -> Self {
        Self::with_id("Mock", Uuid::nil())
    }
}

impl Plugin for MockPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn author(&self) -> &str {
        &self.author
    }
}

impl Filesystem for MockPlugin {
    fn identify(&mut self, _image: &mut dyn MediaImage, _partition: &Partition) -> bool {
        true
    }

    fn information(
        &mut self,
        _image: &mut dyn MediaImage,
        partition: &Partition,
    ) -> Result<String, DiscatError> {
        Ok(format!("{} volume of {} sectors", self.name, partition.length))
    }
}

impl ReadOnlyFilesystem for MockPlugin {
    fn identify(&mut self, _image: &mut dyn MediaImage, _partition: &Partition) -> bool {
        true
    }

    fn mount(
        &mut self,
        _image: &mut dyn MediaImage,
        _partition: &Partition,
    ) -> Result<(), DiscatError> {
        self.mounted = true;
        Ok(())
    }

    fn unmount(&mut self) -> Result<(), DiscatError> {
        self.mounted = false;
        Ok(())
    }

    fn read_dir(&self, _path: &str) -> Result<Vec<String>, DiscatError> {
        if self.mounted {
            Ok(Vec::new())
        } else {
            Err(DiscatError::InvalidData {
                message: "filesystem not mounted".to_string(),
            })
        }
    }
}

impl PartitionScheme for MockPlugin {
    fn partitions(
        &mut self,
        image: &mut dyn MediaImage,
        sector_offset: u64,
    ) -> Option<Vec<Partition>> {
        let sectors = MediaImage::info(image).sectors;
        if sectors <= sector_offset {
            return None;
        }
        Some(vec![Partition {
            sequence: 0,
            start: sector_offset,
            length: sectors - sector_offset,
            kind: "mock".to_string(),
            scheme: self.name.clone(),
        }])
    }
}

impl MediaImage for MockPlugin {
    fn identify(&mut self, _stream: &mut dyn ReadSeek) -> bool {
        true
    }

    fn open(&mut self, mut stream: DataStream) -> Result<(), DiscatError> {
        let length = stream.seek(SeekFrom::End(0))?;
        self.image = ImageInfo {
            sectors: length / u64::from(SECTOR_SIZE),
            sector_size: SECTOR_SIZE,
            media_type: self.name.clone(),
        };
        Ok(())
    }

    fn info(&self) -> &ImageInfo {
        &self.image
    }

    fn read_sector(&mut self, address: u64) -> Result<Vec<u8>, DiscatError> {
        if address >= self.image.sectors {
            return Err(DiscatError::InvalidData {
                message: format!("sector {address} out of range"),
            });
        }
        Ok(vec![0; SECTOR_SIZE as usize])
    }
}

impl WritableImage for MockPlugin {
    fn extensions(&self) -> &[&str] {
        &[".mock"]
    }

    fn create(&mut self, _path: &Path, info: &ImageInfo) -> Result<(), DiscatError> {
        self.image = info.clone();
        Ok(())
    }

    fn write_sector(&mut self, _address: u64, _data: &[u8]) -> Result<(), DiscatError> {
        Ok(())
    }

    fn close(&mut self) -> Result<(), DiscatError> {
        Ok(())
    }
}

impl Filter for MockPlugin {
    fn identify(&self, _path: &Path) -> bool {
        true
    }

    fn open(&self, _path: &Path) -> Result<DataStream, DiscatError> {
        Ok(Box::new(Cursor::new(Vec::new())))
    }
}

impl FloppyImage for MockPlugin {
    fn identify(&self, _stream: &mut dyn ReadSeek) -> bool {
        true
    }

    fn geometry(&self, _stream: &mut dyn ReadSeek) -> Result<FloppyGeometry, DiscatError> {
        Ok(FloppyGeometry {
            cylinders: 80,
            heads: 2,
            sectors_per_track: 18,
            sector_size: 512,
        })
    }
}

impl WritableFloppyImage for MockPlugin {
    fn create(&self, _path: &Path, _geometry: &FloppyGeometry) -> Result<(), DiscatError> {
        Ok(())
    }
}

impl Archive for MockPlugin {
    fn identify(&self, _stream: &mut dyn ReadSeek) -> bool {
        true
    }

    fn entries(&self, _stream: &mut dyn ReadSeek) -> Result<Vec<ArchiveEntry>, DiscatError> {
        Ok(Vec::new())
    }
}

impl ByteAddressableImage for MockPlugin {
    fn identify(&self, _stream: &mut dyn ReadSeek) -> bool {
        true
    }

    fn read_bytes(
        &self,
        stream: &mut dyn ReadSeek,
        offset: u64,
        buf: &mut [u8],
    ) -> Result<usize, DiscatError> {
        stream.seek(SeekFrom::Start(offset))?;
        Ok(stream.read(buf)?)
    }
}
