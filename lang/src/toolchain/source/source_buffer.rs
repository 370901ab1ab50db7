use std::fs::File;
use std::io::Read;
use std::path::Path;

use bstr::BStr;

/// Failure to bring a source file into memory.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("unable to read {file_name}: {source}")]
    Io {
        file_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to map {file_name}: {source}")]
    Map {
        file_name: String,
        #[source]
        source: mmap_rs::Error,
    },

    #[error("{file_name} is too large to map ({len} bytes)")]
    TooLarge { file_name: String, len: u64 },
}

enum SourceBufferKind<'a> {
    File { buffer: mmap_rs::Mmap },
    Memory { bytes: &'a [u8] },
    Owned { bytes: Vec<u8> },
}

// Keeps source and a file name in the same object, so they provide the same lifetimes.
pub struct SourceBuffer<'a> {
    kind: SourceBufferKind<'a>,
    file_name: String,
}

impl<'a> SourceBuffer<'a> {
    /// Maps the file at `file_path` into memory. The contents are not checked for valid utf-8.
    pub fn new_from_file(file_path: &Path) -> Result<SourceBuffer<'static>, SourceError> {
        let file_name = file_path.display().to_string();
        let file = match File::open(file_path) {
            Ok(file) => file,
            Err(source) => return Err(SourceError::Io { file_name, source }),
        };
        let len = match file.metadata() {
            Ok(metadata) => metadata.len(),
            Err(source) => return Err(SourceError::Io { file_name, source }),
        };

        // Zero-length mappings are rejected by the OS.
        if len == 0 {
            let kind = SourceBufferKind::Owned { bytes: Vec::new() };
            return Ok(SourceBuffer { kind, file_name });
        }
        let size: usize = match len.try_into() {
            Ok(size) => size,
            Err(_) => return Err(SourceError::TooLarge { file_name, len }),
        };

        // The mapping is read-only. Modification of the file by another process while mapped is
        // outside of what the lexer can guard against.
        let mapped = mmap_rs::MmapOptions::new(size)
            .and_then(|options| unsafe { options.with_file(&file, 0) }.map());
        match mapped {
            Ok(buffer) => Ok(SourceBuffer { kind: SourceBufferKind::File { buffer }, file_name }),
            Err(source) => Err(SourceError::Map { file_name, source }),
        }
    }

    /// Reads `reader` to its end, for input that can't be mapped such as stdin.
    pub fn new_from_reader(
        mut reader: impl Read,
        name: &str,
    ) -> Result<SourceBuffer<'static>, SourceError> {
        let mut bytes = Vec::new();
        if let Err(source) = reader.read_to_end(&mut bytes) {
            return Err(SourceError::Io { file_name: String::from(name), source });
        }
        Ok(SourceBuffer { kind: SourceBufferKind::Owned { bytes }, file_name: String::from(name) })
    }

    pub fn new_from_string(string: &'a str, name: &str) -> SourceBuffer<'a> {
        SourceBuffer::new_from_bytes(string.as_bytes(), name)
    }

    pub fn new_from_bytes(bytes: &'a [u8], name: &str) -> SourceBuffer<'a> {
        SourceBuffer { kind: SourceBufferKind::Memory { bytes }, file_name: String::from(name) }
    }

    pub fn code(&self) -> &'_ BStr {
        match &self.kind {
            SourceBufferKind::File { buffer } => BStr::new(buffer.as_slice()),
            SourceBufferKind::Memory { bytes } => BStr::new(*bytes),
            SourceBufferKind::Owned { bytes } => BStr::new(bytes.as_slice()),
        }
    }

    pub fn file_name(&self) -> &str {
        self.file_name.as_str()
    }
}
