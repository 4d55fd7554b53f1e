//! Target-file classification.
//!
//! A cheap gate run before spawning the disassembler: reads the first four
//! bytes and the permission bits of the target. The magic check is
//! deliberately narrow (ELF plus the legacy COFF/PE i386 machine tag); it
//! does not recognize Mach-O or modern PE containers.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// ELF magic: 0x7F 'E' 'L' 'F'.
const ELF_MAGIC: [u8; 4] = [0x7f, 0x45, 0x4c, 0x46];
/// Legacy COFF/PE machine tag for i386 objects.
const COFF_I386_MAGIC: [u8; 2] = [0x4c, 0x01];

/// Verdict for a candidate target file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub is_executable: bool,
    pub is_object_like: bool,
}

/// Classify `path` by permission bits and magic-byte prefix.
///
/// Any I/O failure (missing file, permission denied, short read) collapses
/// to a fully negative verdict; classification never returns an error.
pub fn classify(path: &Path) -> Classification {
    Classification {
        is_executable: is_executable(path),
        is_object_like: is_object_like(path),
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    match std::fs::metadata(path) {
        Ok(meta) => meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

/// Non-POSIX hosts have no execute bits; fall back to the conventional
/// binary/object extensions instead.
#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("exe") | Some("dll") | Some("obj") | Some("o")
    )
}

fn is_object_like(path: &Path) -> bool {
    let mut prefix = [0u8; 4];
    let n = match File::open(path).and_then(|mut f| f.read(&mut prefix)) {
        Ok(n) => n,
        Err(_) => return false,
    };
    if n >= 4 && prefix == ELF_MAGIC {
        return true;
    }
    n >= 2 && prefix[..2] == COFF_I386_MAGIC
}
