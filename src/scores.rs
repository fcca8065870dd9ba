use std::fs;
use std::path::PathBuf;

const MAGIC: &[u8; 4] = b"PDS1";
// File: 4 magic + 4 score = 8 bytes
const FILE_SIZE: usize = 8;

/// Persistence capability for the single high-score value. Both operations
/// are best-effort: a store that cannot read yields 0, and a failed write is
/// swallowed — the in-memory high score still stands for the session.
pub trait ScoreStore {
    fn load(&self) -> u32;
    fn save(&self, score: u32);
}

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new() -> Self {
        // Store next to the executable
        let path = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("poopdrop.scores")))
            .unwrap_or_else(|| PathBuf::from("poopdrop.scores"));
        Self { path }
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreStore for FileStore {
    fn load(&self) -> u32 {
        let Ok(data) = fs::read(&self.path) else {
            return 0;
        };
        if data.len() < FILE_SIZE || &data[0..4] != MAGIC {
            return 0;
        }
        let bytes: [u8; 4] = [data[4], data[5], data[6], data[7]];
        u32::from_le_bytes(bytes)
    }

    fn save(&self, score: u32) {
        let mut buf = Vec::with_capacity(FILE_SIZE);
        buf.extend_from_slice(MAGIC);
        buf.extend_from_slice(&score.to_le_bytes());
        let _ = fs::write(&self.path, &buf);
    }
}
