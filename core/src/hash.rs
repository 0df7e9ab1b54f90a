use sha2::{Digest, Sha256};

use crate::types::TickInput;

/// SHA-256 hash of the full input transcript.
pub fn hash_transcript(transcript: &[TickInput]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for input in transcript {
        hasher.update(input.buttons.to_le_bytes());
    }
    hasher.finalize().into()
}

/// SHA-256 commitment of the seed.
pub fn hash_seed(seed: u32) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_le_bytes());
    hasher.finalize().into()
}
