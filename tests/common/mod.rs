#![allow(dead_code)]

use rand::RngCore;

/// Random source that always yields zero, so every uniform choice picks
/// the first candidate and every coin flip comes up `false`.
pub struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}
