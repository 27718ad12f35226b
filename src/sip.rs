//! SipHash-2-4 core, shared by the 64-bit and 128-bit output modes.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::{
    CRYPTO_SHORTHASH_KEYBYTES, CRYPTO_SHORTHASH_SIPHASH24_BYTES, CRYPTO_SHORTHASH_SIPHASHX24_BYTES,
};
use crate::types::OutputWidth;
use crate::utils::{load_tail_u64_le, load_u64_le, store_u64_le};

// "somepseudorandomlygeneratedbytes"
const IV0: u64 = 0x736f6d6570736575;
const IV1: u64 = 0x646f72616e646f6d;
const IV2: u64 = 0x6c7967656e657261;
const IV3: u64 = 0x7465646279746573;

const C_ROUNDS: usize = 2;
const D_ROUNDS: usize = 4;

#[derive(Zeroize, ZeroizeOnDrop)]
struct SipState {
    v0: u64,
    v1: u64,
    v2: u64,
    v3: u64,
}

impl SipState {
    fn new(key: &[u8; CRYPTO_SHORTHASH_KEYBYTES], width: OutputWidth) -> Self {
        let k0 = load_u64_le(&key[..8]);
        let k1 = load_u64_le(&key[8..]);

        let mut state = Self {
            v0: IV0 ^ k0,
            v1: IV1 ^ k1,
            v2: IV2 ^ k0,
            v3: IV3 ^ k1,
        };
        if width == OutputWidth::Bits128 {
            state.v1 ^= 0xee;
        }
        state
    }

    #[inline(always)]
    fn sipround(&mut self) {
        self.v0 = self.v0.wrapping_add(self.v1);
        self.v1 = self.v1.rotate_left(13);
        self.v1 ^= self.v0;
        self.v0 = self.v0.rotate_left(32);
        self.v2 = self.v2.wrapping_add(self.v3);
        self.v3 = self.v3.rotate_left(16);
        self.v3 ^= self.v2;
        self.v0 = self.v0.wrapping_add(self.v3);
        self.v3 = self.v3.rotate_left(21);
        self.v3 ^= self.v0;
        self.v2 = self.v2.wrapping_add(self.v1);
        self.v1 = self.v1.rotate_left(17);
        self.v1 ^= self.v2;
        self.v2 = self.v2.rotate_left(32);
    }

    #[inline(always)]
    fn rounds(&mut self, count: usize) {
        for _ in 0..count {
            self.sipround();
        }
    }

    #[inline]
    fn compress(&mut self, m: u64) {
        self.v3 ^= m;
        self.rounds(C_ROUNDS);
        self.v0 ^= m;
    }

    fn absorb(&mut self, input: &[u8]) {
        let mut blocks = input.chunks_exact(8);
        for block in &mut blocks {
            self.compress(load_u64_le(block));
        }
        self.compress(load_tail_u64_le(blocks.remainder(), input.len()));
    }

    #[inline]
    fn digest_word(&self) -> u64 {
        self.v0 ^ self.v1 ^ self.v2 ^ self.v3
    }

    fn finalize(&mut self, output: &mut [u8], width: OutputWidth) {
        debug_assert_eq!(output.len(), width.bytes());

        self.v2 ^= match width {
            OutputWidth::Bits64 => 0xff,
            OutputWidth::Bits128 => 0xee,
        };
        self.rounds(D_ROUNDS);
        store_u64_le(&mut output[..8], self.digest_word());

        if width == OutputWidth::Bits128 {
            self.v1 ^= 0xdd;
            self.rounds(D_ROUNDS);
            store_u64_le(&mut output[8..], self.digest_word());
        }
    }
}

/// Computes SipHash-2-4 of `input` under `key`, writing `width.bytes()` bytes
/// into `output`.
pub(crate) fn siphash(
    output: &mut [u8],
    input: &[u8],
    key: &[u8; CRYPTO_SHORTHASH_KEYBYTES],
    width: OutputWidth,
) {
    let mut state = SipState::new(key, width);
    state.absorb(input);
    state.finalize(output, width);
}

/// SipHash-2-4 with 64-bit output.
pub(crate) fn siphash24(
    output: &mut [u8; CRYPTO_SHORTHASH_SIPHASH24_BYTES],
    input: &[u8],
    key: &[u8; CRYPTO_SHORTHASH_KEYBYTES],
) {
    siphash(output, input, key, OutputWidth::Bits64)
}

/// SipHash-2-4 with 128-bit output.
pub(crate) fn siphashx24(
    output: &mut [u8; CRYPTO_SHORTHASH_SIPHASHX24_BYTES],
    input: &[u8],
    key: &[u8; CRYPTO_SHORTHASH_KEYBYTES],
) {
    siphash(output, input, key, OutputWidth::Bits128)
}
