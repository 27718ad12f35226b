use rand_core::{OsRng, RngCore};

/// Provides random data up to `len` from the OS's random number generator.
pub fn randombytes_buf(len: usize) -> Vec<u8> {
    let mut r: Vec<u8> = vec![0; len];
    copy_randombytes(&mut r);
    r
}

/// Fills `dest` with random data from the OS's random number generator.
///
/// Panics if the OS cannot provide randomness; there is no sensible way to
/// continue generating keys in that case.
pub fn copy_randombytes(dest: &mut [u8]) {
    OsRng
        .try_fill_bytes(dest)
        .expect("failed to fill random bytes");
}
