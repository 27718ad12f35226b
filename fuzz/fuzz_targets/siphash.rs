#![no_main]
use std::convert::TryInto;
use std::hash::Hasher;

use libfuzzer_sys::fuzz_target;
use siphasher::sip128::Hasher128;

fuzz_target!(|input: &[u8]| {
    if input.len() < 16 {
        shorthash::siphash24(input, b"", 8).expect_err("short key accepted");
        return;
    }
    let (key, data) = input.split_at(16);
    let key: [u8; 16] = key.try_into().expect("key length");

    let ours = shorthash::siphash24(&key, data, 8).expect("hash failed");
    let mut hasher = siphasher::sip::SipHasher24::new_with_key(&key);
    hasher.write(data);
    assert_eq!(ours, hasher.finish().to_le_bytes());

    let ours = shorthash::siphash24(&key, data, 16).expect("hash failed");
    let mut hasher = siphasher::sip128::SipHasher24::new_with_key(&key);
    hasher.write(data);
    assert_eq!(ours, hasher.finish128().as_bytes());
});
