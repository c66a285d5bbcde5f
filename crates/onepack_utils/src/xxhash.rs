// Copied from https://github.com/rollup/rollup/blob/080d2245ab6b6298229ebe7258c2b96816e7c52d/rust/xxhash/src/lib.rs

use base_encode::to_string;
use xxhash_rust::xxh3::xxh3_128;

/// Url and filename safe, so hashes can be dropped into output filenames as they are.
const CHARACTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Longest hash `xxhash_with_base(_, 64)` can produce for a 128 bit digest.
pub const MAX_BASE64_HASH_LEN: usize = 22;

pub fn xxhash_with_base(input: &[u8], base: u8) -> String {
  let hash = if input.len() == 16 { input } else { &xxh3_128(input).to_le_bytes() };

  // `to_string` only fails for an empty alphabet or a base larger than it.
  to_string(hash, base, CHARACTERS).unwrap_or_default()
}

/// Hash of arbitrary bytes, always digested first so short inputs are never used as a hash as is.
/// Always `MAX_BASE64_HASH_LEN` characters: leading zero digits are kept.
pub fn content_hash(input: &[u8]) -> String {
  let hash = xxhash_with_base(&xxh3_128(input).to_le_bytes(), 64);
  let padding = MAX_BASE64_HASH_LEN.saturating_sub(hash.len());
  let mut ret = String::with_capacity(MAX_BASE64_HASH_LEN);
  ret.extend(std::iter::repeat(char::from(CHARACTERS[0])).take(padding));
  ret.push_str(&hash);
  ret
}

#[test]
fn test_xxhash_with_base() {
  assert_eq!(&xxhash_with_base(b"hello", 64), "YOFJeqs95x38-Gwetwem1");
  assert_eq!(&xxhash_with_base(b"hello", 36), "bpwli5k6mqm0gij09mxrh9npj");
  assert_eq!(&xxhash_with_base(b"hello", 16), "1838525eaacf79c77f3e1b07adc1e9b5");
}

#[test]
fn test_content_hash() {
  let digest = xxh3_128(b"0123456789abcdef").to_le_bytes();
  assert!(content_hash(b"0123456789abcdef").ends_with(&xxhash_with_base(&digest, 64)));
  assert_ne!(content_hash(b"0123456789abcdef"), xxhash_with_base(b"0123456789abcdef", 64));
}

#[test]
fn test_content_hash_has_fixed_length() {
  // A 128 bit digest leaves only 4 bits for the leading base64 digit, so roughly one in
  // sixteen of these starts with a zero digit.
  for i in 0..512_u32 {
    assert_eq!(content_hash(&i.to_le_bytes()).len(), MAX_BASE64_HASH_LEN);
  }
}
