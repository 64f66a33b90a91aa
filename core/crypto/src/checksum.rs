//! Non-cryptographic checksums: CRC-32, CRC-64 and FNV.
//!
//! CRCs and the 32/64-bit FNV variants return plain integers. The 128-bit
//! FNV variants return big-endian bytes so they can be encoded like digests.

use crc::{Crc, CRC_64_GO_ISO, CRC_64_XZ};

use cipherkit_common::Encoding;

const CRC64_ISO: Crc<u64> = Crc::<u64>::new(&CRC_64_GO_ISO);
const CRC64_ECMA: Crc<u64> = Crc::<u64>::new(&CRC_64_XZ);

const FNV32_OFFSET: u32 = 0x811c_9dc5;
const FNV32_PRIME: u32 = 0x0100_0193;
const FNV64_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV64_PRIME: u64 = 0x0000_0100_0000_01b3;
const FNV128_OFFSET: u128 = 0x6c62_272e_07bb_0142_62b8_2175_6295_c58d;
const FNV128_PRIME: u128 = 0x0000_0000_0100_0000_0000_0000_0000_013b;

/// CRC-32 with the IEEE polynomial.
pub fn crc32(data: &[u8]) -> u32 {
    crc32fast::hash(data)
}

/// CRC-64 with the ISO polynomial.
pub fn crc64_iso(data: &[u8]) -> u64 {
    CRC64_ISO.checksum(data)
}

/// CRC-64 with the ECMA-182 polynomial.
pub fn crc64_ecma(data: &[u8]) -> u64 {
    CRC64_ECMA.checksum(data)
}

/// FNV-1, 32-bit.
pub fn fnv32(data: &[u8]) -> u32 {
    data.iter().fold(FNV32_OFFSET, |hash, &b| {
        hash.wrapping_mul(FNV32_PRIME) ^ b as u32
    })
}

/// FNV-1a, 32-bit.
pub fn fnv32a(data: &[u8]) -> u32 {
    data.iter().fold(FNV32_OFFSET, |hash, &b| {
        (hash ^ b as u32).wrapping_mul(FNV32_PRIME)
    })
}

/// FNV-1, 64-bit.
pub fn fnv64(data: &[u8]) -> u64 {
    data.iter().fold(FNV64_OFFSET, |hash, &b| {
        hash.wrapping_mul(FNV64_PRIME) ^ b as u64
    })
}

/// FNV-1a, 64-bit.
pub fn fnv64a(data: &[u8]) -> u64 {
    data.iter().fold(FNV64_OFFSET, |hash, &b| {
        (hash ^ b as u64).wrapping_mul(FNV64_PRIME)
    })
}

/// FNV-1, 128-bit, as 16 big-endian bytes, encoded.
pub fn fnv128(data: &[u8], encoding: Encoding) -> Vec<u8> {
    let hash = data.iter().fold(FNV128_OFFSET, |hash, &b| {
        hash.wrapping_mul(FNV128_PRIME) ^ b as u128
    });
    encoding.encode(&hash.to_be_bytes())
}

/// FNV-1a, 128-bit, as 16 big-endian bytes, encoded.
pub fn fnv128a(data: &[u8], encoding: Encoding) -> Vec<u8> {
    let hash = data.iter().fold(FNV128_OFFSET, |hash, &b| {
        (hash ^ b as u128).wrapping_mul(FNV128_PRIME)
    });
    encoding.encode(&hash.to_be_bytes())
}
