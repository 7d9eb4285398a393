//! 64-bit primes used as state multipliers.

pub const PRIMES: [u64; 16] = [
    0x9e3779b97f4a7c55, 0xbc6ef372fe94f867, 0xdaa66d2c7ddf7499, 0xf8dde6e5fd29f079,
    0x9715609f7c746c75, 0xb54cda58fbbee883, 0xd38454127b09649b, 0xf1bbcdcbfa53e0bd,
    0x8ff34785799e5ce7, 0xae2ac13ef8e8d8e5, 0xcc623af878335507, 0xea99b4b1f77dd11b,
    0x88d12e6b76c84d41, 0xa708a824f612c92d, 0xc54021de755d4561, 0xe3779b97f4a7c18f,
];
