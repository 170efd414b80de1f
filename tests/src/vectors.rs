//! Known-answer values for secp256k1

use k1ecies::PrivateKey;

/// `1 * G`, uncompressed
pub const GENERATOR: &str = "0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798\
                             483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";

/// `2 * G`, uncompressed
pub const TWO_G: &str = "04c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5\
                         1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a";

/// X coordinate of `2 * G`
pub const TWO_G_X: &str = "c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5";

/// `3 * G`, compressed
pub const THREE_G_COMPRESSED: &str =
    "02f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9";

/// Group order `n`
pub const ORDER: &str = "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";

/// Private key holding the small scalar `value`
pub fn scalar(value: u8) -> PrivateKey {
    let mut bytes = [0u8; 32];
    bytes[31] = value;
    PrivateKey::new(bytes)
}

/// Decode a hex vector
pub fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).expect("valid hex vector")
}
