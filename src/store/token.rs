use rand::{rngs::OsRng, RngCore};

/// Bytes of entropy behind each access token; hex encoding doubles the
/// length on the wire.
const TOKEN_BYTES: usize = 128;

/// Generate an opaque access token: 128 bytes from the OS entropy source,
/// hex-encoded to a fixed 256-character string.
pub fn access_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}
