use sha3::{Digest, Sha3_256};

pub fn sha3_256_hex(data: &str) -> String {
    let mut hasher = Sha3_256::default();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}
