use rand::Rng;
use std::fmt;

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
pub const CODE_LEN: usize = 6;

/// Short code shown after a successful registration so the lead can quote it to an advisor.
/// Purely decorative: nothing stores it and collisions are possible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceCode {
    prefix: &'static str,
    code: String,
}

impl ReferenceCode {
    pub fn generate<R: Rng>(prefix: &'static str, rng: &mut R) -> Self {
        let code = (0..CODE_LEN)
            .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
            .collect();
        Self { prefix, code }
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for ReferenceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.prefix, self.code())
    }
}
