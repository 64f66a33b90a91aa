//! Output encodings applied to raw cryptographic output.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Encoding applied to facade output and removed from facade input.
///
/// `Hex` emits lowercase digits without separators. `Base64` uses the
/// standard alphabet with `=` padding and no line wrapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Raw bytes.
    #[default]
    None,
    /// Lowercase hexadecimal text.
    Hex,
    /// Standard padded base64 text.
    Base64,
}

impl Encoding {
    /// Encode raw bytes into this encoding.
    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        match self {
            Encoding::None => data.to_vec(),
            Encoding::Hex => hex::encode(data).into_bytes(),
            Encoding::Base64 => STANDARD.encode(data).into_bytes(),
        }
    }

    /// Decode text produced by [`Encoding::encode`] back into raw bytes.
    ///
    /// # Errors
    /// - `Error::Decode` if the input is not valid for this encoding
    pub fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        match self {
            Encoding::None => Ok(data.to_vec()),
            Encoding::Hex => Ok(hex::decode(data)?),
            Encoding::Base64 => Ok(STANDARD.decode(data)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use proptest::prelude::*;

    #[test]
    fn test_hex_is_lowercase() {
        assert_eq!(Encoding::Hex.encode(&[0xAB, 0x01]), b"ab01");
    }

    #[test]
    fn test_base64_padding() {
        assert_eq!(Encoding::Base64.encode(b"ab"), b"YWI=");
        assert_eq!(Encoding::Base64.decode(b"YWI=").unwrap(), b"ab");
    }

    #[test]
    fn test_malformed_input_fails() {
        assert!(matches!(Encoding::Hex.decode(b"abc"), Err(Error::Decode(_))));
        assert!(matches!(
            Encoding::Base64.decode(b"!!!!"),
            Err(Error::Decode(_))
        ));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Encoding::Base64).unwrap();
        assert_eq!(json, "\"base64\"");
        let parsed: Encoding = serde_json::from_str("\"hex\"").unwrap();
        assert_eq!(parsed, Encoding::Hex);
    }

    proptest! {
        #[test]
        fn prop_decode_inverts_encode(data in proptest::collection::vec(any::<u8>(), 0..256)) {
            for encoding in [Encoding::None, Encoding::Hex, Encoding::Base64] {
                let encoded = encoding.encode(&data);
                prop_assert_eq!(encoding.decode(&encoded).unwrap(), data.clone());
            }
        }
    }
}
