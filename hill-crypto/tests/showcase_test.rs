use hill_crypto::errors::HillCryptoError;
use hill_crypto::keygen::random_key;
use hill_crypto::{HillCipher, HillConfig};

use rand::SeedableRng;
use rand::rngs::StdRng;

use std::sync::Once;

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

#[test]
fn showcase_cipher_decipher_sentence() -> Result<(), HillCryptoError> {
    init_logging();

    let key = random_key(4, &mut StdRng::seed_from_u64(12345))?;
    let cipher = HillCipher::try_with(key)?;

    let original = "The quick brown fox jumps over the lazy dog";

    let ciphertext = cipher.encrypt(original)?;
    dbg!(&ciphertext);
    assert!(ciphertext.chars().all(|c| c.is_ascii_uppercase()));
    assert_eq!(ciphertext.len() % cipher.block_size(), 0);

    let decoded = cipher.decrypt(&ciphertext)?;
    dbg!(&original, &decoded);

    // spaces travel as the pad value 26, which decrypts to 'A'
    let expected: String = original
        .to_uppercase()
        .chars()
        .map(|c| if c == ' ' { 'A' } else { c })
        .collect();
    assert_eq!(decoded.trim_end_matches('A'), expected.trim_end_matches('A'));
    assert!(decoded.starts_with(&expected));

    Ok(())
}

#[test]
fn showcase_config_document() -> Result<(), HillCryptoError> {
    init_logging();

    let config = HillConfig::from_json(
        r#"{
            "key": [[6, 24, 1], [13, 16, 10], [20, 17, 15]],
            "pad_sentinel": "-"
        }"#,
    )?;
    let cipher = HillCipher::try_from_config(config.clone())?;

    assert_eq!(cipher.encrypt("ACT")?, "POH");
    assert_eq!(HillConfig::from_json(&config.to_json()?)?, config);

    Ok(())
}
