//! Built-in known-answer checks run by `prim selftest`.

use aes_core::Aes128Key;
use anyhow::{bail, Context, Result};
use tracing::info;

struct Case {
    name: &'static str,
    run: fn() -> Result<String>,
    expected: &'static str,
}

const CASES: &[Case] = &[
    Case {
        name: "aes128 fips-197 c.1",
        run: aes_fips,
        expected: "69c4e0d86a7b0430d8cdb78070b4c55a",
    },
    Case {
        name: "aes128 all-zero",
        run: aes_zero,
        expected: "66e94bd4ef8a2c3b884cfa59ca342b2e",
    },
    Case {
        name: "ocb rfc 7253 one block",
        run: ocb_one_block,
        expected: "5ce88ec2e0692706a915c00aeb8b2396f40e1c743f52436bdf06d8fa1eca343d",
    },
    Case {
        name: "groestl256 empty",
        run: groestl_empty,
        expected: "1a52d11d550039be16107f9c58db9ebcc417f16f736adb2502567119f0083467",
    },
    Case {
        name: "groestl256 quick brown fox",
        run: groestl_fox,
        expected: "8c7ad62eb26a21297bc39c2d7293b4bd4d3399fa8afab29e970471739e28b301",
    },
];

fn counting_key() -> Aes128Key {
    Aes128Key::from(core::array::from_fn(|i| i as u8))
}

fn aes_fips() -> Result<String> {
    let plaintext: [u8; 16] = core::array::from_fn(|i| (i as u8) * 0x11);
    Ok(hex::encode(aes_core::encrypt(&plaintext, &counting_key())))
}

fn aes_zero() -> Result<String> {
    Ok(hex::encode(aes_core::encrypt(
        &[0u8; 16],
        &Aes128Key::from([0u8; 16]),
    )))
}

fn ocb_one_block() -> Result<String> {
    let mut nonce = [0u8; 12];
    hex::decode_to_slice("bbaa99887766554433221106", &mut nonce)?;
    let plaintext: Vec<u8> = (0u8..16).collect();
    let sealed = aes128_ocb::encrypt(&counting_key(), &nonce, &plaintext)?;
    Ok(hex::encode(sealed))
}

fn groestl_empty() -> Result<String> {
    Ok(hex::encode(groestl256::hash(b"")?))
}

fn groestl_fox() -> Result<String> {
    Ok(hex::encode(groestl256::hash(
        b"The quick brown fox jumps over the lazy dog",
    )?))
}

/// Runs every case, reporting each, and fails if any mismatched.
pub fn run() -> Result<()> {
    let mut failures = 0usize;
    for case in CASES {
        let actual = (case.run)().with_context(|| format!("run {}", case.name))?;
        if actual == case.expected {
            info!(case = case.name, "ok");
            println!("ok    {}", case.name);
        } else {
            failures += 1;
            println!("FAIL  {} (got {actual}, want {})", case.name, case.expected);
        }
    }
    if failures > 0 {
        bail!("{failures} of {} self-test cases failed", CASES.len());
    }
    Ok(())
}
