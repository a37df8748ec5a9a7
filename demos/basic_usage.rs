//! Basic usage example for Garoupe-256 authenticated encryption.

use garoupe::{decrypt, decrypt_in_place, encrypt, encrypt_in_place, Error, Garoupe256, WIPE_BYTE};

fn main() -> Result<(), Error> {
    // Library events (lengths only) are emitted through `tracing`.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("Garoupe-256 Basic Usage Example");
    println!("===============================");

    // Example 1: Basic encryption and decryption
    basic_example()?;

    // Example 2: Handling different input sizes
    size_examples()?;

    // Example 3: In-place operation
    in_place_example()?;

    // Example 4: Error handling
    error_handling_example()?;

    Ok(())
}

fn basic_example() -> Result<(), Error> {
    println!("\n1. Basic Encryption/Decryption:");

    let key = [0x01; 32]; // 256-bit key
    let nonce = [0x02; 20]; // 160-bit nonce
    let plaintext = b"Hello, Garoupe! This is a secret message.";
    let aad = b"public header";

    // Encrypt
    let (ciphertext, tag) = encrypt(plaintext, aad, &key, &nonce);
    println!("  Plaintext: {:?}", String::from_utf8_lossy(plaintext));
    println!("  Ciphertext: {} bytes", ciphertext.len());
    println!("  Tag: {:02x?}", &tag[..8]); // Show first 8 bytes

    // Decrypt
    let decrypted = decrypt(&ciphertext, &tag, aad, &key, &nonce)?;
    println!("  Decrypted: {:?}", String::from_utf8_lossy(&decrypted));

    assert_eq!(decrypted, plaintext);
    println!("  ✓ Encryption/decryption successful!");

    Ok(())
}

fn size_examples() -> Result<(), Error> {
    println!("\n2. Different Input Sizes:");

    let key = [0x03; 32];

    // Empty message
    let nonce = [0x04; 20];
    let (ct, tag) = encrypt(b"", b"just aad", &key, &nonce);
    let pt = decrypt(&ct, &tag, b"just aad", &key, &nonce)?;
    println!("  Empty message: {} bytes -> {} bytes", 0, pt.len());
    assert!(pt.is_empty());

    // Single byte
    let nonce = [0x05; 20];
    let (ct, tag) = encrypt(b"A", b"", &key, &nonce);
    let pt = decrypt(&ct, &tag, b"", &key, &nonce)?;
    println!("  Single byte: {} bytes -> {} bytes", 1, pt.len());
    assert_eq!(pt, b"A");

    // Large message (multiple blocks, partial final block)
    let nonce = [0x06; 20];
    let large_msg = vec![0x42u8; 1000];
    let (ct, tag) = encrypt(&large_msg, b"large message", &key, &nonce);
    let pt = decrypt(&ct, &tag, b"large message", &key, &nonce)?;
    println!(
        "  Large message: {} bytes -> {} bytes",
        large_msg.len(),
        pt.len()
    );
    assert_eq!(pt, large_msg);

    println!("  ✓ All size tests passed!");
    Ok(())
}

fn in_place_example() -> Result<(), Error> {
    println!("\n3. In-Place Operation:");

    let key = [0x07; 32];
    let nonce = [0x08; 20];
    let mut buffer = *b"in-place buffer with a tail";

    let tag = encrypt_in_place(&mut buffer, b"hdr", &key, &nonce);
    println!("  Sealed {} bytes in place", buffer.len());

    // The cipher object can also be built from slices of unknown length.
    Garoupe256::new_from_slices(&key[..], &nonce[..])?.decrypt_in_place(&mut buffer, &tag, b"hdr")?;
    assert_eq!(&buffer, b"in-place buffer with a tail");
    println!("  ✓ Opened in place");

    Ok(())
}

fn error_handling_example() -> Result<(), Error> {
    println!("\n4. Error Handling:");

    let key = [0x09; 32];
    let nonce = [0x0a; 20];
    let plaintext = b"secret data";
    let aad = b"header";

    // Encrypt normally
    let (ciphertext, mut tag) = encrypt(plaintext, aad, &key, &nonce);

    // Test authentication failure with corrupted tag
    tag[0] ^= 1; // Flip one bit
    let mut buffer = ciphertext.clone();
    match decrypt_in_place(&mut buffer, &tag, aad, &key, &nonce) {
        Ok(()) => println!("  ✗ Should have failed!"),
        Err(Error::AuthenticationFailed) => {
            assert!(buffer.iter().all(|&b| b == WIPE_BYTE));
            println!("  ✓ Authentication failure detected, buffer wiped");
        }
        Err(e) => println!("  ✗ Unexpected error: {e}"),
    }

    // Test with wrong AAD
    tag[0] ^= 1; // Fix the tag
    match decrypt(&ciphertext, &tag, b"wrong header", &key, &nonce) {
        Ok(_) => println!("  ✗ Should have failed!"),
        Err(Error::AuthenticationFailed) => {
            println!("  ✓ Wrong AAD detected correctly");
        }
        Err(e) => println!("  ✗ Unexpected error: {e}"),
    }

    // Test with wrong key
    let wrong_key = [0x99; 32];
    match decrypt(&ciphertext, &tag, aad, &wrong_key, &nonce) {
        Ok(_) => println!("  ✗ Should have failed!"),
        Err(Error::AuthenticationFailed) => {
            println!("  ✓ Wrong key detected correctly");
        }
        Err(e) => println!("  ✗ Unexpected error: {e}"),
    }

    // Slices of the wrong length are rejected up front
    match Garoupe256::new_from_slices(&key[..16], &nonce) {
        Err(Error::InvalidKeyLength) => println!("  ✓ Short key rejected"),
        _ => println!("  ✗ Short key accepted!"),
    }

    println!("  ✓ All error handling tests passed!");
    Ok(())
}
