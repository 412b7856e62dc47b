use cryptal_stream::{
    BLOCK_SIZE, Key, Nonce, apply_keystream, apply_keystream_in_place, combine, generate_block,
    keystream,
};

fn demo_inputs() -> (Key, Nonce) {
    (
        Key::new(*b"onlythirthytwocharactersfor2xcha"),
        Nonce::new(*b"123456789012"),
    )
}

#[test]
fn two_block_roundtrip_with_manual_counters() {
    let (key, nonce) = demo_inputs();
    let message: Vec<u8> = (0..128u8).map(|b| b.wrapping_mul(31)).collect();

    let mut ciphertext = Vec::with_capacity(128);
    for (counter, half) in (1u32..).zip(message.chunks(BLOCK_SIZE)) {
        let block = generate_block(&key, &nonce, counter);
        ciphertext.extend(combine(half, &block).unwrap());
    }
    assert_ne!(ciphertext, message);

    let mut decrypted = Vec::with_capacity(128);
    for (counter, half) in (1u32..).zip(ciphertext.chunks(BLOCK_SIZE)) {
        let block = generate_block(&key, &nonce, counter);
        decrypted.extend(combine(half, &block).unwrap());
    }

    assert_eq!(decrypted, message);
    assert_eq!(apply_keystream(&key, &nonce, 1, &message), ciphertext);
}

#[test]
fn keystream_is_concatenation_of_blocks() {
    let (key, nonce) = demo_inputs();

    let stream = keystream(&key, &nonce, 1, 3 * BLOCK_SIZE);

    assert_eq!(stream.len(), 3 * BLOCK_SIZE);
    for (i, chunk) in stream.chunks(BLOCK_SIZE).enumerate() {
        assert_eq!(chunk, generate_block(&key, &nonce, 1 + i as u32));
    }
}

#[test]
fn keystream_truncates_final_block() {
    let (key, nonce) = demo_inputs();

    let stream = keystream(&key, &nonce, 5, 100);

    assert_eq!(stream.len(), 100);
    assert_eq!(stream[..64], generate_block(&key, &nonce, 5));
    assert_eq!(stream[64..], generate_block(&key, &nonce, 6)[..36]);
}

#[test]
fn rfc8439_encryption_vector() {
    // RFC 8439 section 2.4.2
    let mut key = [0u8; 32];
    for (i, b) in key.iter_mut().enumerate() {
        *b = i as u8;
    }
    let key = Key::new(key);
    let nonce = Nonce::new([0, 0, 0, 0, 0, 0, 0, 0x4a, 0, 0, 0, 0]);
    let plaintext: &[u8] = b"Ladies and Gentlemen of the class of '99: If I could offer you \
        only one tip for the future, sunscreen would be it.";
    assert_eq!(plaintext.len(), 114);

    let ciphertext = apply_keystream(&key, &nonce, 1, plaintext);

    assert_eq!(
        hex::encode(&ciphertext),
        "6e2e359a2568f98041ba0728dd0d6981e97e7aec1d4360c20a27afccfd9fae0b\
         f91b65c5524733ab8f593dabcd62b3571639d624e65152ab8f530c359f0861d8\
         07ca0dbf500d6a6156a38e088a22b65e52bc514d16ccf806818ce91ab7793736\
         5af90bbf74a35be6b40b8eedf2785e42874d"
    );
    assert_eq!(apply_keystream(&key, &nonce, 1, &ciphertext), plaintext);
}

#[test]
fn in_place_matches_allocating() {
    let (key, nonce) = demo_inputs();
    let message = [0xa5u8; 200];

    let mut buf = message;
    apply_keystream_in_place(&key, &nonce, 9, &mut buf);

    assert_eq!(buf.to_vec(), apply_keystream(&key, &nonce, 9, &message));
}

#[test]
fn empty_input_yields_empty_output() {
    let (key, nonce) = demo_inputs();

    assert!(apply_keystream(&key, &nonce, 1, &[]).is_empty());
    assert!(keystream(&key, &nonce, 1, 0).is_empty());
}

#[test]
fn counter_wraps_to_zero() {
    let (key, nonce) = demo_inputs();

    let stream = keystream(&key, &nonce, u32::MAX, 2 * BLOCK_SIZE);

    assert_eq!(stream[..64], generate_block(&key, &nonce, u32::MAX));
    assert_eq!(stream[64..], generate_block(&key, &nonce, 0));
}

#[test]
fn different_start_counters_give_different_ciphertexts() {
    let (key, nonce) = demo_inputs();
    let message = [0u8; 64];

    assert_ne!(
        apply_keystream(&key, &nonce, 1, &message),
        apply_keystream(&key, &nonce, 2, &message)
    );
}
