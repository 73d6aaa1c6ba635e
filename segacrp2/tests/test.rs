use paste::paste;
use segacrp2::{decrypt_in_place, EncryptedRom, Plane, Variant, ENCRYPTED_REGION};
use sha1::{Digest, Sha1};

/// Deterministic stand-in for a ROM dump, the same bytes the reference
/// checksums below were taken from.
fn synthetic_image(len: usize) -> Vec<u8> {
    (0..len)
        .map(|a| (a as u8).wrapping_mul(31) ^ (a >> 8) as u8)
        .collect()
}

fn sha1_hex(bytes: &[u8]) -> String {
    hex::encode(Sha1::digest(bytes))
}

fn check_checksums(variant: Variant, len: usize, opcodes_sha1: &str, data_sha1: &str) {
    let mut rom = synthetic_image(len);
    let opcodes = decrypt_in_place(&mut rom, &variant.schedule()).unwrap();
    assert_eq!(sha1_hex(&opcodes), opcodes_sha1, "{variant} opcode plane");
    assert_eq!(sha1_hex(&rom), data_sha1, "{variant} data plane");

    let decrypted = EncryptedRom::new(synthetic_image(len))
        .unwrap()
        .decrypt(variant);
    assert_eq!(decrypted.opcodes(), opcodes);
    assert_eq!(decrypted.data(), rom);
}

macro_rules! checksum_test {
    ( $( $variant:ident $len:literal $opcodes:literal $data:literal ),* $(,)? ) => {
        $(
            paste! {
                #[test]
                fn [< test_checksum_ $variant:snake _ $len >]() {
                    check_checksums(Variant::$variant, $len, $opcodes, $data);
                }
            }
        )*
    };
}

checksum_test!(
    Nec315_5136 0x8000 "084b1812305f941f47a2a5d3ffd2c362233d999c" "486406a84ac28ff4a11798802550ee7e18170d75",
    Nec315_5136 0x0800 "6cef483600bcde9182196a6e87796f395807ee49" "4ca452c7f75ec753f57eccd22f3da9bc236e1a6d",
    Sega315_5162 0x8000 "6b983226542d1b40605fd60f404eb0da9eac0ecd" "f7c0700b95b163d893bda0022f700cf0ce197e14",
    Sega315_5162 0x0800 "ab0ddfd56e05d8840ff3d7d16912df0fbb5415b8" "1195a45d0c996741b5c1b22a4e27f41a26d9dcbf",
    Sega315_5176 0x8000 "13e810b2f9b086684587d3fb5d9a449b8ea80b14" "2437ca878da19167d1128789d6f8019b33b8cc04",
    Sega315_5176 0x0800 "cd3c54896e26c100da3884887c00d9369ae0986e" "17a9499b1061d780ba8a16c09da4266b8b77234a",
    Sega315_5177 0x8000 "9599661625f719d4670e794832470182129b40ae" "7e326941134b3236e5212254ab1d740e94b26aa3",
    Sega315_5177 0x0800 "5af7e64781c32029eddee93fe2606de09ca86e66" "a537b04243346465d2e437ff54c28df3835656ec",
    Sega315_5178 0x8000 "af29ddc1506e1c5a40dbad86663fca45aaf4b14e" "30deb3da697ecec9b5508bd457d7752d10d2aab8",
    Sega315_5178 0x0800 "900d5dae4ae1100d7031afd484e21780b45a48f7" "dd36e923e77a718b6bbde3191986f7381db9d6ea",
    Sega315_5179 0x8000 "cdf2fb89abe5474d86dad618662938a00754cb55" "7fd4ee03f2e4dde809cc4cbfc7dda228fa9b9e19",
    Sega315_5179 0x0800 "3302a6eb861899ba20477be0a66abbd2fb44500c" "801142cba9b5bfaba707b37896e0e65a5979cdda",
    Sega317_0004 0x8000 "2dd654c00ddcffac95a9447b1c635f57f6a3cf58" "0cde7677b62a12a572987fffe963f8a726e856f2",
    Sega317_0004 0x0800 "65eec2766d03f9c7a2babba279aeeaf9faab10e2" "89c1ce9a439a284d5d61fb3653497636db598367",
    Sega317_0005 0x8000 "0cde7677b62a12a572987fffe963f8a726e856f2" "92f6479b0b1a2128bd03636a41c9f2fe5fec9368",
    Sega317_0005 0x0800 "89c1ce9a439a284d5d61fb3653497636db598367" "bc0c1d6a74b0d6d6635517f92e8aaa9ce0d82767",
    Sega317_0006 0x8000 "92f6479b0b1a2128bd03636a41c9f2fe5fec9368" "4c4619e4d20df53f78997c78513d6202aef95cd4",
    Sega317_0006 0x0800 "bc0c1d6a74b0d6d6635517f92e8aaa9ce0d82767" "04ae348efe9547ae6bbcede961e22b3981a1a95c",
    Sega317_0007 0x8000 "4c4619e4d20df53f78997c78513d6202aef95cd4" "0c008271dc739a41b07553f7461c9bed8b6e1dd4",
    Sega317_0007 0x0800 "04ae348efe9547ae6bbcede961e22b3981a1a95c" "0386d7719a0f4d09ed343fff97ffb56c6272bad5",
);

#[test]
fn test_constant_images_expose_xor_keys() {
    // the permutation maps 0x00 and 0xff to themselves, leaving only the xor
    for variant in Variant::iter() {
        let schedule = variant.schedule();
        for fill in [0x00, 0xff] {
            let mut rom = vec![fill; ENCRYPTED_REGION];
            let opcodes = decrypt_in_place(&mut rom, &schedule).unwrap();
            for address in 0..ENCRYPTED_REGION {
                let row = segacrp2::row(address as u16);
                assert_eq!(
                    opcodes[address],
                    fill ^ schedule.entry(row, Plane::Opcode).xor,
                    "{variant} opcode at {address:#06x}"
                );
                assert_eq!(
                    rom[address],
                    fill ^ schedule.entry(row, Plane::Data).xor,
                    "{variant} data at {address:#06x}"
                );
            }
        }
    }
}

#[test]
fn test_decrypting_twice_does_not_restore_image() {
    for variant in Variant::iter() {
        let image = synthetic_image(0x800);
        let mut rom = image.clone();
        let opcodes = decrypt_in_place(&mut rom, &variant.schedule()).unwrap();

        let mut again = rom.clone();
        decrypt_in_place(&mut again, &variant.schedule()).unwrap();
        assert_ne!(again, image, "{variant} data plane");

        let mut again = opcodes;
        let again_opcodes = decrypt_in_place(&mut again, &variant.schedule()).unwrap();
        assert_ne!(again_opcodes, image, "{variant} opcode plane");
    }
}

#[test]
fn test_next_shift_opcodes_are_previous_data() {
    let family = [
        Variant::Sega317_0004,
        Variant::Sega317_0005,
        Variant::Sega317_0006,
        Variant::Sega317_0007,
    ];
    for pair in family.windows(2) {
        let prev = EncryptedRom::new(synthetic_image(ENCRYPTED_REGION))
            .unwrap()
            .decrypt(pair[0]);
        let next = EncryptedRom::new(synthetic_image(ENCRYPTED_REGION))
            .unwrap()
            .decrypt(pair[1]);
        assert_eq!(next.opcodes(), prev.data(), "{} vs {}", pair[1], pair[0]);
    }
}

#[test]
fn test_rows_share_keys_across_the_image() {
    // addresses differing only outside A0/A3/A6/A9/A12/A14 decrypt a byte identically
    let variant = Variant::Sega315_5179;
    let mut image = vec![0; ENCRYPTED_REGION];
    image[0x0249] = 0x96;
    image[0x0249 | 0x2000 | 0x0100 | 0x0002] = 0x96;
    let rom = EncryptedRom::new(image).unwrap().decrypt(variant);
    for plane in [Plane::Opcode, Plane::Data] {
        assert_eq!(rom.fetch(0x0249, plane), rom.fetch(0x234b, plane));
    }
}

#[test]
fn test_partial_image_matches_prefix_of_full_image() {
    let full = EncryptedRom::new(synthetic_image(ENCRYPTED_REGION))
        .unwrap()
        .decrypt(Variant::Sega315_5176);
    let part = EncryptedRom::new(synthetic_image(0x1234))
        .unwrap()
        .decrypt(Variant::Sega315_5176);
    assert_eq!(part.opcodes(), &full.opcodes()[..0x1234]);
    assert_eq!(part.data(), &full.data()[..0x1234]);
}
