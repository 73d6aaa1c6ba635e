use proptest::prelude::*;
use segacrp2::{
    decrypt_in_place, encrypt_plane, row, KeyEntry, Plane, Variant, ENCRYPTED_REGION, ROW_MASK,
};

fn variant() -> impl Strategy<Value = Variant> {
    prop::sample::select(Variant::iter().collect::<Vec<_>>())
}

fn plane() -> impl Strategy<Value = Plane> {
    prop_oneof![Just(Plane::Opcode), Just(Plane::Data)]
}

fn key_entry() -> impl Strategy<Value = KeyEntry> {
    (any::<u8>(), 0u8..24).prop_map(|(xor, swap)| KeyEntry {
        xor: xor & 0x55,
        swap,
    })
}

proptest! {
    #[test]
    fn prop_row_ignores_unselected_bits(a in any::<u16>(), b in any::<u16>()) {
        let b = (a & ROW_MASK) | (b & !ROW_MASK);
        prop_assert_eq!(row(a), row(b));
        prop_assert!(row(a) < 64);
    }

    #[test]
    fn prop_entry_round_trips(entry in key_entry(), byte in any::<u8>()) {
        prop_assert_eq!(entry.encrypt(entry.decrypt(byte)), byte);
        prop_assert_eq!(entry.decrypt(entry.encrypt(byte)), byte);
    }

    #[test]
    fn prop_entry_is_injective(entry in key_entry(), a in any::<u8>(), b in any::<u8>()) {
        prop_assume!(a != b);
        prop_assert_ne!(entry.decrypt(a), entry.decrypt(b));
    }

    #[test]
    fn prop_encrypt_plane_round_trips(
        variant in variant(),
        plane in plane(),
        plain in prop::collection::vec(any::<u8>(), 1..=ENCRYPTED_REGION / 4),
    ) {
        let schedule = variant.schedule();
        let mut rom = encrypt_plane(&plain, &schedule, plane).unwrap();
        let opcodes = decrypt_in_place(&mut rom, &schedule).unwrap();
        let decrypted = match plane {
            Plane::Opcode => opcodes,
            Plane::Data => rom,
        };
        prop_assert_eq!(decrypted, plain);
    }

    #[test]
    fn prop_each_address_is_independent(
        variant in variant(),
        image in prop::collection::vec(any::<u8>(), 0x100..0x800),
        address in 0usize..0x100,
        value in any::<u8>(),
    ) {
        // changing one encrypted byte changes exactly that byte in both planes
        let schedule = variant.schedule();
        let mut changed = image.clone();
        changed[address] ^= value | 1;

        let mut rom = image;
        let opcodes = decrypt_in_place(&mut rom, &schedule).unwrap();
        let mut rom_changed = changed;
        let opcodes_changed = decrypt_in_place(&mut rom_changed, &schedule).unwrap();

        for i in 0..rom.len() {
            prop_assert_eq!(rom[i] == rom_changed[i], i != address);
            prop_assert_eq!(opcodes[i] == opcodes_changed[i], i != address);
        }
    }
}
