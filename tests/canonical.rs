use proptest::prelude::*;
use sha2::{Digest, Sha512};

use uint512::{BigEndianBytes, U512, as_view, is_little_endian, to_big_endian_bytes};

fn any_u512() -> impl Strategy<Value = U512> {
    any::<[u64; 8]>().prop_map(U512::from)
}

fn expected_be(words: [u64; 8]) -> [u8; 64] {
    let mut out = [0u8; 64];

    for (chunk, w) in out.chunks_exact_mut(8).zip(words) {
        chunk.copy_from_slice(&w.to_be_bytes());
    }

    out
}

#[test]
fn canonical_one_is_63_zeros_then_one() {
    let bytes = to_big_endian_bytes(U512::from_words(0, 0, 0, 0, 0, 0, 0, 1));

    assert!(bytes.as_bytes()[..63].iter().all(|&b| b == 0));
    assert_eq!(bytes[63], 0x01);
    assert_eq!(bytes, to_big_endian_bytes(U512::from_word(1)));
}

#[test]
fn canonical_top_word_lands_first() {
    let value = U512::from_words(0x0102_0304_0506_0708, 0, 0, 0, 0, 0, 0, 0);
    let bytes = to_big_endian_bytes(value);

    assert_eq!(bytes[0], 0x01);
    assert_eq!(bytes[7], 0x08);
    assert!(bytes.as_bytes()[8..].iter().all(|&b| b == 0));
}

#[test]
fn canonical_max_and_zero() {
    assert_eq!(to_big_endian_bytes(U512::MAX).into_inner(), [0xFF; 64]);
    assert_eq!(to_big_endian_bytes(U512::ZERO).into_inner(), [0x00; 64]);
}

#[test]
fn canonical_hashes_like_hand_built_bytes() {
    let words = [
        0x6A09_E667_F3BC_C908,
        0xBB67_AE85_84CA_A73B,
        0x3C6E_F372_FE94_F82B,
        0xA54F_F53A_5F1D_36F1,
        0x510E_527F_ADE6_82D1,
        0x9B05_688C_2B3E_6C1F,
        0x1F83_D9AB_FB41_BD6B,
        0x5BE0_CD19_137E_2179,
    ];
    let canonical = U512::from(words).to_be_bytes();

    let lhs = Sha512::digest(canonical.as_bytes());
    let rhs = Sha512::digest(expected_be(words));

    assert_eq!(lhs, rhs);
}

#[test]
fn canonical_via_trait_and_method_agree() {
    let value = U512::from_words(9, 8, 7, 6, 5, 4, 3, 2);
    let a: BigEndianBytes = value.into();
    let b: [u8; 64] = value.to_be_bytes().into();

    assert_eq!(a, to_big_endian_bytes(value));
    assert_eq!(a.into_inner(), b);
}

proptest! {
    #[test]
    fn canonical_is_concatenated_be_words(words in any::<[u64; 8]>()) {
        let [a, b, c, d, e, f, g, h] = words;
        let bytes = to_big_endian_bytes(U512::from_words(a, b, c, d, e, f, g, h));

        prop_assert_eq!(bytes.into_inner(), expected_be(words));
    }

    #[test]
    fn canonical_is_deterministic(value in any_u512()) {
        prop_assert_eq!(to_big_endian_bytes(value), to_big_endian_bytes(value));
    }

    #[test]
    fn canonical_zero_extends_single_word(x in any::<u64>()) {
        let bytes = to_big_endian_bytes(U512::from_word(x));

        prop_assert!(bytes.as_bytes()[..56].iter().all(|&b| b == 0));
        prop_assert_eq!(&bytes.as_bytes()[56..], &x.to_be_bytes());
    }

    #[test]
    fn canonical_reverses_native_bytes_on_little_endian(value in any_u512()) {
        let native = *as_view(value).bytes();
        let canonical = to_big_endian_bytes(value).into_inner();

        if is_little_endian() {
            let mut reversed = native;
            reversed.reverse();
            prop_assert_eq!(canonical, reversed);
        } else {
            prop_assert_eq!(canonical, native);
        }
    }

    #[test]
    fn canonical_order_matches_numeric_order(a in any_u512(), b in any_u512()) {
        prop_assert_eq!(a.cmp(&b), to_big_endian_bytes(a).cmp(&to_big_endian_bytes(b)));
    }
}
