// [tests/mirror/libs/core/math_engine/word_integrity.test.rs]
/*!
 * =================================================================
 * APARATO: WORD PRIMITIVE CERTIFIER (V6.0 - CARRY CHAINS)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-MATH
 * RESPONSABILIDAD: CERTIFICACIÓN DE PRIMITIVAS DE PALABRA
 * =================================================================
 */

use obsidian_core_math::prelude::*;

#[test]
fn certify_carry_chain_primitives() {
    println!("\n💠 [PROVING_GROUNDS]: Certificando cadenas de acarreo de palabra...");

    // add_with_carry contra el oráculo u128.
    let samples: [(u64, u64, u64); 5] = [
        (u64::MAX, u64::MAX, 1),
        (u64::MAX, 1, 0),
        (0, 0, 1),
        (0x8000_0000_0000_0000, 0x8000_0000_0000_0000, 0),
        (12345, 67890, 1),
    ];
    for (a, b, carry_in) in samples {
        let (sum, carry_out) = add_with_carry(a, b, carry_in);
        let oracle = a as u128 + b as u128 + carry_in as u128;
        assert_eq!(sum, oracle as u64, "L1_WORD_FAULT: suma baja divergente");
        assert_eq!(carry_out, (oracle >> 64) as u64, "L1_WORD_FAULT: acarreo divergente");

        let (difference, borrow) = sub_with_borrow(a, b, carry_in);
        let oracle = (a as u128).wrapping_sub(b as u128).wrapping_sub(carry_in as u128);
        assert_eq!(difference, oracle as u64, "L1_WORD_FAULT: resta divergente");
        assert_eq!(borrow, ((oracle >> 64) as u64) & 1, "L1_WORD_FAULT: préstamo divergente");

        let (high, low) = multiply_wide(a, b);
        let oracle = (a as u128) * (b as u128);
        assert_eq!(low, oracle as u64);
        assert_eq!(high, (oracle >> 64) as u64, "L1_WORD_FAULT: producto alto divergente");

        let (high, low) = multiply_add_2(a, b, carry_in, 7);
        let oracle = (a as u128) * (b as u128) + carry_in as u128 + 7;
        assert_eq!(low, oracle as u64);
        assert_eq!(high, (oracle >> 64) as u64, "L1_WORD_FAULT: muladd2 divergente");
    }
    println!("   ✅ add/sub/mul/muladd2 certificados contra el oráculo u128.");
}

#[test]
fn certify_secret_selectors() {
    println!("\n💠 [PROVING_GROUNDS]: Certificando selectores de secreto...");
    assert_eq!(SecretBool::from_bit(1).mask(), u64::MAX);
    assert_eq!(SecretBool::from_bit(0).mask(), 0);
    assert!(SecretBool::from_word_is_zero(0).to_bool_vartime());
    assert!(!SecretBool::from_word_is_zero(1).to_bool_vartime());
    assert!(!SecretBool::from_word_is_zero(u64::MAX).to_bool_vartime());
    assert!(SecretBool::from_words_eq(42, 42).to_bool_vartime());
    assert!(!SecretBool::from_words_eq(42, 43).to_bool_vartime());
    assert_eq!(SecretBool::TRUE.select_word(7, 9), 7);
    assert_eq!(SecretBool::FALSE.select_word(7, 9), 9);
    assert_eq!(SecretBool::TRUE.and(SecretBool::FALSE), SecretBool::FALSE);
    assert_eq!(SecretBool::TRUE.or(SecretBool::FALSE), SecretBool::TRUE);
    assert_eq!(SecretBool::TRUE.xor(SecretBool::TRUE), SecretBool::FALSE);
    assert_eq!(SecretBool::FALSE.not(), SecretBool::TRUE);

    let mut destination = 11u64;
    conditional_copy_word(&mut destination, 99, SecretBool::FALSE);
    assert_eq!(destination, 11);
    conditional_copy_word(&mut destination, 99, SecretBool::TRUE);
    assert_eq!(destination, 99);

    let mut left = 1u64;
    let mut right = 2u64;
    conditional_swap_words(&mut left, &mut right, SecretBool::TRUE);
    assert_eq!((left, right), (2, 1), "L1_WORD_FAULT: intercambio condicional roto");
    println!("   ✅ Selectores y copias enmascaradas certificados.");
}

/**
 * Escenario sembrado: suma modular con acarreo sobre 128 bits.
 * a = 2^128 - 1, b = 1: el resultado envuelve a cero con acarreo 1.
 */
#[test]
fn certify_modular_add_with_carry_scenario() {
    println!("\n💠 [PROVING_GROUNDS]: Escenario de 128 bits con acarreo...");
    let mut a = BigInt::<2>::from_limbs([u64::MAX, u64::MAX]);
    let b = BigInt::<2>::one();
    let carry = a.add_assign(&b);
    assert_eq!(a, BigInt::<2>::ZERO, "L1_WORD_FAULT: el resultado debe ser cero");
    assert!(carry.to_bool_vartime(), "L1_WORD_FAULT: el acarreo debe ser 1");
    println!("   ✅ Resultado 0 y acarreo 1, bit-perfect.");
}
