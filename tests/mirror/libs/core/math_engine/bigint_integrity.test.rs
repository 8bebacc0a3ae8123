// [tests/mirror/libs/core/math_engine/bigint_integrity.test.rs]
/*!
 * =================================================================
 * APARATO: BIGINT TORTURE CERTIFIER (V9.0 - ISOMORPHIC ORACLE)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-MATH
 * RESPONSABILIDAD: CERTIFICACIÓN DE LIMBS CONTRA num-bigint
 *
 * # Mathematical Proof (Isomorphic Validation):
 * Cada operación de limbs se espeja contra la aritmética de precisión
 * arbitraria: la mínima desviación bit a bit colapsa la suite.
 * =================================================================
 */

use num_bigint::BigUint;
use obsidian_core_math::prelude::*;
use rand::{rngs::StdRng, RngCore, SeedableRng};

fn random_bigint<const N: usize>(randomness: &mut StdRng) -> BigInt<N> {
    let mut limbs = [0u64; N];
    for limb in limbs.iter_mut() {
        *limb = randomness.next_u64();
    }
    BigInt::from_limbs(limbs)
}

fn to_oracle<const N: usize>(value: &BigInt<N>) -> BigUint {
    let mut buffer = vec![0u8; N * 8];
    value.write_bytes_be(&mut buffer);
    BigUint::from_bytes_be(&buffer)
}

#[test]
fn certify_addition_and_subtraction_against_oracle() {
    println!("\n💠 [PROVING_GROUNDS]: Tortura aditiva de 4 limbs (ráfaga 2000)...");
    let mut randomness = StdRng::seed_from_u64(0xB16B00B5);
    let two_pow_256 = BigUint::from(1u8) << 256;
    for _ in 0..2000 {
        let a = random_bigint::<4>(&mut randomness);
        let b = random_bigint::<4>(&mut randomness);
        let mut sum = a;
        let carry = sum.add_assign(&b);
        let oracle = to_oracle(&a) + to_oracle(&b);
        assert_eq!(to_oracle(&sum), &oracle % &two_pow_256, "L1_LIMB_FAULT: suma divergente");
        assert_eq!(carry.to_bool_vartime(), oracle >= two_pow_256);

        let mut difference = a;
        let borrow = difference.sub_assign(&b);
        assert_eq!(borrow.to_bool_vartime(), to_oracle(&a) < to_oracle(&b));
        let oracle_diff =
            (&two_pow_256 + to_oracle(&a) - to_oracle(&b)) % &two_pow_256;
        assert_eq!(to_oracle(&difference), oracle_diff, "L1_LIMB_FAULT: resta divergente");
    }
    println!("   ✅ Suma y resta con acarreo certificadas.");
}

#[test]
fn certify_full_and_truncated_products() {
    println!("\n💠 [PROVING_GROUNDS]: Tortura multiplicativa (ráfaga 1000)...");
    let mut randomness = StdRng::seed_from_u64(0xCAFE);
    for _ in 0..1000 {
        let a = random_bigint::<4>(&mut randomness);
        let b = random_bigint::<6>(&mut randomness);
        let mut product = BigInt::<10>::ZERO;
        multiply_full(&mut product, &a, &b);
        assert_eq!(
            to_oracle(&product),
            to_oracle(&a) * to_oracle(&b),
            "L1_LIMB_FAULT: producto completo divergente"
        );

        // Producto truncado alto: cociente exacto por 2^(64 s).
        for start_word in 0..10usize {
            let mut high = BigInt::<10>::ZERO;
            multiply_high_words(&mut high, &a, &b, start_word);
            let oracle = (to_oracle(&a) * to_oracle(&b)) >> (64 * start_word);
            assert_eq!(
                to_oracle(&high),
                oracle,
                "L1_LIMB_FAULT: truncado alto divergente en s = {start_word}"
            );
        }

        let low = a.multiply_low(&random_bigint::<4>(&mut randomness));
        let _ = low; // el contrato envolvente se certifica en la descomposición GLV
    }
    println!("   ✅ Productos completos y truncados certificados.");
}

/**
 * Propiedad que fija la semántica del truncado: todas las columnas
 * bajas generan acarreo (operandos todo-unos) y el primer limb
 * retenido debe absorberlo exactamente.
 */
#[test]
fn certify_all_lower_words_trigger_a_carry() {
    println!("\n💠 [PROVING_GROUNDS]: Propiedad de acarreo de columnas descartadas...");
    let a = BigInt::<4>::from_limbs([u64::MAX; 4]);
    let b = BigInt::<4>::from_limbs([u64::MAX; 4]);
    for start_word in 1..8usize {
        let mut high = BigInt::<8>::ZERO;
        multiply_high_words(&mut high, &a, &b, start_word);
        let oracle = (to_oracle(&a) * to_oracle(&b)) >> (64 * start_word);
        assert_eq!(
            to_oracle(&high),
            oracle,
            "L1_LIMB_FAULT: el acarreo del primer limb descartado se perdió (s = {start_word})"
        );
    }
    println!("   ✅ Acarreo de la primera columna descartada absorbido bit-perfect.");
}

#[test]
fn certify_wide_reduction() {
    println!("\n💠 [PROVING_GROUNDS]: Reducción ancha contra el oráculo...");
    let mut randomness = StdRng::seed_from_u64(0xD00D);
    let modulus = <obsidian_core_math::params::bn254::Bn254Fp as FieldParameters<4>>::MODULUS;
    for _ in 0..200 {
        let wide = random_bigint::<8>(&mut randomness);
        let mut reduced = BigInt::<4>::ZERO;
        reduce_wide(&mut reduced, &wide, &modulus);
        assert_eq!(
            to_oracle(&reduced),
            to_oracle(&wide) % to_oracle(&modulus),
            "L1_LIMB_FAULT: reducción ancha divergente"
        );
    }
    println!("   ✅ Reducción de 512 a 254 bits certificada.");
}

#[test]
fn certify_binary_modular_inverse() {
    println!("\n💠 [PROVING_GROUNDS]: GCD binario de iteración fija...");
    let mut randomness = StdRng::seed_from_u64(0xFEED);
    let modulus = <obsidian_core_math::params::bn254::Bn254Fr as FieldParameters<4>>::MODULUS;
    let half = <obsidian_core_math::params::bn254::Bn254Fr as FieldParameters<4>>::MODULUS_PLUS_ONE_HALF;
    let oracle_modulus = to_oracle(&modulus);
    for _ in 0..150 {
        let mut candidate = random_bigint::<4>(&mut randomness);
        // Se fuerza al rango canónico.
        let mut reduced = BigInt::<4>::ZERO;
        let mut wide = BigInt::<8>::ZERO;
        wide.limbs[..4].copy_from_slice(&candidate.limbs);
        reduce_wide(&mut reduced, &wide, &modulus);
        candidate = reduced;
        let inverse = candidate.modular_inverse_binary(&modulus, &half, 254);
        let product = (to_oracle(&candidate) * to_oracle(&inverse)) % &oracle_modulus;
        if candidate.is_zero().to_bool_vartime() {
            assert!(inverse.is_zero().to_bool_vartime());
        } else {
            assert_eq!(product, BigUint::from(1u8), "L1_LIMB_FAULT: inverso binario inválido");
        }
    }
    // Convención: cero y no-coprimos producen cero.
    let zero_inverse = BigInt::<4>::ZERO.modular_inverse_binary(&modulus, &half, 254);
    assert!(zero_inverse.is_zero().to_bool_vartime(), "L1_LIMB_FAULT: inv(0) debe ser 0");
    println!("   ✅ Inverso modular binario certificado (incluido inv(0) = 0).");
}

#[test]
fn certify_conditional_operations_and_shifts() {
    println!("\n💠 [PROVING_GROUNDS]: Operaciones condicionales enmascaradas...");
    let mut randomness = StdRng::seed_from_u64(0xACE);
    for _ in 0..300 {
        let a = random_bigint::<4>(&mut randomness);
        let b = random_bigint::<4>(&mut randomness);

        let mut guarded = a;
        let _ = guarded.conditional_add(&b, SecretBool::FALSE);
        assert_eq!(guarded, a, "L1_LIMB_FAULT: cadd con selector falso alteró el valor");
        let _ = guarded.conditional_subtract(&b, SecretBool::FALSE);
        guarded.conditional_negate(SecretBool::FALSE);
        assert_eq!(guarded, a);

        let mut negated = a;
        negated.conditional_negate(SecretBool::TRUE);
        let mut roundtrip = negated;
        roundtrip.conditional_negate(SecretBool::TRUE);
        assert_eq!(roundtrip, a, "L1_LIMB_FAULT: doble negación no es identidad");

        let mut left = a;
        let mut right = b;
        BigInt::conditional_swap(&mut left, &mut right, SecretBool::TRUE);
        assert_eq!((left, right), (b, a));

        let shift = (randomness.next_u64() % 255) as u32;
        let mut shifted = a;
        shifted.shift_right(shift);
        assert_eq!(to_oracle(&shifted), to_oracle(&a) >> shift, "L1_LIMB_FAULT: shift divergente");
    }
    println!("   ✅ ccopy/cswap/cneg/shift certificados.");
}

#[test]
fn certify_hex_and_byte_codecs() {
    println!("\n💠 [PROVING_GROUNDS]: Códecs hex y bytes...");
    let value = BigInt::<4>::from_hex_vartime("0x30644e72_e131a029_b85045b6_8181585d_2833e848_79b97091_43e1f593_f0000001")
        .expect("hex canónico");
    assert_eq!(
        value.to_hex(),
        "0x30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001"
    );
    // Ida y vuelta por ambas endiannesses.
    let mut big_endian = [0u8; 32];
    value.write_bytes_be(&mut big_endian);
    assert_eq!(BigInt::<4>::read_bytes_be(&big_endian).expect("be"), value);
    let mut little_endian = [0u8; 32];
    value.write_bytes_le(&mut little_endian);
    assert_eq!(BigInt::<4>::read_bytes_le(&little_endian).expect("le"), value);

    // Rechazos: dígito ilegal y desborde de capacidad.
    assert!(BigInt::<4>::from_hex_vartime("0xzz").is_err());
    assert!(BigInt::<1>::from_hex_vartime("0x1_00000000_00000000").is_err());
    // Rechazo por módulo.
    let modulus = BigInt::<4>::from_word(97);
    assert!(BigInt::<4>::from_hex_checked_vartime("0x61", &modulus).is_err());
    assert!(BigInt::<4>::from_hex_checked_vartime("0x60", &modulus).is_ok());
    println!("   ✅ Códecs certificados con tolerancia 0x / separadores.");
}
