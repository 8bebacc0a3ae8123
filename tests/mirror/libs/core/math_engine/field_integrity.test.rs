// [tests/mirror/libs/core/math_engine/field_integrity.test.rs]
/*!
 * =================================================================
 * APARATO: MONTGOMERY FIELD CERTIFIER (V11.0 - ZENITH TORTURE)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-MATH
 * RESPONSABILIDAD: CERTIFICACIÓN DEL CICLO REDC EN TODOS LOS PRIMOS
 *
 * # Mathematical Proof (Montgomery REDC Isomorphism):
 * Se certifica que el producto en el dominio Montgomery, transformado
 * mediante REDC, es congruente con la aritmética de precisión
 * arbitraria: (A * B) mod p en el motor iguala al oráculo num-bigint.
 * =================================================================
 */

use num_bigint::BigUint;
use obsidian_core_math::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn to_oracle<P: FieldParameters<N>, const N: usize>(element: &FieldElement<P, N>) -> BigUint {
    let mut buffer = vec![0u8; N * 8];
    element.to_big_int().write_bytes_be(&mut buffer);
    BigUint::from_bytes_be(&buffer)
}

fn modulus_oracle<P: FieldParameters<N>, const N: usize>() -> BigUint {
    let mut buffer = vec![0u8; N * 8];
    P::MODULUS.write_bytes_be(&mut buffer);
    BigUint::from_bytes_be(&buffer)
}

fn torture_field<P: FieldParameters<N>, const N: usize>(label: &str, seed: u64) {
    println!("   🧪 Fase: torturando el primo {label} (ráfaga 400)...");
    let mut randomness = StdRng::seed_from_u64(seed);
    let prime = modulus_oracle::<P, N>();
    for _ in 0..400 {
        let a = FieldElement::<P, N>::random_uniform(&mut randomness);
        let b = FieldElement::<P, N>::random_uniform(&mut randomness);

        // Roundtrip Montgomery.
        let restored = FieldElement::<P, N>::from_big_int(&a.to_big_int());
        assert_eq!(restored, a, "L1_FIELD_FAULT[{label}]: roundtrip Montgomery roto");

        // Isomorfismo aditivo y multiplicativo.
        assert_eq!(
            to_oracle(&a.add_modular(&b)),
            (to_oracle(&a) + to_oracle(&b)) % &prime,
            "L1_FIELD_FAULT[{label}]: suma divergente"
        );
        assert_eq!(
            to_oracle(&a.subtract_modular(&b)),
            (&prime + to_oracle(&a) - to_oracle(&b)) % &prime,
            "L1_FIELD_FAULT[{label}]: resta divergente"
        );
        assert_eq!(
            to_oracle(&a.multiply_modular(&b)),
            (to_oracle(&a) * to_oracle(&b)) % &prime,
            "L1_FIELD_FAULT[{label}]: producto REDC divergente"
        );

        // Anti-regresión: el cuadrado rápido debe igualar al producto denso.
        assert_eq!(
            a.square_modular(),
            a.multiply_modular(&a),
            "L1_FIELD_FAULT[{label}]: a^2 != a * a"
        );

        // Mitad y duplicación.
        assert_eq!(a.half_modular().double_modular(), a);
        assert_eq!(a.negate_modular().negate_modular(), a);

        // Inverso multiplicativo.
        let inverse = a.invert();
        if a.is_zero().to_bool_vartime() {
            assert!(inverse.is_zero().to_bool_vartime(), "L1_FIELD_FAULT: inv(0) != 0");
        } else {
            assert_eq!(
                a.multiply_modular(&inverse),
                FieldElement::one(),
                "L1_FIELD_FAULT[{label}]: a * inv(a) != 1"
            );
        }
    }
}

#[test]
fn certify_montgomery_cycle_on_every_prime() {
    println!("\n💠 [INICIO]: Tortura isomórfica del motor de campo...");
    torture_field::<Bn254Fp, 4>("bn254-fp", 1);
    torture_field::<Bn254Fr, 4>("bn254-fr", 2);
    torture_field::<Bls12381Fp, 6>("bls12-381-fp", 3);
    torture_field::<Bls12381Fr, 4>("bls12-381-fr", 4);
    torture_field::<Secp256k1Fp, 4>("secp256k1-fp", 5);
    torture_field::<Secp256k1Fr, 4>("secp256k1-fr", 6);
    torture_field::<BandersnatchFr, 4>("bandersnatch-fr", 7);
    torture_field::<Bls12377Fp, 6>("bls12-377-fp", 8);
    torture_field::<Bls12377Fr, 4>("bls12-377-fr", 9);
    torture_field::<Ed25519Fp, 4>("ed25519-fp", 10);
    println!("   ✅ Diez primos certificados bit-perfect.");
}

#[test]
fn certify_exponentiation_ladders() {
    println!("\n💠 [PROVING_GROUNDS]: Escaleras de exponenciación...");
    let mut randomness = StdRng::seed_from_u64(0xEC0);
    for _ in 0..40 {
        let base = FieldElement::<Bn254Fp, 4>::random_uniform(&mut randomness);
        let exponent = FieldElement::<Bn254Fr, 4>::random_uniform(&mut randomness).to_big_int();
        assert_eq!(
            base.pow(&exponent),
            base.pow_vartime(&exponent),
            "L1_FIELD_FAULT: ventana fija != square-multiply"
        );
    }
    // Pequeño teorema de Fermat: a^(p-2) = inv(a).
    let mut exponent = <Bn254Fp as FieldParameters<4>>::MODULUS;
    let _ = exponent.sub_assign(&BigInt::from_word(2));
    let base = FieldElement::<Bn254Fp, 4>::random_uniform(&mut randomness);
    assert_eq!(base.pow(&exponent), base.invert(), "L1_FIELD_FAULT: Fermat != GCD binario");
    println!("   ✅ pow de ventana fija, pow_vartime y Fermat concuerdan.");
}

/**
 * Regresión sembrada del inverso Montgomery sobre Fp de BN254.
 */
#[test]
fn certify_montgomery_inverse_regression() {
    println!("\n💠 [PROVING_GROUNDS]: Regresión de inverso BN254...");
    let input = FieldElement::<Bn254Fp, 4>::from_hex_vartime(
        "0x0d2007d8aaface1b8501bfbe792974166e8f9ad6106e5b563604f0aea9ab06f6",
    )
    .expect("fixture canónico");
    let expected = FieldElement::<Bn254Fp, 4>::from_hex_vartime(
        "0x1b632d8aa572c4356debe80f772228dee49c203f34066a998fba5194b98e56c3",
    )
    .expect("fixture canónico");
    assert_eq!(input.invert(), expected, "L1_FIELD_FAULT: regresión de inverso rota");
    assert_eq!(input.multiply_modular(&expected), FieldElement::one());
    println!("   ✅ Inverso de regresión bit-perfect.");
}

#[test]
fn certify_batch_inversion_with_zeros() {
    println!("\n💠 [PROVING_GROUNDS]: Inversión por lote con ceros intercalados...");
    let mut randomness = StdRng::seed_from_u64(0xBA7C);
    let mut elements: Vec<FieldElement<Bls12381Fp, 6>> = (0..33)
        .map(|_| FieldElement::random_uniform(&mut randomness))
        .collect();
    elements[0] = FieldElement::zero();
    elements[17] = FieldElement::zero();
    let mut results = vec![FieldElement::zero(); elements.len()];
    let mut scratch = vec![FieldElement::zero(); elements.len()];
    FieldElement::batch_invert_into(&elements, &mut results, &mut scratch);
    for (element, inverse) in elements.iter().zip(results.iter()) {
        assert_eq!(
            *inverse,
            element.invert(),
            "L1_FIELD_FAULT: lote difiere de la inversión individual"
        );
    }
    println!("   ✅ Lote de 33 (con ceros) == inversiones individuales.");
}

#[test]
fn certify_hex_roundtrip_and_conditional_setters() {
    println!("\n💠 [PROVING_GROUNDS]: Códecs de campo y setters condicionales...");
    let mut randomness = StdRng::seed_from_u64(0x4E);
    let element = FieldElement::<Bls12381Fr, 4>::random_uniform(&mut randomness);
    let reparsed =
        FieldElement::<Bls12381Fr, 4>::from_hex_vartime(&element.to_hex()).expect("hex propio");
    assert_eq!(reparsed, element, "L1_FIELD_FAULT: from_hex(to_hex(x)) != x");

    let mut target = element;
    target.conditional_set_zero(SecretBool::FALSE);
    assert_eq!(target, element);
    target.conditional_set_one(SecretBool::TRUE);
    assert_eq!(target, FieldElement::one());
    target.conditional_set_zero(SecretBool::TRUE);
    assert!(target.is_zero().to_bool_vartime());

    // Rechazo de valores >= p.
    assert!(FieldElement::<Bn254Fr, 4>::from_hex_vartime(
        "0x30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001"
    )
    .is_err());
    println!("   ✅ Códecs y setters certificados.");
}
