// [tests/mirror/libs/core/curve_engine/batch_affine_parity.test.rs]
/*!
 * =================================================================
 * APARATO: BATCH PROJECTION CERTIFIER (V7.0 - MONTGOMERY TRICK)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-GEOMETRY
 * RESPONSABILIDAD: LOTE AFÍN == CONVERSIONES INDIVIDUALES
 * =================================================================
 */

use obsidian_core_curve::prelude::*;
use obsidian_core_math::prelude::BigInt;
use rand::{rngs::StdRng, RngCore, SeedableRng};

#[test]
fn certify_projective_batch_matches_individual() {
    println!("\n💠 [INICIO]: Lote afín proyectivo (N = 65 con infinitos)...");
    let mut randomness = StdRng::seed_from_u64(81);
    let generator = ProjectivePoint::<Bls12381G1>::generator();
    let mut sources: Vec<ProjectivePoint<Bls12381G1>> = (0..65)
        .map(|_| {
            scalar_mul_double_add_vartime(
                &generator,
                &BigInt::<4>::from_word(randomness.next_u64() | 1),
            )
        })
        .collect();
    sources[0] = ProjectivePoint::identity();
    sources[33] = ProjectivePoint::identity();

    let mut batch = vec![AffinePoint::<Bls12381G1>::infinity(); sources.len()];
    let mut scratch =
        vec![<Bls12381G1 as CurveParameters>::Field::field_zero(); 3 * sources.len()];
    batch_affine_from_projective(&sources, &mut batch, &mut scratch);
    for (source, converted) in sources.iter().zip(batch.iter()) {
        let individual = WeierstrassEngine::<Bls12381G1>::affine_from_projective(source);
        assert!(
            converted.equals(&individual).to_bool_vartime(),
            "L1_BATCH_FAULT: lote != conversión individual"
        );
    }
    println!("   ✅ 65 conversiones (2 infinitos) en paridad con una sola inversión.");
}

#[test]
fn certify_jacobian_batch_matches_individual() {
    println!("\n💠 [PROVING_GROUNDS]: Lote afín Jacobiano...");
    let mut randomness = StdRng::seed_from_u64(82);
    let generator = ProjectivePoint::<Bn254G1>::generator();
    let mut sources: Vec<JacobianPoint<Bn254G1>> = (0..33)
        .map(|_| {
            let affine = WeierstrassEngine::<Bn254G1>::affine_from_projective(
                &scalar_mul_double_add_vartime(
                    &generator,
                    &BigInt::<4>::from_word(randomness.next_u64() | 1),
                ),
            );
            let jacobian = JacobianPoint::from_affine(&affine);
            // Denominadores no triviales via una duplicación.
            JacobianEngine::<Bn254G1>::double(&jacobian)
        })
        .collect();
    sources[7] = JacobianPoint::infinity();

    let mut batch = vec![AffinePoint::<Bn254G1>::infinity(); sources.len()];
    let mut scratch = vec![<Bn254G1 as CurveParameters>::Field::field_zero(); 3 * sources.len()];
    batch_affine_from_jacobian(&sources, &mut batch, &mut scratch);
    for (source, converted) in sources.iter().zip(batch.iter()) {
        let individual = JacobianEngine::<Bn254G1>::affine_from_jacobian(source);
        assert!(
            converted.equals(&individual).to_bool_vartime(),
            "L1_BATCH_FAULT: lote Jacobiano != individual"
        );
    }
    println!("   ✅ Lote Jacobiano certificado.");
}

#[test]
fn certify_fixed_base_table() {
    println!("\n💠 [PROVING_GROUNDS]: Tabla de base fija del generador...");
    let mut randomness = StdRng::seed_from_u64(83);
    for _ in 0..8 {
        let mut limbs = [0u64; 4];
        for limb in limbs.iter_mut() {
            *limb = randomness.next_u64();
        }
        limbs[3] >>= 4;
        let scalar = BigInt::from_limbs(limbs);
        let table_result = BN254_G1_GENERATOR_TABLE.scalar_mul(&scalar);
        let reference = scalar_mul_double_add_vartime(
            &ProjectivePoint::<Bn254G1>::generator(),
            &scalar,
        );
        assert!(
            table_result.equals(&reference).to_bool_vartime(),
            "L1_BATCH_FAULT: tabla de base fija divergente"
        );
    }
    // Las tres tablas perezosas materializan sin colisión.
    let _ = BLS12381_G1_GENERATOR_TABLE.scalar_mul(&BigInt::from_word(5));
    let _ = SECP256K1_GENERATOR_TABLE.scalar_mul(&BigInt::from_word(5));
    println!("   ✅ Tablas de ventana fija certificadas.");
}
