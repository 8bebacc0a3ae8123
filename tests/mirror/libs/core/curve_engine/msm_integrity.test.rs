// [tests/mirror/libs/core/curve_engine/msm_integrity.test.rs]
/*!
 * =================================================================
 * APARATO: PIPPENGER PARITY CERTIFIER (V10.0 - BUCKET SWEEP)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L2-GEOMETRY
 * RESPONSABILIDAD: MSM OPTIMIZADO CONTRA LA REFERENCIA INGENUA,
 * VENTANA SUPERIOR VACÍA Y PARIDAD SERIAL / PARALELA
 * =================================================================
 */

use obsidian_core_curve::prelude::*;
use obsidian_core_math::prelude::{reduce_wide, BigInt};
use rand::{rngs::StdRng, RngCore, SeedableRng};

fn random_inputs<C: CurveParameters>(
    count: usize,
    randomness: &mut StdRng,
) -> (Vec<BigInt<4>>, Vec<AffinePoint<C>>) {
    let generator = ProjectivePoint::<C>::generator();
    let mut scalars = Vec::with_capacity(count);
    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        let mut wide = BigInt::<8>::ZERO;
        for limb in wide.limbs[..4].iter_mut() {
            *limb = randomness.next_u64();
        }
        let mut scalar = BigInt::<4>::ZERO;
        reduce_wide(&mut scalar, &wide, &C::ORDER);
        scalars.push(scalar);
        let seed = BigInt::<4>::from_word(randomness.next_u64() | 1);
        points.push(WeierstrassEngine::<C>::affine_from_projective(
            &scalar_mul_double_add_vartime(&generator, &seed),
        ));
    }
    (scalars, points)
}

#[test]
fn certify_bucket_msm_against_reference() {
    println!("\n💠 [INICIO]: Barrido de cubos contra la referencia ingenua...");
    let mut randomness = StdRng::seed_from_u64(71);
    for count in [0usize, 1, 2, 3, 7, 17, 31, 32, 33, 64, 200] {
        let (scalars, points) = random_inputs::<Bn254G1>(count, &mut randomness);
        let mut scratch = MsmScratch::for_size(count);
        let optimized = msm_vartime(&scalars, &points, &mut scratch);
        let reference = msm_reference_vartime(&scalars, &points);
        assert!(
            optimized.equals(&reference).to_bool_vartime(),
            "L2_MSM_FAULT: divergencia con N = {count}"
        );
    }
    println!("   ✅ Tamaños 0..200 certificados (ventanas c = 4 y c = 8).");
}

#[test]
fn certify_wide_window_schedule() {
    println!("\n💠 [PROVING_GROUNDS]: Ventana ancha (c = 13) y ventana superior vacía...");
    assert_eq!(window_width_for(16), 4);
    assert_eq!(window_width_for(100), 8);
    assert_eq!(window_width_for(600), 13);
    assert_eq!(window_width_for(70_000), 16);

    // 600 puntos disparan la ruta c = 13; con orden de 254 bits la
    // ventana superior del recodificado firmado queda vacía y debe
    // omitirse sin off-by-one.
    let mut randomness = StdRng::seed_from_u64(72);
    let (scalars, points) = random_inputs::<Bn254G1>(600, &mut randomness);
    let mut scratch = MsmScratch::for_size(600);
    let optimized = msm_vartime(&scalars, &points, &mut scratch);
    let reference = msm_reference_vartime(&scalars, &points);
    assert!(
        optimized.equals(&reference).to_bool_vartime(),
        "L2_MSM_FAULT: regresión de ventana superior vacía"
    );
    println!("   ✅ Ruta c = 13 certificada con la guardia de ventana vacía.");
}

#[test]
fn certify_twist_msm() {
    println!("\n💠 [PROVING_GROUNDS]: MSM sobre el twist G2 de BN254...");
    let mut randomness = StdRng::seed_from_u64(73);
    let (scalars, points) = random_inputs::<Bn254G2>(40, &mut randomness);
    let mut scratch = MsmScratch::for_size(40);
    let optimized = msm_vartime(&scalars, &points, &mut scratch);
    let reference = msm_reference_vartime(&scalars, &points);
    assert!(optimized.equals(&reference).to_bool_vartime(), "L2_MSM_FAULT: G2 divergente");
    println!("   ✅ Cubos sobre Fp2 certificados.");
}

#[test]
fn certify_parallel_serial_bit_identity() {
    println!("\n💠 [PROVING_GROUNDS]: Paridad bit-idéntica serial / paralela...");
    let mut randomness = StdRng::seed_from_u64(74);
    let (scalars, points) = random_inputs::<Bls12381G1>(150, &mut randomness);
    let mut scratch = MsmScratch::for_size(150);
    let serial = msm_vartime(&scalars, &points, &mut scratch);
    let parallel = msm_parallel_vartime(&scalars, &points);
    // El contrato del estrato paralelo es identidad bit a bit, no solo
    // igualdad de grupo: mismas coordenadas proyectivas.
    assert!(serial.x.equals(&parallel.x).to_bool_vartime(), "L2_MSM_FAULT: X difiere");
    assert!(serial.y.equals(&parallel.y).to_bool_vartime(), "L2_MSM_FAULT: Y difiere");
    assert!(serial.z.equals(&parallel.z).to_bool_vartime(), "L2_MSM_FAULT: Z difiere");
    println!("   ✅ Árbol de reducción determinista certificado.");
}

#[test]
fn certify_degenerate_inputs() {
    println!("\n💠 [PROVING_GROUNDS]: Entradas degeneradas...");
    let mut randomness = StdRng::seed_from_u64(75);
    let (mut scalars, mut points) = random_inputs::<Bn254G1>(9, &mut randomness);
    // Escalar nulo y punto en el infinito intercalados.
    scalars[3] = BigInt::ZERO;
    points[5] = AffinePoint::infinity();
    let mut scratch = MsmScratch::for_size(9);
    let optimized = msm_vartime(&scalars, &points, &mut scratch);
    let reference = msm_reference_vartime(&scalars, &points);
    assert!(optimized.equals(&reference).to_bool_vartime(), "L2_MSM_FAULT: degenerados rotos");
    println!("   ✅ Escalares nulos y puntos neutros absorbidos.");
}
