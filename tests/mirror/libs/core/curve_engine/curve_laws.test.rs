// [tests/mirror/libs/core/curve_engine/curve_laws.test.rs]
/*!
 * =================================================================
 * APARATO: GROUP LAW CERTIFIER (V9.0 - COMPLETE FORMULAS)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-GEOMETRY
 * RESPONSABILIDAD: AXIOMAS DE GRUPO EN TODOS LOS SISTEMAS DE
 * COORDENADAS, CON Z = 1 Y Z ALEATORIO
 * =================================================================
 */

use obsidian_core_curve::prelude::*;
use obsidian_core_math::prelude::BigInt;
use rand::{rngs::StdRng, RngCore, SeedableRng};

fn random_scalar(randomness: &mut StdRng) -> BigInt<4> {
    let mut limbs = [0u64; 4];
    for limb in limbs.iter_mut() {
        *limb = randomness.next_u64();
    }
    limbs[3] >>= 4;
    BigInt::from_limbs(limbs)
}

/// Punto aleatorio del subgrupo con denominador proyectivo no trivial.
fn random_point<C: CurveParameters>(randomness: &mut StdRng) -> ProjectivePoint<C> {
    let point = scalar_mul_double_add_vartime(
        &ProjectivePoint::<C>::generator(),
        &random_scalar(randomness),
    );
    // El resultado de la escalera ya porta Z aleatorio no trivial.
    point
}

fn certify_axioms<C: CurveParameters>(label: &str, seed: u64) {
    println!("   🧪 Fase: axiomas sobre {label}...");
    let mut randomness = StdRng::seed_from_u64(seed);
    let identity = ProjectivePoint::<C>::identity();
    for round in 0..12 {
        let p = if round == 0 {
            ProjectivePoint::<C>::generator()
        } else {
            random_point::<C>(&mut randomness)
        };
        let q = random_point::<C>(&mut randomness);
        let r = random_point::<C>(&mut randomness);

        // Identidad bilateral.
        assert!(
            WeierstrassEngine::<C>::sum(&p, &identity).equals(&p).to_bool_vartime(),
            "L1_GEOMETRY_FAULT[{label}]: P + O != P"
        );
        assert!(
            WeierstrassEngine::<C>::sum(&identity, &p).equals(&p).to_bool_vartime(),
            "L1_GEOMETRY_FAULT[{label}]: O + P != P"
        );
        // Inverso.
        assert!(
            WeierstrassEngine::<C>::sum(&p, &p.negate()).is_identity().to_bool_vartime(),
            "L1_GEOMETRY_FAULT[{label}]: P + (-P) != O"
        );
        // Conmutatividad.
        assert!(
            WeierstrassEngine::<C>::sum(&p, &q)
                .equals(&WeierstrassEngine::<C>::sum(&q, &p))
                .to_bool_vartime(),
            "L1_GEOMETRY_FAULT[{label}]: conmutatividad rota"
        );
        // Asociatividad.
        let left = WeierstrassEngine::<C>::sum(&WeierstrassEngine::<C>::sum(&p, &q), &r);
        let right = WeierstrassEngine::<C>::sum(&p, &WeierstrassEngine::<C>::sum(&q, &r));
        assert!(left.equals(&right).to_bool_vartime(), "L1_GEOMETRY_FAULT[{label}]: asociatividad rota");
        // Duplicación por la ley completa.
        assert!(
            WeierstrassEngine::<C>::sum(&p, &p)
                .equals(&WeierstrassEngine::<C>::double(&p))
                .to_bool_vartime(),
            "L1_GEOMETRY_FAULT[{label}]: P + P != 2P"
        );
        // Suma mixta contra la suma proyectiva pura.
        let q_affine = WeierstrassEngine::<C>::affine_from_projective(&q);
        assert!(
            WeierstrassEngine::<C>::mixed_sum(&p, &q_affine)
                .equals(&WeierstrassEngine::<C>::sum(&p, &q))
                .to_bool_vartime(),
            "L1_GEOMETRY_FAULT[{label}]: mixta != proyectiva pura"
        );
        // Mixta con el neutro afín.
        assert!(
            WeierstrassEngine::<C>::mixed_sum(&p, &AffinePoint::infinity())
                .equals(&p)
                .to_bool_vartime(),
            "L1_GEOMETRY_FAULT[{label}]: mixta con infinito rota"
        );
        // Conversión ida y vuelta.
        let roundtrip = WeierstrassEngine::<C>::projective_from_affine(
            &WeierstrassEngine::<C>::affine_from_projective(&p),
        );
        assert!(roundtrip.equals(&p).to_bool_vartime(), "L1_GEOMETRY_FAULT[{label}]: conversión rota");
        assert!(q_affine.is_on_curve().to_bool_vartime());
    }
    // El infinito proyecta al infinito afín.
    let infinity_affine = WeierstrassEngine::<C>::affine_from_projective(&identity);
    assert!(infinity_affine.is_infinity.to_bool_vartime());
    println!("      ✅ Axiomas completos certificados.");
}

#[test]
fn certify_group_laws_every_catalog() {
    println!("\n💠 [INICIO]: Leyes de grupo Weierstrass completas...");
    certify_axioms::<Bn254G1>("bn254-g1", 31);
    certify_axioms::<Bn254G2>("bn254-g2", 32);
    certify_axioms::<Bls12381G1>("bls12-381-g1", 33);
    certify_axioms::<Bls12381G2>("bls12-381-g2", 34);
    certify_axioms::<Secp256k1>("secp256k1", 35);
    certify_axioms::<Bls12377G1>("bls12-377-g1", 36);
    certify_axioms::<Bls12377G2>("bls12-377-g2", 37);
    println!("   ✅ Siete catálogos certificados.");
}

fn certify_jacobian_parity<C: CurveParameters>(label: &str, seed: u64) {
    println!("   🧪 Fase: paridad Jacobiana sobre {label}...");
    let mut randomness = StdRng::seed_from_u64(seed);
    for _ in 0..10 {
        let p = random_point::<C>(&mut randomness);
        let q = random_point::<C>(&mut randomness);
        let p_affine = WeierstrassEngine::<C>::affine_from_projective(&p);
        let q_affine = WeierstrassEngine::<C>::affine_from_projective(&q);
        let p_jacobian = JacobianPoint::<C>::from_affine(&p_affine);

        // Suma mixta y duplicación contra el motor completo.
        let mixed = JacobianEngine::<C>::add_mixed_vartime(&p_jacobian, &q_affine);
        let expected = WeierstrassEngine::<C>::affine_from_projective(
            &WeierstrassEngine::<C>::sum(&p, &q),
        );
        assert!(
            JacobianEngine::<C>::affine_from_jacobian(&mixed).equals(&expected).to_bool_vartime(),
            "L1_GEOMETRY_FAULT[{label}]: mixta Jacobiana divergente"
        );
        let doubled = JacobianEngine::<C>::double(&p_jacobian);
        let expected = WeierstrassEngine::<C>::affine_from_projective(
            &WeierstrassEngine::<C>::double(&p),
        );
        assert!(
            JacobianEngine::<C>::affine_from_jacobian(&doubled).equals(&expected).to_bool_vartime(),
            "L1_GEOMETRY_FAULT[{label}]: duplicación Jacobiana divergente"
        );
        // Singularidades de la ruta vartime.
        let q_jacobian = JacobianPoint::<C>::from_affine(&q_affine);
        let collision = JacobianEngine::<C>::sum_vartime(&q_jacobian, &q_jacobian);
        assert!(
            JacobianEngine::<C>::affine_from_jacobian(&collision)
                .equals(&WeierstrassEngine::<C>::affine_from_projective(
                    &WeierstrassEngine::<C>::double(&q)
                ))
                .to_bool_vartime(),
            "L1_GEOMETRY_FAULT[{label}]: colisión P == Q mal resuelta"
        );
        let cancelled =
            JacobianEngine::<C>::add_mixed_vartime(&q_jacobian, &q_affine.negate());
        assert!(cancelled.is_infinity_vartime(), "L1_GEOMETRY_FAULT[{label}]: P - P != O");
    }
    println!("      ✅ Motor Jacobiano en paridad con la ley completa.");
}

#[test]
fn certify_jacobian_engine_parity() {
    println!("\n💠 [INICIO]: Paridad Jacobiana / proyectiva...");
    certify_jacobian_parity::<Bn254G1>("bn254-g1", 41);
    certify_jacobian_parity::<Bls12381G1>("bls12-381-g1", 42);
    certify_jacobian_parity::<Bls12381G2>("bls12-381-g2", 43);
    certify_jacobian_parity::<Bls12377G1>("bls12-377-g1", 44);
    println!("   ✅ Coordenadas Jacobianas certificadas.");
}
