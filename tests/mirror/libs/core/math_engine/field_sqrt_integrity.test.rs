// [tests/mirror/libs/core/math_engine/field_sqrt_integrity.test.rs]
/*!
 * =================================================================
 * APARATO: SQUARE ROOT CERTIFIER (V7.0 - DUAL STRATEGY)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-MATH
 * RESPONSABILIDAD: RAÍCES POR EXPONENTE DIRECTO Y TONELLI-SHANKS
 * =================================================================
 */

use obsidian_core_math::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn certify_sqrt<P: FieldParameters<N>, const N: usize>(label: &str, seed: u64) {
    println!("   🧪 Fase: raíces cuadradas en {label}...");
    let mut randomness = StdRng::seed_from_u64(seed);
    let mut square_hits = 0u32;
    let mut reject_hits = 0u32;
    for _ in 0..200 {
        let witness = FieldElement::<P, N>::random_uniform(&mut randomness);
        let square = witness.square_modular();
        let mut candidate = square;
        let has_root = candidate.sqrt_if_square();
        assert!(has_root.to_bool_vartime(), "L1_SQRT_FAULT[{label}]: cuadrado sin raíz");
        // La raíz devuelta es la del residuo o su negada.
        assert!(
            candidate.equals(&witness).to_bool_vartime()
                || candidate.equals(&witness.negate_modular()).to_bool_vartime(),
            "L1_SQRT_FAULT[{label}]: raíz ajena al par +-x"
        );
        assert_eq!(candidate.square_modular(), square);
        square_hits += 1;

        // Un no-residuo deja intacto al receptor y retorna falso.
        let probe = FieldElement::<P, N>::random_uniform(&mut randomness);
        let original = probe;
        let mut receiver = probe;
        if !receiver.sqrt_if_square().to_bool_vartime() {
            assert_eq!(receiver, original, "L1_SQRT_FAULT[{label}]: receptor alterado en fallo");
            reject_hits += 1;
        }
    }
    // Aproximadamente la mitad de los sondeos aleatorios no son residuos.
    assert!(reject_hits > 40, "L1_SQRT_FAULT[{label}]: distribución de residuos sospechosa");
    println!("      ✅ {square_hits} raíces y {reject_hits} rechazos limpios.");
}

#[test]
fn certify_direct_exponent_roots() {
    println!("\n💠 [INICIO]: Raíces por exponente (p + 1) / 4 (p = 3 mod 4)...");
    certify_sqrt::<Bn254Fp, 4>("bn254-fp", 10);
    certify_sqrt::<Bls12381Fp, 6>("bls12-381-fp", 11);
    certify_sqrt::<Secp256k1Fp, 4>("secp256k1-fp", 12);
}

#[test]
fn certify_tonelli_shanks_roots() {
    println!("\n💠 [INICIO]: Raíces Tonelli-Shanks (primos 2-ádicos)...");
    certify_sqrt::<Bn254Fr, 4>("bn254-fr (2-adicidad 28)", 13);
    certify_sqrt::<Bls12381Fr, 4>("bls12-381-fr (2-adicidad 32)", 14);
    certify_sqrt::<Secp256k1Fr, 4>("secp256k1-fr", 15);
    certify_sqrt::<Bls12377Fp, 6>("bls12-377-fp (p = 1 mod 4)", 16);
    certify_sqrt::<Bls12377Fr, 4>("bls12-377-fr (2-adicidad 47)", 17);
    certify_sqrt::<Ed25519Fp, 4>("ed25519-fp (p = 5 mod 8)", 18);
}

#[test]
fn certify_sqrt_edge_values() {
    println!("\n💠 [PROVING_GROUNDS]: Bordes cero y uno...");
    let mut zero = FieldElement::<Bls12381Fr, 4>::zero();
    assert!(zero.sqrt_if_square().to_bool_vartime(), "L1_SQRT_FAULT: sqrt(0) debe existir");
    assert!(zero.is_zero().to_bool_vartime());
    let mut one = FieldElement::<Bls12381Fr, 4>::one();
    assert!(one.sqrt_if_square().to_bool_vartime());
    assert!(
        one.equals(&FieldElement::one()).to_bool_vartime()
            || one.equals(&FieldElement::one().negate_modular()).to_bool_vartime()
    );
    println!("   ✅ Bordes certificados.");
}
