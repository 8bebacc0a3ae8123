// [tests/mirror/libs/core/pairing_engine/final_exp_integrity.test.rs]
/*!
 * =================================================================
 * APARATO: FINAL EXPONENTIATION CERTIFIER (V8.0 - CYCLOTOMIC LANDING)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L2-PAIRING
 * RESPONSABILIDAD: ATERRIZAJE EN GPhi12(p) Y CADENAS EN x
 * =================================================================
 */

use obsidian_core_math::prelude::*;
use obsidian_core_pairing::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn random_fp12<P: TowerParameters<N>, const N: usize>(randomness: &mut StdRng) -> Fp12<P, N> {
    let mut coordinate = || {
        Fp2::from_coordinates(
            FieldElement::random_uniform(randomness),
            FieldElement::random_uniform(randomness),
        )
    };
    Fp12::from_coordinates(
        Fp6::from_coordinates(coordinate(), coordinate(), coordinate()),
        Fp6::from_coordinates(coordinate(), coordinate(), coordinate()),
    )
}

/**
 * La parte fácil debe aterrizar en el subgrupo ciclotómico:
 * m^(p^4 - p^2 + 1) = 1, es decir frob^4(m) * m = frob^2(m).
 */
fn certify_easy_landing<P: PairingParameters<N>, const N: usize>(label: &str, seed: u64) {
    println!("   🧪 Fase: aterrizaje ciclotómico sobre {label}...");
    let mut randomness = StdRng::seed_from_u64(seed);
    for _ in 0..10 {
        let f = random_fp12::<P, N>(&mut randomness);
        let m = easy_part::<P, N>(&f);
        let left = m.frobenius_map(2).frobenius_map(2).multiply_modular(&m);
        let right = m.frobenius_map(2);
        assert_eq!(left, right, "L2_FINALEXP_FAULT[{label}]: m^(p^4 - p^2 + 1) != 1");
        // En el subgrupo unitario la conjugación invierte.
        assert!(
            m.multiply_modular(&m.conjugate()).is_one().to_bool_vartime(),
            "L2_FINALEXP_FAULT[{label}]: el aterrizaje no es unitario"
        );
        // El cuadrado ciclotómico es válido sobre el aterrizaje.
        assert_eq!(
            m.cyclotomic_square(),
            m.square_modular(),
            "L2_FINALEXP_FAULT[{label}]: ciclotómico divergente tras la parte fácil"
        );
    }
    println!("      ✅ GPhi12(p) alcanzado con conjugación-inverso.");
}

#[test]
fn certify_easy_part_both_families() {
    println!("\n💠 [INICIO]: Parte fácil de la exponenciación final...");
    certify_easy_landing::<Bn254Fp, 4>("bn254", 111);
    certify_easy_landing::<Bls12381Fp, 6>("bls12-381", 112);
    println!("   ✅ Parte fácil certificada.");
}

/**
 * La exponenciación final completa produce elementos de orden r:
 * el resultado elevado a r colapsa a la unidad.
 */
fn certify_gt_order<P, const N: usize>(label: &str, order: &BigInt<4>, seed: u64)
where
    P: PairingParameters<N>,
{
    println!("   🧪 Fase: orden del resultado sobre {label}...");
    let mut randomness = StdRng::seed_from_u64(seed);
    let f = random_fp12::<P, N>(&mut randomness);
    let gt = final_exponentiation::<P, N>(&f);
    // Exponenciación por r con cuadrados ciclotómicos (gt es unitario).
    let mut order_bits = Vec::new();
    for bit_index in (0..order.bit_length_vartime()).rev() {
        order_bits.push(order.bit(bit_index) as u8);
    }
    let raised = gt.cyclotomic_exp_vartime(&order_bits, false);
    assert!(raised.is_one().to_bool_vartime(), "L2_FINALEXP_FAULT[{label}]: gt^r != 1");
    println!("      ✅ gt^r == 1 certificado.");
}

#[test]
fn certify_result_order() {
    println!("\n💠 [INICIO]: Orden r del grupo objetivo...");
    use obsidian_core_curve::prelude::{Bls12381G1, Bn254G1, CurveParameters};
    certify_gt_order::<Bn254Fp, 4>("bn254", &<Bn254G1 as CurveParameters>::ORDER, 113);
    certify_gt_order::<Bls12381Fp, 6>("bls12-381", &<Bls12381G1 as CurveParameters>::ORDER, 114);
    println!("   ✅ Resultados de orden r en ambas familias.");
}

#[test]
fn certify_cyclotomic_exp_consistency() {
    println!("\n💠 [PROVING_GROUNDS]: Exponenciación ciclotómica corta...");
    let mut randomness = StdRng::seed_from_u64(115);
    let f = random_fp12::<Bls12381Fp, 6>(&mut randomness);
    let m = easy_part::<Bls12381Fp, 6>(&f);
    // 13 = 0b1101 por cuadrados ciclotómicos contra el producto denso.
    let expected = m
        .multiply_modular(&m.square_modular())      // m^3
        .square_modular()                           // m^6
        .square_modular()                           // m^12
        .multiply_modular(&m);                      // m^13
    assert_eq!(
        m.cyclotomic_exp_vartime(&[1, 1, 0, 1], false),
        expected,
        "L2_FINALEXP_FAULT: exponenciación por bits divergente"
    );
    assert_eq!(
        m.cyclotomic_exp_vartime(&[1, 1, 0, 1], true),
        expected.conjugate(),
        "L2_FINALEXP_FAULT: signo negativo divergente"
    );
    println!("   ✅ Cadena de bits certificada (magnitud y signo).");
}
