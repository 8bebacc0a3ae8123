// [tests/mirror/libs/core/math_engine/tower_integrity.test.rs]
/*!
 * =================================================================
 * APARATO: EXTENSION TOWER CERTIFIER (V10.0 - SPARSE CONTRACTS)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-MATH
 * RESPONSABILIDAD: Fp2 / Fp6 / Fp12, FROBENIUS Y PRODUCTOS DISPERSOS
 * =================================================================
 */

use obsidian_core_math::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn random_fp2<P: TowerParameters<N>, const N: usize>(randomness: &mut StdRng) -> Fp2<P, N> {
    Fp2::from_coordinates(
        FieldElement::random_uniform(randomness),
        FieldElement::random_uniform(randomness),
    )
}

fn random_fp6<P: TowerParameters<N>, const N: usize>(randomness: &mut StdRng) -> Fp6<P, N> {
    Fp6::from_coordinates(
        random_fp2(randomness),
        random_fp2(randomness),
        random_fp2(randomness),
    )
}

fn random_fp12<P: TowerParameters<N>, const N: usize>(randomness: &mut StdRng) -> Fp12<P, N> {
    Fp12::from_coordinates(random_fp6(randomness), random_fp6(randomness))
}

/// Exponenciación densa local para los contratos de Frobenius.
fn pow_dense<P: TowerParameters<N>, const N: usize>(
    base: &Fp12<P, N>,
    exponent: &BigInt<N>,
) -> Fp12<P, N> {
    let mut accumulator = Fp12::one();
    for bit_index in (0..exponent.bit_length_vartime()).rev() {
        accumulator = accumulator.square_modular();
        if exponent.bit(bit_index) == 1 {
            accumulator = accumulator.multiply_modular(base);
        }
    }
    accumulator
}

/// Elemento del subgrupo ciclotómico vía la parte fácil manual.
fn cyclotomic_element<P: TowerParameters<N>, const N: usize>(
    randomness: &mut StdRng,
) -> Fp12<P, N> {
    let seed = random_fp12::<P, N>(randomness);
    let quotient = seed.conjugate().multiply_modular(&seed.invert());
    quotient.frobenius_map(2).multiply_modular(&quotient)
}

fn torture_tower<P: TowerParameters<N>, const N: usize>(label: &str, seed: u64) {
    println!("   🧪 Fase: torre sobre {label}...");
    let mut randomness = StdRng::seed_from_u64(seed);
    for _ in 0..25 {
        // Fp2: inverso y conjugación.
        let a2 = random_fp2::<P, N>(&mut randomness);
        let b2 = random_fp2::<P, N>(&mut randomness);
        assert_eq!(
            a2.multiply_modular(&b2).multiply_modular(&b2.invert()),
            a2,
            "L1_TOWER_FAULT[{label}]: inverso Fp2 roto"
        );
        assert_eq!(a2.square_modular(), a2.multiply_modular(&a2));
        assert_eq!(a2.conjugate().conjugate(), a2);

        // Fp6: Karatsuba, CH-SQR2 e inverso.
        let a6 = random_fp6::<P, N>(&mut randomness);
        let b6 = random_fp6::<P, N>(&mut randomness);
        assert_eq!(
            a6.multiply_modular(&b6).multiply_modular(&b6.invert()),
            a6,
            "L1_TOWER_FAULT[{label}]: inverso Fp6 roto"
        );
        assert_eq!(
            a6.square_modular(),
            a6.multiply_modular(&a6),
            "L1_TOWER_FAULT[{label}]: CH-SQR2 != producto denso"
        );
        assert_eq!(a6.multiply_by_v().multiply_by_v().multiply_by_v(), a6.multiply_by_fp2(&P::XI));

        // Fp12: inverso, cuadrado y conjugación.
        let a12 = random_fp12::<P, N>(&mut randomness);
        let b12 = random_fp12::<P, N>(&mut randomness);
        assert_eq!(
            a12.multiply_modular(&b12).multiply_modular(&b12.invert()),
            a12,
            "L1_TOWER_FAULT[{label}]: inverso Fp12 roto"
        );
        assert_eq!(a12.square_modular(), a12.multiply_modular(&a12));
    }
}

#[test]
fn certify_tower_arithmetic() {
    println!("\n💠 [INICIO]: Tortura de torres de extensión...");
    torture_tower::<Bn254Fp, 4>("bn254", 20);
    torture_tower::<Bls12381Fp, 6>("bls12-381", 21);
    torture_tower::<Bls12377Fp, 6>("bls12-377 (beta = -5)", 28);
    println!("   ✅ Torres certificadas sobre las tres familias.");
}

fn certify_frobenius<P: TowerParameters<N>, const N: usize>(label: &str, seed: u64) {
    println!("   🧪 Fase: Frobenius tabulado sobre {label}...");
    let mut randomness = StdRng::seed_from_u64(seed);
    let element = random_fp12::<P, N>(&mut randomness);
    // frob(a) = a^p, contrato del morfismo de cuerpos.
    assert_eq!(
        element.frobenius_map(1),
        pow_dense(&element, &P::MODULUS),
        "L1_TOWER_FAULT[{label}]: frobenius != potencia p"
    );
    // Composición: frob^2 y frob^3 contra la iteración de frob^1.
    assert_eq!(
        element.frobenius_map(2),
        element.frobenius_map(1).frobenius_map(1),
        "L1_TOWER_FAULT[{label}]: frob^2 inconsistente"
    );
    assert_eq!(
        element.frobenius_map(3),
        element.frobenius_map(2).frobenius_map(1),
        "L1_TOWER_FAULT[{label}]: frob^3 inconsistente"
    );
}

#[test]
fn certify_frobenius_tables() {
    println!("\n💠 [INICIO]: Contratos de Frobenius...");
    certify_frobenius::<Bn254Fp, 4>("bn254", 22);
    certify_frobenius::<Bls12381Fp, 6>("bls12-381", 23);
    certify_frobenius::<Bls12377Fp, 6>("bls12-377", 29);
    println!("   ✅ Tablas de Frobenius certificadas contra la potencia p.");
}

fn certify_sparse_lines<P: TowerParameters<N>, const N: usize>(label: &str, seed: u64) {
    println!("   🧪 Fase: productos dispersos sobre {label}...");
    let mut randomness = StdRng::seed_from_u64(seed);
    for _ in 0..25 {
        let f = random_fp12::<P, N>(&mut randomness);
        let x = random_fp2::<P, N>(&mut randomness);
        let y = random_fp2::<P, N>(&mut randomness);
        let z = random_fp2::<P, N>(&mut randomness);

        // Patrón (x, y, 0 | 0, z, 0): twists M.
        let dense_m = Fp12::from_coordinates(
            Fp6::from_coordinates(x, y, Fp2::zero()),
            Fp6::from_coordinates(Fp2::zero(), z, Fp2::zero()),
        );
        assert_eq!(
            f.multiply_by_line_xy00z0(&x, &y, &z),
            f.multiply_modular(&dense_m),
            "L1_TOWER_FAULT[{label}]: disperso xy00z0 != denso"
        );

        // Patrón (x, 0, 0 | y, z, 0): twists D.
        let dense_d = Fp12::from_coordinates(
            Fp6::from_coordinates(x, Fp2::zero(), Fp2::zero()),
            Fp6::from_coordinates(y, z, Fp2::zero()),
        );
        assert_eq!(
            f.multiply_by_line_x00yz0(&x, &y, &z),
            f.multiply_modular(&dense_d),
            "L1_TOWER_FAULT[{label}]: disperso x00yz0 != denso"
        );
    }
}

#[test]
fn certify_sparse_line_contracts() {
    println!("\n💠 [INICIO]: Contrato disperso == denso bit a bit...");
    certify_sparse_lines::<Bn254Fp, 4>("bn254", 24);
    certify_sparse_lines::<Bls12381Fp, 6>("bls12-381", 25);
    certify_sparse_lines::<Bls12377Fp, 6>("bls12-377", 30);
    println!("   ✅ Ambos patrones de línea certificados.");
}

fn certify_cyclotomic<P: TowerParameters<N>, const N: usize>(label: &str, seed: u64) {
    println!("   🧪 Fase: cuadrado ciclotómico sobre {label}...");
    let mut randomness = StdRng::seed_from_u64(seed);
    for _ in 0..20 {
        let unit = cyclotomic_element::<P, N>(&mut randomness);
        assert_eq!(
            unit.cyclotomic_square(),
            unit.square_modular(),
            "L1_TOWER_FAULT[{label}]: ciclotómico != denso en el subgrupo"
        );
        // En el subgrupo unitario la conjugación es el inverso.
        assert!(
            unit.multiply_modular(&unit.conjugate()).is_one().to_bool_vartime(),
            "L1_TOWER_FAULT[{label}]: conj != inv en el subgrupo ciclotómico"
        );
    }
}

#[test]
fn certify_cyclotomic_squaring() {
    println!("\n💠 [INICIO]: Cuadrado de Granger-Scott...");
    certify_cyclotomic::<Bn254Fp, 4>("bn254", 26);
    certify_cyclotomic::<Bls12381Fp, 6>("bls12-381", 27);
    certify_cyclotomic::<Bls12377Fp, 6>("bls12-377", 31);
    println!("   ✅ Cuadrado comprimido certificado sobre GPhi12(p).");
}
