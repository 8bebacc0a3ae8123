// [libs/core/pairing-engine/src/final_exp.rs]
/*!
 * =================================================================
 * APARATO: FINAL EXPONENTIATION ENGINE (V21.0 - CYCLOTOMIC CHAINS)
 * CLASIFICACIÓN: CORE PAIRING (ESTRATO L2)
 * RESPONSABILIDAD: f ^ ((p^12 - 1) / r) POR CADENAS EN x
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. EASY PART: f ^ ((p^6 - 1)(p^2 + 1)) por conjugación, una única
 *    inversión densa y Frobenius; el resultado aterriza en el
 *    subgrupo ciclotómico de orden Phi_12(p).
 * 2. HARD CHAINS: La parte dura se expresa como cadena de adición en
 *    el parámetro x: cada cuadrado es ciclotómico y cada inverso una
 *    conjugación.
 * 3. BLS CUBE: La cadena BLS computa el exponente triplicado
 *    3 (p^4 - p^2 + 1) / r; el cubo de un pairing sigue siendo un
 *    pairing bilineal no degenerado (r no divide a 3).
 *
 * # Mathematical Proof (BLS12 Hard Part):
 * (x - 1)^2 (x + p) (x^2 + p^2 - 1) + 3 = 3 (p^4 - p^2 + 1) / r,
 * identidad entera verificada sobre los parámetros de la familia.
 * La cadena BN es la descomposición clásica y0..y6 de Devegili-Scott.
 * =================================================================
 */

use crate::parameters::PairingParameters;
use obsidian_core_math::prelude::Fp12;
use tracing::instrument;

/**
 * Parte fácil: f ^ ((p^6 - 1)(p^2 + 1)).
 *
 * f^(p^6) es la conjugación; el cociente aterriza en el subgrupo
 * unitario donde el inverso pasa a ser conjugación.
 */
#[must_use]
pub fn easy_part<P: PairingParameters<N>, const N: usize>(f: &Fp12<P, N>) -> Fp12<P, N> {
    let numerator = f.conjugate();
    let quotient = numerator.multiply_modular(&f.invert());
    quotient.frobenius_map(2).multiply_modular(&quotient)
}

/// Exponenciación ciclotómica por la magnitud de x con el signo de la
/// familia aplicado.
#[inline]
fn pow_x<P: PairingParameters<N>, const N: usize>(f: &Fp12<P, N>) -> Fp12<P, N> {
    f.cyclotomic_exp_vartime(P::X_BITS, P::X_IS_NEGATIVE)
}

/**
 * Parte dura de la familia BN (cadena y0..y6).
 */
fn hard_part_bn<P: PairingParameters<N>, const N: usize>(m: &Fp12<P, N>) -> Fp12<P, N> {
    let fx = pow_x(m);
    let fx2 = pow_x(&fx);
    let fx3 = pow_x(&fx2);

    let fp = m.frobenius_map(1);
    let fp2 = m.frobenius_map(2);
    let fp3 = m.frobenius_map(3);
    let fxp = fx.frobenius_map(1);
    let fx2p = fx2.frobenius_map(1);
    let fx3p = fx3.frobenius_map(1);
    let fx2p2 = fx2.frobenius_map(2);

    let y0 = fp.multiply_modular(&fp2).multiply_modular(&fp3);
    let y1 = m.conjugate();
    let y2 = fx2p2;
    let y3 = fxp.conjugate();
    let y4 = fx.multiply_modular(&fx2p).conjugate();
    let y5 = fx2.conjugate();
    let y6 = fx3.multiply_modular(&fx3p).conjugate();

    let mut t0 = y6.cyclotomic_square().multiply_modular(&y4).multiply_modular(&y5);
    let mut t1 = y3.multiply_modular(&y5).multiply_modular(&t0);
    t0 = t0.multiply_modular(&y2);
    t1 = t1.cyclotomic_square().multiply_modular(&t0).cyclotomic_square();
    t0 = t1.multiply_modular(&y1);
    t1 = t1.multiply_modular(&y0);
    t0 = t0.cyclotomic_square();
    t1.multiply_modular(&t0)
}

/**
 * Parte dura de la familia BLS12 (exponente triplicado).
 */
fn hard_part_bls<P: PairingParameters<N>, const N: usize>(m: &Fp12<P, N>) -> Fp12<P, N> {
    // t = m ^ ((x - 1)^2); x - 1 es negativo en la familia.
    let mut t = m.cyclotomic_exp_vartime(P::X_MINUS_ONE_MAGNITUDE_BITS, P::X_IS_NEGATIVE);
    t = t.cyclotomic_exp_vartime(P::X_MINUS_ONE_MAGNITUDE_BITS, P::X_IS_NEGATIVE);
    // ^ (x + p)
    t = pow_x(&t).multiply_modular(&t.frobenius_map(1));
    // ^ (x^2 + p^2 - 1)
    let t_x2 = pow_x(&pow_x(&t));
    t = t_x2
        .multiply_modular(&t.frobenius_map(2))
        .multiply_modular(&t.conjugate());
    // * m^3
    t.multiply_modular(&m.cyclotomic_square()).multiply_modular(m)
}

/**
 * Exponenciación final completa.
 */
#[instrument(level = "debug", skip_all)]
#[must_use]
pub fn final_exponentiation<P: PairingParameters<N>, const N: usize>(
    f: &Fp12<P, N>,
) -> Fp12<P, N> {
    let m = easy_part(f);
    if P::IS_BN_FAMILY {
        hard_part_bn(&m)
    } else {
        hard_part_bls(&m)
    }
}
