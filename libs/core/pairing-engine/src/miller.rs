// [libs/core/pairing-engine/src/miller.rs]
/*!
 * =================================================================
 * APARATO: MILLER LOOP ENGINE (V23.0 - MULTI ACCUMULATOR)
 * CLASIFICACIÓN: CORE PAIRING (ESTRATO L2)
 * RESPONSABILIDAD: ACUMULACIÓN DE LÍNEAS SOBRE EL LAZO ATE
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. SHARED SQUARING: El multi-pairing comparte un único acumulador
 *    f: una sola cadena de cuadrados para toda la ráfaga de pares.
 * 2. SPARSE ACCUMULATION: Cada línea entra por el producto disperso
 *    del patrón de su twist (~40% del trabajo denso).
 * 3. BN CORRECTION: La familia BN añade los dos pasos de adición
 *    torcidos por Frobenius (psi(Q) y -psi^2(Q)) tras el lazo 6x + 2.
 * =================================================================
 */

use crate::lines::{add_step, double_step, scale_by_g1_point, MillerAccumulator};
use crate::parameters::PairingParameters;
use obsidian_core_curve::prelude::{AffinePoint, GlsParameters};
use obsidian_core_math::prelude::{Fp12, Fp2};
use tracing::{instrument, trace};

/// Par (P, Q) preparado para el lazo: coordenadas afines validadas.
#[derive(Debug, Clone, Copy)]
pub struct PreparedPair<P: PairingParameters<N>, const N: usize> {
    /// Abscisa de P en Fp.
    pub p_x: obsidian_core_math::prelude::FieldElement<P, N>,
    /// Ordenada de P en Fp.
    pub p_y: obsidian_core_math::prelude::FieldElement<P, N>,
    /// Abscisa de Q en Fp2 (coordenadas del twist).
    pub q_x: Fp2<P, N>,
    /// Ordenada de Q en Fp2.
    pub q_y: Fp2<P, N>,
}

/// Endomorfismo psi sobre coordenadas afines del twist.
fn psi_affine<P: PairingParameters<N>, const N: usize>(
    x: &Fp2<P, N>,
    y: &Fp2<P, N>,
) -> (Fp2<P, N>, Fp2<P, N>) {
    (
        <P::G2 as GlsParameters>::PSI_X.multiply_modular(&x.conjugate()),
        <P::G2 as GlsParameters>::PSI_Y.multiply_modular(&y.conjugate()),
    )
}

/// Acumula una línea escalada sobre f según el patrón del twist.
#[inline]
fn accumulate_line<P: PairingParameters<N>, const N: usize>(
    f: &Fp12<P, N>,
    line: &crate::lines::LineCoefficients<P, N>,
) -> Fp12<P, N> {
    if P::TWIST_IS_D_TYPE {
        f.multiply_by_line_x00yz0(&line.b3, &line.b2, &line.b0)
    } else {
        f.multiply_by_line_xy00z0(&line.b0, &line.b2, &line.b3)
    }
}

/**
 * Lazo de Miller compartido para una ráfaga de pares.
 *
 * Devuelve el valor de Miller sin exponenciación final; los pares con
 * algún punto en el infinito deben filtrarse antes (contribuyen la
 * unidad).
 */
#[instrument(level = "debug", skip_all, fields(pairs = pairs.len()))]
#[must_use]
pub fn multi_miller_loop<P: PairingParameters<N>, const N: usize>(
    pairs: &[PreparedPair<P, N>],
) -> Fp12<P, N> {
    let mut f = Fp12::<P, N>::one();
    if pairs.is_empty() {
        return f;
    }
    let mut accumulators: Vec<MillerAccumulator<P, N>> = pairs
        .iter()
        .map(|pair| MillerAccumulator::from_affine(pair.q_x, pair.q_y))
        .collect();

    let twist_b = <P::G2 as obsidian_core_curve::prelude::CurveParameters>::COEFF_B;
    for bit in P::ATE_LOOP_BITS {
        f = f.square_modular();
        for (pair, accumulator) in pairs.iter().zip(accumulators.iter_mut()) {
            let line = double_step(accumulator, &twist_b);
            f = accumulate_line::<P, N>(&f, &scale_by_g1_point(&line, &pair.p_x, &pair.p_y));
        }
        if *bit == 1 {
            for (pair, accumulator) in pairs.iter().zip(accumulators.iter_mut()) {
                let line = add_step(accumulator, &pair.q_x, &pair.q_y);
                f = accumulate_line::<P, N>(&f, &scale_by_g1_point(&line, &pair.p_x, &pair.p_y));
            }
        }
    }

    if P::IS_BN_FAMILY {
        trace!("pasos de corrección Frobenius de la familia BN");
        for (pair, accumulator) in pairs.iter().zip(accumulators.iter_mut()) {
            let (q1_x, q1_y) = psi_affine::<P, N>(&pair.q_x, &pair.q_y);
            let line = add_step(accumulator, &q1_x, &q1_y);
            f = accumulate_line::<P, N>(&f, &scale_by_g1_point(&line, &pair.p_x, &pair.p_y));
            let (q2_x, q2_y) = psi_affine::<P, N>(&q1_x, &q1_y);
            let q2_y_negated = q2_y.negate_modular();
            let line = add_step(accumulator, &q2_x, &q2_y_negated);
            f = accumulate_line::<P, N>(&f, &scale_by_g1_point(&line, &pair.p_x, &pair.p_y));
        }
    }

    if P::X_IS_NEGATIVE {
        f = f.conjugate();
    }
    f
}

/// Prepara un par desde puntos afines finitos.
#[must_use]
pub fn prepare_pair<P: PairingParameters<N>, const N: usize>(
    g1: &AffinePoint<P::G1>,
    g2: &AffinePoint<P::G2>,
) -> PreparedPair<P, N> {
    PreparedPair { p_x: g1.x, p_y: g1.y, q_x: g2.x, q_y: g2.y }
}
