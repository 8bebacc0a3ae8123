// [libs/core/pairing-engine/src/pairing.rs]
/*!
 * =================================================================
 * APARATO: OPTIMAL ATE PAIRING ENGINE (V19.0 - GT GATEWAY)
 * CLASIFICACIÓN: CORE PAIRING (ESTRATO L2)
 * RESPONSABILIDAD: e: G1 x G2 -> GT Y MULTI-PAIRING
 *
 * Contratos certificados por el espejo bilineal:
 * e([a] P, [b] Q) = e(P, Q)^(a b); e(P, Q) = 1 implica P = O o Q = O;
 * el multi-pairing con acumulador compartido iguala al producto de
 * los pairings individuales.
 * =================================================================
 */

use crate::errors::PairingError;
use crate::final_exp::final_exponentiation;
use crate::miller::{multi_miller_loop, prepare_pair, PreparedPair};
use crate::parameters::PairingParameters;
use obsidian_core_curve::prelude::AffinePoint;
use obsidian_core_math::prelude::Fp12;
use tracing::instrument;

/**
 * Pairing optimal-ate de un único par.
 *
 * Los puntos en el infinito producen la unidad de GT. La pertenencia
 * al subgrupo es precondición del llamador (los códecs de
 * deserialización ya la imponen).
 */
#[instrument(level = "debug", skip_all)]
#[must_use]
pub fn optimal_ate_pairing<P: PairingParameters<N>, const N: usize>(
    g1: &AffinePoint<P::G1>,
    g2: &AffinePoint<P::G2>,
) -> Fp12<P, N> {
    if g1.is_infinity.to_bool_vartime() || g2.is_infinity.to_bool_vartime() {
        return Fp12::one();
    }
    let pairs = [prepare_pair::<P, N>(g1, g2)];
    final_exponentiation(&multi_miller_loop(&pairs))
}

/**
 * Multi-pairing: producto e(P1, Q1) .. e(Pn, Qn) con un único
 * acumulador de Miller y una única exponenciación final.
 *
 * # Errors:
 * 'PairingError::MismatchedInputLengths' si las ráfagas difieren.
 */
#[instrument(level = "debug", skip_all, fields(pairs = g1_points.len()))]
pub fn multi_pairing<P: PairingParameters<N>, const N: usize>(
    g1_points: &[AffinePoint<P::G1>],
    g2_points: &[AffinePoint<P::G2>],
) -> Result<Fp12<P, N>, PairingError> {
    if g1_points.len() != g2_points.len() {
        return Err(PairingError::MismatchedInputLengths {
            left: g1_points.len(),
            right: g2_points.len(),
        });
    }
    let pairs: Vec<PreparedPair<P, N>> = g1_points
        .iter()
        .zip(g2_points.iter())
        .filter(|(g1, g2)| {
            !g1.is_infinity.to_bool_vartime() && !g2.is_infinity.to_bool_vartime()
        })
        .map(|(g1, g2)| prepare_pair::<P, N>(g1, g2))
        .collect();
    Ok(final_exponentiation(&multi_miller_loop(&pairs)))
}
