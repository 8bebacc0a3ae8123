// [libs/core/curve-engine/src/batch.rs]
/*!
 * =================================================================
 * APARATO: BATCH PROJECTION ENGINE (V14.0 - MONTGOMERY TRICK)
 * CLASIFICACIÓN: CORE GEOMETRY (ESTRATO L1)
 * RESPONSABILIDAD: CONVERSIÓN AFÍN POR LOTE CON UNA SOLA INVERSIÓN
 *
 * # Mathematical Proof (Montgomery's Trick):
 * Con prefijos p_i = z_0 z_1 .. z_i, una única inversión de p_(n-1)
 * produce cada z_i^-1 = p_(n-1)^-1 * p_(i-1) * (z_(i+1) .. z_(n-1)),
 * amortizando el coste de la inversión sobre toda la ráfaga. Los
 * denominadores nulos (puntos en el infinito) se sustituyen por uno en
 * el prefijo y proyectan por convención al infinito afín.
 * =================================================================
 */

use crate::jacobian::JacobianPoint;
use crate::traits::{CurveFieldElement, CurveParameters};
use crate::weierstrass::{AffinePoint, ProjectivePoint};
use obsidian_core_math::prelude::SecretBool;

/// Inversión por lote sobre el contrato de campo genérico, con
/// scratch del llamador. Los ceros producen cero (inv(0) = 0).
fn batch_invert_field<F: CurveFieldElement>(
    elements: &[F],
    results: &mut [F],
    scratch: &mut [F],
) {
    let count = elements.len();
    debug_assert!(results.len() >= count && scratch.len() >= count);
    if count == 0 {
        return;
    }
    let mut running = F::field_one();
    for index in 0..count {
        let mut factor = elements[index];
        let was_zero = factor.is_zero();
        factor.conditional_copy(&F::field_one(), was_zero);
        running = running.multiply_modular(&factor);
        scratch[index] = running;
    }
    let mut inverse_accumulator = running.invert();
    for index in (1..count).rev() {
        let mut factor = elements[index];
        let was_zero = factor.is_zero();
        factor.conditional_copy(&F::field_one(), was_zero);
        results[index] = inverse_accumulator.multiply_modular(&scratch[index - 1]);
        results[index].conditional_copy(&F::field_zero(), was_zero);
        inverse_accumulator = inverse_accumulator.multiply_modular(&factor);
    }
    results[0] = inverse_accumulator;
    results[0].conditional_copy(&F::field_zero(), elements[0].is_zero());
}

/**
 * Conversión afín por lote desde coordenadas proyectivas: una
 * inversión para N puntos. El scratch (3 N elementos de campo:
 * denominadores, inversos y prefijos) es propiedad del llamador.
 */
pub fn batch_affine_from_projective<C: CurveParameters>(
    sources: &[ProjectivePoint<C>],
    destinations: &mut [AffinePoint<C>],
    scratch: &mut [C::Field],
) {
    let count = sources.len();
    debug_assert!(destinations.len() >= count && scratch.len() >= 3 * count);
    let (denominators, tail) = scratch.split_at_mut(count);
    let (inverses, workspace) = tail.split_at_mut(count);
    for (slot, point) in denominators.iter_mut().zip(sources.iter()) {
        *slot = point.z;
    }
    batch_invert_field(denominators, inverses, workspace);
    for index in 0..count {
        destinations[index] = AffinePoint {
            x: sources[index].x.multiply_modular(&inverses[index]),
            y: sources[index].y.multiply_modular(&inverses[index]),
            is_infinity: sources[index].z.is_zero(),
        };
    }
}

/**
 * Conversión afín por lote desde coordenadas Jacobianas
 * (x = X / Z^2, y = Y / Z^3), una inversión para N puntos. El scratch
 * requiere 3 N elementos de campo.
 */
pub fn batch_affine_from_jacobian<C: CurveParameters>(
    sources: &[JacobianPoint<C>],
    destinations: &mut [AffinePoint<C>],
    scratch: &mut [C::Field],
) {
    let count = sources.len();
    debug_assert!(destinations.len() >= count && scratch.len() >= 3 * count);
    let (denominators, tail) = scratch.split_at_mut(count);
    let (inverses, workspace) = tail.split_at_mut(count);
    for (slot, point) in denominators.iter_mut().zip(sources.iter()) {
        *slot = point.z;
    }
    batch_invert_field(denominators, inverses, workspace);
    for index in 0..count {
        let inverse_squared = inverses[index].square_modular();
        destinations[index] = AffinePoint {
            x: sources[index].x.multiply_modular(&inverse_squared),
            y: sources[index]
                .y
                .multiply_modular(&inverse_squared)
                .multiply_modular(&inverses[index]),
            is_infinity: sources[index].z.is_zero(),
        };
    }
}

/// Igualdad afín auxiliar para las certificaciones de paridad de lote.
#[must_use]
pub fn affine_points_equal<C: CurveParameters>(
    left: &AffinePoint<C>,
    right: &AffinePoint<C>,
) -> SecretBool {
    left.equals(right)
}
