// [libs/core/curve-engine/src/msm.rs]
/*!
 * =================================================================
 * APARATO: PIPPENGER BUCKET ENGINE (V41.0 - SIGNED DIGIT)
 * CLASIFICACIÓN: CORE GEOMETRY (ESTRATO L2)
 * RESPONSABILIDAD: MULTIPLICACIÓN MULTI-ESCALAR POR CUBOS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. SIGNED DIGITS: La recodificación firmada de ventana c reduce los
 *    cubos a 2^(c-1): el dígito negativo deposita el punto negado.
 * 2. WINDOW SCHEDULE: La anchura c se elige por tabla empírica según
 *    el número de puntos; la ventana superior vacía se omite cuando
 *    los bits del orden son múltiplo de c (sin off-by-one).
 * 3. DETERMINISTIC PARALLELISM: La variante paralela reparte ventanas
 *    entre hilos y recombina en el mismo orden que la serie: los
 *    resultados son bit-idénticos.
 * 4. CALLER SCRATCH: Los cubos y dígitos viven en un scratch de
 *    propiedad del llamador; el núcleo no aloja memoria oculta.
 *
 * Los escalares del MSM son datos públicos (verificación por lotes,
 * agregación): todas las rutas llevan el sufijo '_vartime'. La
 * pertenencia al subgrupo de las entradas es precondición documentada,
 * no se re-verifica.
 * =================================================================
 */

use crate::jacobian::{JacobianEngine, JacobianPoint};
use crate::traits::CurveParameters;
use crate::weierstrass::{AffinePoint, ProjectivePoint, WeierstrassEngine};
use obsidian_core_math::prelude::BigInt;
use rayon::prelude::*;
use tracing::{debug, instrument};

/**
 * Anchura de ventana empírica en función del número de puntos.
 */
#[must_use]
pub fn window_width_for(point_count: usize) -> u32 {
    match point_count {
        0..=31 => 4,
        32..=511 => 8,
        512..=65535 => 13,
        _ => 16,
    }
}

/// Scratch del MSM, propiedad del llamador: cubos y dígitos firmados.
pub struct MsmScratch<C: CurveParameters> {
    buckets: Vec<JacobianPoint<C>>,
    digits: Vec<i32>,
}

impl<C: CurveParameters> MsmScratch<C> {
    /// Dimensiona el scratch para una ráfaga de n puntos.
    #[must_use]
    pub fn for_size(point_count: usize) -> Self {
        let width = window_width_for(point_count);
        Self {
            buckets: vec![JacobianPoint::infinity(); 1 << (width - 1)],
            digits: Vec::new(),
        }
    }
}

/// Número de ventanas firmadas para un orden de 'order_bits' bits,
/// incluida la ventana de acarreo superior.
fn window_count(order_bits: u32, width: u32) -> usize {
    ((order_bits + width - 1) / width + 1) as usize
}

/**
 * Recodificación firmada de toda la ráfaga: digits[i * ventanas + j]
 * es el dígito firmado del escalar i en la ventana j, con
 * |d| <= 2^(c-1) y acarreo propagado de baja a alta significancia.
 */
fn recode_signed_digits<C: CurveParameters>(
    scalars: &[BigInt<4>],
    width: u32,
    windows: usize,
    digits: &mut Vec<i32>,
) {
    let half = 1i64 << (width - 1);
    let full = 1i64 << width;
    digits.clear();
    digits.resize(scalars.len() * windows, 0);
    for (scalar_index, scalar) in scalars.iter().enumerate() {
        let mut carry = 0i64;
        for window in 0..windows {
            let mut raw = 0i64;
            for offset in 0..width {
                let bit_index = window as u32 * width + offset;
                if (bit_index as usize) < 256 {
                    raw |= (scalar.bit(bit_index) as i64) << offset;
                }
            }
            raw += carry;
            if raw > half {
                raw -= full;
                carry = 1;
            } else {
                carry = 0;
            }
            digits[scalar_index * windows + window] = raw as i32;
        }
        debug_assert_eq!(carry, 0, "el acarreo final excede la ventana superior");
    }
}

/// Reducción de una ventana: depósito en cubos y suma corrida.
fn reduce_window<C: CurveParameters>(
    window: usize,
    windows: usize,
    digits: &[i32],
    points: &[AffinePoint<C>],
    buckets: &mut [JacobianPoint<C>],
) -> JacobianPoint<C> {
    for bucket in buckets.iter_mut() {
        *bucket = JacobianPoint::infinity();
    }
    for (point_index, point) in points.iter().enumerate() {
        let digit = digits[point_index * windows + window];
        if digit == 0 {
            continue;
        }
        let (bucket_index, addend) = if digit > 0 {
            ((digit - 1) as usize, *point)
        } else {
            ((-digit - 1) as usize, point.negate())
        };
        buckets[bucket_index] =
            JacobianEngine::<C>::add_mixed_vartime(&buckets[bucket_index], &addend);
    }
    // Suma corrida desde el cubo más alto: sum_b b * bucket[b].
    let mut running = JacobianPoint::<C>::infinity();
    let mut window_sum = JacobianPoint::<C>::infinity();
    for bucket in buckets.iter().rev() {
        running = JacobianEngine::<C>::sum_vartime(&running, bucket);
        window_sum = JacobianEngine::<C>::sum_vartime(&window_sum, &running);
    }
    window_sum
}

/// Combina las sumas de ventana de alta a baja con c duplicaciones.
fn combine_windows<C: CurveParameters>(
    window_sums: &[JacobianPoint<C>],
    width: u32,
) -> ProjectivePoint<C> {
    let mut accumulator = JacobianPoint::<C>::infinity();
    for window_sum in window_sums.iter().rev() {
        for _ in 0..width {
            accumulator = JacobianEngine::<C>::double(&accumulator);
        }
        accumulator = JacobianEngine::<C>::sum_vartime(&accumulator, window_sum);
    }
    let affine = JacobianEngine::<C>::affine_from_jacobian(&accumulator);
    WeierstrassEngine::<C>::projective_from_affine(&affine)
}

/**
 * MSM por el método de cubos firmados de Pippenger.
 *
 * Precondición: escalares canónicos (< orden) y puntos del subgrupo.
 * El scratch es propiedad del llamador y se redimensiona a la ráfaga.
 */
#[instrument(level = "debug", skip_all, fields(points = points.len()))]
#[must_use]
pub fn msm_vartime<C: CurveParameters>(
    scalars: &[BigInt<4>],
    points: &[AffinePoint<C>],
    scratch: &mut MsmScratch<C>,
) -> ProjectivePoint<C> {
    debug_assert_eq!(scalars.len(), points.len());
    if points.is_empty() {
        return ProjectivePoint::identity();
    }
    let width = window_width_for(points.len());
    let mut windows = window_count(C::ORDER_BITS, width);
    scratch
        .buckets
        .resize(1 << (width - 1), JacobianPoint::infinity());
    recode_signed_digits::<C>(scalars, width, windows, &mut scratch.digits);

    // Ventanas superiores sin dígitos (orden múltiplo de c): se omiten.
    while windows > 1 {
        let top = windows - 1;
        let occupied = (0..scalars.len()).any(|i| scratch.digits[i * windows + top] != 0);
        if occupied {
            break;
        }
        windows -= 1;
        // Compactación hacia abajo: el destino de cada fila queda por
        // debajo de toda fuente aún no leída.
        let original_windows = windows + 1;
        for i in 0..scalars.len() {
            let base = i * original_windows;
            scratch.digits.copy_within(base..base + windows, i * windows);
        }
        scratch.digits.truncate(scalars.len() * windows);
    }
    debug!(width, windows, "barrido de cubos Pippenger");

    let mut window_sums = vec![JacobianPoint::<C>::infinity(); windows];
    for window in 0..windows {
        window_sums[window] =
            reduce_window::<C>(window, windows, &scratch.digits, points, &mut scratch.buckets);
    }
    combine_windows::<C>(&window_sums, width)
}

/**
 * MSM paralelo: las ventanas se reparten entre los trabajadores del
 * pool y la recombinación replica el orden serial, de modo que el
 * resultado es bit-idéntico a 'msm_vartime'.
 *
 * Este es el estrato de paralelismo opt-in del sistema: cada ventana
 * aloja sus propios cubos.
 */
#[instrument(level = "debug", skip_all, fields(points = points.len()))]
#[must_use]
pub fn msm_parallel_vartime<C: CurveParameters>(
    scalars: &[BigInt<4>],
    points: &[AffinePoint<C>],
) -> ProjectivePoint<C> {
    debug_assert_eq!(scalars.len(), points.len());
    if points.is_empty() {
        return ProjectivePoint::identity();
    }
    let width = window_width_for(points.len());
    let windows = window_count(C::ORDER_BITS, width);
    let mut digits = Vec::new();
    recode_signed_digits::<C>(scalars, width, windows, &mut digits);

    let window_sums: Vec<JacobianPoint<C>> = (0..windows)
        .into_par_iter()
        .map(|window| {
            let mut buckets = vec![JacobianPoint::<C>::infinity(); 1 << (width - 1)];
            reduce_window::<C>(window, windows, &digits, points, &mut buckets)
        })
        .collect();
    combine_windows::<C>(&window_sums, width)
}

/**
 * Referencia ingenua sum_i k_i P_i para la certificación cruzada.
 */
#[must_use]
pub fn msm_reference_vartime<C: CurveParameters>(
    scalars: &[BigInt<4>],
    points: &[AffinePoint<C>],
) -> ProjectivePoint<C> {
    let mut accumulator = ProjectivePoint::<C>::identity();
    for (scalar, point) in scalars.iter().zip(points.iter()) {
        let projected = WeierstrassEngine::<C>::projective_from_affine(point);
        let term = crate::scalar_mul::scalar_mul_double_add_vartime(&projected, scalar);
        accumulator = WeierstrassEngine::<C>::sum(&accumulator, &term);
    }
    accumulator
}
