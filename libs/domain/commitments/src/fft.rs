// [libs/domain/commitments/src/fft.rs]
/*!
 * =================================================================
 * APARATO: RADIX-2 TRANSFORM ENGINE (V15.0 - SUBGROUP NTT)
 * CLASIFICACIÓN: DOMAIN COMMITMENTS (ESTRATO L3)
 * RESPONSABILIDAD: FFT / IFFT SOBRE SUBGRUPOS 2-ÁDICOS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. DOMAIN VALIDATION: El orden debe ser potencia de dos y dividir a
 *    p - 1; cada violación es un estado explícito del catálogo.
 * 2. EXACT ROUNDTRIP: La inversa deshace a la directa bit a bit
 *    (raíz inversa + escala por n^-1).
 *
 * # Mathematical Proof (Cooley-Tukey):
 * Con w generador del subgrupo de orden n = 2^k, la mariposa
 * (a, b) -> (a + w^j b, a - w^j b) aplicada sobre el orden de
 * bit-reversa computa p(w^i) para todos los i en n log n pasos.
 * =================================================================
 */

use crate::errors::FftError;
use obsidian_core_math::prelude::{BigInt, FftFieldParameters, FieldElement};
use tracing::instrument;

/// Dominio de evaluación de orden 2^k con su raíz de la unidad.
pub struct EvaluationDomain<P, const N: usize> {
    size: usize,
    root: FieldElement<P, N>,
    root_inverse: FieldElement<P, N>,
    size_inverse: FieldElement<P, N>,
}

impl<P: FftFieldParameters<N>, const N: usize> EvaluationDomain<P, N> {
    /**
     * Construye el dominio de orden n.
     *
     * # Errors:
     * 'OrderMustBePowerOfTwo' para n no potencia de dos;
     * 'OrderMustDividePMinusOne' cuando 2^k excede la valuación
     * 2-ádica de p - 1.
     */
    pub fn new(size: usize) -> Result<Self, FftError> {
        if size == 0 || !size.is_power_of_two() {
            return Err(FftError::OrderMustBePowerOfTwo { got: size });
        }
        let log_size = size.trailing_zeros();
        if log_size > P::TWO_ADICITY {
            return Err(FftError::OrderMustDividePMinusOne { got: size });
        }
        // root = raíz 2-ádica elevada a 2^(s - k).
        let mut root = FieldElement::from_montgomery_limbs(P::TWO_ADIC_ROOT_OF_UNITY.limbs);
        for _ in 0..(P::TWO_ADICITY - log_size) {
            root = root.square_modular();
        }
        let root_inverse = root.invert();
        let size_inverse = FieldElement::from_word(size as u64).invert();
        Ok(Self { size, root, root_inverse, size_inverse })
    }

    /// Orden del dominio.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Generador del subgrupo de evaluación.
    #[must_use]
    pub fn generator(&self) -> FieldElement<P, N> {
        self.root
    }

    /**
     * Transformada directa in-place: coeficientes -> evaluaciones
     * [p(w^0), .., p(w^(n-1))].
     *
     * # Errors:
     * 'LengthMismatch' si el buffer no coincide con el orden.
     */
    #[instrument(level = "debug", skip_all, fields(size = self.size))]
    pub fn fft_in_place(&self, values: &mut [FieldElement<P, N>]) -> Result<(), FftError> {
        self.transform(values, &self.root)
    }

    /**
     * Transformada inversa in-place: evaluaciones -> coeficientes,
     * deshaciendo exactamente a la directa.
     */
    #[instrument(level = "debug", skip_all, fields(size = self.size))]
    pub fn ifft_in_place(&self, values: &mut [FieldElement<P, N>]) -> Result<(), FftError> {
        self.transform(values, &self.root_inverse)?;
        for value in values.iter_mut() {
            *value = value.multiply_modular(&self.size_inverse);
        }
        Ok(())
    }

    fn transform(
        &self,
        values: &mut [FieldElement<P, N>],
        base_root: &FieldElement<P, N>,
    ) -> Result<(), FftError> {
        if values.len() != self.size {
            return Err(FftError::LengthMismatch { expected: self.size, got: values.len() });
        }
        let log_size = self.size.trailing_zeros();
        if log_size == 0 {
            return Ok(());
        }
        // Permutación de bit-reversa.
        for index in 0..self.size {
            let reversed = index.reverse_bits() >> (usize::BITS - log_size);
            if index < reversed {
                values.swap(index, reversed);
            }
        }
        // Mariposas por etapas de tamaño creciente.
        let mut stage_size = 2usize;
        while stage_size <= self.size {
            let stride_exponent = (self.size / stage_size) as u64;
            let stage_root = base_root.pow_vartime(&BigInt::<1>::from_word(stride_exponent));
            for block_start in (0..self.size).step_by(stage_size) {
                let mut twiddle = FieldElement::one();
                for offset in 0..stage_size / 2 {
                    let even = values[block_start + offset];
                    let odd =
                        values[block_start + offset + stage_size / 2].multiply_modular(&twiddle);
                    values[block_start + offset] = even.add_modular(&odd);
                    values[block_start + offset + stage_size / 2] = even.subtract_modular(&odd);
                    twiddle = twiddle.multiply_modular(&stage_root);
                }
            }
            stage_size *= 2;
        }
        Ok(())
    }
}
