// [libs/domain/hash-to-curve/src/hash_to_field.rs]
/*!
 * =================================================================
 * APARATO: FIELD SAMPLING ENGINE (V9.0 - UNIFORM REDUCTION)
 * CLASIFICACIÓN: DOMAIN H2C (ESTRATO L3)
 * RESPONSABILIDAD: BYTES UNIFORMES -> ELEMENTOS DE CAMPO
 *
 * Cada elemento consume ceil((bits + 128) / 8) bytes Big-Endian y se
 * reduce módulo p: el sesgo estadístico queda por debajo de 2^-128.
 * Los elementos Fp2 consumen dos tramos consecutivos (c0, c1).
 * =================================================================
 */

use crate::errors::HashToCurveError;
use crate::expand::expand_message_xmd;
use obsidian_core_math::prelude::{BigInt, FieldElement, FieldParameters, Fp2, TowerParameters};

/**
 * Elemento de campo muestreable desde bytes uniformes. Lo satisfacen
 * los residuos Fp y los pares Fp2 del twist.
 */
pub trait HashableFieldElement: Sized {
    /// Bytes uniformes requeridos por elemento.
    const UNIFORM_BYTE_LENGTH: usize;
    /// Reducción de un tramo de bytes uniformes al campo.
    fn from_uniform_bytes(bytes: &[u8]) -> Self;
}

impl<P: FieldParameters<N>, const N: usize> HashableFieldElement for FieldElement<P, N> {
    const UNIFORM_BYTE_LENGTH: usize = ((P::MODULUS_BITS as usize + 128) + 7) / 8;

    fn from_uniform_bytes(bytes: &[u8]) -> Self {
        debug_assert_eq!(bytes.len(), Self::UNIFORM_BYTE_LENGTH);
        // Un tramo nunca supera 64 bytes (512 bits) para los primos
        // del catálogo.
        let mut wide = BigInt::<8>::ZERO;
        for (byte_index, byte) in bytes.iter().rev().enumerate() {
            wide.limbs[byte_index / 8] |= (*byte as u64) << ((byte_index % 8) * 8);
        }
        Self::from_wide_reduced(&wide)
    }
}

impl<P: TowerParameters<N>, const N: usize> HashableFieldElement for Fp2<P, N> {
    const UNIFORM_BYTE_LENGTH: usize =
        2 * <FieldElement<P, N> as HashableFieldElement>::UNIFORM_BYTE_LENGTH;

    fn from_uniform_bytes(bytes: &[u8]) -> Self {
        let half = bytes.len() / 2;
        Self::from_coordinates(
            FieldElement::from_uniform_bytes(&bytes[..half]),
            FieldElement::from_uniform_bytes(&bytes[half..]),
        )
    }
}

/**
 * hash_to_field del constructo IETF: 'count' elementos deterministas
 * desde (mensaje, etiqueta de separación de dominio).
 *
 * # Errors:
 * Propaga los fallos de 'expand_message_xmd'.
 */
pub fn hash_to_field<F: HashableFieldElement>(
    message: &[u8],
    domain_separation_tag: &[u8],
    count: usize,
) -> Result<Vec<F>, HashToCurveError> {
    let stride = F::UNIFORM_BYTE_LENGTH;
    let uniform = expand_message_xmd(message, domain_separation_tag, count * stride)?;
    Ok(uniform
        .chunks_exact(stride)
        .map(F::from_uniform_bytes)
        .collect())
}
