// [libs/core/math-engine/src/errors.rs]
/*!
 * =================================================================
 * APARATO: MATH FAULT CATALOG (V9.0 - FLAT ENUM)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: CATÁLOGO DE FALLOS DE CODIFICACIÓN NUMÉRICA
 *
 * Las primitivas aritméticas son totales y jamás fallan; este catálogo
 * cubre exclusivamente las fronteras de deserialización, donde los
 * bytes hostiles se convierten en estados explícitos que el llamador
 * debe inspeccionar. Nunca pánico sobre entrada no confiable.
 * =================================================================
 */

use thiserror::Error;

/// Fallos de las fronteras de codificación numérica (hex, bytes).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// La cadena hexadecimal contiene un carácter ilegal.
    #[error("illegal hexadecimal character '{offending}'")]
    InvalidHexInput {
        /// Primer carácter ofensivo encontrado.
        offending: char,
    },

    /// El valor decodificado no cabe en la capacidad del destino.
    #[error("decoded value exceeds the {capacity_bits}-bit capacity")]
    InputExceedsCapacity {
        /// Capacidad del destino en bits.
        capacity_bits: u32,
    },

    /// El valor decodificado es mayor o igual al módulo suministrado.
    #[error("decoded value is greater than or equal to the modulus")]
    ValueAboveModulus,

    /// La longitud del buffer no coincide con la esperada por el códec.
    #[error("codec buffer length {got} does not match the expected {expected}")]
    InvalidLength {
        /// Longitud esperada en bytes.
        expected: usize,
        /// Longitud recibida.
        got: usize,
    },
}
