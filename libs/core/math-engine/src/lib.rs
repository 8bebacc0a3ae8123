// [libs/core/math-engine/src/lib.rs]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

/*!
 * =================================================================
 * APARATO: CORE MATH MASTER HUB (V12.0 - PAIRING STACK)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: ORQUESTACIÓN DE PRIMITIVAS MULTIPRECISIÓN
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. STRATA REGISTRATION: Palabras, limbs, campos Montgomery y torres
 *    de extensión bajo un único preludio nominal.
 * 2. PARAMETER CATALOGS: BN254, BLS12-381, secp256k1 y el campo base
 *    de Bandersnatch monomorfizados vía traits de constantes.
 * 3. SECRET DISCIPLINE: Toda rama dependiente de secretos queda
 *    confinada a los selectores 'SecretBool'; las variantes públicas
 *    llevan el sufijo '_vartime'.
 *
 * # Mathematical Proof (Modular Integrity):
 * Este aparato actúa como el nodo raíz del grafo matemático: los
 * estratos de curva, pairing y dominio consumen exclusivamente las
 * primitivas aquí exportadas, garantizando aritmética bit-perfecta a
 * través de todo el monorepo.
 * =================================================================
 */

/// Primitivas de palabra con disciplina de tiempo constante.
pub mod arithmetic;
/// Enteros multiprecisión de tamaño fijo sobre limbs Little-Endian.
pub mod bigint;
/// Catálogo de fallos de las fronteras de codificación numérica.
pub mod errors;
/// Campos primos Fp en dominio Montgomery, monomorfizados por catálogo.
pub mod field;
/// Extensión cuadrática Fp2 y catálogo de torres.
pub mod fp2;
/// Extensión cúbica Fp6 sobre Fp2.
pub mod fp6;
/// Extensión dodécica Fp12, productos dispersos y subgrupo ciclotómico.
pub mod fp12;
/// Catálogos de parámetros por primo y por torre.
pub mod params;

/**
 * PRELUDIO MATEMÁTICO SOBERANO
 *
 * Única autoridad de importación autorizada para los estratos
 * superiores (curva, pairing, dominio). Centraliza la nomenclatura.
 */
pub mod prelude {
    pub use crate::arithmetic::{
        add_with_carry, conditional_copy_word, conditional_swap_words, multiply_add_2,
        multiply_wide, sub_with_borrow, SecretBool, SecretWord, Word, MAX_LIMBS, WORD_BITS,
    };
    pub use crate::bigint::{multiply_full, multiply_high_words, reduce_wide, BigInt};
    pub use crate::errors::MathError;
    pub use crate::field::{FftFieldParameters, FieldElement, FieldParameters};
    pub use crate::fp2::{Fp2, TowerParameters};
    pub use crate::fp6::Fp6;
    pub use crate::fp12::Fp12;

    pub use crate::params::bandersnatch::BandersnatchFr;
    pub use crate::params::bls12_377::{Bls12377Fp, Bls12377Fr};
    pub use crate::params::bls12_381::{Bls12381Fp, Bls12381Fr};
    pub use crate::params::ed25519::Ed25519Fp;
    pub use crate::params::bn254::{Bn254Fp, Bn254Fr};
    pub use crate::params::secp256k1::{Secp256k1Fp, Secp256k1Fr};
}
