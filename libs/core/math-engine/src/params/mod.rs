// [libs/core/math-engine/src/params/mod.rs]
//! Catálogos de parámetros por primo: módulos, constantes Montgomery,
//! datos de raíz cuadrada y tablas de Frobenius de cada torre.

/// Campo escalar del subgrupo primo de Bandersnatch.
pub mod bandersnatch;
/// Campos base y escalar de BLS12-377, con su torre Fp12 (beta = -5).
pub mod bls12_377;
/// Campos base y escalar de BLS12-381, con su torre Fp12.
pub mod bls12_381;
/// Campos base y escalar de BN254, con su torre Fp12.
pub mod bn254;
/// Campo base de Edwards25519.
pub mod ed25519;
/// Campos base y escalar de secp256k1.
pub mod secp256k1;
