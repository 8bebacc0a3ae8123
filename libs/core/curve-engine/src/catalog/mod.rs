// [libs/core/curve-engine/src/catalog/mod.rs]
//! Catálogos de curva: generadores, retículas de endomorfismo y
//! constantes psi de cada grupo soportado.

/// Bandersnatch / Banderwagon (twisted Edwards sobre Fr de BLS12-381).
pub mod bandersnatch;
/// BLS12-377 G1 y su twist D G2.
pub mod bls12_377;
/// BLS12-381 G1 y su twist M G2.
pub mod bls12_381;
/// Edwards25519 (twisted Edwards a = -1 sobre 2^255 - 19).
pub mod edwards25519;
/// Jubjub (twisted Edwards a = -1 sobre Fr de BLS12-381).
pub mod jubjub;
/// BN254 G1 y su twist D G2.
pub mod bn254;
/// secp256k1.
pub mod secp256k1;
