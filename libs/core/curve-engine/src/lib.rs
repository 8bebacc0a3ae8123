// [libs/core/curve-engine/src/lib.rs]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

/*!
 * =================================================================
 * APARATO: CURVE ENGINE MASTER HUB (V15.0 - GROUP LAW STACK)
 * CLASIFICACIÓN: CORE GEOMETRY (ESTRATO L1/L2)
 * RESPONSABILIDAD: ORQUESTACIÓN DE LEYES DE GRUPO Y ESCALERAS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. DUAL LAW: Ley completa Renes-Costello-Batina para el camino de
 *    secretos y motor Jacobiano de tiempo variable para las ráfagas
 *    públicas (MSM, tablas de base fija).
 * 2. ENDO STRATA: GLV de dos dimensiones sobre G1, GLS de cuatro
 *    sobre los twists, recodificación m2w2 y la referencia
 *    duplicar-y-sumar para la certificación cruzada.
 * 3. WIRE CODECS: Comprimido/no comprimido BLS12-381, Banderwagon de
 *    32 bytes y el códec de escalares, todos con estados explícitos.
 * =================================================================
 */

/// Conversión afín por lote (truco de Montgomery).
pub mod batch;
/// Catálogos de constantes por curva.
pub mod catalog;
/// Códecs de punto y escalar con estados de deserialización.
pub mod codec;
/// Ley de grupo twisted Edwards (Bandersnatch / Banderwagon).
pub mod edwards;
/// Descomposición GLV/GLS y escaleras aceleradas por endomorfismo.
pub mod endomorphism;
/// Estados de deserialización.
pub mod errors;
/// Tablas de ventana fija del generador.
pub mod generator_table;
/// Ley de grupo Jacobiana de tiempo variable.
pub mod jacobian;
/// MSM de Pippenger con dígitos firmados, serie y paralelo.
pub mod msm;
/// Escaleras escalares genéricas de tiempo constante y de referencia.
pub mod scalar_mul;
/// Limpieza de cofactor y centinelas de subgrupo.
pub mod subgroup;
/// Contratos de campo, catálogos de curva y elemento de grupo.
pub mod traits;
/// Ley de grupo Weierstrass completa (proyectiva) y plano afín.
pub mod weierstrass;

/**
 * PRELUDIO GEOMÉTRICO SOBERANO
 *
 * Única autoridad de importación para los estratos de pairing y
 * dominio.
 */
pub mod prelude {
    pub use crate::batch::{batch_affine_from_jacobian, batch_affine_from_projective};
    pub use crate::catalog::bandersnatch::Bandersnatch;
    pub use crate::catalog::bls12_377::{Bls12377G1, Bls12377G2, BLS12377_X};
    pub use crate::catalog::bls12_381::{Bls12381G1, Bls12381G2, BLS12381_X_MAGNITUDE};
    pub use crate::catalog::edwards25519::Edwards25519;
    pub use crate::catalog::jubjub::Jubjub;
    pub use crate::catalog::bn254::{Bn254G1, Bn254G2, BN254_X};
    pub use crate::catalog::secp256k1::Secp256k1;
    pub use crate::codec::{
        banderwagon_equals, deserialize_banderwagon, deserialize_g1_compressed,
        deserialize_g1_uncompressed, deserialize_g2_compressed, deserialize_g2_uncompressed,
        deserialize_scalar_le, serialize_banderwagon, serialize_g1_compressed,
        serialize_g1_uncompressed, serialize_g2_compressed, serialize_g2_uncompressed,
        serialize_scalar_le,
    };
    pub use crate::edwards::{EdwardsAffinePoint, EdwardsEngine, EdwardsProjectivePoint};
    pub use crate::endomorphism::{
        decompose_glv2, decompose_gls4, endomorphism_phi, endomorphism_psi, scalar_mul_endo,
        scalar_mul_endo_gls4, scalar_mul_glv_m2w2, MiniScalar,
    };
    pub use crate::errors::DeserializationStatus;
    pub use crate::generator_table::{
        FixedBaseTable, BLS12381_G1_GENERATOR_TABLE, BN254_G1_GENERATOR_TABLE,
        SECP256K1_GENERATOR_TABLE,
    };
    pub use crate::jacobian::{JacobianEngine, JacobianPoint};
    pub use crate::msm::{
        msm_parallel_vartime, msm_reference_vartime, msm_vartime, window_width_for, MsmScratch,
    };
    pub use crate::scalar_mul::{
        joint_ladder_2, joint_ladder_4, scalar_mul_double_add_vartime, scalar_mul_generic,
        scalar_mul_wnaf_vartime,
    };
    pub use crate::subgroup::{
        clear_cofactor, is_in_bls12377_g1_subgroup_vartime, is_in_bls12377_g2_subgroup_vartime,
        is_in_bls12381_g1_subgroup_vartime, is_in_bls12381_g2_subgroup_vartime,
        is_in_bn254_g1_subgroup_vartime, is_in_bn254_g2_subgroup_vartime,
        is_in_subgroup_generic_vartime,
    };
    pub use crate::traits::{
        CurveFieldElement, CurveParameters, EdwardsParameters, EndomorphismParameters,
        GlsParameters, GroupElement,
    };
    pub use crate::weierstrass::{AffinePoint, ProjectivePoint, WeierstrassEngine};
}
