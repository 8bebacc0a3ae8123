// [libs/core/curve-engine/src/subgroup.rs]
/*!
 * =================================================================
 * APARATO: SUBGROUP SENTINEL ENGINE (V18.0 - COFACTOR STRATA)
 * CLASIFICACIÓN: CORE GEOMETRY (ESTRATO L1)
 * RESPONSABILIDAD: LIMPIEZA DE COFACTOR Y PERTENENCIA AL SUBGRUPO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. COFACTOR SWEEP: 'clear_cofactor' multiplica por el cofactor
 *    efectivo del catálogo y aterriza en el subgrupo primo.
 * 2. EIGENVALUE SENTINELS: Las pertenencias rápidas explotan los
 *    endomorfismos: phi(P) = [lambda] P sobre G1 y psi(Q) con
 *    autovalor corto sobre los twists, en lugar del barrido [r] P.
 * 3. PUBLIC DATA: Los puntos verificados provienen de deserialización
 *    o hash; todas las rutas son '_vartime'.
 * =================================================================
 */

use crate::catalog::bls12_377::{Bls12377G1, Bls12377G2, BLS12377_X};
use crate::catalog::bls12_381::{Bls12381G1, Bls12381G2, BLS12381_X_MAGNITUDE};
use crate::catalog::bn254::{Bn254G1, Bn254G2};
use crate::traits::GroupElement;
use crate::endomorphism::{endomorphism_phi, endomorphism_psi};
use crate::scalar_mul::scalar_mul_double_add_vartime;
use crate::traits::{CurveParameters, GlsParameters};
use crate::weierstrass::ProjectivePoint;
use obsidian_core_math::prelude::BigInt;
use tracing::instrument;

/**
 * Limpieza de cofactor: proyección al subgrupo primo por
 * multiplicación por el cofactor efectivo del catálogo.
 */
#[must_use]
pub fn clear_cofactor<C: CurveParameters>(point: &ProjectivePoint<C>) -> ProjectivePoint<C> {
    if C::COFACTOR.equals(&BigInt::one()).to_bool_vartime() {
        return *point;
    }
    scalar_mul_double_add_vartime(point, &C::COFACTOR)
}

/**
 * Pertenencia genérica al subgrupo primo: [r] P = O. Correcta para
 * cualquier catálogo; las rutas con endomorfismo la sustituyen donde
 * existe un autovalor corto.
 */
#[must_use]
pub fn is_in_subgroup_generic_vartime<C: CurveParameters>(point: &ProjectivePoint<C>) -> bool {
    scalar_mul_double_add_vartime(point, &C::ORDER)
        .is_identity()
        .to_bool_vartime()
}

/**
 * Pertenencia rápida a BLS12-381 G1 vía el endomorfismo GLV.
 *
 * # Mathematical Proof:
 * Sobre el subgrupo primo phi actúa como [lambda] con
 * lambda = -x^2 mod r; en el complemento del cofactor el autovalor
 * difiere, de modo que phi(P) = -[x^2] P caracteriza al subgrupo.
 * x cabe en 64 bits: dos escaleras cortas en lugar de una de 255 bits.
 */
#[instrument(level = "trace", skip_all)]
#[must_use]
pub fn is_in_bls12381_g1_subgroup_vartime(point: &ProjectivePoint<Bls12381G1>) -> bool {
    let x_point = scalar_mul_double_add_vartime(point, &BLS12381_X_MAGNITUDE);
    let x_squared_point = scalar_mul_double_add_vartime(&x_point, &BLS12381_X_MAGNITUDE);
    endomorphism_phi::<Bls12381G1>(point)
        .equals(&x_squared_point.negate())
        .to_bool_vartime()
}

/**
 * Pertenencia rápida a BLS12-381 G2 vía psi.
 *
 * # Mathematical Proof:
 * psi tiene autovalor x sobre G2 (x negativo): psi(Q) = -[|x|] Q.
 */
#[instrument(level = "trace", skip_all)]
#[must_use]
pub fn is_in_bls12381_g2_subgroup_vartime(point: &ProjectivePoint<Bls12381G2>) -> bool {
    let x_point = scalar_mul_double_add_vartime(point, &BLS12381_X_MAGNITUDE);
    endomorphism_psi::<Bls12381G2>(point)
        .equals(&x_point.negate())
        .to_bool_vartime()
}

/**
 * Pertenencia rápida a BLS12-377 G1 vía el endomorfismo GLV.
 *
 * # Mathematical Proof:
 * El autovalor del catálogo es lambda = x^2 - 1 (x positivo):
 * phi(P) + P = [x^2] P caracteriza al subgrupo con dos escaleras de
 * 64 bits.
 */
#[instrument(level = "trace", skip_all)]
#[must_use]
pub fn is_in_bls12377_g1_subgroup_vartime(point: &ProjectivePoint<Bls12377G1>) -> bool {
    let x_point = scalar_mul_double_add_vartime(point, &BLS12377_X);
    let x_squared_point = scalar_mul_double_add_vartime(&x_point, &BLS12377_X);
    endomorphism_phi::<Bls12377G1>(point)
        .group_sum(point)
        .equals(&x_squared_point)
        .to_bool_vartime()
}

/**
 * Pertenencia rápida a BLS12-377 G2 vía psi con autovalor x positivo.
 */
#[instrument(level = "trace", skip_all)]
#[must_use]
pub fn is_in_bls12377_g2_subgroup_vartime(point: &ProjectivePoint<Bls12377G2>) -> bool {
    let x_point = scalar_mul_double_add_vartime(point, &BLS12377_X);
    endomorphism_psi::<Bls12377G2>(point)
        .equals(&x_point)
        .to_bool_vartime()
}

/**
 * Pertenencia a BN254 G1: la curva tiene cofactor 1, basta la
 * pertenencia a la curva (verificada en deserialización).
 */
#[must_use]
pub fn is_in_bn254_g1_subgroup_vartime(_point: &ProjectivePoint<Bn254G1>) -> bool {
    true
}

/**
 * Pertenencia rápida a BN254 G2 vía psi con autovalor 6 x^2 (127 bits).
 */
#[instrument(level = "trace", skip_all)]
#[must_use]
pub fn is_in_bn254_g2_subgroup_vartime(point: &ProjectivePoint<Bn254G2>) -> bool {
    let eigen_point =
        scalar_mul_double_add_vartime(point, &<Bn254G2 as GlsParameters>::PSI_EIGENVALUE);
    endomorphism_psi::<Bn254G2>(point)
        .equals(&eigen_point)
        .to_bool_vartime()
}
