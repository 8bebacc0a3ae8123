// [libs/domain/hash-to-curve/src/pipeline.rs]
/*!
 * =================================================================
 * APARATO: HASH-TO-CURVE PIPELINE (V10.0 - RANDOM ORACLE)
 * CLASIFICACIÓN: DOMAIN H2C (ESTRATO L3)
 * RESPONSABILIDAD: (msg, dst) -> PUNTO DEL SUBGRUPO PRIMO
 *
 * Construcción hash_to_curve del IETF en su variante random-oracle:
 * dos elementos de campo, dos mapas SVDW, suma de grupo y limpieza de
 * cofactor. Determinista para (msg, dst) fijos.
 * =================================================================
 */

use crate::errors::HashToCurveError;
use crate::hash_to_field::{hash_to_field, HashableFieldElement};
use crate::svdw::{map_to_curve_svdw, SvdwParameters};
use obsidian_core_curve::prelude::{clear_cofactor, ProjectivePoint, WeierstrassEngine};
use tracing::instrument;

/**
 * Pipeline completo mensaje -> punto del subgrupo primo.
 *
 * # Errors:
 * Propaga los fallos de la expansión (etiqueta o longitud ilegales).
 */
#[instrument(level = "debug", skip_all, fields(curve = C::NAME))]
pub fn hash_to_curve<C>(
    message: &[u8],
    domain_separation_tag: &[u8],
) -> Result<ProjectivePoint<C>, HashToCurveError>
where
    C: SvdwParameters,
    C::Field: HashableFieldElement,
{
    let field_elements = hash_to_field::<C::Field>(message, domain_separation_tag, 2)?;
    let first = map_to_curve_svdw::<C>(&field_elements[0]);
    let second = map_to_curve_svdw::<C>(&field_elements[1]);
    let combined = WeierstrassEngine::<C>::mixed_sum(
        &WeierstrassEngine::<C>::projective_from_affine(&first),
        &second,
    );
    Ok(clear_cofactor(&combined))
}

/**
 * Variante encode_to_curve (un único mapa): distribución no uniforme
 * pero inyectiva en el costo, para los usos que solo requieren un
 * punto determinista.
 */
#[instrument(level = "debug", skip_all, fields(curve = C::NAME))]
pub fn encode_to_curve<C>(
    message: &[u8],
    domain_separation_tag: &[u8],
) -> Result<ProjectivePoint<C>, HashToCurveError>
where
    C: SvdwParameters,
    C::Field: HashableFieldElement,
{
    let field_elements = hash_to_field::<C::Field>(message, domain_separation_tag, 1)?;
    let mapped = map_to_curve_svdw::<C>(&field_elements[0]);
    Ok(clear_cofactor(
        &WeierstrassEngine::<C>::projective_from_affine(&mapped),
    ))
}
