// [libs/domain/commitments/src/pedersen.rs]
/*!
 * =================================================================
 * APARATO: PEDERSEN VECTOR COMMITMENT ENGINE (V17.0 - MSM BACKED)
 * CLASIFICACIÓN: DOMAIN COMMITMENTS (ESTRATO L3)
 * RESPONSABILIDAD: COMPROMISOS sum_i c_i G_i CON CEGADO OPCIONAL
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. NOTHING-UP-MY-SLEEVE: Los generadores se derivan por
 *    hash-to-curve de etiquetas indexadas: nadie conoce sus logaritmos
 *    discretos relativos.
 * 2. MSM BACKED: El compromiso es un multi-escalar de Pippenger; la
 *    variante paralela delega en el estrato rayon con resultado
 *    bit-idéntico.
 * 3. HIDING: El cegado añade r H con H independiente de la base.
 * =================================================================
 */

use crate::errors::CommitmentError;
use obsidian_core_curve::prelude::{
    batch_affine_from_projective, msm_parallel_vartime, msm_vartime, AffinePoint,
    CurveFieldElement, CurveParameters, MsmScratch, ProjectivePoint, WeierstrassEngine,
};
use obsidian_core_math::prelude::BigInt;
use obsidian_domain_h2c::prelude::{hash_to_curve, HashableFieldElement, SvdwParameters};
use tracing::instrument;

/// Compromete vectores de hasta esta longitud de etiqueta de índice.
const GENERATOR_LABEL_PREFIX: &[u8] = b"obsidian-pedersen-generator";

/**
 * Base de compromiso: generadores independientes G_0 .. G_(n-1) y el
 * generador de cegado H.
 */
pub struct PedersenCommitter<C: CurveParameters> {
    generators: Vec<AffinePoint<C>>,
    blinding_generator: AffinePoint<C>,
}

impl<C> PedersenCommitter<C>
where
    C: SvdwParameters,
    C::Field: HashableFieldElement,
{
    /**
     * Deriva una base de n generadores por hash-to-curve de etiquetas
     * indexadas bajo la etiqueta de dominio dada.
     *
     * # Errors:
     * Propaga los fallos del pipeline hash-to-curve.
     */
    #[instrument(level = "debug", skip_all, fields(size = size))]
    pub fn derive(size: usize, domain_label: &[u8]) -> Result<Self, CommitmentError> {
        let mut projective = Vec::with_capacity(size + 1);
        for index in 0..=size as u64 {
            let mut label = Vec::with_capacity(GENERATOR_LABEL_PREFIX.len() + 8);
            label.extend_from_slice(GENERATOR_LABEL_PREFIX);
            label.extend_from_slice(&index.to_be_bytes());
            projective.push(
                hash_to_curve::<C>(&label, domain_label)
                    .map_err(|_| CommitmentError::GeneratorDerivationFailed { index: index as usize })?,
            );
        }
        let mut affine = vec![AffinePoint::<C>::infinity(); projective.len()];
        let mut scratch = vec![C::Field::field_zero(); 3 * projective.len()];
        batch_affine_from_projective(&projective, &mut affine, &mut scratch);
        let blinding_generator = affine.pop().unwrap_or_else(AffinePoint::infinity);
        Ok(Self { generators: affine, blinding_generator })
    }
}

impl<C: CurveParameters> PedersenCommitter<C> {
    /// Base desde generadores explícitos del llamador.
    #[must_use]
    pub fn from_generators(
        generators: Vec<AffinePoint<C>>,
        blinding_generator: AffinePoint<C>,
    ) -> Self {
        Self { generators, blinding_generator }
    }

    /// Generadores de la base.
    #[must_use]
    pub fn generators(&self) -> &[AffinePoint<C>] {
        &self.generators
    }

    /**
     * Compromiso vectorial sum_i values[i] G_i (sin cegado).
     *
     * # Errors:
     * 'LengthMismatch' si el vector excede la base.
     */
    pub fn commit(
        &self,
        values: &[BigInt<4>],
        scratch: &mut MsmScratch<C>,
    ) -> Result<ProjectivePoint<C>, CommitmentError> {
        if values.len() > self.generators.len() {
            return Err(CommitmentError::LengthMismatch {
                expected: self.generators.len(),
                got: values.len(),
            });
        }
        Ok(msm_vartime(values, &self.generators[..values.len()], scratch))
    }

    /**
     * Compromiso cegado sum_i values[i] G_i + blinding H.
     */
    pub fn commit_hiding(
        &self,
        values: &[BigInt<4>],
        blinding: &BigInt<4>,
        scratch: &mut MsmScratch<C>,
    ) -> Result<ProjectivePoint<C>, CommitmentError> {
        let commitment = self.commit(values, scratch)?;
        // El cegado es secreto: escalera de ventana fija de tiempo constante.
        let blinding_term = obsidian_core_curve::prelude::scalar_mul_generic(
            &WeierstrassEngine::<C>::projective_from_affine(&self.blinding_generator),
            blinding,
            C::ORDER_BITS,
        );
        Ok(WeierstrassEngine::<C>::sum(&commitment, &blinding_term))
    }

    /**
     * Compromiso paralelo (estrato rayon), bit-idéntico al serial.
     */
    pub fn commit_parallel(
        &self,
        values: &[BigInt<4>],
    ) -> Result<ProjectivePoint<C>, CommitmentError> {
        if values.len() > self.generators.len() {
            return Err(CommitmentError::LengthMismatch {
                expected: self.generators.len(),
                got: values.len(),
            });
        }
        Ok(msm_parallel_vartime(values, &self.generators[..values.len()]))
    }
}
