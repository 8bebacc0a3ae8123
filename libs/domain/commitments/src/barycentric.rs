// [libs/domain/commitments/src/barycentric.rs]
/*!
 * =================================================================
 * APARATO: BARYCENTRIC LAGRANGE ENGINE (V13.0 - DOMAIN WEIGHTS)
 * CLASIFICACIÓN: DOMAIN COMMITMENTS (ESTRATO L3)
 * RESPONSABILIDAD: EVALUACIÓN LAGRANGE Y COCIENTES EN EL DOMINIO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. PRECOMPUTED WEIGHTS: w_i = 1 / prod_{j != i} (r_i - r_j) via el
 *    truco de Montgomery (una inversión para todo el dominio).
 * 2. IN-DOMAIN QUOTIENT: divide_on_domain computa
 *    (p(X) - p(r_i)) / (X - r_i) sobre el dominio sin división
 *    polinomial explícita.
 *
 * # Mathematical Proof (Barycentric Form):
 * p(z) = l(z) sum_i w_i y_i / (z - r_i) con l(z) = prod_i (z - r_i),
 * exacta para todo z fuera del dominio; dentro del dominio el valor
 * es directamente la evaluación almacenada.
 * =================================================================
 */

use crate::errors::CommitmentError;
use obsidian_core_math::prelude::{FieldElement, FieldParameters};

/**
 * Dominio de interpolación con pesos barycentric precomputados.
 */
pub struct BarycentricDomain<P, const N: usize> {
    roots: Vec<FieldElement<P, N>>,
    weights: Vec<FieldElement<P, N>>,
}

impl<P: FieldParameters<N>, const N: usize> BarycentricDomain<P, N> {
    /**
     * Construye el dominio y sus pesos con una única inversión.
     *
     * # Errors:
     * 'RepeatedDomainRoot' si dos raíces coinciden (el denominador del
     * peso colapsa a cero).
     */
    pub fn new(roots: Vec<FieldElement<P, N>>) -> Result<Self, CommitmentError> {
        let count = roots.len();
        let mut denominators = vec![FieldElement::one(); count];
        for i in 0..count {
            for j in 0..count {
                if i != j {
                    denominators[i] = denominators[i]
                        .multiply_modular(&roots[i].subtract_modular(&roots[j]));
                }
            }
            if denominators[i].is_zero().to_bool_vartime() {
                return Err(CommitmentError::RepeatedDomainRoot { index: i });
            }
        }
        let mut weights = vec![FieldElement::zero(); count];
        let mut scratch = vec![FieldElement::zero(); count];
        FieldElement::batch_invert_into(&denominators, &mut weights, &mut scratch);
        Ok(Self { roots, weights })
    }

    /// Raíces del dominio.
    #[must_use]
    pub fn roots(&self) -> &[FieldElement<P, N>] {
        &self.roots
    }

    /// Pesos barycentric.
    #[must_use]
    pub fn weights(&self) -> &[FieldElement<P, N>] {
        &self.weights
    }

    /**
     * Evaluación barycentric de la forma Lagrange en un punto
     * arbitrario; dentro del dominio retorna la evaluación almacenada.
     *
     * # Errors:
     * 'LengthMismatch' si las evaluaciones no cubren el dominio.
     */
    pub fn evaluate_lagrange(
        &self,
        evaluations: &[FieldElement<P, N>],
        point: &FieldElement<P, N>,
    ) -> Result<FieldElement<P, N>, CommitmentError> {
        if evaluations.len() != self.roots.len() {
            return Err(CommitmentError::LengthMismatch {
                expected: self.roots.len(),
                got: evaluations.len(),
            });
        }
        // Punto dentro del dominio: el valor es la evaluación directa.
        for (root, evaluation) in self.roots.iter().zip(evaluations.iter()) {
            if point.equals(root).to_bool_vartime() {
                return Ok(*evaluation);
            }
        }
        let mut vanishing = FieldElement::one();
        let mut differences = Vec::with_capacity(self.roots.len());
        for root in &self.roots {
            let difference = point.subtract_modular(root);
            vanishing = vanishing.multiply_modular(&difference);
            differences.push(difference);
        }
        let mut inverses = vec![FieldElement::zero(); differences.len()];
        let mut scratch = vec![FieldElement::zero(); differences.len()];
        FieldElement::batch_invert_into(&differences, &mut inverses, &mut scratch);
        let mut accumulator = FieldElement::zero();
        for index in 0..self.roots.len() {
            accumulator = accumulator.add_modular(
                &self.weights[index]
                    .multiply_modular(&evaluations[index])
                    .multiply_modular(&inverses[index]),
            );
        }
        Ok(vanishing.multiply_modular(&accumulator))
    }

    /**
     * Cociente en el dominio: las evaluaciones de
     * q(X) = (p(X) - p(r_i)) / (X - r_i) sin división explícita.
     *
     * # Mathematical Proof:
     * Para j != i: q_j = (y_j - y_i) / (r_j - r_i). En la raíz
     * removida, q_i = - sum_{j != i} (w_j / w_i) q_j, identidad de los
     * pesos barycentric certificada en el espejo polinomial.
     *
     * # Errors:
     * 'LengthMismatch' o índice fuera del dominio.
     */
    pub fn divide_on_domain(
        &self,
        evaluations: &[FieldElement<P, N>],
        index: usize,
    ) -> Result<Vec<FieldElement<P, N>>, CommitmentError> {
        let count = self.roots.len();
        if evaluations.len() != count {
            return Err(CommitmentError::LengthMismatch { expected: count, got: evaluations.len() });
        }
        if index >= count {
            return Err(CommitmentError::IndexOutOfDomain { index, size: count });
        }
        let mut differences = vec![FieldElement::one(); count];
        for j in 0..count {
            if j != index {
                differences[j] = self.roots[j].subtract_modular(&self.roots[index]);
            }
        }
        let mut inverses = vec![FieldElement::zero(); count];
        let mut scratch = vec![FieldElement::zero(); count];
        FieldElement::batch_invert_into(&differences, &mut inverses, &mut scratch);

        let mut quotients = vec![FieldElement::zero(); count];
        let weight_index_inverse = self.weights[index].invert();
        let mut removed_accumulator = FieldElement::zero();
        for j in 0..count {
            if j == index {
                continue;
            }
            quotients[j] = evaluations[j]
                .subtract_modular(&evaluations[index])
                .multiply_modular(&inverses[j]);
            removed_accumulator = removed_accumulator.subtract_modular(
                &self.weights[j]
                    .multiply_modular(&weight_index_inverse)
                    .multiply_modular(&quotients[j]),
            );
        }
        quotients[index] = removed_accumulator;
        Ok(quotients)
    }
}
