// [libs/domain/commitments/src/polynomial.rs]
/*!
 * =================================================================
 * APARATO: POLYNOMIAL EVALUATION ENGINE (V11.0 - COEFFICIENT FORM)
 * CLASIFICACIÓN: DOMAIN COMMITMENTS (ESTRATO L3)
 * RESPONSABILIDAD: EVALUACIÓN, DERIVADA Y POLINOMIO ANULADOR
 *
 * Los coeficientes viajan en orden ascendente de grado
 * (coefficients[i] acompaña a z^i); la evaluación es Horner.
 * =================================================================
 */

use obsidian_core_math::prelude::{FieldElement, FieldParameters};

/**
 * Evaluación de Horner: p(z) = sum_i coefficients[i] z^i.
 */
#[must_use]
pub fn evaluate_polynomial<P: FieldParameters<N>, const N: usize>(
    coefficients: &[FieldElement<P, N>],
    point: &FieldElement<P, N>,
) -> FieldElement<P, N> {
    let mut accumulator = FieldElement::zero();
    for coefficient in coefficients.iter().rev() {
        accumulator = accumulator.multiply_modular(point).add_modular(coefficient);
    }
    accumulator
}

/**
 * Evaluación conjunta de p y su derivada formal en el mismo barrido.
 *
 * # Mathematical Proof:
 * El paso de Horner v <- v z + c_i satisface d <- d z + v_previo,
 * donde d acumula exactamente p'(z) al agotar los coeficientes.
 */
#[must_use]
pub fn evaluate_with_derivative<P: FieldParameters<N>, const N: usize>(
    coefficients: &[FieldElement<P, N>],
    point: &FieldElement<P, N>,
) -> (FieldElement<P, N>, FieldElement<P, N>) {
    let mut value = FieldElement::zero();
    let mut derivative = FieldElement::zero();
    for coefficient in coefficients.iter().rev() {
        derivative = derivative.multiply_modular(point).add_modular(&value);
        value = value.multiply_modular(point).add_modular(coefficient);
    }
    (value, derivative)
}

/**
 * Coeficientes del polinomio anulador prod_i (X - r_i) sobre las
 * raíces dadas, por convolución incremental.
 */
#[must_use]
pub fn vanishing_polynomial_coefficients<P: FieldParameters<N>, const N: usize>(
    roots: &[FieldElement<P, N>],
) -> Vec<FieldElement<P, N>> {
    let mut coefficients = vec![FieldElement::one()];
    for root in roots {
        coefficients.push(FieldElement::zero());
        // Multiplicación por (X - r): new[i] = old[i-1] - r old[i].
        for index in (0..coefficients.len() - 1).rev() {
            let shifted = coefficients[index];
            coefficients[index + 1] = coefficients[index + 1].add_modular(&shifted);
            coefficients[index] = shifted.multiply_modular(root).negate_modular();
        }
    }
    coefficients
}

/**
 * Evaluación directa del polinomio anulador: prod_i (z - r_i).
 * Consistente con la forma en coeficientes (certificado en espejo).
 */
#[must_use]
pub fn evaluate_vanishing_polynomial<P: FieldParameters<N>, const N: usize>(
    roots: &[FieldElement<P, N>],
    point: &FieldElement<P, N>,
) -> FieldElement<P, N> {
    let mut product = FieldElement::one();
    for root in roots {
        product = product.multiply_modular(&point.subtract_modular(root));
    }
    product
}
