// [libs/core/curve-engine/src/endomorphism.rs]
/*!
 * =================================================================
 * APARATO: ENDOMORPHISM ACCELERATION ENGINE (V35.0 - GLV / GLS)
 * CLASIFICACIÓN: CORE GEOMETRY (ESTRATO L1)
 * RESPONSABILIDAD: DESCOMPOSICIÓN DE ESCALARES Y ESCALERAS CONJUNTAS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. WRAPPED BABAI: La descomposición opera en complemento a dos
 *    módulo 2^256: coeficientes de redondeo precomputados a escala
 *    2^384, productos truncados bajos y recuperación de signo por el
 *    bit alto. Cero ramas sobre el escalar.
 * 2. GLV 2D: k = k0 + k1 lambda con mini-escalares de media longitud;
 *    escalera conjunta de Straus sobre {P, phi(P)}.
 * 3. GLS 4D: el twist descompone en cuatro mini-escalares de cuarto
 *    de longitud sobre {Q, psi(Q), psi^2(Q), psi^3(Q)}.
 * 4. M2W2: recodificación Joye-Tunstall de anchura 2 sobre
 *    mini-escalares forzados a impares, tabla de 2^(w-1) puntos por
 *    rama y corrección final de paridad.
 *
 * # Mathematical Proof (Babai Rounding):
 * Para la retícula L = {v : v . (1, lambda, ..) = 0 mod r} con base
 * corta B, el vector (k, 0, ..) - round((k, 0, ..) B^-1) B tiene
 * coordenadas acotadas por la suma de las normas de B; las tablas
 * certificadas garantizan magnitudes < 2^128 (GLV) y < 2^64 (GLS).
 * =================================================================
 */

use crate::scalar_mul::{joint_ladder_2, joint_ladder_4};
use crate::traits::{
    CurveFieldElement, CurveParameters, EndomorphismParameters, GlsParameters, GroupElement,
};
use crate::weierstrass::ProjectivePoint;
use obsidian_core_math::prelude::{multiply_full, BigInt, SecretBool};
use tracing::trace;

/// Mini-escalar con signo explícito; la magnitud viaja en valor absoluto.
#[derive(Debug, Clone, Copy)]
pub struct MiniScalar {
    /// Magnitud del mini-escalar.
    pub magnitude: BigInt<4>,
    /// Selector de signo negativo.
    pub is_negative: SecretBool,
}

/// Coeficiente de Babai: c = round(k * g / 2^384) con signo aplicado
/// en complemento a dos.
#[inline]
fn babai_coefficient(
    scalar: &BigInt<4>,
    magnitude: &BigInt<6>,
    is_negative: bool,
) -> BigInt<4> {
    let mut product = BigInt::<10>::ZERO;
    multiply_full(&mut product, scalar, magnitude);
    // Redondeo: + 2^383 antes del desplazamiento de 384 bits.
    let mut rounding = BigInt::<10>::ZERO;
    rounding.limbs[5] = 1 << 63;
    let _ = product.add_assign(&rounding);
    let mut coefficient = BigInt::<4>::ZERO;
    coefficient.limbs.copy_from_slice(&product.limbs[6..10]);
    coefficient.conditional_negate(SecretBool::from_bit(is_negative as u64));
    coefficient
}

/// Signo y magnitud desde un residuo en complemento a dos (la magnitud
/// real cabe en 128 bits, el bit 255 decide).
#[inline]
fn sign_split(wrapped: BigInt<4>) -> MiniScalar {
    let is_negative = SecretBool::from_bit(wrapped.limbs[3] >> 63);
    let mut magnitude = wrapped;
    magnitude.conditional_negate(is_negative);
    MiniScalar { magnitude, is_negative }
}

/**
 * Descomposición GLV de dos dimensiones: k = k0 + k1 lambda (mod r).
 *
 * El escalar debe ser canónico (0 <= k < r); las magnitudes de salida
 * quedan acotadas por 2^MINI_SCALAR_BITS.
 */
#[must_use]
pub fn decompose_glv2<C: EndomorphismParameters>(scalar: &BigInt<4>) -> [MiniScalar; 2] {
    let c1 = babai_coefficient(scalar, &C::BABAI_G1, C::BABAI_G1_IS_NEGATIVE);
    let c2 = babai_coefficient(scalar, &C::BABAI_G2, C::BABAI_G2_IS_NEGATIVE);

    let mut k0 = *scalar;
    let _ = k0.sub_assign(&c1.multiply_low(&C::LATTICE_V1[0]));
    let _ = k0.sub_assign(&c2.multiply_low(&C::LATTICE_V2[0]));
    let mut k1 = BigInt::<4>::ZERO;
    let _ = k1.sub_assign(&c1.multiply_low(&C::LATTICE_V1[1]));
    let _ = k1.sub_assign(&c2.multiply_low(&C::LATTICE_V2[1]));

    [sign_split(k0), sign_split(k1)]
}

/// Endomorfismo GLV phi(X : Y : Z) = (beta X : Y : Z).
#[inline]
#[must_use]
pub fn endomorphism_phi<C: EndomorphismParameters>(
    point: &ProjectivePoint<C>,
) -> ProjectivePoint<C> {
    ProjectivePoint {
        x: C::ENDO_BETA.multiply_modular(&point.x),
        y: point.y,
        z: point.z,
    }
}

/**
 * Multiplicación escalar acelerada por endomorfismo (dos dimensiones),
 * de tiempo constante sobre el escalar.
 */
#[must_use]
pub fn scalar_mul_endo<C: EndomorphismParameters>(
    point: &ProjectivePoint<C>,
    scalar: &BigInt<4>,
) -> ProjectivePoint<C> {
    let minis = decompose_glv2::<C>(scalar);
    let mut branch_0 = *point;
    branch_0.group_conditional_negate(minis[0].is_negative);
    let mut branch_1 = endomorphism_phi::<C>(point);
    branch_1.group_conditional_negate(minis[1].is_negative);
    joint_ladder_2(
        &branch_0,
        &branch_1,
        &minis[0].magnitude,
        &minis[1].magnitude,
        C::MINI_SCALAR_BITS,
    )
}

/// Endomorfismo GLS psi sobre el twist: coordenadas conjugadas y
/// escaladas por las constantes de untwist-Frobenius-twist.
#[inline]
#[must_use]
pub fn endomorphism_psi<C: GlsParameters>(point: &ProjectivePoint<C>) -> ProjectivePoint<C> {
    ProjectivePoint {
        x: C::PSI_X.multiply_modular(&point.x.frobenius_conjugate()),
        y: C::PSI_Y.multiply_modular(&point.y.frobenius_conjugate()),
        z: point.z.frobenius_conjugate(),
    }
}

/**
 * Descomposición GLS de cuatro dimensiones sobre el autovalor de psi.
 */
#[must_use]
pub fn decompose_gls4<C: GlsParameters>(scalar: &BigInt<4>) -> [MiniScalar; 4] {
    let mut coefficients = [BigInt::<4>::ZERO; 4];
    for index in 0..4 {
        coefficients[index] =
            babai_coefficient(scalar, &C::BABAI[index], C::BABAI_IS_NEGATIVE[index]);
    }
    let mut minis = [MiniScalar { magnitude: BigInt::ZERO, is_negative: SecretBool::FALSE }; 4];
    for column in 0..4 {
        let mut accumulator = if column == 0 { *scalar } else { BigInt::ZERO };
        for row in 0..4 {
            let _ = accumulator.sub_assign(&coefficients[row].multiply_low(&C::LATTICE[row][column]));
        }
        minis[column] = sign_split(accumulator);
    }
    minis
}

/**
 * Multiplicación escalar GLS de cuatro dimensiones para los grupos del
 * twist (G2), de tiempo constante sobre el escalar.
 */
#[must_use]
pub fn scalar_mul_endo_gls4<C: GlsParameters>(
    point: &ProjectivePoint<C>,
    scalar: &BigInt<4>,
) -> ProjectivePoint<C> {
    let minis = decompose_gls4::<C>(scalar);
    let mut branches = [*point; 4];
    for index in 1..4 {
        branches[index] = endomorphism_psi::<C>(&branches[index - 1]);
    }
    for index in 0..4 {
        branches[index].group_conditional_negate(minis[index].is_negative);
    }
    let magnitudes = [
        minis[0].magnitude,
        minis[1].magnitude,
        minis[2].magnitude,
        minis[3].magnitude,
    ];
    joint_ladder_4(&branches, &magnitudes, C::MINI_SCALAR_BITS)
}

// =================================================================
// RECODIFICACIÓN DE ANCHURA 2 (M2W2)
// =================================================================

/// Dígito firmado de la recodificación de anchura 2.
#[derive(Debug, Clone, Copy)]
struct SignedDigit {
    /// Magnitud del dígito (1 o 3).
    magnitude: u64,
    /// Selector de signo negativo.
    is_negative: SecretBool,
}

/// Cota superior de dígitos base 4 para mini-escalares de 128 bits.
const M2W2_MAX_DIGITS: usize = 66;

/**
 * Recodificación Joye-Tunstall de anchura 2 de un impar: dígitos en
 * {-3, -1, 1, 3} con n = sum d_i 4^i, todos impares, sin ramas sobre
 * el escalar.
 */
fn recode_width_two(odd_magnitude: &BigInt<4>, digit_count: usize) -> [SignedDigit; M2W2_MAX_DIGITS] {
    debug_assert!(digit_count <= M2W2_MAX_DIGITS);
    let mut digits =
        [SignedDigit { magnitude: 1, is_negative: SecretBool::FALSE }; M2W2_MAX_DIGITS];
    let mut remaining = *odd_magnitude;
    for digit in digits.iter_mut().take(digit_count - 1) {
        let low = remaining.limbs[0] & 7;
        // d = low - 4: negativo cuando low < 4; |d| = 4 - low o low - 4.
        let is_negative = SecretBool::from_bit((low >> 2) ^ 1);
        let magnitude = is_negative.select_word(4u64.wrapping_sub(low), low.wrapping_sub(4));
        // remaining = (remaining - d) / 4.
        let addend = BigInt::<4>::from_word(magnitude);
        let _ = remaining.conditional_add(&addend, is_negative);
        let _ = remaining.conditional_subtract(&addend, is_negative.not());
        remaining.shift_right(2);
        *digit = SignedDigit { magnitude, is_negative };
    }
    // Dígito terminal: el resto es 1 o 3.
    digits[digit_count - 1] =
        SignedDigit { magnitude: remaining.limbs[0], is_negative: SecretBool::FALSE };
    digits
}

/**
 * Multiplicación por endomorfismo con mini-escalares recodificados a
 * anchura 2 (tabla de 2^(w-1) = 2 puntos por rama: {Q, 3Q}).
 *
 * Los mini-escalares se fuerzan a impares sumando su paridad; la
 * corrección final resta la rama correspondiente. Tiempo constante
 * sobre el escalar.
 */
#[must_use]
pub fn scalar_mul_glv_m2w2<C: EndomorphismParameters>(
    point: &ProjectivePoint<C>,
    scalar: &BigInt<4>,
) -> ProjectivePoint<C> {
    let minis = decompose_glv2::<C>(scalar);
    trace!(curve = C::NAME, "descomposición GLV para escalera m2w2");
    let digit_count = (C::MINI_SCALAR_BITS as usize) / 2 + 2;

    let mut branches = [*point, endomorphism_phi::<C>(point)];
    let mut parities = [SecretBool::FALSE; 2];
    let mut recoded = [[SignedDigit { magnitude: 1, is_negative: SecretBool::FALSE };
        M2W2_MAX_DIGITS]; 2];

    for index in 0..2 {
        branches[index].group_conditional_negate(minis[index].is_negative);
        let mut magnitude = minis[index].magnitude;
        // Paridad forzada: los pares se incrementan en uno.
        let is_even = magnitude.is_even();
        let _ = magnitude.conditional_add(&BigInt::one(), is_even);
        parities[index] = is_even;
        recoded[index] = recode_width_two(&magnitude, digit_count);
    }

    // Tablas {Q, 3Q} por rama.
    let tables: [[ProjectivePoint<C>; 2]; 2] = [
        [branches[0], branches[0].group_double().group_sum(&branches[0])],
        [branches[1], branches[1].group_double().group_sum(&branches[1])],
    ];

    let mut accumulator = ProjectivePoint::<C>::identity();
    for digit_index in (0..digit_count).rev() {
        accumulator = accumulator.group_double().group_double();
        for branch in 0..2 {
            let digit = recoded[branch][digit_index];
            let mut addend = tables[branch][0];
            addend.group_conditional_copy(
                &tables[branch][1],
                SecretBool::from_words_eq(digit.magnitude, 3),
            );
            addend.group_conditional_negate(digit.is_negative);
            accumulator = accumulator.group_sum(&addend);
        }
    }

    // Corrección de paridad: se resta la rama donde el mini era par.
    for branch in 0..2 {
        let mut correction = branches[branch].group_negate();
        correction.group_conditional_copy(&ProjectivePoint::identity(), parities[branch].not());
        accumulator = accumulator.group_sum(&correction);
    }
    accumulator
}
