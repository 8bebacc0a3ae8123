// [libs/domain/hash-to-curve/src/svdw.rs]
/*!
 * =================================================================
 * APARATO: SVDW MAPPING ENGINE (V12.0 - UNIVERSAL MAP)
 * CLASIFICACIÓN: DOMAIN H2C (ESTRATO L3)
 * RESPONSABILIDAD: MAPA SHALLUE - VAN DE WOESTIJNE A LA CURVA
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. UNIVERSAL: El mapa SVDW cubre toda curva Weierstrass del
 *    catálogo (a = 0 incluido), a diferencia del SWU simple que exige
 *    a b != 0.
 * 2. EXCEPTION FREE: Las tres abscisas candidatas x1, x2, x3
 *    garantizan al menos un residuo cuadrático; la selección es por
 *    copias enmascaradas y el signo de y sigue a sgn0(u).
 *
 * # Mathematical Proof (Candidate Selection):
 * Con tv1 = u^2 c1, x1 = c2 - c3 u tv1 / (tv1 (1 - tv1)) ... el
 * producto g(x1) g(x2) g(x3) es un cuadrado, de modo que al menos una
 * de las tres evaluaciones admite raíz (lema de SvdW).
 * =================================================================
 */

use obsidian_core_curve::prelude::{AffinePoint, CurveFieldElement, CurveParameters};

/// Catálogo de constantes SVDW de una curva (c1 = g(Z), c2 = -Z/2,
/// c3 = sqrt(-g(Z) (3 Z^2)), c4 = -4 g(Z) / (3 Z^2), con a = 0).
pub trait SvdwParameters: CurveParameters {
    /// Constante Z del mapa.
    const SVDW_Z: Self::Field;
    /// g(Z).
    const SVDW_C1: Self::Field;
    /// -Z / 2.
    const SVDW_C2: Self::Field;
    /// sqrt(-g(Z) (3 Z^2)), con sgn0 = 0.
    const SVDW_C3: Self::Field;
    /// -4 g(Z) / (3 Z^2).
    const SVDW_C4: Self::Field;
}

/// Evaluación g(x) = x^3 + b para las curvas a = 0 del catálogo.
#[inline]
fn curve_polynomial<C: SvdwParameters>(x: &C::Field) -> C::Field {
    x.square_modular().multiply_modular(x).add_modular(&C::COEFF_B)
}

/// Residuo cuadrático: la raíz con bandera decide sin alterar al
/// operando original.
#[inline]
fn is_square<C: SvdwParameters>(value: &C::Field) -> obsidian_core_math::prelude::SecretBool {
    let mut probe = *value;
    probe.sqrt_if_square()
}

/**
 * Mapa SVDW de un elemento de campo a un punto afín de la curva.
 *
 * Determinista; el punto resultante aún requiere limpieza de cofactor
 * para aterrizar en el subgrupo primo.
 */
#[must_use]
pub fn map_to_curve_svdw<C: SvdwParameters>(u: &C::Field) -> AffinePoint<C> {
    let one = C::Field::field_one();
    let tv1 = u.square_modular().multiply_modular(&C::SVDW_C1);
    let tv2 = one.add_modular(&tv1);
    let tv1 = one.subtract_modular(&tv1);
    let tv3 = tv1.multiply_modular(&tv2).invert();
    let tv4 = u
        .multiply_modular(&tv1)
        .multiply_modular(&tv3)
        .multiply_modular(&C::SVDW_C3);

    let x1 = C::SVDW_C2.subtract_modular(&tv4);
    let x2 = C::SVDW_C2.add_modular(&tv4);
    let x3 = tv2
        .square_modular()
        .multiply_modular(&tv3)
        .square_modular()
        .multiply_modular(&C::SVDW_C4)
        .add_modular(&C::SVDW_Z);

    let g1_is_square = is_square::<C>(&curve_polynomial::<C>(&x1));
    let g2_is_square = is_square::<C>(&curve_polynomial::<C>(&x2)).and(g1_is_square.not());

    let mut x = x3;
    x.conditional_copy(&x2, g2_is_square);
    x.conditional_copy(&x1, g1_is_square);

    let mut y = curve_polynomial::<C>(&x);
    let has_root = y.sqrt_if_square();
    debug_assert!(has_root.to_bool_vartime(), "SvdW garantiza un candidato cuadrático");

    // sgn0(y) debe seguir a sgn0(u).
    let flip = u.sign_bit().xor(y.sign_bit());
    y.conditional_negate(flip);
    AffinePoint::from_coordinates(x, y)
}
