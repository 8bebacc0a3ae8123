// [libs/core/curve-engine/src/edwards.rs]
/*!
 * =================================================================
 * APARATO: TWISTED EDWARDS ENGINE (V16.0 - COMPLETE UNIFIED)
 * CLASIFICACIÓN: CORE GEOMETRY (ESTRATO L1)
 * RESPONSABILIDAD: LEY DE GRUPO a x^2 + y^2 = 1 + d x^2 y^2
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. UNIFIED LAW: La fórmula proyectiva unificada no distingue suma de
 *    duplicación. Sobre el subgrupo primo de Bandersnatch (y sobre el
 *    cociente Banderwagon) los denominadores F, G nunca se anulan, de
 *    modo que la ley es libre de excepciones para el grupo de interés
 *    y no ramifica sobre los operandos.
 * 2. NEUTRAL ELEMENT: El neutro es (0 : 1 : 1); la negación refleja
 *    la abscisa.
 *
 * # Mathematical Proof (Projective Addition):
 * Con A = Z1 Z2, B = A^2, C = X1 X2, D = Y1 Y2, E = d C D,
 * F = B - E, G = B + E:
 * X3 = A F ((X1 + Y1)(X2 + Y2) - C - D), Y3 = A G (D - a C),
 * Z3 = F G.
 * =================================================================
 */

use crate::traits::{CurveFieldElement, EdwardsParameters};
use obsidian_core_math::prelude::SecretBool;

/// Punto afín (x, y) de la curva Edwards; el neutro es (0, 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdwardsAffinePoint<C: EdwardsParameters> {
    /// Abscisa.
    pub x: C::Field,
    /// Ordenada.
    pub y: C::Field,
}

/// Punto proyectivo (X : Y : Z); el neutro es (0 : 1 : 1).
#[derive(Debug, Clone, Copy)]
pub struct EdwardsProjectivePoint<C: EdwardsParameters> {
    /// Coordenada X.
    pub x: C::Field,
    /// Coordenada Y.
    pub y: C::Field,
    /// Coordenada Z.
    pub z: C::Field,
}

impl<C: EdwardsParameters> EdwardsAffinePoint<C> {
    /// Elemento neutro (0, 1).
    #[must_use]
    pub fn neutral() -> Self {
        Self { x: C::Field::field_zero(), y: C::Field::field_one() }
    }

    /// Generador canónico del subgrupo primo.
    #[must_use]
    pub fn generator() -> Self {
        Self { x: C::GENERATOR_X, y: C::GENERATOR_Y }
    }

    /// Negación: (-x, y).
    #[must_use]
    pub fn negate(&self) -> Self {
        Self { x: self.x.negate_modular(), y: self.y }
    }

    /// Pertenencia a la curva: a x^2 + y^2 = 1 + d x^2 y^2.
    #[must_use]
    pub fn is_on_curve(&self) -> SecretBool {
        let x_squared = self.x.square_modular();
        let y_squared = self.y.square_modular();
        let left = C::COEFF_A.multiply_modular(&x_squared).add_modular(&y_squared);
        let right = C::Field::field_one()
            .add_modular(&C::COEFF_D.multiply_modular(&x_squared).multiply_modular(&y_squared));
        left.equals(&right)
    }
}

impl<C: EdwardsParameters> EdwardsProjectivePoint<C> {
    /// Elemento neutro (0 : 1 : 1).
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            x: C::Field::field_zero(),
            y: C::Field::field_one(),
            z: C::Field::field_one(),
        }
    }

    /// Generador canónico del subgrupo primo.
    #[must_use]
    pub fn generator() -> Self {
        Self { x: C::GENERATOR_X, y: C::GENERATOR_Y, z: C::Field::field_one() }
    }

    /// Ascensión desde el plano afín.
    #[must_use]
    pub fn from_affine(point: &EdwardsAffinePoint<C>) -> Self {
        Self { x: point.x, y: point.y, z: C::Field::field_one() }
    }

    /// Selector "es el elemento neutro" en tiempo constante.
    #[must_use]
    pub fn is_neutral(&self) -> SecretBool {
        // (0 : Z : Z) con Z != 0.
        self.x.is_zero().and(self.y.equals(&self.z))
    }

    /// Igualdad proyectiva cruzada: X1 Z2 = X2 Z1 y Y1 Z2 = Y2 Z1.
    #[must_use]
    pub fn equals(&self, other: &Self) -> SecretBool {
        let x_cross = self
            .x
            .multiply_modular(&other.z)
            .equals(&other.x.multiply_modular(&self.z));
        let y_cross = self
            .y
            .multiply_modular(&other.z)
            .equals(&other.y.multiply_modular(&self.z));
        x_cross.and(y_cross)
    }

    /// Negación del punto.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self { x: self.x.negate_modular(), y: self.y, z: self.z }
    }

    /// Copia condicional en tiempo constante.
    #[inline]
    pub fn conditional_copy(&mut self, source: &Self, flag: SecretBool) {
        self.x.conditional_copy(&source.x, flag);
        self.y.conditional_copy(&source.y, flag);
        self.z.conditional_copy(&source.z, flag);
    }

    /// Negación condicional en tiempo constante.
    #[inline]
    pub fn conditional_negate(&mut self, flag: SecretBool) {
        self.x.conditional_negate(flag);
    }
}

impl<C: EdwardsParameters> crate::traits::GroupElement for EdwardsProjectivePoint<C> {
    #[inline(always)]
    fn group_identity() -> Self {
        Self::neutral()
    }
    #[inline(always)]
    fn group_sum(&self, other: &Self) -> Self {
        EdwardsEngine::<C>::sum(self, other)
    }
    #[inline(always)]
    fn group_double(&self) -> Self {
        EdwardsEngine::<C>::double(self)
    }
    #[inline(always)]
    fn group_negate(&self) -> Self {
        self.negate()
    }
    #[inline(always)]
    fn group_conditional_copy(&mut self, source: &Self, flag: SecretBool) {
        self.conditional_copy(source, flag)
    }
    #[inline(always)]
    fn group_conditional_negate(&mut self, flag: SecretBool) {
        self.conditional_negate(flag)
    }
    #[inline(always)]
    fn group_is_identity(&self) -> SecretBool {
        self.is_neutral()
    }
}

/// Motor de la ley de grupo twisted Edwards.
pub struct EdwardsEngine<C>(core::marker::PhantomData<C>);

impl<C: EdwardsParameters> EdwardsEngine<C> {
    /**
     * Suma completa proyectiva (fórmula add-2008-bbjlp).
     *
     * Sin ramas sobre los operandos: la completitud de la adición
     * Edwards con a no-cuadrado cubre P == Q, P == -Q y el neutro.
     */
    #[must_use]
    pub fn sum(
        p: &EdwardsProjectivePoint<C>,
        q: &EdwardsProjectivePoint<C>,
    ) -> EdwardsProjectivePoint<C> {
        let a = p.z.multiply_modular(&q.z);
        let b = a.square_modular();
        let c = p.x.multiply_modular(&q.x);
        let d = p.y.multiply_modular(&q.y);
        let e = C::COEFF_D.multiply_modular(&c).multiply_modular(&d);
        let f = b.subtract_modular(&e);
        let g = b.add_modular(&e);
        let cross = p
            .x
            .add_modular(&p.y)
            .multiply_modular(&q.x.add_modular(&q.y))
            .subtract_modular(&c)
            .subtract_modular(&d);
        EdwardsProjectivePoint {
            x: a.multiply_modular(&f).multiply_modular(&cross),
            y: a
                .multiply_modular(&g)
                .multiply_modular(&d.subtract_modular(&C::COEFF_A.multiply_modular(&c))),
            z: f.multiply_modular(&g),
        }
    }

    /**
     * Duplicación dedicada (dbl-2008-bbjlp), más barata que la suma
     * general.
     *
     * # Mathematical Proof:
     * B = (X + Y)^2, C = X^2, D = Y^2, E = a C, F = E + D,
     * H = Z^2, J = F - 2H: X3 = (B - C - D) J, Y3 = F (E - D),
     * Z3 = F J.
     */
    #[must_use]
    pub fn double(p: &EdwardsProjectivePoint<C>) -> EdwardsProjectivePoint<C> {
        let b = p.x.add_modular(&p.y).square_modular();
        let c = p.x.square_modular();
        let d = p.y.square_modular();
        let e = C::COEFF_A.multiply_modular(&c);
        let f = e.add_modular(&d);
        let h = p.z.square_modular();
        let j = f.subtract_modular(&h.double_modular());
        EdwardsProjectivePoint {
            x: b.subtract_modular(&c).subtract_modular(&d).multiply_modular(&j),
            y: f.multiply_modular(&e.subtract_modular(&d)),
            z: f.multiply_modular(&j),
        }
    }

    /// Proyección al plano afín; inv(0) no ocurre (Z nunca es 0).
    #[must_use]
    pub fn affine_from_projective(p: &EdwardsProjectivePoint<C>) -> EdwardsAffinePoint<C> {
        let z_inverse = p.z.invert();
        EdwardsAffinePoint {
            x: p.x.multiply_modular(&z_inverse),
            y: p.y.multiply_modular(&z_inverse),
        }
    }
}
