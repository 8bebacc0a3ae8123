// [libs/core/curve-engine/src/weierstrass.rs]
/*!
 * =================================================================
 * APARATO: COMPLETE WEIERSTRASS ENGINE (V38.0 - EXCEPTION FREE)
 * CLASIFICACIÓN: CORE GEOMETRY (ESTRATO L1)
 * RESPONSABILIDAD: LEY DE GRUPO PROYECTIVA COMPLETA PARA a = 0
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. COMPLETE LAW: Fórmulas de Renes-Costello-Batina sin excepciones:
 *    ninguna rama sobre P == Q, P == -Q ni sobre el infinito. Son el
 *    sustrato de toda multiplicación escalar de tiempo constante.
 * 2. DUAL COORDINATES: El plano afín transporta su indicador de
 *    infinito; el espacio proyectivo lo codifica como Z = 0.
 * 3. MONOMORPHIC: Un único motor sirve a G1 (campo base Fp) y a los
 *    twists G2 (campo base Fp2) vía el contrato de campo.
 *
 * # Mathematical Proof (Completeness):
 * Para curvas y^2 Z = X^3 + b Z^3 de orden impar sin puntos de 2 ni
 * 3-torsión racional excepcional, las fórmulas RCB (algoritmos 7 a 9
 * con a = 0) computan la suma de grupo para todo par de entradas,
 * incluida la identidad (0 : 1 : 0).
 * =================================================================
 */

use crate::traits::{CurveFieldElement, CurveParameters};
use obsidian_core_math::prelude::SecretBool;

/// Punto afín (x, y) con indicador explícito de infinito.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffinePoint<C: CurveParameters> {
    /// Abscisa.
    pub x: C::Field,
    /// Ordenada.
    pub y: C::Field,
    /// Indicador del elemento neutro.
    pub is_infinity: SecretBool,
}

/// Punto proyectivo (X : Y : Z) con infinito en Z = 0.
#[derive(Debug, Clone, Copy)]
pub struct ProjectivePoint<C: CurveParameters> {
    /// Coordenada X.
    pub x: C::Field,
    /// Coordenada Y.
    pub y: C::Field,
    /// Coordenada Z (denominador compartido).
    pub z: C::Field,
}

impl<C: CurveParameters> AffinePoint<C> {
    /// Elemento neutro en el plano afín.
    #[must_use]
    pub fn infinity() -> Self {
        Self {
            x: C::Field::field_zero(),
            y: C::Field::field_zero(),
            is_infinity: SecretBool::TRUE,
        }
    }

    /// Construye un punto finito desde sus coordenadas.
    #[must_use]
    pub fn from_coordinates(x: C::Field, y: C::Field) -> Self {
        Self { x, y, is_infinity: SecretBool::FALSE }
    }

    /// Generador canónico del subgrupo primo.
    #[must_use]
    pub fn generator() -> Self {
        Self::from_coordinates(C::GENERATOR_X, C::GENERATOR_Y)
    }

    /// Negación del punto (reflexión sobre el eje x).
    #[must_use]
    pub fn negate(&self) -> Self {
        Self { x: self.x, y: self.y.negate_modular(), is_infinity: self.is_infinity }
    }

    /// Igualdad de grupo en tiempo constante.
    #[must_use]
    pub fn equals(&self, other: &Self) -> SecretBool {
        let both_infinity = self.is_infinity.and(other.is_infinity);
        let finite_equal = self
            .x
            .equals(&other.x)
            .and(self.y.equals(&other.y))
            .and(self.is_infinity.not())
            .and(other.is_infinity.not());
        both_infinity.or(finite_equal)
    }

    /**
     * Pertenencia a la curva: y^2 = x^3 + b, con el infinito admitido
     * por convención.
     */
    #[must_use]
    pub fn is_on_curve(&self) -> SecretBool {
        let left = self.y.square_modular();
        let right = self.x.square_modular().multiply_modular(&self.x).add_modular(&C::COEFF_B);
        left.equals(&right).or(self.is_infinity)
    }
}

impl<C: CurveParameters> ProjectivePoint<C> {
    /// Elemento neutro (0 : 1 : 0).
    #[must_use]
    pub fn identity() -> Self {
        Self {
            x: C::Field::field_zero(),
            y: C::Field::field_one(),
            z: C::Field::field_zero(),
        }
    }

    /// Generador canónico del subgrupo primo.
    #[must_use]
    pub fn generator() -> Self {
        Self { x: C::GENERATOR_X, y: C::GENERATOR_Y, z: C::Field::field_one() }
    }

    /// Selector "es el elemento neutro" (Z = 0), en tiempo constante.
    #[inline]
    #[must_use]
    pub fn is_identity(&self) -> SecretBool {
        self.z.is_zero()
    }

    /**
     * Igualdad proyectiva: X Z' = X' Z y Y Z' = Y' Z.
     *
     * La forma cruzada decide también los casos con infinito sin rama
     * alguna: ambas igualdades solo se satisfacen simultáneamente para
     * representantes de la misma clase.
     */
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
        let both_identity = self.is_identity().and(other.is_identity());
        x_cross.and(y_cross).and(self.is_identity().xor(other.is_identity()).not()).or(both_identity)
    }

    /// Negación del punto.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self { x: self.x, y: self.y.negate_modular(), z: self.z }
    }

    /// Negación condicional en tiempo constante.
    #[inline]
    pub fn conditional_negate(&mut self, flag: SecretBool) {
        self.y.conditional_negate(flag);
    }

    /// Copia condicional en tiempo constante.
    #[inline]
    pub fn conditional_copy(&mut self, source: &Self, flag: SecretBool) {
        self.x.conditional_copy(&source.x, flag);
        self.y.conditional_copy(&source.y, flag);
        self.z.conditional_copy(&source.z, flag);
    }
}

impl<C: CurveParameters> crate::traits::GroupElement for ProjectivePoint<C> {
    #[inline(always)]
    fn group_identity() -> Self {
        Self::identity()
    }
    #[inline(always)]
    fn group_sum(&self, other: &Self) -> Self {
        WeierstrassEngine::<C>::sum(self, other)
    }
    #[inline(always)]
    fn group_double(&self) -> Self {
        WeierstrassEngine::<C>::double(self)
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
        self.is_identity()
    }
}

/// Motor unificado de la ley de grupo completa (a = 0).
pub struct WeierstrassEngine<C>(core::marker::PhantomData<C>);

impl<C: CurveParameters> WeierstrassEngine<C> {
    /**
     * Suma completa P + Q (algoritmo 7 de Renes-Costello-Batina).
     *
     * Sin ramas: cubre P == Q, P == -Q y cualquier operando en el
     * infinito con la misma secuencia de operaciones de campo.
     */
    #[must_use]
    pub fn sum(p: &ProjectivePoint<C>, q: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        let t0 = p.x.multiply_modular(&q.x);
        let t1 = p.y.multiply_modular(&q.y);
        let t2 = p.z.multiply_modular(&q.z);
        let mut t3 = p.x.add_modular(&p.y).multiply_modular(&q.x.add_modular(&q.y));
        let t4 = t0.add_modular(&t1);
        t3 = t3.subtract_modular(&t4);
        let mut t4 = p.y.add_modular(&p.z).multiply_modular(&q.y.add_modular(&q.z));
        let mut x3 = t1.add_modular(&t2);
        t4 = t4.subtract_modular(&x3);
        x3 = p.x.add_modular(&p.z).multiply_modular(&q.x.add_modular(&q.z));
        let mut y3 = t0.add_modular(&t2);
        y3 = x3.subtract_modular(&y3);
        x3 = t0.add_modular(&t0);
        let t0 = x3.add_modular(&t0);
        let t2 = C::COEFF_B3.multiply_modular(&t2);
        let mut z3 = t1.add_modular(&t2);
        let t1 = t1.subtract_modular(&t2);
        y3 = C::COEFF_B3.multiply_modular(&y3);
        x3 = t4.multiply_modular(&y3);
        let t2 = t3.multiply_modular(&t1);
        x3 = t2.subtract_modular(&x3);
        y3 = y3.multiply_modular(&t0);
        let t1 = t1.multiply_modular(&z3);
        y3 = t1.add_modular(&y3);
        let t0 = t0.multiply_modular(&t3);
        z3 = z3.multiply_modular(&t4);
        z3 = z3.add_modular(&t0);
        ProjectivePoint { x: x3, y: y3, z: z3 }
    }

    /**
     * Suma mixta P + Q con Q afín (algoritmo 8).
     *
     * Ahorra una multiplicación de campo por paso frente a la suma
     * general; el infinito afín de Q se resuelve con una selección
     * enmascarada final.
     */
    #[must_use]
    pub fn mixed_sum(p: &ProjectivePoint<C>, q: &AffinePoint<C>) -> ProjectivePoint<C> {
        let t0 = p.x.multiply_modular(&q.x);
        let t1 = p.y.multiply_modular(&q.y);
        let mut t3 = q.x.add_modular(&q.y);
        let t4 = p.x.add_modular(&p.y);
        t3 = t3.multiply_modular(&t4);
        let t4 = t0.add_modular(&t1);
        t3 = t3.subtract_modular(&t4);
        let mut t4 = q.y.multiply_modular(&p.z);
        t4 = t4.add_modular(&p.y);
        let mut y3 = q.x.multiply_modular(&p.z);
        y3 = y3.add_modular(&p.x);
        let mut x3 = t0.add_modular(&t0);
        let t0 = x3.add_modular(&t0);
        let t2 = C::COEFF_B3.multiply_modular(&p.z);
        let mut z3 = t1.add_modular(&t2);
        let t1 = t1.subtract_modular(&t2);
        y3 = C::COEFF_B3.multiply_modular(&y3);
        x3 = t4.multiply_modular(&y3);
        let t2 = t3.multiply_modular(&t1);
        x3 = t2.subtract_modular(&x3);
        y3 = y3.multiply_modular(&t0);
        let t1 = t1.multiply_modular(&z3);
        y3 = t1.add_modular(&y3);
        let t0 = t0.multiply_modular(&t3);
        z3 = z3.multiply_modular(&t4);
        z3 = z3.add_modular(&t0);
        let mut result = ProjectivePoint { x: x3, y: y3, z: z3 };
        result.conditional_copy(p, q.is_infinity);
        result
    }

    /**
     * Duplicación completa 2 P (algoritmo 9).
     */
    #[must_use]
    pub fn double(p: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        let t0 = p.y.square_modular();
        let mut z3 = t0.add_modular(&t0);
        z3 = z3.add_modular(&z3);
        z3 = z3.add_modular(&z3);
        let t1 = p.y.multiply_modular(&p.z);
        let mut t2 = p.z.square_modular();
        t2 = C::COEFF_B3.multiply_modular(&t2);
        let mut x3 = t2.multiply_modular(&z3);
        let mut y3 = t0.add_modular(&t2);
        z3 = t1.multiply_modular(&z3);
        let t1 = t2.add_modular(&t2);
        let t2 = t1.add_modular(&t2);
        let t0 = t0.subtract_modular(&t2);
        y3 = t0.multiply_modular(&y3);
        y3 = x3.add_modular(&y3);
        let t1 = p.x.multiply_modular(&p.y);
        x3 = t0.multiply_modular(&t1);
        x3 = x3.add_modular(&x3);
        ProjectivePoint { x: x3, y: y3, z: z3 }
    }

    /**
     * Proyección al plano afín.
     *
     * # Mathematical Proof:
     * inv(0) = 0 garantiza que el elemento neutro (Z = 0) proyecta a
     * las coordenadas nulas con el indicador de infinito activo, sin
     * rama alguna.
     */
    #[must_use]
    pub fn affine_from_projective(p: &ProjectivePoint<C>) -> AffinePoint<C> {
        let z_inverse = p.z.invert();
        AffinePoint {
            x: p.x.multiply_modular(&z_inverse),
            y: p.y.multiply_modular(&z_inverse),
            is_infinity: p.z.is_zero(),
        }
    }

    /// Ascensión del plano afín al espacio proyectivo.
    #[must_use]
    pub fn projective_from_affine(a: &AffinePoint<C>) -> ProjectivePoint<C> {
        let mut result = ProjectivePoint { x: a.x, y: a.y, z: C::Field::field_one() };
        result.conditional_copy(&ProjectivePoint::identity(), a.is_infinity);
        result
    }
}
