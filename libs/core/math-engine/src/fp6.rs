// [libs/core/math-engine/src/fp6.rs]
/*!
 * =================================================================
 * APARATO: CUBIC EXTENSION ENGINE (V19.0 - MIDDLE TOWER)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: ARITMÉTICA Fp6 = Fp2[v] / (v^3 - xi)
 *
 * # Mathematical Proof (Interpolación de Karatsuba):
 * Con v0 = a0 b0, v1 = a1 b1, v2 = a2 b2:
 * c0 = v0 + xi ((a1 + a2)(b1 + b2) - v1 - v2)
 * c1 = (a0 + a1)(b0 + b1) - v0 - v1 + xi v2
 * c2 = (a0 + a2)(b0 + b2) - v0 - v2 + v1
 * reduce las nueve multiplicaciones escolares a seis.
 * =================================================================
 */

use crate::arithmetic::SecretBool;
use crate::fp2::{Fp2, TowerParameters};

/// Elemento c0 + c1 v + c2 v^2 de la extensión cúbica sobre Fp2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fp6<P, const N: usize> {
    /// Coordenada de grado cero.
    pub c0: Fp2<P, N>,
    /// Coordenada de grado uno.
    pub c1: Fp2<P, N>,
    /// Coordenada de grado dos.
    pub c2: Fp2<P, N>,
}

impl<P: TowerParameters<N>, const N: usize> Default for Fp6<P, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<P: TowerParameters<N>, const N: usize> Fp6<P, N> {
    /// Construye el elemento desde sus coordenadas.
    #[inline(always)]
    #[must_use]
    pub const fn from_coordinates(c0: Fp2<P, N>, c1: Fp2<P, N>, c2: Fp2<P, N>) -> Self {
        Self { c0, c1, c2 }
    }

    /// Cero de la extensión.
    #[inline(always)]
    #[must_use]
    pub const fn zero() -> Self {
        Self { c0: Fp2::zero(), c1: Fp2::zero(), c2: Fp2::zero() }
    }

    /// Uno de la extensión.
    #[inline(always)]
    #[must_use]
    pub const fn one() -> Self {
        Self { c0: Fp2::one(), c1: Fp2::zero(), c2: Fp2::zero() }
    }

    /// Selector "el elemento es cero", en tiempo constante.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> SecretBool {
        self.c0.is_zero().and(self.c1.is_zero()).and(self.c2.is_zero())
    }

    /// Igualdad bit a bit en tiempo constante.
    #[inline]
    #[must_use]
    pub fn equals(&self, other: &Self) -> SecretBool {
        self.c0
            .equals(&other.c0)
            .and(self.c1.equals(&other.c1))
            .and(self.c2.equals(&other.c2))
    }

    /// Adición coordenada a coordenada.
    #[inline]
    #[must_use]
    pub fn add_modular(&self, other: &Self) -> Self {
        Self {
            c0: self.c0.add_modular(&other.c0),
            c1: self.c1.add_modular(&other.c1),
            c2: self.c2.add_modular(&other.c2),
        }
    }

    /// Sustracción coordenada a coordenada.
    #[inline]
    #[must_use]
    pub fn subtract_modular(&self, other: &Self) -> Self {
        Self {
            c0: self.c0.subtract_modular(&other.c0),
            c1: self.c1.subtract_modular(&other.c1),
            c2: self.c2.subtract_modular(&other.c2),
        }
    }

    /// Negación.
    #[inline]
    #[must_use]
    pub fn negate_modular(&self) -> Self {
        Self {
            c0: self.c0.negate_modular(),
            c1: self.c1.negate_modular(),
            c2: self.c2.negate_modular(),
        }
    }

    /// Producto por interpolación de Karatsuba (seis productos Fp2).
    #[must_use]
    pub fn multiply_modular(&self, other: &Self) -> Self {
        let v0 = self.c0.multiply_modular(&other.c0);
        let v1 = self.c1.multiply_modular(&other.c1);
        let v2 = self.c2.multiply_modular(&other.c2);
        let middle = self
            .c1
            .add_modular(&self.c2)
            .multiply_modular(&other.c1.add_modular(&other.c2))
            .subtract_modular(&v1)
            .subtract_modular(&v2);
        let low = self
            .c0
            .add_modular(&self.c1)
            .multiply_modular(&other.c0.add_modular(&other.c1))
            .subtract_modular(&v0)
            .subtract_modular(&v1);
        let high = self
            .c0
            .add_modular(&self.c2)
            .multiply_modular(&other.c0.add_modular(&other.c2))
            .subtract_modular(&v0)
            .subtract_modular(&v2);
        Self {
            c0: v0.add_modular(&middle.multiply_by_xi()),
            c1: low.add_modular(&v2.multiply_by_xi()),
            c2: high.add_modular(&v1),
        }
    }

    /**
     * Cuadrado CH-SQR2 (Chung-Hasan) en cinco productos Fp2.
     *
     * # Mathematical Proof:
     * s0 = a0^2, s1 = 2 a0 a1, s2 = (a0 - a1 + a2)^2, s3 = 2 a1 a2,
     * s4 = a2^2 y entonces c0 = s0 + xi s3, c1 = s1 + xi s4,
     * c2 = s1 + s2 + s3 - s0 - s4.
     */
    #[must_use]
    pub fn square_modular(&self) -> Self {
        let s0 = self.c0.square_modular();
        let s1 = self.c0.multiply_modular(&self.c1).double_modular();
        let s2 = self
            .c0
            .subtract_modular(&self.c1)
            .add_modular(&self.c2)
            .square_modular();
        let s3 = self.c1.multiply_modular(&self.c2).double_modular();
        let s4 = self.c2.square_modular();
        Self {
            c0: s0.add_modular(&s3.multiply_by_xi()),
            c1: s1.add_modular(&s4.multiply_by_xi()),
            c2: s1.add_modular(&s2).add_modular(&s3).subtract_modular(&s0).subtract_modular(&s4),
        }
    }

    /**
     * Producto por v: (c0 + c1 v + c2 v^2) v = xi c2 + c0 v + c1 v^2.
     */
    #[inline]
    #[must_use]
    pub fn multiply_by_v(&self) -> Self {
        Self { c0: self.c2.multiply_by_xi(), c1: self.c0, c2: self.c1 }
    }

    /// Producto por un escalar Fp2.
    #[inline]
    #[must_use]
    pub fn multiply_by_fp2(&self, scalar: &Fp2<P, N>) -> Self {
        Self {
            c0: self.c0.multiply_modular(scalar),
            c1: self.c1.multiply_modular(scalar),
            c2: self.c2.multiply_modular(scalar),
        }
    }

    /**
     * Producto disperso por b0 + b1 v (coordenada v^2 nula), en cinco
     * productos Fp2. Alimenta la acumulación de líneas del pairing.
     */
    #[must_use]
    pub fn multiply_by_sparse_01(&self, b0: &Fp2<P, N>, b1: &Fp2<P, N>) -> Self {
        let v0 = self.c0.multiply_modular(b0);
        let v1 = self.c1.multiply_modular(b1);
        let cross = self
            .c0
            .add_modular(&self.c1)
            .multiply_modular(&b0.add_modular(b1))
            .subtract_modular(&v0)
            .subtract_modular(&v1);
        Self {
            c0: v0.add_modular(&self.c2.multiply_modular(b1).multiply_by_xi()),
            c1: cross,
            c2: self.c2.multiply_modular(b0).add_modular(&v1),
        }
    }

    /// Producto disperso por b1 v (tres productos Fp2).
    #[must_use]
    pub fn multiply_by_sparse_1(&self, b1: &Fp2<P, N>) -> Self {
        Self {
            c0: self.c2.multiply_modular(b1).multiply_by_xi(),
            c1: self.c0.multiply_modular(b1),
            c2: self.c1.multiply_modular(b1),
        }
    }

    /**
     * Inverso multiplicativo; cero produce cero.
     *
     * # Mathematical Proof:
     * Con A = a0^2 - xi a1 a2, B = xi a2^2 - a0 a1, C = a1^2 - a0 a2,
     * el determinante es t = a0 A + xi (a2 B + a1 C) y el inverso es
     * (A, B, C) / t.
     */
    #[must_use]
    pub fn invert(&self) -> Self {
        let a = self
            .c0
            .square_modular()
            .subtract_modular(&self.c1.multiply_modular(&self.c2).multiply_by_xi());
        let b = self
            .c2
            .square_modular()
            .multiply_by_xi()
            .subtract_modular(&self.c0.multiply_modular(&self.c1));
        let c = self
            .c1
            .square_modular()
            .subtract_modular(&self.c0.multiply_modular(&self.c2));
        let determinant = self
            .c2
            .multiply_modular(&b)
            .add_modular(&self.c1.multiply_modular(&c))
            .multiply_by_xi()
            .add_modular(&self.c0.multiply_modular(&a));
        let determinant_inverse = determinant.invert();
        Self {
            c0: a.multiply_modular(&determinant_inverse),
            c1: b.multiply_modular(&determinant_inverse),
            c2: c.multiply_modular(&determinant_inverse),
        }
    }

    /// Copia condicional en tiempo constante.
    #[inline]
    pub fn conditional_copy(&mut self, source: &Self, flag: SecretBool) {
        self.c0.conditional_copy(&source.c0, flag);
        self.c1.conditional_copy(&source.c1, flag);
        self.c2.conditional_copy(&source.c2, flag);
    }
}
