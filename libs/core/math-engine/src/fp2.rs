// [libs/core/math-engine/src/fp2.rs]
/*!
 * =================================================================
 * APARATO: QUADRATIC EXTENSION ENGINE (V27.0 - TOWER BASE)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: ARITMÉTICA Fp2 = Fp[u] / (u^2 - beta)
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. GENERIC RESIDUE: El no-residuo cuadrático beta viaja en el
 *    catálogo de parámetros; las fórmulas de Karatsuba lo consumen sin
 *    asumir beta = -1.
 * 2. FROBENIUS TABULADO: a -> a^(p^k) se resuelve con conjugación y
 *    tablas precomputadas del estrato superior.
 * 3. OWNERSHIP: Las coordenadas c0, c1 son propiedad exclusiva del
 *    elemento; el grafo de torres es un árbol.
 *
 * # Mathematical Proof (Karatsuba):
 * (a0 + a1 u)(b0 + b1 u) = (a0 b0 + beta a1 b1)
 *                        + ((a0 + a1)(b0 + b1) - a0 b0 - a1 b1) u
 * reduce las cuatro multiplicaciones escolares a tres.
 * =================================================================
 */

use crate::arithmetic::SecretBool;
use crate::field::{FieldElement, FieldParameters};

/**
 * Catálogo de constantes de una torre de extensión completa
 * (Fp2 / Fp6 / Fp12) sobre el primo base.
 *
 * Todas las constantes residen en forma Montgomery.
 */
pub trait TowerParameters<const N: usize>: FieldParameters<N> {
    /// No-residuo cuadrático beta de Fp con u^2 = beta.
    const FP2_NON_RESIDUE: FieldElement<Self, N>;
    /// No-residuo cúbico/séxtico xi de Fp2 con v^3 = xi y w^2 = v.
    const XI: Fp2<Self, N>;
    /// Tablas de Frobenius: FROBENIUS[k - 1][i] = xi^(i (p^k - 1) / 6)
    /// para k en {1, 2, 3} e i en {0, .., 5}.
    const FROBENIUS: [[Fp2<Self, N>; 6]; 3];
}

/// Elemento c0 + c1 u de la extensión cuadrática Fp2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fp2<P, const N: usize> {
    /// Coordenada de grado cero.
    pub c0: FieldElement<P, N>,
    /// Coordenada de grado uno.
    pub c1: FieldElement<P, N>,
}

impl<P: TowerParameters<N>, const N: usize> Default for Fp2<P, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<P: TowerParameters<N>, const N: usize> Fp2<P, N> {
    /// Construye el elemento desde sus coordenadas.
    #[inline(always)]
    #[must_use]
    pub const fn from_coordinates(c0: FieldElement<P, N>, c1: FieldElement<P, N>) -> Self {
        Self { c0, c1 }
    }

    /// Cero de la extensión.
    #[inline(always)]
    #[must_use]
    pub const fn zero() -> Self {
        Self { c0: FieldElement::zero(), c1: FieldElement::zero() }
    }

    /// Uno de la extensión.
    #[inline(always)]
    #[must_use]
    pub const fn one() -> Self {
        Self { c0: FieldElement::one(), c1: FieldElement::zero() }
    }

    /// Incrusta un elemento del campo base.
    #[inline(always)]
    #[must_use]
    pub const fn from_base(value: FieldElement<P, N>) -> Self {
        Self { c0: value, c1: FieldElement::zero() }
    }

    /// Selector "el elemento es cero", en tiempo constante.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> SecretBool {
        self.c0.is_zero().and(self.c1.is_zero())
    }

    /// Igualdad bit a bit en tiempo constante.
    #[inline]
    #[must_use]
    pub fn equals(&self, other: &Self) -> SecretBool {
        self.c0.equals(&other.c0).and(self.c1.equals(&other.c1))
    }

    /// Adición coordenada a coordenada.
    #[inline]
    #[must_use]
    pub fn add_modular(&self, other: &Self) -> Self {
        Self {
            c0: self.c0.add_modular(&other.c0),
            c1: self.c1.add_modular(&other.c1),
        }
    }

    /// Sustracción coordenada a coordenada.
    #[inline]
    #[must_use]
    pub fn subtract_modular(&self, other: &Self) -> Self {
        Self {
            c0: self.c0.subtract_modular(&other.c0),
            c1: self.c1.subtract_modular(&other.c1),
        }
    }

    /// Duplicación.
    #[inline]
    #[must_use]
    pub fn double_modular(&self) -> Self {
        Self { c0: self.c0.double_modular(), c1: self.c1.double_modular() }
    }

    /// Negación.
    #[inline]
    #[must_use]
    pub fn negate_modular(&self) -> Self {
        Self { c0: self.c0.negate_modular(), c1: self.c1.negate_modular() }
    }

    /// Conjugación: c0 - c1 u.
    #[inline]
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self { c0: self.c0, c1: self.c1.negate_modular() }
    }

    /// Producto Karatsuba de tres multiplicaciones base.
    #[must_use]
    pub fn multiply_modular(&self, other: &Self) -> Self {
        let v0 = self.c0.multiply_modular(&other.c0);
        let v1 = self.c1.multiply_modular(&other.c1);
        let cross = self
            .c0
            .add_modular(&self.c1)
            .multiply_modular(&other.c0.add_modular(&other.c1));
        Self {
            c0: v0.add_modular(&P::FP2_NON_RESIDUE.multiply_modular(&v1)),
            c1: cross.subtract_modular(&v0).subtract_modular(&v1),
        }
    }

    /**
     * Cuadrado por la forma (a0 + a1)(a0 + beta a1):
     * c0 = (a0 + a1)(a0 + beta a1) - v0 - beta v0, c1 = 2 v0,
     * con v0 = a0 a1.
     */
    #[must_use]
    pub fn square_modular(&self) -> Self {
        let v0 = self.c0.multiply_modular(&self.c1);
        let beta_v0 = P::FP2_NON_RESIDUE.multiply_modular(&v0);
        let left = self.c0.add_modular(&self.c1);
        let right = self.c0.add_modular(&P::FP2_NON_RESIDUE.multiply_modular(&self.c1));
        Self {
            c0: left.multiply_modular(&right).subtract_modular(&v0).subtract_modular(&beta_v0),
            c1: v0.double_modular(),
        }
    }

    /// Mitad modular coordenada a coordenada.
    #[inline]
    #[must_use]
    pub fn half_modular(&self) -> Self {
        Self { c0: self.c0.half_modular(), c1: self.c1.half_modular() }
    }

    /// Producto por un escalar del campo base.
    #[inline]
    #[must_use]
    pub fn multiply_by_base(&self, scalar: &FieldElement<P, N>) -> Self {
        Self {
            c0: self.c0.multiply_modular(scalar),
            c1: self.c1.multiply_modular(scalar),
        }
    }

    /// Producto por el no-residuo xi de la torre.
    #[inline]
    #[must_use]
    pub fn multiply_by_xi(&self) -> Self {
        self.multiply_modular(&P::XI)
    }

    /**
     * Inverso multiplicativo; cero produce cero.
     *
     * # Mathematical Proof:
     * (c0 + c1 u)^-1 = (c0 - c1 u) / (c0^2 - beta c1^2). El
     * denominador es la norma, nula solo para el elemento cero, y la
     * inversión base ya respeta inv(0) = 0.
     */
    #[must_use]
    pub fn invert(&self) -> Self {
        let norm = self
            .c0
            .square_modular()
            .subtract_modular(&P::FP2_NON_RESIDUE.multiply_modular(&self.c1.square_modular()));
        let norm_inverse = norm.invert();
        Self {
            c0: self.c0.multiply_modular(&norm_inverse),
            c1: self.c1.multiply_modular(&norm_inverse).negate_modular(),
        }
    }

    /// Copia condicional en tiempo constante.
    #[inline]
    pub fn conditional_copy(&mut self, source: &Self, flag: SecretBool) {
        self.c0.conditional_copy(&source.c0, flag);
        self.c1.conditional_copy(&source.c1, flag);
    }

    /// Intercambio condicional en tiempo constante.
    #[inline]
    pub fn conditional_swap(left: &mut Self, right: &mut Self, flag: SecretBool) {
        FieldElement::conditional_swap(&mut left.c0, &mut right.c0, flag);
        FieldElement::conditional_swap(&mut left.c1, &mut right.c1, flag);
    }

    /// Negación condicional en tiempo constante.
    #[inline]
    pub fn conditional_negate(&mut self, flag: SecretBool) {
        self.c0.conditional_negate(flag);
        self.c1.conditional_negate(flag);
    }

    /**
     * Frobenius de primer orden sobre Fp2.
     *
     * Para p = 3 (mod 4) el morfismo coincide con la conjugación; la
     * forma tabulada del estrato Fp12 gobierna los órdenes superiores.
     */
    #[inline]
    #[must_use]
    pub fn frobenius_map(&self) -> Self {
        self.conjugate()
    }

    /**
     * Signo par/impar del elemento según la convención de extensión:
     * el signo de c0, salvo que c0 sea cero, en cuyo caso decide c1.
     * Gobierna la elección de raíz en los mapas hash-to-curve.
     */
    #[must_use]
    pub fn sign_bit(&self) -> SecretBool {
        let sign_c0 = self.c0.is_odd_canonical();
        let c0_is_zero = self.c0.is_zero();
        sign_c0.or(c0_is_zero.and(self.c1.is_odd_canonical()))
    }

    /**
     * Raíz cuadrada con bandera por el método de la norma.
     *
     * # Mathematical Proof:
     * Para a = a0 + a1 u con u^2 = beta, si s = sqrt(a0^2 - beta a1^2)
     * existe y d = (a0 + s)/2 (o (a0 - s)/2) es cuadrado, entonces
     * sqrt(a) = x0 + (a1 / 2 x0) u con x0 = sqrt(d): en efecto
     * x0^2 + beta x1^2 = (2 a0 (a0 + s)) / (2 (a0 + s)) = a0. La
     * verificación final decide la bandera y preserva al receptor en
     * el fallo. Reservada a datos públicos (deserialización,
     * hash-to-curve).
     */
    pub fn sqrt_if_square(&mut self) -> SecretBool {
        let original = *self;
        // Caso a1 = 0: raíz en el campo base o via u * sqrt(a0 / beta).
        let mut base_root = self.c0;
        let base_has_root = base_root.sqrt_if_square();
        let mut scaled = self.c0.multiply_modular(&P::FP2_NON_RESIDUE.invert());
        let scaled_has_root = scaled.sqrt_if_square();
        let mut pure_candidate = Self { c0: base_root, c1: FieldElement::zero() };
        pure_candidate.conditional_copy(
            &Self { c0: FieldElement::zero(), c1: scaled },
            base_has_root.not().and(scaled_has_root),
        );

        // Caso general: método de la norma a0^2 - beta a1^2.
        let norm = self
            .c0
            .square_modular()
            .subtract_modular(&P::FP2_NON_RESIDUE.multiply_modular(&self.c1.square_modular()));
        let mut norm_root = norm;
        let _ = norm_root.sqrt_if_square();
        let mut half_sum = self.c0.add_modular(&norm_root).half_modular();
        let first_root = half_sum.sqrt_if_square();
        let mut half_difference = self.c0.subtract_modular(&norm_root).half_modular();
        let _ = half_difference.sqrt_if_square();
        // Con c1 != 0 la coordenada x0 de una raíz legítima nunca es
        // cero: la rama con raíz nula cede ante la alternativa.
        let first_branch = first_root.and(half_sum.is_zero().not());
        let mut x0 = half_sum;
        x0.conditional_copy(&half_difference, first_branch.not());
        let x1 = self.c1.multiply_modular(&x0.double_modular().invert());
        let mut candidate = Self { c0: x0, c1: x1 };
        candidate.conditional_copy(&pure_candidate, self.c1.is_zero());

        let is_root = candidate.square_modular().equals(&original);
        self.conditional_copy(&candidate, is_root);
        is_root
    }
}
