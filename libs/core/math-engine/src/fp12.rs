// [libs/core/math-engine/src/fp12.rs]
/*!
 * =================================================================
 * APARATO: DODECIC EXTENSION ENGINE (V33.0 - GT SOVEREIGN)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: ARITMÉTICA Fp12 = Fp6[w] / (w^2 - v)
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. SPARSE LINES: Los productos dispersos por funciones de línea
 *    ejecutan ~40% del trabajo denso con igualdad bit a bit frente al
 *    producto completo (contrato certificado en el espejo de torres).
 * 2. CYCLOTOMIC FAST PATH: El cuadrado comprimido de Granger-Scott
 *    acelera el subgrupo de orden Phi_12(p) = p^4 - p^2 + 1.
 * 3. FROBENIUS TABULADO: a -> a^(p^k) para k en {1, 2, 3} via
 *    conjugación Fp2 y las tablas del catálogo de torre.
 * =================================================================
 */

use crate::arithmetic::SecretBool;
use crate::fp2::{Fp2, TowerParameters};
use crate::fp6::Fp6;

/// Elemento c0 + c1 w de la extensión cuadrática sobre Fp6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fp12<P, const N: usize> {
    /// Coordenada de grado cero.
    pub c0: Fp6<P, N>,
    /// Coordenada de grado uno.
    pub c1: Fp6<P, N>,
}

impl<P: TowerParameters<N>, const N: usize> Default for Fp12<P, N> {
    fn default() -> Self {
        Self::one()
    }
}

impl<P: TowerParameters<N>, const N: usize> Fp12<P, N> {
    /// Construye el elemento desde sus coordenadas Fp6.
    #[inline(always)]
    #[must_use]
    pub const fn from_coordinates(c0: Fp6<P, N>, c1: Fp6<P, N>) -> Self {
        Self { c0, c1 }
    }

    /// Cero de la extensión.
    #[inline(always)]
    #[must_use]
    pub const fn zero() -> Self {
        Self { c0: Fp6::zero(), c1: Fp6::zero() }
    }

    /// Uno de la extensión.
    #[inline(always)]
    #[must_use]
    pub const fn one() -> Self {
        Self { c0: Fp6::one(), c1: Fp6::zero() }
    }

    /// Selector "el elemento es uno", en tiempo constante.
    #[inline]
    #[must_use]
    pub fn is_one(&self) -> SecretBool {
        self.equals(&Self::one())
    }

    /// Igualdad bit a bit en tiempo constante.
    #[inline]
    #[must_use]
    pub fn equals(&self, other: &Self) -> SecretBool {
        self.c0.equals(&other.c0).and(self.c1.equals(&other.c1))
    }

    /// Producto Karatsuba cuadrático sobre Fp6.
    #[must_use]
    pub fn multiply_modular(&self, other: &Self) -> Self {
        let v0 = self.c0.multiply_modular(&other.c0);
        let v1 = self.c1.multiply_modular(&other.c1);
        let cross = self
            .c0
            .add_modular(&self.c1)
            .multiply_modular(&other.c0.add_modular(&other.c1));
        Self {
            c0: v0.add_modular(&v1.multiply_by_v()),
            c1: cross.subtract_modular(&v0).subtract_modular(&v1),
        }
    }

    /**
     * Cuadrado denso: con v0 = c0 c1,
     * r0 = (c0 + c1)(c0 + v c1) - v0 - v v0, r1 = 2 v0.
     */
    #[must_use]
    pub fn square_modular(&self) -> Self {
        let v0 = self.c0.multiply_modular(&self.c1);
        let cross = self
            .c0
            .add_modular(&self.c1)
            .multiply_modular(&self.c0.add_modular(&self.c1.multiply_by_v()));
        Self {
            c0: cross.subtract_modular(&v0).subtract_modular(&v0.multiply_by_v()),
            c1: v0.add_modular(&v0),
        }
    }

    /// Conjugación: c0 - c1 w. Inversa en el subgrupo ciclotómico.
    #[inline]
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self { c0: self.c0, c1: self.c1.negate_modular() }
    }

    /**
     * Inverso multiplicativo; cero produce cero.
     *
     * # Mathematical Proof:
     * (c0 + c1 w)^-1 = (c0 - c1 w) / (c0^2 - v c1^2).
     */
    #[must_use]
    pub fn invert(&self) -> Self {
        let determinant = self
            .c0
            .square_modular()
            .subtract_modular(&self.c1.square_modular().multiply_by_v());
        let determinant_inverse = determinant.invert();
        Self {
            c0: self.c0.multiply_modular(&determinant_inverse),
            c1: self.c1.multiply_modular(&determinant_inverse).negate_modular(),
        }
    }

    /**
     * Frobenius a -> a^(p^k) para k en {1, 2, 3}.
     *
     * # Mathematical Proof:
     * Sobre la base (1, v, v^2, w, v w, v^2 w), el morfismo conjuga
     * cada coordenada Fp2 cuando k es impar y la escala por
     * FROBENIUS[k-1][i] = xi^(i (p^k - 1) / 6) según su grado i en w.
     */
    #[must_use]
    pub fn frobenius_map(&self, power: usize) -> Self {
        debug_assert!((1..=3).contains(&power));
        let table = &P::FROBENIUS[power - 1];
        let odd_power = power % 2 == 1;
        let twist = |coordinate: &Fp2<P, N>, degree: usize| -> Fp2<P, N> {
            let base = if odd_power { coordinate.conjugate() } else { *coordinate };
            if degree == 0 {
                base
            } else {
                base.multiply_modular(&table[degree])
            }
        };
        Self {
            c0: Fp6::from_coordinates(
                twist(&self.c0.c0, 0),
                twist(&self.c0.c1, 2),
                twist(&self.c0.c2, 4),
            ),
            c1: Fp6::from_coordinates(
                twist(&self.c1.c0, 1),
                twist(&self.c1.c1, 3),
                twist(&self.c1.c2, 5),
            ),
        }
    }

    /**
     * Cuadrado ciclotómico (Granger-Scott) sobre la descomposición en
     * tres subálgebras Fp4 = Fp2[t] / (t^2 - xi).
     *
     * Válido únicamente para elementos del subgrupo de orden
     * Phi_12(p); el espejo de torres certifica la igualdad con el
     * cuadrado denso sobre dichos elementos.
     */
    #[must_use]
    pub fn cyclotomic_square(&self) -> Self {
        let z0 = self.c0.c0;
        let z4 = self.c0.c1;
        let z3 = self.c0.c2;
        let z2 = self.c1.c0;
        let z1 = self.c1.c1;
        let z5 = self.c1.c2;

        let (t0, t1) = Self::fp4_square(&z0, &z1);
        let new_z0 = t0.subtract_modular(&z0).double_modular().add_modular(&t0);
        let new_z1 = t1.add_modular(&z1).double_modular().add_modular(&t1);

        let (t0, t1) = Self::fp4_square(&z2, &z3);
        let (t2, t3) = Self::fp4_square(&z4, &z5);

        let new_z4 = t0.subtract_modular(&z4).double_modular().add_modular(&t0);
        let new_z5 = t1.add_modular(&z5).double_modular().add_modular(&t1);
        let xi_t3 = t3.multiply_by_xi();
        let new_z2 = xi_t3.add_modular(&z2).double_modular().add_modular(&xi_t3);
        let new_z3 = t2.subtract_modular(&z3).double_modular().add_modular(&t2);

        Self {
            c0: Fp6::from_coordinates(new_z0, new_z4, new_z3),
            c1: Fp6::from_coordinates(new_z2, new_z1, new_z5),
        }
    }

    /// Cuadrado en la subálgebra Fp4: (a + b t)^2 con t^2 = xi.
    #[inline]
    fn fp4_square(a: &Fp2<P, N>, b: &Fp2<P, N>) -> (Fp2<P, N>, Fp2<P, N>) {
        let a_squared = a.square_modular();
        let b_squared = b.square_modular();
        let first = b_squared.multiply_by_xi().add_modular(&a_squared);
        let second = a
            .add_modular(b)
            .square_modular()
            .subtract_modular(&a_squared)
            .subtract_modular(&b_squared);
        (first, second)
    }

    /**
     * Exponenciación ciclotómica pública por la magnitud del parámetro
     * de curva: bits MSB-first, conjugación final si es negativo.
     * El exponente es un parámetro público del sistema.
     */
    #[must_use]
    pub fn cyclotomic_exp_vartime(&self, magnitude_bits: &[u8], is_negative: bool) -> Self {
        let mut result = Self::one();
        let mut started = false;
        for bit in magnitude_bits {
            if started {
                result = result.cyclotomic_square();
            }
            if *bit == 1 {
                if started {
                    result = result.multiply_modular(self);
                } else {
                    result = *self;
                    started = true;
                }
            }
        }
        if is_negative {
            result.conjugate()
        } else {
            result
        }
    }

    // --- PRODUCTOS DISPERSOS POR LÍNEAS DE PAIRING ---

    /**
     * Producto disperso por el patrón (x, y, 0 | 0, z, 0) sobre la base
     * Fp2 (c0.c0, c0.c1, c0.c2, c1.c0, c1.c1, c1.c2). Es la forma de
     * las líneas evaluadas de los twists M (BLS12-381).
     *
     * Contrato: igual bit a bit al producto denso por el mismo patrón.
     */
    #[must_use]
    pub fn multiply_by_line_xy00z0(
        &self,
        x: &Fp2<P, N>,
        y: &Fp2<P, N>,
        z: &Fp2<P, N>,
    ) -> Self {
        let v0 = self.c0.multiply_by_sparse_01(x, y);
        let v1 = self.c1.multiply_by_sparse_1(z);
        let combined = self
            .c0
            .add_modular(&self.c1)
            .multiply_by_sparse_01(x, &y.add_modular(z));
        Self {
            c0: v0.add_modular(&v1.multiply_by_v()),
            c1: combined.subtract_modular(&v0).subtract_modular(&v1),
        }
    }

    /**
     * Producto disperso por el patrón (x, 0, 0 | y, z, 0): la forma de
     * las líneas evaluadas de los twists D (BN254).
     *
     * Contrato: igual bit a bit al producto denso por el mismo patrón.
     */
    #[must_use]
    pub fn multiply_by_line_x00yz0(
        &self,
        x: &Fp2<P, N>,
        y: &Fp2<P, N>,
        z: &Fp2<P, N>,
    ) -> Self {
        let v0 = self.c0.multiply_by_fp2(x);
        let v1 = self.c1.multiply_by_sparse_01(y, z);
        let combined = self
            .c0
            .add_modular(&self.c1)
            .multiply_by_sparse_01(&x.add_modular(y), z);
        Self {
            c0: v0.add_modular(&v1.multiply_by_v()),
            c1: combined.subtract_modular(&v0).subtract_modular(&v1),
        }
    }
}
