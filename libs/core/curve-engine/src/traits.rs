// [libs/core/curve-engine/src/traits.rs]
/*!
 * =================================================================
 * APARATO: GEOMETRIC PARAMETER CONTRACTS (V21.0 - MONOMORPHIC)
 * CLASIFICACIÓN: CORE GEOMETRY (ESTRATO L1)
 * RESPONSABILIDAD: CONTRATOS DE CAMPO Y CATÁLOGOS DE CURVA
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. FIELD ABSTRACTION: 'CurveFieldElement' unifica Fp y Fp2 ante las
 *    leyes de grupo, de modo que G1 y su twist G2 comparten un único
 *    motor monomorfizado. El tag de grupo viaja en el tipo del campo
 *    base y previene mezclas en compilación.
 * 2. CONST CATALOGS: Cada curva es un struct de constantes; ningún
 *    parámetro se resuelve en runtime.
 * 3. ENDO STRATA: Los catálogos GLV (2 mini-escalares) y GLS (4
 *    mini-escalares sobre el twist) extienden el contrato base.
 * =================================================================
 */

use obsidian_core_math::prelude::{
    BigInt, FieldElement, FieldParameters, Fp2, SecretBool, TowerParameters,
};

/**
 * Contrato de campo consumido por las leyes de grupo.
 *
 * Lo satisfacen los residuos Fp y los elementos Fp2, unificando las
 * curvas base y sus twists bajo el mismo motor geométrico.
 */
pub trait CurveFieldElement:
    Copy + Clone + core::fmt::Debug + PartialEq + Eq + Send + Sync + 'static
{
    /// Cero aditivo.
    fn field_zero() -> Self;
    /// Uno multiplicativo.
    fn field_one() -> Self;
    /// Selector "es cero" en tiempo constante.
    fn is_zero(&self) -> SecretBool;
    /// Igualdad bit a bit en tiempo constante.
    fn equals(&self, other: &Self) -> SecretBool;
    /// Adición modular.
    fn add_modular(&self, other: &Self) -> Self;
    /// Sustracción modular.
    fn subtract_modular(&self, other: &Self) -> Self;
    /// Duplicación modular.
    fn double_modular(&self) -> Self;
    /// Negación modular.
    fn negate_modular(&self) -> Self;
    /// Multiplicación modular.
    fn multiply_modular(&self, other: &Self) -> Self;
    /// Cuadrado modular.
    fn square_modular(&self) -> Self;
    /// Inverso multiplicativo con inv(0) = 0.
    fn invert(&self) -> Self;
    /// Raíz cuadrada con bandera; el receptor queda intacto en el fallo.
    fn sqrt_if_square(&mut self) -> SecretBool;
    /// Copia condicional en tiempo constante.
    fn conditional_copy(&mut self, source: &Self, flag: SecretBool);
    /// Negación condicional en tiempo constante.
    fn conditional_negate(&mut self, flag: SecretBool);
    /// Morfismo de Frobenius de primer orden (identidad sobre Fp,
    /// conjugación sobre Fp2). Alimenta el endomorfismo psi del twist.
    fn frobenius_conjugate(&self) -> Self;
    /// Bit de signo canónico (gobierna raíces y códecs comprimidos).
    fn sign_bit(&self) -> SecretBool;
}

impl<P: FieldParameters<N>, const N: usize> CurveFieldElement for FieldElement<P, N> {
    #[inline(always)]
    fn field_zero() -> Self {
        Self::zero()
    }
    #[inline(always)]
    fn field_one() -> Self {
        Self::one()
    }
    #[inline(always)]
    fn is_zero(&self) -> SecretBool {
        FieldElement::is_zero(self)
    }
    #[inline(always)]
    fn equals(&self, other: &Self) -> SecretBool {
        FieldElement::equals(self, other)
    }
    #[inline(always)]
    fn add_modular(&self, other: &Self) -> Self {
        FieldElement::add_modular(self, other)
    }
    #[inline(always)]
    fn subtract_modular(&self, other: &Self) -> Self {
        FieldElement::subtract_modular(self, other)
    }
    #[inline(always)]
    fn double_modular(&self) -> Self {
        FieldElement::double_modular(self)
    }
    #[inline(always)]
    fn negate_modular(&self) -> Self {
        FieldElement::negate_modular(self)
    }
    #[inline(always)]
    fn multiply_modular(&self, other: &Self) -> Self {
        FieldElement::multiply_modular(self, other)
    }
    #[inline(always)]
    fn square_modular(&self) -> Self {
        FieldElement::square_modular(self)
    }
    #[inline(always)]
    fn invert(&self) -> Self {
        FieldElement::invert(self)
    }
    #[inline(always)]
    fn sqrt_if_square(&mut self) -> SecretBool {
        FieldElement::sqrt_if_square(self)
    }
    #[inline(always)]
    fn conditional_copy(&mut self, source: &Self, flag: SecretBool) {
        FieldElement::conditional_copy(self, source, flag)
    }
    #[inline(always)]
    fn conditional_negate(&mut self, flag: SecretBool) {
        FieldElement::conditional_negate(self, flag)
    }
    #[inline(always)]
    fn frobenius_conjugate(&self) -> Self {
        *self
    }
    #[inline(always)]
    fn sign_bit(&self) -> SecretBool {
        self.is_odd_canonical()
    }
}

impl<P: TowerParameters<N>, const N: usize> CurveFieldElement for Fp2<P, N> {
    #[inline(always)]
    fn field_zero() -> Self {
        Self::zero()
    }
    #[inline(always)]
    fn field_one() -> Self {
        Self::one()
    }
    #[inline(always)]
    fn is_zero(&self) -> SecretBool {
        Fp2::is_zero(self)
    }
    #[inline(always)]
    fn equals(&self, other: &Self) -> SecretBool {
        Fp2::equals(self, other)
    }
    #[inline(always)]
    fn add_modular(&self, other: &Self) -> Self {
        Fp2::add_modular(self, other)
    }
    #[inline(always)]
    fn subtract_modular(&self, other: &Self) -> Self {
        Fp2::subtract_modular(self, other)
    }
    #[inline(always)]
    fn double_modular(&self) -> Self {
        Fp2::double_modular(self)
    }
    #[inline(always)]
    fn negate_modular(&self) -> Self {
        Fp2::negate_modular(self)
    }
    #[inline(always)]
    fn multiply_modular(&self, other: &Self) -> Self {
        Fp2::multiply_modular(self, other)
    }
    #[inline(always)]
    fn square_modular(&self) -> Self {
        Fp2::square_modular(self)
    }
    #[inline(always)]
    fn invert(&self) -> Self {
        Fp2::invert(self)
    }
    #[inline(always)]
    fn sqrt_if_square(&mut self) -> SecretBool {
        Fp2::sqrt_if_square(self)
    }
    #[inline(always)]
    fn conditional_copy(&mut self, source: &Self, flag: SecretBool) {
        Fp2::conditional_copy(self, source, flag)
    }
    #[inline(always)]
    fn conditional_negate(&mut self, flag: SecretBool) {
        Fp2::conditional_negate(self, flag)
    }
    #[inline(always)]
    fn frobenius_conjugate(&self) -> Self {
        self.conjugate()
    }
    #[inline(always)]
    fn sign_bit(&self) -> SecretBool {
        Fp2::sign_bit(self)
    }
}

/**
 * Catálogo de una curva corta de Weierstrass y^2 = x^3 + b (a = 0).
 *
 * El orden del subgrupo primo y el cofactor efectivo acompañan a las
 * constantes de la ecuación; todo es dato de compilación.
 */
pub trait CurveParameters: Copy + core::fmt::Debug + Send + Sync + 'static {
    /// Campo base de la curva (Fp para G1, Fp2 para el twist G2).
    type Field: CurveFieldElement;
    /// Coeficiente b de la ecuación.
    const COEFF_B: Self::Field;
    /// 3 b, precomputado para las fórmulas completas.
    const COEFF_B3: Self::Field;
    /// Abscisa del generador canónico.
    const GENERATOR_X: Self::Field;
    /// Ordenada del generador canónico.
    const GENERATOR_Y: Self::Field;
    /// Orden r del subgrupo primo.
    const ORDER: BigInt<4>;
    /// Bits significativos de r.
    const ORDER_BITS: u32;
    /// Cofactor efectivo para la limpieza (1 cuando la curva es de orden primo).
    const COFACTOR: BigInt<8>;
    /// Identificador nominal para trazas.
    const NAME: &'static str;
}

/**
 * Extensión GLV: endomorfismo phi(x, y) = (beta x, y) con autovalor
 * lambda sobre el subgrupo primo, retícula corta y constantes de
 * redondeo de Babai para la descomposición en dos mini-escalares.
 *
 * Los vectores de retícula viajan en complemento a dos módulo 2^256;
 * la descomposición opera con aritmética envolvente y recupera el
 * signo por el bit alto (las magnitudes caben en 128 bits).
 */
pub trait EndomorphismParameters: CurveParameters {
    /// Raíz cúbica de la unidad beta en el campo base.
    const ENDO_BETA: Self::Field;
    /// Autovalor lambda del endomorfismo módulo r.
    const ENDO_LAMBDA: BigInt<4>;
    /// Primer vector corto (v11, v12) en complemento a dos.
    const LATTICE_V1: [BigInt<4>; 2];
    /// Segundo vector corto (v21, v22) en complemento a dos.
    const LATTICE_V2: [BigInt<4>; 2];
    /// Magnitud del coeficiente de Babai g1 = round(v22 * 2^384 / det).
    const BABAI_G1: BigInt<6>;
    /// Signo de g1.
    const BABAI_G1_IS_NEGATIVE: bool;
    /// Magnitud del coeficiente de Babai g2 = round(-v12 * 2^384 / det).
    const BABAI_G2: BigInt<6>;
    /// Signo de g2.
    const BABAI_G2_IS_NEGATIVE: bool;
    /// Cota de bits de las magnitudes de los mini-escalares.
    const MINI_SCALAR_BITS: u32;
}

/**
 * Extensión GLS del twist: endomorfismo psi(x, y) =
 * (PSI_X frob(x), PSI_Y frob(y)) con autovalor t - 1, retícula 4D y
 * redondeo de Babai hacia cuatro mini-escalares de media palabra.
 */
pub trait GlsParameters: CurveParameters {
    /// Constante de untwist-Frobenius-twist para la abscisa.
    const PSI_X: Self::Field;
    /// Constante de untwist-Frobenius-twist para la ordenada.
    const PSI_Y: Self::Field;
    /// Autovalor de psi sobre el subgrupo primo: t - 1 mod r.
    const PSI_EIGENVALUE: BigInt<4>;
    /// Base reducida de la retícula 4D en complemento a dos (filas).
    const LATTICE: [[BigInt<4>; 4]; 4];
    /// Magnitudes de los coeficientes de Babai (escala 2^384).
    const BABAI: [BigInt<6>; 4];
    /// Signos de los coeficientes de Babai.
    const BABAI_IS_NEGATIVE: [bool; 4];
    /// Cota de bits de las magnitudes de los mini-escalares.
    const MINI_SCALAR_BITS: u32;
}

/**
 * Elemento de grupo abeliano consumido por la familia de
 * multiplicación escalar. Lo satisfacen los puntos proyectivos
 * Weierstrass (ley completa) y Edwards, de modo que los algoritmos de
 * escalera se escriben una única vez.
 */
pub trait GroupElement: Copy + Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Elemento neutro del grupo.
    fn group_identity() -> Self;
    /// Suma de grupo completa (sin excepciones).
    fn group_sum(&self, other: &Self) -> Self;
    /// Duplicación.
    fn group_double(&self) -> Self;
    /// Negación.
    fn group_negate(&self) -> Self;
    /// Copia condicional en tiempo constante.
    fn group_conditional_copy(&mut self, source: &Self, flag: SecretBool);
    /// Negación condicional en tiempo constante.
    fn group_conditional_negate(&mut self, flag: SecretBool);
    /// Selector "es el neutro" en tiempo constante.
    fn group_is_identity(&self) -> SecretBool;
}

/**
 * Catálogo de una curva twisted Edwards a x^2 + y^2 = 1 + d x^2 y^2.
 */
pub trait EdwardsParameters: Copy + core::fmt::Debug + Send + Sync + 'static {
    /// Campo base de la curva.
    type Field: CurveFieldElement;
    /// Coeficiente a.
    const COEFF_A: Self::Field;
    /// Coeficiente d.
    const COEFF_D: Self::Field;
    /// Abscisa del generador canónico.
    const GENERATOR_X: Self::Field;
    /// Ordenada del generador canónico.
    const GENERATOR_Y: Self::Field;
    /// Orden r del subgrupo primo.
    const ORDER: BigInt<4>;
    /// Bits significativos de r.
    const ORDER_BITS: u32;
    /// Cofactor del subgrupo primo.
    const COFACTOR: BigInt<8>;
    /// Identificador nominal para trazas.
    const NAME: &'static str;
}
