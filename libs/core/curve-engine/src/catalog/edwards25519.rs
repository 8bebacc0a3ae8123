// [libs/core/curve-engine/src/catalog/edwards25519.rs]
/*!
 * =================================================================
 * APARATO: EDWARDS25519 CURVE CATALOG (V2.0 - RFC GEOMETRY)
 * CLASIFICACIÓN: CORE GEOMETRY DATA (ESTRATO L1)
 * RESPONSABILIDAD: TWISTED EDWARDS a = -1 SOBRE 2^255 - 19
 *
 * a = -1 es cuadrado (p = 5 mod 8) y d = -121665/121666 no lo es: la
 * adición unificada es completa. El generador es el punto base
 * canónico de la curva (ordenada 4/5).
 * =================================================================
 */

use crate::traits::EdwardsParameters;
use obsidian_core_math::prelude::{BigInt, Ed25519Fp, FieldElement};

/// Curva Edwards25519: -x^2 + y^2 = 1 + d x^2 y^2 sobre 2^255 - 19.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edwards25519;

impl EdwardsParameters for Edwards25519 {
    type Field = FieldElement<Ed25519Fp, 4>;
    const COEFF_A: Self::Field = FieldElement::from_montgomery_limbs([0xffffffffffffffc7, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]);
    const COEFF_D: Self::Field = FieldElement::from_montgomery_limbs([0x80ed8bfedf47e9fa, 0x10a18777afc62973, 0xe5939207bc188690, 0x2c822b5a729fc526]);
    const GENERATOR_X: Self::Field = FieldElement::from_montgomery_limbs([0xe2cabc553f9da287, 0x9ca598562396e489, 0x9879936bade4b5b7, 0x759e23707e6077d0]);
    const GENERATOR_Y: Self::Field = FieldElement::from_montgomery_limbs([0x333333333333334a, 0x3333333333333333, 0x3333333333333333, 0x3333333333333333]);
    const ORDER: BigInt<4> = BigInt::from_limbs([0x5812631a5cf5d3ed, 0x14def9dea2f79cd6, 0x0000000000000000, 0x1000000000000000]);
    const ORDER_BITS: u32 = 253;
    const COFACTOR: BigInt<8> = BigInt::from_limbs([0x0000000000000008, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]);
    const NAME: &'static str = "edwards25519";
}
