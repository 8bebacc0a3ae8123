// [libs/core/curve-engine/src/generator_table.rs]
/*!
 * =================================================================
 * APARATO: FIXED BASE WINDOW TABLE (V11.0 - LAZY LEDGER)
 * CLASIFICACIÓN: CORE GEOMETRY DATA (ESTRATO L1)
 * RESPONSABILIDAD: PRE-CÓMPUTO DE MÚLTIPLOS DEL GENERADOR
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. WINDOW 4: La tabla provee v * (2^(4 w) G) para v en [0, 15] y
 *    cada ventana w, eliminando las duplicaciones seriales del camino
 *    de base fija.
 * 2. LAZY SINGLETON: La tabla es función determinista pura de las
 *    constantes del catálogo; se materializa una única vez bajo
 *    'once_cell' y queda de solo lectura.
 * 3. MASKED SCAN: La multiplicación recorre cada ventana con copias
 *    enmascaradas: apta para escalares secretos.
 * =================================================================
 */

use crate::batch::batch_affine_from_projective;
use crate::traits::{CurveFieldElement, CurveParameters, GroupElement};
use crate::weierstrass::{AffinePoint, ProjectivePoint, WeierstrassEngine};
use obsidian_core_math::prelude::{BigInt, SecretBool, Word};
use once_cell::sync::Lazy;

/// Anchura de ventana de la tabla de base fija.
const WINDOW_WIDTH: u32 = 4;

/// Tabla de ventana fija del generador: [ventanas][16] puntos afines.
pub struct FixedBaseTable<C: CurveParameters> {
    windows: Vec<[AffinePoint<C>; 16]>,
}

impl<C: CurveParameters> FixedBaseTable<C> {
    /**
     * Materializa la tabla desde el generador del catálogo.
     *
     * Cada ventana w almacena v * (2^(4 w) G) para v en [0, 15]; la
     * conversión afín se amortiza con el truco de Montgomery.
     */
    #[must_use]
    pub fn build() -> Self {
        let window_count = ((C::ORDER_BITS + WINDOW_WIDTH - 1) / WINDOW_WIDTH) as usize;
        let mut projective_rows: Vec<[ProjectivePoint<C>; 16]> = Vec::with_capacity(window_count);
        let mut window_base = ProjectivePoint::<C>::generator();
        for _ in 0..window_count {
            let mut row = [ProjectivePoint::<C>::identity(); 16];
            for value in 1..16usize {
                row[value] = row[value - 1].group_sum(&window_base);
            }
            // Avance a la siguiente ventana: base <- 2^4 base.
            window_base = row[15].group_sum(&window_base);
            projective_rows.push(row);
        }
        // Conversión afín por lote de toda la tabla.
        let flat: Vec<ProjectivePoint<C>> = projective_rows.iter().flatten().copied().collect();
        let mut affine_flat = vec![AffinePoint::<C>::infinity(); flat.len()];
        let mut scratch = vec![<C as CurveParameters>::Field::field_zero(); 3 * flat.len()];
        batch_affine_from_projective(&flat, &mut affine_flat, &mut scratch);
        let windows = affine_flat
            .chunks_exact(16)
            .map(|chunk| {
                let mut row = [AffinePoint::<C>::infinity(); 16];
                row.copy_from_slice(chunk);
                row
            })
            .collect();
        Self { windows }
    }

    /**
     * Multiplicación de base fija k G con barrido enmascarado por
     * ventana: el patrón de accesos es independiente del escalar.
     */
    #[must_use]
    pub fn scalar_mul(&self, scalar: &BigInt<4>) -> ProjectivePoint<C> {
        let mut accumulator = ProjectivePoint::<C>::identity();
        for (window, row) in self.windows.iter().enumerate() {
            let start_bit = (window as u32) * WINDOW_WIDTH;
            let mut digit: Word = 0;
            for offset in 0..WINDOW_WIDTH {
                let bit_index = start_bit + offset;
                if (bit_index as usize) < 256 {
                    digit |= scalar.bit(bit_index) << offset;
                }
            }
            let mut addend = row[0];
            for value in 1..16 {
                let select = SecretBool::from_words_eq(digit, value as Word);
                addend.x.conditional_copy(&row[value].x, select);
                addend.y.conditional_copy(&row[value].y, select);
                addend.is_infinity = addend
                    .is_infinity
                    .and(select.not())
                    .or(row[value].is_infinity.and(select));
            }
            accumulator = WeierstrassEngine::<C>::mixed_sum(&accumulator, &addend);
        }
        accumulator
    }
}

use crate::catalog::bls12_381::Bls12381G1;
use crate::catalog::bn254::Bn254G1;
use crate::catalog::secp256k1::Secp256k1;

/// Tabla de base fija del generador de BN254 G1.
pub static BN254_G1_GENERATOR_TABLE: Lazy<FixedBaseTable<Bn254G1>> =
    Lazy::new(FixedBaseTable::build);

/// Tabla de base fija del generador de BLS12-381 G1.
pub static BLS12381_G1_GENERATOR_TABLE: Lazy<FixedBaseTable<Bls12381G1>> =
    Lazy::new(FixedBaseTable::build);

/// Tabla de base fija del generador de secp256k1.
pub static SECP256K1_GENERATOR_TABLE: Lazy<FixedBaseTable<Secp256k1>> =
    Lazy::new(FixedBaseTable::build);
