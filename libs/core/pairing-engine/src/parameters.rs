// [libs/core/pairing-engine/src/parameters.rs]
/*!
 * =================================================================
 * APARATO: PAIRING PARAMETER CONTRACTS (V9.0 - ATE LEDGER)
 * CLASIFICACIÓN: CORE PAIRING DATA (ESTRATO L1)
 * RESPONSABILIDAD: LAZOS DE MILLER Y PARÁMETROS x POR FAMILIA
 *
 * Los bits del lazo ate (tras el bit líder) y las magnitudes del
 * parámetro x son datos públicos del sistema; se recorren en tiempo
 * variable por diseño.
 * =================================================================
 */

use obsidian_core_curve::prelude::{CurveParameters, GlsParameters};
use obsidian_core_math::prelude::{Bls12377Fp, Bls12381Fp, Bn254Fp, FieldElement, Fp2, TowerParameters};
use obsidian_core_curve::prelude::{Bls12377G1, Bls12377G2, Bls12381G1, Bls12381G2, Bn254G1, Bn254G2};

/**
 * Contrato de una familia de curvas con pairing optimal-ate.
 *
 * El primo base aporta la torre Fp12; los grupos G1/G2 llegan por
 * tipos asociados para que el tag del grupo viaje en compilación.
 */
pub trait PairingParameters<const N: usize>: TowerParameters<N> {
    /// Grupo G1 sobre el campo base.
    type G1: CurveParameters<Field = FieldElement<Self, N>>;
    /// Grupo G2 sobre el twist, con su catálogo GLS (psi).
    type G2: GlsParameters<Field = Fp2<Self, N>>;
    /// Verdadero para twists de tipo D (división por xi), falso para M.
    const TWIST_IS_D_TYPE: bool;
    /// Bits del lazo ate tras el bit líder, de alta a baja significancia.
    const ATE_LOOP_BITS: &'static [u8];
    /// Familia BN: el lazo 6x + 2 exige los dos pasos de corrección
    /// torcidos por Frobenius.
    const IS_BN_FAMILY: bool;
    /// Magnitud del parámetro x de la familia, bits completos MSB-first.
    const X_BITS: &'static [u8];
    /// Signo del parámetro x.
    const X_IS_NEGATIVE: bool;
    /// Magnitud de x - 1, para la cadena dura de las BLS.
    const X_MINUS_ONE_MAGNITUDE_BITS: &'static [u8];
}

impl PairingParameters<4> for Bn254Fp {
    type G1 = Bn254G1;
    type G2 = Bn254G2;
    const TWIST_IS_D_TYPE: bool = true;
    // 6 x + 2 = 0x19d797039be763ba8
    const ATE_LOOP_BITS: &'static [u8] = &[1, 0, 0, 1, 1, 1, 0, 1, 0, 1, 1, 1, 1, 0, 0, 1, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 1, 1, 0, 1, 1, 1, 1, 1, 0, 0, 1, 1, 1, 0, 1, 1, 0, 0, 0, 1, 1, 1, 0, 1, 1, 1, 0, 1, 0, 1, 0, 0, 0];
    const IS_BN_FAMILY: bool = true;
    // x = 0x44e992b44a6909f1
    const X_BITS: &'static [u8] = &[1, 0, 0, 0, 1, 0, 0, 1, 1, 1, 0, 1, 0, 0, 1, 1, 0, 0, 1, 0, 0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 1, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 1];
    const X_IS_NEGATIVE: bool = false;
    const X_MINUS_ONE_MAGNITUDE_BITS: &'static [u8] = &[1, 0, 0, 0, 1, 0, 0, 1, 1, 1, 0, 1, 0, 0, 1, 1, 0, 0, 1, 0, 0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 1, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0];
}

impl PairingParameters<6> for Bls12381Fp {
    type G1 = Bls12381G1;
    type G2 = Bls12381G2;
    const TWIST_IS_D_TYPE: bool = false;
    // |x| = 0xd201000000010000 (x negativo)
    const ATE_LOOP_BITS: &'static [u8] = &[1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
    const IS_BN_FAMILY: bool = false;
    const X_BITS: &'static [u8] = &[1, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
    const X_IS_NEGATIVE: bool = true;
    // |x - 1| = |x| + 1 por el signo de x.
    const X_MINUS_ONE_MAGNITUDE_BITS: &'static [u8] = &[1, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1];
}

impl PairingParameters<6> for Bls12377Fp {
    type G1 = Bls12377G1;
    type G2 = Bls12377G2;
    const TWIST_IS_D_TYPE: bool = true;
    // x = 0x8508c00000000001 (positivo)
    const ATE_LOOP_BITS: &'static [u8] = &[0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1];
    const IS_BN_FAMILY: bool = false;
    const X_BITS: &'static [u8] = &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1];
    const X_IS_NEGATIVE: bool = false;
    const X_MINUS_ONE_MAGNITUDE_BITS: &'static [u8] = &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
}
