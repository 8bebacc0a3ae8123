// [libs/domain/commitments/src/transcript.rs]
/*!
 * =================================================================
 * APARATO: FIAT-SHAMIR TRANSCRIPT ENGINE (V14.0 - DOMAIN SEPARATED)
 * CLASIFICACIÓN: DOMAIN COMMITMENTS (ESTRATO L3)
 * RESPONSABILIDAD: DERIVACIÓN DE DESAFÍOS POR CADENA DE HASH
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. EXPLICIT LABELS: Cada absorción lleva su etiqueta de separación
 *    de dominio y longitudes delimitadas: probador y verificador
 *    reproducen la misma secuencia exacta.
 * 2. CHAINED STATE: El estado es el digest encadenado SHA-256; los
 *    desafíos se derivan con un ramal etiquetado y 64 bytes uniformes
 *    reducidos al campo (sesgo < 2^-128).
 * =================================================================
 */

use obsidian_core_math::prelude::{BigInt, FieldElement, FieldParameters};
use sha2::{Digest, Sha256};

/// Transcript Fiat-Shamir con separación de dominio explícita.
pub struct Transcript {
    state: [u8; 32],
}

impl Transcript {
    /// Inicia el transcript bajo una etiqueta de protocolo.
    #[must_use]
    pub fn new(protocol_label: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(b"obsidian-transcript-v1");
        hasher.update((protocol_label.len() as u64).to_be_bytes());
        hasher.update(protocol_label);
        Self { state: hasher.finalize().into() }
    }

    /**
     * Absorción etiquetada y delimitada por longitud.
     */
    pub fn absorb_bytes(&mut self, label: &[u8], payload: &[u8]) {
        let mut hasher = Sha256::new();
        hasher.update(self.state);
        hasher.update((label.len() as u64).to_be_bytes());
        hasher.update(label);
        hasher.update((payload.len() as u64).to_be_bytes());
        hasher.update(payload);
        self.state = hasher.finalize().into();
    }

    /// Absorción de un escalar en su forma canónica Big-Endian.
    pub fn absorb_scalar(&mut self, label: &[u8], scalar: &BigInt<4>) {
        let mut buffer = [0u8; 32];
        scalar.write_bytes_be(&mut buffer);
        self.absorb_bytes(label, &buffer);
    }

    /**
     * Desafío de campo: 64 bytes uniformes del ramal etiquetado,
     * reducidos módulo p. El estado avanza para encadenar el desafío.
     */
    #[must_use]
    pub fn challenge_field_element<P: FieldParameters<L>, const L: usize>(
        &mut self,
        label: &[u8],
    ) -> FieldElement<P, L> {
        let mut wide = BigInt::<8>::ZERO;
        let mut uniform = [0u8; 64];
        for branch in 0u8..2 {
            let mut hasher = Sha256::new();
            hasher.update(self.state);
            hasher.update(b"challenge");
            hasher.update((label.len() as u64).to_be_bytes());
            hasher.update(label);
            hasher.update([branch]);
            uniform[(branch as usize) * 32..(branch as usize + 1) * 32]
                .copy_from_slice(&hasher.finalize());
        }
        for (byte_index, byte) in uniform.iter().rev().enumerate() {
            wide.limbs[byte_index / 8] |= (*byte as u64) << ((byte_index % 8) * 8);
        }
        // El propio desafío se encadena al estado.
        self.absorb_bytes(b"challenge-feedback", &uniform);
        FieldElement::from_wide_reduced(&wide)
    }

    /// Desafío escalar canónico (entero < p) para las escaleras.
    #[must_use]
    pub fn challenge_scalar<P: FieldParameters<4>>(&mut self, label: &[u8]) -> BigInt<4> {
        self.challenge_field_element::<P, 4>(label).to_big_int()
    }
}
