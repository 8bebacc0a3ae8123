// [libs/core/math-engine/src/field.rs]
/*!
 * =================================================================
 * APARATO: MONTGOMERY FIELD ENGINE (V52.0 - MONOMORPHIC SOVEREIGN)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: ARITMÉTICA MODULAR Fp EN DOMINIO MONTGOMERY
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. PARAMETER TRAITS: Cada primo queda monomorfizado vía
 *    'FieldParameters', manteniendo las constantes inline y el
 *    invariante de módulo conocido en construcción.
 * 2. TRUE REDC: Reducción de Montgomery con acumulador de 2N+1
 *    palabras y sustracción final enmascarada, sin ramas sobre datos.
 * 3. TOTAL CONTRACTS: La inversión de cero produce cero y la raíz de
 *    un no-residuo retorna bandera falsa dejando intacto al receptor.
 *
 * # Mathematical Proof (Montgomery Domain):
 * Un residuo se almacena como a * R mod p con R = 2^(64 N). El producto
 * REDC de dos residuos entrega a * b * R mod p, de modo que el dominio
 * es cerrado bajo multiplicación y la forma canónica es única: la
 * igualdad de campo se decide bit a bit.
 * =================================================================
 */

use crate::arithmetic::{add_with_carry, multiply_add_2, SecretBool, Word, MAX_LIMBS, WORD_BITS};
use crate::bigint::{reduce_wide, BigInt};
use crate::errors::MathError;
use core::marker::PhantomData;

/**
 * Catálogo de constantes de un primo concreto.
 *
 * Las tablas se producen en tiempo de generación a partir de la
 * definición del primo; ninguna se calcula en runtime.
 */
pub trait FieldParameters<const N: usize>:
    Copy + Clone + core::fmt::Debug + PartialEq + Eq + Send + Sync + 'static
{
    /// Módulo primo p en limbs Little-Endian.
    const MODULUS: BigInt<N>;
    /// Número de bits significativos de p.
    const MODULUS_BITS: u32;
    /// Bits libres del limb superior (habilitan reducción diferida).
    const SPARE_BITS: u32;
    /// R^2 mod p, puerta de entrada al dominio Montgomery.
    const MONTY_R2: BigInt<N>;
    /// R mod p: el uno del dominio Montgomery.
    const MONTY_ONE: BigInt<N>;
    /// -p^-1 mod 2^64, multiplicador de la reducción REDC.
    const MONTY_MU: Word;
    /// (p + 1) / 2, para la mitad modular y el GCD binario.
    const MODULUS_PLUS_ONE_HALF: BigInt<N>;
    /// Verdadero cuando p = 3 (mod 4) y la raíz admite exponenciación directa.
    const SQRT_IS_THREE_MOD_FOUR: bool;
    /// (p + 1) / 4 cuando p = 3 (mod 4); (q + 1) / 2 en el caso Tonelli-Shanks.
    const SQRT_EXPONENT: BigInt<N>;
    /// Valuación 2-ádica s de p - 1.
    const TWO_ADICITY: u32;
    /// Parte impar q de p - 1 = q * 2^s (cero cuando p = 3 mod 4).
    const SQRT_TONELLI_Q: BigInt<N>;
    /// z^q en forma Montgomery para un no-residuo z (cero cuando p = 3 mod 4).
    const SQRT_TONELLI_C: BigInt<N>;
}

/// Catálogo adicional de los primos aptos para FFT (subgrupo 2-ádico).
pub trait FftFieldParameters<const N: usize>: FieldParameters<N> {
    /// Raíz de la unidad de orden 2^TWO_ADICITY, en forma Montgomery.
    const TWO_ADIC_ROOT_OF_UNITY: BigInt<N>;
}

/**
 * Residuo del campo primo Fp en forma Montgomery.
 *
 * Invariantes: el valor subyacente vive en [0, p) y la construcción
 * limpia todos los limbs, de modo que la comparación bit a bit decide
 * la igualdad de campo.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldElement<P, const N: usize> {
    residue: BigInt<N>,
    _parameters: PhantomData<P>,
}

impl<P: FieldParameters<N>, const N: usize> Default for FieldElement<P, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<P: FieldParameters<N>, const N: usize> FieldElement<P, N> {
    // --- CONSTRUCTORES ---

    /// Cero del campo (también cero en dominio Montgomery).
    #[inline(always)]
    #[must_use]
    pub const fn zero() -> Self {
        Self { residue: BigInt::ZERO, _parameters: PhantomData }
    }

    /// Uno del campo (R mod p).
    #[inline(always)]
    #[must_use]
    pub const fn one() -> Self {
        Self { residue: P::MONTY_ONE, _parameters: PhantomData }
    }

    /**
     * Constructor crudo desde limbs ya residentes en el dominio
     * Montgomery. Reservado a las tablas de constantes precomputadas.
     */
    #[inline(always)]
    #[must_use]
    pub const fn from_montgomery_limbs(limbs: [Word; N]) -> Self {
        Self { residue: BigInt::from_limbs(limbs), _parameters: PhantomData }
    }

    /// Asciende una palabra de 64 bits al dominio Montgomery.
    #[must_use]
    pub fn from_word(value: Word) -> Self {
        Self::from_big_int(&BigInt::from_word(value))
    }

    /**
     * Asciende un entero canónico (0 <= x < p) al dominio Montgomery.
     * La canonicidad del argumento es responsabilidad del llamador.
     */
    #[must_use]
    pub fn from_big_int(canonical_integer: &BigInt<N>) -> Self {
        let mut element = Self { residue: *canonical_integer, _parameters: PhantomData };
        element.residue = Self::montgomery_multiply(&element.residue, &P::MONTY_R2);
        element
    }

    /**
     * Decodifica hexadecimal público hacia el dominio Montgomery.
     *
     * # Errors:
     * Propaga los fallos del decodificador y rechaza valores >= p.
     */
    pub fn from_hex_vartime(hexadecimal_input: &str) -> Result<Self, MathError> {
        let canonical = BigInt::from_hex_checked_vartime(hexadecimal_input, &P::MODULUS)?;
        Ok(Self::from_big_int(&canonical))
    }

    /**
     * Reduce un entero del doble de ancho hacia el campo y lo asciende
     * al dominio Montgomery. Es la puerta de entrada de 'hash_to_field'.
     */
    #[must_use]
    pub fn from_wide_reduced<const W: usize>(wide_integer: &BigInt<W>) -> Self {
        let mut canonical = BigInt::ZERO;
        reduce_wide(&mut canonical, wide_integer, &P::MODULUS);
        Self::from_big_int(&canonical)
    }

    // --- EXPORTACIÓN ---

    /// Deshace la transformación Montgomery y retorna el entero canónico.
    #[must_use]
    pub fn to_big_int(&self) -> BigInt<N> {
        Self::montgomery_reduce(&self.residue, &BigInt::ZERO)
    }

    /// Limbs crudos del residuo Montgomery (para tablas y serialización interna).
    #[inline(always)]
    #[must_use]
    pub const fn montgomery_limbs(&self) -> [Word; N] {
        self.residue.limbs
    }

    /// Exporta el valor canónico como bytes Big-Endian de longitud ceil(bits/8).
    pub fn write_canonical_bytes_be(&self, output: &mut [u8]) {
        self.to_big_int().write_bytes_be(output);
    }

    /// Codificación hexadecimal del valor canónico.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let byte_length = ((P::MODULUS_BITS + 7) / 8) as usize;
        let mut buffer = vec![0u8; byte_length];
        self.write_canonical_bytes_be(&mut buffer);
        format!("0x{}", hex::encode(buffer))
    }

    // --- PREDICADOS ---

    /// Selector "el residuo es cero", en tiempo constante.
    #[inline(always)]
    #[must_use]
    pub fn is_zero(&self) -> SecretBool {
        self.residue.is_zero()
    }

    /// Igualdad de campo en tiempo constante (la forma es canónica).
    #[inline(always)]
    #[must_use]
    pub fn equals(&self, other: &Self) -> SecretBool {
        self.residue.equals(&other.residue)
    }

    /**
     * Selector "el entero canónico es impar".
     * Requiere deshacer la transformación Montgomery.
     */
    #[must_use]
    pub fn is_odd_canonical(&self) -> SecretBool {
        self.to_big_int().is_odd()
    }

    /**
     * Selector "el valor canónico es lexicográficamente mayor que su
     * negado", es decir x > (p - 1) / 2. Gobierna los bits de signo de
     * los códecs comprimidos.
     */
    #[must_use]
    pub fn is_lexicographically_largest(&self) -> SecretBool {
        // x > (p-1)/2  <=>  x >= (p+1)/2  <=>  !(x < (p+1)/2)
        self.to_big_int().is_less_than(&P::MODULUS_PLUS_ONE_HALF).not()
    }

    // --- ANILLO ---

    /// Adición modular: (self + other) mod p.
    #[inline]
    #[must_use]
    pub fn add_modular(&self, other: &Self) -> Self {
        let mut result = self.residue;
        let carry = result.add_assign(&other.residue);
        // Se resta p si hubo desborde de palabra o si el resultado lo alcanza.
        let needs_reduction = carry.or(result.is_less_than(&P::MODULUS).not());
        let _ = result.conditional_subtract(&P::MODULUS, needs_reduction);
        Self { residue: result, _parameters: PhantomData }
    }

    /// Sustracción modular: (self - other) mod p.
    #[inline]
    #[must_use]
    pub fn subtract_modular(&self, other: &Self) -> Self {
        let mut result = self.residue;
        let borrow = result.sub_assign(&other.residue);
        let _ = result.conditional_add(&P::MODULUS, borrow);
        Self { residue: result, _parameters: PhantomData }
    }

    /// Duplicación modular: (2 self) mod p.
    #[inline(always)]
    #[must_use]
    pub fn double_modular(&self) -> Self {
        self.add_modular(self)
    }

    /// Negación modular: (-self) mod p, con cero preservado.
    #[inline]
    #[must_use]
    pub fn negate_modular(&self) -> Self {
        let mut result = P::MODULUS;
        let _ = result.sub_assign(&self.residue);
        // p - 0 = p debe colapsar a cero para mantener la canonicidad.
        result.conditional_copy(&BigInt::ZERO, self.residue.is_zero());
        Self { residue: result, _parameters: PhantomData }
    }

    /// Multiplicación modular vía ciclo completo Montgomery.
    #[inline]
    #[must_use]
    pub fn multiply_modular(&self, other: &Self) -> Self {
        Self {
            residue: Self::montgomery_multiply(&self.residue, &other.residue),
            _parameters: PhantomData,
        }
    }

    /// Cuadrado modular.
    #[inline(always)]
    #[must_use]
    pub fn square_modular(&self) -> Self {
        self.multiply_modular(self)
    }

    /// Multiplicación por una palabra pequeña pública.
    #[must_use]
    pub fn multiply_by_word(&self, multiplier: Word) -> Self {
        self.multiply_modular(&Self::from_word(multiplier))
    }

    /// Mitad modular: (self / 2) mod p.
    #[inline]
    #[must_use]
    pub fn half_modular(&self) -> Self {
        let mut result = self.residue;
        result.half_modular(&P::MODULUS_PLUS_ONE_HALF);
        Self { residue: result, _parameters: PhantomData }
    }

    // --- OPERACIONES CONDICIONALES ---

    /// Copia condicional en tiempo constante.
    #[inline(always)]
    pub fn conditional_copy(&mut self, source: &Self, flag: SecretBool) {
        self.residue.conditional_copy(&source.residue, flag);
    }

    /// Intercambio condicional en tiempo constante.
    #[inline(always)]
    pub fn conditional_swap(left: &mut Self, right: &mut Self, flag: SecretBool) {
        BigInt::conditional_swap(&mut left.residue, &mut right.residue, flag);
    }

    /// Negación condicional en tiempo constante.
    #[inline]
    pub fn conditional_negate(&mut self, flag: SecretBool) {
        let negated = self.negate_modular();
        self.conditional_copy(&negated, flag);
    }

    /// Fija el residuo a cero si el selector es verdadero.
    #[inline]
    pub fn conditional_set_zero(&mut self, flag: SecretBool) {
        self.residue.conditional_copy(&BigInt::ZERO, flag);
    }

    /// Fija el residuo a uno si el selector es verdadero.
    #[inline]
    pub fn conditional_set_one(&mut self, flag: SecretBool) {
        self.residue.conditional_copy(&P::MONTY_ONE, flag);
    }

    // --- EXPONENCIACIÓN ---

    /**
     * Exponenciación de tiempo constante por ventana fija de 4 bits.
     *
     * La tabla de 16 potencias se recorre con copias enmascaradas en
     * cada ventana, de modo que el patrón de accesos es independiente
     * del exponente secreto.
     */
    #[must_use]
    pub fn pow<const E: usize>(&self, exponent: &BigInt<E>) -> Self {
        let mut table = [Self::one(); 16];
        for index in 1..16 {
            table[index] = table[index - 1].multiply_modular(self);
        }
        let mut result = Self::one();
        let total_windows = (E as u32) * WORD_BITS / 4;
        for window in (0..total_windows).rev() {
            for _ in 0..4 {
                result = result.square_modular();
            }
            let digit = (exponent.limbs[(window / 16) as usize] >> ((window % 16) * 4)) & 0xF;
            let mut factor = table[0];
            for index in 1..16 {
                factor.conditional_copy(&table[index], SecretBool::from_words_eq(digit, index as Word));
            }
            result = result.multiply_modular(&factor);
        }
        result
    }

    /**
     * Exponenciación pública (square-and-multiply). Reservada a
     * exponentes no secretos: parámetros de curva y vectores de prueba.
     */
    #[must_use]
    pub fn pow_vartime<const E: usize>(&self, exponent: &BigInt<E>) -> Self {
        let bit_length = exponent.bit_length_vartime();
        if bit_length == 0 {
            return Self::one();
        }
        let mut result = *self;
        for bit_index in (0..bit_length - 1).rev() {
            result = result.square_modular();
            if exponent.bit(bit_index) == 1 {
                result = result.multiply_modular(self);
            }
        }
        result
    }

    // --- INVERSIÓN ---

    /**
     * Inverso multiplicativo en tiempo constante; cero produce cero.
     *
     * # Mathematical Proof:
     * El GCD binario entrega (a R)^-1 = a^-1 R^-1 mod p. Dos productos
     * Montgomery por R^2 restauran el dominio: a^-1 R^-1 * R^2 * R^-1
     * * R^2 * R^-1 = a^-1 R.
     */
    #[must_use]
    pub fn invert(&self) -> Self {
        let raw_inverse = self.residue.modular_inverse_binary(
            &P::MODULUS,
            &P::MODULUS_PLUS_ONE_HALF,
            P::MODULUS_BITS,
        );
        let step = Self::montgomery_multiply(&raw_inverse, &P::MONTY_R2);
        Self {
            residue: Self::montgomery_multiply(&step, &P::MONTY_R2),
            _parameters: PhantomData,
        }
    }

    /**
     * Inversión por lote (truco de Montgomery): una única inversión
     * para toda la ráfaga, con scratch provisto por el llamador.
     *
     * Los ceros de la colección producen cero en la salida sin
     * contaminar al resto, manteniendo el contrato inv(0) = 0.
     */
    #[tracing::instrument(level = "trace", skip_all, fields(count = elements.len()))]
    pub fn batch_invert_into(
        elements: &[Self],
        results: &mut [Self],
        scratch: &mut [Self],
    ) {
        let count = elements.len();
        debug_assert!(results.len() >= count && scratch.len() >= count);
        if count == 0 {
            return;
        }
        let mut running_product = Self::one();
        for index in 0..count {
            // Los ceros se sustituyen por uno en el prefijo acumulado.
            let mut factor = elements[index];
            factor.conditional_set_one(factor.is_zero());
            running_product = running_product.multiply_modular(&factor);
            scratch[index] = running_product;
        }
        let mut inverse_accumulator = running_product.invert();
        for index in (1..count).rev() {
            let mut factor = elements[index];
            let was_zero = factor.is_zero();
            factor.conditional_set_one(was_zero);
            results[index] = inverse_accumulator.multiply_modular(&scratch[index - 1]);
            results[index].conditional_set_zero(was_zero);
            inverse_accumulator = inverse_accumulator.multiply_modular(&factor);
        }
        results[0] = inverse_accumulator;
        results[0].conditional_set_zero(elements[0].is_zero());
    }

    /**
     * Símbolo de Legendre vía el criterio de Euler a^((p-1)/2):
     * uno para los residuos cuadráticos, menos uno para los
     * no-residuos y cero para el cero.
     */
    #[must_use]
    pub fn legendre(&self) -> Self {
        let mut exponent = P::MODULUS_PLUS_ONE_HALF;
        let _ = exponent.sub_assign(&BigInt::one());
        self.pow(&exponent)
    }

    // --- RAÍZ CUADRADA ---

    /**
     * Raíz cuadrada con bandera: si el receptor es un residuo
     * cuadrático se sustituye por una de sus raíces y se retorna
     * verdadero; en caso contrario queda intacto y se retorna falso.
     *
     * Para p = 3 (mod 4) el candidato es a^((p+1)/4) y la verificación
     * final decide la bandera. Para los primos 2-ádicos se ejecuta
     * Tonelli-Shanks; su lazo de ajuste depende del residuo y queda
     * reservado a datos públicos (deserialización, hash-to-curve).
     */
    pub fn sqrt_if_square(&mut self) -> SecretBool {
        let candidate = if P::SQRT_IS_THREE_MOD_FOUR {
            self.pow(&P::SQRT_EXPONENT)
        } else {
            self.tonelli_shanks_candidate()
        };
        let is_root = candidate.square_modular().equals(self);
        self.conditional_copy(&candidate, is_root);
        is_root
    }

    /// Candidato de raíz por Tonelli-Shanks (primos con p = 1 mod 4).
    fn tonelli_shanks_candidate(&self) -> Self {
        let mut adjustment_exponent = P::TWO_ADICITY;
        let mut c = Self { residue: P::SQRT_TONELLI_C, _parameters: PhantomData };
        let mut t = self.pow(&P::SQRT_TONELLI_Q);
        let mut root = self.pow(&P::SQRT_EXPONENT);
        let one = Self::one();
        while !t.equals(&one).to_bool_vartime() && !t.is_zero().to_bool_vartime() {
            // Menor i con t^(2^i) = 1.
            let mut i = 0u32;
            let mut probe = t;
            while !probe.equals(&one).to_bool_vartime() && i < adjustment_exponent {
                probe = probe.square_modular();
                i += 1;
            }
            if i >= adjustment_exponent {
                // No-residuo: el candidato fallará la verificación final.
                break;
            }
            let mut b = c;
            for _ in 0..(adjustment_exponent - i - 1) {
                b = b.square_modular();
            }
            adjustment_exponent = i;
            c = b.square_modular();
            t = t.multiply_modular(&c);
            root = root.multiply_modular(&b);
        }
        root
    }

    // --- MUESTREO ---

    /**
     * Residuo uniforme desde un generador de aleatoriedad.
     *
     * Se muestrean 2N limbs y se reducen módulo p; el sesgo resultante
     * es del orden de 2^-(64 N), despreciable para los usos de prueba
     * y cegado que lo consumen.
     */
    #[must_use]
    pub fn random_uniform<R: rand::RngCore>(randomness_source: &mut R) -> Self {
        let mut wide = BigInt::<{ 2 * MAX_LIMBS }>::ZERO;
        for index in 0..(2 * N).min(2 * MAX_LIMBS) {
            wide.limbs[index] = randomness_source.next_u64();
        }
        let mut canonical = BigInt::ZERO;
        reduce_wide(&mut canonical, &wide, &P::MODULUS);
        Self::from_big_int(&canonical)
    }

    // --- MOTOR MONTGOMERY (REDC) ---

    /**
     * Producto Montgomery: a * b * R^-1 mod p sobre limbs crudos.
     */
    #[must_use]
    fn montgomery_multiply(left: &BigInt<N>, right: &BigInt<N>) -> BigInt<N> {
        let mut product_low = BigInt::<N>::ZERO;
        let mut product_high = BigInt::<N>::ZERO;
        // Multiplicación escolar con mitades (low, high) separadas.
        let mut wide = [0 as Word; 2 * MAX_LIMBS];
        for i in 0..N {
            let mut carry: Word = 0;
            for j in 0..N {
                let (high, low) = multiply_add_2(left.limbs[i], right.limbs[j], wide[i + j], carry);
                wide[i + j] = low;
                carry = high;
            }
            wide[i + N] = carry;
        }
        product_low.limbs[..N].copy_from_slice(&wide[..N]);
        product_high.limbs[..N].copy_from_slice(&wide[N..2 * N]);
        Self::montgomery_reduce(&product_low, &product_high)
    }

    /**
     * Reducción REDC del par (low, high) hacia un residuo canónico.
     *
     * # Mathematical Proof:
     * En cada pasada i se anula el limb i sumando m * p con
     * m = acc[i] * mu mod 2^64; tras N pasadas el acumulador es
     * divisible por R y su mitad alta vale (T + m p) / R < 2p. El limb
     * centinela 2N captura el posible desborde cuando p carece de bits
     * libres (secp256k1), y la sustracción final enmascarada restaura
     * la canonicidad.
     */
    #[must_use]
    fn montgomery_reduce(low: &BigInt<N>, high: &BigInt<N>) -> BigInt<N> {
        let mut accumulator = [0 as Word; 2 * MAX_LIMBS + 1];
        accumulator[..N].copy_from_slice(&low.limbs);
        accumulator[N..2 * N].copy_from_slice(&high.limbs);

        for i in 0..N {
            let multiplier = accumulator[i].wrapping_mul(P::MONTY_MU);
            let mut carry: Word = 0;
            for j in 0..N {
                let (high_word, low_word) =
                    multiply_add_2(multiplier, P::MODULUS.limbs[j], accumulator[i + j], carry);
                accumulator[i + j] = low_word;
                carry = high_word;
            }
            // Propagación del acarreo hasta el limb centinela, con
            // número de pasos independiente de los datos.
            for k in (i + N)..(2 * N + 1) {
                let (sum, next_carry) = add_with_carry(accumulator[k], carry, 0);
                accumulator[k] = sum;
                carry = next_carry;
            }
        }

        let mut result = BigInt::<N>::ZERO;
        result.limbs[..N].copy_from_slice(&accumulator[N..2 * N]);
        let sentinel = accumulator[2 * N];

        let mut reduced = result;
        let borrow = reduced.sub_assign(&P::MODULUS);
        let needs_reduction = SecretBool::from_bit(sentinel & 1).or(borrow.not());
        result.conditional_copy(&reduced, needs_reduction);
        result
    }
}
