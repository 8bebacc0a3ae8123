// [libs/core/math-engine/src/bigint.rs]
/*!
 * =================================================================
 * APARATO: LIMB VECTOR ENGINE (V44.0 - MULTIPRECISION SOVEREIGN)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: ENTEROS DE PRECISIÓN FIJA SOBRE LIMBS LITTLE-ENDIAN
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. CONST GENERIC STRATA: Un único tipo 'BigInt<N>' parametrizado por
 *    el número de limbs cubre los módulos de 254 a 384 bits.
 * 2. SECRET DISCIPLINE: Las operaciones condicionales consumen
 *    'SecretBool'; las variantes que ramifican sobre sus operandos
 *    llevan el sufijo '_vartime' y quedan reservadas a datos públicos.
 * 3. TRUNCATED PRODUCTS: 'multiply_high_words' acumula las columnas
 *    descartadas para propagar el acarreo exacto hacia el primer limb
 *    retenido.
 *
 * # Mathematical Proof (Canonical Form):
 * Un BigInt es canónico respecto de un módulo m cuando su valor
 * pertenece a [0, m). Toda operación modular de este módulo preserva
 * la canonicidad; las aritméticas crudas documentan su rango de salida.
 * =================================================================
 */

use crate::arithmetic::{
    add_with_carry, multiply_add_2, multiply_wide, sub_with_borrow, SecretBool, Word, WORD_BITS,
};
use crate::errors::MathError;
use serde::de::{Error as DeError, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Entero sin signo de precisión fija compuesto por N limbs de 64 bits
/// en orden Little-Endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BigInt<const N: usize> {
    /// Limbs Little-Endian: limbs[0] es la palabra menos significativa.
    pub limbs: [Word; N],
}

// `serde`'s blanket array impls only cover a fixed list of literal lengths,
// not an arbitrary const generic `N`, so `BigInt<N>` needs a manual
// (de)serialization impl that walks `limbs` as a tuple of length N.
impl<const N: usize> Serialize for BigInt<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tup = serializer.serialize_tuple(N)?;
        for limb in &self.limbs {
            tup.serialize_element(limb)?;
        }
        tup.end()
    }
}

impl<'de, const N: usize> Deserialize<'de> for BigInt<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BigIntVisitor<const N: usize>(PhantomData<[Word; N]>);

        impl<'de, const N: usize> Visitor<'de> for BigIntVisitor<N> {
            type Value = BigInt<N>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a tuple of {N} 64-bit limbs")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut limbs: [Word; N] = [0; N];
                for (i, limb) in limbs.iter_mut().enumerate() {
                    *limb = seq
                        .next_element()?
                        .ok_or_else(|| DeError::invalid_length(i, &self))?;
                }
                Ok(BigInt { limbs })
            }
        }

        deserializer.deserialize_tuple(N, BigIntVisitor(PhantomData))
    }
}

impl<const N: usize> Default for BigInt<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> BigInt<N> {
    /// Valor cero.
    pub const ZERO: Self = Self { limbs: [0; N] };

    /// Construye el entero desde sus limbs Little-Endian.
    #[inline(always)]
    #[must_use]
    pub const fn from_limbs(limbs: [Word; N]) -> Self {
        Self { limbs }
    }

    /// Construye el entero desde una palabra de 64 bits.
    #[must_use]
    pub const fn from_word(value: Word) -> Self {
        let mut limbs = [0; N];
        limbs[0] = value;
        Self { limbs }
    }

    /// Valor uno.
    #[must_use]
    pub const fn one() -> Self {
        Self::from_word(1)
    }

    // --- PREDICADOS DE TIEMPO CONSTANTE ---

    /// Selector "el entero es cero", sin ramificación.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> SecretBool {
        let mut accumulator: Word = 0;
        for limb in &self.limbs {
            accumulator |= *limb;
        }
        SecretBool::from_word_is_zero(accumulator)
    }

    /// Selector "el entero es par", sin ramificación.
    #[inline(always)]
    #[must_use]
    pub fn is_even(&self) -> SecretBool {
        SecretBool::from_bit((self.limbs[0] & 1) ^ 1)
    }

    /// Selector "el entero es impar", sin ramificación.
    #[inline(always)]
    #[must_use]
    pub fn is_odd(&self) -> SecretBool {
        SecretBool::from_bit(self.limbs[0] & 1)
    }

    /// Igualdad bit a bit en tiempo constante.
    #[inline]
    #[must_use]
    pub fn equals(&self, other: &Self) -> SecretBool {
        let mut accumulator: Word = 0;
        for index in 0..N {
            accumulator |= self.limbs[index] ^ other.limbs[index];
        }
        SecretBool::from_word_is_zero(accumulator)
    }

    /**
     * Selector "self < other" derivado de la cadena de préstamos.
     *
     * # Mathematical Proof:
     * self - other genera préstamo final si y solo si self < other.
     */
    #[inline]
    #[must_use]
    pub fn is_less_than(&self, other: &Self) -> SecretBool {
        let mut borrow: Word = 0;
        for index in 0..N {
            let (_, next_borrow) = sub_with_borrow(self.limbs[index], other.limbs[index], borrow);
            borrow = next_borrow;
        }
        SecretBool::from_bit(borrow)
    }

    /// Comparación pública (escaneo de alta significancia). Reservada a
    /// constantes y datos de deserialización.
    #[must_use]
    pub fn compare_vartime(&self, other: &Self) -> core::cmp::Ordering {
        for index in (0..N).rev() {
            if self.limbs[index] > other.limbs[index] {
                return core::cmp::Ordering::Greater;
            }
            if self.limbs[index] < other.limbs[index] {
                return core::cmp::Ordering::Less;
            }
        }
        core::cmp::Ordering::Equal
    }

    /// Bit en la posición dada (0 = LSB). El índice es público.
    #[inline(always)]
    #[must_use]
    pub fn bit(&self, index: u32) -> Word {
        (self.limbs[(index / WORD_BITS) as usize] >> (index % WORD_BITS)) & 1
    }

    /// Número de bits significativos (posición del bit más alto + 1).
    /// El operando se trata como público.
    #[must_use]
    pub fn bit_length_vartime(&self) -> u32 {
        for index in (0..N).rev() {
            if self.limbs[index] != 0 {
                return (index as u32) * WORD_BITS + (WORD_BITS - self.limbs[index].leading_zeros());
            }
        }
        0
    }

    // --- ARITMÉTICA CRUDA ---

    /// Adición in-place. Retorna el acarreo final como selector.
    #[inline]
    pub fn add_assign(&mut self, other: &Self) -> SecretBool {
        let mut carry: Word = 0;
        for index in 0..N {
            let (sum, next_carry) = add_with_carry(self.limbs[index], other.limbs[index], carry);
            self.limbs[index] = sum;
            carry = next_carry;
        }
        SecretBool::from_bit(carry)
    }

    /// Sustracción in-place. Retorna el préstamo final como selector.
    #[inline]
    pub fn sub_assign(&mut self, other: &Self) -> SecretBool {
        let mut borrow: Word = 0;
        for index in 0..N {
            let (difference, next_borrow) =
                sub_with_borrow(self.limbs[index], other.limbs[index], borrow);
            self.limbs[index] = difference;
            borrow = next_borrow;
        }
        SecretBool::from_bit(borrow)
    }

    // --- OPERACIONES CONDICIONALES (TIEMPO CONSTANTE) ---

    /**
     * Adición condicional: self += other si y solo si el selector es
     * verdadero. El tráfico de memoria es idéntico en ambos casos.
     */
    #[inline]
    pub fn conditional_add(&mut self, other: &Self, flag: SecretBool) -> SecretBool {
        let mask = flag.mask();
        let mut carry: Word = 0;
        for index in 0..N {
            let (sum, next_carry) =
                add_with_carry(self.limbs[index], other.limbs[index] & mask, carry);
            self.limbs[index] = sum;
            carry = next_carry;
        }
        SecretBool::from_bit(carry)
    }

    /// Sustracción condicional simétrica a 'conditional_add'.
    #[inline]
    pub fn conditional_subtract(&mut self, other: &Self, flag: SecretBool) -> SecretBool {
        let mask = flag.mask();
        let mut borrow: Word = 0;
        for index in 0..N {
            let (difference, next_borrow) =
                sub_with_borrow(self.limbs[index], other.limbs[index] & mask, borrow);
            self.limbs[index] = difference;
            borrow = next_borrow;
        }
        SecretBool::from_bit(borrow)
    }

    /**
     * Negación condicional en complemento a dos, in-place.
     *
     * # Mathematical Proof:
     * -x = (!x) + 1. Con el selector falso la máscara anula tanto la
     * inversión como el incremento, dejando el valor intacto.
     */
    #[inline]
    pub fn conditional_negate(&mut self, flag: SecretBool) {
        let mask = flag.mask();
        let mut carry: Word = mask & 1;
        for index in 0..N {
            let inverted = self.limbs[index] ^ mask;
            let (sum, next_carry) = add_with_carry(inverted, 0, carry);
            self.limbs[index] = sum;
            carry = next_carry;
        }
    }

    /// Copia condicional en tiempo constante.
    #[inline]
    pub fn conditional_copy(&mut self, source: &Self, flag: SecretBool) {
        let mask = flag.mask();
        for index in 0..N {
            self.limbs[index] = (source.limbs[index] & mask) | (self.limbs[index] & !mask);
        }
    }

    /// Intercambio condicional en tiempo constante.
    #[inline]
    pub fn conditional_swap(left: &mut Self, right: &mut Self, flag: SecretBool) {
        let mask = flag.mask();
        for index in 0..N {
            let difference = (left.limbs[index] ^ right.limbs[index]) & mask;
            left.limbs[index] ^= difference;
            right.limbs[index] ^= difference;
        }
    }

    // --- DESPLAZAMIENTOS ---

    /**
     * Desplazamiento lógico a la derecha por k bits, in-place.
     * La magnitud k es pública; debe cumplir k < N * 64.
     */
    pub fn shift_right(&mut self, shift: u32) {
        let word_shift = (shift / WORD_BITS) as usize;
        let bit_shift = shift % WORD_BITS;
        for index in 0..N {
            let low_source = index + word_shift;
            let mut limb = if low_source < N { self.limbs[low_source] } else { 0 };
            if bit_shift != 0 {
                limb >>= bit_shift;
                let high_source = low_source + 1;
                if high_source < N {
                    limb |= self.limbs[high_source] << (WORD_BITS - bit_shift);
                }
            }
            self.limbs[index] = limb;
        }
    }

    /// Desplazamiento a la derecha por exactamente un bit, en tiempo
    /// constante respecto del contenido.
    #[inline]
    pub fn shift_right_one(&mut self) {
        for index in 0..N {
            let mut limb = self.limbs[index] >> 1;
            if index + 1 < N {
                limb |= self.limbs[index + 1] << (WORD_BITS - 1);
            }
            self.limbs[index] = limb;
        }
    }

    // --- PRODUCTOS ---

    /**
     * Producto truncado bajo: (self * other) mod 2^(64 N).
     * Requerido por la descomposición de escalares en aritmética
     * envolvente (complemento a dos).
     */
    #[must_use]
    pub fn multiply_low(&self, other: &Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..N {
            let mut carry: Word = 0;
            for j in 0..(N - i) {
                let (high, low) =
                    multiply_add_2(self.limbs[i], other.limbs[j], result.limbs[i + j], carry);
                result.limbs[i + j] = low;
                carry = high;
            }
        }
        result
    }

    /**
     * Mitad modular: (self / 2) mod modulus, para módulo impar.
     *
     * # Mathematical Proof:
     * Si x es par el resultado es x >> 1. Si x es impar, (x + m) / 2 =
     * (x >> 1) + (m + 1) / 2 sin desborde, pues x < m.
     */
    #[inline]
    pub fn half_modular(&mut self, modulus_plus_one_half: &Self) {
        let was_odd = self.is_odd();
        self.shift_right_one();
        let _ = self.conditional_add(modulus_plus_one_half, was_odd);
    }

    /**
     * Sustracción modular envolvente: (self - other) mod modulus.
     * Ambos operandos deben ser canónicos respecto del módulo.
     */
    #[inline]
    pub fn sub_modular(&mut self, other: &Self, modulus: &Self) {
        let borrow = self.sub_assign(other);
        let _ = self.conditional_add(modulus, borrow);
    }

    /**
     * Inverso modular por GCD extendido binario con número fijo de
     * iteraciones (2 * modulus_bits), sin ramas dependientes de datos.
     *
     * Retorna a^-1 mod m, o cero cuando gcd(a, m) != 1 (convención
     * requerida por la inversión en las torres de extensión). El módulo
     * debe ser impar; (m + 1) / 2 se suministra precomputado para
     * evitar divisiones internas.
     *
     * # Mathematical Proof:
     * Invariantes u = x1 * a (mod m) y v = x2 * a (mod m). Cada
     * iteración reduce u + v al menos en un factor 2/3, por lo que
     * 2 * bits iteraciones colapsan el par a (gcd, 0).
     */
    #[must_use]
    pub fn modular_inverse_binary(
        &self,
        modulus: &Self,
        modulus_plus_one_half: &Self,
        modulus_bits: u32,
    ) -> Self {
        let mut u = *modulus;
        let mut v = *self;
        let mut x1 = Self::ZERO;
        let mut x2 = Self::one();

        for _ in 0..(2 * modulus_bits) {
            let v_even = v.is_even();
            let u_even = u.is_even().and(v_even.not());

            // v - u y u - v con sus préstamos, siempre computados.
            let mut v_minus_u = v;
            let v_borrow = v_minus_u.sub_assign(&u);
            let mut u_minus_v = u;
            let _ = u_minus_v.sub_assign(&v);

            let both_odd = v_even.not().and(u_even.not());
            let case_v_ge_u = both_odd.and(v_borrow.not());
            let case_v_lt_u = both_odd.and(v_borrow);

            // Rama v: o bien se halva v, o bien (v - u) / 2.
            let mut v_next = v;
            v_next.conditional_copy(&v_minus_u, case_v_ge_u);
            let mut v_half = v_next;
            v_half.shift_right_one();
            v_next.conditional_copy(&v_half, v_even.or(case_v_ge_u));
            // Rama u simétrica.
            let mut u_next = u;
            u_next.conditional_copy(&u_minus_v, case_v_lt_u);
            let mut u_half = u_next;
            u_half.shift_right_one();
            u_next.conditional_copy(&u_half, u_even.or(case_v_lt_u));

            // Coeficientes x2 / x1 espejando las ramas.
            let mut x2_sub = x2;
            x2_sub.sub_modular(&x1, modulus);
            let mut x2_next = x2;
            x2_next.conditional_copy(&x2_sub, case_v_ge_u);
            let mut x2_half = x2_next;
            x2_half.half_modular(modulus_plus_one_half);
            x2_next.conditional_copy(&x2_half, v_even.or(case_v_ge_u));

            let mut x1_sub = x1;
            x1_sub.sub_modular(&x2, modulus);
            let mut x1_next = x1;
            x1_next.conditional_copy(&x1_sub, case_v_lt_u);
            let mut x1_half = x1_next;
            x1_half.half_modular(modulus_plus_one_half);
            x1_next.conditional_copy(&x1_half, u_even.or(case_v_lt_u));

            u = u_next;
            v = v_next;
            x1 = x1_next;
            x2 = x2_next;
        }

        let one = Self::one();
        let mut result = Self::ZERO;
        result.conditional_copy(&x2, v.equals(&one));
        result.conditional_copy(&x1, u.equals(&one));
        result
    }

    // --- SERIALIZACIÓN ---

    /**
     * Vuelca el entero como bytes Big-Endian sobre el buffer destino.
     * El buffer debe tener capacidad para el valor; los bytes altos
     * excedentes se rellenan con cero.
     */
    pub fn write_bytes_be(&self, output: &mut [u8]) {
        let length = output.len();
        for byte in output.iter_mut() {
            *byte = 0;
        }
        for byte_index in 0..(N * 8).min(length) {
            let limb = self.limbs[byte_index / 8];
            output[length - 1 - byte_index] = (limb >> ((byte_index % 8) * 8)) as u8;
        }
    }

    /// Vuelca el entero como bytes Little-Endian sobre el buffer destino.
    pub fn write_bytes_le(&self, output: &mut [u8]) {
        let length = output.len();
        for byte in output.iter_mut() {
            *byte = 0;
        }
        for byte_index in 0..(N * 8).min(length) {
            output[byte_index] = (self.limbs[byte_index / 8] >> ((byte_index % 8) * 8)) as u8;
        }
    }

    /**
     * Reconstruye el entero desde bytes Big-Endian.
     *
     * # Errors:
     * 'MathError::InputExceedsCapacity' si el valor no cabe en N limbs.
     */
    pub fn read_bytes_be(input: &[u8]) -> Result<Self, MathError> {
        let mut result = Self::ZERO;
        for (byte_index, byte) in input.iter().rev().enumerate() {
            if *byte != 0 && byte_index >= N * 8 {
                return Err(MathError::InputExceedsCapacity {
                    capacity_bits: (N as u32) * WORD_BITS,
                });
            }
            if byte_index < N * 8 {
                result.limbs[byte_index / 8] |= (*byte as Word) << ((byte_index % 8) * 8);
            }
        }
        Ok(result)
    }

    /// Reconstruye el entero desde bytes Little-Endian.
    pub fn read_bytes_le(input: &[u8]) -> Result<Self, MathError> {
        let mut result = Self::ZERO;
        for (byte_index, byte) in input.iter().enumerate() {
            if *byte != 0 && byte_index >= N * 8 {
                return Err(MathError::InputExceedsCapacity {
                    capacity_bits: (N as u32) * WORD_BITS,
                });
            }
            if byte_index < N * 8 {
                result.limbs[byte_index / 8] |= (*byte as Word) << ((byte_index % 8) * 8);
            }
        }
        Ok(result)
    }

    /**
     * Decodifica una cadena hexadecimal pública. Tolera el prefijo '0x'
     * y separadores '_' de legibilidad.
     *
     * # Errors:
     * 'MathError::InvalidHexInput' ante dígitos ilegales;
     * 'MathError::InputExceedsCapacity' si el valor no cabe en N limbs.
     */
    pub fn from_hex_vartime(hexadecimal_input: &str) -> Result<Self, MathError> {
        let stripped = hexadecimal_input
            .strip_prefix("0x")
            .or_else(|| hexadecimal_input.strip_prefix("0X"))
            .unwrap_or(hexadecimal_input);
        let mut result = Self::ZERO;
        let mut nibble_count = 0usize;
        for character in stripped.chars() {
            if character == '_' {
                continue;
            }
            let nibble = character.to_digit(16).ok_or_else(|| MathError::InvalidHexInput {
                offending: character,
            })? as Word;
            // Desplazamiento de 4 bits con detección de desborde.
            if result.limbs[N - 1] >> (WORD_BITS - 4) != 0 {
                return Err(MathError::InputExceedsCapacity {
                    capacity_bits: (N as u32) * WORD_BITS,
                });
            }
            for index in (0..N).rev() {
                let carry_in = if index == 0 { nibble } else { self_shift_nibble(result.limbs[index - 1]) };
                result.limbs[index] = (result.limbs[index] << 4) | carry_in;
            }
            nibble_count += 1;
        }
        if nibble_count == 0 {
            return Err(MathError::InvalidHexInput { offending: ' ' });
        }
        Ok(result)
    }

    /**
     * Decodifica hexadecimal y rechaza valores fuera de [0, modulus).
     *
     * # Errors:
     * 'MathError::ValueAboveModulus' cuando el valor decodificado es
     * mayor o igual al módulo suministrado.
     */
    pub fn from_hex_checked_vartime(
        hexadecimal_input: &str,
        modulus: &Self,
    ) -> Result<Self, MathError> {
        let decoded = Self::from_hex_vartime(hexadecimal_input)?;
        if decoded.compare_vartime(modulus) != core::cmp::Ordering::Less {
            return Err(MathError::ValueAboveModulus);
        }
        Ok(decoded)
    }

    /// Codificación hexadecimal Big-Endian con prefijo '0x'.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let mut buffer = vec![0u8; N * 8];
        self.write_bytes_be(&mut buffer);
        format!("0x{}", hex::encode(buffer))
    }
}

/// Nibble más significativo de la palabra, para el desplazamiento hex.
#[inline(always)]
const fn self_shift_nibble(limb: Word) -> Word {
    limb >> (WORD_BITS - 4)
}

// =================================================================
// PRODUCTOS CRUZADOS ENTRE ANCHOS DISTINTOS
// =================================================================

/**
 * Multiplicación escolar completa: out = a * b.
 *
 * El destino se rellena con ceros por encima de la longitud natural del
 * producto. Las columnas que exceden la capacidad R se descartan; los
 * llamadores dimensionan R = A + B para el producto exacto.
 */
pub fn multiply_full<const A: usize, const B: usize, const R: usize>(
    output: &mut BigInt<R>,
    left: &BigInt<A>,
    right: &BigInt<B>,
) {
    *output = BigInt::ZERO;
    for i in 0..A {
        let mut carry: Word = 0;
        for j in 0..B {
            if i + j < R {
                let (high, low) =
                    multiply_add_2(left.limbs[i], right.limbs[j], output.limbs[i + j], carry);
                output.limbs[i + j] = low;
                carry = high;
            }
        }
        if i + B < R {
            output.limbs[i + B] = carry;
        }
    }
}

/**
 * Multiplicación truncada alta: out = (a * b) >> (64 * start_word).
 *
 * # Mathematical Proof:
 * Se recorren todas las columnas del producto en orden (Comba), de modo
 * que el acarreo generado por las columnas descartadas se propaga
 * exactamente hacia el primer limb retenido. El resultado es el cociente
 * exacto del producto por 2^(64 * start_word).
 */
pub fn multiply_high_words<const A: usize, const B: usize, const R: usize>(
    output: &mut BigInt<R>,
    left: &BigInt<A>,
    right: &BigInt<B>,
    start_word: usize,
) {
    *output = BigInt::ZERO;
    // Acumulador de columna de tres palabras (Comba).
    let mut column_low: Word = 0;
    let mut column_mid: Word = 0;
    let mut column_high: Word = 0;
    for column in 0..(A + B - 1) {
        let lower = if column >= B { column - (B - 1) } else { 0 };
        let upper = if column < A { column } else { A - 1 };
        for i in lower..=upper {
            let (high, low) = multiply_wide(left.limbs[i], right.limbs[column - i]);
            let (sum_low, carry_low) = add_with_carry(column_low, low, 0);
            column_low = sum_low;
            let (sum_mid, carry_mid) = add_with_carry(column_mid, high, carry_low);
            column_mid = sum_mid;
            column_high = column_high.wrapping_add(carry_mid);
        }
        if column >= start_word && column - start_word < R {
            output.limbs[column - start_word] = column_low;
        }
        column_low = column_mid;
        column_mid = column_high;
        column_high = 0;
    }
    // Palabra superior del producto (columna A + B - 1).
    let top_column = A + B - 1;
    if top_column >= start_word && top_column - start_word < R {
        output.limbs[top_column - start_word] = column_low;
    }
}

/**
 * Reducción en tiempo constante de un entero ancho módulo m.
 *
 * # Mathematical Proof:
 * Barrido bit a bit de alta a baja significancia manteniendo el
 * invariante 0 <= r < m: r' = 2r + bit seguido de la sustracción
 * condicional de m. El número de iteraciones depende solo de los anchos.
 */
pub fn reduce_wide<const W: usize, const N: usize>(
    output: &mut BigInt<N>,
    wide_input: &BigInt<W>,
    modulus: &BigInt<N>,
) {
    *output = BigInt::ZERO;
    for bit_index in (0..(W as u32) * WORD_BITS).rev() {
        // r = 2r + bit, con el posible desborde capturado en 'carry'.
        let mut carry: Word = 0;
        for index in 0..N {
            let limb = output.limbs[index];
            output.limbs[index] = (limb << 1) | carry;
            carry = limb >> (WORD_BITS - 1);
        }
        output.limbs[0] |= wide_input.bit(bit_index);
        // Si hubo desborde o r >= m, se resta m.
        let ge_modulus = output.is_less_than(modulus).not().or(SecretBool::from_bit(carry));
        let _ = output.conditional_subtract(modulus, ge_modulus);
    }
}
