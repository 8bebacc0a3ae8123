// [libs/core/math-engine/src/arithmetic.rs]
/*!
 * =================================================================
 * APARATO: WORD ARITHMETIC KERNEL (V31.0 - CONSTANT TIME SEALED)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: PRIMITIVAS DE PALABRA CON DISCIPLINA DE SECRETO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. SECRET DISCIPLINE: Toda operación condicional recibe un
 *    'SecretBool' y ejecuta tráfico de memoria idéntico para ambos
 *    valores del selector. Cero saltos dependientes de secretos.
 * 2. WIDE PRODUCTS: 'multiply_wide' y 'multiply_add_2' retornan el par
 *    (high, low) exacto del producto de 128 bits.
 * 3. NOMINAL PURITY: Erradicación total de abreviaciones.
 *
 * # Mathematical Proof (Carry Chains):
 * Para palabras de W bits, add_with_carry retorna (s, c) tales que
 * a + b + c_in = s + c * 2^W con s < 2^W y c en {0, 1}. La cadena de
 * acarreo es por lo tanto exacta sobre cualquier número de limbs.
 * =================================================================
 */

/// Palabra de máquina del motor multiprecisión (64 bits en todos los
/// objetivos soportados).
pub type Word = u64;

/// Palabra doble utilizada exclusivamente como acumulador interno.
pub type WideWord = u128;

/// Número de bits de una palabra.
pub const WORD_BITS: u32 = 64;

/// Cota superior de limbs soportada por los buffers de reducción internos.
/// Cubre módulos de hasta 384 bits (BLS12-381 Fp).
pub const MAX_LIMBS: usize = 6;

/**
 * Selector booleano con disciplina de tiempo constante.
 *
 * Representación interna: máscara de palabra completa (todo-unos para
 * verdadero, todo-ceros para falso). Las operaciones que lo consumen
 * nunca ramifican sobre su contenido.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretBool(Word);

impl SecretBool {
    /// Selector verdadero (máscara todo-unos).
    pub const TRUE: Self = Self(Word::MAX);
    /// Selector falso (máscara todo-ceros).
    pub const FALSE: Self = Self(0);

    /**
     * Construye el selector desde un bit {0, 1}.
     *
     * # Mathematical Proof:
     * La negación en complemento a dos de 0 es 0 y la de 1 es la
     * máscara todo-unos, sin ramificación alguna.
     */
    #[inline(always)]
    #[must_use]
    pub const fn from_bit(bit: Word) -> Self {
        Self((bit & 1).wrapping_neg())
    }

    /// Construye el selector "la palabra es cero" en tiempo constante.
    #[inline(always)]
    #[must_use]
    pub const fn from_word_is_zero(word: Word) -> Self {
        // (w | -w) tiene el bit alto encendido si y solo si w != 0.
        Self::from_bit(!((word | word.wrapping_neg()) >> (WORD_BITS - 1)) & 1)
    }

    /// Construye el selector "las palabras son iguales" en tiempo constante.
    #[inline(always)]
    #[must_use]
    pub const fn from_words_eq(left: Word, right: Word) -> Self {
        Self::from_word_is_zero(left ^ right)
    }

    /// Máscara de palabra completa asociada al selector.
    #[inline(always)]
    #[must_use]
    pub const fn mask(self) -> Word {
        self.0
    }

    /// Conjunción lógica sin ramificación.
    #[inline(always)]
    #[must_use]
    pub const fn and(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Disyunción lógica sin ramificación.
    #[inline(always)]
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Negación lógica sin ramificación.
    #[inline(always)]
    #[must_use]
    pub const fn not(self) -> Self {
        Self(!self.0)
    }

    /// Disyunción exclusiva sin ramificación.
    #[inline(always)]
    #[must_use]
    pub const fn xor(self, other: Self) -> Self {
        Self(self.0 ^ other.0)
    }

    /**
     * Desclasifica el selector hacia un bool nativo.
     *
     * Reservado para datos públicos (códigos de estado, validaciones de
     * deserialización). El sufijo lo señala explícitamente.
     */
    #[inline(always)]
    #[must_use]
    pub const fn to_bool_vartime(self) -> bool {
        self.0 != 0
    }

    /// Selección de palabra: retorna 'if_true' si el selector es verdadero.
    #[inline(always)]
    #[must_use]
    pub const fn select_word(self, if_true: Word, if_false: Word) -> Word {
        (if_true & self.0) | (if_false & !self.0)
    }
}

/// Palabra que transporta material secreto (acarreos, préstamos, dígitos
/// de escalares). Alias nominal: la disciplina la imponen los consumidores.
pub type SecretWord = Word;

/**
 * Adición con acarreo entrante: a + b + carry_in.
 *
 * Retorna (suma mod 2^64, acarreo saliente en {0, 1}).
 */
#[inline(always)]
#[must_use]
pub const fn add_with_carry(left: Word, right: Word, carry_in: Word) -> (Word, Word) {
    let wide = (left as WideWord) + (right as WideWord) + (carry_in as WideWord);
    (wide as Word, (wide >> WORD_BITS) as Word)
}

/**
 * Sustracción con préstamo entrante: a - b - borrow_in.
 *
 * Retorna (diferencia mod 2^64, préstamo saliente en {0, 1}).
 */
#[inline(always)]
#[must_use]
pub const fn sub_with_borrow(left: Word, right: Word, borrow_in: Word) -> (Word, Word) {
    let wide = (left as WideWord)
        .wrapping_sub(right as WideWord)
        .wrapping_sub(borrow_in as WideWord);
    (wide as Word, ((wide >> WORD_BITS) as Word) & 1)
}

/**
 * Producto de doble ancho: a * b.
 *
 * # Mathematical Proof:
 * Retorna (high, low) con a * b = high * 2^64 + low de forma exacta.
 */
#[inline(always)]
#[must_use]
pub const fn multiply_wide(left: Word, right: Word) -> (Word, Word) {
    let wide = (left as WideWord) * (right as WideWord);
    ((wide >> WORD_BITS) as Word, wide as Word)
}

/**
 * Producto con doble acumulación: a * b + addend + carry.
 *
 * # Mathematical Proof:
 * El resultado máximo es (2^64-1)^2 + 2*(2^64-1) = 2^128 - 1, por lo
 * que el par (high, low) nunca desborda la palabra doble.
 */
#[inline(always)]
#[must_use]
pub const fn multiply_add_2(left: Word, right: Word, addend: Word, carry: Word) -> (Word, Word) {
    let wide = (left as WideWord) * (right as WideWord)
        + (addend as WideWord)
        + (carry as WideWord);
    ((wide >> WORD_BITS) as Word, wide as Word)
}

/**
 * Copia condicional de palabra: destination recibe source si y solo si
 * el selector es verdadero, con tráfico de memoria idéntico en ambos casos.
 */
#[inline(always)]
pub fn conditional_copy_word(destination: &mut Word, source: Word, flag: SecretBool) {
    *destination = flag.select_word(source, *destination);
}

/**
 * Intercambio condicional de palabras en tiempo constante.
 */
#[inline(always)]
pub fn conditional_swap_words(left: &mut Word, right: &mut Word, flag: SecretBool) {
    let difference = (*left ^ *right) & flag.mask();
    *left ^= difference;
    *right ^= difference;
}
