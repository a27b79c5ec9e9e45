//! Character classification.
//!
//! Every character read by the scanner is tagged with exactly one
//! [`CharClass`]. The scan loop branches on the class of the current
//! character only, never on the character itself (except for the `#t`/`#f`
//! suffix check).

/// The class of the most recently read character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// An alphabetic character.
    Letter,
    /// A decimal digit from any script (general category Nd).
    Digit,
    /// A whitespace character other than a no-break space.
    Whitespace,
    /// `'`
    Quote,
    /// `"`
    StringQuote,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `#`
    Hash,
    /// The end-of-input sentinel.
    EndOfInput,
    /// Anything else.
    OtherPrintable,
}

impl CharClass {
    /// Classifies a character, `None` being end of input.
    ///
    /// # Example
    ///
    /// ```
    /// use schlex_lex::CharClass;
    ///
    /// assert_eq!(CharClass::of(Some('a')), CharClass::Letter);
    /// assert_eq!(CharClass::of(Some('7')), CharClass::Digit);
    /// assert_eq!(CharClass::of(None), CharClass::EndOfInput);
    /// assert_eq!(CharClass::of(Some('+')), CharClass::OtherPrintable);
    /// ```
    pub fn of(c: Option<char>) -> Self {
        match c {
            None => CharClass::EndOfInput,
            Some(c) if c.is_alphabetic() => CharClass::Letter,
            Some(c) if is_decimal_digit(c) => CharClass::Digit,
            Some(c) if is_separator(c) => CharClass::Whitespace,
            Some('\'') => CharClass::Quote,
            Some('"') => CharClass::StringQuote,
            Some('(') => CharClass::LParen,
            Some(')') => CharClass::RParen,
            Some('#') => CharClass::Hash,
            Some(_) => CharClass::OtherPrintable,
        }
    }

    /// Returns true for classes that may continue a name or keyword.
    #[inline]
    pub fn is_identifier_continue(self) -> bool {
        matches!(
            self,
            CharClass::Letter | CharClass::Digit | CharClass::OtherPrintable
        )
    }
}

/// First code point of every run of ten decimal digits (Unicode 15.0, Nd).
const DECIMAL_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6,
    0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// Returns true for decimal digits of any script.
///
/// `char::is_numeric` is wider than this: it also accepts fractions,
/// superscripts and letter-like numerals such as `½`, `²` and `Ⅻ`.
pub fn is_decimal_digit(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    let c = c as u32;
    match DECIMAL_ZEROS.partition_point(|&zero| zero <= c) {
        0 => false,
        i => c - DECIMAL_ZEROS[i - 1] < 10,
    }
}

/// Returns true for characters that separate lexemes.
///
/// Unicode whitespace, less the no-break spaces and `U+0085`, plus the
/// ASCII information separators `U+001C..=U+001F`.
pub fn is_separator(c: char) -> bool {
    match c {
        '\u{1c}'..='\u{1f}' => true,
        '\u{85}' | '\u{a0}' | '\u{2007}' | '\u{202f}' => false,
        c => c.is_whitespace(),
    }
}
