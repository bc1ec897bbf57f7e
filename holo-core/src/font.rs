//! Fourteen-segment font for printable ASCII

/// Number of segments in a glyph
pub const SEGMENT_COUNT: usize = 14;

/// First character code covered by the font table (space)
pub const ASCII_OFFSET: u32 = 32;

/// Number of consecutive character codes covered, `' '..=DEL`
pub const SUPPORTED_CHARS: usize = 96;

/// Which of the fourteen segments are lit for a character.
///
/// Bit `i` set means segment `i` is drawn. Segments are lettered
/// A, B, C, D, E, F, G1, G2, H, I, J, K, L, M for bits 0 through 13.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SegmentMask(u16);

impl SegmentMask {
    /// All segments off
    pub const BLANK: SegmentMask = SegmentMask(0);

    pub const fn from_bits(bits: u16) -> Self {
        Self(bits & 0x3FFF)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub fn is_blank(self) -> bool {
        self.0 == 0
    }

    pub fn is_active(self, segment: usize) -> bool {
        segment < SEGMENT_COUNT && (self.0 >> segment) & 1 == 1
    }

    /// Number of lit segments
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Indices of the lit segments in ascending order
    pub fn active_segments(self) -> impl Iterator<Item = usize> {
        (0..SEGMENT_COUNT).filter(move |&i| self.is_active(i))
    }
}

// Indexed by `code - ASCII_OFFSET`. Adapted from Dave Madison's LED-Segment-ASCII.
const FOURTEEN_SEGMENT_ASCII: [u16; SUPPORTED_CHARS] = [
    0b00000000000000, 0b10000000000110, 0b00001000000010, 0b01001011001110, 0b01001011101101, 0b11111111100100, 0b10001101011001, 0b00001000000000,
    0b10010000000000, 0b00100100000000, 0b11111111000000, 0b01001011000000, 0b00100000000000, 0b00000011000000, 0b10000000000000, 0b00110000000000,
    0b00110000111111, 0b00010000000110, 0b00000011011011, 0b00000010001111, 0b00000011100110, 0b10000001101001, 0b00000011111101, 0b00000000000111,
    0b00000011111111, 0b00000011101111, 0b01001000000000, 0b00101000000000, 0b10010001000000, 0b00000011001000, 0b00100110000000, 0b11000010000011,
    0b00001010111011, 0b00000011110111, 0b01001010001111, 0b00000000111001, 0b01001000001111, 0b00000001111001, 0b00000001110001, 0b00000010111101,
    0b00000011110110, 0b01001000001001, 0b00000000011110, 0b10010001110000, 0b00000000111000, 0b00010100110110, 0b10000100110110, 0b00000000111111,
    0b00000011110011, 0b10000000111111, 0b10000011110011, 0b00000011101101, 0b01001000000001, 0b00000000111110, 0b00110000110000, 0b10100000110110,
    0b10110100000000, 0b00000011101110, 0b00110000001001, 0b00000000111001, 0b10000100000000, 0b00000000001111, 0b10100000000000, 0b00000000001000,
    0b00000100000000, 0b01000001011000, 0b10000001111000, 0b00000011011000, 0b00100010001110, 0b00100001011000, 0b01010011000000, 0b00010010001110,
    0b01000001110000, 0b01000000000000, 0b00101000010000, 0b11011000000000, 0b00000000110000, 0b01000011010100, 0b01000001010000, 0b00000011011100,
    0b00000101110000, 0b00010010000110, 0b00000001010000, 0b10000010001000, 0b00000001111000, 0b00000000011100, 0b00100000010000, 0b10100000010100,
    0b10110100000000, 0b00001010001110, 0b00100001001000, 0b00100101001001, 0b01001000000000, 0b10010010001001, 0b00110011000000, 0b00000000000000,
];

/// Look up the segment mask for a character.
///
/// Anything outside `' '..=DEL` renders as a space.
pub fn segment_mask(c: char) -> SegmentMask {
    let index = (c as u32).wrapping_sub(ASCII_OFFSET) as usize;
    FOURTEEN_SEGMENT_ASCII
        .get(index)
        .map_or(SegmentMask::BLANK, |&bits| SegmentMask::from_bits(bits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_is_blank() {
        for c in ['\0', '\n', '\t', '\u{1f}', '\u{80}', 'é', '€', '🦀'] {
            assert_eq!(segment_mask(c), SegmentMask::BLANK, "{c:?}");
        }
    }

    #[test]
    fn test_space_and_del_are_blank() {
        assert!(segment_mask(' ').is_blank());
        assert!(segment_mask('\u{7f}').is_blank());
    }

    #[test]
    fn test_digits() {
        assert_eq!(segment_mask('8').bits(), 0b00000011111111);
        assert_eq!(segment_mask('0').bits(), 0b00110000111111);
        assert_eq!(segment_mask('1').bits(), 0b00010000000110);
        // Eight uses the full outline plus both crossbars
        assert_eq!(segment_mask('8').count(), 8);
    }

    #[test]
    fn test_letters() {
        assert_eq!(segment_mask('A').bits(), 0b00000011110111);
        assert_eq!(segment_mask('X').bits(), 0b10110100000000);
        assert_eq!(segment_mask('~').bits(), 0b00110011000000);
    }

    #[test]
    fn test_active_segments() {
        let mask = SegmentMask::from_bits(0b10000000000101);
        let active: Vec<usize> = mask.active_segments().collect();
        assert_eq!(active, vec![0, 2, 13]);
        assert!(!mask.is_active(14));
    }

    #[test]
    fn test_every_printable_char_has_entry() {
        let lit = (' '..='~').filter(|&c| !segment_mask(c).is_blank()).count();
        // Only the space itself is blank in the printable range
        assert_eq!(lit, SUPPORTED_CHARS - 2);
    }
}
