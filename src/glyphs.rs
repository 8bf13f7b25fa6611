//! 5x7 glyph bitmaps
//!
//! One entry per character code, five columns each. Bit 7 of a column byte is
//! the top pixel of the page, bit 0 the bottom one.

/// Glyph table for codes `0x00..=0xFE`
pub(crate) const GLYPHS: [[u8; 5]; 255] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x00
    [0x7C, 0xDA, 0xF2, 0xDA, 0x7C], // 0x01
    [0x7C, 0xD6, 0xF2, 0xD6, 0x7C], // 0x02
    [0x38, 0x7C, 0x3E, 0x7C, 0x38], // 0x03
    [0x18, 0x3C, 0x7E, 0x3C, 0x18], // 0x04
    [0x38, 0xEA, 0xBE, 0xEA, 0x38], // 0x05
    [0x38, 0x7A, 0xFE, 0x7A, 0x38], // 0x06
    [0x00, 0x18, 0x3C, 0x18, 0x00], // 0x07
    [0xFF, 0xE7, 0xC3, 0xE7, 0xFF], // 0x08
    [0x00, 0x18, 0x24, 0x18, 0x00], // 0x09
    [0xFF, 0xE7, 0xDB, 0xE7, 0xFF], // 0x0A
    [0x0C, 0x12, 0x5C, 0x60, 0x70], // 0x0B
    [0x64, 0x94, 0x9E, 0x94, 0x64], // 0x0C
    [0x02, 0xFE, 0xA0, 0xA0, 0xE0], // 0x0D
    [0x02, 0xFE, 0xA0, 0xA4, 0xFC], // 0x0E
    [0x5A, 0x3C, 0xE7, 0x3C, 0x5A], // 0x0F
    [0xFE, 0x7C, 0x38, 0x38, 0x10], // 0x10
    [0x10, 0x38, 0x38, 0x7C, 0xFE], // 0x11
    [0x28, 0x44, 0xFE, 0x44, 0x28], // 0x12
    [0xFA, 0xFA, 0x00, 0xFA, 0xFA], // 0x13
    [0x60, 0x90, 0xFE, 0x80, 0xFE], // 0x14
    [0x00, 0x66, 0x91, 0xA9, 0x56], // 0x15
    [0x06, 0x06, 0x06, 0x06, 0x06], // 0x16
    [0x29, 0x45, 0xFF, 0x45, 0x29], // 0x17
    [0x10, 0x20, 0x7E, 0x20, 0x10], // 0x18
    [0x08, 0x04, 0x7E, 0x04, 0x08], // 0x19
    [0x10, 0x10, 0x54, 0x38, 0x10], // 0x1A
    [0x10, 0x38, 0x54, 0x10, 0x10], // 0x1B
    [0x78, 0x08, 0x08, 0x08, 0x08], // 0x1C
    [0x30, 0x78, 0x30, 0x78, 0x30], // 0x1D
    [0x0C, 0x1C, 0x7C, 0x1C, 0x0C], // 0x1E
    [0x60, 0x70, 0x7C, 0x70, 0x60], // 0x1F
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x20
    [0x00, 0x00, 0xFA, 0x00, 0x00], // 0x21 '!'
    [0x00, 0xE0, 0x00, 0xE0, 0x00], // 0x22 '"'
    [0x28, 0xFE, 0x28, 0xFE, 0x28], // 0x23 '#'
    [0x24, 0x54, 0xFE, 0x54, 0x48], // 0x24 '$'
    [0xC4, 0xC8, 0x10, 0x26, 0x46], // 0x25 '%'
    [0x6C, 0x92, 0x6A, 0x04, 0x0A], // 0x26 '&'
    [0x00, 0x10, 0xE0, 0xC0, 0x00], // 0x27 '\''
    [0x00, 0x38, 0x44, 0x82, 0x00], // 0x28 '('
    [0x00, 0x82, 0x44, 0x38, 0x00], // 0x29 ')'
    [0x54, 0x38, 0xFE, 0x38, 0x54], // 0x2A '*'
    [0x10, 0x10, 0x7C, 0x10, 0x10], // 0x2B '+'
    [0x00, 0x01, 0x0E, 0x0C, 0x00], // 0x2C ','
    [0x10, 0x10, 0x10, 0x10, 0x10], // 0x2D '-'
    [0x00, 0x00, 0x06, 0x06, 0x00], // 0x2E '.'
    [0x04, 0x08, 0x10, 0x20, 0x40], // 0x2F '/'
    [0x7C, 0x8A, 0x92, 0xA2, 0x7C], // 0x30 '0'
    [0x00, 0x42, 0xFE, 0x02, 0x00], // 0x31 '1'
    [0x4E, 0x92, 0x92, 0x92, 0x62], // 0x32 '2'
    [0x84, 0x82, 0x92, 0xB2, 0xCC], // 0x33 '3'
    [0x18, 0x28, 0x48, 0xFE, 0x08], // 0x34 '4'
    [0xE4, 0xA2, 0xA2, 0xA2, 0x9C], // 0x35 '5'
    [0x3C, 0x52, 0x92, 0x92, 0x8C], // 0x36 '6'
    [0x82, 0x84, 0x88, 0x90, 0xE0], // 0x37 '7'
    [0x6C, 0x92, 0x92, 0x92, 0x6C], // 0x38 '8'
    [0x62, 0x92, 0x92, 0x94, 0x78], // 0x39 '9'
    [0x00, 0x00, 0x28, 0x00, 0x00], // 0x3A ':'
    [0x00, 0x02, 0x2C, 0x00, 0x00], // 0x3B ';'
    [0x00, 0x10, 0x28, 0x44, 0x82], // 0x3C '<'
    [0x28, 0x28, 0x28, 0x28, 0x28], // 0x3D '='
    [0x00, 0x82, 0x44, 0x28, 0x10], // 0x3E '>'
    [0x40, 0x80, 0x9A, 0x90, 0x60], // 0x3F '?'
    [0x7C, 0x82, 0xBA, 0x9A, 0x72], // 0x40 '@'
    [0x3E, 0x48, 0x88, 0x48, 0x3E], // 0x41 'A'
    [0xFE, 0x92, 0x92, 0x92, 0x6C], // 0x42 'B'
    [0x7C, 0x82, 0x82, 0x82, 0x44], // 0x43 'C'
    [0xFE, 0x82, 0x82, 0x82, 0x7C], // 0x44 'D'
    [0xFE, 0x92, 0x92, 0x92, 0x82], // 0x45 'E'
    [0xFE, 0x90, 0x90, 0x90, 0x80], // 0x46 'F'
    [0x7C, 0x82, 0x82, 0x8A, 0xCE], // 0x47 'G'
    [0xFE, 0x10, 0x10, 0x10, 0xFE], // 0x48 'H'
    [0x00, 0x82, 0xFE, 0x82, 0x00], // 0x49 'I'
    [0x04, 0x02, 0x82, 0xFC, 0x80], // 0x4A 'J'
    [0xFE, 0x10, 0x28, 0x44, 0x82], // 0x4B 'K'
    [0xFE, 0x02, 0x02, 0x02, 0x02], // 0x4C 'L'
    [0xFE, 0x40, 0x38, 0x40, 0xFE], // 0x4D 'M'
    [0xFE, 0x20, 0x10, 0x08, 0xFE], // 0x4E 'N'
    [0x7C, 0x82, 0x82, 0x82, 0x7C], // 0x4F 'O'
    [0xFE, 0x90, 0x90, 0x90, 0x60], // 0x50 'P'
    [0x7C, 0x82, 0x8A, 0x84, 0x7A], // 0x51 'Q'
    [0xFE, 0x90, 0x98, 0x94, 0x62], // 0x52 'R'
    [0x64, 0x92, 0x92, 0x92, 0x4C], // 0x53 'S'
    [0xC0, 0x80, 0xFE, 0x80, 0xC0], // 0x54 'T'
    [0xFC, 0x02, 0x02, 0x02, 0xFC], // 0x55 'U'
    [0xF8, 0x04, 0x02, 0x04, 0xF8], // 0x56 'V'
    [0xFC, 0x02, 0x1C, 0x02, 0xFC], // 0x57 'W'
    [0xC6, 0x28, 0x10, 0x28, 0xC6], // 0x58 'X'
    [0xC0, 0x20, 0x1E, 0x20, 0xC0], // 0x59 'Y'
    [0x86, 0x9A, 0x92, 0xB2, 0xC2], // 0x5A 'Z'
    [0x00, 0xFE, 0x82, 0x82, 0x82], // 0x5B '['
    [0x40, 0x20, 0x10, 0x08, 0x04], // 0x5C '\\'
    [0x00, 0x82, 0x82, 0x82, 0xFE], // 0x5D ']'
    [0x20, 0x40, 0x80, 0x40, 0x20], // 0x5E '^'
    [0x02, 0x02, 0x02, 0x02, 0x02], // 0x5F '_'
    [0x00, 0xC0, 0xE0, 0x10, 0x00], // 0x60 '`'
    [0x04, 0x2A, 0x2A, 0x1E, 0x02], // 0x61 'a'
    [0xFE, 0x14, 0x22, 0x22, 0x1C], // 0x62 'b'
    [0x1C, 0x22, 0x22, 0x22, 0x14], // 0x63 'c'
    [0x1C, 0x22, 0x22, 0x14, 0xFE], // 0x64 'd'
    [0x1C, 0x2A, 0x2A, 0x2A, 0x18], // 0x65 'e'
    [0x00, 0x10, 0x7E, 0x90, 0x40], // 0x66 'f'
    [0x18, 0x25, 0x25, 0x39, 0x1E], // 0x67 'g'
    [0xFE, 0x10, 0x20, 0x20, 0x1E], // 0x68 'h'
    [0x00, 0x22, 0xBE, 0x02, 0x00], // 0x69 'i'
    [0x04, 0x02, 0x02, 0xBC, 0x00], // 0x6A 'j'
    [0xFE, 0x08, 0x14, 0x22, 0x00], // 0x6B 'k'
    [0x00, 0x82, 0xFE, 0x02, 0x00], // 0x6C 'l'
    [0x3E, 0x20, 0x1E, 0x20, 0x1E], // 0x6D 'm'
    [0x3E, 0x10, 0x20, 0x20, 0x1E], // 0x6E 'n'
    [0x1C, 0x22, 0x22, 0x22, 0x1C], // 0x6F 'o'
    [0x3F, 0x18, 0x24, 0x24, 0x18], // 0x70 'p'
    [0x18, 0x24, 0x24, 0x18, 0x3F], // 0x71 'q'
    [0x3E, 0x10, 0x20, 0x20, 0x10], // 0x72 'r'
    [0x12, 0x2A, 0x2A, 0x2A, 0x24], // 0x73 's'
    [0x20, 0x20, 0xFC, 0x22, 0x24], // 0x74 't'
    [0x3C, 0x02, 0x02, 0x04, 0x3E], // 0x75 'u'
    [0x38, 0x04, 0x02, 0x04, 0x38], // 0x76 'v'
    [0x3C, 0x02, 0x0C, 0x02, 0x3C], // 0x77 'w'
    [0x22, 0x14, 0x08, 0x14, 0x22], // 0x78 'x'
    [0x32, 0x09, 0x09, 0x09, 0x3E], // 0x79 'y'
    [0x22, 0x26, 0x2A, 0x32, 0x22], // 0x7A 'z'
    [0x00, 0x10, 0x6C, 0x82, 0x00], // 0x7B '{'
    [0x00, 0x00, 0xEE, 0x00, 0x00], // 0x7C '|'
    [0x00, 0x82, 0x6C, 0x10, 0x00], // 0x7D '}'
    [0x40, 0x80, 0x40, 0x20, 0x40], // 0x7E '~'
    [0x3C, 0x64, 0xC4, 0x64, 0x3C], // 0x7F
    [0x78, 0x85, 0x85, 0x86, 0x48], // 0x80
    [0x5C, 0x02, 0x02, 0x04, 0x5E], // 0x81
    [0x1C, 0x2A, 0x2A, 0xAA, 0x9A], // 0x82
    [0x84, 0xAA, 0xAA, 0x9E, 0x82], // 0x83
    [0x84, 0x2A, 0x2A, 0x1E, 0x82], // 0x84
    [0x84, 0xAA, 0x2A, 0x1E, 0x02], // 0x85
    [0x04, 0x2A, 0xAA, 0x9E, 0x02], // 0x86
    [0x30, 0x78, 0x4A, 0x4E, 0x48], // 0x87
    [0x9C, 0xAA, 0xAA, 0xAA, 0x9A], // 0x88
    [0x9C, 0x2A, 0x2A, 0x2A, 0x9A], // 0x89
    [0x9C, 0xAA, 0x2A, 0x2A, 0x1A], // 0x8A
    [0x00, 0x00, 0xA2, 0x3E, 0x82], // 0x8B
    [0x00, 0x40, 0xA2, 0xBE, 0x42], // 0x8C
    [0x00, 0x80, 0xA2, 0x3E, 0x02], // 0x8D
    [0x0F, 0x94, 0x24, 0x94, 0x0F], // 0x8E
    [0x0F, 0x14, 0xA4, 0x14, 0x0F], // 0x8F
    [0x3E, 0x2A, 0xAA, 0xA2, 0x00], // 0x90
    [0x04, 0x2A, 0x2A, 0x3E, 0x2A], // 0x91
    [0x3E, 0x50, 0x90, 0xFE, 0x92], // 0x92
    [0x4C, 0x92, 0x92, 0x92, 0x4C], // 0x93
    [0x4C, 0x12, 0x12, 0x12, 0x4C], // 0x94
    [0x4C, 0x52, 0x12, 0x12, 0x0C], // 0x95
    [0x5C, 0x82, 0x82, 0x84, 0x5E], // 0x96
    [0x5C, 0x42, 0x02, 0x04, 0x1E], // 0x97
    [0x00, 0xB9, 0x05, 0x05, 0xBE], // 0x98
    [0x9C, 0x22, 0x22, 0x22, 0x9C], // 0x99
    [0xBC, 0x02, 0x02, 0x02, 0xBC], // 0x9A
    [0x3C, 0x24, 0xFF, 0x24, 0x24], // 0x9B
    [0x12, 0x7E, 0x92, 0xC2, 0x66], // 0x9C
    [0xD4, 0xF4, 0x3F, 0xF4, 0xD4], // 0x9D
    [0xFF, 0x90, 0x94, 0x6F, 0x04], // 0x9E
    [0x03, 0x11, 0x7E, 0x90, 0xC0], // 0x9F
    [0x04, 0x2A, 0x2A, 0x9E, 0x82], // 0xA0
    [0x00, 0x00, 0x22, 0xBE, 0x82], // 0xA1
    [0x0C, 0x12, 0x12, 0x52, 0x4C], // 0xA2
    [0x1C, 0x02, 0x02, 0x44, 0x5E], // 0xA3
    [0x00, 0x5E, 0x50, 0x50, 0x4E], // 0xA4
    [0xBE, 0xB0, 0x98, 0x8C, 0xBE], // 0xA5
    [0x64, 0x94, 0x94, 0xF4, 0x14], // 0xA6
    [0x64, 0x94, 0x94, 0x94, 0x64], // 0xA7
    [0x0C, 0x12, 0xB2, 0x02, 0x04], // 0xA8
    [0x1C, 0x10, 0x10, 0x10, 0x10], // 0xA9
    [0x10, 0x10, 0x10, 0x10, 0x1C], // 0xAA
    [0xF4, 0x08, 0x13, 0x35, 0x5D], // 0xAB
    [0xF4, 0x08, 0x14, 0x2C, 0x5F], // 0xAC
    [0x00, 0x00, 0xDE, 0x00, 0x00], // 0xAD
    [0x10, 0x28, 0x54, 0x28, 0x44], // 0xAE
    [0x44, 0x28, 0x54, 0x28, 0x10], // 0xAF
    [0x55, 0x00, 0xAA, 0x00, 0x55], // 0xB0
    [0x55, 0xAA, 0x55, 0xAA, 0x55], // 0xB1
    [0xAA, 0x55, 0xAA, 0x55, 0xAA], // 0xB2
    [0x00, 0x00, 0x00, 0xFF, 0x00], // 0xB3
    [0x08, 0x08, 0x08, 0xFF, 0x00], // 0xB4
    [0x28, 0x28, 0x28, 0xFF, 0x00], // 0xB5
    [0x08, 0x08, 0xFF, 0x00, 0xFF], // 0xB6
    [0x08, 0x08, 0x0F, 0x08, 0x0F], // 0xB7
    [0x28, 0x28, 0x28, 0x3F, 0x00], // 0xB8
    [0x28, 0x28, 0xEF, 0x00, 0xFF], // 0xB9
    [0x00, 0x00, 0xFF, 0x00, 0xFF], // 0xBA
    [0x28, 0x28, 0x2F, 0x20, 0x3F], // 0xBB
    [0x28, 0x28, 0xE8, 0x08, 0xF8], // 0xBC
    [0x08, 0x08, 0xF8, 0x08, 0xF8], // 0xBD
    [0x28, 0x28, 0x28, 0xF8, 0x00], // 0xBE
    [0x08, 0x08, 0x08, 0x0F, 0x00], // 0xBF
    [0x00, 0x00, 0x00, 0xF8, 0x08], // 0xC0
    [0x08, 0x08, 0x08, 0xF8, 0x08], // 0xC1
    [0x08, 0x08, 0x08, 0x0F, 0x08], // 0xC2
    [0x00, 0x00, 0x00, 0xFF, 0x08], // 0xC3
    [0x08, 0x08, 0x08, 0x08, 0x08], // 0xC4
    [0x08, 0x08, 0x08, 0xFF, 0x08], // 0xC5
    [0x00, 0x00, 0x00, 0xFF, 0x28], // 0xC6
    [0x00, 0x00, 0xFF, 0x00, 0xFF], // 0xC7
    [0x00, 0x00, 0xF8, 0x08, 0xE8], // 0xC8
    [0x00, 0x00, 0x3F, 0x20, 0x2F], // 0xC9
    [0x28, 0x28, 0xE8, 0x08, 0xE8], // 0xCA
    [0x28, 0x28, 0x2F, 0x20, 0x2F], // 0xCB
    [0x00, 0x00, 0xFF, 0x00, 0xEF], // 0xCC
    [0x28, 0x28, 0x28, 0x28, 0x28], // 0xCD
    [0x28, 0x28, 0xEF, 0x00, 0xEF], // 0xCE
    [0x28, 0x28, 0x28, 0xE8, 0x28], // 0xCF
    [0x08, 0x08, 0xF8, 0x08, 0xF8], // 0xD0
    [0x28, 0x28, 0x28, 0x2F, 0x28], // 0xD1
    [0x08, 0x08, 0x0F, 0x08, 0x0F], // 0xD2
    [0x00, 0x00, 0xF8, 0x08, 0xF8], // 0xD3
    [0x00, 0x00, 0x00, 0xF8, 0x28], // 0xD4
    [0x00, 0x00, 0x00, 0x3F, 0x28], // 0xD5
    [0x00, 0x00, 0x0F, 0x08, 0x0F], // 0xD6
    [0x08, 0x08, 0xFF, 0x08, 0xFF], // 0xD7
    [0x28, 0x28, 0x28, 0xFF, 0x28], // 0xD8
    [0x08, 0x08, 0x08, 0xF8, 0x00], // 0xD9
    [0x00, 0x00, 0x00, 0x0F, 0x08], // 0xDA
    [0xFF, 0xFF, 0xFF, 0xFF, 0xFF], // 0xDB
    [0x0F, 0x0F, 0x0F, 0x0F, 0x0F], // 0xDC
    [0xFF, 0xFF, 0xFF, 0x00, 0x00], // 0xDD
    [0x00, 0x00, 0x00, 0xFF, 0xFF], // 0xDE
    [0xF0, 0xF0, 0xF0, 0xF0, 0xF0], // 0xDF
    [0x1C, 0x22, 0x22, 0x1C, 0x22], // 0xE0
    [0x3E, 0x54, 0x54, 0x7C, 0x28], // 0xE1
    [0x7E, 0x40, 0x40, 0x60, 0x60], // 0xE2
    [0x40, 0x7E, 0x40, 0x7E, 0x40], // 0xE3
    [0xC6, 0xAA, 0x92, 0x82, 0xC6], // 0xE4
    [0x1C, 0x22, 0x22, 0x3C, 0x20], // 0xE5
    [0x02, 0x7E, 0x04, 0x78, 0x04], // 0xE6
    [0x60, 0x40, 0x7E, 0x40, 0x40], // 0xE7
    [0x99, 0xA5, 0xE7, 0xA5, 0x99], // 0xE8
    [0x38, 0x54, 0x92, 0x54, 0x38], // 0xE9
    [0x32, 0x4E, 0x80, 0x4E, 0x32], // 0xEA
    [0x0C, 0x52, 0xB2, 0xB2, 0x0C], // 0xEB
    [0x0C, 0x12, 0x1E, 0x12, 0x0C], // 0xEC
    [0x3D, 0x46, 0x5A, 0x62, 0xBC], // 0xED
    [0x7C, 0x92, 0x92, 0x92, 0x00], // 0xEE
    [0x7E, 0x80, 0x80, 0x80, 0x7E], // 0xEF
    [0x54, 0x54, 0x54, 0x54, 0x54], // 0xF0
    [0x22, 0x22, 0xFA, 0x22, 0x22], // 0xF1
    [0x02, 0x8A, 0x52, 0x22, 0x02], // 0xF2
    [0x02, 0x22, 0x52, 0x8A, 0x02], // 0xF3
    [0x00, 0x00, 0xFF, 0x80, 0xC0], // 0xF4
    [0x07, 0x01, 0xFF, 0x00, 0x00], // 0xF5
    [0x10, 0x10, 0xD6, 0xD6, 0x10], // 0xF6
    [0x6C, 0x48, 0x6C, 0x24, 0x6C], // 0xF7
    [0x60, 0xF0, 0x90, 0xF0, 0x60], // 0xF8
    [0x00, 0x00, 0x18, 0x18, 0x00], // 0xF9
    [0x00, 0x00, 0x08, 0x08, 0x00], // 0xFA
    [0x0C, 0x02, 0xFF, 0x80, 0x80], // 0xFB
    [0x00, 0xF8, 0x80, 0x80, 0x78], // 0xFC
    [0x00, 0x98, 0xB8, 0xE8, 0x48], // 0xFD
    [0x00, 0x3C, 0x3C, 0x3C, 0x3C], // 0xFE
];
