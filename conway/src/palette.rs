// palette.rs - Color tokens keyed by (previous, current) cell state

/// Two ASCII digits of an SGR background color code, e.g. `b"42"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token(pub [u8; 2]);

impl Token {
    pub const BLACK: Token = Token(*b"40");
    pub const RED: Token = Token(*b"41");
    pub const GREEN: Token = Token(*b"42");
    pub const WHITE: Token = Token(*b"47");
    /// Reset code used by row terminators and the initial scaffolding.
    pub const RESET: Token = Token(*b"00");

    /// Numeric value of the code, e.g. 42.
    pub const fn code(&self) -> u8 {
        (self.0[0] - b'0') * 10 + (self.0[1] - b'0')
    }
}

/// Four tokens indexed by `(previous << 1) | current`.
///
/// Chosen once at startup and handed to the encoder for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    tokens: [Token; 4],
}

impl Palette {
    /// dead->dead black, dead->live green, live->dead red, live->live white.
    pub const COLOR: Palette = Palette {
        tokens: [Token::BLACK, Token::GREEN, Token::RED, Token::WHITE],
    };

    /// Dead cells black, live cells white, changes not highlighted.
    pub const MONOCHROME: Palette = Palette {
        tokens: [Token::BLACK, Token::WHITE, Token::BLACK, Token::WHITE],
    };

    pub const fn select(monochrome: bool) -> Palette {
        if monochrome { Self::MONOCHROME } else { Self::COLOR }
    }

    /// Token for a cell that went from `previous` to `current`.
    #[inline]
    pub fn token(&self, previous: u8, current: u8) -> Token {
        self.tokens[usize::from((previous << 1) | current)]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::COLOR
    }
}
