use bytemuck::{Pod, Zeroable};

/// A single 3-channel pixel. Channels are `(B, G, R)` by convention.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Pixel3 {
    pub ch0: u8,
    pub ch1: u8,
    pub ch2: u8,
}

impl Pixel3 {
    pub const WHITE: Pixel3 = Pixel3::from_level(0xff);
    pub const GRAY: Pixel3 = Pixel3::from_level(0x80);
    pub const BLACK: Pixel3 = Pixel3::from_level(0x00);

    pub const fn new(ch0: u8, ch1: u8, ch2: u8) -> Self {
        Self { ch0, ch1, ch2 }
    }

    /// Same value in every channel.
    pub const fn from_level(level: u8) -> Self {
        Self::new(level, level, level)
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.ch0, self.ch1, self.ch2]
    }
}

impl From<[u8; 3]> for Pixel3 {
    fn from([ch0, ch1, ch2]: [u8; 3]) -> Self {
        Self::new(ch0, ch1, ch2)
    }
}

impl From<Pixel3> for [u8; 3] {
    fn from(pixel: Pixel3) -> Self {
        pixel.to_array()
    }
}

const _: () = assert!(std::mem::size_of::<Pixel3>() == 3);
const _: () = assert!(std::mem::align_of::<Pixel3>() == 1);
