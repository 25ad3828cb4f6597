//! JFIF（全范围BT.601）RGB ↔ YCbCr

use image::Rgb;

/// 一个像素的亮度、色度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct YCbCr {
    pub y: u8,
    pub cb: u8,
    pub cr: u8,
}

/// 一个像素的色度，推理时原样透传
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Chroma {
    pub cb: u8,
    pub cr: u8,
}

impl YCbCr {
    pub fn chroma(&self) -> Chroma {
        Chroma {
            cb: self.cb,
            cr: self.cr,
        }
    }
}

impl Chroma {
    pub fn with_luma(self, y: u8) -> YCbCr {
        YCbCr {
            y,
            cb: self.cb,
            cr: self.cr,
        }
    }
}

fn to_u8(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

pub fn rgb_to_ycbcr(Rgb([r, g, b]): Rgb<u8>) -> YCbCr {
    let (r, g, b) = (f64::from(r), f64::from(g), f64::from(b));
    YCbCr {
        y: to_u8(0.299 * r + 0.587 * g + 0.114 * b),
        cb: to_u8(128.0 - 0.168736 * r - 0.331264 * g + 0.5 * b),
        cr: to_u8(128.0 + 0.5 * r - 0.418688 * g - 0.081312 * b),
    }
}

pub fn ycbcr_to_rgb(YCbCr { y, cb, cr }: YCbCr) -> Rgb<u8> {
    let y = f64::from(y);
    let cb = f64::from(cb) - 128.0;
    let cr = f64::from(cr) - 128.0;
    Rgb([
        to_u8(y + 1.402 * cr),
        to_u8(y - 0.344136 * cb - 0.714136 * cr),
        to_u8(y + 1.772 * cb),
    ])
}
