/*
 * @Description  : 本模块是推理引擎与图像之间的边界：解码、最近邻预放大、
 *                 RGB与YCbCr互转、把重建后的亮度平面与原色度拼回（Plane Assembler）、编码。
 *                 在本模块中，不严谨地说：
 *                 1. 所谓的image/图像是指RGB格式的图像；
 *                 2. “亮度”等同于英文中luma、luminance的概念，即YCbCr中的Y。
 */

mod color;
mod error;

pub use color::{Chroma, YCbCr, rgb_to_ycbcr, ycbcr_to_rgb};
pub use error::VisionError;

use crate::tensor::Tensor;
use image::{DynamicImage, ImageFormat, RgbImage};
use ndarray::Array2;
use std::path::Path;
use tracing::debug;


pub struct Vision;

impl Vision {
    /// 将本地的图像解码为`DynamicImage`
    pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage, VisionError> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|source| VisionError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("已读取图像{}：{}×{}", path.display(), image.width(), image.height());
        Ok(image)
    }

    /// 最近邻放大`scale`倍（每个像素复制成`scale`×`scale`的块）
    pub fn upscale_nearest(image: &DynamicImage, scale: u32) -> Result<RgbImage, VisionError> {
        let src = image.to_rgb8();
        let (width, height) = src.dimensions();
        let invalid = || VisionError::InvalidScale {
            width,
            height,
            scale,
        };
        if scale == 0 {
            return Err(invalid());
        }
        let new_width = width.checked_mul(scale).ok_or_else(invalid)?;
        let new_height = height.checked_mul(scale).ok_or_else(invalid)?;
        Ok(RgbImage::from_fn(new_width, new_height, |x, y| {
            *src.get_pixel(x / scale, y / scale)
        }))
    }

    /// 拆分出亮度平面（0~255）和按像素位置排列的色度，形状均为`[高, 宽]`
    pub fn split_luma(image: &RgbImage) -> (Tensor, Array2<Chroma>) {
        let (width, height) = image.dimensions();
        let shape = (height as usize, width as usize);
        let samples = Array2::from_shape_fn(shape, |(y, x)| {
            rgb_to_ycbcr(*image.get_pixel(x as u32, y as u32))
        });
        let luma = samples.mapv(|s| f64::from(s.y));
        let chroma = samples.mapv(|s| s.chroma());
        (Tensor::from(luma), chroma)
    }

    /// 用重建后的亮度替换每个像素的Y分量，色度原样保留。
    /// 亮度先夹到0~255再向零取整。
    pub fn assemble(
        luma: &Tensor,
        chroma: &Array2<Chroma>,
    ) -> Result<Array2<YCbCr>, VisionError> {
        let (rows, cols) = chroma.dim();
        if luma.shape() != [rows, cols] {
            return Err(VisionError::DimensionMismatch {
                luma: luma.shape(),
                chroma: [rows, cols],
            });
        }
        let view = luma.view();
        Ok(Array2::from_shape_fn((rows, cols), |(r, c)| {
            let y = view[[r, c]].clamp(0.0, 255.0) as u8;
            chroma[[r, c]].with_luma(y)
        }))
    }

    pub fn to_rgb_image(samples: &Array2<YCbCr>) -> RgbImage {
        let (rows, cols) = samples.dim();
        RgbImage::from_fn(cols as u32, rows as u32, |x, y| {
            ycbcr_to_rgb(samples[[y as usize, x as usize]])
        })
    }

    /// 按扩展名保存为PNG或JPEG
    pub fn save_image<P: AsRef<Path>>(image: &RgbImage, path: P) -> Result<(), VisionError> {
        let path = path.as_ref();
        let format = match ImageFormat::from_path(path) {
            Ok(format @ (ImageFormat::Png | ImageFormat::Jpeg)) => format,
            _ => {
                return Err(VisionError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };
        image
            .save_with_format(path, format)
            .map_err(|source| VisionError::Encode {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("已保存图像{}", path.display());
        Ok(())
    }
}
