use std::path::PathBuf;
use thiserror::Error;

/// 图像读写与拼装相关错误
#[derive(Debug, Error)]
pub enum VisionError {
    /// 图像文件不存在或无法解码
    #[error("读取图像{path}失败: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("保存图像{path}失败: {source}")]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    /// 仅支持png、jpg/jpeg
    #[error("不支持的输出格式: {path}（仅支持png、jpg/jpeg）")]
    UnsupportedFormat { path: PathBuf },

    #[error("无法将{width}×{height}的图像放大{scale}倍")]
    InvalidScale { width: u32, height: u32, scale: u32 },

    #[error("亮度平面形状{luma:?}与色度形状{chroma:?}不一致")]
    DimensionMismatch {
        luma: [usize; 2],
        chroma: [usize; 2],
    },
}
