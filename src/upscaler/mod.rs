/*
 * @Description  : 端到端流水线：解码 → 最近邻预放大 → 拆出亮度 → 推理引擎重建亮度
 *                 → 与原色度拼回 → 编码。推理之外的步骤都在`vision`模块中。
 */

mod config;
mod error;

pub use config::UpscaleConfig;
pub use error::Error;

use crate::engine::{Engine, NoProgress, Progress};
use crate::nn::Network;
use crate::vision::Vision;
use image::{DynamicImage, RgbImage};
use std::path::Path;
use std::time::Instant;
use tracing::info;

#[cfg(test)]
mod tests;

/// 持有网络与线程池，可对多张图像重复使用
#[derive(Debug)]
pub struct Upscaler {
    network: Network,
    engine: Engine,
    scale: u32,
}

impl Upscaler {
    pub fn new(network: Network, config: UpscaleConfig) -> Result<Upscaler, Error> {
        let engine = Engine::new(config.engine)?;
        Ok(Upscaler {
            network,
            engine,
            scale: config.scale,
        })
    }

    /// 从模型JSON文件创建
    pub fn from_model_file<P: AsRef<Path>>(
        path: P,
        config: UpscaleConfig,
    ) -> Result<Upscaler, Error> {
        Self::new(Network::load(path)?, config)
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn upscale(&self, image: &DynamicImage) -> Result<RgbImage, Error> {
        self.upscale_with_progress(image, &NoProgress)
    }

    /// 放大并重建一张图像，输出尺寸为原图的`scale`倍
    pub fn upscale_with_progress(
        &self,
        image: &DynamicImage,
        progress: &dyn Progress,
    ) -> Result<RgbImage, Error> {
        let start = Instant::now();
        let enlarged = Vision::upscale_nearest(image, self.scale)?;
        let (luma, chroma) = Vision::split_luma(&enlarged);
        info!(
            "开始重建：{}×{} → {}×{}，{}个线程",
            image.width(),
            image.height(),
            enlarged.width(),
            enlarged.height(),
            self.engine.workers()
        );

        let rebuilt = self
            .engine
            .run_with_progress(&luma, &self.network, progress)?;
        let samples = Vision::assemble(&rebuilt, &chroma)?;

        info!("重建完成，耗时{:.2?}", start.elapsed());
        Ok(Vision::to_rgb_image(&samples))
    }

    pub fn upscale_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Result<(), Error> {
        self.upscale_file_with_progress(input, output, &NoProgress)
    }

    /// 读取`input`，放大后按`output`的扩展名保存
    pub fn upscale_file_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
        progress: &dyn Progress,
    ) -> Result<(), Error> {
        let image = Vision::load_image(input)?;
        let result = self.upscale_with_progress(&image, progress)?;
        Vision::save_image(&result, output)?;
        Ok(())
    }
}
