/*
 * @Description  : 推理引擎：填充 → 逐层（互相关 + 偏置 + Leaky ReLU）→ 裁剪还原。
 *                 并行粒度：同一层内的各输出平面、以及每个输出平面的各输入平面互相关；
 *                 层与层之间严格按顺序执行。每个输出平面的部分和按输入平面下标顺序累加，
 *                 因此结果与线程数无关、逐位一致。
 */

mod config;
mod error;
mod progress;

pub use config::EngineConfig;
pub use error::EngineError;
pub use progress::{LogProgress, NoProgress, Progress, fraction};

use crate::nn::{Layer, Network, leaky_relu};
use crate::tensor::Tensor;
use progress::ProgressTracker;
use rayon::prelude::*;
use tracing::{debug, info, trace};

#[cfg(test)]
mod tests;

/// 8位亮度与引擎内部[0,1]区间之间的换算系数
pub const PIXEL_SCALE: f64 = 255.0;

#[derive(Debug)]
pub struct Engine {
    pool: rayon::ThreadPool,
}

impl Engine {
    /// 按配置创建专用线程池
    pub fn new(config: EngineConfig) -> Result<Engine, EngineError> {
        let mut builder =
            rayon::ThreadPoolBuilder::new().thread_name(|i| format!("waifu2x-worker-{i}"));
        if let Some(workers) = config.workers {
            builder = builder.num_threads(workers);
        }
        let pool = builder.build()?;
        debug!("推理引擎线程池已创建：{}个线程", pool.current_num_threads());
        Ok(Engine { pool })
    }

    /// 实际使用的线程数
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// 重建亮度平面，输入输出均为0~255区间、形状相同
    pub fn run(&self, luminance: &Tensor, network: &Network) -> Result<Tensor, EngineError> {
        self.run_with_progress(luminance, network, &NoProgress)
    }

    pub fn run_with_progress(
        &self,
        luminance: &Tensor,
        network: &Network,
        progress: &dyn Progress,
    ) -> Result<Tensor, EngineError> {
        if luminance.is_empty() {
            return Err(EngineError::EmptyInput);
        }

        // 1. 按网络总缩小量做边缘复制填充，再归一化到[0,1]
        let radius = network.pad_radius();
        let padded = luminance
            .pad(radius)
            .map_err(EngineError::Pad)?
            .map(|x| x / PIXEL_SCALE);
        trace!("输入{:?}填充{radius}后为{:?}", luminance.shape(), padded.shape());

        // 2. 逐层前向
        let tracker = ProgressTracker::new(progress, network.total_convolutions());
        let planes = self.pool.install(|| {
            let mut planes = vec![padded];
            for (index, layer) in network.layers().iter().enumerate() {
                info!(
                    "第{}/{}层：{}个输入平面 → {}个输出平面",
                    index + 1,
                    network.len(),
                    planes.len(),
                    layer.output_count()
                );
                planes = forward_layer(index, layer, &planes, &tracker)?;
            }
            Ok::<_, EngineError>(planes)
        })?;
        tracker.finish();

        // 3. 必须恰好剩下一个平面
        let [plane] = <[Tensor; 1]>::try_from(planes).map_err(|planes| {
            EngineError::ShapeInvariantViolation {
                layers: network.len(),
                planes: planes.len(),
            }
        })?;
        trace!("输出平面：\n{plane}");

        // 4. 裁剪到[0,1]后还原到0~255
        Ok(plane.clip(0.0, 1.0) * PIXEL_SCALE)
    }
}

/// 由当前平面集计算一层的全部输出平面（已激活）
fn forward_layer(
    index: usize,
    layer: &Layer,
    planes: &[Tensor],
    tracker: &ProgressTracker<'_>,
) -> Result<Vec<Tensor>, EngineError> {
    (0..layer.output_count())
        .into_par_iter()
        .map(|output| {
            let input_count = layer.input_count(output, planes.len());
            let partials = (0..input_count)
                .into_par_iter()
                .map(|input| {
                    let conv = planes[input]
                        .correlate(layer.kernel(output, input))
                        .map_err(|source| EngineError::Convolution {
                            layer: index,
                            output,
                            input,
                            source,
                        })?;
                    tracker.advance();
                    Ok(conv)
                })
                .collect::<Result<Vec<_>, EngineError>>()?;

            let mut partials = partials.into_iter();
            let first = partials.next().ok_or(EngineError::NoInputPlanes {
                layer: index,
                output,
            })?;
            let sum = partials
                .try_fold(first, |acc, partial| acc.try_add(&partial))
                .map_err(|source| EngineError::Reduction {
                    layer: index,
                    output,
                    source,
                })?;
            debug!("第{index}层第{output}个输出平面：累加{input_count}个部分和");

            Ok(leaky_relu(&(sum + layer.bias(output))))
        })
        .collect()
}
