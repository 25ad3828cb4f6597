use super::{Layer, LayerDesc, ModelError};
use std::path::Path;
use tracing::{debug, info};

/// 按执行顺序排列的卷积层序列，构造后只读。
/// 允许为空：此时推理只做归一化与裁剪。
#[derive(Debug, Clone)]
pub struct Network {
    layers: Vec<Layer>,
}

impl Network {
    pub fn from_layers(layers: Vec<Layer>) -> Network {
        Network { layers }
    }

    /// 解析模型JSON：顶层为层对象数组，数组顺序即执行顺序
    pub fn from_json_str(json: &str) -> Result<Network, ModelError> {
        let descs: Vec<LayerDesc> = serde_json::from_str(json)?;
        let layers = descs
            .into_iter()
            .enumerate()
            .map(|(i, desc)| {
                Layer::try_from(desc).map_err(|e| ModelError::Layer {
                    layer: i,
                    source: Box::new(e),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (i, layer) in layers.iter().enumerate() {
            debug!(
                "第{i}层：声明{}→{}个平面，实际{}个输出平面，卷积核{}×{}",
                layer.n_input_plane(),
                layer.n_output_plane(),
                layer.output_count(),
                layer.kernel_size(),
                layer.kernel_size()
            );
        }
        Ok(Self::from_layers(layers))
    }

    /// 从本地文件加载模型
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Network, ModelError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let network = Self::from_json_str(&json)?;
        info!("已加载模型{}：共{}层", path.display(), network.len());
        Ok(network)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// 输入需要填充的半径：各层有效互相关缩小量之和（全为3×3时等于层数）
    pub fn pad_radius(&self) -> usize {
        self.layers.iter().map(Layer::radius).sum()
    }

    /// 整个网络的卷积总次数（按声明的平面数），作为进度的分母。
    /// 声明值只是参考，溢出时饱和到`usize::MAX`。
    pub fn total_convolutions(&self) -> usize {
        self.layers
            .iter()
            .map(Layer::declared_convolutions)
            .fold(0, usize::saturating_add)
    }
}
