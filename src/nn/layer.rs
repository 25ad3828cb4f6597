use super::ModelError;
use crate::errors::TensorError;
use crate::tensor::Tensor;
use serde::Deserialize;

fn default_kernel_size() -> usize {
    3
}

/// 模型JSON中单个层对象的原始描述
///
/// `weight`按`[输出平面][输入平面][核行][核列]`排列，`bias`每个输出平面一个。
/// `nInputPlane`、`nOutputPlane`只是声明值，不作为执行时的平面数。
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerDesc {
    pub weight: Vec<Vec<Vec<Vec<f64>>>>,
    pub bias: Vec<f64>,
    #[serde(default)]
    pub n_input_plane: usize,
    #[serde(default)]
    pub n_output_plane: usize,
    #[serde(default = "default_kernel_size")]
    pub k_w: usize,
    #[serde(default = "default_kernel_size")]
    pub k_h: usize,
}

/// 一个卷积层：权重已转为张量，并校验过卷积核形状
#[derive(Debug, Clone)]
pub struct Layer {
    weight: Vec<Vec<Tensor>>,
    bias: Vec<f64>,
    n_input_plane: usize,
    n_output_plane: usize,
    kernel_size: usize,
}

impl Layer {
    /// 由权重和偏置直接构造，声明的平面数取自数组长度，卷积核尺寸取自首个卷积核（没有卷积核时为3）。
    pub fn new(weight: Vec<Vec<Tensor>>, bias: Vec<f64>) -> Result<Layer, ModelError> {
        let kernel_size = weight
            .iter()
            .flatten()
            .next()
            .map_or(default_kernel_size(), Tensor::rows);
        let n_output_plane = weight.len();
        let n_input_plane = weight.first().map_or(0, Vec::len);
        Self::build(weight, bias, n_input_plane, n_output_plane, kernel_size)
    }

    /// 覆盖声明的输入/输出平面数（只影响进度统计）
    pub fn with_declared_planes(mut self, n_input_plane: usize, n_output_plane: usize) -> Self {
        self.n_input_plane = n_input_plane;
        self.n_output_plane = n_output_plane;
        self
    }

    fn build(
        weight: Vec<Vec<Tensor>>,
        bias: Vec<f64>,
        n_input_plane: usize,
        n_output_plane: usize,
        kernel_size: usize,
    ) -> Result<Layer, ModelError> {
        if kernel_size % 2 == 0 {
            return Err(ModelError::InvalidKernelSize {
                k_w: kernel_size,
                k_h: kernel_size,
            });
        }
        for (output, kernels) in weight.iter().enumerate() {
            for (input, kernel) in kernels.iter().enumerate() {
                if kernel.shape() != [kernel_size, kernel_size] {
                    return Err(ModelError::InvalidKernel {
                        output,
                        input,
                        source: TensorError::InvalidKernel {
                            shape: kernel.shape(),
                        },
                    });
                }
            }
        }
        Ok(Layer {
            weight,
            bias,
            n_input_plane,
            n_output_plane,
            kernel_size,
        })
    }

    /// 实际产生的输出平面数：`min(len(bias), len(weight))`
    pub fn output_count(&self) -> usize {
        self.bias.len().min(self.weight.len())
    }

    /// 第`output`个输出平面实际消耗的输入平面数：`min(available, len(weight[output]))`
    pub fn input_count(&self, output: usize, available: usize) -> usize {
        self.weight
            .get(output)
            .map_or(0, |kernels| kernels.len().min(available))
    }

    /// 调用方须保证`output < output_count()`且`input < input_count(output, ..)`
    pub fn kernel(&self, output: usize, input: usize) -> &Tensor {
        &self.weight[output][input]
    }

    pub fn bias(&self, output: usize) -> f64 {
        self.bias[output]
    }

    pub fn n_input_plane(&self) -> usize {
        self.n_input_plane
    }

    pub fn n_output_plane(&self) -> usize {
        self.n_output_plane
    }

    pub fn kernel_size(&self) -> usize {
        self.kernel_size
    }

    /// 一次有效互相关在每条边上缩小的格数
    pub fn radius(&self) -> usize {
        self.kernel_size / 2
    }

    /// 按声明的平面数计算的卷积次数，用作进度的分母（溢出时饱和）
    pub fn declared_convolutions(&self) -> usize {
        self.n_input_plane.saturating_mul(self.n_output_plane)
    }
}

impl TryFrom<LayerDesc> for Layer {
    type Error = ModelError;

    fn try_from(desc: LayerDesc) -> Result<Self, Self::Error> {
        if desc.k_w != desc.k_h || desc.k_w % 2 == 0 {
            return Err(ModelError::InvalidKernelSize {
                k_w: desc.k_w,
                k_h: desc.k_h,
            });
        }

        let mut weight = Vec::with_capacity(desc.weight.len());
        for (output, kernels) in desc.weight.iter().enumerate() {
            let kernels = kernels
                .iter()
                .enumerate()
                .map(|(input, rows)| {
                    Tensor::from_rows(rows.as_slice()).map_err(|source| ModelError::InvalidKernel {
                        output,
                        input,
                        source,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            weight.push(kernels);
        }

        Self::build(
            weight,
            desc.bias,
            desc.n_input_plane,
            desc.n_output_plane,
            desc.k_w,
        )
    }
}
