use crate::tensor::Tensor;

impl PartialEq for Tensor {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Tensor {
    /// 对每个元素`x`计算`f(x, scalar)`，返回新张量
    pub fn broadcast<F>(&self, scalar: f64, f: F) -> Tensor
    where
        F: Fn(f64, f64) -> f64,
    {
        self.map(|x| f(x, scalar))
    }

    /// 逐元素变换，返回新张量
    pub fn map<F>(&self, f: F) -> Tensor
    where
        F: Fn(f64) -> f64,
    {
        Tensor {
            data: self.data.mapv(f),
        }
    }

    /// 逐元素取`max(x, scalar)`
    pub fn maximum(&self, scalar: f64) -> Tensor {
        self.broadcast(scalar, f64::max)
    }

    /// 逐元素取`min(x, scalar)`
    pub fn minimum(&self, scalar: f64) -> Tensor {
        self.broadcast(scalar, f64::min)
    }

    /// 逐元素夹到`[lo, hi]`闭区间
    pub fn clip(&self, lo: f64, hi: f64) -> Tensor {
        self.map(|x| {
            if x < lo {
                lo
            } else if x > hi {
                hi
            } else {
                x
            }
        })
    }

    /// 形状一致且每个元素之差的绝对值都不超过`epsilon`时返回true
    pub fn abs_diff_eq(&self, other: &Tensor, epsilon: f64) -> bool {
        self.is_same_shape(other)
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| approx::abs_diff_eq!(a, b, epsilon = epsilon))
    }
}
