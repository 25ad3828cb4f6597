
use crate::nn::{Layer, Network};
use crate::tensor::Tensor;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 只有中心为`center`的3×3卷积核
fn center_kernel(center: f64) -> Tensor {
    let mut data = [0.0; 9];
    data[4] = center;
    Tensor::new(&data, 3, 3)
}

/// 平面数依次为`planes[0] → planes[1] → ...`、权重随机的网络
fn random_network(planes: &[usize], seed: u64) -> Network {
    let mut rng = StdRng::seed_from_u64(seed);
    let layers = planes
        .windows(2)
        .map(|w| {
            let (n_in, n_out) = (w[0], w[1]);
            let weight = (0..n_out)
                .map(|_| {
                    (0..n_in)
                        .map(|_| {
                            let data: Vec<f64> = (0..9).map(|_| rng.gen_range(-0.5..0.5)).collect();
                            Tensor::new(&data, 3, 3)
                        })
                        .collect()
                })
                .collect();
            let bias = (0..n_out).map(|_| rng.gen_range(-0.1..0.1)).collect();
            Layer::new(weight, bias).unwrap()
        })
        .collect();
    Network::from_layers(layers)
}

fn random_luminance(rows: usize, cols: usize, seed: u64) -> Tensor {
    let mut rng = StdRng::seed_from_u64(seed);
    let data: Vec<f64> = (0..rows * cols)
        .map(|_| f64::from(rng.gen_range(0u8..=255)))
        .collect();
    Tensor::new(&data, rows, cols)
}
