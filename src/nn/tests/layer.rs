use crate::assert_err;
use crate::errors::TensorError;
use crate::nn::{Layer, LayerDesc, ModelError};
use crate::tensor::Tensor;
use serde_json::json;

fn kernel(v: f64) -> Tensor {
    Tensor::new(&[v; 9], 3, 3)
}

#[test]
fn test_layer_desc_from_json() {
    let desc: LayerDesc = serde_json::from_value(json!({
        "weight": [[[[0, 0, 0], [0, 1, 0], [0, 0, 0]]]],
        "bias": [0.5],
        "nInputPlane": 1,
        "nOutputPlane": 1,
        "kW": 3,
        "kH": 3
    }))
    .unwrap();
    assert_eq!(desc.n_input_plane, 1);
    assert_eq!(desc.n_output_plane, 1);
    assert_eq!(desc.bias, vec![0.5]);

    let layer = Layer::try_from(desc).unwrap();
    assert_eq!(layer.output_count(), 1);
    assert_eq!(layer.kernel_size(), 3);
    assert_eq!(layer.radius(), 1);
    assert_eq!(layer.bias(0), 0.5);
    assert_eq!(layer.kernel(0, 0).get(1, 1), Some(1.0));
    assert_eq!(layer.kernel(0, 0).get(0, 0), Some(0.0));
}

#[test]
fn test_layer_desc_defaults() {
    // 缺省的kW/kH视为3，缺省的声明平面数视为0
    let desc: LayerDesc = serde_json::from_value(json!({
        "weight": [[[[1, 1, 1], [1, 1, 1], [1, 1, 1]]]],
        "bias": [0]
    }))
    .unwrap();
    assert_eq!((desc.k_w, desc.k_h), (3, 3));
    assert_eq!((desc.n_input_plane, desc.n_output_plane), (0, 0));
    let layer = Layer::try_from(desc).unwrap();
    assert_eq!(layer.declared_convolutions(), 0);
}

#[test]
fn test_output_count_takes_min_of_bias_and_weight() {
    // bias有2个，weight有3组：按最小值产生2个输出平面
    let layer = Layer::new(
        vec![vec![kernel(1.)], vec![kernel(2.)], vec![kernel(3.)]],
        vec![0.1, 0.2],
    )
    .unwrap();
    assert_eq!(layer.output_count(), 2);

    // 反过来也一样
    let layer = Layer::new(vec![vec![kernel(1.)]], vec![0.1, 0.2, 0.3]).unwrap();
    assert_eq!(layer.output_count(), 1);
}

#[test]
fn test_input_count_takes_min_of_planes_and_kernels() {
    let layer = Layer::new(
        vec![vec![kernel(1.), kernel(2.), kernel(3.)], vec![kernel(4.)]],
        vec![0., 0.],
    )
    .unwrap();
    assert_eq!(layer.input_count(0, 1), 1);
    assert_eq!(layer.input_count(0, 3), 3);
    assert_eq!(layer.input_count(0, 5), 3);
    assert_eq!(layer.input_count(1, 5), 1);
    // 不存在的输出平面不消耗任何输入
    assert_eq!(layer.input_count(2, 5), 0);
}

#[test]
fn test_declared_planes_are_advisory() {
    let layer = Layer::new(vec![vec![kernel(1.)]], vec![0.])
        .unwrap()
        .with_declared_planes(32, 64);
    assert_eq!(layer.n_input_plane(), 32);
    assert_eq!(layer.n_output_plane(), 64);
    assert_eq!(layer.declared_convolutions(), 32 * 64);
    // 实际执行的平面数不受声明值影响
    assert_eq!(layer.output_count(), 1);
}

#[test]
fn test_layer_with_5x5_kernel() {
    let layer = Layer::new(vec![vec![Tensor::new(&[0.; 25], 5, 5)]], vec![0.]).unwrap();
    assert_eq!(layer.kernel_size(), 5);
    assert_eq!(layer.radius(), 2);
}

#[test]
fn test_invalid_kernel_size() {
    let desc: LayerDesc = serde_json::from_value(json!({
        "weight": [[[[1, 1], [1, 1]]]],
        "bias": [0],
        "kW": 2,
        "kH": 2
    }))
    .unwrap();
    assert_err!(
        Layer::try_from(desc),
        ModelError::InvalidKernelSize { k_w: 2, k_h: 2 }
    );

    let desc: LayerDesc = serde_json::from_value(json!({
        "weight": [], "bias": [], "kW": 3, "kH": 5
    }))
    .unwrap();
    assert_err!(
        Layer::try_from(desc),
        ModelError::InvalidKernelSize { k_w: 3, k_h: 5 }
    );
}

#[test]
fn test_kernel_shape_disagrees_with_declared_size() {
    let desc: LayerDesc = serde_json::from_value(json!({
        "weight": [[[[0, 0, 0], [0, 1, 0], [0, 0, 0]], [[1, 1], [1, 1]]]],
        "bias": [0]
    }))
    .unwrap();
    assert_err!(
        Layer::try_from(desc),
        ModelError::InvalidKernel {
            output: 0,
            input: 1,
            source: TensorError::InvalidKernel { shape: [2, 2] },
        }
    );
}

#[test]
fn test_ragged_kernel() {
    let desc: LayerDesc = serde_json::from_value(json!({
        "weight": [[[[0, 0, 0], [0, 1], [0, 0, 0]]]],
        "bias": [0]
    }))
    .unwrap();
    assert_err!(
        Layer::try_from(desc),
        ModelError::InvalidKernel {
            output: 0,
            input: 0,
            source: TensorError::InconsistentShape { row: 1, .. },
        }
    );
}

#[test]
fn test_layer_new_rejects_mixed_kernel_sizes() {
    let result = Layer::new(
        vec![vec![kernel(1.), Tensor::new(&[0.; 25], 5, 5)]],
        vec![0.],
    );
    assert_err!(result, ModelError::InvalidKernel { output: 0, input: 1, .. });

    let result = Layer::new(vec![vec![Tensor::new(&[0.; 4], 2, 2)]], vec![0.]);
    assert_err!(result, ModelError::InvalidKernelSize { k_w: 2, k_h: 2 });
}
