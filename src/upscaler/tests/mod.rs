use crate::assert_err;
use crate::engine::{EngineConfig, EngineError};
use crate::nn::{Layer, ModelError, Network};
use crate::tensor::Tensor;
use crate::upscaler::{Error, UpscaleConfig, Upscaler};
use crate::vision::{Vision, VisionError};
use image::{DynamicImage, Rgb, RgbImage};
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("waifu2x_upscaler_{}_{name}", std::process::id()))
}

/// 单层1→1、中心为1的网络，输出亮度等于输入亮度（误差在取整以内）
fn identity_network() -> Network {
    let kernel = Tensor::new(&[0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0], 3, 3);
    Network::from_layers(vec![Layer::new(vec![vec![kernel]], vec![0.0]).unwrap()])
}

fn sample_image() -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(5, 4, |x, y| {
        Rgb([(x * 50) as u8, (y * 60) as u8, 90])
    }))
}

fn assert_close(a: &RgbImage, b: &RgbImage, tolerance: i16) {
    assert_eq!(a.dimensions(), b.dimensions());
    for (p, q) in a.pixels().zip(b.pixels()) {
        for c in 0..3 {
            assert!(
                (i16::from(p[c]) - i16::from(q[c])).abs() <= tolerance,
                "{p:?} vs {q:?}"
            );
        }
    }
}

#[test]
fn test_default_config() {
    let config = UpscaleConfig::default();
    assert_eq!(config.scale, 2);
    assert_eq!(config.engine, EngineConfig::default());
    let config = config
        .with_scale(3)
        .with_engine(EngineConfig::default().with_workers(2));
    assert_eq!(config.scale, 3);
    assert_eq!(config.engine.workers, Some(2));
}

#[test]
fn test_identity_network_keeps_nearest_upscale() {
    let upscaler = Upscaler::new(
        identity_network(),
        UpscaleConfig::default().with_engine(EngineConfig::default().with_workers(2)),
    )
    .unwrap();
    assert_eq!(upscaler.scale(), 2);
    assert_eq!(upscaler.engine().workers(), 2);

    let image = sample_image();
    let result = upscaler.upscale(&image).unwrap();
    assert_eq!(result.dimensions(), (10, 8));
    let nearest = Vision::upscale_nearest(&image, 2).unwrap();
    assert_close(&result, &nearest, 3);
}

#[test]
fn test_progress_reaches_total() {
    let upscaler = Upscaler::new(identity_network(), UpscaleConfig::default()).unwrap();
    let reports = std::sync::Mutex::new(Vec::new());
    let observer = |completed: usize, total: usize| reports.lock().unwrap().push((completed, total));
    upscaler
        .upscale_with_progress(&sample_image(), &observer)
        .unwrap();
    assert_eq!(reports.into_inner().unwrap().last(), Some(&(1, 1)));
}

#[test]
fn test_invalid_scale() {
    let upscaler =
        Upscaler::new(identity_network(), UpscaleConfig::default().with_scale(0)).unwrap();
    assert_err!(
        upscaler.upscale(&sample_image()),
        Error::Vision(VisionError::InvalidScale { scale: 0, .. })
    );
}

#[test]
fn test_network_leaving_two_planes() {
    let kernel = Tensor::zeros(3, 3);
    let layer = Layer::new(
        vec![vec![kernel.clone()], vec![kernel]],
        vec![0.0, 0.0],
    )
    .unwrap();
    let upscaler = Upscaler::new(
        Network::from_layers(vec![layer]),
        UpscaleConfig::default(),
    )
    .unwrap();
    assert_err!(
        upscaler.upscale(&sample_image()),
        Error::Engine(EngineError::ShapeInvariantViolation { layers: 1, planes: 2 })
    );
}

#[test]
fn test_missing_model_file() {
    assert_err!(
        Upscaler::from_model_file(temp_path("missing.json"), UpscaleConfig::default()),
        Error::Model(ModelError::Io { .. })
    );
}

#[test]
fn test_upscale_file() {
    let model = temp_path("model.json");
    std::fs::write(
        &model,
        r#"[{"nInputPlane":1,"nOutputPlane":1,"kW":3,"kH":3,
            "weight":[[[[0,0,0],[0,1,0],[0,0,0]]]],"bias":[0]}]"#,
    )
    .unwrap();
    let input = temp_path("input.png");
    let output = temp_path("output.png");
    let bmp = temp_path("output.bmp");
    Vision::save_image(&sample_image().to_rgb8(), &input).unwrap();

    let upscaler = Upscaler::from_model_file(&model, UpscaleConfig::default()).unwrap();
    assert_eq!(upscaler.network().len(), 1);
    upscaler.upscale_file(&input, &output).unwrap();
    let unsupported = upscaler.upscale_file(&input, &bmp);
    let written = Vision::load_image(&output).unwrap().to_rgb8();

    for path in [&model, &input, &output] {
        std::fs::remove_file(path).unwrap();
    }
    assert_eq!(written.dimensions(), (10, 8));
    assert_err!(
        unsupported,
        Error::Vision(VisionError::UnsupportedFormat { .. })
    );
}
