use super::{
    activations::LifLayer, conv2d::Conv2DLayer, layer::Layer, linear::LinearLayer,
    maxpool::MaxPoolLayer, reshape::FlattenLayer,
};

pub struct Layers;

impl Layers {
    pub fn conv2d(
        in_features: usize,
        out_features: usize,
        kernel: usize,
        stride: usize,
        padding: usize,
    ) -> Box<dyn Layer> {
        Box::new(Conv2DLayer::new(
            in_features,
            out_features,
            kernel,
            stride,
            padding,
        ))
    }

    pub fn maxpool(kernel: usize, stride: usize) -> Box<dyn Layer> {
        Box::new(MaxPoolLayer::new(kernel, stride))
    }

    pub fn lif(beta: f32, threshold: f32) -> Box<dyn Layer> {
        Box::new(LifLayer::new(beta, threshold))
    }

    pub fn flatten() -> Box<dyn Layer> {
        Box::new(FlattenLayer)
    }

    pub fn linear(in_features: usize, out_features: usize) -> Box<dyn Layer> {
        Box::new(LinearLayer::new(in_features, out_features))
    }
}
