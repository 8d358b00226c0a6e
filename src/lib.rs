pub mod error;
pub mod math;

pub use error::{ArgumentError, ArgumentKind, Result};
pub use math::optimization::{
    Argument, ConvexRegion, ConvexifyConfig, Extremum, Method, NumericRange, Objective,
    OptimizeOptions, Optimizer, OptimizerConfig,
};
