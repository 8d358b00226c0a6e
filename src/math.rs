pub mod optimization;

pub use optimization::{
    ConvexRegion, ConvexifyConfig, Extremum, Method, NumericRange, Objective, OptimizeOptions,
    Optimizer, OptimizerConfig,
};
