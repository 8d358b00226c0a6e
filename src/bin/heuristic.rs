use extremum::{ConvexifyConfig, Method, NumericRange, OptimizeOptions, Optimizer, OptimizerConfig};

// Adjustable as wished.
const ALPHA: f64 = 10.0;
const BETA: f64 = 1.0;

fn heuristic(x: f64) -> f64 {
    -ALPHA * x / (x.powi(2) + 1.0) + BETA / x
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Larger learning rate than the default for this function
    let mut optimizer = Optimizer::new(heuristic).with_config(OptimizerConfig {
        label: "Heuristic approach".to_string(),
        alpha: 0.1,
        ..OptimizerConfig::default()
    });

    println!("{optimizer}");

    let region = optimizer.convexify(
        &NumericRange::new(1.0, 3.0, 0.1)?,
        &ConvexifyConfig::default(),
    )?;
    println!("A convex range: {:?}", region.into_range().to_vec());

    optimizer.optimize(Method::Newton, &OptimizeOptions::starting_at(1.0))?;
    optimizer.optimize(
        Method::Gradient,
        &OptimizeOptions::starting_at(2.0).iterations(30),
    )?;
    optimizer.optimize(
        Method::Golden,
        &OptimizeOptions::over(NumericRange::new(0.0, 5.0, 0.1)?),
    )?;

    println!("Found extrema points:");
    for extremum in optimizer.extrema() {
        println!("  {extremum}");
    }
    Ok(())
}
