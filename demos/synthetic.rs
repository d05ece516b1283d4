use ndarray::{Array1, Array2};
use ova_logistic::dataset::Dataset;
use ova_logistic::metrics::accuracy;
use ova_logistic::OneVsAllLogisticRegression;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // three well-separated clusters in 2-D, intercept column at index 0
    let mut rng = SmallRng::seed_from_u64(42);
    let centroids = [(0.0, 0.0), (8.0, 0.0), (0.0, 8.0)];
    let nsamples = 60;

    let mut records = Array2::ones((nsamples, 3));
    let mut labels = Vec::with_capacity(nsamples);
    for row in 0..nsamples {
        let class = row % centroids.len();
        let (cx, cy) = centroids[class];
        records[(row, 1)] = cx + rng.gen_range(-1.0..1.0);
        records[(row, 2)] = cy + rng.gen_range(-1.0..1.0);
        labels.push(class + 1);
    }
    let dataset = Dataset::new(records, Array1::from(labels))?;

    println!(
        "Fit one-vs-all logistic regression with #{} training points and {} classes",
        dataset.nsamples(),
        centroids.len()
    );

    let model = OneVsAllLogisticRegression::default()
        .lambda(0.1)
        .max_iterations(200)
        .fit(&dataset)?;

    for (class, diag) in model.classes().iter().zip(model.diagnostics()) {
        println!(
            "class {}: {} iterations, cost {:.6}, converged: {}",
            class, diag.iterations, diag.cost, diag.converged
        );
    }

    let predicted = model.predict(dataset.records());
    println!(
        "training accuracy {}",
        accuracy(&predicted, dataset.targets())?
    );

    Ok(())
}
