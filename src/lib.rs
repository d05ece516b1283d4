//! # One-vs-all logistic regression
//!
//! `ova-logistic` provides a pure Rust implementation of multi-class
//! classification via [one-vs-all regularized logistic
//! regression](struct.OneVsAllLogisticRegression.html): one L2-regularized
//! binary logistic classifier is trained per class, and a sample is assigned
//! to the class whose classifier yields the largest score.
//!
//! The feature matrix is expected to carry a constant-1 intercept column as
//! its first column (see [`dataset::intercept_column`]); the parameter at
//! index 0 is then the bias and is excluded from the regularization penalty.
//!
//! ## Examples
//!
//! There is a usage example in the `demos/` directory. To run, use:
//!
//! ```bash
//! $ cargo run --example synthetic
//! ```

pub mod dataset;
pub mod error;
pub mod metrics;

mod float;
mod param;

use crate::dataset::Dataset;
use crate::error::{Error, Result};
use argmin::prelude::*;
use argmin::solver::linesearch::MoreThuenteLineSearch;
use argmin::solver::quasinewton::lbfgs::LBFGS;
use ndarray::{s, Array1, Array2, ArrayBase, Data, Ix2, Zip};
use ndarray_stats::QuantileExt;
use serde::{Deserialize, Serialize};
use std::default::Default;

pub use crate::float::Float;
use crate::param::ParamVec;

/// A one-vs-all (one-vs-rest) regularized logistic regression model.
///
/// Logistic regression combines linear models with the sigmoid function
/// `sigm(z) = 1/(1+exp(-z))` to map the feature space to `(0,1)`. The
/// one-vs-all strategy decomposes a K-class problem into K independent
/// binary problems, one per class, each judged "this class vs. everything
/// else". Training produces a K×(n+1) parameter matrix whose row i is the
/// converged parameter vector of class i's classifier.
///
/// L2 regularization is weighted by `lambda` and applies to every parameter
/// except the bias at index 0. `lambda = 0` degenerates to unregularized
/// logistic regression; negative values are rejected.
///
/// The class enumeration is derived from the targets as the sorted list of
/// distinct labels, or fixed explicitly with [`classes`](Self::classes).
/// Any `Ord + Clone` label type works; labels need not be 0-indexed.
///
/// ## Examples
///
/// ```rust
/// use ndarray::array;
/// use ova_logistic::dataset::Dataset;
/// use ova_logistic::OneVsAllLogisticRegression;
///
/// let records = array![[1.0, -2.0], [1.0, -1.0], [1.0, 1.0], [1.0, 2.0]];
/// let targets = array![1, 1, 2, 2];
/// let dataset = Dataset::new(records, targets).unwrap();
/// let model = OneVsAllLogisticRegression::default()
///     .lambda(0.1)
///     .fit(&dataset)
///     .unwrap();
/// let prediction = model.predict(dataset.records());
/// ```
pub struct OneVsAllLogisticRegression<F: Float, C> {
    lambda: F,
    max_iterations: u64,
    gradient_tolerance: F,
    classes: Option<Vec<C>>,
}

type LBFGSType<F> = LBFGS<MoreThuenteLineSearch<ParamVec<F>, F>, ParamVec<F>, F>;

impl<F: Float, C: Ord + Clone> Default for OneVsAllLogisticRegression<F, C> {
    fn default() -> Self {
        OneVsAllLogisticRegression::new()
    }
}

impl<F: Float, C: Ord + Clone> OneVsAllLogisticRegression<F, C> {
    /// Creates a new OneVsAllLogisticRegression with default configuration.
    pub fn new() -> Self {
        OneVsAllLogisticRegression {
            lambda: F::from(1.0).unwrap(),
            max_iterations: 100,
            gradient_tolerance: F::from(1e-4).unwrap(),
            classes: None,
        }
    }

    /// Set the regularization strength `lambda`, defaults to `1.0`. The bias
    /// parameter is never penalized.
    pub fn lambda(mut self, lambda: F) -> Self {
        self.lambda = lambda;
        self
    }

    /// Configure the maximum number of iterations the solver may perform per
    /// class, defaults to `100`.
    pub fn max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Configure the minimum change to the gradient to continue the solver,
    /// defaults to `1e-4`.
    pub fn gradient_tolerance(mut self, gradient_tolerance: F) -> Self {
        self.gradient_tolerance = gradient_tolerance;
        self
    }

    /// Fix the class enumeration instead of deriving it from the targets.
    ///
    /// The enumeration must be duplicate-free and contain every label that
    /// occurs in the targets. It may list additional labels with no positive
    /// examples; these train as all-negative binary problems. Prediction
    /// output and the parameter-matrix row order follow this enumeration.
    pub fn classes(mut self, classes: Vec<C>) -> Self {
        self.classes = Some(classes);
        self
    }

    /// Given a dataset whose feature matrix has shape (n_samples,
    /// n_features+1), intercept column included, train one binary classifier
    /// per class and collect the converged parameter vectors into a fresh
    /// K×(n_features+1) matrix.
    ///
    /// Each per-class training minimizes the L2-regularized cross-entropy
    /// cost with LBFGS, starting from the zero vector. The per-class
    /// problems are independent: a classifier that stops on the iteration
    /// cap keeps its best iterate and is flagged in that class's
    /// [`ClassifierDiagnostics`] without affecting the other rows.
    ///
    /// This method returns an error if any value in the feature matrix or
    /// the configuration is non-finite, if `lambda` is negative, or if fewer
    /// than two distinct classes are present.
    pub fn fit(&self, dataset: &Dataset<F, C>) -> Result<FittedOneVsAllLogisticRegression<F, C>> {
        let (x, y) = (dataset.records(), dataset.targets());
        self.validate_config()?;
        if x.iter().any(|v| !v.is_finite()) {
            return Err(Error::InvalidValues);
        }
        let classes = self.resolve_classes(y)?;

        let mut params = Array2::zeros((classes.len(), x.ncols()));
        let mut diagnostics = Vec::with_capacity(classes.len());
        for (row, class) in classes.iter().enumerate() {
            let target = binary_target(y, class);
            let (theta, diag) = self.fit_class(x, target)?;
            params.row_mut(row).assign(&theta);
            diagnostics.push(diag);
        }
        Ok(FittedOneVsAllLogisticRegression::new(
            params,
            classes,
            diagnostics,
        ))
    }

    /// Train the binary classifier for a single class and report how the
    /// solver stopped.
    fn fit_class<A: Data<Elem = F>>(
        &self,
        x: &ArrayBase<A, Ix2>,
        target: Array1<F>,
    ) -> Result<(Array1<F>, ClassifierDiagnostics<F>)> {
        let problem = BinaryLogisticProblem {
            x,
            target,
            lambda: self.lambda,
        };
        let solver = self.setup_solver();
        let init_params = ParamVec(Array1::zeros(x.ncols()));
        let result = self.run_solver(problem, solver, init_params)?;

        let state = result.state();
        let diagnostics = ClassifierDiagnostics {
            iterations: state.iter,
            cost: state.best_cost,
            converged: state.iter < self.max_iterations,
        };
        Ok((state.best_param.as_array().clone(), diagnostics))
    }

    /// Ensure all configuration parameters are finite and meaningful.
    fn validate_config(&self) -> Result<()> {
        if !self.lambda.is_finite() {
            return Err(Error::InvalidValues);
        }
        if self.lambda < F::zero() {
            return Err(Error::NegativeRegularization);
        }
        if !self.gradient_tolerance.is_finite() || self.gradient_tolerance <= F::zero() {
            return Err(Error::InvalidGradientTolerance);
        }
        Ok(())
    }

    /// The fixed class enumeration: either the explicitly configured one
    /// (validated against the targets) or the sorted distinct labels.
    fn resolve_classes(&self, y: &Array1<C>) -> Result<Vec<C>> {
        let mut observed = y.to_vec();
        observed.sort();
        observed.dedup();

        let classes = match &self.classes {
            Some(classes) => {
                let mut sorted = classes.clone();
                sorted.sort();
                let len = sorted.len();
                sorted.dedup();
                if sorted.len() != len
                    || observed.iter().any(|c| sorted.binary_search(c).is_err())
                {
                    return Err(Error::InvalidClasses);
                }
                classes.clone()
            }
            None => observed,
        };
        if classes.len() < 2 {
            return Err(Error::TooFewClasses(classes.len()));
        }
        Ok(classes)
    }

    /// Create the LBFGS solver using MoreThuenteLineSearch and set gradient
    /// tolerance.
    fn setup_solver(&self) -> LBFGSType<F> {
        let linesearch = MoreThuenteLineSearch::new();
        LBFGS::new(linesearch, 10).with_tol_grad(self.gradient_tolerance)
    }

    /// Run the LBFGS solver until it converges or runs out of iterations.
    fn run_solver<'a, A: Data<Elem = F>>(
        &self,
        problem: BinaryLogisticProblem<'a, F, A>,
        solver: LBFGSType<F>,
        init_params: ParamVec<F>,
    ) -> Result<ArgminResult<BinaryLogisticProblem<'a, F, A>>> {
        Executor::new(problem, solver, init_params)
            .max_iters(self.max_iterations)
            .run()
            .map_err(|err| err.into())
    }
}

/// The binary target for one class: `1` where the label equals the class,
/// `0` everywhere else.
fn binary_target<F: Float, C: Ord>(y: &Array1<C>, class: &C) -> Array1<F> {
    y.map(|label| if label == class { F::one() } else { F::zero() })
}

/// The logistic function. IEEE arithmetic saturates it toward `0`/`1` on
/// extreme inputs instead of overflowing.
fn sigmoid<F: Float>(z: F) -> F {
    F::one() / (F::one() + (-z).exp())
}

/// `sigmoid(X·theta)` clamped into `[ε, 1−ε]`, ε being the machine epsilon
/// of `F`, so the cross-entropy logarithms stay finite.
fn clamped_activation<F: Float, A: Data<Elem = F>>(
    x: &ArrayBase<A, Ix2>,
    theta: &Array1<F>,
) -> Array1<F> {
    let eps = F::epsilon();
    let hi = F::one() - eps;
    let mut h = x.dot(theta);
    h.mapv_inplace(|z| sigmoid(z).max(eps).min(hi));
    h
}

/// The L2-regularized cross-entropy cost
///
/// `-(1/m)·Σ[y·ln(h) + (1−y)·ln(1−h)] + (λ/2m)·Σ_{j≥1} θ_j²`
///
/// with `h = sigmoid(X·θ)` and the bias `θ_0` exempt from the penalty.
/// Always non-negative: both summands are.
fn logistic_cost<F: Float, A: Data<Elem = F>>(
    x: &ArrayBase<A, Ix2>,
    y: &Array1<F>,
    lambda: F,
    theta: &Array1<F>,
) -> F {
    let m = F::from_usize(x.nrows()).unwrap();
    let one = F::one();
    let h = clamped_activation(x, theta);
    let log_likelihood = Zip::from(&h)
        .and(y)
        .fold(F::zero(), |acc, &h, &y| {
            acc + y * h.ln() + (one - y) * (one - h).ln()
        });
    let penalty = theta
        .slice(s![1..])
        .fold(F::zero(), |acc, &t| acc + t * t);
    -log_likelihood / m + lambda / (F::from(2.0).unwrap() * m) * penalty
}

/// Gradient of [`logistic_cost`]:
///
/// `(1/m)·Xᵀ(h − y)`, plus `(λ/m)·θ_j` on every component except the bias.
fn logistic_gradient<F: Float, A: Data<Elem = F>>(
    x: &ArrayBase<A, Ix2>,
    y: &Array1<F>,
    lambda: F,
    theta: &Array1<F>,
) -> Array1<F> {
    let m = F::from_usize(x.nrows()).unwrap();
    let mut h = x.dot(theta);
    h.mapv_inplace(sigmoid);
    let error = h - y;
    let mut grad = x.t().dot(&error) / m;
    let scale = lambda / m;
    grad.slice_mut(s![1..])
        .zip_mut_with(&theta.slice(s![1..]), |g, &t| *g = *g + scale * t);
    grad
}

/// A fitted one-vs-all logistic regression model which can make predictions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "C: Serialize",
    deserialize = "C: Deserialize<'de>"
))]
pub struct FittedOneVsAllLogisticRegression<F: Float, C: Ord + Clone> {
    params: Array2<F>,
    classes: Vec<C>,
    diagnostics: Vec<ClassifierDiagnostics<F>>,
}

/// How the optimizer stopped for one class's binary classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierDiagnostics<F> {
    /// Iterations the solver performed before stopping.
    pub iterations: u64,
    /// Cost of the best iterate found.
    pub cost: F,
    /// `false` when the solver stopped on the iteration cap instead of the
    /// gradient tolerance. The best iterate is kept either way.
    pub converged: bool,
}

impl<F: Float, C: Ord + Clone> FittedOneVsAllLogisticRegression<F, C> {
    fn new(
        params: Array2<F>,
        classes: Vec<C>,
        diagnostics: Vec<ClassifierDiagnostics<F>>,
    ) -> Self {
        FittedOneVsAllLogisticRegression {
            params,
            classes,
            diagnostics,
        }
    }

    /// The K×(n+1) parameter matrix. Row i holds the parameters of the
    /// classifier trained for `classes()[i]`; it fully determines prediction
    /// behavior and is never mutated after training.
    pub fn params(&self) -> &Array2<F> {
        &self.params
    }

    /// The class enumeration used during training; prediction output uses
    /// these labels.
    pub fn classes(&self) -> &[C] {
        &self.classes
    }

    /// Per-class optimizer diagnostics, in `classes()` order.
    pub fn diagnostics(&self) -> &[ClassifierDiagnostics<F>] {
        &self.diagnostics
    }

    /// Sigmoid-activated per-class scores, one column per class (n_samples ×
    /// n_classes).
    pub fn predict_probabilities<A: Data<Elem = F>>(&self, x: &ArrayBase<A, Ix2>) -> Array2<F> {
        let mut scores = x.dot(&self.params.t());
        scores.mapv_inplace(sigmoid);
        scores
    }

    /// Given a feature matrix, predict the class of each row: the arg-max
    /// across that row's per-class scores, leftmost class winning ties.
    ///
    /// The sigmoid is applied before the arg-max; being monotonic it does
    /// not change the winner, so this matches the raw-score arg-max.
    pub fn predict<A: Data<Elem = F>>(&self, x: &ArrayBase<A, Ix2>) -> Array1<C> {
        assert_eq!(
            x.ncols(),
            self.params.ncols(),
            "Number of data features must match the number of features the model was trained with."
        );

        let scores = self.predict_probabilities(x);
        let mut predicted = Vec::with_capacity(x.nrows());
        for row in scores.rows() {
            let idx = row.argmax().unwrap();
            predicted.push(self.classes[idx].clone());
        }
        Array1::from(predicted)
    }
}

/// Internal representation of one class's binary problem. This data
/// structure exists to be handed to Argmin.
struct BinaryLogisticProblem<'a, F: Float, A: Data<Elem = F>> {
    x: &'a ArrayBase<A, Ix2>,
    target: Array1<F>,
    lambda: F,
}

impl<'a, F: Float, A: Data<Elem = F>> ArgminOp for BinaryLogisticProblem<'a, F, A> {
    type Param = ParamVec<F>;
    type Output = F;
    type Hessian = ();
    type Jacobian = Array1<F>;
    type Float = F;

    /// Apply the cost function to a parameter `p`
    fn apply(&self, p: &Self::Param) -> std::result::Result<Self::Output, argmin::core::Error> {
        let w = p.as_array();
        Ok(logistic_cost(self.x, &self.target, self.lambda, w))
    }

    /// Compute the gradient at parameter `p`.
    fn gradient(&self, p: &Self::Param) -> std::result::Result<Self::Param, argmin::core::Error> {
        let w = p.as_array();
        Ok(ParamVec(logistic_gradient(
            self.x,
            &self.target,
            self.lambda,
            w,
        )))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::metrics::accuracy;
    use approx::{assert_abs_diff_eq, AbsDiffEq};
    use ndarray::array;

    /// Three well-separated 2-D clusters, intercept column prepended,
    /// five samples per class.
    fn cluster_dataset() -> Dataset<f64, usize> {
        let offsets = [
            (-0.5, -0.3),
            (0.4, 0.2),
            (0.1, 0.5),
            (-0.2, 0.4),
            (0.5, -0.1),
        ];
        let centroids = [(0.0, 0.0), (6.0, 0.0), (0.0, 6.0)];
        let mut rows = Vec::new();
        let mut labels = Vec::new();
        for (class, &(cx, cy)) in centroids.iter().enumerate() {
            for &(dx, dy) in &offsets {
                rows.push([1.0, cx + dx, cy + dy]);
                labels.push(class + 1);
            }
        }
        let records = Array2::from_shape_vec(
            (rows.len(), 3),
            rows.iter().flatten().copied().collect(),
        )
        .unwrap();
        Dataset::new(records, Array1::from(labels)).unwrap()
    }

    #[test]
    fn sigmoid_squashes_into_unit_interval() {
        assert_abs_diff_eq!(sigmoid(0.0), 0.5);
        assert_abs_diff_eq!(sigmoid(1000.0), 1.0);
        assert_abs_diff_eq!(sigmoid(-1000.0), 0.0);
        assert!(sigmoid(-2.0) < sigmoid(0.0) && sigmoid(0.0) < sigmoid(2.0));
        assert!(sigmoid(f64::MAX).is_finite() && sigmoid(f64::MIN).is_finite());
    }

    #[test]
    fn cost_at_zero_params_is_ln_two() {
        let x = array![[1.0, 0.0], [1.0, 1.0], [1.0, 2.0], [1.0, 3.0]];
        let y = array![0.0, 0.0, 1.0, 1.0];
        let theta = array![0.0, 0.0];
        assert_abs_diff_eq!(
            logistic_cost(&x, &y, 0.0, &theta),
            2.0_f64.ln(),
            epsilon = 1e-12
        );
        // the penalty of an all-zero parameter vector is zero for any lambda
        assert_abs_diff_eq!(
            logistic_cost(&x, &y, 10.0, &theta),
            2.0_f64.ln(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn cost_is_nonnegative() {
        let x = array![[1.0, -4.0], [1.0, -1.0], [1.0, 2.0], [1.0, 7.0]];
        let y = array![1.0, 0.0, 1.0, 0.0];
        let thetas = [
            array![0.0, 0.0],
            array![3.0, -2.0],
            array![-50.0, 20.0],
            array![1e3, 1e3],
        ];
        for theta in &thetas {
            for &lambda in &[0.0, 1.0, 10.0] {
                let cost: f64 = logistic_cost(&x, &y, lambda, theta);
                assert!(cost >= 0.0 && cost.is_finite(), "cost = {}", cost);
            }
        }
    }

    #[test]
    fn penalty_excludes_bias() {
        let x = array![[1.0, 0.5, -1.0], [1.0, -0.5, 2.0], [1.0, 1.5, 0.0], [1.0, 0.0, 1.0]];
        let y = array![1.0, 0.0, 1.0, 0.0];
        let lambda = 3.0;
        let m = 4.0;

        // changing only the bias must not change the penalty term
        let theta_a = array![5.0, 1.0, 2.0];
        let theta_b = array![-3.0, 1.0, 2.0];
        let penalty_a = logistic_cost(&x, &y, lambda, &theta_a) - logistic_cost(&x, &y, 0.0, &theta_a);
        let penalty_b = logistic_cost(&x, &y, lambda, &theta_b) - logistic_cost(&x, &y, 0.0, &theta_b);
        assert_abs_diff_eq!(penalty_a, penalty_b, epsilon = 1e-12);
        assert_abs_diff_eq!(
            penalty_a,
            lambda / (2.0 * m) * (1.0 + 4.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn gradient_matches_finite_differences() {
        let x = array![
            [1.0, 0.5, -1.2],
            [1.0, -0.7, 0.3],
            [1.0, 1.1, 0.8],
            [1.0, -0.2, -0.5],
            [1.0, 0.9, 1.4]
        ];
        let y = array![1.0, 0.0, 1.0, 0.0, 0.0];
        let theta = array![0.1, -0.3, 0.7];
        let lambda = 1.3;
        let h = 1e-6;

        let analytic = logistic_gradient(&x, &y, lambda, &theta);
        for j in 0..theta.len() {
            let mut plus = theta.clone();
            plus[j] += h;
            let mut minus = theta.clone();
            minus[j] -= h;
            let numeric = (logistic_cost(&x, &y, lambda, &plus)
                - logistic_cost(&x, &y, lambda, &minus))
                / (2.0 * h);
            assert_abs_diff_eq!(analytic[j], numeric, epsilon = 1e-6);
        }
    }

    #[test]
    fn gradient_regularization_skips_bias() {
        let x = array![[1.0, 2.0], [1.0, -1.0], [1.0, 0.5]];
        let y = array![1.0, 0.0, 1.0];
        let theta = array![0.4, -1.5];
        let lambda = 2.0;
        let m = 3.0;

        let plain = logistic_gradient(&x, &y, 0.0, &theta);
        let regularized = logistic_gradient(&x, &y, lambda, &theta);
        assert_abs_diff_eq!(regularized[0], plain[0], epsilon = 1e-12);
        assert_abs_diff_eq!(
            regularized[1] - plain[1],
            lambda / m * theta[1],
            epsilon = 1e-12
        );
    }

    #[test]
    fn per_class_rows_are_independent() {
        let dataset = cluster_dataset();
        let multi = OneVsAllLogisticRegression::default()
            .lambda(0.1)
            .max_iterations(50)
            .fit(&dataset)
            .unwrap();

        // the same binary problem, posed without the third class in sight
        let binary_targets = dataset.targets().map(|&l| if l == 1 { 1 } else { 0 });
        let binary = OneVsAllLogisticRegression::default()
            .lambda(0.1)
            .max_iterations(50)
            .fit(&Dataset::new(dataset.records().clone(), binary_targets).unwrap())
            .unwrap();

        // class 1 is row 0 of the multi-class model and row 1 of the binary
        // model (classes sorted as [0, 1])
        assert!(multi
            .params()
            .row(0)
            .abs_diff_eq(&binary.params().row(1), 1e-12));
    }

    #[test]
    fn predictor_takes_leftmost_argmax() {
        let params = array![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        let diag = ClassifierDiagnostics {
            iterations: 1,
            cost: 0.0,
            converged: true,
        };
        let model = FittedOneVsAllLogisticRegression::new(
            params,
            vec![10, 20, 30],
            vec![diag.clone(), diag.clone(), diag],
        );

        // scores of each row against the identity rows are the row itself
        let x = array![[0.1, 0.9, 0.3], [0.7, 0.7, 0.1]];
        let predicted = model.predict(&x);
        assert_eq!(predicted, array![20, 10]);
    }

    #[test]
    fn separable_clusters_reach_high_training_accuracy() {
        let dataset = cluster_dataset();
        let model = OneVsAllLogisticRegression::default()
            .lambda(0.1)
            .fit(&dataset)
            .unwrap();

        let predicted = model.predict(dataset.records());
        let acc = accuracy(&predicted, dataset.targets()).unwrap();
        assert!(acc >= 0.95, "training accuracy {}", acc);

        assert_eq!(model.params().dim(), (3, 3));
        assert_eq!(model.classes(), &[1, 2, 3]);
        assert_eq!(model.diagnostics().len(), 3);

        // prediction is a pure function of (params, x)
        assert_eq!(predicted, model.predict(dataset.records()));
    }

    #[test]
    fn degenerate_class_trains_without_positives() {
        let records: Array2<f64> = array![[1.0, -1.0], [1.0, -0.5], [1.0, 0.5], [1.0, 1.0]];
        let targets = array![1, 1, 2, 2];
        let dataset = Dataset::new(records, targets).unwrap();
        let model = OneVsAllLogisticRegression::default()
            .lambda(0.1)
            .classes(vec![1, 2, 3])
            .fit(&dataset)
            .unwrap();

        assert_eq!(model.params().nrows(), 3);
        assert!(model.diagnostics()[2].cost.is_finite());
        let predicted = model.predict(dataset.records());
        assert_eq!(predicted, *dataset.targets());
    }

    #[test]
    fn reports_non_convergence_under_tight_iteration_cap() {
        let dataset = cluster_dataset();
        let model = OneVsAllLogisticRegression::default()
            .lambda(0.1)
            .max_iterations(1)
            .fit(&dataset)
            .unwrap();
        assert!(model.diagnostics().iter().all(|d| !d.converged));
        assert!(model.diagnostics().iter().all(|d| d.cost.is_finite()));
    }

    #[test]
    fn works_with_f32() {
        let records: Array2<f32> = array![[1.0, -2.0], [1.0, -1.0], [1.0, 1.0], [1.0, 2.0]];
        let targets = array![1, 1, 2, 2];
        let dataset = Dataset::new(records, targets).unwrap();
        let model = OneVsAllLogisticRegression::default()
            .lambda(0.01_f32)
            .fit(&dataset)
            .unwrap();
        assert_eq!(model.predict(dataset.records()), *dataset.targets());
    }

    #[test]
    fn rejects_negative_lambda() {
        let dataset = cluster_dataset();
        let res = OneVsAllLogisticRegression::default()
            .lambda(-0.5)
            .fit(&dataset);
        assert_eq!(
            res.unwrap_err().to_string(),
            "The regularization strength `lambda` must be non-negative"
        );
    }

    #[test]
    fn rejects_non_finite_values() {
        for bad in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let records = array![[1.0, bad], [1.0, 1.0]];
            let dataset = Dataset::new(records, array![1, 2]).unwrap();
            let res = OneVsAllLogisticRegression::default().fit(&dataset);
            assert_eq!(
                res.unwrap_err().to_string(),
                "Values must be finite and not `Inf`, `-Inf` or `NaN`"
            );

            let dataset = cluster_dataset();
            let res = OneVsAllLogisticRegression::default().lambda(bad).fit(&dataset);
            assert!(res.is_err());
        }
    }

    #[test]
    fn rejects_invalid_gradient_tolerance() {
        let dataset = cluster_dataset();
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let res = OneVsAllLogisticRegression::default()
                .gradient_tolerance(bad)
                .fit(&dataset);
            assert_eq!(
                res.unwrap_err().to_string(),
                "gradient_tolerance must be a positive, finite number"
            );
        }
    }

    #[test]
    fn rejects_single_class() {
        let records = array![[1.0, 0.0], [1.0, 1.0]];
        let dataset = Dataset::new(records, array![7, 7]).unwrap();
        let res = OneVsAllLogisticRegression::default().fit(&dataset);
        assert_eq!(
            res.unwrap_err().to_string(),
            "Expected at least two distinct classes, got 1"
        );
    }

    #[test]
    fn rejects_bad_explicit_enumerations() {
        let records = array![[1.0, 0.0], [1.0, 1.0], [1.0, 2.0]];
        let dataset = Dataset::new(records, array![1, 2, 3]).unwrap();

        // duplicate entry
        let res = OneVsAllLogisticRegression::default()
            .classes(vec![1, 1, 2, 3])
            .fit(&dataset);
        assert!(res.is_err());

        // label 3 occurs in the targets but not in the enumeration
        let res = OneVsAllLogisticRegression::default()
            .classes(vec![1, 2])
            .fit(&dataset);
        assert_eq!(
            res.unwrap_err().to_string(),
            "The class enumeration must be duplicate-free and cover every label in the targets"
        );
    }
}
