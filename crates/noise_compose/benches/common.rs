use std::time::Duration;

use criterion::{Criterion, Throughput};
use glam::DVec3;
use noise_compose::prelude::{
    module_ref, sample_at, Add, Const, FnModule, Module, ModuleRef, ScaleBias, ScaleBiasParams,
    Select, SelectParams,
};

/// Side length of the sampled square, in world units.
pub const EXTENT: f64 = 256.0;
/// Points per side of the sampling grid.
pub const GRID_RESOLUTION: usize = 64;

// Graph evaluation is a few nanoseconds per node; short runs are stable enough.
pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(30)
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(3))
}

pub fn points_throughput(points: &[DVec3]) -> Throughput {
    Throughput::Elements(points.len().max(1) as u64)
}

/// Cell-centred points on an `n` x `n` grid in the XZ plane.
pub fn generate_grid_points(extent: f64, n: usize) -> Vec<DVec3> {
    let step = extent / n.max(1) as f64;
    let mut pts = Vec::with_capacity(n * n);
    for j in 0..n {
        for i in 0..n {
            pts.push(DVec3::new(
                (i as f64 + 0.5) * step,
                0.0,
                (j as f64 + 0.5) * step,
            ));
        }
    }
    pts
}

/// Cheap smooth stand-in for a coherent noise leaf, ranging over `[-1, 1]`.
pub fn wave() -> ModuleRef {
    module_ref(FnModule::new(|x, _, z| (x * 0.37).sin() * (z * 0.23).cos()))
}

/// Plains below, mountains above, chosen by the wave itself.
///
/// The wave feeds all three select slots, so the graph is diamond-shaped.
pub fn terrain_graph(fall_off: f64) -> ModuleRef {
    let hills = wave();
    let plains = module_ref(ScaleBias::with_source(
        hills.clone(),
        ScaleBiasParams {
            scale: 0.125,
            bias: -0.75,
        },
    ));
    let mountains = module_ref(Add::with_sources(hills.clone(), module_ref(Const::new(0.5))));
    let terrain = Select::from_params(
        SelectParams {
            minimum: 0.0,
            maximum: 1000.0,
            fall_off,
        },
        plains,
        mountains,
        hills,
    )
    .expect("valid bounds");
    module_ref(terrain)
}

/// Sums the graph over all points so the work cannot be optimised away.
pub fn sum_over<M>(module: &M, points: &[DVec3]) -> f64
where
    M: Module + ?Sized,
{
    points
        .iter()
        .map(|&p| sample_at(module, std::hint::black_box(p)))
        .sum()
}
